// cvm/instruction.rs
use std::fmt;

use super::arch::*;

/// The machine's only value type: stack slots, operands and addresses.
pub type Word = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    Nop,
    Push,
    Dup,
    Plus,
    Minus,
    Mult,
    Div,
    Jmp,
    JmpIf,
    Eq,
    Halt,
    PrintDebug,
}

impl Opcode {
    pub const ALL: [Opcode; 12] = [
        Opcode::Nop,
        Opcode::Push,
        Opcode::Dup,
        Opcode::Plus,
        Opcode::Minus,
        Opcode::Mult,
        Opcode::Div,
        Opcode::Jmp,
        Opcode::JmpIf,
        Opcode::Eq,
        Opcode::Halt,
        Opcode::PrintDebug,
    ];

    pub fn tag(self) -> u32 {
        match self {
            Opcode::Nop => OPC_NOP,
            Opcode::Push => OPC_PUSH,
            Opcode::Dup => OPC_DUP,
            Opcode::Plus => OPC_PLUS,
            Opcode::Minus => OPC_MINUS,
            Opcode::Mult => OPC_MULT,
            Opcode::Div => OPC_DIV,
            Opcode::Jmp => OPC_JMP,
            Opcode::JmpIf => OPC_JMP_IF,
            Opcode::Eq => OPC_EQ,
            Opcode::Halt => OPC_HALT,
            Opcode::PrintDebug => OPC_PRINT_DEBUG,
        }
    }

    pub fn from_tag(tag: u32) -> Option<Opcode> {
        Opcode::ALL.into_iter().find(|op| op.tag() == tag)
    }

    /// Listing name, as printed by the disassembler.
    pub fn name(self) -> &'static str {
        match self {
            Opcode::Nop => "NOP",
            Opcode::Push => "PUSH",
            Opcode::Dup => "DUP",
            Opcode::Plus => "PLUS",
            Opcode::Minus => "MINUS",
            Opcode::Mult => "MULT",
            Opcode::Div => "DIV",
            Opcode::Jmp => "JMP",
            Opcode::JmpIf => "JMP_IF",
            Opcode::Eq => "EQ",
            Opcode::Halt => "HALT",
            Opcode::PrintDebug => "PRINT_DEBUG",
        }
    }

    /// Source mnemonic. Matching is case-insensitive.
    pub fn from_mnemonic(s: &str) -> Option<Opcode> {
        Opcode::ALL
            .into_iter()
            .find(|op| op.name().eq_ignore_ascii_case(s))
    }

    pub fn takes_operand(self) -> bool {
        matches!(
            self,
            Opcode::Push | Opcode::Dup | Opcode::Jmp | Opcode::JmpIf
        )
    }

    pub fn is_jump(self) -> bool {
        matches!(self, Opcode::Jmp | Opcode::JmpIf)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Nop,
    Push(Word),
    /// Copy the element `n` slots below the top.
    Dup(Word),
    Plus,
    Minus,
    Mult,
    Div,
    Jmp(Word),
    JmpIf(Word),
    Eq,
    Halt,
    PrintDebug,
}

impl Instruction {
    /// Builds an operand-less instruction. `None` if `op` needs an operand.
    pub fn bare(op: Opcode) -> Option<Instruction> {
        use Instruction::*;
        Some(match op {
            Opcode::Nop => Nop,
            Opcode::Plus => Plus,
            Opcode::Minus => Minus,
            Opcode::Mult => Mult,
            Opcode::Div => Div,
            Opcode::Eq => Eq,
            Opcode::Halt => Halt,
            Opcode::PrintDebug => PrintDebug,
            Opcode::Push | Opcode::Dup | Opcode::Jmp | Opcode::JmpIf => return None,
        })
    }

    /// Builds an operand-carrying instruction. `None` if `op` takes no operand.
    pub fn with_operand(op: Opcode, operand: Word) -> Option<Instruction> {
        use Instruction::*;
        Some(match op {
            Opcode::Push => Push(operand),
            Opcode::Dup => Dup(operand),
            Opcode::Jmp => Jmp(operand),
            Opcode::JmpIf => JmpIf(operand),
            Opcode::Nop
            | Opcode::Plus
            | Opcode::Minus
            | Opcode::Mult
            | Opcode::Div
            | Opcode::Eq
            | Opcode::Halt
            | Opcode::PrintDebug => return None,
        })
    }

    /// Rebuilds an instruction from a tag's opcode and a raw operand slot.
    /// The slot is dropped for opcodes that carry no operand.
    pub fn from_parts(op: Opcode, operand: Word) -> Instruction {
        use Instruction::*;
        match op {
            Opcode::Nop => Nop,
            Opcode::Push => Push(operand),
            Opcode::Dup => Dup(operand),
            Opcode::Plus => Plus,
            Opcode::Minus => Minus,
            Opcode::Mult => Mult,
            Opcode::Div => Div,
            Opcode::Jmp => Jmp(operand),
            Opcode::JmpIf => JmpIf(operand),
            Opcode::Eq => Eq,
            Opcode::Halt => Halt,
            Opcode::PrintDebug => PrintDebug,
        }
    }

    pub fn opcode(&self) -> Opcode {
        use Instruction::*;
        match self {
            Nop => Opcode::Nop,
            Push(_) => Opcode::Push,
            Dup(_) => Opcode::Dup,
            Plus => Opcode::Plus,
            Minus => Opcode::Minus,
            Mult => Opcode::Mult,
            Div => Opcode::Div,
            Jmp(_) => Opcode::Jmp,
            JmpIf(_) => Opcode::JmpIf,
            Eq => Opcode::Eq,
            Halt => Opcode::Halt,
            PrintDebug => Opcode::PrintDebug,
        }
    }

    pub fn operand(&self) -> Option<Word> {
        use Instruction::*;
        match *self {
            Push(v) | Dup(v) | Jmp(v) | JmpIf(v) => Some(v),
            _ => None,
        }
    }

    /// Points a jump at `addr`. Returns `false` for anything that is not a jump.
    pub fn set_target(&mut self, addr: Word) -> bool {
        match self {
            Instruction::Jmp(t) | Instruction::JmpIf(t) => {
                *t = addr;
                true
            }
            _ => false,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.operand() {
            Some(v) => write!(f, "{} {}", self.opcode().name(), v),
            None => f.write_str(self.opcode().name()),
        }
    }
}
