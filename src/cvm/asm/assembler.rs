use tracing::debug;

use crate::cvm::instruction::{Instruction, Opcode, Word};
use crate::cvm::program::Program;

use super::errors::{AsmError, AsmErrorKind};
use super::symbols::Symbols;
use super::utils::*;

// ---------- API ----------
pub fn assemble(text: &str) -> Result<Program, AsmError> {
    let (program, symbols) = scan(text)?;
    resolve(program, &symbols)
}

/// 1st pass: emit instructions, record labels, and leave every symbolic jump
/// pointing at itself until `resolve` patches it.
pub fn scan(text: &str) -> Result<(Program, Symbols), AsmError> {
    let mut program = Program::new();
    let mut symbols = Symbols::new();

    for (line_no, line) in preprocess(text) {
        let err = |kind| AsmError::new(line_no, kind);
        let Tokens {
            head,
            operand,
            rest,
        } = tokenize(line);

        if let Some(name) = label_name(head) {
            if let Some(extra) = operand {
                return Err(err(AsmErrorKind::MalformedLine(extra.to_string())));
            }
            let addr = program.len() as Word;
            symbols.declare(name, addr).map_err(err)?;
            debug!(label = name, addr, "label declared");
            continue;
        }

        if let Some(extra) = rest {
            return Err(err(AsmErrorKind::MalformedLine(extra.to_string())));
        }
        let op = Opcode::from_mnemonic(head)
            .ok_or_else(|| err(AsmErrorKind::UnknownOperation(head.to_string())))?;
        let index = program.len();

        let inst = match (op.takes_operand(), operand) {
            (false, None) => Instruction::from_parts(op, 0),
            (false, Some(extra)) => {
                return Err(err(AsmErrorKind::MalformedLine(extra.to_string())));
            }
            (true, None) => {
                return Err(err(AsmErrorKind::MissingOperand(head.to_lowercase())));
            }
            (true, Some(tok)) if op.is_jump() => match parse_word(tok) {
                Some(addr) => Instruction::from_parts(op, addr),
                None => {
                    symbols.defer(index, tok, line_no).map_err(err)?;
                    Instruction::from_parts(op, index as Word)
                }
            },
            (true, Some(tok)) => {
                let v = parse_word(tok)
                    .ok_or_else(|| err(AsmErrorKind::InvalidInteger(tok.to_string())))?;
                Instruction::from_parts(op, v)
            }
        };

        program
            .push(inst)
            .map_err(|e| err(AsmErrorKind::ProgramTooLarge(e.capacity)))?;
    }

    Ok((program, symbols))
}

/// 2nd pass: overwrite each pending jump with its label's address.
pub fn resolve(mut program: Program, symbols: &Symbols) -> Result<Program, AsmError> {
    for jump in symbols.jumps() {
        let addr = symbols.lookup(&jump.label).ok_or_else(|| {
            AsmError::new(jump.line, AsmErrorKind::UnresolvedLabel(jump.label.clone()))
        })?;
        let patched = program
            .get_mut(jump.index)
            .is_some_and(|inst| inst.set_target(addr));
        debug_assert!(patched, "pending jump at {} is not a jump", jump.index);
        debug!(label = %jump.label, at = jump.index, addr, "jump resolved");
    }
    Ok(program)
}
