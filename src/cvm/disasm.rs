use std::fmt::Write;

use crate::cvm::program::Program;

/// One instruction per line, in program order. The text assembles back to
/// the same program.
pub fn disassemble(program: &Program) -> String {
    let mut out = String::new();
    for inst in program {
        let _ = writeln!(out, "{inst}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cvm::asm::assemble;
    use crate::cvm::instruction::Instruction::*;

    #[test]
    fn listing_format() {
        let p = Program::from_instructions([Nop, Push(-2), Dup(1), JmpIf(0), Eq, Halt, PrintDebug]).unwrap();
        assert_eq!(
            disassemble(&p),
            "NOP\nPUSH -2\nDUP 1\nJMP_IF 0\nEQ\nHALT\nPRINT_DEBUG\n"
        );
    }

    #[test]
    fn empty_program_lists_nothing() {
        assert_eq!(disassemble(&Program::new()), "");
    }

    #[test]
    fn listing_reassembles() {
        let src = "top:\npush 10\ndup 0\npush 0\neq\njmp_if out\npush 1\nminus\njmp top\nout:\nhalt";
        let first = assemble(src).unwrap();
        let second = assemble(&disassemble(&first)).unwrap();
        assert_eq!(first, second);
    }
}
