use std::io::{self, Write};

use crate::cvm::instruction::Word;

/// Writes the stack bottom to top under a `Stack:` header.
pub fn dump_stack<W: Write>(out: &mut W, stack: &[Word]) -> io::Result<()> {
    writeln!(out, "Stack:")?;
    if stack.is_empty() {
        writeln!(out, "[Empty]")?;
    } else {
        for v in stack {
            writeln!(out, "{v}")?;
        }
    }
    writeln!(out)
}
