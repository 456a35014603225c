use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::instruction::Word;

/// Runtime faults raised by the execution engine.
///
/// A trap leaves the machine exactly as it was before the faulting step.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trap {
    #[error("Stack overflow")]
    StackOverflow,

    #[error("Stack underflow")]
    StackUnderflow,

    /// Negative DUP depth, or a depth reaching past the bottom of the stack.
    #[error("Illegal operand {0}")]
    IllegalOperand(Word),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Illegal instruction (opcode tag {tag})")]
    IllegalInstruction { tag: u32 },

    #[error("Illegal instruction access at ip {ip}")]
    IllegalInstructionAccess { ip: Word },

    /// PRINT_DEBUG could not write to the output sink.
    #[error("Output failed: {0}")]
    Output(io::ErrorKind),
}

/// A record whose tag names no opcode.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    #[error("unknown opcode tag {tag}")]
    UnknownOpcode { tag: u32 },
}

/// Errors loading or storing binary program images.
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("could not read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("image length {len} is not a multiple of the {record}-byte record size")]
    Misaligned { len: usize, record: usize },

    #[error("image holds {count} instructions, capacity is {capacity}")]
    TooManyInstructions { count: usize, capacity: usize },

    #[error("record {index}: illegal instruction (opcode tag {tag})")]
    IllegalInstruction { index: usize, tag: u32 },
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("capacity of {capacity} exceeded")]
pub struct CapacityExceeded {
    pub capacity: usize,
}
