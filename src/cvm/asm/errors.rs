use std::fmt;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AsmErrorKind {
    #[error("duplicated label '{0}'")]
    DuplicateLabel(String),

    #[error("label '{name}' too long (limit {limit})")]
    LabelTooLong { name: String, limit: usize },

    #[error("invalid label name '{0}'")]
    InvalidLabel(String),

    #[error("too many labels (limit {0})")]
    TooManyLabels(usize),

    #[error("too many jumps (limit {0})")]
    TooManyJumps(usize),

    #[error("program exceeds {0} instructions")]
    ProgramTooLarge(usize),

    #[error("unknown operation '{0}'")]
    UnknownOperation(String),

    #[error("unexpected '{0}'")]
    MalformedLine(String),

    #[error("'{0}' expects an operand")]
    MissingOperand(String),

    #[error("invalid integer '{0}'")]
    InvalidInteger(String),

    #[error("unresolved label '{0}'")]
    UnresolvedLabel(String),
}

/// An assembly failure and the 0-based source line it happened on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsmError {
    pub line: usize,
    pub kind: AsmErrorKind,
}

impl AsmError {
    pub fn new(line: usize, kind: AsmErrorKind) -> Self {
        Self { line, kind }
    }
}

impl fmt::Display for AsmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line + 1, self.kind)
    }
}

impl std::error::Error for AsmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}
