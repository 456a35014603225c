use crate::cvm::arch::{MAX_JUMPS, MAX_LABELS, MAX_LABEL_LENGTH};
use crate::cvm::bounded::Bounded;
use crate::cvm::instruction::Word;

use super::errors::AsmErrorKind;
use super::utils::parse_word;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub name: String,
    pub addr: Word,
}

/// A jump whose operand still holds a placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingJump {
    /// Address of the jump instruction.
    pub index: usize,
    pub label: String,
    /// Source line, for error reporting.
    pub line: usize,
}

/// Per-assembly symbol state: declared labels and unresolved jumps.
///
/// Built by `scan`, consumed by `resolve`.
#[derive(Debug, Clone)]
pub struct Symbols {
    labels: Bounded<Label>,
    jumps: Bounded<PendingJump>,
}

impl Default for Symbols {
    fn default() -> Self {
        Self::new()
    }
}

impl Symbols {
    pub fn new() -> Self {
        Self {
            labels: Bounded::new(MAX_LABELS),
            jumps: Bounded::new(MAX_JUMPS),
        }
    }

    pub(crate) fn declare(&mut self, name: &str, addr: Word) -> Result<(), AsmErrorKind> {
        if self.labels.is_full() {
            return Err(AsmErrorKind::TooManyLabels(MAX_LABELS));
        }
        // the limit counts the trailing ':'
        if name.len() + 1 >= MAX_LABEL_LENGTH {
            return Err(AsmErrorKind::LabelTooLong {
                name: name.to_string(),
                limit: MAX_LABEL_LENGTH,
            });
        }
        if name.is_empty() || name.contains(':') || parse_word(name).is_some() {
            return Err(AsmErrorKind::InvalidLabel(name.to_string()));
        }
        if self.lookup(name).is_some() {
            return Err(AsmErrorKind::DuplicateLabel(name.to_string()));
        }
        self.labels
            .push(Label {
                name: name.to_string(),
                addr,
            })
            .map_err(|e| AsmErrorKind::TooManyLabels(e.capacity))
    }

    pub(crate) fn defer(&mut self, index: usize, label: &str, line: usize) -> Result<(), AsmErrorKind> {
        self.jumps
            .push(PendingJump {
                index,
                label: label.to_string(),
                line,
            })
            .map_err(|e| AsmErrorKind::TooManyJumps(e.capacity))
    }

    pub fn lookup(&self, name: &str) -> Option<Word> {
        self.labels.iter().find(|l| l.name == name).map(|l| l.addr)
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn jumps(&self) -> &[PendingJump] {
        &self.jumps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_label_is_rejected() {
        let mut s = Symbols::new();
        s.declare("loop", 0).unwrap();
        assert_eq!(
            s.declare("loop", 3),
            Err(AsmErrorKind::DuplicateLabel("loop".into()))
        );
        assert_eq!(s.lookup("loop"), Some(0));
    }

    #[test]
    fn label_length_limit() {
        let mut s = Symbols::new();
        let ok = "a".repeat(MAX_LABEL_LENGTH - 2);
        let long = "a".repeat(MAX_LABEL_LENGTH - 1);
        assert!(s.declare(&ok, 0).is_ok());
        assert!(matches!(
            s.declare(&long, 0),
            Err(AsmErrorKind::LabelTooLong { .. })
        ));
    }

    #[test]
    fn numeric_and_empty_names_are_invalid() {
        let mut s = Symbols::new();
        assert_eq!(s.declare("12", 0), Err(AsmErrorKind::InvalidLabel("12".into())));
        assert_eq!(s.declare("", 0), Err(AsmErrorKind::InvalidLabel("".into())));
        assert!(s.labels().is_empty());
    }

    #[test]
    fn tables_are_bounded() {
        let mut s = Symbols::new();
        for i in 0..MAX_LABELS {
            s.declare(&format!("l{i}"), i as Word).unwrap();
        }
        assert_eq!(
            s.declare("extra", 0),
            Err(AsmErrorKind::TooManyLabels(MAX_LABELS))
        );
        for i in 0..MAX_JUMPS {
            s.defer(i, "l0", i).unwrap();
        }
        assert_eq!(s.defer(0, "l0", 0), Err(AsmErrorKind::TooManyJumps(MAX_JUMPS)));
        assert_eq!(s.jumps().len(), MAX_JUMPS);
    }
}
