// cvm/machine.rs
use super::arch::{PROGRAM_CAPACITY, STACK_CAPACITY};
use super::bounded::Bounded;
use super::decoder::read_records;
use super::encoder::{encode, Record};
use super::errors::{CodecError, Trap};
use super::instruction::Word;
use super::program::Program;

/// Machine state: value stack, code image, instruction pointer.
///
/// Code is kept as raw records and decoded at fetch, so an image with a bad
/// tag loads fine and traps only when that slot is executed.
#[derive(Debug, Clone)]
pub struct Machine {
    stack: Bounded<Word>,
    code: Vec<Record>,
    pub ip: Word,
    pub halted: bool,
    /// Charged steps since construction.
    pub steps: u64,
}

impl Machine {
    pub fn new(program: &Program) -> Self {
        Self::with_code(program.iter().map(|&inst| encode(inst)).collect())
    }

    pub fn from_image(bytes: &[u8]) -> Result<Self, CodecError> {
        Ok(Self::with_code(read_records(bytes)?))
    }

    fn with_code(code: Vec<Record>) -> Self {
        debug_assert!(code.len() <= PROGRAM_CAPACITY);
        Self {
            stack: Bounded::new(STACK_CAPACITY),
            code,
            ip: 0,
            halted: false,
            steps: 0,
        }
    }

    pub fn program_size(&self) -> usize {
        self.code.len()
    }

    /// Bottom first.
    pub fn stack(&self) -> &[Word] {
        &self.stack
    }

    pub(crate) fn fetch(&self) -> Result<Record, Trap> {
        usize::try_from(self.ip)
            .ok()
            .and_then(|i| self.code.get(i).copied())
            .ok_or(Trap::IllegalInstructionAccess { ip: self.ip })
    }

    // --- stack primitives used by exec; callers check preconditions first ---

    pub(crate) fn stack_is_full(&self) -> bool {
        self.stack.is_full()
    }

    pub(crate) fn require(&self, n: usize) -> Result<(), Trap> {
        if self.stack.len() < n {
            Err(Trap::StackUnderflow)
        } else {
            Ok(())
        }
    }

    pub(crate) fn push(&mut self, v: Word) -> Result<(), Trap> {
        self.stack.push(v).map_err(|_| Trap::StackOverflow)
    }

    pub(crate) fn pop(&mut self) -> Result<Word, Trap> {
        self.stack.pop().ok_or(Trap::StackUnderflow)
    }

    /// Element `depth` slots below the top.
    pub(crate) fn peek(&self, depth: usize) -> Option<Word> {
        let len = self.stack.len();
        if depth < len {
            Some(self.stack[len - 1 - depth])
        } else {
            None
        }
    }
}
