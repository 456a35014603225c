pub mod loader;

pub use loader::{load_program, read_image, save_program};

use super::arch::PROGRAM_CAPACITY;
use super::bounded::Bounded;
use super::errors::CapacityExceeded;
use super::instruction::Instruction;

/// An ordered, capacity-bounded instruction sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    code: Bounded<Instruction>,
}

impl Default for Program {
    fn default() -> Self {
        Self::new()
    }
}

impl Program {
    pub fn new() -> Self {
        Self {
            code: Bounded::new(PROGRAM_CAPACITY),
        }
    }

    pub fn from_instructions<I>(insts: I) -> Result<Self, CapacityExceeded>
    where
        I: IntoIterator<Item = Instruction>,
    {
        let mut program = Program::new();
        for inst in insts {
            program.push(inst)?;
        }
        Ok(program)
    }

    /// Appends an instruction and returns its address.
    pub fn push(&mut self, inst: Instruction) -> Result<usize, CapacityExceeded> {
        let index = self.code.len();
        self.code.push(inst)?;
        Ok(index)
    }

    pub fn len(&self) -> usize {
        self.code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Instruction> {
        self.code.get(index)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Instruction> {
        self.code.get_mut(index)
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.code
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Instruction> {
        self.code.iter()
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Instruction;
    type IntoIter = std::slice::Iter<'a, Instruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_returns_addresses_in_order() {
        let mut p = Program::new();
        assert_eq!(p.push(Instruction::Push(1)), Ok(0));
        assert_eq!(p.push(Instruction::Halt), Ok(1));
        assert_eq!(p.len(), 2);
        assert_eq!(p.get(1), Some(&Instruction::Halt));
    }

    #[test]
    fn capacity_is_enforced() {
        let full = std::iter::repeat(Instruction::Nop).take(PROGRAM_CAPACITY);
        let mut p = Program::from_instructions(full).unwrap();
        assert_eq!(
            p.push(Instruction::Halt),
            Err(CapacityExceeded {
                capacity: PROGRAM_CAPACITY
            })
        );
        assert!(Program::from_instructions(vec![Instruction::Nop; PROGRAM_CAPACITY + 1]).is_err());
    }
}
