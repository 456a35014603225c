// src/cvm/encoder/mod.rs
use crate::cvm::arch::RECORD_SIZE;
use crate::cvm::instruction::{Instruction, Word};
use crate::cvm::program::Program;

/// One fixed-size instruction slot as it sits in a program image.
///
/// Layout, little-endian: `tag: u32`, four zero bytes, `operand: i64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record {
    pub tag: u32,
    pub operand: Word,
}

impl Record {
    pub fn to_bytes(self) -> [u8; RECORD_SIZE] {
        let mut out = [0u8; RECORD_SIZE];
        out[0..4].copy_from_slice(&self.tag.to_le_bytes());
        out[8..16].copy_from_slice(&self.operand.to_le_bytes());
        out
    }
}

pub fn encode(inst: Instruction) -> Record {
    Record {
        tag: inst.opcode().tag(),
        operand: inst.operand().unwrap_or(0),
    }
}

/// Records back to back, no header.
pub fn serialize(program: &Program) -> Vec<u8> {
    let mut out = Vec::with_capacity(program.len() * RECORD_SIZE);
    for &inst in program {
        out.extend_from_slice(&encode(inst).to_bytes());
    }
    out
}
