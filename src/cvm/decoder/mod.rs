use crate::cvm::arch::{PROGRAM_CAPACITY, RECORD_SIZE};
use crate::cvm::encoder::Record;
use crate::cvm::errors::{CodecError, DecodeError};
use crate::cvm::instruction::{Instruction, Opcode, Word};
use crate::cvm::program::Program;

#[inline]
fn read_record(chunk: &[u8]) -> Record {
    let mut tag = [0u8; 4];
    let mut operand = [0u8; 8];
    tag.copy_from_slice(&chunk[0..4]);
    operand.copy_from_slice(&chunk[8..16]);
    Record {
        tag: u32::from_le_bytes(tag),
        operand: Word::from_le_bytes(operand),
    }
}

pub fn decode(record: Record) -> Result<Instruction, DecodeError> {
    let op = Opcode::from_tag(record.tag).ok_or(DecodeError::UnknownOpcode { tag: record.tag })?;
    Ok(Instruction::from_parts(op, record.operand))
}

/// Splits an image into records. Checks size and capacity, not tags.
pub fn read_records(bytes: &[u8]) -> Result<Vec<Record>, CodecError> {
    if bytes.len() % RECORD_SIZE != 0 {
        return Err(CodecError::Misaligned {
            len: bytes.len(),
            record: RECORD_SIZE,
        });
    }
    let count = bytes.len() / RECORD_SIZE;
    if count > PROGRAM_CAPACITY {
        return Err(CodecError::TooManyInstructions {
            count,
            capacity: PROGRAM_CAPACITY,
        });
    }
    Ok(bytes.chunks_exact(RECORD_SIZE).map(read_record).collect())
}

/// Decodes a whole image. Any bad record rejects the image.
pub fn deserialize(bytes: &[u8]) -> Result<Program, CodecError> {
    let records = read_records(bytes)?;
    let mut program = Program::new();
    for (index, record) in records.into_iter().enumerate() {
        let inst = decode(record).map_err(|DecodeError::UnknownOpcode { tag }| {
            CodecError::IllegalInstruction { index, tag }
        })?;
        program
            .push(inst)
            .map_err(|e| CodecError::TooManyInstructions {
                count: index + 1,
                capacity: e.capacity,
            })?;
    }
    Ok(program)
}
