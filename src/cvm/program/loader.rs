use std::fs;
use std::path::Path;

use tracing::debug;

use crate::cvm::decoder::deserialize;
use crate::cvm::encoder::serialize;
use crate::cvm::errors::CodecError;

use super::Program;

/// Reads a whole program image into memory, unvalidated.
pub fn read_image(path: &Path) -> Result<Vec<u8>, CodecError> {
    fs::read(path).map_err(|source| CodecError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads and fully decodes a program file.
pub fn load_program(path: &Path) -> Result<Program, CodecError> {
    let bytes = read_image(path)?;
    let program = deserialize(&bytes)?;
    debug!(path = %path.display(), instructions = program.len(), "loaded program");
    Ok(program)
}

/// Writes `program` as back-to-back records, replacing any existing file.
pub fn save_program(path: &Path, program: &Program) -> Result<(), CodecError> {
    let bytes = serialize(program);
    fs::write(path, &bytes).map_err(|source| CodecError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "saved program");
    Ok(())
}
