// src/cvm/asm/mod.rs
pub mod assembler;
pub mod errors;
pub mod symbols;
pub(crate) mod utils;

pub use assembler::{assemble, resolve, scan};
pub use errors::{AsmError, AsmErrorKind};
pub use symbols::Symbols;
