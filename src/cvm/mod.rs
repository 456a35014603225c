pub mod arch;
pub mod bounded;
pub mod errors;
pub mod exec;
pub mod instruction;
pub mod machine;

pub mod decoder;
pub mod encoder;

pub mod asm;
pub mod disasm;

pub mod program;

pub use instruction::{Instruction, Opcode, Word};
pub use machine::Machine;
pub use program::Program;
