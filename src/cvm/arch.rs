// cvm/arch.rs
pub const STACK_CAPACITY: usize = 1024;
pub const PROGRAM_CAPACITY: usize = 1024;

// assembler limits
pub const MAX_LABELS: usize = 100;
pub const MAX_LABEL_LENGTH: usize = 30;
pub const MAX_JUMPS: usize = 110;

/// Bytes per instruction record: u32 tag, 4 reserved bytes, i64 operand.
pub const RECORD_SIZE: usize = 16;

pub const OPC_NOP: u32 = 0;
pub const OPC_PUSH: u32 = 1;
pub const OPC_DUP: u32 = 2;
pub const OPC_PLUS: u32 = 3;
pub const OPC_MINUS: u32 = 4;
pub const OPC_MULT: u32 = 5;
pub const OPC_DIV: u32 = 6;
pub const OPC_JMP: u32 = 7;
pub const OPC_JMP_IF: u32 = 8;
pub const OPC_EQ: u32 = 9;
pub const OPC_HALT: u32 = 10;
pub const OPC_PRINT_DEBUG: u32 = 11;
