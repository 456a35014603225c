pub mod cli;
pub mod cvm;
