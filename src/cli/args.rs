use std::path::PathBuf;

use clap::Parser;

/// Assemble a stack machine source file into a binary program.
#[derive(Parser, Debug)]
#[command(name = "cvmasm", version)]
pub struct AsmArgs {
    /// Assembly source
    pub source: PathBuf,
    /// Where to write the program image
    pub output: PathBuf,
}

/// Run a binary program and print the final stack.
#[derive(Parser, Debug)]
#[command(name = "cvmi", version)]
pub struct RunArgs {
    /// Program image
    pub program: PathBuf,
    /// Maximum number of charged steps; unbounded when absent
    #[arg(short = 'l', long = "limit", env = "CVM_STEP_LIMIT", value_name = "N")]
    pub limit: Option<u64>,
}

/// Print the mnemonic listing of a binary program.
#[derive(Parser, Debug)]
#[command(name = "decvmasm", version)]
pub struct DisasmArgs {
    /// Program image
    pub program: PathBuf,
}
