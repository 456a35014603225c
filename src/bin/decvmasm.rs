use std::io;
use std::process::ExitCode;

use clap::Parser;
use stackvm::cli::{self, args::DisasmArgs, commands, logging};

fn main() -> ExitCode {
    logging::init();
    let args = DisasmArgs::parse();
    let mut out = io::stdout().lock();
    cli::finish(commands::disassemble_file(&args, &mut out))
}
