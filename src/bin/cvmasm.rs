use std::process::ExitCode;

use clap::Parser;
use stackvm::cli::{self, args::AsmArgs, commands, logging};

fn main() -> ExitCode {
    logging::init();
    let args = AsmArgs::parse();
    cli::finish(commands::assemble_file(&args))
}
