use std::io;
use std::process::ExitCode;

use clap::Parser;
use stackvm::cli::{self, args::RunArgs, commands, logging};

fn main() -> ExitCode {
    logging::init();
    let args = RunArgs::parse();
    let mut out = io::stdout().lock();
    cli::finish(commands::interpret(&args, &mut out).map(|_| ()))
}
