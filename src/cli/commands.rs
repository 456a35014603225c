use std::fs;
use std::io::Write;

use tracing::info;

use crate::cvm::asm::assemble;
use crate::cvm::disasm::disassemble;
use crate::cvm::exec::{self, Exit};
use crate::cvm::machine::Machine;
use crate::cvm::program::{load_program, read_image, save_program};

use super::args::{AsmArgs, DisasmArgs, RunArgs};
use super::console::dump_stack;
use super::CliError;

/// Source file in, program image out. No image is written on failure.
pub fn assemble_file(args: &AsmArgs) -> Result<(), CliError> {
    let source = fs::read_to_string(&args.source).map_err(|source| CliError::ReadSource {
        path: args.source.clone(),
        source,
    })?;
    let program = assemble(&source).map_err(|source| CliError::Assemble {
        path: args.source.clone(),
        source,
    })?;
    save_program(&args.output, &program)?;
    info!(
        source = %args.source.display(),
        output = %args.output.display(),
        instructions = program.len(),
        "assembled"
    );
    Ok(())
}

/// Runs a program image. PRINT_DEBUG output goes to `out` while the program
/// runs, followed by the stack dump when the run ends without a trap.
pub fn interpret<W: Write>(args: &RunArgs, out: &mut W) -> Result<Exit, CliError> {
    let image = read_image(&args.program)?;
    let mut vm = Machine::from_image(&image)?;
    let exit = exec::run(&mut vm, args.limit, out)
        .map_err(|trap| CliError::Trap { trap, ip: vm.ip })?;
    info!(?exit, steps = vm.steps, "run finished");
    dump_stack(out, vm.stack())?;
    Ok(exit)
}

pub fn disassemble_file<W: Write>(args: &DisasmArgs, out: &mut W) -> Result<(), CliError> {
    let program = load_program(&args.program)?;
    out.write_all(disassemble(&program).as_bytes())?;
    Ok(())
}
