// cvm/exec.rs
use std::io::Write;

use tracing::{debug, trace};

use crate::cvm::{
    decoder::decode,
    errors::Trap,
    instruction::{Instruction, Word},
    machine::Machine,
};

/// What a successful step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Executed,
    /// A NOP ran. Not charged against a run budget.
    NoInstruction,
}

/// Why `run` stopped without a trap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    Halted,
    BudgetExhausted,
}

/// Executes exactly the instruction at `ip`. PRINT_DEBUG writes to `out`.
pub fn step<W: Write + ?Sized>(vm: &mut Machine, out: &mut W) -> Result<Outcome, Trap> {
    let ip = vm.ip;
    let record = vm.fetch()?;
    let inst = decode(record).map_err(|_| Trap::IllegalInstruction { tag: record.tag })?;
    trace!(ip, %inst, depth = vm.stack().len(), "step");

    match inst {
        Instruction::Nop => {
            vm.ip = ip + 1;
            return Ok(Outcome::NoInstruction);
        }
        Instruction::Push(v) => {
            vm.push(v)?;
            vm.ip = ip + 1;
        }
        Instruction::Dup(depth) => {
            if vm.stack_is_full() {
                return Err(Trap::StackOverflow);
            }
            let v = usize::try_from(depth)
                .ok()
                .and_then(|d| vm.peek(d))
                .ok_or(Trap::IllegalOperand(depth))?;
            vm.push(v)?;
            vm.ip = ip + 1;
        }
        Instruction::Plus => binary(vm, |a, b| Ok(a.wrapping_add(b)))?,
        Instruction::Minus => binary(vm, |a, b| Ok(a.wrapping_sub(b)))?,
        Instruction::Mult => binary(vm, |a, b| Ok(a.wrapping_mul(b)))?,
        Instruction::Div => binary(vm, |a, b| {
            if b == 0 {
                Err(Trap::DivisionByZero)
            } else {
                Ok(a.wrapping_div(b))
            }
        })?,
        Instruction::Eq => binary(vm, |a, b| Ok(Word::from(a == b)))?,
        Instruction::Jmp(addr) => vm.ip = addr,
        Instruction::JmpIf(addr) => {
            let cond = vm.pop()?;
            vm.ip = if cond != 0 { addr } else { ip + 1 };
        }
        Instruction::Halt => vm.halted = true,
        Instruction::PrintDebug => {
            let v = vm.peek(0).ok_or(Trap::StackUnderflow)?;
            writeln!(out, "{v}").map_err(|e| Trap::Output(e.kind()))?;
            debug!(ip, value = v, "print_debug");
            vm.pop()?;
            vm.ip = ip + 1;
        }
    }
    Ok(Outcome::Executed)
}

/// Pops `b` then `a`, pushes `f(a, b)`. Nothing is popped if `f` fails.
fn binary<F>(vm: &mut Machine, f: F) -> Result<(), Trap>
where
    F: FnOnce(Word, Word) -> Result<Word, Trap>,
{
    vm.require(2)?;
    let (a, b) = match (vm.peek(1), vm.peek(0)) {
        (Some(a), Some(b)) => (a, b),
        _ => return Err(Trap::StackUnderflow),
    };
    let v = f(a, b)?;
    vm.pop()?;
    vm.pop()?;
    vm.push(v)?;
    vm.ip += 1;
    Ok(())
}

/// Steps until HALT, a trap, or `budget` charged steps. `None` never stops
/// on its own; only pass it for programs that reach a HALT.
pub fn run<W: Write + ?Sized>(
    vm: &mut Machine,
    budget: Option<u64>,
    out: &mut W,
) -> Result<Exit, Trap> {
    let mut remaining = budget;
    while !vm.halted {
        if remaining == Some(0) {
            debug!(ip = vm.ip, steps = vm.steps, "step budget exhausted");
            return Ok(Exit::BudgetExhausted);
        }
        if step(vm, out)? == Outcome::NoInstruction {
            continue;
        }
        vm.steps += 1;
        if let Some(r) = remaining.as_mut() {
            *r -= 1;
        }
    }
    debug!(ip = vm.ip, steps = vm.steps, "halted");
    Ok(Exit::Halted)
}
