//! End-to-end runs: source text through the assembler, the image codec, and
//! the execution engine.

use std::io;

use stackvm::cvm::{
    asm::{assemble, AsmErrorKind},
    decoder::deserialize,
    encoder::serialize,
    errors::{CodecError, Trap},
    exec::{run, Exit},
    Instruction::*,
    Machine, Program,
};

struct Outcome {
    vm: Machine,
    result: Result<Exit, Trap>,
    printed: String,
}

fn run_source(src: &str, budget: Option<u64>) -> Outcome {
    let program = assemble(src).expect("assemble");
    let image = serialize(&program);
    let mut vm = Machine::from_image(&image).expect("load");
    let mut out = Vec::new();
    let result = run(&mut vm, budget, &mut out);
    let printed = String::from_utf8(out).expect("utf-8");
    Outcome { vm, result, printed }
}

#[test]
fn sum_of_two() {
    let program = assemble("push 2\npush 3\nplus\nhalt").unwrap();
    assert_eq!(program.len(), 4);
    let Outcome { vm, result, .. } = run_source("push 2\npush 3\nplus\nhalt", None);
    assert_eq!(result, Ok(Exit::Halted));
    assert_eq!(vm.stack(), &[5]);
    assert_eq!(vm.steps, 4);
}

#[test]
fn infinite_loop_runs_out_of_budget() {
    let Outcome { vm, result, .. } = run_source("start:\npush 1\njmp start\n", Some(5));
    assert_eq!(result, Ok(Exit::BudgetExhausted));
    assert_eq!(vm.stack(), &[1, 1, 1]);
    assert_eq!(vm.steps, 5);
    assert!(!vm.halted);
}

#[test]
fn nops_are_free() {
    let src = "nop\nnop\nnop\npush 1\nhalt";
    assert_eq!(run_source(src, Some(2)).result, Ok(Exit::Halted));
    assert_eq!(run_source(src, Some(1)).result, Ok(Exit::BudgetExhausted));
}

#[test]
fn countdown_loop() {
    // Counts 3 down to 0, printing each value.
    let src = "\
        push 3
top:
        dup 0
        print_debug
        push 1
        minus
        dup 0
        push 0
        eq
        jmp_if done
        jmp top
done:
        halt
";
    let Outcome { vm, result, printed } = run_source(src, Some(1_000));
    assert_eq!(result, Ok(Exit::Halted));
    assert_eq!(vm.stack(), &[0]);
    assert_eq!(printed, "3\n2\n1\n");
}

#[test]
fn print_loop_output_reaches_the_writer() {
    let Outcome { vm, result, printed } = run_source("top:\npush 1\nprint_debug\njmp top", Some(30));
    assert_eq!(result, Ok(Exit::BudgetExhausted));
    assert_eq!(printed, "1\n".repeat(10));
    assert!(vm.stack().is_empty());
}

#[test]
fn running_off_the_end_traps() {
    let Outcome { vm, result, .. } = run_source("push 1", None);
    assert_eq!(result, Err(Trap::IllegalInstructionAccess { ip: 1 }));
    assert_eq!(vm.stack(), &[1]);
}

#[test]
fn trap_leaves_operands_in_place() {
    let Outcome { vm, result, .. } = run_source("push 7\npush 0\ndiv\nhalt", None);
    assert_eq!(result, Err(Trap::DivisionByZero));
    assert_eq!(vm.ip, 2);
    assert_eq!(vm.stack(), &[7, 0]);
}

#[test]
fn unresolved_label_fails_assembly() {
    let err = assemble("jmp nowhere\nhalt").unwrap_err();
    assert_eq!(err.kind, AsmErrorKind::UnresolvedLabel("nowhere".into()));
    assert_eq!(err.line, 0);
}

#[test]
fn unknown_tag_loads_but_traps_when_reached() {
    let mut image = serialize(&Program::from_instructions([Push(1), Halt]).unwrap());
    image[16..20].copy_from_slice(&99u32.to_le_bytes());

    assert!(matches!(
        deserialize(&image),
        Err(CodecError::IllegalInstruction { index: 1, tag: 99 })
    ));

    let mut vm = Machine::from_image(&image).unwrap();
    assert_eq!(run(&mut vm, None, &mut io::sink()), Err(Trap::IllegalInstruction { tag: 99 }));
    assert_eq!(vm.ip, 1);
    assert_eq!(vm.stack(), &[1]);
}

#[test]
fn misaligned_image_is_rejected() {
    let image = vec![0u8; 17];
    assert!(matches!(
        Machine::from_image(&image),
        Err(CodecError::Misaligned { len: 17, .. })
    ));
}
