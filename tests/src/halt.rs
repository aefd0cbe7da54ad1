use common::ins;
use common::isa::emit_program;
use emu_lib::{ExecRet, Status};

use crate::helpers::{load_bin, run_bin};

#[test]
fn halt_only() {
    let (cpu, out) = run_bin(&[0b00000001]);
    assert!(out.is_empty());
    assert!(!cpu.is_running());
    assert_eq!(cpu.status(), Status::Halted);
    assert_eq!(cpu.pc(), 0);
    assert_eq!(cpu.num_ins(), 1);
}

#[test]
fn stops_before_rest() {
    let bin = emit_program(&[ins!(Ldi, 0, 1), ins!(Hlt), ins!(Prn, 0), ins!(Hlt)]);
    let (cpu, out) = run_bin(&bin);
    assert!(out.is_empty());
    assert_eq!(cpu.pc(), 3);
    assert_eq!(cpu.num_ins(), 2);
}

#[test]
fn status_transitions() {
    let (mut cpu, _) = load_bin(&emit_program(&[ins!(Ldi, 0, 1), ins!(Hlt)]));
    assert_eq!(cpu.status(), Status::Idle);
    assert!(!cpu.is_running());

    assert_eq!(cpu.step(), Ok(ExecRet::Ok));
    assert_eq!(cpu.status(), Status::Running);
    assert!(cpu.is_running());

    assert_eq!(cpu.step(), Ok(ExecRet::Halt));
    assert_eq!(cpu.status(), Status::Halted);
    assert!(!cpu.is_running());

    // pc stays on the halt, so running again halts straight away.
    cpu.run().unwrap();
    assert_eq!(cpu.status(), Status::Halted);
    assert_eq!(cpu.pc(), 3);
}

#[test]
fn run_at() {
    let bin = emit_program(&[ins!(Prn, 0), ins!(Ldi, 0, 42), ins!(Prn, 0), ins!(Hlt)]);
    let (mut cpu, console) = load_bin(&bin);
    cpu.run_at(2).unwrap();
    assert_eq!(console.take_output(), ["42"]);
}
