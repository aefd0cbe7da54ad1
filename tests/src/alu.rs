use common::ins;
use common::isa::{emit_program, Opcode};
use emu_lib::CpuError;

use crate::helpers::{load_bin, run_bin, run_src};

#[test]
fn mul() {
    let (_, out) = run_bin(&emit_program(&[
        ins!(Ldi, 0, 8),
        ins!(Ldi, 1, 9),
        ins!(Mul, 0, 1),
        ins!(Prn, 0),
        ins!(Hlt),
    ]));
    assert_eq!(out, ["72"]);
}

#[test]
fn mul_all_small() {
    for a in (0..=u8::MAX).step_by(15) {
        for b in (0..=u8::MAX).step_by(17) {
            let (cpu, out) = run_bin(&emit_program(&[
                ins!(Ldi, 0, a),
                ins!(Ldi, 1, b),
                ins!(Mul, 0, 1),
                ins!(Prn, 0),
                ins!(Hlt),
            ]));
            let exp = a as i64 * b as i64;
            assert_eq!(out, [exp.to_string()]);
            assert_eq!(cpu.reg_read(1), Ok(b as i64));
        }
    }
}

#[test]
fn mult_ls8() {
    let (_, out) = run_src(r#"
        # mult.ls8
        10000010 # LDI R0,8
        00000000
        00001000
        10000010 # LDI R1,9
        00000001
        00001001
        10100010 # MUL R0,R1
        00000000
        00000001
        01000111 # PRN R0
        00000000
        00000001 # HLT
    "#);
    assert_eq!(out, ["72"]);
}

#[test]
fn square_in_place() {
    let (cpu, out) = run_bin(&emit_program(&[
        ins!(Ldi, 3, 12),
        ins!(Mul, 3, 3),
        ins!(Prn, 3),
        ins!(Hlt),
    ]));
    assert_eq!(out, ["144"]);
    assert_eq!(cpu.pc(), 8);
}

// Registers aren't byte wide: products keep growing until they leave i64.
#[test]
fn growth_past_byte() {
    let (cpu, out) = run_bin(&emit_program(&[
        ins!(Ldi, 0, 255),
        ins!(Mul, 0, 0),
        ins!(Prn, 0),
        ins!(Mul, 0, 0),
        ins!(Prn, 0),
        ins!(Hlt),
    ]));
    assert_eq!(out, ["65025", "4228250625"]);
    assert_eq!(cpu.reg_read(0), Ok(4228250625));
}

#[test]
fn overflow() {
    let (mut cpu, console) = load_bin(&emit_program(&[
        ins!(Ldi, 0, 255),
        ins!(Mul, 0, 0),
        ins!(Mul, 0, 0),
        ins!(Mul, 0, 0),
        ins!(Hlt),
    ]));
    assert_eq!(cpu.run(), Err(CpuError::Overflow(Opcode::Mul)));
    assert_eq!(cpu.reg_read(0), Ok(4228250625));
    assert_eq!(cpu.pc(), 9);
    assert!(!cpu.is_running());
    assert!(console.is_empty());
}

#[test]
fn add_sub() {
    let (_, out) = run_bin(&emit_program(&[
        ins!(Ldi, 0, 3),
        ins!(Ldi, 1, 5),
        ins!(Add, 0, 1),
        ins!(Prn, 0),
        ins!(Sub, 1, 0),
        ins!(Prn, 1),
        ins!(Sub, 1, 0),
        ins!(Prn, 1),
        ins!(Hlt),
    ]));
    assert_eq!(out, ["8", "-3", "-11"]);
}

#[test]
fn div() {
    let (_, out) = run_bin(&emit_program(&[
        ins!(Ldi, 0, 72),
        ins!(Ldi, 1, 9),
        ins!(Div, 0, 1),
        ins!(Prn, 0),
        ins!(Ldi, 2, 7),
        ins!(Ldi, 3, 2),
        ins!(Div, 2, 3),
        ins!(Prn, 2),
        ins!(Hlt),
    ]));
    assert_eq!(out, ["8", "3"]);
}

#[test]
fn div_by_zero() {
    let (mut cpu, _) = load_bin(&emit_program(&[
        ins!(Ldi, 0, 1),
        ins!(Div, 0, 1),
        ins!(Hlt),
    ]));
    assert_eq!(cpu.run(), Err(CpuError::DivideByZero));
    assert_eq!(cpu.reg_read(0), Ok(1));
    assert_eq!(cpu.pc(), 3);
}
