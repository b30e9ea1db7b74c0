//! Multiplication/division extension.

use crate::decode::Decoded;
use crate::interpreter::{ExecutionStatus, Interpreter};

const SUCCESS: ExecutionStatus = ExecutionStatus::Success;

fn advance(interp: &mut Interpreter, d: &Decoded) {
    interp.pc = d.pc.wrapping_add(4);
}

fn write_rd(interp: &mut Interpreter, d: &Decoded, value: u32) {
    interp.regs.set_x(d.rd, value);
}

pub fn mul(interp: &mut Interpreter, d: &Decoded) -> ExecutionStatus {
    let a = interp.regs.x(d.rs1);
    let b = interp.regs.x(d.rs2);
    write_rd(interp, d, a.wrapping_mul(b));
    advance(interp, d);
    SUCCESS
}

pub fn mulh(interp: &mut Interpreter, d: &Decoded) -> ExecutionStatus {
    let a = interp.regs.x(d.rs1) as i32 as i64;
    let b = interp.regs.x(d.rs2) as i32 as i64;
    let product = a.wrapping_mul(b);
    write_rd(interp, d, (product >> 32) as u32);
    advance(interp, d);
    SUCCESS
}

pub fn mulhsu(interp: &mut Interpreter, d: &Decoded) -> ExecutionStatus {
    let a = interp.regs.x(d.rs1) as i32 as i64;
    let b = interp.regs.x(d.rs2) as u64 as i64;
    let product = a.wrapping_mul(b);
    write_rd(interp, d, (product >> 32) as u32);
    advance(interp, d);
    SUCCESS
}

pub fn mulhu(interp: &mut Interpreter, d: &Decoded) -> ExecutionStatus {
    let a = interp.regs.x(d.rs1) as u64;
    let b = interp.regs.x(d.rs2) as u64;
    let product = a.wrapping_mul(b);
    write_rd(interp, d, (product >> 32) as u32);
    advance(interp, d);
    SUCCESS
}

pub fn div(interp: &mut Interpreter, d: &Decoded) -> ExecutionStatus {
    let a = interp.regs.x(d.rs1) as i32;
    let b = interp.regs.x(d.rs2) as i32;
    let result = if b == 0 {
        -1i32
    } else if a == i32::MIN && b == -1 {
        i32::MIN
    } else {
        a.wrapping_div(b)
    };
    write_rd(interp, d, result as u32);
    advance(interp, d);
    SUCCESS
}

pub fn divu(interp: &mut Interpreter, d: &Decoded) -> ExecutionStatus {
    let a = interp.regs.x(d.rs1);
    let b = interp.regs.x(d.rs2);
    let result = if b == 0 { 0xffff_ffffu32 } else { a / b };
    write_rd(interp, d, result);
    advance(interp, d);
    SUCCESS
}

pub fn rem(interp: &mut Interpreter, d: &Decoded) -> ExecutionStatus {
    let a = interp.regs.x(d.rs1) as i32;
    let b = interp.regs.x(d.rs2) as i32;
    let result = if b == 0 {
        a
    } else if a == i32::MIN && b == -1 {
        0
    } else {
        a.wrapping_rem(b)
    };
    write_rd(interp, d, result as u32);
    advance(interp, d);
    SUCCESS
}

pub fn remu(interp: &mut Interpreter, d: &Decoded) -> ExecutionStatus {
    let a = interp.regs.x(d.rs1);
    let b = interp.regs.x(d.rs2);
    let result = if b == 0 { a } else { a % b };
    write_rd(interp, d, result);
    advance(interp, d);
    SUCCESS
}
