//! Zbb bit-manipulation subset.

use crate::decode::Decoded;
use crate::interpreter::{ExecutionStatus, Interpreter};

const SUCCESS: ExecutionStatus = ExecutionStatus::Success;

fn advance(interp: &mut Interpreter, d: &Decoded) {
    interp.pc = d.pc.wrapping_add(4);
}

fn write_rd(interp: &mut Interpreter, d: &Decoded, value: u32) {
    interp.regs.set_x(d.rd, value);
}

macro_rules! reg_reg {
    ($name:ident, |$a:ident, $b:ident| $body:expr) => {
        pub fn $name(interp: &mut Interpreter, d: &Decoded) -> ExecutionStatus {
            let $a = interp.regs.x(d.rs1);
            let $b = interp.regs.x(d.rs2);
            write_rd(interp, d, $body);
            advance(interp, d);
            SUCCESS
        }
    };
}

reg_reg!(andn, |a, b| a & !b);
reg_reg!(orn, |a, b| a | !b);
reg_reg!(xnor, |a, b| !(a ^ b));
reg_reg!(min, |a, b| if (a as i32) < (b as i32) { a } else { b });
reg_reg!(max, |a, b| if (a as i32) > (b as i32) { a } else { b });
reg_reg!(minu, |a, b| if a < b { a } else { b });
reg_reg!(maxu, |a, b| if a > b { a } else { b });
reg_reg!(rol, |a, b| a.rotate_left(b & 0x1f));
reg_reg!(ror, |a, b| a.rotate_right(b & 0x1f));

pub fn rori(interp: &mut Interpreter, d: &Decoded) -> ExecutionStatus {
    let a = interp.regs.x(d.rs1);
    let shamt = (d.imm as u32) & 0x1f;
    write_rd(interp, d, a.rotate_right(shamt));
    advance(interp, d);
    SUCCESS
}

pub fn clz(interp: &mut Interpreter, d: &Decoded) -> ExecutionStatus {
    let a = interp.regs.x(d.rs1);
    write_rd(interp, d, a.leading_zeros());
    advance(interp, d);
    SUCCESS
}

pub fn ctz(interp: &mut Interpreter, d: &Decoded) -> ExecutionStatus {
    let a = interp.regs.x(d.rs1);
    write_rd(interp, d, a.trailing_zeros());
    advance(interp, d);
    SUCCESS
}

pub fn cpop(interp: &mut Interpreter, d: &Decoded) -> ExecutionStatus {
    let a = interp.regs.x(d.rs1);
    write_rd(interp, d, a.count_ones());
    advance(interp, d);
    SUCCESS
}

pub fn sext_b(interp: &mut Interpreter, d: &Decoded) -> ExecutionStatus {
    let a = interp.regs.x(d.rs1);
    write_rd(interp, d, (a as i8) as i32 as u32);
    advance(interp, d);
    SUCCESS
}

pub fn sext_h(interp: &mut Interpreter, d: &Decoded) -> ExecutionStatus {
    let a = interp.regs.x(d.rs1);
    write_rd(interp, d, (a as i16) as i32 as u32);
    advance(interp, d);
    SUCCESS
}

pub fn zext_h(interp: &mut Interpreter, d: &Decoded) -> ExecutionStatus {
    let a = interp.regs.x(d.rs1);
    write_rd(interp, d, a & 0xffff);
    advance(interp, d);
    SUCCESS
}

pub fn orc_b(interp: &mut Interpreter, d: &Decoded) -> ExecutionStatus {
    let a = interp.regs.x(d.rs1);
    let mut result = 0u32;
    for n in 0..4 {
        let byte = (a >> (8 * n)) & 0xff;
        let filled = if byte != 0 { 0xffu32 } else { 0x00 };
        result |= filled << (8 * n);
    }
    write_rd(interp, d, result);
    advance(interp, d);
    SUCCESS
}

pub fn rev8(interp: &mut Interpreter, d: &Decoded) -> ExecutionStatus {
    let a = interp.regs.x(d.rs1);
    write_rd(interp, d, a.swap_bytes());
    advance(interp, d);
    SUCCESS
}
