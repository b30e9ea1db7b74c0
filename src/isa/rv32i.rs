//! Base integer instructions: ALU, loads/stores, branches, jumps.

use crate::decode::Decoded;
use crate::interpreter::{ExecutionStatus, Interpreter};

const SUCCESS: ExecutionStatus = ExecutionStatus::Success;

fn advance(interp: &mut Interpreter, d: &Decoded) {
    interp.pc = d.pc.wrapping_add(4);
}

fn write_rd(interp: &mut Interpreter, d: &Decoded, value: u32) {
    interp.regs.set_x(d.rd, value);
}

macro_rules! alu_reg_imm {
    ($name:ident, |$a:ident, $imm:ident| $body:expr) => {
        pub fn $name(interp: &mut Interpreter, d: &Decoded) -> ExecutionStatus {
            let $a = interp.regs.x(d.rs1);
            let $imm = d.imm;
            write_rd(interp, d, $body);
            advance(interp, d);
            SUCCESS
        }
    };
}

macro_rules! alu_reg_reg {
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

alu_reg_imm!(addi, |a, imm| a.wrapping_add(imm as u32));
alu_reg_imm!(slti, |a, imm| u32::from((a as i32) < imm));
alu_reg_imm!(sltiu, |a, imm| u32::from(a < imm as u32));
alu_reg_imm!(xori, |a, imm| a ^ (imm as u32));
alu_reg_imm!(ori, |a, imm| a | (imm as u32));
alu_reg_imm!(andi, |a, imm| a & (imm as u32));
alu_reg_imm!(slli, |a, imm| a << ((imm as u32) & 0x1f));
alu_reg_imm!(srli, |a, imm| a >> ((imm as u32) & 0x1f));
alu_reg_imm!(srai, |a, imm| ((a as i32) >> ((imm as u32) & 0x1f)) as u32);

alu_reg_reg!(add, |a, b| a.wrapping_add(b));
alu_reg_reg!(sub, |a, b| a.wrapping_sub(b));
alu_reg_reg!(sll, |a, b| a << (b & 0x1f));
alu_reg_reg!(slt, |a, b| u32::from((a as i32) < (b as i32)));
alu_reg_reg!(sltu, |a, b| u32::from(a < b));
alu_reg_reg!(xor, |a, b| a ^ b);
alu_reg_reg!(srl, |a, b| a >> (b & 0x1f));
alu_reg_reg!(sra, |a, b| ((a as i32) >> (b & 0x1f)) as u32);
alu_reg_reg!(or, |a, b| a | b);
alu_reg_reg!(and, |a, b| a & b);

pub fn lui(interp: &mut Interpreter, d: &Decoded) -> ExecutionStatus {
    write_rd(interp, d, d.imm as u32);
    advance(interp, d);
    SUCCESS
}

pub fn auipc(interp: &mut Interpreter, d: &Decoded) -> ExecutionStatus {
    write_rd(interp, d, d.pc.wrapping_add(d.imm as u32));
    advance(interp, d);
    SUCCESS
}

pub fn jal(interp: &mut Interpreter, d: &Decoded) -> ExecutionStatus {
    write_rd(interp, d, d.pc.wrapping_add(4));
    interp.pc = d.pc.wrapping_add(d.imm as u32);
    SUCCESS
}

pub fn jalr(interp: &mut Interpreter, d: &Decoded) -> ExecutionStatus {
    let target = interp.regs.x(d.rs1).wrapping_add(d.imm as u32) & !1u32;
    write_rd(interp, d, d.pc.wrapping_add(4));
    interp.pc = target;
    SUCCESS
}

macro_rules! branch {
    ($name:ident, |$a:ident, $b:ident| $cond:expr) => {
        pub fn $name(interp: &mut Interpreter, d: &Decoded) -> ExecutionStatus {
            let $a = interp.regs.x(d.rs1);
            let $b = interp.regs.x(d.rs2);
            interp.pc = if $cond {
                d.pc.wrapping_add(d.imm as u32)
            } else {
                d.pc.wrapping_add(4)
            };
            SUCCESS
        }
    };
}

branch!(beq, |a, b| a == b);
branch!(bne, |a, b| a != b);
branch!(blt, |a, b| (a as i32) < (b as i32));
branch!(bge, |a, b| (a as i32) >= (b as i32));
branch!(bltu, |a, b| a < b);
branch!(bgeu, |a, b| a >= b);

fn effective_addr(interp: &Interpreter, d: &Decoded) -> u32 {
    interp.regs.x(d.rs1).wrapping_add(d.imm as u32)
}

pub fn lb(interp: &mut Interpreter, d: &Decoded) -> ExecutionStatus {
    let addr = effective_addr(interp, d);
    let value = interp.memory.load_u8(addr) as i8 as i32 as u32;
    write_rd(interp, d, value);
    advance(interp, d);
    SUCCESS
}

pub fn lbu(interp: &mut Interpreter, d: &Decoded) -> ExecutionStatus {
    let addr = effective_addr(interp, d);
    let value = interp.memory.load_u8(addr) as u32;
    write_rd(interp, d, value);
    advance(interp, d);
    SUCCESS
}

pub fn lh(interp: &mut Interpreter, d: &Decoded) -> ExecutionStatus {
    let addr = effective_addr(interp, d);
    let value = interp.memory.load_u16(addr) as i16 as i32 as u32;
    write_rd(interp, d, value);
    advance(interp, d);
    SUCCESS
}

pub fn lhu(interp: &mut Interpreter, d: &Decoded) -> ExecutionStatus {
    let addr = effective_addr(interp, d);
    let value = interp.memory.load_u16(addr) as u32;
    write_rd(interp, d, value);
    advance(interp, d);
    SUCCESS
}

pub fn lw(interp: &mut Interpreter, d: &Decoded) -> ExecutionStatus {
    let addr = effective_addr(interp, d);
    let value = interp.memory.load_u32(addr);
    write_rd(interp, d, value);
    advance(interp, d);
    SUCCESS
}

pub fn sb(interp: &mut Interpreter, d: &Decoded) -> ExecutionStatus {
    let addr = effective_addr(interp, d);
    let value = interp.regs.x(d.rs2) as u8;
    interp.memory.store_u8(addr, value);
    advance(interp, d);
    SUCCESS
}

pub fn sh(interp: &mut Interpreter, d: &Decoded) -> ExecutionStatus {
    let addr = effective_addr(interp, d);
    let value = interp.regs.x(d.rs2) as u16;
    interp.memory.store_u16(addr, value);
    advance(interp, d);
    SUCCESS
}

pub fn sw(interp: &mut Interpreter, d: &Decoded) -> ExecutionStatus {
    let addr = effective_addr(interp, d);
    let value = interp.regs.x(d.rs2);
    interp.memory.store_u32(addr, value);
    advance(interp, d);
    SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decoded(pc: u32, rd: u8, rs1: u8, rs2: u8, imm: i32) -> Decoded {
        Decoded { pc, rd, rs1, rs2, rs3: 0, imm }
    }

    #[test]
    fn add_wraps_and_advances_pc() {
        let mut interp = Interpreter::new(Default::default());
        interp.regs.set_x(1, 1);
        interp.regs.set_x(2, 2);
        let d = decoded(0x1000, 3, 1, 2, 0);
        add(&mut interp, &d);
        assert_eq!(interp.regs.x(3), 3);
        assert_eq!(interp.pc, 0x1004);
    }

    #[test]
    fn jalr_clears_low_bit() {
        let mut interp = Interpreter::new(Default::default());
        interp.regs.set_x(1, 0x2003);
        let d = decoded(0x1000, 5, 1, 0, 0);
        jalr(&mut interp, &d);
        assert_eq!(interp.pc, 0x2002);
        assert_eq!(interp.regs.x(5), 0x1004);
    }

    #[test]
    fn byte_load_sign_extends() {
        let mut interp = Interpreter::new(Default::default());
        interp.memory.store_u8(8, 0xff);
        interp.regs.set_x(1, 8);
        let d = decoded(0, 2, 1, 0, 0);
        lb(&mut interp, &d);
        assert_eq!(interp.regs.x(2), 0xffff_ffff);
    }

    #[test]
    fn branch_not_taken_advances_by_four() {
        let mut interp = Interpreter::new(Default::default());
        interp.regs.set_x(1, 1);
        interp.regs.set_x(2, 2);
        let d = decoded(0x2000, 0, 1, 2, 0x100);
        beq(&mut interp, &d);
        assert_eq!(interp.pc, 0x2004);
    }
}
