//! Instruction decoding.
//!
//! Pure function of a 32-bit instruction word and its address: no
//! memory access, no state mutation (spec.md §4.2). Produces a
//! [`Decoded`] operand record and a 32-bit dispatch key.

use crate::opcodes::*;

/// Decoded operand record, consumed by exactly one handler.
///
/// `pc` is the address the instruction was fetched from; handlers
/// compute branch/jump targets relative to this field, not the
/// dispatch loop's live program counter.
#[derive(Debug, Clone, Copy, Default)]
pub struct Decoded {
    pub pc: u32,
    pub rd: u8,
    pub rs1: u8,
    pub rs2: u8,
    pub rs3: u8,
    pub imm: i32,
}

fn field(word: u32, hi: u32, lo: u32) -> u32 {
    let width = hi - lo + 1;
    let mask = if width == 32 { u32::MAX } else { (1u32 << width) - 1 };
    (word >> lo) & mask
}

fn sign_extend(value: u32, sign_bit: u32) -> i32 {
    let shift = 31 - sign_bit;
    (((value << shift) as i32) >> shift) as i32
}

pub fn opcode(word: u32) -> u32 {
    field(word, 6, 0)
}

pub fn rd(word: u32) -> u8 {
    field(word, 11, 7) as u8
}

pub fn funct3(word: u32) -> u32 {
    field(word, 14, 12)
}

pub fn rs1(word: u32) -> u8 {
    field(word, 19, 15) as u8
}

pub fn rs2(word: u32) -> u8 {
    field(word, 24, 20) as u8
}

pub fn funct7(word: u32) -> u32 {
    field(word, 31, 25)
}

pub fn rs3(word: u32) -> u8 {
    field(word, 31, 27) as u8
}

fn imm_i(word: u32) -> i32 {
    sign_extend(field(word, 31, 20), 11)
}

fn imm_s(word: u32) -> i32 {
    let value = (field(word, 31, 25) << 5) | field(word, 11, 7);
    sign_extend(value, 11)
}

fn imm_b(word: u32) -> i32 {
    let value = (field(word, 31, 31) << 12)
        | (field(word, 7, 7) << 11)
        | (field(word, 30, 25) << 5)
        | (field(word, 11, 8) << 1);
    sign_extend(value, 12)
}

fn imm_u(word: u32) -> i32 {
    (field(word, 31, 12) << 12) as i32
}

fn imm_j(word: u32) -> i32 {
    let value = (field(word, 31, 31) << 20)
        | (field(word, 19, 12) << 12)
        | (field(word, 20, 20) << 11)
        | (field(word, 30, 21) << 1);
    sign_extend(value, 20)
}

/// R4-type (fused multiply-add) instructions pack `fmt` (2 bits) and
/// `rs3` (5 bits) into what other formats call `funct7`. `rs3` varies
/// per instruction, so it cannot be part of a stable dispatch key;
/// only `fmt` (the low 2 bits) distinguishes FMADD.S from a
/// hypothetical FMADD.D. Opcode already distinguishes FMADD from
/// FMSUB/FNMSUB/FNMADD, so the key uses fmt and ignores rs3.
fn is_r4_format(op: u32) -> bool {
    matches!(op, OP_FMADD | OP_FMSUB | OP_FNMSUB | OP_FNMADD)
}

/// Decode a 32-bit instruction word fetched from `pc` into its operand
/// record and dispatch key.
pub fn decode(word: u32, pc: u32) -> (Decoded, u32) {
    let op = opcode(word);
    let f3 = funct3(word);
    let f7 = funct7(word);

    let decoded = match op {
        OP_LUI | OP_AUIPC => Decoded {
            pc,
            rd: rd(word),
            imm: imm_u(word),
            ..Default::default()
        },
        OP_JAL => Decoded {
            pc,
            rd: rd(word),
            imm: imm_j(word),
            ..Default::default()
        },
        OP_JALR | OP_IMM | OP_LOAD | OP_FLOAD => Decoded {
            pc,
            rd: rd(word),
            rs1: rs1(word),
            imm: imm_i(word),
            ..Default::default()
        },
        OP_STORE | OP_FSTORE => Decoded {
            pc,
            rs1: rs1(word),
            rs2: rs2(word),
            imm: imm_s(word),
            ..Default::default()
        },
        OP_BRANCH => Decoded {
            pc,
            rs1: rs1(word),
            rs2: rs2(word),
            imm: imm_b(word),
            ..Default::default()
        },
        OP_FMADD | OP_FMSUB | OP_FNMSUB | OP_FNMADD => Decoded {
            pc,
            rd: rd(word),
            rs1: rs1(word),
            rs2: rs2(word),
            rs3: rs3(word),
            ..Default::default()
        },
        OP_SYSTEM => Decoded {
            pc,
            ..Default::default()
        },
        // OP, OP_FP, and anything else: full R-type operand set plus
        // the raw i_type immediate, since Zbb's shift-shaped unary
        // forms read their selector out of the immediate field.
        _ => Decoded {
            pc,
            rd: rd(word),
            rs1: rs1(word),
            rs2: rs2(word),
            imm: imm_i(word),
            ..Default::default()
        },
    };

    let key = dispatch_key(op, f3, f7, word);
    (decoded, key)
}

/// Pack an (opcode, funct3, funct7) triple into the natural 24-bit
/// dispatch key, for use both by [`decode`] and by the handler
/// registration tables in [`crate::isa`].
pub fn natural_key(op: u32, f3: u32, f7: u32) -> u32 {
    op | (f3 << 8) | (f7 << 16)
}

fn dispatch_key(op: u32, f3: u32, f7: u32, word: u32) -> u32 {
    if is_r4_format(op) {
        let fmt = f7 & 0b11;
        return natural_key(op, f3, fmt);
    }

    if op == OP_IMM && f3 == FUNCT3_ZBB_UNARY && f7 == FUNCT7_ZBB_UNARY {
        let imm = field(word, 31, 20);
        let synthetic = match imm {
            IMM_CLZ => Some(ZBB_KEY_CLZ),
            IMM_CTZ => Some(ZBB_KEY_CTZ),
            IMM_CPOP => Some(ZBB_KEY_CPOP),
            IMM_SEXT_B => Some(ZBB_KEY_SEXT_B),
            IMM_SEXT_H => Some(ZBB_KEY_SEXT_H),
            _ => None,
        };
        if let Some(key) = synthetic {
            return key;
        }
    }

    if op == OP_IMM && f3 == FUNCT3_RORI && f7 == FUNCT7_ZBB_UNARY {
        return ZBB_KEY_RORI;
    }

    if op == OP_IMM && f3 == FUNCT3_RORI {
        let imm = field(word, 31, 20);
        if imm == IMM_ORC_B {
            return ZBB_KEY_ORC_B;
        }
        if imm == IMM_REV8 {
            return ZBB_KEY_REV8;
        }
    }

    if op == OP && f3 == FUNCT3_ZEXTH {
        let imm = field(word, 31, 20);
        if imm == IMM_ZEXT_H {
            return ZBB_KEY_ZEXT_H;
        }
    }

    if op == OP_FP && f7 == FUNCT7_FCVT_W_S {
        return match rs2(word) {
            0 => FCVT_KEY_W_S,
            _ => FCVT_KEY_WU_S,
        };
    }

    if op == OP_FP && f7 == FUNCT7_FCVT_S_W {
        return match rs2(word) {
            0 => FCVT_KEY_S_W,
            _ => FCVT_KEY_S_WU,
        };
    }

    natural_key(op, f3, f7)
}
