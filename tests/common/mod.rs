//! Test-only instruction encoder and a tiny labeled assembler.
//!
//! Spec's §1 calls "assembler/encoder helpers used only by tests to
//! synthesize instruction words" an external collaborator outside the
//! interpreter core's scope; this module is exactly that collaborator.
//! It knows nothing about the interpreter beyond the opcode/funct
//! constants it reuses from [`rv32im_sim::opcodes`].

use std::collections::HashMap;

use rv32im_sim::opcodes::*;

pub fn r_type(opcode: u32, funct3: u32, funct7: u32, rd: u8, rs1: u8, rs2: u8) -> u32 {
    (funct7 << 25)
        | ((rs2 as u32) << 20)
        | ((rs1 as u32) << 15)
        | (funct3 << 12)
        | ((rd as u32) << 7)
        | opcode
}

pub fn i_type(opcode: u32, funct3: u32, rd: u8, rs1: u8, imm: i32) -> u32 {
    (((imm as u32) & 0xfff) << 20) | ((rs1 as u32) << 15) | (funct3 << 12) | ((rd as u32) << 7) | opcode
}

pub fn s_type(opcode: u32, funct3: u32, rs1: u8, rs2: u8, imm: i32) -> u32 {
    let imm = imm as u32;
    let hi = (imm >> 5) & 0x7f;
    let lo = imm & 0x1f;
    (hi << 25) | ((rs2 as u32) << 20) | ((rs1 as u32) << 15) | (funct3 << 12) | (lo << 7) | opcode
}

pub fn b_type(funct3: u32, rs1: u8, rs2: u8, imm: i32) -> u32 {
    let imm = imm as u32;
    let bit12 = (imm >> 12) & 1;
    let bit11 = (imm >> 11) & 1;
    let bits10_5 = (imm >> 5) & 0x3f;
    let bits4_1 = (imm >> 1) & 0xf;
    (bit12 << 31)
        | (bits10_5 << 25)
        | ((rs2 as u32) << 20)
        | ((rs1 as u32) << 15)
        | (funct3 << 12)
        | (bits4_1 << 8)
        | (bit11 << 7)
        | OP_BRANCH
}

pub fn u_type(opcode: u32, rd: u8, imm20: u32) -> u32 {
    ((imm20 & 0xf_ffff) << 12) | ((rd as u32) << 7) | opcode
}

pub fn j_type(rd: u8, imm: i32) -> u32 {
    let imm = imm as u32;
    let bit20 = (imm >> 20) & 1;
    let bits10_1 = (imm >> 1) & 0x3ff;
    let bit11 = (imm >> 11) & 1;
    let bits19_12 = (imm >> 12) & 0xff;
    (bit20 << 31) | (bits19_12 << 12) | (bit11 << 20) | (bits10_1 << 21) | ((rd as u32) << 7) | OP_JAL
}

pub fn addi(rd: u8, rs1: u8, imm: i32) -> u32 {
    i_type(OP_IMM, FUNCT3_ADDI, rd, rs1, imm)
}

pub fn lui(rd: u8, imm20: u32) -> u32 {
    u_type(OP_LUI, rd, imm20)
}

pub fn slli(rd: u8, rs1: u8, shamt: u32) -> u32 {
    i_type(OP_IMM, FUNCT3_SLLI, rd, rs1, shamt as i32)
}

pub fn add(rd: u8, rs1: u8, rs2: u8) -> u32 {
    r_type(OP, FUNCT3_ADD_SUB, FUNCT7_BASE, rd, rs1, rs2)
}

pub fn sub(rd: u8, rs1: u8, rs2: u8) -> u32 {
    r_type(OP, FUNCT3_ADD_SUB, FUNCT7_ALT, rd, rs1, rs2)
}

pub fn mul(rd: u8, rs1: u8, rs2: u8) -> u32 {
    r_type(OP, FUNCT3_MUL, FUNCT7_MULDIV, rd, rs1, rs2)
}

pub fn lbu(rd: u8, rs1: u8, imm: i32) -> u32 {
    i_type(OP_LOAD, FUNCT3_BU, rd, rs1, imm)
}

pub fn lw(rd: u8, rs1: u8, imm: i32) -> u32 {
    i_type(OP_LOAD, FUNCT3_W, rd, rs1, imm)
}

pub fn sb(rs1: u8, rs2: u8, imm: i32) -> u32 {
    s_type(OP_STORE, FUNCT3_B, rs1, rs2, imm)
}

pub fn sw(rs1: u8, rs2: u8, imm: i32) -> u32 {
    s_type(OP_STORE, FUNCT3_W, rs1, rs2, imm)
}

pub fn ecall() -> u32 {
    i_type(OP_SYSTEM, FUNCT3_ECALL, 0, 0, 0)
}

/// A single pending instruction: either a fully-resolved word or one
/// whose immediate is a not-yet-placed label, fixed up once every
/// label in the program has an address.
enum Pending {
    Word(u32),
    Branch { funct3: u32, rs1: u8, rs2: u8, target: String },
    Jal { rd: u8, target: String },
}

/// Two-pass assembler: collect instructions and label definitions in
/// program order, then resolve every label-relative branch/jump once
/// all addresses are known.
pub struct Assembler {
    base: u32,
    instrs: Vec<Pending>,
    labels: HashMap<String, u32>,
}

impl Assembler {
    pub fn new(base: u32) -> Self {
        Self { base, instrs: Vec::new(), labels: HashMap::new() }
    }

    fn here(&self) -> u32 {
        self.base + (self.instrs.len() as u32) * 4
    }

    pub fn label(&mut self, name: &str) -> &mut Self {
        let addr = self.here();
        self.labels.insert(name.to_string(), addr);
        self
    }

    pub fn emit(&mut self, word: u32) -> &mut Self {
        self.instrs.push(Pending::Word(word));
        self
    }

    pub fn beq(&mut self, rs1: u8, rs2: u8, target: &str) -> &mut Self {
        self.branch(FUNCT3_BEQ, rs1, rs2, target)
    }

    pub fn bge(&mut self, rs1: u8, rs2: u8, target: &str) -> &mut Self {
        self.branch(FUNCT3_BGE, rs1, rs2, target)
    }

    pub fn blt(&mut self, rs1: u8, rs2: u8, target: &str) -> &mut Self {
        self.branch(FUNCT3_BLT, rs1, rs2, target)
    }

    fn branch(&mut self, funct3: u32, rs1: u8, rs2: u8, target: &str) -> &mut Self {
        self.instrs.push(Pending::Branch { funct3, rs1, rs2, target: target.to_string() });
        self
    }

    pub fn jump(&mut self, target: &str) -> &mut Self {
        self.instrs.push(Pending::Jal { rd: 0, target: target.to_string() });
        self
    }

    /// Resolve all labels and produce the final instruction stream.
    pub fn assemble(self) -> Vec<u32> {
        let Assembler { base, instrs, labels } = self;
        instrs
            .into_iter()
            .enumerate()
            .map(|(idx, pending)| {
                let pc = base + (idx as u32) * 4;
                match pending {
                    Pending::Word(w) => w,
                    Pending::Branch { funct3, rs1, rs2, target } => {
                        let dest = *labels.get(&target).unwrap_or_else(|| panic!("undefined label {target}"));
                        b_type(funct3, rs1, rs2, (dest as i32).wrapping_sub(pc as i32))
                    }
                    Pending::Jal { rd, target } => {
                        let dest = *labels.get(&target).unwrap_or_else(|| panic!("undefined label {target}"));
                        j_type(rd, (dest as i32).wrapping_sub(pc as i32))
                    }
                }
            })
            .collect()
    }
}
