//! Semantics catalog: builds the dispatch table binding decoded keys
//! (spec.md §4.2) to handler functions (spec.md §4.4).

mod rv32f;
mod rv32i;
mod rv32m;
mod system;
mod zbb;

use std::collections::HashMap;

use crate::decode::natural_key;
use crate::interpreter::Handler;
use crate::opcodes::*;

/// Build the full RV32IM + RV32F + Zbb dispatch table. Called once at
/// interpreter construction; the table is read-only thereafter
/// (spec.md §5).
pub fn build_dispatch_table() -> HashMap<u32, Handler> {
    let mut t: HashMap<u32, Handler> = HashMap::new();

    // Upper-immediate and jumps.
    t.insert(natural_key(OP_LUI, 0, 0), rv32i::lui);
    t.insert(natural_key(OP_AUIPC, 0, 0), rv32i::auipc);
    t.insert(natural_key(OP_JAL, 0, 0), rv32i::jal);
    t.insert(natural_key(OP_JALR, 0, 0), rv32i::jalr);

    // Register-immediate ALU.
    t.insert(natural_key(OP_IMM, FUNCT3_ADDI, 0), rv32i::addi);
    t.insert(natural_key(OP_IMM, FUNCT3_SLTI, 0), rv32i::slti);
    t.insert(natural_key(OP_IMM, FUNCT3_SLTIU, 0), rv32i::sltiu);
    t.insert(natural_key(OP_IMM, FUNCT3_XORI, 0), rv32i::xori);
    t.insert(natural_key(OP_IMM, FUNCT3_ORI, 0), rv32i::ori);
    t.insert(natural_key(OP_IMM, FUNCT3_ANDI, 0), rv32i::andi);
    t.insert(natural_key(OP_IMM, FUNCT3_SLLI, FUNCT7_BASE), rv32i::slli);
    t.insert(natural_key(OP_IMM, FUNCT3_SRLI_SRAI, FUNCT7_BASE), rv32i::srli);
    t.insert(natural_key(OP_IMM, FUNCT3_SRLI_SRAI, FUNCT7_ALT), rv32i::srai);

    // Register-register ALU (base).
    t.insert(natural_key(OP, FUNCT3_ADD_SUB, FUNCT7_BASE), rv32i::add);
    t.insert(natural_key(OP, FUNCT3_ADD_SUB, FUNCT7_ALT), rv32i::sub);
    t.insert(natural_key(OP, FUNCT3_SLL, FUNCT7_BASE), rv32i::sll);
    t.insert(natural_key(OP, FUNCT3_SLT, FUNCT7_BASE), rv32i::slt);
    t.insert(natural_key(OP, FUNCT3_SLTU, FUNCT7_BASE), rv32i::sltu);
    t.insert(natural_key(OP, FUNCT3_XOR, FUNCT7_BASE), rv32i::xor);
    t.insert(natural_key(OP, FUNCT3_SRL_SRA, FUNCT7_BASE), rv32i::srl);
    t.insert(natural_key(OP, FUNCT3_SRL_SRA, FUNCT7_ALT), rv32i::sra);
    t.insert(natural_key(OP, FUNCT3_OR, FUNCT7_BASE), rv32i::or);
    t.insert(natural_key(OP, FUNCT3_AND, FUNCT7_BASE), rv32i::and);

    // Loads/stores.
    t.insert(natural_key(OP_LOAD, FUNCT3_B, 0), rv32i::lb);
    t.insert(natural_key(OP_LOAD, FUNCT3_H, 0), rv32i::lh);
    t.insert(natural_key(OP_LOAD, FUNCT3_W, 0), rv32i::lw);
    t.insert(natural_key(OP_LOAD, FUNCT3_BU, 0), rv32i::lbu);
    t.insert(natural_key(OP_LOAD, FUNCT3_HU, 0), rv32i::lhu);
    t.insert(natural_key(OP_STORE, FUNCT3_B, 0), rv32i::sb);
    t.insert(natural_key(OP_STORE, FUNCT3_H, 0), rv32i::sh);
    t.insert(natural_key(OP_STORE, FUNCT3_W, 0), rv32i::sw);

    // Branches.
    t.insert(natural_key(OP_BRANCH, FUNCT3_BEQ, 0), rv32i::beq);
    t.insert(natural_key(OP_BRANCH, FUNCT3_BNE, 0), rv32i::bne);
    t.insert(natural_key(OP_BRANCH, FUNCT3_BLT, 0), rv32i::blt);
    t.insert(natural_key(OP_BRANCH, FUNCT3_BGE, 0), rv32i::bge);
    t.insert(natural_key(OP_BRANCH, FUNCT3_BLTU, 0), rv32i::bltu);
    t.insert(natural_key(OP_BRANCH, FUNCT3_BGEU, 0), rv32i::bgeu);

    // SYSTEM: ecall only (fence/ebreak are unsupported, fall through to TrapIllegal).
    t.insert(natural_key(OP_SYSTEM, FUNCT3_ECALL, FUNCT7_ECALL), system::ecall);

    // M extension.
    t.insert(natural_key(OP, FUNCT3_MUL, FUNCT7_MULDIV), rv32m::mul);
    t.insert(natural_key(OP, FUNCT3_MULH, FUNCT7_MULDIV), rv32m::mulh);
    t.insert(natural_key(OP, FUNCT3_MULHSU, FUNCT7_MULDIV), rv32m::mulhsu);
    t.insert(natural_key(OP, FUNCT3_MULHU, FUNCT7_MULDIV), rv32m::mulhu);
    t.insert(natural_key(OP, FUNCT3_DIV, FUNCT7_MULDIV), rv32m::div);
    t.insert(natural_key(OP, FUNCT3_DIVU, FUNCT7_MULDIV), rv32m::divu);
    t.insert(natural_key(OP, FUNCT3_REM, FUNCT7_MULDIV), rv32m::rem);
    t.insert(natural_key(OP, FUNCT3_REMU, FUNCT7_MULDIV), rv32m::remu);

    // Zbb register-register forms.
    t.insert(natural_key(OP, FUNCT3_ANDN, FUNCT7_ZBB_LOGIC), zbb::andn);
    t.insert(natural_key(OP, FUNCT3_ORN, FUNCT7_ZBB_LOGIC), zbb::orn);
    t.insert(natural_key(OP, FUNCT3_XNOR, FUNCT7_ZBB_LOGIC), zbb::xnor);
    t.insert(natural_key(OP, FUNCT3_MIN, FUNCT7_ZBB_MINMAX), zbb::min);
    t.insert(natural_key(OP, FUNCT3_MAX, FUNCT7_ZBB_MINMAX), zbb::max);
    t.insert(natural_key(OP, FUNCT3_MINU, FUNCT7_ZBB_MINMAX), zbb::minu);
    t.insert(natural_key(OP, FUNCT3_MAXU, FUNCT7_ZBB_MINMAX), zbb::maxu);
    t.insert(natural_key(OP, FUNCT3_ROL, FUNCT7_ZBB_ROTATE), zbb::rol);
    t.insert(natural_key(OP, FUNCT3_ROR, FUNCT7_ZBB_ROTATE), zbb::ror);

    // Zbb unary forms: synthetic keys substituted by the decoder.
    t.insert(ZBB_KEY_CLZ, zbb::clz);
    t.insert(ZBB_KEY_CTZ, zbb::ctz);
    t.insert(ZBB_KEY_CPOP, zbb::cpop);
    t.insert(ZBB_KEY_SEXT_B, zbb::sext_b);
    t.insert(ZBB_KEY_SEXT_H, zbb::sext_h);
    t.insert(ZBB_KEY_RORI, zbb::rori);
    t.insert(ZBB_KEY_ORC_B, zbb::orc_b);
    t.insert(ZBB_KEY_REV8, zbb::rev8);
    t.insert(ZBB_KEY_ZEXT_H, zbb::zext_h);

    // F extension: loads/stores.
    t.insert(natural_key(OP_FLOAD, FUNCT3_W, 0), rv32f::flw);
    t.insert(natural_key(OP_FSTORE, FUNCT3_W, 0), rv32f::fsw);

    // F extension: arithmetic, registered across every rounding-mode
    // encoding in funct3 (spec.md §4.2's rm-variant rule).
    for rm in 0u32..8 {
        t.insert(natural_key(OP_FP, rm, FUNCT7_FADD), rv32f::fadd);
        t.insert(natural_key(OP_FP, rm, FUNCT7_FSUB), rv32f::fsub);
        t.insert(natural_key(OP_FP, rm, FUNCT7_FMUL), rv32f::fmul);
        t.insert(natural_key(OP_FP, rm, FUNCT7_FDIV), rv32f::fdiv);
        t.insert(natural_key(OP_FP, rm, FUNCT7_FSQRT), rv32f::fsqrt);
        t.insert(natural_key(OP_FMADD, rm, 0), rv32f::fmadd);
        t.insert(natural_key(OP_FMSUB, rm, 0), rv32f::fmsub);
        t.insert(natural_key(OP_FNMSUB, rm, 0), rv32f::fnmsub);
        t.insert(natural_key(OP_FNMADD, rm, 0), rv32f::fnmadd);
    }

    // F extension: sign injection, min/max, compare, fixed funct3.
    t.insert(natural_key(OP_FP, FUNCT3_FSGNJ, FUNCT7_FSGNJ), rv32f::fsgnj);
    t.insert(natural_key(OP_FP, FUNCT3_FSGNJN, FUNCT7_FSGNJ), rv32f::fsgnjn);
    t.insert(natural_key(OP_FP, FUNCT3_FSGNJX, FUNCT7_FSGNJ), rv32f::fsgnjx);
    t.insert(natural_key(OP_FP, FUNCT3_FMIN, FUNCT7_FMINMAX), rv32f::fmin);
    t.insert(natural_key(OP_FP, FUNCT3_FMAX, FUNCT7_FMINMAX), rv32f::fmax);
    t.insert(natural_key(OP_FP, FUNCT3_FLE, FUNCT7_FCMP), rv32f::fle);
    t.insert(natural_key(OP_FP, FUNCT3_FLT, FUNCT7_FCMP), rv32f::flt);
    t.insert(natural_key(OP_FP, FUNCT3_FEQ, FUNCT7_FCMP), rv32f::feq);

    // F extension: conversions (synthetic rs2-disambiguated keys) and
    // raw moves/classification.
    t.insert(FCVT_KEY_W_S, rv32f::fcvt_w_s);
    t.insert(FCVT_KEY_WU_S, rv32f::fcvt_wu_s);
    t.insert(FCVT_KEY_S_W, rv32f::fcvt_s_w);
    t.insert(FCVT_KEY_S_WU, rv32f::fcvt_s_wu);
    t.insert(natural_key(OP_FP, FUNCT3_FMV_X_W, FUNCT7_FMV_X_W_FCLASS), rv32f::fmv_x_w);
    t.insert(natural_key(OP_FP, FUNCT3_FCLASS, FUNCT7_FMV_X_W_FCLASS), rv32f::fclass);
    t.insert(natural_key(OP_FP, 0, FUNCT7_FMV_W_X), rv32f::fmv_w_x);

    t
}
