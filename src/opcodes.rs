//! Opcode, funct3 and funct7 constants for RV32IMF + Zbb.

pub const OP_LUI: u32 = 0b0110111;
pub const OP_AUIPC: u32 = 0b0010111;
pub const OP_JAL: u32 = 0b1101111;
pub const OP_JALR: u32 = 0b1100111;
pub const OP_IMM: u32 = 0b0010011;
pub const OP: u32 = 0b0110011;
pub const OP_BRANCH: u32 = 0b1100011;
pub const OP_LOAD: u32 = 0b0000011;
pub const OP_STORE: u32 = 0b0100011;
pub const OP_SYSTEM: u32 = 0b1110011;
pub const OP_FLOAD: u32 = 0b0000111;
pub const OP_FSTORE: u32 = 0b0100111;
pub const OP_FMADD: u32 = 0b1000011;
pub const OP_FMSUB: u32 = 0b1000111;
pub const OP_FNMSUB: u32 = 0b1001011;
pub const OP_FNMADD: u32 = 0b1001111;
pub const OP_FP: u32 = 0b1010011;

// Conditional branches
pub const FUNCT3_BEQ: u32 = 0b000;
pub const FUNCT3_BNE: u32 = 0b001;
pub const FUNCT3_BLT: u32 = 0b100;
pub const FUNCT3_BGE: u32 = 0b101;
pub const FUNCT3_BLTU: u32 = 0b110;
pub const FUNCT3_BGEU: u32 = 0b111;

// Load/store widths
pub const FUNCT3_B: u32 = 0b000;
pub const FUNCT3_H: u32 = 0b001;
pub const FUNCT3_W: u32 = 0b010;
pub const FUNCT3_BU: u32 = 0b100;
pub const FUNCT3_HU: u32 = 0b101;

// Register-immediate
pub const FUNCT3_ADDI: u32 = 0b000;
pub const FUNCT3_SLTI: u32 = 0b010;
pub const FUNCT3_SLTIU: u32 = 0b011;
pub const FUNCT3_XORI: u32 = 0b100;
pub const FUNCT3_ORI: u32 = 0b110;
pub const FUNCT3_ANDI: u32 = 0b111;
pub const FUNCT3_SLLI: u32 = 0b001;
pub const FUNCT3_SRLI_SRAI: u32 = 0b101;

// Register-register
pub const FUNCT3_ADD_SUB: u32 = 0b000;
pub const FUNCT3_SLL: u32 = 0b001;
pub const FUNCT3_SLT: u32 = 0b010;
pub const FUNCT3_SLTU: u32 = 0b011;
pub const FUNCT3_XOR: u32 = 0b100;
pub const FUNCT3_SRL_SRA: u32 = 0b101;
pub const FUNCT3_OR: u32 = 0b110;
pub const FUNCT3_AND: u32 = 0b111;

pub const FUNCT7_BASE: u32 = 0b0000000;
pub const FUNCT7_ALT: u32 = 0b0100000; // SUB, SRA
pub const FUNCT7_MULDIV: u32 = 0b0000001;

// M extension
pub const FUNCT3_MUL: u32 = 0b000;
pub const FUNCT3_MULH: u32 = 0b001;
pub const FUNCT3_MULHSU: u32 = 0b010;
pub const FUNCT3_MULHU: u32 = 0b011;
pub const FUNCT3_DIV: u32 = 0b100;
pub const FUNCT3_DIVU: u32 = 0b101;
pub const FUNCT3_REM: u32 = 0b110;
pub const FUNCT3_REMU: u32 = 0b111;

// Zbb funct7 values sharing opcode OP (register-register)
pub const FUNCT7_ZBB_LOGIC: u32 = 0b0100000; // ANDN/ORN/XNOR
pub const FUNCT7_ZBB_MINMAX: u32 = 0b0000101; // MIN/MAX/MINU/MAXU
pub const FUNCT7_ZBB_ROTATE: u32 = 0b0110000; // ROL/ROR (funct3 picks which)
pub const FUNCT3_ANDN: u32 = 0b111;
pub const FUNCT3_ORN: u32 = 0b110;
pub const FUNCT3_XNOR: u32 = 0b100;
pub const FUNCT3_MIN: u32 = 0b100;
pub const FUNCT3_MAX: u32 = 0b101;
pub const FUNCT3_MINU: u32 = 0b110;
pub const FUNCT3_MAXU: u32 = 0b111;
pub const FUNCT3_ROL: u32 = 0b001;
pub const FUNCT3_ROR: u32 = 0b101;

// Zbb funct7 and imm values sharing opcode OP_IMM (register-immediate, shift family)
pub const FUNCT7_ZBB_UNARY: u32 = 0b0110000;
pub const FUNCT3_ZBB_UNARY: u32 = 0b001; // CLZ/CTZ/CPOP/SEXT.B/SEXT.H share SLLI's funct3
pub const FUNCT3_RORI: u32 = 0b101; // shares SRLI/SRAI's funct3
pub const FUNCT3_ZEXTH: u32 = 0b100; // shares XORI's funct3, with a fixed rs2/imm pattern
pub const IMM_CLZ: u32 = 0b011000000000;
pub const IMM_CTZ: u32 = 0b011000000001;
pub const IMM_CPOP: u32 = 0b011000000010;
pub const IMM_SEXT_B: u32 = 0b011000000100;
pub const IMM_SEXT_H: u32 = 0b011000000101;
pub const IMM_ORC_B: u32 = 0b001010000111;
pub const IMM_REV8: u32 = 0b011010011000;
pub const IMM_ZEXT_H: u32 = 0b000010000000;

// OP-FP (F extension) funct7 selects the operation; funct5 used loosely below.
pub const FUNCT7_FADD: u32 = 0b0000000;
pub const FUNCT7_FSUB: u32 = 0b0000100;
pub const FUNCT7_FMUL: u32 = 0b0001000;
pub const FUNCT7_FDIV: u32 = 0b0001100;
pub const FUNCT7_FSQRT: u32 = 0b0101100;
pub const FUNCT7_FSGNJ: u32 = 0b0010000;
pub const FUNCT7_FMINMAX: u32 = 0b0010100;
pub const FUNCT7_FCMP: u32 = 0b1010000;
pub const FUNCT7_FCVT_W_S: u32 = 0b1100000;
pub const FUNCT7_FCVT_S_W: u32 = 0b1101000;
pub const FUNCT7_FMV_X_W_FCLASS: u32 = 0b1110000;
pub const FUNCT7_FMV_W_X: u32 = 0b1111000;

pub const FUNCT3_FSGNJ: u32 = 0b000;
pub const FUNCT3_FSGNJN: u32 = 0b001;
pub const FUNCT3_FSGNJX: u32 = 0b010;
pub const FUNCT3_FMIN: u32 = 0b000;
pub const FUNCT3_FMAX: u32 = 0b001;
pub const FUNCT3_FLE: u32 = 0b000;
pub const FUNCT3_FLT: u32 = 0b001;
pub const FUNCT3_FEQ: u32 = 0b010;
pub const FUNCT3_FMV_X_W: u32 = 0b000;
pub const FUNCT3_FCLASS: u32 = 0b001;

pub const RS2_FCVT_W: u32 = 0b00000;
pub const RS2_FCVT_WU: u32 = 0b00001;

pub const FUNCT3_ECALL: u32 = 0b000;
pub const FUNCT7_ECALL: u32 = 0b0000000;

/// Synthetic dispatch keys for the Zbb unary forms that alias I-format
/// shift encodings. These live outside the natural 24-bit
/// `opcode | funct3<<8 | funct7<<16` range, matching the reserved
/// range `original_source/include/Zbb.hpp` uses.
pub const ZBB_KEY_CLZ: u32 = 0x8000_0100;
pub const ZBB_KEY_CTZ: u32 = 0x8000_0101;
pub const ZBB_KEY_CPOP: u32 = 0x8000_0102;
pub const ZBB_KEY_SEXT_B: u32 = 0x8000_0103;
pub const ZBB_KEY_SEXT_H: u32 = 0x8000_0104;
pub const ZBB_KEY_RORI: u32 = 0x8000_0105;
pub const ZBB_KEY_ORC_B: u32 = 0x8000_0106;
pub const ZBB_KEY_REV8: u32 = 0x8000_0107;
pub const ZBB_KEY_ZEXT_H: u32 = 0x8000_0108;

/// FCVT.W.S and FCVT.WU.S (likewise FCVT.S.W and FCVT.S.WU) share every
/// field the natural key packs (opcode, funct7) and differ only in
/// `rs2`, which Section 4.2's key formula does not carry. The decoder
/// applies the same synthetic-key technique it uses for the Zbb unary
/// forms to this `rs2` ambiguity, using a disjoint corner of the
/// reserved range.
pub const FCVT_KEY_W_S: u32 = 0x8000_0110;
pub const FCVT_KEY_WU_S: u32 = 0x8000_0111;
pub const FCVT_KEY_S_W: u32 = 0x8000_0112;
pub const FCVT_KEY_S_WU: u32 = 0x8000_0113;
