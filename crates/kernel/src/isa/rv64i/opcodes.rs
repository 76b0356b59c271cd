//! RV64I major opcodes (bits 6:0).

/// Loads (LB, LH, LW, LD, LBU, LHU, LWU).
pub const OP_LOAD: u32 = 0b0000011;

/// Immediate arithmetic (ADDI, ANDI, SLLI, ...).
pub const OP_IMM: u32 = 0b0010011;

/// Add upper immediate to PC (AUIPC).
pub const OP_AUIPC: u32 = 0b0010111;

/// 32-bit immediate arithmetic (ADDIW); RV64 only.
pub const OP_IMM_32: u32 = 0b0011011;

/// Stores (SB, SH, SW, SD).
pub const OP_STORE: u32 = 0b0100011;

/// Register-register arithmetic (ADD, SUB, SLL, ...).
pub const OP_REG: u32 = 0b0110011;

/// Load upper immediate (LUI).
pub const OP_LUI: u32 = 0b0110111;

/// 32-bit register-register arithmetic (ADDW, SUBW); RV64 only.
pub const OP_REG_32: u32 = 0b0111011;

/// Conditional branches (BEQ, BNE, BLT, BGE, BLTU, BGEU).
pub const OP_BRANCH: u32 = 0b1100011;

/// Jump and link register (JALR).
pub const OP_JALR: u32 = 0b1100111;

/// Jump and link (JAL).
pub const OP_JAL: u32 = 0b1101111;

/// System instructions (EBREAK).
pub const OP_SYSTEM: u32 = 0b1110011;
