//! RV64I minor function codes (funct3, bits 14:12).
//!
//! The funct3 field distinguishes instructions sharing a major opcode; the
//! groups below each apply under their own opcode, so equal values between
//! groups are expected.

// Under OP_LOAD.

/// Load byte, sign-extended.
pub const LB: u32 = 0b000;
/// Load halfword, sign-extended.
pub const LH: u32 = 0b001;
/// Load word, sign-extended.
pub const LW: u32 = 0b010;
/// Load doubleword.
pub const LD: u32 = 0b011;
/// Load byte, zero-extended.
pub const LBU: u32 = 0b100;
/// Load halfword, zero-extended.
pub const LHU: u32 = 0b101;
/// Load word, zero-extended.
pub const LWU: u32 = 0b110;

// Under OP_STORE.

/// Store byte.
pub const SB: u32 = 0b000;
/// Store halfword.
pub const SH: u32 = 0b001;
/// Store word.
pub const SW: u32 = 0b010;
/// Store doubleword.
pub const SD: u32 = 0b011;

// Under OP_BRANCH.

/// Branch if equal.
pub const BEQ: u32 = 0b000;
/// Branch if not equal.
pub const BNE: u32 = 0b001;
/// Branch if less than, signed.
pub const BLT: u32 = 0b100;
/// Branch if greater than or equal, signed.
pub const BGE: u32 = 0b101;
/// Branch if less than, unsigned.
pub const BLTU: u32 = 0b110;
/// Branch if greater than or equal, unsigned.
pub const BGEU: u32 = 0b111;

// Under OP_IMM and OP_IMM_32.

/// Add immediate (also ADDIW under OP_IMM_32).
pub const ADDI: u32 = 0b000;
/// Shift left logical by immediate.
pub const SLLI: u32 = 0b001;
/// Set less than immediate, signed.
pub const SLTI: u32 = 0b010;
/// Set less than immediate, unsigned.
pub const SLTIU: u32 = 0b011;
/// XOR immediate.
pub const XORI: u32 = 0b100;
/// Shift right by immediate; funct7 upper bits select logical or arithmetic.
pub const SRLI_SRAI: u32 = 0b101;
/// OR immediate.
pub const ORI: u32 = 0b110;
/// AND immediate.
pub const ANDI: u32 = 0b111;

// Under OP_REG and OP_REG_32.

/// Add or subtract; funct7 selects which (also ADDW/SUBW under OP_REG_32).
pub const ADD_SUB: u32 = 0b000;
/// Shift left logical.
pub const SLL: u32 = 0b001;
/// Set less than, signed.
pub const SLT: u32 = 0b010;
/// Set less than, unsigned.
pub const SLTU: u32 = 0b011;
/// Bitwise XOR.
pub const XOR: u32 = 0b100;
/// Shift right; funct7 selects logical or arithmetic.
pub const SRL_SRA: u32 = 0b101;
/// Bitwise OR.
pub const OR: u32 = 0b110;
/// Bitwise AND.
pub const AND: u32 = 0b111;

// Under OP_JALR and OP_SYSTEM.

/// Jump and link register.
pub const JALR: u32 = 0b000;
/// Privileged/system encodings (EBREAK).
pub const PRIV: u32 = 0b000;
