//! RV64I major function codes (funct7, bits 31:25).

/// Base encoding: ADD, SLL, SRL, and the logical shift immediates.
pub const BASE: u32 = 0b0000000;

/// Alternate encoding: selects SUB and the arithmetic right shifts.
pub const ALT: u32 = 0b0100000;
