//! RV64M major function code (funct7, bits 31:25).

/// Selects the multiply/divide group under the register-register opcode.
pub const MULDIV: u32 = 0b0000001;
