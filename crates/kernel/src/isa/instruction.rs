//! Instruction field masks and extraction.
//!
//! All fields are defined against the standard RISC-V base encoding of a
//! 32-bit instruction word. The in-place `*_BITS` masks select a field
//! without shifting it down and are the building blocks for descriptor match
//! patterns; the `InstructionBits` trait extracts shifted field values.

/// Opcode field in place (bits 6:0).
pub const OPCODE_BITS: u32 = 0x0000_007F;
/// Destination register field in place (bits 11:7).
pub const RD_BITS: u32 = 0x0000_0F80;
/// Minor function code field in place (bits 14:12).
pub const FUNCT3_BITS: u32 = 0x0000_7000;
/// First source register field in place (bits 19:15).
pub const RS1_BITS: u32 = 0x000F_8000;
/// Second source register field in place (bits 24:20).
pub const RS2_BITS: u32 = 0x01F0_0000;
/// Major function code field in place (bits 31:25).
pub const FUNCT7_BITS: u32 = 0xFE00_0000;
/// Upper six bits of funct7 in place (bits 31:26).
///
/// The 64-bit shift-immediate encodings donate bit 25 to the shift amount,
/// so their match patterns must not constrain it.
pub const FUNCT6_BITS: u32 = 0xFC00_0000;

/// Bit position of the rd field.
pub const RD_SHIFT: u32 = 7;
/// Bit position of the funct3 field.
pub const FUNCT3_SHIFT: u32 = 12;
/// Bit position of the rs1 field.
pub const RS1_SHIFT: u32 = 15;
/// Bit position of the rs2 field.
pub const RS2_SHIFT: u32 = 20;
/// Bit position of the funct7 field.
pub const FUNCT7_SHIFT: u32 = 25;

/// Trait for extracting instruction fields from a 32-bit encoding.
///
/// Register extractors return `usize` so results index the register file
/// directly; function-code extractors return the raw field value.
pub trait InstructionBits {
    /// Extracts the 7-bit opcode (bits 6:0).
    fn opcode(&self) -> u32;
    /// Extracts the 5-bit destination register index (bits 11:7).
    fn rd(&self) -> usize;
    /// Extracts the 5-bit first source register index (bits 19:15).
    fn rs1(&self) -> usize;
    /// Extracts the 5-bit second source register index (bits 24:20).
    fn rs2(&self) -> usize;
    /// Extracts the 3-bit minor function code (bits 14:12).
    fn funct3(&self) -> u32;
    /// Extracts the 7-bit major function code (bits 31:25).
    fn funct7(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        self & OPCODE_BITS
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self & RD_BITS) >> RD_SHIFT) as usize
    }

    #[inline(always)]
    fn rs1(&self) -> usize {
        ((self & RS1_BITS) >> RS1_SHIFT) as usize
    }

    #[inline(always)]
    fn rs2(&self) -> usize {
        ((self & RS2_BITS) >> RS2_SHIFT) as usize
    }

    #[inline(always)]
    fn funct3(&self) -> u32 {
        (self & FUNCT3_BITS) >> FUNCT3_SHIFT
    }

    #[inline(always)]
    fn funct7(&self) -> u32 {
        (self & FUNCT7_BITS) >> FUNCT7_SHIFT
    }
}
