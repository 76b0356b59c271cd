//! Shared disassembly rendering.
//!
//! Descriptors render an instruction body (`"addi x1, x0, -1"`); the CPU
//! prepends the fixed-width address column to produce the full trace line
//! (`"0x00000000   addi x1, x0, -1"`). Registers render as `x<n>`,
//! non-negative immediates as lowercase hex, negative immediates in signed
//! decimal. Memory operands render as `imm(xRs1)`.

use crate::isa::decode;
use crate::isa::instruction::InstructionBits;

/// Renders an immediate: signed decimal when negative, lowercase hex
/// otherwise.
pub fn imm(value: i64) -> String {
    if value < 0 {
        format!("{value}")
    } else {
        format!("{value:#x}")
    }
}

/// Prepends the fixed-width address column (eight hex digits, three spaces)
/// to an instruction body.
pub fn with_address(address: u64, body: &str) -> String {
    format!("{address:#010x}   {body}")
}

/// Renders a register-register instruction: `name xRd, xRs1, xRs2`.
pub(crate) fn r_type(name: &str, inst: u32) -> String {
    format!("{name} x{}, x{}, x{}", inst.rd(), inst.rs1(), inst.rs2())
}

/// Renders an immediate-arithmetic instruction: `name xRd, xRs1, imm`.
pub(crate) fn i_type(name: &str, inst: u32) -> String {
    format!(
        "{name} x{}, x{}, {}",
        inst.rd(),
        inst.rs1(),
        imm(decode::i_imm(inst))
    )
}

/// Renders a shift-immediate instruction: `name xRd, xRs1, shamt`.
pub(crate) fn shift_type(name: &str, inst: u32) -> String {
    format!(
        "{name} x{}, x{}, {}",
        inst.rd(),
        inst.rs1(),
        imm(decode::shamt(inst) as i64)
    )
}

/// Renders a load: `name xRd, imm(xRs1)`.
pub(crate) fn load_type(name: &str, inst: u32) -> String {
    format!(
        "{name} x{}, {}(x{})",
        inst.rd(),
        imm(decode::i_imm(inst)),
        inst.rs1()
    )
}

/// Renders a store: `name xRs2, imm(xRs1)`.
pub(crate) fn store_type(name: &str, inst: u32) -> String {
    format!(
        "{name} x{}, {}(x{})",
        inst.rs2(),
        imm(decode::s_imm(inst)),
        inst.rs1()
    )
}

/// Renders a conditional branch: `name xRs1, xRs2, imm`.
pub(crate) fn branch_type(name: &str, inst: u32) -> String {
    format!(
        "{name} x{}, x{}, {}",
        inst.rs1(),
        inst.rs2(),
        imm(decode::b_imm(inst))
    )
}

/// Renders an upper-immediate instruction: `name xRd, imm`.
pub(crate) fn u_type(name: &str, inst: u32) -> String {
    format!("{name} x{}, {}", inst.rd(), imm(decode::u_imm(inst)))
}
