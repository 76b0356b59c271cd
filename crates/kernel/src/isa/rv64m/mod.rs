//! RV64M multiply extension subset.
//!
//! Only `mul` is implemented; the divide and remainder encodings fall
//! through to the unrecognized-instruction path.

/// Minor function codes under the multiply/divide opcode.
pub mod funct3;
/// Major function code selecting the multiply/divide group.
pub mod funct7;

use crate::core::cpu::Cpu;
use crate::isa::disasm;
use crate::isa::instruction::{
    InstructionBits, FUNCT3_BITS, FUNCT3_SHIFT, FUNCT7_BITS, FUNCT7_SHIFT, OPCODE_BITS,
};
use crate::isa::registry::Descriptor;
use crate::isa::rv64i::opcodes;

fn disasm_mul(inst: u32) -> String {
    disasm::r_type("mul", inst)
}

fn exec_mul(cpu: &mut Cpu, inst: u32, _pc_written: &mut bool) {
    // Low 64 bits of the signed product.
    let product = (cpu.read_register(inst.rs1()) as i64)
        .wrapping_mul(cpu.read_register(inst.rs2()) as i64);
    cpu.write_register(inst.rd(), product as u64);
}

/// Descriptor table for the implemented RV64M instructions.
pub static DESCRIPTORS: &[Descriptor] = &[Descriptor {
    name: "mul",
    mask: OPCODE_BITS | FUNCT3_BITS | FUNCT7_BITS,
    required_bits: opcodes::OP_REG
        | (funct3::MUL << FUNCT3_SHIFT)
        | (funct7::MULDIV << FUNCT7_SHIFT),
    disassemble: disasm_mul,
    execute: exec_mul,
}];
