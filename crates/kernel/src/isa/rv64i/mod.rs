//! RV64I base integer instruction set.
//!
//! One descriptor per implemented mnemonic: a match pattern over the
//! opcode/funct3/funct7 fields plus the executor and disassembler for that
//! family. The table feeds the first-match registry, so the narrowest
//! pattern (`ebreak`, which pins every field) comes first, and the
//! shift-immediate entries mask only the upper six bits of funct7 because
//! bit 25 belongs to the 64-bit shift amount.

/// Minor function codes under each major opcode.
pub mod funct3;
/// Major function codes distinguishing base and alternate encodings.
pub mod funct7;
/// Major opcodes.
pub mod opcodes;

use crate::core::cpu::Cpu;
use crate::isa::decode;
use crate::isa::disasm;
use crate::isa::instruction::{
    InstructionBits, FUNCT3_BITS, FUNCT3_SHIFT, FUNCT6_BITS, FUNCT7_BITS, FUNCT7_SHIFT,
    OPCODE_BITS, RD_BITS, RS1_BITS, RS2_BITS, RS2_SHIFT,
};
use crate::isa::registry::Descriptor;

// ---------- Upper-immediate instructions ----------

fn disasm_lui(inst: u32) -> String {
    disasm::u_type("lui", inst)
}

fn exec_lui(cpu: &mut Cpu, inst: u32, _pc_written: &mut bool) {
    cpu.write_register(inst.rd(), decode::u_imm(inst) as u64);
}

fn disasm_auipc(inst: u32) -> String {
    disasm::u_type("auipc", inst)
}

fn exec_auipc(cpu: &mut Cpu, inst: u32, _pc_written: &mut bool) {
    let value = cpu.pc().wrapping_add(decode::u_imm(inst) as u64);
    cpu.write_register(inst.rd(), value);
}

// ---------- Immediate arithmetic ----------

fn disasm_addi(inst: u32) -> String {
    disasm::i_type("addi", inst)
}

fn exec_addi(cpu: &mut Cpu, inst: u32, _pc_written: &mut bool) {
    let value = cpu
        .read_register(inst.rs1())
        .wrapping_add(decode::i_imm(inst) as u64);
    cpu.write_register(inst.rd(), value);
}

fn disasm_slti(inst: u32) -> String {
    disasm::i_type("slti", inst)
}

fn exec_slti(cpu: &mut Cpu, inst: u32, _pc_written: &mut bool) {
    let lhs = cpu.read_register(inst.rs1()) as i64;
    cpu.write_register(inst.rd(), (lhs < decode::i_imm(inst)) as u64);
}

fn disasm_sltiu(inst: u32) -> String {
    disasm::i_type("sltiu", inst)
}

fn exec_sltiu(cpu: &mut Cpu, inst: u32, _pc_written: &mut bool) {
    let lhs = cpu.read_register(inst.rs1());
    cpu.write_register(inst.rd(), (lhs < decode::i_imm(inst) as u64) as u64);
}

fn disasm_xori(inst: u32) -> String {
    disasm::i_type("xori", inst)
}

fn exec_xori(cpu: &mut Cpu, inst: u32, _pc_written: &mut bool) {
    let value = cpu.read_register(inst.rs1()) ^ decode::i_imm(inst) as u64;
    cpu.write_register(inst.rd(), value);
}

fn disasm_ori(inst: u32) -> String {
    disasm::i_type("ori", inst)
}

fn exec_ori(cpu: &mut Cpu, inst: u32, _pc_written: &mut bool) {
    let value = cpu.read_register(inst.rs1()) | decode::i_imm(inst) as u64;
    cpu.write_register(inst.rd(), value);
}

fn disasm_andi(inst: u32) -> String {
    disasm::i_type("andi", inst)
}

fn exec_andi(cpu: &mut Cpu, inst: u32, _pc_written: &mut bool) {
    let value = cpu.read_register(inst.rs1()) & decode::i_imm(inst) as u64;
    cpu.write_register(inst.rd(), value);
}

fn disasm_slli(inst: u32) -> String {
    disasm::shift_type("slli", inst)
}

fn exec_slli(cpu: &mut Cpu, inst: u32, _pc_written: &mut bool) {
    let value = cpu.read_register(inst.rs1()) << decode::shamt(inst);
    cpu.write_register(inst.rd(), value);
}

fn disasm_srli(inst: u32) -> String {
    disasm::shift_type("srli", inst)
}

fn exec_srli(cpu: &mut Cpu, inst: u32, _pc_written: &mut bool) {
    let value = cpu.read_register(inst.rs1()) >> decode::shamt(inst);
    cpu.write_register(inst.rd(), value);
}

fn disasm_srai(inst: u32) -> String {
    disasm::shift_type("srai", inst)
}

fn exec_srai(cpu: &mut Cpu, inst: u32, _pc_written: &mut bool) {
    // Arithmetic shift: the sign bit replicates into the vacated positions.
    let value = (cpu.read_register(inst.rs1()) as i64) >> decode::shamt(inst);
    cpu.write_register(inst.rd(), value as u64);
}

fn disasm_addiw(inst: u32) -> String {
    disasm::i_type("addiw", inst)
}

fn exec_addiw(cpu: &mut Cpu, inst: u32, _pc_written: &mut bool) {
    let sum = cpu
        .read_register(inst.rs1())
        .wrapping_add(decode::i_imm(inst) as u64);
    cpu.write_register(inst.rd(), sum as i32 as i64 as u64);
}

// ---------- Register-register arithmetic ----------

fn disasm_add(inst: u32) -> String {
    disasm::r_type("add", inst)
}

fn exec_add(cpu: &mut Cpu, inst: u32, _pc_written: &mut bool) {
    let value = cpu
        .read_register(inst.rs1())
        .wrapping_add(cpu.read_register(inst.rs2()));
    cpu.write_register(inst.rd(), value);
}

fn disasm_sub(inst: u32) -> String {
    disasm::r_type("sub", inst)
}

fn exec_sub(cpu: &mut Cpu, inst: u32, _pc_written: &mut bool) {
    let value = cpu
        .read_register(inst.rs1())
        .wrapping_sub(cpu.read_register(inst.rs2()));
    cpu.write_register(inst.rd(), value);
}

fn disasm_sll(inst: u32) -> String {
    disasm::r_type("sll", inst)
}

fn exec_sll(cpu: &mut Cpu, inst: u32, _pc_written: &mut bool) {
    let amount = cpu.read_register(inst.rs2()) & 0x3F;
    let value = cpu.read_register(inst.rs1()) << amount;
    cpu.write_register(inst.rd(), value);
}

fn disasm_slt(inst: u32) -> String {
    disasm::r_type("slt", inst)
}

fn exec_slt(cpu: &mut Cpu, inst: u32, _pc_written: &mut bool) {
    let lhs = cpu.read_register(inst.rs1()) as i64;
    let rhs = cpu.read_register(inst.rs2()) as i64;
    cpu.write_register(inst.rd(), (lhs < rhs) as u64);
}

fn disasm_sltu(inst: u32) -> String {
    disasm::r_type("sltu", inst)
}

fn exec_sltu(cpu: &mut Cpu, inst: u32, _pc_written: &mut bool) {
    let lhs = cpu.read_register(inst.rs1());
    let rhs = cpu.read_register(inst.rs2());
    cpu.write_register(inst.rd(), (lhs < rhs) as u64);
}

fn disasm_xor(inst: u32) -> String {
    disasm::r_type("xor", inst)
}

fn exec_xor(cpu: &mut Cpu, inst: u32, _pc_written: &mut bool) {
    let value = cpu.read_register(inst.rs1()) ^ cpu.read_register(inst.rs2());
    cpu.write_register(inst.rd(), value);
}

fn disasm_srl(inst: u32) -> String {
    disasm::r_type("srl", inst)
}

fn exec_srl(cpu: &mut Cpu, inst: u32, _pc_written: &mut bool) {
    let amount = cpu.read_register(inst.rs2()) & 0x3F;
    let value = cpu.read_register(inst.rs1()) >> amount;
    cpu.write_register(inst.rd(), value);
}

fn disasm_sra(inst: u32) -> String {
    disasm::r_type("sra", inst)
}

fn exec_sra(cpu: &mut Cpu, inst: u32, _pc_written: &mut bool) {
    let amount = cpu.read_register(inst.rs2()) & 0x3F;
    let value = (cpu.read_register(inst.rs1()) as i64) >> amount;
    cpu.write_register(inst.rd(), value as u64);
}

fn disasm_or(inst: u32) -> String {
    disasm::r_type("or", inst)
}

fn exec_or(cpu: &mut Cpu, inst: u32, _pc_written: &mut bool) {
    let value = cpu.read_register(inst.rs1()) | cpu.read_register(inst.rs2());
    cpu.write_register(inst.rd(), value);
}

fn disasm_and(inst: u32) -> String {
    disasm::r_type("and", inst)
}

fn exec_and(cpu: &mut Cpu, inst: u32, _pc_written: &mut bool) {
    let value = cpu.read_register(inst.rs1()) & cpu.read_register(inst.rs2());
    cpu.write_register(inst.rd(), value);
}

fn disasm_addw(inst: u32) -> String {
    disasm::r_type("addw", inst)
}

fn exec_addw(cpu: &mut Cpu, inst: u32, _pc_written: &mut bool) {
    let sum = cpu
        .read_register(inst.rs1())
        .wrapping_add(cpu.read_register(inst.rs2()));
    cpu.write_register(inst.rd(), sum as i32 as i64 as u64);
}

fn disasm_subw(inst: u32) -> String {
    disasm::r_type("subw", inst)
}

fn exec_subw(cpu: &mut Cpu, inst: u32, _pc_written: &mut bool) {
    let difference = cpu
        .read_register(inst.rs1())
        .wrapping_sub(cpu.read_register(inst.rs2()));
    cpu.write_register(inst.rd(), difference as i32 as i64 as u64);
}

// ---------- Loads ----------

fn disasm_lb(inst: u32) -> String {
    disasm::load_type("lb", inst)
}

fn exec_lb(cpu: &mut Cpu, inst: u32, _pc_written: &mut bool) {
    let address = effective_address(cpu, inst, decode::i_imm(inst));
    let value = cpu.load_u8(address) as i8 as i64 as u64;
    cpu.write_register(inst.rd(), value);
}

fn disasm_lh(inst: u32) -> String {
    disasm::load_type("lh", inst)
}

fn exec_lh(cpu: &mut Cpu, inst: u32, _pc_written: &mut bool) {
    let address = effective_address(cpu, inst, decode::i_imm(inst));
    let value = cpu.load_u16(address) as i16 as i64 as u64;
    cpu.write_register(inst.rd(), value);
}

fn disasm_lw(inst: u32) -> String {
    disasm::load_type("lw", inst)
}

fn exec_lw(cpu: &mut Cpu, inst: u32, _pc_written: &mut bool) {
    let address = effective_address(cpu, inst, decode::i_imm(inst));
    let value = cpu.load_u32(address) as i32 as i64 as u64;
    cpu.write_register(inst.rd(), value);
}

fn disasm_ld(inst: u32) -> String {
    disasm::load_type("ld", inst)
}

fn exec_ld(cpu: &mut Cpu, inst: u32, _pc_written: &mut bool) {
    let address = effective_address(cpu, inst, decode::i_imm(inst));
    let value = cpu.load_u64(address);
    cpu.write_register(inst.rd(), value);
}

fn disasm_lbu(inst: u32) -> String {
    disasm::load_type("lbu", inst)
}

fn exec_lbu(cpu: &mut Cpu, inst: u32, _pc_written: &mut bool) {
    let address = effective_address(cpu, inst, decode::i_imm(inst));
    let value = cpu.load_u8(address) as u64;
    cpu.write_register(inst.rd(), value);
}

fn disasm_lhu(inst: u32) -> String {
    disasm::load_type("lhu", inst)
}

fn exec_lhu(cpu: &mut Cpu, inst: u32, _pc_written: &mut bool) {
    let address = effective_address(cpu, inst, decode::i_imm(inst));
    let value = cpu.load_u16(address) as u64;
    cpu.write_register(inst.rd(), value);
}

fn disasm_lwu(inst: u32) -> String {
    disasm::load_type("lwu", inst)
}

fn exec_lwu(cpu: &mut Cpu, inst: u32, _pc_written: &mut bool) {
    let address = effective_address(cpu, inst, decode::i_imm(inst));
    let value = cpu.load_u32(address) as u64;
    cpu.write_register(inst.rd(), value);
}

// ---------- Stores ----------

fn disasm_sb(inst: u32) -> String {
    disasm::store_type("sb", inst)
}

fn exec_sb(cpu: &mut Cpu, inst: u32, _pc_written: &mut bool) {
    let address = effective_address(cpu, inst, decode::s_imm(inst));
    let value = cpu.read_register(inst.rs2()) as u8;
    cpu.store_u8(address, value);
}

fn disasm_sh(inst: u32) -> String {
    disasm::store_type("sh", inst)
}

fn exec_sh(cpu: &mut Cpu, inst: u32, _pc_written: &mut bool) {
    let address = effective_address(cpu, inst, decode::s_imm(inst));
    let value = cpu.read_register(inst.rs2()) as u16;
    cpu.store_u16(address, value);
}

fn disasm_sw(inst: u32) -> String {
    disasm::store_type("sw", inst)
}

fn exec_sw(cpu: &mut Cpu, inst: u32, _pc_written: &mut bool) {
    let address = effective_address(cpu, inst, decode::s_imm(inst));
    let value = cpu.read_register(inst.rs2()) as u32;
    cpu.store_u32(address, value);
}

fn disasm_sd(inst: u32) -> String {
    disasm::store_type("sd", inst)
}

fn exec_sd(cpu: &mut Cpu, inst: u32, _pc_written: &mut bool) {
    let address = effective_address(cpu, inst, decode::s_imm(inst));
    let value = cpu.read_register(inst.rs2());
    cpu.store_u64(address, value);
}

// ---------- Control flow ----------

fn disasm_jal(inst: u32) -> String {
    format!("jal x{}, {}", inst.rd(), disasm::imm(decode::j_imm(inst)))
}

fn exec_jal(cpu: &mut Cpu, inst: u32, pc_written: &mut bool) {
    let pc = cpu.pc();
    cpu.write_register(inst.rd(), pc.wrapping_add(4));
    cpu.set_pc(pc.wrapping_add(decode::j_imm(inst) as u64));
    *pc_written = true;
}

fn disasm_jalr(inst: u32) -> String {
    disasm::i_type("jalr", inst)
}

fn exec_jalr(cpu: &mut Cpu, inst: u32, pc_written: &mut bool) {
    // The target is computed before the link write so rd == rs1 still jumps
    // through the old register value; the link value is the address of the
    // following instruction.
    let pc = cpu.pc();
    let target = cpu
        .read_register(inst.rs1())
        .wrapping_add(decode::i_imm(inst) as u64)
        & !1;
    cpu.set_pc(target);
    cpu.write_register(inst.rd(), pc.wrapping_add(4));
    *pc_written = true;
}

/// Redirects PC by the B-type displacement of a taken branch.
fn take_branch(cpu: &mut Cpu, inst: u32, pc_written: &mut bool) {
    cpu.set_pc(cpu.pc().wrapping_add(decode::b_imm(inst) as u64));
    *pc_written = true;
}

fn disasm_beq(inst: u32) -> String {
    disasm::branch_type("beq", inst)
}

fn exec_beq(cpu: &mut Cpu, inst: u32, pc_written: &mut bool) {
    if cpu.read_register(inst.rs1()) == cpu.read_register(inst.rs2()) {
        take_branch(cpu, inst, pc_written);
    }
}

fn disasm_bne(inst: u32) -> String {
    disasm::branch_type("bne", inst)
}

fn exec_bne(cpu: &mut Cpu, inst: u32, pc_written: &mut bool) {
    if cpu.read_register(inst.rs1()) != cpu.read_register(inst.rs2()) {
        take_branch(cpu, inst, pc_written);
    }
}

fn disasm_blt(inst: u32) -> String {
    disasm::branch_type("blt", inst)
}

fn exec_blt(cpu: &mut Cpu, inst: u32, pc_written: &mut bool) {
    if (cpu.read_register(inst.rs1()) as i64) < (cpu.read_register(inst.rs2()) as i64) {
        take_branch(cpu, inst, pc_written);
    }
}

fn disasm_bge(inst: u32) -> String {
    disasm::branch_type("bge", inst)
}

fn exec_bge(cpu: &mut Cpu, inst: u32, pc_written: &mut bool) {
    if (cpu.read_register(inst.rs1()) as i64) >= (cpu.read_register(inst.rs2()) as i64) {
        take_branch(cpu, inst, pc_written);
    }
}

fn disasm_bltu(inst: u32) -> String {
    disasm::branch_type("bltu", inst)
}

fn exec_bltu(cpu: &mut Cpu, inst: u32, pc_written: &mut bool) {
    if cpu.read_register(inst.rs1()) < cpu.read_register(inst.rs2()) {
        take_branch(cpu, inst, pc_written);
    }
}

fn disasm_bgeu(inst: u32) -> String {
    disasm::branch_type("bgeu", inst)
}

fn exec_bgeu(cpu: &mut Cpu, inst: u32, pc_written: &mut bool) {
    if cpu.read_register(inst.rs1()) >= cpu.read_register(inst.rs2()) {
        take_branch(cpu, inst, pc_written);
    }
}

// ---------- System ----------

fn disasm_ebreak(_inst: u32) -> String {
    "ebreak".to_string()
}

fn exec_ebreak(cpu: &mut Cpu, _inst: u32, _pc_written: &mut bool) {
    cpu.halt();
}

/// Computes a load/store effective address: rs1 plus the format immediate.
fn effective_address(cpu: &mut Cpu, inst: u32, offset: i64) -> u64 {
    cpu.read_register(inst.rs1()).wrapping_add(offset as u64)
}

/// All six instruction fields; pins one exact 32-bit encoding.
const EXACT: u32 = OPCODE_BITS | RD_BITS | FUNCT3_BITS | RS1_BITS | RS2_BITS | FUNCT7_BITS;
/// Opcode plus funct3; the common pattern for I/S/B-format families.
const OP_F3: u32 = OPCODE_BITS | FUNCT3_BITS;
/// Opcode, funct3, and full funct7; the R-format pattern.
const OP_F3_F7: u32 = OPCODE_BITS | FUNCT3_BITS | FUNCT7_BITS;
/// Opcode, funct3, and the upper six bits of funct7; the shift-immediate
/// pattern.
const OP_F3_F6: u32 = OPCODE_BITS | FUNCT3_BITS | FUNCT6_BITS;

/// Descriptor table for the implemented RV64I instructions, in match order.
pub static DESCRIPTORS: &[Descriptor] = &[
    // Pins every field; must precede anything else sharing its opcode.
    Descriptor {
        name: "ebreak",
        mask: EXACT,
        required_bits: opcodes::OP_SYSTEM | (funct3::PRIV << FUNCT3_SHIFT) | (1 << RS2_SHIFT),
        disassemble: disasm_ebreak,
        execute: exec_ebreak,
    },
    Descriptor {
        name: "lui",
        mask: OPCODE_BITS,
        required_bits: opcodes::OP_LUI,
        disassemble: disasm_lui,
        execute: exec_lui,
    },
    Descriptor {
        name: "auipc",
        mask: OPCODE_BITS,
        required_bits: opcodes::OP_AUIPC,
        disassemble: disasm_auipc,
        execute: exec_auipc,
    },
    Descriptor {
        name: "addi",
        mask: OP_F3,
        required_bits: opcodes::OP_IMM | (funct3::ADDI << FUNCT3_SHIFT),
        disassemble: disasm_addi,
        execute: exec_addi,
    },
    // The shift immediates leave bit 25 to the shamt, so only the upper six
    // funct7 bits participate in the match.
    Descriptor {
        name: "slli",
        mask: OP_F3_F6,
        required_bits: opcodes::OP_IMM
            | (funct3::SLLI << FUNCT3_SHIFT)
            | (funct7::BASE << FUNCT7_SHIFT),
        disassemble: disasm_slli,
        execute: exec_slli,
    },
    Descriptor {
        name: "srli",
        mask: OP_F3_F6,
        required_bits: opcodes::OP_IMM
            | (funct3::SRLI_SRAI << FUNCT3_SHIFT)
            | (funct7::BASE << FUNCT7_SHIFT),
        disassemble: disasm_srli,
        execute: exec_srli,
    },
    Descriptor {
        name: "srai",
        mask: OP_F3_F6,
        required_bits: opcodes::OP_IMM
            | (funct3::SRLI_SRAI << FUNCT3_SHIFT)
            | (funct7::ALT << FUNCT7_SHIFT),
        disassemble: disasm_srai,
        execute: exec_srai,
    },
    Descriptor {
        name: "slti",
        mask: OP_F3,
        required_bits: opcodes::OP_IMM | (funct3::SLTI << FUNCT3_SHIFT),
        disassemble: disasm_slti,
        execute: exec_slti,
    },
    Descriptor {
        name: "sltiu",
        mask: OP_F3,
        required_bits: opcodes::OP_IMM | (funct3::SLTIU << FUNCT3_SHIFT),
        disassemble: disasm_sltiu,
        execute: exec_sltiu,
    },
    Descriptor {
        name: "xori",
        mask: OP_F3,
        required_bits: opcodes::OP_IMM | (funct3::XORI << FUNCT3_SHIFT),
        disassemble: disasm_xori,
        execute: exec_xori,
    },
    Descriptor {
        name: "ori",
        mask: OP_F3,
        required_bits: opcodes::OP_IMM | (funct3::ORI << FUNCT3_SHIFT),
        disassemble: disasm_ori,
        execute: exec_ori,
    },
    Descriptor {
        name: "andi",
        mask: OP_F3,
        required_bits: opcodes::OP_IMM | (funct3::ANDI << FUNCT3_SHIFT),
        disassemble: disasm_andi,
        execute: exec_andi,
    },
    Descriptor {
        name: "addiw",
        mask: OP_F3,
        required_bits: opcodes::OP_IMM_32 | (funct3::ADDI << FUNCT3_SHIFT),
        disassemble: disasm_addiw,
        execute: exec_addiw,
    },
    Descriptor {
        name: "add",
        mask: OP_F3_F7,
        required_bits: opcodes::OP_REG
            | (funct3::ADD_SUB << FUNCT3_SHIFT)
            | (funct7::BASE << FUNCT7_SHIFT),
        disassemble: disasm_add,
        execute: exec_add,
    },
    Descriptor {
        name: "sub",
        mask: OP_F3_F7,
        required_bits: opcodes::OP_REG
            | (funct3::ADD_SUB << FUNCT3_SHIFT)
            | (funct7::ALT << FUNCT7_SHIFT),
        disassemble: disasm_sub,
        execute: exec_sub,
    },
    Descriptor {
        name: "sll",
        mask: OP_F3_F7,
        required_bits: opcodes::OP_REG
            | (funct3::SLL << FUNCT3_SHIFT)
            | (funct7::BASE << FUNCT7_SHIFT),
        disassemble: disasm_sll,
        execute: exec_sll,
    },
    Descriptor {
        name: "slt",
        mask: OP_F3_F7,
        required_bits: opcodes::OP_REG
            | (funct3::SLT << FUNCT3_SHIFT)
            | (funct7::BASE << FUNCT7_SHIFT),
        disassemble: disasm_slt,
        execute: exec_slt,
    },
    Descriptor {
        name: "sltu",
        mask: OP_F3_F7,
        required_bits: opcodes::OP_REG
            | (funct3::SLTU << FUNCT3_SHIFT)
            | (funct7::BASE << FUNCT7_SHIFT),
        disassemble: disasm_sltu,
        execute: exec_sltu,
    },
    Descriptor {
        name: "xor",
        mask: OP_F3_F7,
        required_bits: opcodes::OP_REG
            | (funct3::XOR << FUNCT3_SHIFT)
            | (funct7::BASE << FUNCT7_SHIFT),
        disassemble: disasm_xor,
        execute: exec_xor,
    },
    Descriptor {
        name: "srl",
        mask: OP_F3_F7,
        required_bits: opcodes::OP_REG
            | (funct3::SRL_SRA << FUNCT3_SHIFT)
            | (funct7::BASE << FUNCT7_SHIFT),
        disassemble: disasm_srl,
        execute: exec_srl,
    },
    Descriptor {
        name: "sra",
        mask: OP_F3_F7,
        required_bits: opcodes::OP_REG
            | (funct3::SRL_SRA << FUNCT3_SHIFT)
            | (funct7::ALT << FUNCT7_SHIFT),
        disassemble: disasm_sra,
        execute: exec_sra,
    },
    Descriptor {
        name: "or",
        mask: OP_F3_F7,
        required_bits: opcodes::OP_REG
            | (funct3::OR << FUNCT3_SHIFT)
            | (funct7::BASE << FUNCT7_SHIFT),
        disassemble: disasm_or,
        execute: exec_or,
    },
    Descriptor {
        name: "and",
        mask: OP_F3_F7,
        required_bits: opcodes::OP_REG
            | (funct3::AND << FUNCT3_SHIFT)
            | (funct7::BASE << FUNCT7_SHIFT),
        disassemble: disasm_and,
        execute: exec_and,
    },
    Descriptor {
        name: "addw",
        mask: OP_F3_F7,
        required_bits: opcodes::OP_REG_32
            | (funct3::ADD_SUB << FUNCT3_SHIFT)
            | (funct7::BASE << FUNCT7_SHIFT),
        disassemble: disasm_addw,
        execute: exec_addw,
    },
    Descriptor {
        name: "subw",
        mask: OP_F3_F7,
        required_bits: opcodes::OP_REG_32
            | (funct3::ADD_SUB << FUNCT3_SHIFT)
            | (funct7::ALT << FUNCT7_SHIFT),
        disassemble: disasm_subw,
        execute: exec_subw,
    },
    Descriptor {
        name: "lb",
        mask: OP_F3,
        required_bits: opcodes::OP_LOAD | (funct3::LB << FUNCT3_SHIFT),
        disassemble: disasm_lb,
        execute: exec_lb,
    },
    Descriptor {
        name: "lh",
        mask: OP_F3,
        required_bits: opcodes::OP_LOAD | (funct3::LH << FUNCT3_SHIFT),
        disassemble: disasm_lh,
        execute: exec_lh,
    },
    Descriptor {
        name: "lw",
        mask: OP_F3,
        required_bits: opcodes::OP_LOAD | (funct3::LW << FUNCT3_SHIFT),
        disassemble: disasm_lw,
        execute: exec_lw,
    },
    Descriptor {
        name: "ld",
        mask: OP_F3,
        required_bits: opcodes::OP_LOAD | (funct3::LD << FUNCT3_SHIFT),
        disassemble: disasm_ld,
        execute: exec_ld,
    },
    Descriptor {
        name: "lbu",
        mask: OP_F3,
        required_bits: opcodes::OP_LOAD | (funct3::LBU << FUNCT3_SHIFT),
        disassemble: disasm_lbu,
        execute: exec_lbu,
    },
    Descriptor {
        name: "lhu",
        mask: OP_F3,
        required_bits: opcodes::OP_LOAD | (funct3::LHU << FUNCT3_SHIFT),
        disassemble: disasm_lhu,
        execute: exec_lhu,
    },
    Descriptor {
        name: "lwu",
        mask: OP_F3,
        required_bits: opcodes::OP_LOAD | (funct3::LWU << FUNCT3_SHIFT),
        disassemble: disasm_lwu,
        execute: exec_lwu,
    },
    Descriptor {
        name: "sb",
        mask: OP_F3,
        required_bits: opcodes::OP_STORE | (funct3::SB << FUNCT3_SHIFT),
        disassemble: disasm_sb,
        execute: exec_sb,
    },
    Descriptor {
        name: "sh",
        mask: OP_F3,
        required_bits: opcodes::OP_STORE | (funct3::SH << FUNCT3_SHIFT),
        disassemble: disasm_sh,
        execute: exec_sh,
    },
    Descriptor {
        name: "sw",
        mask: OP_F3,
        required_bits: opcodes::OP_STORE | (funct3::SW << FUNCT3_SHIFT),
        disassemble: disasm_sw,
        execute: exec_sw,
    },
    Descriptor {
        name: "sd",
        mask: OP_F3,
        required_bits: opcodes::OP_STORE | (funct3::SD << FUNCT3_SHIFT),
        disassemble: disasm_sd,
        execute: exec_sd,
    },
    Descriptor {
        name: "jal",
        mask: OPCODE_BITS,
        required_bits: opcodes::OP_JAL,
        disassemble: disasm_jal,
        execute: exec_jal,
    },
    Descriptor {
        name: "jalr",
        mask: OP_F3,
        required_bits: opcodes::OP_JALR | (funct3::JALR << FUNCT3_SHIFT),
        disassemble: disasm_jalr,
        execute: exec_jalr,
    },
    Descriptor {
        name: "beq",
        mask: OP_F3,
        required_bits: opcodes::OP_BRANCH | (funct3::BEQ << FUNCT3_SHIFT),
        disassemble: disasm_beq,
        execute: exec_beq,
    },
    Descriptor {
        name: "bne",
        mask: OP_F3,
        required_bits: opcodes::OP_BRANCH | (funct3::BNE << FUNCT3_SHIFT),
        disassemble: disasm_bne,
        execute: exec_bne,
    },
    Descriptor {
        name: "blt",
        mask: OP_F3,
        required_bits: opcodes::OP_BRANCH | (funct3::BLT << FUNCT3_SHIFT),
        disassemble: disasm_blt,
        execute: exec_blt,
    },
    Descriptor {
        name: "bge",
        mask: OP_F3,
        required_bits: opcodes::OP_BRANCH | (funct3::BGE << FUNCT3_SHIFT),
        disassemble: disasm_bge,
        execute: exec_bge,
    },
    Descriptor {
        name: "bltu",
        mask: OP_F3,
        required_bits: opcodes::OP_BRANCH | (funct3::BLTU << FUNCT3_SHIFT),
        disassemble: disasm_bltu,
        execute: exec_bltu,
    },
    Descriptor {
        name: "bgeu",
        mask: OP_F3,
        required_bits: opcodes::OP_BRANCH | (funct3::BGEU << FUNCT3_SHIFT),
        disassemble: disasm_bgeu,
        execute: exec_bgeu,
    },
];
