//! Field extraction and immediate decode properties.
//!
//! Every encoder in the builder produces known field values; decoding must
//! reproduce them exactly, including the full negative range of each
//! immediate format.

use crate::common::builder::instruction as asm;
use rvsk_kernel::isa::decode;
use rvsk_kernel::isa::instruction::InstructionBits;
use rvsk_kernel::isa::rv64i::opcodes;

#[test]
fn r_type_fields_extract_exactly() {
    let inst = asm::r_type(opcodes::OP_REG, 10, 0b101, 21, 31, 0b0100000);
    assert_eq!(inst.opcode(), opcodes::OP_REG);
    assert_eq!(inst.rd(), 10);
    assert_eq!(inst.funct3(), 0b101);
    assert_eq!(inst.rs1(), 21);
    assert_eq!(inst.rs2(), 31);
    assert_eq!(inst.funct7(), 0b0100000);
}

#[test]
fn field_extractors_ignore_neighbouring_bits() {
    // All ones everywhere: every field reads as its own all-ones value.
    let inst = u32::MAX;
    assert_eq!(inst.opcode(), 0x7F);
    assert_eq!(inst.rd(), 31);
    assert_eq!(inst.rs1(), 31);
    assert_eq!(inst.rs2(), 31);
    assert_eq!(inst.funct3(), 0b111);
    assert_eq!(inst.funct7(), 0b1111111);
}

#[test]
fn i_type_immediate_round_trips_across_range() {
    for value in [-2048, -1024, -1, 0, 1, 724, 2047] {
        let inst = asm::i_type(opcodes::OP_IMM, 1, 0b000, 2, value);
        assert_eq!(decode::i_imm(inst), value as i64, "imm {value}");
    }
}

#[test]
fn s_type_immediate_round_trips_across_range() {
    for value in [-2048, -4, -1, 0, 1, 76, 2047] {
        let inst = asm::s_type(opcodes::OP_STORE, 0b010, 2, 1, value);
        assert_eq!(decode::s_imm(inst), value as i64, "imm {value}");
    }
}

#[test]
fn b_type_immediate_round_trips_and_stays_even() {
    for value in [-4096, -2048, -2, 0, 2, 8, 4094] {
        let inst = asm::b_type(opcodes::OP_BRANCH, 0b000, 1, 2, value);
        let decoded = decode::b_imm(inst);
        assert_eq!(decoded, value as i64, "imm {value}");
        assert_eq!(decoded & 1, 0);
    }
}

#[test]
fn u_type_immediate_keeps_low_twelve_bits_zero() {
    for field in [0x00001, 0x12345, 0x7FFFF] {
        let inst = asm::u_type(opcodes::OP_LUI, 6, field);
        assert_eq!(decode::u_imm(inst), (field as i64) << 12);
    }
}

#[test]
fn u_type_immediate_sign_extends_from_bit_31() {
    let inst = asm::u_type(opcodes::OP_LUI, 6, 0xFFFFF);
    assert_eq!(decode::u_imm(inst), -4096);

    let inst = asm::u_type(opcodes::OP_LUI, 6, 0x80000);
    assert_eq!(decode::u_imm(inst), i32::MIN as i64);
}

#[test]
fn j_type_immediate_round_trips_and_stays_even() {
    for value in [-1048576, -2048, -2, 0, 2, 2048, 1048574] {
        let inst = asm::j_type(opcodes::OP_JAL, 1, value);
        let decoded = decode::j_imm(inst);
        assert_eq!(decoded, value as i64, "imm {value}");
        assert_eq!(decoded & 1, 0);
    }
}

#[test]
fn shamt_covers_the_full_six_bit_range() {
    for amount in 0..64 {
        let inst = asm::slli(1, 2, amount);
        assert_eq!(decode::shamt(inst), amount);
    }
}

#[test]
fn shamt_of_arithmetic_shift_ignores_the_alternate_encoding_bit() {
    let inst = asm::srai(1, 2, 63);
    assert_eq!(decode::shamt(inst), 63);
}

#[test]
fn negative_immediates_decode_with_all_upper_bits_set() {
    let inst = asm::addi(1, 0, -1);
    assert_eq!(decode::i_imm(inst) as u64, u64::MAX);
}
