//! End-to-end scenario programs.
//!
//! Small assembly listings run to completion against the mock host, checking
//! architectural state, memory traffic, and counters together.

use crate::common::builder::instruction as asm;
use crate::common::harness::TestContext;

#[test]
fn arithmetic_program_computes_signed_sums() {
    let mut ctx = TestContext::new();
    ctx.load_program(
        0,
        &[
            asm::addi(1, 0, 724),
            asm::addi(2, 0, -1),
            asm::add(3, 1, 2),
            asm::ebreak(),
        ],
    );
    let executed = ctx.run();

    assert_eq!(ctx.reg(1), 724);
    assert_eq!(ctx.reg(2), 0xFFFF_FFFF_FFFF_FFFF);
    assert_eq!(ctx.reg(3), 723);
    assert_eq!(executed, 4);
    assert_eq!(ctx.kernel.stats_report().instructions, 4);
}

#[test]
fn shift_program_round_trips_through_sll_and_srl() {
    let mut ctx = TestContext::new();
    ctx.load_program(
        0,
        &[
            asm::addi(1, 0, 0xFF),
            asm::addi(2, 0, 4),
            asm::sll(3, 1, 2),
            asm::srl(4, 3, 2),
            asm::ebreak(),
        ],
    );
    ctx.run();

    assert_eq!(ctx.reg(3), 0xFF0);
    assert_eq!(ctx.reg(4), 0xFF);
}

#[test]
fn arithmetic_shift_replicates_the_sign_bit() {
    let mut ctx = TestContext::new();
    ctx.kernel.reg_set(5, 0xF000_0000_0000_0000);
    ctx.kernel.reg_set(2, 4);
    ctx.load_program(0, &[asm::sra(6, 5, 2), asm::ebreak()]);
    ctx.run();

    assert_eq!(ctx.reg(6), 0xFF00_0000_0000_0000);
}

#[test]
fn store_load_program_round_trips_through_host_memory() {
    let mut ctx = TestContext::new();
    ctx.kernel.reg_set(1, 0xFB0);
    ctx.kernel.reg_set(2, 0x5000);
    ctx.kernel.reg_set(3, 0x3000);
    ctx.load_program(
        0,
        &[
            asm::sw(2, 1, 0),
            asm::sw(2, 3, -4),
            asm::lw(5, 2, 0),
            asm::lw(6, 2, -4),
            asm::ebreak(),
        ],
    );
    let executed = ctx.run();

    // The host observes both stores at their effective addresses.
    let stores = ctx.host.stores();
    assert_eq!(stores.len(), 2);
    assert_eq!(stores[0].address, 0x5000);
    assert_eq!(stores[0].value, 0xFB0);
    assert_eq!(stores[1].address, 0x4FFC);
    assert_eq!(stores[1].value, 0x3000);

    assert_eq!(ctx.reg(5), 0xFB0);
    assert_eq!(ctx.reg(6), 0x3000);

    let stats = ctx.kernel.stats_report();
    assert_eq!(stats.loads, 2);
    assert_eq!(stats.stores, 2);
    assert_eq!(executed, 5);
}

#[test]
fn branch_program_skips_the_untaken_path() {
    let mut ctx = TestContext::new();
    ctx.load_program(
        0,
        &[
            asm::addi(1, 0, 5),
            asm::addi(2, 0, 5),
            asm::beq(1, 2, 8),
            asm::addi(3, 0, 1),
            asm::addi(3, 0, 2),
            asm::ebreak(),
        ],
    );
    let executed = ctx.run();

    assert_eq!(ctx.reg(3), 2);
    // Only executed instructions are counted; the skipped addi is not.
    assert_eq!(executed, 5);
    assert_eq!(ctx.kernel.stats_report().instructions, 5);
}

#[test]
fn call_and_return_through_jal_and_jalr() {
    let mut ctx = TestContext::new();
    // 0x00: jal  x1, 0x10      call the leaf at 0x10
    // 0x04: addi x3, x3, 100   runs after the return
    // 0x08: ebreak
    // 0x10: addi x3, x0, 1     leaf body
    // 0x14: jalr x0, x1, 0     return
    ctx.load_program(
        0,
        &[asm::jal(1, 0x10), asm::addi(3, 3, 100), asm::ebreak()],
    );
    ctx.host.write_u32(0x10, asm::addi(3, 0, 1));
    ctx.host.write_u32(0x14, asm::jalr(0, 1, 0));
    ctx.run();

    assert_eq!(ctx.reg(1), 4);
    assert_eq!(ctx.reg(3), 101);
    assert_eq!(ctx.kernel.stats_report().instructions, 5);
}

#[test]
fn mixed_width_memory_program_uses_every_accessor() {
    let mut ctx = TestContext::new();
    ctx.kernel.reg_set(1, 0x1122_3344_5566_7788);
    ctx.kernel.reg_set(2, 0x4000);
    ctx.load_program(
        0,
        &[
            asm::sd(2, 1, 0),
            asm::lwu(5, 2, 4),
            asm::lhu(6, 2, 2),
            asm::lbu(7, 2, 7),
            asm::ebreak(),
        ],
    );
    ctx.run();

    assert_eq!(ctx.reg(5), 0x1122_3344);
    assert_eq!(ctx.reg(6), 0x5566);
    assert_eq!(ctx.reg(7), 0x11);

    let stats = ctx.kernel.stats_report();
    assert_eq!(stats.loads, 3);
    assert_eq!(stats.stores, 1);
}

#[test]
fn multiply_accumulate_program() {
    let mut ctx = TestContext::new();
    ctx.load_program(
        0,
        &[
            asm::addi(1, 0, -3),
            asm::addi(2, 0, 7),
            asm::mul(3, 1, 2),
            asm::addi(3, 3, 1),
            asm::ebreak(),
        ],
    );
    ctx.run();

    assert_eq!(ctx.reg(3) as i64, -20);
}
