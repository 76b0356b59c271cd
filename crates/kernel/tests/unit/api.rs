//! API facade tests.

use crate::common::builder::instruction as asm;
use crate::common::harness::TestContext;
use rvsk_kernel::{Config, Kernel, Stats};

#[test]
fn info_reports_author_and_api_version() {
    let info = Kernel::info();
    assert!(info.iter().any(|entry| entry.starts_with("author=")));
    assert!(info.contains(&"api=1.0"));
}

#[test]
fn init_logs_through_the_host_message_sink() {
    let ctx = TestContext::new();
    assert_eq!(ctx.host.messages(), vec!["CPU initialized".to_string()]);
}

#[test]
fn freshly_initialized_state_is_zeroed_and_stopped() {
    let mut ctx = TestContext::new();
    assert!(!ctx.kernel.running());
    assert_eq!(ctx.kernel.pc_get(), 0);
    assert_eq!(ctx.kernel.config_get(), Config::NOTHING);
    assert_eq!(ctx.kernel.stats_report(), Stats::default());
    for index in 0..32 {
        assert_eq!(ctx.kernel.reg_get(index), 0);
    }
}

#[test]
fn config_round_trips_and_preserves_unrecognized_bits() {
    let mut ctx = TestContext::new();

    ctx.kernel.config_set(Config::TRACE_LOG);
    assert!(ctx.kernel.config_get().trace_log());

    let opaque = Config::from_bits(0x8000_0002).with(Config::TRACE_LOG);
    ctx.kernel.config_set(opaque);
    assert_eq!(ctx.kernel.config_get().bits(), 0x8000_0003);
    assert!(ctx.kernel.config_get().trace_log());

    ctx.kernel.config_set(Config::NOTHING);
    assert!(!ctx.kernel.config_get().trace_log());
}

#[test]
fn pc_set_is_unchecked() {
    let mut ctx = TestContext::new();
    ctx.kernel.pc_set(0xDEAD_BEEF_0000_0001);
    assert_eq!(ctx.kernel.pc_get(), 0xDEAD_BEEF_0000_0001);
}

#[test]
fn stats_report_is_a_snapshot_not_a_live_view() {
    let mut ctx = TestContext::new();
    ctx.load_program(0, &[asm::addi(1, 0, 1), asm::ebreak()]);

    let before = ctx.kernel.stats_report();
    ctx.run();
    let after = ctx.kernel.stats_report();

    assert_eq!(before.instructions, 0);
    assert_eq!(after.instructions, 2);
}

#[test]
fn kernels_are_independent_instances() {
    let mut first = TestContext::new();
    let mut second = TestContext::new();

    first.kernel.reg_set(1, 111);
    second.kernel.reg_set(1, 222);

    assert_eq!(first.kernel.reg_get(1), 111);
    assert_eq!(second.kernel.reg_get(1), 222);

    first.load_program(0, &[asm::ebreak()]);
    first.run();

    assert_eq!(first.kernel.stats_report().instructions, 1);
    assert_eq!(second.kernel.stats_report().instructions, 0);
}
