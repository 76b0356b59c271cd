//! Test harness.
//!
//! `TestContext` wires a kernel to a RAM-backed mock host and keeps the
//! probe so tests can inspect memory, stores, traces, log messages, and
//! panic reports after the host has been handed over.

use crate::common::mocks::host::{HostProbe, MockHost};
use rvsk_kernel::Kernel;

/// Mock RAM size; large enough for every scenario address in the suite.
pub const RAM_SIZE: usize = 64 * 1024;

/// Mock RAM base address.
pub const RAM_BASE: u64 = 0;

pub struct TestContext {
    pub kernel: Kernel,
    pub host: HostProbe,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    pub fn new() -> Self {
        let _ = env_logger::builder().is_test(true).try_init();

        let mock = MockHost::new(RAM_SIZE, RAM_BASE);
        let host = mock.probe();
        let kernel = Kernel::new(Box::new(mock));

        Self { kernel, host }
    }

    /// Writes a program into RAM at `base` and points the PC at it.
    pub fn load_program(&mut self, base: u64, program: &[u32]) {
        for (index, word) in program.iter().enumerate() {
            self.host.write_u32(base + (index as u64) * 4, *word);
        }
        self.kernel.pc_set(base);
    }

    /// Runs to `ebreak`/halt and returns the executed count.
    pub fn run(&mut self) -> u64 {
        self.kernel.run(0)
    }

    /// Convenience register read through the facade.
    pub fn reg(&mut self, index: usize) -> u64 {
        self.kernel.reg_get(index)
    }
}
