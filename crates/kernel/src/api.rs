//! Kernel API facade.
//!
//! The narrow, stable surface a host drives the kernel through. Every
//! operation delegates directly to core primitives. The facade owns its CPU
//! state, so distinct kernels are fully independent; hosts whose binary
//! interface needs a single process-wide instance can hold one `Kernel` in
//! whatever slot that interface requires.

use crate::config::Config;
use crate::core::cpu::{Cpu, HaltHandle};
use crate::host::{HostServices, Signal};
use crate::stats::Stats;

/// Capability strings describing this kernel, `key=value` style.
pub const KERNEL_INFO: &[&str] = &["author=rvsk", "api=1.0"];

/// Minimum caller buffer size accepted by [`Kernel::disasm`].
pub const MIN_DISASM_BUFFER: usize = 32;

/// Host-facing kernel instance: one simulated CPU behind the stable API.
pub struct Kernel {
    cpu: Cpu,
}

impl Kernel {
    /// Returns the kernel capability strings.
    pub fn info() -> &'static [&'static str] {
        KERNEL_INFO
    }

    /// Creates a kernel bound to the given host services with all
    /// architectural state zeroed.
    pub fn new(host: Box<dyn HostServices>) -> Self {
        let mut cpu = Cpu::new(host);
        cpu.log_msg("CPU initialized");
        Self { cpu }
    }

    /// Replaces the configuration bitset.
    pub fn config_set(&mut self, flags: Config) {
        self.cpu.set_config(flags);
    }

    /// Returns the configuration bitset.
    pub fn config_get(&self) -> Config {
        self.cpu.config()
    }

    /// Snapshot of the current event counters.
    pub fn stats_report(&self) -> Stats {
        self.cpu.stats()
    }

    /// Reads register `index`; x0 and out-of-range semantics per the core.
    pub fn reg_get(&mut self, index: usize) -> u64 {
        self.cpu.read_register(index)
    }

    /// Writes register `index`; x0 and out-of-range semantics per the core.
    pub fn reg_set(&mut self, index: usize, value: u64) {
        self.cpu.write_register(index, value);
    }

    /// Returns the program counter.
    pub fn pc_get(&self) -> u64 {
        self.cpu.pc()
    }

    /// Sets the program counter, unchecked.
    pub fn pc_set(&mut self, value: u64) {
        self.cpu.set_pc(value);
    }

    /// Returns true while the CPU is running.
    pub fn running(&self) -> bool {
        self.cpu.is_running()
    }

    /// Delivers an external signal to the CPU.
    pub fn signal(&self, signal: Signal) {
        self.cpu.process_signal(signal);
    }

    /// Returns a cloneable handle for halting the CPU from another thread.
    pub fn halt_handle(&self) -> HaltHandle {
        self.cpu.halt_handle()
    }

    /// Runs the CPU: until `ebreak`/halt when `cycles` is zero, otherwise
    /// for at most `cycles` instructions. Returns the executed count.
    pub fn run(&mut self, cycles: u64) -> u64 {
        self.cpu.run(cycles)
    }

    /// Disassembles the instruction at the current PC into `buffer`.
    ///
    /// Writes nothing and returns 0 when the buffer is under
    /// [`MIN_DISASM_BUFFER`] bytes; otherwise writes the rendered line
    /// (truncated to the buffer length) and returns the byte count written.
    /// The rendering is pure ASCII.
    pub fn disasm(&mut self, buffer: &mut [u8]) -> usize {
        if buffer.len() < MIN_DISASM_BUFFER {
            return 0;
        }
        let line = self.cpu.disassemble();
        let written = line.len().min(buffer.len());
        buffer[..written].copy_from_slice(&line.as_bytes()[..written]);
        written
    }

    /// Borrow of the underlying CPU.
    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    /// Mutable borrow of the underlying CPU.
    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.cpu
    }
}
