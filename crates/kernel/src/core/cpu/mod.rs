//! CPU state and register-file semantics.
//!
//! This module defines the `Cpu` structure holding all architectural state.
//! It enforces:
//! 1. **Register invariants:** x0 reads as zero regardless of writes; writes
//!    to x0 are silently discarded; out-of-range indices are escalated to the
//!    host panic sink and otherwise ignored.
//! 2. **Service binding:** The host-services implementation is captured once
//!    at construction and never looked up elsewhere afterwards.
//! 3. **Halt signalling:** The running flag is an atomic read with acquire
//!    ordering by the loop and written with release ordering by signallers,
//!    so a cross-thread halt request lands within one instruction.

/// Fetch/decode/dispatch loop and disassembly at PC.
pub mod execution;
/// Counted memory access helpers routed through the host services.
pub mod memory;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::common::Exception;
use crate::config::Config;
use crate::host::{HostServices, Signal};
use crate::isa::registry::Registry;
use crate::isa::{rv64i, rv64m};
use crate::stats::Stats;

/// Number of architectural integer registers.
pub const REGISTER_COUNT: usize = 32;

/// Architectural CPU state: registers, PC, counters, registry, and the bound
/// host services.
///
/// A `Cpu` is an owned value; distinct instances are fully independent, so a
/// host may run several kernels side by side.
pub struct Cpu {
    running: Arc<AtomicBool>,
    config: Config,
    host: Box<dyn HostServices>,
    stats: Stats,
    registry: Registry,
    pc: u64,
    x: [u64; REGISTER_COUNT],
}

/// Cloneable cross-thread handle that requests a cooperative halt.
///
/// The only state it touches is the shared running flag, so it is safe to
/// use from a second thread while `run` executes on the first.
#[derive(Clone)]
pub struct HaltHandle {
    running: Arc<AtomicBool>,
}

impl HaltHandle {
    /// Requests a halt; the run loop observes it between instructions.
    pub fn halt(&self) {
        self.running.store(false, Ordering::Release);
    }
}

impl Cpu {
    /// Creates a CPU bound to the given host services.
    ///
    /// All registers, the PC, the configuration, and the counters start at
    /// zero. The registry is built by appending the RV64I table and then the
    /// RV64M table; both are static data, so construction cannot fail.
    pub fn new(host: Box<dyn HostServices>) -> Self {
        let mut registry = Registry::new();
        registry.append(rv64i::DESCRIPTORS);
        registry.append(rv64m::DESCRIPTORS);

        Self {
            running: Arc::new(AtomicBool::new(false)),
            config: Config::NOTHING,
            host,
            stats: Stats::default(),
            registry,
            pc: 0,
            x: [0; REGISTER_COUNT],
        }
    }

    /// Returns true while the CPU is executing (acquire load).
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Stops execution at the next instruction boundary.
    pub fn halt(&self) {
        self.running.store(false, Ordering::Release);
    }

    pub(crate) fn set_running(&self, value: bool) {
        self.running.store(value, Ordering::Release);
    }

    /// Returns a cloneable handle for cross-thread halt requests.
    pub fn halt_handle(&self) -> HaltHandle {
        HaltHandle {
            running: Arc::clone(&self.running),
        }
    }

    /// Applies an external signal.
    pub fn process_signal(&self, signal: Signal) {
        match signal {
            Signal::Halt => self.halt(),
        }
    }

    /// Current configuration bitset.
    pub fn config(&self) -> Config {
        self.config
    }

    /// Replaces the configuration bitset.
    pub fn set_config(&mut self, config: Config) {
        self.config = config;
    }

    /// Snapshot of the event counters.
    pub fn stats(&self) -> Stats {
        self.stats
    }

    /// Current program counter.
    pub fn pc(&self) -> u64 {
        self.pc
    }

    /// Sets the program counter; no alignment is enforced here.
    pub fn set_pc(&mut self, address: u64) {
        self.pc = address;
    }

    /// Reads a register. x0 always reads zero; an out-of-range index is
    /// reported to the host panic sink and reads zero.
    pub fn read_register(&mut self, index: usize) -> u64 {
        if index >= REGISTER_COUNT {
            let report = Exception::RegisterOutOfRange(index).to_string();
            self.host.panic(&report);
            return 0;
        }
        if index == 0 {
            0
        } else {
            self.x[index]
        }
    }

    /// Writes a register. Writes to x0 are discarded; an out-of-range index
    /// is reported to the host panic sink and stores nothing.
    pub fn write_register(&mut self, index: usize, value: u64) {
        if index >= REGISTER_COUNT {
            let report = Exception::RegisterOutOfRange(index).to_string();
            self.host.panic(&report);
            return;
        }
        if index != 0 {
            self.x[index] = value;
        }
    }

    /// Borrow of the full register file, x0 included.
    pub fn registers(&self) -> &[u64; REGISTER_COUNT] {
        &self.x
    }

    /// Borrow of the instruction registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Forwards an informational message to the host log sink.
    pub fn log_msg(&mut self, message: &str) {
        self.host.log_msg(message);
    }
}
