//! RISC-V RV64 simulator kernel library.
//!
//! This crate implements the CPU model of a RISC-V 64-bit instruction-set
//! simulator behind a stable host/kernel boundary. It provides:
//! 1. **ISA:** Field extraction, immediate decoding, and the first-match
//!    descriptor registry for RV64I and RV64M.
//! 2. **Core:** Architectural state (program counter, 32 integer registers,
//!    event counters) and the fetch/decode/execute loop.
//! 3. **Host boundary:** A trait for the memory, trace, and logging services
//!    the embedding host supplies at initialization.
//! 4. **Facade:** The narrow API surface a host drives the kernel through.
//!
//! The kernel owns no memory of its own: every load and store is routed
//! through the host services, so the same core runs against flat RAM, MMIO
//! devices, or a recording test double.

/// Kernel API facade (info, init, config, stats, registers, run, disassembly).
pub mod api;
/// Shared kernel-wide types (exception taxonomy).
pub mod common;
/// Configuration bitset recognized by the kernel.
pub mod config;
/// CPU core (state, register-file semantics, execution loop).
pub mod core;
/// Host-supplied service boundary (memory accessors, trace and log sinks).
pub mod host;
/// Instruction set (field algebra, immediates, descriptors, RV64I/M tables).
pub mod isa;
/// Event counters maintained and published by the kernel.
pub mod stats;

/// Kernel facade type; construct with [`Kernel::new`] and a host-services box.
pub use crate::api::Kernel;
/// Configuration bitset; combine [`Config::TRACE_LOG`] and friends.
pub use crate::config::Config;
/// CPU state value; re-entrant, one per kernel instance.
pub use crate::core::cpu::{Cpu, HaltHandle};
/// Host service trait and external signal type.
pub use crate::host::{HostServices, Signal};
/// Event-counter snapshot returned by `stats_report`.
pub use crate::stats::Stats;
