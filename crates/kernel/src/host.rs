//! Host-supplied service boundary.
//!
//! This module defines the `HostServices` trait implemented by the embedding
//! host. It provides:
//! 1. **Memory:** Byte, halfword, word, and doubleword load/store at absolute
//!    guest addresses, covering both RAM and MMIO.
//! 2. **Observability:** A per-instruction trace sink and an informational
//!    log sink.
//! 3. **Escalation:** A fatal-error sink for conditions the kernel cannot
//!    resolve.
//!
//! The kernel binds one boxed implementation at initialization and never
//! looks services up anywhere else afterwards. Any service may be invoked at
//! any point while the CPU is running.

/// External signals a host can deliver to the CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// Request a cooperative halt, observed between instructions.
    Halt,
}

/// Trait for the services the host supplies to the kernel.
///
/// Memory accessors operate on absolute guest addresses. Loads from regions
/// the host does not define return zero; stores to such regions are silent.
/// Side effects are permitted for MMIO-backed regions.
pub trait HostServices: Send {
    /// Loads one byte at the given address.
    fn read_u8(&mut self, address: u64) -> u8;
    /// Loads a little-endian halfword at the given address.
    fn read_u16(&mut self, address: u64) -> u16;
    /// Loads a little-endian word at the given address.
    fn read_u32(&mut self, address: u64) -> u32;
    /// Loads a little-endian doubleword at the given address.
    fn read_u64(&mut self, address: u64) -> u64;
    /// Stores one byte at the given address.
    fn write_u8(&mut self, address: u64, value: u8);
    /// Stores a little-endian halfword at the given address.
    fn write_u16(&mut self, address: u64, value: u16);
    /// Stores a little-endian word at the given address.
    fn write_u32(&mut self, address: u64, value: u32);
    /// Stores a little-endian doubleword at the given address.
    fn write_u64(&mut self, address: u64, value: u64);

    /// Reports one executed instruction when trace logging is configured.
    ///
    /// `step` is the running instruction count including the reported
    /// instruction; `registers` is a snapshot of x0..x31.
    fn log_trace(&mut self, step: u64, pc: u64, registers: &[u64; 32]);

    /// Records an informational message; never fatal.
    fn log_msg(&mut self, message: &str);

    /// Reports a fatal condition. Hosts are expected to terminate the
    /// simulation; a host that returns leaves the CPU halted.
    fn panic(&mut self, message: &str);
}
