//! Event counters maintained by the kernel.
//!
//! Counters are monotonically non-decreasing for the lifetime of a CPU
//! instance and are published to the host as a value snapshot. The miss
//! counters exist for interface compatibility with cache-implementing
//! kernels; this kernel models no cache, so they stay zero.

use serde::Serialize;

/// Snapshot of the kernel's event counters.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stats {
    /// Number of instructions executed so far, the halting `ebreak` included.
    pub instructions: u64,
    /// Number of data loads issued by executors (instruction fetches are not
    /// counted).
    pub loads: u64,
    /// Number of data stores issued by executors.
    pub stores: u64,
    /// Loads that missed a simulated cache; always zero here.
    pub load_misses: u64,
    /// Stores that missed a simulated cache; always zero here.
    pub store_misses: u64,
}
