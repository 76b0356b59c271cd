//! Kernel exception definitions.
//!
//! The kernel never retries a failed operation: conditions it cannot resolve
//! are rendered through `Display` and escalated to the host's panic sink.
//! Architectural no-ops (x0 writes, x0 reads) are not exceptions.

use thiserror::Error;

/// Fatal conditions raised by the kernel core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Exception {
    /// No registry descriptor matched the fetched instruction word.
    #[error("Unrecognized instruction {instruction:#010x} at pc {pc:#018x}")]
    UnrecognizedInstruction {
        /// The raw 32-bit encoding that failed to match.
        instruction: u32,
        /// Program counter the word was fetched from.
        pc: u64,
    },

    /// A register index outside 0..=31 reached the register file.
    #[error("Register access out of bounds: x{0}")]
    RegisterOutOfRange(usize),
}
