//! Kernel configuration bitset.
//!
//! Hosts hand the kernel an opaque bitset; the kernel recognizes the flags
//! defined here and preserves any other bits untouched, so host-private
//! configuration can ride along. Deserializes transparently from its numeric
//! representation for hosts that supply configuration as JSON.

use serde::Deserialize;

/// Configuration flags recognized by the kernel.
///
/// Combine flags with [`Config::with`]; query them with [`Config::contains`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(transparent)]
pub struct Config(u32);

impl Config {
    /// Default setting, no special features enabled.
    pub const NOTHING: Self = Self(0);

    /// Request a trace-log callback after every executed instruction.
    pub const TRACE_LOG: Self = Self(0x0000_0001);

    /// Builds a configuration from its raw bit representation.
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Returns the raw bit representation.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Returns this configuration with the given flags also set.
    pub const fn with(self, flags: Self) -> Self {
        Self(self.0 | flags.0)
    }

    /// Returns true when every bit of `flags` is set.
    pub const fn contains(self, flags: Self) -> bool {
        self.0 & flags.0 == flags.0
    }

    /// Returns true when the per-instruction trace callback is requested.
    pub const fn trace_log(self) -> bool {
        self.contains(Self::TRACE_LOG)
    }
}
