//! Instruction descriptor record and lookup registry.
//!
//! A descriptor pairs a match pattern with the behavior of one instruction
//! family; the registry is the ordered sequence the decoder consults. All
//! descriptor tables are static data built at compile time, so registry
//! construction cannot fail at runtime.

use crate::core::cpu::Cpu;

/// Renders the mnemonic and operands of one instruction encoding.
pub type DisassembleFn = fn(u32) -> String;

/// Executes one instruction. The executor sets the pc-written flag whenever
/// it updates PC itself, which suppresses the loop's default advance by 4.
pub type ExecuteFn = fn(&mut Cpu, u32, &mut bool);

/// An instruction family: match pattern plus behavior.
///
/// An instruction word `w` belongs to the family when
/// `w & mask == required_bits`.
#[derive(Clone, Copy)]
pub struct Descriptor {
    /// Short mnemonic used for disassembly and identification.
    pub name: &'static str,
    /// Selector for the encoding bits that define this family.
    pub mask: u32,
    /// Expected value of the selected bits.
    pub required_bits: u32,
    /// Disassembler for this family.
    pub disassemble: DisassembleFn,
    /// Executor for this family.
    pub execute: ExecuteFn,
}

impl Descriptor {
    /// Returns true when the instruction word belongs to this family.
    #[inline]
    pub fn matches(&self, instruction: u32) -> bool {
        instruction & self.mask == self.required_bits
    }
}

/// Ordered first-match descriptor registry.
///
/// Matching is first-hit over intentionally non-orthogonal patterns, so
/// narrowly masked entries must precede broader entries that share an
/// opcode. The registry is append-only during initialization and read-only
/// afterwards.
#[derive(Default)]
pub struct Registry {
    entries: Vec<&'static Descriptor>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends a contiguous descriptor table and returns the number of
    /// descriptors added.
    pub fn append(&mut self, descriptors: &'static [Descriptor]) -> usize {
        self.entries.extend(descriptors.iter());
        descriptors.len()
    }

    /// Returns the first descriptor matching the instruction word, if any.
    ///
    /// Linear scan; the registry holds a few dozen entries.
    pub fn search(&self, instruction: u32) -> Option<&'static Descriptor> {
        self.entries
            .iter()
            .copied()
            .find(|descriptor| descriptor.matches(instruction))
    }

    /// Number of registered descriptors.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when no descriptors are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates the registered descriptors in match order.
    pub fn iter(&self) -> impl Iterator<Item = &'static Descriptor> + '_ {
        self.entries.iter().copied()
    }
}
