//! Fetch/decode/dispatch loop.
//!
//! One instruction per step:
//! 1. **Fetch:** The 32-bit word at PC arrives through the host's doubleword
//!    load; the instruction is the low half.
//! 2. **Dispatch:** The `ebreak` sentinel is matched before the registry as
//!    the halt fast path; everything else goes through first-match search.
//! 3. **Retire:** The PC advances by 4 unless the executor wrote it, the
//!    instruction counter increments, and the trace callback fires when
//!    configured.

use super::Cpu;
use crate::common::Exception;
use crate::isa::disasm;

/// Full encoding of `ebreak`, the halt sentinel.
pub const EBREAK: u32 = 0x0010_0073;

impl Cpu {
    /// Fetches and executes the instruction at PC.
    ///
    /// Returns `Ok(())` when an instruction retired; the halting `ebreak`
    /// counts. A registry miss is returned as an exception for the caller
    /// to escalate.
    pub fn step(&mut self) -> Result<(), Exception> {
        let pc = self.pc;
        let instruction = self.host.read_u64(pc) as u32;

        if instruction == EBREAK {
            self.halt();
            self.retire();
            return Ok(());
        }

        let Some(descriptor) = self.registry.search(instruction) else {
            return Err(Exception::UnrecognizedInstruction { instruction, pc });
        };

        let mut pc_written = false;
        (descriptor.execute)(self, instruction, &mut pc_written);
        if !pc_written {
            self.pc = pc.wrapping_add(4);
        }

        self.retire();
        Ok(())
    }

    /// Counts a retired instruction and reports it when tracing is on.
    fn retire(&mut self) {
        self.stats.instructions += 1;
        if self.config.trace_log() {
            self.host
                .log_trace(self.stats.instructions, self.pc, &self.x);
        }
    }

    /// Runs until `ebreak`, a halt signal, or the cycle bound.
    ///
    /// `cycles == 0` means unbounded: execute until the CPU halts. A
    /// positive bound retires at most that many instructions and leaves the
    /// CPU runnable. Returns the number of instructions executed, a
    /// terminating `ebreak` included. A registry miss is reported through
    /// the host panic sink and stops execution.
    pub fn run(&mut self, cycles: u64) -> u64 {
        self.set_running(true);
        let mut executed: u64 = 0;

        while self.is_running() && (cycles == 0 || executed < cycles) {
            match self.step() {
                Ok(()) => executed += 1,
                Err(exception) => {
                    let report = exception.to_string();
                    self.host.panic(&report);
                    self.halt();
                    break;
                }
            }
        }

        executed
    }

    /// Renders the instruction at the current PC with its address column.
    ///
    /// Unrecognized encodings render a `?` body, mirroring what the
    /// execution path would refuse.
    pub fn disassemble(&mut self) -> String {
        let pc = self.pc;
        let instruction = self.host.read_u64(pc) as u32;
        let body = match self.registry.search(instruction) {
            Some(descriptor) => (descriptor.disassemble)(instruction),
            None => "?".to_string(),
        };
        disasm::with_address(pc, &body)
    }
}
