//! Z80 CPU core with instruction-stepped execution.

use emu_bus::{Cpu, Io, Memory};

use crate::fault::DecodeFault;
use crate::registers::Registers;
use crate::tables::BASE_T_STATES;

/// Z80 CPU.
///
/// Owns the register file and the T-state counter, nothing else. Memory
/// and I/O are borrowed for each instruction step, so a host can share
/// them with other components between steps.
pub struct Z80 {
    /// The register file. Public so hosts and test harnesses can seed
    /// and inspect processor state directly between steps.
    pub regs: Registers,
    /// T-states since the counter was last cleared.
    t_states: u64,
}

impl Z80 {
    /// Create a Z80 in its power-on (reset) state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            regs: Registers::default(),
            t_states: 0,
        }
    }

    /// Snapshot of the register file.
    #[must_use]
    pub const fn registers(&self) -> Registers {
        self.regs
    }

    /// Increment the refresh counter: low seven bits only, bit 7 is
    /// program-owned and survives.
    fn inc_r(&mut self) {
        self.regs.r = (self.regs.r & 0x80) | (self.regs.r.wrapping_add(1) & 0x7F);
    }

    /// Read the byte at PC and advance PC, wrapping at 0xFFFF.
    fn fetch<M: Memory>(&mut self, memory: &mut M) -> u8 {
        let byte = memory.read_byte(self.regs.pc);
        self.regs.pc = self.regs.pc.wrapping_add(1);
        byte
    }
}

impl Default for Z80 {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu for Z80 {
    type Error = DecodeFault;

    /// Zero every register, flag, and flip-flop.
    ///
    /// The T-state counter is left running across resets, as on the real
    /// part where the clock keeps ticking; [`reset_t_states`](Cpu::reset_t_states)
    /// clears it.
    fn reset(&mut self) {
        self.regs.reset();
    }

    fn execute_instruction<M: Memory, I: Io>(
        &mut self,
        memory: &mut M,
        io: &mut I,
    ) -> Result<u32, DecodeFault> {
        if self.regs.halted {
            // A halted Z80 executes internal NOPs: PC is frozen but the
            // refresh counter and the clock keep running.
            self.inc_r();
            self.t_states += 4;
            return Ok(4);
        }

        let pc = self.regs.pc;
        let r = self.regs.r;
        let t_states = self.t_states;

        let opcode = self.fetch(memory);
        self.inc_r();

        // The table's base cost is charged before the operation runs;
        // operations with data-dependent timing return the remainder,
        // which is added on top afterwards.
        let base = BASE_T_STATES[usize::from(opcode)];
        self.t_states += u64::from(base);

        match self.execute_base(opcode, memory, io) {
            Ok(extra) => {
                self.t_states += u64::from(extra);
                Ok(base + extra)
            }
            Err(fault) => {
                // Roll back to the pre-fetch state: PC, refresh counter,
                // and clock are restored, and no register was touched.
                self.regs.pc = pc;
                self.regs.r = r;
                self.t_states = t_states;
                Err(fault)
            }
        }
    }

    fn halted(&self) -> bool {
        self.regs.halted
    }

    fn t_states(&self) -> u64 {
        self.t_states
    }

    fn reset_t_states(&mut self) {
        self.t_states = 0;
    }
}

// Per-opcode operation bodies live in a separate file for readability.
mod execute;
