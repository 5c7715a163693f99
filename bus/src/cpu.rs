//! CPU core contract.

use crate::{Io, Memory};

/// An instruction-stepped CPU core.
///
/// The core does not own its buses. Both capabilities are passed to
/// [`execute_instruction`](Cpu::execute_instruction) so a host can share
/// them with other components between steps. A step runs to completion
/// before returning; there is no suspension inside an instruction.
pub trait Cpu {
    /// Error produced when an instruction cannot be decoded.
    type Error;

    /// Reset the processor to its power-on state. Equivalent to pulling
    /// the hardware reset line; may be invoked at any time.
    fn reset(&mut self);

    /// Execute the single instruction at the current program counter.
    ///
    /// Updates internal processor state and the T-state counter, and
    /// returns the number of T-states the instruction consumed. On a
    /// decode error the core state is left exactly as it was before the
    /// step, so the caller can retry or substitute a handler.
    fn execute_instruction<M: Memory, I: Io>(
        &mut self,
        memory: &mut M,
        io: &mut I,
    ) -> Result<u32, Self::Error>;

    /// True if the processor has executed a HALT instruction.
    fn halted(&self) -> bool;

    /// T-states elapsed since the counter was last cleared.
    fn t_states(&self) -> u64;

    /// Clear the T-state counter.
    fn reset_t_states(&mut self);
}
