//! Decode failure reporting.

use thiserror::Error;

/// An opcode (or prefix + opcode pair) with no operation behind it.
///
/// Surfaced as an `Err` from
/// [`Cpu::execute_instruction`](emu_bus::Cpu::execute_instruction). The
/// faulting step rolls the processor back to its pre-fetch state - PC,
/// the refresh register, and the T-state counter are restored - so the
/// caller can retry, substitute a handler, or stop the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeFault {
    /// A base-page opcode with no operation.
    #[error("unimplemented opcode {opcode:#04X}")]
    Unprefixed { opcode: u8 },

    /// A prefixed opcode with no operation.
    #[error("unimplemented opcode {prefix:#04X} {opcode:#04X}")]
    Prefixed { prefix: u8, opcode: u8 },
}
