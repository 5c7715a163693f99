//! Instruction-stepped Zilog Z80 CPU emulator.
//!
//! Each call to [`Cpu::execute_instruction`](emu_bus::Cpu) fetches,
//! decodes, and executes exactly one instruction against host-supplied
//! [`Memory`](emu_bus::Memory) and [`Io`](emu_bus::Io) buses, and charges
//! its T-state cost to a running counter.
//!
//! The implemented operation set is the base-page fragment 0x00-0x0F;
//! the decode structure (per-page timing tables, prefix recognition, a
//! fault type carrying prefix and opcode) is laid out for full coverage.
//! Opcodes outside the fragment fail with [`DecodeFault`] and leave the
//! processor state untouched.

mod alu;
mod cpu;
mod fault;
mod flags;
mod registers;
mod tables;

pub use cpu::Z80;
pub use fault::DecodeFault;
pub use flags::{CF, HF, NF, PF, SF, XF, YF, ZF};
pub use registers::Registers;
