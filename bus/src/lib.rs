//! Bus capability traits for instruction-stepped CPU emulation.
//!
//! A CPU core never owns memory or peripherals. It borrows a [`Memory`]
//! and an [`Io`] capability for the duration of each instruction step and
//! issues synchronous reads and writes against them. Hosts implement the
//! traits over whatever backing they like (flat RAM, banked ROM, mapped
//! peripherals); the flat test doubles in this crate cover the common
//! case of driving a core from a test harness.

mod cpu;
mod io;
mod memory;

pub use cpu::Cpu;
pub use io::{Io, NullIo};
pub use memory::{FlatMemory, Memory};
