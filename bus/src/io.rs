//! I/O port bus capability.

/// I/O bus over an 8-bit port space.
///
/// Separate from [`Memory`](crate::Memory) because CPUs like the Z80 have
/// a distinct port address space reached only through IN/OUT instructions.
pub trait Io {
    /// Read a byte from the given port.
    fn read(&mut self, port: u8) -> u8;

    /// Write a byte to the given port.
    fn write(&mut self, port: u8, value: u8);
}

/// I/O bus with nothing attached: reads float high, writes disappear.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullIo;

impl Io for NullIo {
    fn read(&mut self, _port: u8) -> u8 {
        0xFF
    }

    fn write(&mut self, _port: u8, _value: u8) {}
}
