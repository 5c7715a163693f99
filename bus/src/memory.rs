//! Memory bus capability.

/// Memory bus over a 16-bit address space.
///
/// Word accesses are little-endian: the low byte lives at `address`, the
/// high byte at `address + 1`, wrapping at the top of the address space.
/// Implementors only need the byte accessors; the word accessors are
/// derived but may be overridden when the backing store can do better.
pub trait Memory {
    /// Read a byte from the given address.
    fn read_byte(&mut self, address: u16) -> u8;

    /// Write a byte to the given address.
    fn write_byte(&mut self, address: u16, value: u8);

    /// Read a 16-bit word, low byte first.
    fn read_word(&mut self, address: u16) -> u16 {
        let low = self.read_byte(address);
        let high = self.read_byte(address.wrapping_add(1));
        u16::from(high) << 8 | u16::from(low)
    }

    /// Write a 16-bit word, low byte first.
    fn write_word(&mut self, address: u16, value: u16) {
        self.write_byte(address, value as u8);
        self.write_byte(address.wrapping_add(1), (value >> 8) as u8);
    }
}

/// Flat 64 KiB RAM with no decoding, for tests and simple hosts.
pub struct FlatMemory {
    ram: [u8; 0x10000],
}

impl FlatMemory {
    #[must_use]
    pub fn new() -> Self {
        Self { ram: [0; 0x10000] }
    }

    /// Copy `data` into RAM starting at `start`, wrapping at 0xFFFF.
    pub fn load(&mut self, start: u16, data: &[u8]) {
        let mut addr = start;
        for &byte in data {
            self.ram[addr as usize] = byte;
            addr = addr.wrapping_add(1);
        }
    }

    /// Inspect a byte without going through the bus.
    #[must_use]
    pub fn peek(&self, address: u16) -> u8 {
        self.ram[address as usize]
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl Memory for FlatMemory {
    fn read_byte(&mut self, address: u16) -> u8 {
        self.ram[address as usize]
    }

    fn write_byte(&mut self, address: u16, value: u8) {
        self.ram[address as usize] = value;
    }
}
