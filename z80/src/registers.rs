//! Z80 register file.

#![allow(clippy::cast_possible_truncation)] // Intentional truncation for low byte extraction.

/// The Z80 register set.
///
/// Every 8-bit register is stored as its own `u8` field; the 16-bit pairs
/// (AF, BC, DE, HL and the shadow bank) are views composed on demand, so
/// a pair always reads as `(high << 8) | low` and writing a half never
/// disturbs its sibling. Register width does the masking the hardware
/// does: a wider value is truncated at the assignment boundary, never
/// rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Registers {
    // Main registers
    pub a: u8,
    pub f: u8,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub h: u8,
    pub l: u8,

    // Shadow registers, swapped in via EX AF,AF' / EXX
    pub a_shadow: u8,
    pub f_shadow: u8,
    pub b_shadow: u8,
    pub c_shadow: u8,
    pub d_shadow: u8,
    pub e_shadow: u8,
    pub h_shadow: u8,
    pub l_shadow: u8,

    // Index registers
    pub ix: u16,
    pub iy: u16,

    // Other registers
    pub sp: u16,
    pub pc: u16,
    /// Interrupt vector register.
    pub i: u8,
    /// Memory refresh register. The fetch counter touches only the low
    /// seven bits; bit 7 is program-writable and survives refresh.
    pub r: u8,

    /// WZ/MEMPTR - internal temporary register. Invisible to programs
    /// but feeds the undocumented X/Y flags of a few instructions.
    pub wz: u16,

    // Interrupt state
    pub iff1: bool,
    pub iff2: bool,
    /// Interrupt mode selector (0, 1, or 2).
    pub im: u8,

    /// Set by HALT; cleared by reset (and, in a full model, interrupts).
    pub halted: bool,
}

impl Registers {
    /// Get AF register pair.
    #[must_use]
    pub const fn af(&self) -> u16 {
        (self.a as u16) << 8 | self.f as u16
    }

    /// Get BC register pair.
    #[must_use]
    pub const fn bc(&self) -> u16 {
        (self.b as u16) << 8 | self.c as u16
    }

    /// Get DE register pair.
    #[must_use]
    pub const fn de(&self) -> u16 {
        (self.d as u16) << 8 | self.e as u16
    }

    /// Get HL register pair.
    #[must_use]
    pub const fn hl(&self) -> u16 {
        (self.h as u16) << 8 | self.l as u16
    }

    /// Set AF register pair.
    pub fn set_af(&mut self, value: u16) {
        self.a = (value >> 8) as u8;
        self.f = value as u8;
    }

    /// Set BC register pair.
    pub fn set_bc(&mut self, value: u16) {
        self.b = (value >> 8) as u8;
        self.c = value as u8;
    }

    /// Set DE register pair.
    pub fn set_de(&mut self, value: u16) {
        self.d = (value >> 8) as u8;
        self.e = value as u8;
    }

    /// Set HL register pair.
    pub fn set_hl(&mut self, value: u16) {
        self.h = (value >> 8) as u8;
        self.l = value as u8;
    }

    /// Get shadow AF pair.
    #[must_use]
    pub const fn af_shadow(&self) -> u16 {
        (self.a_shadow as u16) << 8 | self.f_shadow as u16
    }

    /// Get shadow BC pair.
    #[must_use]
    pub const fn bc_shadow(&self) -> u16 {
        (self.b_shadow as u16) << 8 | self.c_shadow as u16
    }

    /// Get shadow DE pair.
    #[must_use]
    pub const fn de_shadow(&self) -> u16 {
        (self.d_shadow as u16) << 8 | self.e_shadow as u16
    }

    /// Get shadow HL pair.
    #[must_use]
    pub const fn hl_shadow(&self) -> u16 {
        (self.h_shadow as u16) << 8 | self.l_shadow as u16
    }

    /// Set shadow AF pair.
    pub fn set_af_shadow(&mut self, value: u16) {
        self.a_shadow = (value >> 8) as u8;
        self.f_shadow = value as u8;
    }

    /// Set shadow BC pair.
    pub fn set_bc_shadow(&mut self, value: u16) {
        self.b_shadow = (value >> 8) as u8;
        self.c_shadow = value as u8;
    }

    /// Set shadow DE pair.
    pub fn set_de_shadow(&mut self, value: u16) {
        self.d_shadow = (value >> 8) as u8;
        self.e_shadow = value as u8;
    }

    /// Set shadow HL pair.
    pub fn set_hl_shadow(&mut self, value: u16) {
        self.h_shadow = (value >> 8) as u8;
        self.l_shadow = value as u8;
    }

    /// High byte of IX.
    #[must_use]
    pub const fn ixh(&self) -> u8 {
        (self.ix >> 8) as u8
    }

    /// Low byte of IX.
    #[must_use]
    pub const fn ixl(&self) -> u8 {
        self.ix as u8
    }

    /// High byte of IY.
    #[must_use]
    pub const fn iyh(&self) -> u8 {
        (self.iy >> 8) as u8
    }

    /// Low byte of IY.
    #[must_use]
    pub const fn iyl(&self) -> u8 {
        self.iy as u8
    }

    /// Set the high byte of IX.
    pub fn set_ixh(&mut self, value: u8) {
        self.ix = (self.ix & 0x00FF) | u16::from(value) << 8;
    }

    /// Set the low byte of IX.
    pub fn set_ixl(&mut self, value: u8) {
        self.ix = (self.ix & 0xFF00) | u16::from(value);
    }

    /// Set the high byte of IY.
    pub fn set_iyh(&mut self, value: u8) {
        self.iy = (self.iy & 0x00FF) | u16::from(value) << 8;
    }

    /// Set the low byte of IY.
    pub fn set_iyl(&mut self, value: u8) {
        self.iy = (self.iy & 0xFF00) | u16::from(value);
    }

    /// Set I and R together from a 16-bit value (I from the high byte).
    pub fn set_ir(&mut self, value: u16) {
        self.i = (value >> 8) as u8;
        self.r = value as u8;
    }

    /// Bit 7 of the refresh register.
    #[must_use]
    pub const fn r7(&self) -> bool {
        self.r & 0x80 != 0
    }

    /// Set bit 7 of the refresh register, leaving the counter bits alone.
    pub fn set_r7(&mut self, on: bool) {
        if on {
            self.r |= 0x80;
        } else {
            self.r &= 0x7F;
        }
    }

    /// Read one flag bit from F. `mask` is one of the flag bit
    /// constants ([`SF`](crate::SF) through [`CF`](crate::CF)).
    #[must_use]
    pub const fn flag(&self, mask: u8) -> bool {
        self.f & mask != 0
    }

    /// Write one flag bit in F.
    pub fn set_flag(&mut self, mask: u8, on: bool) {
        if on {
            self.f |= mask;
        } else {
            self.f &= !mask;
        }
    }

    /// Zero every register, flag, and flip-flop (hardware reset).
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
