//! ALU helpers shared by the per-opcode operations.
//!
//! Each helper is a pure function from operand bytes to a result and a
//! freshly computed flags byte; the caller decides which of the old flag
//! bits survive (INC/DEC keep carry, ADD HL keeps S/Z/P, and so on).

#![allow(clippy::cast_possible_truncation)] // Intentional truncation for low byte extraction.

use crate::flags::{CF, HF, NF, PF, XF, YF, sz53};

/// Result of an 8-bit ALU operation with its flags.
#[derive(Debug, Clone, Copy)]
pub struct AluResult {
    pub value: u8,
    pub flags: u8,
}

/// Increment a byte, wrapping at 0xFF.
///
/// Flags: S, Z, X/Y from the result; H when the low nibble rolls over
/// from 0xF; P/V set only on the 0x7F -> 0x80 overflow; N cleared.
/// Carry is untouched by INC - the caller preserves it.
#[must_use]
pub fn inc8(a: u8) -> AluResult {
    let result = a.wrapping_add(1);

    let mut flags = sz53(result);
    if a & 0x0F == 0x0F {
        flags |= HF;
    }
    if a == 0x7F {
        flags |= PF;
    }

    AluResult { value: result, flags }
}

/// Decrement a byte, wrapping at 0x00.
///
/// Flags: S, Z, X/Y from the result; H on a borrow out of the low
/// nibble; P/V set only on the 0x80 -> 0x7F overflow; N set. Carry is
/// untouched by DEC - the caller preserves it.
#[must_use]
pub fn dec8(a: u8) -> AluResult {
    let result = a.wrapping_sub(1);

    let mut flags = sz53(result) | NF;
    if a & 0x0F == 0x00 {
        flags |= HF;
    }
    if a == 0x80 {
        flags |= PF;
    }

    AluResult { value: result, flags }
}

/// 16-bit add for ADD HL,rr (and ADD IX/IY,rr on the prefixed pages).
///
/// Returns the sum and the flag bits this instruction defines: H from
/// bit 11, C from bit 15, X/Y from the high byte of the result. S, Z,
/// and P/V are unaffected by the hardware - the caller keeps its old
/// bits - and N is cleared by virtue of not being set here.
#[must_use]
pub fn add16(a: u16, b: u16) -> (u16, u8) {
    let result32 = u32::from(a) + u32::from(b);
    let result = result32 as u16;

    let mut flags = ((result >> 8) as u8) & (YF | XF);
    if (a & 0x0FFF) + (b & 0x0FFF) > 0x0FFF {
        flags |= HF;
    }
    if result32 > 0xFFFF {
        flags |= CF;
    }

    (result, flags)
}
