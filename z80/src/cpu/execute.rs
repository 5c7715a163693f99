//! Per-opcode operations for the Z80.

#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_lossless)]

use emu_bus::{Io, Memory};

use crate::alu;
use crate::fault::DecodeFault;
use crate::flags::{CF, PF, SF, XF, YF, ZF};

use super::Z80;

impl Z80 {
    /// Execute one base-page operation.
    ///
    /// The caller has already fetched the opcode, advanced PC past it,
    /// and charged the table's base T-state cost. Returns the
    /// data-dependent T-states on top of that cost - zero for every
    /// opcode in the implemented fragment, non-zero once taken branches
    /// and block instructions land.
    pub(super) fn execute_base<M: Memory, I: Io>(
        &mut self,
        op: u8,
        memory: &mut M,
        _io: &mut I,
    ) -> Result<u32, DecodeFault> {
        match op {
            // NOP
            0x00 => Ok(0),

            // LD BC, nn
            0x01 => {
                let nn = memory.read_word(self.regs.pc);
                self.regs.pc = self.regs.pc.wrapping_add(2);
                self.regs.set_bc(nn);
                Ok(0)
            }

            // LD (BC), A
            0x02 => {
                let bc = self.regs.bc();
                memory.write_byte(bc, self.regs.a);
                // WZ: A on the high byte, low byte of BC+1 below
                self.regs.wz = (u16::from(self.regs.a) << 8) | (bc.wrapping_add(1) & 0xFF);
                Ok(0)
            }

            // INC BC
            0x03 => {
                self.regs.set_bc(self.regs.bc().wrapping_add(1));
                Ok(0)
            }

            // INC B
            0x04 => {
                let result = alu::inc8(self.regs.b);
                self.regs.b = result.value;
                self.regs.f = (self.regs.f & CF) | result.flags;
                Ok(0)
            }

            // DEC B
            0x05 => {
                let result = alu::dec8(self.regs.b);
                self.regs.b = result.value;
                self.regs.f = (self.regs.f & CF) | result.flags;
                Ok(0)
            }

            // LD B, n
            0x06 => {
                self.regs.b = self.fetch(memory);
                Ok(0)
            }

            // RLCA
            //
            // The accumulator-only rotate: C takes the outgoing bit 7,
            // H and N clear, S/Z/P untouched. The general CB-page RLC
            // recomputes S/Z/P as well - the two must not be conflated.
            0x07 => {
                let carry = self.regs.a >> 7;
                self.regs.a = (self.regs.a << 1) | carry;
                self.regs.f = (self.regs.f & (SF | ZF | PF))
                    | (self.regs.a & (YF | XF))
                    | if carry != 0 { CF } else { 0 };
                Ok(0)
            }

            // EX AF, AF'
            0x08 => {
                std::mem::swap(&mut self.regs.a, &mut self.regs.a_shadow);
                std::mem::swap(&mut self.regs.f, &mut self.regs.f_shadow);
                Ok(0)
            }

            // ADD HL, BC
            0x09 => {
                let hl = self.regs.hl();
                let bc = self.regs.bc();
                self.regs.wz = hl.wrapping_add(1);
                let (result, flags) = alu::add16(hl, bc);
                self.regs.set_hl(result);
                // S, Z, P/V survive; H, C, X/Y come from the add; N clears
                self.regs.f = (self.regs.f & (SF | ZF | PF)) | flags;
                Ok(0)
            }

            // LD A, (BC)
            0x0A => {
                let bc = self.regs.bc();
                self.regs.a = memory.read_byte(bc);
                self.regs.wz = bc.wrapping_add(1);
                Ok(0)
            }

            // DEC BC
            0x0B => {
                self.regs.set_bc(self.regs.bc().wrapping_sub(1));
                Ok(0)
            }

            // INC C
            0x0C => {
                let result = alu::inc8(self.regs.c);
                self.regs.c = result.value;
                self.regs.f = (self.regs.f & CF) | result.flags;
                Ok(0)
            }

            // DEC C
            0x0D => {
                let result = alu::dec8(self.regs.c);
                self.regs.c = result.value;
                self.regs.f = (self.regs.f & CF) | result.flags;
                Ok(0)
            }

            // LD C, n
            0x0E => {
                self.regs.c = self.fetch(memory);
                Ok(0)
            }

            // RRCA
            0x0F => {
                let carry = self.regs.a & 1;
                self.regs.a = (self.regs.a >> 1) | (carry << 7);
                self.regs.f = (self.regs.f & (SF | ZF | PF))
                    | (self.regs.a & (YF | XF))
                    | if carry != 0 { CF } else { 0 };
                Ok(0)
            }

            // Prefix pages are recognised but not populated. The fault
            // carries the full prefix + opcode pair; the peek at PC does
            // not advance it, and the caller rolls the step back.
            0xCB | 0xDD | 0xED | 0xFD => Err(DecodeFault::Prefixed {
                prefix: op,
                opcode: memory.read_byte(self.regs.pc),
            }),

            _ => Err(DecodeFault::Unprefixed { opcode: op }),
        }
    }
}
