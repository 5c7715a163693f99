//! Unit tests for the implemented base-page instructions.
//!
//! Each test seeds registers and memory, executes exactly one
//! instruction, and checks the documented result, flags, and timing.

use emu_bus::{Cpu, FlatMemory, NullIo};
use z80_cpu::{CF, HF, NF, PF, SF, XF, YF, Z80, ZF};

/// Execute one instruction, panicking on a decode fault.
fn step(cpu: &mut Z80, mem: &mut FlatMemory) -> u32 {
    cpu.execute_instruction(mem, &mut NullIo)
        .expect("opcode should decode")
}

#[test]
fn nop_advances_pc_refresh_and_clock_only() {
    let mut mem = FlatMemory::new();
    mem.load(0x0000, &[0x00]);
    let mut cpu = Z80::new();

    let t = step(&mut cpu, &mut mem);

    assert_eq!(t, 4);
    assert_eq!(cpu.t_states(), 4);
    let regs = cpu.registers();
    assert_eq!(regs.pc, 0x0001);
    assert_eq!(regs.r, 0x01);
    // Nothing else moved
    let expected = z80_cpu::Registers {
        pc: 0x0001,
        r: 0x01,
        ..z80_cpu::Registers::default()
    };
    assert_eq!(regs, expected);
}

#[test]
fn ld_bc_nn_loads_little_endian() {
    let mut mem = FlatMemory::new();
    mem.load(0x0000, &[0x01, 0x12, 0x34]);
    let mut cpu = Z80::new();

    let t = step(&mut cpu, &mut mem);

    assert_eq!(t, 10);
    assert_eq!(cpu.regs.bc(), 0x3412);
    assert_eq!(cpu.regs.pc, 0x0003);
}

#[test]
fn ld_bc_indirect_a_stores_accumulator() {
    let mut mem = FlatMemory::new();
    mem.load(0x0000, &[0x02]);
    let mut cpu = Z80::new();
    cpu.regs.a = 0x56;
    cpu.regs.set_bc(0x8000);

    let t = step(&mut cpu, &mut mem);

    assert_eq!(t, 7);
    assert_eq!(mem.peek(0x8000), 0x56);
    assert_eq!(cpu.regs.wz, 0x5601);
}

#[test]
fn inc_bc_leaves_flags_alone() {
    let mut mem = FlatMemory::new();
    mem.load(0x0000, &[0x03]);
    let mut cpu = Z80::new();
    cpu.regs.set_bc(0x789A);
    cpu.regs.f = 0xFF;

    let t = step(&mut cpu, &mut mem);

    assert_eq!(t, 6);
    assert_eq!(cpu.regs.bc(), 0x789B);
    assert_eq!(cpu.regs.f, 0xFF);
    assert_eq!(cpu.regs.pc, 0x0001);
}

#[test]
fn inc_bc_wraps_at_ffff() {
    let mut mem = FlatMemory::new();
    mem.load(0x0000, &[0x03]);
    let mut cpu = Z80::new();
    cpu.regs.set_bc(0xFFFF);

    step(&mut cpu, &mut mem);

    assert_eq!(cpu.regs.bc(), 0x0000);
}

#[test]
fn inc_b_sets_overflow_and_preserves_carry() {
    let mut mem = FlatMemory::new();
    mem.load(0x0000, &[0x04]);
    let mut cpu = Z80::new();
    cpu.regs.b = 0x7F;
    cpu.regs.f = CF;

    let t = step(&mut cpu, &mut mem);

    assert_eq!(t, 4);
    assert_eq!(cpu.regs.b, 0x80);
    assert!(cpu.regs.flag(SF));
    assert!(cpu.regs.flag(HF));
    assert!(cpu.regs.flag(PF));
    assert!(!cpu.regs.flag(NF));
    assert!(cpu.regs.flag(CF), "INC must not touch carry");
}

#[test]
fn inc_b_wraps_to_zero() {
    let mut mem = FlatMemory::new();
    mem.load(0x0000, &[0x04]);
    let mut cpu = Z80::new();
    cpu.regs.b = 0xFF;

    step(&mut cpu, &mut mem);

    assert_eq!(cpu.regs.b, 0x00);
    assert!(cpu.regs.flag(ZF));
    assert!(cpu.regs.flag(HF));
    assert!(!cpu.regs.flag(SF));
}

#[test]
fn dec_b_to_zero_sets_zero_and_subtract() {
    let mut mem = FlatMemory::new();
    mem.load(0x0000, &[0x05]);
    let mut cpu = Z80::new();
    cpu.regs.b = 0x01;

    let t = step(&mut cpu, &mut mem);

    assert_eq!(t, 4);
    assert_eq!(cpu.regs.b, 0x00);
    assert_eq!(cpu.regs.f, ZF | NF);
}

#[test]
fn dec_b_sets_overflow_at_sign_boundary() {
    let mut mem = FlatMemory::new();
    mem.load(0x0000, &[0x05]);
    let mut cpu = Z80::new();
    cpu.regs.b = 0x80;

    step(&mut cpu, &mut mem);

    assert_eq!(cpu.regs.b, 0x7F);
    assert_eq!(cpu.regs.f, YF | HF | XF | PF | NF);
}

#[test]
fn dec_b_wraps_below_zero() {
    let mut mem = FlatMemory::new();
    mem.load(0x0000, &[0x05]);
    let mut cpu = Z80::new();
    cpu.regs.b = 0x00;

    step(&mut cpu, &mut mem);

    assert_eq!(cpu.regs.b, 0xFF);
    assert_eq!(cpu.regs.f, SF | YF | HF | XF | NF);
}

#[test]
fn ld_b_n_reads_operand() {
    let mut mem = FlatMemory::new();
    mem.load(0x0000, &[0x06, 0x42]);
    let mut cpu = Z80::new();

    let t = step(&mut cpu, &mut mem);

    assert_eq!(t, 7);
    assert_eq!(cpu.regs.b, 0x42);
    assert_eq!(cpu.regs.pc, 0x0002);
}

#[test]
fn rlca_rotates_through_carry_preserving_szp() {
    let mut mem = FlatMemory::new();
    mem.load(0x0000, &[0x07]);
    let mut cpu = Z80::new();
    cpu.regs.a = 0x85;
    cpu.regs.f = SF | ZF | PF;

    let t = step(&mut cpu, &mut mem);

    assert_eq!(t, 4);
    assert_eq!(cpu.regs.a, 0x0B);
    assert!(cpu.regs.flag(CF), "bit 7 lands in carry");
    assert!(cpu.regs.flag(SF) && cpu.regs.flag(ZF) && cpu.regs.flag(PF));
    assert!(!cpu.regs.flag(HF));
    assert!(!cpu.regs.flag(NF));
}

#[test]
fn rlca_clears_carry_when_bit7_clear() {
    let mut mem = FlatMemory::new();
    mem.load(0x0000, &[0x07]);
    let mut cpu = Z80::new();
    cpu.regs.a = 0x40;
    cpu.regs.f = CF;

    step(&mut cpu, &mut mem);

    assert_eq!(cpu.regs.a, 0x80);
    assert!(!cpu.regs.flag(CF));
}

#[test]
fn ex_af_af_swaps_both_halves_together() {
    let mut mem = FlatMemory::new();
    mem.load(0x0000, &[0x08]);
    let mut cpu = Z80::new();
    cpu.regs.set_af(0xDEF0);
    cpu.regs.set_af_shadow(0x1234);

    let t = step(&mut cpu, &mut mem);

    assert_eq!(t, 4);
    assert_eq!(cpu.regs.af(), 0x1234);
    assert_eq!(cpu.regs.af_shadow(), 0xDEF0);
    assert_eq!(cpu.regs.pc, 0x0001);
}

#[test]
fn add_hl_bc_sets_half_carry_from_bit_11() {
    let mut mem = FlatMemory::new();
    mem.load(0x0000, &[0x09]);
    let mut cpu = Z80::new();
    cpu.regs.set_af(0xDEF0);
    cpu.regs.set_bc(0x5678);
    cpu.regs.set_hl(0x9ABC);

    let t = step(&mut cpu, &mut mem);

    assert_eq!(t, 11);
    assert_eq!(cpu.regs.hl(), 0xF134);
    assert!(cpu.regs.flag(HF), "0xABC + 0x678 overflows bit 11");
    assert!(!cpu.regs.flag(CF));
    assert!(!cpu.regs.flag(NF));
    // S, Z, P/V are untouched by ADD HL,rr
    assert!(cpu.regs.flag(SF) && cpu.regs.flag(ZF));
    assert!(!cpu.regs.flag(PF));
    assert_eq!(cpu.regs.wz, 0x9ABD);
}

#[test]
fn add_hl_bc_carries_out_of_bit_15() {
    let mut mem = FlatMemory::new();
    mem.load(0x0000, &[0x09]);
    let mut cpu = Z80::new();
    cpu.regs.set_bc(0x0001);
    cpu.regs.set_hl(0xFFFF);

    step(&mut cpu, &mut mem);

    assert_eq!(cpu.regs.hl(), 0x0000);
    assert!(cpu.regs.flag(CF));
    assert!(cpu.regs.flag(HF));
}

#[test]
fn ld_a_bc_indirect_loads_accumulator() {
    let mut mem = FlatMemory::new();
    mem.load(0x0000, &[0x0A]);
    mem.load(0x0040, &[0x99]);
    let mut cpu = Z80::new();
    cpu.regs.set_bc(0x0040);

    let t = step(&mut cpu, &mut mem);

    assert_eq!(t, 7);
    assert_eq!(cpu.regs.a, 0x99);
    assert_eq!(cpu.regs.wz, 0x0041);
}

#[test]
fn dec_bc_underflows_without_touching_flags() {
    let mut mem = FlatMemory::new();
    mem.load(0x0000, &[0x0B]);
    let mut cpu = Z80::new();
    cpu.regs.set_bc(0x0000);
    cpu.regs.f = 0xFF;

    let t = step(&mut cpu, &mut mem);

    assert_eq!(t, 6);
    assert_eq!(cpu.regs.bc(), 0xFFFF);
    assert_eq!(cpu.regs.f, 0xFF);
}

#[test]
fn inc_c_half_carries_out_of_low_nibble() {
    let mut mem = FlatMemory::new();
    mem.load(0x0000, &[0x0C]);
    let mut cpu = Z80::new();
    cpu.regs.c = 0x0F;

    step(&mut cpu, &mut mem);

    assert_eq!(cpu.regs.c, 0x10);
    assert_eq!(cpu.regs.f, HF);
}

#[test]
fn dec_c_sets_overflow_at_sign_boundary() {
    let mut mem = FlatMemory::new();
    mem.load(0x0000, &[0x0D]);
    let mut cpu = Z80::new();
    cpu.regs.c = 0x80;

    step(&mut cpu, &mut mem);

    assert_eq!(cpu.regs.c, 0x7F);
    assert!(cpu.regs.flag(PF));
    assert!(cpu.regs.flag(NF));
}

#[test]
fn ld_c_n_reads_operand() {
    let mut mem = FlatMemory::new();
    mem.load(0x0000, &[0x0E, 0x7C]);
    let mut cpu = Z80::new();

    let t = step(&mut cpu, &mut mem);

    assert_eq!(t, 7);
    assert_eq!(cpu.regs.c, 0x7C);
    assert_eq!(cpu.regs.pc, 0x0002);
}

#[test]
fn rrca_rotates_bit0_into_carry_and_bit7() {
    let mut mem = FlatMemory::new();
    mem.load(0x0000, &[0x0F]);
    let mut cpu = Z80::new();
    cpu.regs.a = 0x01;

    let t = step(&mut cpu, &mut mem);

    assert_eq!(t, 4);
    assert_eq!(cpu.regs.a, 0x80);
    assert!(cpu.regs.flag(CF));
    assert!(!cpu.regs.flag(HF));
    assert!(!cpu.regs.flag(NF));
}

#[test]
fn pc_wraps_at_top_of_address_space() {
    let mut mem = FlatMemory::new();
    mem.load(0xFFFF, &[0x00]);
    let mut cpu = Z80::new();
    cpu.regs.pc = 0xFFFF;

    step(&mut cpu, &mut mem);

    assert_eq!(cpu.regs.pc, 0x0000);
}

#[test]
fn short_program_accumulates_state_and_clock() {
    let mut mem = FlatMemory::new();
    // LD BC, 0x0102; INC B; DEC C
    mem.load(0x0000, &[0x01, 0x02, 0x01, 0x04, 0x0D]);
    let mut cpu = Z80::new();

    let mut total = 0;
    for _ in 0..3 {
        total += step(&mut cpu, &mut mem);
    }

    assert_eq!(total, 10 + 4 + 4);
    assert_eq!(cpu.t_states(), 18);
    assert_eq!(cpu.regs.bc(), 0x0201);
    assert_eq!(cpu.regs.pc, 0x0005);
    assert_eq!(cpu.regs.r, 0x03);
}
