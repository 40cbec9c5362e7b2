/*!
rmw.rs - RMW / shift / increment / decrement opcode family

Overview
========
Shifts / rotates and memory INC / DEC. Memory forms run the shared
read -> transform -> write sequence in `execute::rmw_memory`; accumulator
forms (ASL A, LSR A, ROL A, ROR A) are selected by the addressing mode in
the cycle context, so one handler per mnemonic covers every encoding.

Covered Opcodes
---------------
  ASL: 0x0A (A), 0x06 (zp), 0x16 (zp,X), 0x0E (abs), 0x1E (abs,X)
  LSR: 0x4A (A), 0x46 (zp), 0x56 (zp,X), 0x4E (abs), 0x5E (abs,X)
  ROL: 0x2A (A), 0x26 (zp), 0x36 (zp,X), 0x2E (abs), 0x3E (abs,X)
  ROR: 0x6A (A), 0x66 (zp), 0x76 (zp,X), 0x6E (abs), 0x7E (abs,X)
  INC: 0xE6 (zp), 0xF6 (zp,X), 0xEE (abs), 0xFE (abs,X)
  DEC: 0xC6 (zp), 0xD6 (zp,X), 0xCE (abs), 0xDE (abs,X)

Absolute,X RMW forms have a fixed cost and never take the page-cross bonus.
*/

use crate::bus::Memory;
use crate::cpu::addressing::AddressingMode;
use crate::cpu::context::CycleContext;
use crate::cpu::execute::{
    asl_acc, asl_mem, dec_mem, inc_mem, lsr_acc, lsr_mem, rol_acc, rol_mem, ror_acc, ror_mem,
};
use crate::cpu::regs::CpuRegs;

#[inline]
fn on_accumulator(ctx: &CycleContext) -> bool {
    ctx.mode == AddressingMode::Accumulator
}

pub(crate) fn op_asl(cpu: &mut dyn CpuRegs, memory: &mut Memory, ctx: &CycleContext) -> u32 {
    if on_accumulator(ctx) {
        asl_acc(cpu);
    } else {
        asl_mem(cpu, memory, ctx.address);
    }
    0
}

pub(crate) fn op_lsr(cpu: &mut dyn CpuRegs, memory: &mut Memory, ctx: &CycleContext) -> u32 {
    if on_accumulator(ctx) {
        lsr_acc(cpu);
    } else {
        lsr_mem(cpu, memory, ctx.address);
    }
    0
}

pub(crate) fn op_rol(cpu: &mut dyn CpuRegs, memory: &mut Memory, ctx: &CycleContext) -> u32 {
    if on_accumulator(ctx) {
        rol_acc(cpu);
    } else {
        rol_mem(cpu, memory, ctx.address);
    }
    0
}

pub(crate) fn op_ror(cpu: &mut dyn CpuRegs, memory: &mut Memory, ctx: &CycleContext) -> u32 {
    if on_accumulator(ctx) {
        ror_acc(cpu);
    } else {
        ror_mem(cpu, memory, ctx.address);
    }
    0
}

pub(crate) fn op_inc(cpu: &mut dyn CpuRegs, memory: &mut Memory, ctx: &CycleContext) -> u32 {
    inc_mem(cpu, memory, ctx.address);
    0
}

pub(crate) fn op_dec(cpu: &mut dyn CpuRegs, memory: &mut Memory, ctx: &CycleContext) -> u32 {
    dec_mem(cpu, memory, ctx.address);
    0
}

#[cfg(test)]
mod tests {
    use crate::cpu::state::{CARRY, NEGATIVE, ZERO};
    use crate::cpu::table::opcode_info;
    use crate::test_utils::cpu_with_program;

    fn base_cycles(op: u8) -> u32 {
        opcode_info(op).cycles as u32
    }

    #[test]
    fn asl_accumulator_basic() {
        // LDA #$81; ASL A
        let mut cpu = cpu_with_program(&[0xA9, 0x81, 0x0A]);
        assert_eq!(cpu.step(), 2);
        assert_eq!(cpu.step(), base_cycles(0x0A));
        assert_eq!(cpu.a(), 0x02);
        assert!(cpu.flag(CARRY));
    }

    #[test]
    fn accumulator_form_leaves_address_zero_alone() {
        // LDA #$01; LSR A
        let mut cpu = cpu_with_program(&[0xA9, 0x01, 0x4A]);
        cpu.memory_mut().set(0x0000, 0x80);
        cpu.run(2).unwrap();
        assert_eq!(cpu.a(), 0x00);
        assert!(cpu.flag(ZERO));
        assert!(cpu.flag(CARRY));
        assert_eq!(cpu.memory().get(0x0000), 0x80);
    }

    #[test]
    fn inc_zeropage() {
        // LDA #$00; STA $10; INC $10
        let mut cpu = cpu_with_program(&[0xA9, 0x00, 0x85, 0x10, 0xE6, 0x10]);
        assert_eq!(cpu.step(), 2);
        assert_eq!(cpu.step(), 3);
        assert_eq!(cpu.step(), base_cycles(0xE6));
        assert_eq!(cpu.memory().get(0x0010), 0x01);
    }

    #[test]
    fn dec_abs_x() {
        // LDX #$01; LDA #$05; STA $2000,X; DEC $2000,X
        let mut cpu = cpu_with_program(&[0xA2, 0x01, 0xA9, 0x05, 0x9D, 0x00, 0x20, 0xDE, 0x00, 0x20]);
        assert_eq!(cpu.step(), 2);
        assert_eq!(cpu.step(), 2);
        assert_eq!(cpu.step(), 5);
        assert_eq!(cpu.step(), base_cycles(0xDE));
        assert_eq!(cpu.memory().get(0x2001), 0x04);
    }

    #[test]
    fn rmw_abs_x_never_takes_page_bonus() {
        // LDX #$01; INC $20FF,X
        let mut cpu = cpu_with_program(&[0xA2, 0x01, 0xFE, 0xFF, 0x20]);
        cpu.step();
        assert_eq!(cpu.step(), 7);
        assert_eq!(cpu.memory().get(0x2100), 0x01);
    }

    #[test]
    fn ror_memory_injects_carry() {
        // SEC; ROR $10
        let mut cpu = cpu_with_program(&[0x38, 0x66, 0x10]);
        cpu.memory_mut().set(0x0010, 0x02);
        cpu.run(2).unwrap();
        assert_eq!(cpu.memory().get(0x0010), 0x81);
        assert!(!cpu.flag(CARRY));
        assert!(cpu.flag(NEGATIVE));
    }
}
