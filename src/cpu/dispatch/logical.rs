/*!
logical.rs - Logical opcode family (AND, ORA, EOR, BIT)

AND / ORA / EOR combine the operand into A and set Z/N from the result.
BIT leaves A untouched: Z from `A & operand`, N and V copied from operand
bits 7 and 6.
*/

use super::operand;
use crate::bus::Memory;
use crate::cpu::context::CycleContext;
use crate::cpu::execute::{and, bit, eor, ora};
use crate::cpu::regs::CpuRegs;

pub(crate) fn op_and(cpu: &mut dyn CpuRegs, memory: &mut Memory, ctx: &CycleContext) -> u32 {
    and(cpu, operand(memory, ctx));
    0
}

pub(crate) fn op_ora(cpu: &mut dyn CpuRegs, memory: &mut Memory, ctx: &CycleContext) -> u32 {
    ora(cpu, operand(memory, ctx));
    0
}

pub(crate) fn op_eor(cpu: &mut dyn CpuRegs, memory: &mut Memory, ctx: &CycleContext) -> u32 {
    eor(cpu, operand(memory, ctx));
    0
}

pub(crate) fn op_bit(cpu: &mut dyn CpuRegs, memory: &mut Memory, ctx: &CycleContext) -> u32 {
    bit(cpu, operand(memory, ctx));
    0
}

#[cfg(test)]
mod tests {
    use crate::cpu::state::{NEGATIVE, OVERFLOW, ZERO};
    use crate::test_utils::cpu_with_program;

    #[test]
    fn and_ora_eor_immediate() {
        // LDA #$F0; AND #$3C; ORA #$01; EOR #$FF
        let mut cpu = cpu_with_program(&[0xA9, 0xF0, 0x29, 0x3C, 0x09, 0x01, 0x49, 0xFF]);
        cpu.run(2).unwrap();
        assert_eq!(cpu.a(), 0x30);
        cpu.step();
        assert_eq!(cpu.a(), 0x31);
        cpu.step();
        assert_eq!(cpu.a(), 0xCE);
        assert!(cpu.flag(NEGATIVE));
    }

    #[test]
    fn and_to_zero_sets_zero_flag() {
        // LDA #$0F; AND #$F0
        let mut cpu = cpu_with_program(&[0xA9, 0x0F, 0x29, 0xF0]);
        cpu.run(2).unwrap();
        assert_eq!(cpu.a(), 0x00);
        assert!(cpu.flag(ZERO));
    }

    #[test]
    fn bit_zero_page() {
        // LDA #$01; BIT $40 (holds $C0)
        let mut cpu = cpu_with_program(&[0xA9, 0x01, 0x24, 0x40]);
        cpu.memory_mut().set(0x0040, 0xC0);
        cpu.step();
        assert_eq!(cpu.step(), 3);
        assert!(cpu.flag(ZERO));
        assert!(cpu.flag(NEGATIVE));
        assert!(cpu.flag(OVERFLOW));
        assert_eq!(cpu.a(), 0x01);
    }

    #[test]
    fn eor_indirect_x() {
        // LDX #$04; LDA #$FF; EOR ($10,X) -> pointer at $14 -> $0300
        let mut cpu = cpu_with_program(&[0xA2, 0x04, 0xA9, 0xFF, 0x41, 0x10]);
        cpu.memory_mut().load(0x0014, &[0x00, 0x03]);
        cpu.memory_mut().set(0x0300, 0x0F);
        cpu.run(2).unwrap();
        assert_eq!(cpu.step(), 6);
        assert_eq!(cpu.a(), 0xF0);
    }
}
