/*!
compare.rs - Compare opcode family (CMP / CPX / CPY)

Each handler compares its own register against the operand:
  C = reg >= operand (unsigned)
  Z, N from (reg - operand) & 0xFF
Registers are never modified.
*/

use super::operand;
use crate::bus::Memory;
use crate::cpu::context::CycleContext;
use crate::cpu::execute::compare;
use crate::cpu::regs::CpuRegs;

pub(crate) fn op_cmp(cpu: &mut dyn CpuRegs, memory: &mut Memory, ctx: &CycleContext) -> u32 {
    let reg = cpu.a();
    compare(cpu, reg, operand(memory, ctx));
    0
}

pub(crate) fn op_cpx(cpu: &mut dyn CpuRegs, memory: &mut Memory, ctx: &CycleContext) -> u32 {
    let reg = cpu.x();
    compare(cpu, reg, operand(memory, ctx));
    0
}

pub(crate) fn op_cpy(cpu: &mut dyn CpuRegs, memory: &mut Memory, ctx: &CycleContext) -> u32 {
    let reg = cpu.y();
    compare(cpu, reg, operand(memory, ctx));
    0
}

#[cfg(test)]
mod tests {
    use crate::cpu::state::{CARRY, NEGATIVE, ZERO};
    use crate::test_utils::cpu_with_program;

    #[test]
    fn cmp_equal_sets_zero_and_carry() {
        // LDA #$40; CMP #$40
        let mut cpu = cpu_with_program(&[0xA9, 0x40, 0xC9, 0x40]);
        cpu.run(2).unwrap();
        assert!(cpu.flag(ZERO));
        assert!(cpu.flag(CARRY));
        assert!(!cpu.flag(NEGATIVE));
        assert_eq!(cpu.a(), 0x40);
    }

    #[test]
    fn cmp_less_than_clears_carry() {
        // LDA #$10; CMP #$20
        let mut cpu = cpu_with_program(&[0xA9, 0x10, 0xC9, 0x20]);
        cpu.run(2).unwrap();
        assert!(!cpu.flag(CARRY));
        assert!(!cpu.flag(ZERO));
        assert!(cpu.flag(NEGATIVE)); // 0x10 - 0x20 = 0xF0
    }

    #[test]
    fn cpx_zero_page() {
        // LDX #$05; CPX $10 (holds $05)
        let mut cpu = cpu_with_program(&[0xA2, 0x05, 0xE4, 0x10]);
        cpu.memory_mut().set(0x0010, 0x05);
        cpu.run(2).unwrap();
        assert!(cpu.flag(ZERO));
        assert!(cpu.flag(CARRY));
    }

    #[test]
    fn cpy_compares_y_not_x() {
        // LDX #$01; LDY #$30; CPY #$30
        let mut cpu = cpu_with_program(&[0xA2, 0x01, 0xA0, 0x30, 0xC0, 0x30]);
        cpu.run(3).unwrap();
        assert!(cpu.flag(ZERO));
        assert!(cpu.flag(CARRY));
    }

    #[test]
    fn cmp_abs_y_page_cross_penalty() {
        // LDY #$01; CMP $20FF,Y
        let mut cpu = cpu_with_program(&[0xA0, 0x01, 0xD9, 0xFF, 0x20]);
        assert_eq!(cpu.step(), 2);
        assert_eq!(cpu.step(), 5);
    }
}
