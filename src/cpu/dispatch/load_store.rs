/*!
load_store.rs - Load / store opcode family (LDA LDX LDY / STA STX STY)

Loads set Z/N from the loaded value; stores write the register to the
resolved address and leave flags alone. Indexed loads may incur the
page-cross bonus (applied by the dispatcher from the table); stores never do.
*/

use super::operand;
use crate::bus::Memory;
use crate::cpu::context::CycleContext;
use crate::cpu::execute::{lda, ldx, ldy};
use crate::cpu::regs::CpuRegs;

pub(crate) fn op_lda(cpu: &mut dyn CpuRegs, memory: &mut Memory, ctx: &CycleContext) -> u32 {
    lda(cpu, operand(memory, ctx));
    0
}

pub(crate) fn op_ldx(cpu: &mut dyn CpuRegs, memory: &mut Memory, ctx: &CycleContext) -> u32 {
    ldx(cpu, operand(memory, ctx));
    0
}

pub(crate) fn op_ldy(cpu: &mut dyn CpuRegs, memory: &mut Memory, ctx: &CycleContext) -> u32 {
    ldy(cpu, operand(memory, ctx));
    0
}

pub(crate) fn op_sta(cpu: &mut dyn CpuRegs, memory: &mut Memory, ctx: &CycleContext) -> u32 {
    memory.set(ctx.address, cpu.a());
    0
}

pub(crate) fn op_stx(cpu: &mut dyn CpuRegs, memory: &mut Memory, ctx: &CycleContext) -> u32 {
    memory.set(ctx.address, cpu.x());
    0
}

pub(crate) fn op_sty(cpu: &mut dyn CpuRegs, memory: &mut Memory, ctx: &CycleContext) -> u32 {
    memory.set(ctx.address, cpu.y());
    0
}

#[cfg(test)]
mod tests {
    use crate::cpu::state::{NEGATIVE, ZERO};
    use crate::test_utils::cpu_with_program;

    #[test]
    fn lda_immediate_sets_flags() {
        // LDA #$00; LDA #$80
        let mut cpu = cpu_with_program(&[0xA9, 0x00, 0xA9, 0x80]);
        assert_eq!(cpu.step(), 2);
        assert!(cpu.flag(ZERO));
        cpu.step();
        assert_eq!(cpu.a(), 0x80);
        assert!(cpu.flag(NEGATIVE));
        assert!(!cpu.flag(ZERO));
    }

    #[test]
    fn lda_abs_x_page_cross_penalty() {
        // LDX #$01; LDA $80FF,X
        let mut cpu = cpu_with_program(&[0xA2, 0x01, 0xBD, 0xFF, 0x80]);
        cpu.memory_mut().set(0x8100, 0x5A);
        cpu.step();
        assert_eq!(cpu.step(), 5);
        assert_eq!(cpu.a(), 0x5A);
    }

    #[test]
    fn ldx_zero_page_y_wraps() {
        // LDY #$20; LDX $F0,Y  -> reads $0010
        let mut cpu = cpu_with_program(&[0xA0, 0x20, 0xB6, 0xF0]);
        cpu.memory_mut().set(0x0010, 0x77);
        cpu.step();
        assert_eq!(cpu.step(), 4);
        assert_eq!(cpu.x(), 0x77);
    }

    #[test]
    fn stores_write_through_ram_mirrors() {
        // LDA #$11; STA $0002; LDX #$22; STX $0803; LDY #$33; STY $1004
        let mut cpu = cpu_with_program(&[
            0xA9, 0x11, 0x8D, 0x02, 0x00, 0xA2, 0x22, 0x8E, 0x03, 0x08, 0xA0, 0x33, 0x8C, 0x04, 0x10,
        ]);
        cpu.run(6).unwrap();
        assert_eq!(cpu.memory().get(0x1802), 0x11);
        assert_eq!(cpu.memory().get(0x0003), 0x22);
        assert_eq!(cpu.memory().get(0x0804), 0x33);
    }

    #[test]
    fn sta_indexed_has_no_page_bonus_and_keeps_flags() {
        // LDA #$00 (Z set); LDY #$01 (Z clear); STA ($10),Y
        let mut cpu = cpu_with_program(&[0xA9, 0x00, 0xA0, 0x01, 0x91, 0x10]);
        cpu.memory_mut().load(0x0010, &[0xFF, 0x02]);
        cpu.run(2).unwrap();
        let status = cpu.status();
        assert_eq!(cpu.step(), 6);
        assert_eq!(cpu.status(), status);
        assert_eq!(cpu.memory().get(0x0300), 0x00);
    }
}
