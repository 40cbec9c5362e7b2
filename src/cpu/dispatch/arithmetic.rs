/*!
arithmetic.rs - Arithmetic opcode family (ADC, SBC, INX, INY, DEX, DEY)

Overview
========
ADC / SBC read their operand from the resolved address (immediate operands
resolve to PC+1, so one handler covers every addressing mode). SBC passes
`1 - carry` into the carry / overflow predicates as the borrow. The
register increments wrap at 8 bits.

Timing
======
Fixed base cycles come from the opcode table; the page-cross bonus for the
indexed read forms is applied by the dispatcher. Handlers return 0.
*/

use super::operand;
use crate::bus::Memory;
use crate::cpu::context::CycleContext;
use crate::cpu::execute::{adc, dex, dey, inx, iny, sbc};
use crate::cpu::regs::CpuRegs;

pub(crate) fn op_adc(cpu: &mut dyn CpuRegs, memory: &mut Memory, ctx: &CycleContext) -> u32 {
    adc(cpu, operand(memory, ctx));
    0
}

pub(crate) fn op_sbc(cpu: &mut dyn CpuRegs, memory: &mut Memory, ctx: &CycleContext) -> u32 {
    sbc(cpu, operand(memory, ctx));
    0
}

pub(crate) fn op_inx(cpu: &mut dyn CpuRegs, _memory: &mut Memory, _ctx: &CycleContext) -> u32 {
    inx(cpu);
    0
}

pub(crate) fn op_iny(cpu: &mut dyn CpuRegs, _memory: &mut Memory, _ctx: &CycleContext) -> u32 {
    iny(cpu);
    0
}

pub(crate) fn op_dex(cpu: &mut dyn CpuRegs, _memory: &mut Memory, _ctx: &CycleContext) -> u32 {
    dex(cpu);
    0
}

pub(crate) fn op_dey(cpu: &mut dyn CpuRegs, _memory: &mut Memory, _ctx: &CycleContext) -> u32 {
    dey(cpu);
    0
}
