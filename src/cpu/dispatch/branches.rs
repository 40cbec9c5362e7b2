/*!
branches.rs - Relative branch opcode handlers (BPL/BMI/BVC/BVS/BCC/BCS/BNE/BEQ)

Cycle Rules
===========
Base cost: 2 cycles (from the table).
If branch is taken: +1 cycle.
If branch is taken and the target lies on a different page than the
instruction following the branch: +2 total (vs base).

The resolver already computed the target (`ctx.address`) and the dispatcher
has advanced PC past the operand, so each handler only evaluates its
condition and returns the value from `branch_cond`.
*/

use crate::bus::Memory;
use crate::cpu::context::CycleContext;
use crate::cpu::execute::{branch_cond, get_flag};
use crate::cpu::regs::CpuRegs;
use crate::cpu::state::{CARRY, NEGATIVE, OVERFLOW, ZERO};

pub(crate) fn op_bpl(cpu: &mut dyn CpuRegs, _memory: &mut Memory, ctx: &CycleContext) -> u32 {
    let take = !get_flag(cpu, NEGATIVE);
    branch_cond(cpu, ctx.address, take)
}

pub(crate) fn op_bmi(cpu: &mut dyn CpuRegs, _memory: &mut Memory, ctx: &CycleContext) -> u32 {
    let take = get_flag(cpu, NEGATIVE);
    branch_cond(cpu, ctx.address, take)
}

pub(crate) fn op_bvc(cpu: &mut dyn CpuRegs, _memory: &mut Memory, ctx: &CycleContext) -> u32 {
    let take = !get_flag(cpu, OVERFLOW);
    branch_cond(cpu, ctx.address, take)
}

pub(crate) fn op_bvs(cpu: &mut dyn CpuRegs, _memory: &mut Memory, ctx: &CycleContext) -> u32 {
    let take = get_flag(cpu, OVERFLOW);
    branch_cond(cpu, ctx.address, take)
}

pub(crate) fn op_bcc(cpu: &mut dyn CpuRegs, _memory: &mut Memory, ctx: &CycleContext) -> u32 {
    let take = !get_flag(cpu, CARRY);
    branch_cond(cpu, ctx.address, take)
}

pub(crate) fn op_bcs(cpu: &mut dyn CpuRegs, _memory: &mut Memory, ctx: &CycleContext) -> u32 {
    let take = get_flag(cpu, CARRY);
    branch_cond(cpu, ctx.address, take)
}

pub(crate) fn op_bne(cpu: &mut dyn CpuRegs, _memory: &mut Memory, ctx: &CycleContext) -> u32 {
    let take = !get_flag(cpu, ZERO);
    branch_cond(cpu, ctx.address, take)
}

pub(crate) fn op_beq(cpu: &mut dyn CpuRegs, _memory: &mut Memory, ctx: &CycleContext) -> u32 {
    let take = get_flag(cpu, ZERO);
    branch_cond(cpu, ctx.address, take)
}
