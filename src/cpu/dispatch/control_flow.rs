/*!
control_flow.rs - Control-flow / system opcode family

Overview
========
  JMP abs        (0x4C)
  JMP (ind)      (0x6C)  (indirect vector page-wrap quirk applied by the resolver)
  JSR abs        (0x20)
  RTS            (0x60)
  RTI            (0x40)
  BRK            (0x00)

Behavior Details
================
- The dispatcher has already advanced PC past the whole instruction when a
  handler runs.
- JSR pushes (PC - 1), high byte then low, and jumps to the resolved address.
- RTS pulls low, high and adds 1 (wrap-safe) to produce the next PC.
- RTI pulls status (BREAK dropped, UNUSED forced) then PC. No +1.
- BRK is two bytes long, so the pushed return address is opcode + 2. Status
  goes through the PHP path (BREAK set), I is set, PC comes from $FFFE/$FFFF
  and any latched interrupt request is cleared.
*/

use crate::bus::Memory;
use crate::cpu::context::CycleContext;
use crate::cpu::execute::{plp, pop_word, push_word};
use crate::cpu::interrupt;
use crate::cpu::regs::CpuRegs;

pub(crate) fn op_jmp(cpu: &mut dyn CpuRegs, _memory: &mut Memory, ctx: &CycleContext) -> u32 {
    cpu.set_pc(ctx.address);
    0
}

pub(crate) fn op_jsr(cpu: &mut dyn CpuRegs, memory: &mut Memory, ctx: &CycleContext) -> u32 {
    let return_addr = cpu.pc().wrapping_sub(1);
    push_word(cpu, memory, return_addr);
    cpu.set_pc(ctx.address);
    0
}

pub(crate) fn op_rts(cpu: &mut dyn CpuRegs, memory: &mut Memory, _ctx: &CycleContext) -> u32 {
    let addr = pop_word(cpu, memory);
    cpu.set_pc(addr.wrapping_add(1));
    0
}

pub(crate) fn op_rti(cpu: &mut dyn CpuRegs, memory: &mut Memory, _ctx: &CycleContext) -> u32 {
    plp(cpu, memory);
    let pc = pop_word(cpu, memory);
    cpu.set_pc(pc);
    0
}

pub(crate) fn op_brk(cpu: &mut dyn CpuRegs, memory: &mut Memory, _ctx: &CycleContext) -> u32 {
    interrupt::software(cpu, memory);
    0
}
