/*!
misc.rs - Transfers / Stack / Flag opcode family

Overview
========
Handles small, fixed-cycle instructions that move register values, manipulate
the stack, or set/clear individual processor status flags:

Transfers:
  TAX (0xAA), TAY (0xA8), TXA (0x8A), TYA (0x98), TSX (0xBA), TXS (0x9A)

Stack:
  PHA (0x48), PLA (0x68), PHP (0x08), PLP (0x28)

Flag operations:
  CLC (0x18), SEC (0x38),
  CLI (0x58), SEI (0x78),
  CLD (0xD8), SED (0xF8),
  CLV (0xB8)

NOP (0xEA and the single-byte unofficial aliases).

Timing
======
All listed opcodes have fixed base cycles; every handler returns 0.

Notes
=====
- PHP pushes P | BREAK without forcing UNUSED.
- PLP loads `(pulled & !BREAK) | UNUSED`.
- SED only sets the bit; arithmetic stays binary.
*/

use crate::bus::Memory;
use crate::cpu::context::CycleContext;
use crate::cpu::execute::{pha, php, pla, plp, set_flag, tax, tay, tsx, txa, txs, tya};
use crate::cpu::regs::CpuRegs;
use crate::cpu::state::{CARRY, DECIMAL, IRQ_DISABLE, OVERFLOW};

// -------- Transfers --------

pub(crate) fn op_tax(cpu: &mut dyn CpuRegs, _memory: &mut Memory, _ctx: &CycleContext) -> u32 {
    tax(cpu);
    0
}

pub(crate) fn op_tay(cpu: &mut dyn CpuRegs, _memory: &mut Memory, _ctx: &CycleContext) -> u32 {
    tay(cpu);
    0
}

pub(crate) fn op_txa(cpu: &mut dyn CpuRegs, _memory: &mut Memory, _ctx: &CycleContext) -> u32 {
    txa(cpu);
    0
}

pub(crate) fn op_tya(cpu: &mut dyn CpuRegs, _memory: &mut Memory, _ctx: &CycleContext) -> u32 {
    tya(cpu);
    0
}

pub(crate) fn op_tsx(cpu: &mut dyn CpuRegs, _memory: &mut Memory, _ctx: &CycleContext) -> u32 {
    tsx(cpu);
    0
}

pub(crate) fn op_txs(cpu: &mut dyn CpuRegs, _memory: &mut Memory, _ctx: &CycleContext) -> u32 {
    txs(cpu);
    0
}

// -------- Stack --------

pub(crate) fn op_pha(cpu: &mut dyn CpuRegs, memory: &mut Memory, _ctx: &CycleContext) -> u32 {
    pha(cpu, memory);
    0
}

pub(crate) fn op_pla(cpu: &mut dyn CpuRegs, memory: &mut Memory, _ctx: &CycleContext) -> u32 {
    pla(cpu, memory);
    0
}

pub(crate) fn op_php(cpu: &mut dyn CpuRegs, memory: &mut Memory, _ctx: &CycleContext) -> u32 {
    php(cpu, memory);
    0
}

pub(crate) fn op_plp(cpu: &mut dyn CpuRegs, memory: &mut Memory, _ctx: &CycleContext) -> u32 {
    plp(cpu, memory);
    0
}

// -------- Flags --------

pub(crate) fn op_clc(cpu: &mut dyn CpuRegs, _memory: &mut Memory, _ctx: &CycleContext) -> u32 {
    set_flag(cpu, CARRY, false);
    0
}

pub(crate) fn op_sec(cpu: &mut dyn CpuRegs, _memory: &mut Memory, _ctx: &CycleContext) -> u32 {
    set_flag(cpu, CARRY, true);
    0
}

pub(crate) fn op_cli(cpu: &mut dyn CpuRegs, _memory: &mut Memory, _ctx: &CycleContext) -> u32 {
    set_flag(cpu, IRQ_DISABLE, false);
    0
}

pub(crate) fn op_sei(cpu: &mut dyn CpuRegs, _memory: &mut Memory, _ctx: &CycleContext) -> u32 {
    set_flag(cpu, IRQ_DISABLE, true);
    0
}

pub(crate) fn op_cld(cpu: &mut dyn CpuRegs, _memory: &mut Memory, _ctx: &CycleContext) -> u32 {
    set_flag(cpu, DECIMAL, false);
    0
}

pub(crate) fn op_sed(cpu: &mut dyn CpuRegs, _memory: &mut Memory, _ctx: &CycleContext) -> u32 {
    set_flag(cpu, DECIMAL, true);
    0
}

pub(crate) fn op_clv(cpu: &mut dyn CpuRegs, _memory: &mut Memory, _ctx: &CycleContext) -> u32 {
    set_flag(cpu, OVERFLOW, false);
    0
}

pub(crate) fn op_nop(_cpu: &mut dyn CpuRegs, _memory: &mut Memory, _ctx: &CycleContext) -> u32 {
    0
}
