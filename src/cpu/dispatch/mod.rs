/*!
dispatch - Orchestrator for a single 6502 CPU step (interrupts / fetch / execute)

Overview
========
Coordinates a single CPU step:
1. Services a latched NMI, or a latched IRQ while IRQ_DISABLE is clear
   (7-cycle interrupt entry, no opcode fetch).
2. Fetches the opcode at PC and looks up its `OpInfo` in the 256-entry table.
3. Resolves the effective address (PC still at the opcode byte).
4. Publishes the `CycleContext`, advances PC by the instruction size and
   starts from the base cycle count (+ page bonus when the table says so).
5. Runs the handler, which returns any extra cycles (taken branches).

Family Modules
==============
```text
    arithmetic    ADC SBC INX INY DEX DEY
    branches      BPL BMI BVC BVS BCC BCS BNE BEQ
    compare       CMP CPX CPY
    control_flow  JMP JSR RTS RTI BRK
    load_store    LDA LDX LDY STA STX STY
    logical       AND ORA EOR BIT
    misc          transfers, stack, flag set/clear, NOP
    rmw           ASL LSR ROL ROR INC DEC
    unofficial    no-op stubs and unassigned opcodes
```

Every handler shares the `OpHandler` signature and never touches cycle
bookkeeping beyond its return value.
*/

pub(crate) mod arithmetic;
pub(crate) mod branches;
pub(crate) mod compare;
pub(crate) mod control_flow;
pub(crate) mod load_store;
pub(crate) mod logical;
pub(crate) mod misc;
pub(crate) mod rmw;
pub(crate) mod unofficial;

use crate::bus::Memory;
use crate::cpu::addressing::{AddressingMode, resolve};
use crate::cpu::context::CycleContext;
use crate::cpu::interrupt;
use crate::cpu::regs::CpuRegs;
use crate::cpu::table::{OpInfo, OpcodeKind, opcode_info};

/// What a single `step` did.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Step {
    /// An NMI / IRQ entry sequence ran instead of an instruction.
    Interrupt { cycles: u32 },
    /// One instruction was fetched and executed.
    Instruction {
        info: &'static OpInfo,
        cycles: u32,
    },
}

impl Step {
    pub(crate) fn cycles(&self) -> u32 {
        match *self {
            Step::Interrupt { cycles } | Step::Instruction { cycles, .. } => cycles,
        }
    }
}

/// Read the operand byte at the resolved address.
#[inline]
pub(super) fn operand(memory: &Memory, ctx: &CycleContext) -> u8 {
    memory.get(ctx.address)
}

/// Execute one CPU step (interrupt entry or one instruction).
pub(crate) fn step<C: CpuRegs>(cpu: &mut C, memory: &mut Memory, ctx: &mut CycleContext) -> Step {
    if let Some(vector) = interrupt::serviceable(cpu) {
        *ctx = CycleContext {
            pc: cpu.pc(),
            address: vector,
            mode: AddressingMode::Implicit,
        };
        let cycles = interrupt::service(cpu, memory, vector);
        return Step::Interrupt { cycles };
    }

    let pc = cpu.pc();
    let opcode = memory.get(pc);
    let info = opcode_info(opcode);
    let resolved = resolve(info.mode, cpu, memory);

    cpu.advance_pc(info.size as u16);
    let mut cycles = info.cycles as u32;
    if resolved.page_crossed {
        cycles += info.page_penalty as u32;
    }
    *ctx = CycleContext {
        pc,
        address: resolved.address,
        mode: info.mode,
    };

    match info.kind {
        OpcodeKind::Stub => log::debug!("{:#06X}: {} ({:#04X}) executed as no-op", pc, info.mnemonic, opcode),
        OpcodeKind::Unassigned => log::warn!("{:#06X}: unassigned opcode {:#04X} ({}) skipped", pc, opcode, info.mnemonic),
        OpcodeKind::Official | OpcodeKind::Unofficial => {}
    }

    cycles += (info.handler)(cpu, memory, ctx);
    Step::Instruction { info, cycles }
}
