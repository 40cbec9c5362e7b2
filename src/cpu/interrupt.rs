/*!
interrupt.rs - Interrupt request latch, vectors, and the hardware entry sequence.

Latching
========
`Cpu::request_interrupt` stores at most one pending request:
  - NMI always latches.
  - IRQ is dropped while IRQ_DISABLE is set at request time.

Servicing
=========
The dispatcher checks the latch at the top of every step, before the opcode
fetch. A pending NMI is always serviced; a pending IRQ only while
IRQ_DISABLE is clear (it stays latched otherwise). Entry pushes PC high,
PC low, then status with BREAK clear and UNUSED set, sets IRQ_DISABLE and
loads PC from the vector. The step consumes `INTERRUPT_CYCLES` and fetches
no instruction.

BRK shares the push/vector sequence but pushes status with BREAK set and
always uses the IRQ vector.
*/

use crate::bus::Memory;
use crate::cpu::addressing::read16;
use crate::cpu::execute::{push, push_status_with_break, push_word, set_flag};
use crate::cpu::regs::CpuRegs;
use crate::cpu::state::IRQ_DISABLE;

/// NMI vector ($FFFA/$FFFB).
pub const NMI_VECTOR: u16 = 0xFFFA;
/// Reset vector ($FFFC/$FFFD).
pub const RESET_VECTOR: u16 = 0xFFFC;
/// IRQ / BRK vector ($FFFE/$FFFF).
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// Cycles consumed by the hardware interrupt entry sequence.
pub const INTERRUPT_CYCLES: u32 = 7;

/// Pending interrupt request latched on the CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InterruptRequest {
    #[default]
    None,
    Nmi,
    Irq,
}

/// Kinds of interrupt an external device may request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterruptKind {
    Nmi,
    Irq,
}

impl From<InterruptKind> for InterruptRequest {
    fn from(kind: InterruptKind) -> Self {
        match kind {
            InterruptKind::Nmi => InterruptRequest::Nmi,
            InterruptKind::Irq => InterruptRequest::Irq,
        }
    }
}

/// Apply the latch policy for a new request.
pub(crate) fn latch<C: CpuRegs + ?Sized>(cpu: &mut C, kind: InterruptKind) {
    if kind == InterruptKind::Irq
        && (cpu.is_flag_set(IRQ_DISABLE) || cpu.pending_interrupt() == InterruptRequest::Nmi)
    {
        return;
    }
    cpu.set_pending_interrupt(kind.into());
}

/// Return the vector to service now, if any.
pub(crate) fn serviceable<C: CpuRegs + ?Sized>(cpu: &C) -> Option<u16> {
    match cpu.pending_interrupt() {
        InterruptRequest::Nmi => Some(NMI_VECTOR),
        InterruptRequest::Irq if !cpu.is_flag_set(IRQ_DISABLE) => Some(IRQ_VECTOR),
        _ => None,
    }
}

/// Hardware interrupt entry: push PC and status (BREAK clear), set I, jump.
/// Clears the latch and returns the cycles consumed.
pub(crate) fn service<C: CpuRegs + ?Sized>(cpu: &mut C, memory: &mut Memory, vector: u16) -> u32 {
    let return_pc = cpu.pc();
    push_word(cpu, memory, return_pc);
    push_status_with_break(cpu, memory, false);
    set_flag(cpu, IRQ_DISABLE, true);
    cpu.set_pc(read16(memory, vector));
    cpu.set_pending_interrupt(InterruptRequest::None);
    log::debug!(
        "interrupt entry via {:#06X}: return PC {:#06X} -> {:#06X}",
        vector,
        return_pc,
        cpu.pc()
    );
    INTERRUPT_CYCLES
}

/// Software interrupt (BRK): push PC, status via the PHP path, set I, jump
/// through the IRQ vector and drop any latched request.
pub(crate) fn software<C: CpuRegs + ?Sized>(cpu: &mut C, memory: &mut Memory) {
    let pc = cpu.pc();
    push(cpu, memory, (pc >> 8) as u8);
    push(cpu, memory, pc as u8);
    push_status_with_break(cpu, memory, true);
    set_flag(cpu, IRQ_DISABLE, true);
    cpu.set_pc(read16(memory, IRQ_VECTOR));
    cpu.set_pending_interrupt(InterruptRequest::None);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu::state::{BREAK, CpuState, UNUSED};

    #[test]
    fn irq_is_dropped_while_disabled() {
        let mut s = CpuState::new();
        s.set_flag_bit(IRQ_DISABLE);
        latch(&mut s, InterruptKind::Irq);
        assert_eq!(s.pending_interrupt, InterruptRequest::None);
        latch(&mut s, InterruptKind::Nmi);
        assert_eq!(s.pending_interrupt, InterruptRequest::Nmi);
    }

    #[test]
    fn irq_does_not_replace_latched_nmi() {
        let mut s = CpuState::new();
        latch(&mut s, InterruptKind::Nmi);
        latch(&mut s, InterruptKind::Irq);
        assert_eq!(s.pending_interrupt, InterruptRequest::Nmi);
    }

    #[test]
    fn latched_irq_waits_for_flag_clear() {
        let mut s = CpuState::new();
        latch(&mut s, InterruptKind::Irq);
        s.set_flag_bit(IRQ_DISABLE);
        assert_eq!(serviceable(&s), None);
        s.clear_flag_bit(IRQ_DISABLE);
        assert_eq!(serviceable(&s), Some(IRQ_VECTOR));
    }

    #[test]
    fn nmi_ignores_irq_disable() {
        let mut s = CpuState::new();
        s.set_flag_bit(IRQ_DISABLE);
        latch(&mut s, InterruptKind::Nmi);
        assert_eq!(serviceable(&s), Some(NMI_VECTOR));
    }

    #[test]
    fn service_pushes_pc_and_status_without_break() {
        let mut s = CpuState::new();
        let mut memory = Memory::new();
        memory.load(NMI_VECTOR, &[0x00, 0x90]);
        s.sp = 0xFD;
        s.pc = 0x8123;
        s.status = BREAK;
        s.pending_interrupt = InterruptRequest::Nmi;

        let cycles = service(&mut s, &mut memory, NMI_VECTOR);

        assert_eq!(cycles, INTERRUPT_CYCLES);
        assert_eq!(s.pc, 0x9000);
        assert_eq!(s.sp, 0xFA);
        assert_eq!(memory.get(0x01FD), 0x81);
        assert_eq!(memory.get(0x01FC), 0x23);
        assert_eq!(memory.get(0x01FB), UNUSED);
        assert!(s.is_flag_set(IRQ_DISABLE));
        assert_eq!(s.pending_interrupt, InterruptRequest::None);
    }
}
