/*!
core::Cpu - 6502 CPU façade owning `CpuState`, the memory bus and cycle counters.

Design
======
- `Cpu` exclusively owns its register file (`CpuState`), one `Memory`, the
  last published `CycleContext` and two running counters (total cycles and
  steps that hit an unimplemented opcode).
- `step` is the lenient path: it always executes something (interrupt entry
  or one instruction, skipping opcodes with no behavior) and never fails.
- `try_step` / `run` are the strict path: they refuse an unassigned opcode
  with `CpuError::UnassignedOpcode` before touching any register, and the
  CPU then reports `CpuError::Halted` until `reset`.
- Register accessors write through to `CpuState`; every field has exactly
  its architectural width, so no setter can leave a register out of range.

Power-up vs Reset
=================
`new()` zeroes every register (PC = 0, SP = 0, P = 0) with all-zero memory.
`reset()` applies the hardware convention: SP = $FD, P = I | UNUSED, PC from
the vector at $FFFC/$FFFD. Memory and counters are left alone.

Tracing
=======
With the `trace` feature, each executed instruction emits one
`log::trace!` line before it runs:

```text
    C000  4C JMP  A:00 X:00 Y:00 P:24 SP:FD CYC:7
```
*/

use crate::bus::Memory;
use crate::cpu::context::CycleContext;
use crate::cpu::dispatch::{self, Step};
use crate::cpu::error::CpuError;
use crate::cpu::interrupt::{self, InterruptKind, InterruptRequest};
use crate::cpu::state::CpuState;
use crate::cpu::table::{OpcodeKind, opcode_info};

#[derive(Debug, Clone)]
pub struct Cpu {
    state: CpuState,
    memory: Memory,
    context: CycleContext,
    cycles: u64,
    unimplemented: u64,
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    /// Construct a CPU with every register zeroed and zeroed memory attached.
    pub fn new() -> Self {
        Self {
            state: CpuState::new(),
            memory: Memory::new(),
            context: CycleContext::default(),
            cycles: 0,
            unimplemented: 0,
        }
    }

    /// Reset registers and load PC from the reset vector.
    pub fn reset(&mut self) {
        self.state.reset(&self.memory);
        log::debug!("reset: PC={:#06X}", self.state.pc);
    }

    /// Return immutable reference to internal state (for inspection / testing).
    pub fn state(&self) -> &CpuState {
        &self.state
    }

    // ---------------------------------------------------------------------
    // Execution
    // ---------------------------------------------------------------------

    /// Execute one step and return the cycles it consumed.
    ///
    /// A serviceable NMI / IRQ takes the whole step (7 cycles). Otherwise one
    /// instruction is fetched and executed; opcodes without behavior are
    /// skipped over with their table size and cost.
    pub fn step(&mut self) -> u32 {
        #[cfg(feature = "trace")]
        self.trace_instruction();

        let step = dispatch::step(&mut self.state, &mut self.memory, &mut self.context);
        if let Step::Instruction { info, .. } = step {
            if info.is_unimplemented() {
                self.unimplemented += 1;
            }
        }
        let cycles = step.cycles();
        self.cycles += cycles as u64;
        cycles
    }

    /// Strict variant of `step`: refuses unassigned opcodes.
    ///
    /// On `UnassignedOpcode` no register or memory byte has changed; the CPU
    /// is marked halted and further strict calls return `Halted` until
    /// `reset`.
    pub fn try_step(&mut self) -> Result<u32, CpuError> {
        let pc = self.state.pc;
        if self.state.halted {
            return Err(CpuError::Halted { pc });
        }
        if interrupt::serviceable(&self.state).is_none() {
            let opcode = self.memory.get(pc);
            if opcode_info(opcode).kind == OpcodeKind::Unassigned {
                self.state.halted = true;
                log::warn!("{:#06X}: unassigned opcode {:#04X}, halting", pc, opcode);
                return Err(CpuError::UnassignedOpcode { opcode, pc });
            }
        }
        Ok(self.step())
    }

    /// Run up to `max_steps` strict steps and return the cycles consumed.
    pub fn run(&mut self, max_steps: usize) -> Result<u64, CpuError> {
        let mut total = 0u64;
        for _ in 0..max_steps {
            total += self.try_step()? as u64;
        }
        Ok(total)
    }

    /// Latch an interrupt request. IRQ is ignored while IRQ_DISABLE is set;
    /// NMI always latches.
    pub fn request_interrupt(&mut self, kind: InterruptKind) {
        interrupt::latch(&mut self.state, kind);
    }

    pub fn pending_interrupt(&self) -> InterruptRequest {
        self.state.pending_interrupt
    }

    /// True after a strict step refused an opcode.
    pub fn is_halted(&self) -> bool {
        self.state.halted
    }

    /// Total cycles consumed since construction.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Steps that executed a stub or unassigned opcode.
    pub fn unimplemented_count(&self) -> u64 {
        self.unimplemented
    }

    /// Context of the most recent instruction step.
    pub fn context(&self) -> &CycleContext {
        &self.context
    }

    // ---------------------------------------------------------------------
    // Memory
    // ---------------------------------------------------------------------

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut Memory {
        &mut self.memory
    }

    /// Copy `bytes` into memory starting at `addr`.
    pub fn load(&mut self, addr: u16, bytes: &[u8]) {
        self.memory.load(addr, bytes);
    }

    // ---------------------------------------------------------------------
    // Register accessors (read)
    // ---------------------------------------------------------------------
    pub fn a(&self) -> u8 {
        self.state.a
    }
    pub fn x(&self) -> u8 {
        self.state.x
    }
    pub fn y(&self) -> u8 {
        self.state.y
    }
    pub fn sp(&self) -> u8 {
        self.state.sp
    }
    pub fn pc(&self) -> u16 {
        self.state.pc
    }
    pub fn status(&self) -> u8 {
        self.state.status
    }

    // ---------------------------------------------------------------------
    // Register mutators (write)
    // ---------------------------------------------------------------------
    pub fn set_a(&mut self, v: u8) {
        self.state.a = v;
    }
    pub fn set_x(&mut self, v: u8) {
        self.state.x = v;
    }
    pub fn set_y(&mut self, v: u8) {
        self.state.y = v;
    }
    pub fn set_sp(&mut self, v: u8) {
        self.state.sp = v;
    }
    pub fn set_pc(&mut self, v: u16) {
        self.state.pc = v;
    }
    pub fn set_status(&mut self, v: u8) {
        self.state.status = v;
    }

    // ---------------------------------------------------------------------
    // Flag helpers
    // ---------------------------------------------------------------------
    pub fn flag(&self, mask: u8) -> bool {
        self.state.is_flag_set(mask)
    }

    pub fn set_flag(&mut self, mask: u8, on: bool) {
        self.state.assign_flag(mask, on);
    }

    #[cfg(feature = "trace")]
    fn trace_instruction(&self) {
        if interrupt::serviceable(&self.state).is_some() {
            return;
        }
        let s = &self.state;
        let opcode = self.memory.get(s.pc);
        log::trace!(
            "{:04X}  {:02X} {:<4} A:{:02X} X:{:02X} Y:{:02X} P:{:02X} SP:{:02X} CYC:{}",
            s.pc,
            opcode,
            opcode_info(opcode).mnemonic,
            s.a,
            s.x,
            s.y,
            s.status,
            s.sp,
            self.cycles
        );
    }
}

// -------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu::addressing::AddressingMode;
    use crate::cpu::interrupt::{IRQ_VECTOR, NMI_VECTOR};
    use crate::cpu::state::{BREAK, CARRY, IRQ_DISABLE, UNUSED, ZERO};
    use crate::test_utils::{cpu_with_program, set_vector};

    #[test]
    fn new_is_all_zero() {
        let cpu = Cpu::new();
        assert_eq!((cpu.a(), cpu.x(), cpu.y(), cpu.sp(), cpu.pc(), cpu.status()), (0, 0, 0, 0, 0, 0));
        assert_eq!(cpu.cycles(), 0);
        assert_eq!(cpu.pending_interrupt(), InterruptRequest::None);
        assert_eq!(cpu.memory().get(0x1234), 0);
    }

    #[test]
    fn construction_and_reset() {
        let cpu = cpu_with_program(&[0xEA]);
        assert_eq!(cpu.sp(), 0xFD);
        assert_eq!(cpu.pc(), 0x8000);
        assert_eq!(cpu.status(), IRQ_DISABLE | UNUSED);
    }

    #[test]
    fn step_accumulates_cycles_and_context() {
        // NOP; LDA #$00; STA $0200
        let mut cpu = cpu_with_program(&[0xEA, 0xA9, 0x00, 0x8D, 0x00, 0x02]);
        assert_eq!(cpu.step(), 2);
        assert_eq!(cpu.step(), 2);
        assert!(cpu.flag(ZERO));
        assert_eq!(cpu.step(), 4);
        assert_eq!(cpu.cycles(), 8);
        assert_eq!(
            *cpu.context(),
            CycleContext {
                pc: 0x8003,
                address: 0x0200,
                mode: AddressingMode::Absolute
            }
        );
    }

    #[test]
    fn irq_ignored_while_disabled() {
        let mut cpu = cpu_with_program(&[0xEA]);
        cpu.request_interrupt(InterruptKind::Irq);
        assert_eq!(cpu.pending_interrupt(), InterruptRequest::None);
    }

    #[test]
    fn irq_serviced_at_top_of_step() {
        // CLI; NOP
        let mut cpu = cpu_with_program(&[0x58, 0xEA]);
        set_vector(&mut cpu, IRQ_VECTOR, 0x9000);
        cpu.step();
        cpu.set_flag(CARRY, true);
        cpu.request_interrupt(InterruptKind::Irq);

        assert_eq!(cpu.step(), 7);
        assert_eq!(cpu.pc(), 0x9000);
        assert_eq!(cpu.sp(), 0xFA);
        assert_eq!(cpu.memory().get(0x01FD), 0x80);
        assert_eq!(cpu.memory().get(0x01FC), 0x01);
        assert_eq!(cpu.memory().get(0x01FB), CARRY | UNUSED);
        assert!(cpu.flag(IRQ_DISABLE));
        assert_eq!(cpu.pending_interrupt(), InterruptRequest::None);
        assert_eq!(cpu.cycles(), 9);
    }

    #[test]
    fn nmi_serviced_even_when_disabled() {
        let mut cpu = cpu_with_program(&[0xEA]);
        set_vector(&mut cpu, NMI_VECTOR, 0xA000);
        cpu.request_interrupt(InterruptKind::Nmi);
        assert_eq!(cpu.step(), 7);
        assert_eq!(cpu.pc(), 0xA000);
        assert_eq!(cpu.memory().get(0x01FB) & BREAK, 0);
    }

    #[test]
    fn nmi_survives_later_irq_request() {
        // CLI; NOP
        let mut cpu = cpu_with_program(&[0x58, 0xEA]);
        set_vector(&mut cpu, NMI_VECTOR, 0xA000);
        set_vector(&mut cpu, IRQ_VECTOR, 0x9000);
        cpu.step();
        cpu.request_interrupt(InterruptKind::Nmi);
        cpu.request_interrupt(InterruptKind::Irq);
        assert_eq!(cpu.pending_interrupt(), InterruptRequest::Nmi);

        assert_eq!(cpu.step(), 7);
        assert_eq!(cpu.pc(), 0xA000);
        assert_eq!(cpu.pending_interrupt(), InterruptRequest::None);
    }

    #[test]
    fn rti_returns_from_interrupt() {
        // $8000: NOP ; handler at $9000: RTI
        let mut cpu = cpu_with_program(&[0xEA]);
        cpu.load(0x9000, &[0x40]);
        set_vector(&mut cpu, NMI_VECTOR, 0x9000);
        let status = cpu.status();
        cpu.request_interrupt(InterruptKind::Nmi);
        cpu.step();
        assert_eq!(cpu.step(), 6);
        assert_eq!(cpu.pc(), 0x8000);
        assert_eq!(cpu.status(), status);
        assert_eq!(cpu.sp(), 0xFD);
    }

    #[test]
    fn try_step_refuses_unassigned_opcode() {
        let mut cpu = cpu_with_program(&[0x02]);
        let before = *cpu.state();
        assert_eq!(
            cpu.try_step(),
            Err(CpuError::UnassignedOpcode { opcode: 0x02, pc: 0x8000 })
        );
        assert_eq!(CpuState { halted: false, ..*cpu.state() }, before);
        assert_eq!(cpu.cycles(), 0);
        assert!(cpu.is_halted());
        assert_eq!(cpu.try_step(), Err(CpuError::Halted { pc: 0x8000 }));

        cpu.reset();
        assert!(!cpu.is_halted());
    }

    #[test]
    fn lenient_step_skips_unassigned_opcode() {
        let mut cpu = cpu_with_program(&[0x02, 0xEA]);
        assert_eq!(cpu.step(), 2);
        assert_eq!(cpu.pc(), 0x8001);
        assert_eq!(cpu.unimplemented_count(), 1);
        assert_eq!(cpu.step(), 2);
        assert_eq!(cpu.unimplemented_count(), 1);
    }

    #[test]
    fn run_stops_on_strict_failure() {
        // LDA #$01; NOP; KIL
        let mut cpu = cpu_with_program(&[0xA9, 0x01, 0xEA, 0x02]);
        assert_eq!(cpu.run(2), Ok(4));
        assert_eq!(cpu.run(5), Err(CpuError::UnassignedOpcode { opcode: 0x02, pc: 0x8003 }));
        assert_eq!(cpu.cycles(), 4);
    }

    #[test]
    fn stub_opcodes_are_counted() {
        // LAX $10; SKB #$00; NOP
        let mut cpu = cpu_with_program(&[0xA7, 0x10, 0x80, 0x00, 0xEA]);
        assert_eq!(cpu.run(3), Ok(3 + 2 + 2));
        assert_eq!(cpu.unimplemented_count(), 2);
    }

    #[test]
    fn cpu_is_send() {
        fn assert_send<T: Send>() {}
        assert_send::<Cpu>();
    }
}
