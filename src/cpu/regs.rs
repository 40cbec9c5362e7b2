/*!
regs.rs - CpuRegs trait: the register + flag interface every instruction
handler is written against.

The trait does NOT include:
  - Stack push/pop
  - Memory access of any kind

Memory and stack operations stay explicit at call sites via `&mut Memory`, so
a handler borrows the register file and the bus separately.

Handlers in the opcode table take `&mut dyn CpuRegs`; the execute helpers are
generic over `C: CpuRegs + ?Sized` so the same helper serves both the table's
trait objects and direct calls on `CpuState` in tests.
*/

use crate::cpu::interrupt::InterruptRequest;
use crate::cpu::state::{BREAK, CARRY, CpuState, NEGATIVE, UNUSED, ZERO};

/// Trait exposing the 6502 CPU architectural register + flag API needed by
/// instruction semantic and dispatch code.
pub trait CpuRegs {
    // ---------------------------------------------------------------------
    // Read accessors
    // ---------------------------------------------------------------------
    fn a(&self) -> u8;
    fn x(&self) -> u8;
    fn y(&self) -> u8;
    fn sp(&self) -> u8;
    fn pc(&self) -> u16;
    fn status(&self) -> u8;
    fn pending_interrupt(&self) -> InterruptRequest;

    // ---------------------------------------------------------------------
    // Mutators
    // ---------------------------------------------------------------------
    fn set_a(&mut self, v: u8);
    fn set_x(&mut self, v: u8);
    fn set_y(&mut self, v: u8);
    fn set_sp(&mut self, v: u8);
    fn set_pc(&mut self, v: u16);
    fn set_status(&mut self, v: u8);
    fn set_pending_interrupt(&mut self, request: InterruptRequest);

    /// Advance PC by `delta` (wrapping at 16 bits).
    fn advance_pc(&mut self, delta: u16);

    // ---------------------------------------------------------------------
    // Flag operations
    // ---------------------------------------------------------------------

    /// Return true if mask bits are set.
    fn is_flag_set(&self, mask: u8) -> bool;

    /// Assign specific flag bits based on boolean `value` (set or clear).
    fn assign_flag(&mut self, mask: u8, value: bool);

    /// Carry as 0 or 1, for arithmetic.
    #[inline]
    fn carry_bit(&self) -> u8 {
        self.is_flag_set(CARRY) as u8
    }

    /// Composite: update ZERO and NEGATIVE based on result.
    #[inline]
    fn update_zn(&mut self, result: u8) {
        self.assign_flag(ZERO, result == 0);
        self.assign_flag(NEGATIVE, (result & 0x80) != 0);
    }

    /// Compose the processor status byte for a stack push.
    /// - `set_break` (PHP / BRK): the live status with BREAK set.
    /// - otherwise (IRQ / NMI entry): BREAK cleared, UNUSED set.
    #[inline]
    fn compose_status_for_push(&self, set_break: bool) -> u8 {
        if set_break {
            self.status() | BREAK
        } else {
            (self.status() | UNUSED) & !BREAK
        }
    }
}

/// Status value loaded by PLP / RTI: BREAK dropped, UNUSED forced.
#[inline]
pub(crate) fn pulled_status(pulled: u8) -> u8 {
    (pulled & !BREAK) | UNUSED
}

// -------------------------------------------------------------------------
// Implementation: CpuState (canonical)
// -------------------------------------------------------------------------

impl CpuRegs for CpuState {
    #[inline]
    fn a(&self) -> u8 {
        self.a
    }
    #[inline]
    fn x(&self) -> u8 {
        self.x
    }
    #[inline]
    fn y(&self) -> u8 {
        self.y
    }
    #[inline]
    fn sp(&self) -> u8 {
        self.sp
    }
    #[inline]
    fn pc(&self) -> u16 {
        self.pc
    }
    #[inline]
    fn status(&self) -> u8 {
        self.status
    }
    #[inline]
    fn pending_interrupt(&self) -> InterruptRequest {
        self.pending_interrupt
    }

    #[inline]
    fn set_a(&mut self, v: u8) {
        self.a = v;
    }
    #[inline]
    fn set_x(&mut self, v: u8) {
        self.x = v;
    }
    #[inline]
    fn set_y(&mut self, v: u8) {
        self.y = v;
    }
    #[inline]
    fn set_sp(&mut self, v: u8) {
        self.sp = v;
    }
    #[inline]
    fn set_pc(&mut self, v: u16) {
        self.pc = v;
    }
    #[inline]
    fn set_status(&mut self, v: u8) {
        self.status = v;
    }
    #[inline]
    fn set_pending_interrupt(&mut self, request: InterruptRequest) {
        self.pending_interrupt = request;
    }

    #[inline]
    fn advance_pc(&mut self, delta: u16) {
        CpuState::advance_pc(self, delta);
    }

    #[inline]
    fn is_flag_set(&self, mask: u8) -> bool {
        CpuState::is_flag_set(self, mask)
    }

    #[inline]
    fn assign_flag(&mut self, mask: u8, value: bool) {
        CpuState::assign_flag(self, mask, value);
    }
}
