/*!
state.rs - Canonical 6502 CPU architectural state (registers + flags) and
inline-friendly helpers.

Overview
========
`CpuState` is the single authoritative owner for all architecturally visible
registers plus the execution-control latches (pending interrupt, halted). It
excludes:
  - Memory (owned by the `Cpu` façade next to this state)
  - Instruction decode / dispatch logic
  - Cycle accounting

Register Widths
===============
Each register is stored in a type of exactly its architectural width
(`u8` for A, X, Y, SP, P; `u16` for PC), so no assignment can leave a value
outside the register's range. Arithmetic that would overflow uses the
`wrapping_*` operations at the call site.

The stack pointer is 8 bits. Pushes and pulls wrap it within $00-$FF, so the
stack never leaves page $0100-$01FF.

6502 Status Register Bit Layout (for reference)
===============================================
Bit: 7 6 5 4 3 2 1 0
     N V 1 B D I Z C
Where:
  N = NEGATIVE
  V = OVERFLOW
  1 = UNUSED (settable, semantically inert)
  B = BREAK (meaningful only in pushed copies: set by PHP/BRK)
  D = DECIMAL (settable; the 2A03 has no decimal arithmetic)
  I = IRQ_DISABLE
  Z = ZERO
  C = CARRY
*/

use crate::bus::Memory;
use crate::cpu::interrupt::{InterruptRequest, RESET_VECTOR};

/// Processor status flag bit masks (canonical definitions).
pub const CARRY: u8 = 0b0000_0001;
pub const ZERO: u8 = 0b0000_0010;
pub const IRQ_DISABLE: u8 = 0b0000_0100;
pub const DECIMAL: u8 = 0b0000_1000;
pub const BREAK: u8 = 0b0001_0000;
pub const UNUSED: u8 = 0b0010_0000;
pub const OVERFLOW: u8 = 0b0100_0000;
pub const NEGATIVE: u8 = 0b1000_0000;

/// Base address of the hardware stack page.
pub const STACK_BASE: u16 = 0x0100;

/// Stack pointer value after reset.
pub const RESET_SP: u8 = 0xFD;

/// Pure architectural register / flag container for the 6502 CPU.
///
/// `Default` is the all-zero register file (what `Cpu::new` exposes);
/// `reset` applies the power-up convention.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CpuState {
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub sp: u8,
    pub pc: u16,
    pub status: u8,
    pub pending_interrupt: InterruptRequest,
    pub halted: bool,
}

impl CpuState {
    // ---------------------------------------------------------------------
    // Construction / Reset
    // ---------------------------------------------------------------------

    /// Create a state with every register zeroed.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset registers and load PC from the reset vector at $FFFC/$FFFD.
    ///
    /// A, X and Y are cleared, SP becomes $FD, P becomes I | UNUSED and any
    /// latched interrupt or halt is dropped.
    pub fn reset(&mut self, memory: &Memory) {
        *self = Self {
            sp: RESET_SP,
            status: IRQ_DISABLE | UNUSED,
            pc: crate::cpu::addressing::read16(memory, RESET_VECTOR),
            ..Self::default()
        };
    }

    // ---------------------------------------------------------------------
    // Program Counter Helpers
    // ---------------------------------------------------------------------

    /// Advance PC by `delta` (wrapping at 16 bits).
    #[inline]
    pub fn advance_pc(&mut self, delta: u16) {
        self.pc = self.pc.wrapping_add(delta);
    }

    // ---------------------------------------------------------------------
    // Flag Operations
    // ---------------------------------------------------------------------

    /// Return true if a status flag (bit mask) is set.
    #[inline]
    pub fn is_flag_set(&self, mask: u8) -> bool {
        (self.status & mask) != 0
    }

    /// Set a flag bit (OR).
    #[inline]
    pub fn set_flag_bit(&mut self, mask: u8) {
        self.status |= mask;
    }

    /// Clear a flag bit (AND NOT).
    #[inline]
    pub fn clear_flag_bit(&mut self, mask: u8) {
        self.status &= !mask;
    }

    /// Assign a flag bit based on boolean `value`.
    #[inline]
    pub fn assign_flag(&mut self, mask: u8, value: bool) {
        if value {
            self.set_flag_bit(mask);
        } else {
            self.clear_flag_bit(mask);
        }
    }
}
