//! Per-step cycle context published by the dispatcher before each handler runs.

use crate::cpu::addressing::AddressingMode;

/// Snapshot of the instruction being executed.
///
/// Overwritten on every step. An interrupt-service step publishes the return
/// PC, the vector address and `Implicit` mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleContext {
    /// PC of the opcode byte (return PC for interrupt entry).
    pub pc: u16,
    /// Effective address from the resolver (0 for implied / accumulator).
    pub address: u16,
    pub mode: AddressingMode,
}
