//! Errors surfaced by the strict stepping API (`Cpu::try_step`, `Cpu::run`).

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CpuError {
    /// The opcode at `pc` has no behavior. Nothing was executed.
    UnassignedOpcode { opcode: u8, pc: u16 },
    /// A previous strict step failed; call `Cpu::reset` to resume.
    Halted { pc: u16 },
}

impl fmt::Display for CpuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CpuError::UnassignedOpcode { opcode, pc } => {
                write!(f, "Unassigned opcode 0x{:02X} at 0x{:04X}", opcode, pc)
            }
            CpuError::Halted { pc } => write!(f, "CPU halted at 0x{:04X}", pc),
        }
    }
}

impl std::error::Error for CpuError {}
