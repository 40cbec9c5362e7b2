//! Shared test utilities for building a CPU preloaded with a program.
//!
//! These helpers de-duplicate setup logic across the CPU tests. They place
//! the program bytes, point the reset vector at them and run `reset`, so a
//! test starts with PC at the first opcode, SP = $FD and P = I | UNUSED.
//!
//! Vectors:
//! - NMI   at $FFFA/$FFFB
//! - RESET at $FFFC/$FFFD
//! - IRQ   at $FFFE/$FFFF (also used by BRK)

use crate::cpu::Cpu;
use crate::cpu::interrupt::RESET_VECTOR;

/// Default load address for test programs.
pub const PROGRAM_START: u16 = 0x8000;

/// Build a reset CPU with `program` at `PROGRAM_START`.
pub fn cpu_with_program(program: &[u8]) -> Cpu {
    cpu_with_program_at(PROGRAM_START, program)
}

/// Build a reset CPU with `program` at `start`.
pub fn cpu_with_program_at(start: u16, program: &[u8]) -> Cpu {
    let mut cpu = Cpu::new();
    cpu.load(start, program);
    set_vector(&mut cpu, RESET_VECTOR, start);
    cpu.reset();
    cpu
}

/// Write a little-endian `target` into the vector at `vector`.
pub fn set_vector(cpu: &mut Cpu, vector: u16, target: u16) {
    cpu.load(vector, &target.to_le_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu::interrupt::IRQ_VECTOR;

    #[test]
    fn program_and_reset_vector_are_placed() {
        let cpu = cpu_with_program_at(0xC000, &[0xEA, 0x4C]);
        assert_eq!(cpu.pc(), 0xC000);
        assert_eq!(cpu.memory().get(0xC001), 0x4C);
        assert_eq!(cpu.memory().get(0xFFFC), 0x00);
        assert_eq!(cpu.memory().get(0xFFFD), 0xC0);
    }

    #[test]
    fn set_vector_is_little_endian() {
        let mut cpu = Cpu::new();
        set_vector(&mut cpu, IRQ_VECTOR, 0x1234);
        assert_eq!(cpu.memory().get(0xFFFE), 0x34);
        assert_eq!(cpu.memory().get(0xFFFF), 0x12);
    }
}
