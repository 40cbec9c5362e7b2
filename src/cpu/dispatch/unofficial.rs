/*!
unofficial.rs - Placeholder handlers for opcodes without real semantics

Stubs
=====
LAX, SAX, DCP, ISB, SLO, RLA, SRE, RRA, IGN and SKB are dispatched with their
real addressing mode, size and base cycles, but perform no operation: no
register, flag or memory change. The dispatcher logs them at debug level and
the `Cpu` façade counts them.

Unassigned
==========
KIL and the remaining undocumented opcodes (ANC, ALR, ARR, XAA, AHX, TAS,
SHY, SHX, LXA, LAS, AXS) have no handler behavior either. `Cpu::step` skips
them the same way (logged at warn level); `Cpu::try_step` refuses them.
*/

use crate::bus::Memory;
use crate::cpu::context::CycleContext;
use crate::cpu::regs::CpuRegs;

pub(crate) fn op_stub(_cpu: &mut dyn CpuRegs, _memory: &mut Memory, _ctx: &CycleContext) -> u32 {
    0
}

pub(crate) fn op_unassigned(_cpu: &mut dyn CpuRegs, _memory: &mut Memory, _ctx: &CycleContext) -> u32 {
    0
}

#[cfg(test)]
mod tests {
    use crate::cpu::table::{OpcodeKind, opcode_info};
    use crate::test_utils::cpu_with_program;

    const STUBS: [u8; 73] = [
        // LAX
        0xA3, 0xA7, 0xAF, 0xB3, 0xB7, 0xBF, //
        // SAX
        0x83, 0x87, 0x8F, 0x97, //
        // DCP
        0xC3, 0xC7, 0xCF, 0xD3, 0xD7, 0xDB, 0xDF, //
        // ISB
        0xE3, 0xE7, 0xEF, 0xF3, 0xF7, 0xFB, 0xFF, //
        // SLO
        0x03, 0x07, 0x0F, 0x13, 0x17, 0x1B, 0x1F, //
        // RLA
        0x23, 0x27, 0x2F, 0x33, 0x37, 0x3B, 0x3F, //
        // SRE
        0x43, 0x47, 0x4F, 0x53, 0x57, 0x5B, 0x5F, //
        // RRA
        0x63, 0x67, 0x6F, 0x73, 0x77, 0x7B, 0x7F, //
        // IGN
        0x0C, 0x1C, 0x3C, 0x5C, 0x7C, 0xDC, 0xFC, 0x04, 0x44, 0x64, 0x14, 0x34, 0x54, 0x74, 0xD4, 0xF4,
        // SKB
        0x80, 0x82, 0x89, 0xC2, 0xE2,
    ];

    #[test]
    fn stub_list_matches_table() {
        for op in STUBS {
            assert_eq!(opcode_info(op).kind, OpcodeKind::Stub, "opcode {op:#04X}");
        }
        let total = (0..=255u8).filter(|&op| opcode_info(op).kind == OpcodeKind::Stub).count();
        assert_eq!(total, STUBS.len());
    }

    #[test]
    fn stubs_change_nothing_but_pc_and_are_counted() {
        for op in STUBS {
            let mut cpu = cpu_with_program(&[op, 0x10, 0x02]);
            cpu.set_a(0x11);
            cpu.set_x(0x22);
            cpu.set_y(0x33);
            cpu.memory_mut().set(0x0010, 0x44);
            cpu.memory_mut().set(0x0210, 0x55);
            let status = cpu.status();
            let info = opcode_info(op);

            let cycles = cpu.step();

            assert!(cycles >= info.cycles as u32, "opcode {op:#04X}");
            assert_eq!(cpu.pc(), 0x8000 + info.size as u16, "opcode {op:#04X}");
            assert_eq!((cpu.a(), cpu.x(), cpu.y()), (0x11, 0x22, 0x33));
            assert_eq!(cpu.status(), status);
            assert_eq!(cpu.memory().get(0x0010), 0x44);
            assert_eq!(cpu.memory().get(0x0210), 0x55);
            assert_eq!(cpu.unimplemented_count(), 1);
        }
    }

    #[test]
    fn unassigned_opcodes_are_skipped_by_step() {
        let unassigned: Vec<u8> = (0..=255u8)
            .filter(|&op| opcode_info(op).kind == OpcodeKind::Unassigned)
            .collect();
        assert_eq!(unassigned.len(), 25);
        for op in unassigned {
            let mut cpu = cpu_with_program(&[op, 0x00, 0x00]);
            let info = opcode_info(op);
            let a = cpu.a();
            cpu.step();
            assert_eq!(cpu.pc(), 0x8000 + info.size as u16, "opcode {op:#04X}");
            assert_eq!(cpu.a(), a);
            assert_eq!(cpu.unimplemented_count(), 1);
        }
    }
}
