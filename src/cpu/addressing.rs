/*!
addressing.rs - 6502 addressing modes and effective-address resolution

Overview
========
Provides:
- `AddressingMode`: the thirteen operand-addressing rules.
- `resolve`: maps a mode plus the current register file to an effective
  address and a page-crossing flag.
- `read16` / `read16_bug`: little-endian word reads, the latter emulating the
  6502 indirect page-wrap quirk.

Caller Assumptions
==================
- `resolve` runs BEFORE the dispatcher advances PC, so PC still points at the
  opcode byte and operands live at PC+1 / PC+2.
- Resolution is pure: it reads memory but never writes it and never touches
  registers. Cycle penalties for page crossings are applied by the dispatcher
  according to the opcode table.

Formulas
========
  Immediate                    PC+1
  Absolute                     read16(PC+1)
  AbsoluteIndirect             read16_bug(read16(PC+1))
  DirectPage                   mem[PC+1]
  AbsoluteIndexedX / Y         read16(PC+1) + X / Y          (page-cross checked)
  DirectPageIndexedX / Y       (mem[PC+1] + X / Y) & 0xFF
  DirectPageIndexedIndirectX   read16_bug((mem[PC+1] + X) & 0xFF)
  DirectPageIndirectIndexedY   read16_bug(mem[PC+1]) + Y     (page-cross checked)
  Relative                     PC + 2 + signed(mem[PC+1])
  Accumulator / Implicit       0
All results wrap at 16 bits.
*/

use crate::bus::Memory;
use crate::cpu::regs::CpuRegs;

/// Operand addressing rule of an opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddressingMode {
    #[default]
    Implicit,
    Accumulator,
    Immediate,
    DirectPage,
    DirectPageIndexedX,
    DirectPageIndexedY,
    Relative,
    Absolute,
    AbsoluteIndexedX,
    AbsoluteIndexedY,
    AbsoluteIndirect,
    DirectPageIndexedIndirectX,
    DirectPageIndirectIndexedY,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode.
    pub const fn operand_len(self) -> u16 {
        match self {
            AddressingMode::Implicit | AddressingMode::Accumulator => 0,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteIndexedX
            | AddressingMode::AbsoluteIndexedY
            | AddressingMode::AbsoluteIndirect => 2,
            _ => 1,
        }
    }
}

/// Outcome of address resolution for one instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Resolved {
    pub address: u16,
    pub page_crossed: bool,
}

/// True when `a` and `b` lie on different 256-byte pages.
#[inline]
pub fn pages_differ(a: u16, b: u16) -> bool {
    (a & 0xFF00) != (b & 0xFF00)
}

/// Little-endian word read: low byte at `addr`, high byte at `addr + 1`.
/// The high-byte address wraps from $FFFF to $0000.
#[inline]
pub fn read16(memory: &Memory, addr: u16) -> u16 {
    let lo = memory.get(addr) as u16;
    let hi = memory.get(addr.wrapping_add(1)) as u16;
    (hi << 8) | lo
}

/// Emulate the 6502 indirect-vector bug: the high byte is fetched from the
/// same page as the low byte, so $xxFF pairs with $xx00.
#[inline]
pub fn read16_bug(memory: &Memory, addr: u16) -> u16 {
    let lo = memory.get(addr) as u16;
    let hi_addr = (addr & 0xFF00) | (addr.wrapping_add(1) & 0x00FF);
    let hi = memory.get(hi_addr) as u16;
    (hi << 8) | lo
}

/// Compute the effective address for `mode` with PC pointing at the opcode.
pub(crate) fn resolve<C: CpuRegs + ?Sized>(mode: AddressingMode, cpu: &C, memory: &Memory) -> Resolved {
    let pc = cpu.pc();
    let operand = pc.wrapping_add(1);
    let indexed = |base: u16, index: u8| {
        let address = base.wrapping_add(index as u16);
        Resolved {
            address,
            page_crossed: pages_differ(base, address),
        }
    };

    match mode {
        AddressingMode::Immediate => at(operand),
        AddressingMode::Absolute => at(read16(memory, operand)),
        AddressingMode::AbsoluteIndirect => at(read16_bug(memory, read16(memory, operand))),
        AddressingMode::DirectPage => at(memory.get(operand) as u16),
        AddressingMode::AbsoluteIndexedX => indexed(read16(memory, operand), cpu.x()),
        AddressingMode::AbsoluteIndexedY => indexed(read16(memory, operand), cpu.y()),
        AddressingMode::DirectPageIndexedX => at(memory.get(operand).wrapping_add(cpu.x()) as u16),
        AddressingMode::DirectPageIndexedY => at(memory.get(operand).wrapping_add(cpu.y()) as u16),
        AddressingMode::DirectPageIndexedIndirectX => {
            let zp = memory.get(operand).wrapping_add(cpu.x());
            at(read16_bug(memory, zp as u16))
        }
        AddressingMode::DirectPageIndirectIndexedY => {
            let zp = memory.get(operand);
            indexed(read16_bug(memory, zp as u16), cpu.y())
        }
        AddressingMode::Relative => {
            let offset = memory.get(operand) as i8;
            at(pc.wrapping_add(2).wrapping_add(offset as u16))
        }
        AddressingMode::Accumulator | AddressingMode::Implicit => at(0),
    }
}

#[inline]
fn at(address: u16) -> Resolved {
    Resolved {
        address,
        page_crossed: false,
    }
}
