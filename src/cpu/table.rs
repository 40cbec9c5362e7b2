/*!
table.rs - 256-entry opcode metadata + handler table.

Purpose
=======
Every opcode byte maps to one `OpInfo`: mnemonic, addressing mode,
instruction size, base cycles, page-cross bonus, kind, and the handler
function. The dispatcher never matches on opcode values; it only indexes
this table.

Design
------
- `OpHandler = fn(&mut dyn CpuRegs, &mut Memory, &CycleContext) -> u32`.
  Handlers run after PC has been advanced and return extra cycles (only
  taken branches return non-zero).
- The table is a `static` built in a const block; every entry starts as a
  KIL placeholder and is overwritten below, so the twelve KIL slots are the
  only ones left untouched.
- `page_penalty` is 1 for read instructions in Absolute,X / Absolute,Y /
  (Indirect),Y modes and 0 everywhere else (stores and RMW have fixed cost).

Kinds
-----
- `Official`   : documented 6502 instruction.
- `Unofficial` : undocumented encoding with real behavior (NOP aliases, $EB SBC).
- `Stub`       : undocumented instruction dispatched as a counted no-op.
- `Unassigned` : no behavior at all; skipped by `step`, rejected by `try_step`.
*/

use crate::bus::Memory;
use crate::cpu::addressing::AddressingMode;
use crate::cpu::context::CycleContext;
use crate::cpu::dispatch::{
    arithmetic, branches, compare, control_flow, load_store, logical, misc, rmw, unofficial,
};
use crate::cpu::regs::CpuRegs;

/// Instruction handler. Returns cycles beyond the table's base + page bonus.
pub type OpHandler = fn(&mut dyn CpuRegs, &mut Memory, &CycleContext) -> u32;

/// Classification of an opcode byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpcodeKind {
    Official,
    Unofficial,
    Stub,
    Unassigned,
}

/// Static description of one opcode.
#[derive(Debug, Clone, Copy)]
pub struct OpInfo {
    pub mnemonic: &'static str,
    pub mode: AddressingMode,
    /// Instruction length in bytes (opcode + operands).
    pub size: u8,
    /// Base cycles.
    pub cycles: u8,
    /// Extra cycle when the resolved address crossed a page.
    pub page_penalty: u8,
    pub kind: OpcodeKind,
    pub(crate) handler: OpHandler,
}

impl OpInfo {
    /// True for opcodes that `Cpu::unimplemented_count` tracks.
    pub fn is_unimplemented(&self) -> bool {
        matches!(self.kind, OpcodeKind::Stub | OpcodeKind::Unassigned)
    }
}

/// Metadata for `opcode`.
#[inline]
pub fn opcode_info(opcode: u8) -> &'static OpInfo {
    &OPCODES[opcode as usize]
}

// ------------------------------------------
// Entry constructors
// ------------------------------------------

const IMP: AddressingMode = AddressingMode::Implicit;
const ACC: AddressingMode = AddressingMode::Accumulator;
const IMM: AddressingMode = AddressingMode::Immediate;
const ZP: AddressingMode = AddressingMode::DirectPage;
const ZPX: AddressingMode = AddressingMode::DirectPageIndexedX;
const ZPY: AddressingMode = AddressingMode::DirectPageIndexedY;
const REL: AddressingMode = AddressingMode::Relative;
const ABS: AddressingMode = AddressingMode::Absolute;
const ABX: AddressingMode = AddressingMode::AbsoluteIndexedX;
const ABY: AddressingMode = AddressingMode::AbsoluteIndexedY;
const IND: AddressingMode = AddressingMode::AbsoluteIndirect;
const IZX: AddressingMode = AddressingMode::DirectPageIndexedIndirectX;
const IZY: AddressingMode = AddressingMode::DirectPageIndirectIndexedY;

const fn entry(
    mnemonic: &'static str,
    mode: AddressingMode,
    size: u8,
    cycles: u8,
    page_penalty: u8,
    kind: OpcodeKind,
    handler: OpHandler,
) -> OpInfo {
    OpInfo {
        mnemonic,
        mode,
        size,
        cycles,
        page_penalty,
        kind,
        handler,
    }
}

const fn official(m: &'static str, mode: AddressingMode, size: u8, cycles: u8, page: u8, h: OpHandler) -> OpInfo {
    entry(m, mode, size, cycles, page, OpcodeKind::Official, h)
}

const fn alias(m: &'static str, mode: AddressingMode, size: u8, cycles: u8, h: OpHandler) -> OpInfo {
    entry(m, mode, size, cycles, 0, OpcodeKind::Unofficial, h)
}

const fn stub(m: &'static str, mode: AddressingMode, size: u8, cycles: u8, page: u8) -> OpInfo {
    entry(m, mode, size, cycles, page, OpcodeKind::Stub, unofficial::op_stub)
}

const fn unassigned(m: &'static str, mode: AddressingMode, size: u8, cycles: u8, page: u8) -> OpInfo {
    entry(m, mode, size, cycles, page, OpcodeKind::Unassigned, unofficial::op_unassigned)
}

// ------------------------------------------
// Opcode Table (256 entries)
// ------------------------------------------

static OPCODES: [OpInfo; 256] = {
    let mut t = [unassigned("KIL", IMP, 1, 2, 0); 256];

    // ---- 0x00 ----
    t[0x00] = official("BRK", IMP, 2, 7, 0, control_flow::op_brk);
    t[0x01] = official("ORA", IZX, 2, 6, 0, logical::op_ora);
    t[0x03] = stub("SLO", IZX, 2, 8, 0);
    t[0x04] = stub("IGN", ZP, 2, 3, 0);
    t[0x05] = official("ORA", ZP, 2, 3, 0, logical::op_ora);
    t[0x06] = official("ASL", ZP, 2, 5, 0, rmw::op_asl);
    t[0x07] = stub("SLO", ZP, 2, 5, 0);
    t[0x08] = official("PHP", IMP, 1, 3, 0, misc::op_php);
    t[0x09] = official("ORA", IMM, 2, 2, 0, logical::op_ora);
    t[0x0A] = official("ASL", ACC, 1, 2, 0, rmw::op_asl);
    t[0x0B] = unassigned("ANC", IMM, 2, 2, 0);
    t[0x0C] = stub("IGN", ABS, 3, 4, 0);
    t[0x0D] = official("ORA", ABS, 3, 4, 0, logical::op_ora);
    t[0x0E] = official("ASL", ABS, 3, 6, 0, rmw::op_asl);
    t[0x0F] = stub("SLO", ABS, 3, 6, 0);

    // ---- 0x10 ----
    t[0x10] = official("BPL", REL, 2, 2, 0, branches::op_bpl);
    t[0x11] = official("ORA", IZY, 2, 5, 1, logical::op_ora);
    t[0x13] = stub("SLO", IZY, 2, 8, 0);
    t[0x14] = stub("IGN", ZPX, 2, 4, 0);
    t[0x15] = official("ORA", ZPX, 2, 4, 0, logical::op_ora);
    t[0x16] = official("ASL", ZPX, 2, 6, 0, rmw::op_asl);
    t[0x17] = stub("SLO", ZPX, 2, 6, 0);
    t[0x18] = official("CLC", IMP, 1, 2, 0, misc::op_clc);
    t[0x19] = official("ORA", ABY, 3, 4, 1, logical::op_ora);
    t[0x1A] = alias("NOP", IMP, 1, 2, misc::op_nop);
    t[0x1B] = stub("SLO", ABY, 3, 7, 0);
    t[0x1C] = stub("IGN", ABX, 3, 4, 1);
    t[0x1D] = official("ORA", ABX, 3, 4, 1, logical::op_ora);
    t[0x1E] = official("ASL", ABX, 3, 7, 0, rmw::op_asl);
    t[0x1F] = stub("SLO", ABX, 3, 7, 0);

    // ---- 0x20 ----
    t[0x20] = official("JSR", ABS, 3, 6, 0, control_flow::op_jsr);
    t[0x21] = official("AND", IZX, 2, 6, 0, logical::op_and);
    t[0x23] = stub("RLA", IZX, 2, 8, 0);
    t[0x24] = official("BIT", ZP, 2, 3, 0, logical::op_bit);
    t[0x25] = official("AND", ZP, 2, 3, 0, logical::op_and);
    t[0x26] = official("ROL", ZP, 2, 5, 0, rmw::op_rol);
    t[0x27] = stub("RLA", ZP, 2, 5, 0);
    t[0x28] = official("PLP", IMP, 1, 4, 0, misc::op_plp);
    t[0x29] = official("AND", IMM, 2, 2, 0, logical::op_and);
    t[0x2A] = official("ROL", ACC, 1, 2, 0, rmw::op_rol);
    t[0x2B] = unassigned("ANC", IMM, 2, 2, 0);
    t[0x2C] = official("BIT", ABS, 3, 4, 0, logical::op_bit);
    t[0x2D] = official("AND", ABS, 3, 4, 0, logical::op_and);
    t[0x2E] = official("ROL", ABS, 3, 6, 0, rmw::op_rol);
    t[0x2F] = stub("RLA", ABS, 3, 6, 0);

    // ---- 0x30 ----
    t[0x30] = official("BMI", REL, 2, 2, 0, branches::op_bmi);
    t[0x31] = official("AND", IZY, 2, 5, 1, logical::op_and);
    t[0x33] = stub("RLA", IZY, 2, 8, 0);
    t[0x34] = stub("IGN", ZPX, 2, 4, 0);
    t[0x35] = official("AND", ZPX, 2, 4, 0, logical::op_and);
    t[0x36] = official("ROL", ZPX, 2, 6, 0, rmw::op_rol);
    t[0x37] = stub("RLA", ZPX, 2, 6, 0);
    t[0x38] = official("SEC", IMP, 1, 2, 0, misc::op_sec);
    t[0x39] = official("AND", ABY, 3, 4, 1, logical::op_and);
    t[0x3A] = alias("NOP", IMP, 1, 2, misc::op_nop);
    t[0x3B] = stub("RLA", ABY, 3, 7, 0);
    t[0x3C] = stub("IGN", ABX, 3, 4, 1);
    t[0x3D] = official("AND", ABX, 3, 4, 1, logical::op_and);
    t[0x3E] = official("ROL", ABX, 3, 7, 0, rmw::op_rol);
    t[0x3F] = stub("RLA", ABX, 3, 7, 0);

    // ---- 0x40 ----
    t[0x40] = official("RTI", IMP, 1, 6, 0, control_flow::op_rti);
    t[0x41] = official("EOR", IZX, 2, 6, 0, logical::op_eor);
    t[0x43] = stub("SRE", IZX, 2, 8, 0);
    t[0x44] = stub("IGN", ZP, 2, 3, 0);
    t[0x45] = official("EOR", ZP, 2, 3, 0, logical::op_eor);
    t[0x46] = official("LSR", ZP, 2, 5, 0, rmw::op_lsr);
    t[0x47] = stub("SRE", ZP, 2, 5, 0);
    t[0x48] = official("PHA", IMP, 1, 3, 0, misc::op_pha);
    t[0x49] = official("EOR", IMM, 2, 2, 0, logical::op_eor);
    t[0x4A] = official("LSR", ACC, 1, 2, 0, rmw::op_lsr);
    t[0x4B] = unassigned("ALR", IMM, 2, 2, 0);
    t[0x4C] = official("JMP", ABS, 3, 3, 0, control_flow::op_jmp);
    t[0x4D] = official("EOR", ABS, 3, 4, 0, logical::op_eor);
    t[0x4E] = official("LSR", ABS, 3, 6, 0, rmw::op_lsr);
    t[0x4F] = stub("SRE", ABS, 3, 6, 0);

    // ---- 0x50 ----
    t[0x50] = official("BVC", REL, 2, 2, 0, branches::op_bvc);
    t[0x51] = official("EOR", IZY, 2, 5, 1, logical::op_eor);
    t[0x53] = stub("SRE", IZY, 2, 8, 0);
    t[0x54] = stub("IGN", ZPX, 2, 4, 0);
    t[0x55] = official("EOR", ZPX, 2, 4, 0, logical::op_eor);
    t[0x56] = official("LSR", ZPX, 2, 6, 0, rmw::op_lsr);
    t[0x57] = stub("SRE", ZPX, 2, 6, 0);
    t[0x58] = official("CLI", IMP, 1, 2, 0, misc::op_cli);
    t[0x59] = official("EOR", ABY, 3, 4, 1, logical::op_eor);
    t[0x5A] = alias("NOP", IMP, 1, 2, misc::op_nop);
    t[0x5B] = stub("SRE", ABY, 3, 7, 0);
    t[0x5C] = stub("IGN", ABX, 3, 4, 1);
    t[0x5D] = official("EOR", ABX, 3, 4, 1, logical::op_eor);
    t[0x5E] = official("LSR", ABX, 3, 7, 0, rmw::op_lsr);
    t[0x5F] = stub("SRE", ABX, 3, 7, 0);

    // ---- 0x60 ----
    t[0x60] = official("RTS", IMP, 1, 6, 0, control_flow::op_rts);
    t[0x61] = official("ADC", IZX, 2, 6, 0, arithmetic::op_adc);
    t[0x63] = stub("RRA", IZX, 2, 8, 0);
    t[0x64] = stub("IGN", ZP, 2, 3, 0);
    t[0x65] = official("ADC", ZP, 2, 3, 0, arithmetic::op_adc);
    t[0x66] = official("ROR", ZP, 2, 5, 0, rmw::op_ror);
    t[0x67] = stub("RRA", ZP, 2, 5, 0);
    t[0x68] = official("PLA", IMP, 1, 4, 0, misc::op_pla);
    t[0x69] = official("ADC", IMM, 2, 2, 0, arithmetic::op_adc);
    t[0x6A] = official("ROR", ACC, 1, 2, 0, rmw::op_ror);
    t[0x6B] = unassigned("ARR", IMM, 2, 2, 0);
    t[0x6C] = official("JMP", IND, 3, 5, 0, control_flow::op_jmp);
    t[0x6D] = official("ADC", ABS, 3, 4, 0, arithmetic::op_adc);
    t[0x6E] = official("ROR", ABS, 3, 6, 0, rmw::op_ror);
    t[0x6F] = stub("RRA", ABS, 3, 6, 0);

    // ---- 0x70 ----
    t[0x70] = official("BVS", REL, 2, 2, 0, branches::op_bvs);
    t[0x71] = official("ADC", IZY, 2, 5, 1, arithmetic::op_adc);
    t[0x73] = stub("RRA", IZY, 2, 8, 0);
    t[0x74] = stub("IGN", ZPX, 2, 4, 0);
    t[0x75] = official("ADC", ZPX, 2, 4, 0, arithmetic::op_adc);
    t[0x76] = official("ROR", ZPX, 2, 6, 0, rmw::op_ror);
    t[0x77] = stub("RRA", ZPX, 2, 6, 0);
    t[0x78] = official("SEI", IMP, 1, 2, 0, misc::op_sei);
    t[0x79] = official("ADC", ABY, 3, 4, 1, arithmetic::op_adc);
    t[0x7A] = alias("NOP", IMP, 1, 2, misc::op_nop);
    t[0x7B] = stub("RRA", ABY, 3, 7, 0);
    t[0x7C] = stub("IGN", ABX, 3, 4, 1);
    t[0x7D] = official("ADC", ABX, 3, 4, 1, arithmetic::op_adc);
    t[0x7E] = official("ROR", ABX, 3, 7, 0, rmw::op_ror);
    t[0x7F] = stub("RRA", ABX, 3, 7, 0);

    // ---- 0x80 ----
    t[0x80] = stub("SKB", IMM, 2, 2, 0);
    t[0x81] = official("STA", IZX, 2, 6, 0, load_store::op_sta);
    t[0x82] = stub("SKB", IMM, 2, 2, 0);
    t[0x83] = stub("SAX", IZX, 2, 6, 0);
    t[0x84] = official("STY", ZP, 2, 3, 0, load_store::op_sty);
    t[0x85] = official("STA", ZP, 2, 3, 0, load_store::op_sta);
    t[0x86] = official("STX", ZP, 2, 3, 0, load_store::op_stx);
    t[0x87] = stub("SAX", ZP, 2, 3, 0);
    t[0x88] = official("DEY", IMP, 1, 2, 0, arithmetic::op_dey);
    t[0x89] = stub("SKB", IMM, 2, 2, 0);
    t[0x8A] = official("TXA", IMP, 1, 2, 0, misc::op_txa);
    t[0x8B] = unassigned("XAA", IMM, 2, 2, 0);
    t[0x8C] = official("STY", ABS, 3, 4, 0, load_store::op_sty);
    t[0x8D] = official("STA", ABS, 3, 4, 0, load_store::op_sta);
    t[0x8E] = official("STX", ABS, 3, 4, 0, load_store::op_stx);
    t[0x8F] = stub("SAX", ABS, 3, 4, 0);

    // ---- 0x90 ----
    t[0x90] = official("BCC", REL, 2, 2, 0, branches::op_bcc);
    t[0x91] = official("STA", IZY, 2, 6, 0, load_store::op_sta);
    t[0x93] = unassigned("AHX", IZY, 2, 6, 0);
    t[0x94] = official("STY", ZPX, 2, 4, 0, load_store::op_sty);
    t[0x95] = official("STA", ZPX, 2, 4, 0, load_store::op_sta);
    t[0x96] = official("STX", ZPY, 2, 4, 0, load_store::op_stx);
    t[0x97] = stub("SAX", ZPY, 2, 4, 0);
    t[0x98] = official("TYA", IMP, 1, 2, 0, misc::op_tya);
    t[0x99] = official("STA", ABY, 3, 5, 0, load_store::op_sta);
    t[0x9A] = official("TXS", IMP, 1, 2, 0, misc::op_txs);
    t[0x9B] = unassigned("TAS", ABY, 3, 5, 0);
    t[0x9C] = unassigned("SHY", ABX, 3, 5, 0);
    t[0x9D] = official("STA", ABX, 3, 5, 0, load_store::op_sta);
    t[0x9E] = unassigned("SHX", ABY, 3, 5, 0);
    t[0x9F] = unassigned("AHX", ABY, 3, 5, 0);

    // ---- 0xA0 ----
    t[0xA0] = official("LDY", IMM, 2, 2, 0, load_store::op_ldy);
    t[0xA1] = official("LDA", IZX, 2, 6, 0, load_store::op_lda);
    t[0xA2] = official("LDX", IMM, 2, 2, 0, load_store::op_ldx);
    t[0xA3] = stub("LAX", IZX, 2, 6, 0);
    t[0xA4] = official("LDY", ZP, 2, 3, 0, load_store::op_ldy);
    t[0xA5] = official("LDA", ZP, 2, 3, 0, load_store::op_lda);
    t[0xA6] = official("LDX", ZP, 2, 3, 0, load_store::op_ldx);
    t[0xA7] = stub("LAX", ZP, 2, 3, 0);
    t[0xA8] = official("TAY", IMP, 1, 2, 0, misc::op_tay);
    t[0xA9] = official("LDA", IMM, 2, 2, 0, load_store::op_lda);
    t[0xAA] = official("TAX", IMP, 1, 2, 0, misc::op_tax);
    t[0xAB] = unassigned("LXA", IMM, 2, 2, 0);
    t[0xAC] = official("LDY", ABS, 3, 4, 0, load_store::op_ldy);
    t[0xAD] = official("LDA", ABS, 3, 4, 0, load_store::op_lda);
    t[0xAE] = official("LDX", ABS, 3, 4, 0, load_store::op_ldx);
    t[0xAF] = stub("LAX", ABS, 3, 4, 0);

    // ---- 0xB0 ----
    t[0xB0] = official("BCS", REL, 2, 2, 0, branches::op_bcs);
    t[0xB1] = official("LDA", IZY, 2, 5, 1, load_store::op_lda);
    t[0xB3] = stub("LAX", IZY, 2, 5, 1);
    t[0xB4] = official("LDY", ZPX, 2, 4, 0, load_store::op_ldy);
    t[0xB5] = official("LDA", ZPX, 2, 4, 0, load_store::op_lda);
    t[0xB6] = official("LDX", ZPY, 2, 4, 0, load_store::op_ldx);
    t[0xB7] = stub("LAX", ZPY, 2, 4, 0);
    t[0xB8] = official("CLV", IMP, 1, 2, 0, misc::op_clv);
    t[0xB9] = official("LDA", ABY, 3, 4, 1, load_store::op_lda);
    t[0xBA] = official("TSX", IMP, 1, 2, 0, misc::op_tsx);
    t[0xBB] = unassigned("LAS", ABY, 3, 4, 1);
    t[0xBC] = official("LDY", ABX, 3, 4, 1, load_store::op_ldy);
    t[0xBD] = official("LDA", ABX, 3, 4, 1, load_store::op_lda);
    t[0xBE] = official("LDX", ABY, 3, 4, 1, load_store::op_ldx);
    t[0xBF] = stub("LAX", ABY, 3, 4, 1);

    // ---- 0xC0 ----
    t[0xC0] = official("CPY", IMM, 2, 2, 0, compare::op_cpy);
    t[0xC1] = official("CMP", IZX, 2, 6, 0, compare::op_cmp);
    t[0xC2] = stub("SKB", IMM, 2, 2, 0);
    t[0xC3] = stub("DCP", IZX, 2, 8, 0);
    t[0xC4] = official("CPY", ZP, 2, 3, 0, compare::op_cpy);
    t[0xC5] = official("CMP", ZP, 2, 3, 0, compare::op_cmp);
    t[0xC6] = official("DEC", ZP, 2, 5, 0, rmw::op_dec);
    t[0xC7] = stub("DCP", ZP, 2, 5, 0);
    t[0xC8] = official("INY", IMP, 1, 2, 0, arithmetic::op_iny);
    t[0xC9] = official("CMP", IMM, 2, 2, 0, compare::op_cmp);
    t[0xCA] = official("DEX", IMP, 1, 2, 0, arithmetic::op_dex);
    t[0xCB] = unassigned("AXS", IMM, 2, 2, 0);
    t[0xCC] = official("CPY", ABS, 3, 4, 0, compare::op_cpy);
    t[0xCD] = official("CMP", ABS, 3, 4, 0, compare::op_cmp);
    t[0xCE] = official("DEC", ABS, 3, 6, 0, rmw::op_dec);
    t[0xCF] = stub("DCP", ABS, 3, 6, 0);

    // ---- 0xD0 ----
    t[0xD0] = official("BNE", REL, 2, 2, 0, branches::op_bne);
    t[0xD1] = official("CMP", IZY, 2, 5, 1, compare::op_cmp);
    t[0xD3] = stub("DCP", IZY, 2, 8, 0);
    t[0xD4] = stub("IGN", ZPX, 2, 4, 0);
    t[0xD5] = official("CMP", ZPX, 2, 4, 0, compare::op_cmp);
    t[0xD6] = official("DEC", ZPX, 2, 6, 0, rmw::op_dec);
    t[0xD7] = stub("DCP", ZPX, 2, 6, 0);
    t[0xD8] = official("CLD", IMP, 1, 2, 0, misc::op_cld);
    t[0xD9] = official("CMP", ABY, 3, 4, 1, compare::op_cmp);
    t[0xDA] = alias("NOP", IMP, 1, 2, misc::op_nop);
    t[0xDB] = stub("DCP", ABY, 3, 7, 0);
    t[0xDC] = stub("IGN", ABX, 3, 4, 1);
    t[0xDD] = official("CMP", ABX, 3, 4, 1, compare::op_cmp);
    t[0xDE] = official("DEC", ABX, 3, 7, 0, rmw::op_dec);
    t[0xDF] = stub("DCP", ABX, 3, 7, 0);

    // ---- 0xE0 ----
    t[0xE0] = official("CPX", IMM, 2, 2, 0, compare::op_cpx);
    t[0xE1] = official("SBC", IZX, 2, 6, 0, arithmetic::op_sbc);
    t[0xE2] = stub("SKB", IMM, 2, 2, 0);
    t[0xE3] = stub("ISB", IZX, 2, 8, 0);
    t[0xE4] = official("CPX", ZP, 2, 3, 0, compare::op_cpx);
    t[0xE5] = official("SBC", ZP, 2, 3, 0, arithmetic::op_sbc);
    t[0xE6] = official("INC", ZP, 2, 5, 0, rmw::op_inc);
    t[0xE7] = stub("ISB", ZP, 2, 5, 0);
    t[0xE8] = official("INX", IMP, 1, 2, 0, arithmetic::op_inx);
    t[0xE9] = official("SBC", IMM, 2, 2, 0, arithmetic::op_sbc);
    t[0xEA] = official("NOP", IMP, 1, 2, 0, misc::op_nop);
    t[0xEB] = alias("SBC", IMM, 2, 2, arithmetic::op_sbc);
    t[0xEC] = official("CPX", ABS, 3, 4, 0, compare::op_cpx);
    t[0xED] = official("SBC", ABS, 3, 4, 0, arithmetic::op_sbc);
    t[0xEE] = official("INC", ABS, 3, 6, 0, rmw::op_inc);
    t[0xEF] = stub("ISB", ABS, 3, 6, 0);

    // ---- 0xF0 ----
    t[0xF0] = official("BEQ", REL, 2, 2, 0, branches::op_beq);
    t[0xF1] = official("SBC", IZY, 2, 5, 1, arithmetic::op_sbc);
    t[0xF3] = stub("ISB", IZY, 2, 8, 0);
    t[0xF4] = stub("IGN", ZPX, 2, 4, 0);
    t[0xF5] = official("SBC", ZPX, 2, 4, 0, arithmetic::op_sbc);
    t[0xF6] = official("INC", ZPX, 2, 6, 0, rmw::op_inc);
    t[0xF7] = stub("ISB", ZPX, 2, 6, 0);
    t[0xF8] = official("SED", IMP, 1, 2, 0, misc::op_sed);
    t[0xF9] = official("SBC", ABY, 3, 4, 1, arithmetic::op_sbc);
    t[0xFA] = alias("NOP", IMP, 1, 2, misc::op_nop);
    t[0xFB] = stub("ISB", ABY, 3, 7, 0);
    t[0xFC] = stub("IGN", ABX, 3, 4, 1);
    t[0xFD] = official("SBC", ABX, 3, 4, 1, arithmetic::op_sbc);
    t[0xFE] = official("INC", ABX, 3, 7, 0, rmw::op_inc);
    t[0xFF] = stub("ISB", ABX, 3, 7, 0);

    t
};
