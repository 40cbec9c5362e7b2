/*!
execute.rs - 6502 instruction semantic helpers (ALU, flags, stack, RMW)

Purpose
=======
Centralize the side-effect logic of every official instruction so the opcode
table handlers in `dispatch/` stay thin: a handler reads its operand, calls
one helper here, and returns any extra cycles.

Scope (crate-visible)
---------------------
Flag & status helpers:
    set_flag, get_flag, update_zn

Stack helpers:
    push, pop, push_word, pop_word, push_status_with_break
    php, plp, pha, pla

Loads / transfers:
    lda/ldx/ldy, tax/tay/txa/tya, tsx/txs

Logical / bit:
    and/ora/eor/bit

Increment / decrement:
    inx/iny/dex/dey, inc_mem/dec_mem

Arithmetic:
    adc/sbc (carry + overflow via `cpu::arith`), compare

Shifts / rotates:
    accumulator and memory forms; memory forms share `rmw_memory`

Design Notes
============
- Every helper is generic over `C: CpuRegs + ?Sized`, so the table's
  `&mut dyn CpuRegs` and a concrete `CpuState` both work.
- Memory is passed explicitly; the register trait has no bus coupling.
- The stack lives in page $0100. Push writes `$0100 | S` then decrements S,
  pull increments S then reads; both wrap S within 8 bits.
- Decimal mode is ignored: ADC/SBC are always binary.
*/

use crate::bus::Memory;
use crate::cpu::arith::{is_carry, is_overflow_on_adc, is_overflow_on_sbc};
use crate::cpu::regs::{CpuRegs, pulled_status};
use crate::cpu::state::{CARRY, NEGATIVE, OVERFLOW, STACK_BASE, ZERO};

// ---------------------------------------------------------------------------
// Flag helpers
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn set_flag<C: CpuRegs + ?Sized>(cpu: &mut C, mask: u8, on: bool) {
    cpu.assign_flag(mask, on);
}

#[inline]
pub(crate) fn get_flag<C: CpuRegs + ?Sized>(cpu: &C, mask: u8) -> bool {
    cpu.is_flag_set(mask)
}

#[inline]
pub(crate) fn update_zn<C: CpuRegs + ?Sized>(cpu: &mut C, v: u8) {
    cpu.update_zn(v);
}

// ---------------------------------------------------------------------------
// Stack helpers
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn push<C: CpuRegs + ?Sized>(cpu: &mut C, memory: &mut Memory, v: u8) {
    let sp = cpu.sp();
    memory.set(STACK_BASE | sp as u16, v);
    cpu.set_sp(sp.wrapping_sub(1));
}

#[inline]
pub(crate) fn pop<C: CpuRegs + ?Sized>(cpu: &mut C, memory: &Memory) -> u8 {
    let sp = cpu.sp().wrapping_add(1);
    cpu.set_sp(sp);
    memory.get(STACK_BASE | sp as u16)
}

/// Push high byte first, so the low byte ends up at the lower address.
#[inline]
pub(crate) fn push_word<C: CpuRegs + ?Sized>(cpu: &mut C, memory: &mut Memory, v: u16) {
    push(cpu, memory, (v >> 8) as u8);
    push(cpu, memory, (v & 0xFF) as u8);
}

#[inline]
pub(crate) fn pop_word<C: CpuRegs + ?Sized>(cpu: &mut C, memory: &Memory) -> u16 {
    let lo = pop(cpu, memory) as u16;
    let hi = pop(cpu, memory) as u16;
    (hi << 8) | lo
}

/// Push P with control over Break flag semantics (BRK/PHP vs IRQ/NMI).
pub(crate) fn push_status_with_break<C: CpuRegs + ?Sized>(cpu: &mut C, memory: &mut Memory, set_break: bool) {
    let v = cpu.compose_status_for_push(set_break);
    push(cpu, memory, v);
}

#[inline]
pub(crate) fn php<C: CpuRegs + ?Sized>(cpu: &mut C, memory: &mut Memory) {
    push_status_with_break(cpu, memory, true);
}

#[inline]
pub(crate) fn plp<C: CpuRegs + ?Sized>(cpu: &mut C, memory: &Memory) {
    let v = pop(cpu, memory);
    cpu.set_status(pulled_status(v));
}

#[inline]
pub(crate) fn pha<C: CpuRegs + ?Sized>(cpu: &mut C, memory: &mut Memory) {
    let a = cpu.a();
    push(cpu, memory, a);
}

#[inline]
pub(crate) fn pla<C: CpuRegs + ?Sized>(cpu: &mut C, memory: &Memory) {
    let val = pop(cpu, memory);
    cpu.set_a(val);
    update_zn(cpu, val);
}

// ---------------------------------------------------------------------------
// Loads / Transfers
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn lda<C: CpuRegs + ?Sized>(cpu: &mut C, v: u8) {
    cpu.set_a(v);
    update_zn(cpu, v);
}

#[inline]
pub(crate) fn ldx<C: CpuRegs + ?Sized>(cpu: &mut C, v: u8) {
    cpu.set_x(v);
    update_zn(cpu, v);
}

#[inline]
pub(crate) fn ldy<C: CpuRegs + ?Sized>(cpu: &mut C, v: u8) {
    cpu.set_y(v);
    update_zn(cpu, v);
}

#[inline]
pub(crate) fn tax<C: CpuRegs + ?Sized>(cpu: &mut C) {
    let v = cpu.a();
    ldx(cpu, v);
}

#[inline]
pub(crate) fn tay<C: CpuRegs + ?Sized>(cpu: &mut C) {
    let v = cpu.a();
    ldy(cpu, v);
}

#[inline]
pub(crate) fn txa<C: CpuRegs + ?Sized>(cpu: &mut C) {
    let v = cpu.x();
    lda(cpu, v);
}

#[inline]
pub(crate) fn tya<C: CpuRegs + ?Sized>(cpu: &mut C) {
    let v = cpu.y();
    lda(cpu, v);
}

#[inline]
pub(crate) fn tsx<C: CpuRegs + ?Sized>(cpu: &mut C) {
    let v = cpu.sp();
    ldx(cpu, v);
}

/// TXS does not touch flags.
#[inline]
pub(crate) fn txs<C: CpuRegs + ?Sized>(cpu: &mut C) {
    let v = cpu.x();
    cpu.set_sp(v);
}

// ---------------------------------------------------------------------------
// Logical / Bit
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn and<C: CpuRegs + ?Sized>(cpu: &mut C, v: u8) {
    let r = cpu.a() & v;
    lda(cpu, r);
}

#[inline]
pub(crate) fn ora<C: CpuRegs + ?Sized>(cpu: &mut C, v: u8) {
    let r = cpu.a() | v;
    lda(cpu, r);
}

#[inline]
pub(crate) fn eor<C: CpuRegs + ?Sized>(cpu: &mut C, v: u8) {
    let r = cpu.a() ^ v;
    lda(cpu, r);
}

/// Z from `A & v`; N and V copied from bits 7 and 6 of the operand.
#[inline]
pub(crate) fn bit<C: CpuRegs + ?Sized>(cpu: &mut C, v: u8) {
    let zero = (cpu.a() & v) == 0;
    set_flag(cpu, ZERO, zero);
    set_flag(cpu, NEGATIVE, (v & 0x80) != 0);
    set_flag(cpu, OVERFLOW, (v & 0x40) != 0);
}

// ---------------------------------------------------------------------------
// Increment / Decrement (register)
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn inx<C: CpuRegs + ?Sized>(cpu: &mut C) {
    let v = cpu.x().wrapping_add(1);
    ldx(cpu, v);
}

#[inline]
pub(crate) fn iny<C: CpuRegs + ?Sized>(cpu: &mut C) {
    let v = cpu.y().wrapping_add(1);
    ldy(cpu, v);
}

#[inline]
pub(crate) fn dex<C: CpuRegs + ?Sized>(cpu: &mut C) {
    let v = cpu.x().wrapping_sub(1);
    ldx(cpu, v);
}

#[inline]
pub(crate) fn dey<C: CpuRegs + ?Sized>(cpu: &mut C) {
    let v = cpu.y().wrapping_sub(1);
    ldy(cpu, v);
}

// ---------------------------------------------------------------------------
// Shift / rotate kernels (shared by accumulator and memory forms)
// ---------------------------------------------------------------------------

#[inline]
fn asl_value<C: CpuRegs + ?Sized>(cpu: &mut C, v: u8) -> u8 {
    set_flag(cpu, CARRY, (v & 0x80) != 0);
    v << 1
}

#[inline]
fn lsr_value<C: CpuRegs + ?Sized>(cpu: &mut C, v: u8) -> u8 {
    set_flag(cpu, CARRY, (v & 0x01) != 0);
    v >> 1
}

#[inline]
fn rol_value<C: CpuRegs + ?Sized>(cpu: &mut C, v: u8) -> u8 {
    let carry_in = cpu.carry_bit();
    set_flag(cpu, CARRY, (v & 0x80) != 0);
    (v << 1) | carry_in
}

#[inline]
fn ror_value<C: CpuRegs + ?Sized>(cpu: &mut C, v: u8) -> u8 {
    let carry_in = cpu.carry_bit() << 7;
    set_flag(cpu, CARRY, (v & 0x01) != 0);
    (v >> 1) | carry_in
}

// ---------------------------------------------------------------------------
// Shifts / Rotates - Accumulator
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn asl_acc<C: CpuRegs + ?Sized>(cpu: &mut C) {
    let v = cpu.a();
    let r = asl_value(cpu, v);
    lda(cpu, r);
}

#[inline]
pub(crate) fn lsr_acc<C: CpuRegs + ?Sized>(cpu: &mut C) {
    let v = cpu.a();
    let r = lsr_value(cpu, v);
    lda(cpu, r);
}

#[inline]
pub(crate) fn rol_acc<C: CpuRegs + ?Sized>(cpu: &mut C) {
    let v = cpu.a();
    let r = rol_value(cpu, v);
    lda(cpu, r);
}

#[inline]
pub(crate) fn ror_acc<C: CpuRegs + ?Sized>(cpu: &mut C) {
    let v = cpu.a();
    let r = ror_value(cpu, v);
    lda(cpu, r);
}

// ---------------------------------------------------------------------------
// ADC / SBC
// ---------------------------------------------------------------------------

/// A + v + C. Binary only.
pub(crate) fn adc<C: CpuRegs + ?Sized>(cpu: &mut C, v: u8) {
    let a = cpu.a() as i32;
    let b = v as i32;
    let carry = cpu.carry_bit() as i32;
    let result = (a + b + carry) & 0xFF;

    set_flag(cpu, CARRY, is_carry(a, b, carry, true));
    set_flag(cpu, OVERFLOW, is_overflow_on_adc(a, b, result));
    lda(cpu, result as u8);
}

/// A - v - (1 - C). The borrow, not the carry, goes into the predicates.
pub(crate) fn sbc<C: CpuRegs + ?Sized>(cpu: &mut C, v: u8) {
    let a = cpu.a() as i32;
    let b = v as i32;
    let borrow = 1 - cpu.carry_bit() as i32;
    let result = (a - b - borrow) & 0xFF;

    set_flag(cpu, CARRY, is_carry(a, b, borrow, false));
    set_flag(cpu, OVERFLOW, is_overflow_on_sbc(a, b, result));
    lda(cpu, result as u8);
}

// ---------------------------------------------------------------------------
// Compare
// ---------------------------------------------------------------------------

/// Shared CMP/CPX/CPY body: C iff `reg >= v`, Z/N from `reg - v`.
#[inline]
pub(crate) fn compare<C: CpuRegs + ?Sized>(cpu: &mut C, reg: u8, v: u8) {
    set_flag(cpu, CARRY, reg >= v);
    update_zn(cpu, reg.wrapping_sub(v));
}

// ---------------------------------------------------------------------------
// Read-Modify-Write (memory) choreography
// ---------------------------------------------------------------------------

/// Read -> transform -> write back. Returns the stored value.
pub(crate) fn rmw_memory<C, F>(cpu: &mut C, memory: &mut Memory, addr: u16, transform: F) -> u8
where
    C: CpuRegs + ?Sized,
    F: FnOnce(&mut C, u8) -> u8,
{
    let old = memory.get(addr);
    let newv = transform(cpu, old);
    memory.set(addr, newv);
    newv
}

// ---------------------------------------------------------------------------
// Shifts / Rotates - Memory
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn asl_mem<C: CpuRegs + ?Sized>(cpu: &mut C, memory: &mut Memory, addr: u16) {
    let r = rmw_memory(cpu, memory, addr, asl_value);
    update_zn(cpu, r);
}

#[inline]
pub(crate) fn lsr_mem<C: CpuRegs + ?Sized>(cpu: &mut C, memory: &mut Memory, addr: u16) {
    let r = rmw_memory(cpu, memory, addr, lsr_value);
    update_zn(cpu, r);
}

#[inline]
pub(crate) fn rol_mem<C: CpuRegs + ?Sized>(cpu: &mut C, memory: &mut Memory, addr: u16) {
    let r = rmw_memory(cpu, memory, addr, rol_value);
    update_zn(cpu, r);
}

#[inline]
pub(crate) fn ror_mem<C: CpuRegs + ?Sized>(cpu: &mut C, memory: &mut Memory, addr: u16) {
    let r = rmw_memory(cpu, memory, addr, ror_value);
    update_zn(cpu, r);
}

// ---------------------------------------------------------------------------
// INC / DEC memory
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn inc_mem<C: CpuRegs + ?Sized>(cpu: &mut C, memory: &mut Memory, addr: u16) {
    let r = rmw_memory(cpu, memory, addr, |_, old| old.wrapping_add(1));
    update_zn(cpu, r);
}

#[inline]
pub(crate) fn dec_mem<C: CpuRegs + ?Sized>(cpu: &mut C, memory: &mut Memory, addr: u16) {
    let r = rmw_memory(cpu, memory, addr, |_, old| old.wrapping_sub(1));
    update_zn(cpu, r);
}

// ---------------------------------------------------------------------------
// Branch helper
// ---------------------------------------------------------------------------

/// Apply a conditional branch once PC already points past the instruction.
/// Returns the extra cycles: 0 not taken, 1 taken, 2 taken across a page.
pub(crate) fn branch_cond<C: CpuRegs + ?Sized>(cpu: &mut C, target: u16, take: bool) -> u32 {
    if !take {
        return 0;
    }
    let next = cpu.pc();
    cpu.set_pc(target);
    if crate::cpu::addressing::pages_differ(next, target) {
        2
    } else {
        1
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
