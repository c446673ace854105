//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ADC, SBC: binary add/subtract with carry (Decimal mode is not honored)
//! - AND, ORA, EOR: bitwise logic on the accumulator
//! - CMP, CPX, CPY: register compare
//! - BIT: bit test

use crate::{Bus, Status, CPU};

/// Adds `value` and the carry into A, setting C, Z, V and N.
///
/// SBC funnels through here with the operand inverted, so one set of flag
/// formulas covers both.
fn add_with_carry<B: Bus>(cpu: &mut CPU<B>, value: u8) {
    let a = cpu.a as u16;
    let m = value as u16;
    let temp = a + m + cpu.get_flag(Status::CARRY) as u16;

    cpu.status.set(Status::CARRY, temp > 0xFF);
    cpu.status
        .set(Status::OVERFLOW, (!(a ^ m) & (a ^ temp)) & 0x0080 != 0);
    cpu.a = temp as u8;
    cpu.status.set_zn(cpu.a);
}

/// ADC - Add with Carry.
///
/// `A = A + M + C`. Carry is set when the unsigned sum exceeds 255; Overflow when
/// both inputs share a sign the result does not.
pub(crate) fn adc<B: Bus>(cpu: &mut CPU<B>) -> bool {
    let value = cpu.fetch();
    add_with_carry(cpu, value);
    true
}

/// SBC - Subtract with Carry (borrow = !C).
///
/// `A = A - M - (1 - C)`, computed as `A + !M + C`.
pub(crate) fn sbc<B: Bus>(cpu: &mut CPU<B>) -> bool {
    let value = cpu.fetch() ^ 0xFF;
    add_with_carry(cpu, value);
    true
}

/// AND - Logical AND with the accumulator.
pub(crate) fn and<B: Bus>(cpu: &mut CPU<B>) -> bool {
    let value = cpu.fetch();
    cpu.a &= value;
    cpu.status.set_zn(cpu.a);
    true
}

/// ORA - Logical inclusive OR with the accumulator.
pub(crate) fn ora<B: Bus>(cpu: &mut CPU<B>) -> bool {
    let value = cpu.fetch();
    cpu.a |= value;
    cpu.status.set_zn(cpu.a);
    true
}

/// EOR - Exclusive OR with the accumulator.
pub(crate) fn eor<B: Bus>(cpu: &mut CPU<B>) -> bool {
    let value = cpu.fetch();
    cpu.a ^= value;
    cpu.status.set_zn(cpu.a);
    true
}

/// Shared compare: C = reg >= M, Z/N from `reg - M`. Nothing is stored.
fn compare<B: Bus>(cpu: &mut CPU<B>, register: u8) {
    let value = cpu.fetch();
    let temp = register.wrapping_sub(value);
    cpu.status.set(Status::CARRY, register >= value);
    cpu.status.set_zn(temp);
}

/// CMP - Compare with the accumulator.
pub(crate) fn cmp<B: Bus>(cpu: &mut CPU<B>) -> bool {
    let register = cpu.a;
    compare(cpu, register);
    true
}

/// CPX - Compare with X.
pub(crate) fn cpx<B: Bus>(cpu: &mut CPU<B>) -> bool {
    let register = cpu.x;
    compare(cpu, register);
    false
}

/// CPY - Compare with Y.
pub(crate) fn cpy<B: Bus>(cpu: &mut CPU<B>) -> bool {
    let register = cpu.y;
    compare(cpu, register);
    false
}

/// BIT - Bit Test.
///
/// Z from `A & M`; N and V copied from bits 7 and 6 of M. A is unchanged.
pub(crate) fn bit<B: Bus>(cpu: &mut CPU<B>) -> bool {
    let value = cpu.fetch();
    cpu.status.set(Status::ZERO, cpu.a & value == 0);
    cpu.status.set(Status::NEGATIVE, value & 0x80 != 0);
    cpu.status.set(Status::OVERFLOW, value & 0x40 != 0);
    false
}
