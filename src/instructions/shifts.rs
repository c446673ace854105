//! # Shift and Rotate Instructions
//!
//! This module implements bit shift and rotate operations:
//! - ASL: Arithmetic Shift Left
//! - LSR: Logical Shift Right
//! - ROL: Rotate Left through carry
//! - ROR: Rotate Right through carry
//!
//! In Implied mode the operand is the accumulator and the result goes back to A;
//! otherwise it is read from and written back to the resolved address.

use crate::opcodes::lookup;
use crate::{AddressingMode, Bus, Status, CPU};

/// Stores a shift result to A or memory and sets Z/N from it.
fn write_back<B: Bus>(cpu: &mut CPU<B>, result: u8) {
    if lookup(cpu.opcode).addressing_mode == AddressingMode::Implied {
        cpu.a = result;
    } else {
        cpu.bus.write(cpu.addr_abs, result);
    }
    cpu.status.set_zn(result);
}

/// ASL - Arithmetic Shift Left. Bit 7 goes to carry, bit 0 becomes 0.
pub(crate) fn asl<B: Bus>(cpu: &mut CPU<B>) -> bool {
    let value = cpu.fetch();
    cpu.status.set(Status::CARRY, value & 0x80 != 0);
    write_back(cpu, value << 1);
    false
}

/// LSR - Logical Shift Right. Bit 0 goes to carry, bit 7 becomes 0.
pub(crate) fn lsr<B: Bus>(cpu: &mut CPU<B>) -> bool {
    let value = cpu.fetch();
    cpu.status.set(Status::CARRY, value & 0x01 != 0);
    write_back(cpu, value >> 1);
    false
}

/// ROL - Rotate Left. Old carry enters bit 0, bit 7 becomes the new carry.
pub(crate) fn rol<B: Bus>(cpu: &mut CPU<B>) -> bool {
    let value = cpu.fetch();
    let carry_in = cpu.get_flag(Status::CARRY);
    cpu.status.set(Status::CARRY, value & 0x80 != 0);
    write_back(cpu, (value << 1) | carry_in);
    false
}

/// ROR - Rotate Right. Old carry enters bit 7, bit 0 becomes the new carry.
pub(crate) fn ror<B: Bus>(cpu: &mut CPU<B>) -> bool {
    let value = cpu.fetch();
    let carry_in = cpu.get_flag(Status::CARRY);
    cpu.status.set(Status::CARRY, value & 0x01 != 0);
    write_back(cpu, (value >> 1) | (carry_in << 7));
    false
}
