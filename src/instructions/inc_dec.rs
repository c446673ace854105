//! # Increment and Decrement Instructions
//!
//! This module implements increment and decrement operations:
//! - INC / DEC: read-modify-write on memory
//! - INX / INY / DEX / DEY: on the index registers
//!
//! All wrap at 8 bits and set Z and N from the result.

use crate::{Bus, CPU};

/// Writes `fetched + delta` back to the resolved address.
fn modify_memory<B: Bus>(cpu: &mut CPU<B>, delta: u8) {
    let result = cpu.fetch().wrapping_add(delta);
    cpu.bus.write(cpu.addr_abs, result);
    cpu.status.set_zn(result);
}

/// INC - Increment Memory.
pub(crate) fn inc<B: Bus>(cpu: &mut CPU<B>) -> bool {
    modify_memory(cpu, 1);
    false
}

/// DEC - Decrement Memory.
pub(crate) fn dec<B: Bus>(cpu: &mut CPU<B>) -> bool {
    modify_memory(cpu, 0xFF);
    false
}

/// INX - Increment X.
pub(crate) fn inx<B: Bus>(cpu: &mut CPU<B>) -> bool {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.status.set_zn(cpu.x);
    false
}

/// INY - Increment Y.
pub(crate) fn iny<B: Bus>(cpu: &mut CPU<B>) -> bool {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.status.set_zn(cpu.y);
    false
}

/// DEX - Decrement X.
pub(crate) fn dex<B: Bus>(cpu: &mut CPU<B>) -> bool {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.status.set_zn(cpu.x);
    false
}

/// DEY - Decrement Y.
pub(crate) fn dey<B: Bus>(cpu: &mut CPU<B>) -> bool {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.status.set_zn(cpu.y);
    false
}
