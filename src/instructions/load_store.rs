//! # Load and Store Instructions
//!
//! Loads set Z and N and ask for the page-cross cycle. Stores touch no flags and
//! never pay it, even through an indexed mode that crossed a page (their base
//! cycle count already includes the fix-up).

use crate::{Bus, CPU};

/// LDA - Load Accumulator.
pub(crate) fn lda<B: Bus>(cpu: &mut CPU<B>) -> bool {
    cpu.a = cpu.fetch();
    cpu.status.set_zn(cpu.a);
    true
}

/// LDX - Load X.
pub(crate) fn ldx<B: Bus>(cpu: &mut CPU<B>) -> bool {
    cpu.x = cpu.fetch();
    cpu.status.set_zn(cpu.x);
    true
}

/// LDY - Load Y.
pub(crate) fn ldy<B: Bus>(cpu: &mut CPU<B>) -> bool {
    cpu.y = cpu.fetch();
    cpu.status.set_zn(cpu.y);
    true
}

/// STA - Store Accumulator.
pub(crate) fn sta<B: Bus>(cpu: &mut CPU<B>) -> bool {
    cpu.bus.write(cpu.addr_abs, cpu.a);
    false
}

/// STX - Store X.
pub(crate) fn stx<B: Bus>(cpu: &mut CPU<B>) -> bool {
    cpu.bus.write(cpu.addr_abs, cpu.x);
    false
}

/// STY - Store Y.
pub(crate) fn sty<B: Bus>(cpu: &mut CPU<B>) -> bool {
    cpu.bus.write(cpu.addr_abs, cpu.y);
    false
}
