//! # Register Transfer Instructions
//!
//! TAX, TAY, TXA, TYA and TSX copy one register into another and set Z/N from the
//! destination. TXS touches no flags.

use crate::{Bus, CPU};

pub(crate) fn tax<B: Bus>(cpu: &mut CPU<B>) -> bool {
    cpu.x = cpu.a;
    cpu.status.set_zn(cpu.x);
    false
}

pub(crate) fn tay<B: Bus>(cpu: &mut CPU<B>) -> bool {
    cpu.y = cpu.a;
    cpu.status.set_zn(cpu.y);
    false
}

pub(crate) fn txa<B: Bus>(cpu: &mut CPU<B>) -> bool {
    cpu.a = cpu.x;
    cpu.status.set_zn(cpu.a);
    false
}

pub(crate) fn tya<B: Bus>(cpu: &mut CPU<B>) -> bool {
    cpu.a = cpu.y;
    cpu.status.set_zn(cpu.a);
    false
}

pub(crate) fn tsx<B: Bus>(cpu: &mut CPU<B>) -> bool {
    cpu.x = cpu.sp;
    cpu.status.set_zn(cpu.x);
    false
}

/// TXS - Transfer X to Stack Pointer. No flags.
pub(crate) fn txs<B: Bus>(cpu: &mut CPU<B>) -> bool {
    cpu.sp = cpu.x;
    false
}
