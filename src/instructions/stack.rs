//! # Stack Operations
//!
//! This module implements stack manipulation instructions:
//! - PHA / PLA: accumulator
//! - PHP / PLP: processor status
//!
//! The 6502 stack is located at memory addresses 0x0100-0x01FF and grows downward.
//! The full stack address is calculated as 0x0100 | SP.

use crate::{Bus, Status, CPU};

/// PHA - Push Accumulator.
pub(crate) fn pha<B: Bus>(cpu: &mut CPU<B>) -> bool {
    cpu.push(cpu.a);
    false
}

/// PHP - Push Processor Status.
///
/// The pushed copy has Break and Unused set; the live register is unchanged.
pub(crate) fn php<B: Bus>(cpu: &mut CPU<B>) -> bool {
    cpu.push(cpu.status.pushed_with_break());
    false
}

/// PLA - Pull Accumulator. Sets Z and N.
pub(crate) fn pla<B: Bus>(cpu: &mut CPU<B>) -> bool {
    cpu.a = cpu.pull();
    cpu.status.set_zn(cpu.a);
    false
}

/// PLP - Pull Processor Status. Unused is forced set.
pub(crate) fn plp<B: Bus>(cpu: &mut CPU<B>) -> bool {
    let pulled = cpu.pull();
    cpu.status = Status::from_pulled(pulled);
    false
}
