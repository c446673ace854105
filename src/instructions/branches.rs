//! # Branch Instructions
//!
//! This module implements conditional branch operations:
//! - BCC / BCS: Carry clear / set
//! - BNE / BEQ: Zero clear / set
//! - BPL / BMI: Negative clear / set
//! - BVC / BVS: Overflow clear / set
//!
//! All branch instructions use relative addressing with a signed 8-bit offset,
//! already sign-extended into `addr_rel` by the resolver.
//! Cycle timing varies based on whether the branch is taken and whether a page boundary is crossed.

use crate::addressing::crosses_page;
use crate::{Bus, Status, CPU};

/// Branches when `flag` is set (`when_set`) or clear (`!when_set`).
///
/// Cycle timing:
/// - base cycles if branch not taken
/// - +1 if branch taken to same page
/// - +2 if branch taken to a different page than the next instruction
///
/// No flags are affected.
pub(crate) fn branch<B: Bus>(cpu: &mut CPU<B>, flag: Status, when_set: bool) -> bool {
    if cpu.status.contains(flag) != when_set {
        return false;
    }

    cpu.cycles += 1;
    cpu.addr_abs = cpu.pc.wrapping_add(cpu.addr_rel);

    if crosses_page(cpu.pc, cpu.addr_abs) {
        cpu.cycles += 1;
    }

    cpu.pc = cpu.addr_abs;
    false
}
