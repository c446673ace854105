//! # Status Flag Instructions
//!
//! CLC, SEC, CLI, SEI, CLD, SED and CLV each set or clear exactly one flag.
//! Nothing else changes.

use crate::{Bus, Status, CPU};

pub(crate) fn update<B: Bus>(cpu: &mut CPU<B>, flag: Status, value: bool) -> bool {
    cpu.status.set(flag, value);
    false
}
