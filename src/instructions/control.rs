//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - JMP, JSR, RTS, RTI
//! - BRK: Force Interrupt
//! - NOP and the `???` placeholder
//!
//! BRK is a software interrupt that:
//! 1. Skips the signature byte after the opcode
//! 2. Sets the I (interrupt disable) flag
//! 3. Pushes PC to the stack (high byte first, then low byte)
//! 4. Pushes processor status to stack with B flag set
//! 5. Loads PC from IRQ vector at $FFFE/F

use crate::cpu::IRQ_VECTOR;
use crate::{Bus, Status, CPU};

/// JMP - Jump. Absolute and Indirect targets both arrive in `addr_abs`.
pub(crate) fn jmp<B: Bus>(cpu: &mut CPU<B>) -> bool {
    cpu.pc = cpu.addr_abs;
    false
}

/// JSR - Jump to Subroutine.
///
/// Pushes the address of the last byte of the JSR instruction, which RTS later
/// increments past.
pub(crate) fn jsr<B: Bus>(cpu: &mut CPU<B>) -> bool {
    let return_address = cpu.pc.wrapping_sub(1);
    cpu.push_word(return_address);
    cpu.pc = cpu.addr_abs;
    false
}

/// RTS - Return from Subroutine.
pub(crate) fn rts<B: Bus>(cpu: &mut CPU<B>) -> bool {
    cpu.pc = cpu.pull_word().wrapping_add(1);
    false
}

/// RTI - Return from Interrupt.
///
/// Pulls status (Break dropped, Unused kept set) and then PC. Unlike RTS the
/// pulled PC is used as is.
pub(crate) fn rti<B: Bus>(cpu: &mut CPU<B>) -> bool {
    let pulled = cpu.pull();
    cpu.status = Status::from_pulled(pulled) - Status::BREAK;
    cpu.pc = cpu.pull_word();
    false
}

/// BRK - Force Interrupt.
///
/// Cycle timing: 7 cycles (fixed)
///
/// Flags affected:
/// - B: Set in the pushed status byte only; the live flag ends up clear
/// - I: Set to 1
pub(crate) fn brk<B: Bus>(cpu: &mut CPU<B>) -> bool {
    cpu.pc = cpu.pc.wrapping_add(1);

    cpu.status.insert(Status::INTERRUPT_DISABLE);
    cpu.push_word(cpu.pc);

    cpu.push(cpu.status.pushed_with_break());
    cpu.status.remove(Status::BREAK);

    cpu.pc = cpu.bus.read_word(IRQ_VECTOR);
    false
}

/// NOP - No Operation.
///
/// The undocumented absolute,X NOPs pay the page-cross cycle like a real read.
pub(crate) fn nop<B: Bus>(cpu: &mut CPU<B>) -> bool {
    matches!(cpu.opcode, 0x1C | 0x3C | 0x5C | 0x7C | 0xDC | 0xFC)
}

/// `???` - unassigned opcode. Does nothing; the table's cycle cost still applies.
pub(crate) fn placeholder<B: Bus>(cpu: &mut CPU<B>) -> bool {
    debug_assert!(cpu.executing_placeholder());
    log::trace!(
        "unassigned opcode ${:02X} at ${:04X}",
        cpu.opcode,
        cpu.pc.wrapping_sub(1)
    );
    false
}
