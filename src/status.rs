//! # Status Register
//!
//! The 6502 processor status register (P) as a set of named bit flags.
//!
//! Bit layout (NV-BDIZC):
//! - Bit 7: N (Negative)
//! - Bit 6: V (Overflow)
//! - Bit 5: U (Unused, reads as 1 whenever pushed)
//! - Bit 4: B (Break, only meaningful in a pushed copy)
//! - Bit 3: D (Decimal)
//! - Bit 2: I (Interrupt Disable)
//! - Bit 1: Z (Zero)
//! - Bit 0: C (Carry)

use bitflags::bitflags;

bitflags! {
    /// Processor status flags.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpu6502::Status;
    ///
    /// let mut p = Status::UNUSED;
    /// p.set(Status::CARRY, true);
    /// assert_eq!(p.bits(), 0b0010_0001);
    /// ```
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Status: u8 {
        const CARRY = 1 << 0;
        const ZERO = 1 << 1;
        const INTERRUPT_DISABLE = 1 << 2;
        const DECIMAL_MODE = 1 << 3;
        const BREAK = 1 << 4;
        const UNUSED = 1 << 5;
        const OVERFLOW = 1 << 6;
        const NEGATIVE = 1 << 7;
    }
}

impl Status {
    /// Sets Zero and Negative from an 8-bit result.
    pub(crate) fn set_zn(&mut self, value: u8) {
        self.set(Status::ZERO, value == 0);
        self.set(Status::NEGATIVE, value & 0x80 != 0);
    }

    /// The copy written to the stack by PHP and BRK: Break and Unused set.
    pub(crate) fn pushed_with_break(self) -> u8 {
        (self | Status::BREAK | Status::UNUSED).bits()
    }

    /// The copy written to the stack by IRQ and NMI: Break clear, Unused set.
    pub(crate) fn pushed_for_interrupt(self) -> u8 {
        ((self - Status::BREAK) | Status::UNUSED).bits()
    }

    /// Rebuilds a live status from a popped byte. Unused always comes back set.
    pub(crate) fn from_pulled(byte: u8) -> Self {
        Status::from_bits_retain(byte) | Status::UNUSED
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::UNUSED
    }
}
