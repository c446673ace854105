//! Kani formal verification proofs for the 6502 emulator.
//!
//! These proofs use bounded model checking to verify the arithmetic the CPU
//! relies on holds for every possible input.
//!
//! To run these proofs, install Kani and run:
//! ```text
//! cargo kani --tests
//! ```
//!
//! They are compiled only under `cfg(kani)` and ignored by regular test runs.

#[cfg(kani)]
mod kani_proofs {
    use cpu6502::{Status, OPCODE_TABLE};

    // ========== Stack Address Proofs ==========

    /// Proof: Stack address is always in range 0x0100-0x01FF
    #[kani::proof]
    fn proof_stack_address_always_in_stack_page() {
        let sp: u8 = kani::any();
        let stack_addr: u16 = 0x0100 | (sp as u16);

        kani::assert(
            (0x0100..=0x01FF).contains(&stack_addr),
            "Stack address must be in range 0x0100-0x01FF",
        );
    }

    /// Proof: push then pull returns SP to where it started
    #[kani::proof]
    fn proof_push_pull_sp_round_trip() {
        let sp: u8 = kani::any();
        let after_push = sp.wrapping_sub(1);
        let after_pull = after_push.wrapping_add(1);

        kani::assert(after_pull == sp, "SP must be restored");
    }

    // ========== Flag Computation Proofs ==========

    /// Proof: the ADC overflow formula matches the signed-range definition
    #[kani::proof]
    fn proof_overflow_flag_addition() {
        let a: u8 = kani::any();
        let m: u8 = kani::any();
        let carry: bool = kani::any();

        let a16 = a as u16;
        let m16 = m as u16;
        let temp = a16 + m16 + carry as u16;
        let formula = (!(a16 ^ m16) & (a16 ^ temp)) & 0x0080 != 0;

        let signed = a as i8 as i16 + m as i8 as i16 + carry as i16;
        let expected = !(-128..=127).contains(&signed);

        kani::assert(formula == expected, "V must flag signed overflow");
    }

    /// Proof: SBC through inverted ADC equals subtraction with borrow
    #[kani::proof]
    fn proof_sbc_is_inverted_adc() {
        let a: u8 = kani::any();
        let m: u8 = kani::any();
        let carry: bool = kani::any();

        let via_adc = (a as u16 + (m ^ 0xFF) as u16 + carry as u16) as u8;
        let direct = a.wrapping_sub(m).wrapping_sub(!carry as u8);

        kani::assert(via_adc == direct, "SBC result must match A - M - !C");
    }

    /// Proof: status bits sit where the pushed byte expects them
    #[kani::proof]
    fn proof_status_register_bit_layout() {
        kani::assert(Status::CARRY.bits() == 0x01, "C is bit 0");
        kani::assert(Status::ZERO.bits() == 0x02, "Z is bit 1");
        kani::assert(Status::INTERRUPT_DISABLE.bits() == 0x04, "I is bit 2");
        kani::assert(Status::DECIMAL_MODE.bits() == 0x08, "D is bit 3");
        kani::assert(Status::BREAK.bits() == 0x10, "B is bit 4");
        kani::assert(Status::UNUSED.bits() == 0x20, "U is bit 5");
        kani::assert(Status::OVERFLOW.bits() == 0x40, "V is bit 6");
        kani::assert(Status::NEGATIVE.bits() == 0x80, "N is bit 7");
    }

    // ========== Addressing Proofs ==========

    /// Proof: zero page indexing never leaves page zero
    #[kani::proof]
    fn proof_zero_page_x_wrap() {
        let base: u8 = kani::any();
        let x: u8 = kani::any();
        let effective = base.wrapping_add(x) as u16;

        kani::assert(effective <= 0x00FF, "Zero page index must stay in page zero");
    }

    /// Proof: a relative branch moves at most 128 back or 127 forward
    #[kani::proof]
    fn proof_branch_range() {
        let next: u16 = kani::any();
        let offset: u8 = kani::any();
        kani::assume(next >= 0x0080 && next <= 0xFF7F);

        let target = next.wrapping_add(offset as i8 as u16);
        let distance = target as i32 - next as i32;

        kani::assert((-128..=127).contains(&distance), "Branch distance out of range");
    }

    // ========== Opcode Table Proofs ==========

    /// Proof: every opcode's size and base cost are within hardware limits
    #[kani::proof]
    fn proof_all_opcode_sizes_and_cycles_valid() {
        let opcode: u8 = kani::any();
        let meta = &OPCODE_TABLE[opcode as usize];

        kani::assert(
            (1..=3).contains(&meta.size_bytes()),
            "Instruction size must be 1-3 bytes",
        );
        kani::assert(
            (2..=8).contains(&meta.base_cycles),
            "Base cycles must be 2-8",
        );
    }
}
