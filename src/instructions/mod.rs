//! # 6502 Instruction Implementations
//!
//! Operation semantics, organized by category. Every function runs after the
//! addressing mode has been resolved, so `addr_abs`, `addr_rel` or `fetched` are
//! already in place. Each returns whether the operation is one that pays the
//! page-cross cycle when its addressing mode crossed a page.
//!
//! ## Categories
//!
//! - **alu**: ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT
//! - **branches**: BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS
//! - **shifts**: ASL, LSR, ROL, ROR
//! - **load_store**: LDA, LDX, LDY, STA, STX, STY
//! - **inc_dec**: INC, DEC, INX, INY, DEX, DEY
//! - **control**: JMP, JSR, RTS, RTI, BRK, NOP, and the `???` placeholder
//! - **stack**: PHA, PHP, PLA, PLP
//! - **flags**: CLC, SEC, CLI, SEI, CLD, SED, CLV
//! - **transfer**: TAX, TAY, TXA, TYA, TSX, TXS

pub(crate) mod alu;
pub(crate) mod branches;
pub(crate) mod control;
pub(crate) mod flags;
pub(crate) mod inc_dec;
pub(crate) mod load_store;
pub(crate) mod shifts;
pub(crate) mod stack;
pub(crate) mod transfer;

use crate::opcodes::Operation;
use crate::{Bus, Status, CPU};

/// Runs `operation` on `cpu`. Returns the operation's extra-cycle request.
pub(crate) fn execute<B: Bus>(cpu: &mut CPU<B>, operation: Operation) -> bool {
    use Operation::*;

    match operation {
        Adc => alu::adc(cpu),
        Sbc => alu::sbc(cpu),
        And => alu::and(cpu),
        Ora => alu::ora(cpu),
        Eor => alu::eor(cpu),
        Cmp => alu::cmp(cpu),
        Cpx => alu::cpx(cpu),
        Cpy => alu::cpy(cpu),
        Bit => alu::bit(cpu),

        Bcc => branches::branch(cpu, Status::CARRY, false),
        Bcs => branches::branch(cpu, Status::CARRY, true),
        Bne => branches::branch(cpu, Status::ZERO, false),
        Beq => branches::branch(cpu, Status::ZERO, true),
        Bpl => branches::branch(cpu, Status::NEGATIVE, false),
        Bmi => branches::branch(cpu, Status::NEGATIVE, true),
        Bvc => branches::branch(cpu, Status::OVERFLOW, false),
        Bvs => branches::branch(cpu, Status::OVERFLOW, true),

        Asl => shifts::asl(cpu),
        Lsr => shifts::lsr(cpu),
        Rol => shifts::rol(cpu),
        Ror => shifts::ror(cpu),

        Lda => load_store::lda(cpu),
        Ldx => load_store::ldx(cpu),
        Ldy => load_store::ldy(cpu),
        Sta => load_store::sta(cpu),
        Stx => load_store::stx(cpu),
        Sty => load_store::sty(cpu),

        Inc => inc_dec::inc(cpu),
        Dec => inc_dec::dec(cpu),
        Inx => inc_dec::inx(cpu),
        Iny => inc_dec::iny(cpu),
        Dex => inc_dec::dex(cpu),
        Dey => inc_dec::dey(cpu),

        Jmp => control::jmp(cpu),
        Jsr => control::jsr(cpu),
        Rts => control::rts(cpu),
        Rti => control::rti(cpu),
        Brk => control::brk(cpu),
        Nop => control::nop(cpu),
        Xxx => control::placeholder(cpu),

        Pha => stack::pha(cpu),
        Php => stack::php(cpu),
        Pla => stack::pla(cpu),
        Plp => stack::plp(cpu),

        Clc => flags::update(cpu, Status::CARRY, false),
        Sec => flags::update(cpu, Status::CARRY, true),
        Cli => flags::update(cpu, Status::INTERRUPT_DISABLE, false),
        Sei => flags::update(cpu, Status::INTERRUPT_DISABLE, true),
        Cld => flags::update(cpu, Status::DECIMAL_MODE, false),
        Sed => flags::update(cpu, Status::DECIMAL_MODE, true),
        Clv => flags::update(cpu, Status::OVERFLOW, false),

        Tax => transfer::tax(cpu),
        Tay => transfer::tay(cpu),
        Txa => transfer::txa(cpu),
        Tya => transfer::tya(cpu),
        Tsx => transfer::tsx(cpu),
        Txs => transfer::txs(cpu),
    }
}
