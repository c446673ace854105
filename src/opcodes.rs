//! # Opcode Metadata Table
//!
//! This module contains the complete 256-entry opcode table that both the CPU and
//! the disassembler decode through.
//!
//! The table covers:
//! - **151 documented instructions** - Official NMOS 6502 opcodes
//! - **Undocumented NOPs and `0xEB`** - Given their real addressing modes so PC
//!   skips their operands
//! - **Everything else** - A `???` placeholder that does nothing but burn cycles
//!
//! Dispatch is by tag: each entry names its `AddressingMode` and `Operation`, and
//! the CPU matches on them. Nothing is looked up by name.

use crate::addressing::AddressingMode;

/// The operation an opcode performs, independent of its addressing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Adc,
    And,
    Asl,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Brk,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Jmp,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    Nop,
    Ora,
    Pha,
    Php,
    Pla,
    Plp,
    Rol,
    Ror,
    Rti,
    Rts,
    Sbc,
    Sec,
    Sed,
    Sei,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,
    /// Placeholder for unassigned opcodes: no effect beyond its cycle cost.
    Xxx,
}

/// Metadata for a single 6502 opcode.
///
/// # Examples
///
/// ```
/// use cpu6502::{AddressingMode, Operation, OPCODE_TABLE};
///
/// let lda_imm = &OPCODE_TABLE[0xA9];
/// assert_eq!(lda_imm.mnemonic, "LDA");
/// assert_eq!(lda_imm.operation, Operation::Lda);
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.base_cycles, 2);
/// assert_eq!(lda_imm.size_bytes(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Instruction mnemonic ("???" for placeholders).
    pub mnemonic: &'static str,

    /// Addressing mode for this instruction.
    pub addressing_mode: AddressingMode,

    /// What the instruction does.
    pub operation: Operation,

    /// Base cycle cost (before page crossing and branch penalties).
    pub base_cycles: u8,
}

impl OpcodeMetadata {
    /// Total instruction size in bytes, opcode included.
    pub const fn size_bytes(&self) -> u8 {
        1 + self.addressing_mode.operand_len()
    }

    /// True for `???` placeholder entries.
    pub const fn is_placeholder(&self) -> bool {
        matches!(self.operation, Operation::Xxx)
    }
}

const fn op(
    mnemonic: &'static str,
    operation: Operation,
    addressing_mode: AddressingMode,
    base_cycles: u8,
) -> OpcodeMetadata {
    OpcodeMetadata {
        mnemonic,
        addressing_mode,
        operation,
        base_cycles,
    }
}

const fn xxx(base_cycles: u8) -> OpcodeMetadata {
    op("???", Operation::Xxx, AddressingMode::Implied, base_cycles)
}

use AddressingMode::{
    Absolute as ABS, AbsoluteX as ABX, AbsoluteY as ABY, Immediate as IMM, Implied as IMP,
    Indirect as IND, IndirectX as IZX, IndirectY as IZY, Relative as REL, ZeroPage as ZP0,
    ZeroPageX as ZPX, ZeroPageY as ZPY,
};
use Operation::*;

/// Complete 256-entry opcode table indexed by opcode byte value.
///
/// Rows are the high nibble, columns the low nibble. Placeholder entries carry the
/// cycle cost the undocumented opcode takes on hardware.
///
/// # Examples
///
/// ```
/// use cpu6502::{Operation, OPCODE_TABLE};
///
/// let brk = &OPCODE_TABLE[0x00];
/// assert_eq!(brk.mnemonic, "BRK");
/// assert_eq!(brk.base_cycles, 7);
///
/// let illegal = &OPCODE_TABLE[0x02];
/// assert_eq!(illegal.mnemonic, "???");
/// assert_eq!(illegal.operation, Operation::Xxx);
/// ```
#[rustfmt::skip]
pub const OPCODE_TABLE: [OpcodeMetadata; 256] = [
    // 0x00
    op("BRK", Brk, IMP, 7), op("ORA", Ora, IZX, 6), xxx(2),                 xxx(8),
    op("NOP", Nop, ZP0, 3), op("ORA", Ora, ZP0, 3), op("ASL", Asl, ZP0, 5), xxx(5),
    op("PHP", Php, IMP, 3), op("ORA", Ora, IMM, 2), op("ASL", Asl, IMP, 2), xxx(2),
    op("NOP", Nop, ABS, 4), op("ORA", Ora, ABS, 4), op("ASL", Asl, ABS, 6), xxx(6),
    // 0x10
    op("BPL", Bpl, REL, 2), op("ORA", Ora, IZY, 5), xxx(2),                 xxx(8),
    op("NOP", Nop, ZPX, 4), op("ORA", Ora, ZPX, 4), op("ASL", Asl, ZPX, 6), xxx(6),
    op("CLC", Clc, IMP, 2), op("ORA", Ora, ABY, 4), op("NOP", Nop, IMP, 2), xxx(7),
    op("NOP", Nop, ABX, 4), op("ORA", Ora, ABX, 4), op("ASL", Asl, ABX, 7), xxx(7),
    // 0x20
    op("JSR", Jsr, ABS, 6), op("AND", And, IZX, 6), xxx(2),                 xxx(8),
    op("BIT", Bit, ZP0, 3), op("AND", And, ZP0, 3), op("ROL", Rol, ZP0, 5), xxx(5),
    op("PLP", Plp, IMP, 4), op("AND", And, IMM, 2), op("ROL", Rol, IMP, 2), xxx(2),
    op("BIT", Bit, ABS, 4), op("AND", And, ABS, 4), op("ROL", Rol, ABS, 6), xxx(6),
    // 0x30
    op("BMI", Bmi, REL, 2), op("AND", And, IZY, 5), xxx(2),                 xxx(8),
    op("NOP", Nop, ZPX, 4), op("AND", And, ZPX, 4), op("ROL", Rol, ZPX, 6), xxx(6),
    op("SEC", Sec, IMP, 2), op("AND", And, ABY, 4), op("NOP", Nop, IMP, 2), xxx(7),
    op("NOP", Nop, ABX, 4), op("AND", And, ABX, 4), op("ROL", Rol, ABX, 7), xxx(7),
    // 0x40
    op("RTI", Rti, IMP, 6), op("EOR", Eor, IZX, 6), xxx(2),                 xxx(8),
    op("NOP", Nop, ZP0, 3), op("EOR", Eor, ZP0, 3), op("LSR", Lsr, ZP0, 5), xxx(5),
    op("PHA", Pha, IMP, 3), op("EOR", Eor, IMM, 2), op("LSR", Lsr, IMP, 2), xxx(2),
    op("JMP", Jmp, ABS, 3), op("EOR", Eor, ABS, 4), op("LSR", Lsr, ABS, 6), xxx(6),
    // 0x50
    op("BVC", Bvc, REL, 2), op("EOR", Eor, IZY, 5), xxx(2),                 xxx(8),
    op("NOP", Nop, ZPX, 4), op("EOR", Eor, ZPX, 4), op("LSR", Lsr, ZPX, 6), xxx(6),
    op("CLI", Cli, IMP, 2), op("EOR", Eor, ABY, 4), op("NOP", Nop, IMP, 2), xxx(7),
    op("NOP", Nop, ABX, 4), op("EOR", Eor, ABX, 4), op("LSR", Lsr, ABX, 7), xxx(7),
    // 0x60
    op("RTS", Rts, IMP, 6), op("ADC", Adc, IZX, 6), xxx(2),                 xxx(8),
    op("NOP", Nop, ZP0, 3), op("ADC", Adc, ZP0, 3), op("ROR", Ror, ZP0, 5), xxx(5),
    op("PLA", Pla, IMP, 4), op("ADC", Adc, IMM, 2), op("ROR", Ror, IMP, 2), xxx(2),
    op("JMP", Jmp, IND, 5), op("ADC", Adc, ABS, 4), op("ROR", Ror, ABS, 6), xxx(6),
    // 0x70
    op("BVS", Bvs, REL, 2), op("ADC", Adc, IZY, 5), xxx(2),                 xxx(8),
    op("NOP", Nop, ZPX, 4), op("ADC", Adc, ZPX, 4), op("ROR", Ror, ZPX, 6), xxx(6),
    op("SEI", Sei, IMP, 2), op("ADC", Adc, ABY, 4), op("NOP", Nop, IMP, 2), xxx(7),
    op("NOP", Nop, ABX, 4), op("ADC", Adc, ABX, 4), op("ROR", Ror, ABX, 7), xxx(7),
    // 0x80
    op("NOP", Nop, IMM, 2), op("STA", Sta, IZX, 6), op("NOP", Nop, IMM, 2), xxx(6),
    op("STY", Sty, ZP0, 3), op("STA", Sta, ZP0, 3), op("STX", Stx, ZP0, 3), xxx(3),
    op("DEY", Dey, IMP, 2), op("NOP", Nop, IMM, 2), op("TXA", Txa, IMP, 2), xxx(2),
    op("STY", Sty, ABS, 4), op("STA", Sta, ABS, 4), op("STX", Stx, ABS, 4), xxx(4),
    // 0x90
    op("BCC", Bcc, REL, 2), op("STA", Sta, IZY, 6), xxx(2),                 xxx(6),
    op("STY", Sty, ZPX, 4), op("STA", Sta, ZPX, 4), op("STX", Stx, ZPY, 4), xxx(4),
    op("TYA", Tya, IMP, 2), op("STA", Sta, ABY, 5), op("TXS", Txs, IMP, 2), xxx(5),
    xxx(5),                 op("STA", Sta, ABX, 5), xxx(5),                 xxx(5),
    // 0xA0
    op("LDY", Ldy, IMM, 2), op("LDA", Lda, IZX, 6), op("LDX", Ldx, IMM, 2), xxx(6),
    op("LDY", Ldy, ZP0, 3), op("LDA", Lda, ZP0, 3), op("LDX", Ldx, ZP0, 3), xxx(3),
    op("TAY", Tay, IMP, 2), op("LDA", Lda, IMM, 2), op("TAX", Tax, IMP, 2), xxx(2),
    op("LDY", Ldy, ABS, 4), op("LDA", Lda, ABS, 4), op("LDX", Ldx, ABS, 4), xxx(4),
    // 0xB0
    op("BCS", Bcs, REL, 2), op("LDA", Lda, IZY, 5), xxx(2),                 xxx(5),
    op("LDY", Ldy, ZPX, 4), op("LDA", Lda, ZPX, 4), op("LDX", Ldx, ZPY, 4), xxx(4),
    op("CLV", Clv, IMP, 2), op("LDA", Lda, ABY, 4), op("TSX", Tsx, IMP, 2), xxx(4),
    op("LDY", Ldy, ABX, 4), op("LDA", Lda, ABX, 4), op("LDX", Ldx, ABY, 4), xxx(4),
    // 0xC0
    op("CPY", Cpy, IMM, 2), op("CMP", Cmp, IZX, 6), op("NOP", Nop, IMM, 2), xxx(8),
    op("CPY", Cpy, ZP0, 3), op("CMP", Cmp, ZP0, 3), op("DEC", Dec, ZP0, 5), xxx(5),
    op("INY", Iny, IMP, 2), op("CMP", Cmp, IMM, 2), op("DEX", Dex, IMP, 2), xxx(2),
    op("CPY", Cpy, ABS, 4), op("CMP", Cmp, ABS, 4), op("DEC", Dec, ABS, 6), xxx(6),
    // 0xD0
    op("BNE", Bne, REL, 2), op("CMP", Cmp, IZY, 5), xxx(2),                 xxx(8),
    op("NOP", Nop, ZPX, 4), op("CMP", Cmp, ZPX, 4), op("DEC", Dec, ZPX, 6), xxx(6),
    op("CLD", Cld, IMP, 2), op("CMP", Cmp, ABY, 4), op("NOP", Nop, IMP, 2), xxx(7),
    op("NOP", Nop, ABX, 4), op("CMP", Cmp, ABX, 4), op("DEC", Dec, ABX, 7), xxx(7),
    // 0xE0
    op("CPX", Cpx, IMM, 2), op("SBC", Sbc, IZX, 6), op("NOP", Nop, IMM, 2), xxx(8),
    op("CPX", Cpx, ZP0, 3), op("SBC", Sbc, ZP0, 3), op("INC", Inc, ZP0, 5), xxx(5),
    op("INX", Inx, IMP, 2), op("SBC", Sbc, IMM, 2), op("NOP", Nop, IMP, 2), op("SBC", Sbc, IMM, 2),
    op("CPX", Cpx, ABS, 4), op("SBC", Sbc, ABS, 4), op("INC", Inc, ABS, 6), xxx(6),
    // 0xF0
    op("BEQ", Beq, REL, 2), op("SBC", Sbc, IZY, 5), xxx(2),                 xxx(8),
    op("NOP", Nop, ZPX, 4), op("SBC", Sbc, ZPX, 4), op("INC", Inc, ZPX, 6), xxx(6),
    op("SED", Sed, IMP, 2), op("SBC", Sbc, ABY, 4), op("NOP", Nop, IMP, 2), xxx(7),
    op("NOP", Nop, ABX, 4), op("SBC", Sbc, ABX, 4), op("INC", Inc, ABX, 7), xxx(7),
];

/// Looks up the table entry for `opcode`.
#[inline]
pub fn lookup(opcode: u8) -> &'static OpcodeMetadata {
    &OPCODE_TABLE[opcode as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_opcode_count() {
        // 151 documented + 27 undocumented NOPs + the 0xEB SBC alias
        let assigned = OPCODE_TABLE.iter().filter(|m| !m.is_placeholder()).count();
        assert_eq!(assigned, 151 + 27 + 1);
    }

    #[test]
    fn test_spot_check_entries() {
        assert_eq!(lookup(0x6C).addressing_mode, AddressingMode::Indirect);
        assert_eq!(lookup(0x6C).base_cycles, 5);
        assert_eq!(lookup(0x20).operation, Operation::Jsr);
        assert_eq!(lookup(0x20).size_bytes(), 3);
        assert_eq!(lookup(0x96).addressing_mode, AddressingMode::ZeroPageY);
        assert_eq!(lookup(0xBE).addressing_mode, AddressingMode::AbsoluteY);
        assert_eq!(lookup(0x9D).base_cycles, 5);
        assert_eq!(lookup(0xEA).mnemonic, "NOP");
    }

    #[test]
    fn test_accumulator_shifts_are_implied() {
        for opcode in [0x0A, 0x2A, 0x4A, 0x6A] {
            assert_eq!(lookup(opcode).addressing_mode, AddressingMode::Implied);
            assert_eq!(lookup(opcode).size_bytes(), 1);
        }
    }

    #[test]
    fn test_placeholders_are_single_byte() {
        for meta in OPCODE_TABLE.iter().filter(|m| m.is_placeholder()) {
            assert_eq!(meta.mnemonic, "???");
            assert_eq!(meta.size_bytes(), 1);
            assert!(meta.base_cycles >= 2);
        }
    }
}
