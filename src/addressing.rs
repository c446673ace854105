//! # Addressing Modes
//!
//! This module defines the 12 addressing modes supported by the 6502 processor and
//! the resolvers that turn operand bytes into an effective address.
//!
//! Each resolver runs at an instruction boundary, right after the opcode fetch, and
//! leaves either `fetched` (Implied) or `addr_abs` / `addr_rel` ready for the
//! operation. It returns `true` when it *may* cost an extra cycle; the CPU only
//! charges that cycle if the operation asks for it too.

use crate::{Bus, CPU};

/// 6502 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implied (including accumulator forms such as `ASL A`)
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// No operand bytes. The operand, if any, is the accumulator.
    ///
    /// Examples: CLC, RTS, NOP, LSR A
    Implied,

    /// 8-bit constant following the opcode.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80
    ZeroPage,

    /// Zero page address indexed by X, wrapping within zero page.
    ///
    /// Example: LDA $80,X
    ZeroPageX,

    /// Zero page address indexed by Y, wrapping within zero page.
    ///
    /// Example: LDX $80,Y
    ZeroPageY,

    /// Signed 8-bit offset for branch instructions.
    ///
    /// Example: BNE label
    Relative,

    /// Full 16-bit address.
    ///
    /// Example: JMP $1234
    Absolute,

    /// 16-bit address indexed by X. May cost +1 cycle on a page cross.
    ///
    /// Example: LDA $1234,X
    AbsoluteX,

    /// 16-bit address indexed by Y. May cost +1 cycle on a page cross.
    ///
    /// Example: LDA $1234,Y
    AbsoluteY,

    /// Jump through a 16-bit pointer. Only used by JMP.
    ///
    /// Example: JMP ($FFFC)
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference, all within zero page.
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y. May cost +1 cycle on a page cross.
    ///
    /// Example: LDA ($40),Y
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode.
    pub const fn operand_len(self) -> u8 {
        use AddressingMode::*;
        match self {
            Implied => 0,
            Immediate | ZeroPage | ZeroPageX | ZeroPageY | Relative | IndirectX | IndirectY => 1,
            Absolute | AbsoluteX | AbsoluteY | Indirect => 2,
        }
    }

    /// Short tag the disassembler appends to each line, e.g. `ABX`.
    pub const fn tag(self) -> &'static str {
        use AddressingMode::*;
        match self {
            Implied => "IMP",
            Immediate => "IMM",
            ZeroPage => "ZP0",
            ZeroPageX => "ZPX",
            ZeroPageY => "ZPY",
            Relative => "REL",
            Absolute => "ABS",
            AbsoluteX => "ABX",
            AbsoluteY => "ABY",
            Indirect => "IND",
            IndirectX => "IZX",
            IndirectY => "IZY",
        }
    }
}

/// True when `base` and `effective` sit in different 256-byte pages.
#[inline]
pub(crate) fn crosses_page(base: u16, effective: u16) -> bool {
    (base & 0xFF00) != (effective & 0xFF00)
}

impl<B: Bus> CPU<B> {
    /// Reads the byte at PC and advances PC.
    fn fetch_operand_byte(&mut self) -> u8 {
        let value = self.bus.read(self.pc, false);
        self.pc = self.pc.wrapping_add(1);
        value
    }

    /// Reads the little-endian word at PC and advances PC past it.
    fn fetch_operand_word(&mut self) -> u16 {
        let lo = self.fetch_operand_byte();
        let hi = self.fetch_operand_byte();
        u16::from_le_bytes([lo, hi])
    }

    /// Reads a pointer held in zero page, wrapping the high byte's address within page 0.
    fn read_zero_page_word(&self, ptr: u8) -> u16 {
        let lo = self.bus.read(ptr as u16, false);
        let hi = self.bus.read(ptr.wrapping_add(1) as u16, false);
        u16::from_le_bytes([lo, hi])
    }

    /// Resolves the operand location for `mode`.
    ///
    /// Returns whether the mode may contribute an extra cycle.
    pub(crate) fn resolve(&mut self, mode: AddressingMode) -> bool {
        match mode {
            AddressingMode::Implied => {
                self.fetched = self.a;
                false
            }
            AddressingMode::Immediate => {
                self.addr_abs = self.pc;
                self.pc = self.pc.wrapping_add(1);
                false
            }
            AddressingMode::ZeroPage => {
                self.addr_abs = self.fetch_operand_byte() as u16;
                false
            }
            AddressingMode::ZeroPageX => {
                self.addr_abs = self.fetch_operand_byte().wrapping_add(self.x) as u16;
                false
            }
            AddressingMode::ZeroPageY => {
                self.addr_abs = self.fetch_operand_byte().wrapping_add(self.y) as u16;
                false
            }
            AddressingMode::Relative => {
                // Sign-extend from bit 7
                self.addr_rel = self.fetch_operand_byte() as i8 as u16;
                false
            }
            AddressingMode::Absolute => {
                self.addr_abs = self.fetch_operand_word();
                false
            }
            AddressingMode::AbsoluteX => {
                let base = self.fetch_operand_word();
                self.addr_abs = base.wrapping_add(self.x as u16);
                crosses_page(base, self.addr_abs)
            }
            AddressingMode::AbsoluteY => {
                let base = self.fetch_operand_word();
                self.addr_abs = base.wrapping_add(self.y as u16);
                crosses_page(base, self.addr_abs)
            }
            AddressingMode::Indirect => {
                let ptr = self.fetch_operand_word();
                // NMOS bug: a pointer at $xxFF takes its high byte from $xx00
                let hi_addr = if self.options.indirect_page_wrap && ptr & 0x00FF == 0x00FF {
                    ptr & 0xFF00
                } else {
                    ptr.wrapping_add(1)
                };
                let lo = self.bus.read(ptr, false);
                let hi = self.bus.read(hi_addr, false);
                self.addr_abs = u16::from_le_bytes([lo, hi]);
                false
            }
            AddressingMode::IndirectX => {
                let ptr = self.fetch_operand_byte().wrapping_add(self.x);
                self.addr_abs = self.read_zero_page_word(ptr);
                false
            }
            AddressingMode::IndirectY => {
                let ptr = self.fetch_operand_byte();
                let base = self.read_zero_page_word(ptr);
                self.addr_abs = base.wrapping_add(self.y as u16);
                crosses_page(base, self.addr_abs)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlatMemory;

    fn cpu_at(program: &[u8]) -> CPU<FlatMemory> {
        let mut mem = FlatMemory::new();
        mem.set_vector(0xFFFC, 0x8000);
        mem.load(0x8000, program).unwrap();
        CPU::new(mem)
    }

    #[test]
    fn test_operand_len_matches_tag_groups() {
        assert_eq!(AddressingMode::Implied.operand_len(), 0);
        assert_eq!(AddressingMode::Relative.operand_len(), 1);
        assert_eq!(AddressingMode::IndirectY.operand_len(), 1);
        assert_eq!(AddressingMode::Indirect.operand_len(), 2);
        assert_eq!(AddressingMode::AbsoluteY.operand_len(), 2);
    }

    #[test]
    fn test_implied_loads_accumulator_into_fetched() {
        let mut cpu = cpu_at(&[]);
        cpu.a = 0x5A;
        assert!(!cpu.resolve(AddressingMode::Implied));
        assert_eq!(cpu.fetched, 0x5A);
        assert_eq!(cpu.pc, 0x8000);
    }

    #[test]
    fn test_zero_page_x_wraps() {
        let mut cpu = cpu_at(&[0xF0]);
        cpu.x = 0x20;
        cpu.resolve(AddressingMode::ZeroPageX);
        assert_eq!(cpu.addr_abs, 0x0010);
        assert_eq!(cpu.pc, 0x8001);
    }

    #[test]
    fn test_absolute_x_page_cross_signal() {
        let mut cpu = cpu_at(&[0xFF, 0x20, 0x00, 0x20]);
        cpu.x = 0x01;
        assert!(cpu.resolve(AddressingMode::AbsoluteX));
        assert_eq!(cpu.addr_abs, 0x2100);

        assert!(!cpu.resolve(AddressingMode::AbsoluteX));
        assert_eq!(cpu.addr_abs, 0x2001);
        assert_eq!(cpu.pc, 0x8004);
    }

    #[test]
    fn test_relative_sign_extends_from_bit_7() {
        let mut cpu = cpu_at(&[0xFA, 0x7F]);
        cpu.resolve(AddressingMode::Relative);
        assert_eq!(cpu.addr_rel, 0xFFFA);
        cpu.resolve(AddressingMode::Relative);
        assert_eq!(cpu.addr_rel, 0x007F);
    }

    #[test]
    fn test_indirect_page_wrap_bug() {
        let mut cpu = cpu_at(&[0xFF, 0x30]);
        cpu.bus.write(0x30FF, 0x34);
        cpu.bus.write(0x3000, 0x12);
        cpu.bus.write(0x3100, 0x56);

        cpu.resolve(AddressingMode::Indirect);
        assert_eq!(cpu.addr_abs, 0x1234);

        cpu.pc = 0x8000;
        cpu.options.indirect_page_wrap = false;
        cpu.resolve(AddressingMode::Indirect);
        assert_eq!(cpu.addr_abs, 0x5634);
    }

    #[test]
    fn test_indirect_x_pointer_wraps_in_zero_page() {
        let mut cpu = cpu_at(&[0xFE]);
        cpu.x = 0x01;
        cpu.bus.write(0x00FF, 0x00);
        cpu.bus.write(0x0000, 0x40);
        cpu.resolve(AddressingMode::IndirectX);
        assert_eq!(cpu.addr_abs, 0x4000);
    }

    #[test]
    fn test_indirect_y_page_cross_signal() {
        let mut cpu = cpu_at(&[0x10]);
        cpu.bus.write(0x0010, 0xF0);
        cpu.bus.write(0x0011, 0x12);
        cpu.y = 0x20;
        assert!(cpu.resolve(AddressingMode::IndirectY));
        assert_eq!(cpu.addr_abs, 0x1310);
    }
}
