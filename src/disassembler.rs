//! 6502 Disassembler Module
//!
//! Converts a range of bus memory into human-readable assembly, decoding through the
//! same `OPCODE_TABLE` the CPU executes from. All reads are peeks; neither the bus
//! nor any CPU state is touched.

pub mod decoder;
pub mod formatter;

use std::collections::BTreeMap;

use crate::addressing::AddressingMode;
use crate::Bus;

/// A single decoded instruction with full metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    /// Memory address where this instruction starts
    pub address: u16,

    /// The opcode byte value (0x00-0xFF)
    pub opcode: u8,

    /// Instruction mnemonic (e.g., "LDA", "STA", "???")
    pub mnemonic: &'static str,

    /// Addressing mode used by this instruction
    pub addressing_mode: AddressingMode,

    /// Operand bytes (0-2 bytes depending on addressing mode)
    pub operand_bytes: Vec<u8>,

    /// Total size in bytes (1-3 bytes: opcode + operands)
    pub size_bytes: u8,

    /// Base cycle cost (excluding page-crossing penalties)
    pub base_cycles: u8,
}

/// Disassembles every instruction starting in `start..=end`.
///
/// Returns one line per instruction start address, keyed by that address. The last
/// instruction may read operand bytes past `end`. An empty map is returned when
/// `start > end`.
///
/// # Examples
///
/// ```
/// use cpu6502::{disassemble, FlatMemory};
///
/// let mut mem = FlatMemory::new();
/// mem.load(0x8000, &[0xA2, 0x0A, 0x8E, 0x00, 0x00, 0xD0, 0xFA]).unwrap();
///
/// let lines = disassemble(&mem, 0x8000, 0x8006);
/// assert_eq!(lines.len(), 3);
/// assert_eq!(lines[&0x8000], "$8000: LDX #$0A {IMM}");
/// assert_eq!(lines[&0x8002], "$8002: STX $0000 {ABS}");
/// assert_eq!(lines[&0x8005], "$8005: BNE $FA [$8001] {REL}");
/// ```
pub fn disassemble<B: Bus + ?Sized>(bus: &B, start: u16, end: u16) -> BTreeMap<u16, String> {
    decode_range(bus, start, end)
        .map(|instr| (instr.address, formatter::format_instruction(&instr)))
        .collect()
}

/// Decodes every instruction starting in `start..=end`, in address order.
pub fn decode_range<B: Bus + ?Sized>(
    bus: &B,
    start: u16,
    end: u16,
) -> impl Iterator<Item = Instruction> + '_ {
    // u32 so a walk that reaches 0xFFFF terminates instead of wrapping
    let mut cursor = start as u32;
    let stop = end as u32;

    std::iter::from_fn(move || {
        if cursor > stop {
            return None;
        }
        let instr = decoder::decode_instruction(bus, cursor as u16);
        cursor += instr.size_bytes as u32;
        Some(instr)
    })
}
