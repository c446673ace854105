//! Formatting functions for disassembled instructions

use crate::addressing::AddressingMode;
use crate::disassembler::Instruction;

/// Format a single instruction as a disassembly line.
///
/// The line is `$ADDR: MNEMONIC operand {TAG}`, where the tag names the addressing
/// mode. Relative branches show the raw offset and the resolved target.
pub fn format_instruction(instr: &Instruction) -> String {
    let operand = format_operand(instr);
    let tag = instr.addressing_mode.tag();

    if operand.is_empty() {
        format!("${:04X}: {} {{{}}}", instr.address, instr.mnemonic, tag)
    } else {
        format!(
            "${:04X}: {} {} {{{}}}",
            instr.address, instr.mnemonic, operand, tag
        )
    }
}

/// Format the operand based on addressing mode
fn format_operand(instr: &Instruction) -> String {
    use AddressingMode::*;

    let byte = instr.operand_bytes.first().copied().unwrap_or(0);
    let word = match instr.operand_bytes.as_slice() {
        [lo, hi, ..] => u16::from_le_bytes([*lo, *hi]),
        _ => byte as u16,
    };

    match instr.addressing_mode {
        Implied => String::new(),
        Immediate => format!("#${:02X}", byte),
        ZeroPage => format!("${:02X}", byte),
        ZeroPageX => format!("${:02X}, X", byte),
        ZeroPageY => format!("${:02X}, Y", byte),
        IndirectX => format!("(${:02X}, X)", byte),
        IndirectY => format!("(${:02X}), Y", byte),
        Absolute => format!("${:04X}", word),
        AbsoluteX => format!("${:04X}, X", word),
        AbsoluteY => format!("${:04X}, Y", word),
        Indirect => format!("(${:04X})", word),
        Relative => {
            let next = instr.address.wrapping_add(instr.size_bytes as u16);
            let target = next.wrapping_add(byte as i8 as u16);
            format!("${:02X} [${:04X}]", byte, target)
        }
    }
}
