//! Instruction decoder for the 6502 disassembler

use crate::disassembler::Instruction;
use crate::opcodes::lookup;
use crate::Bus;

/// Decode the instruction at `address`.
///
/// Every opcode decodes (placeholders come back as `???`). Operand bytes are
/// peeked, wrapping past 0xFFFF.
pub fn decode_instruction<B: Bus + ?Sized>(bus: &B, address: u16) -> Instruction {
    let opcode = bus.read(address, true);
    let metadata = lookup(opcode);

    let operand_bytes = (1..metadata.size_bytes() as u16)
        .map(|offset| bus.read(address.wrapping_add(offset), true))
        .collect();

    Instruction {
        address,
        opcode,
        mnemonic: metadata.mnemonic,
        addressing_mode: metadata.addressing_mode,
        operand_bytes,
        size_bytes: metadata.size_bytes(),
        base_cycles: metadata.base_cycles,
    }
}
