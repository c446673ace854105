//! Fuzz target for the disassembler.
//!
//! Loads arbitrary bytes at an arbitrary address and disassembles an arbitrary
//! range, checking the walk stays consistent with the opcode table.

#![no_main]

use arbitrary::Arbitrary;
use cpu6502::disassembler::decode_range;
use cpu6502::{disassemble, FlatMemory, OPCODE_TABLE};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    load_address: u16,
    bytes: Vec<u8>,
    start: u16,
    end: u16,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();
    if memory.load(input.load_address, &input.bytes).is_err() {
        return;
    }
    let before = memory.clone();

    let lines = disassemble(&memory, input.start, input.end);

    if input.start > input.end {
        assert!(lines.is_empty());
        return;
    }

    // Same walk, structured
    let mut expected_address = input.start as u32;
    let mut count = 0;
    for instr in decode_range(&memory, input.start, input.end) {
        assert_eq!(instr.address as u32, expected_address);
        assert!(instr.address <= input.end);

        let meta = &OPCODE_TABLE[instr.opcode as usize];
        assert_eq!(instr.size_bytes, meta.size_bytes());
        assert_eq!(instr.operand_bytes.len() + 1, instr.size_bytes as usize);

        let line = &lines[&instr.address];
        assert!(line.starts_with(&format!("${:04X}: {}", instr.address, instr.mnemonic)));
        assert!(line.ends_with(&format!("{{{}}}", instr.addressing_mode.tag())));

        expected_address += instr.size_bytes as u32;
        count += 1;
    }

    assert_eq!(count, lines.len());
    assert_eq!(memory.as_slice(), before.as_slice());
});
