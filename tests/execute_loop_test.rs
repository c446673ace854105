//! End-to-end test: a small multiply-by-addition loop run to completion.
//!
//! ```text
//! $8000  LDX #$0A      ; 10
//! $8002  STX $0000
//! $8005  LDX #$03      ; 3
//! $8007  STX $0001
//! $800A  LDY $0000     ; loop counter
//! $800D  LDA #$00
//! $800F  CLC
//! $8010  ADC $0001
//! $8013  DEY
//! $8014  BNE $8010
//! $8016  STA $0002     ; 10 * 3
//! $8019  NOP
//! $801A  NOP
//! $801B  NOP
//! ```

use cpu6502::{Bus, FlatMemory, CPU};

const PROGRAM: [u8; 28] = [
    0xA2, 0x0A, 0x8E, 0x00, 0x00, 0xA2, 0x03, 0x8E, 0x01, 0x00, 0xAC, 0x00, 0x00, 0xA9, 0x00,
    0x18, 0x6D, 0x01, 0x00, 0x88, 0xD0, 0xFA, 0x8D, 0x02, 0x00, 0xEA, 0xEA, 0xEA,
];

fn program_memory() -> FlatMemory {
    let mut memory = FlatMemory::new();
    memory.load(0x8000, &PROGRAM).unwrap();
    memory.set_vector(0xFFFC, 0x8000);
    memory
}

fn run_to_nops<B: Bus>(cpu: &mut CPU<B>) -> usize {
    let mut instructions = 0;
    while cpu.pc() != 0x8019 {
        cpu.step();
        instructions += 1;
        assert!(instructions < 1000, "runaway program at ${:04X}", cpu.pc());
    }
    instructions
}

#[test]
fn test_multiply_loop_owned_bus() {
    let mut cpu = CPU::new(program_memory());

    let instructions = run_to_nops(&mut cpu);

    assert_eq!(cpu.bus().read(0x0002, true), 30);
    assert_eq!(cpu.bus().read(0x0000, true), 10);
    assert_eq!(cpu.bus().read(0x0001, true), 3);
    assert_eq!(cpu.a(), 30);
    assert_eq!(cpu.x(), 3);
    assert_eq!(cpu.y(), 0);
    // 7 setup instructions, 10 passes of ADC/DEY/BNE, then STA
    assert_eq!(instructions, 7 + 30 + 1);
}

#[test]
fn test_multiply_loop_borrowed_bus() {
    let mut memory = program_memory();

    {
        let mut cpu = CPU::new(&mut memory);
        run_to_nops(&mut cpu);
    }

    assert_eq!(memory.read(0x0002, true), 0x1E);
}

#[test]
fn test_multiply_loop_cycle_total() {
    let mut cpu = CPU::new(program_memory());
    run_to_nops(&mut cpu);

    // setup: 2+4+2+4+4+2+2, loop: 10 * (4+2) + 9 taken BNE (3) + 1 untaken (2), STA 4
    let expected = 8 + 20 + 60 + 27 + 2 + 4;
    assert_eq!(cpu.cycles(), expected);
}

#[test]
fn test_disassemble_program() {
    let cpu = CPU::new(program_memory());

    let lines = cpu.disassemble(0x8000, 0x801B);

    assert_eq!(lines.len(), 14);
    assert_eq!(lines[&0x8000], "$8000: LDX #$0A {IMM}");
    assert_eq!(lines[&0x8002], "$8002: STX $0000 {ABS}");
    assert_eq!(lines[&0x800A], "$800A: LDY $0000 {ABS}");
    assert_eq!(lines[&0x800F], "$800F: CLC {IMP}");
    assert_eq!(lines[&0x8010], "$8010: ADC $0001 {ABS}");
    assert_eq!(lines[&0x8013], "$8013: DEY {IMP}");
    assert_eq!(lines[&0x8014], "$8014: BNE $FA [$8010] {REL}");
    assert_eq!(lines[&0x8016], "$8016: STA $0002 {ABS}");
    assert_eq!(lines[&0x801B], "$801B: NOP {IMP}");
}
