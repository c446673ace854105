//! Tests for the register transfer instructions.

use cpu6502::{FlatMemory, Status, CPU};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.set_vector(0xFFFC, 0x8000);
    CPU::new(memory)
}

fn load(cpu: &mut CPU<FlatMemory>, program: &[u8]) {
    cpu.bus_mut().load(0x8000, program).unwrap();
}

#[test]
fn test_tax_and_tay() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0xAA, 0xA8]); // TAX; TAY
    cpu.set_a(0x80);

    assert_eq!(cpu.step(), 2);
    assert_eq!(cpu.x(), 0x80);
    assert_eq!(cpu.get_flag(Status::NEGATIVE), 1);

    assert_eq!(cpu.step(), 2);
    assert_eq!(cpu.y(), 0x80);
}

#[test]
fn test_txa_sets_zero() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0x8A]); // TXA
    cpu.set_a(0x55);

    cpu.step();

    assert_eq!(cpu.a(), 0x00);
    assert_eq!(cpu.get_flag(Status::ZERO), 1);
}

#[test]
fn test_tya() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0x98]); // TYA
    cpu.set_y(0x12);

    cpu.step();

    assert_eq!(cpu.a(), 0x12);
    assert_eq!(cpu.get_flag(Status::ZERO), 0);
    assert_eq!(cpu.get_flag(Status::NEGATIVE), 0);
}

#[test]
fn test_tsx_copies_stack_pointer_with_flags() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0xBA]); // TSX

    cpu.step();

    assert_eq!(cpu.x(), 0xFD);
    assert_eq!(cpu.get_flag(Status::NEGATIVE), 1);
}

#[test]
fn test_txs_leaves_flags_alone() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0x9A]); // TXS
    cpu.set_x(0x00);

    assert_eq!(cpu.step(), 2);
    assert_eq!(cpu.sp(), 0x00);
    assert_eq!(cpu.get_flag(Status::ZERO), 0);
    assert_eq!(cpu.status(), Status::UNUSED);
}
