//! Tests for INC, DEC and the register increment/decrement instructions.

use cpu6502::{Bus, FlatMemory, Status, CPU};

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
fn test_inc_zero_page() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0xE6, 0x10]); // INC $10
    cpu.bus_mut().write(0x0010, 0x7F);

    assert_eq!(cpu.step(), 5);
    assert_eq!(cpu.bus().read(0x0010, true), 0x80);
    assert_eq!(cpu.get_flag(Status::NEGATIVE), 1);
}

#[test]
fn test_inc_wraps_to_zero() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0xEE, 0x00, 0x30]); // INC $3000
    cpu.bus_mut().write(0x3000, 0xFF);

    assert_eq!(cpu.step(), 6);
    assert_eq!(cpu.bus().read(0x3000, true), 0x00);
    assert_eq!(cpu.get_flag(Status::ZERO), 1);
}

#[test]
fn test_inc_absolute_x_fixed_cost_across_pages() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0xFE, 0xFF, 0x30]); // INC $30FF,X
    cpu.set_x(0x01);

    assert_eq!(cpu.step(), 7);
    assert_eq!(cpu.bus().read(0x3100, true), 0x01);
}

#[test]
fn test_dec_wraps_to_ff() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0xC6, 0x10]); // DEC $10

    assert_eq!(cpu.step(), 5);
    assert_eq!(cpu.bus().read(0x0010, true), 0xFF);
    assert_eq!(cpu.get_flag(Status::NEGATIVE), 1);
    assert_eq!(cpu.get_flag(Status::ZERO), 0);
}

#[test]
fn test_dec_zero_page_x() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0xD6, 0x10]); // DEC $10,X
    cpu.bus_mut().write(0x0015, 0x01);
    cpu.set_x(0x05);

    assert_eq!(cpu.step(), 6);
    assert_eq!(cpu.bus().read(0x0015, true), 0x00);
    assert_eq!(cpu.get_flag(Status::ZERO), 1);
}

#[test]
fn test_inx_wraps() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0xE8]); // INX
    cpu.set_x(0xFF);

    assert_eq!(cpu.step(), 2);
    assert_eq!(cpu.x(), 0x00);
    assert_eq!(cpu.get_flag(Status::ZERO), 1);
}

#[test]
fn test_iny() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0xC8]); // INY
    cpu.set_y(0x7F);

    cpu.step();

    assert_eq!(cpu.y(), 0x80);
    assert_eq!(cpu.get_flag(Status::NEGATIVE), 1);
}

#[test]
fn test_dex_and_dey_wrap() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0xCA, 0x88]); // DEX; DEY

    cpu.step();
    cpu.step();

    assert_eq!(cpu.x(), 0xFF);
    assert_eq!(cpu.y(), 0xFF);
    assert_eq!(cpu.get_flag(Status::NEGATIVE), 1);
}

#[test]
fn test_inc_does_not_touch_accumulator() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0xE6, 0x10]);
    cpu.set_a(0x33);

    cpu.step();

    assert_eq!(cpu.a(), 0x33);
}
