//! Fuzz target for CPU execution.
//!
//! Builds an arbitrary register file and memory neighbourhood, then clocks a
//! few instructions and raises interrupts looking for panics or broken
//! invariants.

#![no_main]

use arbitrary::Arbitrary;
use cpu6502::{Bus, CpuOptions, FlatMemory, Status, CPU};
use libfuzzer_sys::fuzz_target;

/// Arbitrary CPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    /// Raw status byte, applied flag by flag
    status: u8,
    nmos: bool,
    indirect_page_wrap: bool,
}

/// Memory regions for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Instruction stream at 0x8000
    program: [u8; 16],
    zero_page: [u8; 256],
    stack_page: [u8; 256],
    /// Data page at 0x4000 for absolute addressing
    main_memory: [u8; 256],
}

/// What to do between instructions
#[derive(Debug, Arbitrary)]
enum Event {
    Step,
    Clock,
    Irq,
    Nmi,
    Reset,
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
    events: Vec<Event>,
}

fuzz_target!(|input: FuzzInput| {
    if input.events.len() > 64 {
        return;
    }

    let mut memory = FlatMemory::new();
    memory.set_vector(0xFFFC, 0x8000);
    memory.set_vector(0xFFFE, 0x9000);
    memory.set_vector(0xFFFA, 0xA000);

    // Layout is fixed and in range
    let _ = memory.load(0x8000, &input.memory.program);
    let _ = memory.load(0x0000, &input.memory.zero_page);
    let _ = memory.load(0x0100, &input.memory.stack_page);
    let _ = memory.load(0x4000, &input.memory.main_memory);

    let options = CpuOptions {
        indirect_page_wrap: input.cpu_state.indirect_page_wrap,
        ..if input.cpu_state.nmos {
            CpuOptions::nmos()
        } else {
            CpuOptions::default()
        }
    };
    let mut cpu = CPU::with_options(memory, options);

    cpu.set_a(input.cpu_state.a);
    cpu.set_x(input.cpu_state.x);
    cpu.set_y(input.cpu_state.y);
    cpu.set_sp(input.cpu_state.sp);
    for flag in Status::all().iter() {
        cpu.set_flag(flag, input.cpu_state.status & flag.bits() != 0);
    }

    for event in &input.events {
        let before = cpu.cycles();
        match event {
            Event::Step => {
                let taken = cpu.step();
                assert!((2..=8).contains(&taken), "instruction took {} cycles", taken);
                assert!(cpu.complete());
            }
            Event::Clock => {
                cpu.clock();
                assert_eq!(cpu.cycles(), before + 1);
            }
            Event::Irq => {
                if !cpu.complete() {
                    continue;
                }
                let masked = cpu.get_flag(Status::INTERRUPT_DISABLE) == 1;
                let sp = cpu.sp();
                let handler = cpu.bus().peek_word(0xFFFE);
                cpu.irq();
                if masked {
                    assert_eq!(cpu.sp(), sp);
                    assert!(cpu.complete());
                } else {
                    assert_eq!(cpu.sp(), sp.wrapping_sub(3));
                    assert_eq!(cpu.pc(), handler);
                }
            }
            Event::Nmi => {
                if !cpu.complete() {
                    continue;
                }
                cpu.nmi();
                assert_eq!(cpu.get_flag(Status::INTERRUPT_DISABLE), 1);
                assert_eq!(cpu.cycles_remaining(), 8);
            }
            Event::Reset => {
                cpu.reset();
                assert_eq!(cpu.sp(), 0xFD);
                assert_eq!(cpu.pc(), cpu.bus().peek_word(0xFFFC));
            }
        }
    }
});
