//! # 6502 CPU Stepper
//!
//! A deterministic emulator for the 8-bit 6502 microprocessor wired to a flat,
//! byte-addressable 64KB bus. The CPU advances one emulated clock cycle per call to
//! [`CPU::clock`], doing all of an instruction's work on the first cycle and then
//! counting down the cycles it owes.
//!
//! ## Quick Start
//!
//! ```rust
//! use cpu6502::{Bus, FlatMemory, CPU};
//!
//! let mut memory = FlatMemory::new();
//! memory.load(0x8000, &[0xA9, 0x42]).unwrap(); // LDA #$42
//! memory.set_vector(0xFFFC, 0x8000);
//!
//! // Construction runs reset(): PC comes from the reset vector
//! let mut cpu = CPU::new(memory);
//! assert_eq!(cpu.pc(), 0x8000);
//! assert_eq!(cpu.sp(), 0xFD);
//!
//! // step() drains the reset cycles, then runs one instruction
//! assert_eq!(cpu.step(), 2);
//! assert_eq!(cpu.a(), 0x42);
//! ```
//!
//! ## Modules
//!
//! - `bus` - `Bus` trait and the `FlatMemory` implementation
//! - `status` - Status register bitflags
//! - `addressing` - The twelve addressing modes and their resolvers
//! - `opcodes` - The 256-entry instruction table
//! - `cpu` - Registers, the clock state machine, reset and interrupts
//! - `disassembler` - Table-driven disassembly over a bus snapshot

pub mod addressing;
pub mod bus;
pub mod cpu;
pub mod disassembler;
pub mod opcodes;
pub mod status;

// Operation semantics, dispatched from the CPU only
mod instructions;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use addressing::AddressingMode;
pub use bus::{Bus, BusError, FlatMemory};
pub use cpu::{CpuOptions, CPU};
pub use disassembler::{disassemble, Instruction};
pub use opcodes::{OpcodeMetadata, Operation, OPCODE_TABLE};
pub use status::Status;
