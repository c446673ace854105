//! WebAssembly bindings for the cpu6502 emulator.
//!
//! This module provides JavaScript-callable interfaces for driving the CPU one
//! cycle or one instruction at a time and for inspecting registers, memory and
//! disassembly from a browser front end.

pub mod api;

pub use api::Emulator6502;
