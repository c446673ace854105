//! WASM API for the 6502 emulator.
//!
//! Provides JavaScript-callable interfaces for CPU control, state inspection and
//! disassembly. The host owns pacing and rendering; everything here is a
//! synchronous call into the CPU.

use wasm_bindgen::prelude::*;

use crate::cpu::{IRQ_VECTOR, RESET_VECTOR};
use crate::{Bus, FlatMemory, Status, CPU};

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsError {
    message: String,
}

#[wasm_bindgen]
impl JsError {
    #[wasm_bindgen(constructor)]
    pub fn new(message: &str) -> JsError {
        JsError {
            message: message.to_string(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

/// Main emulator interface for JavaScript
#[wasm_bindgen]
pub struct Emulator6502 {
    cpu: CPU<FlatMemory>,
}

impl Default for Emulator6502 {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl Emulator6502 {
    /// Create an emulator over 64KB of zeroed memory.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Emulator6502 {
            cpu: CPU::new(FlatMemory::new()),
        }
    }

    /// Copy a program into memory, point the reset vector at it and reset.
    pub fn load_program(&mut self, program: &[u8], start_addr: u16) -> Result<(), JsError> {
        let memory = self.cpu.bus_mut();
        memory
            .load(start_addr, program)
            .map_err(|e| JsError::new(&e.to_string()))?;
        memory.set_vector(RESET_VECTOR, start_addr);
        self.cpu.reset();
        Ok(())
    }

    /// Point the IRQ/BRK vector at `addr`.
    pub fn set_irq_vector(&mut self, addr: u16) {
        self.cpu.bus_mut().set_vector(IRQ_VECTOR, addr);
    }

    /// Advance one clock cycle
    pub fn clock(&mut self) {
        self.cpu.clock();
    }

    /// Execute a single instruction and return the cycles it took
    pub fn step(&mut self) -> u32 {
        self.cpu.step()
    }

    /// Clock `cycles` times and return how many instructions completed
    pub fn run_for_cycles(&mut self, cycles: u32) -> u32 {
        self.cpu.run_for_cycles(cycles as u64) as u32
    }

    pub fn reset(&mut self) {
        self.cpu.reset();
    }

    /// Raise IRQ. Only honored at an instruction boundary.
    pub fn irq(&mut self) -> bool {
        if !self.cpu.complete() {
            return false;
        }
        self.cpu.irq();
        true
    }

    /// Raise NMI. Only honored at an instruction boundary.
    pub fn nmi(&mut self) -> bool {
        if !self.cpu.complete() {
            return false;
        }
        self.cpu.nmi();
        true
    }

    // Register getters
    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u8 {
        self.cpu.a()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u8 {
        self.cpu.x()
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u8 {
        self.cpu.y()
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.cpu.pc()
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u8 {
        self.cpu.sp()
    }

    #[wasm_bindgen(getter)]
    pub fn status(&self) -> u8 {
        self.cpu.status().bits()
    }

    #[wasm_bindgen(getter)]
    pub fn fetched(&self) -> u8 {
        self.cpu.fetched()
    }

    #[wasm_bindgen(getter)]
    pub fn addr_abs(&self) -> u16 {
        self.cpu.addr_abs()
    }

    #[wasm_bindgen(getter)]
    pub fn complete(&self) -> bool {
        self.cpu.complete()
    }

    #[wasm_bindgen(getter)]
    pub fn cycles(&self) -> f64 {
        self.cpu.cycles() as f64 // Convert u64 to f64 for JavaScript
    }

    // Flag getters
    #[wasm_bindgen(getter)]
    pub fn flag_n(&self) -> bool {
        self.cpu.status().contains(Status::NEGATIVE)
    }

    #[wasm_bindgen(getter)]
    pub fn flag_v(&self) -> bool {
        self.cpu.status().contains(Status::OVERFLOW)
    }

    #[wasm_bindgen(getter)]
    pub fn flag_d(&self) -> bool {
        self.cpu.status().contains(Status::DECIMAL_MODE)
    }

    #[wasm_bindgen(getter)]
    pub fn flag_i(&self) -> bool {
        self.cpu.status().contains(Status::INTERRUPT_DISABLE)
    }

    #[wasm_bindgen(getter)]
    pub fn flag_z(&self) -> bool {
        self.cpu.status().contains(Status::ZERO)
    }

    #[wasm_bindgen(getter)]
    pub fn flag_c(&self) -> bool {
        self.cpu.status().contains(Status::CARRY)
    }

    // Memory access methods

    /// Read a single byte from memory without side effects
    pub fn read_memory(&self, addr: u16) -> u8 {
        self.cpu.bus().read(addr, true)
    }

    /// Write a single byte to memory
    pub fn write_memory(&mut self, addr: u16, value: u8) {
        self.cpu.bus_mut().write(addr, value);
    }

    /// Read a 256-byte page from memory (for efficient display)
    pub fn get_memory_page(&self, page: u8) -> Vec<u8> {
        let start = (page as usize) << 8;
        self.cpu.bus().as_slice()[start..start + 256].to_vec()
    }

    /// Disassemble `start..=end` into a JS `Map` of address to line
    pub fn disassemble(&self, start: u16, end: u16) -> js_sys::Map {
        let map = js_sys::Map::new();
        for (address, line) in self.cpu.disassemble(start, end) {
            map.set(&JsValue::from(address), &JsValue::from_str(&line));
        }
        map
    }
}
