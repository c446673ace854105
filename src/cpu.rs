//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 6502 processor state and
//! its clock-driven state machine.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of next instruction
//! - **Stack pointer** (SP): 8-bit offset into stack page (0x0100-0x01FF)
//! - **Status register**: `Status` bitflags
//! - **Decode state**: fetched operand, absolute/relative address, opcode, and the
//!   cycles still owed by the in-flight instruction
//!
//! ## Execution Model
//!
//! `clock()` is one emulated cycle. When no cycles are owed the CPU is at an
//! instruction boundary: it fetches, decodes, resolves the addressing mode and
//! performs the whole operation at once, then charges the instruction's cost. Every
//! call, boundary or not, ends by paying one cycle.
//!
//! `reset()`, `irq()` and `nmi()` must be serialized with `clock()` by the caller,
//! and interrupts should only be raised at a boundary (`complete()` is true).

use std::collections::BTreeMap;

use crate::opcodes::{lookup, Operation};
use crate::{disassembler, instructions, AddressingMode, Bus, Status};

/// Base of the fixed stack page.
pub(crate) const STACK_BASE: u16 = 0x0100;

/// Reset vector (low byte; high byte follows).
pub const RESET_VECTOR: u16 = 0xFFFC;

/// IRQ/BRK vector (low byte; high byte follows).
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// Where real NMOS hardware keeps the NMI vector.
pub const NMOS_NMI_VECTOR: u16 = 0xFFFA;

/// Construction-time options for the CPU.
///
/// # Examples
///
/// ```
/// use cpu6502::{CpuOptions, FlatMemory, CPU};
///
/// let cpu = CPU::with_options(FlatMemory::new(), CpuOptions::nmos());
/// assert_eq!(cpu.options().nmi_vector, 0xFFFA);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuOptions {
    /// Vector the NMI handler address is read from.
    ///
    /// Defaults to 0xFFFE, shared with IRQ/BRK.
    pub nmi_vector: u16,

    /// Reproduce the NMOS `JMP ($xxFF)` bug: the pointer's high byte is read from
    /// `$xx00` instead of the next page.
    pub indirect_page_wrap: bool,
}

impl CpuOptions {
    /// Options matching an NMOS 6502: separate NMI vector at 0xFFFA.
    pub const fn nmos() -> Self {
        Self {
            nmi_vector: NMOS_NMI_VECTOR,
            indirect_page_wrap: true,
        }
    }
}

impl Default for CpuOptions {
    fn default() -> Self {
        Self {
            nmi_vector: IRQ_VECTOR,
            indirect_page_wrap: true,
        }
    }
}

/// 6502 CPU state and execution context.
///
/// Generic over the bus. Pass a `FlatMemory` to let the CPU own its memory, or
/// `&mut FlatMemory` to keep ownership with the caller.
///
/// # Examples
///
/// ```
/// use cpu6502::{Bus, FlatMemory, CPU};
///
/// let mut memory = FlatMemory::new();
/// memory.set_vector(0xFFFC, 0x8000);
/// memory.load(0x8000, &[0xE8]).unwrap(); // INX
///
/// let mut cpu = CPU::new(&mut memory);
/// cpu.step();
/// assert_eq!(cpu.x(), 1);
/// assert!(cpu.complete());
/// ```
pub struct CPU<B: Bus> {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Program counter (address of next instruction)
    pub(crate) pc: u16,

    /// Stack pointer (0x0100 + sp gives full stack address)
    pub(crate) sp: u8,

    /// Processor status
    pub(crate) status: Status,

    /// Operand value for the instruction being executed
    pub(crate) fetched: u8,

    /// Effective address resolved by the addressing mode
    pub(crate) addr_abs: u16,

    /// Sign-extended branch offset
    pub(crate) addr_rel: u16,

    /// Opcode of the instruction in flight
    pub(crate) opcode: u8,

    /// Cycles still owed by the instruction in flight; 0 at a boundary
    pub(crate) cycles: u8,

    /// Total clock() calls since construction
    pub(crate) clock_count: u64,

    pub(crate) options: CpuOptions,

    pub(crate) bus: B,
}

impl<B: Bus> CPU<B> {
    /// Creates a CPU on `bus` with default options and runs `reset()`.
    pub fn new(bus: B) -> Self {
        Self::with_options(bus, CpuOptions::default())
    }

    /// Creates a CPU on `bus` with explicit options and runs `reset()`.
    pub fn with_options(bus: B, options: CpuOptions) -> Self {
        let mut cpu = Self {
            a: 0,
            x: 0,
            y: 0,
            pc: 0,
            sp: 0,
            status: Status::UNUSED,
            fetched: 0,
            addr_abs: 0,
            addr_rel: 0,
            opcode: 0,
            cycles: 0,
            clock_count: 0,
            options,
            bus,
        };
        cpu.reset();
        cpu
    }

    // ========== Clock State Machine ==========

    /// Advances the CPU by one clock cycle.
    ///
    /// At an instruction boundary this fetches and fully executes the next
    /// instruction, charging its base cost plus at most one page-cross cycle (only
    /// when both the addressing mode and the operation ask for it) plus any branch
    /// cycles. Every call then pays one cycle.
    pub fn clock(&mut self) {
        if self.cycles == 0 {
            self.opcode = self.bus.read(self.pc, false);
            self.pc = self.pc.wrapping_add(1);

            let meta = lookup(self.opcode);
            log::trace!(
                "${:04X}: {:02X} {} {{{}}} {}cy",
                self.pc.wrapping_sub(1),
                self.opcode,
                meta.mnemonic,
                meta.addressing_mode.tag(),
                meta.base_cycles
            );

            self.cycles = meta.base_cycles;
            let mode_extra = self.resolve(meta.addressing_mode);
            let op_extra = instructions::execute(self, meta.operation);
            if mode_extra && op_extra {
                self.cycles += 1;
            }
        }

        self.clock_count += 1;
        self.cycles -= 1;
    }

    /// True when no cycles are owed, i.e. the next `clock()` starts an instruction.
    pub fn complete(&self) -> bool {
        self.cycles == 0
    }

    /// Runs one whole instruction and returns the cycles it took.
    ///
    /// Cycles still owed by an earlier instruction, reset or interrupt are paid
    /// first and are not included in the return value.
    pub fn step(&mut self) -> u32 {
        while !self.complete() {
            self.clock();
        }

        let mut taken = 0;
        loop {
            self.clock();
            taken += 1;
            if self.complete() {
                return taken;
            }
        }
    }

    /// Calls `clock()` exactly `cycle_budget` times.
    ///
    /// Returns the number of instructions that reached their boundary.
    pub fn run_for_cycles(&mut self, cycle_budget: u64) -> u64 {
        let mut finished = 0;
        for _ in 0..cycle_budget {
            self.clock();
            if self.complete() {
                finished += 1;
            }
        }
        finished
    }

    // ========== Reset and Interrupts ==========

    /// Puts the CPU into its power-on state without touching the bus contents.
    ///
    /// A, X, Y = 0; SP = 0xFD; status = Unused only; PC from 0xFFFC/0xFFFD; decode
    /// state cleared; 8 cycles owed.
    pub fn reset(&mut self) {
        self.a = 0;
        self.x = 0;
        self.y = 0;
        self.sp = 0xFD;
        self.status = Status::UNUSED;

        self.pc = self.bus.read_word(RESET_VECTOR);

        self.fetched = 0;
        self.addr_abs = 0;
        self.addr_rel = 0;
        self.opcode = 0;
        self.cycles = 8;

        log::debug!("reset: PC=${:04X}", self.pc);
    }

    /// Maskable interrupt request. Ignored while InterruptDisable is set.
    pub fn irq(&mut self) {
        if self.status.contains(Status::INTERRUPT_DISABLE) {
            log::debug!("irq masked at PC=${:04X}", self.pc);
            return;
        }
        log::debug!("irq taken at PC=${:04X}", self.pc);
        self.interrupt(IRQ_VECTOR);
        self.cycles = 7;
    }

    /// Non-maskable interrupt. Always taken.
    pub fn nmi(&mut self) {
        log::debug!("nmi taken at PC=${:04X}", self.pc);
        self.interrupt(self.options.nmi_vector);
        self.cycles = 8;
    }

    /// Shared IRQ/NMI entry: push PC and status, mask IRQs, jump through `vector`.
    fn interrupt(&mut self, vector: u16) {
        self.push_word(self.pc);

        self.status.remove(Status::BREAK);
        self.status.insert(Status::UNUSED);
        self.push(self.status.pushed_for_interrupt());
        self.status.insert(Status::INTERRUPT_DISABLE);

        self.pc = self.bus.read_word(vector);
    }

    // ========== Stack ==========

    /// Writes `value` at 0x0100 + SP, then decrements SP.
    pub(crate) fn push(&mut self, value: u8) {
        self.bus.write(STACK_BASE | self.sp as u16, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    /// Increments SP, then reads 0x0100 + SP.
    pub(crate) fn pull(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.bus.read(STACK_BASE | self.sp as u16, false)
    }

    /// Pushes high byte then low byte.
    pub(crate) fn push_word(&mut self, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.push(hi);
        self.push(lo);
    }

    /// Pulls low byte then high byte.
    pub(crate) fn pull_word(&mut self) -> u16 {
        let lo = self.pull();
        let hi = self.pull();
        u16::from_le_bytes([lo, hi])
    }

    // ========== Operand Access ==========

    /// Loads the operand for the current instruction into `fetched`.
    ///
    /// Implied instructions already have the accumulator there.
    pub(crate) fn fetch(&mut self) -> u8 {
        if lookup(self.opcode).addressing_mode != AddressingMode::Implied {
            self.fetched = self.bus.read(self.addr_abs, false);
        }
        self.fetched
    }

    // ========== Flags ==========

    /// Returns 1 if every bit of `flag` is set, else 0.
    pub fn get_flag(&self, flag: Status) -> u8 {
        self.status.contains(flag) as u8
    }

    /// Sets or clears `flag`.
    pub fn set_flag(&mut self, flag: Status, value: bool) {
        self.status.set(flag, value);
    }

    /// The live status register.
    pub fn status(&self) -> Status {
        self.status
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer value.
    ///
    /// Note: The full stack address is 0x0100 + SP. The stack grows downward from 0x01FF.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Operand value of the last instruction.
    pub fn fetched(&self) -> u8 {
        self.fetched
    }

    /// Effective address resolved for the last instruction.
    pub fn addr_abs(&self) -> u16 {
        self.addr_abs
    }

    /// Sign-extended branch offset of the last relative-mode instruction.
    pub fn addr_rel(&self) -> u16 {
        self.addr_rel
    }

    /// Opcode of the last instruction fetched.
    pub fn opcode(&self) -> u8 {
        self.opcode
    }

    /// Cycles still owed by the in-flight instruction.
    pub fn cycles_remaining(&self) -> u8 {
        self.cycles
    }

    /// Total clock() calls since construction.
    pub fn cycles(&self) -> u64 {
        self.clock_count
    }

    pub fn options(&self) -> &CpuOptions {
        &self.options
    }

    // ========== Register Setters ==========

    /// Sets the accumulator.
    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    /// Sets the X register.
    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    /// Sets the Y register.
    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    /// Sets the stack pointer.
    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    // ========== Bus Access ==========

    /// Shared access to the bus, e.g. for inspection.
    pub fn bus(&self) -> &B {
        &self.bus
    }

    /// Mutable access to the bus, e.g. to poke a program in.
    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    /// Gives the bus back, consuming the CPU.
    pub fn into_bus(self) -> B {
        self.bus
    }

    /// Disassembles `start..=end` from this CPU's bus. See [`disassembler::disassemble`].
    pub fn disassemble(&self, start: u16, end: u16) -> BTreeMap<u16, String> {
        disassembler::disassemble(&self.bus, start, end)
    }

    /// Whether the in-flight instruction is a placeholder.
    pub(crate) fn executing_placeholder(&self) -> bool {
        lookup(self.opcode).operation == Operation::Xxx
    }
}
