//! # Bus Abstraction
//!
//! This module provides the `Bus` trait that decouples the CPU from the memory it
//! talks to, and `FlatMemory`, a plain 64KB store.
//!
//! ## Design Principles
//!
//! The Bus trait follows 6502 hardware behavior:
//! - No bus errors - reads/writes always succeed
//! - Every 16-bit address is valid
//! - A `peek` read is an inspection, not a bus cycle

use std::fmt;

/// Memory bus trait for CPU to read/write bytes.
///
/// # Peek Contract
///
/// `read(addr, true)` is used by the disassembler and debuggers. Implementations
/// must not let a peek trigger anything a real access would (clearing a status
/// register, popping a FIFO). `FlatMemory` has no side effects at all, but
/// devices layered on top of this trait must honor it.
///
/// # Examples
///
/// ```
/// use cpu6502::{Bus, FlatMemory};
///
/// let mut mem = FlatMemory::new();
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234, false), 0x42);
/// assert_eq!(mem.read(0x1234, true), 0x42);
/// ```
pub trait Bus {
    /// Reads a byte from the specified 16-bit address.
    ///
    /// Must never panic. `peek` marks an inspection read with no side effects.
    fn read(&self, addr: u16, peek: bool) -> u8;

    /// Writes a byte to the specified 16-bit address.
    ///
    /// Must never panic. Implementations may ignore writes to read-only regions.
    fn write(&mut self, addr: u16, value: u8);

    /// Reads a little-endian word from `addr` and `addr + 1` (wrapping at 0xFFFF).
    fn read_word(&self, addr: u16) -> u16 {
        let lo = self.read(addr, false);
        let hi = self.read(addr.wrapping_add(1), false);
        u16::from_le_bytes([lo, hi])
    }

    /// Like `read_word`, but both bytes are peeks.
    fn peek_word(&self, addr: u16) -> u16 {
        let lo = self.read(addr, true);
        let hi = self.read(addr.wrapping_add(1), true);
        u16::from_le_bytes([lo, hi])
    }
}

/// A mutable borrow of a bus is itself a bus.
///
/// This is the non-owning handle: hand the CPU `&mut memory` and the caller keeps
/// ownership of the memory for as long as the CPU lives.
impl<B: Bus + ?Sized> Bus for &mut B {
    fn read(&self, addr: u16, peek: bool) -> u8 {
        (**self).read(addr, peek)
    }

    fn write(&mut self, addr: u16, value: u8) {
        (**self).write(addr, value);
    }
}

/// Errors raised by the program-loading helpers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BusError {
    /// The image would run past 0xFFFF.
    ///
    /// Contains the requested start address and the image length.
    ImageOverflow { start: u16, len: usize },
}

impl fmt::Display for BusError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BusError::ImageOverflow { start, len } => write!(
                f,
                "{} byte image at ${:04X} does not fit below $10000",
                len, start
            ),
        }
    }
}

impl std::error::Error for BusError {}

/// Simple 64KB flat memory implementation.
///
/// All 65536 addresses (0x0000-0xFFFF) map to a single contiguous RAM array,
/// initialized to 0x00. There is no mirroring and no mapping.
///
/// # Examples
///
/// ```
/// use cpu6502::{Bus, FlatMemory, CPU};
///
/// let mut memory = FlatMemory::new();
/// memory.set_vector(0xFFFC, 0x8000);
/// memory.write(0x8000, 0xEA); // NOP
///
/// let cpu = CPU::new(memory);
/// assert_eq!(cpu.pc(), 0x8000);
/// ```
#[derive(Clone)]
pub struct FlatMemory {
    /// 64KB contiguous memory array
    data: Box<[u8; 65536]>,
}

impl FlatMemory {
    /// Creates a new FlatMemory instance with all bytes initialized to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; 65536]),
        }
    }

    /// Copies `image` into memory starting at `start`.
    ///
    /// Nothing is written if the image would run past the top of the address space.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpu6502::{Bus, BusError, FlatMemory};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.load(0xC000, &[0xA2, 0x0A]).unwrap();
    /// assert_eq!(mem.read(0xC001, true), 0x0A);
    ///
    /// let err = mem.load(0xFFFF, &[0x01, 0x02]).unwrap_err();
    /// assert_eq!(err, BusError::ImageOverflow { start: 0xFFFF, len: 2 });
    /// ```
    pub fn load(&mut self, start: u16, image: &[u8]) -> Result<(), BusError> {
        let begin = start as usize;
        let end = begin + image.len();
        if end > self.data.len() {
            return Err(BusError::ImageOverflow {
                start,
                len: image.len(),
            });
        }
        self.data[begin..end].copy_from_slice(image);
        Ok(())
    }

    /// Writes `target` as a little-endian word at `vector` and `vector + 1`.
    ///
    /// Typical vectors are 0xFFFC (reset) and 0xFFFE (IRQ/BRK).
    pub fn set_vector(&mut self, vector: u16, target: u16) {
        let [lo, hi] = target.to_le_bytes();
        self.write(vector, lo);
        self.write(vector.wrapping_add(1), hi);
    }

    /// Borrow the whole 64KB image.
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..]
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FlatMemory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlatMemory")
            .field("len", &self.data.len())
            .finish()
    }
}

impl Bus for FlatMemory {
    fn read(&self, addr: u16, _peek: bool) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}
