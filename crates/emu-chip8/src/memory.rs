//! 4 KiB address space.

use crate::error::Chip8Error;
use crate::font::{FONT, FONT_ADDR};

/// Size of the address space in bytes.
pub const MEMORY_SIZE: usize = 4096;

/// Where program images are loaded and where execution starts.
pub const PROGRAM_START: u16 = 0x200;

/// Largest image that fits between `PROGRAM_START` and the top of memory.
pub const MAX_PROGRAM_SIZE: usize = MEMORY_SIZE - PROGRAM_START as usize;

/// Addresses are 12 bits wide. Anything above wraps.
const ADDR_MASK: u16 = 0x0FFF;

/// Interpreter memory.
///
/// 0x000-0x1FF is reserved for the interpreter (the glyph table lives at
/// 0x050-0x09F), programs start at 0x200. Every access masks the address
/// to 12 bits, so `I` and `pc` values past 0xFFF wrap around to 0x000.
#[derive(Clone)]
pub struct Memory {
    bytes: [u8; MEMORY_SIZE],
}

impl Memory {
    /// Zeroed memory with the glyph table installed.
    #[must_use]
    pub fn new() -> Self {
        let mut mem = Self {
            bytes: [0; MEMORY_SIZE],
        };
        mem.load(FONT_ADDR, &FONT);
        mem
    }

    /// Read a byte.
    #[must_use]
    pub fn read(&self, addr: u16) -> u8 {
        self.bytes[usize::from(addr & ADDR_MASK)]
    }

    /// Write a byte.
    pub fn write(&mut self, addr: u16, value: u8) {
        self.bytes[usize::from(addr & ADDR_MASK)] = value;
    }

    /// Read a big-endian word. The second byte wraps independently, so a
    /// fetch at 0xFFF reads 0xFFF and 0x000.
    #[must_use]
    pub fn read_word(&self, addr: u16) -> u16 {
        (u16::from(self.read(addr)) << 8) | u16::from(self.read(addr.wrapping_add(1)))
    }

    /// Copy `data` into memory starting at `addr`, wrapping past 0xFFF.
    pub fn load(&mut self, addr: u16, data: &[u8]) {
        let mut a = addr;
        for &byte in data {
            self.write(a, byte);
            a = a.wrapping_add(1);
        }
    }

    /// Copy a program image to `PROGRAM_START`.
    ///
    /// Images that would run past the top of memory are rejected and
    /// memory is left untouched.
    pub fn load_program(&mut self, data: &[u8]) -> Result<(), Chip8Error> {
        if data.len() > MAX_PROGRAM_SIZE {
            return Err(Chip8Error::ProgramTooLarge {
                size: data.len(),
                max: MAX_PROGRAM_SIZE,
            });
        }
        let start = usize::from(PROGRAM_START);
        self.bytes[start..start + data.len()].copy_from_slice(data);
        Ok(())
    }

    /// The whole address space.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}
