//! CHIP-8 interpreter core.
//!
//! Each call to `Chip8::cycle()` fetches one 16-bit opcode, executes it and
//! ticks the delay and sound timers once. Loading images from storage,
//! presenting the framebuffer, polling input and pacing the loop belong to
//! the caller; `Chip8System` offers a frame-paced driver that keeps the
//! timers at 60 Hz regardless of instruction throughput.

mod config;
mod cpu;
mod decode;
mod display;
mod error;
mod font;
mod keypad;
mod memory;
mod registers;
mod rng;
mod system;
mod timers;

pub use config::Chip8Config;
pub use cpu::Chip8;
pub use decode::Instruction;
pub use display::{DISPLAY_HEIGHT, DISPLAY_SIZE, DISPLAY_WIDTH, Framebuffer};
pub use error::Chip8Error;
pub use font::{FONT, FONT_ADDR, GLYPH_HEIGHT};
pub use keypad::{KEY_COUNT, Keypad};
pub use memory::{MAX_PROGRAM_SIZE, MEMORY_SIZE, Memory, PROGRAM_START};
pub use registers::{REG_COUNT, Registers, STACK_SIZE};
pub use rng::{DEFAULT_SEED, Lcg};
pub use system::Chip8System;
pub use timers::Timers;
