//! CHIP-8 machine state and cycle driver.

mod execute;

use emu_core::{Cpu, Observable, Tickable, Ticks, Value};
use log::{debug, trace, warn};
use rand::RngCore;

use crate::decode::Instruction;
use crate::display::Framebuffer;
use crate::error::Chip8Error;
use crate::keypad::Keypad;
use crate::memory::{Memory, PROGRAM_START};
use crate::registers::Registers;
use crate::rng::Lcg;
use crate::timers::Timers;

/// CHIP-8 interpreter.
///
/// Owns all machine state: registers, call stack, memory, framebuffer,
/// keypad and timers. The random source is injected so tests and multiple
/// instances never share hidden state.
pub struct Chip8<R = Lcg> {
    /// Register file, stack and latched opcode.
    pub(crate) regs: Registers,
    memory: Memory,
    display: Framebuffer,
    keypad: Keypad,
    timers: Timers,
    rng: R,
    /// Instructions executed since creation or reset.
    total_ticks: Ticks,
}

impl Chip8<Lcg> {
    /// Create an interpreter using the reference generator and seed.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(Lcg::default())
    }
}

impl Default for Chip8<Lcg> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore> Chip8<R> {
    /// Create an interpreter that draws random bytes from `rng`.
    pub fn with_rng(rng: R) -> Self {
        let mut cpu = Self {
            regs: Registers::default(),
            memory: Memory::new(),
            display: Framebuffer::new(),
            keypad: Keypad::new(),
            timers: Timers::new(),
            rng,
            total_ticks: Ticks::ZERO,
        };
        cpu.initialize();
        cpu
    }

    /// Return to power-on state: everything zeroed, glyph table installed,
    /// `pc` at 0x200. The random source keeps its position.
    pub fn initialize(&mut self) {
        self.regs = Registers {
            pc: PROGRAM_START,
            ..Registers::default()
        };
        self.memory = Memory::new();
        self.display.clear();
        self.keypad.release_all();
        self.timers = Timers::new();
        self.total_ticks = Ticks::ZERO;
        debug!("chip8: initialized, pc={PROGRAM_START:#05X}");
    }

    /// Copy a program image to 0x200.
    pub fn load_program(&mut self, data: &[u8]) -> Result<(), Chip8Error> {
        self.memory.load_program(data)?;
        debug!("chip8: loaded {} byte program", data.len());
        Ok(())
    }

    /// One full cycle: fetch, decode, execute, then tick both timers.
    ///
    /// On a fault the timers are left alone and the error is returned.
    pub fn cycle(&mut self) -> Result<(), Chip8Error> {
        self.execute_next()?;
        self.tick_timers();
        Ok(())
    }

    /// Fetch, decode and execute one instruction without touching the
    /// timers.
    pub fn execute_next(&mut self) -> Result<(), Chip8Error> {
        let pc = self.regs.pc;
        self.regs.opcode = self.memory.read_word(pc);
        self.regs.pc = pc.wrapping_add(2);
        self.total_ticks += Ticks::new(1);

        let instruction = Instruction::decode(self.regs.opcode);
        trace!("{pc:#05X}: {:04X}  {instruction}", self.regs.opcode);

        self.execute(instruction).inspect_err(|e| warn!("chip8: {e}"))
    }

    /// Decrement the delay and sound timers once.
    pub fn tick_timers(&mut self) {
        self.timers.tick();
    }

    /// Address of the instruction being executed.
    pub(crate) fn instruction_addr(&self) -> u16 {
        self.regs.pc.wrapping_sub(2)
    }

    /// Instructions executed since creation or reset.
    #[must_use]
    pub const fn total_ticks(&self) -> Ticks {
        self.total_ticks
    }

    #[must_use]
    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut Memory {
        &mut self.memory
    }

    #[must_use]
    pub fn framebuffer(&self) -> &Framebuffer {
        &self.display
    }

    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    pub fn keypad_mut(&mut self) -> &mut Keypad {
        &mut self.keypad
    }

    #[must_use]
    pub fn timers(&self) -> &Timers {
        &self.timers
    }

    /// Register Vx. Only the low nibble of `x` is used.
    #[must_use]
    pub fn v(&self, x: u8) -> u8 {
        self.regs.v[usize::from(x & 0xF)]
    }

    #[must_use]
    pub fn index(&self) -> u16 {
        self.regs.i
    }

    /// The most recently fetched opcode.
    #[must_use]
    pub fn opcode(&self) -> u16 {
        self.regs.opcode
    }

    #[must_use]
    pub fn stack_pointer(&self) -> u8 {
        self.regs.sp
    }

    /// Set the program counter.
    ///
    /// Only available in test builds.
    #[cfg(any(test, feature = "test-utils"))]
    pub fn set_pc(&mut self, value: u16) {
        self.regs.pc = value;
    }

    /// Set register Vx.
    ///
    /// Only available in test builds.
    #[cfg(any(test, feature = "test-utils"))]
    pub fn set_v(&mut self, x: u8, value: u8) {
        self.regs.v[usize::from(x & 0xF)] = value;
    }

    /// Set the index register.
    ///
    /// Only available in test builds.
    #[cfg(any(test, feature = "test-utils"))]
    pub fn set_index(&mut self, value: u16) {
        self.regs.i = value;
    }

    /// Replace the call stack with `entries`, bottom first. At most 16
    /// entries are kept.
    ///
    /// Only available in test builds.
    #[cfg(any(test, feature = "test-utils"))]
    pub fn set_stack(&mut self, entries: &[u16]) {
        let n = entries.len().min(crate::registers::STACK_SIZE);
        self.regs.stack = [0; crate::registers::STACK_SIZE];
        self.regs.stack[..n].copy_from_slice(&entries[..n]);
        self.regs.sp = n as u8;
    }

    /// Set both timers.
    ///
    /// Only available in test builds.
    #[cfg(any(test, feature = "test-utils"))]
    pub fn set_timers(&mut self, delay: u8, sound: u8) {
        self.timers = Timers { delay, sound };
    }
}

impl<R: RngCore> Cpu for Chip8<R> {
    type Registers = Registers;
    type Error = Chip8Error;

    fn step(&mut self) -> Result<(), Chip8Error> {
        self.cycle()
    }

    fn pc(&self) -> u32 {
        u32::from(self.regs.pc)
    }

    fn registers(&self) -> Registers {
        Registers {
            delay: self.timers.delay,
            sound: self.timers.sound,
            ..self.regs
        }
    }

    fn reset(&mut self) {
        self.initialize();
    }
}

/// All query paths supported by the CHIP-8.
const CHIP8_QUERY_PATHS: &[&str] = &[
    // Registers
    "v0", "v1", "v2", "v3", "v4", "v5", "v6", "v7",
    "v8", "v9", "va", "vb", "vc", "vd", "ve", "vf",
    "i", "pc", "sp", "stack", "opcode",
    // Timers
    "dt", "st",
    // Peripherals
    "keys", "display.lit",
    // Execution
    "ticks",
];

impl<R: RngCore> Observable for Chip8<R> {
    fn query(&self, path: &str) -> Option<Value> {
        if let Some(reg) = path.strip_prefix('v') {
            let x = match reg.as_bytes() {
                [d @ b'0'..=b'9'] => d - b'0',
                [h @ b'a'..=b'f'] => h - b'a' + 10,
                [h @ b'A'..=b'F'] => h - b'A' + 10,
                _ => return None,
            };
            return Some(self.v(x).into());
        }
        match path {
            "i" => Some(self.regs.i.into()),
            "pc" => Some(self.regs.pc.into()),
            "sp" => Some(self.regs.sp.into()),
            "stack" => Some(
                self.regs
                    .stack
                    .iter()
                    .take(usize::from(self.regs.sp))
                    .copied()
                    .collect::<Vec<u16>>()
                    .into(),
            ),
            "opcode" => Some(self.regs.opcode.into()),
            "dt" => Some(self.timers.delay.into()),
            "st" => Some(self.timers.sound.into()),
            "keys" => Some(self.keypad.keys().to_vec().into()),
            "display.lit" => Some((self.display.lit_count() as u64).into()),
            "ticks" => Some(self.total_ticks.get().into()),
            _ => None,
        }
    }

    fn query_paths(&self) -> &'static [&'static str] {
        CHIP8_QUERY_PATHS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::FONT;

    #[test]
    fn power_on_state() {
        let cpu = Chip8::new();
        assert_eq!(cpu.regs.pc, 0x200);
        assert_eq!(cpu.regs.sp, 0);
        assert_eq!(cpu.regs.i, 0);
        assert_eq!(cpu.regs.v, [0; 16]);
        assert_eq!(cpu.memory.as_slice()[0x50..0xA0], FONT);
        assert_eq!(cpu.display.lit_count(), 0);
        assert_eq!(*cpu.timers(), Timers::new());
    }

    #[test]
    fn fetch_latches_opcode_and_advances_pc() {
        let mut cpu = Chip8::new();
        cpu.memory.load(0x200, &[0xA4, 0xC3]);
        cpu.cycle().unwrap();
        assert_eq!(cpu.opcode(), 0xA4C3);
        assert_eq!(cpu.regs.pc, 0x202);
        assert_eq!(cpu.total_ticks(), Ticks::new(1));
    }

    #[test]
    fn fetch_wraps_at_top_of_memory() {
        let mut cpu = Chip8::new();
        cpu.memory.write(0xFFF, 0x61);
        cpu.memory.write(0x000, 0x07);
        cpu.set_pc(0xFFF);
        cpu.cycle().unwrap();
        assert_eq!(cpu.v(1), 0x07);
        assert_eq!(cpu.regs.pc, 0x1001);
    }

    #[test]
    fn cycle_ticks_timers_but_execute_next_does_not() {
        let mut cpu = Chip8::new();
        cpu.set_timers(5, 2);
        cpu.execute_next().unwrap();
        assert_eq!(*cpu.timers(), Timers { delay: 5, sound: 2 });
        cpu.cycle().unwrap();
        assert_eq!(*cpu.timers(), Timers { delay: 4, sound: 1 });
    }

    #[test]
    fn fault_skips_timer_tick() {
        let mut cpu = Chip8::new();
        cpu.memory.load(0x200, &[0x00, 0xEE]);
        cpu.set_timers(3, 3);
        assert_eq!(cpu.cycle(), Err(Chip8Error::StackUnderflow { pc: 0x200 }));
        assert_eq!(*cpu.timers(), Timers { delay: 3, sound: 3 });
        assert_eq!(cpu.regs.pc, 0x202);
    }

    #[test]
    fn reset_restores_power_on_state() {
        let mut cpu = Chip8::new();
        cpu.memory.load(0x200, &[0x60, 0x0A, 0xD0, 0x05]);
        cpu.keypad_mut().press(4);
        cpu.cycle().unwrap();
        cpu.cycle().unwrap();
        cpu.reset();
        assert_eq!(cpu.registers(), Registers { pc: 0x200, ..Registers::default() });
        assert_eq!(cpu.memory.read(0x200), 0);
        assert_eq!(cpu.display.lit_count(), 0);
        assert_eq!(cpu.keypad().first_pressed(), None);
        assert_eq!(cpu.total_ticks(), Ticks::ZERO);
    }

    #[test]
    fn load_program_rejects_oversized_image() {
        let mut cpu = Chip8::new();
        let err = cpu.load_program(&[0; 3585]).unwrap_err();
        assert!(matches!(err, Chip8Error::ProgramTooLarge { size: 3585, .. }));
    }

    #[test]
    fn query_registers_and_state() {
        let mut cpu = Chip8::new();
        cpu.set_v(0xA, 0x42);
        cpu.set_index(0x300);
        cpu.set_timers(7, 0);
        cpu.keypad_mut().press(1);
        assert_eq!(cpu.query("va"), Some(Value::U8(0x42)));
        assert_eq!(cpu.query("vA"), Some(Value::U8(0x42)));
        assert_eq!(cpu.query("i"), Some(Value::U16(0x300)));
        assert_eq!(cpu.query("pc"), Some(Value::U16(0x200)));
        assert_eq!(cpu.query("dt"), Some(Value::U8(7)));
        assert_eq!(cpu.query("stack"), Some(Value::Array(vec![])));
        let Some(Value::Array(keys)) = cpu.query("keys") else {
            panic!("keys should be an array");
        };
        assert_eq!(keys[1], Value::Bool(true));
        assert_eq!(cpu.query("v10"), None);
        assert_eq!(cpu.query("nope"), None);
    }

    #[test]
    fn query_rejects_malformed_register_names() {
        let cpu = Chip8::new();
        for path in ["v+f", "v+0", "v", "vg", "v-1", "v 1", "v0f"] {
            assert_eq!(cpu.query(path), None, "{path}");
        }
    }

    #[test]
    fn register_snapshot_carries_timers() {
        let mut cpu = Chip8::new();
        cpu.set_timers(7, 3);
        let regs = cpu.registers();
        assert_eq!((regs.delay, regs.sound), (7, 3));

        cpu.memory.load(0x200, &[0x60, 0x00]);
        cpu.cycle().unwrap();
        let regs = cpu.registers();
        assert_eq!((regs.delay, regs.sound), (6, 2));
    }

    #[test]
    fn every_query_path_resolves() {
        let cpu = Chip8::new();
        for path in cpu.query_paths() {
            assert!(cpu.query(path).is_some(), "{path}");
        }
    }
}
