//! Instruction handlers.
//!
//! Each handler runs after fetch has already advanced `pc` past the
//! instruction. Skips add a further 2. Register arithmetic wraps at 8 bits.
//! `I` is kept as an unmasked 16-bit value and wrapped to 12 bits only when
//! it addresses memory.

use log::debug;
use rand::RngCore;

use super::Chip8;
use crate::decode::Instruction;
use crate::error::Chip8Error;
use crate::font::{FONT_ADDR, GLYPH_HEIGHT};
use crate::keypad::KEY_COUNT;
use crate::registers::STACK_SIZE;

/// Index of the flag register.
const VF: usize = 0xF;

impl<R: RngCore> Chip8<R> {
    /// Execute a decoded instruction against machine state.
    pub(super) fn execute(&mut self, instruction: Instruction) -> Result<(), Chip8Error> {
        match instruction {
            Instruction::ClearScreen => self.op_cls(),
            Instruction::Return => self.op_ret()?,
            Instruction::Sys { .. } | Instruction::Unassigned(_) => self.op_ignored(instruction),
            Instruction::Jump { addr } => self.op_jp(addr),
            Instruction::Call { addr } => self.op_call(addr)?,

            // Conditional skips
            Instruction::SkipEqImm { x, kk } => self.skip_if(self.reg(x) == kk),
            Instruction::SkipNeImm { x, kk } => self.skip_if(self.reg(x) != kk),
            Instruction::SkipEqReg { x, y } => self.skip_if(self.reg(x) == self.reg(y)),
            Instruction::SkipNeReg { x, y } => self.skip_if(self.reg(x) != self.reg(y)),

            // Loads and immediate arithmetic
            Instruction::LoadImm { x, kk } => self.set_reg(x, kk),
            Instruction::AddImm { x, kk } => self.set_reg(x, self.reg(x).wrapping_add(kk)),
            Instruction::Move { x, y } => self.set_reg(x, self.reg(y)),

            // ALU
            Instruction::Or { x, y } => self.set_reg(x, self.reg(x) | self.reg(y)),
            Instruction::And { x, y } => self.set_reg(x, self.reg(x) & self.reg(y)),
            Instruction::Xor { x, y } => self.set_reg(x, self.reg(x) ^ self.reg(y)),
            Instruction::AddReg { x, y } => self.op_add(x, y),
            Instruction::SubReg { x, y } => self.op_sub(x, y),
            Instruction::ShiftRight { x } => self.op_shr(x),
            Instruction::SubNReg { x, y } => self.op_subn(x, y),
            Instruction::ShiftLeft { x } => self.op_shl(x),

            // Index and jumps
            Instruction::SetIndex { addr } => self.regs.i = addr,
            Instruction::JumpOffset { addr } => {
                self.regs.pc = addr + u16::from(self.regs.v[0]);
            }
            Instruction::Random { x, kk } => self.op_rnd(x, kk),
            Instruction::Draw { x, y, n } => self.op_drw(x, y, n),

            // Keypad
            Instruction::SkipKey { x } => {
                let pressed = self.key_state(x)?;
                self.skip_if(pressed);
            }
            Instruction::SkipNotKey { x } => {
                let pressed = self.key_state(x)?;
                self.skip_if(!pressed);
            }
            Instruction::WaitKey { x } => self.op_wait_key(x),

            // Timers
            Instruction::GetDelay { x } => self.set_reg(x, self.timers.delay),
            Instruction::SetDelay { x } => self.timers.delay = self.reg(x),
            Instruction::SetSound { x } => self.timers.sound = self.reg(x),

            // Index arithmetic and memory
            Instruction::AddIndex { x } => {
                // No overflow flag, and I is not masked here.
                self.regs.i = self.regs.i.wrapping_add(u16::from(self.reg(x)));
            }
            Instruction::GlyphAddr { x } => {
                self.regs.i = FONT_ADDR + GLYPH_HEIGHT * u16::from(self.reg(x));
            }
            Instruction::StoreBcd { x } => self.op_bcd(x),
            Instruction::DumpRegs { x } => self.op_dump(x),
            Instruction::LoadRegs { x } => self.op_load(x),
        }
        Ok(())
    }

    fn reg(&self, x: u8) -> u8 {
        self.regs.v[usize::from(x)]
    }

    fn set_reg(&mut self, x: u8, value: u8) {
        self.regs.v[usize::from(x)] = value;
    }

    fn set_flag(&mut self, flag: bool) {
        self.regs.v[VF] = u8::from(flag);
    }

    fn skip_if(&mut self, condition: bool) {
        if condition {
            self.regs.pc = self.regs.pc.wrapping_add(2);
        }
    }

    /// Key state for the key numbered by Vx.
    fn key_state(&self, x: u8) -> Result<bool, Chip8Error> {
        let key = self.reg(x);
        if usize::from(key) >= KEY_COUNT {
            return Err(Chip8Error::InvalidKey {
                key,
                pc: self.instruction_addr(),
            });
        }
        Ok(self.keypad.is_pressed(key))
    }

    fn op_cls(&mut self) {
        self.display.clear();
    }

    fn op_ret(&mut self) -> Result<(), Chip8Error> {
        if self.regs.sp == 0 {
            return Err(Chip8Error::StackUnderflow {
                pc: self.instruction_addr(),
            });
        }
        self.regs.sp -= 1;
        self.regs.pc = self.regs.stack[usize::from(self.regs.sp)];
        Ok(())
    }

    fn op_ignored(&self, instruction: Instruction) {
        debug!(
            "chip8: ignoring {instruction} at {:#05X}",
            self.instruction_addr()
        );
    }

    fn op_jp(&mut self, addr: u16) {
        self.regs.pc = addr;
    }

    fn op_call(&mut self, addr: u16) -> Result<(), Chip8Error> {
        let sp = usize::from(self.regs.sp);
        if sp >= STACK_SIZE {
            return Err(Chip8Error::StackOverflow {
                pc: self.instruction_addr(),
            });
        }
        self.regs.stack[sp] = self.regs.pc;
        self.regs.sp += 1;
        self.regs.pc = addr;
        Ok(())
    }

    fn op_add(&mut self, x: u8, y: u8) {
        let (sum, carry) = self.reg(x).overflowing_add(self.reg(y));
        self.set_reg(x, sum);
        self.set_flag(carry);
    }

    fn op_sub(&mut self, x: u8, y: u8) {
        let (vx, vy) = (self.reg(x), self.reg(y));
        self.set_reg(x, vx.wrapping_sub(vy));
        self.set_flag(vx >= vy);
    }

    fn op_shr(&mut self, x: u8) {
        let vx = self.reg(x);
        self.set_reg(x, vx >> 1);
        self.set_flag(vx & 0x01 != 0);
    }

    fn op_subn(&mut self, x: u8, y: u8) {
        let vy = self.reg(y);
        self.set_reg(x, vy.wrapping_sub(self.reg(x)));
        // Quirk: the flag compares Vy against the new Vx, not the old one.
        self.set_flag(vy > self.reg(x));
    }

    fn op_shl(&mut self, x: u8) {
        let vx = self.reg(x);
        self.set_reg(x, vx << 1);
        self.set_flag(vx & 0x80 != 0);
    }

    fn op_rnd(&mut self, x: u8, kk: u8) {
        let byte = self.rng.next_u32() as u8;
        self.set_reg(x, byte & kk);
    }

    fn op_drw(&mut self, x: u8, y: u8, n: u8) {
        let mut rows = [0u8; 15];
        let rows = &mut rows[..usize::from(n)];
        let mut addr = self.regs.i;
        for row in rows.iter_mut() {
            *row = self.memory.read(addr);
            addr = addr.wrapping_add(1);
        }
        let (vx, vy) = (self.reg(x), self.reg(y));
        let collision = self.display.draw_sprite(vx, vy, rows);
        self.set_flag(collision);
    }

    fn op_wait_key(&mut self, x: u8) {
        match self.keypad.first_pressed() {
            Some(key) => self.set_reg(x, key),
            // Re-run this instruction next cycle.
            None => self.regs.pc = self.regs.pc.wrapping_sub(2),
        }
    }

    fn op_bcd(&mut self, x: u8) {
        let value = self.reg(x);
        let i = self.regs.i;
        self.memory.write(i, value / 100);
        self.memory.write(i.wrapping_add(1), value / 10 % 10);
        self.memory.write(i.wrapping_add(2), value % 10);
    }

    fn op_dump(&mut self, x: u8) {
        let mut addr = self.regs.i;
        for r in 0..=usize::from(x) {
            self.memory.write(addr, self.regs.v[r]);
            addr = addr.wrapping_add(1);
        }
    }

    fn op_load(&mut self, x: u8) {
        let mut addr = self.regs.i;
        for r in 0..=usize::from(x) {
            self.regs.v[r] = self.memory.read(addr);
            addr = addr.wrapping_add(1);
        }
    }
}
