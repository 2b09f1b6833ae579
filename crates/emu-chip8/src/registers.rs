//! CHIP-8 register set.

/// Number of general-purpose registers.
pub const REG_COUNT: usize = 16;

/// Depth of the call stack.
pub const STACK_SIZE: usize = 16;

/// Register file, call stack and latched opcode.
///
/// Also used as the snapshot returned by `Cpu::registers()`, which fills
/// in the timer values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Registers {
    /// V0-VF. VF doubles as the carry/borrow/collision flag.
    pub v: [u8; REG_COUNT],
    /// Index register. Stored unmasked; memory accesses wrap it to 12 bits.
    pub i: u16,
    pub pc: u16,
    /// Number of return addresses in use (0-16).
    pub sp: u8,
    pub stack: [u16; STACK_SIZE],
    /// Opcode fetched by the current cycle.
    pub opcode: u16,
    /// Delay timer at snapshot time.
    pub delay: u8,
    /// Sound timer at snapshot time.
    pub sound: u8,
}

impl Registers {
    /// The flag register.
    #[must_use]
    pub const fn vf(&self) -> u8 {
        self.v[0xF]
    }

    /// Return address on top of the stack, if any.
    #[must_use]
    pub fn stack_top(&self) -> Option<u16> {
        let sp = usize::from(self.sp);
        if sp == 0 {
            None
        } else {
            self.stack.get(sp - 1).copied()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stack_top_follows_sp() {
        let mut regs = Registers::default();
        assert_eq!(regs.stack_top(), None);
        regs.stack[0] = 0x202;
        regs.stack[1] = 0x346;
        regs.sp = 2;
        assert_eq!(regs.stack_top(), Some(0x346));
        regs.sp = 1;
        assert_eq!(regs.stack_top(), Some(0x202));
    }

    #[test]
    fn vf_is_the_last_register() {
        let mut regs = Registers::default();
        regs.v[0xF] = 1;
        assert_eq!(regs.vf(), 1);
    }
}
