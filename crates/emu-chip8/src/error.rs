//! Interpreter faults.

use thiserror::Error;

/// Faults raised by the loader or by programs that leave the defined
/// behaviour of the instruction set.
///
/// A faulting instruction changes nothing beyond the fetch that latched it,
/// so the machine can be inspected and stepped again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Chip8Error {
    #[error("program image is {size} bytes but only {max} bytes fit from 0x200")]
    ProgramTooLarge { size: usize, max: usize },

    #[error("stack overflow: call at {pc:#05X} with all 16 return slots in use")]
    StackOverflow { pc: u16 },

    #[error("stack underflow: return at {pc:#05X} with an empty call stack")]
    StackUnderflow { pc: u16 },

    #[error("key {key:#04X} tested at {pc:#05X} is outside the 16-key pad")]
    InvalidKey { key: u8, pc: u16 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_address() {
        let e = Chip8Error::StackUnderflow { pc: 0x2A4 };
        assert_eq!(
            e.to_string(),
            "stack underflow: return at 0x2A4 with an empty call stack"
        );
        let e = Chip8Error::InvalidKey { key: 0x13, pc: 0x200 };
        assert_eq!(e.to_string(), "key 0x13 tested at 0x200 is outside the 16-key pad");
    }
}
