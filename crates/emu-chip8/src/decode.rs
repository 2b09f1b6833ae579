//! Opcode decoding.
//!
//! The top nibble picks the instruction family. Families 0x0, 0x8 and 0xE
//! are refined by the low nibble and family 0xF by the low byte. Every
//! other family maps to a single instruction whatever its low bits say.
//! Sub-indices with no instruction decode to `Unassigned`, which executes
//! as a no-op.

use std::fmt;

/// One decoded CHIP-8 instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// 00E0 - CLS. Any 0x0 opcode with low nibble 0.
    ClearScreen,
    /// 00EE - RET. Any 0x0 opcode with low nibble E.
    Return,
    /// 0nnn - SYS addr. Machine code routine; ignored.
    Sys { addr: u16 },
    /// 1nnn - JP addr.
    Jump { addr: u16 },
    /// 2nnn - CALL addr.
    Call { addr: u16 },
    /// 3xkk - SE Vx, byte.
    SkipEqImm { x: u8, kk: u8 },
    /// 4xkk - SNE Vx, byte.
    SkipNeImm { x: u8, kk: u8 },
    /// 5xy0 - SE Vx, Vy.
    SkipEqReg { x: u8, y: u8 },
    /// 6xkk - LD Vx, byte.
    LoadImm { x: u8, kk: u8 },
    /// 7xkk - ADD Vx, byte.
    AddImm { x: u8, kk: u8 },
    /// 8xy0 - LD Vx, Vy.
    Move { x: u8, y: u8 },
    /// 8xy1 - OR Vx, Vy.
    Or { x: u8, y: u8 },
    /// 8xy2 - AND Vx, Vy.
    And { x: u8, y: u8 },
    /// 8xy3 - XOR Vx, Vy.
    Xor { x: u8, y: u8 },
    /// 8xy4 - ADD Vx, Vy.
    AddReg { x: u8, y: u8 },
    /// 8xy5 - SUB Vx, Vy.
    SubReg { x: u8, y: u8 },
    /// 8xy6 - SHR Vx.
    ShiftRight { x: u8 },
    /// 8xy7 - SUBN Vx, Vy.
    SubNReg { x: u8, y: u8 },
    /// 8xyE - SHL Vx.
    ShiftLeft { x: u8 },
    /// 9xy0 - SNE Vx, Vy.
    SkipNeReg { x: u8, y: u8 },
    /// Annn - LD I, addr.
    SetIndex { addr: u16 },
    /// Bnnn - JP V0, addr.
    JumpOffset { addr: u16 },
    /// Cxkk - RND Vx, byte.
    Random { x: u8, kk: u8 },
    /// Dxyn - DRW Vx, Vy, n.
    Draw { x: u8, y: u8, n: u8 },
    /// Ex9E - SKP Vx. Any 0xE opcode with low nibble E.
    SkipKey { x: u8 },
    /// ExA1 - SKNP Vx. Any 0xE opcode with low nibble 1.
    SkipNotKey { x: u8 },
    /// Fx07 - LD Vx, DT.
    GetDelay { x: u8 },
    /// Fx0A - LD Vx, K.
    WaitKey { x: u8 },
    /// Fx15 - LD DT, Vx.
    SetDelay { x: u8 },
    /// Fx18 - LD ST, Vx.
    SetSound { x: u8 },
    /// Fx1E - ADD I, Vx.
    AddIndex { x: u8 },
    /// Fx29 - LD F, Vx.
    GlyphAddr { x: u8 },
    /// Fx33 - LD B, Vx.
    StoreBcd { x: u8 },
    /// Fx55 - LD [I], Vx.
    DumpRegs { x: u8 },
    /// Fx65 - LD Vx, [I].
    LoadRegs { x: u8 },
    /// No instruction at this sub-index; ignored.
    Unassigned(u16),
}

impl Instruction {
    /// Decode a 16-bit opcode. Never fails.
    #[must_use]
    pub const fn decode(opcode: u16) -> Self {
        let x = ((opcode >> 8) & 0xF) as u8;
        let y = ((opcode >> 4) & 0xF) as u8;
        let n = (opcode & 0xF) as u8;
        let kk = (opcode & 0xFF) as u8;
        let addr = opcode & 0x0FFF;

        match opcode >> 12 {
            0x0 => match n {
                0x0 => Self::ClearScreen,
                0xE => Self::Return,
                _ => Self::Sys { addr },
            },
            0x1 => Self::Jump { addr },
            0x2 => Self::Call { addr },
            0x3 => Self::SkipEqImm { x, kk },
            0x4 => Self::SkipNeImm { x, kk },
            0x5 => Self::SkipEqReg { x, y },
            0x6 => Self::LoadImm { x, kk },
            0x7 => Self::AddImm { x, kk },
            0x8 => match n {
                0x0 => Self::Move { x, y },
                0x1 => Self::Or { x, y },
                0x2 => Self::And { x, y },
                0x3 => Self::Xor { x, y },
                0x4 => Self::AddReg { x, y },
                0x5 => Self::SubReg { x, y },
                0x6 => Self::ShiftRight { x },
                0x7 => Self::SubNReg { x, y },
                0xE => Self::ShiftLeft { x },
                _ => Self::Unassigned(opcode),
            },
            0x9 => Self::SkipNeReg { x, y },
            0xA => Self::SetIndex { addr },
            0xB => Self::JumpOffset { addr },
            0xC => Self::Random { x, kk },
            0xD => Self::Draw { x, y, n },
            0xE => match n {
                0xE => Self::SkipKey { x },
                0x1 => Self::SkipNotKey { x },
                _ => Self::Unassigned(opcode),
            },
            0xF => match kk {
                0x07 => Self::GetDelay { x },
                0x0A => Self::WaitKey { x },
                0x15 => Self::SetDelay { x },
                0x18 => Self::SetSound { x },
                0x1E => Self::AddIndex { x },
                0x29 => Self::GlyphAddr { x },
                0x33 => Self::StoreBcd { x },
                0x55 => Self::DumpRegs { x },
                0x65 => Self::LoadRegs { x },
                _ => Self::Unassigned(opcode),
            },
            // opcode >> 12 is at most 0xF
            _ => Self::Unassigned(opcode),
        }
    }

    /// True for instructions that execute as no-ops.
    #[must_use]
    pub const fn is_ignored(self) -> bool {
        matches!(self, Self::Sys { .. } | Self::Unassigned(_))
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::ClearScreen => write!(f, "CLS"),
            Self::Return => write!(f, "RET"),
            Self::Sys { addr } => write!(f, "SYS {addr:#05X}"),
            Self::Jump { addr } => write!(f, "JP {addr:#05X}"),
            Self::Call { addr } => write!(f, "CALL {addr:#05X}"),
            Self::SkipEqImm { x, kk } => write!(f, "SE V{x:X}, {kk:#04X}"),
            Self::SkipNeImm { x, kk } => write!(f, "SNE V{x:X}, {kk:#04X}"),
            Self::SkipEqReg { x, y } => write!(f, "SE V{x:X}, V{y:X}"),
            Self::LoadImm { x, kk } => write!(f, "LD V{x:X}, {kk:#04X}"),
            Self::AddImm { x, kk } => write!(f, "ADD V{x:X}, {kk:#04X}"),
            Self::Move { x, y } => write!(f, "LD V{x:X}, V{y:X}"),
            Self::Or { x, y } => write!(f, "OR V{x:X}, V{y:X}"),
            Self::And { x, y } => write!(f, "AND V{x:X}, V{y:X}"),
            Self::Xor { x, y } => write!(f, "XOR V{x:X}, V{y:X}"),
            Self::AddReg { x, y } => write!(f, "ADD V{x:X}, V{y:X}"),
            Self::SubReg { x, y } => write!(f, "SUB V{x:X}, V{y:X}"),
            Self::ShiftRight { x } => write!(f, "SHR V{x:X}"),
            Self::SubNReg { x, y } => write!(f, "SUBN V{x:X}, V{y:X}"),
            Self::ShiftLeft { x } => write!(f, "SHL V{x:X}"),
            Self::SkipNeReg { x, y } => write!(f, "SNE V{x:X}, V{y:X}"),
            Self::SetIndex { addr } => write!(f, "LD I, {addr:#05X}"),
            Self::JumpOffset { addr } => write!(f, "JP V0, {addr:#05X}"),
            Self::Random { x, kk } => write!(f, "RND V{x:X}, {kk:#04X}"),
            Self::Draw { x, y, n } => write!(f, "DRW V{x:X}, V{y:X}, {n}"),
            Self::SkipKey { x } => write!(f, "SKP V{x:X}"),
            Self::SkipNotKey { x } => write!(f, "SKNP V{x:X}"),
            Self::GetDelay { x } => write!(f, "LD V{x:X}, DT"),
            Self::WaitKey { x } => write!(f, "LD V{x:X}, K"),
            Self::SetDelay { x } => write!(f, "LD DT, V{x:X}"),
            Self::SetSound { x } => write!(f, "LD ST, V{x:X}"),
            Self::AddIndex { x } => write!(f, "ADD I, V{x:X}"),
            Self::GlyphAddr { x } => write!(f, "LD F, V{x:X}"),
            Self::StoreBcd { x } => write!(f, "LD B, V{x:X}"),
            Self::DumpRegs { x } => write!(f, "LD [I], V{x:X}"),
            Self::LoadRegs { x } => write!(f, "LD V{x:X}, [I]"),
            Self::Unassigned(op) => write!(f, "DW {op:#06X}"),
        }
    }
}
