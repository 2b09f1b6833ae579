//! Linear congruential generator behind the random instruction.

use rand::{RngCore, SeedableRng};

/// Seed the reference interpreter starts from.
pub const DEFAULT_SEED: u32 = 0xB16B_00B5;

const MULTIPLIER: u32 = 1_103_515_245;
const INCREMENT: u32 = 12_345;
/// Modulus 2^31.
const MODULUS_MASK: u32 = 0x7FFF_FFFF;

/// `seed = (seed * 1103515245 + 12345) mod 2^31`.
///
/// Deterministic and not suitable for anything but games. Any other
/// `RngCore` can be injected with `Chip8::with_rng`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lcg {
    seed: u32,
}

impl Lcg {
    #[must_use]
    pub const fn new(seed: u32) -> Self {
        Self { seed }
    }

    fn advance(&mut self) -> u32 {
        self.seed = self
            .seed
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(INCREMENT)
            & MODULUS_MASK;
        self.seed
    }
}

impl Default for Lcg {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl RngCore for Lcg {
    fn next_u32(&mut self) -> u32 {
        self.advance()
    }

    fn next_u64(&mut self) -> u64 {
        let lo = u64::from(self.advance());
        let hi = u64::from(self.advance());
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.advance().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

impl SeedableRng for Lcg {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }
}
