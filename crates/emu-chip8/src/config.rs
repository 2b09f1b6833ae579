//! CHIP-8 system configuration.

/// Pacing and seeding for `Chip8System`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chip8Config {
    /// Instructions executed per second of emulated time. Defaults to 700.
    pub instructions_per_second: u64,
    /// Timer decrement rate in Hz; also the frame rate. Defaults to 60.
    pub timer_hz: u64,
    /// Seed for the random instruction. `None` uses the reference seed.
    pub seed: Option<u32>,
}

impl Default for Chip8Config {
    fn default() -> Self {
        Self {
            instructions_per_second: 700,
            timer_hz: 60,
            seed: None,
        }
    }
}
