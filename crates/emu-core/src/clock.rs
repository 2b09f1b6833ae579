//! Execution rate configuration.

use crate::Ticks;

/// Rate at which a core is stepped.
///
/// Frame-paced drivers use this to split a second of execution into equal
/// slices between fixed-rate events such as timer decrements.
#[derive(Debug, Clone, Copy)]
pub struct MasterClock {
    /// Steps per second (e.g., `700` instructions per second).
    pub frequency_hz: u64,
}

impl MasterClock {
    #[must_use]
    pub const fn new(frequency_hz: u64) -> Self {
        Self { frequency_hz }
    }

    /// Ticks per frame at the given frame rate (integer division).
    ///
    /// A zero frame rate yields zero ticks rather than dividing by zero.
    #[must_use]
    pub const fn ticks_per_frame(&self, frames_per_second: u64) -> Ticks {
        match self.frequency_hz.checked_div(frames_per_second) {
            Some(n) => Ticks::new(n),
            None => Ticks::ZERO,
        }
    }
}
