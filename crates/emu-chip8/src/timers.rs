//! Delay and sound countdown timers.

use emu_core::Tickable;

/// The two 8-bit countdown timers.
///
/// Each tick decrements both toward zero. They are meant to tick at 60 Hz;
/// `Chip8::cycle()` ticks them once per instruction and `Chip8System` ticks
/// them once per frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timers {
    pub delay: u8,
    pub sound: u8,
}

impl Timers {
    #[must_use]
    pub const fn new() -> Self {
        Self { delay: 0, sound: 0 }
    }

    /// Whether the tone should be sounding.
    #[must_use]
    pub const fn sound_active(&self) -> bool {
        self.sound > 0
    }
}

impl Tickable for Timers {
    fn tick(&mut self) {
        self.delay = self.delay.saturating_sub(1);
        self.sound = self.sound.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use emu_core::Ticks;

    #[test]
    fn tick_floors_at_zero() {
        let mut t = Timers { delay: 1, sound: 0 };
        t.tick();
        assert_eq!(t, Timers { delay: 0, sound: 0 });
        t.tick();
        assert_eq!(t, Timers::new());
    }

    #[test]
    fn tick_n_counts_down_independently() {
        let mut t = Timers { delay: 10, sound: 3 };
        assert!(t.sound_active());
        t.tick_n(Ticks::new(4));
        assert_eq!(t.delay, 6);
        assert_eq!(t.sound, 0);
        assert!(!t.sound_active());
    }
}
