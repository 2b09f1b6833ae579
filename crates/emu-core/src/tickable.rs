//! Trait for components that count down at a fixed rate.

use crate::Ticks;

/// A component that is advanced by discrete ticks of its own clock.
///
/// Timers, counters and other rate-driven parts implement this. The owner
/// decides when a tick happens.
pub trait Tickable {
    /// Advance the component by one tick.
    fn tick(&mut self);

    /// Advance the component by multiple ticks.
    ///
    /// Default implementation calls `tick()` in a loop. Components may
    /// override for efficiency, but must produce identical results.
    fn tick_n(&mut self, count: Ticks) {
        for _ in 0..count.get() {
            self.tick();
        }
    }
}
