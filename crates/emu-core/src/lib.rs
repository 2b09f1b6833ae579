//! Core traits and types shared by interpreter cores.
//!
//! A core is stepped one instruction at a time by its owner. Anything that
//! counts down at a fixed rate is `Tickable`, and every component can be
//! inspected through `Observable` without disturbing it.

mod clock;
mod cpu;
mod observable;
mod tickable;
mod ticks;

pub use clock::MasterClock;
pub use cpu::Cpu;
pub use observable::{Observable, Value};
pub use tickable::Tickable;
pub use ticks::Ticks;
