//! CPU core trait.

/// An instruction-stepped CPU core.
///
/// The core owns its machine state. The caller decides how often to step
/// it and how to pace anything that must follow wall-clock time.
pub trait Cpu {
    /// The type used for register inspection.
    type Registers;

    /// Fault raised when a program leaves the defined instruction set
    /// behaviour.
    type Error;

    /// Run one fetch/decode/execute pass.
    ///
    /// A fault leaves the core usable; the caller may inspect it, reset it
    /// or keep stepping.
    fn step(&mut self) -> Result<(), Self::Error>;

    /// Returns the current program counter.
    ///
    /// Returns `u32` so narrow address spaces can share the trait. Narrower
    /// CPUs zero-extend.
    fn pc(&self) -> u32;

    /// Returns a snapshot of all registers for inspection.
    fn registers(&self) -> Self::Registers;

    /// Reset the CPU to its power-on state.
    fn reset(&mut self);
}
