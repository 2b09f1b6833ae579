//! Frame-paced CHIP-8 system.
//!
//! `Chip8::cycle()` ticks the timers once per instruction, which is only
//! right when instructions run at 60 Hz. This driver runs a frame's worth
//! of instructions (`instructions_per_second / timer_hz`) and then ticks the
//! timers once, so the timers keep 60 Hz whatever the instruction rate.
//! The caller still decides when a frame starts in wall-clock time.

use emu_core::{MasterClock, Observable, Ticks, Value};
use log::debug;

use crate::config::Chip8Config;
use crate::cpu::Chip8;
use crate::error::Chip8Error;
use crate::rng::Lcg;

/// CHIP-8 interpreter plus frame pacing.
pub struct Chip8System {
    cpu: Chip8<Lcg>,
    /// Instructions per frame.
    ticks_per_frame: Ticks,
    /// Completed frame counter.
    frame_count: u64,
}

impl Chip8System {
    #[must_use]
    pub fn new(config: &Chip8Config) -> Self {
        let rng = config.seed.map_or_else(Lcg::default, Lcg::new);
        let ticks_per_frame =
            MasterClock::new(config.instructions_per_second).ticks_per_frame(config.timer_hz);
        debug!(
            "chip8: {} instructions per frame at {} Hz",
            ticks_per_frame.get(),
            config.timer_hz
        );
        Self {
            cpu: Chip8::with_rng(rng),
            ticks_per_frame,
            frame_count: 0,
        }
    }

    /// Copy a program image to 0x200.
    pub fn load_program(&mut self, data: &[u8]) -> Result<(), Chip8Error> {
        self.cpu.load_program(data)
    }

    /// Run one frame: a frame's worth of instructions, then one timer tick.
    ///
    /// Returns the number of instructions executed. A fault ends the frame
    /// early, without the timer tick, and is returned.
    pub fn run_frame(&mut self) -> Result<Ticks, Chip8Error> {
        let mut executed = Ticks::ZERO;
        while executed < self.ticks_per_frame {
            self.cpu.execute_next()?;
            executed += Ticks::new(1);
        }
        self.cpu.tick_timers();
        self.frame_count += 1;
        Ok(executed)
    }

    /// Instructions per frame.
    #[must_use]
    pub const fn ticks_per_frame(&self) -> Ticks {
        self.ticks_per_frame
    }

    /// Completed frames.
    #[must_use]
    pub const fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Instructions executed since creation or reset.
    #[must_use]
    pub const fn total_ticks(&self) -> Ticks {
        self.cpu.total_ticks()
    }

    #[must_use]
    pub fn cpu(&self) -> &Chip8<Lcg> {
        &self.cpu
    }

    pub fn cpu_mut(&mut self) -> &mut Chip8<Lcg> {
        &mut self.cpu
    }
}

const SYSTEM_QUERY_PATHS: &[&str] = &[
    "frames", "ticks",
    "cpu.v0", "cpu.v1", "cpu.v2", "cpu.v3", "cpu.v4", "cpu.v5", "cpu.v6", "cpu.v7",
    "cpu.v8", "cpu.v9", "cpu.va", "cpu.vb", "cpu.vc", "cpu.vd", "cpu.ve", "cpu.vf",
    "cpu.i", "cpu.pc", "cpu.sp", "cpu.stack", "cpu.opcode",
    "cpu.dt", "cpu.st", "cpu.keys", "cpu.display.lit", "cpu.ticks",
];

impl Observable for Chip8System {
    fn query(&self, path: &str) -> Option<Value> {
        if let Some(rest) = path.strip_prefix("cpu.") {
            return self.cpu.query(rest);
        }
        match path {
            "frames" => Some(self.frame_count.into()),
            "ticks" => Some(self.cpu.total_ticks().get().into()),
            _ => None,
        }
    }

    fn query_paths(&self) -> &'static [&'static str] {
        SYSTEM_QUERY_PATHS
    }
}
