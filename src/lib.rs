#![no_std]

//! Magnet simulation programs for addressable LED strips
//!
//! The crate renders visual programs onto a 1-D strip of individually
//! addressable LEDs, one frame per tick. The centerpiece is the `Magnets`
//! program: a discrete-time particle simulation in which up to three magnets
//! spawn into open space, attract or repel each other depending on polarity,
//! collide, and merge into larger magnets.
//!
//! Architecture layers:
//! - `color` - `Rgb`/`Hsv` aliases and HSV conversion
//! - `math8` - 8-bit integer scaling helpers
//! - `frame` - the per-tick render buffer and its helpers
//! - `driver` - hardware abstraction (`StripDriver` trait + implementations)
//! - `settings` - read-only settings snapshot passed into every tick
//! - `program` - program implementations and the [`ProgramSlot`] enum
//! - `composer` - synchronous per-tick orchestrator
//!
//! The composer is generic over `StripDriver`, allowing different hardware
//! backends, and over the RNG, so every program runs deterministically under
//! a seeded generator.

pub mod color;
pub mod composer;
pub mod driver;
pub mod frame;
pub mod math8;
pub mod program;
pub mod settings;

// Composer exports
pub use composer::Composer;

// Driver exports
pub use driver::{MemoryDriver, StripDriver};

// Frame exports
pub use frame::Frame;

// Program exports
pub use program::magnets::MagnetsProgram;
pub use program::{ColorWipeProgram, ConfettiProgram, ProgramId, ProgramImpl, ProgramSlot};

// Settings exports
pub use settings::ProgramSettings;
