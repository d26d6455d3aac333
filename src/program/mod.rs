//! Program system with compile-time known program variants
//!
//! All programs are stored in an enum to avoid heap allocations.
//! Each program implements the [`ProgramImpl`] trait.

mod color_wipe;
mod confetti;
pub mod magnets;

pub use color_wipe::ColorWipeProgram;
pub use confetti::ConfettiProgram;
pub use magnets::MagnetsProgram;

use rand::Rng;

use crate::frame::{self, Frame};
use crate::settings::ProgramSettings;

/// Trait for program implementations
///
/// A program repaints the whole frame once per tick. Programs are stateful
/// between ticks and receive a fresh settings snapshot and the RNG each tick.
pub trait ProgramImpl<const N: usize> {
    /// Prepare the program for a fresh run.
    ///
    /// Called when the program is activated. Returns whether activation
    /// succeeded (always `true` for the built-in programs).
    fn start(&mut self) -> bool {
        true
    }

    /// Render one tick into `frame`.
    ///
    /// Returns `true` when the tick ended at a natural idle point, a hint an
    /// auto-advance scheduler may use to switch programs. The value is
    /// advisory; it never signals an error.
    fn update<R: Rng>(
        &mut self,
        frame: &mut Frame<N>,
        settings: &ProgramSettings,
        rng: &mut R,
    ) -> bool;
}

/// Program slot - enum containing all possible programs
///
/// Using an enum instead of trait objects allows:
/// - Zero heap allocations
/// - Known size at compile time
/// - Better optimization opportunities
#[derive(Clone)]
pub enum ProgramSlot<const N: usize> {
    /// No program - all LEDs off
    Off,
    /// Magnetic particle simulation
    Magnets(MagnetsProgram),
    /// Sweeping color wipe
    ColorWipe(ColorWipeProgram),
    /// Random fading flashes
    Confetti(ConfettiProgram),
}

impl<const N: usize> Default for ProgramSlot<N> {
    fn default() -> Self {
        Self::Off
    }
}

/// Known program names that can be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProgramId {
    Magnets,
    ColorWipe,
    Confetti,
}

pub const PROGRAM_NAME_MAGNETS: &str = "magnets";
pub const PROGRAM_NAME_COLOR_WIPE: &str = "color_wipe";
pub const PROGRAM_NAME_CONFETTI: &str = "confetti";

impl ProgramId {
    pub fn to_program_slot<const N: usize>(self) -> ProgramSlot<N> {
        match self {
            Self::Magnets => ProgramSlot::Magnets(MagnetsProgram::new()),
            Self::ColorWipe => ProgramSlot::ColorWipe(ColorWipeProgram::new()),
            Self::Confetti => ProgramSlot::Confetti(ConfettiProgram::new()),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Magnets => PROGRAM_NAME_MAGNETS,
            Self::ColorWipe => PROGRAM_NAME_COLOR_WIPE,
            Self::Confetti => PROGRAM_NAME_CONFETTI,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            PROGRAM_NAME_MAGNETS => Some(Self::Magnets),
            PROGRAM_NAME_COLOR_WIPE => Some(Self::ColorWipe),
            PROGRAM_NAME_CONFETTI => Some(Self::Confetti),
            _ => None,
        }
    }
}

impl<const N: usize> ProgramSlot<N> {
    /// Start the current program
    pub fn start(&mut self) -> bool {
        match self {
            Self::Off => true,
            Self::Magnets(program) => ProgramImpl::<N>::start(program),
            Self::ColorWipe(program) => ProgramImpl::<N>::start(program),
            Self::Confetti(program) => ProgramImpl::<N>::start(program),
        }
    }

    /// Render one tick of the current program
    pub fn update<R: Rng>(
        &mut self,
        frame: &mut Frame<N>,
        settings: &ProgramSettings,
        rng: &mut R,
    ) -> bool {
        match self {
            Self::Off => {
                frame::clear(frame);
                true
            }
            Self::Magnets(program) => program.update(frame, settings, rng),
            Self::ColorWipe(program) => program.update(frame, settings, rng),
            Self::Confetti(program) => program.update(frame, settings, rng),
        }
    }

    /// Check if the slot is Off
    pub fn is_off(&self) -> bool {
        matches!(self, Self::Off)
    }

    /// Get the program ID, if a program is active
    pub fn program_id(&self) -> Option<ProgramId> {
        match self {
            Self::Off => None,
            Self::Magnets(_) => Some(ProgramId::Magnets),
            Self::ColorWipe(_) => Some(ProgramId::ColorWipe),
            Self::Confetti(_) => Some(ProgramId::Confetti),
        }
    }
}
