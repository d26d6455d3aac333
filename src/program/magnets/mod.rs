//! Magnetic particle simulation program
//!
//! A discrete-time 1-D particle simulator driving the strip as a side
//! effect. Up to [`MAX_MAGNETS`] magnets live on the strip at once; each
//! tick they move under the forces applied last tick, interact with their
//! right neighbour, merge on contact, and repaint themselves. A phase
//! machine spawns new magnets into open space until the field saturates,
//! and restarts the whole simulation when no room is left.
//!
//! Module layout:
//! - `magnet` - particle state and motion update
//! - `forces` - pairwise attraction/repulsion
//! - `collision` - overlap detection and inelastic merging
//! - `field` - the bounded position-sorted collection
//! - `spawn` - open-space scan and spawn placement

mod collision;
mod field;
mod forces;
mod magnet;
mod spawn;

pub use collision::{detect_collision, merge};
pub use field::{MAX_MAGNETS, MagnetField};
pub use forces::attract;
pub use magnet::{Magnet, Polarity, led_idx, led_pos, max_pos};
pub use spawn::{OpenRun, longest_open_run, plan_spawn};

use rand::Rng;

use crate::color::Rgb;
use crate::frame::{self, Frame};
use crate::program::ProgramImpl;
use crate::settings::ProgramSettings;

/// Upper bound of the random delay between spawn attempts, in ticks.
const SPAWN_DELAY: u8 = 40;

/// Hue distance between the two stripes of a magnet.
const HUE_SPLIT: u8 = 255 / 3;

/// Simulation phase
///
/// `Initial` clears the field and is left immediately; `Spawning` keeps
/// scheduling spawn attempts until the field saturates; `Settling` leaves
/// the simulation to run undisturbed. A merge while settling frees a slot
/// and re-arms `Spawning`; a failed spawn resets to `Initial`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Initial,
    Spawning,
    Settling,
}

/// The magnets program.
#[derive(Clone)]
pub struct MagnetsProgram {
    field: MagnetField,
    phase: Phase,
    delay: u8,
}

impl Default for MagnetsProgram {
    fn default() -> Self {
        Self::new()
    }
}

impl MagnetsProgram {
    pub const fn new() -> Self {
        Self {
            field: MagnetField::new(),
            phase: Phase::Initial,
            delay: 0,
        }
    }

    /// Number of live magnets.
    pub fn magnet_count(&self) -> usize {
        self.field.len()
    }

    /// The current magnet collection.
    pub fn field(&self) -> &MagnetField {
        &self.field
    }

    /// Place a magnet directly onto the strip, bypassing the spawn planner.
    ///
    /// The program continues as if the magnet had just spawned, waiting the
    /// full spawn delay before the next attempt. Returns `false` when the
    /// field is already full.
    pub fn seed_magnet(&mut self, magnet: Magnet) -> bool {
        let inserted = self.field.insert_sorted(magnet);
        if inserted {
            self.phase = Phase::Spawning;
            self.delay = SPAWN_DELAY;
        }
        inserted
    }

    fn advance_phase<R: Rng>(&mut self, frame: &[Rgb], rng: &mut R) {
        match self.phase {
            Phase::Initial => {
                self.field.clear();
                self.delay = 0;
                self.phase = Phase::Spawning;
            }
            Phase::Spawning => {
                if self.delay > 0 {
                    self.delay -= 1;
                    return;
                }
                let Some(magnet) = plan_spawn(frame, rng) else {
                    log::debug!("no room to spawn, restarting simulation");
                    self.phase = Phase::Initial;
                    return;
                };
                if self.field.insert_sorted(magnet) {
                    log::debug!("spawned magnet at led {}", magnet.led_index());
                }
                if self.field.is_full() {
                    self.phase = Phase::Settling;
                } else {
                    self.delay = rng.gen_range(10..SPAWN_DELAY + 10);
                }
            }
            Phase::Settling => {
                if !self.field.is_full() {
                    // A merge freed a slot; resume spawning after the full delay.
                    self.delay = SPAWN_DELAY;
                    self.phase = Phase::Spawning;
                }
            }
        }
    }
}

impl<const N: usize> ProgramImpl<N> for MagnetsProgram {
    fn start(&mut self) -> bool {
        self.phase = Phase::Initial;
        true
    }

    /// One simulation tick. The order is load-bearing: every magnet moves,
    /// then interacts with its right neighbour, then collided pairs merge
    /// and the field compacts before the next pair is looked at, then the
    /// magnet repaints itself. The phase machine advances last, scanning the
    /// freshly rendered frame.
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn update<R: Rng>(
        &mut self,
        frame: &mut Frame<N>,
        settings: &ProgramSettings,
        rng: &mut R,
    ) -> bool {
        frame::clear(frame);

        let num_leds = N as i32;
        let mut idle = true;
        let mut i = 0;
        while i < self.field.len() {
            self.field[i].step(num_leds);

            if i + 1 < self.field.len() {
                let (current, next) = self.field.pair_mut(i);
                attract(current, next, num_leds);
                if detect_collision(current, next) {
                    merge(current, next, rng);
                    // The absorbed slot must be gone before the next pair
                    // is evaluated, since indices shift.
                    self.field.compact();
                }
            }

            if self.field[i].velocity() != 0 {
                idle = false;
            }
            self.field[i].render(frame, settings.hue, HUE_SPLIT);
            i += 1;
        }

        self.advance_phase(frame, rng);
        idle
    }
}
