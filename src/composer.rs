//! Composer - synchronous per-tick orchestrator
//!
//! The composer owns the active program, the settings snapshot, the RNG,
//! and the output brightness. One call to [`Composer::tick`] renders one
//! frame and writes it to the driver; the caller decides the cadence, so
//! the composer never blocks or sleeps. Programs see a settings snapshot
//! that only changes between ticks.

use rand::Rng;

use crate::driver::StripDriver;
use crate::frame::{self, Frame};
use crate::math8::scale8;
use crate::program::ProgramSlot;
use crate::settings::{DEFAULT_BRIGHTNESS, ProgramSettings};

/// Composer - the main orchestrator
///
/// Generic over `D: StripDriver` to support different hardware backends and
/// over `R: Rng` so the whole pipeline is deterministic under a seeded
/// generator.
pub struct Composer<D: StripDriver<N>, R: Rng, const N: usize> {
    /// Hardware driver for LED output
    driver: D,
    /// Randomness source handed to programs each tick
    rng: R,
    /// Current active program
    program: ProgramSlot<N>,
    /// Settings snapshot programs read each tick
    settings: ProgramSettings,
    /// Frame the active program paints into, persistent across ticks so
    /// fading programs can leave trails
    frame: Frame<N>,
    /// Output brightness scale (0-255)
    brightness: u8,
    /// Ticks between automatic hue steps; zero disables the rotation
    hue_cycle_ticks: u16,
    hue_cycle_counter: u16,
}

impl<D: StripDriver<N>, R: Rng, const N: usize> Composer<D, R, N> {
    /// Create a composer with no active program.
    pub fn new(driver: D, rng: R) -> Self {
        Self {
            driver,
            rng,
            program: ProgramSlot::default(),
            settings: ProgramSettings::default(),
            frame: frame::black::<N>(),
            brightness: DEFAULT_BRIGHTNESS,
            hue_cycle_ticks: 0,
            hue_cycle_counter: 0,
        }
    }

    /// Set the output brightness scale.
    #[must_use]
    pub fn with_brightness(mut self, brightness: u8) -> Self {
        self.brightness = brightness;
        self
    }

    /// Replace the settings snapshot.
    #[must_use]
    pub fn with_settings(mut self, settings: ProgramSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Rotate the base hue by one step every `ticks` ticks.
    #[must_use]
    pub fn with_hue_cycle(mut self, ticks: u16) -> Self {
        self.hue_cycle_ticks = ticks;
        self
    }

    pub fn settings(&self) -> ProgramSettings {
        self.settings
    }

    pub fn set_hue(&mut self, hue: u8) {
        self.settings.hue = hue;
    }

    pub fn set_reverse(&mut self, reverse: bool) {
        self.settings.reverse = reverse;
    }

    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    pub fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    pub fn program(&self) -> &ProgramSlot<N> {
        &self.program
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Switch to a new program and start it.
    pub fn switch_program(&mut self, program: ProgramSlot<N>) -> bool {
        self.program = program;
        self.program.start()
    }

    /// Render one frame and write it to the driver.
    ///
    /// The program paints into the persistent frame; the brightness scale
    /// is applied to a copy so it never feeds back into the next tick.
    /// Returns the active program's advisory idle hint.
    pub fn tick(&mut self) -> bool {
        let idle = self
            .program
            .update(&mut self.frame, &self.settings, &mut self.rng);

        if self.brightness == 255 {
            self.driver.write(&self.frame);
        } else {
            let mut scaled = self.frame;
            for pixel in scaled.iter_mut() {
                pixel.r = scale8(pixel.r, self.brightness);
                pixel.g = scale8(pixel.g, self.brightness);
                pixel.b = scale8(pixel.b, self.brightness);
            }
            self.driver.write(&scaled);
        }

        self.advance_hue_cycle();
        idle
    }

    fn advance_hue_cycle(&mut self) {
        if self.hue_cycle_ticks == 0 {
            return;
        }
        self.hue_cycle_counter += 1;
        if self.hue_cycle_counter >= self.hue_cycle_ticks {
            self.hue_cycle_counter = 0;
            self.settings.hue = self.settings.hue.wrapping_add(1);
        }
    }
}
