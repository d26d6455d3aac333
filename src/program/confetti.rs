//! Confetti program
//!
//! Fades the whole strip a little each tick and lights one random LED at a
//! jittered hue around the base hue. Fade speed, hue increment, and hue
//! range re-randomize periodically so the texture drifts over time.

use rand::Rng;

use crate::color::{Hsv, hsv2rgb};
use crate::frame::{Frame, fade_to_black};
use crate::program::ProgramImpl;
use crate::settings::ProgramSettings;

/// Ticks between parameter re-rolls (about a minute at 30 fps).
const REROLL_PERIOD: u32 = 1800;

#[derive(Clone, Copy, Debug)]
pub struct ConfettiProgram {
    fade_amount: u8,
    current_hue: u8,
    hue_inc: u8,
    hue_range: u8,
    ticks: u32,
}

impl Default for ConfettiProgram {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfettiProgram {
    pub const fn new() -> Self {
        Self {
            fade_amount: 5,
            current_hue: 0,
            hue_inc: 1,
            hue_range: 255,
            ticks: 0,
        }
    }
}

impl<const N: usize> ProgramImpl<N> for ConfettiProgram {
    fn start(&mut self) -> bool {
        *self = Self::new();
        true
    }

    fn update<R: Rng>(
        &mut self,
        frame: &mut Frame<N>,
        settings: &ProgramSettings,
        rng: &mut R,
    ) -> bool {
        if N == 0 {
            return true;
        }

        // Low values = slower fade.
        fade_to_black(frame, self.fade_amount);

        let position = rng.gen_range(0..N);
        let jitter = rng.gen_range(0..=self.hue_range);
        let hue = settings
            .hue
            .wrapping_add(self.current_hue)
            .wrapping_add(jitter >> 2);
        frame[position] = hsv2rgb(Hsv {
            hue,
            sat: settings.saturation,
            val: 255,
        });

        self.current_hue = self.current_hue.wrapping_add(self.hue_inc);
        self.ticks = self.ticks.wrapping_add(1);
        if self.ticks % REROLL_PERIOD == 0 {
            self.hue_inc = rng.gen_range(1..3);
            self.current_hue = rng.r#gen();
            self.fade_amount = rng.gen_range(3..8);
            self.hue_range = rng.gen_range(64..=254);
        }

        true
    }
}
