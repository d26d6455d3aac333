//! Sweeping color wipe program
//!
//! A wiper runs along the strip repainting it with a hue one third of the
//! color wheel away from the previous pass. Honours the reverse setting.

use rand::Rng;

use crate::color::{Hsv, hsv2rgb};
use crate::frame::Frame;
use crate::program::ProgramImpl;
use crate::settings::ProgramSettings;

/// Hue step between successive passes (one third of the wheel).
const HUE_DELTA: u8 = 255 / 3;

#[derive(Clone, Copy, Debug, Default)]
pub struct ColorWipeProgram {
    wiper: usize,
    hue_offset: u8,
}

impl ColorWipeProgram {
    pub const fn new() -> Self {
        Self {
            wiper: 0,
            hue_offset: 0,
        }
    }

    fn advance_hue(&mut self) {
        if self.hue_offset <= 255 - HUE_DELTA {
            self.hue_offset += HUE_DELTA;
        } else {
            self.hue_offset = HUE_DELTA;
        }
    }
}

impl<const N: usize> ProgramImpl<N> for ColorWipeProgram {
    fn start(&mut self) -> bool {
        self.wiper = 0;
        self.hue_offset = 0;
        true
    }

    fn update<R: Rng>(
        &mut self,
        frame: &mut Frame<N>,
        settings: &ProgramSettings,
        _rng: &mut R,
    ) -> bool {
        for (i, pixel) in frame.iter_mut().enumerate() {
            let hue = if i < self.wiper {
                // new color
                settings
                    .hue
                    .wrapping_add(self.hue_offset)
                    .wrapping_add(HUE_DELTA)
            } else {
                // previous color
                settings.hue.wrapping_add(self.hue_offset)
            };
            *pixel = hsv2rgb(Hsv {
                hue,
                sat: settings.saturation,
                val: 255,
            });
        }

        if settings.reverse {
            if self.wiper == 0 {
                self.wiper = N.saturating_sub(1);
                self.advance_hue();
            } else {
                self.wiper -= 1;
            }
        } else {
            self.wiper += 1;
            if self.wiper >= N {
                self.wiper = 0;
                self.advance_hue();
            }
        }

        self.wiper == 0
    }
}
