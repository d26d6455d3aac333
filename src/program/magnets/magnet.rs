//! Physical state of one magnet and its per-tick motion update

use rand::Rng;

use crate::color::{Hsv, Rgb, hsv2rgb};

/// Shift factor between sub-pixel magnet positions and LED indices.
pub(crate) const POSITION_SHIFT: u32 = 6;

/// Shift applied to velocity before it moves the position.
/// Empirically chosen so per-tick displacement looks smooth.
const VELOCITY_SHIFT: u32 = 10;

/// Fixed magnet mass. Deriving mass from size (e.g. `size / 64`) is a viable
/// tuning alternative; the fixed divisor is what the visual model ships with.
const MAGNET_MASS: i32 = 2;

/// Convert an LED index to a sub-pixel position.
pub const fn led_pos(index: i32) -> i32 {
    index << POSITION_SHIFT
}

/// Convert a sub-pixel position to an LED index.
pub const fn led_idx(pos: i32) -> i32 {
    pos >> POSITION_SHIFT
}

/// Largest valid sub-pixel position for a strip of `num_leds` LEDs.
pub const fn max_pos(num_leds: i32) -> i32 {
    led_pos(num_leds + 1) - 1
}

/// Magnet polarity
///
/// In this visual model, equal polarity attracts and opposite polarity
/// repels (the inverse of real magnetism, by design).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Polarity {
    North,
    South,
}

impl Polarity {
    pub const fn flipped(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
        }
    }

    /// Offset into the two-color render pattern.
    pub(crate) const fn render_offset(self) -> usize {
        match self {
            Self::North => 0,
            Self::South => 1,
        }
    }

    pub fn random<R: Rng>(rng: &mut R) -> Self {
        if rng.gen_range(0..2) == 0 {
            Self::North
        } else {
            Self::South
        }
    }
}

/// One simulated magnet: a 1-D body with position, size, velocity,
/// acceleration, and polarity. Positions and sizes are in sub-pixel units.
#[derive(Clone, Copy, Debug)]
pub struct Magnet {
    pos: i32,
    size: i32,
    velocity: i32,
    acceleration: i32,
    polarity: Polarity,
}

impl Magnet {
    /// Create a magnet at rest.
    pub const fn spawn(pos: i32, size: i32, polarity: Polarity) -> Self {
        Self {
            pos,
            size,
            velocity: 0,
            acceleration: 0,
            polarity,
        }
    }

    pub const fn position(&self) -> i32 {
        self.pos
    }

    pub const fn size(&self) -> i32 {
        self.size
    }

    pub const fn velocity(&self) -> i32 {
        self.velocity
    }

    pub const fn acceleration(&self) -> i32 {
        self.acceleration
    }

    pub const fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// First LED index covered by the magnet.
    pub const fn led_index(&self) -> i32 {
        led_idx(self.pos)
    }

    /// Number of LEDs covered by the magnet.
    pub const fn led_width(&self) -> i32 {
        led_idx(self.size)
    }

    /// A magnet stays alive until a merge invalidates it.
    pub const fn is_alive(&self) -> bool {
        self.size > 0 && self.pos >= 0
    }

    /// Mark the magnet dead after being absorbed into a neighbour.
    pub(crate) fn invalidate(&mut self) {
        self.pos = -1;
        self.size = 0;
        self.velocity = 0;
        self.acceleration = 0;
    }

    pub(crate) fn set_position(&mut self, pos: i32) {
        self.pos = pos;
    }

    pub(crate) fn grow(&mut self, by: i32) {
        self.size += by;
    }

    pub(crate) fn flip_polarity(&mut self) {
        self.polarity = self.polarity.flipped();
    }

    /// Zero all motion state.
    pub(crate) fn halt(&mut self) {
        self.velocity = 0;
        self.acceleration = 0;
    }

    /// Apply a force to the magnet.
    ///
    /// A magnet flush against either end of the strip with a force pushing
    /// it further out has its motion zeroed instead, so no energy builds up
    /// against a wall. Otherwise the resulting acceleration replaces the
    /// current one only when its magnitude is larger: accelerations never
    /// sum, the strongest neighbouring influence dominates each tick.
    pub fn apply_force(&mut self, force: i32, num_leds: i32) {
        let against_left = led_idx(self.pos) <= 0 && force < 0;
        let against_right = led_idx(self.pos + self.size) >= num_leds - 1 && force > 0;

        if against_left || against_right {
            self.halt();
        } else {
            // Newton's 2nd: a = F / m
            let acceleration = force / MAGNET_MASS;
            if acceleration.abs() > self.acceleration.abs() {
                self.acceleration = acceleration;
            }
        }
    }

    /// Integrate one tick of motion (Euler step).
    ///
    /// The velocity magnitude is shifted down and the sign reapplied, so
    /// negative velocities move exactly as far as positive ones. Positions
    /// are clamped to the strip; hitting an end stop zeroes all motion.
    pub fn step(&mut self, num_leds: i32) {
        self.velocity += self.acceleration;
        if self.velocity == 0 {
            return;
        }

        let delta = self.velocity.abs() >> VELOCITY_SHIFT;
        if self.velocity > 0 {
            self.pos += delta;
        } else {
            self.pos -= delta;
        }

        let limit = max_pos(num_leds);
        if self.pos < 0 {
            self.pos = 0;
            self.halt();
        } else if self.pos + self.size > limit {
            self.pos = limit - self.size;
            self.halt();
        }
    }

    /// Draw the magnet into the frame.
    ///
    /// Every LED covered by the magnet alternates between two hues, phased
    /// by the polarity. Out-of-range LEDs are clipped.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn render(&self, frame: &mut [Rgb], base_hue: u8, hue_offset: u8) {
        let first = self.led_index();
        let width = self.led_width();
        let hues = [base_hue, base_hue.wrapping_sub(hue_offset)];

        for led in first..first + width {
            if led >= 0 && (led as usize) < frame.len() {
                let stripe = (led - first) as usize + self.polarity.render_offset();
                frame[led as usize] = hsv2rgb(Hsv {
                    hue: hues[stripe % 2],
                    sat: 255,
                    val: 255,
                });
            }
        }
    }
}
