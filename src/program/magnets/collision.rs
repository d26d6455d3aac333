//! Collision detection and inelastic merging

use rand::Rng;

use super::magnet::{Magnet, led_idx, led_pos};

/// Chance (out of 255) that a merge reverses the surviving polarity.
pub(crate) const POLARITY_REVERSAL_CHANCE: u8 = 32;

/// Detect whether two adjacent magnets overlap on the rendered strip.
///
/// Argument order is normalized so the left magnet is checked against the
/// right one. On overlap the left magnet is clipped so its right edge abuts
/// the right magnet's left edge (never below position zero), preventing
/// visual overlap before the merge runs.
pub fn detect_collision(a: &mut Magnet, b: &mut Magnet) -> bool {
    let (left, right) = if a.position() > b.position() {
        (b, a)
    } else {
        (a, b)
    };

    if led_idx(left.position() + left.size()) >= led_idx(right.position()) {
        let clipped = led_pos(led_idx(right.position() - left.size())).max(0);
        left.set_position(clipped);
        return true;
    }
    false
}

/// Fuse two collided magnets into one larger magnet.
///
/// The merge is inelastic: the survivor takes the leftmost position and the
/// combined size, and starts at rest regardless of incoming momenta. The
/// absorbed magnet is invalidated and must be compacted out of the
/// collection before the next pair is evaluated. With a small fixed chance
/// the survivor's polarity reverses.
pub fn merge<R: Rng>(survivor: &mut Magnet, absorbed: &mut Magnet, rng: &mut R) {
    survivor.set_position(survivor.position().min(absorbed.position()));
    survivor.grow(absorbed.size());
    survivor.halt();

    absorbed.invalidate();

    if rng.r#gen::<u8>() < POLARITY_REVERSAL_CHANCE {
        log::debug!("polarity reversal on merge");
        survivor.flip_polarity();
    }
}
