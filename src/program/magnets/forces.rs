//! Pairwise force model

use super::magnet::Magnet;

/// Scaling constant keeping fixed-point resolution in the force term.
const FORCE_SCALE: i32 = 1 << 20;

/// Compute and apply the force between two adjacent magnets.
///
/// Argument order is normalized so the left magnet is measured first; the
/// comparison has no side effects. Force magnitude is inverse to distance
/// (not distance squared), tuned for the visual model. Equal polarity
/// attracts, opposite polarity repels. Both magnets receive the force with
/// opposite signs (Newton's third law).
///
/// Returns whether any nonzero force was applied.
pub fn attract(a: &mut Magnet, b: &mut Magnet, num_leds: i32) -> bool {
    let (left, right) = if a.position() > b.position() {
        (b, a)
    } else {
        (a, b)
    };

    let distance = right.position() - left.position() + left.size();
    let mut force = 0;
    if distance > 0 {
        force = FORCE_SCALE / distance;
    }
    // An already-overlapping pair feels no force; collision handling takes over.

    if left.polarity() != right.polarity() {
        // Opposite polarity repels instead of attracting
        force = -force;
    }

    left.apply_force(force, num_leds);
    right.apply_force(-force, num_leds);

    force != 0
}
