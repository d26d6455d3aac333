//! Spawn planning: find open space on the strip and place a new magnet

use rand::Rng;

use crate::color::Rgb;
use crate::frame::is_lit;

use super::magnet::{Magnet, Polarity, led_pos};

/// Shortest open run a magnet may spawn into, in LEDs.
pub(crate) const MIN_OPEN_RUN: usize = 4;

/// Spawned magnets cover two LEDs.
const SPAWN_SIZE_LEDS: i32 = 2;

/// A maximal contiguous run of unlit LEDs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OpenRun {
    pub start: usize,
    pub len: usize,
}

/// Scan the rendered frame left to right for the longest run of unlit
/// pixels. The first of equally long runs wins.
pub fn longest_open_run(frame: &[Rgb]) -> Option<OpenRun> {
    let mut best: Option<OpenRun> = None;
    let mut i = 0;

    while i < frame.len() {
        if is_lit(frame[i]) {
            i += 1;
            continue;
        }
        let start = i;
        while i < frame.len() && !is_lit(frame[i]) {
            i += 1;
        }
        let len = i - start;
        if best.is_none_or(|run| len > run.len) {
            best = Some(OpenRun { start, len });
        }
    }

    best
}

/// Pick a spawn location inside the largest open region of the frame.
///
/// Returns `None` when the largest region is shorter than [`MIN_OPEN_RUN`],
/// which the caller treats as "no room": the whole simulation restarts. The
/// location is uniform inside the run with one LED of margin at each end, so
/// a fresh magnet never collides with a neighbour on its first tick.
pub fn plan_spawn<R: Rng>(frame: &[Rgb], rng: &mut R) -> Option<Magnet> {
    let run = longest_open_run(frame)?;
    if run.len < MIN_OPEN_RUN {
        return None;
    }

    let led = rng.gen_range(run.start + 1..run.start + run.len - 2);
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    let pos = led_pos(led as i32);

    Some(Magnet::spawn(
        pos,
        led_pos(SPAWN_SIZE_LEDS),
        Polarity::random(rng),
    ))
}
