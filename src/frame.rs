//! Per-tick render buffer
//!
//! A frame holds one color per physical LED. Programs overwrite the whole
//! frame every tick; the composer post-processes it and hands it to the
//! driver.

use crate::color::Rgb;
use crate::math8::scale8;

/// Render buffer: one color per LED.
pub type Frame<const N: usize> = [Rgb; N];

/// Create an all-black frame.
pub fn black<const N: usize>() -> Frame<N> {
    [Rgb { r: 0, g: 0, b: 0 }; N]
}

/// Overwrite every pixel with black.
pub fn clear(frame: &mut [Rgb]) {
    for pixel in frame.iter_mut() {
        *pixel = Rgb { r: 0, g: 0, b: 0 };
    }
}

/// Whether a pixel holds any light at all.
#[inline]
pub fn is_lit(pixel: Rgb) -> bool {
    pixel.r != 0 || pixel.g != 0 || pixel.b != 0
}

/// Dim every pixel towards black by `amount` (0 = no change, 255 = black).
pub fn fade_to_black(frame: &mut [Rgb], amount: u8) {
    let keep = 255 - amount;
    for pixel in frame.iter_mut() {
        pixel.r = scale8(pixel.r, keep);
        pixel.g = scale8(pixel.g, keep);
        pixel.b = scale8(pixel.b, keep);
    }
}
