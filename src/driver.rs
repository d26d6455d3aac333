//! LED driver abstraction layer
//!
//! Provides a trait-based abstraction for LED strip drivers,
//! allowing the composer to be hardware-agnostic.

use crate::color::Rgb;

/// Abstract LED strip driver trait
///
/// Implement this trait to support different hardware platforms.
/// The composer is generic over this trait.
pub trait StripDriver<const N: usize> {
    /// Write colors to the LED strip
    fn write(&mut self, frame: &[Rgb; N]);
}

/// Driver that keeps the last written frame in memory.
///
/// Useful for host-side tests and for mirroring strip contents into
/// other sinks.
#[derive(Clone)]
pub struct MemoryDriver<const N: usize> {
    last: [Rgb; N],
}

impl<const N: usize> MemoryDriver<N> {
    pub fn new() -> Self {
        Self {
            last: [Rgb { r: 0, g: 0, b: 0 }; N],
        }
    }

    /// The most recently written frame.
    pub fn last_frame(&self) -> &[Rgb; N] {
        &self.last
    }
}

impl<const N: usize> Default for MemoryDriver<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> StripDriver<N> for MemoryDriver<N> {
    fn write(&mut self, frame: &[Rgb; N]) {
        self.last = *frame;
    }
}
