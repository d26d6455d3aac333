//! Shared program settings
//!
//! Programs read a snapshot of these settings every tick instead of touching
//! shared mutable state, which keeps them pure and testable in isolation.
//! The snapshot owner (normally the [`crate::Composer`]) decides when values
//! change between ticks.

/// Default base hue (aqua).
pub const DEFAULT_HUE: u8 = 128;
/// Default saturation.
pub const DEFAULT_SATURATION: u8 = 255;
/// Default output brightness.
pub const DEFAULT_BRIGHTNESS: u8 = 96;

/// Read-only settings snapshot passed into every program tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProgramSettings {
    /// Base hue programs derive their colors from
    pub hue: u8,
    /// Color saturation
    pub saturation: u8,
    /// Run direction-sensitive programs backwards
    pub reverse: bool,
}

impl ProgramSettings {
    pub const fn new() -> Self {
        Self {
            hue: DEFAULT_HUE,
            saturation: DEFAULT_SATURATION,
            reverse: false,
        }
    }
}

impl Default for ProgramSettings {
    fn default() -> Self {
        Self::new()
    }
}
