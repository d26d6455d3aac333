/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems.
#[inline]
pub fn scale8(value: u8, scale: u8) -> u8 {
    ((u16::from(value) * u16::from(scale)) >> 8) as u8
}

/// Blend two 8-bit values
///
/// # Arguments
/// * `a` - First value
/// * `b` - Second value
/// * `amount_of_b` - Blend factor (0 = all a, 255 = all b)
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn blend8(a: u8, b: u8, amount_of_b: u8) -> u8 {
    // Integer blend: a + (b - a) * amount / 256. The widening to i32 matters:
    // (b - a) * amount reaches 65025, past i16::MAX.
    let a = i32::from(a);
    let b = i32::from(b);
    let amount = i32::from(amount_of_b);

    (a + (((b - a) * amount) >> 8)) as u8
}
