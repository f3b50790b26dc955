//! Channel arithmetic for colorization
//!
//! Jitter and darkening follow different overflow policies. Jitter wraps
//! around on overflow while fade and border darkening stop at zero, so each
//! policy gets its own named operation and the two are never mixed.

use num_traits::{SaturatingSub, WrappingAdd};

/// Add an offset to a channel, wrapping around on overflow
pub fn wrapping_offset<T: WrappingAdd>(value: T, offset: T) -> T {
    value.wrapping_add(&offset)
}

/// Subtract an amount from a channel, flooring at the type minimum
pub fn saturating_reduce<T: SaturatingSub>(value: T, amount: T) -> T {
    value.saturating_sub(&amount)
}

/// Apply [`wrapping_offset`] to each channel of a triplet
pub fn wrapping_offset_all(channels: [u8; 3], offsets: [u8; 3]) -> [u8; 3] {
    let [r, g, b] = channels;
    let [dr, dg, db] = offsets;
    [
        wrapping_offset(r, dr),
        wrapping_offset(g, dg),
        wrapping_offset(b, db),
    ]
}

/// Apply [`saturating_reduce`] with the same amount to each channel of a triplet
pub fn saturating_reduce_all(channels: [u8; 3], amount: u8) -> [u8; 3] {
    channels.map(|channel| saturating_reduce(channel, amount))
}

/// Convert a non-negative magnitude into an 8-bit channel amount
///
/// Fractions are truncated toward zero; negative and NaN inputs map to 0 and
/// anything above 255 maps to 255.
pub fn channel_amount(magnitude: f32) -> u8 {
    // Float-to-int `as` casts saturate and send NaN to zero
    magnitude as u8
}
