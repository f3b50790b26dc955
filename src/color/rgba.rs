//! Base colors supplied by callers and the final colors written to the output matrix

use crate::io::error::{Result, invalid_parameter};
use rand::Rng;

/// Caller-supplied color every body and border pixel is derived from
///
/// `alpha` is carried through to body and border pixels unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseColor {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha magnitude copied to every non-empty pixel
    pub alpha: f32,
}

impl BaseColor {
    /// Construct a color from explicit components
    pub const fn new(r: u8, g: u8, b: u8, alpha: f32) -> Self {
        Self { r, g, b, alpha }
    }

    /// Draw a fully random color with the given alpha
    ///
    /// The generator is supplied by the caller so that color selection can be
    /// reproduced alongside a seeded generation run.
    pub fn random<R: Rng + ?Sized>(alpha: f32, rng: &mut R) -> Self {
        Self {
            r: rng.random(),
            g: rng.random(),
            b: rng.random(),
            alpha,
        }
    }

    /// Parse a `rrggbb` hex triplet, with or without a leading `#`
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not exactly six hexadecimal digits
    pub fn from_hex(text: &str, alpha: f32) -> Result<Self> {
        let digits = text.strip_prefix('#').unwrap_or(text);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid_parameter(
                "color",
                &text,
                &"expected six hexadecimal digits such as #3a7f2c",
            ));
        }

        let channel = |range: std::ops::Range<usize>| {
            digits
                .get(range)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .ok_or_else(|| invalid_parameter("color", &text, &"malformed channel"))
        };

        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
            alpha,
        })
    }

    /// Red, green and blue channels in order
    pub const fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// Color of a single cell in the generated matrix
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FinalColor {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha magnitude, zero for empty pixels
    pub alpha: f32,
}

impl FinalColor {
    /// Color emitted for every empty pixel
    pub const TRANSPARENT_WHITE: Self = Self::new(255, 255, 255, 0.0);

    /// Construct a color from explicit components
    pub const fn new(r: u8, g: u8, b: u8, alpha: f32) -> Self {
        Self { r, g, b, alpha }
    }

    /// Build a color from a channel triplet and alpha
    pub const fn from_channels(channels: [u8; 3], alpha: f32) -> Self {
        let [r, g, b] = channels;
        Self { r, g, b, alpha }
    }

    /// Red, green and blue channels in order
    pub const fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl Default for FinalColor {
    fn default() -> Self {
        Self::TRANSPARENT_WHITE
    }
}
