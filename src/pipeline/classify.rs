//! Marker color classification
//!
//! | Marker                 | Role          |
//! |------------------------|---------------|
//! | red `(max, 0, 0)`      | `Border`      |
//! | green `(0, max, 0)`    | `Body`        |
//! | cyan `(0, max, max)`   | `BodyEmpty`   |
//! | yellow `(max, max, 0)` | `BodyBorder`  |
//! | magenta `(max, 0, max)`| `BorderEmpty` |
//! | anything else          | `Empty`       |
//!
//! Markers must be fully opaque and match exactly; there is no tolerance.

use crate::io::configuration::{MARKER_FULL, MARKER_NONE};
use crate::io::template::TemplateSource;
use crate::spatial::grid::Grid;
use image::Rgba;
use ndarray::Array2;

/// Structural role encoded by a template pixel
///
/// The last three variants are composite: they are settled randomly into one
/// of their two halves before any later stage sees them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelRole {
    /// Interior fill
    Body,
    /// Outline
    Border,
    /// Transparent background
    Empty,
    /// Either body or border
    BodyBorder,
    /// Either body or empty
    BodyEmpty,
    /// Either border or empty
    BorderEmpty,
}

impl PixelRole {
    /// Whether this role still needs random resolution
    pub const fn is_composite(self) -> bool {
        matches!(self, Self::BodyBorder | Self::BodyEmpty | Self::BorderEmpty)
    }
}

/// Map a template color to its role
pub const fn classify(color: Rgba<u16>) -> PixelRole {
    let [r, g, b, a] = color.0;
    if a != MARKER_FULL {
        return PixelRole::Empty;
    }

    match (r, g, b) {
        (MARKER_FULL, MARKER_NONE, MARKER_NONE) => PixelRole::Border,
        (MARKER_NONE, MARKER_FULL, MARKER_NONE) => PixelRole::Body,
        (MARKER_NONE, MARKER_FULL, MARKER_FULL) => PixelRole::BodyEmpty,
        (MARKER_FULL, MARKER_FULL, MARKER_NONE) => PixelRole::BodyBorder,
        (MARKER_FULL, MARKER_NONE, MARKER_FULL) => PixelRole::BorderEmpty,
        _ => PixelRole::Empty,
    }
}

/// Classify every pixel of a template into a `[y, x]` indexed role grid
pub fn classify_template<T: TemplateSource + ?Sized>(source: &T) -> Grid<PixelRole> {
    let (width, height) = (source.width(), source.height());
    Array2::from_shape_fn((height, width), |(y, x)| {
        source.color_at(x, y).map_or(PixelRole::Empty, classify)
    })
}
