//! Reflection of the finished matrix
//!
//! Mirroring copies the first half of the matrix over the second half along
//! the requested axis. When the extent along that axis is odd the middle
//! line keeps its colorized state and the mismatch is reported. Mirroring is
//! not an involution: running it twice does not restore the input.

use crate::pipeline::settings::Settings;
use crate::spatial::grid::ColorMatrix;
use std::fmt;

/// Axis a matrix is reflected across
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MirrorAxis {
    /// Left half copied onto the right half (`mirror_y`)
    Vertical,
    /// Top half copied onto the bottom half (`mirror_x`)
    Horizontal,
}

impl fmt::Display for MirrorAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vertical => write!(f, "across the vertical axis"),
            Self::Horizontal => write!(f, "across the horizontal axis"),
        }
    }
}

/// Odd extent encountered while mirroring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MirrorDimensionMismatch {
    /// Axis that could not be mirrored completely
    pub axis: MirrorAxis,
    /// Width or height along that axis
    pub extent: usize,
}

impl fmt::Display for MirrorDimensionMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "mirroring {} left the middle line of odd extent {} unmatched",
            self.axis, self.extent
        )
    }
}

fn check_extent(axis: MirrorAxis, extent: usize) -> Option<MirrorDimensionMismatch> {
    (extent % 2 != 0).then(|| {
        let mismatch = MirrorDimensionMismatch { axis, extent };
        log::warn!("Partial mirror: {mismatch}");
        mismatch
    })
}

/// Copy each column `x < width / 2` over column `width - 1 - x`
pub fn mirror_columns(matrix: &mut ColorMatrix) -> Option<MirrorDimensionMismatch> {
    let width = matrix.width();
    let mismatch = check_extent(MirrorAxis::Vertical, width);
    for x in 0..width / 2 {
        matrix.copy_column(x, width - 1 - x);
    }
    mismatch
}

/// Copy each row `y < height / 2` over row `height - 1 - y`
pub fn mirror_rows(matrix: &mut ColorMatrix) -> Option<MirrorDimensionMismatch> {
    let height = matrix.height();
    let mismatch = check_extent(MirrorAxis::Horizontal, height);
    for y in 0..height / 2 {
        matrix.copy_row(y, height - 1 - y);
    }
    mismatch
}

/// Apply the mirroring requested by `settings`, columns first, then rows
///
/// Returns every odd-extent mismatch encountered; an empty list means each
/// requested reflection is exact.
pub fn mirror(matrix: &mut ColorMatrix, settings: &Settings) -> Vec<MirrorDimensionMismatch> {
    let mut mismatches = Vec::new();
    if settings.mirror_y {
        mismatches.extend(mirror_columns(matrix));
    }
    if settings.mirror_x {
        mismatches.extend(mirror_rows(matrix));
    }
    mismatches
}
