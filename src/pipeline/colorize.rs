//! Per-pixel colorization
//!
//! Body and border pixels start from the base color plus three jitter draws
//! taken in red, green, blue order. Jitter wraps on overflow. Body pixels
//! then optionally fade with row position and border pixels are darkened;
//! both subtractions stop at zero. Empty pixels are always transparent white
//! and take no draws.

use crate::color::rgba::{BaseColor, FinalColor};
use crate::io::configuration::{BORDER_DARKENING, JITTER_RANGE};
use crate::math::channel::{channel_amount, saturating_reduce_all, wrapping_offset_all};
use crate::pipeline::resolve::ResolvedRole;
use crate::pipeline::settings::Settings;
use crate::spatial::grid::{ColorMatrix, Grid, grid_height, grid_width, raster_order};
use rand::Rng;

/// Draw one jitter amount in `0..JITTER_RANGE`
fn jitter_draw<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    channel_amount(rng.random::<f32>() * JITTER_RANGE)
}

/// Base color channels with three jitter draws applied, in red, green, blue order
pub fn jittered_channels<R: Rng + ?Sized>(base: &BaseColor, rng: &mut R) -> [u8; 3] {
    let offsets = [jitter_draw(rng), jitter_draw(rng), jitter_draw(rng)];
    wrapping_offset_all(base.channels(), offsets)
}

/// Amount a body pixel in `row` darkens by, out of `total_rows`
pub fn fade_amount(fade: f32, row: usize, total_rows: usize) -> u8 {
    if total_rows == 0 {
        return 0;
    }
    channel_amount(fade * (row as f32 / total_rows as f32))
}

/// Final color for a single resolved pixel in `row`
pub fn colorize<R: Rng + ?Sized>(
    role: ResolvedRole,
    base: &BaseColor,
    row: usize,
    total_rows: usize,
    settings: &Settings,
    rng: &mut R,
) -> FinalColor {
    match role {
        ResolvedRole::Body => {
            let mut channels = jittered_channels(base, rng);
            if settings.fade_enabled() {
                channels =
                    saturating_reduce_all(channels, fade_amount(settings.fade, row, total_rows));
            }
            FinalColor::from_channels(channels, base.alpha)
        }
        ResolvedRole::Border => {
            let channels = saturating_reduce_all(jittered_channels(base, rng), BORDER_DARKENING);
            FinalColor::from_channels(channels, base.alpha)
        }
        ResolvedRole::Empty => FinalColor::TRANSPARENT_WHITE,
    }
}

/// Colorize a resolved grid in raster order
pub fn colorize_grid<R: Rng + ?Sized>(
    roles: &Grid<ResolvedRole>,
    base: &BaseColor,
    settings: &Settings,
    rng: &mut R,
) -> ColorMatrix {
    let (width, height) = (grid_width(roles), grid_height(roles));
    let mut matrix = ColorMatrix::new(width, height);

    for (x, y) in raster_order(width, height) {
        if let Some(&role) = roles.get([y, x]) {
            matrix.set(x, y, colorize(role, base, y, height, settings, rng));
        }
    }

    matrix
}
