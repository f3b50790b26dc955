//! Randomized settlement of composite roles
//!
//! Each composite pixel consumes exactly one uniform `f32` draw in `[0, 1)`
//! from the shared stream; definite roles consume nothing. Draws happen in
//! [`raster_order`], which is part of the reproducibility contract.

use crate::io::configuration::{
    BODY_BORDER_THRESHOLD, BODY_EMPTY_THRESHOLD, BORDER_EMPTY_THRESHOLD,
};
use crate::pipeline::classify::PixelRole;
use crate::spatial::grid::{Grid, grid_height, grid_width, raster_order};
use ndarray::Array2;
use rand::Rng;

/// Definite role of a pixel after resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ResolvedRole {
    /// Interior fill
    Body,
    /// Outline
    Border,
    /// Transparent background
    #[default]
    Empty,
}

/// Settle a single role, drawing from `rng` only for composite roles
pub fn resolve<R: Rng + ?Sized>(role: PixelRole, rng: &mut R) -> ResolvedRole {
    match role {
        PixelRole::Body => ResolvedRole::Body,
        PixelRole::Border => ResolvedRole::Border,
        PixelRole::Empty => ResolvedRole::Empty,
        PixelRole::BodyBorder => {
            if rng.random::<f32>() > BODY_BORDER_THRESHOLD {
                ResolvedRole::Body
            } else {
                ResolvedRole::Border
            }
        }
        PixelRole::BodyEmpty => {
            if rng.random::<f32>() > BODY_EMPTY_THRESHOLD {
                ResolvedRole::Body
            } else {
                ResolvedRole::Empty
            }
        }
        PixelRole::BorderEmpty => {
            if rng.random::<f32>() > BORDER_EMPTY_THRESHOLD {
                ResolvedRole::Border
            } else {
                ResolvedRole::Empty
            }
        }
    }
}

/// Settle every role of a grid in raster order
pub fn resolve_grid<R: Rng + ?Sized>(roles: &Grid<PixelRole>, rng: &mut R) -> Grid<ResolvedRole> {
    let (width, height) = (grid_width(roles), grid_height(roles));
    let mut resolved = Array2::from_elem((height, width), ResolvedRole::Empty);

    for (x, y) in raster_order(width, height) {
        if let (Some(&role), Some(cell)) = (roles.get([y, x]), resolved.get_mut([y, x])) {
            *cell = resolve(role, rng);
        }
    }

    resolved
}
