//! Single-pass border enclosure repair
//!
//! Every interior body pixel promotes its empty orthogonal neighbours to
//! border. The pass mutates the grid it reads, so body pixels later in
//! [`raster_order`] observe promotions made earlier in the same pass. The
//! pass runs once; it is not iterated to a fixed point.
//!
//! Interior means `1 <= x <= width - 2` and `1 <= y <= height - 2`. Body
//! pixels on the outermost rows and columns are never inspected.

use crate::pipeline::resolve::ResolvedRole;
use crate::spatial::grid::{
    Grid, grid_height, grid_width, is_interior, orthogonal_neighbors, raster_order,
};

/// Enclose interior body pixels with border, returning how many pixels were promoted
pub fn repair_borders(grid: &mut Grid<ResolvedRole>) -> usize {
    let (width, height) = (grid_width(grid), grid_height(grid));
    let mut promoted = 0;

    for (x, y) in raster_order(width, height) {
        if !is_interior(x, y, width, height) || grid.get([y, x]) != Some(&ResolvedRole::Body) {
            continue;
        }

        for (nx, ny) in orthogonal_neighbors(x, y) {
            if let Some(neighbor) = grid.get_mut([ny, nx]) {
                if *neighbor == ResolvedRole::Empty {
                    *neighbor = ResolvedRole::Border;
                    promoted += 1;
                }
            }
        }
    }

    promoted
}
