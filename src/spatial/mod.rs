//! Spatial data structures shared by the generation stages
//!
//! This module contains:
//! - The raster traversal order every stage follows
//! - The output color matrix

/// Grid storage and traversal order
pub mod grid;

pub use grid::{ColorMatrix, raster_order};
