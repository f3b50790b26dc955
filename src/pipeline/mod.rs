//! Generation pipeline: classification, resolution, repair, colorization and mirroring
//!
//! Data flows once through the stages in that order. Resolution and
//! colorization share a single random stream which is consumed strictly in
//! [`raster_order`](crate::spatial::raster_order).

/// Marker color classification
pub mod classify;
/// Per-pixel colorization with jitter, fade and border darkening
pub mod colorize;
/// Orchestration of the full generation run
pub mod executor;
/// Optional reflection of the finished matrix
pub mod mirror;
/// Single-pass border enclosure repair
pub mod repair;
/// Randomized settlement of composite roles
pub mod resolve;
/// Generation settings and seed handling
pub mod settings;
