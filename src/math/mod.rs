//! Mathematical utilities for colorization

/// Wrapping and saturating channel arithmetic
pub mod channel;
