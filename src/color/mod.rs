//! Color types consumed and produced by generation

/// Base colors supplied by callers and final colors emitted per pixel
pub mod rgba;
