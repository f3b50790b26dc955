//! Generation constants and runtime configuration defaults

// Marker channel values are compared on the full 16-bit intensity range
/// Channel value of a fully saturated marker component
pub const MARKER_FULL: u16 = u16::MAX;
/// Channel value of an absent marker component
pub const MARKER_NONE: u16 = 0;

// Composite roles resolve to their first role when the draw exceeds the threshold
/// Threshold above which a body/border marker becomes body
pub const BODY_BORDER_THRESHOLD: f32 = 0.5;
/// Threshold above which a body/empty marker becomes body
pub const BODY_EMPTY_THRESHOLD: f32 = 0.7;
/// Threshold above which a border/empty marker becomes border
pub const BORDER_EMPTY_THRESHOLD: f32 = 0.5;

/// Exclusive upper bound of the per-channel jitter added to the base color
pub const JITTER_RANGE: f32 = 25.0;
/// Amount subtracted from each channel of a border pixel
pub const BORDER_DARKENING: u8 = 128;

/// Seed value requesting a fresh random seed instead of a reproducible run
pub const RANDOM_SEED: u64 = 1;
/// Seed used when none is supplied
pub const DEFAULT_SEED: u64 = RANDOM_SEED;
/// Mixed into the run seed to seed the random base color generator
pub const COLOR_SEED_SALT: u64 = 0x9e37_79b9_7f4a_7c15;
/// Alpha used when none is supplied
pub const DEFAULT_ALPHA: f32 = 1.0;

/// Log filter used when the environment does not set one
pub const DEFAULT_LOG_FILTER: &str = "info";

// Output settings
/// Suffix added to matrix listing filenames
pub const OUTPUT_SUFFIX: &str = "_matrix";
/// Extension of matrix listing files
pub const OUTPUT_EXTENSION: &str = "txt";
/// Template file extensions picked up when scanning a directory
pub const TEMPLATE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];
