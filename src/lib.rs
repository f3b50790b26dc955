//! Procedural sprite colorization driven by color-coded template images
//!
//! A template marks each pixel with one of six marker colors describing its
//! structural role. Generation classifies those markers, settles ambiguous
//! markers with a seeded random stream, closes gaps in the outline, then
//! colorizes every pixel from a single base color and optionally mirrors
//! the result.

#![forbid(unsafe_code)]

/// Base and output color types
pub mod color;
/// Template loading, error handling, configuration and the command-line front end
pub mod io;
/// Channel arithmetic policies used by colorization
pub mod math;
/// The generation stages and their orchestration
pub mod pipeline;
/// Grid storage and the traversal order shared by all stages
pub mod spatial;

pub use color::rgba::{BaseColor, FinalColor};
pub use io::error::{GenerationError, Result};
pub use pipeline::executor::{Generation, generate, generate_from_source, generate_with_rng};
pub use pipeline::settings::Settings;
