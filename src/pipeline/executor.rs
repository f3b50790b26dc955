//! Orchestration of a full generation run
//!
//! Stages run once each, in order: classification, resolution, repair,
//! colorization, mirroring. One generator is created per run and threaded
//! through resolution and colorization; it is never shared between runs.

use crate::color::rgba::BaseColor;
use crate::io::error::{GenerationError, Result, invalid_parameter};
use crate::io::template::{Template, TemplateSource};
use crate::pipeline::classify::classify_template;
use crate::pipeline::colorize::colorize_grid;
use crate::pipeline::mirror::{MirrorDimensionMismatch, mirror};
use crate::pipeline::repair::repair_borders;
use crate::pipeline::resolve::resolve_grid;
use crate::pipeline::settings::Settings;
use crate::spatial::grid::ColorMatrix;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::Path;

/// Result of a generation run
#[derive(Debug, Clone, PartialEq)]
pub struct Generation {
    /// Generated colors, owned by the caller
    pub matrix: ColorMatrix,
    /// Seed that reproduces this run
    pub seed: u64,
    /// Requested reflections that were only partial because of an odd extent
    pub mirror_mismatches: Vec<MirrorDimensionMismatch>,
}

impl Generation {
    /// Whether every requested reflection was exact
    pub fn is_fully_mirrored(&self) -> bool {
        self.mirror_mismatches.is_empty()
    }

    /// Reject results whose mirroring was only partial
    ///
    /// # Errors
    ///
    /// Returns `MirrorDimensionMismatch` for the first odd extent encountered
    pub fn require_full_mirror(self) -> Result<Self> {
        match self.mirror_mismatches.first() {
            Some(mismatch) => Err(GenerationError::MirrorDimensionMismatch {
                axis: mismatch.axis,
                extent: mismatch.extent,
            }),
            None => Ok(self),
        }
    }
}

/// Load a template file and generate a colorized matrix from it
///
/// # Errors
///
/// Returns an error if:
/// - The settings or base color are invalid
/// - The template cannot be opened (`SourceUnavailable`)
/// - The template cannot be decoded (`DecodeFailure`)
pub fn generate<P: AsRef<Path>>(path: P, base: BaseColor, settings: Settings) -> Result<Generation> {
    validate(&base, &settings)?;
    let template = Template::open(path)?;
    generate_from_source(&template, base, settings)
}

/// Generate a colorized matrix from an already loaded template
///
/// The seed sentinel is replaced by a fresh seed, which is reported on the
/// result.
///
/// # Errors
///
/// Returns an error if the settings or base color are invalid
pub fn generate_from_source<T: TemplateSource + ?Sized>(
    source: &T,
    base: BaseColor,
    settings: Settings,
) -> Result<Generation> {
    validate(&base, &settings)?;
    let settings = settings.resolved();
    log::debug!("Generating with seed {}", settings.seed);

    let mut rng = StdRng::seed_from_u64(settings.seed);
    let (matrix, mirror_mismatches) = generate_with_rng(source, &base, &settings, &mut rng);

    Ok(Generation {
        matrix,
        seed: settings.seed,
        mirror_mismatches,
    })
}

/// Run every stage with a caller-provided generator
///
/// `settings.seed` is ignored; all randomness comes from `rng`, consumed in
/// raster order by resolution and then colorization.
pub fn generate_with_rng<T: TemplateSource + ?Sized, R: Rng + ?Sized>(
    source: &T,
    base: &BaseColor,
    settings: &Settings,
    rng: &mut R,
) -> (ColorMatrix, Vec<MirrorDimensionMismatch>) {
    let roles = classify_template(source);
    let mut resolved = resolve_grid(&roles, rng);
    drop(roles);

    let promoted = repair_borders(&mut resolved);
    log::debug!("Border repair promoted {promoted} pixels");

    let mut matrix = colorize_grid(&resolved, base, settings, rng);
    let mismatches = mirror(&mut matrix, settings);
    (matrix, mismatches)
}

fn validate(base: &BaseColor, settings: &Settings) -> Result<()> {
    settings.validate()?;
    if !base.alpha.is_finite() {
        return Err(invalid_parameter("alpha", &base.alpha, &"must be finite"));
    }
    Ok(())
}
