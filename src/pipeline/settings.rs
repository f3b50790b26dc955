//! Generation settings and seed resolution

use crate::io::configuration::{DEFAULT_SEED, RANDOM_SEED};
use crate::io::error::{Result, invalid_parameter};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Options controlling a generation run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    /// Reflect the top half of the matrix onto the bottom half
    pub mirror_x: bool,
    /// Reflect the left half of the matrix onto the right half
    pub mirror_y: bool,
    /// Maximum amount body pixels darken towards the bottom row, 0 disables fading
    pub fade: f32,
    /// Random seed; [`RANDOM_SEED`] requests a fresh one per run
    pub seed: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mirror_x: false,
            mirror_y: false,
            fade: 0.0,
            seed: DEFAULT_SEED,
        }
    }
}

impl Settings {
    /// Check that the settings describe a valid run
    ///
    /// # Errors
    ///
    /// Returns an error if `fade` is negative, infinite or NaN
    pub fn validate(&self) -> Result<()> {
        if !self.fade.is_finite() || self.fade < 0.0 {
            return Err(invalid_parameter(
                "fade",
                &self.fade,
                &"must be a finite, non-negative magnitude",
            ));
        }
        Ok(())
    }

    /// Whether the seed asks for a fresh random seed
    pub const fn uses_random_seed(&self) -> bool {
        self.seed == RANDOM_SEED
    }

    /// Whether body pixels fade towards the bottom row
    pub fn fade_enabled(&self) -> bool {
        self.fade > 0.0
    }

    /// Replace the random-seed sentinel with a concrete seed
    ///
    /// A fresh seed is drawn from operating system entropy. The draw is
    /// repeated while it lands on the sentinel itself so the returned seed
    /// always reproduces the run.
    #[must_use]
    pub fn resolved(self) -> Self {
        if !self.uses_random_seed() {
            return self;
        }

        let mut entropy = StdRng::from_os_rng();
        let mut seed = entropy.random::<u64>();
        while seed == RANDOM_SEED {
            seed = entropy.random::<u64>();
        }
        log::debug!("Drew fresh seed {seed}");

        Self { seed, ..self }
    }
}
