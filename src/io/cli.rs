//! Command-line interface for generating color matrices from template files

use crate::color::rgba::BaseColor;
use crate::io::configuration::{
    COLOR_SEED_SALT, DEFAULT_ALPHA, DEFAULT_LOG_FILTER, DEFAULT_SEED, OUTPUT_EXTENSION,
    OUTPUT_SUFFIX, TEMPLATE_EXTENSIONS,
};
use crate::io::error::{GenerationError, Result, invalid_parameter};
use crate::io::template::Template;
use crate::io::text::{export_matrix_as_text, write_matrix};
use crate::pipeline::executor::generate_from_source;
use crate::pipeline::settings::Settings;
use crate::spatial::grid::ColorMatrix;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "spriteforge")]
#[command(
    author,
    version,
    about = "Generate colorized sprite matrices from color-coded templates"
)]
/// Command-line arguments for the generation tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Template image file or directory of templates to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Base color as a hex triplet (random when omitted)
    #[arg(short, long)]
    pub color: Option<String>,

    /// Alpha carried by every body and border pixel
    #[arg(short, long, default_value_t = DEFAULT_ALPHA)]
    pub alpha: f32,

    /// Maximum darkening of body pixels towards the bottom row
    #[arg(short, long, default_value_t = 0.0)]
    pub fade: f32,

    /// Random seed for reproducible generation (1 draws a fresh seed)
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Reflect the top half onto the bottom half
    #[arg(short = 'x', long)]
    pub mirror_x: bool,

    /// Reflect the left half onto the right half
    #[arg(short = 'y', long)]
    pub mirror_y: bool,

    /// Fail instead of warning when a mirrored dimension is odd
    #[arg(long)]
    pub strict_mirror: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Suppress per-file status output
    #[arg(short, long)]
    pub quiet: bool,

    /// Print matrices to standard output instead of writing listing files
    #[arg(long)]
    pub stdout: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip && !self.stdout
    }

    /// Generation settings described by the arguments
    pub const fn settings(&self) -> Settings {
        Settings {
            mirror_x: self.mirror_x,
            mirror_y: self.mirror_y,
            fade: self.fade,
            seed: self.seed,
        }
    }

    /// Base color described by the arguments
    ///
    /// Without an explicit color, a random one is drawn from a generator
    /// seeded with `seed ^ COLOR_SEED_SALT`, so its draws never repeat the
    /// first words of the generation stream.
    ///
    /// # Errors
    ///
    /// Returns an error if the color argument is not a valid hex triplet
    pub fn base_color(&self, seed: u64) -> Result<BaseColor> {
        match &self.color {
            Some(text) => BaseColor::from_hex(text, self.alpha),
            None => Ok(BaseColor::random(
                self.alpha,
                &mut StdRng::seed_from_u64(seed ^ COLOR_SEED_SALT),
            )),
        }
    }
}

/// Logger filtered by the environment variable `variable`, or `info` when unset
#[must_use]
pub fn logger_from_env(variable: &str) -> env_logger::Builder {
    env_logger::Builder::from_env(
        env_logger::Env::new()
            .filter_or(variable, DEFAULT_LOG_FILTER)
            .write_style("RUST_LOG_STYLE"),
    )
}

/// Orchestrates processing of one template or a directory of templates
pub struct FileProcessor {
    cli: Cli,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, generation or output fails
    pub fn process(&self) -> Result<()> {
        self.cli.settings().validate()?;
        let files = self.collect_files()?;

        for file in &files {
            self.process_file(file)?;
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if is_template_path(&self.cli.target) {
                if self.should_process_file(&self.cli.target) {
                    Ok(vec![self.cli.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(invalid_parameter(
                    "target",
                    &self.cli.target.display(),
                    &"template file must be a PNG or JPEG image",
                ))
            }
        } else if self.cli.target.is_dir() {
            let read_error = |e| GenerationError::FileSystem {
                path: self.cli.target.clone(),
                operation: "read directory",
                source: e,
            };
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target).map_err(read_error)? {
                let path = entry.map_err(read_error)?.path();
                if is_template_path(&path) && self.should_process_file(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &self.cli.target.display(),
                &"target must be a template file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::get_output_path(input_path);
        if output_path.exists() {
            if !self.cli.quiet {
                log::info!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    fn process_file(&self, input_path: &Path) -> Result<()> {
        let start_time = Instant::now();

        let template = Template::open(input_path)?;
        let settings = self.cli.settings().resolved();
        let base = self.cli.base_color(settings.seed)?;

        let mut generation = generate_from_source(&template, base, settings)?;
        if self.cli.strict_mirror {
            generation = generation.require_full_mirror()?;
        }

        if self.cli.stdout {
            let stdout = std::io::stdout();
            Self::print_listing(input_path, &generation.matrix, &mut stdout.lock())?;
        } else {
            export_matrix_as_text(&generation.matrix, &Self::get_output_path(input_path))?;
        }

        if !self.cli.quiet {
            log::info!(
                "Generated {} ({}x{}, seed {}) in {:.2?}",
                input_path.display(),
                generation.matrix.width(),
                generation.matrix.height(),
                generation.seed,
                start_time.elapsed()
            );
        }

        Ok(())
    }

    /// Write a matrix listing headed by a `# <path>` line naming its template
    ///
    /// # Errors
    ///
    /// Returns a `FileSystem` error on `<stdout>` if the writer fails
    pub fn print_listing<W: Write>(
        input_path: &Path,
        matrix: &ColorMatrix,
        writer: &mut W,
    ) -> Result<()> {
        writeln!(writer, "# {}", input_path.display())
            .and_then(|()| write_matrix(matrix, writer))
            .map_err(|e| GenerationError::FileSystem {
                path: PathBuf::from("<stdout>"),
                operation: "write matrix",
                source: e,
            })
    }

    /// Listing path written next to a template
    pub fn get_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!(
            "{}{}.{}",
            stem.to_string_lossy(),
            OUTPUT_SUFFIX,
            OUTPUT_EXTENSION
        );

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}

fn is_template_path(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| {
            TEMPLATE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}
