//! Template image decoding and the pixel lookup interface generation consumes

use crate::io::error::{GenerationError, Result};
use image::{DynamicImage, ImageBuffer, ImageFormat, ImageReader, Rgba};
use std::path::Path;

/// Bounded grid of template colors with per-pixel lookup
///
/// Colors are reported on the full 16-bit intensity range so that marker
/// comparison does not depend on the bit depth of the source file.
pub trait TemplateSource {
    /// Number of columns
    fn width(&self) -> usize;

    /// Number of rows
    fn height(&self) -> usize;

    /// Color at `(x, y)`, or `None` outside the template
    fn color_at(&self, x: usize, y: usize) -> Option<Rgba<u16>>;
}

impl TemplateSource for ImageBuffer<Rgba<u16>, Vec<u16>> {
    fn width(&self) -> usize {
        ImageBuffer::width(self) as usize
    }

    fn height(&self) -> usize {
        ImageBuffer::height(self) as usize
    }

    fn color_at(&self, x: usize, y: usize) -> Option<Rgba<u16>> {
        let x = u32::try_from(x).ok()?;
        let y = u32::try_from(y).ok()?;
        self.get_pixel_checked(x, y).copied()
    }
}

impl TemplateSource for ImageBuffer<Rgba<u8>, Vec<u8>> {
    fn width(&self) -> usize {
        ImageBuffer::width(self) as usize
    }

    fn height(&self) -> usize {
        ImageBuffer::height(self) as usize
    }

    fn color_at(&self, x: usize, y: usize) -> Option<Rgba<u16>> {
        let x = u32::try_from(x).ok()?;
        let y = u32::try_from(y).ok()?;
        // 255 * 257 == 65535, so full 8-bit channels widen to full 16-bit channels
        self.get_pixel_checked(x, y)
            .map(|pixel| Rgba(pixel.0.map(|c| u16::from(c) * 257)))
    }
}

/// Decoded template image
#[derive(Debug, Clone)]
pub struct Template {
    pixels: ImageBuffer<Rgba<u16>, Vec<u16>>,
    format: Option<ImageFormat>,
}

impl Template {
    /// Open and decode a template file
    ///
    /// The format is guessed from the file contents, falling back to the
    /// extension.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be opened or read (`SourceUnavailable`)
    /// - The contents are corrupt or in an unsupported format (`DecodeFailure`)
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let unavailable = |source| GenerationError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        };

        let reader = ImageReader::open(path)
            .map_err(unavailable)?
            .with_guessed_format()
            .map_err(unavailable)?;
        let format = reader.format();

        let image = reader.decode().map_err(|e| GenerationError::DecodeFailure {
            path: path.to_path_buf(),
            source: e,
        })?;

        let template = Self::from_image(&image).with_format(format);
        log::debug!(
            "Loaded template '{}' ({:?}, {}x{})",
            path.display(),
            format,
            template.pixels.width(),
            template.pixels.height()
        );
        Ok(template)
    }

    /// Wrap an already decoded image
    pub fn from_image(image: &DynamicImage) -> Self {
        Self {
            pixels: image.to_rgba16(),
            format: None,
        }
    }

    const fn with_format(mut self, format: Option<ImageFormat>) -> Self {
        self.format = format;
        self
    }

    /// Format detected while decoding, if the template came from a file
    pub const fn format(&self) -> Option<ImageFormat> {
        self.format
    }

    /// Borrow the decoded pixels
    pub const fn pixels(&self) -> &ImageBuffer<Rgba<u16>, Vec<u16>> {
        &self.pixels
    }
}

impl TemplateSource for Template {
    fn width(&self) -> usize {
        self.pixels.width() as usize
    }

    fn height(&self) -> usize {
        self.pixels.height() as usize
    }

    fn color_at(&self, x: usize, y: usize) -> Option<Rgba<u16>> {
        TemplateSource::color_at(&self.pixels, x, y)
    }
}
