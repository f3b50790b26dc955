//! Tests for template decoding and pixel lookup

#[cfg(test)]
mod tests {
    use crate::fixtures::template;
    use image::{DynamicImage, ImageFormat, Rgba};
    use spriteforge::GenerationError;
    use spriteforge::io::template::{Template, TemplateSource};

    // Tests 8-bit pixels widen to the full 16-bit range
    // Verified by widening with a left shift
    #[test]
    fn test_eight_bit_lookup_widens() {
        let image = template(&["RG"]);

        assert_eq!(TemplateSource::width(&image), 2);
        assert_eq!(TemplateSource::height(&image), 1);
        assert_eq!(image.color_at(0, 0), Some(Rgba([65_535, 0, 0, 65_535])));
        assert_eq!(image.color_at(1, 0), Some(Rgba([0, 65_535, 0, 65_535])));
    }

    // Tests lookups outside the template return None
    #[test]
    fn test_out_of_bounds_lookup() {
        let image = template(&["RG"]);

        assert_eq!(image.color_at(2, 0), None);
        assert_eq!(image.color_at(0, 1), None);
        assert_eq!(image.color_at(usize::MAX, 0), None);
    }

    // Tests wrapping a decoded image keeps its pixels
    #[test]
    fn test_from_image() {
        let wrapped = Template::from_image(&DynamicImage::ImageRgba8(template(&["R.", ".G"])));

        assert_eq!(wrapped.width(), 2);
        assert_eq!(wrapped.height(), 2);
        assert_eq!(wrapped.format(), None);
        assert_eq!(wrapped.color_at(1, 1), Some(Rgba([0, 65_535, 0, 65_535])));
        assert_eq!(wrapped.pixels().dimensions(), (2, 2));
    }

    // Tests opening a PNG from disk records its format
    #[test]
    fn test_open_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("template.png");
        template(&["RGC", "YM."]).save(&path).unwrap();

        let loaded = Template::open(&path).unwrap();

        assert_eq!(loaded.format(), Some(ImageFormat::Png));
        assert_eq!((loaded.width(), loaded.height()), (3, 2));
        assert_eq!(loaded.color_at(2, 1), Some(Rgba([65_535; 4])));
    }

    // Tests a missing file is reported as unavailable
    // Verified by mapping open errors to DecodeFailure
    #[test]
    fn test_open_missing_file() {
        let dir = tempfile::tempdir().unwrap();

        let result = Template::open(dir.path().join("absent.png"));

        assert!(matches!(
            result,
            Err(GenerationError::SourceUnavailable { .. })
        ));
    }

    // Tests corrupt contents are reported as decode failures
    #[test]
    fn test_open_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corrupt.png");
        std::fs::write(&path, b"definitely not an image").unwrap();

        let result = Template::open(&path);

        assert!(matches!(result, Err(GenerationError::DecodeFailure { .. })));
    }
}
