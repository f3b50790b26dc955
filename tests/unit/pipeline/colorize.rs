//! Tests for jitter, fade and border darkening

#[cfg(test)]
mod tests {
    use ndarray::array;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use spriteforge::pipeline::colorize::{
        colorize, colorize_grid, fade_amount, jittered_channels,
    };
    use spriteforge::pipeline::resolve::ResolvedRole;
    use spriteforge::{BaseColor, FinalColor, Settings};

    fn jitter(rng: &mut StdRng) -> u8 {
        (rng.random::<f32>() * 25.0) as u8
    }

    // Tests body pixels add three jitter draws in red, green, blue order
    // Verified by drawing blue before red
    #[test]
    fn test_body_adds_jitter() {
        let base = BaseColor::new(100, 50, 10, 0.8);
        let color = colorize(
            ResolvedRole::Body,
            &base,
            0,
            1,
            &Settings::default(),
            &mut StdRng::seed_from_u64(4),
        );

        let mut replay = StdRng::seed_from_u64(4);
        let expected = [
            100 + jitter(&mut replay),
            50 + jitter(&mut replay),
            10 + jitter(&mut replay),
        ];

        assert_eq!(color.channels(), expected);
        assert!((color.alpha - 0.8).abs() < f32::EPSILON);
    }

    // Tests jitter wraps around instead of clamping at 255
    // Verified by replacing the wrapping add with a saturating add
    #[test]
    fn test_body_jitter_wraps() {
        let base = BaseColor::new(250, 250, 250, 1.0);
        let mut rng = StdRng::seed_from_u64(17);
        let mut replay = rng.clone();

        for _ in 0..200 {
            let color = colorize(
                ResolvedRole::Body,
                &base,
                0,
                1,
                &Settings::default(),
                &mut rng,
            );
            let expected = [
                250u8.wrapping_add(jitter(&mut replay)),
                250u8.wrapping_add(jitter(&mut replay)),
                250u8.wrapping_add(jitter(&mut replay)),
            ];
            assert_eq!(color.channels(), expected);
        }
    }

    // Tests border pixels subtract 128 with a floor at zero
    // Verified by wrapping the subtraction
    #[test]
    fn test_border_darkening_saturates() {
        let base = BaseColor::new(200, 100, 0, 0.5);
        let color = colorize(
            ResolvedRole::Border,
            &base,
            0,
            1,
            &Settings::default(),
            &mut StdRng::seed_from_u64(8),
        );

        let mut replay = StdRng::seed_from_u64(8);
        let red = 200 + jitter(&mut replay) - 128;

        assert_eq!(color.channels(), [red, 0, 0]);
        assert!((color.alpha - 0.5).abs() < f32::EPSILON);
    }

    // Tests empty pixels ignore the base color and take no draws
    // Verified by jittering empty pixels
    #[test]
    fn test_empty_is_transparent_white_without_draws() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut untouched = rng.clone();

        let color = colorize(
            ResolvedRole::Empty,
            &BaseColor::new(1, 2, 3, 1.0),
            3,
            4,
            &Settings::default(),
            &mut rng,
        );

        assert_eq!(color, FinalColor::TRANSPARENT_WHITE);
        assert_eq!(rng.random::<u64>(), untouched.random::<u64>());
    }

    // Tests body and border pixels consume exactly three draws each
    #[test]
    fn test_body_and_border_consume_three_draws() {
        for role in [ResolvedRole::Body, ResolvedRole::Border] {
            let mut rng = StdRng::seed_from_u64(31);
            let mut reference = rng.clone();

            let base = BaseColor::new(9, 9, 9, 1.0);
            colorize(role, &base, 0, 1, &Settings::default(), &mut rng);
            jittered_channels(&BaseColor::new(0, 0, 0, 1.0), &mut reference);

            assert_eq!(rng.random::<u64>(), reference.random::<u64>());
        }
    }

    // Tests fade scales with row position
    #[test]
    fn test_fade_amount() {
        assert_eq!(fade_amount(100.0, 0, 4), 0);
        assert_eq!(fade_amount(100.0, 2, 4), 50);
        assert_eq!(fade_amount(100.0, 3, 4), 75);
        assert_eq!(fade_amount(600.0, 3, 4), 255);
        assert_eq!(fade_amount(100.0, 0, 0), 0);
    }

    // Tests fading darkens body pixels with saturation at zero
    // Verified by applying fade with a wrapping subtraction
    #[test]
    fn test_body_fade_saturates() {
        let settings = Settings {
            fade: 200.0,
            ..Settings::default()
        };
        let base = BaseColor::new(60, 10, 200, 1.0);
        let color = colorize(
            ResolvedRole::Body,
            &base,
            3,
            4,
            &settings,
            &mut StdRng::seed_from_u64(12),
        );

        let mut replay = StdRng::seed_from_u64(12);
        let red = 60 + jitter(&mut replay);
        let green = 10 + jitter(&mut replay);
        let blue = 200 + jitter(&mut replay);

        assert_eq!(
            color.channels(),
            [red.saturating_sub(150), green.saturating_sub(150), blue - 150]
        );
    }

    // Tests fade leaves border pixels untouched
    #[test]
    fn test_fade_does_not_affect_border() {
        let faded = Settings {
            fade: 200.0,
            ..Settings::default()
        };
        let base = BaseColor::new(250, 250, 250, 1.0);

        let with_fade = colorize(
            ResolvedRole::Border,
            &base,
            3,
            4,
            &faded,
            &mut StdRng::seed_from_u64(1),
        );
        let without_fade = colorize(
            ResolvedRole::Border,
            &base,
            3,
            4,
            &Settings::default(),
            &mut StdRng::seed_from_u64(1),
        );

        assert_eq!(with_fade, without_fade);
    }

    // Tests grid colorization follows column-major order and passes the row index
    // Verified by passing the column index as the fade row
    #[test]
    fn test_colorize_grid_order_and_rows() {
        let roles = array![
            [ResolvedRole::Body, ResolvedRole::Empty],
            [ResolvedRole::Border, ResolvedRole::Body],
        ];
        let base = BaseColor::new(120, 120, 120, 1.0);
        let settings = Settings {
            fade: 100.0,
            ..Settings::default()
        };

        let matrix = colorize_grid(&roles, &base, &settings, &mut StdRng::seed_from_u64(6));

        let mut replay = StdRng::seed_from_u64(6);
        let top_left = colorize(ResolvedRole::Body, &base, 0, 2, &settings, &mut replay);
        let bottom_left = colorize(ResolvedRole::Border, &base, 1, 2, &settings, &mut replay);
        let bottom_right = colorize(ResolvedRole::Body, &base, 1, 2, &settings, &mut replay);

        assert_eq!(matrix.get(0, 0), Some(&top_left));
        assert_eq!(matrix.get(0, 1), Some(&bottom_left));
        assert_eq!(matrix.get(1, 0), Some(&FinalColor::TRANSPARENT_WHITE));
        assert_eq!(matrix.get(1, 1), Some(&bottom_right));
    }
}
