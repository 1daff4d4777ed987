use super::*;

#[test]
fn saturated_red() {
    let paint = stylize(image::Rgb([255, 0, 0]));
    assert_eq!(paint.fill, image::Rgb([255, 0, 0]));
    // 255 * 0.66 truncates to 168, then the hue rotates back past zero into magenta.
    assert_eq!(paint.shade, image::Rgb([168, 0, 64]));
}

#[test]
fn black_is_lifted_to_floor() {
    let paint = stylize(image::Rgb([0, 0, 0]));
    assert_eq!(paint.fill, image::Rgb([51, 51, 51]));
    assert_eq!(paint.shade, image::Rgb([33, 33, 33]));
}

#[test]
fn dim_colors_land_exactly_on_floor() {
    for rgb in [[0u8, 0, 0], [10, 0, 0], [3, 40, 12], [50, 50, 49], [0, 0, 1]] {
        let paint = stylize(image::Rgb(rgb));
        let v = Hsv::from_rgb(paint.fill).v;
        assert!(
            (v - Tuning::BRIGHTNESS_FLOOR).abs() < 1e-12,
            "{rgb:?} -> {:?} (v = {v})",
            paint.fill
        );
    }
}

#[test]
fn bright_colors_pass_through() {
    for rgb in [[51u8, 0, 0], [12, 200, 99], [255, 255, 255], [90, 90, 200]] {
        assert_eq!(stylize(image::Rgb(rgb)).fill, image::Rgb(rgb));
    }
}

#[test]
fn blues_get_a_deeper_shade() {
    assert!((shade_factor(0.0) - Tuning::SHADE_DEFAULT).abs() < 1e-12);
    assert!((shade_factor(0.3) - Tuning::SHADE_DEFAULT).abs() < 1e-12);
    assert!((shade_factor(Tuning::SHADE_DEFAULT) - (0.66 - 2.0 / 6.0)).abs() < 1e-12);
    assert!((shade_factor(2.0 / 3.0) - 0.34).abs() < 1e-9);
    assert!(shade_factor(0.6) < Tuning::SHADE_DEFAULT);
}

#[test]
fn shade_is_never_brighter_than_fill() {
    for r in (0..=255u16).step_by(17) {
        for g in (0..=255u16).step_by(51) {
            for b in (0..=255u16).step_by(85) {
                let paint = stylize(image::Rgb([r as u8, g as u8, b as u8]));
                let fill_v = Hsv::from_rgb(paint.fill).v;
                let shade_v = Hsv::from_rgb(paint.shade).v;
                assert!(shade_v <= fill_v, "{r},{g},{b}");
            }
        }
    }
}

#[test]
fn deterministic() {
    let px = image::Rgb([33, 144, 250]);
    assert_eq!(stylize(px), stylize(px));
}

#[test]
fn shade_truncates_after_hue_shift() {
    // Unrounded shade is (168, 103.99, 0).
    let paint = stylize(image::Rgb([255, 255, 0]));
    assert_eq!(paint.fill, image::Rgb([255, 255, 0]));
    assert_eq!(paint.shade, image::Rgb([168, 103, 0]));

    assert_eq!(stylize(image::Rgb([0, 200, 0])).shade, image::Rgb([50, 132, 0]));
}
