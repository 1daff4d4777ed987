use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn primaries_map_to_expected_hues() {
    let red = Hsv::from_rgb(image::Rgb([255, 0, 0]));
    assert!(approx(red.h, 0.0) && approx(red.s, 1.0) && approx(red.v, 1.0));

    let green = Hsv::from_rgb(image::Rgb([0, 255, 0]));
    assert!(approx(green.h, 1.0 / 3.0));

    let blue = Hsv::from_rgb(image::Rgb([0, 0, 255]));
    assert!(approx(blue.h, 2.0 / 3.0));
}

#[test]
fn greys_have_no_hue_or_saturation() {
    let grey = Hsv::from_rgb(image::Rgb([51, 51, 51]));
    assert_eq!(grey.h, 0.0);
    assert_eq!(grey.s, 0.0);
    assert!(approx(grey.v, 0.2));
    assert_eq!(grey.to_rgb(), image::Rgb([51, 51, 51]));
}

#[test]
fn rgb_round_trip_is_exact_for_u8() {
    for rgb in [
        [0u8, 0, 0],
        [255, 255, 255],
        [197, 17, 17],
        [122, 8, 56],
        [12, 200, 99],
        [1, 2, 3],
    ] {
        let px = image::Rgb(rgb);
        assert_eq!(Hsv::from_rgb(px).to_rgb(), px, "{rgb:?}");
    }
}

#[test]
fn rotate_hue_wraps_negative() {
    let hsv = Hsv {
        h: 0.02,
        s: 1.0,
        v: 1.0,
    };
    let rotated = hsv.rotate_hue(-0.0635);
    assert!(approx(rotated.h, 1.0 + 0.02 - 0.0635));

    let rotated = hsv.rotate_hue(0.5);
    assert!(approx(rotated.h, 0.52));
}

#[test]
fn with_value_keeps_hue_and_saturation() {
    let hsv = Hsv::from_rgb(image::Rgb([10, 0, 0])).with_value(0.2);
    assert!(approx(hsv.h, 0.0));
    assert!(approx(hsv.s, 1.0));
    assert_eq!(hsv.to_rgb(), image::Rgb([51, 0, 0]));
}

#[test]
fn code_scale_keeps_value_in_code_units() {
    let hsv = Hsv::from_rgb_codes(image::Rgb([168, 168, 0]));
    assert!(approx(hsv.h, 1.0 / 6.0));
    assert!(approx(hsv.v, 168.0));
    assert_eq!(hsv.codes_to_rgb_truncated(), image::Rgb([168, 168, 0]));

    let shifted = hsv.rotate_hue(-0.0635).codes_to_rgb_truncated();
    assert_eq!(shifted, image::Rgb([168, 103, 0]));
}
