use super::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn hls_zero_saturation_is_gray() {
    assert_eq!(Rgb::from_hls(0.3, 0.2, 0.0), Rgb::gray(0.2));
}

#[test]
fn hls_primary_hues() {
    let red = Rgb::from_hls(0.0, 0.5, 1.0);
    assert!(close(red.r, 1.0) && close(red.g, 0.0) && close(red.b, 0.0));

    let green = Rgb::from_hls(1.0 / 3.0, 0.5, 1.0);
    assert!(close(green.r, 0.0) && close(green.g, 1.0) && close(green.b, 0.0));

    let blue = Rgb::from_hls(2.0 / 3.0, 0.5, 1.0);
    assert!(close(blue.r, 0.0) && close(blue.g, 0.0) && close(blue.b, 1.0));
}

#[test]
fn hls_hue_wraps() {
    let a = Rgb::from_hls(0.25, 0.6, 0.8);
    let b = Rgb::from_hls(1.25, 0.6, 0.8);
    let c = Rgb::from_hls(-0.75, 0.6, 0.8);
    assert!(close(a.r, b.r) && close(a.g, b.g) && close(a.b, b.b));
    assert!(close(a.r, c.r) && close(a.g, c.g) && close(a.b, c.b));
}

#[test]
fn hls_high_lightness_lifts_floor() {
    let c = Rgb::from_hls(2.0 / 3.0, 0.75, 1.0);
    assert!(close(c.r, 0.5) && close(c.g, 0.5) && close(c.b, 1.0));
}

#[test]
fn rgb8_quantization_rounds_and_saturates() {
    assert_eq!(Rgb::new(0.0, 0.5, 1.0).to_rgb8(), [0, 128, 255]);
    assert_eq!(Rgb::new(-1.0, 2.0, f64::NAN).to_rgb8(), [0, 255, 0]);
}

#[test]
fn premul_conversion_scales_color_by_alpha() {
    let p = Rgba8Premul::from_straight_rgba(255, 128, 0, 128);
    assert_eq!(p.to_array(), [128, 64, 0, 128]);
    assert_eq!(Rgba8Premul::transparent().to_array(), [0, 0, 0, 0]);
}
