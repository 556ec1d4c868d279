// Host-side tests for the camera color pipeline.

use ambience_core::*;

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

#[test]
fn rgb_to_hsl_reference_points() {
    assert_eq!(rgb_to_hsl(255, 255, 255), Hsl { h: 0.0, s: 0.0, l: 1.0 });
    assert_eq!(rgb_to_hsl(0, 0, 0), Hsl { h: 0.0, s: 0.0, l: 0.0 });
    assert_eq!(rgb_to_hsl(255, 0, 0), Hsl { h: 0.0, s: 1.0, l: 0.5 });
}

#[test]
fn rgb_to_hsl_primary_and_secondary_hues() {
    assert!(close(rgb_to_hsl(0, 255, 0).h, 120.0));
    assert!(close(rgb_to_hsl(0, 0, 255).h, 240.0));
    assert!(close(rgb_to_hsl(255, 255, 0).h, 60.0));
    assert!(close(rgb_to_hsl(255, 0, 255).h, 300.0));
    let grey = rgb_to_hsl(128, 128, 128);
    assert_eq!(grey.h, 0.0);
    assert_eq!(grey.s, 0.0);
}

#[test]
fn rgb_to_hsl_light_colors_use_the_upper_saturation_formula() {
    // l > 0.5: s = d / (2 - max - min)
    let c = rgb_to_hsl(255, 204, 204);
    assert!(c.l > 0.5);
    assert!(close(c.s, 1.0));
    assert!(close(c.h, 0.0));
}

#[test]
fn average_rgba_floors_channel_means() {
    let pixels = [10, 20, 30, 255, 11, 21, 31, 0];
    assert_eq!(average_rgba(&pixels), Ok(Rgb::new(10, 20, 30)));
}

#[test]
fn average_rgba_rejects_bad_buffers() {
    assert_eq!(average_rgba(&[]), Err(SampleError::Empty));
    assert_eq!(average_rgba(&[1, 2, 3]), Err(SampleError::Misaligned(3)));
}

#[test]
fn average_rgba_over_a_full_sensor_frame() {
    let side = constants::SENSOR_SIZE as usize;
    let mut pixels = Vec::with_capacity(side * side * 4);
    for i in 0..side * side {
        let v = if i % 2 == 0 { 200 } else { 100 };
        pixels.extend_from_slice(&[v, 0, 255, 255]);
    }
    assert_eq!(average_rgba(&pixels), Ok(Rgb::new(150, 0, 255)));
}

#[test]
fn ambient_moves_five_percent_toward_target() {
    let mut a = AmbientColor::default();
    assert_eq!((a.h, a.s, a.l), (220.0, 0.5, 0.6));
    a.approach(Hsl { h: 120.0, s: 0.9, l: 0.1 });
    assert!(close(a.h, 215.0));
    assert!(close(a.s, 0.52));
    // lightness always targets 0.6
    assert!(close(a.l, 0.6));
}

#[test]
fn ambient_saturation_never_targets_below_floor() {
    let mut a = AmbientColor { h: 0.0, s: 0.6, l: 0.6 };
    for _ in 0..200 {
        a.approach(Hsl { h: 0.0, s: 0.0, l: 0.0 });
        assert!(a.s >= 0.6 - 1e-6);
    }
}

#[test]
fn ambient_converges_monotonically_without_overshoot() {
    let target = Hsl { h: 30.0, s: 0.8, l: 0.2 };
    let mut a = AmbientColor { h: 300.0, s: 0.1, l: 0.0 };
    let mut prev = a;
    for _ in 0..500 {
        a.approach(target);
        assert!(a.h <= prev.h && a.h >= target.h);
        assert!(a.l >= prev.l && a.l <= 0.6);
        assert!(a.s >= prev.s && a.s <= 0.8);
        prev = a;
    }
    assert!((a.h - 30.0).abs() < 0.01);
    assert!((a.l - 0.6).abs() < 1e-3);
}

#[test]
fn colors_render_as_css() {
    assert_eq!(
        Color::rgba([174, 194, 224], 0.5).to_string(),
        "rgba(174, 194, 224, 0.5)"
    );
    assert_eq!(
        Color::hsla(220.0, 30.0, 5.0, 0.25).to_string(),
        "hsla(220, 30%, 5%, 0.25)"
    );
}
