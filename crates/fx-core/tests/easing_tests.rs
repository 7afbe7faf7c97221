// Interpolation helpers: easing curve shape, damped approach, ramps and
// the smooth-scroll tween.

use fx_core::easing::{damp, ease_in_out_quad, parallax_offset, Ramp, ScrollTween};

#[test]
fn ease_endpoints_and_midpoint() {
    assert_eq!(ease_in_out_quad(0.0), 0.0);
    assert_eq!(ease_in_out_quad(1.0), 1.0);
    assert!((ease_in_out_quad(0.5) - 0.5).abs() < 1e-6);
}

#[test]
fn ease_is_monotonic_and_clamped() {
    let mut prev = ease_in_out_quad(0.0);
    for i in 1..=100 {
        let v = ease_in_out_quad(i as f32 / 100.0);
        assert!(v >= prev, "easing decreased at step {i}");
        prev = v;
    }
    assert_eq!(ease_in_out_quad(-2.0), 0.0);
    assert_eq!(ease_in_out_quad(3.0), 1.0);
}

#[test]
fn damp_converges_without_overshoot() {
    let mut x: f32 = 0.0;
    let target = 100.0;
    let mut prev_gap = (target - x).abs();
    for _ in 0..100 {
        x = damp(x, target, 0.1);
        let gap = (target - x).abs();
        assert!(gap < prev_gap, "gap must shrink every step");
        assert!(x <= target, "damped approach never overshoots");
        prev_gap = gap;
    }
    assert!(prev_gap < 1e-2 * target);
}

#[test]
fn parallax_layers_move_at_staggered_rates() {
    let y = 200.0;
    assert!((parallax_offset(y, 0) - 100.0).abs() < 1e-4);
    assert!((parallax_offset(y, 1) - 120.0).abs() < 1e-4);
    for layer in 0..5 {
        assert!(
            parallax_offset(y, layer + 1) > parallax_offset(y, layer),
            "deeper layers scroll faster"
        );
    }
}

#[test]
fn ramp_climbs_by_fixed_step_and_clamps() {
    let mut ramp = Ramp::new(0.0, 85.0, 2.0);
    let mut steps = 0;
    while !ramp.done() {
        let before = ramp.value();
        let after = ramp.advance();
        assert!(after - before <= 2.0 + 1e-6);
        steps += 1;
        assert!(steps < 100, "ramp failed to finish");
    }
    assert_eq!(ramp.value(), 85.0, "ramp lands exactly on the target");
    assert_eq!(steps, 43, "85 / 2 rounded up");
}

#[test]
fn ramp_descends_toward_lower_target() {
    let mut ramp = Ramp::new(50.0, 10.0, 7.0);
    while !ramp.done() {
        ramp.advance();
    }
    assert_eq!(ramp.value(), 10.0);
}

#[test]
fn scroll_tween_ends_exactly_on_target() {
    let mut tween = ScrollTween::new(840.0, 120.0, 60);
    let mut last = 840.0;
    for _ in 0..60 {
        last = tween.step();
    }
    assert!(tween.done());
    assert!((last - 120.0).abs() < 1e-3, "tween must land on the target");
    // Extra steps after completion stay parked at the target.
    assert!((tween.step() - 120.0).abs() < 1e-3);
}

#[test]
fn scroll_tween_moves_through_interior() {
    let mut tween = ScrollTween::new(0.0, 1000.0, 60);
    for _ in 0..30 {
        tween.step();
    }
    let halfway = tween.step();
    assert!(
        halfway > 400.0 && halfway < 700.0,
        "eased midpoint should sit near the middle, got {halfway}"
    );
}
