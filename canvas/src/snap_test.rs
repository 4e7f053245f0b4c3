#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// snap
// =============================================================

#[test]
fn snap_rounds_to_nearest_multiple() {
    assert_eq!(snap(33.0, 50.0), 50.0);
    assert_eq!(snap(24.9, 50.0), 0.0);
    assert_eq!(snap(71.0, 20.0), 80.0);
    assert_eq!(snap(69.0, 20.0), 60.0);
}

#[test]
fn snap_half_rounds_away_from_zero() {
    assert_eq!(snap(25.0, 50.0), 50.0);
    assert_eq!(snap(-25.0, 50.0), -50.0);
    assert_eq!(snap(10.0, 20.0), 20.0);
    assert_eq!(snap(-10.0, 20.0), -20.0);
}

#[test]
fn snap_negative_values() {
    assert_eq!(snap(-33.0, 50.0), -50.0);
    assert_eq!(snap(-12.0, 50.0), 0.0);
}

#[test]
fn snap_is_idempotent() {
    let values = [-1234.5, -75.0, -25.0, -0.4, 0.0, 0.4, 9.99, 10.0, 33.0, 49.999, 125.0, 98765.4321];
    for g in [20.0, 50.0] {
        for v in values {
            let once = snap(v, g);
            assert_eq!(snap(once, g), once, "v={v} g={g}");
        }
    }
}

#[test]
fn snap_result_is_grid_multiple() {
    for g in [20.0, 50.0] {
        for i in -200..200 {
            let v = f64::from(i) * 3.7;
            let s = snap(v, g);
            assert_eq!((s / g).fract(), 0.0, "v={v} g={g} s={s}");
        }
    }
}

#[test]
fn snap_point_per_axis() {
    let p = snap_point(Point::new(33.0, 10.0), 50.0);
    assert_eq!(p, Point::new(50.0, 0.0));
}

// =============================================================
// GridPolicy
// =============================================================

#[test]
fn grid_policy_default_units() {
    let g = GridPolicy::default();
    assert_eq!(g.fine, 20.0);
    assert_eq!(g.coarse, 50.0);
    assert_eq!(g.fine_above_zoom, 1.0);
}

#[test]
fn grid_policy_coarse_at_and_below_threshold() {
    let g = GridPolicy::default();
    assert_eq!(g.size_at(0.1), 50.0);
    assert_eq!(g.size_at(0.4), 50.0);
    assert_eq!(g.size_at(1.0), 50.0);
}

#[test]
fn grid_policy_fine_above_threshold() {
    let g = GridPolicy::default();
    assert_eq!(g.size_at(1.0001), 20.0);
    assert_eq!(g.size_at(3.0), 20.0);
}
