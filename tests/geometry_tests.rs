// Host-side tests for sizing, coordinate mapping and easing.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod geometry {
    include!("../src/geometry.rs");
}

use constants::*;
use geometry::*;

fn size(w: f64, h: f64) -> CanvasSize {
    CanvasSize::new(w, h, 1.0)
}

#[test]
fn canvas_size_floors_and_keeps_minimum_of_one() {
    let s = CanvasSize::new(640.9, 360.2, 2.0);
    assert_eq!(s.width, 640.0);
    assert_eq!(s.height, 360.0);
    assert_eq!(s.backing_width(), 1280);
    assert_eq!(s.backing_height(), 720);

    let tiny = CanvasSize::new(0.4, -3.0, 1.0);
    assert_eq!((tiny.width, tiny.height), (1.0, 1.0));
    assert_eq!((tiny.backing_width(), tiny.backing_height()), (1, 1));

    let nan = CanvasSize::new(f64::NAN, f64::INFINITY, 1.0);
    assert_eq!((nan.width, nan.height), (1.0, 1.0));
}

#[test]
fn canvas_size_backing_store_follows_fractional_ratio() {
    let s = CanvasSize::new(301.0, 151.0, 1.5);
    assert_eq!(s.backing_width(), 451);
    assert_eq!(s.backing_height(), 226);
    // tiny canvases never collapse to a zero backing store
    assert_eq!(CanvasSize::new(1.0, 1.0, 0.25).backing_width(), 1);
}

#[test]
fn invalid_pixel_ratio_falls_back_to_one() {
    assert_eq!(CanvasSize::new(10.0, 10.0, 0.0).ratio, 1.0);
    assert_eq!(CanvasSize::new(10.0, 10.0, -2.0).ratio, 1.0);
    assert_eq!(CanvasSize::new(10.0, 10.0, f64::NAN).ratio, 1.0);
}

#[test]
fn resizing_is_idempotent() {
    let a = CanvasSize::new(500.7, 300.3, 2.0);
    let b = CanvasSize::new(a.width, a.height, a.ratio);
    assert_eq!(a, b);
}

#[test]
fn plot_rect_uses_fixed_insets() {
    let plot = size(550.0, 360.0).plot_rect();
    assert_eq!(plot.left, PADDING_LEFT);
    assert_eq!(plot.top, PADDING_TOP);
    assert_eq!(plot.right, 550.0 - PADDING_RIGHT);
    assert_eq!(plot.bottom, 360.0 - PADDING_BOTTOM);
    assert_eq!(plot.width(), 480.0);
    assert_eq!(plot.height(), 280.0);
}

#[test]
fn higher_positions_land_higher_on_screen() {
    let s = size(550.0, 360.0);
    let mut prev_y = f64::INFINITY;
    for p in 0..=199 {
        let y = map_to_pixel(&s, p as f64, 3.0, 10.0).y;
        assert!(y < prev_y, "y not decreasing at position {p}");
        prev_y = y;
    }
    let plot = s.plot_rect();
    assert_eq!(map_to_pixel(&s, 0.0, 0.0, 1.0).y, plot.bottom);
    assert_eq!(map_to_pixel(&s, MAX_POSITION, 0.0, 1.0).y, plot.top);
}

#[test]
fn steps_move_left_to_right_and_hit_the_plot_bounds() {
    let s = size(550.0, 360.0);
    let plot = s.plot_rect();
    for m in 1..=25u32 {
        let m = m as f64;
        let mut prev_x = f64::NEG_INFINITY;
        for step in 0..=(m as u32) {
            let x = map_to_pixel(&s, 120.0, step as f64, m).x;
            assert!(x > prev_x);
            prev_x = x;
        }
        assert_eq!(map_to_pixel(&s, 120.0, 0.0, m).x, plot.left);
        assert_eq!(map_to_pixel(&s, 120.0, m, m).x, plot.right);
    }
}

#[test]
fn single_point_sequence_does_not_divide_by_zero() {
    let s = size(550.0, 360.0);
    let p = map_to_pixel(&s, 42.0, 0.0, 0.0);
    assert!(p.x.is_finite() && p.y.is_finite());
    assert_eq!(p.x, s.plot_rect().left);

    let seq = map_sequence(&s, &[42]);
    assert_eq!(seq.len(), 1);
    assert_eq!(seq[0], p);
}

#[test]
fn three_point_sequence_spans_the_plot() {
    let s = size(550.0, 360.0);
    let plot = s.plot_rect();
    let pts = map_sequence(&s, &[50, 100, 10]);
    assert_eq!(pts.len(), 3);

    assert_eq!(pts[0].x, plot.left);
    assert_eq!(pts[1].x, plot.left + plot.width() / 2.0);
    assert_eq!(pts[2].x, plot.right);

    // higher position = smaller y
    assert!(pts[1].y < pts[0].y);
    assert!(pts[0].y < pts[2].y);
}

#[test]
fn empty_sequence_maps_to_nothing() {
    assert!(map_sequence(&size(100.0, 100.0), &[]).is_empty());
}

#[test]
fn easing_hits_endpoints_and_midpoint() {
    assert_eq!(ease_in_out_cubic(0.0), 0.0);
    assert_eq!(ease_in_out_cubic(1.0), 1.0);
    assert!((ease_in_out_cubic(0.5) - 0.5).abs() < 1e-12);
}

#[test]
fn easing_is_symmetric_and_monotonic() {
    let mut prev = -1.0;
    for i in 0..=1000 {
        let t = i as f64 / 1000.0;
        let e = ease_in_out_cubic(t);
        assert!(e >= prev, "easing decreased at t={t}");
        assert!((e + ease_in_out_cubic(1.0 - t) - 1.0).abs() < 1e-9);
        prev = e;
    }
    // slow start and finish
    assert!(ease_in_out_cubic(0.1) < 0.1);
    assert!(ease_in_out_cubic(0.9) > 0.9);
}

#[test]
fn absent_or_empty_sequence_has_no_path() {
    let s = size(550.0, 360.0);
    assert_eq!(path_points(&s, None), None);
    assert_eq!(path_points(&s, Some(&[][..])), None);

    let single = path_points(&s, Some(&[42][..])).unwrap();
    assert_eq!(single, vec![map_to_pixel(&s, 42.0, 0.0, 0.0)]);
    assert_eq!(
        path_points(&s, Some(&[50, 100, 10][..])),
        Some(map_sequence(&s, &[50, 100, 10]))
    );
}
