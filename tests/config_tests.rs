// Host-side tests for page options and tuning constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod config {
    include!("../src/config.rs");
}

use config::*;
use constants::*;

#[test]
fn defaults_match_the_stock_page() {
    let o = GraphOptions::default();
    assert_eq!(o.static_canvas_id, "graphStatic");
    assert_eq!(o.dynamic_canvas_id, "graphCanvas");
    assert_eq!(o.container_id, "graph-container");
    assert_eq!(o.input_selector, ".input-field");
    assert_eq!(o.header_selector, "header");
    assert_eq!(o.nav_selector, "nav");
    assert_eq!(o.expected_output_selector, ".expected-output");
    assert_eq!(o.segment_duration_ms, 900.0);
}

#[test]
fn partial_options_keep_remaining_defaults() {
    let o: GraphOptions =
        serde_json::from_str(r#"{ "containerId": "plot", "segmentDurationMs": 250 }"#).unwrap();
    assert_eq!(o.container_id, "plot");
    assert_eq!(o.segment_duration_ms, 250.0);
    assert_eq!(o.static_canvas_id, "graphStatic");
    assert_eq!(o.input_selector, ".input-field");

    let empty: GraphOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(empty, GraphOptions::default());
}

#[test]
fn negative_duration_is_rejected() {
    let o = GraphOptions {
        segment_duration_ms: -1.0,
        ..GraphOptions::default()
    };
    let err = o.validate().unwrap_err();
    assert!(matches!(err, OptionsError::Duration(d) if d == -1.0));
    assert!(err.to_string().contains("-1"));

    let zero = GraphOptions {
        segment_duration_ms: 0.0,
        ..GraphOptions::default()
    };
    assert!(zero.validate().is_ok());
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn plot_fits_the_default_canvas() {
    assert!(PADDING_LEFT + PADDING_RIGHT < DEFAULT_CANVAS_WIDTH);
    assert!(PADDING_TOP + PADDING_BOTTOM < DEFAULT_CANVAS_HEIGHT);
    // position tick labels sit left of the y axis
    assert!(POSITION_TICK_X < PADDING_LEFT);
    assert!(POSITION_TITLE_X < POSITION_TICK_X);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn placement_constants_are_sane() {
    assert!(DEFAULT_CONTAINER_WIDTH > 0.0 && DEFAULT_CONTAINER_HEIGHT > 0.0);
    assert!(PLACEMENT_GAP > VIEWPORT_INSET);
    assert!(PLACEMENT_GAP_VERTICAL > 0.0);
    assert!(SEGMENT_DURATION_MS > 0.0);
    assert!(MARKER_RADIUS > 0.0);
}
