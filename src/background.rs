use crate::constants::*;
use crate::geometry::CanvasSize;
use crate::surface::{Label, Surface, TextAlign};
use glam::DVec2;
use std::f64::consts::FRAC_PI_2;

/// Position axis tick values, bottom to top.
pub fn position_ticks() -> Vec<u32> {
    (0..=GRID_ROWS)
        .map(|i| (MAX_POSITION / GRID_ROWS as f64 * i as f64).round() as u32)
        .collect()
}

/// Time axis tick values, left to right.
pub fn time_ticks() -> Vec<u32> {
    (0..=GRID_COLUMNS).collect()
}

/// Paints the static layer: fill, grid lattice, axes, ticks and titles.
pub fn draw_background<S: Surface>(surface: &mut S, size: &CanvasSize) {
    let (w, h) = (size.width, size.height);
    let plot = size.plot_rect();

    surface.fill_rect(BACKGROUND_COLOR, DVec2::ZERO, DVec2::new(w, h));

    // vertical lines span the full width; horizontal ones stay in the plot
    for i in 0..=GRID_COLUMNS {
        let x = w / GRID_COLUMNS as f64 * i as f64;
        surface.line(
            GRID_COLOR,
            GRID_LINE_WIDTH,
            DVec2::new(x, plot.top),
            DVec2::new(x, plot.bottom),
        );
    }
    for i in 0..=GRID_ROWS {
        let y = plot.top + plot.height() / GRID_ROWS as f64 * i as f64;
        surface.line(
            GRID_COLOR,
            GRID_LINE_WIDTH,
            DVec2::new(plot.left, y),
            DVec2::new(plot.right, y),
        );
    }

    // axes
    surface.line(
        AXIS_COLOR,
        AXIS_LINE_WIDTH,
        DVec2::new(plot.left, plot.bottom),
        DVec2::new(plot.right, plot.bottom),
    );
    surface.line(
        AXIS_COLOR,
        AXIS_LINE_WIDTH,
        DVec2::new(plot.left, plot.top),
        DVec2::new(plot.left, plot.bottom),
    );

    surface.text(&Label {
        text: "Time",
        at: DVec2::new(((plot.left + plot.right) / 2.0).round(), h - TIME_TITLE_OFFSET_Y),
        font: TITLE_FONT,
        color: LABEL_COLOR,
        align: TextAlign::Center,
        rotation: 0.0,
    });
    surface.text(&Label {
        text: "Position",
        at: DVec2::new(POSITION_TITLE_X, h / 2.0),
        font: TITLE_FONT,
        color: LABEL_COLOR,
        align: TextAlign::Center,
        rotation: -FRAC_PI_2,
    });

    for (i, value) in position_ticks().into_iter().enumerate() {
        let y = plot.bottom - plot.height() / GRID_ROWS as f64 * i as f64;
        let text = value.to_string();
        surface.text(&Label {
            text: &text,
            at: DVec2::new(POSITION_TICK_X, y + POSITION_TICK_BASELINE),
            font: TICK_FONT,
            color: LABEL_COLOR,
            align: TextAlign::Right,
            rotation: 0.0,
        });
    }
    for (i, value) in time_ticks().into_iter().enumerate() {
        let x = plot.left + plot.width() / GRID_COLUMNS as f64 * i as f64;
        let text = value.to_string();
        surface.text(&Label {
            text: &text,
            at: DVec2::new(x, h - TIME_TICK_OFFSET_Y),
            font: TICK_FONT,
            color: LABEL_COLOR,
            align: TextAlign::Center,
            rotation: 0.0,
        });
    }
}
