use crate::constants::*;
use glam::DVec2;

/// Logical canvas size plus the device pixel ratio used for the backing store.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
    pub ratio: f64,
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
            ratio: 1.0,
        }
    }
}

impl CanvasSize {
    /// Floors both dimensions to whole logical pixels (at least 1).
    pub fn new(width: f64, height: f64, ratio: f64) -> Self {
        let ratio = if ratio.is_finite() && ratio > 0.0 {
            ratio
        } else {
            1.0
        };
        Self {
            width: floor_px(width),
            height: floor_px(height),
            ratio,
        }
    }

    #[inline]
    pub fn backing_width(&self) -> u32 {
        floor_px(self.width * self.ratio) as u32
    }

    #[inline]
    pub fn backing_height(&self) -> u32 {
        floor_px(self.height * self.ratio) as u32
    }

    /// The padded rectangle data points are plotted into.
    pub fn plot_rect(&self) -> PlotRect {
        PlotRect {
            left: PADDING_LEFT,
            top: PADDING_TOP,
            right: self.width - PADDING_RIGHT,
            bottom: self.height - PADDING_BOTTOM,
        }
    }
}

#[inline]
fn floor_px(v: f64) -> f64 {
    if v.is_finite() {
        v.floor().max(1.0)
    } else {
        1.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl PlotRect {
    #[inline]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

/// Maps a head position at a time step into pixel space.
///
/// Higher positions land higher on screen. A `max_steps` of zero (a single
/// point) puts the step on the left edge of the plot.
pub fn map_to_pixel(size: &CanvasSize, position: f64, step: f64, max_steps: f64) -> DVec2 {
    let plot = size.plot_rect();
    let step_frac = if max_steps > 0.0 { step / max_steps } else { 0.0 };
    let x = plot.left + step_frac * plot.width();
    let y = plot.top + plot.height() - (position / MAX_POSITION) * plot.height();
    DVec2::new(x, y)
}

/// Maps a whole sequence; step `i` of `n` points spans `[0, n - 1]`.
pub fn map_sequence(size: &CanvasSize, sequence: &[u32]) -> Vec<DVec2> {
    let max_steps = sequence.len().saturating_sub(1) as f64;
    sequence
        .iter()
        .enumerate()
        .map(|(i, &p)| map_to_pixel(size, p as f64, i as f64, max_steps))
        .collect()
}

/// Points to animate; `None` when there is nothing to draw.
pub fn path_points(size: &CanvasSize, sequence: Option<&[u32]>) -> Option<Vec<DVec2>> {
    sequence
        .filter(|s| !s.is_empty())
        .map(|s| map_sequence(size, s))
}

/// Cubic ease-in-out over `[0, 1]`.
#[inline]
pub fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}
