use crate::constants::*;

/// A viewport-relative rectangle, as reported by `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Optional page chrome the container must stay clear of.
#[derive(Debug, Clone, Copy, Default)]
pub struct Landmarks {
    pub header: Option<Bounds>,
    pub nav: Option<Bounds>,
    pub expected_output: Option<Bounds>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Right,
    Left,
    Clamped,
}

/// Fixed-position coordinates for the container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub left: f64,
    pub top: f64,
    pub side: Side,
    /// No vertical room between the landmarks; centered in the viewport.
    pub fallback: bool,
}

// Half-up rounding, matching how browsers report rounded offsets.
#[inline]
fn round_px(v: f64) -> f64 {
    (v + 0.5).floor()
}

/// Zero dimensions fall back to the default container size.
pub fn container_size(width: f64, height: f64) -> (f64, f64) {
    let w = if width > 0.0 { width } else { DEFAULT_CONTAINER_WIDTH };
    let h = if height > 0.0 { height } else { DEFAULT_CONTAINER_HEIGHT };
    (w, h)
}

/// Places a `container` sized box beside `reference` inside a
/// `viewport_width` x `viewport_height` viewport.
pub fn place(
    reference: Bounds,
    container: (f64, f64),
    viewport_width: f64,
    viewport_height: f64,
    landmarks: &Landmarks,
) -> Placement {
    let (cw, ch) = container_size(container.0, container.1);

    let available_right = (viewport_width - (reference.right() + PLACEMENT_GAP)).max(0.0);
    let (left, side) = if available_right >= cw {
        (
            round_px(reference.right() + PLACEMENT_GAP + (available_right - cw) / 2.0),
            Side::Right,
        )
    } else if reference.left >= cw + PLACEMENT_GAP {
        (round_px(reference.left - PLACEMENT_GAP - cw), Side::Left)
    } else {
        (
            (reference.right() + PLACEMENT_GAP)
                .max(VIEWPORT_INSET)
                .min((viewport_width - cw - VIEWPORT_INSET).max(VIEWPORT_INSET)),
            Side::Clamped,
        )
    };

    let desired_top = round_px(reference.top + (reference.height - ch) / 2.0);

    let mut min_top = VIEWPORT_INSET;
    if let Some(header) = landmarks.header {
        min_top = min_top.max(round_px(header.bottom() + PLACEMENT_GAP_VERTICAL));
    }

    let mut max_top = round_px(viewport_height - ch - VIEWPORT_INSET);
    for below in [landmarks.expected_output, landmarks.nav].into_iter().flatten() {
        max_top = max_top.min(round_px(below.top - ch - PLACEMENT_GAP_VERTICAL));
    }

    if min_top > max_top {
        let centered = round_px((viewport_height - ch) / 2.0);
        let top = centered
            .min(viewport_height - ch - VIEWPORT_INSET)
            .max(VIEWPORT_INSET);
        return Placement {
            left,
            top,
            side,
            fallback: true,
        };
    }

    Placement {
        left,
        top: desired_top.max(min_top).min(max_top),
        side,
        fallback: false,
    }
}
