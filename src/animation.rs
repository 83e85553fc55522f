use crate::constants::*;
use crate::geometry::ease_in_out_cubic;
use crate::surface::Surface;
use glam::DVec2;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Source of animation frames. The callback receives a timestamp in ms.
pub trait FrameScheduler {
    fn request_frame(&self, callback: Box<dyn FnOnce(f64)>);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    Running,
    Finished,
    /// A newer animation took over the dynamic layer.
    Superseded,
}

/// Shared counter deciding which animation owns the dynamic layer.
#[derive(Debug, Clone, Default)]
pub struct Generation(Rc<Cell<u64>>);

impl Generation {
    /// Issues a ticket that invalidates every earlier one.
    pub fn issue(&self) -> Ticket {
        let id = self.0.get().wrapping_add(1);
        self.0.set(id);
        Ticket {
            generation: self.clone(),
            id,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Ticket {
    generation: Generation,
    id: u64,
}

impl Ticket {
    #[inline]
    pub fn is_current(&self) -> bool {
        self.generation.0.get() == self.id
    }
}

/// Point-to-point eased animation over precomputed pixel coordinates.
///
/// Segment `i` runs from `points[i]` to `points[i + 1]`. The first segment's
/// clock starts on its first frame; each later one starts when its
/// predecessor completes (`t >= 1`). Completing the last segment performs a
/// single full redraw.
pub struct Animation {
    points: Vec<DVec2>,
    layer: DVec2,
    duration_ms: f64,
    segment: usize,
    segment_start: Option<f64>,
    eased: f64,
    ticket: Ticket,
}

impl Animation {
    /// Returns `None` for an empty sequence.
    pub fn new(points: Vec<DVec2>, layer: DVec2, duration_ms: f64, ticket: Ticket) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        Some(Self {
            points,
            layer,
            duration_ms,
            segment: 0,
            segment_start: None,
            eased: 0.0,
            ticket,
        })
    }

    /// Index of the segment currently animating (equals the number completed).
    pub fn segment(&self) -> usize {
        self.segment
    }

    pub fn eased(&self) -> f64 {
        self.eased
    }

    pub fn is_finished(&self) -> bool {
        self.segment + 1 >= self.points.len()
    }

    /// Clears the layer and marks the first point.
    pub fn begin<S: Surface>(&mut self, surface: &mut S) {
        surface.clear(self.layer.x, self.layer.y);
        surface.dot(MARKER_COLOR, self.points[0], MARKER_RADIUS);
    }

    /// Draws the frame for `now` and moves to the next segment when due.
    pub fn advance<S: Surface>(&mut self, now: f64, surface: &mut S) -> Progress {
        if !self.ticket.is_current() {
            return Progress::Superseded;
        }
        if self.is_finished() {
            return Progress::Finished;
        }

        let start = *self.segment_start.get_or_insert(now);
        let t = if self.duration_ms > 0.0 {
            ((now - start) / self.duration_ms).clamp(0.0, 1.0)
        } else {
            1.0
        };
        self.eased = ease_in_out_cubic(t);
        self.draw_frame(surface);

        if t >= 1.0 {
            self.segment += 1;
            // the next segment's clock starts as this one completes
            self.segment_start = Some(now);
            if self.is_finished() {
                self.draw_final(surface);
                return Progress::Finished;
            }
        }
        Progress::Running
    }

    fn draw_frame<S: Surface>(&self, surface: &mut S) {
        surface.clear(self.layer.x, self.layer.y);
        for pair in self.points[..=self.segment].windows(2) {
            surface.line(SEGMENT_COLOR, SEGMENT_LINE_WIDTH, pair[0], pair[1]);
            surface.dot(MARKER_COLOR, pair[0], MARKER_RADIUS);
        }
        let from = self.points[self.segment];
        let to = self.points[self.segment + 1];
        let tip = from.lerp(to, self.eased);
        surface.line(SEGMENT_COLOR, SEGMENT_LINE_WIDTH, from, tip);
        surface.dot(MARKER_COLOR, tip, MARKER_RADIUS);
    }

    fn draw_final<S: Surface>(&self, surface: &mut S) {
        surface.clear(self.layer.x, self.layer.y);
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                surface.line(SEGMENT_COLOR, SEGMENT_LINE_WIDTH, self.points[i - 1], *p);
            }
            surface.dot(MARKER_COLOR, *p, MARKER_RADIUS);
        }
    }
}

/// Starts animations on a dynamic layer; a new `play` supersedes the last.
#[derive(Debug, Clone)]
pub struct Animator {
    generation: Generation,
    duration_ms: f64,
}

impl Animator {
    pub fn new(duration_ms: f64) -> Self {
        Self {
            generation: Generation::default(),
            duration_ms,
        }
    }

    /// Plays `points` on `surface`. `on_done` runs exactly once: right away
    /// (without drawing) for an empty sequence, otherwise when the animation
    /// finishes or is superseded.
    pub fn play<S, F>(
        &self,
        points: Vec<DVec2>,
        layer: DVec2,
        surface: Rc<RefCell<S>>,
        frames: F,
        on_done: Box<dyn FnOnce(Progress)>,
    ) where
        S: Surface + 'static,
        F: FrameScheduler + Clone + 'static,
    {
        if points.is_empty() {
            on_done(Progress::Finished);
            return;
        }
        let ticket = self.generation.issue();
        let Some(mut animation) = Animation::new(points, layer, self.duration_ms, ticket) else {
            return;
        };
        animation.begin(&mut *surface.borrow_mut());
        if animation.is_finished() {
            on_done(Progress::Finished);
            return;
        }
        schedule(animation, surface, frames, on_done);
    }
}

fn schedule<S, F>(
    mut animation: Animation,
    surface: Rc<RefCell<S>>,
    frames: F,
    on_done: Box<dyn FnOnce(Progress)>,
) where
    S: Surface + 'static,
    F: FrameScheduler + Clone + 'static,
{
    let next = frames.clone();
    frames.request_frame(Box::new(move |now| {
        let progress = animation.advance(now, &mut *surface.borrow_mut());
        match progress {
            Progress::Running => schedule(animation, surface, next, on_done),
            done => on_done(done),
        }
    }));
}
