// Shared host-side doubles: a surface that records draw calls and a frame
// scheduler the test advances by hand.

#![allow(dead_code)]

use crate::animation::FrameScheduler;
use crate::surface::{Label, Surface};
use glam::DVec2;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Clear,
    FillRect { origin: DVec2, size: DVec2 },
    Line { from: DVec2, to: DVec2, width: f64 },
    Dot { center: DVec2 },
    Text { text: String, at: DVec2, rotation: f64 },
}

#[derive(Default)]
pub struct Recorder {
    pub ops: Vec<Op>,
}

impl Recorder {
    pub fn count(&self, pred: impl Fn(&Op) -> bool) -> usize {
        self.ops.iter().filter(|op| pred(op)).count()
    }

    pub fn clears(&self) -> usize {
        self.count(|op| matches!(op, Op::Clear))
    }

    pub fn dots(&self) -> usize {
        self.count(|op| matches!(op, Op::Dot { .. }))
    }

    pub fn lines(&self) -> usize {
        self.count(|op| matches!(op, Op::Line { .. }))
    }

    /// Ops drawn since the most recent clear.
    pub fn since_last_clear(&self) -> &[Op] {
        match self.ops.iter().rposition(|op| matches!(op, Op::Clear)) {
            Some(i) => &self.ops[i + 1..],
            None => &self.ops,
        }
    }

    pub fn last_dot(&self) -> Option<DVec2> {
        self.ops.iter().rev().find_map(|op| match op {
            Op::Dot { center } => Some(*center),
            _ => None,
        })
    }
}

impl Surface for Recorder {
    fn clear(&mut self, _width: f64, _height: f64) {
        self.ops.push(Op::Clear);
    }

    fn fill_rect(&mut self, _color: &str, origin: DVec2, size: DVec2) {
        self.ops.push(Op::FillRect { origin, size });
    }

    fn line(&mut self, _color: &str, width: f64, from: DVec2, to: DVec2) {
        self.ops.push(Op::Line { from, to, width });
    }

    fn dot(&mut self, _color: &str, center: DVec2, _radius: f64) {
        self.ops.push(Op::Dot { center });
    }

    fn text(&mut self, label: &Label<'_>) {
        self.ops.push(Op::Text {
            text: label.text.to_string(),
            at: label.at,
            rotation: label.rotation,
        });
    }
}

#[derive(Clone, Default)]
pub struct ManualFrames {
    queue: Rc<RefCell<VecDeque<Box<dyn FnOnce(f64)>>>>,
}

impl ManualFrames {
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Runs every callback queued before this call; returns how many ran.
    pub fn tick(&self, now: f64) -> usize {
        let batch: Vec<_> = self.queue.borrow_mut().drain(..).collect();
        let n = batch.len();
        for cb in batch {
            cb(now);
        }
        n
    }
}

impl FrameScheduler for ManualFrames {
    fn request_frame(&self, callback: Box<dyn FnOnce(f64)>) {
        self.queue.borrow_mut().push_back(callback);
    }
}
