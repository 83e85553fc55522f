use crate::animation::FrameScheduler;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Frames from `requestAnimationFrame`.
#[derive(Clone, Copy, Default)]
pub struct RafScheduler;

impl FrameScheduler for RafScheduler {
    fn request_frame(&self, callback: Box<dyn FnOnce(f64)>) {
        let Some(w) = web::window() else {
            log::warn!("no window; dropping animation frame");
            return;
        };
        let cb = Closure::once_into_js(move |now: f64| callback(now));
        if let Err(e) = w.request_animation_frame(cb.unchecked_ref()) {
            log::error!("requestAnimationFrame error: {:?}", e);
        }
    }
}

/// Runs `f` after `frames` animation frames have passed.
pub fn after_frames(frames: u32, f: impl FnOnce() + 'static) {
    if frames == 0 {
        f();
        return;
    }
    RafScheduler.request_frame(Box::new(move |_| after_frames(frames - 1, f)));
}
