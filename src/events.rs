use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Calls `handler` on every window resize for the lifetime of the page.
pub fn wire_resize(mut handler: impl FnMut() + 'static) {
    let Some(window) = web::window() else {
        return;
    };
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// One mounted graph per page: the resize listener above is never removed.
#[derive(Debug, Default)]
pub struct MountGuard(AtomicBool);

impl MountGuard {
    pub const fn new() -> Self {
        Self(AtomicBool::new(false))
    }

    /// `true` for the first claim only, until released.
    pub fn claim(&self) -> bool {
        !self.0.swap(true, Ordering::SeqCst)
    }

    /// Gives the claim back after a mount that did not happen.
    pub fn release(&self) {
        self.0.store(false, Ordering::SeqCst);
    }
}
