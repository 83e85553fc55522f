use crate::animation::{Animator, Progress};
use crate::background;
use crate::canvas::CanvasLayer;
use crate::dom;
use crate::frame::RafScheduler;
use crate::geometry::{self, CanvasSize};
use crate::surface::Surface;
use glam::DVec2;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// The two stacked graph canvases: a static background and a dynamic layer.
pub struct DiskGraph {
    static_layer: RefCell<CanvasLayer>,
    dynamic_layer: Rc<RefCell<CanvasLayer>>,
    size: Cell<CanvasSize>,
    animator: Animator,
}

impl DiskGraph {
    pub fn new(
        static_canvas: web::HtmlCanvasElement,
        dynamic_canvas: web::HtmlCanvasElement,
        segment_duration_ms: f64,
    ) -> anyhow::Result<Self> {
        Ok(Self {
            static_layer: RefCell::new(CanvasLayer::new(static_canvas)?),
            dynamic_layer: Rc::new(RefCell::new(CanvasLayer::new(dynamic_canvas)?)),
            size: Cell::new(CanvasSize::default()),
            animator: Animator::new(segment_duration_ms),
        })
    }

    pub fn size(&self) -> CanvasSize {
        self.size.get()
    }

    pub fn configure_size(&self, width: f64, height: f64) -> anyhow::Result<()> {
        let size = CanvasSize::new(width, height, dom::device_pixel_ratio());
        self.static_layer.borrow().resize(&size)?;
        self.dynamic_layer.borrow().resize(&size)?;
        self.size.set(size);
        log::debug!(
            "[graph] size {}x{} @{} -> backing {}x{}",
            size.width,
            size.height,
            size.ratio,
            size.backing_width(),
            size.backing_height()
        );
        Ok(())
    }

    pub fn configure_size_from(&self, container: &web::Element) -> anyhow::Result<()> {
        let bounds = dom::bounds_of(container);
        self.configure_size(bounds.width, bounds.height)
    }

    pub fn draw_background(&self) {
        background::draw_background(&mut *self.static_layer.borrow_mut(), &self.size.get());
    }

    pub fn clear_dynamic(&self) {
        let size = self.size.get();
        self.dynamic_layer.borrow_mut().clear(size.width, size.height);
    }

    #[inline]
    pub fn map_to_pixel(&self, position: f64, step: f64, max_steps: f64) -> DVec2 {
        geometry::map_to_pixel(&self.size.get(), position, step, max_steps)
    }

    /// Animates the head path; resolves once the final frame is drawn or a
    /// newer call takes over the dynamic layer.
    pub async fn animate(&self, sequence: Option<&[u32]>) -> anyhow::Result<Progress> {
        let size = self.size.get();
        let Some(points) = geometry::path_points(&size, sequence) else {
            return Ok(Progress::Finished);
        };
        log::debug!("[graph] animating {} points", points.len());

        let outcome = Rc::new(Cell::new(Progress::Running));
        let mut pending = Some(points);
        let promise = js_sys::Promise::new(&mut |resolve, _reject| {
            let Some(points) = pending.take() else {
                return;
            };
            let outcome = outcome.clone();
            self.animator.play(
                points,
                DVec2::new(size.width, size.height),
                self.dynamic_layer.clone(),
                RafScheduler,
                Box::new(move |progress| {
                    outcome.set(progress);
                    _ = resolve.call0(&JsValue::NULL);
                }),
            );
        });
        JsFuture::from(promise)
            .await
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;

        let progress = outcome.get();
        match progress {
            Progress::Superseded => log::debug!("[graph] animation superseded"),
            _ => log::debug!("[graph] animation finished"),
        }
        Ok(progress)
    }
}
