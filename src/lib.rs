#![cfg(target_arch = "wasm32")]
use crate::animation::Progress;
use crate::config::GraphOptions;
use crate::graph::DiskGraph;
use crate::layout::Placement;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;
use web_sys as web;

mod animation;
mod background;
mod canvas;
mod config;
mod constants;
mod dom;
mod events;
mod frame;
mod geometry;
mod graph;
mod layout;
mod overlay;
mod surface;

// Elements the graph lives in, resolved once on mount.
struct Page {
    options: GraphOptions,
    container: web::HtmlElement,
    input: web::Element,
    graph: Rc<DiskGraph>,
}

impl Page {
    /// `Ok(None)` when the page lacks any of the required elements.
    fn mount(options: GraphOptions) -> anyhow::Result<Option<Self>> {
        let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

        let static_canvas = dom::canvas_by_id(&document, &options.static_canvas_id);
        let dynamic_canvas = dom::canvas_by_id(&document, &options.dynamic_canvas_id);
        let container = dom::html_by_id(&document, &options.container_id);
        let input = dom::query(&document, &options.input_selector);
        let (Some(static_canvas), Some(dynamic_canvas), Some(container), Some(input)) =
            (static_canvas, dynamic_canvas, container, input)
        else {
            log::debug!("[mount] graph elements not on this page; skipping");
            return Ok(None);
        };

        let graph = DiskGraph::new(static_canvas, dynamic_canvas, options.segment_duration_ms)?;
        let page = Self {
            options,
            container,
            input,
            graph: Rc::new(graph),
        };
        page.place_container()?;
        page.graph.configure_size_from(&page.container)?;
        page.graph.draw_background();
        Ok(Some(page))
    }

    fn place_container(&self) -> anyhow::Result<Placement> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::anyhow!("no document"))?;
        let (vw, vh) = dom::viewport_size(&window);
        let landmarks = dom::landmarks(
            &document,
            &self.options.header_selector,
            &self.options.nav_selector,
            &self.options.expected_output_selector,
        );
        let placement = layout::place(
            dom::bounds_of(&self.input),
            (
                self.container.offset_width() as f64,
                self.container.offset_height() as f64,
            ),
            vw,
            vh,
            &landmarks,
        );
        overlay::pin(&self.container, &placement)?;
        log::debug!(
            "[layout] left={} top={} side={:?} fallback={}",
            placement.left,
            placement.top,
            placement.side,
            placement.fallback
        );
        Ok(placement)
    }

    fn reposition(&self) -> anyhow::Result<()> {
        self.place_container()?;
        self.graph.configure_size_from(&self.container)?;
        self.graph.draw_background();
        self.graph.clear_dynamic();
        Ok(())
    }
}

/// Handle to a mounted graph, owned by the page script.
#[wasm_bindgen]
pub struct GraphApp {
    page: Rc<Page>,
}

#[wasm_bindgen]
impl GraphApp {
    /// Re-places the container and redraws the background for the new size.
    pub fn reposition(&self) -> Result<(), JsValue> {
        self.page
            .reposition()
            .map_err(|e| JsValue::from_str(&format!("{e:#}")))
    }

    /// Animates the head positions. Resolves `true` when the path finished
    /// drawing, `false` when a later call replaced it.
    pub fn animate(&self, sequence: Option<Vec<u32>>) -> js_sys::Promise {
        let graph = self.page.graph.clone();
        future_to_promise(async move {
            match graph.animate(sequence.as_deref()).await {
                Ok(progress) => Ok(JsValue::from_bool(progress == Progress::Finished)),
                Err(e) => {
                    log::error!("animate error: {:?}", e);
                    Err(JsValue::from_str(&format!("{e:#}")))
                }
            }
        })
    }

    #[wasm_bindgen(js_name = clearPath)]
    pub fn clear_path(&self) {
        self.page.graph.clear_dynamic();
    }

    /// `[x, y]` in logical pixels for a position at a step.
    #[wasm_bindgen(js_name = mapToPixel)]
    pub fn map_to_pixel(&self, position: f64, step: f64, max_steps: f64) -> Vec<f64> {
        let p = self.page.graph.map_to_pixel(position, step, max_steps);
        vec![p.x, p.y]
    }
}

static MOUNTED: events::MountGuard = events::MountGuard::new();

/// Page-load entry point, once per page. Returns `undefined` when the page
/// has no graph or one is already mounted.
#[wasm_bindgen(js_name = mountGraph)]
pub fn mount_graph(options: JsValue) -> Result<Option<GraphApp>, JsValue> {
    let options = GraphOptions::from_js(options).map_err(|e| JsValue::from_str(&e.to_string()))?;
    if !MOUNTED.claim() {
        log::warn!("[mount] graph already mounted on this page; ignoring");
        return Ok(None);
    }
    let page = match Page::mount(options) {
        Ok(Some(page)) => Rc::new(page),
        Ok(None) => {
            MOUNTED.release();
            return Ok(None);
        }
        Err(e) => {
            MOUNTED.release();
            log::error!("mount error: {:?}", e);
            return Err(JsValue::from_str(&format!("{e:#}")));
        }
    };

    let page_resize = page.clone();
    events::wire_resize(move || {
        if let Err(e) = page_resize.reposition() {
            log::error!("resize error: {:?}", e);
        }
    });

    // first paint happens once the container sits at its final position
    let container = page.container.clone();
    frame::after_frames(2, move || overlay::reveal(&container));

    let size = page.graph.size();
    log::info!("disk graph mounted ({}x{})", size.width, size.height);
    Ok(Some(GraphApp { page }))
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("disk-graph starting");
    Ok(())
}
