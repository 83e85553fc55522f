use crate::layout::{Bounds, Landmarks};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// First match for `selector`; an invalid selector counts as no match.
#[inline]
pub fn query(document: &web::Document, selector: &str) -> Option<web::Element> {
    document.query_selector(selector).ok().flatten()
}

pub fn canvas_by_id(document: &web::Document, id: &str) -> Option<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
}

pub fn html_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn bounds_of(el: &web::Element) -> Bounds {
    let rect = el.get_bounding_client_rect();
    Bounds::new(rect.left(), rect.top(), rect.width(), rect.height())
}

pub fn landmarks(
    document: &web::Document,
    header: &str,
    nav: &str,
    expected_output: &str,
) -> Landmarks {
    Landmarks {
        header: query(document, header).map(|el| bounds_of(&el)),
        nav: query(document, nav).map(|el| bounds_of(&el)),
        expected_output: query(document, expected_output).map(|el| bounds_of(&el)),
    }
}

/// Viewport size in CSS pixels.
pub fn viewport_size(window: &web::Window) -> (f64, f64) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (w, h)
}

#[inline]
pub fn device_pixel_ratio() -> f64 {
    web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0)
}

pub fn set_style(el: &web::HtmlElement, props: &[(&str, &str)]) -> anyhow::Result<()> {
    let style = el.style();
    for (name, value) in props {
        style
            .set_property(name, value)
            .map_err(|e| anyhow::anyhow!("set {}: {:?}", name, e))?;
    }
    Ok(())
}
