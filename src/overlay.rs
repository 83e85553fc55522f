use crate::dom;
use crate::layout::Placement;
use web_sys as web;

/// Pins the graph container at `placement` (viewport coordinates).
pub fn pin(container: &web::HtmlElement, placement: &Placement) -> anyhow::Result<()> {
    let left = format!("{}px", placement.left);
    let top = format!("{}px", placement.top);
    dom::set_style(
        container,
        &[
            ("position", "fixed"),
            ("left", left.as_str()),
            ("top", top.as_str()),
        ],
    )
}

#[inline]
pub fn reveal(container: &web::HtmlElement) {
    if let Err(e) = dom::set_style(
        container,
        &[("visibility", "visible"), ("pointer-events", "auto")],
    ) {
        log::warn!("reveal failed: {:?}", e);
    }
}
