use crate::dom;
use crate::geometry::CanvasSize;
use crate::surface::{Label, Surface};
use glam::DVec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// One `<canvas>` and its 2D context, drawn in logical pixels.
pub struct CanvasLayer {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasLayer {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        Ok(Self { canvas, ctx })
    }

    /// Scales the backing store by the pixel ratio and keeps the CSS size logical.
    pub fn resize(&self, size: &CanvasSize) -> anyhow::Result<()> {
        self.canvas.set_width(size.backing_width());
        self.canvas.set_height(size.backing_height());
        let css_w = format!("{}px", size.width);
        let css_h = format!("{}px", size.height);
        dom::set_style(&self.canvas, &[("width", css_w.as_str()), ("height", css_h.as_str())])?;
        // setting width/height resets the context, so the transform goes last
        self.ctx
            .set_transform(size.ratio, 0.0, 0.0, size.ratio, 0.0, 0.0)
            .map_err(|e| anyhow::anyhow!("{:?}", e))
    }
}

impl Surface for CanvasLayer {
    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_rect(&mut self, color: &str, origin: DVec2, size: DVec2) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(origin.x, origin.y, size.x, size.y);
    }

    fn line(&mut self, color: &str, width: f64, from: DVec2, to: DVec2) {
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(width);
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.ctx.stroke();
    }

    fn dot(&mut self, color: &str, center: DVec2, radius: f64) {
        self.ctx.set_fill_style_str(color);
        self.ctx.begin_path();
        _ = self.ctx.arc(center.x, center.y, radius, 0.0, TAU);
        self.ctx.fill();
    }

    fn text(&mut self, label: &Label<'_>) {
        let ctx = &self.ctx;
        ctx.set_fill_style_str(label.color);
        ctx.set_font(label.font);
        ctx.set_text_align(label.align.as_str());
        if label.rotation == 0.0 {
            _ = ctx.fill_text(label.text, label.at.x, label.at.y);
            return;
        }
        ctx.save();
        _ = ctx.translate(label.at.x, label.at.y);
        _ = ctx.rotate(label.rotation);
        _ = ctx.fill_text(label.text, 0.0, 0.0);
        ctx.restore();
    }
}
