use glam::DVec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Center,
    Right,
}

impl TextAlign {
    pub fn as_str(self) -> &'static str {
        match self {
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

/// A label to draw; `rotation` is in radians around `at`.
#[derive(Debug, Clone, Copy)]
pub struct Label<'a> {
    pub text: &'a str,
    pub at: DVec2,
    pub font: &'a str,
    pub color: &'a str,
    pub align: TextAlign,
    pub rotation: f64,
}

/// 2D drawing operations the graph needs, in logical pixel coordinates.
///
/// The browser layer implements this over `CanvasRenderingContext2d`.
pub trait Surface {
    fn clear(&mut self, width: f64, height: f64);
    fn fill_rect(&mut self, color: &str, origin: DVec2, size: DVec2);
    fn line(&mut self, color: &str, width: f64, from: DVec2, to: DVec2);
    fn dot(&mut self, color: &str, center: DVec2, radius: f64);
    fn text(&mut self, label: &Label<'_>);
}
