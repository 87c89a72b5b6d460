use crate::color::{CssColor, Rgba};
use glam::Vec2;

/// Canvas compositing modes used by the background.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompositeMode {
    SourceOver,
    Lighter,
    Overlay,
}

impl CompositeMode {
    /// Name accepted by `globalCompositeOperation`.
    pub fn as_css(&self) -> &'static str {
        match self {
            CompositeMode::SourceOver => "source-over",
            CompositeMode::Lighter => "lighter",
            CompositeMode::Overlay => "overlay",
        }
    }
}

/// Everything the render loop draws goes through this trait. The web crate
/// backs it with a 2D canvas context; tests use a recorder.
pub trait DrawSurface {
    fn resize(&mut self, width: u32, height: u32);

    fn set_composite(&mut self, mode: CompositeMode);

    fn fill_background(&mut self, color: &CssColor);

    /// Radial gradient from the centre (radius 0) out to `outer_radius`.
    fn fill_radial_vignette(&mut self, center: Vec2, outer_radius: f32, inner: Rgba, outer: Rgba);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);

    /// Fill the closed polygon `points` with a vertical linear gradient
    /// running from `gradient_y.0` (colour `top`) to `gradient_y.1` (`bottom`).
    fn fill_band(&mut self, points: &[Vec2], gradient_y: (f32, f32), top: Rgba, bottom: Rgba);
}
