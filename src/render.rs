use glam::Vec2;
use portfolio_core::{CompositeMode, CssColor, DrawSurface, Rgba};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// [`DrawSurface`] backed by a 2D canvas context.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasSurface {
    /// `None` when the canvas has no 2D context (already claimed, or unsupported).
    pub fn from_canvas(canvas: &web::HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .ok()?;
        Some(Self {
            canvas: canvas.clone(),
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
        })
    }

    #[inline]
    #[allow(deprecated)]
    fn fill_style(&self, style: &JsValue) {
        self.ctx.set_fill_style(style);
    }
}

impl DrawSurface for CanvasSurface {
    fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        self.width = width as f64;
        self.height = height as f64;
    }

    fn set_composite(&mut self, mode: CompositeMode) {
        _ = self.ctx.set_global_composite_operation(mode.as_css());
    }

    fn fill_background(&mut self, color: &CssColor) {
        self.fill_style(&JsValue::from_str(&color.css()));
        self.ctx.fill_rect(0.0, 0.0, self.width, self.height);
    }

    fn fill_radial_vignette(&mut self, center: Vec2, outer_radius: f32, inner: Rgba, outer: Rgba) {
        let (cx, cy) = (center.x as f64, center.y as f64);
        let gradient =
            match self
                .ctx
                .create_radial_gradient(cx, cy, 0.0, cx, cy, outer_radius.max(0.0) as f64)
            {
                Ok(g) => g,
                Err(e) => {
                    log::debug!("[render] radial gradient: {:?}", e);
                    return;
                }
            };
        _ = gradient.add_color_stop(0.0, &inner.css());
        _ = gradient.add_color_stop(1.0, &outer.css());
        self.fill_style(&gradient);
        self.ctx.fill_rect(0.0, 0.0, self.width, self.height);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.fill_style(&JsValue::from_str(&color.css()));
        self.ctx.begin_path();
        _ = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius.max(0.0) as f64,
            0.0,
            std::f64::consts::TAU,
        );
        self.ctx.fill();
    }

    fn fill_band(&mut self, points: &[Vec2], gradient_y: (f32, f32), top: Rgba, bottom: Rgba) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.ctx.begin_path();
        self.ctx.move_to(first.x as f64, first.y as f64);
        for p in rest {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
        self.ctx.close_path();
        let gradient =
            self.ctx
                .create_linear_gradient(0.0, gradient_y.0 as f64, 0.0, gradient_y.1 as f64);
        _ = gradient.add_color_stop(0.0, &top.css());
        _ = gradient.add_color_stop(1.0, &bottom.css());
        self.fill_style(&gradient);
        self.ctx.fill();
    }
}
