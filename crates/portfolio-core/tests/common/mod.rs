// Recording doubles for the drawing surface and the host.
#![allow(dead_code)]

use glam::Vec2;
use portfolio_core::*;

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Resize(u32, u32),
    Composite(CompositeMode),
    Background(CssColor),
    Vignette { center: Vec2, outer_radius: f32 },
    Circle { center: Vec2, radius: f32, color: Rgba },
    Band { points: usize, gradient_y: (f32, f32) },
}

#[derive(Default, Debug)]
pub struct Recorder {
    pub calls: Vec<Call>,
}

impl Recorder {
    pub fn circles(&self) -> Vec<(Vec2, f32, Rgba)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Circle { center, radius, color } => Some((*center, *radius, *color)),
                _ => None,
            })
            .collect()
    }

    pub fn draw_calls(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| !matches!(c, Call::Resize(..) | Call::Composite(_)))
            .count()
    }
}

impl DrawSurface for Recorder {
    fn resize(&mut self, width: u32, height: u32) {
        self.calls.push(Call::Resize(width, height));
    }
    fn set_composite(&mut self, mode: CompositeMode) {
        self.calls.push(Call::Composite(mode));
    }
    fn fill_background(&mut self, color: &CssColor) {
        self.calls.push(Call::Background(color.clone()));
    }
    fn fill_radial_vignette(&mut self, center: Vec2, outer_radius: f32, _inner: Rgba, _outer: Rgba) {
        self.calls.push(Call::Vignette { center, outer_radius });
    }
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.calls.push(Call::Circle { center, radius, color });
    }
    fn fill_band(&mut self, points: &[Vec2], gradient_y: (f32, f32), _top: Rgba, _bottom: Rgba) {
        self.calls.push(Call::Band {
            points: points.len(),
            gradient_y,
        });
    }
}

/// Counts listener and frame bookkeeping. `fail_on` makes one listener
/// registration fail.
#[derive(Default, Debug)]
pub struct CountingHost {
    pub added: Vec<ListenerKind>,
    pub removed: Vec<ListenerKind>,
    pub requested: u32,
    pub cancelled: Vec<u32>,
    pub fail_on: Option<ListenerKind>,
    pub refuse_frames: bool,
    pub next_frame: u32,
}

impl CountingHost {
    pub fn active(&self) -> usize {
        self.added.len() - self.removed.len()
    }
}

impl Host for CountingHost {
    type Frame = u32;

    fn listen(&mut self, kind: ListenerKind) -> Result<(), HostError> {
        if self.fail_on == Some(kind) {
            return Err(HostError::Listen(kind.event_name(), "refused".into()));
        }
        self.added.push(kind);
        Ok(())
    }

    fn unlisten(&mut self, kind: ListenerKind) {
        self.removed.push(kind);
    }

    fn request_frame(&mut self) -> Option<u32> {
        self.requested += 1;
        if self.refuse_frames {
            return None;
        }
        self.next_frame += 1;
        Some(self.next_frame)
    }

    fn cancel_frame(&mut self, frame: u32) {
        self.cancelled.push(frame);
    }
}

pub fn desktop() -> Viewport {
    Viewport::new(800.0, 600.0)
}
