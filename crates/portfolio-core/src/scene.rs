use crate::color::{Rgba, Theme};
use crate::constants::*;
use crate::field::{FieldConfig, ParticleField, Viewport};
use crate::input::{InputEvent, PointerState};
use crate::surface::{CompositeMode, DrawSurface};
use crate::waves;
use glam::Vec2;
use rand::prelude::*;
use smallvec::SmallVec;

/// A point that pushes particles this frame, with its force.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Disturbance {
    pub source: Vec2,
    pub force: f32,
}

pub type Disturbances = SmallVec<[Disturbance; 8]>;

/// What one frame did; handy for logging and tests.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameStats {
    pub reseeded: bool,
    pub dragged: bool,
    pub disturbances: usize,
    pub particles_drawn: usize,
}

/// Drag impulses for a pointer that moved from `prev` to `current`.
///
/// Movement at or under [`DRAG_THRESHOLD`] yields nothing. Otherwise the
/// endpoint gets the full force `min(15, distance / 10)` and
/// [`DRAG_PATH_SAMPLES`] evenly spaced points from `prev` toward `current`
/// get half of it, so a fast swipe still touches particles it crossed.
pub fn drag_disturbances(prev: Vec2, current: Vec2) -> Disturbances {
    let mut out = Disturbances::new();
    let distance = prev.distance(current);
    if distance <= DRAG_THRESHOLD {
        return out;
    }
    let force = (distance / DRAG_FORCE_DIVISOR).min(DRAG_FORCE_MAX);
    out.push(Disturbance {
        source: current,
        force,
    });
    for i in 0..DRAG_PATH_SAMPLES {
        let t = i as f32 / DRAG_PATH_SAMPLES as f32;
        out.push(Disturbance {
            source: prev.lerp(current, t),
            force: force * DRAG_PATH_FORCE_SCALE,
        });
    }
    out
}

/// All per-frame state of one mounted background.
pub struct FluidScene {
    pub field: ParticleField,
    pub pointer: PointerState,
    pub theme: Theme,
    config: FieldConfig,
    rng: StdRng,
}

impl FluidScene {
    pub fn new(viewport: Viewport, theme: Theme, config: FieldConfig, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let field = ParticleField::populate(viewport, &config, &mut rng);
        Self {
            field,
            pointer: PointerState::default(),
            theme,
            config,
            rng,
        }
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.field.viewport
    }

    #[inline]
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Throw away the population and seed a new one for `viewport`.
    pub fn reseed(&mut self, viewport: Viewport) {
        self.field = ParticleField::populate(viewport, &self.config, &mut self.rng);
    }

    /// Sources that act on every particle this frame: drag path first, then
    /// each active touch at [`TOUCH_FORCE`].
    pub fn frame_disturbances(&self) -> Disturbances {
        let mut out = drag_disturbances(self.pointer.previous, self.pointer.current);
        out.extend(
            self.pointer
                .touch_positions()
                .into_iter()
                .map(|source| Disturbance {
                    source,
                    force: TOUCH_FORCE,
                }),
        );
        out
    }

    /// Advance and draw one frame.
    ///
    /// `inputs` are applied first (a resize reseeds before anything is
    /// drawn), then background, disturbances, particle motion, the pointer
    /// commit and finally the wave overlay.
    pub fn tick<S, I>(&mut self, inputs: I, time_sec: f64, surface: &mut S) -> FrameStats
    where
        S: DrawSurface + ?Sized,
        I: IntoIterator<Item = InputEvent>,
    {
        let mut stats = FrameStats::default();
        let mut resize = None;
        for ev in inputs {
            if let InputEvent::Resize(vp) = ev {
                resize = Some(vp);
            } else {
                self.pointer.apply(&ev);
            }
        }
        if let Some(vp) = resize {
            surface.resize(vp.width.max(0.0) as u32, vp.height.max(0.0) as u32);
            self.reseed(vp);
            stats.reseeded = true;
        }

        let vp = self.viewport();
        self.draw_backdrop(vp, surface);

        let sources = self.frame_disturbances();
        stats.dragged = self.pointer.movement() > DRAG_THRESHOLD;
        stats.disturbances = sources.len();

        surface.set_composite(CompositeMode::Lighter);
        for p in &mut self.field.particles {
            for d in &sources {
                p.disturb(d.source, d.force);
            }
            p.advance();
            surface.fill_circle(p.pos, p.draw_radius(), p.draw_color());
        }
        stats.particles_drawn = self.field.len();

        self.pointer.commit();

        surface.set_composite(CompositeMode::Overlay);
        for (band, top, bottom) in waves::bands(&self.theme) {
            let outline = band.outline(vp, time_sec);
            surface.fill_band(&outline, band.gradient_span(vp), top, bottom);
        }
        surface.set_composite(CompositeMode::SourceOver);
        stats
    }

    fn draw_backdrop<S: DrawSurface + ?Sized>(&self, vp: Viewport, surface: &mut S) {
        surface.set_composite(CompositeMode::SourceOver);
        surface.fill_background(&self.theme.background);
        let center = Vec2::new(vp.width / 2.0, vp.height / 2.0);
        let outer_radius = vp.width.max(vp.height) / VIGNETTE_RADIUS_DIVISOR;
        surface.fill_radial_vignette(
            center,
            outer_radius,
            Rgba::from_tuple(VIGNETTE_INNER),
            Rgba::from_tuple(VIGNETTE_OUTER),
        );
    }
}
