use crate::color::{Rgba, Theme};
use crate::constants::WAVE_SAMPLE_STEP;
use crate::field::Viewport;
use glam::Vec2;

/// A translucent sine band anchored at a fraction of the viewport height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveBand {
    pub anchor: f32,
    pub frequency: f32,
    pub phase_speed: f32,
    pub amplitude: f32,
}

pub const BAND_UPPER: WaveBand = WaveBand {
    anchor: 0.3,
    frequency: 0.01,
    phase_speed: 1.0,
    amplitude: 20.0,
};

pub const BAND_LOWER: WaveBand = WaveBand {
    anchor: 0.6,
    frequency: 0.02,
    phase_speed: 0.7,
    amplitude: 15.0,
};

impl WaveBand {
    #[inline]
    pub fn height_at(&self, x: f32, viewport: Viewport, time_sec: f64) -> f32 {
        let phase = x as f64 * self.frequency as f64 + time_sec * self.phase_speed as f64;
        viewport.height * self.anchor + phase.sin() as f32 * self.amplitude
    }

    /// Polyline along the wave, closed down through the bottom corners.
    pub fn outline(&self, viewport: Viewport, time_sec: f64) -> Vec<Vec2> {
        let mut pts = Vec::with_capacity((viewport.width / WAVE_SAMPLE_STEP) as usize + 3);
        let mut x = 0.0_f32;
        while x < viewport.width {
            pts.push(Vec2::new(x, self.height_at(x, viewport, time_sec)));
            x += WAVE_SAMPLE_STEP;
        }
        pts.push(Vec2::new(viewport.width, viewport.height));
        pts.push(Vec2::new(0.0, viewport.height));
        pts
    }

    /// Gradient span: from the anchor line to the bottom edge.
    #[inline]
    pub fn gradient_span(&self, viewport: Viewport) -> (f32, f32) {
        (viewport.height * self.anchor, viewport.height)
    }
}

/// Both bands with their theme-derived gradient stops.
pub fn bands(theme: &Theme) -> [(WaveBand, Rgba, Rgba); 2] {
    [
        (
            BAND_UPPER,
            theme.primary.with_alpha(0.05),
            theme.secondary.with_alpha(0.02),
        ),
        (
            BAND_LOWER,
            theme.secondary.with_alpha(0.03),
            theme.primary.with_alpha(0.02),
        ),
    ]
}
