use crate::color::Rgba;
use crate::constants::*;
use glam::Vec2;

/// Point mass anchored to a rest position by a spring.
#[derive(Clone, Debug)]
pub struct Particle {
    pub pos: Vec2,
    pub rest: Vec2,
    pub vel: Vec2,
    pub color: Rgba,
    pub mass: f32,
    pub radius: f32,
    pub friction: f32,
    /// Transient excitation; drives brightness and size, decays every frame.
    pub intensity: f32,
}

impl Particle {
    pub fn new(pos: Vec2, color: Rgba, mass: f32, radius: f32) -> Self {
        Self {
            pos,
            rest: pos,
            vel: Vec2::ZERO,
            color,
            mass,
            radius,
            friction: FRICTION,
            intensity: 0.0,
        }
    }

    /// One frame of motion: damping, integration, spring pull, intensity decay.
    #[inline]
    pub fn advance(&mut self) {
        self.vel *= self.friction;
        self.pos += self.vel;
        self.vel += (self.rest - self.pos) * SPRING_CONSTANT;
        self.intensity *= INTENSITY_DECAY;
    }

    /// Push the particle away from `source` with linear falloff over [`DISTURB_RADIUS`].
    ///
    /// Returns the applied power, or `None` when the source is out of reach
    /// and nothing changed.
    #[inline]
    pub fn disturb(&mut self, source: Vec2, force: f32) -> Option<f32> {
        let d = self.pos - source;
        let distance = d.length();
        if distance >= DISTURB_RADIUS {
            return None;
        }
        let power = disturb_power(distance, force);
        self.vel += d * power * IMPULSE_SCALE;
        self.intensity += power * INTENSITY_GAIN;
        Some(power)
    }

    /// Fill alpha: baseline visibility plus excitation, capped.
    #[inline]
    pub fn fill_alpha(&self) -> f32 {
        (ALPHA_BASE + self.intensity).min(ALPHA_MAX)
    }

    #[inline]
    pub fn draw_radius(&self) -> f32 {
        self.radius + self.intensity * RADIUS_INTENSITY_GAIN
    }

    #[inline]
    pub fn draw_color(&self) -> Rgba {
        self.color.with_alpha(self.fill_alpha())
    }
}

/// Disturbance power at `distance` from the source; zero at the radius edge.
#[inline]
pub fn disturb_power(distance: f32, force: f32) -> f32 {
    if distance >= DISTURB_RADIUS {
        return 0.0;
    }
    (1.0 - distance / DISTURB_RADIUS) * force
}
