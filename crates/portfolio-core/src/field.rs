use crate::color::Rgba;
use crate::constants::*;
use crate::particle::Particle;
use glam::Vec2;
use rand::prelude::*;

/// Drawable area in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// Population tuning. `Default` matches the live site.
#[derive(Clone, Debug)]
pub struct FieldConfig {
    pub desktop_density: f32,
    pub mobile_density: f32,
    pub mobile_max_width: f32,
    pub palette: Vec<Rgba>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            desktop_density: DESKTOP_DENSITY,
            mobile_density: MOBILE_DENSITY,
            mobile_max_width: MOBILE_MAX_WIDTH,
            palette: WATER_COLORS.iter().copied().map(Rgba::from_tuple).collect(),
        }
    }
}

impl FieldConfig {
    /// Area per particle for this viewport; sparser at or under the mobile width.
    pub fn density_for(&self, viewport: Viewport) -> f32 {
        if viewport.width <= self.mobile_max_width {
            self.mobile_density
        } else {
            self.desktop_density
        }
    }
}

/// `floor(area / density)`, or zero for an empty viewport.
pub fn particle_count(viewport: Viewport, density: f32) -> usize {
    if viewport.is_degenerate() || density <= 0.0 {
        return 0;
    }
    (viewport.area() / density).floor() as usize
}

/// The particle population for one viewport size.
#[derive(Clone, Debug, Default)]
pub struct ParticleField {
    pub particles: Vec<Particle>,
    pub viewport: Viewport,
}

impl ParticleField {
    /// Seed a fresh population using the density class of `viewport`.
    pub fn populate<R: Rng + ?Sized>(viewport: Viewport, config: &FieldConfig, rng: &mut R) -> Self {
        Self::with_density(viewport, config.density_for(viewport), &config.palette, rng)
    }

    pub fn with_density<R: Rng + ?Sized>(
        viewport: Viewport,
        density: f32,
        palette: &[Rgba],
        rng: &mut R,
    ) -> Self {
        let count = if palette.is_empty() {
            0
        } else {
            particle_count(viewport, density)
        };
        let particles = (0..count)
            .map(|_| {
                let pos = Vec2::new(
                    rng.gen::<f32>() * viewport.width,
                    rng.gen::<f32>() * viewport.height,
                );
                let color = palette[rng.gen_range(0..palette.len())];
                let mass = rng.gen_range(MASS_RANGE.0..MASS_RANGE.1);
                let radius = rng.gen_range(RADIUS_RANGE.0..RADIUS_RANGE.1);
                Particle::new(pos, color, mass, radius)
            })
            .collect::<Vec<_>>();
        log::debug!(
            "[field] seeded {} particles for {}x{} (density {})",
            particles.len(),
            viewport.width,
            viewport.height,
            density
        );
        Self {
            particles,
            viewport,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
