//! Particle explosions spawned where an enemy is destroyed.

use glam::Vec3;

use crate::core::rng::Rng;

/// A cloud of sub-particles sharing one lifetime and color.
#[derive(Debug, Clone)]
pub struct ParticleBurst {
    pub origin: Vec3,
    pub positions: Vec<Vec3>,
    /// Fixed per-particle velocity, per reference frame.
    pub velocities: Vec<Vec3>,
    pub remaining_life: f32,
    pub opacity: f32,
    pub color: u32,
}

impl ParticleBurst {
    /// Life lost per reference frame.
    pub const DECAY: f32 = 0.03;
    /// Rendered point size.
    pub const POINT_SIZE: f32 = 0.5;

    /// `count` particles at `origin`, each velocity component in [-0.5, 0.5).
    pub fn new(origin: Vec3, count: usize, color: u32, rng: &mut Rng) -> Self {
        let velocities = (0..count)
            .map(|_| Vec3::new(rng.range(-0.5, 0.5), rng.range(-0.5, 0.5), rng.range(-0.5, 0.5)))
            .collect();
        Self {
            origin,
            positions: vec![origin; count],
            velocities,
            remaining_life: 1.0,
            opacity: 1.0,
            color,
        }
    }

    /// Advance by `frames` reference frames. Returns false when expired.
    pub fn tick(&mut self, frames: f32) -> bool {
        self.remaining_life -= Self::DECAY * frames;
        for (pos, vel) in self.positions.iter_mut().zip(&self.velocities) {
            *pos += *vel * frames;
        }
        self.opacity = self.remaining_life.max(0.0);
        self.remaining_life > 0.0
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
