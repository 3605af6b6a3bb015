use glam::Vec3;

use crate::core::rng::Rng;

/// Fixed population of stars streaming toward the camera.
/// Stars are recycled, never created or destroyed after construction.
#[derive(Debug, Clone)]
pub struct StarField {
    pub stars: Vec<Vec3>,
}

impl StarField {
    /// Side length of the cube stars are scattered in, centred on the origin.
    pub const SPREAD: f32 = 100.0;
    /// Travel along +z per reference frame.
    pub const SPEED: f32 = 0.5;
    /// Stars past this z have flown by the camera.
    pub const WRAP_AT: f32 = 20.0;
    /// Where passed stars re-enter.
    pub const RESPAWN_Z: f32 = -100.0;
    pub const POINT_SIZE: f32 = 0.1;
    pub const COLOR: u32 = 0xffffff;

    pub fn new(count: usize, rng: &mut Rng) -> Self {
        let half = Self::SPREAD / 2.0;
        let stars = (0..count)
            .map(|_| Vec3::new(rng.range(-half, half), rng.range(-half, half), rng.range(-half, half)))
            .collect();
        Self { stars }
    }

    pub fn tick(&mut self, frames: f32) {
        for star in &mut self.stars {
            star.z += Self::SPEED * frames;
            if star.z > Self::WRAP_AT {
                star.z = Self::RESPAWN_Z;
            }
        }
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }
}
