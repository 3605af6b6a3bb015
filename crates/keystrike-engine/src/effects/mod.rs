//! Visual effects coordinator: star field, enemy, laser volleys and explosions.
//!
//! Every entity here is owned by `EffectsState` and destroyed by removal from
//! its collection once its life runs out. The host only ever sees the packed
//! vertex buffer and the enemy snapshot.

mod burst;
mod enemy;
mod laser;
mod starfield;

use bytemuck::{Pod, Zeroable};

pub use burst::ParticleBurst;
pub use enemy::{Enemy, EnemyArchetype, EnemySnapshot};
pub use laser::{laser_count, laser_radius, level_color, Laser, LEVEL_COLORS};
pub use starfield::StarField;

use crate::api::game::GameConfig;
use crate::core::rng::Rng;
use crate::words::Difficulty;

/// One point in the effects buffer: position, opacity, packed 0xRRGGBB
/// color and point size (beam radius for lasers).
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct EffectVertex {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub alpha: f32,
    pub color: f32,
    pub size: f32,
}

impl EffectVertex {
    pub const FLOATS: usize = 6;

    fn new(pos: glam::Vec3, alpha: f32, color: u32, size: f32) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            z: pos.z,
            alpha,
            // 24-bit colors are exact in an f32 mantissa.
            color: color as f32,
            size,
        }
    }
}

/// Container for all visual effects.
pub struct EffectsState {
    pub stars: StarField,
    pub lasers: Vec<Laser>,
    pub bursts: Vec<ParticleBurst>,
    pub enemy: Option<Enemy>,
    pub effects_buffer: Vec<f32>,
    pub rng: Rng,
    /// Length of the reference frame the decay constants are tuned for.
    frame_dt: f32,
    burst_particles: usize,
    max_vertices: usize,
}

impl EffectsState {
    pub fn new(seed: u64) -> Self {
        Self::from_config(&GameConfig {
            seed,
            ..GameConfig::default()
        })
    }

    pub fn from_config(config: &GameConfig) -> Self {
        let mut rng = Rng::new(config.seed.wrapping_add(7919));
        let stars = StarField::new(config.star_count, &mut rng);
        EffectsState {
            stars,
            lasers: Vec::new(),
            bursts: Vec::new(),
            enemy: None,
            effects_buffer: Vec::with_capacity(config.max_effects_vertices * EffectVertex::FLOATS),
            rng,
            frame_dt: config.fixed_dt,
            burst_particles: config.burst_particles,
            max_vertices: config.max_effects_vertices,
        }
    }

    /// Replace the current enemy with a fresh, visible one.
    pub fn select_enemy(&mut self, difficulty: Difficulty) {
        self.enemy = Some(Enemy::new(difficulty));
    }

    /// Show or hide the enemy without destroying it.
    pub fn set_enemy_visible(&mut self, visible: bool) {
        if let Some(enemy) = &mut self.enemy {
            enemy.visible = visible;
        }
    }

    pub fn enemy_visible(&self) -> bool {
        self.enemy.as_ref().is_some_and(|e| e.visible)
    }

    /// Destroy the enemy: explode it, hide it, and fire a laser volley.
    pub fn trigger_completion(&mut self, level: u8) {
        let color = level_color(level);
        let origin = self.enemy.as_ref().map_or(Enemy::HOME, |e| e.position);
        self.bursts.push(ParticleBurst::new(origin, self.burst_particles, color, &mut self.rng));
        self.set_enemy_visible(false);

        let count = laser_count(level);
        for i in 0..count {
            self.lasers.push(Laser::volley_member(i, count, level));
        }
        log::debug!("volley: level {level}, {count} beam(s)");
    }

    /// Advance all effects by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        let frames = dt / self.frame_dt;
        self.stars.tick(frames);
        if let Some(enemy) = &mut self.enemy {
            enemy.tick(frames);
        }
        self.lasers.retain_mut(|l| l.tick(frames));
        self.bursts.retain_mut(|b| b.tick(frames));
    }

    /// Rebuild the packed vertex buffer: stars, then lasers, then particles.
    /// Anything past the vertex capacity is dropped for this frame.
    pub fn rebuild_effects_buffer(&mut self) {
        let stars = self
            .stars
            .stars
            .iter()
            .map(|s| EffectVertex::new(*s, 1.0, StarField::COLOR, StarField::POINT_SIZE));
        let lasers = self
            .lasers
            .iter()
            .map(|l| EffectVertex::new(l.position, 1.0, l.color, l.radius));
        let particles = self.bursts.iter().flat_map(|b| {
            b.positions
                .iter()
                .map(move |p| EffectVertex::new(*p, b.opacity, b.color, ParticleBurst::POINT_SIZE))
        });

        let vertices: Vec<EffectVertex> = stars.chain(lasers).chain(particles).take(self.max_vertices).collect();
        self.effects_buffer.clear();
        self.effects_buffer.extend_from_slice(bytemuck::cast_slice(&vertices[..]));
    }

    /// Remove transient effects and the enemy. The star field stays.
    pub fn clear(&mut self) {
        self.lasers.clear();
        self.bursts.clear();
        self.enemy = None;
        self.effects_buffer.clear();
    }

    pub fn enemy_snapshot(&self) -> Option<EnemySnapshot> {
        self.enemy.as_ref().map(Enemy::snapshot)
    }

    pub fn effects_vertex_count(&self) -> usize {
        self.effects_buffer.len() / EffectVertex::FLOATS
    }

    pub fn effects_buffer_ptr(&self) -> *const f32 {
        self.effects_buffer.as_ptr()
    }
}
