use glam::{Vec2, Vec3};
use serde::Serialize;

use crate::words::Difficulty;

/// Visual archetype per difficulty. How each one is meshed is up to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum EnemyArchetype {
    /// Wireframe tetrahedron.
    Tetrahedron,
    /// Solid icosahedron inside a translucent wire shell.
    ShelledIcosahedron,
    TorusKnot,
}

impl From<Difficulty> for EnemyArchetype {
    fn from(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => EnemyArchetype::Tetrahedron,
            Difficulty::Hard => EnemyArchetype::ShelledIcosahedron,
            Difficulty::Boss => EnemyArchetype::TorusKnot,
        }
    }
}

/// The enemy guarding the current word.
#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub difficulty: Difficulty,
    pub archetype: EnemyArchetype,
    pub position: Vec3,
    /// Euler rotation about x and y, radians.
    pub rotation: Vec2,
    pub visible: bool,
}

impl Enemy {
    pub const HOME: Vec3 = Vec3::new(0.0, 2.0, 0.0);
    /// Spin per reference frame while visible.
    pub const SPIN: Vec2 = Vec2::new(0.01, 0.02);

    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            archetype: difficulty.into(),
            position: Self::HOME,
            rotation: Vec2::ZERO,
            visible: true,
        }
    }

    pub fn tick(&mut self, frames: f32) {
        if self.visible {
            self.rotation += Self::SPIN * frames;
        }
    }

    pub fn snapshot(&self) -> EnemySnapshot {
        EnemySnapshot {
            archetype: self.archetype,
            position: self.position.to_array(),
            rotation: self.rotation.to_array(),
            visible: self.visible,
        }
    }
}

/// Read-only view of the enemy for the host renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnemySnapshot {
    pub archetype: EnemyArchetype,
    pub position: [f32; 3],
    pub rotation: [f32; 2],
    pub visible: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_difficulty_has_its_own_archetype() {
        assert_eq!(Enemy::new(Difficulty::Easy).archetype, EnemyArchetype::Tetrahedron);
        assert_eq!(Enemy::new(Difficulty::Hard).archetype, EnemyArchetype::ShelledIcosahedron);
        assert_eq!(Enemy::new(Difficulty::Boss).archetype, EnemyArchetype::TorusKnot);
    }

    #[test]
    fn hidden_enemy_does_not_spin() {
        let mut enemy = Enemy::new(Difficulty::Boss);
        enemy.tick(1.0);
        assert_eq!(enemy.rotation, Vec2::new(0.01, 0.02));
        enemy.visible = false;
        enemy.tick(1.0);
        assert_eq!(enemy.rotation, Vec2::new(0.01, 0.02));
    }

    #[test]
    fn snapshot_serializes_camel_case() {
        let json = serde_json::to_string(&Enemy::new(Difficulty::Hard).snapshot()).unwrap();
        assert!(json.contains(r#""archetype":"shelledIcosahedron""#), "{json}");
        assert!(json.contains(r#""position":[0.0,2.0,0.0]"#), "{json}");
    }
}
