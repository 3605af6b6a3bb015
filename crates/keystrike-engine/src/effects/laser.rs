//! Laser beams fired on word completion.

use glam::Vec3;

/// Beam colors per level: cyan, amber, magenta.
pub const LEVEL_COLORS: [u32; 3] = [0x00f3ff, 0xffbb00, 0xff00ff];

/// Clamp an arbitrary level into 1..=3.
pub fn clamp_level(level: u8) -> u8 {
    level.clamp(1, 3)
}

/// Beams fired for a level: 1, 2 or 5.
pub fn laser_count(level: u8) -> usize {
    match clamp_level(level) {
        1 => 1,
        2 => 2,
        _ => 5,
    }
}

pub fn level_color(level: u8) -> u32 {
    LEVEL_COLORS[clamp_level(level) as usize - 1]
}

/// Level 3 beams are thicker.
pub fn laser_radius(level: u8) -> f32 {
    if clamp_level(level) == 3 {
        0.5
    } else {
        0.2
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Laser {
    pub position: Vec3,
    pub remaining_life: f32,
    pub radius: f32,
    pub color: u32,
}

impl Laser {
    /// Life lost per reference frame.
    pub const DECAY: f32 = 0.1;
    /// Upward travel per reference frame.
    pub const SPEED: f32 = 2.0;
    /// Beams start below the screen.
    pub const START_Y: f32 = -25.0;
    /// Horizontal gap between beams of one volley.
    pub const SPACING: f32 = 2.0;

    /// Beam `index` of a volley of `count`, centred on x = 0.
    pub fn volley_member(index: usize, count: usize, level: u8) -> Self {
        let offset = index as f32 - (count as f32 - 1.0) / 2.0;
        Self {
            position: Vec3::new(offset * Self::SPACING, Self::START_Y, 0.0),
            remaining_life: 1.0,
            radius: laser_radius(level),
            color: level_color(level),
        }
    }

    /// Advance by `frames` reference frames. Returns false when expired.
    pub fn tick(&mut self, frames: f32) -> bool {
        self.remaining_life -= Self::DECAY * frames;
        self.position.y += Self::SPEED * frames;
        self.remaining_life > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volley_sizes() {
        assert_eq!(laser_count(1), 1);
        assert_eq!(laser_count(2), 2);
        assert_eq!(laser_count(3), 5);
        assert_eq!(laser_count(0), 1);
        assert_eq!(laser_count(9), 5);
    }

    #[test]
    fn volley_is_centred() {
        let xs: Vec<f32> = (0..5).map(|i| Laser::volley_member(i, 5, 3).position.x).collect();
        assert_eq!(xs, vec![-4.0, -2.0, 0.0, 2.0, 4.0]);
        assert_eq!(Laser::volley_member(0, 1, 1).position, Vec3::new(0.0, -25.0, 0.0));
    }

    #[test]
    fn laser_expires_on_tenth_frame() {
        let mut laser = Laser::volley_member(0, 1, 1);
        for _ in 0..9 {
            assert!(laser.tick(1.0));
        }
        assert!(!laser.tick(1.0));
        assert_eq!(laser.position.y, -25.0 + 20.0);
    }

    #[test]
    fn level_three_is_thick_and_magenta() {
        let laser = Laser::volley_member(0, 5, 3);
        assert_eq!(laser.radius, 0.5);
        assert_eq!(laser.color, 0xff00ff);
        assert_eq!(Laser::volley_member(0, 2, 2).radius, 0.2);
    }
}
