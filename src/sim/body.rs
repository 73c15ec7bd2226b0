//! Simulated circular bodies
//!
//! Player and obstacles share one plain value type differentiated by
//! [`BodyKind`]; the player is immovable and never enters elastic
//! resolution, obstacles live until they fall out the bottom.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// What a body is; behavior differences live in [`super::world::World`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodyKind {
    Player,
    Obstacle,
}

/// A moving circular physical entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    /// Unique and stable for the body's lifetime
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Derived from diameter: `d^3 / 1000`
    pub mass: f32,
    pub kind: BodyKind,
    /// 24-bit RGB fill tint
    pub tint: u32,
    pub active: bool,
}

/// Mass scales with the cube of the sprite diameter.
#[inline]
pub fn mass_for_diameter(diameter: f32) -> f32 {
    diameter.powi(3) / 1000.0
}

impl Body {
    pub fn new_player(id: u32, pos: Vec2, radius: f32) -> Self {
        Self {
            id,
            pos,
            vel: Vec2::ZERO,
            radius,
            mass: mass_for_diameter(radius * 2.0),
            kind: BodyKind::Player,
            tint: 0xFFFFFF,
            active: true,
        }
    }

    pub fn new_obstacle(id: u32, pos: Vec2, vel: Vec2, diameter: f32, tint: u32) -> Self {
        Self {
            id,
            pos,
            vel,
            radius: diameter / 2.0,
            mass: mass_for_diameter(diameter),
            kind: BodyKind::Obstacle,
            tint,
            active: true,
        }
    }

    /// Integrate position by one timestep.
    #[inline]
    pub fn apply_velocity(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }

    #[inline]
    pub fn set_velocity(&mut self, vx: f32, vy: f32) {
        self.vel = Vec2::new(vx, vy);
    }

    /// Circle-circle overlap test.
    #[inline]
    pub fn overlaps(&self, other: &Body) -> bool {
        let reach = self.radius + other.radius;
        self.pos.distance_squared(other.pos) < reach * reach
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_masses_are_exact() {
        // diameter^3 / 1000 for the four size tiers
        assert_eq!(mass_for_diameter(60.0), 216.0);
        assert_eq!(mass_for_diameter(90.0), 729.0);
        assert_eq!(mass_for_diameter(120.0), 1728.0);
        assert_eq!(mass_for_diameter(150.0), 3375.0);
    }

    #[test]
    fn test_obstacle_mass_uses_diameter_not_radius() {
        let body = Body::new_obstacle(1, Vec2::ZERO, Vec2::ZERO, 60.0, 0);
        assert_eq!(body.radius, 30.0);
        assert_eq!(body.mass, 216.0);
    }

    #[test]
    fn test_apply_velocity_integrates_position() {
        let mut body = Body::new_obstacle(1, Vec2::new(10.0, 20.0), Vec2::new(100.0, -50.0), 60.0, 0);
        body.apply_velocity(0.5);
        assert_eq!(body.pos, Vec2::new(60.0, -5.0));
    }

    #[test]
    fn test_set_velocity() {
        let mut body = Body::new_player(0, Vec2::ZERO, 30.0);
        body.set_velocity(500.0, 0.0);
        assert_eq!(body.vel, Vec2::new(500.0, 0.0));
    }

    #[test]
    fn test_overlap_is_strict() {
        let a = Body::new_obstacle(1, Vec2::ZERO, Vec2::ZERO, 60.0, 0);
        let touching = Body::new_obstacle(2, Vec2::new(60.0, 0.0), Vec2::ZERO, 60.0, 0);
        let overlapping = Body::new_obstacle(3, Vec2::new(59.0, 0.0), Vec2::ZERO, 60.0, 0);
        assert!(!a.overlaps(&touching));
        assert!(a.overlaps(&overlapping));
    }
}
