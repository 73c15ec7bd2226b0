//! The arena: bodies, bounds, and per-tick physics
//!
//! Owns the player and all live obstacles. The horizontal bounds extend a
//! third of the visible width past each screen edge so obstacles can drift
//! partially off-screen without popping in or out at the borders. Obstacles
//! reflect off the left/right/top edges; the bottom is an open exit.

use glam::Vec2;

use super::body::Body;
use super::collision::resolve_elastic;
use super::event::GameEvent;
use super::rng::Sampler;
use crate::consts::{PLAYER_Y_FRACTION, TINT_DARKEN};
use crate::darken_color;
use crate::tuning::Tuning;

/// Simulation arena with a virtual horizontal bound wider than the screen.
#[derive(Debug, Clone)]
pub struct World {
    /// Visible playfield size
    pub width: f32,
    pub height: f32,
    /// Virtual horizontal bounds: [-W/3, W + W/3]
    pub virtual_left: f32,
    pub virtual_right: f32,
    pub player: Body,
    /// Live obstacles in spawn order; pairwise resolution walks this in
    /// fixed index order so results are reproducible
    pub obstacles: Vec<Body>,
    next_id: u32,
}

impl World {
    pub fn new(width: f32, height: f32, tuning: &Tuning) -> Self {
        let player_pos = Vec2::new(width / 2.0, height * PLAYER_Y_FRACTION);
        Self {
            width,
            height,
            virtual_left: -width / 3.0,
            virtual_right: width + width / 3.0,
            player: Body::new_player(0, player_pos, tuning.player_radius),
            obstacles: Vec::new(),
            next_id: 1,
        }
    }

    /// Adapt to a new visible size: recompute the virtual bounds and
    /// re-center the player.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.virtual_left = -width / 3.0;
        self.virtual_right = width + width / 3.0;
        self.player.pos = Vec2::new(width / 2.0, height * PLAYER_Y_FRACTION);
    }

    pub fn set_player_velocity_x(&mut self, vx: f32) {
        self.player.vel.x = vx;
    }

    /// Create a new obstacle above the top edge, randomly placed along the
    /// virtual width with a random horizontal drift.
    pub fn spawn_obstacle(
        &mut self,
        tier: usize,
        color_index: usize,
        tuning: &Tuning,
        sampler: &mut Sampler,
    ) -> &Body {
        let size = tuning.tiers[tier].size;
        let radius = size / 2.0;
        let color = tuning.colors[color_index];

        let x = sampler.uniform(self.virtual_left + radius, self.virtual_right - radius);
        let drift = tuning.drift_vx.round() as i32;
        let vx = sampler.uniform_int(-drift, drift) as f32;

        let id = self.next_id;
        self.next_id += 1;

        let body = Body::new_obstacle(
            id,
            Vec2::new(x, -size),
            Vec2::new(vx, color.fall_speed),
            size,
            darken_color(color.color, TINT_DARKEN),
        );
        log::debug!(
            "spawned obstacle {id} tier {tier} color {color_index} at ({x:.1}, {:.1})",
            -size
        );
        let index = self.obstacles.len();
        self.obstacles.push(body);
        &self.obstacles[index]
    }

    /// Advance the arena by one timestep, appending events in order.
    /// Returns true if an obstacle touched the player this tick.
    pub fn advance(&mut self, dt: f32, events: &mut Vec<GameEvent>) -> bool {
        self.integrate(dt);
        self.resolve_obstacle_pairs(events);
        let hit = self.detect_player_contact(events);
        self.remove_exited(events);
        hit
    }

    fn integrate(&mut self, dt: f32) {
        self.player.apply_velocity(dt);
        // collide-world-bounds: the player is clamped, never reflected
        let min_x = self.virtual_left + self.player.radius;
        let max_x = self.virtual_right - self.player.radius;
        self.player.pos.x = self.player.pos.x.clamp(min_x, max_x);

        for body in &mut self.obstacles {
            body.apply_velocity(dt);

            if body.pos.x - body.radius < self.virtual_left {
                body.pos.x = self.virtual_left + body.radius;
                body.vel.x = body.vel.x.abs();
            } else if body.pos.x + body.radius > self.virtual_right {
                body.pos.x = self.virtual_right - body.radius;
                body.vel.x = -body.vel.x.abs();
            }
            // Top edge reflects upward motion only: fresh spawns sit above
            // it while falling in, and must not be snapped inside.
            if body.vel.y < 0.0 && body.pos.y - body.radius < 0.0 {
                body.pos.y = body.radius;
                body.vel.y = body.vel.y.abs();
            }
        }
    }

    /// O(n²) pairwise resolution in ascending (i, j) order. Fine for the
    /// bounded obstacle counts this game produces; a broadphase would be
    /// needed before scaling past that.
    fn resolve_obstacle_pairs(&mut self, events: &mut Vec<GameEvent>) {
        for i in 0..self.obstacles.len() {
            let (head, tail) = self.obstacles.split_at_mut(i + 1);
            let a = &mut head[i];
            for b in tail.iter_mut() {
                if !a.overlaps(b) {
                    continue;
                }
                if let Some(impact) = resolve_elastic(a, b) {
                    events.push(GameEvent::MeteorCollision {
                        id_a: a.id,
                        id_b: b.id,
                        x: impact.point.x,
                        y: impact.point.y,
                        color_a: a.tint,
                        color_b: b.tint,
                        impact_speed: impact.speed,
                    });
                }
            }
        }
    }

    /// First obstacle contact ends the run; later overlaps in the same tick
    /// are irrelevant.
    fn detect_player_contact(&self, events: &mut Vec<GameEvent>) -> bool {
        for body in &self.obstacles {
            if self.player.overlaps(body) {
                events.push(GameEvent::PlayerHit {
                    x: self.player.pos.x,
                    y: self.player.pos.y,
                });
                return true;
            }
        }
        false
    }

    /// Drop obstacles fully past the bottom edge. The boundary is exclusive
    /// on the still-active side: a body at exactly `height + radius` stays.
    fn remove_exited(&mut self, events: &mut Vec<GameEvent>) {
        let height = self.height;
        for body in &mut self.obstacles {
            if body.pos.y > height + body.radius {
                body.active = false;
                events.push(GameEvent::ObstacleExited { id: body.id });
            }
        }
        self.obstacles.retain(|b| b.active);
    }

    /// Read-only snapshot for rendering: player first, then obstacles.
    pub fn bodies(&self) -> Vec<Body> {
        let mut snapshot = Vec::with_capacity(1 + self.obstacles.len());
        snapshot.push(self.player.clone());
        snapshot.extend(self.obstacles.iter().cloned());
        snapshot
    }
}
