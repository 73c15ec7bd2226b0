//! Events emitted by the simulation each tick
//!
//! The host consumes these for scoring display, particles, sound, and scene
//! transitions. The core itself only reacts to `ObstacleExited` (score) and
//! `PlayerHit` (end of run).

use serde::{Deserialize, Serialize};

/// One entry in the ordered per-tick event sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A fresh obstacle entered the arena above the visible top edge.
    ObstacleSpawned {
        id: u32,
        /// Index into the size tier table
        tier: usize,
        /// Index into the color/speed table
        color_index: usize,
        x: f32,
        y: f32,
    },
    /// An obstacle fell out the open bottom; worth one point.
    ObstacleExited { id: u32 },
    /// Two obstacles exchanged impulses.
    MeteorCollision {
        id_a: u32,
        id_b: u32,
        x: f32,
        y: f32,
        color_a: u32,
        color_b: u32,
        impact_speed: f32,
    },
    /// Terminal: an obstacle touched the player.
    PlayerHit { x: f32, y: f32 },
    /// Difficulty stepped up; the spawn interval shrank.
    LevelUp {
        new_level: u32,
        new_spawn_interval_ms: f32,
    },
}
