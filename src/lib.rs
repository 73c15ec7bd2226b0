//! Meteor Dodge - a falling-meteorite dodge arcade game
//!
//! This crate is the embeddable simulation core only. Rendering, input
//! devices, audio, and storage live in the host application and talk to the
//! core through commands ([`sim::GameSession`]) and the per-tick event
//! stream ([`sim::GameEvent`]).
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bodies, collisions, spawning, session)
//! - `tuning`: Data-driven game balance with fail-fast validation
//! - `highscores`: Leaderboard bookkeeping (storage is the host's problem)

pub mod highscores;
pub mod sim;
pub mod tuning;

pub use highscores::HighScores;
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Base playfield dimensions (portrait)
    pub const BASE_WIDTH: f32 = 1080.0;
    pub const BASE_HEIGHT: f32 = 1920.0;

    /// Player defaults - a 60 unit sprite moved only along the x axis
    pub const PLAYER_RADIUS: f32 = 30.0;
    pub const PLAYER_SPEED: f32 = 500.0;
    /// Player rests at 70% of the playfield height
    pub const PLAYER_Y_FRACTION: f32 = 0.7;

    /// Obstacle spawn cadence
    pub const SPAWN_INTERVAL_MS: f32 = 2300.0;
    pub const LEVEL_INTERVAL_MS: f32 = 21000.0;
    pub const MIN_SPAWN_INTERVAL_MS: f32 = 500.0;
    pub const SPAWN_INTERVAL_DECAY: f32 = 0.9;

    /// Horizontal drift picked uniformly in [-DRIFT, DRIFT] at spawn
    pub const OBSTACLE_DRIFT_VX: f32 = 120.0;

    /// Obstacle fill tint is the base color darkened by this amount
    pub const TINT_DARKEN: f32 = 0.5;
}

/// Darken a 24-bit RGB color by scaling each channel toward black.
///
/// Channels are floored after scaling, so `darken_color(0xFFFFFF, 0.5)`
/// yields `0x7F7F7F`.
#[inline]
pub fn darken_color(color: u32, amount: f32) -> u32 {
    let scale = 1.0 - amount;
    let r = ((color >> 16 & 0xFF) as f32 * scale).floor() as u32;
    let g = ((color >> 8 & 0xFF) as f32 * scale).floor() as u32;
    let b = ((color & 0xFF) as f32 * scale).floor() as u32;
    (r << 16) | (g << 8) | b
}
