//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Advanced only by the host's tick, one logical thread of control
//! - Seeded RNG only
//! - Stable iteration order (obstacles in spawn order, pairs by index)
//! - No rendering, audio, or platform dependencies

pub mod body;
pub mod collision;
pub mod event;
pub mod rng;
pub mod session;
pub mod spawn;
pub mod world;

pub use body::{Body, BodyKind, mass_for_diameter};
pub use collision::{Impact, resolve_elastic};
pub use event::GameEvent;
pub use rng::{Sampler, weighted_index};
pub use session::{GameSession, Phase, SessionState};
pub use spawn::{SpawnFire, SpawnScheduler};
pub use world::World;
