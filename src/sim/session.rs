//! Session orchestration: world + scheduler + score across ticks
//!
//! The host drives one [`GameSession`] per run through the command surface
//! and consumes the event sequence each tick returns. The session performs
//! no I/O: the starting high score is injected at construction and the
//! updated value is read back through [`SessionState`].

use super::body::Body;
use super::event::GameEvent;
use super::rng::Sampler;
use super::spawn::{SpawnFire, SpawnScheduler};
use super::world::World;
use crate::tuning::{Tuning, TuningError};

/// Session lifecycle. `Ended` is terminal and one-way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Phase {
    /// Constructed, waiting for `start()`
    Ready,
    Running,
    Paused,
    /// The player was hit; no further ticks are processed
    Ended,
}

/// Score/level snapshot exposed to the host.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SessionState {
    pub score: u32,
    pub level: u32,
    pub high_score: u32,
    pub spawn_interval_ms: f32,
    pub paused: bool,
}

/// One run of the game, from `start()` to the terminal player hit.
#[derive(Debug, Clone)]
pub struct GameSession {
    world: World,
    scheduler: SpawnScheduler,
    sampler: Sampler,
    tuning: Tuning,
    cumulative_weights: Vec<f32>,
    phase: Phase,
    score: u32,
    high_score: u32,
    player_vx: f32,
    seed: u64,
}

impl GameSession {
    /// Build a session over a validated tuning table. A malformed table
    /// fails here, before any simulation state exists.
    pub fn new(
        tuning: Tuning,
        width: f32,
        height: f32,
        seed: u64,
        initial_high_score: u32,
    ) -> Result<Self, TuningError> {
        tuning.validate()?;
        let cumulative_weights = tuning.cumulative_weights();
        Ok(Self {
            world: World::new(width, height, &tuning),
            scheduler: SpawnScheduler::new(&tuning),
            sampler: Sampler::new(seed),
            tuning,
            cumulative_weights,
            phase: Phase::Ready,
            score: 0,
            high_score: initial_high_score,
            player_vx: 0.0,
            seed,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn start(&mut self) {
        if self.phase == Phase::Ready {
            self.phase = Phase::Running;
            log::info!("session started (seed {})", self.seed);
        }
    }

    pub fn pause(&mut self) {
        if self.phase == Phase::Running {
            self.phase = Phase::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.phase == Phase::Paused {
            self.phase = Phase::Running;
        }
    }

    /// The single control surface for player input; any device the host
    /// supports translates into this one command.
    pub fn set_player_velocity_x(&mut self, vx: f32) {
        self.player_vx = vx;
    }

    /// Adapt to a host viewport change.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.world.resize(width, height);
    }

    /// Advance the run by `elapsed_ms`, returning the ordered events of this
    /// tick. Paused and ended sessions mutate nothing and return no events.
    pub fn tick(&mut self, elapsed_ms: f32) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.phase != Phase::Running {
            return events;
        }

        let dt = elapsed_ms / 1000.0;
        self.world.set_player_velocity_x(self.player_vx);
        let hit = self.world.advance(dt, &mut events);

        let mut fires = Vec::new();
        self.scheduler.advance(elapsed_ms, &mut fires);
        for fire in fires {
            match fire {
                SpawnFire::Obstacle => {
                    let tier = self.sampler.weighted(&self.cumulative_weights);
                    let color_index = self
                        .sampler
                        .uniform_int(0, self.tuning.colors.len() as i32 - 1)
                        as usize;
                    let body =
                        self.world
                            .spawn_obstacle(tier, color_index, &self.tuning, &mut self.sampler);
                    events.push(GameEvent::ObstacleSpawned {
                        id: body.id,
                        tier,
                        color_index,
                        x: body.pos.x,
                        y: body.pos.y,
                    });
                }
                SpawnFire::LevelUp {
                    level,
                    spawn_interval_ms,
                } => {
                    log::info!("level {level}, spawn interval {spawn_interval_ms:.0} ms");
                    events.push(GameEvent::LevelUp {
                        new_level: level,
                        new_spawn_interval_ms: spawn_interval_ms,
                    });
                }
            }
        }

        for event in &events {
            if let GameEvent::ObstacleExited { .. } = event {
                self.score += 1;
                if self.score > self.high_score {
                    self.high_score = self.score;
                }
            }
        }

        if hit {
            self.phase = Phase::Ended;
            log::info!(
                "player hit; run over at score {} level {}",
                self.score,
                self.scheduler.level()
            );
        }

        events
    }

    /// Read-only body snapshots for rendering.
    pub fn bodies(&self) -> Vec<Body> {
        self.world.bodies()
    }

    pub fn session_state(&self) -> SessionState {
        SessionState {
            score: self.score,
            level: self.scheduler.level(),
            high_score: self.high_score,
            spawn_interval_ms: self.scheduler.spawn_interval_ms(),
            paused: self.phase == Phase::Paused,
        }
    }
}
