//! Spawn and difficulty timers
//!
//! Two countdown accumulators advanced by the same elapsed time the session
//! tick receives: one paces obstacle spawns, one paces level-ups. No engine
//! timer objects - firing is a pure state transition, and pausing the
//! session simply stops advancing the accumulators.

use crate::tuning::Tuning;

/// A timer firing produced while advancing the scheduler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpawnFire {
    /// Sample an obstacle class and ask the world to spawn it.
    Obstacle,
    /// Difficulty stepped up; carries the post-shrink interval.
    LevelUp { level: u32, spawn_interval_ms: f32 },
}

/// Periodic, difficulty-scaling spawn state machine.
#[derive(Debug, Clone)]
pub struct SpawnScheduler {
    /// Current obstacle period; monotonically non-increasing
    spawn_interval_ms: f32,
    min_spawn_interval_ms: f32,
    decay: f32,
    level_interval_ms: f32,
    obstacle_countdown_ms: f32,
    level_countdown_ms: f32,
    level: u32,
}

impl SpawnScheduler {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            spawn_interval_ms: tuning.spawn_interval_ms,
            min_spawn_interval_ms: tuning.min_spawn_interval_ms,
            decay: tuning.spawn_interval_decay,
            level_interval_ms: tuning.level_interval_ms,
            obstacle_countdown_ms: tuning.spawn_interval_ms,
            level_countdown_ms: tuning.level_interval_ms,
            level: 1,
        }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn spawn_interval_ms(&self) -> f32 {
        self.spawn_interval_ms
    }

    /// Advance both timers by `elapsed_ms`, pushing firings in chronological
    /// order. A large elapsed time can fire either timer several times.
    ///
    /// When both timers expire at the same instant the level-up is applied
    /// first, so the obstacle timer reloads with the shrunken interval - the
    /// new interval takes effect on the next period, never retroactively.
    pub fn advance(&mut self, elapsed_ms: f32, fires: &mut Vec<SpawnFire>) {
        let mut remaining = elapsed_ms;
        while remaining > 0.0 {
            let step = remaining
                .min(self.obstacle_countdown_ms)
                .min(self.level_countdown_ms);
            remaining -= step;
            self.obstacle_countdown_ms -= step;
            self.level_countdown_ms -= step;

            if self.level_countdown_ms <= 0.0 {
                self.level += 1;
                self.spawn_interval_ms =
                    (self.spawn_interval_ms * self.decay).max(self.min_spawn_interval_ms);
                self.level_countdown_ms += self.level_interval_ms;
                fires.push(SpawnFire::LevelUp {
                    level: self.level,
                    spawn_interval_ms: self.spawn_interval_ms,
                });
            }
            if self.obstacle_countdown_ms <= 0.0 {
                self.obstacle_countdown_ms += self.spawn_interval_ms;
                fires.push(SpawnFire::Obstacle);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scheduler_with(spawn_ms: f32, level_ms: f32) -> SpawnScheduler {
        let tuning = Tuning {
            spawn_interval_ms: spawn_ms,
            level_interval_ms: level_ms,
            ..Tuning::default()
        };
        SpawnScheduler::new(&tuning)
    }

    fn advance(scheduler: &mut SpawnScheduler, elapsed_ms: f32) -> Vec<SpawnFire> {
        let mut fires = Vec::new();
        scheduler.advance(elapsed_ms, &mut fires);
        fires
    }

    #[test]
    fn test_obstacle_timer_fires_every_interval() {
        let mut scheduler = scheduler_with(2300.0, 21000.0);
        assert!(advance(&mut scheduler, 2299.0).is_empty());
        assert_eq!(advance(&mut scheduler, 1.0), vec![SpawnFire::Obstacle]);
        assert_eq!(advance(&mut scheduler, 2300.0), vec![SpawnFire::Obstacle]);
    }

    #[test]
    fn test_large_elapsed_fires_multiple_times() {
        let mut scheduler = scheduler_with(1000.0, 1.0e9);
        let fires = advance(&mut scheduler, 3500.0);
        assert_eq!(fires.len(), 3);
    }

    #[test]
    fn test_level_up_shrinks_interval() {
        let mut scheduler = scheduler_with(2300.0, 21000.0);
        let fires = advance(&mut scheduler, 21000.0);
        assert!(fires.contains(&SpawnFire::LevelUp {
            level: 2,
            spawn_interval_ms: 2070.0,
        }));
        assert_eq!(scheduler.spawn_interval_ms(), 2070.0);
        assert_eq!(scheduler.level(), 2);
    }

    #[test]
    fn test_interval_floor() {
        let mut scheduler = scheduler_with(520.0, 1000.0);
        advance(&mut scheduler, 1000.0);
        // 520 * 0.9 = 468, floored at 500
        assert_eq!(scheduler.spawn_interval_ms(), 500.0);
        advance(&mut scheduler, 1000.0);
        assert_eq!(scheduler.spawn_interval_ms(), 500.0);
    }

    #[test]
    fn test_level_up_rearms_on_next_period_not_retroactively() {
        let mut scheduler = scheduler_with(1000.0, 1500.0);
        // t=1000: obstacle fires, next armed for t=2000
        assert_eq!(advance(&mut scheduler, 1000.0), vec![SpawnFire::Obstacle]);
        // t=1500: level-up shrinks the interval to 900
        let fires = advance(&mut scheduler, 500.0);
        assert!(matches!(fires.as_slice(), [SpawnFire::LevelUp { .. }]));
        // the in-flight countdown still runs to t=2000, not t=1900
        assert!(advance(&mut scheduler, 499.0).is_empty());
        assert_eq!(advance(&mut scheduler, 1.0), vec![SpawnFire::Obstacle]);
        // the shrunken interval applies from here: next fire at t=2900
        assert!(advance(&mut scheduler, 899.0).is_empty());
        assert_eq!(advance(&mut scheduler, 1.0), vec![SpawnFire::Obstacle]);
    }

    #[test]
    fn test_simultaneous_expiry_applies_level_first() {
        let mut scheduler = scheduler_with(1000.0, 1000.0);
        let fires = advance(&mut scheduler, 1000.0);
        assert_eq!(
            fires,
            vec![
                SpawnFire::LevelUp {
                    level: 2,
                    spawn_interval_ms: 900.0,
                },
                SpawnFire::Obstacle,
            ]
        );
        // reload already used the shrunken interval
        assert!(advance(&mut scheduler, 899.0).is_empty());
        assert_eq!(advance(&mut scheduler, 1.0), vec![SpawnFire::Obstacle]);
    }

    #[test]
    fn test_zero_elapsed_is_a_no_op() {
        let mut scheduler = scheduler_with(1000.0, 2000.0);
        assert!(advance(&mut scheduler, 0.0).is_empty());
        assert_eq!(scheduler.level(), 1);
    }
}
