//! Data-driven game balance
//!
//! All spawn/difficulty numbers live here so a host can tweak them without
//! touching the simulation. A [`Tuning`] is validated once at session
//! construction; a malformed table prevents the session from starting at all
//! instead of leaking NaNs into the physics.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// A malformed tuning table, reported with enough detail to point at the
/// offending entry.
#[derive(Debug, thiserror::Error)]
pub enum TuningError {
    #[error("no size tiers configured")]
    NoTiers,

    #[error("no color/speed pairs configured")]
    NoColors,

    #[error("tier {index}: size must be positive, got {size}")]
    NonPositiveSize { index: usize, size: f32 },

    #[error("tier {index}: spawn weight must be in (0, 1], got {weight}")]
    BadWeight { index: usize, weight: f32 },

    #[error("spawn weights sum to {sum}, expected 1.0")]
    WeightSum { sum: f32 },

    #[error("color {index}: fall speed must be positive, got {speed}")]
    NonPositiveSpeed { index: usize, speed: f32 },

    #[error("player radius must be positive, got {0}")]
    NonPositivePlayerRadius(f32),

    #[error("player speed must be positive, got {0}")]
    NonPositivePlayerSpeed(f32),

    #[error("drift velocity must be non-negative, got {0}")]
    NegativeDrift(f32),

    #[error("spawn interval must be positive, got {0} ms")]
    NonPositiveSpawnInterval(f32),

    #[error("level interval must be positive, got {0} ms")]
    NonPositiveLevelInterval(f32),

    #[error("spawn interval decay must be in (0, 1], got {0}")]
    BadIntervalDecay(f32),
}

/// One obstacle size category with its spawn probability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeTier {
    /// Sprite diameter in world units
    pub size: f32,
    /// Spawn probability weight, all tiers summing to 1.0
    pub weight: f32,
}

/// A base color paired with the fall speed it implies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorSpeed {
    /// 24-bit RGB base color
    pub color: u32,
    /// Downward velocity in units/sec
    pub fall_speed: f32,
}

/// Complete balance table for a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    /// Obstacle size tiers, weighted by spawn probability
    pub tiers: Vec<SizeTier>,
    /// Color/speed pairs, chosen uniformly and independently of tier
    pub colors: Vec<ColorSpeed>,
    pub player_radius: f32,
    pub player_speed: f32,
    /// Max horizontal drift magnitude given to fresh obstacles
    pub drift_vx: f32,
    pub spawn_interval_ms: f32,
    pub level_interval_ms: f32,
    pub min_spawn_interval_ms: f32,
    /// Multiplier applied to the spawn interval on each level-up
    pub spawn_interval_decay: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            tiers: vec![
                SizeTier { size: 60.0, weight: 0.5 },
                SizeTier { size: 90.0, weight: 0.3 },
                SizeTier { size: 120.0, weight: 0.15 },
                SizeTier { size: 150.0, weight: 0.05 },
            ],
            colors: vec![
                ColorSpeed { color: 0xFFFF00, fall_speed: 80.0 },  // yellow
                ColorSpeed { color: 0xFFA500, fall_speed: 160.0 }, // orange
                ColorSpeed { color: 0xFF0000, fall_speed: 230.0 }, // red
                ColorSpeed { color: 0x800080, fall_speed: 320.0 }, // purple
            ],
            player_radius: PLAYER_RADIUS,
            player_speed: PLAYER_SPEED,
            drift_vx: OBSTACLE_DRIFT_VX,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            level_interval_ms: LEVEL_INTERVAL_MS,
            min_spawn_interval_ms: MIN_SPAWN_INTERVAL_MS,
            spawn_interval_decay: SPAWN_INTERVAL_DECAY,
        }
    }
}

impl Tuning {
    /// Weight sums within this of 1.0 are accepted (floating rounding).
    const WEIGHT_SUM_TOLERANCE: f32 = 1e-3;

    /// Validate the table, naming the first entry that fails.
    pub fn validate(&self) -> Result<(), TuningError> {
        if self.tiers.is_empty() {
            return Err(TuningError::NoTiers);
        }
        if self.colors.is_empty() {
            return Err(TuningError::NoColors);
        }
        for (index, tier) in self.tiers.iter().enumerate() {
            if !(tier.size > 0.0) {
                return Err(TuningError::NonPositiveSize {
                    index,
                    size: tier.size,
                });
            }
            if !(tier.weight > 0.0 && tier.weight <= 1.0) {
                return Err(TuningError::BadWeight {
                    index,
                    weight: tier.weight,
                });
            }
        }
        let sum: f32 = self.tiers.iter().map(|t| t.weight).sum();
        if (sum - 1.0).abs() > Self::WEIGHT_SUM_TOLERANCE {
            return Err(TuningError::WeightSum { sum });
        }
        for (index, color) in self.colors.iter().enumerate() {
            if !(color.fall_speed > 0.0) {
                return Err(TuningError::NonPositiveSpeed {
                    index,
                    speed: color.fall_speed,
                });
            }
        }
        if !(self.player_radius > 0.0) {
            return Err(TuningError::NonPositivePlayerRadius(self.player_radius));
        }
        if !(self.player_speed > 0.0) {
            return Err(TuningError::NonPositivePlayerSpeed(self.player_speed));
        }
        if !(self.drift_vx >= 0.0) {
            return Err(TuningError::NegativeDrift(self.drift_vx));
        }
        if !(self.spawn_interval_ms > 0.0) {
            return Err(TuningError::NonPositiveSpawnInterval(self.spawn_interval_ms));
        }
        if !(self.level_interval_ms > 0.0) {
            return Err(TuningError::NonPositiveLevelInterval(self.level_interval_ms));
        }
        if !(self.spawn_interval_decay > 0.0 && self.spawn_interval_decay <= 1.0) {
            return Err(TuningError::BadIntervalDecay(self.spawn_interval_decay));
        }
        Ok(())
    }

    /// Running sum of tier weights, for cumulative-sum selection.
    pub fn cumulative_weights(&self) -> Vec<f32> {
        let mut cumulative = 0.0;
        self.tiers
            .iter()
            .map(|t| {
                cumulative += t.weight;
                cumulative
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tuning_is_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_cumulative_weights() {
        let cumulative = Tuning::default().cumulative_weights();
        assert_eq!(cumulative.len(), 4);
        assert!((cumulative[0] - 0.5).abs() < 1e-6);
        assert!((cumulative[1] - 0.8).abs() < 1e-6);
        assert!((cumulative[2] - 0.95).abs() < 1e-6);
        assert!((cumulative[3] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_negative_size_names_tier() {
        let mut tuning = Tuning::default();
        tuning.tiers[2].size = -10.0;
        match tuning.validate() {
            Err(TuningError::NonPositiveSize { index, .. }) => assert_eq!(index, 2),
            other => panic!("expected NonPositiveSize, got {other:?}"),
        }
    }

    #[test]
    fn test_weights_must_sum_to_one() {
        let mut tuning = Tuning::default();
        tuning.tiers[0].weight = 0.9;
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::WeightSum { .. })
        ));
    }

    #[test]
    fn test_nan_size_rejected() {
        let mut tuning = Tuning::default();
        tuning.tiers[0].size = f32::NAN;
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::NonPositiveSize { index: 0, .. })
        ));
    }

    #[test]
    fn test_zero_fall_speed_rejected() {
        let mut tuning = Tuning::default();
        tuning.colors[1].fall_speed = 0.0;
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::NonPositiveSpeed { index: 1, .. })
        ));
    }

    #[test]
    fn test_zero_player_speed_rejected() {
        let mut tuning = Tuning::default();
        tuning.player_speed = 0.0;
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::NonPositivePlayerSpeed(_))
        ));
    }

    #[test]
    fn test_negative_drift_rejected() {
        let mut tuning = Tuning::default();
        tuning.drift_vx = -120.0;
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::NegativeDrift(_))
        ));
    }

    #[test]
    fn test_zero_drift_is_allowed() {
        let mut tuning = Tuning::default();
        tuning.drift_vx = 0.0;
        assert!(tuning.validate().is_ok());
    }

    #[test]
    fn test_json_round_trip() {
        let tuning = Tuning::default();
        let json = serde_json::to_string(&tuning).unwrap();
        let back: Tuning = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tuning);
    }
}
