//! Seeded random draws for spawn decisions
//!
//! Everything the simulation randomizes goes through a [`Sampler`] seeded at
//! session start, so a run is fully reproducible from its seed.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Cumulative-sum category selection: returns the first index whose
/// cumulative weight exceeds `r` (drawn uniformly from [0, 1)).
///
/// Falls back to the last index when rounding leaves the final cumulative
/// weight just under 1.0.
pub fn weighted_index(r: f32, cumulative: &[f32]) -> usize {
    for (index, &bound) in cumulative.iter().enumerate() {
        if r < bound {
            return index;
        }
    }
    cumulative.len().saturating_sub(1)
}

/// Deterministic source of spawn randomness.
#[derive(Debug, Clone)]
pub struct Sampler {
    rng: Pcg32,
}

impl Sampler {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Draw a weighted category index from a cumulative weight table.
    pub fn weighted(&mut self, cumulative: &[f32]) -> usize {
        weighted_index(self.rng.random::<f32>(), cumulative)
    }

    /// Uniform float in [min, max).
    pub fn uniform(&mut self, min: f32, max: f32) -> f32 {
        if max <= min {
            return min;
        }
        self.rng.random_range(min..max)
    }

    /// Uniform integer in [min, max], both ends inclusive.
    pub fn uniform_int(&mut self, min: i32, max: i32) -> i32 {
        if max <= min {
            return min;
        }
        self.rng.random_range(min..=max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CUMULATIVE: [f32; 4] = [0.5, 0.8, 0.95, 1.0];

    #[test]
    fn test_weighted_index_buckets() {
        assert_eq!(weighted_index(0.3, &CUMULATIVE), 0);
        assert_eq!(weighted_index(0.6, &CUMULATIVE), 1);
        assert_eq!(weighted_index(0.85, &CUMULATIVE), 2);
        assert_eq!(weighted_index(0.99, &CUMULATIVE), 3);
    }

    #[test]
    fn test_weighted_index_boundaries() {
        assert_eq!(weighted_index(0.0, &CUMULATIVE), 0);
        // Exactly on a bound falls into the next bucket (strict <)
        assert_eq!(weighted_index(0.5, &CUMULATIVE), 1);
    }

    #[test]
    fn test_weighted_index_rounding_fallback() {
        // Final cumulative weight shy of 1.0 still yields the last index
        let truncated = [0.5, 0.8, 0.95, 0.9999];
        assert_eq!(weighted_index(0.99995, &truncated), 3);
    }

    #[test]
    fn test_sampler_determinism() {
        let mut a = Sampler::new(777);
        let mut b = Sampler::new(777);
        for _ in 0..100 {
            assert_eq!(a.uniform_int(-120, 120), b.uniform_int(-120, 120));
            assert_eq!(a.uniform(0.0, 100.0), b.uniform(0.0, 100.0));
            assert_eq!(a.weighted(&CUMULATIVE), b.weighted(&CUMULATIVE));
        }
    }

    #[test]
    fn test_uniform_int_stays_in_range() {
        let mut sampler = Sampler::new(1);
        for _ in 0..1000 {
            let v = sampler.uniform_int(-120, 120);
            assert!((-120..=120).contains(&v));
        }
    }

    #[test]
    fn test_uniform_stays_in_range() {
        let mut sampler = Sampler::new(2);
        for _ in 0..1000 {
            let v = sampler.uniform(10.0, 20.0);
            assert!((10.0..20.0).contains(&v));
        }
    }

    #[test]
    fn test_degenerate_ranges() {
        let mut sampler = Sampler::new(3);
        assert_eq!(sampler.uniform(5.0, 5.0), 5.0);
        assert_eq!(sampler.uniform_int(7, 7), 7);
    }
}
