// crmsynth-core/src/domain/random.rs

use chrono::{Duration, NaiveDate};
use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_distr::{Exp, Normal};

/// Seeded source for every draw made while building one dataset.
///
/// A single instance is threaded through all generators of a request, so the
/// seed covers the whole dataset rather than each stage on its own. Instances
/// are never shared between requests.
#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: StdRng,
    seed: u64,
}

impl RandomSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform draw in `[min, max)`. An empty interval yields `min`.
    pub fn uniform(&mut self, min: f64, max: f64) -> f64 {
        if max > min {
            self.rng.gen_range(min..max)
        } else {
            min
        }
    }

    /// Uniform integer in `[min, max]`, both ends inclusive.
    pub fn uniform_int(&mut self, min: u32, max: u32) -> u32 {
        if max > min {
            self.rng.gen_range(min..=max)
        } else {
            min
        }
    }

    /// Bernoulli trial with the given success probability.
    pub fn chance(&mut self, probability: f64) -> bool {
        self.rng.gen_bool(probability.clamp(0.0, 1.0))
    }

    /// Picks one of `options` with probability proportional to `weights`.
    ///
    /// Returns `None` for an empty slice or mismatched lengths. Unusable
    /// weights (all zero, negative) degrade to a uniform pick.
    pub fn weighted_choice<T: Copy>(&mut self, options: &[T], weights: &[f64]) -> Option<T> {
        if options.is_empty() || options.len() != weights.len() {
            return None;
        }
        match WeightedIndex::new(weights) {
            Ok(dist) => options.get(dist.sample(&mut self.rng)).copied(),
            Err(_) => self.choose(options),
        }
    }

    pub fn choose<T: Copy>(&mut self, options: &[T]) -> Option<T> {
        options.choose(&mut self.rng).copied()
    }

    /// Normal draw clamped into `[clamp_min, clamp_max]`.
    ///
    /// Out-of-range samples are pinned to the nearest bound instead of being
    /// redrawn, so the call always terminates after one sample. A stddev that
    /// is not strictly positive yields the clamped mean.
    pub fn gaussian(&mut self, mean: f64, stddev: f64, clamp_min: f64, clamp_max: f64) -> f64 {
        if stddev.is_nan() || stddev <= 0.0 {
            return mean.max(clamp_min).min(clamp_max);
        }
        let draw = match Normal::new(mean, stddev) {
            Ok(normal) => normal.sample(&mut self.rng),
            Err(_) => mean,
        };
        draw.max(clamp_min).min(clamp_max)
    }

    /// Exponential draw with the given mean. Non-positive means yield 0.
    pub fn exponential(&mut self, mean: f64) -> f64 {
        if mean <= 0.0 {
            return 0.0;
        }
        match Exp::new(1.0 / mean) {
            Ok(exp) => exp.sample(&mut self.rng),
            Err(_) => mean,
        }
    }

    /// Uniform calendar date in `[start, end]`. Returns `start` when `end`
    /// does not come after it.
    pub fn date_between(&mut self, start: NaiveDate, end: NaiveDate) -> NaiveDate {
        let span = (end - start).num_days();
        if span <= 0 {
            return start;
        }
        start + Duration::days(self.rng.gen_range(0..=span))
    }
}
