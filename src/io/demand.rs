// src/io/demand.rs

use crate::simulation::config::HORIZON;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use std::f64::consts::PI;

const SEASONAL_AMPLITUDE: f64 = 2.0;
const NOISE_STD: f64 = 1.0;
const SPIKE_PROBABILITY: f64 = 0.1;
const MAX_SPIKE: f64 = 10.0;

/// Exogenous end-customer demand.
///
/// Base level plus a yearly sine season, Gaussian noise and an occasional
/// spike. The generator owns its random source, so two generators built from
/// the same seed produce the same sequence.
#[derive(Debug, Clone)]
pub struct DemandGenerator {
    base_demand: f64,
    rng: StdRng,
}

impl DemandGenerator {
    /// # Arguments
    /// * `base_demand` - Average weekly demand before seasonality (e.g., 8.0).
    /// * `seed` - Fixes the sequence; `None` seeds from OS entropy.
    pub fn new(base_demand: f64, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { base_demand, rng }
    }

    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    pub fn base_demand(&self) -> f64 {
        self.base_demand
    }

    /// Seasonal component for a given week (52-week cycle).
    pub fn seasonal(week: u32) -> f64 {
        SEASONAL_AMPLITUDE * (2.0 * PI * week as f64 / HORIZON as f64).sin()
    }

    /// Draws this week's customer order. Never negative.
    pub fn generate(&mut self, week: u32) -> f64 {
        let noise: f64 = self.rng.sample::<f64, _>(StandardNormal) * NOISE_STD;
        let spike = if self.rng.gen_bool(SPIKE_PROBABILITY) {
            MAX_SPIKE
        } else {
            0.0
        };

        (self.base_demand + Self::seasonal(week) + noise + spike).max(0.0)
    }
}
