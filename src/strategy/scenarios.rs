// src/strategy/scenarios.rs

use crate::strategy::implementations::{
    BaseStockPolicy, ConstantPolicy, RandomPolicy, SmoothingPolicy, StermanHeuristic, VmiPolicy,
};
use crate::strategy::traits::OrderPolicy;

pub const SCENARIOS: [&str; 4] = ["mixed", "rational", "chaos", "vmi"];

/// Four policies, retailer first, for a named scenario.
///
/// * `mixed` - one rational retailer, the rest play like humans.
/// * `rational` - everyone keeps a base stock.
/// * `chaos` - a random retailer, a smoothing wholesaler, a hoarding
///   distributor and a rational factory.
/// * `vmi` - every supplier manages its customer's stock; needs
///   `info_sharing` to see anything downstream.
pub fn scenario(name: &str, base_demand: f64, seed: u64) -> Option<Vec<Box<dyn OrderPolicy>>> {
    let policies: Vec<Box<dyn OrderPolicy>> = match name {
        "mixed" => vec![
            Box::new(BaseStockPolicy::new(16.0)),
            Box::new(StermanHeuristic::new(12.0)),
            Box::new(StermanHeuristic::new(12.0)),
            Box::new(ConstantPolicy::new(base_demand)),
        ],
        "rational" => (0..4)
            .map(|_| Box::new(BaseStockPolicy::new(16.0)) as Box<dyn OrderPolicy>)
            .collect(),
        "chaos" => vec![
            Box::new(RandomPolicy::new(0.0, 2.0 * base_demand, seed)),
            Box::new(SmoothingPolicy::new(base_demand, 0.3, 16.0)),
            Box::new(BaseStockPolicy::new(24.0)),
            Box::new(BaseStockPolicy::new(16.0)),
        ],
        "vmi" => (0..4)
            .map(|_| Box::new(VmiPolicy::new(12.0)) as Box<dyn OrderPolicy>)
            .collect(),
        _ => return None,
    };
    Some(policies)
}
