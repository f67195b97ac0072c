// src/strategy/implementations.rs

use crate::model::observation::Observation;
use crate::strategy::traits::{OrderContext, OrderPolicy};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// On hand minus owed plus what is already on its way.
fn inventory_position(obs: &Observation) -> f64 {
    (obs.inventory[0] - obs.backorders[0] + obs.incoming_shipments[0]) as f64
}

/// Best guess at this week's demand: the real customer demand when shared,
/// otherwise the agent's own last order.
fn demand_signal(obs: &Observation, context: &OrderContext) -> f64 {
    context
        .customer_demand
        .unwrap_or(obs.orders[0] as f64)
}

// =========================================================================
// 1. Constant Policy
// =========================================================================

/// Orders the same quantity every week, whatever happens.
#[derive(Debug, Clone)]
pub struct ConstantPolicy {
    quantity: f64,
}

impl ConstantPolicy {
    pub fn new(quantity: f64) -> Self {
        Self { quantity }
    }
}

impl OrderPolicy for ConstantPolicy {
    fn decide(&mut self, _observation: &Observation, _context: &OrderContext) -> f64 {
        self.quantity
    }
}

// =========================================================================
// 2. Random Policy
// =========================================================================

/// Orders a random amount within a range.
/// Useful for simulating chaotic actors or testing system stability.
#[derive(Debug, Clone)]
pub struct RandomPolicy {
    min: f64,
    max: f64,
    rng: StdRng,
}

impl RandomPolicy {
    pub fn new(min: f64, max: f64, seed: u64) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self {
            min,
            max,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl OrderPolicy for RandomPolicy {
    fn decide(&mut self, _observation: &Observation, _context: &OrderContext) -> f64 {
        self.rng.gen_range(self.min..=self.max)
    }
}

// =========================================================================
// 3. Base Stock Policy (Rational / "Order-Up-To")
// =========================================================================

/// Keeps the inventory position at a target level.
///
/// Order = Demand + (Target - (Inventory - Backorder + InTransit))
#[derive(Debug, Clone)]
pub struct BaseStockPolicy {
    target_stock: f64,
}

impl BaseStockPolicy {
    pub fn new(target_stock: f64) -> Self {
        Self { target_stock }
    }
}

impl OrderPolicy for BaseStockPolicy {
    fn decide(&mut self, observation: &Observation, context: &OrderContext) -> f64 {
        let gap = self.target_stock - inventory_position(observation);
        (demand_signal(observation, context) + gap).max(0.0)
    }
}

// =========================================================================
// 4. Sterman Heuristic Policy
// =========================================================================
// Anchor on expected demand, then correct the stock gap fully and the
// supply-line gap only partially.

#[derive(Debug, Clone)]
pub struct StermanHeuristic {
    target_inventory: f64,
    target_supply_line: f64,
    alpha: f64, // Weight for inventory gap
    beta: f64,  // Weight for supply line gap
}

impl StermanHeuristic {
    /// A typical "human" player who mostly ignores the pipeline.
    pub fn new(target_inventory: f64) -> Self {
        Self {
            target_inventory,
            target_supply_line: target_inventory / 2.0,
            alpha: 1.0,
            beta: 0.2,
        }
    }
}

impl OrderPolicy for StermanHeuristic {
    fn decide(&mut self, observation: &Observation, context: &OrderContext) -> f64 {
        let net_inventory = (observation.inventory[0] - observation.backorders[0]) as f64;
        let supply_line = observation.incoming_shipments[0] as f64;

        let inventory_gap = self.target_inventory - net_inventory;
        let supply_line_gap = self.target_supply_line - supply_line;

        let order = demand_signal(observation, context)
            + self.alpha * inventory_gap
            + self.beta * supply_line_gap;
        order.max(0.0)
    }
}

// =========================================================================
// 5. Smoothing Policy
// =========================================================================
// Forecasts demand with exponential smoothing and damps the stock correction
// by the same factor.

#[derive(Debug, Clone)]
pub struct SmoothingPolicy {
    avg_demand: f64,
    gamma: f64, // 0.1 = very stable, 0.9 = reactive
    target_stock: f64,
}

impl SmoothingPolicy {
    pub fn new(initial_demand: f64, gamma: f64, target_stock: f64) -> Self {
        Self {
            avg_demand: initial_demand,
            gamma: gamma.clamp(0.0, 1.0),
            target_stock,
        }
    }
}

impl OrderPolicy for SmoothingPolicy {
    fn decide(&mut self, observation: &Observation, context: &OrderContext) -> f64 {
        let demand = demand_signal(observation, context);
        self.avg_demand = self.gamma * demand + (1.0 - self.gamma) * self.avg_demand;

        let correction = (self.target_stock - inventory_position(observation)) * self.gamma;
        (self.avg_demand + correction).max(0.0)
    }
}

// =========================================================================
// 6. VMI Policy (Vendor Managed Inventory)
// =========================================================================

/// Replenishes against the downstream echelon's real stock when the game
/// shares it, falling back to a plain base-stock rule otherwise.
#[derive(Debug, Clone)]
pub struct VmiPolicy {
    target_stock_downstream: f64,
    target_stock_own: f64,
}

impl VmiPolicy {
    pub fn new(target_stock: f64) -> Self {
        Self {
            target_stock_downstream: target_stock,
            target_stock_own: target_stock,
        }
    }
}

impl OrderPolicy for VmiPolicy {
    fn decide(&mut self, observation: &Observation, context: &OrderContext) -> f64 {
        let own_gap = self.target_stock_own - inventory_position(observation);

        match (context.downstream_inventory, context.downstream_backorder) {
            (Some(down_inv), Some(down_back)) => {
                let downstream_gap = self.target_stock_downstream - (down_inv - down_back);
                (downstream_gap + own_gap).max(0.0)
            }
            _ => own_gap.max(0.0),
        }
    }
}
