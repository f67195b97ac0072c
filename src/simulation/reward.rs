// src/simulation/reward.rs

use crate::model::agent::AgentRole;
use crate::model::state::SupplyChainState;

/// Holding plus backorder cost for one echelon at the current levels.
pub fn cost(role: AgentRole, state: &SupplyChainState) -> f64 {
    state.echelon(role).current_cost()
}

/// Negated cost. Never positive while levels and coefficients are non-negative.
pub fn reward(role: AgentRole, state: &SupplyChainState) -> f64 {
    -cost(role, state)
}
