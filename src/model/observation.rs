// src/model/observation.rs

use crate::model::agent::{AgentRole, NUM_AGENTS};
use crate::model::state::{Customer, SupplyChainState};
use serde::Serialize;

/// What a single echelon gets to see. Every field is a 1-length vector.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Observation {
    pub inventory: [f32; 1],
    pub backorders: [f32; 1],
    pub orders: [f32; 1],
    pub incoming_shipments: [f32; 1],
    pub holding_cost: [f32; 1],
    pub backorder_cost: [f32; 1],
}

impl Observation {
    pub fn of(state: &SupplyChainState, role: AgentRole) -> Self {
        let e = state.echelon(role);
        Self {
            inventory: [e.inventory as f32],
            backorders: [e.backorder as f32],
            orders: [e.pending_order as f32],
            incoming_shipments: [e.incoming_shipment as f32],
            holding_cost: [e.holding_cost as f32],
            backorder_cost: [e.backorder_cost as f32],
        }
    }
}

/// Read-only view handed to a renderer.
///
/// `holding_cost` and `backorder_cost` are this week's cost amounts
/// (coefficient times level), not the coefficients.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderSnapshot {
    pub week: u32,
    pub inventory_levels: [f64; NUM_AGENTS],
    pub backorders: [f64; NUM_AGENTS],
    pub orders: [f64; NUM_AGENTS],
    pub shipments: [f64; NUM_AGENTS],
    pub holding_cost: [f64; NUM_AGENTS],
    pub backorder_cost: [f64; NUM_AGENTS],
    pub customer: Customer,
    pub total_beers: f64,
}

impl RenderSnapshot {
    pub fn of(state: &SupplyChainState) -> Self {
        let e = &state.echelons;
        Self {
            week: state.week,
            inventory_levels: std::array::from_fn(|i| e[i].inventory),
            backorders: std::array::from_fn(|i| e[i].backorder),
            orders: std::array::from_fn(|i| e[i].pending_order),
            shipments: std::array::from_fn(|i| e[i].incoming_shipment),
            holding_cost: std::array::from_fn(|i| e[i].holding_cost * e[i].inventory),
            backorder_cost: std::array::from_fn(|i| e[i].backorder_cost * e[i].backorder),
            customer: state.customer.clone(),
            total_beers: state.total_beers,
        }
    }
}
