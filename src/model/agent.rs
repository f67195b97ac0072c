// src/model/agent.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of echelons in the chain.
pub const NUM_AGENTS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentRole {
    Retailer,
    Wholesaler,
    Distributor,
    Factory,
}

impl AgentRole {
    /// All roles, downstream first. This is also the turn order within a week.
    pub const ALL: [AgentRole; NUM_AGENTS] = [
        AgentRole::Retailer,
        AgentRole::Wholesaler,
        AgentRole::Distributor,
        AgentRole::Factory,
    ];

    pub fn index(self) -> usize {
        match self {
            AgentRole::Retailer => 0,
            AgentRole::Wholesaler => 1,
            AgentRole::Distributor => 2,
            AgentRole::Factory => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            AgentRole::Retailer => "retailer",
            AgentRole::Wholesaler => "wholesaler",
            AgentRole::Distributor => "distributor",
            AgentRole::Factory => "factory",
        }
    }
}

impl fmt::Display for AgentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The state of a single node in the supply chain.
///
/// Neighbours are held as indices into the owning chain, never as owned
/// records. `downstream == None` means the end customer, `upstream == None`
/// means the echelon produces its own goods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Echelon {
    pub role: AgentRole,
    pub downstream: Option<usize>,
    pub upstream: Option<usize>,

    // Cost coefficients, fixed for the episode
    pub holding_cost: f64,
    pub backorder_cost: f64,

    pub inventory: f64,
    pub backorder: f64,
    pub pending_order: f64,     // Most recent order placed upstream
    pub incoming_shipment: f64, // Arrives at the next propagation
}

impl Echelon {
    pub fn new(
        role: AgentRole,
        holding_cost: f64,
        backorder_cost: f64,
        initial_inventory: f64,
        initial_order: f64,
        initial_shipment: f64,
    ) -> Self {
        let idx = role.index();
        Self {
            role,
            downstream: idx.checked_sub(1),
            upstream: (idx + 1 < NUM_AGENTS).then_some(idx + 1),
            holding_cost,
            backorder_cost,
            inventory: initial_inventory,
            backorder: 0.0,
            pending_order: initial_order,
            incoming_shipment: initial_shipment,
        }
    }

    /// Receive the shipment in transit, book the new demand as owed, and send
    /// as much as possible downstream.
    ///
    /// Returns the quantity shipped, which never exceeds what is on hand
    /// after replenishment nor what is owed.
    pub fn fulfil(&mut self, incoming_demand: f64) -> f64 {
        self.backorder += incoming_demand;
        self.inventory += self.incoming_shipment;

        // inventory - max(inventory - backorder, 0), without the rounding residue
        let shipped = self.inventory.min(self.backorder);

        self.inventory -= shipped;
        self.backorder -= shipped;
        shipped
    }

    /// Weekly holding plus backorder cost at the current levels.
    pub fn current_cost(&self) -> f64 {
        self.holding_cost * self.inventory + self.backorder_cost * self.backorder
    }
}
