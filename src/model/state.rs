// src/model/state.rs

use crate::model::agent::{AgentRole, Echelon};
use crate::simulation::config::BeerGameConfig;
use serde::{Deserialize, Serialize};

/// The end customer sitting below the retailer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Last generated demand.
    pub orders: f64,
    /// Last shipment received from the retailer.
    pub incoming_shipments: f64,
}

/// Everything that changes during an episode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplyChainState {
    pub week: u32,
    /// Echelons in chain order, retailer first.
    pub echelons: Vec<Echelon>,
    pub customer: Customer,
    pub total_beers: f64,
}

impl SupplyChainState {
    /// Fresh week-0 state built from the configured initial vectors.
    pub fn initial(config: &BeerGameConfig) -> Self {
        let echelons = AgentRole::ALL
            .iter()
            .map(|&role| {
                let i = role.index();
                Echelon::new(
                    role,
                    config.holding_cost[i],
                    config.backorder_cost[i],
                    config.init_inv_level[i],
                    config.init_orders[i],
                    config.init_shipments[i],
                )
            })
            .collect();

        Self {
            week: 0,
            echelons,
            customer: Customer::default(),
            total_beers: 0.0,
        }
    }

    pub fn echelon(&self, role: AgentRole) -> &Echelon {
        &self.echelons[role.index()]
    }

    pub fn echelon_mut(&mut self, role: AgentRole) -> &mut Echelon {
        &mut self.echelons[role.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_copies_configured_vectors() {
        let config = BeerGameConfig {
            holding_cost: [1.0, 2.0, 3.0, 4.0],
            init_inv_level: [10.0, 11.0, 12.0, 13.0],
            ..BeerGameConfig::default()
        };
        let state = SupplyChainState::initial(&config);

        assert_eq!(state.week, 0);
        assert_eq!(state.total_beers, 0.0);
        assert_eq!(state.echelons.len(), 4);
        for role in AgentRole::ALL {
            let e = state.echelon(role);
            assert_eq!(e.role, role);
            assert_eq!(e.holding_cost, config.holding_cost[role.index()]);
            assert_eq!(e.inventory, config.init_inv_level[role.index()]);
            assert_eq!(e.backorder, 0.0);
            assert_eq!(e.incoming_shipment, 4.0);
        }
    }
}
