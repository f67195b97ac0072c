// src/strategy/traits.rs

use crate::model::agent::AgentRole;
use crate::model::observation::Observation;
use crate::model::state::SupplyChainState;
use std::fmt::Debug;

/// Extra information handed to a policy when the game shares information
/// along the chain. Everything is `None` without sharing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderContext {
    /// Downstream echelon's on-hand stock
    pub downstream_inventory: Option<f64>,
    /// Downstream echelon's unfilled orders
    pub downstream_backorder: Option<f64>,
    /// Last end-customer demand
    pub customer_demand: Option<f64>,
}

impl OrderContext {
    pub fn for_agent(state: &SupplyChainState, role: AgentRole, info_sharing: bool) -> Self {
        if !info_sharing {
            return Self::default();
        }
        let downstream = state.echelon(role).downstream.map(|d| &state.echelons[d]);
        Self {
            downstream_inventory: downstream.map(|e| e.inventory),
            downstream_backorder: downstream.map(|e| e.backorder),
            customer_demand: Some(state.customer.orders),
        }
    }
}

/// Decision logic for one echelon, living outside the engine.
///
/// We require `Send` so a policy can be driven from another thread.
pub trait OrderPolicy: Debug + Send {
    /// How much to order upstream this week.
    ///
    /// The result is clamped to the action space by the caller.
    fn decide(&mut self, observation: &Observation, context: &OrderContext) -> f64;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::config::BeerGameConfig;
    use crate::simulation::engine::BeerGame;

    fn after_one_week(info_sharing: bool) -> BeerGame {
        let config = BeerGameConfig {
            info_sharing,
            ..BeerGameConfig::default().with_seed(12)
        };
        let mut game = BeerGame::new(config).unwrap();
        game.reset(None);
        for order in [3.0, 5.0, 7.0, 9.0] {
            game.step(order).unwrap();
        }
        game
    }

    #[test]
    fn sharing_exposes_downstream_levels_and_customer_demand() {
        let game = after_one_week(true);
        let state = game.state();

        let wholesaler = OrderContext::for_agent(state, AgentRole::Wholesaler, true);
        assert_eq!(wholesaler.downstream_inventory, Some(state.echelons[0].inventory));
        assert_eq!(wholesaler.downstream_backorder, Some(state.echelons[0].backorder));
        assert_eq!(wholesaler.customer_demand, Some(state.customer.orders));

        let factory = OrderContext::for_agent(state, AgentRole::Factory, true);
        assert_eq!(factory.downstream_inventory, Some(state.echelons[2].inventory));
        assert_eq!(factory.downstream_backorder, Some(state.echelons[2].backorder));

        // The retailer's downstream is the end customer, not an echelon.
        let retailer = OrderContext::for_agent(state, AgentRole::Retailer, true);
        assert_eq!(retailer.downstream_inventory, None);
        assert_eq!(retailer.downstream_backorder, None);
        assert_eq!(retailer.customer_demand, Some(state.customer.orders));
        assert!(state.customer.orders >= 0.0);
    }

    #[test]
    fn no_sharing_gives_empty_context() {
        let game = after_one_week(false);
        for role in AgentRole::ALL {
            assert_eq!(
                OrderContext::for_agent(game.state(), role, false),
                OrderContext::default()
            );
        }
    }
}
