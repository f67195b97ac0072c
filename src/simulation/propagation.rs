// src/simulation/propagation.rs

use crate::model::agent::NUM_AGENTS;
use crate::model::state::SupplyChainState;
use serde::Serialize;

/// What moved during one weekly propagation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Propagation {
    pub customer_demand: f64,
    pub shipped_to_customer: f64,
    /// Quantity each echelon sent downstream this week.
    pub shipments: [f64; NUM_AGENTS],
    /// Demand each echelon saw this week (customer demand for the retailer).
    pub incoming_demand: [f64; NUM_AGENTS],
    /// Shipment each echelon received at the start of the week.
    pub received: [f64; NUM_AGENTS],
}

/// Turns a week's orders into the next state.
///
/// The first pass lets every echelon receive its in-transit shipment, book
/// the demand from below and ship what it can, using only its own
/// pre-week state. The second pass routes those shipments one step
/// downstream so they arrive at the next propagation. The factory's order
/// becomes its own next shipment.
///
/// The input state is left untouched.
pub fn propagate(
    state: &SupplyChainState,
    orders: &[f64; NUM_AGENTS],
    customer_demand: f64,
) -> (SupplyChainState, Propagation) {
    let mut next = state.clone();
    let mut shipments = [0.0; NUM_AGENTS];
    let mut incoming_demand = [0.0; NUM_AGENTS];
    let mut received = [0.0; NUM_AGENTS];

    // Pass 1: accrue backorders and ship what is feasible
    for (i, echelon) in next.echelons.iter_mut().enumerate() {
        incoming_demand[i] = match echelon.downstream {
            None => customer_demand,
            Some(d) => orders[d],
        };
        received[i] = echelon.incoming_shipment;
        shipments[i] = echelon.fulfil(incoming_demand[i]);
    }

    // Pass 2: route shipments downstream
    for i in 0..NUM_AGENTS {
        let downstream = next.echelons[i].downstream;
        match downstream {
            None => {
                next.customer.incoming_shipments = shipments[i];
                next.total_beers += shipments[i];
            }
            Some(d) => next.echelons[d].incoming_shipment = shipments[i],
        }
        if next.echelons[i].upstream.is_none() {
            next.echelons[i].incoming_shipment = orders[i];
        }
    }
    next.customer.orders = customer_demand;

    for (echelon, &order) in next.echelons.iter_mut().zip(orders) {
        echelon.pending_order = order;
    }

    let outcome = Propagation {
        customer_demand,
        shipped_to_customer: shipments[0],
        shipments,
        incoming_demand,
        received,
    };
    (next, outcome)
}
