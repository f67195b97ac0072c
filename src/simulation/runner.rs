// src/simulation/runner.rs

use crate::error::{BeerGameError, Result};
use crate::model::agent::NUM_AGENTS;
use crate::model::space::ACTION_SPACE;
use crate::simulation::engine::BeerGame;
use crate::strategy::traits::{OrderContext, OrderPolicy};
use log::info;

/// Per-agent totals for a finished episode.
#[derive(Debug, Clone, PartialEq)]
pub struct EpisodeSummary {
    pub weeks: u32,
    pub total_beers: f64,
    /// Sum of the per-step rewards each agent received.
    pub returns: [f64; NUM_AGENTS],
}

/// Plays one full episode, one policy per echelon in chain order.
///
/// Each policy's order is clamped into the action space before it is
/// submitted. The game is reset first, optionally with a new seed.
pub fn play_episode(
    game: &mut BeerGame,
    policies: &mut [Box<dyn OrderPolicy>],
    seed: Option<u64>,
) -> Result<EpisodeSummary> {
    if policies.len() != NUM_AGENTS {
        return Err(BeerGameError::InvalidConfig(format!(
            "expected {NUM_AGENTS} policies, got {}",
            policies.len()
        )));
    }

    game.reset(seed);
    let info_sharing = game.config().info_sharing;
    let mut returns = [0.0; NUM_AGENTS];

    while !game.is_over() {
        let Some(role) = game.agent_selection() else {
            break;
        };
        let Some(observation) = game.observe(role)? else {
            break;
        };
        let context = OrderContext::for_agent(game.state(), role, info_sharing);
        let order = ACTION_SPACE.clamp(policies[role.index()].decide(&observation, &context));

        let outcome = game.step(order)?;
        returns[role.index()] += outcome.reward;

        if outcome.propagation.is_some() && game.week() % 5 == 0 {
            let retailer = &game.state().echelons[0];
            info!(
                "Week {}: Retailer Inv: {:.1}, Backorder: {:.1}, Cost: {:.2}",
                game.week(),
                retailer.inventory,
                retailer.backorder,
                retailer.current_cost()
            );
        }
    }

    Ok(EpisodeSummary {
        weeks: game.week(),
        total_beers: game.state().total_beers,
        returns,
    })
}
