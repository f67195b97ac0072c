// src/simulation/scheduler.rs

use crate::model::agent::{AgentRole, NUM_AGENTS};

/// Where the weekly cycle stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    AwaitingAction(AgentRole),
    /// The last agent has acted; the week must be propagated.
    WeekBoundary,
}

/// Cycles once through the four echelons per week, retailer first.
#[derive(Debug, Clone, Default)]
pub struct TurnCursor {
    position: usize,
}

impl TurnCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> AgentRole {
        AgentRole::ALL[self.position]
    }

    pub fn is_last(&self) -> bool {
        self.position + 1 == NUM_AGENTS
    }

    /// Phase entered once the current agent has acted.
    pub fn phase_after_action(&self) -> TurnPhase {
        if self.is_last() {
            TurnPhase::WeekBoundary
        } else {
            TurnPhase::AwaitingAction(AgentRole::ALL[self.position + 1])
        }
    }

    /// Moves to the next agent, wrapping to the retailer after the factory.
    pub fn advance(&mut self) -> AgentRole {
        self.position = (self.position + 1) % NUM_AGENTS;
        self.current()
    }

    pub fn reset(&mut self) {
        self.position = 0;
    }
}
