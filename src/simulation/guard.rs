// src/simulation/guard.rs

use crate::error::{BeerGameError, Result};
use crate::model::space::ACTION_SPACE;

/// How an incoming action is routed once it passes the guard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Admission {
    /// A validated order for the agent whose turn it is.
    Turn(f64),
    /// The selected agent is already done; the action is ignored.
    DeadStep,
}

/// Checks performed before an action reaches the turn cycle.
///
/// Stepping before the first reset is an error. Actions for finished agents
/// are routed to the dead-step path without looking at their value. Live
/// actions must be finite and inside `ACTION_SPACE`.
pub fn admit(has_reset: bool, selected_done: bool, action: f64) -> Result<Admission> {
    if !has_reset {
        return Err(BeerGameError::ResetRequired("step"));
    }
    if selected_done {
        return Ok(Admission::DeadStep);
    }
    check_bounds(action)?;
    Ok(Admission::Turn(action))
}

pub fn check_bounds(action: f64) -> Result<()> {
    if ACTION_SPACE.contains(action) {
        Ok(())
    } else {
        Err(BeerGameError::ActionOutOfBounds {
            value: action,
            low: ACTION_SPACE.low,
            high: ACTION_SPACE.high,
        })
    }
}
