pub mod error;
pub mod io;
pub mod model;
pub mod simulation;
pub mod strategy;

pub use crate::error::{BeerGameError, Result};
pub use crate::io::demand::DemandGenerator;
pub use crate::model::agent::{AgentRole, Echelon, NUM_AGENTS};
pub use crate::model::observation::{Observation, RenderSnapshot};
pub use crate::model::state::{Customer, SupplyChainState};
pub use crate::model::space::{Space, ACTION_SPACE, OBSERVATION_FIELD_SPACE};
pub use crate::simulation::config::{BeerGameConfig, HORIZON};
pub use crate::simulation::engine::{BeerGame, HistoryRecord, LastStep, StepOutcome};
pub use crate::simulation::propagation::{propagate, Propagation};
