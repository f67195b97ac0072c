// src/simulation/engine.rs

use crate::error::{BeerGameError, Result};
use crate::io::demand::DemandGenerator;
use crate::model::agent::{AgentRole, NUM_AGENTS};
use crate::model::observation::{Observation, RenderSnapshot};
use crate::model::space::{self, Space, ACTION_SPACE};
use crate::model::state::SupplyChainState;
use crate::simulation::config::{BeerGameConfig, HORIZON};
use crate::simulation::guard::{self, Admission};
use crate::simulation::propagation::{propagate, Propagation};
use crate::simulation::reward;
use crate::simulation::scheduler::{TurnCursor, TurnPhase};
use log::{debug, info};
use serde::Serialize;

// We make this Serialize so we can write it to CSV later
#[derive(Debug, Clone, Serialize)]
pub struct HistoryRecord {
    pub week: u32,
    pub role: AgentRole,
    pub inventory: f64,
    pub backorder: f64,
    pub order_placed: f64,
    pub incoming_demand: f64,
    pub shipment_sent: f64,
    pub shipment_received: f64,
    pub cost: f64,
}

/// Result of a single `step` call.
#[derive(Debug, Clone, PartialEq)]
pub struct StepOutcome {
    /// `None` for a dead step taken after every agent has left.
    pub agent: Option<AgentRole>,
    pub reward: f64,
    /// Set when this action closed the week.
    pub propagation: Option<Propagation>,
    /// Week counter after the step.
    pub week: u32,
    pub terminated: bool,
    /// The agent was already done and the action was ignored.
    pub dead_step: bool,
}

/// What `last()` reports for the selected agent.
#[derive(Debug, Clone, PartialEq)]
pub struct LastStep {
    pub agent: AgentRole,
    pub observation: Option<Observation>,
    pub cumulative_reward: f64,
    pub terminated: bool,
    pub truncated: bool,
}

/// The episode controller.
///
/// Receives one order per call from whichever echelon's turn it is. When the
/// factory, last in the cycle, has ordered, the week is propagated and the
/// week counter advances. Each acting agent's reward is taken from the
/// levels current at the moment it acts, so only the factory's reward
/// reflects the propagation its own action triggered.
pub struct BeerGame {
    config: BeerGameConfig,
    demand: DemandGenerator,
    state: SupplyChainState,
    cursor: TurnCursor,
    has_reset: bool,

    // Agents still in the episode, chain order
    active: Vec<AgentRole>,
    selection: Option<AgentRole>,

    rewards: [f64; NUM_AGENTS],
    cumulative_rewards: [f64; NUM_AGENTS],
    terminations: [bool; NUM_AGENTS],
    truncations: [bool; NUM_AGENTS],

    pub history: Vec<HistoryRecord>,
}

impl BeerGame {
    pub fn new(config: BeerGameConfig) -> Result<Self> {
        config.validate()?;
        let demand = DemandGenerator::new(config.base_demand, config.seed);
        let state = SupplyChainState::initial(&config);

        Ok(Self {
            config,
            demand,
            state,
            cursor: TurnCursor::new(),
            has_reset: false,
            active: Vec::new(),
            selection: None,
            rewards: [0.0; NUM_AGENTS],
            cumulative_rewards: [0.0; NUM_AGENTS],
            terminations: [false; NUM_AGENTS],
            truncations: [false; NUM_AGENTS],
            history: Vec::new(),
        })
    }

    /// Starts a new episode and returns the retailer's observation.
    ///
    /// A `seed` re-seeds the demand process; otherwise it continues from
    /// wherever the previous episode left it.
    pub fn reset(&mut self, seed: Option<u64>) -> Observation {
        if let Some(seed) = seed {
            self.demand.reseed(seed);
        }

        self.state = SupplyChainState::initial(&self.config);
        self.cursor.reset();
        self.has_reset = true;
        self.active = AgentRole::ALL.to_vec();
        self.selection = Some(self.cursor.current());
        self.rewards = [0.0; NUM_AGENTS];
        self.cumulative_rewards = [0.0; NUM_AGENTS];
        self.terminations = [false; NUM_AGENTS];
        self.truncations = [false; NUM_AGENTS];
        self.history.clear();

        info!(
            "Episode reset: base demand {:.1}, horizon {} weeks",
            self.demand.base_demand(),
            HORIZON
        );
        Observation::of(&self.state, AgentRole::Retailer)
    }

    /// Submits the selected agent's order.
    pub fn step(&mut self, action: f64) -> Result<StepOutcome> {
        let selected_done = self
            .selection
            .map(|role| self.is_done(role))
            .unwrap_or(true);

        match guard::admit(self.has_reset, selected_done, action)? {
            Admission::DeadStep => Ok(self.dead_step()),
            Admission::Turn(order) => Ok(self.take_turn(order)),
        }
    }

    fn take_turn(&mut self, order: f64) -> StepOutcome {
        let role = self.cursor.current();
        self.state.echelon_mut(role).pending_order = order;

        let propagation = match self.cursor.phase_after_action() {
            TurnPhase::WeekBoundary => Some(self.close_week()),
            TurnPhase::AwaitingAction(_) => None,
        };

        let idx = role.index();
        let step_reward = reward::reward(role, &self.state);
        self.rewards[idx] = step_reward;
        self.cumulative_rewards[idx] = 0.0;

        self.selection = Some(self.cursor.advance());
        for (total, r) in self.cumulative_rewards.iter_mut().zip(self.rewards) {
            *total += r;
        }

        StepOutcome {
            agent: Some(role),
            reward: step_reward,
            propagation,
            week: self.state.week,
            terminated: self.terminations[idx],
            dead_step: false,
        }
    }

    fn close_week(&mut self) -> Propagation {
        let orders: [f64; NUM_AGENTS] =
            std::array::from_fn(|i| self.state.echelons[i].pending_order);
        let customer_demand = self.demand.generate(self.state.week);

        let (next, outcome) = propagate(&self.state, &orders, customer_demand);
        self.state = next;
        self.state.week += 1;
        self.record_history(&outcome);

        debug!(
            "Week {}: demand {:.2}, shipped to customer {:.2}, inventory {:?}, backorder {:?}",
            self.state.week,
            outcome.customer_demand,
            outcome.shipped_to_customer,
            self.state.echelons.iter().map(|e| e.inventory).collect::<Vec<_>>(),
            self.state.echelons.iter().map(|e| e.backorder).collect::<Vec<_>>(),
        );

        if self.state.week >= HORIZON {
            self.terminations = [true; NUM_AGENTS];
            info!(
                "Episode finished after {} weeks, {:.1} beers delivered",
                self.state.week, self.state.total_beers
            );
        }
        outcome
    }

    /// Drops the selected, already finished agent from the roster.
    fn dead_step(&mut self) -> StepOutcome {
        let role = self.selection;
        if let Some(role) = role {
            self.active.retain(|&a| a != role);
            self.rewards[role.index()] = 0.0;
            debug!("Dead step for {role}; {} agents left", self.active.len());
        }
        for a in &self.active {
            self.rewards[a.index()] = 0.0;
        }
        self.selection = self.active.iter().copied().find(|&a| self.is_done(a));

        StepOutcome {
            agent: role,
            reward: 0.0,
            propagation: None,
            week: self.state.week,
            terminated: true,
            dead_step: true,
        }
    }

    fn is_done(&self, role: AgentRole) -> bool {
        self.terminations[role.index()] || self.truncations[role.index()]
    }

    fn record_history(&mut self, outcome: &Propagation) {
        for (i, e) in self.state.echelons.iter().enumerate() {
            self.history.push(HistoryRecord {
                week: self.state.week,
                role: e.role,
                inventory: e.inventory,
                backorder: e.backorder,
                order_placed: e.pending_order,
                incoming_demand: outcome.incoming_demand[i],
                shipment_sent: outcome.shipments[i],
                shipment_received: outcome.received[i],
                cost: e.current_cost(),
            });
        }
    }

    /// Observation for `role`, or `None` once it has left the roster.
    pub fn observe(&self, role: AgentRole) -> Result<Option<Observation>> {
        if !self.has_reset {
            return Err(BeerGameError::ResetRequired("observe"));
        }
        if !self.active.contains(&role) {
            return Ok(None);
        }
        Ok(Some(Observation::of(&self.state, role)))
    }

    /// Observation, cumulative reward and flags for the selected agent.
    pub fn last(&self) -> Result<Option<LastStep>> {
        if !self.has_reset {
            return Err(BeerGameError::ResetRequired("last"));
        }
        let Some(role) = self.selection else {
            return Ok(None);
        };
        let idx = role.index();
        Ok(Some(LastStep {
            agent: role,
            observation: self.observe(role)?,
            cumulative_reward: self.cumulative_rewards[idx],
            terminated: self.terminations[idx],
            truncated: self.truncations[idx],
        }))
    }

    /// Bounds of the single order `role` submits per turn.
    pub fn action_space(&self, _role: AgentRole) -> Space {
        ACTION_SPACE
    }

    /// Named bounds of every field in `role`'s observation.
    pub fn observation_space(&self, _role: AgentRole) -> [(&'static str, Space); 6] {
        space::observation_space()
    }

    pub fn render(&self) -> Result<RenderSnapshot> {
        if !self.has_reset {
            return Err(BeerGameError::ResetRequired("render"));
        }
        Ok(RenderSnapshot::of(&self.state))
    }

    pub fn agent_selection(&self) -> Option<AgentRole> {
        self.selection
    }

    pub fn agents(&self) -> &[AgentRole] {
        &self.active
    }

    pub fn week(&self) -> u32 {
        self.state.week
    }

    pub fn state(&self) -> &SupplyChainState {
        &self.state
    }

    pub fn config(&self) -> &BeerGameConfig {
        &self.config
    }

    pub fn reward(&self, role: AgentRole) -> f64 {
        self.rewards[role.index()]
    }

    pub fn cumulative_reward(&self, role: AgentRole) -> f64 {
        self.cumulative_rewards[role.index()]
    }

    pub fn terminated(&self, role: AgentRole) -> bool {
        self.terminations[role.index()]
    }

    pub fn truncated(&self, role: AgentRole) -> bool {
        self.truncations[role.index()]
    }

    /// True once every agent is done.
    pub fn is_over(&self) -> bool {
        self.has_reset && AgentRole::ALL.iter().all(|&r| self.is_done(r))
    }

    /// Calculate the total cost for a specific agent across all weeks
    pub fn total_cost_for_agent(&self, role: AgentRole) -> f64 {
        self.history
            .iter()
            .filter(|record| record.role == role)
            .map(|record| record.cost)
            .sum()
    }

    /// Calculate the total cost for the entire supply chain across all weeks
    pub fn total_supply_chain_cost(&self) -> f64 {
        self.history.iter().map(|record| record.cost).sum()
    }

    /// Calculate the cost breakdown by stage
    pub fn cost_breakdown(&self) -> Vec<(AgentRole, f64)> {
        AgentRole::ALL
            .iter()
            .map(|&role| (role, self.total_cost_for_agent(role)))
            .collect()
    }
}
