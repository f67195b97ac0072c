// src/simulation/config.rs

use crate::error::{BeerGameError, Result};
use crate::model::agent::{AgentRole, NUM_AGENTS};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Episode length in weeks. Not configurable.
pub const HORIZON: u32 = 52;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BeerGameConfig {
    pub holding_cost: [f64; NUM_AGENTS],
    pub backorder_cost: [f64; NUM_AGENTS],
    pub init_inv_level: [f64; NUM_AGENTS],
    pub init_orders: [f64; NUM_AGENTS],
    pub init_shipments: [f64; NUM_AGENTS],
    /// Reserved. The engine does not read it; drivers may share extra
    /// context with their policies when it is set.
    pub info_sharing: bool,
    pub base_demand: f64,
    /// Seed for the demand process. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for BeerGameConfig {
    fn default() -> Self {
        Self {
            holding_cost: [1.0; NUM_AGENTS],
            backorder_cost: [2.0; NUM_AGENTS],
            init_inv_level: [12.0; NUM_AGENTS],
            init_orders: [0.0; NUM_AGENTS],
            init_shipments: [4.0; NUM_AGENTS],
            info_sharing: false,
            base_demand: 8.0,
            seed: None,
        }
    }
}

impl BeerGameConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(s).map_err(|e| BeerGameError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| BeerGameError::ConfigIo {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&raw)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Every per-agent value must be finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        let vectors = [
            ("holding_cost", &self.holding_cost),
            ("backorder_cost", &self.backorder_cost),
            ("init_inv_level", &self.init_inv_level),
            ("init_orders", &self.init_orders),
            ("init_shipments", &self.init_shipments),
        ];
        for (name, values) in vectors {
            for role in AgentRole::ALL {
                let v = values[role.index()];
                if !v.is_finite() || v < 0.0 {
                    return Err(BeerGameError::InvalidConfig(format!(
                        "{name} for {role} must be a finite non-negative number, got {v}"
                    )));
                }
            }
        }
        if !self.base_demand.is_finite() || self.base_demand < 0.0 {
            return Err(BeerGameError::InvalidConfig(format!(
                "base_demand must be a finite non-negative number, got {}",
                self.base_demand
            )));
        }
        Ok(())
    }
}
