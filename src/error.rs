// src/error.rs

use thiserror::Error;

/// Errors raised in front of the simulation core.
///
/// The core itself never fails once an action reaches it; everything here is
/// either a configuration problem or a rejected call from the outside.
#[derive(Debug, Error, PartialEq)]
pub enum BeerGameError {
    #[error("reset() must be called before {0}()")]
    ResetRequired(&'static str),

    #[error("order {value} is outside the action space [{low}, {high}]")]
    ActionOutOfBounds { value: f64, low: f64, high: f64 },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to read config file '{path}': {message}")]
    ConfigIo { path: String, message: String },

    #[error("failed to parse config: {0}")]
    ConfigParse(String),
}

pub type Result<T> = std::result::Result<T, BeerGameError>;
