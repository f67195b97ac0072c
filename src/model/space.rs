// src/model/space.rs

use serde::Serialize;

/// A closed box of scalars, `shape` elements wide.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Space {
    pub low: f64,
    pub high: f64,
    pub shape: [usize; 1],
}

impl Space {
    pub const fn scalar(low: f64, high: f64) -> Self {
        Self {
            low,
            high,
            shape: [1],
        }
    }

    /// Finite and inside `[low, high]`.
    pub fn contains(&self, value: f64) -> bool {
        value.is_finite() && (self.low..=self.high).contains(&value)
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.low, self.high)
    }
}

/// One order per turn.
pub const ACTION_SPACE: Space = Space::scalar(0.0, 50.0);

/// Bounds shared by every observation field.
pub const OBSERVATION_FIELD_SPACE: Space = Space::scalar(0.0, f64::INFINITY);

/// Observation fields, in `Observation` declaration order.
pub const OBSERVATION_FIELDS: [&str; 6] = [
    "inventory",
    "backorders",
    "orders",
    "incoming_shipments",
    "holding_cost",
    "backorder_cost",
];

/// Named space of every observation field.
pub fn observation_space() -> [(&'static str, Space); 6] {
    OBSERVATION_FIELDS.map(|name| (name, OBSERVATION_FIELD_SPACE))
}
