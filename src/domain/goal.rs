use std::fmt;

use serde::{Deserialize, Serialize};

/// Upper bound of the price simulator slider.
pub const MAX_SIMULATOR_INCREMENT: u8 = 20;

/// Evaluation window of the earnings goal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Cadence {
    Weekly,
    Monthly,
}

impl fmt::Display for Cadence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cadence::Weekly => write!(f, "weekly"),
            Cadence::Monthly => write!(f, "monthly"),
        }
    }
}

/// The operator's single earnings target.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Goal {
    pub name: String,
    pub cadence: Cadence,
    pub amount: f64,
    /// Last position of the price simulator slider; kept for the UI only.
    #[serde(default)]
    pub simulator_increment: u8,
}

impl Goal {
    pub fn new(name: impl Into<String>, cadence: Cadence, amount: f64) -> Self {
        Self {
            name: name.into(),
            cadence,
            amount,
            simulator_increment: 0,
        }
    }

    pub fn with_simulator_increment(mut self, increment: u8) -> Self {
        self.simulator_increment = increment.min(MAX_SIMULATOR_INCREMENT);
        self
    }
}
