//! Recurring fixed costs (chair rent, supplies, subscriptions).

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Billing cadence of a recurring expense.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
}

impl Frequency {
    /// Number of days one billing cycle covers.
    pub fn days(&self) -> f64 {
        match self {
            Frequency::Daily => 1.0,
            Frequency::Weekly => 7.0,
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Frequency::Daily => write!(f, "daily"),
            Frequency::Weekly => write!(f, "weekly"),
        }
    }
}

/// A recurring cost. Replaced rather than edited.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub id: Uuid,
    pub name: String,
    pub amount: f64,
    pub frequency: Frequency,
}

impl Expense {
    pub fn new(name: impl Into<String>, amount: f64, frequency: Frequency) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            amount,
            frequency,
        }
    }
}
