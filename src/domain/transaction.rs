use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How the client paid.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PaymentChannel {
    Cash,
    Card,
}

impl fmt::Display for PaymentChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentChannel::Cash => write!(f, "cash"),
            PaymentChannel::Card => write!(f, "card"),
        }
    }
}

/// What the money was for. Records written without a category are services.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum EarningCategory {
    #[default]
    Service,
    Tip,
}

impl fmt::Display for EarningCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EarningCategory::Service => write!(f, "service"),
            EarningCategory::Tip => write!(f, "tip"),
        }
    }
}

/// A single logged earning. Never edited after creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    pub amount: f64,
    pub channel: PaymentChannel,
    #[serde(default)]
    pub category: EarningCategory,
    pub timestamp: DateTime<Utc>,
}

impl Transaction {
    pub fn new(
        amount: f64,
        channel: PaymentChannel,
        category: EarningCategory,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            channel,
            category,
            timestamp,
        }
    }

    /// Convenience constructor for a service paid at `timestamp`.
    pub fn service(amount: f64, channel: PaymentChannel, timestamp: DateTime<Utc>) -> Self {
        Self::new(amount, channel, EarningCategory::Service, timestamp)
    }

    /// Convenience constructor for a tip received at `timestamp`.
    pub fn tip(amount: f64, channel: PaymentChannel, timestamp: DateTime<Utc>) -> Self {
        Self::new(amount, channel, EarningCategory::Tip, timestamp)
    }

    pub fn is_tip(&self) -> bool {
        self.category == EarningCategory::Tip
    }
}
