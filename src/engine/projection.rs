//! Goal progress and the daily pace needed to close the gap.

use serde::{Deserialize, Serialize};

/// Where the operator stands against the goal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    InProgress,
    /// Nothing left to earn this period.
    Crushed,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GoalProjection {
    pub progress_percent: f64,
    pub remaining: f64,
    pub units_needed_total: f64,
    pub units_needed_per_day: u32,
    pub status: GoalStatus,
}

impl GoalProjection {
    pub fn is_crushed(&self) -> bool {
        self.status == GoalStatus::Crushed
    }
}

/// Projects progress for `period_total` earned against `goal_amount`.
///
/// A goal amount of zero or less counts as met, and a `days_remaining` of zero is
/// treated as one day.
pub fn project(
    period_total: f64,
    goal_amount: f64,
    days_remaining: u32,
    average_unit_price: f64,
) -> GoalProjection {
    if goal_amount <= 0.0 {
        return GoalProjection {
            progress_percent: 100.0,
            remaining: 0.0,
            units_needed_total: 0.0,
            units_needed_per_day: 0,
            status: GoalStatus::Crushed,
        };
    }

    let progress_percent = (period_total / goal_amount * 100.0).clamp(0.0, 100.0);
    let remaining = (goal_amount - period_total).max(0.0);
    if remaining <= 0.0 {
        return GoalProjection {
            progress_percent,
            remaining: 0.0,
            units_needed_total: 0.0,
            units_needed_per_day: 0,
            status: GoalStatus::Crushed,
        };
    }

    let units_needed_total = if average_unit_price > 0.0 {
        remaining / average_unit_price
    } else {
        0.0
    };
    let days = days_remaining.max(1) as f64;
    let units_needed_per_day = (units_needed_total / days).ceil().max(0.0) as u32;

    GoalProjection {
        progress_percent,
        remaining,
        units_needed_total,
        units_needed_per_day,
        status: GoalStatus::InProgress,
    }
}
