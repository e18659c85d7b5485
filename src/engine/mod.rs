//! Pure earnings computations over an immutable snapshot. No I/O, no state.

pub mod aggregate;
pub mod burn;
pub mod period;
pub mod price_simulator;
pub mod projection;

pub use aggregate::{
    count_in_window, group_by_calendar_day, in_window, sum_in_window, sum_matching, DaySummary,
};
pub use burn::daily_equivalent;
pub use period::{days_remaining, midnight, period_window, start_of_period, today_window};
pub use price_simulator::{projected_yearly_gain, PriceAssumptions};
pub use projection::{project, GoalProjection, GoalStatus};
