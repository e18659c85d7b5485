use serde::{Deserialize, Serialize};

pub const DEFAULT_ASSUMED_DAILY_VOLUME: f64 = 5.0;
pub const DEFAULT_WORKING_DAYS_PER_YEAR: f64 = 260.0;

/// Fixed volume assumptions behind the "what if I raise my price" slider.
/// They are not derived from the earnings log.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PriceAssumptions {
    pub assumed_daily_volume: f64,
    pub working_days_per_year: f64,
}

impl Default for PriceAssumptions {
    fn default() -> Self {
        Self {
            assumed_daily_volume: DEFAULT_ASSUMED_DAILY_VOLUME,
            working_days_per_year: DEFAULT_WORKING_DAYS_PER_YEAR,
        }
    }
}

impl PriceAssumptions {
    pub fn yearly_gain(&self, increment: f64) -> f64 {
        projected_yearly_gain(
            increment,
            self.assumed_daily_volume,
            self.working_days_per_year,
        )
    }
}

/// Extra yearly profit from charging `increment` more per unit.
pub fn projected_yearly_gain(
    increment: f64,
    assumed_daily_volume: f64,
    working_days_per_year: f64,
) -> f64 {
    increment * assumed_daily_volume * working_days_per_year
}
