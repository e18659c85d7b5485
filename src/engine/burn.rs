use crate::domain::Expense;

/// Fixed costs expressed as one per-day figure on a 7-day week basis. Unrounded.
pub fn daily_equivalent(expenses: &[Expense]) -> f64 {
    expenses
        .iter()
        .map(|expense| expense.amount / expense.frequency.days())
        .sum()
}

/// `gross - burn`, left unrounded for the display helpers below.
pub fn net(gross: f64, daily_burn: f64) -> f64 {
    gross - daily_burn
}

/// Burn figure shown to the operator: rounded up.
pub fn burn_display(daily_burn: f64) -> i64 {
    daily_burn.ceil() as i64
}

/// Net figure shown to the operator: rounded down.
pub fn net_display(net: f64) -> i64 {
    net.floor() as i64
}
