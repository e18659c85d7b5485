//! Window filtering, sums and per-day history folds over the earnings log.

use std::collections::BTreeMap;

use chrono::{NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};

use crate::domain::{EarningCategory, TimeWindow, Transaction};

/// Transactions stamped inside `window`, in log order.
pub fn in_window<'a>(
    transactions: &'a [Transaction],
    window: &'a TimeWindow,
) -> impl Iterator<Item = &'a Transaction> + 'a {
    transactions
        .iter()
        .filter(move |txn| window.contains(txn.timestamp))
}

/// Sums amounts inside `window` that also satisfy `predicate`.
pub fn sum_matching<F>(transactions: &[Transaction], window: &TimeWindow, predicate: F) -> f64
where
    F: Fn(&Transaction) -> bool,
{
    in_window(transactions, window)
        .filter(|txn| predicate(txn))
        .map(|txn| txn.amount)
        .sum()
}

/// Sums amounts inside `window`, optionally restricted to one category.
pub fn sum_in_window(
    transactions: &[Transaction],
    window: &TimeWindow,
    category: Option<EarningCategory>,
) -> f64 {
    sum_matching(transactions, window, |txn| {
        category.map_or(true, |wanted| txn.category == wanted)
    })
}

pub fn count_in_window(transactions: &[Transaction], window: &TimeWindow) -> usize {
    in_window(transactions, window).count()
}

/// Earnings of one local calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySummary {
    pub day: NaiveDate,
    pub total: f64,
    pub count: usize,
}

impl DaySummary {
    pub fn day_key(&self) -> String {
        self.day.format("%Y-%m-%d").to_string()
    }
}

/// One entry per local calendar day present in the log, most recent first.
pub fn group_by_calendar_day<Tz: TimeZone>(transactions: &[Transaction], zone: &Tz) -> Vec<DaySummary> {
    let days = transactions.iter().fold(
        BTreeMap::<NaiveDate, (f64, usize)>::new(),
        |mut days, txn| {
            let day = txn.timestamp.with_timezone(zone).date_naive();
            let entry = days.entry(day).or_insert((0.0, 0));
            entry.0 += txn.amount;
            entry.1 += 1;
            days
        },
    );

    days.into_iter()
        .rev()
        .map(|(day, (total, count))| DaySummary { day, total, count })
        .collect()
}
