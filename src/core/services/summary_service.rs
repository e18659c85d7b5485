use chrono::{DateTime, NaiveDate, TimeZone};
use serde::Serialize;

use crate::config::Config;
use crate::domain::{Cadence, EarningCategory, PaymentChannel, Snapshot};
use crate::engine::{
    aggregate::{count_in_window, group_by_calendar_day, sum_in_window, sum_matching, DaySummary},
    burn::{burn_display, daily_equivalent, net, net_display},
    period::{days_remaining, period_window, start_of_period, today_window},
    projection::{project, GoalProjection},
};

/// Earnings since local midnight.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TodayTotals {
    pub gross: f64,
    pub services: f64,
    pub tips: f64,
    pub cash: f64,
    pub card: f64,
    pub count: usize,
}

/// Fixed-cost burn and today's net, raw and as displayed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BurnView {
    pub daily_burn: f64,
    pub burn_display: i64,
    pub net_today: f64,
    pub net_display: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalProgress {
    pub name: String,
    pub cadence: Cadence,
    pub amount: f64,
    pub period_start: NaiveDate,
    pub days_remaining: u32,
    pub period_total: f64,
    pub projection: GoalProjection,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulatorView {
    pub increment: u8,
    pub yearly_gain: f64,
}

/// Everything the home screen renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub today: TodayTotals,
    pub burn: BurnView,
    pub goal: Option<GoalProgress>,
    pub simulator: Option<SimulatorView>,
}

pub struct SummaryService;

impl SummaryService {
    pub fn today<Tz: TimeZone>(snapshot: &Snapshot, now: &DateTime<Tz>) -> TodayTotals {
        let window = today_window(now);
        let transactions = &snapshot.transactions;
        TodayTotals {
            gross: sum_in_window(transactions, &window, None),
            services: sum_in_window(transactions, &window, Some(EarningCategory::Service)),
            tips: sum_in_window(transactions, &window, Some(EarningCategory::Tip)),
            cash: sum_matching(transactions, &window, |txn| {
                txn.channel == PaymentChannel::Cash
            }),
            card: sum_matching(transactions, &window, |txn| {
                txn.channel == PaymentChannel::Card
            }),
            count: count_in_window(transactions, &window),
        }
    }

    pub fn burn(snapshot: &Snapshot, gross_today: f64) -> BurnView {
        let daily_burn = daily_equivalent(&snapshot.expenses);
        let net_today = net(gross_today, daily_burn);
        BurnView {
            daily_burn,
            burn_display: burn_display(daily_burn),
            net_today,
            net_display: net_display(net_today),
        }
    }

    /// `None` until onboarding has set a goal.
    pub fn goal_progress<Tz: TimeZone>(
        snapshot: &Snapshot,
        now: &DateTime<Tz>,
        config: &Config,
    ) -> Option<GoalProgress> {
        let goal = snapshot.goal.as_ref()?;
        let window = period_window(now, goal.cadence);
        let period_total = sum_in_window(&snapshot.transactions, &window, None);
        let days_left = days_remaining(now, goal.cadence);
        Some(GoalProgress {
            name: goal.name.clone(),
            cadence: goal.cadence,
            amount: goal.amount,
            period_start: start_of_period(now, goal.cadence).date_naive(),
            days_remaining: days_left,
            period_total,
            projection: project(
                period_total,
                goal.amount,
                days_left,
                config.average_unit_price,
            ),
        })
    }

    pub fn simulate(increment: u8, config: &Config) -> SimulatorView {
        SimulatorView {
            increment,
            yearly_gain: config.price_assumptions().yearly_gain(increment as f64),
        }
    }

    pub fn dashboard<Tz: TimeZone>(
        snapshot: &Snapshot,
        now: &DateTime<Tz>,
        config: &Config,
    ) -> Dashboard {
        let today = Self::today(snapshot, now);
        let burn = Self::burn(snapshot, today.gross);
        let goal = Self::goal_progress(snapshot, now, config);
        let simulator = snapshot
            .goal
            .as_ref()
            .map(|goal| Self::simulate(goal.simulator_increment, config));
        Dashboard {
            today,
            burn,
            goal,
            simulator,
        }
    }

    pub fn history<Tz: TimeZone>(snapshot: &Snapshot, zone: &Tz) -> Vec<DaySummary> {
        group_by_calendar_day(&snapshot.transactions, zone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Expense, Frequency, SnapshotCommand, Transaction};
    use chrono::{Duration, Utc};

    fn now() -> DateTime<Utc> {
        // Wednesday.
        Utc.with_ymd_and_hms(2025, 6, 4, 15, 0, 0).unwrap()
    }

    fn snapshot() -> Snapshot {
        let today_9 = Utc.with_ymd_and_hms(2025, 6, 4, 9, 0, 0).unwrap();
        Snapshot::new()
            .apply(SnapshotCommand::SetGoal {
                name: "Week".into(),
                cadence: Cadence::Weekly,
                amount: 1000.0,
            })
            .apply(SnapshotCommand::SetSimulatorIncrement(10))
            .apply(SnapshotCommand::AddExpense(Expense::new(
                "Rent",
                70.0,
                Frequency::Weekly,
            )))
            .apply(SnapshotCommand::RecordTransaction(Transaction::service(
                200.0,
                PaymentChannel::Card,
                today_9,
            )))
            .apply(SnapshotCommand::RecordTransaction(Transaction::tip(
                50.0,
                PaymentChannel::Cash,
                today_9 + Duration::hours(1),
            )))
            .apply(SnapshotCommand::RecordTransaction(Transaction::service(
                100.0,
                PaymentChannel::Cash,
                today_9 - Duration::days(1),
            )))
    }

    #[test]
    fn today_splits_by_category_and_channel() {
        let today = SummaryService::today(&snapshot(), &now());
        assert_eq!(today.gross, 250.0);
        assert_eq!(today.services, 200.0);
        assert_eq!(today.tips, 50.0);
        assert_eq!(today.cash, 50.0);
        assert_eq!(today.card, 200.0);
        assert_eq!(today.count, 2);
    }

    #[test]
    fn dashboard_combines_all_views() {
        let dashboard = SummaryService::dashboard(&snapshot(), &now(), &Config::default());
        assert_eq!(dashboard.burn.daily_burn, 10.0);
        assert_eq!(dashboard.burn.net_display, 240);

        let goal = dashboard.goal.expect("goal progress");
        assert_eq!(goal.period_start, NaiveDate::from_ymd_opt(2025, 6, 2).unwrap());
        assert_eq!(goal.days_remaining, 5);
        assert_eq!(goal.period_total, 350.0);
        assert_eq!(goal.projection.remaining, 650.0);
        // 650 / 35 = 18.57 units over 5 days.
        assert_eq!(goal.projection.units_needed_per_day, 4);

        let simulator = dashboard.simulator.expect("simulator");
        assert_eq!(simulator.yearly_gain, 13_000.0);
    }

    #[test]
    fn fresh_snapshot_has_no_goal_views() {
        let dashboard = SummaryService::dashboard(&Snapshot::new(), &now(), &Config::default());
        assert!(dashboard.goal.is_none());
        assert!(dashboard.simulator.is_none());
        assert_eq!(dashboard.today.gross, 0.0);
    }

    #[test]
    fn history_is_most_recent_first() {
        let history = SummaryService::history(&snapshot(), &Utc);
        let keys: Vec<_> = history.iter().map(DaySummary::day_key).collect();
        assert_eq!(keys, vec!["2025-06-04", "2025-06-03"]);
    }
}
