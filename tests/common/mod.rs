#![allow(dead_code)]

use chair_ledger::{
    config::ConfigManager,
    core::SnapshotManager,
    domain::{
        Cadence, EarningCategory, Expense, Frequency, PaymentChannel, Snapshot, SnapshotCommand,
        Transaction,
    },
    storage::JsonStorage,
};
use chrono::{DateTime, Duration, FixedOffset, TimeZone, Utc};
use tempfile::TempDir;

/// Creates a manager and config manager rooted in a fresh temp directory.
/// The returned `TempDir` must outlive both.
pub fn setup_test_env() -> (TempDir, SnapshotManager, ConfigManager) {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    let storage = JsonStorage::new(Some(base.clone()), "test_ledger").expect("create json storage");
    let manager = SnapshotManager::open(Box::new(storage));
    let config = ConfigManager::with_base_dir(base);
    (temp, manager, config)
}

/// Three hours west of UTC, so local and UTC dates diverge in the evening.
pub fn zone() -> FixedOffset {
    FixedOffset::west_opt(3 * 3600).expect("valid offset")
}

/// Wednesday 2025-06-04 at 15:00 local.
pub fn wednesday_afternoon() -> DateTime<FixedOffset> {
    zone()
        .with_ymd_and_hms(2025, 6, 4, 15, 0, 0)
        .single()
        .expect("unambiguous local time")
}

pub fn local(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    zone()
        .with_ymd_and_hms(y, m, d, h, min, 0)
        .single()
        .expect("unambiguous local time")
        .with_timezone(&Utc)
}

pub fn earning(
    amount: f64,
    channel: PaymentChannel,
    category: EarningCategory,
    at: DateTime<Utc>,
) -> SnapshotCommand {
    SnapshotCommand::RecordTransaction(Transaction::new(amount, channel, category, at))
}

/// A weekly 1000 goal, 70/week rent plus 10/day supplies, and a few earnings
/// spread over the current and previous week.
pub fn sample_snapshot() -> Snapshot {
    Snapshot::new()
        .apply(SnapshotCommand::SetGoal {
            name: "Weekly target".into(),
            cadence: Cadence::Weekly,
            amount: 1000.0,
        })
        .apply(SnapshotCommand::AddExpense(Expense::new(
            "Rent",
            70.0,
            Frequency::Weekly,
        )))
        .apply(SnapshotCommand::AddExpense(Expense::new(
            "Supplies",
            10.0,
            Frequency::Daily,
        )))
        // Sunday of the previous week.
        .apply(earning(
            400.0,
            PaymentChannel::Card,
            EarningCategory::Service,
            local(2025, 6, 1, 12, 0),
        ))
        // Monday, the first day of the current week.
        .apply(earning(
            150.0,
            PaymentChannel::Cash,
            EarningCategory::Service,
            local(2025, 6, 2, 0, 0),
        ))
        // Tuesday evening local, already Wednesday in UTC.
        .apply(earning(
            20.0,
            PaymentChannel::Cash,
            EarningCategory::Tip,
            local(2025, 6, 3, 23, 30),
        ))
        // Wednesday morning.
        .apply(earning(
            60.0,
            PaymentChannel::Card,
            EarningCategory::Service,
            local(2025, 6, 4, 9, 0),
        ))
        .apply(earning(
            15.0,
            PaymentChannel::Cash,
            EarningCategory::Tip,
            local(2025, 6, 4, 9, 0) + Duration::minutes(45),
        ))
}
