//! Turns validated form input into snapshot commands.

use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use crate::core::forms::{clamp_increment, EarningForm, ExpenseForm, GoalForm};
use crate::core::services::{ServiceError, ServiceResult};
use crate::domain::{Expense, Snapshot, SnapshotCommand, Transaction};
use crate::engine::period::midnight;

/// Builds commands for the owning collaborator to apply.
pub struct SnapshotService;

impl SnapshotService {
    /// Logs an earning stamped at `now`.
    pub fn record_earning<Tz: TimeZone>(
        form: &EarningForm,
        now: &DateTime<Tz>,
    ) -> ServiceResult<SnapshotCommand> {
        let earning = form.validate()?;
        let transaction = Transaction::new(
            earning.amount,
            earning.channel,
            earning.category,
            now.with_timezone(&Utc),
        );
        Ok(SnapshotCommand::RecordTransaction(transaction))
    }

    pub fn add_expense(form: &ExpenseForm) -> ServiceResult<SnapshotCommand> {
        let expense = form.validate()?;
        Ok(SnapshotCommand::AddExpense(Expense::new(
            expense.name,
            expense.amount,
            expense.frequency,
        )))
    }

    pub fn remove_expense(snapshot: &Snapshot, id: Uuid) -> ServiceResult<SnapshotCommand> {
        if snapshot.expense(id).is_none() {
            return Err(ServiceError::Invalid(format!("Expense {id} not found")));
        }
        Ok(SnapshotCommand::RemoveExpense(id))
    }

    pub fn set_goal(form: &GoalForm) -> ServiceResult<SnapshotCommand> {
        let goal = form.validate()?;
        Ok(SnapshotCommand::SetGoal {
            name: goal.name,
            cadence: goal.cadence,
            amount: goal.amount,
        })
    }

    /// The slider lives on the goal, so it needs a finished onboarding.
    pub fn set_simulator_increment(snapshot: &Snapshot, raw: i64) -> ServiceResult<SnapshotCommand> {
        if !snapshot.is_onboarded() {
            return Err(ServiceError::Invalid(
                "Set a goal before using the price simulator".into(),
            ));
        }
        Ok(SnapshotCommand::SetSimulatorIncrement(clamp_increment(raw)))
    }

    /// Drops everything logged since local midnight.
    pub fn reset_today<Tz: TimeZone>(now: &DateTime<Tz>) -> SnapshotCommand {
        SnapshotCommand::ResetToday {
            since: midnight(now).with_timezone(&Utc),
        }
    }

    pub fn reset_all() -> SnapshotCommand {
        SnapshotCommand::ResetAll
    }
}
