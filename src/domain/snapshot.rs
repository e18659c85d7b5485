//! The persisted aggregate root and its pure state transitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{
    expense::Expense,
    goal::{Cadence, Goal, MAX_SIMULATOR_INCREMENT},
    transaction::Transaction,
};

pub const CURRENT_SCHEMA_VERSION: u8 = 1;

/// Everything the operator has recorded: goal, earnings log and fixed costs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Snapshot {
    #[serde(default)]
    pub goal: Option<Goal>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default = "Snapshot::schema_version_default")]
    pub schema_version: u8,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            goal: None,
            transactions: Vec::new(),
            expenses: Vec::new(),
            schema_version: CURRENT_SCHEMA_VERSION,
        }
    }
}

/// A single state transition requested by the owning collaborator.
#[derive(Debug, Clone, PartialEq)]
pub enum SnapshotCommand {
    RecordTransaction(Transaction),
    AddExpense(Expense),
    RemoveExpense(Uuid),
    /// Creates the goal, or replaces its fields while keeping the slider.
    SetGoal {
        name: String,
        cadence: Cadence,
        amount: f64,
    },
    SetSimulatorIncrement(u8),
    /// Drops every transaction stamped at or after `since`.
    ResetToday {
        since: DateTime<Utc>,
    },
    ResetAll,
}

impl SnapshotCommand {
    pub fn label(&self) -> &'static str {
        match self {
            SnapshotCommand::RecordTransaction(_) => "record_transaction",
            SnapshotCommand::AddExpense(_) => "add_expense",
            SnapshotCommand::RemoveExpense(_) => "remove_expense",
            SnapshotCommand::SetGoal { .. } => "set_goal",
            SnapshotCommand::SetSimulatorIncrement(_) => "set_simulator_increment",
            SnapshotCommand::ResetToday { .. } => "reset_today",
            SnapshotCommand::ResetAll => "reset_all",
        }
    }
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Onboarding is complete once a goal exists.
    pub fn is_onboarded(&self) -> bool {
        self.goal.is_some()
    }

    pub fn expense(&self, id: Uuid) -> Option<&Expense> {
        self.expenses.iter().find(|expense| expense.id == id)
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    /// Returns the snapshot that results from `command`; `self` is consumed.
    pub fn apply(mut self, command: SnapshotCommand) -> Snapshot {
        match command {
            SnapshotCommand::RecordTransaction(transaction) => {
                self.transactions.push(transaction);
            }
            SnapshotCommand::AddExpense(expense) => {
                self.expenses.push(expense);
            }
            SnapshotCommand::RemoveExpense(id) => {
                self.expenses.retain(|expense| expense.id != id);
            }
            SnapshotCommand::SetGoal {
                name,
                cadence,
                amount,
            } => {
                let increment = self
                    .goal
                    .as_ref()
                    .map(|goal| goal.simulator_increment)
                    .unwrap_or(0);
                self.goal =
                    Some(Goal::new(name, cadence, amount).with_simulator_increment(increment));
            }
            SnapshotCommand::SetSimulatorIncrement(increment) => {
                if let Some(goal) = self.goal.as_mut() {
                    goal.simulator_increment = increment.min(MAX_SIMULATOR_INCREMENT);
                }
            }
            SnapshotCommand::ResetToday { since } => {
                self.transactions.retain(|txn| txn.timestamp < since);
            }
            SnapshotCommand::ResetAll => return Snapshot::default(),
        }
        self
    }

    pub fn schema_version_default() -> u8 {
        CURRENT_SCHEMA_VERSION
    }
}
