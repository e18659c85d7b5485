pub mod expense;
pub mod goal;
pub mod snapshot;
pub mod transaction;
pub mod window;

pub use expense::{Expense, Frequency};
pub use goal::{Cadence, Goal, MAX_SIMULATOR_INCREMENT};
pub use snapshot::{Snapshot, SnapshotCommand, CURRENT_SCHEMA_VERSION};
pub use transaction::{EarningCategory, PaymentChannel, Transaction};
pub use window::TimeWindow;
