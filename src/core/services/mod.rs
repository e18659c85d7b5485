pub mod snapshot_service;
pub mod summary_service;

pub use snapshot_service::SnapshotService;
pub use summary_service::{
    BurnView, Dashboard, GoalProgress, SimulatorView, SummaryService, TodayTotals,
};

use crate::core::forms::ValidationError;
use crate::errors::LedgerError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("{0}")]
    Invalid(String),
}

impl From<ValidationError> for ServiceError {
    fn from(err: ValidationError) -> Self {
        ServiceError::Invalid(err.to_string())
    }
}
