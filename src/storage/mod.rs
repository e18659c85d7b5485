//! Persistence of the whole snapshot as one named JSON record.

pub mod json_backend;
pub mod memory;

use crate::{
    domain::{Snapshot, CURRENT_SCHEMA_VERSION},
    errors::{LedgerError, Result},
};

/// How a load resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Loaded,
    /// No record yet; first use.
    Missing,
    /// The record could not be used and an empty snapshot was substituted.
    Recovered { reason: String },
}

/// Outcome of a load: always carries a usable snapshot.
#[derive(Debug, Clone)]
pub struct LoadReport {
    pub snapshot: Snapshot,
    pub status: LoadStatus,
}

impl LoadReport {
    pub fn loaded(snapshot: Snapshot) -> Self {
        Self {
            snapshot,
            status: LoadStatus::Loaded,
        }
    }

    pub fn missing() -> Self {
        Self {
            snapshot: Snapshot::default(),
            status: LoadStatus::Missing,
        }
    }

    pub fn recovered(reason: impl Into<String>) -> Self {
        Self {
            snapshot: Snapshot::default(),
            status: LoadStatus::Recovered {
                reason: reason.into(),
            },
        }
    }

    pub fn is_recovered(&self) -> bool {
        matches!(self.status, LoadStatus::Recovered { .. })
    }
}

/// Abstraction over backends that hold the snapshot record.
pub trait StorageBackend: Send + Sync {
    /// Never fails: missing or unusable records degrade to an empty snapshot.
    fn load(&self) -> LoadReport;

    /// Replaces the whole record.
    fn save(&self, snapshot: &Snapshot) -> Result<()>;
}

/// Parses a stored record, rejecting schemas newer than this build understands.
pub fn decode_record(data: &str) -> Result<Snapshot> {
    let snapshot: Snapshot = serde_json::from_str(data)?;
    if snapshot.schema_version > CURRENT_SCHEMA_VERSION {
        return Err(LedgerError::Validation(format!(
            "record schema version {} is newer than supported version {}",
            snapshot.schema_version, CURRENT_SCHEMA_VERSION
        )));
    }
    Ok(snapshot)
}

pub fn encode_record(snapshot: &Snapshot) -> Result<String> {
    Ok(serde_json::to_string_pretty(snapshot)?)
}

pub use json_backend::JsonStorage;
pub use memory::MemoryStorage;
