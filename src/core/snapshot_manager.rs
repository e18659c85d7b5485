use tracing::{info, warn};

use crate::{
    domain::{Snapshot, SnapshotCommand},
    errors::LedgerError,
    storage::{LoadStatus, StorageBackend},
};

/// Owns the current snapshot and is the only writer to storage.
pub struct SnapshotManager {
    current: Snapshot,
    last_load: LoadStatus,
    storage: Box<dyn StorageBackend>,
}

impl SnapshotManager {
    /// Loads the record from `storage`; unusable records start empty.
    pub fn open(storage: Box<dyn StorageBackend>) -> Self {
        let report = storage.load();
        if let LoadStatus::Recovered { reason } = &report.status {
            warn!(%reason, "starting from an empty snapshot");
        }
        Self {
            current: report.snapshot,
            last_load: report.status,
            storage,
        }
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.current
    }

    pub fn load_status(&self) -> &LoadStatus {
        &self.last_load
    }

    /// Computes the next snapshot, persists it, then swaps it in. A failed save
    /// leaves the current snapshot untouched.
    pub fn apply(&mut self, command: SnapshotCommand) -> Result<&Snapshot, LedgerError> {
        let label = command.label();
        let next = self.current.clone().apply(command);
        self.storage.save(&next)?;
        info!(
            command = label,
            transactions = next.transactions.len(),
            expenses = next.expenses.len(),
            onboarded = next.is_onboarded(),
            "snapshot updated"
        );
        self.current = next;
        Ok(&self.current)
    }

    /// Re-reads the record, discarding the in-memory snapshot.
    pub fn reload(&mut self) -> &LoadStatus {
        let report = self.storage.load();
        self.current = report.snapshot;
        self.last_load = report.status;
        &self.last_load
    }
}
