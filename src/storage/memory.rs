use std::sync::Mutex;

use tracing::warn;

use crate::{domain::Snapshot, errors::Result};

use super::{decode_record, encode_record, LoadReport, StorageBackend};

/// Keeps the encoded record in memory. Goes through the same encode/decode path
/// as [`super::JsonStorage`].
#[derive(Debug, Default)]
pub struct MemoryStorage {
    record: Mutex<Option<String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the backend with raw record text, valid or not.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            record: Mutex::new(Some(raw.into())),
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.record
            .lock()
            .map(|record| record.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }
}

impl StorageBackend for MemoryStorage {
    fn load(&self) -> LoadReport {
        match self.raw() {
            None => LoadReport::missing(),
            Some(data) => match decode_record(&data) {
                Ok(snapshot) => LoadReport::loaded(snapshot),
                Err(err) => {
                    warn!(error = %err, "in-memory record malformed, starting empty");
                    LoadReport::recovered(err.to_string())
                }
            },
        }
    }

    fn save(&self, snapshot: &Snapshot) -> Result<()> {
        let json = encode_record(snapshot)?;
        let mut record = self
            .record
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *record = Some(json);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::LoadStatus;

    #[test]
    fn empty_backend_reports_missing() {
        assert_eq!(MemoryStorage::new().load().status, LoadStatus::Missing);
    }

    #[test]
    fn garbage_record_degrades_to_empty() {
        let storage = MemoryStorage::with_raw("not json at all");
        let report = storage.load();
        assert!(report.is_recovered());
        assert!(report.snapshot.transactions.is_empty());
    }

    #[test]
    fn save_replaces_raw_record() {
        let storage = MemoryStorage::with_raw("garbage");
        storage.save(&Snapshot::default()).unwrap();
        assert_eq!(storage.load().status, LoadStatus::Loaded);
    }
}
