use std::{
    fs, io,
    path::{Path, PathBuf},
};

use tracing::{debug, warn};

use crate::{
    core::utils::{ensure_dir, write_atomic, PathResolver},
    domain::Snapshot,
    errors::Result,
};

use super::{decode_record, encode_record, LoadReport, StorageBackend};

const QUARANTINE_SUFFIX: &str = "corrupt";

/// Stores the snapshot as `<root>/<record>.json`.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    record_path: PathBuf,
}

impl JsonStorage {
    pub fn new(root: Option<PathBuf>, record: &str) -> Result<Self> {
        let root = PathResolver::resolve_base(root);
        ensure_dir(&root)?;
        let record_path = PathResolver::record_file_in(&root, record);
        Ok(Self { record_path })
    }

    pub fn record_path(&self) -> &Path {
        &self.record_path
    }

    /// Where an unreadable record is moved aside before it is replaced.
    pub fn quarantine_path(&self) -> PathBuf {
        let mut path = self.record_path.clone().into_os_string();
        path.push(".");
        path.push(QUARANTINE_SUFFIX);
        PathBuf::from(path)
    }

    fn quarantine(&self) {
        let target = self.quarantine_path();
        if let Err(err) = fs::copy(&self.record_path, &target) {
            warn!(
                path = %self.record_path.display(),
                error = %err,
                "could not preserve unreadable record"
            );
        }
    }
}

impl StorageBackend for JsonStorage {
    fn load(&self) -> LoadReport {
        let data = match fs::read_to_string(&self.record_path) {
            Ok(data) => data,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.record_path.display(), "no record yet, starting empty");
                return LoadReport::missing();
            }
            Err(err) => {
                warn!(
                    path = %self.record_path.display(),
                    error = %err,
                    "record unreadable, starting empty"
                );
                return LoadReport::recovered(err.to_string());
            }
        };

        match decode_record(&data) {
            Ok(snapshot) => {
                debug!(
                    path = %self.record_path.display(),
                    transactions = snapshot.transactions.len(),
                    expenses = snapshot.expenses.len(),
                    "record loaded"
                );
                LoadReport::loaded(snapshot)
            }
            Err(err) => {
                warn!(
                    path = %self.record_path.display(),
                    error = %err,
                    "record malformed, starting empty"
                );
                self.quarantine();
                LoadReport::recovered(err.to_string())
            }
        }
    }

    fn save(&self, snapshot: &Snapshot) -> Result<()> {
        let json = encode_record(snapshot)?;
        write_atomic(&self.record_path, &json)?;
        debug!(
            path = %self.record_path.display(),
            transactions = snapshot.transactions.len(),
            "record saved"
        );
        Ok(())
    }
}
