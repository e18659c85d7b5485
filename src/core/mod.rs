pub mod forms;
pub mod services;
pub mod snapshot_manager;
pub mod utils;

pub use snapshot_manager::SnapshotManager;
