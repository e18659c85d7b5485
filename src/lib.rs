#![doc(test(attr(deny(warnings))))]

//! Chair Ledger turns a barber's earnings log and fixed costs into today's
//! gross and net, goal progress for the current week or month, the daily pace
//! still needed, and a price-increase simulation.
//!
//! The `engine` module is pure. `storage` and `core::SnapshotManager` own the
//! persisted snapshot; `core::services` bridges form input and view-models.

pub mod config;
pub mod core;
pub mod domain;
pub mod engine;
pub mod errors;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Chair Ledger tracing initialized.");
    });
}
