//! Vector Store
//!
//! Holds the active corpus snapshot and publishes replacements atomically.
//! Readers clone the `Arc` and scan without coordination; in-flight
//! queries keep the old snapshot alive until they finish.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};
use tracing::info;

use crate::corpus::WordRecord;
use crate::error::EngineError;
use crate::vector::snapshot::{LoadReport, Snapshot};

/// Owner of the currently active corpus snapshot
#[derive(Debug)]
pub struct VectorStore {
    active: RwLock<Arc<Snapshot>>,
    next_version: AtomicU64,
}

impl Default for VectorStore {
    fn default() -> Self {
        Self::new()
    }
}

impl VectorStore {
    /// Create a store with an empty snapshot (version 0)
    pub fn new() -> Self {
        Self {
            active: RwLock::new(Arc::new(Snapshot::empty(0))),
            next_version: AtomicU64::new(1),
        }
    }

    /// Get the currently active snapshot
    pub fn current(&self) -> Arc<Snapshot> {
        self.active.read().unwrap().clone()
    }

    /// Build a snapshot from records and swap it in
    ///
    /// The replacement is built fully off to the side; a failed build
    /// leaves the active snapshot untouched.
    pub fn load(&self, records: Vec<WordRecord>) -> Result<LoadReport, EngineError> {
        let version = self.next_version.fetch_add(1, Ordering::Relaxed);
        let (snapshot, report) = Snapshot::build(version, records)?;

        *self.active.write().unwrap() = Arc::new(snapshot);
        info!(
            rows = report.loaded,
            version = report.version,
            "corpus snapshot published"
        );
        Ok(report)
    }
}
