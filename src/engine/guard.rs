//! Collaborator Deadline Guard
//!
//! Word store and embedding source implementations may block on I/O.
//! Each call runs on a helper thread and is awaited over a bounded
//! crossbeam channel; expiry surfaces as a retryable error instead of a
//! hang.

use crossbeam::channel;
use std::thread;
use std::time::Duration;
use tracing::warn;

use crate::error::EngineError;

/// Run a collaborator call under a deadline
pub fn with_deadline<T, F>(timeout: Duration, label: &str, call: F) -> Result<T, EngineError>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, EngineError> + Send + 'static,
{
    let (tx, rx) = channel::bounded(1);
    thread::spawn(move || {
        // Receiver may be gone if the deadline already expired
        let _ = tx.send(call());
    });

    match rx.recv_timeout(timeout) {
        Ok(result) => result,
        Err(_) => {
            warn!(call = label, timeout = ?timeout, "collaborator call timed out");
            Err(EngineError::SourceUnavailable(format!(
                "{} timed out after {:?}",
                label, timeout
            )))
        }
    }
}
