//! Engine Errors
//!
//! Failure taxonomy surfaced by the similarity engine.

use thiserror::Error;

/// Errors returned by the similarity engine
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// Corpus data failed validation during load or query resolution
    #[error("data integrity: {0}")]
    DataIntegrity(String),

    /// Query token absent from the corpus and not embeddable
    #[error("unknown word: {0}")]
    UnknownWord(String),

    /// Word store or embedding source failed or timed out; safe to retry
    #[error("source unavailable: {0}")]
    SourceUnavailable(String),
}
