//! Collaborator Interfaces
//!
//! Seams to the persistent word store and the embedding model. The engine
//! never performs I/O itself; implementations of these traits own it.

use crate::corpus::{PosFilter, WordRecord};
use crate::error::EngineError;

/// Durable table of word records, queried by exact word and by prefix
pub trait WordStore: Send + Sync {
    /// Fetch the full corpus for a snapshot build
    fn list_all_records(&self) -> Result<Vec<WordRecord>, EngineError>;

    /// Fetch a single record by exact, case-sensitive word
    fn get_record(&self, word: &str) -> Result<Option<WordRecord>, EngineError>;

    /// Fetch records whose word starts with `prefix`, filtered by POS,
    /// ordered ascending by word, truncated to `limit`
    fn find_by_prefix(
        &self,
        prefix: &str,
        pos: PosFilter,
        limit: usize,
    ) -> Result<Vec<WordRecord>, EngineError>;
}

/// Trained embedding model mapping tokens to fixed-dimension vectors
pub trait EmbeddingSource: Send + Sync {
    /// Embed a token, or report it as out of the model's reach with `None`
    fn embed(&self, token: &str) -> Result<Option<Vec<f32>>, EngineError>;
}
