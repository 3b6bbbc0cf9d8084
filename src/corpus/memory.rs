//! In-Memory Collaborators
//!
//! DashMap-backed reference implementations of the word store and
//! embedding source. Used as test fixtures and for corpora small enough
//! to live entirely in memory.

use dashmap::DashMap;
use std::sync::Arc;

use crate::corpus::{EmbeddingSource, PosFilter, WordRecord, WordStore};
use crate::error::EngineError;

/// Lock-free in-memory word store
#[derive(Debug, Clone, Default)]
pub struct MemoryWordStore {
    inner: Arc<DashMap<String, WordRecord>>,
}

impl MemoryWordStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            inner: Arc::new(DashMap::new()),
        }
    }

    /// Insert or replace a record, keyed by its word
    pub fn insert(&self, record: WordRecord) {
        self.inner.insert(record.word.clone(), record);
    }

    /// Remove a record, returns true if it existed
    pub fn remove(&self, word: &str) -> bool {
        self.inner.remove(word).is_some()
    }

    /// Get the number of records
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Remove all records
    pub fn clear(&self) {
        self.inner.clear();
    }
}

impl WordStore for MemoryWordStore {
    fn list_all_records(&self) -> Result<Vec<WordRecord>, EngineError> {
        Ok(self.inner.iter().map(|r| r.value().clone()).collect())
    }

    fn get_record(&self, word: &str) -> Result<Option<WordRecord>, EngineError> {
        Ok(self.inner.get(word).map(|r| r.value().clone()))
    }

    fn find_by_prefix(
        &self,
        prefix: &str,
        pos: PosFilter,
        limit: usize,
    ) -> Result<Vec<WordRecord>, EngineError> {
        let mut matches: Vec<WordRecord> = self
            .inner
            .iter()
            .filter(|r| r.key().starts_with(prefix) && pos.admits(r.is_noun, r.is_verb))
            .map(|r| r.value().clone())
            .collect();

        matches.sort_by(|a, b| a.word.cmp(&b.word));
        matches.truncate(limit);
        Ok(matches)
    }
}

/// Embedding source backed by a fixed token -> vector table
#[derive(Debug, Clone, Default)]
pub struct StaticEmbedder {
    inner: Arc<DashMap<String, Vec<f32>>>,
}

impl StaticEmbedder {
    /// Create an empty embedder (every token is out of vocabulary)
    pub fn new() -> Self {
        Self {
            inner: Arc::new(DashMap::new()),
        }
    }

    /// Register a vector for a token
    pub fn insert(&self, token: impl Into<String>, vector: Vec<f32>) {
        self.inner.insert(token.into(), vector);
    }
}

impl EmbeddingSource for StaticEmbedder {
    fn embed(&self, token: &str) -> Result<Option<Vec<f32>>, EngineError> {
        Ok(self.inner.get(token).map(|v| v.value().clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        let store = MemoryWordStore::new();
        store.insert(WordRecord::new("dog", vec![1.0, 0.0]).noun());

        assert_eq!(store.len(), 1);
        let record = store.get_record("dog").unwrap().unwrap();
        assert!(record.is_noun);

        assert!(store.get_record("Dog").unwrap().is_none()); // case-sensitive
        assert!(store.remove("dog"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_list_all() {
        let store = MemoryWordStore::new();
        store.insert(WordRecord::new("dog", vec![1.0, 0.0]));
        store.insert(WordRecord::new("cat", vec![0.9, 0.1]));

        let records = store.list_all_records().unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_prefix_search() {
        let store = MemoryWordStore::new();
        store.insert(WordRecord::new("car", vec![0.0, 1.0]).noun());
        store.insert(WordRecord::new("carry", vec![0.1, 0.9]).verb());
        store.insert(WordRecord::new("cart", vec![0.0, 0.8]).noun());
        store.insert(WordRecord::new("dog", vec![1.0, 0.0]).noun());

        let all = store.find_by_prefix("car", PosFilter::Any, 10).unwrap();
        let words: Vec<&str> = all.iter().map(|r| r.word.as_str()).collect();
        assert_eq!(words, vec!["car", "carry", "cart"]);

        let nouns = store.find_by_prefix("car", PosFilter::Noun, 10).unwrap();
        let words: Vec<&str> = nouns.iter().map(|r| r.word.as_str()).collect();
        assert_eq!(words, vec!["car", "cart"]);

        let capped = store.find_by_prefix("car", PosFilter::Any, 2).unwrap();
        assert_eq!(capped.len(), 2);
    }

    #[test]
    fn test_static_embedder() {
        let embedder = StaticEmbedder::new();
        embedder.insert("dog", vec![1.0, 0.0]);

        assert_eq!(embedder.embed("dog").unwrap(), Some(vec![1.0, 0.0]));
        assert_eq!(embedder.embed("zyzzyva").unwrap(), None);
    }
}
