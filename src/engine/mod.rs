//! Similarity Engine
//!
//! Resolves query tokens to vectors and serves ranked nearest-neighbor
//! queries over the active corpus snapshot.

mod guard;
mod query;

pub use query::QueryParams;

use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use crate::cache::{QueryKey, ResultCache};
use crate::config::EngineConfig;
use crate::corpus::{EmbeddingSource, WordRecord, WordStore};
use crate::error::EngineError;
use crate::metrics::Metrics;
use crate::vector::{rank, LoadReport, SimilarityResult, Snapshot, VectorStore};
use guard::with_deadline;

/// Snapshot and cache counters for diagnostics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineStats {
    /// Words in the active snapshot
    pub rows: usize,
    /// Corpus embedding dimension
    pub dim: usize,
    /// Active snapshot version
    pub version: u64,
    /// Entries in the result cache
    pub cached_queries: usize,
}

/// Word similarity engine
///
/// Owns the active corpus snapshot and the result cache; talks to the
/// persistent word store and the embedding model through trait objects.
/// Queries are synchronous and any number may run concurrently against
/// the same published snapshot.
pub struct SimilarityEngine {
    vectors: VectorStore,
    words: Arc<dyn WordStore>,
    embedder: Arc<dyn EmbeddingSource>,
    cache: ResultCache,
    metrics: Arc<Metrics>,
    config: EngineConfig,
}

impl SimilarityEngine {
    /// Create an engine with default configuration
    ///
    /// The corpus starts empty; call [`reload`](Self::reload) to populate
    /// it from the word store.
    pub fn new(words: Arc<dyn WordStore>, embedder: Arc<dyn EmbeddingSource>) -> Self {
        Self::with_config(words, embedder, EngineConfig::default())
    }

    /// Create an engine with custom configuration
    pub fn with_config(
        words: Arc<dyn WordStore>,
        embedder: Arc<dyn EmbeddingSource>,
        config: EngineConfig,
    ) -> Self {
        Self {
            vectors: VectorStore::new(),
            words,
            embedder,
            cache: ResultCache::new(config.cache_capacity),
            metrics: Arc::new(Metrics::new()),
            config,
        }
    }

    /// Rebuild the corpus snapshot from the word store
    ///
    /// Builds the replacement fully off to the side, swaps it in, then
    /// drops every cached result. In-flight queries finish against the
    /// old snapshot; version tagging keeps them out of the cache.
    pub fn reload(&self) -> Result<LoadReport, EngineError> {
        let start = Instant::now();
        let words = self.words.clone();
        let records =
            with_deadline(self.config.source_timeout, "word store list", move || {
                words.list_all_records()
            })?;

        let report = self.vectors.load(records)?;
        self.cache.clear();

        self.metrics.record_operation("reload", start.elapsed());
        info!(
            rows = report.loaded,
            skipped = report.skipped,
            version = report.version,
            "corpus reloaded"
        );
        Ok(report)
    }

    /// Find words semantically similar to `token`
    ///
    /// Results are ordered by descending score (ties broken by ascending
    /// word), never include the query word itself, and respect the POS
    /// filter, threshold and limit in `params`.
    pub fn find_similar(
        &self,
        token: &str,
        params: &QueryParams,
    ) -> Result<Vec<SimilarityResult>, EngineError> {
        let start = Instant::now();
        let snapshot = self.vectors.current();
        let limit = if params.limit == 0 {
            self.config.default_limit
        } else {
            params.limit
        };

        let key = QueryKey::new(token, params.pos, limit, params.min_similarity);
        if let Some(results) = self.cache.get(&key, snapshot.version()) {
            self.metrics.record_cache_hit();
            self.metrics.record_operation("find_similar", start.elapsed());
            return Ok(results);
        }
        self.metrics.record_cache_miss();

        let (target, exclude_row) = self.resolve(token, &snapshot)?;
        let results = rank(
            &target,
            &snapshot,
            params.pos,
            limit,
            params.min_similarity,
            exclude_row,
        )?;

        self.cache.insert(key, results.clone(), snapshot.version());
        self.metrics.record_operation("find_similar", start.elapsed());
        debug!(
            token = token,
            pos = params.pos.as_str(),
            results = results.len(),
            "similarity query served"
        );
        Ok(results)
    }

    /// Find similar words for several tokens
    ///
    /// Each token is resolved independently; one unknown word does not
    /// poison the batch.
    pub fn batch_find_similar(
        &self,
        tokens: &[&str],
        params: &QueryParams,
    ) -> Vec<(String, Result<Vec<SimilarityResult>, EngineError>)> {
        tokens
            .iter()
            .map(|token| (token.to_string(), self.find_similar(token, params)))
            .collect()
    }

    /// Fetch a word's record (snapshot first, then the word store)
    pub fn lookup(&self, token: &str) -> Result<Option<WordRecord>, EngineError> {
        let start = Instant::now();
        let snapshot = self.vectors.current();
        let record = match snapshot.record(token) {
            Some(record) => Some(record),
            None => {
                let words = self.words.clone();
                let token = token.to_string();
                with_deadline(self.config.source_timeout, "word store lookup", move || {
                    words.get_record(&token)
                })?
            }
        };
        self.metrics.record_operation("lookup", start.elapsed());
        Ok(record)
    }

    /// Snapshot and cache counters
    pub fn stats(&self) -> EngineStats {
        let snapshot = self.vectors.current();
        EngineStats {
            rows: snapshot.len(),
            dim: snapshot.dim(),
            version: snapshot.version(),
            cached_queries: self.cache.len(),
        }
    }

    /// Get metrics reference
    pub fn metrics(&self) -> &Arc<Metrics> {
        &self.metrics
    }

    /// Resolve a token to a target vector and its snapshot row, if any
    ///
    /// Order: exact snapshot row; then the word store (covers words
    /// ingested after the last reload); then the embedding model for
    /// out-of-vocabulary tokens.
    fn resolve(
        &self,
        token: &str,
        snapshot: &Snapshot,
    ) -> Result<(Vec<f32>, Option<usize>), EngineError> {
        if let Some(row) = snapshot.row_index(token) {
            return Ok((snapshot.row(row).to_vec(), Some(row)));
        }

        let words = self.words.clone();
        let lookup = token.to_string();
        let stored =
            with_deadline(self.config.source_timeout, "word store lookup", move || {
                words.get_record(&lookup)
            })?;
        if let Some(record) = stored {
            return Ok((record.embedding, None));
        }

        let embedder = self.embedder.clone();
        let lookup = token.to_string();
        let embedded =
            with_deadline(self.config.source_timeout, "embedding source", move || {
                embedder.embed(&lookup)
            })?;
        if let Some(vector) = embedded {
            debug!(token = token, "resolved out-of-vocabulary token via embedding source");
            return Ok((vector, None));
        }

        Err(EngineError::UnknownWord(token.to_string()))
    }
}
