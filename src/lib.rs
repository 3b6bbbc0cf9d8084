//! LEXIVEC - Word Embedding Similarity Engine
//!
//! Finds semantically similar words by cosine similarity over
//! fixed-dimension word embeddings, with part-of-speech filtering,
//! snapshot-level unit-vector precomputation and a bounded LRU result
//! cache. Persistence and embedding models stay behind the `WordStore`
//! and `EmbeddingSource` traits.

pub mod cache;
pub mod config;
pub mod corpus;
pub mod engine;
pub mod error;
pub mod metrics;
pub mod vector;

pub use cache::{QueryKey, ResultCache};
pub use config::EngineConfig;
pub use corpus::{EmbeddingSource, MemoryWordStore, PosFilter, StaticEmbedder, WordRecord, WordStore};
pub use engine::{EngineStats, QueryParams, SimilarityEngine};
pub use error::EngineError;
pub use metrics::Metrics;
pub use vector::{LoadReport, SimilarityResult, Snapshot, VectorStore};
