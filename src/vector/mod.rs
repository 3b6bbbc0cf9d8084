//! Vector Module
//!
//! Corpus snapshots, normalization and similarity ranking.

mod ranker;
mod similarity;
mod snapshot;
mod store;

pub use ranker::{rank, SimilarityResult};
pub use similarity::{cosine_similarity, dot_product, magnitude, normalized, unit_rows};
pub use snapshot::{LoadReport, Snapshot};
pub use store::VectorStore;
