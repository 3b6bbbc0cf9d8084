//! Corpus Module
//!
//! Word records, POS filtering and collaborator interfaces.

mod memory;
mod record;
mod source;

pub use memory::{MemoryWordStore, StaticEmbedder};
pub use record::{PosFilter, WordRecord};
pub use source::{EmbeddingSource, WordStore};
