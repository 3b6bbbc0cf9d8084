//! Result Cache
//!
//! Bounded LRU memoization of ranked query results.

mod key;
mod lru;

pub use key::QueryKey;
pub use lru::ResultCache;
