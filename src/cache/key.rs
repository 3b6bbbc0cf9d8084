//! Cache Keys
//!
//! The full normalized query tuple. The threshold float is stored by bit
//! pattern so hashing and equality are total.

use crate::corpus::PosFilter;

/// Normalized query parameters identifying a cached result
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    token: String,
    pos: PosFilter,
    limit: usize,
    min_similarity_bits: u32,
}

impl QueryKey {
    /// Build a key from normalized query parameters
    pub fn new(token: &str, pos: PosFilter, limit: usize, min_similarity: f32) -> Self {
        Self {
            token: token.to_string(),
            pos,
            limit,
            min_similarity_bits: min_similarity.to_bits(),
        }
    }

    /// The query token
    pub fn token(&self) -> &str {
        &self.token
    }
}
