//! Query Parameters

use crate::corpus::PosFilter;

/// Parameters for a similarity query
#[derive(Debug, Clone, PartialEq)]
pub struct QueryParams {
    /// Part-of-speech restriction
    pub pos: PosFilter,

    /// Maximum number of results (0 = engine default)
    pub limit: usize,

    /// Minimum similarity to keep a candidate (-1.0 keeps everything)
    pub min_similarity: f32,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            pos: PosFilter::Any,
            limit: 0,
            min_similarity: -1.0,
        }
    }
}

impl QueryParams {
    /// Restrict candidates by part of speech
    pub fn with_pos(mut self, pos: PosFilter) -> Self {
        self.pos = pos;
        self
    }

    /// Cap the number of results
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Drop candidates scoring below the threshold
    pub fn with_min_similarity(mut self, min_similarity: f32) -> Self {
        self.min_similarity = min_similarity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = QueryParams::default();
        assert_eq!(params.pos, PosFilter::Any);
        assert_eq!(params.limit, 0);
        assert_eq!(params.min_similarity, -1.0);
    }

    #[test]
    fn test_builder() {
        let params = QueryParams::default()
            .with_pos(PosFilter::Noun)
            .with_limit(5)
            .with_min_similarity(0.8);

        assert_eq!(params.pos, PosFilter::Noun);
        assert_eq!(params.limit, 5);
        assert_eq!(params.min_similarity, 0.8);
    }
}
