//! Engine Configuration

use std::time::Duration;

/// Result limit applied when a query does not specify one
pub const DEFAULT_LIMIT: usize = 10;

/// Similarity engine configuration
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Result limit for queries that leave it unset (0)
    pub default_limit: usize,

    /// Maximum number of cached query results (0 = caching disabled)
    pub cache_capacity: usize,

    /// Deadline for word store and embedding source calls
    pub source_timeout: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_LIMIT,
            cache_capacity: 1024,
            source_timeout: Duration::from_secs(5),
        }
    }
}

impl EngineConfig {
    /// Set the fallback result limit
    pub fn with_default_limit(mut self, limit: usize) -> Self {
        self.default_limit = limit;
        self
    }

    /// Set the result cache capacity
    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }

    /// Set the collaborator call deadline
    pub fn with_source_timeout(mut self, timeout: Duration) -> Self {
        self.source_timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = EngineConfig::default()
            .with_default_limit(25)
            .with_cache_capacity(16)
            .with_source_timeout(Duration::from_millis(250));

        assert_eq!(config.default_limit, 25);
        assert_eq!(config.cache_capacity, 16);
        assert_eq!(config.source_timeout, Duration::from_millis(250));
    }
}
