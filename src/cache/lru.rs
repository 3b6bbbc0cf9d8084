//! LRU Result Cache
//!
//! Bounded map of query key -> ranked results with least-recently-used
//! eviction. Entries are tagged with the snapshot version they were
//! computed against; a version mismatch is a miss, so a corpus reload can
//! never serve stale rankings even to queries racing the swap.

use dashmap::DashMap;
use std::collections::VecDeque;
use std::sync::RwLock;

use crate::cache::key::QueryKey;
use crate::vector::SimilarityResult;

#[derive(Debug, Clone)]
struct CacheSlot {
    results: Vec<SimilarityResult>,
    version: u64,
}

/// Bounded LRU cache of ranked query results
#[derive(Debug)]
pub struct ResultCache {
    entries: DashMap<QueryKey, CacheSlot>,
    /// Access order, most recent at the back
    order: RwLock<VecDeque<QueryKey>>,
    capacity: usize,
}

impl ResultCache {
    /// Create a cache holding up to `capacity` entries (0 disables caching)
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: DashMap::new(),
            order: RwLock::new(VecDeque::new()),
            capacity,
        }
    }

    /// Look up results computed against the given snapshot version
    pub fn get(&self, key: &QueryKey, version: u64) -> Option<Vec<SimilarityResult>> {
        let hit = {
            let slot = self.entries.get(key)?;
            if slot.version == version {
                Some(slot.results.clone())
            } else {
                None
            }
        };

        match hit {
            Some(results) => {
                let mut order = self.order.write().unwrap();
                order.retain(|k| k != key);
                order.push_back(key.clone());
                Some(results)
            }
            None => {
                // Stale entry from a replaced snapshot
                self.entries.remove(key);
                self.order.write().unwrap().retain(|k| k != key);
                None
            }
        }
    }

    /// Store results computed against the given snapshot version
    pub fn insert(&self, key: QueryKey, results: Vec<SimilarityResult>, version: u64) {
        if self.capacity == 0 {
            return;
        }

        let mut order = self.order.write().unwrap();
        if !self.entries.contains_key(&key) {
            while self.entries.len() >= self.capacity {
                match order.pop_front() {
                    Some(oldest) => {
                        self.entries.remove(&oldest);
                    }
                    None => break,
                }
            }
        }

        self.entries.insert(key.clone(), CacheSlot { results, version });
        order.retain(|k| k != &key);
        order.push_back(key);
    }

    /// Drop every entry
    pub fn clear(&self) {
        self.entries.clear();
        self.order.write().unwrap().clear();
    }

    /// Number of cached entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
