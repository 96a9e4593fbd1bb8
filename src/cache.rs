//! # Query Cache
//!
//! Client-side cache of task views, keyed the way the web client keys its
//! query store: one entry for the task list, one per task detail. The
//! update submitter depends only on the `QueryCache` trait, so the concrete
//! store is an injected collaborator rather than ambient global state.

use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::{Duration, Instant};
use tracing::debug;

/// Cache key for task views
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryKey {
    /// The assigned-task list view (`["tasks"]`)
    Tasks,
    /// A single task detail view (`["tasks", id]`)
    Task(i64),
}

impl std::fmt::Display for QueryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryKey::Tasks => write!(f, "tasks"),
            QueryKey::Task(id) => write!(f, "tasks/{id}"),
        }
    }
}

/// Capability-scoped cache interface consumed by the update submitter.
///
/// Implementations must be cheap to call from async contexts; none of the
/// operations block on I/O.
pub trait QueryCache: Send + Sync {
    /// Store a fresh server representation under the given key
    fn put(&self, key: QueryKey, value: Value);

    /// Fetch a cached representation if present and not expired
    fn get(&self, key: &QueryKey) -> Option<Value>;

    /// Drop the entry for the given key so the next read refetches
    fn invalidate(&self, key: &QueryKey);
}

/// Tuning for the in-memory query cache
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryCacheConfig {
    pub enabled: bool,
    pub ttl_seconds: u64,
    pub max_entries: usize,
}

impl Default for QueryCacheConfig {
    /// Default configuration suitable for production clients
    fn default() -> Self {
        Self {
            enabled: true,
            ttl_seconds: 30,
            max_entries: 1000,
        }
    }
}

impl QueryCacheConfig {
    /// Test-optimized configuration with rapid expiry
    pub fn for_test() -> Self {
        Self {
            enabled: true,
            ttl_seconds: 1,
            max_entries: 100,
        }
    }

    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_seconds)
    }
}

struct CacheEntry {
    value: Value,
    cached_at: Instant,
}

/// Concurrent in-memory implementation backed by `DashMap`.
pub struct InMemoryQueryCache {
    config: QueryCacheConfig,
    entries: DashMap<QueryKey, CacheEntry>,
}

impl InMemoryQueryCache {
    pub fn new(config: QueryCacheConfig) -> Self {
        Self {
            config,
            entries: DashMap::new(),
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(QueryCacheConfig::default())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn prune_expired(&self) {
        let ttl = self.config.ttl();
        self.entries.retain(|_, entry| entry.cached_at.elapsed() < ttl);
    }
}

impl QueryCache for InMemoryQueryCache {
    fn put(&self, key: QueryKey, value: Value) {
        if !self.config.enabled {
            return;
        }

        if self.entries.len() >= self.config.max_entries && !self.entries.contains_key(&key) {
            self.prune_expired();
            if self.entries.len() >= self.config.max_entries {
                debug!(key = %key, "query cache at capacity, skipping insert");
                return;
            }
        }

        self.entries.insert(
            key,
            CacheEntry {
                value,
                cached_at: Instant::now(),
            },
        );
    }

    fn get(&self, key: &QueryKey) -> Option<Value> {
        if !self.config.enabled {
            return None;
        }

        let ttl = self.config.ttl();
        if let Some(entry) = self.entries.get(key) {
            if entry.cached_at.elapsed() < ttl {
                return Some(entry.value.clone());
            }
        }

        // Expired entries are removed on the read path
        self.entries.remove(key);
        None
    }

    fn invalidate(&self, key: &QueryKey) {
        self.entries.remove(key);
        debug!(key = %key, "query cache invalidated");
    }
}
