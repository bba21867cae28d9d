//! Cache Module
//!
//! In-memory TTL cache backing the Fibonacci lookups.

mod entry;
mod fibonacci;
mod stats;
mod store;


use std::sync::Arc;

use tokio::sync::RwLock;

// Re-export public types
pub use entry::CacheEntry;
pub use fibonacci::{fib_key, FibonacciCache};
pub use stats::CacheStats;
pub use store::CacheStore;

/// Cache store shared between the request path and the cleanup task.
pub type SharedCache = Arc<RwLock<CacheStore>>;

/// Wraps a store for sharing across tasks.
pub fn shared(store: CacheStore) -> SharedCache {
    Arc::new(RwLock::new(store))
}
