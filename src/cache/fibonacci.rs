//! Fibonacci Cache
//!
//! The cross-request cache consulted before computing a Fibonacci number.
//! Keys are `fib:<n>`; values are the decimal text of the exact result.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::CacheStore;

/// Builds the cache key for Fibonacci index `n`.
pub fn fib_key(n: u64) -> String {
    format!("fib:{n}")
}

/// Lookup and write-through for Fibonacci results.
///
/// Writes are idempotent for a given index, so implementations only need
/// to tolerate independent concurrent writers.
#[async_trait]
pub trait FibonacciCache: Send + Sync {
    /// Returns the cached decimal text of F(n), if present and unexpired.
    async fn get(&self, n: u64) -> Option<String>;

    /// Stores the decimal text of F(n) under the fixed TTL.
    async fn put(&self, n: u64, value: String);
}

#[async_trait]
impl FibonacciCache for RwLock<CacheStore> {
    async fn get(&self, n: u64) -> Option<String> {
        // Write lock: expired entries are dropped and stats updated on read
        let value = self.write().await.get(&fib_key(n));
        debug!(n, hit = value.is_some(), "Fibonacci cache lookup");
        value
    }

    async fn put(&self, n: u64, value: String) {
        self.write().await.set(fib_key(n), value);
    }
}
