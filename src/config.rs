//! Configuration Module
//!
//! Handles loading and managing service configuration from environment variables.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Path of the SQLite file holding the operation log
    pub database_path: PathBuf,
    /// Lifetime in seconds of a cached Fibonacci result
    pub fib_cache_ttl: u64,
    /// Maximum number of Fibonacci results held in the cache
    pub fib_cache_max_entries: usize,
    /// Background cache sweep interval in seconds
    pub cleanup_interval: u64,
    /// Largest accepted factorial input
    pub factorial_max: u64,
    /// Seconds a caller waits for a factorial before giving up
    pub factorial_timeout: u64,
    /// Number of factorial computations allowed to run at once
    pub factorial_workers: usize,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 8000)
    /// - `DATABASE_PATH` - SQLite file (default: ./data/math_service.db)
    /// - `FIB_CACHE_TTL` - Fibonacci cache TTL in seconds (default: 3600)
    /// - `FIB_CACHE_MAX_ENTRIES` - Fibonacci cache capacity (default: 10000)
    /// - `CLEANUP_INTERVAL` - Cache sweep frequency in seconds (default: 60)
    /// - `FACTORIAL_MAX` - Largest factorial input (default: 5000)
    /// - `FACTORIAL_TIMEOUT` - Factorial wait timeout in seconds (default: 10)
    /// - `FACTORIAL_WORKERS` - Factorial worker pool size (default: 4)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: env_or("SERVER_PORT", defaults.server_port),
            database_path: env::var("DATABASE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.database_path),
            fib_cache_ttl: env_or("FIB_CACHE_TTL", defaults.fib_cache_ttl),
            fib_cache_max_entries: env_or("FIB_CACHE_MAX_ENTRIES", defaults.fib_cache_max_entries),
            cleanup_interval: env_or("CLEANUP_INTERVAL", defaults.cleanup_interval),
            factorial_max: env_or("FACTORIAL_MAX", defaults.factorial_max),
            factorial_timeout: env_or("FACTORIAL_TIMEOUT", defaults.factorial_timeout),
            // A pool with zero workers would never run anything
            factorial_workers: env_or("FACTORIAL_WORKERS", defaults.factorial_workers).max(1),
        }
    }

    /// Factorial wait timeout as a Duration.
    pub fn factorial_timeout(&self) -> Duration {
        Duration::from_secs(self.factorial_timeout)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 8000,
            database_path: PathBuf::from("./data/math_service.db"),
            fib_cache_ttl: 3600,
            fib_cache_max_entries: 10_000,
            cleanup_interval: 60,
            factorial_max: 5000,
            factorial_timeout: 10,
            factorial_workers: 4,
        }
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
