//! Response DTOs for the math service API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::CacheStats;
use crate::models::Operation;

/// Result of a successful computation.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OperationResponse {
    /// Operation name
    pub operation: Operation,
    /// Human-readable input, e.g. "3^4"
    pub input_value: String,
    pub result: f64,
}

impl OperationResponse {
    pub fn new(operation: Operation, input_value: impl Into<String>, result: f64) -> Self {
        Self {
            operation,
            input_value: input_value.into(),
            result,
        }
    }
}

/// Response body for the root endpoint (GET /)
#[derive(Debug, Clone, Serialize)]
pub struct RootResponse {
    pub message: String,
}

impl RootResponse {
    pub fn running() -> Self {
        Self {
            message: "Math API is running.".to_string(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
    /// Fibonacci cache counters
    pub fib_cache: CacheStatsResponse,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy(stats: CacheStats) -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            fib_cache: CacheStatsResponse::from(stats),
        }
    }
}

/// Cache counters plus the derived hit rate.
#[derive(Debug, Clone, Serialize)]
pub struct CacheStatsResponse {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub total_entries: usize,
    pub hit_rate: f64,
}

impl From<CacheStats> for CacheStatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            total_entries: stats.total_entries,
        }
    }
}
