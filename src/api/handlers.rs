//! API Handlers
//!
//! HTTP request handlers for each math service endpoint.

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::cache::{self, CacheStore, SharedCache};
use crate::config::Config;
use crate::engine::{MathService, WorkerPool};
use crate::error::Result;
use crate::models::{HealthResponse, OperationRequest, OperationResponse, RootResponse};
use crate::storage::OperationLog;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Operation service
    pub service: Arc<MathService>,
    /// Fibonacci cache, also swept by the cleanup task
    pub cache: SharedCache,
}

impl AppState {
    /// Creates a new AppState around an existing service and cache.
    pub fn new(service: MathService, cache: SharedCache) -> Self {
        Self {
            service: Arc::new(service),
            cache,
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Builds the Fibonacci cache and the factorial worker pool from the
    /// Config and wires them to the given operation log.
    pub fn from_config(config: &Config, log: Arc<dyn OperationLog>) -> Self {
        let cache = cache::shared(CacheStore::new(
            config.fib_cache_max_entries,
            config.fib_cache_ttl,
        ));
        let pool = WorkerPool::new(config.factorial_workers, config.factorial_timeout());
        let service = MathService::new(log, cache.clone(), pool, config.factorial_max);
        Self::new(service, cache)
    }
}

/// Handler for POST /api/power
pub async fn power_handler(
    State(state): State<AppState>,
    Json(req): Json<OperationRequest>,
) -> Result<Json<OperationResponse>> {
    let response = state.service.power(req.value, req.exponent).await?;
    Ok(Json(response))
}

/// Handler for POST /api/fibonacci
pub async fn fibonacci_handler(
    State(state): State<AppState>,
    Json(req): Json<OperationRequest>,
) -> Result<Json<OperationResponse>> {
    let response = state.service.fibonacci(req.value).await?;
    Ok(Json(response))
}

/// Handler for POST /api/factorial
pub async fn factorial_handler(
    State(state): State<AppState>,
    Json(req): Json<OperationRequest>,
) -> Result<Json<OperationResponse>> {
    let response = state.service.factorial(req.value).await?;
    Ok(Json(response))
}

/// Handler for GET /
pub async fn root_handler() -> Json<RootResponse> {
    Json(RootResponse::running())
}

/// Handler for GET /health
///
/// Reports liveness along with the Fibonacci cache counters.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let stats = state.cache.read().await.stats();
    Json(HealthResponse::healthy(stats))
}
