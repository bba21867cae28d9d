//! API Routes
//!
//! Configures the Axum router with all math service endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    factorial_handler, fibonacci_handler, health_handler, power_handler, root_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /` - Liveness banner
/// - `GET /health` - Health check with cache counters
/// - `POST /api/power` - `value ** exponent`
/// - `POST /api/fibonacci` - F(value)
/// - `POST /api/factorial` - value!
///
/// # Middleware
/// - CORS: Allows any origin so the dashboard can call the API directly
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/api/power", post(power_handler))
        .route("/api/fibonacci", post(fibonacci_handler))
        .route("/api/factorial", post(factorial_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
