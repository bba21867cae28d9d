//! API Module
//!
//! HTTP handlers and routing for the math service REST API.
//!
//! # Endpoints
//! - `GET /` - Liveness banner
//! - `GET /health` - Health check endpoint
//! - `POST /api/power` - Raise a value to an exponent
//! - `POST /api/fibonacci` - Fibonacci number at an index
//! - `POST /api/factorial` - Factorial of a value

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
