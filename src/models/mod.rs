//! Request and Response models for the math service API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod operation;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use operation::Operation;
pub use requests::OperationRequest;
pub use responses::{CacheStatsResponse, HealthResponse, OperationResponse, RootResponse};
