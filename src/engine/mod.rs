//! Operation Engine
//!
//! Pure computations, the bounded worker pool for the blocking factorial
//! path, and the service tying validation, cache and log together.

pub mod operations;
mod pool;
mod service;

pub use pool::WorkerPool;
pub use service::MathService;
