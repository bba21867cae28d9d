//! Math Service - power, Fibonacci and factorial over HTTP
//!
//! Every successful computation is appended to a SQLite operation log;
//! Fibonacci results are cached under a fixed TTL.

pub mod api;
pub mod cache;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod storage;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use engine::MathService;
pub use error::{MathError, StorageError};
pub use tasks::spawn_cleanup_task;
