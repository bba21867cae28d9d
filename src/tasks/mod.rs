//! Background Tasks Module
//!
//! # Tasks
//! - Cache sweep: Removes expired Fibonacci results at configured intervals

mod cleanup;

pub use cleanup::spawn_cleanup_task;
