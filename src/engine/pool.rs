//! Bounded Worker Pool
//!
//! Runs blocking, CPU-bound jobs on tokio's blocking threads with at most
//! `workers` of them in flight. Callers wait up to a fixed timeout; a job
//! that outlives the wait is abandoned, not cancelled, and keeps its worker
//! slot until it returns.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Semaphore;
use tracing::warn;

use crate::error::{MathError, Result};

/// Fixed-size pool with a per-call wait timeout.
#[derive(Debug, Clone)]
pub struct WorkerPool {
    permits: Arc<Semaphore>,
    workers: usize,
    timeout: Duration,
}

impl WorkerPool {
    /// Creates a pool of `workers` slots (at least one).
    pub fn new(workers: usize, timeout: Duration) -> Self {
        let workers = workers.max(1);
        Self {
            permits: Arc::new(Semaphore::new(workers)),
            workers,
            timeout,
        }
    }

    /// Runs `job` on the pool and waits for its result.
    ///
    /// Time spent queued for a free worker counts toward the timeout.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::Timeout`] if no result arrives in time, and
    /// [`MathError::Internal`] if the job panics.
    pub async fn run<F, T>(&self, operation: &str, job: F) -> Result<T>
    where
        F: FnOnce() -> T + Send + 'static,
        T: Send + 'static,
    {
        let permits = Arc::clone(&self.permits);
        let work = async move {
            let permit = permits
                .acquire_owned()
                .await
                .map_err(|e| MathError::Internal(format!("worker pool closed: {e}")))?;

            let value = tokio::task::spawn_blocking(move || {
                let _permit = permit;
                job()
            })
            .await
            .map_err(|e| MathError::Internal(format!("worker failed: {e}")))?;

            Ok::<T, MathError>(value)
        };

        match tokio::time::timeout(self.timeout, work).await {
            Ok(result) => result,
            Err(_) => {
                warn!(
                    operation,
                    timeout_ms = self.timeout.as_millis() as u64,
                    "Computation exceeded wait timeout"
                );
                Err(MathError::Timeout {
                    operation: operation.to_string(),
                    timeout_ms: self.timeout.as_millis() as u64,
                })
            }
        }
    }

    /// Worker slots not currently held by a running job.
    pub fn available_workers(&self) -> usize {
        self.permits.available_permits()
    }

    pub fn workers(&self) -> usize {
        self.workers
    }
}
