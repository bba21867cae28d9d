//! Math Service
//!
//! Validates operands, runs the computation, and appends one log record
//! per success. A failed computation never reaches the log.

use std::sync::Arc;

use num_bigint::BigUint;
use tracing::{debug, warn};

use crate::cache::FibonacciCache;
use crate::engine::operations::{self, MAX_FIB_INDEX};
use crate::engine::WorkerPool;
use crate::error::{MathError, Result};
use crate::models::{Operation, OperationResponse};
use crate::storage::OperationLog;

/// Orchestrates the three operations over the log, cache and worker pool.
pub struct MathService {
    log: Arc<dyn OperationLog>,
    fib_cache: Arc<dyn FibonacciCache>,
    factorial_pool: WorkerPool,
    factorial_max: u64,
}

impl MathService {
    pub fn new(
        log: Arc<dyn OperationLog>,
        fib_cache: Arc<dyn FibonacciCache>,
        factorial_pool: WorkerPool,
        factorial_max: u64,
    ) -> Self {
        Self {
            log,
            fib_cache,
            factorial_pool,
            factorial_max,
        }
    }

    /// `value ** exponent`; the exponent is mandatory.
    pub async fn power(&self, value: i64, exponent: Option<i64>) -> Result<OperationResponse> {
        let exponent = exponent.ok_or_else(|| {
            MathError::InvalidInput("Exponent is required for power computation".to_string())
        })?;

        let input = format!("{value}^{exponent}");
        let result = operations::power(value, exponent);
        if !result.is_finite() {
            return Err(MathError::Overflow(format!("power({input})")));
        }

        self.record(Operation::Power, input, result).await
    }

    /// The `value`-th Fibonacci number, served from the cache when possible.
    ///
    /// Cache hits are logged just like fresh computations.
    pub async fn fibonacci(&self, value: i64) -> Result<OperationResponse> {
        let n = u64::try_from(value).map_err(|_| {
            MathError::InvalidInput("Fibonacci number cannot be negative".to_string())
        })?;
        if n > MAX_FIB_INDEX {
            return Err(MathError::Overflow(format!("fibonacci({n})")));
        }

        let exact = match self.cached_fibonacci(n).await {
            Some(hit) => hit,
            None => {
                let computed = operations::fibonacci(n);
                self.fib_cache.put(n, computed.to_string()).await;
                computed
            }
        };

        let result = operations::to_finite_f64(&exact)
            .ok_or_else(|| MathError::Overflow(format!("fibonacci({n})")))?;

        self.record(Operation::Fibonacci, n.to_string(), result).await
    }

    /// `value!`, computed on the bounded worker pool under the wait timeout.
    pub async fn factorial(&self, value: i64) -> Result<OperationResponse> {
        let n = u64::try_from(value).map_err(|_| {
            MathError::InvalidInput("Factorial input must be non-negative".to_string())
        })?;
        if n > self.factorial_max {
            return Err(MathError::InvalidInput(format!(
                "Value too large. Try a number <= {}",
                self.factorial_max
            )));
        }

        let result = self
            .factorial_pool
            .run("factorial", move || {
                operations::to_finite_f64(&operations::factorial(n))
            })
            .await?
            .ok_or_else(|| MathError::Overflow(format!("factorial({n})")))?;

        self.record(Operation::Factorial, n.to_string(), result).await
    }

    async fn cached_fibonacci(&self, n: u64) -> Option<BigUint> {
        let text = self.fib_cache.get(n).await?;
        match text.parse::<BigUint>() {
            Ok(value) => {
                debug!(n, "Fibonacci served from cache");
                Some(value)
            }
            Err(e) => {
                warn!(n, error = %e, "Discarding unparsable cached Fibonacci value");
                None
            }
        }
    }

    async fn record(
        &self,
        operation: Operation,
        input_value: String,
        result: f64,
    ) -> Result<OperationResponse> {
        self.log.append(operation, &input_value, result).await?;
        Ok(OperationResponse::new(operation, input_value, result))
    }
}
