//! Request DTOs for the math service API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

/// Operand record accepted by every operation endpoint.
///
/// # Fields
/// - `value`: The base for power, the index for Fibonacci, `n` for factorial
/// - `exponent`: Required by power, ignored elsewhere
#[derive(Debug, Clone, Deserialize)]
pub struct OperationRequest {
    pub value: i64,
    #[serde(default)]
    pub exponent: Option<i64>,
}

impl OperationRequest {
    pub fn new(value: i64) -> Self {
        Self {
            value,
            exponent: None,
        }
    }

    pub fn with_exponent(mut self, exponent: i64) -> Self {
        self.exponent = Some(exponent);
        self
    }
}
