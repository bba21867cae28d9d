use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::Operation;

/// One logged invocation. Never updated or deleted once written.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OperationRecord {
    pub id: i64,
    pub operation: Operation,
    pub input_value: String,
    pub result: f64,
    pub timestamp: DateTime<Utc>,
}
