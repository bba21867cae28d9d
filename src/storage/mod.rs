//! Operation Log
//!
//! Append-only record of every successful computation.
//!
//! The rest of the service only ever appends through [`OperationLog`];
//! [`SqliteOperationLog`] persists the rows with `sqlx`.

mod record;
mod sqlite;

use async_trait::async_trait;

use crate::error::StorageError;
use crate::models::Operation;

pub use record::OperationRecord;
pub use sqlite::SqliteOperationLog;

/// Write-only sink for operation records.
#[async_trait]
pub trait OperationLog: Send + Sync {
    /// Persists one immutable record and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the insert fails.
    async fn append(
        &self,
        operation: Operation,
        input_value: &str,
        result: f64,
    ) -> Result<OperationRecord, StorageError>;
}
