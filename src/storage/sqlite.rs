//! `SQLite` operation log.

use std::path::Path;
use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use sqlx::Row;
use tracing::info;

use super::{OperationLog, OperationRecord};
use crate::error::StorageError;
use crate::models::Operation;

/// Operation log stored in the `operation_logs` table.
#[derive(Debug, Clone)]
pub struct SqliteOperationLog {
    pool: SqlitePool,
}

impl SqliteOperationLog {
    /// Opens (creating if needed) the database file at `database_path`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::ConnectionFailed`] if the connection fails,
    /// or [`StorageError::MigrationFailed`] if the schema cannot be created.
    pub async fn new(database_path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = database_path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StorageError::ConnectionFailed {
                message: format!("Failed to create database directory: {e}"),
            })?;
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .journal_mode(SqliteJournalMode::Wal)
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .map_err(|e| StorageError::ConnectionFailed {
                message: format!("Failed to connect to database: {e}"),
            })?;

        let log = Self { pool };
        log.run_migrations().await?;
        info!(path = %path.display(), "Operation log opened");

        Ok(log)
    }

    /// Creates an in-memory log for tests.
    ///
    /// The pool is pinned to a single long-lived connection because every
    /// `:memory:` connection is its own database.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::ConnectionFailed`] if the connection fails.
    pub async fn new_in_memory() -> Result<Self, StorageError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:").map_err(|e| {
            StorageError::ConnectionFailed {
                message: format!("Invalid memory database options: {e}"),
            }
        })?;

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(|e| StorageError::ConnectionFailed {
                message: format!("Failed to create in-memory database: {e}"),
            })?;

        let log = Self { pool };
        log.run_migrations().await?;

        Ok(log)
    }

    async fn run_migrations(&self) -> Result<(), StorageError> {
        let schema_001 = include_str!("../../migrations/001_operation_logs.sql");
        sqlx::query(schema_001)
            .execute(&self.pool)
            .await
            .map_err(|e| StorageError::MigrationFailed {
                version: "001".to_string(),
                message: format!("Failed to run migration 001: {e}"),
            })?;

        Ok(())
    }

    /// Number of records written so far.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::QueryFailed`] if the query fails.
    pub async fn count(&self) -> Result<i64, StorageError> {
        let row = sqlx::query("SELECT COUNT(*) AS n FROM operation_logs")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| query_error("COUNT operation_logs", e))?;

        Ok(row.get("n"))
    }

    /// All records in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::QueryFailed`] if the query fails or a stored
    /// row cannot be decoded.
    pub async fn records(&self) -> Result<Vec<OperationRecord>, StorageError> {
        let rows = sqlx::query(
            "SELECT id, operation, input_value, result, timestamp FROM operation_logs ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| query_error("SELECT operation_logs", e))?;

        rows.iter()
            .map(|row| -> Result<OperationRecord, StorageError> {
                let operation: String = row.get("operation");
                let timestamp: String = row.get("timestamp");

                Ok(OperationRecord {
                    id: row.get("id"),
                    operation: operation
                        .parse()
                        .map_err(|e: String| query_error("SELECT operation_logs", e))?,
                    input_value: row.get("input_value"),
                    result: row.get("result"),
                    timestamp: timestamp
                        .parse::<DateTime<Utc>>()
                        .map_err(|e| query_error("SELECT operation_logs", e))?,
                })
            })
            .collect()
    }
}

#[async_trait]
impl OperationLog for SqliteOperationLog {
    async fn append(
        &self,
        operation: Operation,
        input_value: &str,
        result: f64,
    ) -> Result<OperationRecord, StorageError> {
        let timestamp = Utc::now();

        let outcome = sqlx::query(
            "INSERT INTO operation_logs (operation, input_value, result, timestamp) VALUES (?, ?, ?, ?)",
        )
        .bind(operation.as_str())
        .bind(input_value)
        .bind(result)
        .bind(timestamp.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| query_error("INSERT operation_logs", e))?;

        info!(%operation, input = input_value, result, "Logged operation");

        Ok(OperationRecord {
            id: outcome.last_insert_rowid(),
            operation,
            input_value: input_value.to_string(),
            result,
            timestamp,
        })
    }
}

fn query_error(query: &str, err: impl std::fmt::Display) -> StorageError {
    StorageError::QueryFailed {
        query: query.to_string(),
        message: err.to_string(),
    }
}
