// ABOUTME: Database error types for the inventory store
// ABOUTME: Converts sqlx failures into structured errors and maps them to DataUnavailable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use super::AppError;

/// Errors raised by the persistence collaborator
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// Underlying driver or connection failure
    #[error("Database query failed during {operation}")]
    Query {
        /// Operation that was running
        operation: &'static str,
        /// Driver error
        #[source]
        source: sqlx::Error,
    },

    /// A stored row could not be mapped to a domain type
    #[error("Corrupt {entity} row: {reason}")]
    CorruptRow {
        /// Entity kind (recipe, stock item, ...)
        entity: &'static str,
        /// What was wrong with the row
        reason: String,
    },

    /// Schema migration failed
    #[error("Migration failed: {0}")]
    Migration(String),
}

impl DatabaseError {
    /// Wrap a driver error with the operation it interrupted
    #[must_use]
    pub const fn query(operation: &'static str, source: sqlx::Error) -> Self {
        Self::Query { operation, source }
    }
}

impl From<sqlx::Error> for DatabaseError {
    fn from(source: sqlx::Error) -> Self {
        Self::Query {
            operation: "query",
            source,
        }
    }
}

impl From<DatabaseError> for AppError {
    fn from(error: DatabaseError) -> Self {
        Self::data_unavailable(error.to_string()).with_source(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_store_failure_is_data_unavailable() {
        let error = AppError::from(DatabaseError::query("list_recipes", sqlx::Error::PoolTimedOut));

        assert_eq!(error.code, ErrorCode::DataUnavailable);
        assert_eq!(error.http_status(), 500);
        assert!(error.message.contains("list_recipes"));
        assert!(error.source.is_some());
    }
}
