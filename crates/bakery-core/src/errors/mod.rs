// ABOUTME: Unified error handling with standard error codes and HTTP status mapping
// ABOUTME: Defines AppError, ErrorCode, and the {success:false,error} response envelope
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Unified Error Handling System
//!
//! Every failure that reaches an HTTP client is an [`AppError`]. The error
//! code decides the HTTP status, the message is rendered into the
//! `{ "success": false, "error": <message> }` envelope shared by all
//! bakery endpoints.

/// Database error types with `sqlx` conversion
#[cfg(feature = "database-errors")]
pub mod database;

#[cfg(feature = "database-errors")]
pub use database::DatabaseError;

use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;

/// Standard error codes used throughout the application
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// The request contained an invalid value
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// A required field or header was absent
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField = 3001,

    // Resource Management (4000-4999)
    /// The requested resource does not exist for this tenant
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound = 4000,

    // Data layer (5000-5999)
    /// The persistence collaborator could not supply the snapshot
    #[serde(rename = "DATA_UNAVAILABLE")]
    DataUnavailable = 5000,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            Self::InvalidInput | Self::MissingRequiredField => 400,
            Self::ResourceNotFound => 404,
            Self::DataUnavailable => 500,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingRequiredField => "A required field is missing from the request",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::DataUnavailable => "Inventory data is currently unavailable",
        }
    }

    /// Whether errors with this code indicate a server-side fault
    #[must_use]
    pub const fn is_server_error(self) -> bool {
        self.http_status() >= 500
    }
}

/// Unified error type for the application
#[derive(Debug, thiserror::Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }

    /// Resource not found
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Upstream data fetch failed
    #[must_use]
    pub fn data_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DataUnavailable, message)
    }

    /// Invalid input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Required field or header missing
    #[must_use]
    pub fn missing_field(field: &str) -> Self {
        Self::new(
            ErrorCode::MissingRequiredField,
            format!("Missing required field: {field}"),
        )
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// HTTP error response envelope
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// Always `false` for errors
    pub success: bool,
    /// Error message shown to the caller
    pub error: String,
    /// Machine-readable error code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<ErrorCode>,
}

impl From<&AppError> for ErrorResponse {
    fn from(error: &AppError) -> Self {
        Self {
            success: false,
            error: error.message.clone(),
            code: Some(error.code),
        }
    }
}

#[cfg(feature = "http-response")]
mod http_response {
    use super::{AppError, ErrorResponse};
    use axum::response::{IntoResponse, Response};
    use axum::Json;
    use http::StatusCode;
    use tracing::{error, warn};

    impl IntoResponse for AppError {
        fn into_response(self) -> Response {
            let status = StatusCode::from_u16(self.http_status())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

            if self.code.is_server_error() {
                error!(
                    code = ?self.code,
                    source = ?self.source,
                    "Request failed: {}",
                    self.message
                );
            } else {
                warn!(code = ?self.code, "Request rejected: {}", self.message);
            }

            (status, Json(ErrorResponse::from(&self))).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_http_status() {
        assert_eq!(ErrorCode::ResourceNotFound.http_status(), 404);
        assert_eq!(ErrorCode::DataUnavailable.http_status(), 500);
        assert_eq!(ErrorCode::MissingRequiredField.http_status(), 400);
        assert!(ErrorCode::DataUnavailable.is_server_error());
        assert!(!ErrorCode::InvalidInput.is_server_error());
    }

    #[test]
    fn test_not_found_message() {
        let error = AppError::not_found("Recipe 42");
        assert_eq!(error.code, ErrorCode::ResourceNotFound);
        assert_eq!(error.message, "Recipe 42 not found");
    }

    #[test]
    fn test_error_response_envelope() {
        let error = AppError::data_unavailable("inventory store offline");
        let json = serde_json::to_value(ErrorResponse::from(&error)).unwrap_or_default();

        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "inventory store offline");
        assert_eq!(json["code"], "DATA_UNAVAILABLE");
    }
}
