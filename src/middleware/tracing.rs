// ABOUTME: Request tracing spans for correlation and structured logging
// ABOUTME: Builds per-request spans carrying request id and tenant fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use crate::constants::headers;
use axum::body::Body;
use http::Request;
use tracing::{field, Span};

/// Create the span `TraceLayer` wraps each HTTP request in
///
/// `request_id` is filled from the header set by the request-id layer;
/// `tenant_id` is recorded later by the tenant middleware.
pub fn make_request_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get(headers::REQUEST_ID)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    tracing::info_span!(
        "http_request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = %request_id,
        tenant_id = field::Empty,
    )
}

/// Create a tracing span for store operations
pub fn create_database_span(operation: &str, table: &str) -> Span {
    tracing::debug_span!(
        "database_operation",
        operation = %operation,
        table = %table,
        tenant_id = field::Empty,
        rows = field::Empty,
    )
}
