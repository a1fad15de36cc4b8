// ABOUTME: HTTP middleware for request tracing, tenant scoping, and CORS
// ABOUTME: Provides request spans, x-tenant-id extraction, and cross-origin configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

/// CORS layer built from server configuration
pub mod cors;
/// `x-tenant-id` extraction into request extensions
pub mod tenant;
/// Request spans for `tower-http` tracing
pub mod tracing;

pub use cors::setup_cors;
pub use tenant::{tenant_context_middleware, ExtractedTenantContext};
pub use self::tracing::{create_database_span, make_request_span};
