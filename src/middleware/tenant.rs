// ABOUTME: Tower middleware for extracting tenant context from the x-tenant-id header
// ABOUTME: Injects TenantContext into request extensions for route handlers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Tenant Context Middleware
//!
//! Resolves the caller's tenant from the `x-tenant-id` header and inserts an
//! [`ExtractedTenantContext`] into request extensions. A malformed header is
//! rejected here with 400; an absent header is left for the handler to
//! reject, so tenant-free routes can share the middleware.

use crate::constants::headers;
use crate::errors::{AppError, AppResult};
use crate::logging::{record_tenant_context, TenantLogger};
use crate::tenant::TenantContext;
use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use bakery_core::models::TenantId;
use http::HeaderMap;
use tracing::debug;

/// Extracted tenant context wrapper for request extensions
#[derive(Debug, Clone, Copy)]
pub struct ExtractedTenantContext(pub Option<TenantContext>);

impl ExtractedTenantContext {
    /// Tenant context, or a 400 when the request carried none
    ///
    /// # Errors
    ///
    /// Returns [`AppError`] with `MissingRequiredField` when no tenant header was sent.
    pub fn require(&self) -> AppResult<TenantContext> {
        self.0.ok_or_else(|| AppError::missing_field(headers::TENANT_ID))
    }
}

/// Parse the tenant header; `Ok(None)` when it is absent
fn parse_tenant_header(header_map: &HeaderMap) -> AppResult<Option<TenantContext>> {
    let Some(value) = header_map.get(headers::TENANT_ID) else {
        return Ok(None);
    };

    let raw = value
        .to_str()
        .map_err(|_| AppError::invalid_input("x-tenant-id header is not valid text"))?;

    raw.trim()
        .parse::<TenantId>()
        .map(|tenant_id| Some(TenantContext::new(tenant_id)))
        .map_err(|e| AppError::invalid_input(format!("Invalid x-tenant-id header: {e}")).with_source(e))
}

/// Tenant context middleware
///
/// Requests without the header proceed with `ExtractedTenantContext(None)`.
pub async fn tenant_context_middleware(mut req: Request, next: Next) -> Response {
    let tenant_context = match parse_tenant_header(req.headers()) {
        Ok(context) => context,
        Err(error) => {
            TenantLogger::log_tenant_rejected(req.uri().path(), &error.message);
            return error.into_response();
        }
    };

    if let Some(context) = tenant_context {
        record_tenant_context(context.tenant_id);
    } else {
        debug!("No x-tenant-id header, proceeding without tenant context");
    }

    req.extensions_mut()
        .insert(ExtractedTenantContext(tenant_context));

    next.run(req).await
}
