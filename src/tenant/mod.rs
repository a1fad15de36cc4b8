// ABOUTME: Tenant scoping for every inventory read and production analysis
// ABOUTME: TenantContext carries the resolved tenant through handlers and services
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Tenant Isolation
//!
//! Every recipe and stock row belongs to exactly one tenant. The context is
//! resolved once per request from the `x-tenant-id` header and passed down
//! explicitly; no layer reads tenant state from anywhere else.

use bakery_core::models::TenantId;
use serde::{Deserialize, Serialize};

/// Tenant context for all operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantContext {
    /// Tenant whose data the request may see
    pub tenant_id: TenantId,
}

impl TenantContext {
    /// Create new tenant context
    #[must_use]
    pub const fn new(tenant_id: TenantId) -> Self {
        Self { tenant_id }
    }
}

impl From<TenantId> for TenantContext {
    fn from(tenant_id: TenantId) -> Self {
        Self::new(tenant_id)
    }
}
