// ABOUTME: Tenant-aware logging utilities for structured, contextual logging
// ABOUTME: Records tenant and request fields on spans and logs production analysis events
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use bakery_core::models::TenantId;
use tracing::{info, warn, Span};

/// Tenant-aware logging utilities
pub struct TenantLogger;

impl TenantLogger {
    /// Log a completed production analysis
    pub fn log_analysis(tenant_id: TenantId, analysis: &str, success: bool, duration_ms: u64) {
        if success {
            info!(
                tenant_id = %tenant_id,
                analysis = %analysis,
                duration_ms = %duration_ms,
                event_type = "production_analysis",
                "Production analysis completed"
            );
        } else {
            warn!(
                tenant_id = %tenant_id,
                analysis = %analysis,
                duration_ms = %duration_ms,
                event_type = "production_analysis",
                "Production analysis failed"
            );
        }
    }

    /// Log a rejected request that carried no usable tenant
    pub fn log_tenant_rejected(path: &str, reason: &str) {
        warn!(
            http_path = %path,
            reason = %reason,
            event_type = "tenant_rejected",
            "Request rejected without tenant scope"
        );
    }
}

/// Record tenant context in current span
pub fn record_tenant_context(tenant_id: TenantId) {
    Span::current().record("tenant_id", tenant_id.to_string());
}
