// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Provides liveness and store-backed readiness probes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use crate::constants::routes;
use crate::resources::ServerResources;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::Utc;
use serde_json::json;
use std::sync::Arc;
use tracing::warn;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(routes::HEALTH, get(Self::handle_health))
            .route(routes::READY, get(Self::handle_ready))
            .with_state(resources)
    }

    async fn handle_health(State(resources): State<Arc<ServerResources>>) -> Json<serde_json::Value> {
        Json(json!({
            "status": "healthy",
            "version": resources.config.server_version,
            "timestamp": Utc::now().to_rfc3339()
        }))
    }

    /// Ready only when the inventory store answers
    async fn handle_ready(State(resources): State<Arc<ServerResources>>) -> Response {
        match resources.production.check_store().await {
            Ok(()) => (
                StatusCode::OK,
                Json(json!({
                    "status": "ready",
                    "timestamp": Utc::now().to_rfc3339()
                })),
            )
                .into_response(),
            Err(error) => {
                warn!(error = %error, "Readiness check failed");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(json!({
                        "status": "unavailable",
                        "timestamp": Utc::now().to_rfc3339()
                    })),
                )
                    .into_response()
            }
        }
    }
}
