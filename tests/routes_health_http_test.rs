// ABOUTME: HTTP integration tests for health check routes
// ABOUTME: Tests liveness and store-backed readiness without tenant headers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use bakery_inventory::routes::HealthRoutes;
use helpers::axum_test::AxumTestRequest;
use helpers::fixtures::{empty_store, resources_for, FailingInventory};
use std::sync::Arc;

async fn health_routes() -> axum::Router {
    let (store, _) = empty_store().await;
    HealthRoutes::routes(resources_for(Arc::new(store)))
}

#[tokio::test]
async fn test_health_endpoint_success() {
    let response = AxumTestRequest::get("/health").send(health_routes().await).await;

    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "healthy");
    let timestamp = body["timestamp"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
}

#[tokio::test]
async fn test_ready_endpoint_with_live_store() {
    let response = AxumTestRequest::get("/ready").send(health_routes().await).await;

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
async fn test_ready_endpoint_with_failing_store() {
    let routes = HealthRoutes::routes(resources_for(Arc::new(FailingInventory)));

    let response = AxumTestRequest::get("/ready").send(routes).await;

    assert_eq!(response.status(), 503);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "unavailable");
}

#[tokio::test]
async fn test_health_needs_no_tenant() {
    // Liveness must not depend on the store either
    let routes = HealthRoutes::routes(resources_for(Arc::new(FailingInventory)));

    let response = AxumTestRequest::get("/health").send(routes).await;

    assert_eq!(response.status(), 200);
}
