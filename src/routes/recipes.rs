// ABOUTME: Recipe production route handlers for feasibility and cost analysis
// ABOUTME: Exposes what-can-I-make and per-recipe cost endpoints scoped by x-tenant-id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Recipe production routes
//!
//! Both endpoints require the `x-tenant-id` header. The tenant middleware is
//! layered on this router only, so health probes stay tenant-free.

use super::ApiResponse;
use crate::constants::routes;
use crate::errors::AppError;
use crate::middleware::{tenant_context_middleware, ExtractedTenantContext};
use crate::resources::ServerResources;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::get,
    Extension, Json, Router,
};
use std::sync::Arc;
use uuid::Uuid;

/// Recipe production routes
pub struct RecipeRoutes;

impl RecipeRoutes {
    /// Create all recipe production routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(routes::WHAT_CAN_I_MAKE, get(Self::handle_what_can_i_make))
            .route(routes::RECIPE_COST, get(Self::handle_recipe_cost))
            .layer(middleware::from_fn(tenant_context_middleware))
            .with_state(resources)
    }

    /// Handle feasibility over all active recipes
    async fn handle_what_can_i_make(
        State(resources): State<Arc<ServerResources>>,
        Extension(tenant): Extension<ExtractedTenantContext>,
    ) -> Result<Response, AppError> {
        let tenant = tenant.require()?;

        let report = resources.production.what_can_i_make(tenant).await?;

        Ok((StatusCode::OK, Json(ApiResponse::ok(report))).into_response())
    }

    /// Handle cost breakdown of one recipe
    async fn handle_recipe_cost(
        State(resources): State<Arc<ServerResources>>,
        Extension(tenant): Extension<ExtractedTenantContext>,
        Path(recipe_id): Path<String>,
    ) -> Result<Response, AppError> {
        let tenant = tenant.require()?;
        let recipe_id = Uuid::parse_str(&recipe_id).map_err(|e| {
            AppError::invalid_input(format!("Invalid recipe id '{recipe_id}': {e}"))
        })?;

        let analysis = resources.production.recipe_cost(tenant, recipe_id).await?;

        Ok((StatusCode::OK, Json(ApiResponse::ok(analysis))).into_response())
    }
}
