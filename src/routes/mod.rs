// ABOUTME: Route module organization for the bakery production HTTP API
// ABOUTME: Holds route definitions per domain and the shared success envelope
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! HTTP routes
//!
//! Each domain module contains only route definitions and thin handlers
//! that delegate to the service layer. Successful responses are wrapped in
//! [`ApiResponse`]; failures render through `AppError`.

/// Health and readiness probes
pub mod health;
/// What-can-I-make and recipe cost endpoints
pub mod recipes;

pub use health::HealthRoutes;
pub use recipes::RecipeRoutes;

use serde::{Deserialize, Serialize};

/// Success envelope: `{ "success": true, "data": ... }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Always `true`
    pub success: bool,
    /// Endpoint payload
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// Wrap `data` in a success envelope
    pub const fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}
