// ABOUTME: Application constants for the server crate
// ABOUTME: Re-exports shared header names and defaults, adds route paths
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

pub use bakery_core::constants::{defaults, headers, service_names};

/// HTTP route paths
pub mod routes {
    /// Feasibility over all active recipes
    pub const WHAT_CAN_I_MAKE: &str = "/recipes/what-can-i-make";
    /// Cost breakdown of one recipe
    pub const RECIPE_COST: &str = "/recipes/:recipe_id/cost";
    /// Liveness probe
    pub const HEALTH: &str = "/health";
    /// Readiness probe, checks the store
    pub const READY: &str = "/ready";
}
