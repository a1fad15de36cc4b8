// ABOUTME: Domain service layer between route handlers and the production engine
// ABOUTME: Fetches tenant data from the inventory store and runs the analyses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Domain service layer
//!
//! Route handlers stay thin: they resolve the tenant and hand off to the
//! services here, which own data fetching and error mapping.

/// Feasibility and costing over a tenant's inventory
pub mod production;

pub use production::ProductionService;
