// ABOUTME: Main library entry point for the bakery production API
// ABOUTME: Serves recipe feasibility and cost analysis over a tenant-scoped inventory store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # Bakery Inventory Server
//!
//! HTTP front end for the production engine in `bakery-production`.
//!
//! ## Features
//!
//! - **What can I make**: batch feasibility for every active recipe,
//!   honoring expiry and contamination of stock
//! - **Recipe costing**: itemized batch cost and cost per unit
//! - **Tenant isolation**: every read is scoped by the `x-tenant-id` header
//!
//! ## Architecture
//!
//! - **Routes**: thin axum handlers wrapping results in `{ success, data }`
//! - **Services**: fetch recipes and stock, then call the pure engine
//! - **Database**: the [`database::InventoryProvider`] trait and its `SQLite` backend
//! - **Config**: environment-only server configuration
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use bakery_inventory::config::environment::ServerConfig;
//! use bakery_inventory::server;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let resources = server::bootstrap(config).await?;
//!     server::run(resources).await
//! }
//! ```

/// Environment configuration
pub mod config;

/// Header names, defaults, and route paths
pub mod constants;

/// Inventory store trait and `SQLite` backend
pub mod database;

/// Error types shared with `bakery-core`
pub mod errors;

/// Structured logging setup
pub mod logging;

/// Tenant extraction, request spans, and CORS
pub mod middleware;

/// Shared handler state
pub mod resources;

/// HTTP route handlers
pub mod routes;

/// Router assembly and server lifecycle
pub mod server;

/// Production analysis services
pub mod services;

/// Tenant context
pub mod tenant;
