// ABOUTME: Core types and errors for the bakery production service
// ABOUTME: Foundation crate with domain models, error handling, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # Bakery Core
//!
//! Foundation crate shared by the production engine and the HTTP server.
//! It changes rarely, which keeps incremental builds of the workspace fast.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode`, and the error response envelope
//! - **models**: recipes, stock items, inventory snapshots, tenant ids
//! - **constants**: header names and defaults shared across crates

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Core data models (Recipe, StockItem, `InventorySnapshot`, `TenantId`)
pub mod models;

/// Application constants shared across crates
pub mod constants;
