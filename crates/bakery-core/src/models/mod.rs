// ABOUTME: Core data models for the bakery production service
// ABOUTME: Re-exports recipe, stock, and tenant types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Data Models
//!
//! Read-only views of the entities the production engine consumes. They are
//! created and mutated by the CRUD layer; the engine only ever sees them
//! through a tenant-scoped snapshot.
//!
//! - `Recipe` / `RecipeIngredient`: formulas and their ordered lines
//! - `IngredientRef`: raw material XOR intermediate product reference
//! - `StockItem` / `InventorySnapshot`: on-hand ledger state at call time
//! - `TenantId`: the scope every read is filtered by

mod recipe;
mod stock;
mod tenant;

pub use recipe::{Recipe, RecipeIngredient};
pub use stock::{IngredientRef, InventorySnapshot, StockItem, StockKind};
pub use tenant::TenantId;
