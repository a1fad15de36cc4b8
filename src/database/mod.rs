// ABOUTME: Inventory store abstraction used by the production services
// ABOUTME: Defines the tenant-scoped InventoryProvider trait and its SQLite backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Inventory Store
//!
//! Production analyses read recipes and stock through [`InventoryProvider`].
//! Every read takes the tenant explicitly and never returns another tenant's
//! rows. Ingredient lines come back in their stored position order.

/// `SQLite` implementation of the inventory store
pub mod sqlite;

pub use sqlite::SqliteInventory;

use async_trait::async_trait;
use bakery_core::errors::DatabaseError;
use bakery_core::models::{InventorySnapshot, Recipe, TenantId};
use uuid::Uuid;

/// Tenant-scoped read access to recipes and stock
#[async_trait]
pub trait InventoryProvider: Send + Sync {
    /// All recipes of the tenant, active or not, with ordered ingredient lines
    async fn list_recipes(&self, tenant_id: TenantId) -> Result<Vec<Recipe>, DatabaseError>;

    /// One recipe by id, `None` when it does not exist for this tenant
    async fn get_recipe(
        &self,
        tenant_id: TenantId,
        recipe_id: Uuid,
    ) -> Result<Option<Recipe>, DatabaseError>;

    /// Every raw material and intermediate product the tenant holds
    async fn inventory_snapshot(
        &self,
        tenant_id: TenantId,
    ) -> Result<InventorySnapshot, DatabaseError>;

    /// Cheap round trip used by the readiness probe
    async fn health_check(&self) -> Result<(), DatabaseError>;
}
