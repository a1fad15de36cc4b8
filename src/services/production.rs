// ABOUTME: Production analysis service: what-can-I-make and recipe costing
// ABOUTME: Loads a tenant's recipes and stock snapshot, then calls the pure engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use crate::database::InventoryProvider;
use crate::errors::AppResult;
use crate::logging::TenantLogger;
use crate::tenant::TenantContext;
use bakery_core::errors::DatabaseError;
use bakery_production::{
    analyze_feasibility, compute_recipe_cost, FeasibilityReport, ProductionError,
    RecipeCostAnalysis,
};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Instant;
use tracing::error;
use uuid::Uuid;

fn unavailable(error: &DatabaseError) -> ProductionError {
    error!(error = %error, "Inventory store read failed");
    ProductionError::DataUnavailable {
        reason: error.to_string(),
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}

/// Runs production analyses against one inventory store
#[derive(Clone)]
pub struct ProductionService {
    store: Arc<dyn InventoryProvider>,
}

impl ProductionService {
    /// Create a service over `store`
    #[must_use]
    pub fn new(store: Arc<dyn InventoryProvider>) -> Self {
        Self { store }
    }

    /// Feasibility report for every active recipe of the tenant, as of now
    ///
    /// # Errors
    ///
    /// Returns `DataUnavailable` if recipes or stock cannot be read.
    pub async fn what_can_i_make(&self, tenant: TenantContext) -> AppResult<FeasibilityReport> {
        self.what_can_i_make_at(tenant, Utc::now()).await
    }

    /// Feasibility report evaluated at `now`
    ///
    /// # Errors
    ///
    /// Returns `DataUnavailable` if recipes or stock cannot be read.
    pub async fn what_can_i_make_at(
        &self,
        tenant: TenantContext,
        now: DateTime<Utc>,
    ) -> AppResult<FeasibilityReport> {
        let started = Instant::now();
        let fetched = tokio::try_join!(
            self.store.list_recipes(tenant.tenant_id),
            self.store.inventory_snapshot(tenant.tenant_id),
        );

        let (recipes, inventory) = match fetched {
            Ok(data) => data,
            Err(e) => {
                TenantLogger::log_analysis(
                    tenant.tenant_id,
                    "what_can_i_make",
                    false,
                    elapsed_ms(started),
                );
                return Err(unavailable(&e).into());
            }
        };

        let report = analyze_feasibility(&recipes, &inventory, now);
        TenantLogger::log_analysis(
            tenant.tenant_id,
            "what_can_i_make",
            true,
            elapsed_ms(started),
        );
        Ok(report)
    }

    /// Itemized cost of one batch of `recipe_id`
    ///
    /// Works on inactive recipes too; costing looks a recipe up by id only.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the tenant has no such recipe, or
    /// `DataUnavailable` if the store cannot be read.
    pub async fn recipe_cost(
        &self,
        tenant: TenantContext,
        recipe_id: Uuid,
    ) -> AppResult<RecipeCostAnalysis> {
        let started = Instant::now();
        let result = self.load_and_cost(tenant, recipe_id).await;
        TenantLogger::log_analysis(
            tenant.tenant_id,
            "recipe_cost",
            result.is_ok(),
            elapsed_ms(started),
        );
        result.map_err(Into::into)
    }

    async fn load_and_cost(
        &self,
        tenant: TenantContext,
        recipe_id: Uuid,
    ) -> Result<RecipeCostAnalysis, ProductionError> {
        let recipe = self
            .store
            .get_recipe(tenant.tenant_id, recipe_id)
            .await
            .map_err(|e| unavailable(&e))?
            .ok_or(ProductionError::NotFound { recipe_id })?;

        let inventory = self
            .store
            .inventory_snapshot(tenant.tenant_id)
            .await
            .map_err(|e| unavailable(&e))?;

        Ok(compute_recipe_cost(&recipe, &inventory))
    }

    /// Whether the inventory store answers
    ///
    /// # Errors
    ///
    /// Returns `DataUnavailable` if the store round trip fails.
    pub async fn check_store(&self) -> AppResult<()> {
        self.store.health_check().await.map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::SqliteInventory;
    use bakery_core::errors::ErrorCode;
    use bakery_core::models::{Recipe, RecipeIngredient, StockItem, TenantId};

    async fn seeded() -> (ProductionService, TenantContext, Recipe) {
        let store = SqliteInventory::in_memory().await.unwrap();
        let tenant = TenantContext::new(TenantId::new());
        let flour = StockItem::raw_material("Flour", 10.0, "kg").with_unit_cost(2.0);
        let recipe = Recipe::new("Rolls", "bread", 12.0, "pcs")
            .with_ingredient(RecipeIngredient::for_item(&flour, 2.0));

        store.insert_stock_item(tenant.tenant_id, &flour).await.unwrap();
        store.insert_recipe(tenant.tenant_id, &recipe).await.unwrap();

        (ProductionService::new(Arc::new(store)), tenant, recipe)
    }

    #[tokio::test]
    async fn test_what_can_i_make_reads_tenant_data() {
        let (service, tenant, _) = seeded().await;

        let report = service.what_can_i_make(tenant).await.unwrap();

        assert_eq!(report.total_recipes, 1);
        assert_eq!(report.can_make_count, 1);
        assert_eq!(report.recipes[0].max_batches, 5);
    }

    #[tokio::test]
    async fn test_recipe_cost_unknown_recipe_is_not_found() {
        let (service, tenant, _) = seeded().await;

        let error = service.recipe_cost(tenant, Uuid::new_v4()).await.unwrap_err();

        assert_eq!(error.code, ErrorCode::ResourceNotFound);
    }

    #[tokio::test]
    async fn test_recipe_cost_is_tenant_scoped() {
        let (service, _, recipe) = seeded().await;
        let stranger = TenantContext::new(TenantId::new());

        let error = service.recipe_cost(stranger, recipe.id).await.unwrap_err();

        assert_eq!(error.code, ErrorCode::ResourceNotFound);
    }
}
