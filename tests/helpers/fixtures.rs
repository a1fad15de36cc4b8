// ABOUTME: Bakery inventory fixtures for integration tests
// ABOUTME: Builds in-memory stores, test configuration, and a failing store stub

#![allow(dead_code)]

use async_trait::async_trait;
use bakery_core::errors::DatabaseError;
use bakery_core::models::{InventorySnapshot, Recipe, TenantId};
use bakery_inventory::config::environment::{
    CorsConfig, DatabaseConfig, DatabaseUrl, Environment, LogLevel, ServerConfig,
};
use bakery_inventory::database::{InventoryProvider, SqliteInventory};
use bakery_inventory::resources::ServerResources;
use bakery_inventory::server::build_router;
use std::sync::Arc;
use uuid::Uuid;

/// Configuration pointing at an in-memory store
pub fn test_config() -> ServerConfig {
    ServerConfig {
        http_port: 8081,
        log_level: LogLevel::Debug,
        environment: Environment::Testing,
        database: DatabaseConfig {
            url: DatabaseUrl::Memory,
            auto_migrate: true,
        },
        cors: CorsConfig {
            allowed_origins: "*".to_owned(),
        },
        server_version: "test".to_owned(),
    }
}

/// Fresh in-memory store plus a tenant to seed it with
pub async fn empty_store() -> (SqliteInventory, TenantId) {
    let store = SqliteInventory::in_memory()
        .await
        .expect("in-memory store should open");
    (store, TenantId::new())
}

/// Resources around any inventory provider
pub fn resources_for(store: Arc<dyn InventoryProvider>) -> Arc<ServerResources> {
    Arc::new(ServerResources::new(Arc::new(test_config()), store))
}

/// Full application router over `store`
pub fn app_for(store: SqliteInventory) -> axum::Router {
    build_router(resources_for(Arc::new(store)))
}

fn pool_timeout(operation: &'static str) -> DatabaseError {
    DatabaseError::query(operation, sqlx::Error::PoolTimedOut)
}

/// Store whose every read fails
pub struct FailingInventory;

#[async_trait]
impl InventoryProvider for FailingInventory {
    async fn list_recipes(&self, _tenant_id: TenantId) -> Result<Vec<Recipe>, DatabaseError> {
        Err(pool_timeout("list_recipes"))
    }

    async fn get_recipe(
        &self,
        _tenant_id: TenantId,
        _recipe_id: Uuid,
    ) -> Result<Option<Recipe>, DatabaseError> {
        Err(pool_timeout("get_recipe"))
    }

    async fn inventory_snapshot(
        &self,
        _tenant_id: TenantId,
    ) -> Result<InventorySnapshot, DatabaseError> {
        Err(pool_timeout("inventory_snapshot"))
    }

    async fn health_check(&self) -> Result<(), DatabaseError> {
        Err(pool_timeout("health_check"))
    }
}
