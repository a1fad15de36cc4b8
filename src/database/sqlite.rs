// ABOUTME: SQLite inventory store with tenant-scoped recipe and stock tables
// ABOUTME: Handles schema migration, row mapping, and seeding helpers via sqlx
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use super::InventoryProvider;
use crate::config::environment::DatabaseUrl;
use crate::middleware::create_database_span;
use async_trait::async_trait;
use bakery_core::errors::DatabaseError;
use bakery_core::models::{
    IngredientRef, InventorySnapshot, Recipe, RecipeIngredient, StockItem, StockKind, TenantId,
};
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqlitePoolOptions, SqliteRow};
use sqlx::{Row, Sqlite, SqliteConnection, SqlitePool, Transaction};
use std::collections::HashMap;
use tracing::{debug, info, Instrument, Span};
use uuid::Uuid;

const RAW_MATERIALS: &str = "raw_materials";
const INTERMEDIATE_PRODUCTS: &str = "intermediate_products";

const fn stock_table(kind: StockKind) -> &'static str {
    match kind {
        StockKind::RawMaterial => RAW_MATERIALS,
        StockKind::IntermediateProduct => INTERMEDIATE_PRODUCTS,
    }
}

/// `SQLite`-backed [`InventoryProvider`]
#[derive(Clone)]
pub struct SqliteInventory {
    pool: SqlitePool,
}

impl SqliteInventory {
    /// Open (creating if needed) the store at `url`
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established.
    pub async fn connect(url: &DatabaseUrl) -> Result<Self, DatabaseError> {
        match url {
            DatabaseUrl::Memory => Self::in_memory().await,
            DatabaseUrl::SQLite { .. } => {
                // Ensure SQLite creates the database file if it doesn't exist
                let connection_string = format!("{}?mode=rwc", url.to_connection_string());
                let pool = SqlitePoolOptions::new()
                    .connect(&connection_string)
                    .await
                    .map_err(|e| DatabaseError::query("connect", e))?;
                info!(database = %url, "Inventory store connected");
                Ok(Self { pool })
            }
        }
    }

    /// Fresh in-memory store, schema already created
    ///
    /// # Errors
    ///
    /// Returns an error if the in-memory database cannot be opened or migrated.
    pub async fn in_memory() -> Result<Self, DatabaseError> {
        // A single long-lived connection keeps the in-memory database alive
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .map_err(|e| DatabaseError::query("connect", e))?;

        let store = Self { pool };
        store.migrate().await?;
        Ok(store)
    }

    /// Create all inventory tables
    ///
    /// # Errors
    ///
    /// Returns [`DatabaseError::Migration`] if any statement fails.
    pub async fn migrate(&self) -> Result<(), DatabaseError> {
        for table in [RAW_MATERIALS, INTERMEDIATE_PRODUCTS] {
            sqlx::query(&format!(
                r"
                CREATE TABLE IF NOT EXISTS {table} (
                    id TEXT PRIMARY KEY,
                    tenant_id TEXT NOT NULL,
                    name TEXT NOT NULL,
                    quantity REAL NOT NULL,
                    unit TEXT NOT NULL,
                    expiration_date TEXT,
                    is_contaminated INTEGER NOT NULL DEFAULT 0,
                    unit_cost REAL
                )
                "
            ))
            .execute(&self.pool)
            .await
            .map_err(|e| DatabaseError::Migration(format!("{table}: {e}")))?;

            sqlx::query(&format!(
                "CREATE INDEX IF NOT EXISTS idx_{table}_tenant ON {table}(tenant_id)"
            ))
            .execute(&self.pool)
            .await
            .map_err(|e| DatabaseError::Migration(format!("{table} index: {e}")))?;
        }

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS recipes (
                id TEXT PRIMARY KEY,
                tenant_id TEXT NOT NULL,
                name TEXT NOT NULL,
                category TEXT NOT NULL,
                yield_quantity REAL NOT NULL,
                yield_unit TEXT NOT NULL,
                is_active INTEGER NOT NULL DEFAULT 1
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| DatabaseError::Migration(format!("recipes: {e}")))?;

        // Stock ids are not foreign keys: a line may outlive its stock item
        // and is then reported as not found.
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS recipe_ingredients (
                recipe_id TEXT NOT NULL REFERENCES recipes(id) ON DELETE CASCADE,
                position INTEGER NOT NULL,
                raw_material_id TEXT,
                intermediate_product_id TEXT,
                quantity REAL NOT NULL CHECK (quantity >= 0),
                unit TEXT NOT NULL,
                notes TEXT,
                PRIMARY KEY (recipe_id, position),
                CHECK ((raw_material_id IS NULL) <> (intermediate_product_id IS NULL))
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| DatabaseError::Migration(format!("recipe_ingredients: {e}")))?;

        debug!("Inventory schema migrated");
        Ok(())
    }

    /// Store a stock item for `tenant_id`, replacing any row with the same id
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub async fn insert_stock_item(
        &self,
        tenant_id: TenantId,
        item: &StockItem,
    ) -> Result<(), DatabaseError> {
        let table = stock_table(item.kind);
        sqlx::query(&format!(
            r"
            INSERT OR REPLACE INTO {table}
                (id, tenant_id, name, quantity, unit, expiration_date, is_contaminated, unit_cost)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "
        ))
        .bind(item.id.to_string())
        .bind(tenant_id.to_string())
        .bind(&item.name)
        .bind(item.quantity)
        .bind(&item.unit)
        .bind(item.expiration_date.map(|date| date.to_rfc3339()))
        .bind(item.is_contaminated)
        .bind(item.unit_cost)
        .execute(&self.pool)
        .await
        .map_err(|e| DatabaseError::query("insert_stock_item", e))?;

        Ok(())
    }

    /// Remove a stock item; recipes that use it keep their dangling line
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub async fn delete_stock_item(
        &self,
        tenant_id: TenantId,
        reference: IngredientRef,
    ) -> Result<bool, DatabaseError> {
        let table = stock_table(reference.kind());
        let result = sqlx::query(&format!(
            "DELETE FROM {table} WHERE id = $1 AND tenant_id = $2"
        ))
        .bind(reference.id().to_string())
        .bind(tenant_id.to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| DatabaseError::query("delete_stock_item", e))?;

        Ok(result.rows_affected() > 0)
    }

    /// Store a recipe and its ingredient lines in one transaction
    ///
    /// # Errors
    ///
    /// Returns an error if any statement fails; nothing is written in that case.
    pub async fn insert_recipe(
        &self,
        tenant_id: TenantId,
        recipe: &Recipe,
    ) -> Result<(), DatabaseError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DatabaseError::query("insert_recipe", e))?;

        sqlx::query(
            r"
            INSERT INTO recipes (id, tenant_id, name, category, yield_quantity, yield_unit, is_active)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(recipe.id.to_string())
        .bind(tenant_id.to_string())
        .bind(&recipe.name)
        .bind(&recipe.category)
        .bind(recipe.yield_quantity)
        .bind(&recipe.yield_unit)
        .bind(recipe.is_active)
        .execute(&mut *tx)
        .await
        .map_err(|e| DatabaseError::query("insert_recipe", e))?;

        for (position, line) in (0_i64..).zip(&recipe.ingredients) {
            let (raw_material_id, intermediate_product_id) = match line.ingredient {
                IngredientRef::RawMaterial(id) => (Some(id.to_string()), None),
                IngredientRef::IntermediateProduct(id) => (None, Some(id.to_string())),
            };

            sqlx::query(
                r"
                INSERT INTO recipe_ingredients
                    (recipe_id, position, raw_material_id, intermediate_product_id, quantity, unit, notes)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                ",
            )
            .bind(recipe.id.to_string())
            .bind(position)
            .bind(raw_material_id)
            .bind(intermediate_product_id)
            .bind(line.quantity)
            .bind(&line.unit)
            .bind(&line.notes)
            .execute(&mut *tx)
            .await
            .map_err(|e| DatabaseError::query("insert_recipe_ingredient", e))?;
        }

        tx.commit()
            .await
            .map_err(|e| DatabaseError::query("insert_recipe", e))?;

        Ok(())
    }

    /// Read transaction so multi-statement reads see one consistent state
    async fn begin_read(
        &self,
        operation: &'static str,
    ) -> Result<Transaction<'_, Sqlite>, DatabaseError> {
        self.pool
            .begin()
            .await
            .map_err(|e| DatabaseError::query(operation, e))
    }

    async fn load_stock(
        conn: &mut SqliteConnection,
        tenant_id: TenantId,
        kind: StockKind,
    ) -> Result<Vec<StockItem>, DatabaseError> {
        let table = stock_table(kind);
        let rows = sqlx::query(&format!(
            r"
            SELECT id, name, quantity, unit, expiration_date, is_contaminated, unit_cost
            FROM {table}
            WHERE tenant_id = $1
            "
        ))
        .bind(tenant_id.to_string())
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| DatabaseError::query("load_stock", e))?;

        rows.iter().map(|row| row_to_stock_item(row, kind)).collect()
    }

    async fn load_ingredients(
        conn: &mut SqliteConnection,
        tenant_id: TenantId,
        recipe_id: Option<Uuid>,
    ) -> Result<HashMap<Uuid, Vec<RecipeIngredient>>, DatabaseError> {
        let rows = sqlx::query(
            r"
            SELECT ri.recipe_id, ri.raw_material_id, ri.intermediate_product_id,
                   ri.quantity, ri.unit, ri.notes
            FROM recipe_ingredients ri
            JOIN recipes r ON r.id = ri.recipe_id
            WHERE r.tenant_id = $1 AND ($2 IS NULL OR r.id = $2)
            ORDER BY ri.recipe_id, ri.position
            ",
        )
        .bind(tenant_id.to_string())
        .bind(recipe_id.map(|id| id.to_string()))
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| DatabaseError::query("load_ingredients", e))?;

        let mut by_recipe: HashMap<Uuid, Vec<RecipeIngredient>> = HashMap::new();
        for row in &rows {
            let recipe_id = parse_uuid(row, "recipe_id", "recipe ingredient")?;
            by_recipe
                .entry(recipe_id)
                .or_default()
                .push(row_to_ingredient(row)?);
        }
        Ok(by_recipe)
    }
}

#[async_trait]
impl InventoryProvider for SqliteInventory {
    async fn list_recipes(&self, tenant_id: TenantId) -> Result<Vec<Recipe>, DatabaseError> {
        let span = create_database_span("list_recipes", "recipes");
        span.record("tenant_id", tenant_id.to_string());

        async {
            let mut tx = self.begin_read("list_recipes").await?;
            let rows = sqlx::query(
                r"
                SELECT id, name, category, yield_quantity, yield_unit, is_active
                FROM recipes
                WHERE tenant_id = $1
                ORDER BY name, id
                ",
            )
            .bind(tenant_id.to_string())
            .fetch_all(&mut *tx)
            .await
            .map_err(|e| DatabaseError::query("list_recipes", e))?;

            let mut ingredients = Self::load_ingredients(&mut tx, tenant_id, None).await?;
            tx.commit()
                .await
                .map_err(|e| DatabaseError::query("list_recipes", e))?;

            let recipes = rows
                .iter()
                .map(|row| {
                    let mut recipe = row_to_recipe(row)?;
                    recipe.ingredients = ingredients.remove(&recipe.id).unwrap_or_default();
                    Ok(recipe)
                })
                .collect::<Result<Vec<_>, DatabaseError>>()?;

            Span::current().record("rows", recipes.len());
            Ok::<_, DatabaseError>(recipes)
        }
        .instrument(span)
        .await
    }

    async fn get_recipe(
        &self,
        tenant_id: TenantId,
        recipe_id: Uuid,
    ) -> Result<Option<Recipe>, DatabaseError> {
        let span = create_database_span("get_recipe", "recipes");
        span.record("tenant_id", tenant_id.to_string());

        async {
            let mut tx = self.begin_read("get_recipe").await?;
            let row = sqlx::query(
                r"
                SELECT id, name, category, yield_quantity, yield_unit, is_active
                FROM recipes
                WHERE id = $1 AND tenant_id = $2
                ",
            )
            .bind(recipe_id.to_string())
            .bind(tenant_id.to_string())
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| DatabaseError::query("get_recipe", e))?;

            let Some(row) = row else {
                return Ok::<_, DatabaseError>(None);
            };

            let mut recipe = row_to_recipe(&row)?;
            recipe.ingredients = Self::load_ingredients(&mut tx, tenant_id, Some(recipe_id))
                .await?
                .remove(&recipe_id)
                .unwrap_or_default();
            tx.commit()
                .await
                .map_err(|e| DatabaseError::query("get_recipe", e))?;
            Ok(Some(recipe))
        }
        .instrument(span)
        .await
    }

    async fn inventory_snapshot(
        &self,
        tenant_id: TenantId,
    ) -> Result<InventorySnapshot, DatabaseError> {
        let span = create_database_span("inventory_snapshot", "stock");
        span.record("tenant_id", tenant_id.to_string());

        async {
            let mut tx = self.begin_read("inventory_snapshot").await?;
            let raw = Self::load_stock(&mut tx, tenant_id, StockKind::RawMaterial).await?;
            let intermediate =
                Self::load_stock(&mut tx, tenant_id, StockKind::IntermediateProduct).await?;
            tx.commit()
                .await
                .map_err(|e| DatabaseError::query("inventory_snapshot", e))?;

            let snapshot: InventorySnapshot = raw.into_iter().chain(intermediate).collect();
            Span::current().record("rows", snapshot.len());
            Ok::<_, DatabaseError>(snapshot)
        }
        .instrument(span)
        .await
    }

    async fn health_check(&self) -> Result<(), DatabaseError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| DatabaseError::query("health_check", e))?;
        Ok(())
    }
}

fn corrupt(entity: &'static str, reason: impl Into<String>) -> DatabaseError {
    DatabaseError::CorruptRow {
        entity,
        reason: reason.into(),
    }
}

fn parse_uuid(row: &SqliteRow, column: &str, entity: &'static str) -> Result<Uuid, DatabaseError> {
    let value: String = row.try_get(column)?;
    Uuid::parse_str(&value).map_err(|e| corrupt(entity, format!("invalid {column} '{value}': {e}")))
}

fn row_to_stock_item(row: &SqliteRow, kind: StockKind) -> Result<StockItem, DatabaseError> {
    let entity = stock_table(kind);
    let expiration_date = row
        .try_get::<Option<String>, _>("expiration_date")?
        .map(|value| {
            DateTime::parse_from_rfc3339(&value)
                .map(|date| date.with_timezone(&Utc))
                .map_err(|e| corrupt(entity, format!("invalid expiration_date '{value}': {e}")))
        })
        .transpose()?;

    Ok(StockItem {
        id: parse_uuid(row, "id", entity)?,
        kind,
        name: row.try_get("name")?,
        quantity: row.try_get("quantity")?,
        unit: row.try_get("unit")?,
        expiration_date,
        is_contaminated: row.try_get("is_contaminated")?,
        unit_cost: row.try_get("unit_cost")?,
    })
}

fn row_to_recipe(row: &SqliteRow) -> Result<Recipe, DatabaseError> {
    Ok(Recipe {
        id: parse_uuid(row, "id", "recipe")?,
        name: row.try_get("name")?,
        category: row.try_get("category")?,
        yield_quantity: row.try_get("yield_quantity")?,
        yield_unit: row.try_get("yield_unit")?,
        is_active: row.try_get("is_active")?,
        ingredients: Vec::new(),
    })
}

fn row_to_ingredient(row: &SqliteRow) -> Result<RecipeIngredient, DatabaseError> {
    const ENTITY: &str = "recipe ingredient";

    let raw: Option<String> = row.try_get("raw_material_id")?;
    let intermediate: Option<String> = row.try_get("intermediate_product_id")?;
    let (kind, id) = match (raw, intermediate) {
        (Some(id), None) => (StockKind::RawMaterial, id),
        (None, Some(id)) => (StockKind::IntermediateProduct, id),
        _ => return Err(corrupt(ENTITY, "line must reference exactly one stock item")),
    };
    let id = Uuid::parse_str(&id).map_err(|e| corrupt(ENTITY, format!("invalid stock id '{id}': {e}")))?;

    let quantity: f64 = row.try_get("quantity")?;
    if quantity < 0.0 {
        return Err(corrupt(ENTITY, format!("negative quantity {quantity}")));
    }

    Ok(RecipeIngredient {
        ingredient: IngredientRef::new(kind, id),
        quantity,
        unit: row.try_get("unit")?,
        notes: row.try_get("notes")?,
    })
}
