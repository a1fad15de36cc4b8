// ABOUTME: Stock item models for raw materials and intermediate products
// ABOUTME: Defines IngredientRef, StockItem, and the tenant-scoped InventorySnapshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Which ledger a stock item lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockKind {
    /// Purchased ingredient
    RawMaterial,
    /// Semi-finished good produced in-house
    IntermediateProduct,
}

impl StockKind {
    /// Convert to database string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::RawMaterial => "raw_material",
            Self::IntermediateProduct => "intermediate_product",
        }
    }
}

/// Reference from a recipe line to exactly one stock item
///
/// A line points at a raw material or an intermediate product, never both
/// and never neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum IngredientRef {
    /// Raw material by id
    RawMaterial(Uuid),
    /// Intermediate product by id
    IntermediateProduct(Uuid),
}

impl IngredientRef {
    /// Build a reference of the given kind
    #[must_use]
    pub const fn new(kind: StockKind, id: Uuid) -> Self {
        match kind {
            StockKind::RawMaterial => Self::RawMaterial(id),
            StockKind::IntermediateProduct => Self::IntermediateProduct(id),
        }
    }

    /// Id of the referenced stock item
    #[must_use]
    pub const fn id(&self) -> Uuid {
        match self {
            Self::RawMaterial(id) | Self::IntermediateProduct(id) => *id,
        }
    }

    /// Ledger the referenced item belongs to
    #[must_use]
    pub const fn kind(&self) -> StockKind {
        match self {
            Self::RawMaterial(_) => StockKind::RawMaterial,
            Self::IntermediateProduct(_) => StockKind::IntermediateProduct,
        }
    }
}

/// A raw material or intermediate product with its current ledger state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockItem {
    /// Unique identifier
    pub id: Uuid,
    /// Ledger this item belongs to
    pub kind: StockKind,
    /// Display name
    pub name: String,
    /// On-hand quantity
    pub quantity: f64,
    /// Unit of measure (kg, L, pcs, ...)
    pub unit: String,
    /// Expiration timestamp, if tracked
    pub expiration_date: Option<DateTime<Utc>>,
    /// Quality hold flag
    pub is_contaminated: bool,
    /// Cost per unit, if known
    pub unit_cost: Option<f64>,
}

impl StockItem {
    /// Create a raw material with a fresh id
    #[must_use]
    pub fn raw_material(name: impl Into<String>, quantity: f64, unit: impl Into<String>) -> Self {
        Self::with_kind(StockKind::RawMaterial, name, quantity, unit)
    }

    /// Create an intermediate product with a fresh id
    #[must_use]
    pub fn intermediate_product(
        name: impl Into<String>,
        quantity: f64,
        unit: impl Into<String>,
    ) -> Self {
        Self::with_kind(StockKind::IntermediateProduct, name, quantity, unit)
    }

    fn with_kind(
        kind: StockKind,
        name: impl Into<String>,
        quantity: f64,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            name: name.into(),
            quantity,
            unit: unit.into(),
            expiration_date: None,
            is_contaminated: false,
            unit_cost: None,
        }
    }

    /// Set the expiration timestamp
    #[must_use]
    pub fn expiring_at(mut self, expiration_date: DateTime<Utc>) -> Self {
        self.expiration_date = Some(expiration_date);
        self
    }

    /// Flag the item as contaminated
    #[must_use]
    pub const fn contaminated(mut self) -> Self {
        self.is_contaminated = true;
        self
    }

    /// Set the cost per unit
    #[must_use]
    pub const fn with_unit_cost(mut self, unit_cost: f64) -> Self {
        self.unit_cost = Some(unit_cost);
        self
    }

    /// Reference a recipe line would use to point at this item
    #[must_use]
    pub const fn reference(&self) -> IngredientRef {
        IngredientRef::new(self.kind, self.id)
    }

    /// True when the expiration date is strictly before `now`
    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expiration_date.is_some_and(|expires| expires < now)
    }
}

/// Tenant-scoped stock read taken at call time
///
/// Keyed by [`IngredientRef`] so a recipe line resolves with one lookup and
/// raw materials never collide with intermediate products.
#[derive(Debug, Clone, Default)]
pub struct InventorySnapshot {
    items: HashMap<IngredientRef, StockItem>,
}

impl InventorySnapshot {
    /// Create an empty snapshot
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an item
    pub fn insert(&mut self, item: StockItem) {
        self.items.insert(item.reference(), item);
    }

    /// Look up the stock item a recipe line points at
    #[must_use]
    pub fn resolve(&self, reference: &IngredientRef) -> Option<&StockItem> {
        self.items.get(reference)
    }

    /// Number of stock items in the snapshot
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the tenant has no stock at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<StockItem> for InventorySnapshot {
    fn from_iter<I: IntoIterator<Item = StockItem>>(iter: I) -> Self {
        let mut snapshot = Self::new();
        for item in iter {
            snapshot.insert(item);
        }
        snapshot
    }
}
