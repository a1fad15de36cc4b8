// ABOUTME: Recipe and recipe ingredient models for production planning
// ABOUTME: A recipe maps ordered ingredient lines to a yield quantity and unit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use super::stock::{IngredientRef, StockItem};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One ingredient line of a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    /// Stock item this line consumes
    pub ingredient: IngredientRef,
    /// Quantity required per batch
    pub quantity: f64,
    /// Unit of measure, expected to match the stock item's unit
    pub unit: String,
    /// Free-form notes ("sifted", "room temperature", ...)
    pub notes: Option<String>,
}

impl RecipeIngredient {
    /// Create a line referencing `ingredient`
    #[must_use]
    pub fn new(ingredient: IngredientRef, quantity: f64, unit: impl Into<String>) -> Self {
        Self {
            ingredient,
            quantity,
            unit: unit.into(),
            notes: None,
        }
    }

    /// Create a line consuming `item`, using the item's unit
    #[must_use]
    pub fn for_item(item: &StockItem, quantity: f64) -> Self {
        Self::new(item.reference(), quantity, item.unit.clone())
    }

    /// Attach notes to the line
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// A named formula producing `yield_quantity` of `yield_unit` per batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Unique identifier
    pub id: Uuid,
    /// Recipe name
    pub name: String,
    /// Category (bread, pastry, ...)
    pub category: String,
    /// Output per batch
    pub yield_quantity: f64,
    /// Unit of the output
    pub yield_unit: String,
    /// Inactive recipes are hidden from feasibility reports
    pub is_active: bool,
    /// Ingredient lines in display order
    pub ingredients: Vec<RecipeIngredient>,
}

impl Recipe {
    /// Create an active recipe with no ingredients
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        yield_quantity: f64,
        yield_unit: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            category: category.into(),
            yield_quantity,
            yield_unit: yield_unit.into(),
            is_active: true,
            ingredients: Vec::new(),
        }
    }

    /// Append an ingredient line
    #[must_use]
    pub fn with_ingredient(mut self, ingredient: RecipeIngredient) -> Self {
        self.ingredients.push(ingredient);
        self
    }

    /// Mark the recipe inactive
    #[must_use]
    pub const fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }
}
