// ABOUTME: Recipe cost analysis with itemized ingredient costs
// ABOUTME: Computes total and per-unit cost against the raw on-hand ledger
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Recipe Cost Analysis
//!
//! Costing reads the raw ledger: contaminated or expired stock still counts
//! toward `available_quantity`, unlike feasibility analysis. The two
//! "can make" answers therefore differ on purpose and are kept separate.

use crate::error::ProductionError;
use bakery_core::models::{InventorySnapshot, Recipe, RecipeIngredient};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

/// Cost of one ingredient line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientCost {
    /// Id of the referenced stock item
    pub ingredient_id: Uuid,
    /// Stock item name
    pub name: String,
    /// Quantity required per batch
    pub quantity: f64,
    /// Unit of the line
    pub unit: String,
    /// Stock unit cost, 0 when unknown
    pub unit_cost: f64,
    /// `quantity * unit_cost`
    pub total_cost: f64,
    /// Raw on-hand quantity, 0 when the stock item is gone
    pub available_quantity: f64,
    /// `available_quantity >= quantity`
    pub can_make: bool,
}

/// Itemized cost breakdown for a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeCostAnalysis {
    /// Recipe name
    pub recipe_name: String,
    /// Sum of line costs in ingredient order
    pub total_cost: f64,
    /// `total_cost / yield_quantity`, `None` when the yield is not positive
    pub cost_per_unit: Option<f64>,
    /// Output per batch
    pub yield_quantity: f64,
    /// Unit of the output
    pub yield_unit: String,
    /// AND of every line's `can_make`
    pub can_make_recipe: bool,
    /// Line costs in recipe order
    pub ingredient_costs: Vec<IngredientCost>,
}

fn cost_line(line: &RecipeIngredient, inventory: &InventorySnapshot) -> IngredientCost {
    let item = inventory.resolve(&line.ingredient);
    let unit_cost = item.and_then(|item| item.unit_cost).unwrap_or(0.0);
    let available_quantity = item.map_or(0.0, |item| item.quantity);

    IngredientCost {
        ingredient_id: line.ingredient.id(),
        name: item.map_or_else(
            || format!("Unknown {}", line.ingredient.kind().as_str()),
            |item| item.name.clone(),
        ),
        quantity: line.quantity,
        unit: line.unit.clone(),
        unit_cost,
        total_cost: line.quantity * unit_cost,
        available_quantity,
        can_make: available_quantity >= line.quantity,
    }
}

/// Divide a batch cost across the recipe's yield
///
/// # Errors
///
/// Returns [`ProductionError::InvalidYield`] when the yield is zero,
/// negative or not a number.
pub fn cost_per_unit(recipe: &Recipe, total_cost: f64) -> Result<f64, ProductionError> {
    if recipe.yield_quantity > 0.0 {
        Ok(total_cost / recipe.yield_quantity)
    } else {
        Err(ProductionError::InvalidYield {
            recipe: recipe.name.clone(),
            yield_quantity: recipe.yield_quantity,
        })
    }
}

/// Compute the itemized cost of one batch of `recipe`
///
/// A non-positive yield does not fail the analysis: `cost_per_unit` is
/// reported as `None` and the rest of the breakdown stays usable.
#[must_use]
pub fn compute_recipe_cost(recipe: &Recipe, inventory: &InventorySnapshot) -> RecipeCostAnalysis {
    let ingredient_costs: Vec<IngredientCost> = recipe
        .ingredients
        .iter()
        .map(|line| cost_line(line, inventory))
        .collect();

    let total_cost = ingredient_costs
        .iter()
        .fold(0.0, |sum, line| sum + line.total_cost);

    let cost_per_unit = cost_per_unit(recipe, total_cost)
        .inspect_err(|error| warn!(recipe_id = %recipe.id, "{error}"))
        .ok();

    debug!(
        recipe_id = %recipe.id,
        lines = ingredient_costs.len(),
        total_cost,
        "Recipe cost analysis complete"
    );

    RecipeCostAnalysis {
        recipe_name: recipe.name.clone(),
        total_cost,
        cost_per_unit,
        yield_quantity: recipe.yield_quantity,
        yield_unit: recipe.yield_unit.clone(),
        can_make_recipe: ingredient_costs.iter().all(|line| line.can_make),
        ingredient_costs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bakery_core::models::StockItem;
    use chrono::{Duration, Utc};

    fn approx(left: f64, right: f64) -> bool {
        (left - right).abs() < 1e-9
    }

    fn brioche(butter: &StockItem, flour: &StockItem, yield_quantity: f64) -> Recipe {
        Recipe::new("Brioche", "enriched", yield_quantity, "loaves")
            .with_ingredient(RecipeIngredient::for_item(flour, 1.0))
            .with_ingredient(RecipeIngredient::for_item(butter, 0.5))
    }

    #[test]
    fn test_total_and_per_unit_cost() {
        let flour = StockItem::raw_material("Bread Flour", 20.0, "kg").with_unit_cost(1.2);
        let butter = StockItem::raw_material("Butter", 4.0, "kg").with_unit_cost(8.0);
        let recipe = brioche(&butter, &flour, 4.0);
        let inventory: InventorySnapshot = [flour, butter].into_iter().collect();

        let analysis = compute_recipe_cost(&recipe, &inventory);

        assert!(approx(analysis.ingredient_costs[0].total_cost, 1.2));
        assert!(approx(analysis.ingredient_costs[1].total_cost, 4.0));
        assert!(approx(analysis.total_cost, 1.2 + 4.0));
        assert!(analysis
            .cost_per_unit
            .is_some_and(|per_unit| approx(per_unit, 5.2 / 4.0)));
        assert!(analysis.can_make_recipe);
    }

    #[test]
    fn test_zero_yield_keeps_total_but_drops_per_unit() {
        let flour = StockItem::raw_material("Bread Flour", 20.0, "kg").with_unit_cost(1.0);
        let butter = StockItem::raw_material("Butter", 4.0, "kg").with_unit_cost(10.0);
        let recipe = brioche(&butter, &flour, 0.0);
        let inventory: InventorySnapshot = [flour, butter].into_iter().collect();

        let analysis = compute_recipe_cost(&recipe, &inventory);

        assert!(approx(analysis.total_cost, 6.0));
        assert!(analysis.cost_per_unit.is_none());
        assert!(matches!(
            cost_per_unit(&recipe, analysis.total_cost),
            Err(ProductionError::InvalidYield { .. })
        ));
    }

    #[test]
    fn test_unknown_cost_and_missing_item_count_as_zero() {
        let flour = StockItem::raw_material("Bread Flour", 20.0, "kg");
        let butter = StockItem::raw_material("Butter", 4.0, "kg").with_unit_cost(8.0);
        let recipe = brioche(&butter, &flour, 2.0);
        let inventory: InventorySnapshot = [flour].into_iter().collect();

        let analysis = compute_recipe_cost(&recipe, &inventory);

        assert!(approx(analysis.ingredient_costs[0].unit_cost, 0.0));
        let missing = &analysis.ingredient_costs[1];
        assert_eq!(missing.ingredient_id, butter.id);
        assert!(approx(missing.unit_cost, 0.0));
        assert!(approx(missing.available_quantity, 0.0));
        assert!(!missing.can_make);
        assert!(!analysis.can_make_recipe);
        assert!(approx(analysis.total_cost, 0.0));
    }

    #[test]
    fn test_costing_ignores_contamination_and_expiry() {
        let flour = StockItem::raw_material("Bread Flour", 20.0, "kg")
            .with_unit_cost(1.0)
            .contaminated();
        let butter = StockItem::raw_material("Butter", 4.0, "kg")
            .with_unit_cost(8.0)
            .expiring_at(Utc::now() - Duration::days(2));
        let recipe = brioche(&butter, &flour, 2.0);
        let inventory: InventorySnapshot = [flour, butter].into_iter().collect();

        let analysis = compute_recipe_cost(&recipe, &inventory);

        assert!(analysis.can_make_recipe);
        assert!(approx(analysis.ingredient_costs[0].available_quantity, 20.0));
        assert!(approx(analysis.ingredient_costs[1].available_quantity, 4.0));
    }

    #[test]
    fn test_line_can_make_is_per_line() {
        let flour = StockItem::raw_material("Bread Flour", 0.5, "kg").with_unit_cost(1.0);
        let butter = StockItem::raw_material("Butter", 4.0, "kg").with_unit_cost(8.0);
        let recipe = brioche(&butter, &flour, 2.0);
        let inventory: InventorySnapshot = [flour, butter].into_iter().collect();

        let analysis = compute_recipe_cost(&recipe, &inventory);

        assert!(!analysis.ingredient_costs[0].can_make);
        assert!(analysis.ingredient_costs[1].can_make);
        assert!(!analysis.can_make_recipe);
    }

    #[test]
    fn test_empty_recipe_costs_nothing() {
        let recipe = Recipe::new("Placeholder", "misc", 3.0, "pcs");

        let analysis = compute_recipe_cost(&recipe, &InventorySnapshot::new());

        assert!(approx(analysis.total_cost, 0.0));
        assert!(analysis.cost_per_unit.is_some_and(|per_unit| approx(per_unit, 0.0)));
        assert!(analysis.can_make_recipe);
        assert!(analysis.ingredient_costs.is_empty());
    }

    #[test]
    fn test_cost_serializes_null_per_unit() {
        let recipe = Recipe::new("Placeholder", "misc", 0.0, "pcs");

        let json = serde_json::to_value(compute_recipe_cost(&recipe, &InventorySnapshot::new()))
            .unwrap_or_default();

        assert!(json["costPerUnit"].is_null());
        assert_eq!(json["totalCost"], 0.0);
        assert_eq!(json["canMakeRecipe"], true);
    }

    #[test]
    fn test_repeated_costing_is_byte_identical() {
        let flour = StockItem::raw_material("Bread Flour", 20.0, "kg").with_unit_cost(0.1);
        let butter = StockItem::raw_material("Butter", 4.0, "kg").with_unit_cost(7.33);
        let sugar = StockItem::raw_material("Sugar", 9.0, "kg").with_unit_cost(0.2);
        let levain = StockItem::intermediate_product("Levain", 3.0, "kg").with_unit_cost(1.7);
        let recipe = Recipe::new("Sourdough Brioche", "enriched", 3.0, "loaves")
            .with_ingredient(RecipeIngredient::for_item(&flour, 0.7))
            .with_ingredient(RecipeIngredient::for_item(&butter, 0.35))
            .with_ingredient(RecipeIngredient::for_item(&sugar, 0.3))
            .with_ingredient(RecipeIngredient::for_item(&levain, 0.45));
        let inventory: InventorySnapshot = [levain, sugar, butter, flour].into_iter().collect();

        let first = compute_recipe_cost(&recipe, &inventory);
        let second = compute_recipe_cost(&recipe, &inventory);

        let first_json = serde_json::to_string(&first).unwrap_or_default();
        let second_json = serde_json::to_string(&second).unwrap_or_default();
        assert!(!first_json.is_empty());
        assert_eq!(first_json, second_json);

        let in_line_order = first
            .ingredient_costs
            .iter()
            .fold(0.0, |sum, line| sum + line.total_cost);
        assert_eq!(first.total_cost.to_bits(), in_line_order.to_bits());
    }
}
