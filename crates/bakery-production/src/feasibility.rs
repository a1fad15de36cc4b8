// ABOUTME: "What can I make" feasibility analysis over the current inventory
// ABOUTME: Classifies blocking ingredients and computes the maximum batch count per recipe
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Feasibility Analysis
//!
//! For every active recipe, each ingredient line is resolved against the
//! inventory snapshot and classified:
//!
//! 1. stock item missing → [`MissingReason::NotFound`]
//! 2. contaminated → [`MissingReason::Contaminated`]
//! 3. expired strictly before `now` → [`MissingReason::Expired`]
//! 4. on-hand below the required quantity → [`MissingReason::Insufficient`]
//!
//! The first three zero the line's availability. A recipe can be made iff no
//! line carries a reason, and only then is `max_batches` the floor of the
//! smallest `available / needed` ratio.
//!
//! Lines are evaluated independently against the full on-hand quantity:
//! two lines sharing a stock item do not deduct from each other, and
//! recipes in the same report do not compete for stock.

use bakery_core::models::{IngredientRef, InventorySnapshot, Recipe, RecipeIngredient};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

/// Why an ingredient line blocks production
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingReason {
    /// The referenced stock item no longer exists
    NotFound,
    /// The stock item is on quality hold
    Contaminated,
    /// The stock item expired before the analysis time
    Expired,
    /// Usable stock is below the required quantity
    Insufficient,
}

impl MissingReason {
    /// Wire representation of the reason
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::Contaminated => "contaminated",
            Self::Expired => "expired",
            Self::Insufficient => "insufficient",
        }
    }
}

/// An ingredient line that prevents a recipe from being produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingIngredient {
    /// Stock item name
    pub name: String,
    /// Quantity required per batch
    pub needed: f64,
    /// Usable quantity (0 when not found, contaminated or expired)
    pub available: f64,
    /// `needed - available`, never negative
    pub shortage: f64,
    /// Classification of the block
    pub reason: MissingReason,
}

/// Feasibility of one recipe against the current inventory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeFeasibility {
    /// Recipe id
    pub recipe_id: Uuid,
    /// Recipe name
    pub recipe_name: String,
    /// Recipe category
    pub category: String,
    /// Output per batch
    pub yield_quantity: f64,
    /// Unit of the output
    pub yield_unit: String,
    /// True iff no ingredient line is blocked
    pub can_make: bool,
    /// Whole batches producible now; 0 whenever `can_make` is false
    pub max_batches: u64,
    /// Blocked lines in recipe order; empty iff `can_make`
    pub missing_ingredients: Vec<MissingIngredient>,
}

/// Aggregate "what can I make" report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeasibilityReport {
    /// Active recipes considered
    pub total_recipes: usize,
    /// Recipes with `can_make == true`
    pub can_make_count: usize,
    /// Per-recipe results in input order
    pub recipes: Vec<RecipeFeasibility>,
}

/// Resolved state of a single ingredient line
struct LineAssessment {
    name: String,
    needed: f64,
    available: f64,
    reason: Option<MissingReason>,
}

impl LineAssessment {
    fn evaluate(line: &RecipeIngredient, inventory: &InventorySnapshot, now: DateTime<Utc>) -> Self {
        let needed = line.quantity;
        let Some(item) = inventory.resolve(&line.ingredient) else {
            return Self {
                name: unknown_ingredient_name(&line.ingredient),
                needed,
                available: 0.0,
                reason: Some(MissingReason::NotFound),
            };
        };

        let blocked = if item.is_contaminated {
            Some(MissingReason::Contaminated)
        } else if item.is_expired_at(now) {
            Some(MissingReason::Expired)
        } else {
            None
        };

        let (available, reason) = match blocked {
            Some(reason) => (0.0, Some(reason)),
            None if item.quantity < needed => (item.quantity, Some(MissingReason::Insufficient)),
            None => (item.quantity, None),
        };

        Self {
            name: item.name.clone(),
            needed,
            available,
            reason,
        }
    }

    fn into_missing(self) -> Option<MissingIngredient> {
        let reason = self.reason?;
        Some(MissingIngredient {
            shortage: (self.needed - self.available).max(0.0),
            name: self.name,
            needed: self.needed,
            available: self.available,
            reason,
        })
    }
}

fn unknown_ingredient_name(reference: &IngredientRef) -> String {
    format!("Unknown {} {}", reference.kind().as_str(), reference.id())
}

/// Floor of the smallest `available / needed` ratio over constraining lines
///
/// Lines with `needed <= 0` never constrain. Returns `None` when no line
/// constrains, which callers treat as a data anomaly.
fn batch_limit(lines: &[LineAssessment]) -> Option<u64> {
    lines
        .iter()
        .filter(|line| line.needed > 0.0)
        .map(|line| line.available / line.needed)
        .reduce(f64::min)
        .map(|ratio| ratio.floor() as u64)
}

/// Assess a single recipe against the inventory at time `now`
///
/// The recipe's active flag is not consulted here; [`analyze_feasibility`]
/// filters inactive recipes before calling this.
#[must_use]
pub fn assess_recipe(
    recipe: &Recipe,
    inventory: &InventorySnapshot,
    now: DateTime<Utc>,
) -> RecipeFeasibility {
    let lines: Vec<LineAssessment> = recipe
        .ingredients
        .iter()
        .map(|line| LineAssessment::evaluate(line, inventory, now))
        .collect();

    let can_make = lines.iter().all(|line| line.reason.is_none());
    let max_batches = if can_make {
        batch_limit(&lines).unwrap_or_else(|| {
            warn!(
                recipe_id = %recipe.id,
                recipe = %recipe.name,
                "Recipe has no constraining ingredients; reporting 0 batches for review"
            );
            0
        })
    } else {
        0
    };

    RecipeFeasibility {
        recipe_id: recipe.id,
        recipe_name: recipe.name.clone(),
        category: recipe.category.clone(),
        yield_quantity: recipe.yield_quantity,
        yield_unit: recipe.yield_unit.clone(),
        can_make,
        max_batches,
        missing_ingredients: lines
            .into_iter()
            .filter_map(LineAssessment::into_missing)
            .collect(),
    }
}

/// Compute which active recipes can be produced from the inventory at `now`
///
/// Inactive recipes are skipped and excluded from `total_recipes`.
#[must_use]
pub fn analyze_feasibility(
    recipes: &[Recipe],
    inventory: &InventorySnapshot,
    now: DateTime<Utc>,
) -> FeasibilityReport {
    let results: Vec<RecipeFeasibility> = recipes
        .iter()
        .filter(|recipe| recipe.is_active)
        .map(|recipe| assess_recipe(recipe, inventory, now))
        .collect();

    let can_make_count = results.iter().filter(|result| result.can_make).count();

    debug!(
        total_recipes = results.len(),
        can_make_count,
        stock_items = inventory.len(),
        "Feasibility analysis complete"
    );

    FeasibilityReport {
        total_recipes: results.len(),
        can_make_count,
        recipes: results,
    }
}
