// ABOUTME: Recipe feasibility and costing engine for bakery production planning
// ABOUTME: Pure functions over a tenant-scoped inventory snapshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # Bakery Production Engine
//!
//! Answers two questions about a tenant's recipe book:
//!
//! - **What can I make right now?** [`analyze_feasibility`] resolves every
//!   ingredient line of every active recipe against stock, classifies what
//!   blocks production and computes the maximum whole batch count.
//! - **What does a batch cost?** [`compute_recipe_cost`] itemizes ingredient
//!   costs and divides the total across the recipe's yield.
//!
//! Both are synchronous, allocation-light and never mutate their input, so
//! calling them twice on the same snapshot gives identical results. Fetching
//! the snapshot, tenant scoping and HTTP framing live in the server crate.

/// Recipe cost analysis
pub mod costing;
/// Production error kinds
pub mod error;
/// "What can I make" feasibility analysis
pub mod feasibility;

pub use costing::{compute_recipe_cost, cost_per_unit, IngredientCost, RecipeCostAnalysis};
pub use error::ProductionError;
pub use feasibility::{
    analyze_feasibility, assess_recipe, FeasibilityReport, MissingIngredient, MissingReason,
    RecipeFeasibility,
};
