// ABOUTME: Criterion benchmarks for the recipe feasibility and costing engine
// ABOUTME: Measures what-can-I-make and cost analysis over synthetic recipe books
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Criterion benchmarks for production analyses.
//!
//! Recipe books are generated deterministically so runs are comparable.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use bakery_core::models::{InventorySnapshot, Recipe, RecipeIngredient, StockItem};
use bakery_production::{analyze_feasibility, compute_recipe_cost};
use chrono::{Duration, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const STOCK_ITEMS: usize = 200;
const LINES_PER_RECIPE: usize = 12;

/// Stock ledger where every 17th item is contaminated and every 23rd expired
#[allow(clippy::cast_precision_loss)]
fn generate_stock(count: usize) -> Vec<StockItem> {
    let now = Utc::now();
    (0..count)
        .map(|index| {
            let quantity = 5.0 + ((index * 37) % 200) as f64;
            let unit_cost = 0.5 + ((index * 13) % 40) as f64 / 10.0;
            let item = (if index % 5 == 0 {
                StockItem::intermediate_product(format!("Prep {index}"), quantity, "kg")
            } else {
                StockItem::raw_material(format!("Material {index}"), quantity, "kg")
            })
            .with_unit_cost(unit_cost);

            if index % 17 == 0 {
                item.contaminated()
            } else if index % 23 == 0 {
                item.expiring_at(now - Duration::days(1))
            } else {
                item
            }
        })
        .collect()
}

#[allow(clippy::cast_precision_loss)]
fn generate_recipes(count: usize, stock: &[StockItem]) -> Vec<Recipe> {
    (0..count)
        .map(|index| {
            let mut recipe = Recipe::new(format!("Recipe {index}"), "bench", 12.0, "pcs");
            for line in 0..LINES_PER_RECIPE {
                let item = &stock[(index * 7 + line * 11) % stock.len()];
                let quantity = 0.1 + ((index + line) % 9) as f64 / 4.0;
                recipe = recipe.with_ingredient(RecipeIngredient::for_item(item, quantity));
            }
            recipe
        })
        .collect()
}

fn bench_what_can_i_make(c: &mut Criterion) {
    let mut group = c.benchmark_group("what_can_i_make");
    let stock = generate_stock(STOCK_ITEMS);
    let inventory: InventorySnapshot = stock.iter().cloned().collect();
    let now = Utc::now();

    for count in [10_usize, 100, 1000] {
        let recipes = generate_recipes(count, &stock);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &recipes, |b, recipes| {
            b.iter(|| analyze_feasibility(black_box(recipes), black_box(&inventory), now));
        });
    }

    group.finish();
}

fn bench_recipe_cost(c: &mut Criterion) {
    let mut group = c.benchmark_group("recipe_cost");
    let stock = generate_stock(STOCK_ITEMS);
    let inventory: InventorySnapshot = stock.iter().cloned().collect();
    let recipes = generate_recipes(100, &stock);

    group.throughput(Throughput::Elements(recipes.len() as u64));
    group.bench_function("100_recipes", |b| {
        b.iter(|| {
            for recipe in &recipes {
                black_box(compute_recipe_cost(black_box(recipe), &inventory));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_what_can_i_make, bench_recipe_cost);
criterion_main!(benches);
