// ABOUTME: Meal plan commands for recipe-cli
// ABOUTME: Slot edits target an explicit plan or the newest one
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Planner Contributors

use crate::helpers::display::print_meal_plan;
use anyhow::{anyhow, bail, Result};
use recipe_planner::store::RecipeStore;

pub fn list(store: &RecipeStore) {
    let plans = store.meal_plans().meal_plans();
    if plans.is_empty() {
        println!("No meal plans yet.");
        return;
    }
    for plan in plans {
        println!(
            "{}  {:<24} {} meals  created {}",
            plan.id,
            plan.name,
            plan.assigned_count(),
            plan.created_at.format("%Y-%m-%d %H:%M UTC")
        );
    }
}

pub fn create(store: &mut RecipeStore, name: &str) -> Result<()> {
    let name = name.trim();
    if name.is_empty() {
        bail!("Meal plan name is required");
    }
    let plan = store.create_meal_plan(name);
    println!("Created meal plan {} ({})", plan.name, plan.id);
    Ok(())
}

/// Make `plan` (or the newest plan) current for the rest of this invocation
fn select(store: &mut RecipeStore, plan: Option<&str>) -> Result<()> {
    let id = match plan {
        Some(id) => id.to_owned(),
        None => store
            .meal_plans()
            .meal_plans()
            .last()
            .map(|p| p.id.clone())
            .ok_or_else(|| anyhow!("No meal plans yet; create one first"))?,
    };
    if !store.set_current_meal_plan(Some(&id)) {
        bail!("Meal plan not found: {id}");
    }
    Ok(())
}

pub fn show(store: &mut RecipeStore, plan: Option<&str>) -> Result<()> {
    select(store, plan)?;
    if let Some(current) = store.current_meal_plan() {
        print_meal_plan(current);
    }
    Ok(())
}

pub fn add(
    store: &mut RecipeStore,
    plan: Option<&str>,
    day: &str,
    meal_type: &str,
    recipe_id: &str,
) -> Result<()> {
    select(store, plan)?;
    let recipe = store
        .get_recipe_by_id(recipe_id)
        .cloned()
        .ok_or_else(|| anyhow!("Recipe not found: {recipe_id}"))?;
    let title = recipe.title.clone();
    if store.add_recipe_to_meal_plan(recipe, day, meal_type) {
        println!("{day} {meal_type}: {title}");
    } else {
        println!("No slot {meal_type} on {day}; nothing changed");
    }
    Ok(())
}

pub fn remove(store: &mut RecipeStore, plan: Option<&str>, day: &str, meal_type: &str) -> Result<()> {
    select(store, plan)?;
    if store.remove_recipe_from_meal_plan(day, meal_type) {
        println!("Cleared {day} {meal_type}");
    } else {
        println!("No slot {meal_type} on {day}; nothing changed");
    }
    Ok(())
}

pub fn delete(store: &mut RecipeStore, id: &str) -> Result<()> {
    if !store.delete_meal_plan(id) {
        bail!("Meal plan not found: {id}");
    }
    println!("Deleted meal plan {id}");
    Ok(())
}
