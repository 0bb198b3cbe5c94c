// ABOUTME: Output formatting helpers for recipe-cli
// ABOUTME: Consistent one-line and detailed renderings of recipes and meal plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Planner Contributors

use recipe_planner::models::{MealPlan, MealSlot, Recipe};

/// One line per recipe, starred when it is a favorite
pub fn print_recipe_line(recipe: &Recipe, favorite: bool) {
    println!(
        "{} {:>4}  {:<34} {:<14} {:<9} {:<6} {:>3} min {:>4} kcal",
        if favorite { "*" } else { " " },
        recipe.id,
        recipe.title,
        recipe.cuisine,
        recipe.meal_type.as_str(),
        recipe.difficulty.as_str(),
        recipe.cook_time,
        recipe.calories
    );
}

/// Full recipe card
pub fn print_recipe_detail(recipe: &Recipe, favorite: bool) {
    println!("\n{}{}", recipe.title, if favorite { "  (favorite)" } else { "" });
    println!("{}", "=".repeat(60));
    println!(
        "{} | {} | {} | serves {}",
        recipe.cuisine, recipe.meal_type, recipe.difficulty, recipe.servings
    );
    println!(
        "Prep {} min, cook {} min, {} kcal",
        recipe.prep_time, recipe.cook_time, recipe.calories
    );
    let n = &recipe.nutritional_info;
    println!(
        "Protein {}g  Carbs {}g  Fat {}g  Fiber {}g",
        n.protein, n.carbs, n.fat, n.fiber
    );
    if !recipe.dietary_restrictions.is_empty() {
        println!("Dietary: {}", recipe.dietary_restrictions.join(", "));
    }

    println!("\nIngredients:");
    for ingredient in &recipe.ingredients {
        println!("  - {ingredient}");
    }
    println!("\nInstructions:\n{}", recipe.instructions);
}

/// Week grid of a meal plan
pub fn print_meal_plan(plan: &MealPlan) {
    println!("\n{} ({})", plan.name, plan.id);
    println!("{}", "=".repeat(60));
    for day in &plan.days {
        println!("{} ({} kcal)", day.day, day.total_calories());
        for slot in [MealSlot::Breakfast, MealSlot::Lunch, MealSlot::Dinner] {
            let title = day.slot(slot).map_or("-", |recipe| recipe.title.as_str());
            println!("  {:<10} {title}", slot.as_str());
        }
    }
}
