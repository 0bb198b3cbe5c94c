// ABOUTME: Bundled seed catalog of five recipes used when no remote source is available
// ABOUTME: Records satisfy catalog invariants: unique ids and positive servings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Planner Contributors

use crate::models::{Difficulty, MealType, NutritionalInfo, Recipe};

const fn nutrition(protein: u32, carbs: u32, fat: u32, fiber: u32) -> NutritionalInfo {
    NutritionalInfo {
        protein,
        carbs,
        fat,
        fiber,
    }
}

/// The bundled recipes, in catalog order
#[must_use]
pub fn seed_recipes() -> Vec<Recipe> {
    vec![
        Recipe::new("1", "Classic Margherita Pizza", MealType::Dinner)
            .with_image("https://images.pexels.com/photos/1146760/pexels-photo-1146760.jpeg")
            .with_ingredients([
                "1 pizza dough",
                "1/2 cup pizza sauce",
                "8 oz fresh mozzarella",
                "1/4 cup fresh basil leaves",
                "2 tbsp olive oil",
                "Salt and pepper",
                "1 tsp dried oregano",
            ])
            .with_instructions(
                "Preheat oven to 475°F. Roll out pizza dough on a floured surface. Transfer dough to a pizza stone or baking sheet. Spread pizza sauce evenly over dough, leaving a 1-inch border. Add sliced mozzarella and drizzle with olive oil. Bake for 12-15 minutes until crust is golden and cheese is bubbly. Remove from oven and top with fresh basil leaves. Season with salt, pepper, and oregano.",
            )
            .with_times(10, 15)
            .with_servings(4, 285)
            .with_cuisine("Italian")
            .with_dietary_restrictions(["Vegetarian"])
            .with_nutrition(nutrition(12, 35, 15, 2))
            .with_difficulty(Difficulty::Medium),
        Recipe::new("2", "Chicken Teriyaki Bowl", MealType::Dinner)
            .with_image("https://images.pexels.com/photos/1640777/pexels-photo-1640777.jpeg")
            .with_ingredients([
                "2 chicken breasts, sliced",
                "2 cups cooked rice",
                "1/4 cup teriyaki sauce",
                "1 cup broccoli florets",
                "1 carrot, julienned",
                "2 tbsp sesame oil",
                "1 tbsp sesame seeds",
                "2 green onions, chopped",
            ])
            .with_instructions(
                "Heat sesame oil in a large pan over medium-high heat. Add chicken and cook until golden brown. Add vegetables and stir-fry for 3-4 minutes. Pour teriyaki sauce over chicken and vegetables. Serve over rice and garnish with sesame seeds and green onions.",
            )
            .with_times(15, 20)
            .with_servings(4, 420)
            .with_cuisine("Asian")
            .with_dietary_restrictions(["Gluten-Free"])
            .with_nutrition(nutrition(28, 45, 12, 4))
            .with_difficulty(Difficulty::Easy),
        Recipe::new("3", "Mediterranean Quinoa Salad", MealType::Lunch)
            .with_image("https://images.pexels.com/photos/1059905/pexels-photo-1059905.jpeg")
            .with_ingredients([
                "1 cup quinoa, cooked",
                "1 cucumber, diced",
                "1 cup cherry tomatoes, halved",
                "1/2 red onion, diced",
                "1/2 cup kalamata olives",
                "1/2 cup feta cheese, crumbled",
                "1/4 cup olive oil",
                "2 tbsp lemon juice",
                "2 tbsp fresh herbs (parsley, mint)",
            ])
            .with_instructions(
                "Cook quinoa according to package directions and let cool. In a large bowl, combine quinoa, cucumber, tomatoes, red onion, and olives. Whisk together olive oil, lemon juice, salt, and pepper. Pour dressing over salad and toss. Top with feta cheese and fresh herbs.",
            )
            .with_times(20, 0)
            .with_servings(6, 320)
            .with_cuisine("Mediterranean")
            .with_dietary_restrictions(["Vegetarian", "Gluten-Free"])
            .with_nutrition(nutrition(12, 35, 18, 6))
            .with_difficulty(Difficulty::Easy),
        Recipe::new("4", "Avocado Toast with Poached Egg", MealType::Breakfast)
            .with_image("https://images.pexels.com/photos/566566/pexels-photo-566566.jpeg")
            .with_ingredients([
                "4 slices whole grain bread",
                "2 ripe avocados",
                "4 eggs",
                "2 tbsp lemon juice",
                "1 tbsp white vinegar",
                "Red pepper flakes",
                "Everything bagel seasoning",
                "Salt and pepper to taste",
                "Microgreens for garnish",
            ])
            .with_instructions(
                "Toast bread until golden. Mash avocados with lemon juice, salt, and pepper. Bring water to a gentle simmer, add vinegar. Crack eggs into small bowls and gently slide into water. Poach for 3-4 minutes. Spread avocado on toast, top with poached egg. Season with red pepper flakes, everything seasoning, and microgreens.",
            )
            .with_times(10, 10)
            .with_servings(4, 320)
            .with_cuisine("American")
            .with_dietary_restrictions(["Vegetarian"])
            .with_nutrition(nutrition(16, 28, 18, 12))
            .with_difficulty(Difficulty::Medium),
        Recipe::new("5", "Thai Green Curry", MealType::Dinner)
            .with_image("https://images.pexels.com/photos/2347311/pexels-photo-2347311.jpeg")
            .with_ingredients([
                "1 lb chicken thigh, cubed",
                "1 can coconut milk",
                "2 tbsp green curry paste",
                "1 eggplant, cubed",
                "1 bell pepper, sliced",
                "1/4 cup Thai basil",
                "2 tbsp fish sauce",
                "1 tbsp brown sugar",
                "2 kaffir lime leaves",
                "Jasmine rice for serving",
            ])
            .with_instructions(
                "Heat 1/4 cup coconut milk in a large pan over medium heat. Add curry paste and cook for 2 minutes. Add chicken and cook until no longer pink. Add remaining coconut milk, eggplant, bell pepper, fish sauce, and brown sugar. Simmer for 15 minutes. Add lime leaves and basil. Serve over jasmine rice.",
            )
            .with_times(15, 25)
            .with_servings(4, 420)
            .with_cuisine("Thai")
            .with_dietary_restrictions(["Gluten-Free", "Dairy-Free"])
            .with_nutrition(nutrition(28, 18, 28, 4))
            .with_difficulty(Difficulty::Medium),
    ]
}
