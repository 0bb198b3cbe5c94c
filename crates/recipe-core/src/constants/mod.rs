// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for storage keys, discovery limits, ports, and OAuth defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Planner Contributors

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! large file.

/// OAuth provider constants and configuration defaults
pub mod oauth;

/// Durable storage record names
pub mod storage_keys {
    /// Record holding the serialized favorites list
    pub const FAVORITES: &str = "favorites";
    /// Record holding the serialized meal plan collection
    pub const MEAL_PLANS: &str = "mealPlans";
    /// Value of `RECIPE_STORAGE_DIR` that selects the in-memory store
    pub const IN_MEMORY: &str = ":memory:";
}

/// Discovery sizes used by the recommendation shuffle
pub mod discovery {
    /// Recipes returned by `POST /api/recommend`
    pub const RECOMMEND_COUNT: usize = 3;
    /// Recipes suggested on the landing page
    pub const SUGGESTION_COUNT: usize = 5;
    /// Maximum cards in one swipe deck
    pub const SWIPE_DECK_SIZE: usize = 20;
    /// Swipe filter cook-time value meaning "no limit"
    pub const SWIPE_COOK_TIME_UNBOUNDED: u32 = 60;
    /// Horizontal drag distance (px) that commits a like/dislike
    pub const SWIPE_HORIZONTAL_THRESHOLD: f64 = 100.0;
    /// Vertical drag distance (px, negative is up) that commits a superlike
    pub const SWIPE_UP_THRESHOLD: f64 = -150.0;
}

/// Recipe defaults
pub mod recipes {
    /// Placeholder image for records that arrive without one
    pub const DEFAULT_IMAGE_URL: &str =
        "https://images.pexels.com/photos/1146760/pexels-photo-1146760.jpeg";
    /// Default daily calorie target for generated meal plans
    pub const DEFAULT_CALORIE_TARGET: u32 = 2000;
    /// Lowest accepted rating
    pub const MIN_RATING: u8 = 1;
    /// Highest accepted rating
    pub const MAX_RATING: u8 = 5;
    /// Share of calories from protein when estimating nutrition
    pub const ESTIMATED_PROTEIN_SHARE: f64 = 0.15;
    /// Share of calories from carbohydrates when estimating nutrition
    pub const ESTIMATED_CARBS_SHARE: f64 = 0.55;
    /// Share of calories from fat when estimating nutrition
    pub const ESTIMATED_FAT_SHARE: f64 = 0.30;
    /// Fiber grams per calorie when estimating nutrition
    pub const ESTIMATED_FIBER_PER_CALORIE: f64 = 0.02;
    /// Calories per gram of protein or carbohydrate
    pub const CALORIES_PER_GRAM_PROTEIN_CARBS: f64 = 4.0;
    /// Calories per gram of fat
    pub const CALORIES_PER_GRAM_FAT: f64 = 9.0;
}

/// Network ports
pub mod ports {
    /// Default HTTP port (the port the browser client expects)
    pub const DEFAULT_HTTP_PORT: u16 = 3000;
}

/// Timeout configurations
pub mod timeouts {
    /// Remote catalog fetch timeout in seconds
    pub const CATALOG_FETCH_TIMEOUT_SECS: u64 = 5;
    /// OAuth token exchange timeout in seconds
    pub const OAUTH_CLIENT_TIMEOUT_SECS: u64 = 15;
    /// Whole-request timeout applied by the HTTP server
    pub const HTTP_REQUEST_TIMEOUT_SECS: u64 = 30;
}

/// Security configurations
pub mod security {
    /// Default origin allowed by CORS (the Vite dev server)
    pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";
    /// Preflight cache duration in seconds
    pub const CORS_MAX_AGE_SECS: u64 = 3600;
}

/// Service naming used in logs and health responses
pub mod service_names {
    /// Server binary name
    pub const RECIPE_PLANNER_SERVER: &str = "recipe-planner-server";
}
