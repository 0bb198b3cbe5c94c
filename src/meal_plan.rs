// ABOUTME: Meal plan manager: the plan collection, the current plan, and slot assignment
// ABOUTME: Persists the whole collection under the "mealPlans" key after every change
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Planner Contributors

//! Weekly meal plans
//!
//! The current plan is held as an id into the collection, so edits through
//! the current plan and the stored plan can never diverge. Slot edits with an
//! unknown day, a meal type without a slot, or no current plan are no-ops.

use crate::constants::storage_keys;
use crate::models::{MealPlan, Recipe};
use crate::storage::{self, LoadedRecords, SharedStore};
use serde_json::Value;
use tracing::{debug, info};

/// The plan collection and current selection
pub struct MealPlans {
    plans: Vec<MealPlan>,
    unreadable: Vec<Value>,
    current: Option<String>,
    store: SharedStore,
}

impl MealPlans {
    /// Load persisted plans
    ///
    /// Stored plans that are not a valid seven-day week are kept aside and
    /// written back untouched with every save; only an explicit delete by id
    /// drops them.
    #[must_use]
    pub fn load(store: SharedStore) -> Self {
        let LoadedRecords {
            records: plans,
            unreadable,
        } = storage::load_records::<MealPlan>(store.as_ref(), storage_keys::MEAL_PLANS);

        info!(
            meal_plans.count = plans.len(),
            meal_plans.unreadable = unreadable.len(),
            "Meal plans loaded"
        );
        Self {
            plans,
            unreadable,
            current: None,
            store,
        }
    }

    /// Create an empty week named `name`, append it, and make it current
    pub fn create_meal_plan(&mut self, name: impl Into<String>) -> MealPlan {
        let plan = MealPlan::new(name);
        info!(meal_plan.id = %plan.id, meal_plan.name = %plan.name, "Created meal plan");
        self.current = Some(plan.id.clone());
        self.plans.push(plan.clone());
        self.persist();
        plan
    }

    /// Put `recipe` in the `meal_type` slot of `day` on the current plan
    ///
    /// Returns `false` without changes when there is no current plan or the
    /// day or slot does not exist.
    pub fn add_recipe_to_meal_plan(&mut self, recipe: Recipe, day: &str, meal_type: &str) -> bool {
        let recipe_id = recipe.id.clone();
        let Some(plan) = self.current_mut() else {
            debug!("No current meal plan; ignoring slot assignment");
            return false;
        };
        if !plan.assign(recipe, day, meal_type) {
            debug!(day = %day, meal_type = %meal_type, "Unknown day or meal slot; ignoring");
            return false;
        }
        debug!(meal_plan.id = %plan.id, recipe.id = %recipe_id, day = %day, meal_type = %meal_type, "Assigned recipe to meal slot");
        self.persist();
        true
    }

    /// Clear the `meal_type` slot of `day` on the current plan
    ///
    /// Same no-op rules as [`Self::add_recipe_to_meal_plan`].
    pub fn remove_recipe_from_meal_plan(&mut self, day: &str, meal_type: &str) -> bool {
        let Some(plan) = self.current_mut() else {
            return false;
        };
        if !plan.clear(day, meal_type) {
            return false;
        }
        debug!(meal_plan.id = %plan.id, day = %day, meal_type = %meal_type, "Cleared meal slot");
        self.persist();
        true
    }

    /// Select the current plan, or clear the selection with `None`
    ///
    /// Returns `false` and leaves the selection unchanged for an unknown id.
    pub fn set_current_meal_plan(&mut self, id: Option<&str>) -> bool {
        match id {
            None => {
                self.current = None;
                true
            }
            Some(id) if self.get(id).is_some() => {
                self.current = Some(id.to_owned());
                true
            }
            Some(_) => false,
        }
    }

    /// Delete a plan, clearing the selection if it was current
    pub fn delete_meal_plan(&mut self, id: &str) -> bool {
        let before = self.plans.len() + self.unreadable.len();
        self.plans.retain(|plan| plan.id != id);
        self.unreadable
            .retain(|value| storage::record_id(value) != Some(id));
        if self.plans.len() + self.unreadable.len() == before {
            return false;
        }
        if self.current.as_deref() == Some(id) {
            self.current = None;
        }
        info!(meal_plan.id = %id, "Deleted meal plan");
        self.persist();
        true
    }

    /// The selected plan
    #[must_use]
    pub fn current_meal_plan(&self) -> Option<&MealPlan> {
        self.current.as_deref().and_then(|id| self.get(id))
    }

    /// Id of the selected plan
    #[must_use]
    pub fn current_id(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Look up a plan by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&MealPlan> {
        self.plans.iter().find(|plan| plan.id == id)
    }

    /// Every plan, in creation order
    #[must_use]
    pub fn meal_plans(&self) -> &[MealPlan] {
        &self.plans
    }

    fn current_mut(&mut self) -> Option<&mut MealPlan> {
        let id = self.current.as_deref()?;
        self.plans.iter_mut().find(|plan| plan.id == id)
    }

    fn persist(&self) {
        storage::save_records(
            self.store.as_ref(),
            storage_keys::MEAL_PLANS,
            &self.plans,
            &self.unreadable,
        );
    }
}
