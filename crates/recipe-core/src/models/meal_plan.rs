// ABOUTME: Weekly meal plan model: seven fixed days with breakfast, lunch, and dinner slots
// ABOUTME: The seven-day shape is a fixed array, validated again when plans are deserialized
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Planner Contributors

use super::recipe::Recipe;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// Day of the week, Monday first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    /// Monday
    Monday,
    /// Tuesday
    Tuesday,
    /// Wednesday
    Wednesday,
    /// Thursday
    Thursday,
    /// Friday
    Friday,
    /// Saturday
    Saturday,
    /// Sunday
    Sunday,
}

impl Weekday {
    /// The fixed weekday list, in plan order
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Day name as stored in plans
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }

    /// Look up a day by its exact, case-sensitive name
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.as_str() == name)
    }

    /// Position in the plan (Monday = 0)
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Assignable meal slot within a day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    /// Breakfast slot
    Breakfast,
    /// Lunch slot
    Lunch,
    /// Dinner slot
    Dinner,
}

impl MealSlot {
    /// Resolve the slot named by a meal type string.
    ///
    /// The name is lower-cased before matching, so `"Lunch"` and `"lunch"`
    /// both resolve; anything other than breakfast, lunch, or dinner has no
    /// slot.
    #[must_use]
    pub fn from_meal_type(meal_type: &str) -> Option<Self> {
        match meal_type.to_lowercase().as_str() {
            "breakfast" => Some(Self::Breakfast),
            "lunch" => Some(Self::Lunch),
            "dinner" => Some(Self::Dinner),
            _ => None,
        }
    }

    /// Slot field name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
        }
    }
}

/// One day of a meal plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealPlanDay {
    /// Day name
    pub day: Weekday,
    /// Breakfast recipe
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakfast: Option<Recipe>,
    /// Lunch recipe
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lunch: Option<Recipe>,
    /// Dinner recipe
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dinner: Option<Recipe>,
    /// Snacks (kept for compatibility with stored plans, never assigned)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub snacks: Vec<Recipe>,
}

impl MealPlanDay {
    /// Empty day
    #[must_use]
    pub const fn empty(day: Weekday) -> Self {
        Self {
            day,
            breakfast: None,
            lunch: None,
            dinner: None,
            snacks: Vec::new(),
        }
    }

    /// Recipe assigned to a slot
    #[must_use]
    pub const fn slot(&self, slot: MealSlot) -> Option<&Recipe> {
        match slot {
            MealSlot::Breakfast => self.breakfast.as_ref(),
            MealSlot::Lunch => self.lunch.as_ref(),
            MealSlot::Dinner => self.dinner.as_ref(),
        }
    }

    fn slot_mut(&mut self, slot: MealSlot) -> &mut Option<Recipe> {
        match slot {
            MealSlot::Breakfast => &mut self.breakfast,
            MealSlot::Lunch => &mut self.lunch,
            MealSlot::Dinner => &mut self.dinner,
        }
    }

    /// Whether no slot holds a recipe
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.breakfast.is_none() && self.lunch.is_none() && self.dinner.is_none()
    }

    /// Sum of calories across the three slots
    #[must_use]
    pub fn total_calories(&self) -> u32 {
        [&self.breakfast, &self.lunch, &self.dinner]
            .into_iter()
            .flatten()
            .map(|r| r.calories)
            .sum()
    }
}

/// Stored plan rejected because its days are not the fixed weekday list
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("meal plan days must be Monday through Sunday in order (found {found:?})")]
pub struct InvalidMealPlan {
    /// Day names that were found
    pub found: Vec<String>,
}

/// A named week of meals
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawMealPlan")]
pub struct MealPlan {
    /// Unique plan identifier
    ///
    /// New plans get a UUID v4 string; plans saved by the browser client
    /// carry a millisecond timestamp string instead.
    pub id: String,
    /// Display name
    pub name: String,
    /// Exactly seven days, Monday first
    pub days: [MealPlanDay; 7],
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl MealPlan {
    /// Create an empty plan with a fresh id and the current timestamp
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            days: Weekday::ALL.map(MealPlanDay::empty),
            created_at: Utc::now(),
        }
    }

    /// Day entry for a weekday
    #[must_use]
    pub const fn day(&self, day: Weekday) -> &MealPlanDay {
        &self.days[day.index()]
    }

    /// Day entry looked up by exact name
    #[must_use]
    pub fn day_by_name(&self, name: &str) -> Option<&MealPlanDay> {
        Weekday::from_name(name).map(|d| self.day(d))
    }

    /// Assign a recipe to the slot named by `meal_type` on the day named `day`.
    ///
    /// Returns `false` without changing anything when the day or slot does
    /// not exist.
    pub fn assign(&mut self, recipe: Recipe, day: &str, meal_type: &str) -> bool {
        let (Some(day), Some(slot)) = (Weekday::from_name(day), MealSlot::from_meal_type(meal_type))
        else {
            return false;
        };
        *self.days[day.index()].slot_mut(slot) = Some(recipe);
        true
    }

    /// Clear the slot named by `meal_type` on the day named `day`.
    ///
    /// Returns `false` when the day or slot does not exist.
    pub fn clear(&mut self, day: &str, meal_type: &str) -> bool {
        let (Some(day), Some(slot)) = (Weekday::from_name(day), MealSlot::from_meal_type(meal_type))
        else {
            return false;
        };
        *self.days[day.index()].slot_mut(slot) = None;
        true
    }

    /// Number of filled slots across the week
    #[must_use]
    pub fn assigned_count(&self) -> usize {
        self.days
            .iter()
            .map(|d| {
                [&d.breakfast, &d.lunch, &d.dinner]
                    .into_iter()
                    .filter(|s| s.is_some())
                    .count()
            })
            .sum()
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMealPlan {
    id: String,
    name: String,
    days: Vec<MealPlanDay>,
    created_at: DateTime<Utc>,
}

impl TryFrom<RawMealPlan> for MealPlan {
    type Error = InvalidMealPlan;

    fn try_from(raw: RawMealPlan) -> Result<Self, Self::Error> {
        let in_order = raw.days.len() == Weekday::ALL.len()
            && raw.days.iter().zip(Weekday::ALL).all(|(d, w)| d.day == w);
        if !in_order {
            return Err(InvalidMealPlan {
                found: raw.days.iter().map(|d| d.day.to_string()).collect(),
            });
        }

        let days: [MealPlanDay; 7] = raw.days.try_into().map_err(|days: Vec<MealPlanDay>| {
            InvalidMealPlan {
                found: days.iter().map(|d| d.day.to_string()).collect(),
            }
        })?;

        Ok(Self {
            id: raw.id,
            name: raw.name,
            days,
            created_at: raw.created_at,
        })
    }
}
