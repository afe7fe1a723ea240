use serde::{Deserialize, Serialize};

use crate::models::Nutrition;

/// Raw time value meaning "unknown" in the dataset.
pub const UNKNOWN_TIME: i64 = -1;

/// Prep time used when the catalog does not know it.
pub const DEFAULT_PREP_MINUTES: u32 = 15;

/// Cook time used when the catalog does not know it.
pub const DEFAULT_COOK_MINUTES: u32 = 30;

/// Region tag meaning "no particular region".
pub const ALL_REGIONS: &str = "All";

pub const DEFAULT_STATE: &str = "All India";

pub const DEFAULT_FLAVOR: &str = "mild";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DietClass {
    #[serde(rename = "vegetarian")]
    Vegetarian,
    #[serde(rename = "non vegetarian", alias = "non-vegetarian")]
    NonVegetarian,
}

impl DietClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            DietClass::Vegetarian => "vegetarian",
            DietClass::NonVegetarian => "non vegetarian",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Course {
    /// Savoury snacks, eaten as breakfast.
    #[serde(rename = "snack", alias = "breakfast-snack")]
    Snack,
    #[serde(rename = "main course", alias = "main-course")]
    MainCourse,
    #[serde(rename = "starter")]
    Starter,
    #[serde(rename = "dessert")]
    Dessert,
}

impl Course {
    pub fn as_str(&self) -> &'static str {
        match self {
            Course::Snack => "snack",
            Course::MainCourse => "main course",
            Course::Starter => "starter",
            Course::Dessert => "dessert",
        }
    }
}

/// A catalog row exactly as the dataset stores it.
///
/// Times use `-1` (or an empty cell) for "unknown"; text tags use `"-1"`.
#[derive(Debug, Clone, Deserialize)]
pub struct DishRecord {
    pub name: String,
    #[serde(default)]
    pub ingredients: String,
    pub diet: DietClass,
    #[serde(default)]
    pub prep_time: Option<i64>,
    #[serde(default)]
    pub cook_time: Option<i64>,
    #[serde(default)]
    pub flavor_profile: Option<String>,
    pub course: Course,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
}

/// A catalog dish with every "unknown" field defaulted.
#[derive(Debug, Clone, PartialEq)]
pub struct Dish {
    pub name: String,
    /// Comma-separated free text.
    pub ingredients: String,
    pub diet: DietClass,
    pub course: Course,
    pub region: String,
    pub state: String,
    pub flavor_profile: String,
    pub prep_time_minutes: u32,
    pub cook_time_minutes: u32,
}

impl Dish {
    pub fn new(name: &str, ingredients: &str, diet: DietClass, course: Course) -> Self {
        Self {
            name: name.to_string(),
            ingredients: ingredients.to_string(),
            diet,
            course,
            region: ALL_REGIONS.to_string(),
            state: DEFAULT_STATE.to_string(),
            flavor_profile: DEFAULT_FLAVOR.to_string(),
            prep_time_minutes: DEFAULT_PREP_MINUTES,
            cook_time_minutes: DEFAULT_COOK_MINUTES,
        }
    }

    pub fn with_times(mut self, prep: u32, cook: u32) -> Self {
        self.prep_time_minutes = prep;
        self.cook_time_minutes = cook;
        self
    }

    pub fn with_region(mut self, region: &str) -> Self {
        self.region = region.to_string();
        self
    }

    pub fn with_flavor(mut self, flavor: &str) -> Self {
        self.flavor_profile = flavor.to_string();
        self
    }

    /// Prep plus cook minutes, saturating at `u32::MAX`.
    #[inline]
    pub fn total_time(&self) -> u32 {
        self.prep_time_minutes.saturating_add(self.cook_time_minutes)
    }

    /// Lowercased, trimmed ingredient tokens in text order.
    pub fn ingredient_tokens(&self) -> Vec<String> {
        ingredient_tokens(&self.ingredients)
    }

    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

impl From<DishRecord> for Dish {
    fn from(record: DishRecord) -> Self {
        Self {
            name: record.name.trim().to_string(),
            ingredients: record.ingredients,
            diet: record.diet,
            course: record.course,
            region: known_or(record.region, ALL_REGIONS),
            state: known_or(record.state, DEFAULT_STATE),
            flavor_profile: known_or(record.flavor_profile, DEFAULT_FLAVOR),
            prep_time_minutes: minutes_or(record.prep_time, DEFAULT_PREP_MINUTES),
            cook_time_minutes: minutes_or(record.cook_time, DEFAULT_COOK_MINUTES),
        }
    }
}

fn known_or(value: Option<String>, default: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() && v.trim() != "-1" => v.trim().to_string(),
        _ => default.to_string(),
    }
}

fn minutes_or(value: Option<i64>, default: u32) -> u32 {
    match value {
        Some(UNKNOWN_TIME) | None => default,
        Some(v) if v < 0 => default,
        Some(v) => u32::try_from(v).unwrap_or(default),
    }
}

/// Split comma-separated ingredient text into lowercased, trimmed tokens.
pub fn ingredient_tokens(text: &str) -> Vec<String> {
    text.split(',')
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}

/// A dish with its estimated nutrition and cost for one planning run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnrichedDish<'a> {
    pub dish: &'a Dish,
    pub nutrition: Nutrition,
    pub cost: f64,
}

impl<'a> EnrichedDish<'a> {
    pub fn new(dish: &'a Dish, nutrition: Nutrition, cost: f64) -> Self {
        Self {
            dish,
            nutrition,
            cost,
        }
    }

    #[inline]
    pub fn name(&self) -> &'a str {
        &self.dish.name
    }

    #[inline]
    pub fn total_time(&self) -> u32 {
        self.dish.total_time()
    }
}
