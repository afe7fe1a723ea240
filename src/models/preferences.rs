use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;

use crate::error::{PlannerError, Result};
use crate::models::dish::{ALL_REGIONS, DietClass};

/// Goals that make the scorer reward protein-rich dishes.
pub const PROTEIN_GOALS: [&str; 3] = ["muscle gain", "weight loss", "high-protein"];

/// Minimum similarity for a "did you mean" suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DietType {
    #[serde(rename = "Vegetarian")]
    Vegetarian,
    #[serde(rename = "Non-Vegetarian")]
    NonVegetarian,
    #[serde(rename = "Vegan")]
    Vegan,
    #[serde(rename = "Jain")]
    Jain,
    #[serde(rename = "Gluten-Free")]
    GlutenFree,
    #[serde(rename = "Keto")]
    Keto,
    #[serde(rename = "High-Protein")]
    HighProtein,
    #[serde(rename = "Low-Carb")]
    LowCarb,
}

impl DietType {
    pub const ALL: [DietType; 8] = [
        DietType::Vegetarian,
        DietType::NonVegetarian,
        DietType::Vegan,
        DietType::Jain,
        DietType::GlutenFree,
        DietType::Keto,
        DietType::HighProtein,
        DietType::LowCarb,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DietType::Vegetarian => "Vegetarian",
            DietType::NonVegetarian => "Non-Vegetarian",
            DietType::Vegan => "Vegan",
            DietType::Jain => "Jain",
            DietType::GlutenFree => "Gluten-Free",
            DietType::Keto => "Keto",
            DietType::HighProtein => "High-Protein",
            DietType::LowCarb => "Low-Carb",
        }
    }

    /// Whether dishes of this diet class may be served at all.
    pub fn allows(&self, class: DietClass) -> bool {
        match self {
            DietType::Vegetarian | DietType::Vegan | DietType::Jain | DietType::GlutenFree => {
                class == DietClass::Vegetarian
            }
            DietType::NonVegetarian
            | DietType::Keto
            | DietType::HighProtein
            | DietType::LowCarb => true,
        }
    }
}

impl fmt::Display for DietType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn normalize_label(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric())
        .collect()
}

impl FromStr for DietType {
    type Err = PlannerError;

    /// Case-insensitive; ignores spaces and hyphens ("non vegetarian" works).
    fn from_str(s: &str) -> Result<Self> {
        let wanted = normalize_label(s);
        if let Some(diet) = DietType::ALL
            .iter()
            .find(|d| normalize_label(d.label()) == wanted)
        {
            return Ok(*diet);
        }

        let suggestion = DietType::ALL
            .iter()
            .map(|d| (d, jaro_winkler(&normalize_label(d.label()), &wanted)))
            .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

        Err(match suggestion {
            Some((diet, _)) => {
                PlannerError::UnknownDiet(format!("'{}' (did you mean {}?)", s.trim(), diet))
            }
            None => PlannerError::UnknownDiet(format!("'{}'", s.trim())),
        })
    }
}

/// What the user wants out of the week. Immutable for one planning call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPreferences {
    pub diet: DietType,

    #[serde(default)]
    pub preferred_cuisines: BTreeSet<String>,

    pub daily_calorie_target: u32,

    pub weekly_budget: f64,

    #[serde(default)]
    pub preferred_flavors: BTreeSet<String>,

    /// Minutes.
    pub cooking_time_limit: u32,

    #[serde(default = "default_region")]
    pub region: String,

    #[serde(default)]
    pub goals: BTreeSet<String>,

    pub cost_per_meal_limit: f64,
}

fn default_region() -> String {
    ALL_REGIONS.to_string()
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            diet: DietType::Vegetarian,
            preferred_cuisines: BTreeSet::new(),
            daily_calorie_target: 2000,
            weekly_budget: 1200.0,
            preferred_flavors: ["spicy", "mild"].iter().map(|s| s.to_string()).collect(),
            cooking_time_limit: 45,
            region: default_region(),
            goals: BTreeSet::new(),
            cost_per_meal_limit: 75.0,
        }
    }
}

impl UserPreferences {
    /// Check the numeric ranges the planner relies on.
    pub fn validate(&self) -> Result<()> {
        if self.daily_calorie_target == 0 {
            return Err(PlannerError::InvalidPreferences(
                "daily calorie target must be positive".to_string(),
            ));
        }
        if self.cooking_time_limit == 0 {
            return Err(PlannerError::InvalidPreferences(
                "cooking time limit must be positive".to_string(),
            ));
        }
        if !self.weekly_budget.is_finite() || self.weekly_budget < 0.0 {
            return Err(PlannerError::InvalidPreferences(format!(
                "weekly budget must be >= 0, got {}",
                self.weekly_budget
            )));
        }
        if !self.cost_per_meal_limit.is_finite() || self.cost_per_meal_limit < 0.0 {
            return Err(PlannerError::InvalidPreferences(format!(
                "cost per meal limit must be >= 0, got {}",
                self.cost_per_meal_limit
            )));
        }
        Ok(())
    }

    /// True when no region restriction applies.
    pub fn any_region(&self) -> bool {
        let region = self.region.trim();
        region.is_empty() || region.eq_ignore_ascii_case(ALL_REGIONS)
    }

    pub fn prefers_flavor(&self, flavor: &str) -> bool {
        self.preferred_flavors
            .iter()
            .any(|f| f.trim().eq_ignore_ascii_case(flavor.trim()))
    }

    pub fn has_protein_goal(&self) -> bool {
        self.goals.iter().any(|goal| {
            PROTEIN_GOALS
                .iter()
                .any(|wanted| goal.trim().eq_ignore_ascii_case(wanted))
        })
    }

    /// Calorie target for one of the three daily meals.
    pub fn per_meal_calorie_target(&self) -> f64 {
        self.daily_calorie_target as f64 / 3.0
    }
}
