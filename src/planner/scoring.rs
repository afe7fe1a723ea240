//! Multi-criteria fitness score for a candidate dish.
//!
//! The score is a weighted sum of four 0-100 style components plus two
//! additive bonuses. It has no fixed upper bound, and the calorie component
//! can go negative for dishes far from the per-meal target.

use crate::models::{EnrichedDish, UserPreferences};
use crate::planner::constants::*;
use crate::planner::selection::IngredientPool;

/// The individual components of a dish score.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScoreBreakdown {
    pub cost_fit: f64,
    pub time_fit: f64,
    pub calorie_fit: f64,
    pub flavor_match: f64,
    pub protein_bonus: f64,
    pub reuse_bonus: f64,
}

impl ScoreBreakdown {
    /// Weighted composite score.
    pub fn total(&self) -> f64 {
        self.cost_fit * COST_WEIGHT
            + self.time_fit * TIME_WEIGHT
            + self.calorie_fit * CALORIE_WEIGHT
            + self.flavor_match * FLAVOR_WEIGHT
            + self.protein_bonus
            + self.reuse_bonus
    }
}

/// Score a dish against the user's preferences and the ingredients used so far.
pub fn score_dish(
    dish: &EnrichedDish<'_>,
    prefs: &UserPreferences,
    pool: &IngredientPool,
) -> ScoreBreakdown {
    ScoreBreakdown {
        cost_fit: cost_fit(dish.cost, prefs.cost_per_meal_limit),
        time_fit: time_fit(dish.total_time(), prefs.cooking_time_limit),
        calorie_fit: calorie_fit(dish.nutrition.calories, prefs.per_meal_calorie_target()),
        flavor_match: flavor_match(&dish.dish.flavor_profile, prefs),
        protein_bonus: protein_bonus(dish.nutrition.protein, prefs.has_protein_goal()),
        reuse_bonus: reuse_bonus(&dish.dish.ingredient_tokens(), pool),
    }
}

/// Linear reward for being under the per-meal cost limit. Never negative.
pub fn cost_fit(cost: f64, limit: f64) -> f64 {
    if limit <= 0.0 {
        return 0.0;
    }
    ((limit - cost) / limit * 100.0).max(0.0)
}

/// Linear reward for being under the cooking-time limit, in [0, 100].
pub fn time_fit(total_minutes: u32, limit_minutes: u32) -> f64 {
    if limit_minutes == 0 {
        return 0.0;
    }
    let minutes = if total_minutes == 0 {
        FALLBACK_DISH_MINUTES
    } else {
        total_minutes
    };
    let limit = limit_minutes as f64;
    ((limit - minutes as f64) / limit * 100.0).clamp(0.0, 100.0)
}

/// 100 minus the percentage deviation from the per-meal calorie target.
pub fn calorie_fit(calories: f64, per_meal_target: f64) -> f64 {
    if per_meal_target <= 0.0 {
        return 0.0;
    }
    100.0 - (calories - per_meal_target).abs() / per_meal_target * 100.0
}

pub fn flavor_match(flavor: &str, prefs: &UserPreferences) -> f64 {
    if prefs.prefers_flavor(flavor) {
        FLAVOR_MATCH_SCORE
    } else {
        FLAVOR_MISS_SCORE
    }
}

pub fn protein_bonus(protein_grams: f64, wants_protein: bool) -> f64 {
    if !wants_protein {
        0.0
    } else if protein_grams >= HIGH_PROTEIN_GRAMS {
        HIGH_PROTEIN_BONUS
    } else if protein_grams >= MEDIUM_PROTEIN_GRAMS {
        MEDIUM_PROTEIN_BONUS
    } else {
        0.0
    }
}

/// +5 for every pool occurrence found inside one of the dish's tokens, so an
/// ingredient chosen twice counts twice. Capped at +20.
pub fn reuse_bonus(dish_tokens: &[String], pool: &IngredientPool) -> f64 {
    let shared: usize = pool
        .entries()
        .filter(|(pooled, _)| dish_tokens.iter().any(|token| token.contains(pooled)))
        .map(|(_, n)| n)
        .sum();
    (shared as f64 * REUSE_BONUS_PER_MATCH).min(REUSE_BONUS_CAP)
}

/// Short human-readable rationale for choosing a dish.
pub fn selection_reason(dish: &EnrichedDish<'_>, prefs: &UserPreferences) -> String {
    let mut reasons: Vec<String> = Vec::new();

    if dish.cost < prefs.cost_per_meal_limit * BUDGET_FRIENDLY_RATIO {
        reasons.push("budget-friendly".to_string());
    }
    if dish.total_time() as f64 <= prefs.cooking_time_limit as f64 * QUICK_PREP_RATIO {
        reasons.push("quick to prepare".to_string());
    }
    if dish.nutrition.protein >= HIGH_PROTEIN_GRAMS {
        reasons.push("high protein".to_string());
    }
    if !prefs.any_region() && dish.dish.region.eq_ignore_ascii_case(prefs.region.trim()) {
        reasons.push(format!("regional {} dish", prefs.region.trim()));
    }
    if prefs.prefers_flavor(&dish.dish.flavor_profile) {
        reasons.push(format!("{} flavor match", dish.dish.flavor_profile));
    }

    if reasons.is_empty() {
        return "balanced nutrition".to_string();
    }
    reasons.truncate(MAX_REASONS);
    reasons.join(", ")
}
