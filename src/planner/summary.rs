//! Everything derived from the seven finished days.

use crate::models::plan::{
    BatchSuggestion, BudgetStatus, DailyPlan, DayOfWeek, PlanSummary, ShoppingItem, ShoppingList,
};
use crate::models::{UserPreferences, round_to};

/// Ingredients used on at least this many distinct days are worth batch prep.
pub const BATCH_MIN_DAYS: usize = 3;

pub const MAX_BATCH_SUGGESTIONS: usize = 5;

/// Budget ratio thresholds.
pub const UNDER_BUDGET_RATIO: f64 = 0.9;
pub const SLIGHTLY_OVER_RATIO: f64 = 1.15;

/// Count every ingredient token of every planned meal.
///
/// Most used first; ties keep the order in which ingredients first appear.
pub fn shopping_list(days: &[DailyPlan<'_>]) -> ShoppingList {
    let mut items: Vec<ShoppingItem> = Vec::new();
    for day in days {
        for meal in day.meals() {
            for token in meal.combination.ingredient_tokens() {
                match items.iter_mut().find(|i| i.ingredient == token) {
                    Some(item) => item.count += 1,
                    None => items.push(ShoppingItem {
                        ingredient: token,
                        count: 1,
                    }),
                }
            }
        }
    }
    items.sort_by(|a, b| b.count.cmp(&a.count));
    ShoppingList { items }
}

/// Ingredients that turn up on several days of the week.
pub fn batch_suggestions(days: &[DailyPlan<'_>]) -> Vec<BatchSuggestion> {
    let mut by_ingredient: Vec<(String, Vec<DayOfWeek>)> = Vec::new();
    for day in days {
        for meal in day.meals() {
            for token in meal.combination.ingredient_tokens() {
                match by_ingredient.iter_mut().find(|(name, _)| *name == token) {
                    Some((_, seen)) => {
                        if !seen.contains(&day.day) {
                            seen.push(day.day);
                        }
                    }
                    None => by_ingredient.push((token, vec![day.day])),
                }
            }
        }
    }

    by_ingredient
        .into_iter()
        .filter(|(_, seen)| seen.len() >= BATCH_MIN_DAYS)
        .take(MAX_BATCH_SUGGESTIONS)
        .map(|(ingredient, days)| BatchSuggestion { ingredient, days })
        .collect()
}

/// Classify week cost against the weekly budget.
pub fn budget_status(total_cost: f64, weekly_budget: f64) -> BudgetStatus {
    if weekly_budget <= 0.0 {
        return if total_cost > 0.0 {
            BudgetStatus::Exceeds
        } else {
            BudgetStatus::Under
        };
    }
    let ratio = total_cost / weekly_budget;
    if ratio <= UNDER_BUDGET_RATIO {
        BudgetStatus::Under
    } else if ratio <= 1.0 {
        BudgetStatus::Optimal
    } else if ratio <= SLIGHTLY_OVER_RATIO {
        BudgetStatus::SlightlyOver
    } else {
        BudgetStatus::Exceeds
    }
}

/// Weekly totals and averages.
///
/// Calorie accuracy is reported as-is and goes negative once the daily
/// average is more than twice the target.
pub fn summarize(
    days: &[DailyPlan<'_>],
    prefs: &UserPreferences,
    shopping: &ShoppingList,
) -> PlanSummary {
    let (mut calories, mut protein, mut cost, mut meals) = (0.0, 0.0, 0.0, 0usize);
    for meal in days.iter().flat_map(|d| d.meals()) {
        calories += meal.combination.nutrition.calories;
        protein += meal.combination.nutrition.protein;
        cost += meal.combination.total_cost;
        meals += 1;
    }

    let day_count = days.len().max(1) as f64;
    let daily_avg_calories = calories / day_count;
    let target = prefs.daily_calorie_target as f64;
    let calorie_accuracy = if target > 0.0 {
        100.0 - (daily_avg_calories - target).abs() / target * 100.0
    } else {
        0.0
    };

    let total_uses = shopping.total_uses();
    let ingredient_overlap = if total_uses == 0 {
        0.0
    } else {
        (1.0 - shopping.unique_count() as f64 / total_uses as f64) * 100.0
    };

    let total_cost = round_to(cost, 2);
    PlanSummary {
        total_calories: round_to(calories, 0),
        total_protein: round_to(protein, 1),
        total_cost,
        daily_avg_calories: round_to(daily_avg_calories, 0),
        daily_avg_protein: round_to(protein / day_count, 1),
        daily_avg_cost: round_to(cost / day_count, 2),
        avg_cost_per_meal: round_to(cost / meals.max(1) as f64, 2),
        calorie_accuracy: round_to(calorie_accuracy, 1),
        ingredient_overlap: round_to(ingredient_overlap, 1),
        weekly_budget: prefs.weekly_budget,
        budget_status: budget_status(total_cost, prefs.weekly_budget),
    }
}
