//! The serialisable, display-formatted view of a finished plan.

use serde::Serialize;

use crate::models::plan::{PlanNotice, PlannedMeal, ShoppingItem, WeeklyPlan};
use crate::models::{UserPreferences, round_to};

/// Format rupees with two decimals.
pub fn format_rupees(value: f64) -> String {
    format!("₹{:.2}", value)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealReport {
    /// Main dish and sides joined with " + ".
    pub dish: String,
    pub main_dish: String,
    pub accompaniments: Vec<String>,
    pub time: String,
    pub calories: String,
    pub protein: String,
    pub carbs: String,
    pub fat: String,
    pub cost: String,
    pub reason: String,
    pub is_complete: bool,
}

impl MealReport {
    pub fn from_meal(meal: &PlannedMeal<'_>) -> Self {
        let combo = &meal.combination;
        let n = combo.nutrition.rounded();
        Self {
            dish: combo.display_name(),
            main_dish: meal.main_name().to_string(),
            accompaniments: combo
                .accompaniments
                .iter()
                .map(|a| format!("{} ({})", a.name, a.quantity))
                .collect(),
            time: format!("{} min", combo.total_time_minutes),
            calories: format!("{} kcal", n.calories as i64),
            protein: format!("{:.1}g", n.protein),
            carbs: format!("{:.1}g", n.carbs),
            fat: format!("{:.1}g", n.fat),
            cost: format_rupees(combo.total_cost),
            reason: meal.reason.clone(),
            is_complete: combo.is_complete,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayMeals {
    pub breakfast: MealReport,
    pub lunch: MealReport,
    pub dinner: MealReport,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayReport {
    pub day: String,
    pub meals: DayMeals,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryReport {
    pub total_cost: String,
    pub avg_cost_per_meal: String,
    pub weekly_budget: String,
    pub budget_status: String,
    pub calorie_balance_accuracy: String,
    pub daily_avg_calories: f64,
    pub daily_avg_protein: String,
    pub ingredient_overlap_score: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NutritionReport {
    pub total_weekly_calories: f64,
    pub daily_avg_calories: f64,
    pub total_weekly_protein: f64,
    pub daily_avg_protein: f64,
    pub calorie_target_accuracy: String,
    pub total_cost: f64,
}

/// A weekly plan shaped for JSON output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanReport {
    pub weekly_plan: Vec<DayReport>,
    pub summary: SummaryReport,
    /// Most used ingredients first, truncated to the configured length.
    pub shopping_list: Vec<ShoppingItem>,
    pub batch_cooking_suggestions: Vec<String>,
    pub nutrition_summary: NutritionReport,
    pub notices: Vec<PlanNotice>,
}

impl PlanReport {
    pub fn from_plan(plan: &WeeklyPlan<'_>, prefs: &UserPreferences, top_n: usize) -> Self {
        let s = &plan.summary;

        let weekly_plan = plan
            .days
            .iter()
            .map(|day| DayReport {
                day: day.day.to_string(),
                meals: DayMeals {
                    breakfast: MealReport::from_meal(&day.breakfast),
                    lunch: MealReport::from_meal(&day.lunch),
                    dinner: MealReport::from_meal(&day.dinner),
                },
            })
            .collect();

        let accuracy = format!("{:.1}%", s.calorie_accuracy);

        Self {
            weekly_plan,
            summary: SummaryReport {
                total_cost: format_rupees(s.total_cost),
                avg_cost_per_meal: format_rupees(s.avg_cost_per_meal),
                weekly_budget: format_rupees(prefs.weekly_budget),
                budget_status: s.budget_status.to_string(),
                calorie_balance_accuracy: accuracy.clone(),
                daily_avg_calories: s.daily_avg_calories,
                daily_avg_protein: format!("{:.1}g", s.daily_avg_protein),
                ingredient_overlap_score: format!("{:.1}%", s.ingredient_overlap),
            },
            shopping_list: plan.shopping_list.top(top_n).to_vec(),
            batch_cooking_suggestions: plan.batch_cooking.iter().map(|b| b.to_string()).collect(),
            nutrition_summary: NutritionReport {
                total_weekly_calories: s.total_calories,
                daily_avg_calories: s.daily_avg_calories,
                total_weekly_protein: s.total_protein,
                daily_avg_protein: s.daily_avg_protein,
                calorie_target_accuracy: accuracy,
                total_cost: round_to(s.total_cost, 2),
            },
            notices: plan.notices.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::plan::{DishCategory, MealCombination, MealSlot};
    use crate::models::{Course, DietClass, Dish, EnrichedDish, Nutrition};
    use crate::planner::constants::accompaniment;
    use crate::models::plan::AccompanimentKind;

    #[test]
    fn test_meal_report_formatting() {
        let dish = Dish::new("Rajma", "rajma, rice", DietClass::Vegetarian, Course::MainCourse)
            .with_times(10, 35);
        let main = EnrichedDish::new(&dish, Nutrition::new(398.44, 9.59, 42.63, 21.7), 19.5);
        let mut combination = MealCombination::main_only(main, DishCategory::Gravy);
        combination.add(accompaniment(AccompanimentKind::Rice));
        combination.is_complete = true;

        let meal = PlannedMeal {
            slot: MealSlot::Lunch,
            combination,
            score: 70.0,
            reason: "budget-friendly".to_string(),
        };
        let report = MealReport::from_meal(&meal);

        assert_eq!(report.dish, "Rajma + Rice");
        assert_eq!(report.main_dish, "Rajma");
        assert_eq!(report.accompaniments, vec!["Rice (1 serving)"]);
        assert_eq!(report.time, "45 min");
        assert_eq!(report.calories, "598 kcal");
        assert_eq!(report.protein, "13.6g");
        assert_eq!(report.cost, "₹29.50");
    }

    #[test]
    fn test_format_rupees() {
        assert_eq!(format_rupees(19.5), "₹19.50");
        assert_eq!(format_rupees(0.0), "₹0.00");
    }
}
