use crate::catalog::DishCatalog;
use crate::models::plan::PlanNotice;
use crate::models::report::format_rupees;
use crate::models::{PlannedMeal, WeeklyPlan};

/// Ingredients shown in the terminal shopping list.
const SHOPPING_LIST_DISPLAY: usize = 15;

/// One-line description of a planning notice.
pub fn describe_notice(notice: &PlanNotice) -> String {
    match notice {
        PlanNotice::RegionFallback { region, available } => format!(
            "Only {} dishes from {}; using the whole catalog",
            available, region
        ),
        PlanNotice::TimeBufferUsed {
            limit_minutes,
            dishes,
        } => format!(
            "{} dishes run slightly over the {} min cooking limit",
            dishes, limit_minutes
        ),
        PlanNotice::SlotPoolBackfilled { slot, added } => {
            format!("{} options topped up with {} dishes from other courses", slot, added)
        }
        PlanNotice::SlotPoolFallback { slot } => {
            format!("No dedicated {} dishes; any dish may be served", slot)
        }
        PlanNotice::PoolExhausted { day, slot, dish } => {
            format!("{} {}: ran out of new dishes, repeating {}", day, slot, dish)
        }
        PlanNotice::Rebalanced {
            day,
            slot,
            replaced,
            replacement,
        } => format!(
            "{} {}: swapped {} for cheaper {}",
            day, slot, replaced, replacement
        ),
        PlanNotice::OverBudget {
            total_cost,
            weekly_budget,
        } => format!(
            "Plan costs {} against a budget of {}",
            format_rupees(*total_cost),
            format_rupees(*weekly_budget)
        ),
    }
}

fn display_meal(meal: &PlannedMeal<'_>, width: usize) {
    let combo = &meal.combination;
    let n = combo.nutrition.rounded();
    let tag = if combo.is_complete { "" } else { " [incomplete]" };

    println!(
        "  {:<9} {:<width$} {:>4} kcal | P {:>5.1}g | {:>3} min | {:>8}{}",
        meal.slot.as_str(),
        combo.display_name(),
        n.calories as i64,
        n.protein,
        combo.total_time_minutes,
        format_rupees(combo.total_cost),
        tag,
        width = width
    );
    if !meal.reason.is_empty() {
        println!("  {:<9} ({})", "", meal.reason);
    }
}

/// Display a weekly plan with its summary, shopping list and notices.
pub fn display_weekly_plan(plan: &WeeklyPlan<'_>) {
    let width = plan
        .meals()
        .map(|m| m.combination.display_name().len())
        .max()
        .unwrap_or(20);

    println!();
    println!("=== Weekly Meal Plan ===");

    for day in &plan.days {
        println!();
        println!("{} ({})", day.day, format_rupees(day.total_cost()));
        for meal in day.meals() {
            display_meal(meal, width);
        }
    }

    let s = &plan.summary;
    println!();
    println!("--- Summary ---");
    println!(
        "Total cost: {} of {} ({})",
        format_rupees(s.total_cost),
        format_rupees(s.weekly_budget),
        s.budget_status
    );
    println!("Average per meal: {}", format_rupees(s.avg_cost_per_meal));
    println!(
        "Daily average: {:.0} kcal, {:.1}g protein",
        s.daily_avg_calories, s.daily_avg_protein
    );
    println!("Calorie accuracy: {:.1}%", s.calorie_accuracy);
    println!("Ingredient overlap: {:.1}%", s.ingredient_overlap);

    let top = plan.shopping_list.top(SHOPPING_LIST_DISPLAY);
    if !top.is_empty() {
        println!();
        println!(
            "--- Shopping List (top {} of {}) ---",
            top.len(),
            plan.shopping_list.unique_count()
        );
        for item in top {
            println!("  {:<24} x{}", item.ingredient, item.count);
        }
    }

    if !plan.batch_cooking.is_empty() {
        println!();
        println!("--- Batch Cooking ---");
        for suggestion in &plan.batch_cooking {
            println!("  {}", suggestion);
        }
    }

    if !plan.notices.is_empty() {
        println!();
        println!("--- Notes ---");
        for notice in &plan.notices {
            println!("  {}", describe_notice(notice));
        }
    }
    println!();
}

/// Display catalog counts by course, diet and region.
pub fn display_catalog_overview(catalog: &DishCatalog) {
    if catalog.is_empty() {
        println!("Catalog is empty.");
        return;
    }

    println!();
    println!("=== Dish Catalog ({} dishes) ===", catalog.len());

    println!();
    println!("By course:");
    for (course, count) in catalog.count_by_course() {
        println!("  {:<14} {}", course.as_str(), count);
    }

    println!();
    println!("By diet:");
    for (diet, count) in catalog.count_by_diet() {
        println!("  {:<14} {}", diet.as_str(), count);
    }

    println!();
    println!("Regions: {}", catalog.regions().join(", "));
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DayOfWeek, MealSlot};

    #[test]
    fn test_describe_notices() {
        let swap = PlanNotice::Rebalanced {
            day: DayOfWeek::Tuesday,
            slot: MealSlot::Dinner,
            replaced: "Paneer Tikka".to_string(),
            replacement: "Dal Tadka".to_string(),
        };
        assert_eq!(
            describe_notice(&swap),
            "Tuesday dinner: swapped Paneer Tikka for cheaper Dal Tadka"
        );

        let over = PlanNotice::OverBudget {
            total_cost: 812.5,
            weekly_budget: 700.0,
        };
        assert_eq!(
            describe_notice(&over),
            "Plan costs ₹812.50 against a budget of ₹700.00"
        );
    }
}
