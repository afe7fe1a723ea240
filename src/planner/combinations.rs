//! Completing a main dish into a meal with budget-gated accompaniments.

use crate::models::plan::{AccompanimentKind, DishCategory, MealCombination, MealSlot};
use crate::models::{Course, EnrichedDish};
use crate::planner::constants::*;

/// Sides a category must have, and sides it may have if money remains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CombinationRule {
    pub required: &'static [AccompanimentKind],
    pub optional: &'static [AccompanimentKind],
}

impl DishCategory {
    /// `None` for dishes that are already a full meal.
    pub fn rule(&self) -> Option<CombinationRule> {
        use AccompanimentKind::*;
        let (required, optional): (&'static [AccompanimentKind], &'static [AccompanimentKind]) =
            match self {
                DishCategory::CompleteMeal => return None,
                DishCategory::Gravy => (&[Rice], &[Papad]),
                DishCategory::RiceDish => (&[], &[Papad]),
                DishCategory::DrySabzi => (&[Roti], &[]),
                DishCategory::BreakfastWithGravy => (&[Sambar, Chutney], &[]),
                DishCategory::BreakfastStandalone => (&[], &[Chutney]),
                DishCategory::OtherMain => (&[Rice], &[]),
            };
        Some(CombinationRule { required, optional })
    }
}

/// Decide which rule applies to a main dish in a given slot.
///
/// Complete meals win everywhere. At breakfast a dish either needs sambar and
/// chutney or stands alone; later in the day gravies are checked before dry
/// sabzis and rice dishes.
pub fn classify(name: &str, slot: MealSlot) -> DishCategory {
    if COMPLETE_MEALS.matches_name(name) {
        return DishCategory::CompleteMeal;
    }
    match slot {
        MealSlot::Breakfast => {
            if BREAKFAST_WITH_GRAVY.matches_name(name) {
                DishCategory::BreakfastWithGravy
            } else {
                DishCategory::BreakfastStandalone
            }
        }
        MealSlot::Lunch | MealSlot::Dinner => {
            if GRAVY_DISHES.matches_name(name) {
                DishCategory::Gravy
            } else if DRY_SABZI_DISHES.matches_name(name) {
                DishCategory::DrySabzi
            } else if RICE_DISHES.matches_name(name) {
                DishCategory::RiceDish
            } else {
                DishCategory::OtherMain
            }
        }
    }
}

/// Build the meal served in a slot around `main`.
///
/// `remaining_budget` is the per-meal limit minus the main dish cost. The
/// required sides are added together or not at all, and only when the whole
/// meal's running cost plus those sides fits inside `remaining_budget`.
/// Optional sides follow in order until the first one that does not fit.
pub fn assemble<'a>(
    main: EnrichedDish<'a>,
    slot: MealSlot,
    remaining_budget: f64,
) -> MealCombination<'a> {
    let category = classify(main.name(), slot);
    let mut combo = MealCombination::main_only(main, category);

    let Some(rule) = category.rule() else {
        combo.is_complete = true;
        return combo;
    };

    let required_cost: f64 = rule
        .required
        .iter()
        .map(|kind| accompaniment(*kind).cost)
        .sum();
    if combo.total_cost + required_cost > remaining_budget {
        return combo;
    }
    for kind in rule.required {
        combo.add(accompaniment(*kind));
    }

    for kind in rule.optional {
        let side = accompaniment(*kind);
        if combo.total_cost + side.cost > remaining_budget {
            break;
        }
        combo.add(side);
    }

    combo.is_complete = true;
    combo
}

/// Whether a course may stand in for a slot without backfilling.
pub fn course_fits_slot(course: Course, slot: MealSlot) -> bool {
    match slot {
        MealSlot::Breakfast => course == Course::Snack,
        MealSlot::Lunch | MealSlot::Dinner => course == Course::MainCourse,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DietClass, Dish, Nutrition};

    fn sample_main(name: &str, course: Course) -> Dish {
        Dish::new(name, "rice, dal", DietClass::Vegetarian, course).with_times(10, 10)
    }

    fn enriched(dish: &Dish, cost: f64) -> EnrichedDish<'_> {
        EnrichedDish::new(dish, Nutrition::new(300.0, 10.0, 40.0, 5.0), cost)
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify("Punjabi Thali", MealSlot::Lunch), DishCategory::CompleteMeal);
        // "Dosa" is contained in the "Dosa Sambar" complete-meal keyword
        assert_eq!(classify("Dosa", MealSlot::Breakfast), DishCategory::CompleteMeal);
        assert_eq!(
            classify("Medu Vada", MealSlot::Breakfast),
            DishCategory::BreakfastWithGravy
        );
        assert_eq!(classify("Poha", MealSlot::Breakfast), DishCategory::BreakfastStandalone);
        assert_eq!(classify("Dal Makhani", MealSlot::Dinner), DishCategory::Gravy);
        assert_eq!(classify("Aloo Gobi", MealSlot::Lunch), DishCategory::DrySabzi);
        assert_eq!(classify("Veg Biryani", MealSlot::Lunch), DishCategory::RiceDish);
        assert_eq!(classify("Litti", MealSlot::Lunch), DishCategory::OtherMain);
    }

    #[test]
    fn test_gravy_gets_rice_and_papad() {
        let dish = sample_main("Rajma", Course::MainCourse);
        let combo = assemble(enriched(&dish, 20.0), MealSlot::Lunch, 55.0);

        assert_eq!(combo.display_name(), "Rajma + Rice + Papad");
        assert_eq!(combo.total_cost, 32.0);
        assert_eq!(combo.nutrition.calories, 530.0);
        assert_eq!(combo.total_time_minutes, 20);
        assert!(combo.is_complete);
    }

    #[test]
    fn test_optional_side_stops_at_budget() {
        let dish = sample_main("Rajma", Course::MainCourse);
        // 20 + 10 = 30 fits, +2 for papad does not
        let combo = assemble(enriched(&dish, 20.0), MealSlot::Dinner, 31.0);
        assert_eq!(combo.display_name(), "Rajma + Rice");
        assert!(combo.is_complete);
    }

    #[test]
    fn test_required_sides_are_all_or_nothing() {
        let dish = sample_main("Idli", Course::Snack);
        let combo = assemble(enriched(&dish, 15.0), MealSlot::Breakfast, 30.0);
        // Idli matches "Idli Sambar", a complete meal
        assert_eq!(combo.category, DishCategory::CompleteMeal);

        let vada = sample_main("Medu Vada", Course::Snack);
        let combo = assemble(enriched(&vada, 15.0), MealSlot::Breakfast, 30.0);
        // 15 + 15 + 5 = 35 > 30
        assert!(combo.accompaniments.is_empty());
        assert!(!combo.is_complete);
        assert_eq!(combo.total_cost, 15.0);
    }

    #[test]
    fn test_expensive_main_stays_alone() {
        let dish = sample_main("Paneer Tikka", Course::MainCourse);
        let combo = assemble(enriched(&dish, 90.0), MealSlot::Lunch, 75.0 - 90.0);
        assert!(combo.accompaniments.is_empty());
        assert!(!combo.is_complete);
    }

    #[test]
    fn test_standalone_breakfast_without_required_sides() {
        let dish = sample_main("Poha", Course::Snack);
        let combo = assemble(enriched(&dish, 20.0), MealSlot::Breakfast, 55.0);
        assert_eq!(combo.display_name(), "Poha + Coconut Chutney");
        assert!(combo.is_complete);
    }
}
