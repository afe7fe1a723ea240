//! Hard dietary filtering and per-slot candidate pools.

use tracing::{debug, info, warn};

use crate::models::plan::{MealSlot, PlanNotice};
use crate::models::{Course, DietType, Dish, EnrichedDish, UserPreferences};
use crate::planner::combinations::course_fits_slot;
use crate::planner::constants::*;

/// Dishes that survived filtering, plus what was relaxed on the way.
#[derive(Debug, Clone, Default)]
pub struct FilterOutcome<'a> {
    pub dishes: Vec<&'a Dish>,
    pub notices: Vec<PlanNotice>,
}

/// Healthy mode keeps every main course and starter, but only the listed
/// breakfast snacks and milk-based desserts.
pub fn is_healthy_choice(dish: &Dish) -> bool {
    match dish.course {
        Course::MainCourse | Course::Starter => true,
        Course::Snack => HEALTHY_BREAKFASTS.contains_exact(&dish.name),
        Course::Dessert => HEALTHY_DESSERTS.contains_exact(&dish.name),
    }
}

/// Diet-class compatibility plus ingredient keyword exclusions.
pub fn passes_diet(dish: &Dish, diet: DietType) -> bool {
    if !diet.allows(dish.diet) {
        return false;
    }
    let excluded = match diet {
        DietType::Vegan => &VEGAN_EXCLUDED,
        DietType::Jain => &JAIN_EXCLUDED,
        DietType::GlutenFree => &GLUTEN_EXCLUDED,
        _ => return true,
    };
    !excluded.any_in(&dish.ingredients)
}

fn in_region(dish: &Dish, region: &str) -> bool {
    dish.region.trim().eq_ignore_ascii_case(region.trim())
}

/// Run the catalog through the healthy, diet, region and time filters.
///
/// The region filter is soft: too small a regional subset falls back to
/// every diet-compatible dish. The time filter allows half as much again as
/// the user's limit.
pub fn filter_dishes<'a>(
    dishes: impl IntoIterator<Item = &'a Dish>,
    prefs: &UserPreferences,
    healthy_only: bool,
) -> FilterOutcome<'a> {
    let mut notices = Vec::new();

    let compatible: Vec<&'a Dish> = dishes
        .into_iter()
        .filter(|d| !healthy_only || is_healthy_choice(d))
        .filter(|d| passes_diet(d, prefs.diet))
        .collect();
    debug!(count = compatible.len(), diet = %prefs.diet, "diet filter applied");

    let regional = if prefs.any_region() {
        compatible
    } else {
        let subset: Vec<&'a Dish> = compatible
            .iter()
            .copied()
            .filter(|d| in_region(d, &prefs.region))
            .collect();
        if subset.len() >= MIN_REGIONAL_DISHES {
            subset
        } else {
            info!(
                region = %prefs.region,
                available = subset.len(),
                "too few regional dishes, using all regions"
            );
            notices.push(PlanNotice::RegionFallback {
                region: prefs.region.clone(),
                available: subset.len(),
            });
            compatible
        }
    };

    let limit = prefs.cooking_time_limit;
    let max_minutes = limit as f64 * TIME_LIMIT_BUFFER;
    let timed: Vec<&'a Dish> = regional
        .into_iter()
        .filter(|d| d.total_time() as f64 <= max_minutes)
        .collect();

    let buffered = timed.iter().filter(|d| d.total_time() > limit).count();
    if buffered > 0 {
        info!(
            limit_minutes = limit,
            dishes = buffered,
            "kept dishes over the time limit within the buffer"
        );
        notices.push(PlanNotice::TimeBufferUsed {
            limit_minutes: limit,
            dishes: buffered,
        });
    }

    FilterOutcome {
        dishes: timed,
        notices,
    }
}

/// Candidate pools for breakfast and for the two main meals.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlotPools<'a> {
    pub breakfast: Vec<EnrichedDish<'a>>,
    /// Shared by lunch and dinner.
    pub main: Vec<EnrichedDish<'a>>,
}

impl<'a> SlotPools<'a> {
    pub fn pool(&self, slot: MealSlot) -> &[EnrichedDish<'a>] {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch | MealSlot::Dinner => &self.main,
        }
    }
}

/// Split enriched dishes into slot pools, keeping catalog order.
///
/// Small pools are topped up from a neighbouring course; an empty pool falls
/// back to every enriched dish.
pub fn partition<'a>(
    enriched: &[EnrichedDish<'a>],
    notices: &mut Vec<PlanNotice>,
) -> SlotPools<'a> {
    let mut breakfast = course_pool(enriched, MealSlot::Breakfast);
    if breakfast.len() < MIN_BREAKFAST_POOL {
        let quick: Vec<EnrichedDish<'a>> = enriched
            .iter()
            .filter(|d| {
                d.dish.course == Course::MainCourse && d.total_time() <= QUICK_BREAKFAST_MINUTES
            })
            .copied()
            .collect();
        backfill(&mut breakfast, quick, &[MealSlot::Breakfast], notices);
    }

    let mut main = course_pool(enriched, MealSlot::Lunch);
    if main.len() < MIN_MAIN_POOL {
        let starters: Vec<EnrichedDish<'a>> = enriched
            .iter()
            .filter(|d| d.dish.course == Course::Starter)
            .copied()
            .collect();
        backfill(&mut main, starters, &[MealSlot::Lunch, MealSlot::Dinner], notices);
    }

    fallback_if_empty(&mut breakfast, enriched, &[MealSlot::Breakfast], notices);
    fallback_if_empty(&mut main, enriched, &[MealSlot::Lunch, MealSlot::Dinner], notices);

    SlotPools { breakfast, main }
}

fn course_pool<'a>(enriched: &[EnrichedDish<'a>], slot: MealSlot) -> Vec<EnrichedDish<'a>> {
    enriched
        .iter()
        .filter(|d| course_fits_slot(d.dish.course, slot))
        .copied()
        .collect()
}

fn backfill<'a>(
    pool: &mut Vec<EnrichedDish<'a>>,
    extra: Vec<EnrichedDish<'a>>,
    slots: &[MealSlot],
    notices: &mut Vec<PlanNotice>,
) {
    if extra.is_empty() {
        return;
    }
    let added = extra.len();
    pool.extend(extra);
    for slot in slots {
        debug!(slot = %slot, added, "backfilled slot pool");
        notices.push(PlanNotice::SlotPoolBackfilled { slot: *slot, added });
    }
}

fn fallback_if_empty<'a>(
    pool: &mut Vec<EnrichedDish<'a>>,
    enriched: &[EnrichedDish<'a>],
    slots: &[MealSlot],
    notices: &mut Vec<PlanNotice>,
) {
    if !pool.is_empty() {
        return;
    }
    pool.extend_from_slice(enriched);
    for slot in slots {
        warn!(slot = %slot, "no course-appropriate dishes, using every candidate");
        notices.push(PlanNotice::SlotPoolFallback { slot: *slot });
    }
}
