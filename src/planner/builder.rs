use std::cmp::Ordering;
use std::collections::BTreeSet;

use tracing::{debug, info, warn};

use crate::catalog::DishCatalog;
use crate::error::{PlannerError, Result};
use crate::models::plan::{DailyPlan, DayOfWeek, MealSlot, PlanNotice, PlannedMeal, WeeklyPlan};
use crate::models::{Dish, EnrichedDish, UserPreferences};
use crate::planner::combinations::assemble;
use crate::planner::estimators::{CostSource, dish_cost, estimate_nutrition};
use crate::planner::filters::{FilterOutcome, SlotPools, filter_dishes, partition};
use crate::planner::scoring::{score_dish, selection_reason};
use crate::planner::selection::{SelectionState, select_best};
use crate::planner::summary::{batch_suggestions, shopping_list, summarize};

/// Default number of slot swaps the rebalancer may make.
pub const DEFAULT_MAX_SWAPS: usize = 3;

/// Ingredients shown in the shopping list.
pub const DEFAULT_SHOPPING_LIST_TOP_N: usize = 20;

/// Servings priced by a pluggable cost source.
pub const DEFAULT_COST_SOURCE_SERVINGS: u32 = 2;

/// What to do when the finished week costs more than the weekly budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RebalanceStrategy {
    /// Leave the plan as selected and only report the budget status.
    ReportOnly,
    /// Swap the most expensive slots for cheaper unused dishes.
    SwapExpensive { max_swaps: usize },
}

impl Default for RebalanceStrategy {
    fn default() -> Self {
        RebalanceStrategy::SwapExpensive {
            max_swaps: DEFAULT_MAX_SWAPS,
        }
    }
}

/// Per-run planner options.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    pub rebalance: RebalanceStrategy,
    /// Restrict snacks and desserts to the healthy lists.
    pub healthy_only: bool,
    pub shopping_list_top_n: usize,
    pub cost_source_servings: u32,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            rebalance: RebalanceStrategy::default(),
            healthy_only: false,
            shopping_list_top_n: DEFAULT_SHOPPING_LIST_TOP_N,
            cost_source_servings: DEFAULT_COST_SOURCE_SERVINGS,
        }
    }
}

/// Builds weekly plans from a borrowed catalog.
///
/// Holds no state between calls; every plan starts from a fresh
/// [`SelectionState`].
pub struct PlanBuilder<'a> {
    catalog: &'a DishCatalog,
    config: PlannerConfig,
    cost_source: Option<&'a dyn CostSource>,
}

impl<'a> PlanBuilder<'a> {
    pub fn new(catalog: &'a DishCatalog) -> Self {
        Self {
            catalog,
            config: PlannerConfig::default(),
            cost_source: None,
        }
    }

    pub fn with_config(mut self, config: PlannerConfig) -> Self {
        self.config = config;
        self
    }

    /// Price main dishes with `source` instead of the built-in cost table.
    pub fn with_cost_source(mut self, source: &'a dyn CostSource) -> Self {
        self.cost_source = Some(source);
        self
    }

    /// Generate seven days of breakfast, lunch and dinner.
    ///
    /// Fails only for invalid preferences or when no dish survives the
    /// dietary and time filters. Every other shortfall is recorded as a
    /// [`PlanNotice`] on the returned plan.
    pub fn generate_weekly_plan(&self, prefs: &UserPreferences) -> Result<WeeklyPlan<'a>> {
        prefs.validate()?;

        let FilterOutcome {
            dishes,
            mut notices,
        } = filter_dishes(self.catalog, prefs, self.config.healthy_only);
        if dishes.is_empty() {
            warn!(diet = %prefs.diet, "no dishes left after filtering");
            return Err(PlannerError::NoMatchingDishes);
        }

        let enriched: Vec<EnrichedDish<'a>> = dishes.iter().map(|d| self.enrich(*d)).collect();
        let pools = partition(&enriched, &mut notices);
        info!(
            candidates = enriched.len(),
            breakfast = pools.breakfast.len(),
            main = pools.main.len(),
            "planning week"
        );

        let mut state = SelectionState::new();
        let mut days = Vec::with_capacity(DayOfWeek::ALL.len());
        for day in DayOfWeek::ALL {
            let breakfast =
                self.plan_slot(day, MealSlot::Breakfast, &pools, prefs, &mut state, &mut notices)?;
            let lunch =
                self.plan_slot(day, MealSlot::Lunch, &pools, prefs, &mut state, &mut notices)?;
            let dinner =
                self.plan_slot(day, MealSlot::Dinner, &pools, prefs, &mut state, &mut notices)?;
            days.push(DailyPlan {
                day,
                breakfast,
                lunch,
                dinner,
            });
        }

        if let RebalanceStrategy::SwapExpensive { max_swaps } = self.config.rebalance {
            rebalance(&mut days, &pools, prefs, &state, max_swaps, &mut notices);
        }

        let total_cost: f64 = days.iter().map(|d| d.total_cost()).sum();
        if total_cost > prefs.weekly_budget {
            warn!(
                total_cost,
                weekly_budget = prefs.weekly_budget,
                "plan exceeds weekly budget"
            );
            notices.push(PlanNotice::OverBudget {
                total_cost,
                weekly_budget: prefs.weekly_budget,
            });
        }

        let shopping_list = shopping_list(&days);
        let batch_cooking = batch_suggestions(&days);
        let summary = summarize(&days, prefs, &shopping_list);

        Ok(WeeklyPlan {
            days,
            shopping_list,
            batch_cooking,
            summary,
            notices,
        })
    }

    fn enrich(&self, dish: &'a Dish) -> EnrichedDish<'a> {
        EnrichedDish::new(
            dish,
            estimate_nutrition(&dish.ingredients, dish.course),
            dish_cost(dish, self.cost_source, self.config.cost_source_servings),
        )
    }

    fn plan_slot(
        &self,
        day: DayOfWeek,
        slot: MealSlot,
        pools: &SlotPools<'a>,
        prefs: &UserPreferences,
        state: &mut SelectionState,
        notices: &mut Vec<PlanNotice>,
    ) -> Result<PlannedMeal<'a>> {
        let selection =
            select_best(pools.pool(slot), prefs, state).ok_or(PlannerError::NoMatchingDishes)?;

        if selection.reused {
            warn!(day = %day, slot = %slot, dish = selection.dish.name(), "slot pool exhausted, repeating a dish");
            notices.push(PlanNotice::PoolExhausted {
                day,
                slot,
                dish: selection.dish.name().to_string(),
            });
        }

        state.record(selection.dish.dish);
        Ok(plan_meal(selection.dish, selection.score, slot, prefs))
    }
}

/// Complete a chosen dish into the meal served in `slot`.
fn plan_meal<'a>(
    dish: EnrichedDish<'a>,
    score: f64,
    slot: MealSlot,
    prefs: &UserPreferences,
) -> PlannedMeal<'a> {
    let remaining = prefs.cost_per_meal_limit - dish.cost;
    PlannedMeal {
        slot,
        combination: assemble(dish, slot, remaining),
        score,
        reason: selection_reason(&dish, prefs),
    }
}

/// Swap expensive slots for cheaper unused dishes until the week fits the
/// budget, the swap limit is reached, or no slot can be made cheaper.
fn rebalance<'a>(
    days: &mut [DailyPlan<'a>],
    pools: &SlotPools<'a>,
    prefs: &UserPreferences,
    state: &SelectionState,
    max_swaps: usize,
    notices: &mut Vec<PlanNotice>,
) {
    let mut swaps = 0;
    while swaps < max_swaps {
        let total: f64 = days.iter().map(|d| d.total_cost()).sum();
        if total <= prefs.weekly_budget {
            break;
        }

        let in_plan: BTreeSet<&'a str> = days
            .iter()
            .flat_map(|d| d.meals())
            .map(|m| m.combination.main.name())
            .collect();

        let mut slots: Vec<(usize, MealSlot, f64)> = days
            .iter()
            .enumerate()
            .flat_map(|(i, d)| {
                MealSlot::ALL
                    .into_iter()
                    .map(move |slot| (i, slot, d.meal(slot).combination.total_cost))
            })
            .collect();
        slots.sort_by(|a, b| b.2.partial_cmp(&a.2).unwrap_or(Ordering::Equal));

        let swap = slots.into_iter().find_map(|(i, slot, cost)| {
            cheaper_meal(pools.pool(slot), slot, cost, &in_plan, prefs, state)
                .map(|meal| (i, slot, meal))
        });
        let Some((i, slot, replacement)) = swap else {
            debug!(total, "no cheaper substitutes left");
            break;
        };

        let day = &mut days[i];
        let replaced = day.meal(slot).main_name().to_string();
        info!(
            day = %day.day,
            slot = %slot,
            replaced = %replaced,
            replacement = replacement.main_name(),
            "swapped meal to fit budget"
        );
        notices.push(PlanNotice::Rebalanced {
            day: day.day,
            slot,
            replaced,
            replacement: replacement.main_name().to_string(),
        });
        *day.meal_mut(slot) = replacement;
        swaps += 1;
    }
}

/// Best-scoring unused dish whose assembled meal is strictly cheaper.
fn cheaper_meal<'a>(
    pool: &[EnrichedDish<'a>],
    slot: MealSlot,
    current_cost: f64,
    in_plan: &BTreeSet<&'a str>,
    prefs: &UserPreferences,
    state: &SelectionState,
) -> Option<PlannedMeal<'a>> {
    let mut best: Option<PlannedMeal<'a>> = None;
    for dish in pool.iter().filter(|d| !in_plan.contains(d.name())) {
        let score = score_dish(dish, prefs, state.pool()).total();
        let meal = plan_meal(*dish, score, slot, prefs);
        if meal.combination.total_cost >= current_cost {
            continue;
        }
        if best.as_ref().is_none_or(|b| score > b.score) {
            best = Some(meal);
        }
    }
    best
}

/// Generate a weekly plan with the default configuration.
pub fn generate_weekly_plan<'a>(
    catalog: &'a DishCatalog,
    prefs: &UserPreferences,
) -> Result<WeeklyPlan<'a>> {
    PlanBuilder::new(catalog).generate_weekly_plan(prefs)
}
