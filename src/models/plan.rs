use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::dish::ingredient_tokens;
use crate::models::{EnrichedDish, Nutrition, round_to};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealSlot {
    pub const ALL: [MealSlot; 3] = [MealSlot::Breakfast, MealSlot::Lunch, MealSlot::Dinner];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::Lunch => "lunch",
            MealSlot::Dinner => "dinner",
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
            DayOfWeek::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccompanimentKind {
    Rice,
    Roti,
    Naan,
    Paratha,
    Sambar,
    Chutney,
    Papad,
    Pickle,
    Raita,
    Salad,
}

/// A fixed side served with a main dish.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Accompaniment {
    pub kind: AccompanimentKind,
    pub name: &'static str,
    pub cost: f64,
    pub time_minutes: u32,
    pub nutrition: Nutrition,
    pub quantity: &'static str,
}

/// How a main dish is completed into a meal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DishCategory {
    /// Already a full meal (thali, chole bhature).
    CompleteMeal,
    /// Needs a starch.
    Gravy,
    RiceDish,
    /// Needs roti.
    DrySabzi,
    /// Idli/dosa-class, needs sambar and chutney.
    BreakfastWithGravy,
    BreakfastStandalone,
    /// Unclassified main course, served with rice.
    OtherMain,
}

/// A main dish plus the accompaniments that made it a complete meal.
#[derive(Debug, Clone, PartialEq)]
pub struct MealCombination<'a> {
    pub main: EnrichedDish<'a>,
    pub category: DishCategory,
    pub accompaniments: Vec<&'static Accompaniment>,
    pub total_cost: f64,
    pub nutrition: Nutrition,
    /// Main and sides cook in parallel, so this is the max, not the sum.
    pub total_time_minutes: u32,
    pub is_complete: bool,
}

impl<'a> MealCombination<'a> {
    /// A combination holding only the main dish.
    pub fn main_only(main: EnrichedDish<'a>, category: DishCategory) -> Self {
        Self {
            main,
            category,
            accompaniments: Vec::new(),
            total_cost: main.cost,
            nutrition: main.nutrition,
            total_time_minutes: main.total_time(),
            is_complete: false,
        }
    }

    pub fn add(&mut self, accompaniment: &'static Accompaniment) {
        self.accompaniments.push(accompaniment);
        self.total_cost = round_to(self.total_cost + accompaniment.cost, 2);
        self.nutrition += accompaniment.nutrition;
        self.total_time_minutes = self.total_time_minutes.max(accompaniment.time_minutes);
    }

    /// "Main + Side + Side".
    pub fn display_name(&self) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(1 + self.accompaniments.len());
        parts.push(self.main.name());
        for accompaniment in &self.accompaniments {
            parts.push(accompaniment.name);
        }
        parts.join(" + ")
    }

    /// Ingredient tokens of the main dish; sides carry no ingredient text.
    pub fn ingredient_tokens(&self) -> Vec<String> {
        ingredient_tokens(&self.main.dish.ingredients)
    }
}

/// One filled meal slot.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedMeal<'a> {
    pub slot: MealSlot,
    pub combination: MealCombination<'a>,
    /// Selection score after the recency penalty.
    pub score: f64,
    pub reason: String,
}

impl PlannedMeal<'_> {
    pub fn main_name(&self) -> &str {
        self.combination.main.name()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DailyPlan<'a> {
    pub day: DayOfWeek,
    pub breakfast: PlannedMeal<'a>,
    pub lunch: PlannedMeal<'a>,
    pub dinner: PlannedMeal<'a>,
}

impl<'a> DailyPlan<'a> {
    /// Meals in slot order.
    pub fn meals(&self) -> [&PlannedMeal<'a>; 3] {
        [&self.breakfast, &self.lunch, &self.dinner]
    }

    pub fn meal(&self, slot: MealSlot) -> &PlannedMeal<'a> {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Dinner => &self.dinner,
        }
    }

    pub fn meal_mut(&mut self, slot: MealSlot) -> &mut PlannedMeal<'a> {
        match slot {
            MealSlot::Breakfast => &mut self.breakfast,
            MealSlot::Lunch => &mut self.lunch,
            MealSlot::Dinner => &mut self.dinner,
        }
    }

    pub fn total_cost(&self) -> f64 {
        self.meals().iter().map(|m| m.combination.total_cost).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShoppingItem {
    pub ingredient: String,
    pub count: usize,
}

/// Ingredient usage across the week, most used first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShoppingList {
    pub items: Vec<ShoppingItem>,
}

impl ShoppingList {
    pub fn top(&self, n: usize) -> &[ShoppingItem] {
        &self.items[..n.min(self.items.len())]
    }

    pub fn unique_count(&self) -> usize {
        self.items.len()
    }

    pub fn total_uses(&self) -> usize {
        self.items.iter().map(|i| i.count).sum()
    }

    pub fn count(&self, ingredient: &str) -> usize {
        self.items
            .iter()
            .find(|i| i.ingredient == ingredient)
            .map(|i| i.count)
            .unwrap_or(0)
    }
}

/// An ingredient worth prepping in bulk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSuggestion {
    pub ingredient: String,
    pub days: Vec<DayOfWeek>,
}

impl fmt::Display for BatchSuggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let days: Vec<&str> = self.days.iter().map(|d| d.as_str()).collect();
        write!(
            f,
            "Batch prep {} - used on {}",
            self.ingredient,
            days.join(", ")
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BudgetStatus {
    #[serde(rename = "under")]
    Under,
    #[serde(rename = "optimal")]
    Optimal,
    #[serde(rename = "slightly over")]
    SlightlyOver,
    #[serde(rename = "exceeds")]
    Exceeds,
}

impl BudgetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetStatus::Under => "under",
            BudgetStatus::Optimal => "optimal",
            BudgetStatus::SlightlyOver => "slightly over",
            BudgetStatus::Exceeds => "exceeds",
        }
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weekly nutrition and cost totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanSummary {
    pub total_calories: f64,
    pub total_protein: f64,
    pub total_cost: f64,
    pub daily_avg_calories: f64,
    pub daily_avg_protein: f64,
    pub daily_avg_cost: f64,
    pub avg_cost_per_meal: f64,
    /// Percent; negative when the daily average is more than double the target.
    pub calorie_accuracy: f64,
    /// Percent of ingredient uses that were repeats.
    pub ingredient_overlap: f64,
    pub weekly_budget: f64,
    pub budget_status: BudgetStatus,
}

/// Degraded-quality events observed while planning. None of them abort a plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlanNotice {
    /// Too few dishes in the requested region; the whole catalog was used.
    RegionFallback { region: String, available: usize },
    /// Dishes over the cooking-time limit but inside the buffer were kept.
    TimeBufferUsed { limit_minutes: u32, dishes: usize },
    /// A slot pool was topped up with dishes from another course.
    SlotPoolBackfilled { slot: MealSlot, added: usize },
    /// No course-appropriate dish existed, so every candidate was allowed.
    SlotPoolFallback { slot: MealSlot },
    /// Every eligible dish had been used, so a repeat was allowed.
    PoolExhausted {
        day: DayOfWeek,
        slot: MealSlot,
        dish: String,
    },
    /// A slot was swapped for a cheaper dish to approach the weekly budget.
    Rebalanced {
        day: DayOfWeek,
        slot: MealSlot,
        replaced: String,
        replacement: String,
    },
    OverBudget { total_cost: f64, weekly_budget: f64 },
}

/// Seven planned days plus everything derived from them.
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyPlan<'a> {
    pub days: Vec<DailyPlan<'a>>,
    pub shopping_list: ShoppingList,
    pub batch_cooking: Vec<BatchSuggestion>,
    pub summary: PlanSummary,
    pub notices: Vec<PlanNotice>,
}

impl<'a> WeeklyPlan<'a> {
    /// Every planned meal in day then slot order.
    pub fn meals(&self) -> impl Iterator<Item = &PlannedMeal<'a>> {
        self.days.iter().flat_map(|d| d.meals())
    }

    pub fn total_cost(&self) -> f64 {
        self.days.iter().map(|d| d.total_cost()).sum()
    }
}
