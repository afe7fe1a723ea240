pub mod dish;
pub mod nutrition;
pub mod plan;
pub mod preferences;
pub mod report;

pub use dish::{Course, DietClass, Dish, DishRecord, EnrichedDish, ingredient_tokens};
pub use nutrition::{Nutrition, round_to};
pub use plan::{
    BudgetStatus, DailyPlan, DayOfWeek, MealCombination, MealSlot, PlanNotice, PlanSummary,
    PlannedMeal, ShoppingList, WeeklyPlan,
};
pub use preferences::{DietType, UserPreferences};
pub use report::PlanReport;
