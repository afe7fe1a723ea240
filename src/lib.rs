pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod planner;

pub use catalog::DishCatalog;
pub use error::{PlannerError, Result};
pub use models::{UserPreferences, WeeklyPlan};
pub use planner::{PlanBuilder, generate_weekly_plan};
