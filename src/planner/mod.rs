pub mod builder;
pub mod combinations;
pub mod constants;
pub mod estimators;
pub mod filters;
pub mod keywords;
pub mod scoring;
pub mod selection;
pub mod summary;

pub use builder::{PlanBuilder, PlannerConfig, RebalanceStrategy, generate_weekly_plan};
pub use combinations::{assemble, classify};
pub use estimators::{CostSource, PriceListCostSource, estimate_cost, estimate_nutrition};
pub use scoring::{ScoreBreakdown, score_dish};
pub use selection::{IngredientPool, Selection, SelectionState, select_best};
