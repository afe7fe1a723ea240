pub mod prompts;
pub mod render;

pub use prompts::{collect_preferences, match_region, prompt_region, prompt_yes_no, RegionMatch};
pub use render::{describe_notice, display_catalog_overview, display_weekly_plan};
