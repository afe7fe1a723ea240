use clap::{Parser, Subcommand};

use crate::planner::builder::DEFAULT_SHOPPING_LIST_TOP_N;

/// ThaliPlanner: weekly Indian meal plans within your diet, budget and cooking time.
#[derive(Parser, Debug)]
#[command(name = "thali_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the dish catalog CSV file.
    #[arg(short, long, default_value = "indian_food.csv")]
    pub catalog: String,

    /// Enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a weekly meal plan.
    Plan {
        /// Preferences JSON file. Prompts interactively when omitted.
        #[arg(short, long)]
        prefs: Option<String>,

        /// Per-kg ingredient price list CSV (item,price_per_kg).
        #[arg(long)]
        prices: Option<String>,

        /// Write the plan report as JSON to this path.
        #[arg(short, long)]
        output: Option<String>,

        /// Only allow healthy snacks and desserts.
        #[arg(long)]
        healthy: bool,

        /// Report budget overruns without swapping dishes.
        #[arg(long)]
        no_rebalance: bool,

        /// Number of ingredients kept in the shopping list.
        #[arg(long, default_value_t = DEFAULT_SHOPPING_LIST_TOP_N)]
        top: usize,
    },

    /// Collect preferences interactively and save them.
    Prefs {
        /// Where to write the preferences JSON.
        #[arg(short, long, default_value = "preferences.json")]
        output: String,
    },

    /// Show an overview of the dish catalog.
    Dishes,
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan {
            prefs: None,
            prices: None,
            output: None,
            healthy: false,
            no_rebalance: false,
            top: DEFAULT_SHOPPING_LIST_TOP_N,
        }
    }
}
