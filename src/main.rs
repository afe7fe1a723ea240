use clap::Parser;
use std::path::Path;
use tracing_subscriber::EnvFilter;

use thali_planner_rs::catalog::{
    DishCatalog, load_catalog, load_preferences, load_price_list, save_json, save_preferences,
};
use thali_planner_rs::cli::{Cli, Command};
use thali_planner_rs::error::Result;
use thali_planner_rs::interface::{
    collect_preferences, display_catalog_overview, display_weekly_plan, prompt_yes_no,
};
use thali_planner_rs::models::{PlanReport, UserPreferences};
use thali_planner_rs::planner::{PlanBuilder, PlannerConfig, PriceListCostSource, RebalanceStrategy};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan {
            prefs,
            prices,
            output,
            healthy,
            no_rebalance,
            top,
        } => {
            let config = PlannerConfig {
                rebalance: if no_rebalance {
                    RebalanceStrategy::ReportOnly
                } else {
                    RebalanceStrategy::default()
                },
                healthy_only: healthy,
                shopping_list_top_n: top,
                ..Default::default()
            };
            cmd_plan(
                &cli.catalog,
                prefs.as_deref(),
                prices.as_deref(),
                output.as_deref(),
                config,
            )
        }
        Command::Prefs { output } => cmd_prefs(&cli.catalog, &output),
        Command::Dishes => cmd_dishes(&cli.catalog),
    }
}

/// Load the catalog, reporting a missing file instead of failing.
fn open_catalog(catalog_path: &str) -> Result<Option<DishCatalog>> {
    let path = Path::new(catalog_path);

    if !path.exists() {
        eprintln!("Dish catalog not found: {}", catalog_path);
        eprintln!("Pass --catalog with the path to the dish CSV.");
        return Ok(None);
    }

    let catalog = load_catalog(path)?;
    println!("Loaded {} dishes", catalog.len());
    Ok(Some(catalog))
}

/// Generate a weekly plan and optionally write its report.
fn cmd_plan(
    catalog_path: &str,
    prefs_path: Option<&str>,
    prices_path: Option<&str>,
    output: Option<&str>,
    config: PlannerConfig,
) -> Result<()> {
    let Some(catalog) = open_catalog(catalog_path)? else {
        return Ok(());
    };

    let prefs: UserPreferences = match prefs_path {
        Some(p) => load_preferences(p)?,
        None => {
            println!();
            collect_preferences(&catalog.regions())?
        }
    };

    let prices: Option<PriceListCostSource> = match prices_path {
        Some(p) => {
            let source = load_price_list(p)?;
            println!("Loaded {} ingredient prices", source.len());
            Some(source)
        }
        None => None,
    };

    println!();
    println!(
        "Planning a {} week on {:.0} per week...",
        prefs.diet.label(),
        prefs.weekly_budget
    );

    let top_n = config.shopping_list_top_n;
    let mut builder = PlanBuilder::new(&catalog).with_config(config);
    if let Some(source) = prices.as_ref() {
        builder = builder.with_cost_source(source);
    }
    let plan = builder.generate_weekly_plan(&prefs)?;

    display_weekly_plan(&plan);

    let report = PlanReport::from_plan(&plan, &prefs, top_n);
    match output {
        Some(out) => {
            save_json(out, &report)?;
            println!("Plan written to {}", out);
        }
        None => {
            let save = prompt_yes_no("Save plan as JSON?", false)?;
            if save {
                save_json("meal_plan.json", &report)?;
                println!("Plan written to meal_plan.json");
            }
        }
    }

    Ok(())
}

/// Collect preferences and save them for later runs.
fn cmd_prefs(catalog_path: &str, output: &str) -> Result<()> {
    let Some(catalog) = open_catalog(catalog_path)? else {
        return Ok(());
    };

    let prefs = collect_preferences(&catalog.regions())?;

    if Path::new(output).exists() {
        let overwrite = prompt_yes_no(&format!("Overwrite {}?", output), false)?;
        if !overwrite {
            return Ok(());
        }
    }

    save_preferences(output, &prefs)?;
    println!("Preferences saved to {}", output);

    Ok(())
}

/// Show catalog counts.
fn cmd_dishes(catalog_path: &str) -> Result<()> {
    if let Some(catalog) = open_catalog(catalog_path)? {
        display_catalog_overview(&catalog);
    }
    Ok(())
}
