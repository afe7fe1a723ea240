use std::collections::BTreeSet;
use std::str::FromStr;

use dialoguer::{Confirm, Input, MultiSelect, Select};
use strsim::jaro_winkler;

use crate::error::{PlannerError, Result};
use crate::models::dish::ALL_REGIONS;
use crate::models::preferences::PROTEIN_GOALS;
use crate::models::{DietType, UserPreferences};

/// Flavor tags found in the dish dataset.
pub const FLAVORS: [&str; 5] = ["spicy", "sweet", "mild", "sour", "bitter"];

/// Similarity above which a region counts as a likely typo.
const REGION_MATCH_THRESHOLD: f64 = 0.7;

/// Outcome of matching typed text against the catalog's regions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionMatch {
    Exact(String),
    /// Close candidates, most similar first.
    Suggestions(Vec<String>),
    NoMatch,
}

/// Match a region name case-insensitively, falling back to fuzzy suggestions.
pub fn match_region(input: &str, regions: &[String]) -> RegionMatch {
    let input = input.trim();
    if input.is_empty() || input.eq_ignore_ascii_case(ALL_REGIONS) {
        return RegionMatch::Exact(ALL_REGIONS.to_string());
    }

    if let Some(region) = regions.iter().find(|r| r.eq_ignore_ascii_case(input)) {
        return RegionMatch::Exact(region.clone());
    }

    let wanted = input.to_lowercase();
    let mut candidates: Vec<(&String, f64)> = regions
        .iter()
        .map(|r| (r, jaro_winkler(&r.to_lowercase(), &wanted)))
        .filter(|(_, score)| *score > REGION_MATCH_THRESHOLD)
        .collect();
    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    if candidates.is_empty() {
        RegionMatch::NoMatch
    } else {
        RegionMatch::Suggestions(candidates.into_iter().map(|(r, _)| r.clone()).collect())
    }
}

/// Parse a number typed at a prompt.
pub fn parse_number<T: FromStr>(input: &str, field: &str) -> Result<T> {
    input
        .trim()
        .parse()
        .map_err(|_| PlannerError::InvalidInput(format!("Invalid number for {}", field)))
}

/// Split comma-separated text into trimmed, non-empty entries.
pub fn parse_list(input: &str) -> BTreeSet<String> {
    input
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn prompt_number<T: FromStr>(prompt: &str, default: &str, field: &str) -> Result<T> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;
    parse_number(&input, field)
}

pub fn prompt_diet() -> Result<DietType> {
    let labels: Vec<&str> = DietType::ALL.iter().map(|d| d.label()).collect();
    let selection = Select::new()
        .with_prompt("Diet type")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(DietType::ALL[selection])
}

/// Prompt for a region, offering close matches for typos.
pub fn prompt_region(regions: &[String]) -> Result<String> {
    loop {
        let input: String = Input::new()
            .with_prompt(format!("Region ({} or {})", ALL_REGIONS, regions.join(", ")))
            .default(ALL_REGIONS.to_string())
            .interact_text()?;

        match match_region(&input, regions) {
            RegionMatch::Exact(region) => return Ok(region),
            RegionMatch::Suggestions(candidates) if candidates.len() == 1 => {
                let confirm = Confirm::new()
                    .with_prompt(format!("Did you mean '{}'?", candidates[0]))
                    .default(true)
                    .interact()?;
                if confirm {
                    return Ok(candidates[0].clone());
                }
            }
            RegionMatch::Suggestions(candidates) => {
                let mut options: Vec<String> = candidates.into_iter().take(5).collect();
                options.push("None of these".to_string());
                let selection = Select::new()
                    .with_prompt("Which did you mean?")
                    .items(&options)
                    .default(0)
                    .interact()?;
                if selection + 1 < options.len() {
                    return Ok(options[selection].clone());
                }
            }
            RegionMatch::NoMatch => println!("No region matching '{}'", input.trim()),
        }
    }
}

fn prompt_multi(prompt: &str, items: &[&str], defaults: &[bool]) -> Result<BTreeSet<String>> {
    let chosen = MultiSelect::new()
        .with_prompt(prompt)
        .items(items)
        .defaults(defaults)
        .interact()?;
    Ok(chosen.into_iter().map(|i| items[i].to_string()).collect())
}

/// Collect a full set of preferences interactively.
pub fn collect_preferences(regions: &[String]) -> Result<UserPreferences> {
    let defaults = UserPreferences::default();

    let diet = prompt_diet()?;
    let daily_calorie_target = prompt_number(
        "Daily calorie target",
        &defaults.daily_calorie_target.to_string(),
        "calorie target",
    )?;
    let weekly_budget = prompt_number(
        "Weekly budget (₹)",
        &defaults.weekly_budget.to_string(),
        "weekly budget",
    )?;
    let cost_per_meal_limit = prompt_number(
        "Cost limit per meal (₹)",
        &defaults.cost_per_meal_limit.to_string(),
        "cost per meal",
    )?;
    let cooking_time_limit = prompt_number(
        "Cooking time limit (minutes)",
        &defaults.cooking_time_limit.to_string(),
        "cooking time",
    )?;
    let region = prompt_region(regions)?;

    let flavor_defaults: Vec<bool> = FLAVORS
        .iter()
        .map(|f| defaults.prefers_flavor(f))
        .collect();
    let preferred_flavors = prompt_multi("Preferred flavors", &FLAVORS, &flavor_defaults)?;
    let goals = prompt_multi("Goals", &PROTEIN_GOALS, &vec![false; PROTEIN_GOALS.len()])?;

    let cuisines: String = Input::new()
        .with_prompt("Preferred cuisines (comma-separated, optional)")
        .allow_empty(true)
        .interact_text()?;

    let prefs = UserPreferences {
        diet,
        preferred_cuisines: parse_list(&cuisines),
        daily_calorie_target,
        weekly_budget,
        preferred_flavors,
        cooking_time_limit,
        region,
        goals,
        cost_per_meal_limit,
    };
    prefs.validate()?;
    Ok(prefs)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
