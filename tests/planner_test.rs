#[macro_use]
extern crate assert_float_eq;

use std::collections::BTreeSet;
use std::io::Write;

use tempfile::NamedTempFile;

use thali_planner_rs::catalog::{load_catalog, load_price_list};
use thali_planner_rs::models::plan::PlanNotice;
use thali_planner_rs::models::{
    BudgetStatus, Course, DayOfWeek, DietClass, DietType, Dish, MealSlot, PlanReport,
    UserPreferences,
};
use thali_planner_rs::planner::summary::budget_status;
use thali_planner_rs::planner::{PlanBuilder, PlannerConfig, RebalanceStrategy};
use thali_planner_rs::{DishCatalog, PlannerError, generate_weekly_plan};

fn scenario_catalog() -> DishCatalog {
    let mut dishes = Vec::new();
    for i in 1..=20 {
        dishes.push(Dish::new(
            &format!("Veg Main {}", i),
            "rice, dal, tomato, onion, oil",
            DietClass::Vegetarian,
            Course::MainCourse,
        ));
    }
    for i in 1..=10 {
        dishes.push(
            Dish::new(
                &format!("Snack {}", i),
                "poha, peanut, curry leaves",
                DietClass::Vegetarian,
                Course::Snack,
            )
            .with_times(10, 15),
        );
    }
    DishCatalog::new(dishes)
}

fn scenario_prefs() -> UserPreferences {
    UserPreferences {
        diet: DietType::Vegetarian,
        daily_calorie_target: 2000,
        weekly_budget: 1200.0,
        cost_per_meal_limit: 75.0,
        cooking_time_limit: 45,
        region: "All".to_string(),
        ..Default::default()
    }
}

#[test]
fn test_scenario_vegetarian_week() {
    let catalog = scenario_catalog();
    let prefs = scenario_prefs();
    let plan = generate_weekly_plan(&catalog, &prefs).unwrap();

    assert_eq!(plan.days.len(), 7);
    assert_eq!(plan.meals().count(), 21);
    let days: Vec<DayOfWeek> = plan.days.iter().map(|d| d.day).collect();
    assert_eq!(days, DayOfWeek::ALL.to_vec());

    for day in &plan.days {
        assert_eq!(day.breakfast.slot, MealSlot::Breakfast);
        assert_eq!(day.breakfast.combination.main.dish.course, Course::Snack);
        assert_eq!(day.lunch.combination.main.dish.course, Course::MainCourse);
        assert_eq!(day.dinner.combination.main.dish.course, Course::MainCourse);
    }

    for meal in plan.meals() {
        assert_eq!(meal.combination.main.dish.diet, DietClass::Vegetarian);
    }

    // Enough dishes for every slot, so nothing repeats all week.
    let names: BTreeSet<&str> = plan.meals().map(|m| m.main_name()).collect();
    assert_eq!(names.len(), 21);

    assert_eq!(
        plan.summary.budget_status,
        budget_status(plan.summary.total_cost, 1200.0)
    );
    assert_float_absolute_eq!(plan.summary.total_cost, plan.total_cost(), 0.01);
}

#[test]
fn test_impossible_budget_still_fills_week() {
    let catalog = scenario_catalog();
    let prefs = UserPreferences {
        weekly_budget: 1.0,
        ..scenario_prefs()
    };
    let plan = generate_weekly_plan(&catalog, &prefs).unwrap();

    assert_eq!(plan.meals().count(), 21);
    assert_eq!(plan.summary.budget_status, BudgetStatus::Exceeds);
    assert!(
        plan.notices
            .iter()
            .any(|n| matches!(n, PlanNotice::OverBudget { .. }))
    );

    let swaps = plan
        .notices
        .iter()
        .filter(|n| matches!(n, PlanNotice::Rebalanced { .. }))
        .count();
    assert!(swaps <= 3);
}

#[test]
fn test_report_only_leaves_plan_unswapped() {
    let catalog = scenario_catalog();
    let prefs = UserPreferences {
        weekly_budget: 1.0,
        ..scenario_prefs()
    };
    let config = PlannerConfig {
        rebalance: RebalanceStrategy::ReportOnly,
        ..Default::default()
    };
    let plan = PlanBuilder::new(&catalog)
        .with_config(config)
        .generate_weekly_plan(&prefs)
        .unwrap();

    assert!(
        !plan
            .notices
            .iter()
            .any(|n| matches!(n, PlanNotice::Rebalanced { .. }))
    );
    assert_eq!(plan.summary.budget_status, BudgetStatus::Exceeds);
}

#[test]
fn test_generation_is_deterministic() {
    let catalog = scenario_catalog();
    let prefs = scenario_prefs();

    let first = generate_weekly_plan(&catalog, &prefs).unwrap();
    let second = generate_weekly_plan(&catalog, &prefs).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_no_matching_dishes() {
    let catalog = DishCatalog::new(vec![
        Dish::new("Paneer Tikka", "paneer, curd", DietClass::Vegetarian, Course::Starter),
        Dish::new("Kheer", "milk, rice, sugar", DietClass::Vegetarian, Course::Dessert),
    ]);
    let prefs = UserPreferences {
        diet: DietType::Vegan,
        ..scenario_prefs()
    };

    let result = generate_weekly_plan(&catalog, &prefs);
    assert!(matches!(result, Err(PlannerError::NoMatchingDishes)));
}

#[test]
fn test_invalid_preferences_rejected() {
    let catalog = scenario_catalog();
    let prefs = UserPreferences {
        daily_calorie_target: 0,
        ..scenario_prefs()
    };

    let result = generate_weekly_plan(&catalog, &prefs);
    assert!(matches!(result, Err(PlannerError::InvalidPreferences(_))));
}

#[test]
fn test_tiny_catalog_reuses_dishes() {
    let catalog = DishCatalog::new(vec![
        Dish::new("Upma", "rava, onion, oil", DietClass::Vegetarian, Course::Snack).with_times(5, 15),
        Dish::new("Dal Tadka", "toor dal, tomato, ghee", DietClass::Vegetarian, Course::MainCourse),
        Dish::new("Aloo Gobi", "potato, cauliflower, oil", DietClass::Vegetarian, Course::MainCourse),
    ]);
    let plan = generate_weekly_plan(&catalog, &scenario_prefs()).unwrap();

    assert_eq!(plan.meals().count(), 21);
    assert!(
        plan.notices
            .iter()
            .any(|n| matches!(n, PlanNotice::PoolExhausted { .. }))
    );
}

#[test]
fn test_reuse_prefers_least_recent_main() {
    // Identical mains score the same, so only the recency penalty separates them.
    let main = |name: &str| {
        Dish::new(name, "toor dal, tomato, ghee", DietClass::Vegetarian, Course::MainCourse)
            .with_times(15, 25)
    };
    let catalog = DishCatalog::new(vec![
        Dish::new("Upma", "rava, onion, oil", DietClass::Vegetarian, Course::Snack).with_times(5, 15),
        main("Dal Tadka"),
        main("Dal Fry"),
        main("Dal Makhani"),
    ]);
    let config = PlannerConfig {
        rebalance: RebalanceStrategy::ReportOnly,
        ..Default::default()
    };
    let plan = PlanBuilder::new(&catalog)
        .with_config(config)
        .generate_weekly_plan(&scenario_prefs())
        .unwrap();

    let mains: Vec<&str> = plan
        .days
        .iter()
        .flat_map(|d| [d.lunch.main_name(), d.dinner.main_name()])
        .collect();
    assert_eq!(mains.len(), 14);
    assert_eq!(&mains[..3], &["Dal Tadka", "Dal Fry", "Dal Makhani"]);

    // Once every main is used, each slot takes the one chosen longest ago.
    for i in 3..mains.len() {
        assert_ne!(mains[i], mains[i - 1], "slot {} repeats the latest pick", i);
        assert_eq!(mains[i], mains[i - 3], "slot {} skipped the oldest main", i);
    }

    let exhausted = plan
        .notices
        .iter()
        .filter(|n| matches!(n, PlanNotice::PoolExhausted { slot: MealSlot::Lunch | MealSlot::Dinner, .. }))
        .count();
    assert_eq!(exhausted, 11);
}

#[test]
fn test_shopping_list_counts_every_token() {
    let catalog = scenario_catalog();
    let plan = generate_weekly_plan(&catalog, &scenario_prefs()).unwrap();

    let tokens: usize = plan
        .meals()
        .map(|m| m.combination.ingredient_tokens().len())
        .sum();
    assert_eq!(plan.shopping_list.total_uses(), tokens);

    // Every main shares the same five ingredients.
    assert_eq!(plan.shopping_list.count("rice"), 14);
    assert_eq!(plan.shopping_list.count("poha"), 7);

    let counts: Vec<usize> = plan.shopping_list.items.iter().map(|i| i.count).collect();
    assert!(counts.windows(2).all(|w| w[0] >= w[1]));

    assert!(!plan.batch_cooking.is_empty());
    assert!(plan.batch_cooking.len() <= 5);
    assert!(plan.batch_cooking.iter().all(|b| b.days.len() >= 3));
}

#[test]
fn test_plan_report_json() {
    let catalog = scenario_catalog();
    let prefs = scenario_prefs();
    let plan = generate_weekly_plan(&catalog, &prefs).unwrap();

    let report = PlanReport::from_plan(&plan, &prefs, 3);
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["weekly_plan"].as_array().unwrap().len(), 7);
    assert_eq!(json["weekly_plan"][0]["day"], "Monday");
    assert_eq!(json["shopping_list"].as_array().unwrap().len(), 3);
    assert_eq!(json["summary"]["weekly_budget"], "₹1200.00");
    assert!(
        json["weekly_plan"][0]["meals"]["lunch"]["dish"]
            .as_str()
            .unwrap()
            .starts_with("Veg Main")
    );
}

const CATALOG_CSV: &str = "\
name,ingredients,diet,prep_time,cook_time,flavor_profile,course,state,region
Poha,\"Poha, Onion, Peanuts, Curry leaves\",vegetarian,10,15,spicy,snack,Maharashtra,West
Upma,\"Rava, Onion, Mustard seeds\",vegetarian,5,15,mild,snack,Karnataka,South
Idli,\"Rice, Urad dal\",vegetarian,10,20,mild,snack,Tamil Nadu,South
Dal Tadka,\"Toor dal, Tomato, Ghee, Cumin\",vegetarian,10,25,spicy,main course,Punjab,North
Rajma,\"Rajma, Tomato, Onion\",vegetarian,-1,-1,-1,main course,Punjab,North
Bhindi Masala,\"Okra, Onion, Tomato\",vegetarian,10,20,spicy,main course,Punjab,North
Chicken Curry,\"Chicken, Onion, Tomato\",non vegetarian,15,30,spicy,main course,Punjab,North
";

#[test]
fn test_plan_from_csv_catalog() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(CATALOG_CSV.as_bytes()).unwrap();
    let catalog = load_catalog(file.path()).unwrap();
    assert_eq!(catalog.len(), 7);

    let plan = generate_weekly_plan(&catalog, &scenario_prefs()).unwrap();
    assert_eq!(plan.meals().count(), 21);
    assert!(plan.meals().all(|m| m.main_name() != "Chicken Curry"));

    let idli = plan
        .meals()
        .find(|m| m.main_name() == "Idli")
        .expect("idli is planned for breakfast");
    assert_eq!(idli.slot, MealSlot::Breakfast);
}

#[test]
fn test_price_list_drives_costs() {
    let catalog = scenario_catalog();
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"item,price_per_kg\nrice,60\ndal,120\ntomato,40\nonion,30\noil,150\npoha,60\npeanut,150\n")
        .unwrap();
    let prices = load_price_list(file.path()).unwrap();

    let default_plan = generate_weekly_plan(&catalog, &scenario_prefs()).unwrap();
    let priced_plan = PlanBuilder::new(&catalog)
        .with_cost_source(&prices)
        .generate_weekly_plan(&scenario_prefs())
        .unwrap();

    assert_eq!(priced_plan.meals().count(), 21);
    assert_ne!(
        default_plan.days[0].lunch.combination.main.cost,
        priced_plan.days[0].lunch.combination.main.cost
    );
}
