//! Per-dish nutrition and cost estimates derived from ingredient text.

use std::collections::HashMap;

use crate::models::{Course, Dish, Nutrition, round_to};
use crate::planner::constants::*;

/// Estimate nutrition for one serving of a dish.
///
/// Every reference ingredient whose name occurs in the text contributes its
/// per-100 g values (cooking fats at reduced weight). The sum is then scaled
/// to the course portion, treating each match as 100 g of the dish.
pub fn estimate_nutrition(ingredients: &str, course: Course) -> Nutrition {
    let matches = NUTRITION_PER_100G.matches(ingredients);
    if matches.is_empty() {
        return default_nutrition(course);
    }

    let total = matches
        .iter()
        .fold(Nutrition::default(), |acc, (key, nutrition)| {
            acc + nutrition.scale(ingredient_weight(key))
        });

    let factor = portion_grams(course) / (matches.len() as f64 * REFERENCE_GRAMS);
    total.scale(factor).rounded()
}

fn ingredient_weight(key: &str) -> f64 {
    if COOKING_FATS.contains(&key) {
        COOKING_FAT_WEIGHT
    } else {
        1.0
    }
}

/// Estimate the rupee cost of one serving.
///
/// Recognised ingredients, labour time and ingredient count each add to the
/// cost; the result is clamped to a sane per-dish range.
pub fn estimate_cost(ingredients: &str, prep_minutes: u32, cook_minutes: u32) -> f64 {
    let matches = INGREDIENT_COSTS.matches(ingredients);
    let base = if matches.is_empty() {
        DEFAULT_BASE_COST
    } else {
        matches.iter().map(|(_, cost)| cost).sum()
    };

    let labour = (prep_minutes + cook_minutes) as f64 / 60.0 * LABOUR_COST_PER_HOUR;
    // Empty segments count too.
    let sundries = ingredients.split(',').count() as f64 * COST_PER_INGREDIENT;

    round_to(
        (base + labour + sundries).clamp(MIN_DISH_COST, MAX_DISH_COST),
        2,
    )
}

/// An alternative pricing backend for main dishes.
pub trait CostSource {
    /// Cost of a dish, in rupees, for the given number of servings.
    fn estimate_dish_cost(&self, ingredients: &str, servings: u32) -> f64;
}

/// Cost of a dish, using `source` when one is configured.
pub fn dish_cost(dish: &Dish, source: Option<&dyn CostSource>, servings: u32) -> f64 {
    match source {
        Some(source) => source.estimate_dish_cost(&dish.ingredients, servings),
        None => estimate_cost(
            &dish.ingredients,
            dish.prep_time_minutes,
            dish.cook_time_minutes,
        ),
    }
}

/// Prices dishes from a per-kg market price list.
#[derive(Debug, Clone)]
pub struct PriceListCostSource {
    prices: HashMap<String, f64>,
}

impl Default for PriceListCostSource {
    fn default() -> Self {
        Self::new(
            DEFAULT_PRICES_PER_KG
                .iter()
                .map(|(item, price)| (item.to_string(), *price)),
        )
    }
}

impl PriceListCostSource {
    /// Build from `(item, price per kg)` pairs. Later duplicates win.
    pub fn new(prices: impl IntoIterator<Item = (String, f64)>) -> Self {
        Self {
            prices: prices
                .into_iter()
                .map(|(item, price)| (item.trim().to_lowercase(), price))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Price per kg of an item, or the fallback price when unlisted.
    pub fn price_per_kg(&self, item: &str) -> f64 {
        self.prices
            .get(&item.trim().to_lowercase())
            .copied()
            .unwrap_or(FALLBACK_PRICE_PER_KG)
    }
}

/// Kilograms of an ingredient used in one serving.
pub fn serving_quantity_kg(ingredient: &str) -> f64 {
    let ingredient = ingredient.to_lowercase();
    SERVING_QUANTITIES_KG
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| ingredient.contains(k)))
        .map(|(_, kg)| *kg)
        .unwrap_or(DEFAULT_SERVING_KG)
}

impl CostSource for PriceListCostSource {
    fn estimate_dish_cost(&self, ingredients: &str, servings: u32) -> f64 {
        let per_serving: f64 = ingredients
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(|item| self.price_per_kg(item) * serving_quantity_kg(item))
            .sum();
        round_to(per_serving * servings as f64, 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAL_RICE: &str = "rice, dal, tomato, onion, oil";

    #[test]
    fn test_nutrition_for_main_course() {
        let n = estimate_nutrition(DAL_RICE, Course::MainCourse);
        assert_eq!(n.calories, 398.0);
        assert!((n.protein - 9.6).abs() < 1e-9);
        assert!((n.carbs - 42.6).abs() < 1e-9);
        assert!((n.fat - 21.7).abs() < 1e-9);
    }

    #[test]
    fn test_nutrition_defaults_when_nothing_matches() {
        let n = estimate_nutrition("sago, salt", Course::Dessert);
        assert_eq!(n, default_nutrition(Course::Dessert));
    }

    #[test]
    fn test_nutrition_scales_with_portion() {
        let snack = estimate_nutrition("rice", Course::Snack);
        let main = estimate_nutrition("rice", Course::MainCourse);
        assert_eq!(snack.calories, 195.0);
        assert_eq!(main.calories, 455.0);
    }

    #[test]
    fn test_cost_formula() {
        assert_eq!(estimate_cost(DAL_RICE, 10, 20), 19.5);
    }

    #[test]
    fn test_cost_is_clamped() {
        // Unrecognised: 30 base + 1.5 sundries
        assert_eq!(estimate_cost("sago", 0, 0), 31.5);
        let lavish = "saffron, prawns, mutton, pistachio, almond, cashew, ghee";
        assert_eq!(estimate_cost(lavish, 600, 600), MAX_DISH_COST);
        assert_eq!(estimate_cost("rice", 0, 0), MIN_DISH_COST);
    }

    #[test]
    fn test_price_list_lookup_is_exact() {
        let source = PriceListCostSource::new(vec![("Rice".to_string(), 60.0)]);
        assert_eq!(source.price_per_kg(" rice "), 60.0);
        assert_eq!(source.price_per_kg("basmati rice"), FALLBACK_PRICE_PER_KG);
    }

    #[test]
    fn test_price_list_cost() {
        let source = PriceListCostSource::new(vec![
            ("rice".to_string(), 60.0),
            ("oil".to_string(), 150.0),
        ]);
        // 60 * 0.15 + 150 * 0.01 = 10.5 per serving
        assert_eq!(source.estimate_dish_cost("rice, oil", 2), 21.0);
        // unlisted: 100 * 0.05
        assert_eq!(source.estimate_dish_cost("sago", 1), 5.0);
    }

    #[test]
    fn test_serving_quantities() {
        assert_eq!(serving_quantity_kg("Basmati Rice"), 0.15);
        assert_eq!(serving_quantity_kg("turmeric"), 0.005);
        assert_eq!(serving_quantity_kg("paneer"), 0.05);
        assert_eq!(serving_quantity_kg("sago"), DEFAULT_SERVING_KG);
    }
}
