use crate::models::plan::{Accompaniment, AccompanimentKind};
use crate::models::{Course, Nutrition};
use crate::planner::keywords::{KeywordSet, KeywordTable};

// ─────────────────────────────────────────────────────────────────────────────
// Nutrition estimation
// ─────────────────────────────────────────────────────────────────────────────

/// Nutrition per 100 g of a reference ingredient.
pub static NUTRITION_PER_100G: KeywordTable<Nutrition> = KeywordTable::new(&[
    // Grains
    ("rice", Nutrition::new(130.0, 2.7, 28.0, 0.3)),
    ("wheat flour", Nutrition::new(340.0, 10.0, 72.0, 1.5)),
    ("atta", Nutrition::new(340.0, 10.0, 72.0, 1.5)),
    ("maida", Nutrition::new(364.0, 10.0, 76.0, 1.0)),
    ("semolina", Nutrition::new(360.0, 12.0, 72.0, 1.0)),
    ("rava", Nutrition::new(360.0, 12.0, 72.0, 1.0)),
    // Proteins
    ("chicken", Nutrition::new(165.0, 31.0, 0.0, 3.6)),
    ("fish", Nutrition::new(120.0, 20.0, 0.0, 5.0)),
    ("paneer", Nutrition::new(265.0, 18.0, 1.2, 20.0)),
    ("chhena", Nutrition::new(265.0, 18.0, 1.2, 20.0)),
    ("cottage cheese", Nutrition::new(265.0, 18.0, 1.2, 20.0)),
    ("egg", Nutrition::new(155.0, 13.0, 1.1, 11.0)),
    ("mutton", Nutrition::new(294.0, 25.0, 0.0, 21.0)),
    ("beef", Nutrition::new(250.0, 26.0, 0.0, 15.0)),
    ("pork", Nutrition::new(242.0, 27.0, 0.0, 14.0)),
    ("prawns", Nutrition::new(99.0, 24.0, 0.2, 0.3)),
    // Pulses
    ("dal", Nutrition::new(116.0, 9.0, 20.0, 0.4)),
    ("moong dal", Nutrition::new(347.0, 24.0, 63.0, 1.2)),
    ("arhar dal", Nutrition::new(343.0, 22.0, 62.0, 1.5)),
    ("urad dal", Nutrition::new(341.0, 25.0, 59.0, 1.6)),
    ("chana dal", Nutrition::new(360.0, 22.0, 60.0, 6.0)),
    ("chickpeas", Nutrition::new(164.0, 9.0, 27.0, 2.6)),
    ("kidney beans", Nutrition::new(127.0, 8.7, 23.0, 0.5)),
    // Vegetables
    ("potato", Nutrition::new(77.0, 2.0, 17.0, 0.1)),
    ("aloo", Nutrition::new(77.0, 2.0, 17.0, 0.1)),
    ("tomato", Nutrition::new(18.0, 0.9, 3.9, 0.2)),
    ("onion", Nutrition::new(40.0, 1.1, 9.0, 0.1)),
    ("spinach", Nutrition::new(23.0, 2.9, 3.6, 0.4)),
    ("palak", Nutrition::new(23.0, 2.9, 3.6, 0.4)),
    ("cauliflower", Nutrition::new(25.0, 1.9, 5.0, 0.3)),
    ("gobi", Nutrition::new(25.0, 1.9, 5.0, 0.3)),
    ("carrot", Nutrition::new(41.0, 0.9, 10.0, 0.2)),
    ("beans", Nutrition::new(31.0, 1.8, 7.0, 0.1)),
    ("peas", Nutrition::new(81.0, 5.0, 14.0, 0.4)),
    ("bottle gourd", Nutrition::new(14.0, 0.6, 3.4, 0.0)),
    ("brinjal", Nutrition::new(25.0, 1.0, 6.0, 0.2)),
    ("mushroom", Nutrition::new(22.0, 3.1, 3.3, 0.3)),
    // Dairy
    ("milk", Nutrition::new(42.0, 3.4, 5.0, 1.0)),
    ("curd", Nutrition::new(60.0, 3.5, 4.7, 3.3)),
    ("yogurt", Nutrition::new(59.0, 10.0, 3.6, 0.4)),
    ("cream", Nutrition::new(195.0, 2.2, 4.3, 19.0)),
    ("butter", Nutrition::new(717.0, 0.9, 0.1, 81.0)),
    ("ghee", Nutrition::new(900.0, 0.0, 0.0, 100.0)),
    // Oils
    ("oil", Nutrition::new(884.0, 0.0, 0.0, 100.0)),
    ("coconut oil", Nutrition::new(862.0, 0.0, 0.0, 100.0)),
    // Sweeteners
    ("sugar", Nutrition::new(387.0, 0.0, 100.0, 0.0)),
    ("jaggery", Nutrition::new(383.0, 0.4, 98.0, 0.1)),
    ("gur", Nutrition::new(383.0, 0.4, 98.0, 0.1)),
    // Nuts
    ("cashew", Nutrition::new(553.0, 18.0, 30.0, 44.0)),
    ("almond", Nutrition::new(579.0, 21.0, 22.0, 50.0)),
    ("peanut", Nutrition::new(567.0, 26.0, 16.0, 49.0)),
]);

/// Fats used in small amounts; these exact keys count at reduced weight.
pub const COOKING_FATS: [&str; 3] = ["oil", "ghee", "butter"];

/// Weight applied to a matched cooking fat.
pub const COOKING_FAT_WEIGHT: f64 = 0.3;

/// Grams in one reference-table unit.
pub const REFERENCE_GRAMS: f64 = 100.0;

/// Serving size in grams for a course.
pub fn portion_grams(course: Course) -> f64 {
    match course {
        Course::Snack => 150.0,
        Course::MainCourse => 350.0,
        Course::Starter => 150.0,
        Course::Dessert => 100.0,
    }
}

/// Nutrition assumed when no ingredient is recognised.
pub fn default_nutrition(course: Course) -> Nutrition {
    match course {
        Course::Snack => Nutrition::new(200.0, 5.0, 30.0, 6.0),
        Course::MainCourse => Nutrition::new(450.0, 15.0, 60.0, 12.0),
        Course::Dessert => Nutrition::new(250.0, 4.0, 45.0, 6.0),
        Course::Starter => Nutrition::new(180.0, 8.0, 20.0, 7.0),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Cost estimation (rupees per serving)
// ─────────────────────────────────────────────────────────────────────────────

/// Rupee contribution of a recognised ingredient.
pub static INGREDIENT_COSTS: KeywordTable<f64> = KeywordTable::new(&[
    // Proteins
    ("chicken", 15.0),
    ("fish", 18.0),
    ("paneer", 12.0),
    ("chhena", 10.0),
    ("cottage cheese", 12.0),
    ("mutton", 25.0),
    ("beef", 20.0),
    ("pork", 18.0),
    ("prawns", 30.0),
    ("egg", 6.0),
    // Grains
    ("rice", 2.0),
    ("wheat flour", 1.5),
    ("atta", 1.5),
    ("maida", 1.5),
    ("semolina", 2.0),
    ("rava", 2.0),
    // Pulses
    ("dal", 3.0),
    ("moong dal", 3.0),
    ("arhar dal", 3.0),
    ("urad dal", 3.5),
    ("chana dal", 3.0),
    ("chickpeas", 3.0),
    ("kidney beans", 3.0),
    // Vegetables
    ("potato", 1.0),
    ("aloo", 1.0),
    ("tomato", 1.5),
    ("onion", 1.0),
    ("spinach", 1.5),
    ("palak", 1.5),
    ("cauliflower", 2.0),
    ("gobi", 2.0),
    ("carrot", 1.5),
    ("beans", 2.0),
    ("peas", 2.5),
    // Dairy
    ("milk", 2.0),
    ("curd", 2.0),
    ("yogurt", 2.5),
    ("cream", 5.0),
    ("butter", 8.0),
    ("ghee", 10.0),
    // Premium
    ("cashew", 15.0),
    ("almond", 18.0),
    ("pistachio", 20.0),
    ("saffron", 50.0),
    ("khoa", 12.0),
    ("mawa", 12.0),
    // Sweeteners and others
    ("sugar", 1.5),
    ("jaggery", 2.0),
    ("gur", 2.0),
    ("oil", 2.0),
    ("garam masala", 3.0),
]);

/// Base cost when no ingredient is recognised.
pub const DEFAULT_BASE_COST: f64 = 30.0;

/// Labour cost per hour of prep plus cook time.
pub const LABOUR_COST_PER_HOUR: f64 = 5.0;

/// Sundries cost per comma-separated ingredient segment.
pub const COST_PER_INGREDIENT: f64 = 1.5;

pub const MIN_DISH_COST: f64 = 15.0;
pub const MAX_DISH_COST: f64 = 150.0;

// ─────────────────────────────────────────────────────────────────────────────
// Price-list costing (per kg)
// ─────────────────────────────────────────────────────────────────────────────

/// Price per kg when an item is missing from the price list.
pub const FALLBACK_PRICE_PER_KG: f64 = 100.0;

/// Built-in market prices, rupees per kg.
pub const DEFAULT_PRICES_PER_KG: &[(&str, f64)] = &[
    // Grains
    ("rice", 60.0),
    ("basmati rice", 120.0),
    ("wheat", 40.0),
    ("atta", 40.0),
    ("maida", 45.0),
    ("rava", 50.0),
    ("poha", 80.0),
    // Pulses
    ("toor dal", 110.0),
    ("arhar dal", 110.0),
    ("moong dal", 120.0),
    ("chana dal", 100.0),
    ("urad dal", 130.0),
    ("masoor dal", 100.0),
    ("chickpeas", 80.0),
    ("rajma", 150.0),
    // Vegetables
    ("tomato", 50.0),
    ("onion", 40.0),
    ("potato", 30.0),
    ("carrot", 45.0),
    ("cabbage", 35.0),
    ("cauliflower", 50.0),
    ("beans", 60.0),
    ("peas", 80.0),
    ("brinjal", 40.0),
    ("okra", 50.0),
    ("capsicum", 80.0),
    ("green chili", 100.0),
    ("ginger", 150.0),
    ("garlic", 120.0),
    ("spinach", 50.0),
    ("coriander", 50.0),
    ("mint", 60.0),
    ("curry leaves", 20.0),
    // Dairy
    ("milk", 60.0),
    ("curd", 50.0),
    ("yogurt", 50.0),
    ("paneer", 350.0),
    ("butter", 450.0),
    ("ghee", 500.0),
    ("cheese", 400.0),
    ("cream", 300.0),
    // Oils
    ("oil", 150.0),
    ("coconut oil", 200.0),
    // Spices
    ("turmeric", 200.0),
    ("cumin", 300.0),
    ("chili powder", 180.0),
    ("garam masala", 100.0),
    // Other
    ("salt", 20.0),
    ("sugar", 45.0),
    ("jaggery", 80.0),
    ("tamarind", 150.0),
    ("coconut", 40.0),
    ("besan", 80.0),
    ("cashew", 800.0),
];

/// Kilograms of an ingredient used per serving, by the first matching group.
pub static SERVING_QUANTITIES_KG: &[(&[&str], f64)] = &[
    (&["rice", "wheat", "flour", "atta", "maida"], 0.15),
    (&["dal", "lentil", "rajma", "chickpea", "chana"], 0.10),
    (
        &["tomato", "potato", "onion", "carrot", "beans", "brinjal", "bhindi"],
        0.10,
    ),
    (&["paneer", "cheese"], 0.05),
    (&["milk", "curd", "yogurt"], 0.10),
    (&["oil", "ghee"], 0.01),
    (&["masala", "powder", "turmeric", "cumin", "chili"], 0.005),
    (&["spinach", "palak", "curry leaves", "coriander", "mint"], 0.05),
];

/// Serving quantity for an unrecognised ingredient.
pub const DEFAULT_SERVING_KG: f64 = 0.05;

// ─────────────────────────────────────────────────────────────────────────────
// Filtering
// ─────────────────────────────────────────────────────────────────────────────

pub static VEGAN_EXCLUDED: KeywordSet = KeywordSet::new(&[
    "milk", "curd", "yogurt", "ghee", "butter", "paneer", "egg", "cream", "cheese",
]);

pub static JAIN_EXCLUDED: KeywordSet = KeywordSet::new(&["onion", "garlic", "potato", "ginger"]);

pub static GLUTEN_EXCLUDED: KeywordSet =
    KeywordSet::new(&["wheat", "maida", "atta", "flour", "naan", "roti"]);

/// Snacks healthy mode keeps for breakfast.
pub static HEALTHY_BREAKFASTS: KeywordSet = KeywordSet::new(&[
    "Poha",
    "Upma",
    "Idli",
    "Dosa",
    "Uttapam",
    "Pesarattu",
    "Dhokla",
    "Thepla",
    "Paratha",
    "Aloo tikki",
    "Vada",
    "Handvo",
    "Muthiya",
    "Idiappam",
    "Puttu",
    "Thalipeeth",
    "Sabudana Khichadi",
    "Sevai",
    "Paniyaram",
    "Kachori",
    "Litti chokha",
    "Misi roti",
    "Sattu ki roti",
    "Attu",
    "Puri Bhaji",
    "Fara",
]);

/// Desserts healthy mode keeps.
pub static HEALTHY_DESSERTS: KeywordSet = KeywordSet::new(&[
    "Kheer",
    "Payasam",
    "Phirni",
    "Misti doi",
    "Basundi",
    "Shrikhand",
    "Rabri",
]);

/// A region subset smaller than this falls back to the whole catalog.
pub const MIN_REGIONAL_DISHES: usize = 15;

/// Dishes up to this multiple of the cooking-time limit stay eligible.
pub const TIME_LIMIT_BUFFER: f64 = 1.5;

/// Breakfast pool size below which quick main courses are added.
pub const MIN_BREAKFAST_POOL: usize = 7;

/// Longest main course that can stand in as breakfast.
pub const QUICK_BREAKFAST_MINUTES: u32 = 30;

/// Main pool size below which starters are added.
pub const MIN_MAIN_POOL: usize = 14;

// ─────────────────────────────────────────────────────────────────────────────
// Scoring
// ─────────────────────────────────────────────────────────────────────────────

pub const COST_WEIGHT: f64 = 0.30;
pub const TIME_WEIGHT: f64 = 0.20;
pub const CALORIE_WEIGHT: f64 = 0.25;
pub const FLAVOR_WEIGHT: f64 = 0.10;

pub const FLAVOR_MATCH_SCORE: f64 = 100.0;
pub const FLAVOR_MISS_SCORE: f64 = 50.0;

/// Time assumed for a dish with no recorded time.
pub const FALLBACK_DISH_MINUTES: u32 = 30;

pub const HIGH_PROTEIN_GRAMS: f64 = 15.0;
pub const MEDIUM_PROTEIN_GRAMS: f64 = 10.0;
pub const HIGH_PROTEIN_BONUS: f64 = 20.0;
pub const MEDIUM_PROTEIN_BONUS: f64 = 10.0;

pub const REUSE_BONUS_PER_MATCH: f64 = 5.0;
pub const REUSE_BONUS_CAP: f64 = 20.0;

/// Rationale thresholds, as a fraction of the user's limits.
pub const BUDGET_FRIENDLY_RATIO: f64 = 0.7;
pub const QUICK_PREP_RATIO: f64 = 0.7;

/// At most this many reasons are given for a selection.
pub const MAX_REASONS: usize = 3;

// ─────────────────────────────────────────────────────────────────────────────
// Selection
// ─────────────────────────────────────────────────────────────────────────────

/// Number of recent main dishes that are penalised.
pub const RECENT_WINDOW: usize = 6;

/// Score penalty per unit of recency weight.
pub const RECENCY_PENALTY_PER_STEP: f64 = 0.15;

// ─────────────────────────────────────────────────────────────────────────────
// Meal combinations
// ─────────────────────────────────────────────────────────────────────────────

pub static ACCOMPANIMENTS: [Accompaniment; 10] = [
    side(AccompanimentKind::Rice, "Rice", 10.0, 20, Nutrition::new(200.0, 4.0, 45.0, 0.5), "1 serving"),
    side(AccompanimentKind::Roti, "Roti", 3.0, 15, Nutrition::new(80.0, 3.0, 15.0, 1.0), "2 pieces"),
    side(AccompanimentKind::Naan, "Naan", 15.0, 20, Nutrition::new(150.0, 4.0, 25.0, 3.0), "1 piece"),
    side(AccompanimentKind::Paratha, "Paratha", 12.0, 20, Nutrition::new(120.0, 3.5, 20.0, 4.0), "2 pieces"),
    side(AccompanimentKind::Sambar, "Sambar", 15.0, 30, Nutrition::new(80.0, 4.0, 12.0, 2.0), "1 bowl"),
    side(AccompanimentKind::Chutney, "Coconut Chutney", 5.0, 10, Nutrition::new(50.0, 1.0, 6.0, 2.0), "1 small bowl"),
    side(AccompanimentKind::Papad, "Papad", 2.0, 2, Nutrition::new(30.0, 1.0, 5.0, 0.5), "2 pieces"),
    side(AccompanimentKind::Pickle, "Pickle", 3.0, 0, Nutrition::new(15.0, 0.3, 1.0, 1.0), "1 tbsp"),
    side(AccompanimentKind::Raita, "Raita", 10.0, 10, Nutrition::new(60.0, 3.0, 8.0, 2.0), "1 bowl"),
    side(AccompanimentKind::Salad, "Salad", 8.0, 5, Nutrition::new(30.0, 1.0, 6.0, 0.2), "1 bowl"),
];

const fn side(
    kind: AccompanimentKind,
    name: &'static str,
    cost: f64,
    time_minutes: u32,
    nutrition: Nutrition,
    quantity: &'static str,
) -> Accompaniment {
    Accompaniment {
        kind,
        name,
        cost,
        time_minutes,
        nutrition,
        quantity,
    }
}

/// Look up a side by kind.
pub fn accompaniment(kind: AccompanimentKind) -> &'static Accompaniment {
    match kind {
        AccompanimentKind::Rice => &ACCOMPANIMENTS[0],
        AccompanimentKind::Roti => &ACCOMPANIMENTS[1],
        AccompanimentKind::Naan => &ACCOMPANIMENTS[2],
        AccompanimentKind::Paratha => &ACCOMPANIMENTS[3],
        AccompanimentKind::Sambar => &ACCOMPANIMENTS[4],
        AccompanimentKind::Chutney => &ACCOMPANIMENTS[5],
        AccompanimentKind::Papad => &ACCOMPANIMENTS[6],
        AccompanimentKind::Pickle => &ACCOMPANIMENTS[7],
        AccompanimentKind::Raita => &ACCOMPANIMENTS[8],
        AccompanimentKind::Salad => &ACCOMPANIMENTS[9],
    }
}

pub static GRAVY_DISHES: KeywordSet = KeywordSet::new(&[
    "Sambar",
    "Rasam",
    "Kadhi",
    "Dal",
    "Rajma",
    "Chole",
    "Palak Paneer",
    "Paneer Butter Masala",
    "Butter Chicken",
    "Chicken Curry",
    "Fish Curry",
    "Kuzhambu",
    "Kootu",
    "Dal Makhani",
    "Dal Tadka",
    "Chana Masala",
    "Aloo Matar",
    "Shahi Paneer",
    "Malai Kofta",
    "Mushroom Matar",
    "Kofta",
    "Dalithoy",
    "Paruppu",
    "Mor Kuzhambu",
    "Vatha Kuzhambu",
]);

pub static RICE_DISHES: KeywordSet = KeywordSet::new(&[
    "Biryani",
    "Pulao",
    "Pongal",
    "Lemon Rice",
    "Curd Rice",
    "Tamarind Rice",
    "Coconut Rice",
    "Bisibelebath",
    "Khichdi",
    "Thayir sadam",
    "Puli sadam",
    "Kothamali sadam",
    "Currivepillai sadam",
    "Paruppu sadam",
]);

pub static DRY_SABZI_DISHES: KeywordSet = KeywordSet::new(&[
    "Aloo Gobi",
    "Bhindi Masala",
    "Baingan Bharta",
    "Poriyal",
    "Thoran",
    "Palya",
    "Zunka",
    "Usal",
    "Keerai masiyal",
]);

pub static BREAKFAST_WITH_GRAVY: KeywordSet = KeywordSet::new(&[
    "Idli",
    "Dosa",
    "Uttapam",
    "Medu Vada",
    "Vada",
    "Pesarattu",
]);

pub static COMPLETE_MEALS: KeywordSet = KeywordSet::new(&[
    "Chole Bhature",
    "Puri Bhaji",
    "Dosa Sambar",
    "Idli Sambar",
    "Thali",
    "Meals",
]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accompaniment_lookup_matches_kind() {
        for side in &ACCOMPANIMENTS {
            assert_eq!(accompaniment(side.kind).name, side.name);
        }
    }

    #[test]
    fn test_score_weights_sum_below_one() {
        let sum = COST_WEIGHT + TIME_WEIGHT + CALORIE_WEIGHT + FLAVOR_WEIGHT;
        assert!((sum - 0.85).abs() < 1e-9);
    }

    #[test]
    fn test_cooking_fats_are_table_keys() {
        for fat in COOKING_FATS {
            assert!(NUTRITION_PER_100G.matches(fat).iter().any(|e| e.0 == fat));
        }
    }
}
