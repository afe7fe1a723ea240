use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// Calories and macronutrients for one serving.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: f64,
    /// Grams.
    pub protein: f64,
    /// Grams.
    pub carbs: f64,
    /// Grams.
    pub fat: f64,
}

impl Nutrition {
    pub const fn new(calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fat,
        }
    }

    /// Scale every value by a multiplier.
    pub fn scale(&self, factor: f64) -> Self {
        Self {
            calories: self.calories * factor,
            protein: self.protein * factor,
            carbs: self.carbs * factor,
            fat: self.fat * factor,
        }
    }

    /// Whole calories, macros to one decimal place.
    pub fn rounded(&self) -> Self {
        Self {
            calories: round_to(self.calories, 0),
            protein: round_to(self.protein, 1),
            carbs: round_to(self.carbs, 1),
            fat: round_to(self.fat, 1),
        }
    }
}

impl Add for Nutrition {
    type Output = Nutrition;

    fn add(self, other: Nutrition) -> Nutrition {
        Nutrition {
            calories: self.calories + other.calories,
            protein: self.protein + other.protein,
            carbs: self.carbs + other.carbs,
            fat: self.fat + other.fat,
        }
    }
}

impl AddAssign for Nutrition {
    fn add_assign(&mut self, other: Nutrition) {
        *self = *self + other;
    }
}

/// Round a float to n decimal places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}
