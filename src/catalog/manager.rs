use std::collections::{BTreeMap, HashMap};

use crate::models::{Course, DietClass, Dish};

/// Read-only dish catalog shared by every planning call.
///
/// Dishes keep their catalog order. Names are unique case-insensitively:
/// a later row with the same name replaces the earlier one in place.
#[derive(Debug, Clone, Default)]
pub struct DishCatalog {
    dishes: Vec<Dish>,
    /// Lowercase name to position in `dishes`.
    index: HashMap<String, usize>,
}

impl DishCatalog {
    /// Build a catalog from dishes in catalog order.
    pub fn new(dishes: Vec<Dish>) -> Self {
        let mut catalog = Self::default();
        for dish in dishes {
            match catalog.index.get(&dish.key()) {
                Some(&i) => catalog.dishes[i] = dish,
                None => {
                    catalog.index.insert(dish.key(), catalog.dishes.len());
                    catalog.dishes.push(dish);
                }
            }
        }
        catalog
    }

    /// Get a dish by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&Dish> {
        self.index
            .get(&name.trim().to_lowercase())
            .map(|&i| &self.dishes[i])
    }

    pub fn dishes(&self) -> &[Dish] {
        &self.dishes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Dish> {
        self.dishes.iter()
    }

    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }

    /// Distinct region tags, sorted.
    pub fn regions(&self) -> Vec<String> {
        let mut regions: Vec<String> = self.dishes.iter().map(|d| d.region.clone()).collect();
        regions.sort();
        regions.dedup();
        regions
    }

    pub fn count_by_course(&self) -> BTreeMap<Course, usize> {
        let mut counts = BTreeMap::new();
        for dish in &self.dishes {
            *counts.entry(dish.course).or_insert(0) += 1;
        }
        counts
    }

    pub fn count_by_diet(&self) -> BTreeMap<DietClass, usize> {
        let mut counts = BTreeMap::new();
        for dish in &self.dishes {
            *counts.entry(dish.diet).or_insert(0) += 1;
        }
        counts
    }
}

impl<'a> IntoIterator for &'a DishCatalog {
    type Item = &'a Dish;
    type IntoIter = std::slice::Iter<'a, Dish>;

    fn into_iter(self) -> Self::IntoIter {
        self.dishes.iter()
    }
}
