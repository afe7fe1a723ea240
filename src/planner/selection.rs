use std::collections::{BTreeMap, BTreeSet, VecDeque};

use tracing::debug;

use crate::models::{Dish, EnrichedDish, UserPreferences};
use crate::planner::constants::{RECENCY_PENALTY_PER_STEP, RECENT_WINDOW};
use crate::planner::scoring::score_dish;

/// Multiset of ingredient tokens from every dish chosen so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientPool {
    counts: BTreeMap<String, usize>,
}

impl IngredientPool {
    pub fn add(&mut self, token: String) {
        *self.counts.entry(token).or_insert(0) += 1;
    }

    pub fn extend(&mut self, tokens: impl IntoIterator<Item = String>) {
        for token in tokens {
            self.add(token);
        }
    }

    /// Each distinct ingredient with how many times it was added,
    /// alphabetically.
    pub fn entries(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(token, n)| (token.as_str(), *n))
    }
}

/// Everything the weekly walk remembers between slots.
///
/// Owned by a single planning call; a fresh value starts every plan.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    used: BTreeSet<String>,
    /// Oldest first.
    recent: VecDeque<String>,
    pool: IngredientPool,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Note a chosen main dish.
    pub fn record(&mut self, dish: &Dish) {
        self.used.insert(dish.name.clone());
        self.recent.push_back(dish.name.clone());
        while self.recent.len() > RECENT_WINDOW {
            self.recent.pop_front();
        }
        self.pool.extend(dish.ingredient_tokens());
    }

    pub fn is_used(&self, name: &str) -> bool {
        self.used.contains(name)
    }

    pub fn pool(&self) -> &IngredientPool {
        &self.pool
    }

    /// 1 for the oldest entry in the window, up to the window length for the
    /// latest pick. `None` when the dish was not chosen recently.
    pub fn recency_weight(&self, name: &str) -> Option<usize> {
        self.recent.iter().rposition(|n| n == name).map(|i| i + 1)
    }

    /// Factor applied to a recently chosen dish's score.
    pub fn recency_multiplier(&self, name: &str) -> f64 {
        match self.recency_weight(name) {
            Some(weight) => 1.0 - RECENCY_PENALTY_PER_STEP * weight as f64,
            None => 1.0,
        }
    }
}

/// Apply a recency multiplier so that it always lowers the score.
///
/// Negative scores are divided instead of multiplied.
pub fn apply_recency_penalty(score: f64, multiplier: f64) -> f64 {
    if multiplier >= 1.0 || multiplier <= 0.0 {
        return score;
    }
    if score >= 0.0 {
        score * multiplier
    } else {
        score / multiplier
    }
}

/// The winning candidate for one slot.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection<'a> {
    pub dish: EnrichedDish<'a>,
    /// Score after the recency penalty.
    pub score: f64,
    /// True when every dish in the pool had already been used.
    pub reused: bool,
}

#[derive(Debug)]
struct Candidate<'a> {
    dish: EnrichedDish<'a>,
    score: f64,
}

/// Pick the best dish for a slot.
///
/// Dishes already used this week are skipped unless nothing else is left.
/// Ties go to the earliest dish in pool order. Returns `None` only for an
/// empty pool.
pub fn select_best<'a>(
    pool: &[EnrichedDish<'a>],
    prefs: &UserPreferences,
    state: &SelectionState,
) -> Option<Selection<'a>> {
    let unused: Vec<&EnrichedDish<'a>> =
        pool.iter().filter(|d| !state.is_used(d.name())).collect();

    let (eligible, reused) = if unused.is_empty() {
        (pool.iter().collect::<Vec<_>>(), true)
    } else {
        (unused, false)
    };

    let mut best: Option<Candidate<'a>> = None;
    for dish in eligible {
        let base = score_dish(dish, prefs, state.pool()).total();
        let score = apply_recency_penalty(base, state.recency_multiplier(dish.name()));

        let better = match &best {
            Some(current) => score > current.score,
            None => true,
        };
        if better {
            best = Some(Candidate { dish: *dish, score });
        }
    }

    best.map(|c| {
        debug!(dish = c.dish.name(), score = c.score, reused, "selected dish");
        Selection {
            dish: c.dish,
            score: c.score,
            reused,
        }
    })
}
