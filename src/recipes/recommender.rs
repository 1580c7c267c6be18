use std::cmp::Ordering;

use itertools::Itertools;
use log::{debug, trace};

use crate::recipes::{Candidate, Catalog, Constraints, IngredientMatcher, Recipe, SubstringMatcher};

pub const DEFAULT_TOP_N: usize = 5;

/// Ranks the recipes of a fixed catalog against a set of constraints.
///
/// A query is a single pass: recipes violating a hard constraint are dropped,
/// the rest are scored by ingredient coverage, cut at the threshold, sorted
/// and truncated.
pub struct Matcher {
    catalog: Catalog,
    ingredients: Box<dyn IngredientMatcher>,
}

impl Matcher {
    pub fn new(catalog: Catalog) -> Self {
        Self::with_ingredient_matcher(catalog, Box::new(SubstringMatcher))
    }

    pub fn with_ingredient_matcher(catalog: Catalog, ingredients: Box<dyn IngredientMatcher>) -> Self {
        Self { catalog, ingredients }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Returns at most `top_n` candidates, best first.
    pub fn recommend(&self, constraints: &Constraints, top_n: usize) -> Vec<Candidate<'_>> {
        let admitted = self.catalog
            .recipes()
            .iter()
            .filter(|recipe| match constraints.rejection(recipe) {
                Some(reason) => {
                    trace!("recipe {} eliminated by {:?} constraint", recipe.id, reason);
                    false
                }
                None => true,
            })
            .collect_vec();

        let candidates = admitted
            .iter()
            .map(|&recipe| self.score(recipe, constraints))
            .filter(|candidate| candidate.match_pct >= constraints.min_match)
            .sorted_by(rank)
            .collect_vec();

        debug!(
            "{} of {} recipes admitted, {} above {}% threshold, returning up to {}",
            admitted.len(),
            self.catalog.len(),
            candidates.len(),
            constraints.min_match,
            top_n,
        );

        candidates.into_iter().take(top_n).collect()
    }

    /// Scores a single recipe against the available ingredients, ignoring hard constraints.
    pub fn score<'a>(&self, recipe: &'a Recipe, constraints: &Constraints) -> Candidate<'a> {
        if constraints.ingredients.is_empty() {
            return Candidate {
                recipe,
                match_pct: 100.0,
                matched: Vec::new(),
                missing: recipe.ingredients.clone(),
            };
        }

        let (matched, missing): (Vec<String>, Vec<String>) = recipe.ingredients
            .iter()
            .map(|ingredient| ingredient.to_lowercase())
            .partition(|ingredient| constraints.ingredients
                .iter()
                .any(|available| self.ingredients.is_match(ingredient, available)));

        let match_pct = round_one_decimal(100.0 * matched.len() as f64 / recipe.ingredients.len() as f64);

        Candidate { recipe, match_pct, matched, missing }
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn rank(lhs: &Candidate, rhs: &Candidate) -> Ordering {
    rhs.match_pct.total_cmp(&lhs.match_pct)
        .then_with(|| lhs.missing.len().cmp(&rhs.missing.len()))
        .then_with(|| lhs.recipe.time.cmp(&rhs.recipe.time))
}
