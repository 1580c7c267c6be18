use fuzzy_matcher::skim::SkimMatcherV2;

use crate::recipes::IngredientMatcher;

pub const DEFAULT_MIN_SCORE: i64 = 50;

/// Scores ingredient names with a fuzzy matcher and accepts the pair when the
/// score in either direction reaches `min_score`.
pub struct FuzzyMatcher<T> {
    inner: T,
    min_score: i64,
}

impl<T> FuzzyMatcher<T> {
    pub fn new(inner: T, min_score: i64) -> Self {
        Self { inner, min_score }
    }
}

impl FuzzyMatcher<SkimMatcherV2> {
    pub fn skim(min_score: i64) -> Self {
        Self::new(SkimMatcherV2::default().ignore_case(), min_score)
    }
}

impl<T> IngredientMatcher for FuzzyMatcher<T>
    where T: fuzzy_matcher::FuzzyMatcher + Send + Sync,
{
    fn is_match(&self, recipe_ingredient: &str, available: &str) -> bool {
        [
            self.inner.fuzzy_match(recipe_ingredient, available),
            self.inner.fuzzy_match(available, recipe_ingredient),
        ]
            .into_iter()
            .flatten()
            .any(|score| score >= self.min_score)
    }
}
