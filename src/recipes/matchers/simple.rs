use crate::recipes::IngredientMatcher;

/// Counts an ingredient as available when either name contains the other,
/// so "lime" covers "lime juice" and "black pepper" covers "pepper".
pub struct SubstringMatcher;

impl IngredientMatcher for SubstringMatcher {
    fn is_match(&self, recipe_ingredient: &str, available: &str) -> bool {
        available.contains(recipe_ingredient) || recipe_ingredient.contains(available)
    }
}
