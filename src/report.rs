use std::fmt;

use itertools::Itertools;

use crate::recipes::{Candidate, Constraints};

const WIDTH: usize = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

pub struct Header;

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "{}", "=".repeat(WIDTH))?;
        writeln!(f, "{:^WIDTH$}", "PANTRY RECIPE RECOMMENDER")?;
        writeln!(f, "{:^WIDTH$}", "Filter, score and rank recipes by what you have")?;
        writeln!(f, "{}", "=".repeat(WIDTH))
    }
}

/// Human readable listing of ranked candidates.
pub struct Results<'a>(pub &'a [Candidate<'a>]);

impl fmt::Display for Results<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(WIDTH);

        if self.0.is_empty() {
            writeln!(f, "\n{rule}")?;
            writeln!(f, "NO RECIPES FOUND")?;
            writeln!(f)?;
            writeln!(f, "Try: lower the threshold, add ingredients, or broaden dietary preferences")?;
            return writeln!(f, "{rule}");
        }

        writeln!(f, "\n{rule}")?;
        writeln!(f, "RECOMMENDED RECIPES ({} found)", self.0.len())?;
        writeln!(f, "{rule}")?;

        for (idx, candidate) in self.0.iter().enumerate() {
            let recipe = candidate.recipe;

            writeln!(f)?;
            writeln!(f, "#{}. {}", idx + 1, recipe.name)?;
            writeln!(f, "{}", "─".repeat(WIDTH - 2))?;
            writeln!(f, "   Match: {:.1}% | {}min | {}", candidate.match_pct, recipe.time, recipe.difficulty)?;
            writeln!(f, "   {} | {}", recipe.cuisine, recipe.dietary.iter().join(", "))?;
            writeln!(f, "   {}kcal | {}g protein", recipe.calories, recipe.protein)?;

            if !candidate.matched.is_empty() {
                writeln!(f)?;
                writeln!(
                    f,
                    "   ✓ You have ({}): {}",
                    candidate.matched.len(),
                    candidate.matched.iter().join(", "),
                )?;
            }

            if candidate.is_perfect() {
                writeln!(f, "   Perfect match! All ingredients available.")?;
            } else {
                writeln!(
                    f,
                    "   ✗ Missing ({}): {}",
                    candidate.missing.len(),
                    candidate.missing.iter().join(", "),
                )?;
            }
        }

        writeln!(f)?;
        writeln!(f, "{rule}")
    }
}

/// Summary of a query: catalog size, hit count and the constraints in effect.
pub struct Stats<'a> {
    pub results: &'a [Candidate<'a>],
    pub constraints: &'a Constraints,
    pub catalog_size: usize,
}

impl fmt::Display for Stats<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "STATISTICS")?;
        writeln!(f, "{}", "─".repeat(WIDTH))?;
        writeln!(f, "Total recipes: {} | Matches: {}", self.catalog_size, self.results.len())?;
        writeln!(
            f,
            "Ingredients: {} | Threshold: {}%",
            self.constraints.ingredients.len(),
            self.constraints.min_match,
        )?;

        if !self.constraints.dietary.is_empty() {
            writeln!(f, "Dietary: {}", self.constraints.dietary.iter().join(", "))?;
        }

        if let Some(max_time) = self.constraints.max_time {
            writeln!(f, "Max time: {max_time} minutes")?;
        }

        if let Some(difficulty) = &self.constraints.difficulty {
            writeln!(f, "Difficulty: {difficulty}")?;
        }

        writeln!(f, "{}", "=".repeat(WIDTH))
    }
}

pub fn json(results: &[Candidate]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(results)
}

#[cfg(test)]
mod tests {
    use crate::recipes::{Catalog, Matcher};

    use super::*;

    #[test]
    fn empty_results_suggest_relaxing() {
        let text = Results(&[]).to_string();

        assert!(text.contains("NO RECIPES FOUND"));
        assert!(text.contains("lower the threshold"));
    }

    #[test]
    fn lists_matched_and_missing_ingredients() {
        let matcher = Matcher::new(Catalog::builtin());
        let constraints = Constraints::new()
            .with_ingredients(["tomato", "mozzarella", "basil"])
            .with_min_match(40.0);
        let results = matcher.recommend(&constraints, 1);

        let text = Results(&results).to_string();

        assert!(text.contains("RECOMMENDED RECIPES (1 found)"));
        assert!(text.contains("#1. Caprese Salad"));
        assert!(text.contains("Match: 42.9% | 10min | Easy"));
        assert!(text.contains("Italian | vegetarian, gluten-free"));
        assert!(text.contains("280kcal | 14g protein"));
        assert!(text.contains("You have (3): tomato, mozzarella, basil"));
        assert!(text.contains("Missing (4): olive oil, balsamic vinegar, salt, black pepper"));
    }

    #[test]
    fn perfect_match_is_announced() {
        let matcher = Matcher::new(Catalog::builtin());
        let constraints = Constraints::new()
            .with_ingredients(["chicken", "ginger", "garlic", "broccoli", "carrot", "bell pepper", "rice", "soy sauce"]);
        let results = matcher.recommend(&constraints, 1);

        let text = Results(&results).to_string();

        assert!(text.contains("Match: 100.0%"));
        assert!(text.contains("Perfect match!"));
        assert!(!text.contains("Missing"));
    }

    #[test]
    fn stats_show_only_constraints_in_effect() {
        let constraints = Constraints::new()
            .with_ingredients(["rice", "chicken"])
            .with_dietary(["vegan"]);

        let text = Stats { results: &[], constraints: &constraints, catalog_size: 10 }.to_string();

        assert!(text.contains("Total recipes: 10 | Matches: 0"));
        assert!(text.contains("Ingredients: 2 | Threshold: 50%"));
        assert!(text.contains("Dietary: vegan"));
        assert!(!text.contains("Max time"));
        assert!(!text.contains("Difficulty"));
    }

    #[test]
    fn json_embeds_recipe() {
        let matcher = Matcher::new(Catalog::builtin());
        let constraints = Constraints::new().with_dietary(["vegan"]);
        let results = matcher.recommend(&constraints, 1);

        let value: serde_json::Value = serde_json::from_str(&json(&results).unwrap()).unwrap();

        assert_eq!(value[0]["recipe"]["id"], 2);
        assert_eq!(value[0]["match_pct"], 100.0);
        assert_eq!(value[0]["matched"], serde_json::json!([]));
    }
}
