use std::fmt;
use std::str::FromStr;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use catalog::*;
pub use matchers::*;
pub use providers::*;
pub use recommender::*;

mod catalog;
mod matchers;
mod providers;
mod recommender;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown difficulty {0:?}, expected one of Easy, Medium, Hard")]
pub struct UnknownDifficulty(pub String);

impl FromStr for Difficulty {
    type Err = UnknownDifficulty;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(UnknownDifficulty(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: u32,
    pub name: String,

    /// Ingredient names in the order the recipe lists them.
    pub ingredients: Vec<String>,

    /// Dietary tags such as "vegan" or "gluten-free".
    pub dietary: Vec<String>,

    /// Cooking time in minutes.
    pub time: u32,
    pub difficulty: Difficulty,
    pub cuisine: String,
    pub calories: u32,

    /// Protein in grams.
    pub protein: u32,
}

pub const DEFAULT_MIN_MATCH: f64 = 50.0;

/// The hard and soft constraints of a single query.
///
/// The `with_*` builders normalize their input, so a constraint record never holds
/// mixed-case or padded ingredient and dietary entries. Range checks are left to
/// the caller: a threshold above 100 or an unknown difficulty is accepted and
/// simply matches no recipe.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Constraints {
    pub ingredients: Vec<String>,
    pub dietary: Vec<String>,
    pub max_time: Option<u32>,
    pub difficulty: Option<String>,
    pub min_match: f64,
}

impl Default for Constraints {
    fn default() -> Self {
        Self {
            ingredients: Vec::new(),
            dietary: Vec::new(),
            max_time: None,
            difficulty: None,
            min_match: DEFAULT_MIN_MATCH,
        }
    }
}

/// The hard constraint that eliminated a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Dietary,
    Time,
    Difficulty,
}

impl Constraints {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ingredients<I, S>(mut self, ingredients: I) -> Self
        where I: IntoIterator<Item=S>,
              S: AsRef<str>,
    {
        self.ingredients = normalize(ingredients);
        self
    }

    pub fn with_dietary<I, S>(mut self, dietary: I) -> Self
        where I: IntoIterator<Item=S>,
              S: AsRef<str>,
    {
        self.dietary = normalize(dietary);
        self
    }

    pub fn with_max_time(mut self, max_time: Option<u32>) -> Self {
        self.max_time = max_time;
        self
    }

    pub fn with_difficulty(mut self, difficulty: Option<&str>) -> Self {
        self.difficulty = difficulty.map(str::to_string);
        self
    }

    pub fn with_min_match(mut self, min_match: f64) -> Self {
        self.min_match = min_match;
        self
    }

    /// Returns the first hard constraint the recipe violates, if any.
    pub fn rejection(&self, recipe: &Recipe) -> Option<Rejection> {
        if !self.dietary.is_empty() {
            let satisfied = self.dietary
                .iter()
                .any(|wanted| recipe.dietary.iter().any(|tag| tag.to_lowercase() == *wanted));

            if !satisfied {
                return Some(Rejection::Dietary);
            }
        }

        if let Some(max_time) = self.max_time {
            if recipe.time > max_time {
                return Some(Rejection::Time);
            }
        }

        if let Some(difficulty) = &self.difficulty {
            if difficulty != recipe.difficulty.as_str() {
                return Some(Rejection::Difficulty);
            }
        }

        None
    }
}

fn normalize<I, S>(values: I) -> Vec<String>
    where I: IntoIterator<Item=S>,
          S: AsRef<str>,
{
    values.into_iter()
        .map(|value| value.as_ref().trim().to_lowercase())
        .filter(|value| !value.is_empty())
        .unique()
        .collect()
}

/// A recipe that survived the hard constraints, together with its ingredient score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candidate<'a> {
    pub recipe: &'a Recipe,

    /// Share of the recipe's ingredients that are available, 0 to 100 with one decimal.
    pub match_pct: f64,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

impl Candidate<'_> {
    pub fn is_perfect(&self) -> bool {
        self.missing.is_empty()
    }
}

pub trait IngredientMatcher: Send + Sync {
    /// Decides whether a recipe ingredient is covered by one available ingredient.
    /// Both arguments are already lower case.
    fn is_match(&self, recipe_ingredient: &str, available: &str) -> bool;
}
