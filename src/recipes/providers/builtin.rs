use std::error::Error;

use crate::recipes::{Difficulty, Provider, Recipe};

struct Entry {
    id: u32,
    name: &'static str,
    ingredients: &'static [&'static str],
    dietary: &'static [&'static str],
    time: u32,
    difficulty: Difficulty,
    cuisine: &'static str,
    calories: u32,
    protein: u32,
}

const RECIPES: &[Entry] = &[
    Entry {
        id: 1,
        name: "Mediterranean Chickpea Salad",
        ingredients: &["chickpeas", "cucumber", "tomato", "olive oil", "lemon", "feta cheese", "red onion", "parsley"],
        dietary: &["vegetarian", "gluten-free"],
        time: 15,
        difficulty: Difficulty::Easy,
        cuisine: "Mediterranean",
        calories: 320,
        protein: 12,
    },
    Entry {
        id: 2,
        name: "Quinoa Buddha Bowl",
        ingredients: &["quinoa", "chickpeas", "avocado", "spinach", "carrot", "tahini", "lemon", "sesame seeds"],
        dietary: &["vegan", "gluten-free"],
        time: 30,
        difficulty: Difficulty::Easy,
        cuisine: "Modern Fusion",
        calories: 450,
        protein: 15,
    },
    Entry {
        id: 3,
        name: "Classic Chicken Stir Fry",
        ingredients: &["chicken", "soy sauce", "ginger", "garlic", "broccoli", "carrot", "bell pepper", "rice"],
        dietary: &["non-vegetarian", "dairy-free"],
        time: 25,
        difficulty: Difficulty::Medium,
        cuisine: "Asian",
        calories: 480,
        protein: 35,
    },
    Entry {
        id: 4,
        name: "Vegetable Pasta Primavera",
        ingredients: &["pasta", "tomato", "onion", "garlic", "olive oil", "basil", "bell pepper", "zucchini", "parmesan"],
        dietary: &["vegetarian"],
        time: 30,
        difficulty: Difficulty::Easy,
        cuisine: "Italian",
        calories: 380,
        protein: 11,
    },
    Entry {
        id: 5,
        name: "Spicy Lentil Curry",
        ingredients: &["lentils", "onion", "tomato", "cumin", "garlic", "coconut milk", "turmeric", "spinach", "ginger"],
        dietary: &["vegan", "gluten-free"],
        time: 40,
        difficulty: Difficulty::Medium,
        cuisine: "Indian",
        calories: 340,
        protein: 18,
    },
    Entry {
        id: 6,
        name: "Grilled Salmon with Vegetables",
        ingredients: &["salmon", "lemon", "olive oil", "asparagus", "garlic", "dill", "tomato", "black pepper"],
        dietary: &["non-vegetarian", "gluten-free"],
        time: 20,
        difficulty: Difficulty::Medium,
        cuisine: "Contemporary",
        calories: 420,
        protein: 40,
    },
    Entry {
        id: 7,
        name: "Black Bean Tacos",
        ingredients: &["black beans", "tortilla", "avocado", "lime", "cilantro", "onion", "tomato", "cumin", "lettuce"],
        dietary: &["vegan", "vegetarian"],
        time: 20,
        difficulty: Difficulty::Easy,
        cuisine: "Mexican",
        calories: 360,
        protein: 13,
    },
    Entry {
        id: 8,
        name: "Mushroom Risotto",
        ingredients: &["rice", "mushroom", "onion", "butter", "parmesan", "white wine", "vegetable broth", "thyme"],
        dietary: &["vegetarian"],
        time: 45,
        difficulty: Difficulty::Hard,
        cuisine: "Italian",
        calories: 440,
        protein: 12,
    },
    Entry {
        id: 9,
        name: "Thai Green Curry",
        ingredients: &["chicken", "coconut milk", "green curry paste", "bamboo shoots", "bell pepper", "basil", "fish sauce", "lime"],
        dietary: &["non-vegetarian", "gluten-free"],
        time: 35,
        difficulty: Difficulty::Hard,
        cuisine: "Thai",
        calories: 520,
        protein: 32,
    },
    Entry {
        id: 10,
        name: "Caprese Salad",
        ingredients: &["tomato", "mozzarella", "basil", "olive oil", "balsamic vinegar", "salt", "black pepper"],
        dietary: &["vegetarian", "gluten-free"],
        time: 10,
        difficulty: Difficulty::Easy,
        cuisine: "Italian",
        calories: 280,
        protein: 14,
    },
];

/// The catalog compiled into the binary.
pub struct Builtin;

impl Builtin {
    pub fn recipes() -> Vec<Recipe> {
        RECIPES.iter().map(Into::into).collect()
    }
}

impl Provider for Builtin {
    fn title(&self) -> String {
        "builtin".into()
    }

    fn load(&self) -> Result<Vec<Recipe>, Box<dyn Error + Send + Sync>> {
        Ok(Self::recipes())
    }
}

impl From<&Entry> for Recipe {
    fn from(entry: &Entry) -> Self {
        Recipe {
            id: entry.id,
            name: entry.name.into(),
            ingredients: entry.ingredients.iter().map(|s| s.to_string()).collect(),
            dietary: entry.dietary.iter().map(|s| s.to_string()).collect(),
            time: entry.time,
            difficulty: entry.difficulty,
            cuisine: entry.cuisine.into(),
            calories: entry.calories,
            protein: entry.protein,
        }
    }
}
