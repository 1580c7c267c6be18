use std::error::Error;

use crate::recipes::{Provider, Recipe};

/// Fetches a JSON array of recipes over HTTP.
pub struct Remote {
    url: String,
}

impl Remote {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl Provider for Remote {
    fn title(&self) -> String {
        self.url.clone()
    }

    fn load(&self) -> Result<Vec<Recipe>, Box<dyn Error + Send + Sync>> {
        let recipes: Vec<Recipe> = ureq::get(&self.url).call()?.into_json()?;
        Ok(recipes)
    }
}
