use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use crate::recipes::{Provider, Recipe};

/// Reads a JSON array of recipes from disk.
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Provider for JsonFile {
    fn title(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<Vec<Recipe>, Box<dyn Error + Send + Sync>> {
        let fp = File::open(&self.path)?;
        let recipes: Vec<Recipe> = serde_json::from_reader(BufReader::new(fp))?;
        Ok(recipes)
    }
}
