use std::collections::HashSet;
use std::sync::Arc;

use itertools::Itertools;
use log::{debug, info};
use thiserror::Error;

use crate::recipes::{Builtin, Provider, Recipe};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("recipe {id} has no ingredients")]
    EmptyIngredients { id: u32 },

    #[error("recipe id {id} appears more than once")]
    DuplicateId { id: u32 },

    #[error("failed to load recipes from {source_name}: {message}")]
    Provider { source_name: String, message: String },
}

/// An immutable, validated list of recipes. Catalog order is the final ranking tie-break.
#[derive(Debug, Clone)]
pub struct Catalog {
    recipes: Vec<Recipe>,
}

impl Catalog {
    pub fn new(recipes: Vec<Recipe>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(recipes.len());

        for recipe in &recipes {
            if recipe.ingredients.is_empty() {
                return Err(CatalogError::EmptyIngredients { id: recipe.id });
            }

            if !seen.insert(recipe.id) {
                return Err(CatalogError::DuplicateId { id: recipe.id });
            }
        }

        Ok(Self { recipes })
    }

    pub fn builtin() -> Self {
        Self { recipes: Builtin::recipes() }
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

/// Loads all providers in parallel and concatenates their recipes in provider order.
pub fn load_catalog(providers: &[Arc<dyn Provider>]) -> Result<Catalog, CatalogError> {
    use rayon::prelude::*;

    let loaded: Vec<_> = providers.par_iter()
        .map(|prov| {
            prov.load().map_err(|err| CatalogError::Provider {
                source_name: prov.title(),
                message: err.to_string(),
            })
        })
        .collect();

    for (prov, result) in providers.iter().zip(&loaded) {
        if let Ok(recipes) = result {
            debug!("loaded {} recipes from {}", recipes.len(), prov.title());
        }
    }

    let recipes: Vec<Recipe> = loaded.into_iter()
        .flatten_ok()
        .try_collect()?;

    let catalog = Catalog::new(recipes)?;
    info!("catalog ready with {} recipes from {} sources", catalog.len(), providers.len());

    Ok(catalog)
}
