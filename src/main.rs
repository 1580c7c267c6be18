use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use crate::config::{Config, MatcherKind};
use crate::recipes::{Builtin, Catalog, CatalogError, FuzzyMatcher, JsonFile, Matcher, Provider, Remote};
use crate::report::OutputFormat;
use crate::shell::Shell;

mod config;
mod recipes;
mod report;
mod shell;

/// Recommends recipes from the ingredients you have at hand.
///
/// Without query flags an interactive session is started.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Additional JSON recipe catalog, may be repeated.
    #[arg(long = "catalog", value_name = "PATH")]
    catalogs: Vec<PathBuf>,

    /// URL serving a JSON recipe catalog, may be repeated.
    #[arg(long = "url", value_name = "URL")]
    urls: Vec<String>,

    /// Leave out the built-in recipes.
    #[arg(long)]
    no_builtin: bool,

    /// Number of recommendations to show.
    #[arg(long)]
    top: Option<usize>,

    /// Ingredient matching strategy.
    #[arg(long, value_enum)]
    matcher: Option<MatcherKind>,

    /// Print results as JSON.
    #[arg(long)]
    json: bool,

    /// Available ingredients, comma separated.
    #[arg(short, long)]
    ingredients: Option<String>,

    /// Dietary tags, comma separated. A recipe needs at least one of them.
    #[arg(short, long)]
    dietary: Option<String>,

    /// Maximum cooking time in minutes.
    #[arg(short = 't', long)]
    max_time: Option<String>,

    /// Easy, Medium or Hard.
    #[arg(long)]
    difficulty: Option<String>,

    /// Minimum ingredient match percentage.
    #[arg(short, long)]
    min_match: Option<String>,
}

impl Args {
    fn has_query(&self) -> bool {
        self.ingredients.is_some()
            || self.dietary.is_some()
            || self.max_time.is_some()
            || self.difficulty.is_some()
            || self.min_match.is_some()
    }

    fn apply(&self, config: &mut Config) {
        config.catalogs.extend(self.catalogs.iter().cloned());
        config.remote_catalogs.extend(self.urls.iter().cloned());

        if self.no_builtin {
            config.builtin = false;
        }

        if let Some(top) = self.top {
            config.top_n = top;
        }

        if let Some(matcher) = self.matcher {
            config.matcher = matcher;
        }
    }
}

fn providers(config: &Config) -> Vec<Arc<dyn Provider>> {
    let mut providers: Vec<Arc<dyn Provider>> = Vec::new();

    if config.builtin {
        providers.push(Arc::new(Builtin));
    }

    for path in &config.catalogs {
        providers.push(Arc::new(JsonFile::new(path)));
    }

    for url in &config.remote_catalogs {
        providers.push(Arc::new(Remote::new(url)));
    }

    providers
}

fn load(config: &Config) -> Result<Catalog, CatalogError> {
    if config.builtin && config.catalogs.is_empty() && config.remote_catalogs.is_empty() {
        return Ok(Catalog::builtin());
    }

    recipes::load_catalog(&providers(config))
}

fn build_matcher(catalog: Catalog, config: &Config) -> Matcher {
    match config.matcher {
        MatcherKind::Substring => Matcher::new(catalog),
        MatcherKind::Fuzzy => Matcher::with_ingredient_matcher(
            catalog,
            Box::new(FuzzyMatcher::skim(config.fuzzy_min_score)),
        ),
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::default(),
    };

    args.apply(&mut config);
    config.validate()?;

    let catalog = load(&config).context("failed to load recipe catalog")?;

    info!("using {:?} ingredient matching", config.matcher);
    let matcher = build_matcher(catalog, &config);

    let format = if args.json { OutputFormat::Json } else { OutputFormat::Text };

    // prompts share stdout in text mode and move to stderr when stdout carries JSON
    let prompts: Box<dyn Write> = match format {
        OutputFormat::Text => Box::new(io::stdout()),
        OutputFormat::Json => Box::new(io::stderr()),
    };

    let mut shell = Shell::new(io::stdin().lock(), io::stdout(), prompts, config.min_match);

    if !args.has_query() {
        return shell.run(&matcher, config.top_n, format);
    }

    let constraints = shell::constraints_from_answers(
        args.ingredients.as_deref().unwrap_or_default(),
        args.dietary.as_deref().unwrap_or_default(),
        args.max_time.as_deref().unwrap_or_default(),
        args.difficulty.as_deref().unwrap_or_default(),
        args.min_match.as_deref().unwrap_or_default(),
        config.min_match,
    )?;

    let results = matcher.recommend(&constraints, config.top_n);
    shell.show(&results, &constraints, matcher.catalog().len(), format)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(argv: &[&str]) -> Args {
        Args::parse_from(std::iter::once("pantry").chain(argv.iter().copied()))
    }

    #[test]
    fn command_line_catalogs_complete_a_config_without_builtin() {
        let mut config = Config::from_toml_str("builtin = false").unwrap();

        args(&["--catalog", "extra.json", "--url", "https://example.com/r.json"]).apply(&mut config);

        assert!(config.validate().is_ok());
        assert_eq!(config.catalogs, vec![PathBuf::from("extra.json")]);
        assert_eq!(providers(&config).len(), 2);
    }

    #[test]
    fn flags_override_config() {
        let mut config = Config::default();

        args(&["--no-builtin", "--top", "2", "--matcher", "fuzzy"]).apply(&mut config);

        assert!(!config.builtin);
        assert_eq!(config.top_n, 2);
        assert_eq!(config.matcher, MatcherKind::Fuzzy);
        assert!(config.validate().is_err());
    }

    #[test]
    fn query_flags_select_one_shot_mode() {
        assert!(!args(&["--json"]).has_query());
        assert!(args(&["-i", "rice"]).has_query());
        assert!(args(&["--difficulty", "hard"]).has_query());
    }

    #[test]
    fn default_config_uses_builtin_catalog() {
        let catalog = load(&Config::default()).unwrap();

        assert_eq!(catalog.len(), 10);
        assert_eq!(providers(&Config::default()).len(), 1);
    }
}
