use std::io::{BufRead, Write};

use anyhow::Result;
use log::debug;
use thiserror::Error;

use crate::recipes::{Candidate, Constraints, Difficulty, Matcher, UnknownDifficulty};
use crate::report::{self, OutputFormat, Results, Stats};

#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("{0:?} is not a whole number of minutes")]
    InvalidTime(String),

    #[error("maximum time must be at least one minute")]
    NonPositiveTime,

    #[error(transparent)]
    Difficulty(#[from] UnknownDifficulty),

    #[error("{0:?} is not a number")]
    InvalidThreshold(String),

    #[error("threshold must be within 0 and 100, got {0}")]
    ThresholdOutOfRange(f64),
}

/// Splits a comma separated answer, dropping blank entries.
pub fn parse_list(input: &str) -> Vec<String> {
    input.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}

pub fn parse_max_time(input: &str) -> Result<Option<u32>, InputError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    match input.parse::<i64>() {
        Ok(minutes) if minutes <= 0 => Err(InputError::NonPositiveTime),
        Ok(minutes) => u32::try_from(minutes)
            .map(Some)
            .map_err(|_| InputError::InvalidTime(input.into())),
        Err(_) => Err(InputError::InvalidTime(input.into())),
    }
}

pub fn parse_difficulty(input: &str) -> Result<Option<Difficulty>, InputError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    Ok(Some(input.parse()?))
}

pub fn parse_threshold(input: &str, default: f64) -> Result<f64, InputError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(default);
    }

    let threshold: f64 = input
        .parse()
        .map_err(|_| InputError::InvalidThreshold(input.into()))?;

    if !(0.0..=100.0).contains(&threshold) {
        return Err(InputError::ThresholdOutOfRange(threshold));
    }

    Ok(threshold)
}

/// Builds a constraint record from raw answers, applying the same checks as the prompts.
pub fn constraints_from_answers(
    ingredients: &str,
    dietary: &str,
    max_time: &str,
    difficulty: &str,
    threshold: &str,
    default_threshold: f64,
) -> Result<Constraints, InputError> {
    let difficulty = parse_difficulty(difficulty)?;

    Ok(Constraints::new()
        .with_ingredients(parse_list(ingredients))
        .with_dietary(parse_list(dietary))
        .with_max_time(parse_max_time(max_time)?)
        .with_difficulty(difficulty.as_ref().map(Difficulty::as_str))
        .with_min_match(parse_threshold(threshold, default_threshold)?))
}

/// Line oriented question and answer session.
///
/// Results go to `output`. The banner, prompts and status lines go to `prompts`,
/// which keeps `output` machine readable in JSON mode.
pub struct Shell<R, W, P> {
    input: R,
    output: W,
    prompts: P,
    default_threshold: f64,
}

impl<R: BufRead, W: Write, P: Write> Shell<R, W, P> {
    pub fn new(input: R, output: W, prompts: P, default_threshold: f64) -> Self {
        Self { input, output, prompts, default_threshold }
    }

    /// Runs queries until the user declines another search or input ends.
    pub fn run(&mut self, matcher: &Matcher, top_n: usize, format: OutputFormat) -> Result<()> {
        write!(self.prompts, "{}", report::Header)?;

        loop {
            let Some(constraints) = self.read_constraints()? else {
                break;
            };

            debug!("query: {constraints:?}");
            writeln!(self.prompts, "\nSearching...")?;
            self.prompts.flush()?;

            let results = matcher.recommend(&constraints, top_n);
            self.show(&results, &constraints, matcher.catalog().len(), format)?;

            if !self.confirm("Search again? (y/n): ")? {
                break;
            }
        }

        writeln!(self.prompts, "\nThank you!")?;
        self.prompts.flush()?;
        Ok(())
    }

    pub fn show(
        &mut self,
        results: &[Candidate],
        constraints: &Constraints,
        catalog_size: usize,
        format: OutputFormat,
    ) -> Result<()> {
        match format {
            OutputFormat::Text => {
                write!(self.output, "{}", Results(results))?;
                write!(self.output, "{}", Stats { results, constraints, catalog_size })?;
            }
            OutputFormat::Json => writeln!(self.output, "{}", report::json(results)?)?,
        }

        self.output.flush()?;
        Ok(())
    }

    /// Asks for every constraint in turn. Returns `None` once input is exhausted.
    pub fn read_constraints(&mut self) -> Result<Option<Constraints>> {
        let Some(ingredients) = self.prompt(&[
            "\nINGREDIENTS: Enter available ingredients (comma-separated)",
            "   Example: tomato, onion, garlic, chicken, olive oil",
        ])? else {
            return Ok(None);
        };

        let Some(dietary) = self.prompt(&[
            "\nDIETARY: Options: vegetarian, vegan, non-vegetarian, gluten-free",
            "   (Leave empty for no restriction)",
        ])? else {
            return Ok(None);
        };

        let Some(max_time) = self.prompt_parsed(
            &["\nMAX TIME: Maximum cooking time in minutes (press Enter to skip)"],
            parse_max_time,
        )? else {
            return Ok(None);
        };

        let Some(difficulty) = self.prompt_parsed(
            &["\nDIFFICULTY: Easy, Medium, Hard (press Enter for any)"],
            parse_difficulty,
        )? else {
            return Ok(None);
        };

        let default = self.default_threshold;
        let threshold_prompt = format!(
            "\nTHRESHOLD: Minimum match percentage 0-100 [default: {default}]"
        );
        let Some(min_match) = self.prompt_parsed(
            &[threshold_prompt.as_str()],
            |input| parse_threshold(input, default),
        )? else {
            return Ok(None);
        };

        Ok(Some(Constraints::new()
            .with_ingredients(parse_list(&ingredients))
            .with_dietary(parse_list(&dietary))
            .with_max_time(max_time)
            .with_difficulty(difficulty.as_ref().map(Difficulty::as_str))
            .with_min_match(min_match)))
    }

    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        write!(self.prompts, "{question}")?;
        self.prompts.flush()?;

        Ok(matches!(self.read_line()?, Some(answer) if answer.trim().eq_ignore_ascii_case("y")))
    }

    fn prompt(&mut self, lines: &[&str]) -> Result<Option<String>> {
        for line in lines {
            writeln!(self.prompts, "{line}")?;
        }

        write!(self.prompts, "   > ")?;
        self.prompts.flush()?;

        self.read_line()
    }

    /// Re-asks until the answer parses.
    fn prompt_parsed<T>(
        &mut self,
        lines: &[&str],
        parse: impl Fn(&str) -> Result<T, InputError>,
    ) -> Result<Option<T>> {
        loop {
            let Some(answer) = self.prompt(lines)? else {
                return Ok(None);
            };

            match parse(&answer) {
                Ok(value) => return Ok(Some(value)),
                Err(err) => writeln!(self.prompts, "   Invalid input: {err}")?,
            }
        }
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use crate::recipes::Catalog;

    use super::*;

    struct Transcript {
        output: String,
        prompts: String,
    }

    fn session_as(input: &str, format: OutputFormat) -> Transcript {
        let matcher = Matcher::new(Catalog::builtin());
        let mut output = Vec::new();
        let mut prompts = Vec::new();

        Shell::new(Cursor::new(input), &mut output, &mut prompts, 50.0)
            .run(&matcher, 5, format)
            .unwrap();

        Transcript {
            output: String::from_utf8(output).unwrap(),
            prompts: String::from_utf8(prompts).unwrap(),
        }
    }

    fn session(input: &str) -> Transcript {
        session_as(input, OutputFormat::Text)
    }

    #[test]
    fn lists_are_split_and_trimmed() {
        assert_eq!(parse_list(" tomato, , Olive Oil ,"), vec!["tomato", "Olive Oil"]);
        assert!(parse_list("   ").is_empty());
    }

    #[test]
    fn max_time_must_be_positive() {
        assert_eq!(parse_max_time(""), Ok(None));
        assert_eq!(parse_max_time(" 30 "), Ok(Some(30)));
        assert_eq!(parse_max_time("0"), Err(InputError::NonPositiveTime));
        assert_eq!(parse_max_time("-5"), Err(InputError::NonPositiveTime));
        assert_eq!(parse_max_time("soon"), Err(InputError::InvalidTime("soon".into())));
    }

    #[test]
    fn difficulty_is_canonicalized() {
        assert_eq!(parse_difficulty(""), Ok(None));
        assert_eq!(parse_difficulty("medium"), Ok(Some(Difficulty::Medium)));
        assert!(parse_difficulty("impossible").is_err());
    }

    #[test]
    fn threshold_defaults_and_is_bounded() {
        assert_eq!(parse_threshold("", 50.0), Ok(50.0));
        assert_eq!(parse_threshold("75", 50.0), Ok(75.0));
        assert_eq!(parse_threshold("101", 50.0), Err(InputError::ThresholdOutOfRange(101.0)));
        assert_eq!(parse_threshold("-1", 50.0), Err(InputError::ThresholdOutOfRange(-1.0)));
        assert_eq!(parse_threshold("lots", 50.0), Err(InputError::InvalidThreshold("lots".into())));
    }

    #[test]
    fn answers_become_normalized_constraints() {
        let constraints = constraints_from_answers("Chicken, RICE", "Vegan", "45", "hard", "", 60.0).unwrap();

        assert_eq!(constraints.ingredients, vec!["chicken", "rice"]);
        assert_eq!(constraints.dietary, vec!["vegan"]);
        assert_eq!(constraints.max_time, Some(45));
        assert_eq!(constraints.difficulty.as_deref(), Some("Hard"));
        assert_eq!(constraints.min_match, 60.0);
    }

    #[test]
    fn single_search_prints_results_and_stats() {
        let transcript = session("chicken, ginger, garlic, broccoli, carrot, bell pepper, rice, soy sauce\n\n\n\n\nn\n");

        assert!(transcript.output.contains("#1. Classic Chicken Stir Fry"));
        assert!(transcript.output.contains("Perfect match!"));
        assert!(transcript.output.contains("Ingredients: 8 | Threshold: 50%"));
        assert!(transcript.prompts.contains("INGREDIENTS:"));
        assert!(transcript.prompts.contains("Thank you!"));
    }

    #[test]
    fn invalid_answers_are_asked_again() {
        let transcript = session("\nvegan\nsoon\n25\nexpert\neasy\n200\n\nn\n");

        assert!(transcript.prompts.contains("Invalid input: \"soon\" is not a whole number of minutes"));
        assert!(transcript.prompts.contains("Invalid input: unknown difficulty \"expert\""));
        assert!(transcript.prompts.contains("Invalid input: threshold must be within 0 and 100, got 200"));
        assert!(transcript.output.contains("#1. Black Bean Tacos"));
        assert!(transcript.output.contains("Max time: 25 minutes"));
        assert!(transcript.output.contains("Difficulty: Easy"));
    }

    #[test]
    fn repeats_until_declined() {
        let transcript = session("\nketo\n\n\n\ny\n\nvegan\n\n\n\nN\n");

        assert!(transcript.output.contains("NO RECIPES FOUND"));
        assert!(transcript.output.contains("RECOMMENDED RECIPES (3 found)"));
    }

    #[test]
    fn end_of_input_ends_session() {
        let transcript = session("tomato\nvegan\n");

        assert!(transcript.output.is_empty());
        assert!(transcript.prompts.contains("Thank you!"));
    }

    #[test]
    fn json_session_keeps_output_machine_readable() {
        let transcript = session_as("\nvegan\n\n\n\nn\n", OutputFormat::Json);

        let value: serde_json::Value = serde_json::from_str(&transcript.output).unwrap();
        let ids: Vec<_> = value.as_array().unwrap().iter().map(|c| c["recipe"]["id"].clone()).collect();

        assert_eq!(ids, vec![2, 7, 5]);
        assert!(transcript.prompts.contains("PANTRY RECIPE RECOMMENDER"));
        assert!(transcript.prompts.contains("Searching..."));
        assert!(!transcript.output.contains("Searching..."));
    }
}
