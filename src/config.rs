use std::{env, str::FromStr};

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

use crate::{
    dictionary::DEFAULT_MIN_WORD_LENGTH,
    puzzle::{NoiseStyle, DEFAULT_MAX_ATTEMPTS},
    render::PageConfig,
};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub puzzle: PuzzleConfig,
    pub words: WordConfig,
    pub output: OutputConfig,
    pub page: PageSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PuzzleConfig {
    pub grid_size: usize,
    pub max_attempts: usize,
    pub seed: Option<u64>,
    pub noise: NoiseStyle,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WordConfig {
    pub dictionary_path: String,
    pub word_count: usize,
    pub min_word_length: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub dir: String,
    pub title: String,
    pub list_unplaced: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PageSettings {
    pub margin: f32,
    pub cell_size: Option<f32>,
    pub word_columns: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the config from any variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let puzzle = PuzzleConfig {
            grid_size: parse_or(&lookup, "WORDSEARCH_GRID_SIZE", 25)?,
            max_attempts: parse_or(&lookup, "WORDSEARCH_MAX_ATTEMPTS", DEFAULT_MAX_ATTEMPTS)?,
            seed: parse_opt(&lookup, "WORDSEARCH_SEED")?,
            noise: lookup("WORDSEARCH_NOISE")
                .map(|raw| raw.parse::<NoiseStyle>().map_err(|e| anyhow!(e)))
                .transpose()
                .context("WORDSEARCH_NOISE must be 'uniform' or 'frequency'")?
                .unwrap_or_default(),
        };

        let words = WordConfig {
            dictionary_path: lookup("DICTIONARY_PATH")
                .unwrap_or_else(|| "./dictionary.txt".to_string()),
            word_count: parse_or(&lookup, "WORDSEARCH_WORD_COUNT", 20)?,
            min_word_length: parse_or(&lookup, "WORDSEARCH_MIN_WORD_LENGTH", DEFAULT_MIN_WORD_LENGTH)?,
        };

        let output = OutputConfig {
            dir: lookup("WORDSEARCH_OUTPUT_DIR").unwrap_or_else(|| "wordsearch".to_string()),
            title: lookup("WORDSEARCH_TITLE").unwrap_or_else(|| "Word Search".to_string()),
            list_unplaced: lookup("WORDSEARCH_LIST_UNPLACED")
                .map(|raw| parse_flag(&raw))
                .transpose()
                .context("WORDSEARCH_LIST_UNPLACED must be true or false")?
                .unwrap_or(false),
        };

        let page = PageSettings {
            margin: parse_or(&lookup, "WORDSEARCH_MARGIN", 30.0)?,
            cell_size: parse_opt(&lookup, "WORDSEARCH_CELL_SIZE")?,
            word_columns: parse_or(&lookup, "WORDSEARCH_WORD_COLUMNS", 3)?,
        };

        Ok(Config {
            puzzle,
            words,
            output,
            page,
        })
    }

    pub fn page_config(&self) -> PageConfig {
        PageConfig {
            margin: self.page.margin,
            cell_size: self.page.cell_size,
            word_columns: self.page.word_columns,
            ..PageConfig::default()
        }
    }
}

fn parse_opt<F, T>(lookup: &F, name: &str) -> Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    lookup(name)
        .map(|raw| raw.trim().parse::<T>())
        .transpose()
        .with_context(|| format!("{} must be a number", name))
}

fn parse_or<F, T>(lookup: &F, name: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    Ok(parse_opt(lookup, name)?.unwrap_or(default))
}

fn parse_flag(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        other => Err(anyhow!("'{}' is not a boolean", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.puzzle.grid_size, 25);
        assert_eq!(config.puzzle.max_attempts, 100);
        assert_eq!(config.puzzle.seed, None);
        assert_eq!(config.puzzle.noise, NoiseStyle::Uniform);
        assert_eq!(config.words.word_count, 20);
        assert_eq!(config.words.min_word_length, 4);
        assert_eq!(config.words.dictionary_path, "./dictionary.txt");
        assert_eq!(config.output.dir, "wordsearch");
        assert!(!config.output.list_unplaced);
        assert_eq!(config.page_config(), PageConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("WORDSEARCH_GRID_SIZE", "12"),
            ("WORDSEARCH_SEED", "77"),
            ("WORDSEARCH_NOISE", "frequency"),
            ("WORDSEARCH_TITLE", "Fruit"),
            ("WORDSEARCH_LIST_UNPLACED", "yes"),
            ("WORDSEARCH_CELL_SIZE", "14.5"),
            ("WORDSEARCH_WORD_COLUMNS", "2"),
        ]))
        .unwrap();

        assert_eq!(config.puzzle.grid_size, 12);
        assert_eq!(config.puzzle.seed, Some(77));
        assert_eq!(config.puzzle.noise, NoiseStyle::Frequency);
        assert_eq!(config.output.title, "Fruit");
        assert!(config.output.list_unplaced);

        let page = config.page_config();
        assert_eq!(page.cell_size, Some(14.5));
        assert_eq!(page.word_columns, 2);
    }

    #[test]
    fn test_bad_number_is_reported() {
        let err = Config::from_lookup(lookup_from(&[("WORDSEARCH_GRID_SIZE", "big")])).unwrap_err();
        assert!(err.to_string().contains("WORDSEARCH_GRID_SIZE"));
    }

    #[test]
    fn test_bad_noise_is_reported() {
        let err = Config::from_lookup(lookup_from(&[("WORDSEARCH_NOISE", "loud")])).unwrap_err();
        assert!(err.to_string().contains("WORDSEARCH_NOISE"));
    }
}
