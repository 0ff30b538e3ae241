use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    config::Config,
    dictionary::Dictionary,
    models::Puzzle,
    puzzle::Placer,
    render::PageRenderer,
};

/// What a generation run produced
#[derive(Debug, Clone)]
pub struct Report {
    pub path: PathBuf,
    pub seed: u64,
    /// Words handed to the placer, uppercased
    pub requested: Vec<String>,
    pub placed: Vec<String>,
    pub unplaced: Vec<String>,
}

/// Pick words, build the puzzle and write the page.
///
/// `explicit_words` bypasses the dictionary when non-empty.
pub async fn generate(config: &Config, explicit_words: &[String]) -> Result<Report> {
    let seed = config.puzzle.seed.unwrap_or_else(|| rand::rng().random());
    tracing::info!("Using seed {}", seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let words = if explicit_words.is_empty() {
        let dictionary = Dictionary::load(&config.words.dictionary_path, config.words.min_word_length)
            .await
            .context("Failed to load dictionary")?;
        dictionary
            .sample(config.words.word_count, &mut rng)
            .context("Failed to sample puzzle words")?
    } else {
        explicit_words.to_vec()
    };

    let placer = Placer::new()
        .with_max_attempts(config.puzzle.max_attempts)
        .with_noise(config.puzzle.noise);
    let puzzle = placer
        .place(&words, config.puzzle.grid_size, &mut rng)
        .context("Failed to build puzzle")?;

    tracing::info!(
        "Placed {} of {} words in a {}x{} grid",
        puzzle.placements.len(),
        words.len(),
        config.puzzle.grid_size,
        config.puzzle.grid_size
    );

    let requested: Vec<String> = words.iter().map(|w| w.to_uppercase()).collect();
    let listed = listed_words(&puzzle, &requested, config.output.list_unplaced);

    let renderer = PageRenderer::new(config.page_config());
    let path = renderer
        .write(
            &puzzle.grid,
            &config.output.title,
            &listed,
            Path::new(&config.output.dir),
        )
        .await
        .context("Failed to write puzzle page")?;

    Ok(Report {
        path,
        seed,
        requested,
        placed: puzzle.placed_words(),
        unplaced: puzzle.unplaced,
    })
}

/// Words printed under the grid
fn listed_words(puzzle: &Puzzle, requested: &[String], list_unplaced: bool) -> Vec<String> {
    if list_unplaced {
        requested.to_vec()
    } else {
        puzzle.placed_words()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(tag: &str) -> Config {
        let mut config = Config::from_lookup(|_| None).unwrap();
        config.puzzle.seed = Some(2024);
        config.puzzle.grid_size = 6;
        config.output.dir = std::env::temp_dir()
            .join(format!("wordsearch-app-{}-{}", tag, std::process::id()))
            .to_string_lossy()
            .into_owned();
        config
    }

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_generate_with_explicit_words() {
        let config = test_config("explicit");
        let report =
            tokio_test::block_on(generate(&config, &words(&["cat", "dog", "hippopotamus"]))).unwrap();

        assert_eq!(report.seed, 2024);
        assert_eq!(report.requested, words(&["CAT", "DOG", "HIPPOPOTAMUS"]));
        assert!(report.unplaced.contains(&"HIPPOPOTAMUS".to_string()));
        assert_eq!(report.placed.len() + report.unplaced.len(), 3);
        assert!(report.path.exists());

        std::fs::remove_dir_all(&config.output.dir).ok();
    }

    #[test]
    fn test_generate_from_dictionary() {
        let mut config = test_config("dictionary");
        let dict_path = std::env::temp_dir().join(format!("wordsearch-app-{}.txt", std::process::id()));
        std::fs::write(&dict_path, "tree\nleaf\nroot\nbark\nmoss\nfern\n").unwrap();
        config.words.dictionary_path = dict_path.to_string_lossy().into_owned();
        config.words.word_count = 3;

        let report = tokio_test::block_on(generate(&config, &[])).unwrap();

        assert_eq!(report.requested.len(), 3);
        assert!(report.path.exists());

        std::fs::remove_file(&dict_path).ok();
        std::fs::remove_dir_all(&config.output.dir).ok();
    }

    #[test]
    fn test_generate_fails_without_dictionary() {
        let mut config = test_config("missing");
        config.words.dictionary_path = "/nonexistent/wordsearch.txt".to_string();

        let err = tokio_test::block_on(generate(&config, &[])).unwrap_err();
        assert!(err.to_string().contains("Failed to load dictionary"));
    }

    #[test]
    fn test_listed_words_follow_flag() {
        let mut rng = StdRng::seed_from_u64(1);
        let requested = words(&["OWL", "ELEPHANT"]);
        let puzzle = Placer::new().place(&requested, 4, &mut rng).unwrap();

        assert_eq!(listed_words(&puzzle, &requested, false), words(&["OWL"]));
        assert_eq!(listed_words(&puzzle, &requested, true), requested);
    }
}
