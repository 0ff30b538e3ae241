use std::collections::BTreeSet;
use std::path::Path;

use rand::{seq::IndexedRandom, Rng};
use tokio::fs;

use crate::error::SupplyError;

/// Default minimum length for a dictionary word to be hidden in a puzzle
pub const DEFAULT_MIN_WORD_LENGTH: usize = 4;

/// Pool of candidate puzzle words.
///
/// Words are stored uppercased, deduplicated and sorted, so sampling with a
/// seeded RNG picks the same words on every run.
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    /// Load dictionary from a file, keeping only usable candidates
    pub async fn load<P: AsRef<Path>>(path: P, min_word_length: usize) -> Result<Self, SupplyError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .await
            .map_err(|source| SupplyError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        let dictionary = Self::from_lines(content.lines(), min_word_length);
        tracing::info!(
            "Loaded {} candidate words from {}",
            dictionary.len(),
            path.display()
        );

        Ok(dictionary)
    }

    /// Build a dictionary from raw lines, dropping anything that cannot be hidden
    pub fn from_lines<'a, I>(lines: I, min_word_length: usize) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let words: BTreeSet<String> = lines
            .into_iter()
            .map(|line| line.trim().to_uppercase())
            .filter(|word| is_candidate(word, min_word_length))
            .collect();

        Self {
            words: words.into_iter().collect(),
        }
    }

    /// Create an empty dictionary (for testing)
    #[cfg(test)]
    pub fn empty() -> Self {
        Self { words: Vec::new() }
    }

    /// Check if a word exists in the dictionary
    pub fn contains(&self, word: &str) -> bool {
        self.words
            .binary_search(&word.to_uppercase())
            .is_ok()
    }

    /// Get the number of words in the dictionary
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if dictionary is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Draw `count` distinct words uniformly at random
    pub fn sample<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Result<Vec<String>, SupplyError> {
        if count > self.words.len() {
            return Err(SupplyError::NotEnoughWords {
                requested: count,
                available: self.words.len(),
            });
        }

        Ok(self.words.choose_multiple(rng, count).cloned().collect())
    }
}

/// Long enough and letters only, which drops phrases joined by `_` or `-`
fn is_candidate(word: &str, min_word_length: usize) -> bool {
    word.len() >= min_word_length && word.chars().all(|c| c.is_ascii_uppercase())
}
