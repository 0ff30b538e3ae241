use rand::Rng;

use super::noise::{self, NoiseStyle};
use crate::{
    error::PlaceError,
    models::{Direction, Grid, Placement, Puzzle},
    utils::letters::is_grid_letter,
};

/// Randomized trials per word before it is skipped
pub const DEFAULT_MAX_ATTEMPTS: usize = 100;

/// The random choices the placer makes.
///
/// Every [`Rng`] is a trial source, so callers normally pass a seeded
/// `StdRng`. Tests can script the choices directly.
pub trait TrialSource {
    /// Direction for the next trial, uniform over [`Direction::ALL`]
    fn pick_direction(&mut self) -> Direction;

    /// Start cell for the next trial, uniform over `[0, size)²`
    fn pick_cell(&mut self, size: usize) -> (usize, usize);

    /// Letter for an uncovered cell
    fn pick_noise(&mut self, style: NoiseStyle) -> char;
}

impl<R: Rng + ?Sized> TrialSource for R {
    fn pick_direction(&mut self) -> Direction {
        Direction::ALL[self.random_range(0..Direction::ALL.len())]
    }

    fn pick_cell(&mut self, size: usize) -> (usize, usize) {
        (self.random_range(0..size), self.random_range(0..size))
    }

    fn pick_noise(&mut self, style: NoiseStyle) -> char {
        style.letter(self)
    }
}

/// Greedy randomized word placer.
///
/// Words are placed one at a time in input order. A committed word is never
/// moved, so an early word can crowd out a later one; the later word is then
/// reported in [`Puzzle::unplaced`] instead of failing the run.
#[derive(Debug, Clone)]
pub struct Placer {
    max_attempts: usize,
    noise: NoiseStyle,
}

impl Default for Placer {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            noise: NoiseStyle::default(),
        }
    }
}

impl Placer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn with_noise(mut self, noise: NoiseStyle) -> Self {
        self.noise = noise;
        self
    }

    /// Build a `grid_size` x `grid_size` puzzle hiding `words`.
    ///
    /// Words are uppercased first. Any positive grid size yields a complete
    /// grid, even when no word fits.
    pub fn place<W, S>(&self, words: &[W], grid_size: usize, source: &mut S) -> Result<Puzzle, PlaceError>
    where
        W: AsRef<str>,
        S: TrialSource + ?Sized,
    {
        if grid_size == 0 {
            return Err(PlaceError::ZeroGridSize);
        }
        let words = normalize(words)?;

        let mut grid = Grid::empty(grid_size);
        let mut placements = Vec::with_capacity(words.len());
        let mut unplaced = Vec::new();

        for word in words {
            match self.place_word(&mut grid, &word, source) {
                Some(placement) => {
                    tracing::debug!(
                        "Placed {} at ({}, {}) heading {:?}",
                        placement.word,
                        placement.row,
                        placement.col,
                        placement.direction
                    );
                    placements.push(placement);
                }
                None => {
                    tracing::warn!(
                        "Could not place {} in a {}x{} grid after {} attempts, skipping it",
                        word,
                        grid_size,
                        grid_size,
                        self.max_attempts
                    );
                    unplaced.push(word);
                }
            }
        }

        let filled = noise::fill(&mut grid, self.noise, source);
        tracing::debug!("Filled {} empty cells with {:?} noise", filled, self.noise);

        Ok(Puzzle {
            grid,
            placements,
            unplaced,
        })
    }

    fn place_word<S>(&self, grid: &mut Grid, word: &str, source: &mut S) -> Option<Placement>
    where
        S: TrialSource + ?Sized,
    {
        let last_step = word.chars().count() - 1;

        for _ in 0..self.max_attempts {
            let direction = source.pick_direction();
            let (row, col) = source.pick_cell(grid.size());

            // End cell outside the grid: reject without looking at any cell
            if direction.step_from(row, col, last_step, grid.size()).is_none() {
                continue;
            }

            let placement = Placement {
                word: word.to_string(),
                row,
                col,
                direction,
            };

            if fits(grid, &placement) {
                for ((r, c), letter) in placement.cells() {
                    grid.set(r, c, letter);
                }
                return Some(placement);
            }
        }

        None
    }
}

/// Every covered cell is empty or already holds the letter the word needs
fn fits(grid: &Grid, placement: &Placement) -> bool {
    placement
        .cells()
        .all(|((row, col), letter)| grid.get(row, col).map_or(true, |existing| existing == letter))
}

fn normalize<W: AsRef<str>>(words: &[W]) -> Result<Vec<String>, PlaceError> {
    if words.is_empty() {
        return Err(PlaceError::EmptyWordList);
    }

    words
        .iter()
        .enumerate()
        .map(|(index, word)| {
            let upper = word.as_ref().to_uppercase();
            if upper.is_empty() {
                return Err(PlaceError::EmptyWord { index });
            }
            if let Some(ch) = upper.chars().find(|ch| !is_grid_letter(*ch)) {
                return Err(PlaceError::InvalidCharacter { word: upper, ch });
            }
            Ok(upper)
        })
        .collect()
}
