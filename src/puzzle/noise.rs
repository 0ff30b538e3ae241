use std::str::FromStr;

use rand::Rng;
use serde::Deserialize;

use super::placer::TrialSource;
use crate::{
    models::Grid,
    utils::letters::{weighted_letter, ALPHABET},
};

/// How noise letters are drawn for cells no word covers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum NoiseStyle {
    /// Every letter A-Z equally likely
    #[default]
    Uniform,
    /// Letters weighted by English frequency, so noise blends in with words
    Frequency,
}

impl NoiseStyle {
    pub fn letter<R: Rng + ?Sized>(self, rng: &mut R) -> char {
        match self {
            NoiseStyle::Uniform => ALPHABET[rng.random_range(0..ALPHABET.len())] as char,
            NoiseStyle::Frequency => weighted_letter(rng.random::<f32>()),
        }
    }
}

impl FromStr for NoiseStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "uniform" => Ok(NoiseStyle::Uniform),
            "frequency" => Ok(NoiseStyle::Frequency),
            other => Err(format!(
                "unknown noise style '{}', expected 'uniform' or 'frequency'",
                other
            )),
        }
    }
}

/// Overwrite every empty cell with a noise letter. Returns the number of
/// cells filled.
pub fn fill<S: TrialSource + ?Sized>(grid: &mut Grid, style: NoiseStyle, source: &mut S) -> usize {
    grid.fill_empty(|| source.pick_noise(style))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_fill_completes_grid() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut grid = Grid::empty(6);
        grid.set(2, 3, 'Q');

        let filled = fill(&mut grid, NoiseStyle::Uniform, &mut rng);

        assert_eq!(filled, 35);
        assert!(grid.is_complete());
        assert_eq!(grid.get(2, 3), Some('Q'));
        assert!(grid.rows().flat_map(|r| r.chars().collect::<Vec<_>>()).all(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn test_frequency_noise_is_uppercase() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..500 {
            let letter = NoiseStyle::Frequency.letter(&mut rng);
            assert!(letter.is_ascii_uppercase(), "unexpected noise letter {letter:?}");
        }
    }

    #[test]
    fn test_uniform_noise_covers_alphabet() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..5000 {
            seen.insert(NoiseStyle::Uniform.letter(&mut rng));
        }
        assert_eq!(seen.len(), 26);
    }

    #[test]
    fn test_parse_noise_style() {
        assert_eq!("uniform".parse::<NoiseStyle>(), Ok(NoiseStyle::Uniform));
        assert_eq!(" Frequency ".parse::<NoiseStyle>(), Ok(NoiseStyle::Frequency));
        assert!("loud".parse::<NoiseStyle>().is_err());
    }
}
