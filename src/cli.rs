use clap::Parser;

use crate::{config::Config, puzzle::NoiseStyle};

/// Generate a printable word search puzzle
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Words to hide. When omitted, words are sampled from the dictionary.
    pub words: Vec<String>,

    /// Width and height of the grid
    #[arg(short = 's', long)]
    pub grid_size: Option<usize>,

    /// Number of dictionary words to sample
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Title printed above the grid
    #[arg(short, long)]
    pub title: Option<String>,

    /// Directory the PDF is written to (created if missing)
    #[arg(short, long)]
    pub output_dir: Option<String>,

    /// Word list file, one word per line
    #[arg(short, long)]
    pub dictionary: Option<String>,

    /// Seed for reproducible puzzles
    #[arg(long)]
    pub seed: Option<u64>,

    /// Shortest dictionary word to use
    #[arg(long)]
    pub min_length: Option<usize>,

    /// Placement attempts per word before it is skipped
    #[arg(long)]
    pub max_attempts: Option<usize>,

    /// How uncovered cells are filled
    #[arg(long, value_enum)]
    pub noise: Option<NoiseStyle>,

    /// Print every requested word, including ones that did not fit
    #[arg(long)]
    pub list_unplaced: bool,
}

impl Cli {
    /// Layer command line flags over the environment config
    pub fn apply(&self, config: &mut Config) {
        if let Some(grid_size) = self.grid_size {
            config.puzzle.grid_size = grid_size;
        }
        if let Some(count) = self.count {
            config.words.word_count = count;
        }
        if let Some(title) = &self.title {
            config.output.title = title.clone();
        }
        if let Some(dir) = &self.output_dir {
            config.output.dir = dir.clone();
        }
        if let Some(path) = &self.dictionary {
            config.words.dictionary_path = path.clone();
        }
        if self.seed.is_some() {
            config.puzzle.seed = self.seed;
        }
        if let Some(min_length) = self.min_length {
            config.words.min_word_length = min_length;
        }
        if let Some(max_attempts) = self.max_attempts {
            config.puzzle.max_attempts = max_attempts;
        }
        if let Some(noise) = self.noise {
            config.puzzle.noise = noise;
        }
        if self.list_unplaced {
            config.output.list_unplaced = true;
        }
    }
}
