use std::path::PathBuf;

use thiserror::Error;

/// Input rejected before any placement is attempted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaceError {
    #[error("no words to place")]
    EmptyWordList,

    #[error("word at index {index} is empty")]
    EmptyWord { index: usize },

    #[error("grid size must be at least 1")]
    ZeroGridSize,

    #[error("word {word:?} contains {ch:?}, only the letters A-Z can be placed")]
    InvalidCharacter { word: String, ch: char },
}

/// Failures while loading or sampling candidate words
#[derive(Debug, Error)]
pub enum SupplyError {
    #[error("failed to read word list {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("requested {requested} words but only {available} candidates are available")]
    NotEnoughWords { requested: usize, available: usize },
}

/// Failures while producing or writing the page document
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("grid is not complete, {0} cells are still empty")]
    IncompleteGrid(usize),

    #[error("page layout needs at least one word column")]
    NoColumns,

    #[error("PDF generation failed: {0}")]
    Pdf(String),

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
