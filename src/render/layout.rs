//! Page layout arithmetic for a printed puzzle.
//!
//! All coordinates are PDF points with the origin at the bottom-left corner
//! of the page, so `y` shrinks as content moves down the page.

use crate::{error::RenderError, models::Grid};

/// A5 width in points
pub const A5_WIDTH: f32 = 419.53;
/// A5 height in points
pub const A5_HEIGHT: f32 = 595.28;

/// Helvetica digits and most lowercase letters advance 0.556 em
const HELVETICA_AVERAGE_ADVANCE: f32 = 0.556;

#[derive(Debug, Clone, PartialEq)]
pub struct PageConfig {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
    /// Fixed cell pitch. `None` stretches the grid across the content width.
    pub cell_size: Option<f32>,
    pub title_font_size: f32,
    pub grid_font_size: f32,
    pub word_font_size: f32,
    pub word_columns: usize,
    /// Baseline distance between word list rows
    pub word_line_spacing: f32,
    /// Title baseline, measured down from the top edge
    pub title_offset: f32,
    /// First grid row baseline, measured down from the top edge
    pub grid_offset: f32,
    /// Gap between the last grid row and the first word list row
    pub word_list_gap: f32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            width: A5_WIDTH,
            height: A5_HEIGHT,
            margin: 30.0,
            cell_size: None,
            title_font_size: 10.0,
            grid_font_size: 10.0,
            word_font_size: 8.0,
            word_columns: 3,
            word_line_spacing: 12.0,
            title_offset: 40.0,
            grid_offset: 70.0,
            word_list_gap: 20.0,
        }
    }
}

impl PageConfig {
    pub fn content_width(&self) -> f32 {
        self.width - 2.0 * self.margin
    }

    pub fn cell_size_for(&self, grid_size: usize) -> f32 {
        self.cell_size
            .unwrap_or_else(|| self.content_width() / grid_size as f32)
    }
}

/// One string drawn at a baseline position
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub size: f32,
}

/// Everything drawn on the page, in drawing order
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    pub width: f32,
    pub height: f32,
    pub title: TextRun,
    pub grid: Vec<TextRun>,
    pub words: Vec<TextRun>,
}

impl PageLayout {
    pub fn compute(
        config: &PageConfig,
        grid: &Grid,
        title: &str,
        words: &[String],
    ) -> Result<Self, RenderError> {
        let empty = grid.empty_count();
        if empty > 0 {
            return Err(RenderError::IncompleteGrid(empty));
        }
        if config.word_columns == 0 {
            return Err(RenderError::NoColumns);
        }

        let title_width = text_width(title, config.title_font_size);
        let title = TextRun {
            text: title.to_string(),
            x: (config.width - title_width) / 2.0,
            y: config.height - config.title_offset,
            size: config.title_font_size,
        };

        let cell = config.cell_size_for(grid.size());
        let grid_top = config.height - config.grid_offset;

        let mut grid_runs = Vec::with_capacity(grid.size() * grid.size());
        for (row, letters) in grid.rows().enumerate() {
            for (col, letter) in letters.chars().enumerate() {
                grid_runs.push(TextRun {
                    text: letter.to_string(),
                    x: config.margin + col as f32 * cell,
                    y: grid_top - row as f32 * cell,
                    size: config.grid_font_size,
                });
            }
        }

        let list_top = grid_top - grid.size() as f32 * cell - config.word_list_gap;
        let words_per_column = words.len().div_ceil(config.word_columns);
        let column_width = config.content_width() / config.word_columns as f32;

        let word_runs = words
            .iter()
            .enumerate()
            .map(|(i, word)| {
                let col = i / words_per_column;
                let row = i % words_per_column;
                TextRun {
                    text: word.to_uppercase(),
                    x: config.margin + col as f32 * column_width,
                    y: list_top - row as f32 * config.word_line_spacing,
                    size: config.word_font_size,
                }
            })
            .collect();

        Ok(Self {
            width: config.width,
            height: config.height,
            title,
            grid: grid_runs,
            words: word_runs,
        })
    }

    pub fn runs(&self) -> impl Iterator<Item = &TextRun> {
        std::iter::once(&self.title)
            .chain(self.grid.iter())
            .chain(self.words.iter())
    }
}

/// Approximate rendered width of `text` in Helvetica at `size` points
fn text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * HELVETICA_AVERAGE_ADVANCE
}
