use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use printpdf::{BuiltinFont, Mm, PdfDocument};
use tokio::fs;

use super::layout::{PageConfig, PageLayout};
use crate::{error::RenderError, models::Grid};

const LAYER_NAME: &str = "Puzzle";

fn pt_to_mm(pt: f32) -> Mm {
    Mm(pt * 25.4 / 72.0)
}

/// Output file name for a page generated at `now`
pub fn output_file_name(now: DateTime<Local>) -> String {
    format!("wordsearch_{}.pdf", now.format("%Y%m%d_%H%M%S"))
}

/// Paints a finished grid and its word list onto a single PDF page
pub struct PageRenderer {
    config: PageConfig,
}

impl PageRenderer {
    pub fn new(config: PageConfig) -> Self {
        Self { config }
    }

    pub fn layout(&self, grid: &Grid, title: &str, words: &[String]) -> Result<PageLayout, RenderError> {
        PageLayout::compute(&self.config, grid, title, words)
    }

    /// Render a computed layout to PDF bytes
    pub fn to_pdf(&self, layout: &PageLayout) -> Result<Vec<u8>, RenderError> {
        let (doc, page, layer) = PdfDocument::new(
            layout.title.text.clone(),
            pt_to_mm(layout.width),
            pt_to_mm(layout.height),
            LAYER_NAME,
        );
        let font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| RenderError::Pdf(format!("{:?}", e)))?;
        let layer = doc.get_page(page).get_layer(layer);

        for run in layout.runs() {
            layer.use_text(
                run.text.clone(),
                run.size,
                pt_to_mm(run.x),
                pt_to_mm(run.y),
                &font,
            );
        }

        doc.save_to_bytes()
            .map_err(|e| RenderError::Pdf(format!("{:?}", e)))
    }

    /// Lay out, render and write the page into `output_dir`, creating the
    /// directory if needed. Returns the path of the written file.
    pub async fn write(
        &self,
        grid: &Grid,
        title: &str,
        words: &[String],
        output_dir: &Path,
    ) -> Result<PathBuf, RenderError> {
        let layout = self.layout(grid, title, words)?;
        let bytes = self.to_pdf(&layout)?;

        fs::create_dir_all(output_dir)
            .await
            .map_err(|source| RenderError::Write {
                path: output_dir.to_path_buf(),
                source,
            })?;

        let path = output_dir.join(output_file_name(Local::now()));
        fs::write(&path, &bytes)
            .await
            .map_err(|source| RenderError::Write {
                path: path.clone(),
                source,
            })?;

        tracing::debug!("Wrote {} bytes to {}", bytes.len(), path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn filled_grid(size: usize) -> Grid {
        let mut grid = Grid::empty(size);
        grid.fill_empty(|| 'K');
        grid
    }

    #[test]
    fn test_output_file_name_uses_timestamp() {
        let now = Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
        assert_eq!(output_file_name(now), "wordsearch_20240309_140507.pdf");
    }

    #[test]
    fn test_to_pdf_produces_document() {
        let renderer = PageRenderer::new(PageConfig::default());
        let layout = renderer
            .layout(&filled_grid(5), "Test", &["CAT".to_string()])
            .unwrap();

        let bytes = renderer.to_pdf(&layout).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_write_creates_output_dir() {
        let dir = std::env::temp_dir()
            .join(format!("wordsearch-render-{}", std::process::id()))
            .join("nested");
        let renderer = PageRenderer::new(PageConfig::default());

        let path = tokio_test::block_on(renderer.write(
            &filled_grid(4),
            "Test",
            &["DOG".to_string()],
            &dir,
        ))
        .unwrap();

        assert!(path.starts_with(&dir));
        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        std::fs::remove_dir_all(dir.parent().unwrap()).ok();
    }

    #[test]
    fn test_write_rejects_incomplete_grid() {
        let renderer = PageRenderer::new(PageConfig::default());
        let result = tokio_test::block_on(renderer.write(
            &Grid::empty(3),
            "Test",
            &[],
            Path::new("unused"),
        ));
        assert!(matches!(result, Err(RenderError::IncompleteGrid(9))));
    }
}
