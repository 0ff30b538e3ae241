pub mod layout;
pub mod pdf;

pub use layout::{PageConfig, PageLayout, TextRun};
pub use pdf::PageRenderer;
