//! Word search puzzle generator.
//!
//! Words are hidden in a square grid by [`puzzle::Placer`], then the grid and
//! word list are laid out on an A5 page by [`render::PageRenderer`].

pub mod app;
pub mod cli;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod models;
pub mod puzzle;
pub mod render;
pub mod utils;
