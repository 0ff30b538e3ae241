pub mod direction;
pub mod grid;
pub mod placement;

pub use direction::Direction;
pub use grid::Grid;
pub use placement::{Placement, Puzzle};
