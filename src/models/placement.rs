use super::{Direction, Grid};

/// A word committed to the grid at a start cell and direction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub word: String,
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
}

impl Placement {
    /// Grid cells covered by this placement, paired with the letter each needs
    pub fn cells(&self) -> impl Iterator<Item = ((usize, usize), char)> + '_ {
        let (dr, dc) = self.direction.delta();
        self.word.chars().enumerate().map(move |(i, letter)| {
            let row = (self.row as isize + dr * i as isize) as usize;
            let col = (self.col as isize + dc * i as isize) as usize;
            ((row, col), letter)
        })
    }
}

/// Result of one generation run
#[derive(Debug, Clone)]
pub struct Puzzle {
    pub grid: Grid,
    /// Words that made it into the grid, in input order
    pub placements: Vec<Placement>,
    /// Words that ran out of attempts, in input order
    pub unplaced: Vec<String>,
}

impl Puzzle {
    pub fn placed_words(&self) -> Vec<String> {
        self.placements.iter().map(|p| p.word.clone()).collect()
    }

    pub fn is_fully_placed(&self) -> bool {
        self.unplaced.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_cells_follow_direction() {
        let placement = Placement {
            word: "DOG".to_string(),
            row: 2,
            col: 2,
            direction: Direction::NorthWest,
        };

        let cells: Vec<_> = placement.cells().collect();
        assert_eq!(cells, vec![((2, 2), 'D'), ((1, 1), 'O'), ((0, 0), 'G')]);
    }
}
