/// One of the eight straight lines a hidden word can run along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    East,
    South,
    SouthEast,
    NorthEast,
    West,
    North,
    NorthWest,
    SouthWest,
}

impl Direction {
    /// Every direction, in the order used for uniform random choice
    pub const ALL: [Direction; 8] = [
        Direction::East,
        Direction::South,
        Direction::SouthEast,
        Direction::NorthEast,
        Direction::West,
        Direction::North,
        Direction::NorthWest,
        Direction::SouthWest,
    ];

    /// Unit step as (row delta, col delta). Rows grow downwards.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::SouthEast => (1, 1),
            Direction::NorthEast => (-1, 1),
            Direction::West => (0, -1),
            Direction::North => (-1, 0),
            Direction::NorthWest => (-1, -1),
            Direction::SouthWest => (1, -1),
        }
    }

    /// Cell reached after `steps` moves from `(row, col)`, if it stays inside
    /// a `size` x `size` grid.
    pub fn step_from(self, row: usize, col: usize, steps: usize, size: usize) -> Option<(usize, usize)> {
        let (dr, dc) = self.delta();
        let steps = isize::try_from(steps).ok()?;
        let r = (row as isize).checked_add(dr.checked_mul(steps)?)?;
        let c = (col as isize).checked_add(dc.checked_mul(steps)?)?;

        let in_bounds = |v: isize| v >= 0 && (v as usize) < size;
        if in_bounds(r) && in_bounds(c) {
            Some((r as usize, c as usize))
        } else {
            None
        }
    }
}
