use std::fmt;

/// Square letter grid. A cell is `None` until a word or a noise letter is
/// written into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Vec<Option<char>>>,
}

impl Grid {
    /// Create an empty `size` x `size` grid
    pub fn empty(size: usize) -> Self {
        Self {
            size,
            cells: vec![vec![None; size]; size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        self.cells.get(row)?.get(col).copied().flatten()
    }

    pub fn set(&mut self, row: usize, col: usize, letter: char) {
        self.cells[row][col] = Some(letter);
    }

    /// Fill every empty cell with a letter produced by `fill`
    pub fn fill_empty(&mut self, mut fill: impl FnMut() -> char) -> usize {
        let mut filled = 0;
        for cell in self.cells.iter_mut().flatten() {
            if cell.is_none() {
                *cell = Some(fill());
                filled += 1;
            }
        }
        filled
    }

    /// Number of cells not yet holding a letter
    pub fn empty_count(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| cell.is_none()).count()
    }

    /// True once no empty cells remain
    pub fn is_complete(&self) -> bool {
        self.empty_count() == 0
    }

    /// Rows as strings, with `.` standing in for empty cells
    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.cells
            .iter()
            .map(|row| row.iter().map(|cell| cell.unwrap_or('.')).collect())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let spaced: Vec<String> = row.chars().map(String::from).collect();
            writeln!(f, "{}", spaced.join(" "))?;
        }
        Ok(())
    }
}
