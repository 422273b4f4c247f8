//! Fixed-size character surface.
//!
//! The grid only stores characters. It does no placement validation:
//! the engine checks feasibility before every write.

use serde::{Deserialize, Serialize};

/// `width × height` cells, each empty (`None`) or holding one character.
///
/// Indexing outside the grid is a bug in the caller and panics.
///
/// ```
/// use name_crossword::grid::Grid;
///
/// let mut grid = Grid::new(4, 3);
/// assert_eq!(grid.get(1, 2), None);
///
/// grid.set(1, 2, 'Q');
/// assert_eq!(grid.get(1, 2), Some('Q'));
/// assert_eq!(grid.occupied_count(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: usize,
    height: usize,
    /// Row-major cell storage.
    cells: Vec<Option<char>>,
}

impl Grid {
    /// Create an all-empty grid.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    /// Number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Is the (possibly negative) coordinate inside the grid?
    #[must_use]
    pub fn contains(&self, row: isize, col: isize) -> bool {
        (0..self.height as isize).contains(&row) && (0..self.width as isize).contains(&col)
    }

    /// Character at a cell, `None` when empty.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        self.cells[self.offset(row, col)]
    }

    /// Overwrite a cell unconditionally.
    pub fn set(&mut self, row: usize, col: usize, ch: char) {
        let idx = self.offset(row, col);
        self.cells[idx] = Some(ch);
    }

    #[must_use]
    pub fn is_empty_at(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_none()
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<char>]> {
        self.cells.chunks(self.width.max(1)).take(self.height)
    }

    /// Number of non-empty cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Does the cell storage match the stated dimensions?
    ///
    /// Always true for grids built with [`Grid::new`]; decoded grids are
    /// checked with this before use.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.width.checked_mul(self.height) == Some(self.cells.len())
    }

    fn offset(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.height && col < self.width,
            "cell ({row}, {col}) outside {}x{} grid",
            self.width,
            self.height
        );
        row * self.width + col
    }
}
