//! Plain-text rendering of grids and word listings.

use std::fmt::Write as _;

use crate::grid::Grid;
use crate::words::PlacedWord;

/// Draw the grid inside a `+---+` / `|...|` frame. Empty cells are spaces.
///
/// ```
/// use name_crossword::grid::Grid;
/// use name_crossword::layout::render_grid;
///
/// let mut grid = Grid::new(3, 1);
/// grid.set(0, 1, 'A');
/// assert_eq!(render_grid(&grid), "+---+\n| A |\n+---+\n");
/// ```
#[must_use]
pub fn render_grid(grid: &Grid) -> String {
    let border = format!("+{}+\n", "-".repeat(grid.width()));
    let mut out = String::with_capacity((grid.width() + 3) * (grid.height() + 2));

    out.push_str(&border);
    for row in grid.rows() {
        out.push('|');
        out.extend(row.iter().map(|cell| cell.unwrap_or(' ')));
        out.push_str("|\n");
    }
    out.push_str(&border);
    out
}

/// List committed words with 1-indexed coordinates.
#[must_use]
pub fn render_word_list(words: &[PlacedWord]) -> String {
    let mut out = format!("Placed words ({}):\n", words.len());
    for placed in words {
        let p = placed.placement;
        // Writing to a String cannot fail.
        let _ = writeln!(
            out,
            "  {} - Row {}, Col {} ({})",
            placed.word,
            p.row + 1,
            p.col + 1,
            p.orientation
        );
    }
    out
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&render_grid(self))
    }
}
