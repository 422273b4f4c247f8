//! Feasibility check for a word at a given start cell and orientation.
//!
//! A placement is legal when:
//! - the whole span lies inside the grid,
//! - the cells just before the start and just after the end are empty,
//! - every occupied span cell already holds the same character,
//! - every empty span cell has empty side neighbors.
//!
//! Side neighbors are the two cells perpendicular to the direction of
//! travel. Occupied (crossing) cells skip that check.

use crate::grid::Grid;
use crate::words::{Orientation, Placement, Word};

/// Can `word` be written at `placement` without breaking the layout rules?
///
/// Pure: never touches the grid. Safe to call repeatedly.
#[must_use]
pub fn can_place(grid: &Grid, word: &Word, placement: Placement) -> bool {
    let Placement {
        row,
        col,
        orientation,
    } = placement;

    if row >= grid.height() || col >= grid.width() {
        return false;
    }

    let len = word.len();
    let (start, limit) = match orientation {
        Orientation::Horizontal => (col, grid.width()),
        Orientation::Vertical => (row, grid.height()),
    };
    if start + len > limit {
        return false;
    }

    if start > 0 {
        let (r, c) = match orientation {
            Orientation::Horizontal => (row, col - 1),
            Orientation::Vertical => (row - 1, col),
        };
        if !grid.is_empty_at(r, c) {
            return false;
        }
    }

    if start + len < limit {
        let (r, c) = placement.cell_at(len);
        if !grid.is_empty_at(r, c) {
            return false;
        }
    }

    word.chars().enumerate().all(|(offset, ch)| {
        let (r, c) = placement.cell_at(offset);
        match grid.get(r, c) {
            Some(existing) => existing == ch,
            None => side_neighbors_empty(grid, r, c, orientation),
        }
    })
}

fn side_neighbors_empty(grid: &Grid, row: usize, col: usize, orientation: Orientation) -> bool {
    match orientation {
        Orientation::Horizontal => {
            (row == 0 || grid.is_empty_at(row - 1, col))
                && (row + 1 >= grid.height() || grid.is_empty_at(row + 1, col))
        }
        Orientation::Vertical => {
            (col == 0 || grid.is_empty_at(row, col - 1))
                && (col + 1 >= grid.width() || grid.is_empty_at(row, col + 1))
        }
    }
}
