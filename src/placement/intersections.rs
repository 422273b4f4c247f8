//! Candidate crossings between a new word and the words already placed.
//!
//! Crossings are always perpendicular: a word crosses a horizontal word
//! vertically and a vertical word horizontally.

use crate::grid::Grid;
use crate::words::{Orientation, PlacedWord, Placement, Word};

/// Start positions that would cross `word` over some placed word on a
/// shared letter.
///
/// For every placed word and every pair `(i, j)` with
/// `word[i] == placed[j]`, the candidate is positioned so that its
/// `i`-th cell lands on the placed word's `j`-th cell. Only the start
/// cell is bounds-checked here; full feasibility is checked by the
/// caller. Order follows the scan and carries no meaning.
#[must_use]
pub fn find_intersections(grid: &Grid, word: &Word, placed_words: &[PlacedWord]) -> Vec<Placement> {
    let mut candidates = Vec::new();

    for placed in placed_words {
        let anchor = placed.placement;
        let (anchor_row, anchor_col) = (anchor.row as isize, anchor.col as isize);

        for (i, ch) in word.chars().enumerate() {
            for (j, placed_ch) in placed.word.chars().enumerate() {
                if ch != placed_ch {
                    continue;
                }

                let (di, dj) = (i as isize, j as isize);
                let (row, col) = match anchor.orientation {
                    Orientation::Horizontal => (anchor_row - di, anchor_col + dj),
                    Orientation::Vertical => (anchor_row + dj, anchor_col - di),
                };
                if !grid.contains(row, col) {
                    continue;
                }

                let candidate = Placement::new(
                    row as usize,
                    col as usize,
                    anchor.orientation.perpendicular(),
                );
                if is_aligned(candidate, anchor, i, j) {
                    candidates.push(candidate);
                }
            }
        }
    }

    candidates
}

/// Does `candidate`'s `word_index`-th cell coincide with `anchor`'s
/// `anchor_index`-th cell?
///
/// Pure arithmetic on the two spans; grid contents are not consulted.
/// Parallel spans never align.
#[must_use]
pub fn is_aligned(candidate: Placement, anchor: Placement, word_index: usize, anchor_index: usize) -> bool {
    let (row, col) = (candidate.row as isize, candidate.col as isize);
    let (anchor_row, anchor_col) = (anchor.row as isize, anchor.col as isize);
    let (wi, ai) = (word_index as isize, anchor_index as isize);

    match (candidate.orientation, anchor.orientation) {
        (Orientation::Horizontal, Orientation::Vertical) => {
            // Crossing cell is (row, anchor_col).
            row == anchor_row + ai && anchor_col == col + wi
        }
        (Orientation::Vertical, Orientation::Horizontal) => {
            // Crossing cell is (anchor_row, col).
            anchor_row == row + wi && col == anchor_col + ai
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placed(text: &str, placement: Placement) -> PlacedWord {
        PlacedWord::new(Word::new(text).unwrap(), placement)
    }

    #[test]
    fn test_crosses_horizontal_word_vertically() {
        let grid = Grid::new(10, 10);
        let cat = placed("CAT", Placement::horizontal(5, 3));
        let candidates = find_intersections(&grid, &Word::new("CAR").unwrap(), &[cat]);

        // 'C' -> C, 'A' -> A; 'R' matches nothing.
        assert_eq!(
            candidates,
            vec![Placement::vertical(5, 3), Placement::vertical(4, 4)]
        );
    }

    #[test]
    fn test_crosses_vertical_word_horizontally() {
        let grid = Grid::new(10, 10);
        let dog = placed("DOG", Placement::vertical(2, 5));
        let candidates = find_intersections(&grid, &Word::new("GOD").unwrap(), &[dog]);

        assert_eq!(
            candidates,
            vec![
                // G(0) on G(2)
                Placement::horizontal(4, 5),
                // O(1) on O(1)
                Placement::horizontal(3, 4),
                // D(2) on D(0)
                Placement::horizontal(2, 3),
            ]
        );
    }

    #[test]
    fn test_out_of_bounds_start_skipped() {
        let grid = Grid::new(6, 6);
        let top = placed("AXE", Placement::horizontal(0, 0));
        // 'E' is the third letter, so the start would sit two rows above the grid.
        let candidates = find_intersections(&grid, &Word::new("BEE").unwrap(), &[top]);
        assert!(candidates.is_empty());
    }

    #[test]
    fn test_repeated_letters_yield_every_pair() {
        let grid = Grid::new(10, 10);
        let anna = placed("ANNA", Placement::horizontal(5, 2));
        let candidates = find_intersections(&grid, &Word::new("NAN").unwrap(), &[anna]);
        // N matches 2 positions twice, A matches 2 positions once.
        assert_eq!(candidates.len(), 6);
        assert!(candidates.iter().all(|p| p.orientation == Orientation::Vertical));
    }

    #[test]
    fn test_no_shared_letters() {
        let grid = Grid::new(10, 10);
        let cat = placed("CAT", Placement::horizontal(5, 3));
        assert!(find_intersections(&grid, &Word::new("DOG").unwrap(), &[cat]).is_empty());
        assert!(find_intersections(&grid, &Word::new("DOG").unwrap(), &[]).is_empty());
    }

    #[test]
    fn test_alignment_check() {
        let anchor = Placement::horizontal(5, 3);
        assert!(is_aligned(Placement::vertical(4, 4), anchor, 1, 1));
        assert!(!is_aligned(Placement::vertical(4, 4), anchor, 0, 1));
        assert!(!is_aligned(Placement::vertical(4, 5), anchor, 1, 1));
        assert!(!is_aligned(Placement::horizontal(5, 3), anchor, 0, 0));

        let anchor = Placement::vertical(2, 5);
        assert!(is_aligned(Placement::horizontal(3, 4), anchor, 1, 1));
        assert!(!is_aligned(Placement::horizontal(3, 4), anchor, 1, 2));
    }
}
