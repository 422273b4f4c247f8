//! Finished layouts: the grid plus the words on it.

use serde::{Deserialize, Serialize};

use crate::core::error::{CrosswordError, Result};
use crate::grid::Grid;
use crate::words::{Orientation, PlacedWord, Placement};

/// Final grid and committed words, in commit order.
///
/// Can be saved with [`Layout::to_bytes`] and restored with
/// [`Layout::from_bytes`]; restoring re-checks that every word agrees
/// with the grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    /// Seed that produced this layout.
    pub seed: u64,
    pub grid: Grid,
    pub words: Vec<PlacedWord>,
}

impl Layout {
    #[must_use]
    pub fn new(seed: u64, grid: Grid, words: Vec<PlacedWord>) -> Self {
        Self { seed, grid, words }
    }

    /// Check that every word lies inside the grid and that each cell it
    /// covers holds its character.
    pub fn verify(&self) -> Result<()> {
        if !self.grid.is_well_formed() {
            return Err(CrosswordError::MalformedGrid {
                width: self.grid.width(),
                height: self.grid.height(),
            });
        }

        for placed in &self.words {
            let consistent = span_fits(&self.grid, placed)
                && placed
                    .cells()
                    .all(|(row, col, ch)| self.grid.get(row, col) == Some(ch));
            if !consistent {
                return Err(CrosswordError::InconsistentLayout {
                    word: placed.word.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Encode as a compact binary snapshot.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a snapshot written by [`Layout::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let layout: Layout = bincode::deserialize(bytes)?;
        layout.verify()?;
        Ok(layout)
    }
}

/// Does the whole span lie inside the grid? Decoded coordinates are
/// untrusted, so the end is computed without overflow.
fn span_fits(grid: &Grid, placed: &PlacedWord) -> bool {
    let Placement {
        row,
        col,
        orientation,
    } = placed.placement;
    if row >= grid.height() || col >= grid.width() {
        return false;
    }
    let (start, limit) = match orientation {
        Orientation::Horizontal => (col, grid.width()),
        Orientation::Vertical => (row, grid.height()),
    };
    start
        .checked_add(placed.word.len())
        .is_some_and(|end| end <= limit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::words::Word;

    fn sample() -> Layout {
        let mut grid = Grid::new(6, 4);
        let word = Word::new("NIGAM").unwrap();
        let placement = Placement::horizontal(2, 0);
        for (offset, ch) in word.chars().enumerate() {
            let (r, c) = placement.cell_at(offset);
            grid.set(r, c, ch);
        }
        Layout::new(5, grid, vec![PlacedWord::new(word, placement)])
    }

    #[test]
    fn test_verify_accepts_consistent_layout() {
        assert!(sample().verify().is_ok());
    }

    #[test]
    fn test_verify_rejects_mismatched_cell() {
        let mut layout = sample();
        layout.grid.set(2, 1, 'X');
        assert!(matches!(
            layout.verify(),
            Err(CrosswordError::InconsistentLayout { word }) if word == "NIGAM"
        ));
    }

    #[test]
    fn test_verify_rejects_word_outside_grid() {
        let mut layout = sample();
        layout.words[0].placement = Placement::horizontal(2, 3);
        assert!(layout.verify().is_err());
    }

    #[test]
    fn test_bytes_restore() {
        let layout = sample();
        let bytes = layout.to_bytes().unwrap();
        assert_eq!(Layout::from_bytes(&bytes).unwrap(), layout);
    }

    /// Same field order as `Layout`, so bincode output decodes as one.
    #[derive(Serialize)]
    struct RawLayout {
        seed: u64,
        grid: RawGrid,
        words: Vec<PlacedWord>,
    }

    #[derive(Serialize)]
    struct RawGrid {
        width: usize,
        height: usize,
        cells: Vec<Option<char>>,
    }

    #[test]
    fn test_overflowing_dimensions_rejected() {
        let raw = RawLayout {
            seed: 0,
            grid: RawGrid {
                width: 1 << (usize::BITS - 1),
                height: 2,
                cells: Vec::new(),
            },
            words: Vec::new(),
        };
        let bytes = bincode::serialize(&raw).unwrap();

        assert!(matches!(
            Layout::from_bytes(&bytes),
            Err(CrosswordError::MalformedGrid { height: 2, .. })
        ));
    }

    #[test]
    fn test_word_past_usize_max_rejected() {
        let mut layout = sample();
        layout.words[0].placement = Placement::vertical(usize::MAX, 0);
        let bytes = layout.to_bytes().unwrap();

        assert!(matches!(
            Layout::from_bytes(&bytes),
            Err(CrosswordError::InconsistentLayout { .. })
        ));

        layout.words[0].placement = Placement::horizontal(0, usize::MAX);
        assert!(layout.verify().is_err());
    }

    #[test]
    fn test_corrupt_bytes_rejected() {
        assert!(matches!(
            Layout::from_bytes(&[1, 2, 3]),
            Err(CrosswordError::Codec(_))
        ));
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["seed"], 5);
        assert_eq!(json["words"][0]["word"], "NIGAM");
        assert_eq!(json["words"][0]["placement"]["orientation"], "horizontal");
    }
}
