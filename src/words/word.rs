//! Words and where they sit on the grid.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::error::{CrosswordError, Result};

/// An uppercase token to be laid out.
///
/// Characters are kept inline for names of typical length, so the
/// pairwise character scans in intersection discovery never chase a
/// heap pointer.
///
/// ```
/// use name_crossword::words::Word;
///
/// let word = Word::new("Milan").unwrap();
/// assert_eq!(word.as_str(), "MILAN");
/// assert_eq!(word.len(), 5);
/// assert!(Word::new("  ").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Word {
    text: String,
    chars: SmallVec<[char; 16]>,
}

impl Word {
    /// Build a word, uppercasing the input.
    ///
    /// Surrounding whitespace is trimmed; empty text or inner whitespace
    /// is rejected.
    pub fn new(text: impl AsRef<str>) -> Result<Self> {
        let trimmed = text.as_ref().trim();
        if trimmed.is_empty() {
            return Err(CrosswordError::EmptyWord);
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(CrosswordError::WordWhitespace(trimmed.to_string()));
        }

        let text = trimmed.to_uppercase();
        let chars = text.chars().collect();
        Ok(Self { text, chars })
    }

    /// The uppercase text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of grid cells the word spans.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false: words have at least one character.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Characters in reading order.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }

    /// Character at `index`.
    #[must_use]
    pub fn char_at(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }
}

impl TryFrom<String> for Word {
    type Error = CrosswordError;

    fn try_from(text: String) -> Result<Self> {
        Self::new(text)
    }
}

impl From<Word> for String {
    fn from(word: Word) -> Self {
        word.text
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Direction of travel for a placed word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Left to right along a row.
    Horizontal,
    /// Top to bottom along a column.
    Vertical,
}

impl Orientation {
    /// Both orientations, for uniform random choice.
    pub const ALL: [Orientation; 2] = [Orientation::Horizontal, Orientation::Vertical];

    /// The crossing direction.
    #[must_use]
    pub const fn perpendicular(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Orientation::Horizontal => f.write_str("horizontal"),
            Orientation::Vertical => f.write_str("vertical"),
        }
    }
}

/// Start cell and direction of a (candidate or committed) word span.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    pub row: usize,
    pub col: usize,
    pub orientation: Orientation,
}

impl Placement {
    #[must_use]
    pub const fn new(row: usize, col: usize, orientation: Orientation) -> Self {
        Self {
            row,
            col,
            orientation,
        }
    }

    #[must_use]
    pub const fn horizontal(row: usize, col: usize) -> Self {
        Self::new(row, col, Orientation::Horizontal)
    }

    #[must_use]
    pub const fn vertical(row: usize, col: usize) -> Self {
        Self::new(row, col, Orientation::Vertical)
    }

    /// Cell `offset` steps from the start in the direction of travel.
    #[must_use]
    pub const fn cell_at(self, offset: usize) -> (usize, usize) {
        match self.orientation {
            Orientation::Horizontal => (self.row, self.col + offset),
            Orientation::Vertical => (self.row + offset, self.col),
        }
    }

    /// All cells of a span of `len` characters.
    pub fn cells(self, len: usize) -> impl Iterator<Item = (usize, usize)> {
        (0..len).map(move |offset| self.cell_at(offset))
    }
}

/// A word committed to the grid. Never moved or removed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedWord {
    pub word: Word,
    pub placement: Placement,
}

impl PlacedWord {
    #[must_use]
    pub fn new(word: Word, placement: Placement) -> Self {
        Self { word, placement }
    }

    /// `(row, col, char)` for every cell of the span.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, char)> + '_ {
        self.word.chars().enumerate().map(move |(offset, ch)| {
            let (row, col) = self.placement.cell_at(offset);
            (row, col, ch)
        })
    }

    /// Does the span include this cell?
    #[must_use]
    pub fn covers(&self, row: usize, col: usize) -> bool {
        self.placement
            .cells(self.word.len())
            .any(|cell| cell == (row, col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_uppercases_and_trims() {
        let word = Word::new("  rajat ").unwrap();
        assert_eq!(word.as_str(), "RAJAT");
        assert_eq!(word.len(), 5);
        assert_eq!(word.char_at(0), Some('R'));
        assert_eq!(word.char_at(5), None);
        assert!(!word.is_empty());
    }

    #[test]
    fn test_word_rejects_empty_and_whitespace() {
        assert!(matches!(Word::new(""), Err(CrosswordError::EmptyWord)));
        assert!(matches!(Word::new(" \t"), Err(CrosswordError::EmptyWord)));
        assert!(matches!(
            Word::new("RAM CHANDRA"),
            Err(CrosswordError::WordWhitespace(_))
        ));
    }

    #[test]
    fn test_word_serializes_as_string() {
        let word = Word::new("sneha").unwrap();
        let json = serde_json::to_string(&word).unwrap();
        assert_eq!(json, "\"SNEHA\"");

        let back: Word = serde_json::from_str(&json).unwrap();
        assert_eq!(back, word);

        assert!(serde_json::from_str::<Word>("\"\"").is_err());
    }

    #[test]
    fn test_orientation() {
        assert_eq!(Orientation::Horizontal.perpendicular(), Orientation::Vertical);
        assert_eq!(Orientation::Vertical.perpendicular(), Orientation::Horizontal);
        assert_eq!(Orientation::Horizontal.to_string(), "horizontal");
        assert_eq!(
            serde_json::to_string(&Orientation::Vertical).unwrap(),
            "\"vertical\""
        );
    }

    #[test]
    fn test_placement_cells() {
        let across: Vec<_> = Placement::horizontal(2, 3).cells(3).collect();
        assert_eq!(across, vec![(2, 3), (2, 4), (2, 5)]);

        let down: Vec<_> = Placement::vertical(2, 3).cells(3).collect();
        assert_eq!(down, vec![(2, 3), (3, 3), (4, 3)]);
    }

    #[test]
    fn test_placed_word_cells() {
        let placed = PlacedWord::new(Word::new("CAT").unwrap(), Placement::vertical(1, 4));
        let cells: Vec<_> = placed.cells().collect();
        assert_eq!(cells, vec![(1, 4, 'C'), (2, 4, 'A'), (3, 4, 'T')]);
        assert!(placed.covers(3, 4));
        assert!(!placed.covers(4, 4));
        assert!(!placed.covers(1, 5));
    }
}
