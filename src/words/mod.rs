//! Words, orientations and placements, plus input extraction.

pub mod extract;
pub mod word;

pub use extract::{extract_first_names, words_from_lines, TITLE_PREFIXES};
pub use word::{Orientation, PlacedWord, Placement, Word};
