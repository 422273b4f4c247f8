//! # name-crossword
//!
//! Lays out a list of words on a fixed-size grid, crossword style: words
//! cross where their letters match and never run alongside each other.
//!
//! ## Algorithm
//!
//! 1. Sort words longest first.
//! 2. Center the longest word horizontally.
//! 3. For every other word, try each crossing with an already placed word
//!    (in random order), then up to 100 random spots.
//! 4. Words that fit nowhere are dropped and reported as such.
//!
//! Placement is greedy: a committed word is never moved, even when it
//! blocks a later one. With a fixed seed the layout is reproducible.
//!
//! ## Modules
//!
//! - `core`: Configuration, errors, seedable RNG
//! - `grid`: Fixed-size character surface
//! - `words`: Words, placements, name extraction
//! - `placement`: Feasibility check, crossing discovery, the engine
//! - `layout`: Snapshots and text rendering
//!
//! ## Example
//!
//! ```
//! use name_crossword::{extract_first_names, LayoutConfig, PlacementEngine};
//!
//! let names = extract_first_names(["RAJESH PANDEY", "RANJIT ADHIKARI", "SUJAN GYAWALI"]);
//!
//! let mut engine = PlacementEngine::new(&LayoutConfig::new(20, 12).with_seed(7)).unwrap();
//! let report = engine.generate(names);
//!
//! assert_eq!(report.outcomes.len(), 3);
//! assert!(engine.layout().verify().is_ok());
//! ```

pub mod core;
pub mod grid;
pub mod layout;
pub mod placement;
pub mod words;

// Re-export commonly used types
pub use crate::core::{
    CrosswordError, LayoutConfig, LayoutRng, LayoutRngState, Result, RANDOM_PLACEMENT_ATTEMPTS,
};

pub use crate::grid::Grid;

pub use crate::words::{
    extract_first_names, words_from_lines, Orientation, PlacedWord, Placement, Word,
};

pub use crate::placement::{
    can_place, find_intersections, is_aligned, Committed, LayoutReport, PlacementEngine,
    PlacementSource, WordOutcome,
};

pub use crate::layout::{render_grid, render_word_list, Layout};
