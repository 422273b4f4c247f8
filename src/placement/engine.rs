//! Greedy placement engine.
//!
//! Owns the grid, the committed words and the RNG for one layout run.
//! Words are placed longest first: the longest is centered, every other
//! word tries to cross an existing word and otherwise falls back to a
//! bounded random search. Committed words are never moved.

use std::cmp::Reverse;

use log::{debug, info, trace};
use rustc_hash::FxHashMap;

use crate::core::{LayoutConfig, LayoutRng, LayoutRngState, Result, RANDOM_PLACEMENT_ATTEMPTS};
use crate::grid::Grid;
use crate::layout::Layout;
use crate::words::{Orientation, PlacedWord, Placement, Word};

use super::feasibility;
use super::intersections;
use super::outcome::{LayoutReport, PlacementSource, WordOutcome};

/// Layout state for one run.
///
/// ## Usage
///
/// ```
/// use name_crossword::core::LayoutConfig;
/// use name_crossword::placement::PlacementEngine;
/// use name_crossword::words::{Placement, Word};
///
/// let config = LayoutConfig::new(10, 10).with_seed(42);
/// let mut engine = PlacementEngine::new(&config).unwrap();
///
/// let words = ["CAT", "CAR"].map(|w| Word::new(w).unwrap());
/// let report = engine.generate(words);
///
/// assert_eq!(report.placed_count(), 2);
/// assert_eq!(engine.position_of("CAT"), Some(Placement::horizontal(5, 3)));
/// ```
#[derive(Clone, Debug)]
pub struct PlacementEngine {
    grid: Grid,

    /// Committed words in commit order.
    placed: Vec<PlacedWord>,

    /// Word -> placement, kept in step with `placed`.
    positions: FxHashMap<Word, Placement>,

    rng: LayoutRng,
}

impl PlacementEngine {
    /// Create an engine for the configured grid.
    ///
    /// Uses the configured seed, or a fresh one when none is set.
    pub fn new(config: &LayoutConfig) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => LayoutRng::new(seed),
            None => LayoutRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }

    /// Create an engine driven by the given RNG. The config seed is ignored.
    pub fn with_rng(config: &LayoutConfig, rng: LayoutRng) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            grid: Grid::new(config.width, config.height),
            placed: Vec::new(),
            positions: FxHashMap::default(),
            rng,
        })
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Committed words in commit order.
    #[must_use]
    pub fn placed_words(&self) -> &[PlacedWord] {
        &self.placed
    }

    /// Where a committed word sits, matched case-insensitively.
    #[must_use]
    pub fn position_of(&self, text: &str) -> Option<Placement> {
        let word = Word::new(text).ok()?;
        self.positions.get(&word).copied()
    }

    /// Seed of the RNG driving this engine.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Current RNG position, for checkpointing a run mid-way.
    #[must_use]
    pub fn rng_state(&self) -> LayoutRngState {
        self.rng.state()
    }

    /// Snapshot of the grid and committed words.
    #[must_use]
    pub fn layout(&self) -> Layout {
        Layout::new(self.rng.seed(), self.grid.clone(), self.placed.clone())
    }

    /// Would `word` fit at `placement` on the current grid?
    #[must_use]
    pub fn can_place(&self, word: &Word, placement: Placement) -> bool {
        feasibility::can_place(&self.grid, word, placement)
    }

    /// Commit `word` at `placement` if it is feasible.
    ///
    /// All-or-nothing: on `false` the grid is untouched.
    pub fn place(&mut self, word: &Word, placement: Placement) -> bool {
        if !self.can_place(word, placement) {
            return false;
        }

        for (offset, ch) in word.chars().enumerate() {
            let (row, col) = placement.cell_at(offset);
            self.grid.set(row, col, ch);
        }

        debug!(
            "placed {} at ({}, {}) {}",
            word, placement.row, placement.col, placement.orientation
        );
        self.placed.push(PlacedWord::new(word.clone(), placement));
        self.positions.insert(word.clone(), placement);
        true
    }

    /// Crossing candidates for `word` against every committed word.
    #[must_use]
    pub fn find_intersections(&self, word: &Word) -> Vec<Placement> {
        intersections::find_intersections(&self.grid, word, &self.placed)
    }

    /// Lay out `words` on the grid.
    ///
    /// Words are processed longest first (ties keep input order). The first
    /// is centered horizontally; each later word tries its shuffled crossing
    /// candidates, then up to [`RANDOM_PLACEMENT_ATTEMPTS`] random spots.
    /// Words that fit nowhere are reported as dropped.
    ///
    /// Meant to be called once per engine; a second call keeps building on
    /// the existing grid.
    pub fn generate(&mut self, words: impl IntoIterator<Item = Word>) -> LayoutReport {
        let mut words: Vec<Word> = words.into_iter().collect();
        words.sort_by_key(|w| Reverse(w.len()));

        let mut outcomes = Vec::with_capacity(words.len());
        let mut words = words.into_iter();

        if let Some(first) = words.next() {
            outcomes.push(self.place_seed(first));
        }
        for word in words {
            outcomes.push(self.place_next(word));
        }

        let report = LayoutReport {
            seed: self.rng.seed(),
            outcomes,
        };
        info!(
            "layout done: {} of {} words placed (seed {})",
            report.placed_count(),
            report.outcomes.len(),
            report.seed
        );
        report
    }

    fn place_seed(&mut self, word: Word) -> WordOutcome {
        let row = self.grid.height() / 2;
        let centered = self
            .grid
            .width()
            .checked_sub(word.len())
            .map(|slack| Placement::horizontal(row, slack / 2));

        match centered {
            Some(placement) if self.place(&word, placement) => {
                WordOutcome::placed(word, placement, PlacementSource::Seed)
            }
            Some(placement) => {
                info!(
                    "dropped {word}: centered spot ({}, {}) is blocked, no seed placed",
                    placement.row, placement.col
                );
                WordOutcome::dropped(word)
            }
            None => {
                info!("dropped {word}: longer than the grid is wide, no seed placed");
                WordOutcome::dropped(word)
            }
        }
    }

    fn place_next(&mut self, word: Word) -> WordOutcome {
        let mut candidates = self.find_intersections(&word);
        self.rng.shuffle(&mut candidates);
        trace!("{word}: {} crossing candidates", candidates.len());

        for placement in candidates {
            if self.place(&word, placement) {
                return WordOutcome::placed(word, placement, PlacementSource::Intersection);
            }
        }

        debug!("{word}: no crossing fits, trying random placement");
        for attempt in 1..=RANDOM_PLACEMENT_ATTEMPTS {
            let placement = self.random_placement();
            if self.place(&word, placement) {
                return WordOutcome::placed(
                    word,
                    placement,
                    PlacementSource::RandomFallback { attempt },
                );
            }
        }

        info!("dropped {word}: no fit after {RANDOM_PLACEMENT_ATTEMPTS} random attempts");
        WordOutcome::dropped(word)
    }

    fn random_placement(&mut self) -> Placement {
        let row = self.rng.gen_range_usize(0..self.grid.height());
        let col = self.rng.gen_range_usize(0..self.grid.width());
        let orientation = self
            .rng
            .choose(&Orientation::ALL)
            .copied()
            .unwrap_or(Orientation::Horizontal);
        Placement::new(row, col, orientation)
    }
}
