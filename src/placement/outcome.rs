//! Per-word results of a layout run.

use serde::{Deserialize, Serialize};

use crate::words::{Placement, Word};

/// Which phase of the layout committed a word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlacementSource {
    /// Longest word, centered horizontally.
    Seed,
    /// Crossing an already placed word on a shared letter.
    Intersection,
    /// Random search; `attempt` is 1-based.
    RandomFallback { attempt: usize },
}

/// Where and how a word was committed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Committed {
    pub placement: Placement,
    pub source: PlacementSource,
}

/// Result for one input word. `committed == None` means the word was dropped.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordOutcome {
    pub word: Word,
    pub committed: Option<Committed>,
}

impl WordOutcome {
    pub(crate) fn placed(word: Word, placement: Placement, source: PlacementSource) -> Self {
        Self {
            word,
            committed: Some(Committed { placement, source }),
        }
    }

    pub(crate) fn dropped(word: Word) -> Self {
        Self {
            word,
            committed: None,
        }
    }

    #[must_use]
    pub fn is_placed(&self) -> bool {
        self.committed.is_some()
    }

    #[must_use]
    pub fn placement(&self) -> Option<Placement> {
        self.committed.map(|c| c.placement)
    }

    #[must_use]
    pub fn source(&self) -> Option<PlacementSource> {
        self.committed.map(|c| c.source)
    }
}

/// Outcomes of one `generate` call, in processing (longest-first) order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutReport {
    /// Seed of the RNG that drove the run.
    pub seed: u64,
    pub outcomes: Vec<WordOutcome>,
}

impl LayoutReport {
    /// Outcomes of words that made it onto the grid.
    pub fn placed(&self) -> impl Iterator<Item = &WordOutcome> {
        self.outcomes.iter().filter(|o| o.is_placed())
    }

    /// Words that could not be placed.
    pub fn dropped(&self) -> impl Iterator<Item = &Word> {
        self.outcomes
            .iter()
            .filter(|o| !o.is_placed())
            .map(|o| &o.word)
    }

    #[must_use]
    pub fn placed_count(&self) -> usize {
        self.placed().count()
    }

    /// Outcome for a word, matched after the same normalization as [`Word::new`].
    #[must_use]
    pub fn outcome_for(&self, text: &str) -> Option<&WordOutcome> {
        let word = Word::new(text).ok()?;
        self.outcomes.iter().find(|o| o.word == word)
    }
}
