//! Error type for the fallible outer surface of the crate.
//!
//! The placement core itself never fails: feasibility and commit return
//! `bool`, intersection discovery returns an empty list, and words that
//! cannot be placed are reported as dropped. Errors only arise when
//! building configs and words, or when decoding a saved layout.

use thiserror::Error;

/// Errors raised while configuring a layout or handling snapshots.
#[derive(Debug, Error)]
pub enum CrosswordError {
    /// A grid needs at least one row and one column.
    #[error("grid dimensions must be positive, got {width}x{height}")]
    EmptyGrid { width: usize, height: usize },

    /// Decoded grid storage does not match its stated dimensions.
    #[error("grid storage does not match its {width}x{height} dimensions")]
    MalformedGrid { width: usize, height: usize },

    /// Word text was empty after trimming.
    #[error("word must contain at least one character")]
    EmptyWord,

    /// Word text contained whitespace.
    #[error("word {0:?} contains whitespace")]
    WordWhitespace(String),

    /// A placed word disagrees with the grid it was decoded with.
    #[error("placed word {word:?} does not match the grid cells it covers")]
    InconsistentLayout { word: String },

    /// Snapshot encoding or decoding failed.
    #[error("snapshot codec error: {0}")]
    Codec(#[from] bincode::Error),
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, CrosswordError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = CrosswordError::EmptyGrid { width: 0, height: 4 };
        assert_eq!(err.to_string(), "grid dimensions must be positive, got 0x4");

        let err = CrosswordError::WordWhitespace("AN NA".into());
        assert_eq!(err.to_string(), "word \"AN NA\" contains whitespace");
    }
}
