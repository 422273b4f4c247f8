//! Layout configuration.
//!
//! Callers pick the grid surface and, optionally, a seed. Everything else
//! about the algorithm is fixed.

use serde::{Deserialize, Serialize};

use super::error::{CrosswordError, Result};

/// Random `(row, col, orientation)` tries per word once intersections fail.
pub const RANDOM_PLACEMENT_ATTEMPTS: usize = 100;

/// Grid dimensions and RNG seed for one layout run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Number of columns.
    pub width: usize,

    /// Number of rows.
    pub height: usize,

    /// Seed for the layout RNG.
    /// `None` draws a fresh seed per run (reported back in the result).
    pub seed: Option<u64>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            width: 50,
            height: 30,
            seed: None,
        }
    }
}

impl LayoutConfig {
    /// Create a config for a `width × height` grid.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            seed: None,
        }
    }

    /// Fix the RNG seed for reproducible layouts.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check that the grid has at least one cell.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(CrosswordError::EmptyGrid {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LayoutConfig::default();
        assert_eq!(config.width, 50);
        assert_eq!(config.height, 30);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = LayoutConfig::new(60, 35).with_seed(123);

        assert_eq!(config.width, 60);
        assert_eq!(config.height, 35);
        assert_eq!(config.seed, Some(123));
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert!(matches!(
            LayoutConfig::new(0, 10).validate(),
            Err(CrosswordError::EmptyGrid { width: 0, height: 10 })
        ));
        assert!(LayoutConfig::new(10, 0).validate().is_err());
    }

    #[test]
    fn test_serialization() {
        let config = LayoutConfig::new(12, 8).with_seed(9);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: LayoutConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
