//! Core building blocks: configuration, errors and the seedable RNG.
//!
//! Everything here is independent of the grid and placement logic.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{LayoutConfig, RANDOM_PLACEMENT_ATTEMPTS};
pub use error::{CrosswordError, Result};
pub use rng::{LayoutRng, LayoutRngState};
