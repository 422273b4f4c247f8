//! Word placement: feasibility, crossing discovery and layout orchestration.
//!
//! ## Key Types
//!
//! - `PlacementEngine`: Owns the grid and committed words for one run
//! - `LayoutReport`: Per-word outcome of `PlacementEngine::generate`
//!
//! The free functions `can_place`, `find_intersections` and `is_aligned`
//! work on a borrowed grid and are what the engine delegates to.

pub mod engine;
pub mod feasibility;
pub mod intersections;
pub mod outcome;

pub use engine::PlacementEngine;
pub use feasibility::can_place;
pub use intersections::{find_intersections, is_aligned};
pub use outcome::{Committed, LayoutReport, PlacementSource, WordOutcome};
