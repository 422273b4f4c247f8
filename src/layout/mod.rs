//! Finished layouts and how they are shown.
//!
//! - `Layout`: grid + committed words, with binary snapshots
//! - `render_grid` / `render_word_list`: the text output of the CLI

pub mod render;
pub mod snapshot;

pub use render::{render_grid, render_word_list};
pub use snapshot::Layout;
