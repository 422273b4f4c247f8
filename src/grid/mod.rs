//! Grid storage.
//!
//! A fixed-size character surface with bounds-aware reads and writes.
//! It owns no placement logic; see `placement` for that.

pub mod surface;

pub use surface::Grid;
