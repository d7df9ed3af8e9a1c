//! Board state and premium layout.
//!
//! - `Board`: cell occupancy and geometric queries (bounds, neighbours,
//!   contiguous runs, placement pre-filter)
//! - `PremiumLayout`: the fixed premium of every cell, with import from a
//!   grid of integer codes

pub mod grid;
pub mod premium;

pub use grid::{Board, TileRun};
pub use premium::{LayoutError, Premium, PremiumLayout};
