//! Core value types: coordinates, axes, tiles, hands, RNG.
//!
//! Everything here is plain data with no knowledge of words or scoring.
//! The board, rules engine and search build on these types.

pub mod coord;
pub mod hand;
pub mod rng;
pub mod tile;

pub use coord::{Axis, Coord, BOARD_SIZE, CENTER};
pub use hand::{Hand, HAND_SIZE};
pub use rng::{GameRng, GameRngState};
pub use tile::{letter_value, PlacedTile, Tile};
