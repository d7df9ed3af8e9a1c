//! # rust-wordgrid
//!
//! Rules engine and exhaustive move search for a 15×15 tile-placement word
//! game.
//!
//! ## Design Principles
//!
//! 1. **One Judge**: Human plays and automated plays both end in the same
//!    `RulesEngine::evaluate` call. The engine only reads the board.
//!
//! 2. **Scoped Simulation**: The move search lays candidate tiles on the live
//!    board inside a `Trial`, which removes them on every exit path.
//!
//! 3. **Pluggable Words**: Anything implementing `Dictionary` can be used
//!    for membership and enumeration.
//!
//! ## Modules
//!
//! - `core`: Coordinates, axes, tiles, hands, RNG
//! - `board`: The grid, premium layout and geometric queries
//! - `dictionary`: The `Dictionary` trait and `WordSet`
//! - `rules`: Placement legality, word discovery and scoring
//! - `search`: Exhaustive best-move search for automated players
//! - `game`: Tile bag, players and turn flow

pub mod core;
pub mod board;
pub mod dictionary;
pub mod rules;
pub mod search;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    Axis, Coord, BOARD_SIZE, CENTER,
    Tile, PlacedTile, letter_value,
    Hand, HAND_SIZE,
    GameRng, GameRngState,
};

pub use crate::board::{Board, TileRun, Premium, PremiumLayout, LayoutError};

pub use crate::dictionary::{Dictionary, WordSet};

pub use crate::rules::{
    evaluate, MoveResult, Rejection, RulesConfig, RulesEngine, ScoringRule,
    FormedWords,
};

pub use crate::search::{
    best_move, MoveSearch, MoveCandidate, SearchConfig, SearchStats,
    WordOrder, BlankScoring, HandInventory, Trial,
};

pub use crate::game::{Game, GameBuilder, Placement, Player, TileBag, TurnError, TurnOutcome};
