//! Placement legality and scoring.
//!
//! The rules engine judges tiles that are already on the board:
//! - `words`: main and cross word discovery
//! - `scoring`: premium-aware scoring rules
//! - `engine`: the ordered legality checks and the final score
//!
//! The engine never mutates the board. Whoever placed the tiles commits or
//! removes them afterwards.

pub mod config;
pub mod engine;
pub mod error;
pub mod scoring;
pub mod words;

pub use config::RulesConfig;
pub use engine::{evaluate, MoveResult, RulesEngine};
pub use error::Rejection;
pub use scoring::ScoringRule;
pub use words::{spell, FormedWords};
