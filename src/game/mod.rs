//! Game flow around the rules engine and the move search.
//!
//! - `bag`: the shuffled tile supply
//! - `player`: seats, hands and scores
//! - `game`: turns, exchanges, passes and the end of the game
//!
//! ## Example
//!
//! ```
//! use rust_wordgrid::dictionary::WordSet;
//! use rust_wordgrid::game::{GameBuilder, TurnOutcome};
//! use rust_wordgrid::search::MoveSearch;
//!
//! let words = WordSet::from_text("at\nta\ntea\neat\nate\nto\nno\non");
//! let mut game = GameBuilder::new().automated("one").automated("two").build(7);
//! let mut search = MoveSearch::default();
//!
//! let outcome = game.take_automated_turn(&words, &mut search).unwrap();
//! assert!(matches!(
//!     outcome,
//!     TurnOutcome::Played(_) | TurnOutcome::Exchanged
//! ));
//! assert_eq!(game.current_index(), 1);
//! ```

pub mod bag;
pub mod error;
#[allow(clippy::module_inception)]
pub mod game;
pub mod player;

pub use bag::TileBag;
pub use error::TurnError;
pub use game::{Game, GameBuilder, Placement, TurnOutcome};
pub use player::Player;
