//! Automated move search.
//!
//! Brute force over dictionary × board × direction:
//! - `inventory`: hand letter tallies and feasibility
//! - `trial`: scoped place/evaluate/remove on the live board
//! - `search`: the search loop and tie-breaking
//!
//! ## Example
//!
//! ```
//! use rust_wordgrid::board::Board;
//! use rust_wordgrid::core::Hand;
//! use rust_wordgrid::dictionary::WordSet;
//! use rust_wordgrid::search::{MoveSearch, SearchConfig};
//!
//! let words: WordSet = ["cat", "axe"].into_iter().collect();
//! let mut board = Board::new();
//! let hand = Hand::from_letters("CATAXE");
//!
//! let mut search = MoveSearch::new(SearchConfig::default());
//! let best = search.best_move(&words, &mut board, true, &hand).unwrap();
//! assert_eq!(best.word, "AXE");
//! assert!(board.is_empty());
//! ```

pub mod candidate;
pub mod config;
pub mod inventory;
#[allow(clippy::module_inception)]
pub mod search;
pub mod stats;
pub mod trial;

pub use candidate::MoveCandidate;
pub use config::{BlankScoring, SearchConfig, WordOrder};
pub use inventory::HandInventory;
pub use search::{best_move, MoveSearch};
pub use stats::SearchStats;
pub use trial::Trial;
