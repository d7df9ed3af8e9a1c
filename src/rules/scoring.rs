//! Premium-aware move scoring.
//!
//! Two rules are available:
//!
//! - `WordMultiplier`: each formed word scores the sum of its tiles (placed
//!   tiles on letter premiums multiplied), times the product of the word
//!   premiums under its placed tiles. Word totals are summed.
//! - `AdditiveStacking`: each placed tile on a word premium has its own
//!   value multiplied and adds `multiplier - 1` extra copies of every other
//!   tile of every run it belongs to. Multiple word premiums in the same word
//!   stack additively for the other tiles.
//!
//! The rules agree whenever no formed word covers two word premiums with
//! newly placed tiles. Pre-existing tiles never trigger premiums.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::words::FormedWords;
use crate::board::Board;
use crate::core::{Coord, PlacedTile};

/// How word premiums combine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoringRule {
    /// Per-word multiplier accumulator.
    #[default]
    WordMultiplier,
    /// Extra copies of word tiles per word premium.
    AdditiveStacking,
}

impl ScoringRule {
    /// Total score of the formed words.
    #[must_use]
    pub fn score(self, board: &Board, words: &FormedWords, placed: &[PlacedTile]) -> u32 {
        let placed_set: FxHashSet<Coord> = placed.iter().map(|p| p.coord).collect();
        match self {
            ScoringRule::WordMultiplier => word_multiplier_score(board, words, &placed_set),
            ScoringRule::AdditiveStacking => additive_score(board, words, placed, &placed_set),
        }
    }
}

fn word_multiplier_score(board: &Board, words: &FormedWords, placed: &FxHashSet<Coord>) -> u32 {
    words
        .formed()
        .map(|run| {
            let mut sum = 0;
            let mut multiplier = 1;
            for p in run {
                if placed.contains(&p.coord) {
                    let premium = board.premium_at(p.coord);
                    sum += p.tile.score() * premium.letter_multiplier();
                    multiplier *= premium.word_multiplier();
                } else {
                    sum += p.tile.score();
                }
            }
            sum * multiplier
        })
        .sum()
}

fn additive_score(
    board: &Board,
    words: &FormedWords,
    placed: &[PlacedTile],
    placed_set: &FxHashSet<Coord>,
) -> u32 {
    // A placed tile's own value carries both its letter and word premium.
    let value = |p: &PlacedTile| {
        if placed_set.contains(&p.coord) {
            let premium = board.premium_at(p.coord);
            p.tile.score() * premium.letter_multiplier() * premium.word_multiplier()
        } else {
            p.tile.score()
        }
    };

    let mut total: u32 = words.formed().flat_map(|run| run.iter()).map(value).sum();

    for tile in placed {
        let extra = board.premium_at(tile.coord).word_multiplier() - 1;
        if extra == 0 {
            continue;
        }
        for run in words.runs() {
            if run.iter().any(|p| p.coord == tile.coord) {
                total += run
                    .iter()
                    .filter(|p| p.coord != tile.coord)
                    .map(value)
                    .sum::<u32>()
                    * extra;
            }
        }
    }
    total
}
