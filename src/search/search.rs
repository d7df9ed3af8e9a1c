//! Exhaustive move search.
//!
//! Every dictionary word is tried at every cell in both directions. Each
//! placement that passes the cheap geometric check and that the hand can
//! supply is laid on the board inside a `Trial`, judged by the rules engine,
//! and rolled back. The best strictly-higher score wins, so among equal
//! scores the first candidate in word, row, column, axis order is kept.

use std::time::Instant;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tracing::{debug, instrument};

use crate::board::Board;
use crate::core::{Axis, Coord, Hand, Tile, BOARD_SIZE};
use crate::dictionary::Dictionary;
use crate::rules::{RulesConfig, RulesEngine};

use super::candidate::MoveCandidate;
use super::config::{BlankScoring, SearchConfig, WordOrder};
use super::inventory::HandInventory;
use super::stats::SearchStats;
use super::trial::Trial;

/// Move search context.
///
/// Owns the configuration and the statistics of the last search. The board
/// is borrowed mutably only for the duration of `best_move` and is returned
/// unchanged.
#[derive(Clone, Debug, Default)]
pub struct MoveSearch {
    config: SearchConfig,
    engine: RulesEngine,
    stats: SearchStats,
}

impl MoveSearch {
    /// Create a new search context.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            engine: RulesEngine::new(config.rules),
            config,
            stats: SearchStats::default(),
        }
    }

    /// The search configuration.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Replace the rules candidates are judged by.
    pub fn set_rules(&mut self, rules: RulesConfig) {
        self.config.rules = rules;
        self.engine = RulesEngine::new(rules);
    }

    /// Statistics of the most recent search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Find the highest-scoring legal placement for `hand`.
    ///
    /// Returns `None` when no placement is accepted. The board is mutated
    /// only inside individual trials and is identical on return.
    #[instrument(skip_all, fields(first_move = first_move, hand = %hand, words = dictionary.len()))]
    pub fn best_move<D: Dictionary>(
        &mut self,
        dictionary: &D,
        board: &mut Board,
        first_move: bool,
        hand: &Hand,
    ) -> Option<MoveCandidate> {
        let start = Instant::now();
        self.stats.reset();

        let inventory = HandInventory::from_hand(hand);
        let board_letters = board.letter_counts();

        let mut words: Vec<&str> = dictionary.words().collect();
        if self.config.word_order == WordOrder::Lexicographic {
            words.sort_unstable();
        }

        let mut best: Option<MoveCandidate> = None;

        for word in words {
            if let Some(limit) = self.config.time_limit {
                if start.elapsed() >= limit {
                    self.stats.timed_out = true;
                    break;
                }
            }

            if self.config.prefilter && !inventory.could_form(word, &board_letters) {
                self.stats.prefiltered += 1;
                continue;
            }
            self.stats.words += 1;

            for anchor in Coord::all() {
                for axis in Axis::ALL {
                    let found = self.try_placement(
                        dictionary, board, &inventory, word, anchor, axis, first_move,
                    );
                    if let Some(candidate) = found {
                        if best.as_ref().map_or(true, |b| candidate.score > b.score) {
                            best = Some(candidate);
                        }
                    }
                }
            }
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;
        debug!(
            trials = self.stats.trials,
            evaluations = self.stats.evaluations,
            accepted = self.stats.accepted,
            timed_out = self.stats.timed_out,
            best = ?best.as_ref().map(ToString::to_string),
            "move search finished"
        );
        best
    }

    /// Simulate one placement and judge it.
    #[allow(clippy::too_many_arguments)]
    fn try_placement<D: Dictionary>(
        &mut self,
        dictionary: &D,
        board: &mut Board,
        inventory: &HandInventory,
        word: &str,
        anchor: Coord,
        axis: Axis,
        first_move: bool,
    ) -> Option<MoveCandidate> {
        self.stats.trials += 1;

        if !board.is_geometrically_placeable(word, anchor, axis, first_move) {
            self.stats.geometric_rejects += 1;
            return None;
        }

        let fixed = axis.fixed(anchor);
        let start = axis.along(anchor);
        let required: SmallVec<[(Coord, char); BOARD_SIZE]> = word
            .chars()
            .enumerate()
            .map(|(i, letter)| (axis.coord(fixed, start + i), letter))
            .filter(|&(coord, _)| !board.is_occupied(coord))
            .collect();

        // Laying a word already on the board is not a move
        if required.is_empty() {
            return None;
        }

        if !inventory.can_supply(required.iter().map(|&(_, letter)| letter)) {
            self.stats.infeasible += 1;
            return None;
        }

        let tiles = self.materialize(inventory, &required);

        let mut trial = Trial::new(board);
        for (&(coord, _), tile) in required.iter().zip(tiles) {
            trial.place(coord, tile).ok()?;
        }

        self.stats.evaluations += 1;
        let result = self
            .engine
            .evaluate(trial.board(), dictionary, trial.placed(), first_move)
            .ok()?;
        self.stats.accepted += 1;

        Some(MoveCandidate {
            word: word.to_string(),
            anchor,
            axis,
            score: result.score,
            main_word: result.main_word,
            tiles_placed: result.tiles_placed,
        })
    }

    /// Tiles standing in for the required letters, in path order.
    ///
    /// Lettered tiles are used first; the rest are blanks. How the blanks are
    /// valued follows `BlankScoring`.
    fn materialize(
        &self,
        inventory: &HandInventory,
        required: &[(Coord, char)],
    ) -> SmallVec<[Tile; BOARD_SIZE]> {
        match self.config.blank_scoring {
            BlankScoring::FaceValue => required.iter().map(|&(_, letter)| Tile::new(letter)).collect(),
            BlankScoring::Zero => {
                let mut used: FxHashMap<char, usize> = FxHashMap::default();
                required
                    .iter()
                    .map(|&(_, letter)| {
                        let n = used.entry(letter.to_ascii_uppercase()).or_insert(0);
                        *n += 1;
                        if *n <= inventory.count(letter) {
                            Tile::new(letter)
                        } else {
                            let mut blank = Tile::blank();
                            blank.assign(letter);
                            blank
                        }
                    })
                    .collect()
            }
        }
    }
}

/// Search with the default configuration.
pub fn best_move<D: Dictionary>(
    dictionary: &D,
    board: &mut Board,
    first_move: bool,
    hand: &Hand,
) -> Option<MoveCandidate> {
    MoveSearch::default().best_move(dictionary, board, first_move, hand)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::PremiumLayout;
    use crate::dictionary::WordSet;

    #[test]
    fn test_zero_tile_candidates_skipped() {
        let words: WordSet = ["CAT"].into_iter().collect();
        let mut board = Board::with_layout(PremiumLayout::plain());
        for (i, letter) in "CAT".chars().enumerate() {
            board.place(Coord::new(7, 7 + i), Tile::new(letter)).unwrap();
        }

        let mut search = MoveSearch::default();
        let found = search.best_move(&words, &mut board, false, &Hand::from_letters("CAT"));

        // CAT across row 7 is already there; only the vertical plays remain
        let found = found.unwrap();
        assert_eq!(found.axis, Axis::Vertical);
        assert!(found.tiles_placed >= 1);
    }

    #[test]
    fn test_set_rules() {
        use crate::rules::ScoringRule;

        let rules = RulesConfig::default().with_scoring(ScoringRule::AdditiveStacking);
        let mut search = MoveSearch::default();
        search.set_rules(rules);
        assert_eq!(search.config().rules, rules);
        assert_eq!(search.engine.config(), &rules);
    }

    #[test]
    fn test_blank_valuation() {
        let words: WordSet = ["ZA"].into_iter().collect();
        let hand = Hand::from_letters("A?");
        let layout = PremiumLayout::plain();

        let mut board = Board::with_layout(layout.clone());
        let face = MoveSearch::default()
            .best_move(&words, &mut board, true, &hand)
            .unwrap();
        assert_eq!(face.score, 11);

        let mut board = Board::with_layout(layout);
        let zero = MoveSearch::new(SearchConfig::default().with_blank_scoring(BlankScoring::Zero))
            .best_move(&words, &mut board, true, &hand)
            .unwrap();
        assert_eq!(zero.score, 1);
    }

    #[test]
    fn test_stats_collected() {
        let words: WordSet = ["CAT", "QI"].into_iter().collect();
        let mut board = Board::new();
        let mut search = MoveSearch::default();
        search.best_move(&words, &mut board, true, &Hand::from_letters("CAT"));

        let stats = search.stats();
        assert_eq!(stats.prefiltered, 1);
        assert_eq!(stats.words, 1);
        assert_eq!(stats.trials, (BOARD_SIZE * BOARD_SIZE * 2) as u64);
        assert!(stats.accepted > 0);
        assert!(stats.evaluations >= stats.accepted);
    }
}
