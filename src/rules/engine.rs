//! Move legality and scoring.
//!
//! `RulesEngine::evaluate` is the single entry point both the human path and
//! the automated search go through. It only reads the board: the tiles of the
//! current turn must already be placed, and it is the caller's job to commit
//! or roll them back afterwards.
//!
//! Checks run in a fixed order and stop at the first failure:
//!
//! 1. at least one tile placed
//! 2. all placed tiles share a row or a column
//! 3. no empty cell between the outermost placed tiles
//! 4. first move covers the center
//! 5. at least one word of two or more tiles is formed
//! 6. every placed tile belongs to a formed word
//! 7. later moves use at least one tile already on the board
//! 8. every formed word is in the dictionary
//!
//! Then the formed words are scored.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::config::RulesConfig;
use super::error::Rejection;
use super::words::{spell, FormedWords};
use crate::board::Board;
use crate::core::{Axis, Coord, PlacedTile};
use crate::dictionary::Dictionary;

/// Outcome of an accepted placement.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveResult {
    /// Total points scored.
    pub score: u32,
    /// The word along the placement axis.
    pub main_word: String,
    /// Every formed word, main word first.
    pub words: Vec<String>,
    /// Number of tiles placed this turn.
    pub tiles_placed: usize,
}

impl std::fmt::Display for MoveResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} pts)", self.main_word, self.score)
    }
}

/// Validates and scores placements.
///
/// ## Example
///
/// ```
/// use rust_wordgrid::board::Board;
/// use rust_wordgrid::core::{Coord, PlacedTile, Tile};
/// use rust_wordgrid::dictionary::WordSet;
/// use rust_wordgrid::rules::{Rejection, RulesEngine};
///
/// let words: WordSet = ["cat"].into_iter().collect();
/// let mut board = Board::new();
///
/// let placed: Vec<PlacedTile> = "CAT"
///     .chars()
///     .enumerate()
///     .map(|(i, c)| PlacedTile::new(Coord::new(7, 7 + i), Tile::new(c)))
///     .collect();
/// for p in &placed {
///     board.place(p.coord, p.tile).unwrap();
/// }
///
/// let engine = RulesEngine::default();
/// let result = engine.evaluate(&board, &words, &placed, true).unwrap();
/// assert_eq!(result.main_word, "CAT");
/// // (7,7) is a double-word cell
/// assert_eq!(result.score, 10);
///
/// assert_eq!(engine.evaluate(&board, &words, &[], true), Err(Rejection::NoTilesPlaced));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct RulesEngine {
    config: RulesConfig,
}

impl RulesEngine {
    /// Create an engine with the given configuration.
    #[must_use]
    pub fn new(config: RulesConfig) -> Self {
        Self { config }
    }

    /// The engine's configuration.
    #[must_use]
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    /// Decide whether the tiles placed this turn form a legal move.
    ///
    /// `placed` lists only this turn's tiles, each already on `board` at its
    /// coordinate. The board is never modified.
    pub fn evaluate<D: Dictionary>(
        &self,
        board: &Board,
        dictionary: &D,
        placed: &[PlacedTile],
        first_move: bool,
    ) -> Result<MoveResult, Rejection> {
        let result = self.judge(board, dictionary, placed, first_move);
        if let Err(reason) = &result {
            trace!(tiles = placed.len(), first_move, %reason, "placement rejected");
        }
        result
    }

    fn judge<D: Dictionary>(
        &self,
        board: &Board,
        dictionary: &D,
        placed: &[PlacedTile],
        first_move: bool,
    ) -> Result<MoveResult, Rejection> {
        let first = placed.first().ok_or(Rejection::NoTilesPlaced)?;

        if let Some(p) = placed.iter().find(|p| board.tile_at(p.coord) != Some(&p.tile)) {
            return Err(Rejection::PlacementMismatch(p.coord));
        }

        let axis = placement_axis(placed).ok_or(Rejection::NotColinear)?;

        if placed.len() > 1 && !is_gap_free(board, placed, axis) {
            return Err(Rejection::GapInPlacement);
        }

        if first_move && !board.is_occupied(Coord::center()) {
            return Err(Rejection::FirstMoveMissesCenter);
        }

        let words = FormedWords::extract(board, placed, axis);

        if !words.has_words() {
            return Err(Rejection::NoWordFormed);
        }

        if words.uncovered(placed).is_some() {
            return Err(Rejection::DisconnectedTile);
        }

        let placed_set: FxHashSet<Coord> = placed.iter().map(|p| p.coord).collect();
        if !first_move && !words.touches_existing(&placed_set) {
            return Err(Rejection::NotConnectedToExisting);
        }

        let spelled: Vec<String> = words.formed().map(|run| spell(run)).collect();
        if let Some(word) = spelled.iter().find(|w| !dictionary.contains(w)) {
            return Err(Rejection::WordNotInDictionary(word.clone()));
        }

        let score = self.config.scoring.score(board, &words, placed);
        trace!(
            anchor = %first.coord,
            %axis,
            score,
            words = spelled.len(),
            "placement accepted"
        );

        Ok(MoveResult {
            score,
            main_word: spell(&words.main),
            words: spelled,
            tiles_placed: placed.len(),
        })
    }
}

/// Evaluate with the default rules.
pub fn evaluate<D: Dictionary>(
    board: &Board,
    dictionary: &D,
    placed: &[PlacedTile],
    first_move: bool,
) -> Result<MoveResult, Rejection> {
    RulesEngine::default().evaluate(board, dictionary, placed, first_move)
}

/// The axis shared by all placed tiles, or `None` if they share neither.
///
/// A lone tile always reads horizontally; a vertical word through it is
/// then a cross word.
fn placement_axis(placed: &[PlacedTile]) -> Option<Axis> {
    let first = placed.first()?.coord;

    if placed.iter().all(|p| p.coord.row == first.row) {
        Some(Axis::Horizontal)
    } else if placed.iter().all(|p| p.coord.col == first.col) {
        Some(Axis::Vertical)
    } else {
        None
    }
}

/// Whether every cell from the first to the last placed tile is occupied.
fn is_gap_free(board: &Board, placed: &[PlacedTile], axis: Axis) -> bool {
    let fixed = axis.fixed(placed[0].coord);
    let positions = placed.iter().map(|p| axis.along(p.coord));
    let (Some(lo), Some(hi)) = (positions.clone().min(), positions.max()) else {
        return true;
    };
    (lo..=hi).all(|i| board.is_occupied(axis.coord(fixed, i)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Tile;

    fn put(board: &mut Board, row: usize, col: usize, letter: char) -> PlacedTile {
        let placed = PlacedTile::new(Coord::new(row, col), Tile::new(letter));
        board.place(placed.coord, placed.tile).unwrap();
        placed
    }

    #[test]
    fn test_placement_axis() {
        let mut board = Board::new();
        let a = put(&mut board, 4, 4, 'A');
        let b = put(&mut board, 4, 6, 'B');
        let c = put(&mut board, 6, 4, 'C');

        assert_eq!(placement_axis(&[a, b]), Some(Axis::Horizontal));
        assert_eq!(placement_axis(&[a, c]), Some(Axis::Vertical));
        assert_eq!(placement_axis(&[b, c]), None);
        assert_eq!(placement_axis(&[a]), Some(Axis::Horizontal));
    }

    #[test]
    fn test_single_tile_reads_horizontally() {
        let mut board = Board::new();
        put(&mut board, 3, 3, 'A');
        let below = put(&mut board, 4, 3, 'T');
        assert_eq!(placement_axis(&[below]), Some(Axis::Horizontal));

        let words = FormedWords::extract(&board, &[below], Axis::Horizontal);
        assert_eq!(spell(&words.main), "T");
        assert!(!words.main_is_word());
        assert_eq!(words.formed().map(|run| spell(run)).collect::<Vec<_>>(), vec!["AT"]);
    }

    #[test]
    fn test_uncovered_tile_reports_no_word() {
        let mut board = Board::new();
        let lone = put(&mut board, 7, 7, 'A');
        let words: crate::dictionary::WordSet = ["AT"].into_iter().collect();

        let formed = FormedWords::extract(&board, &[lone], Axis::Horizontal);
        assert_eq!(formed.uncovered(&[lone]), Some(lone.coord));
        assert_eq!(evaluate(&board, &words, &[lone], true), Err(Rejection::NoWordFormed));
    }

    #[test]
    fn test_gap_free() {
        let mut board = Board::new();
        let a = put(&mut board, 2, 2, 'A');
        let c = put(&mut board, 2, 4, 'C');
        assert!(!is_gap_free(&board, &[a, c], Axis::Horizontal));

        put(&mut board, 2, 3, 'B');
        assert!(is_gap_free(&board, &[a, c], Axis::Horizontal));
    }

    #[test]
    fn test_mismatch_detected() {
        let board = Board::new();
        let ghost = PlacedTile::new(Coord::new(7, 7), Tile::new('A'));
        let words: crate::dictionary::WordSet = ["a"].into_iter().collect();
        assert_eq!(
            evaluate(&board, &words, &[ghost], true),
            Err(Rejection::PlacementMismatch(Coord::new(7, 7)))
        );
    }
}
