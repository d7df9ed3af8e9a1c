//! Word discovery for a placement.
//!
//! The main word is the run through the first placed tile along the
//! placement axis. Cross words are the perpendicular runs through each
//! placed tile. Only runs of two or more tiles are formed words.

use rustc_hash::FxHashSet;

use crate::board::{Board, TileRun};
use crate::core::{Axis, Coord, PlacedTile};

/// Every run touched by a placement.
#[derive(Clone, Debug)]
pub struct FormedWords {
    /// Placement axis.
    pub axis: Axis,
    /// Run through the first placed tile along `axis`. May be a single tile.
    pub main: TileRun,
    /// Perpendicular runs of length ≥ 2, in placed-tile order.
    pub cross: Vec<TileRun>,
}

impl FormedWords {
    /// Collect the main run and cross words for `placed` on `board`.
    ///
    /// `placed` must be non-empty and already on the board.
    #[must_use]
    pub fn extract(board: &Board, placed: &[PlacedTile], axis: Axis) -> Self {
        let main = placed
            .first()
            .map(|p| board.word_extent(p.coord, axis))
            .unwrap_or_default();

        let cross = placed
            .iter()
            .map(|p| board.word_extent(p.coord, axis.perpendicular()))
            .filter(|run| run.len() >= 2)
            .collect();

        Self { axis, main, cross }
    }

    /// Whether the main run counts as a word.
    #[must_use]
    pub fn main_is_word(&self) -> bool {
        self.main.len() >= 2
    }

    /// Formed words: the main word if long enough, then the cross words.
    pub fn formed(&self) -> impl Iterator<Item = &TileRun> {
        self.main_is_word()
            .then_some(&self.main)
            .into_iter()
            .chain(self.cross.iter())
    }

    /// The main run regardless of length, then the cross words.
    pub fn runs(&self) -> impl Iterator<Item = &TileRun> {
        std::iter::once(&self.main).chain(self.cross.iter())
    }

    /// Whether at least one word was formed.
    #[must_use]
    pub fn has_words(&self) -> bool {
        self.formed().next().is_some()
    }

    /// First placed tile that belongs to no formed word.
    #[must_use]
    pub fn uncovered(&self, placed: &[PlacedTile]) -> Option<Coord> {
        let covered: FxHashSet<Coord> = self
            .formed()
            .flat_map(|run| run.iter().map(|p| p.coord))
            .collect();
        placed
            .iter()
            .map(|p| p.coord)
            .find(|c| !covered.contains(c))
    }

    /// Whether any tile in a formed word was already on the board.
    #[must_use]
    pub fn touches_existing(&self, placed: &FxHashSet<Coord>) -> bool {
        self.formed()
            .flat_map(|run| run.iter())
            .any(|p| !placed.contains(&p.coord))
    }
}

/// Spell a run as an uppercase string. Unassigned blanks read as `?`.
#[must_use]
pub fn spell(run: &[PlacedTile]) -> String {
    run.iter().map(|p| p.tile.letter().unwrap_or('?')).collect()
}
