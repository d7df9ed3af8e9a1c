//! Scoped simulated placement.

use smallvec::SmallVec;

use crate::board::Board;
use crate::core::{Coord, PlacedTile, Tile, BOARD_SIZE};

/// Temporary tiles on a board, removed when the trial is dropped.
///
/// Every exit path, including early returns and panics, leaves the board
/// exactly as it was before the first `place`.
///
/// ```
/// use rust_wordgrid::board::Board;
/// use rust_wordgrid::core::{Coord, Tile};
/// use rust_wordgrid::search::Trial;
///
/// let mut board = Board::new();
/// {
///     let mut trial = Trial::new(&mut board);
///     trial.place(Coord::new(7, 7), Tile::new('A')).unwrap();
///     assert!(trial.board().is_occupied(Coord::new(7, 7)));
/// }
/// assert!(board.is_empty());
/// ```
pub struct Trial<'a> {
    board: &'a mut Board,
    placed: SmallVec<[PlacedTile; BOARD_SIZE]>,
}

impl<'a> Trial<'a> {
    /// Start a trial on `board`.
    pub fn new(board: &'a mut Board) -> Self {
        Self {
            board,
            placed: SmallVec::new(),
        }
    }

    /// Place a tile for the duration of the trial.
    ///
    /// Fails, handing the tile back, if the cell is occupied or off the board.
    pub fn place(&mut self, coord: Coord, tile: Tile) -> Result<(), Tile> {
        self.board.place(coord, tile)?;
        self.placed.push(PlacedTile::new(coord, tile));
        Ok(())
    }

    /// The board with the trial's tiles on it.
    #[must_use]
    pub fn board(&self) -> &Board {
        &*self.board
    }

    /// Tiles placed by this trial, in placement order.
    #[must_use]
    pub fn placed(&self) -> &[PlacedTile] {
        &self.placed
    }
}

impl Drop for Trial<'_> {
    fn drop(&mut self) {
        for p in self.placed.drain(..) {
            self.board.remove(p.coord);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rollback_keeps_existing_tiles() {
        let mut board = Board::new();
        board.place(Coord::new(7, 7), Tile::new('C')).unwrap();
        let before = board.clone();

        {
            let mut trial = Trial::new(&mut board);
            trial.place(Coord::new(7, 8), Tile::new('A')).unwrap();
            // Occupied cells are refused and not recorded
            assert!(trial.place(Coord::new(7, 7), Tile::new('X')).is_err());
            assert_eq!(trial.placed().len(), 1);
        }

        assert_eq!(board, before);
    }
}
