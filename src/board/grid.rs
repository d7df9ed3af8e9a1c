//! The 15×15 board: cell occupancy plus the premium layout.
//!
//! The board is the only mutable shared state in the system. It answers the
//! geometric queries the rules engine and the search need and never decides
//! move legality on its own.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::premium::{Premium, PremiumLayout};
use crate::core::{Axis, Coord, PlacedTile, Tile, BOARD_SIZE, CENTER};

/// A contiguous run of occupied cells along one axis.
///
/// Runs never exceed `BOARD_SIZE`, so they stay inline.
pub type TileRun = SmallVec<[PlacedTile; BOARD_SIZE]>;

/// The game board.
///
/// ## Example
///
/// ```
/// use rust_wordgrid::board::Board;
/// use rust_wordgrid::core::{Axis, Coord, Tile};
///
/// let mut board = Board::new();
/// assert!(board.place(Coord::new(7, 7), Tile::new('A')).is_ok());
/// assert!(board.place(Coord::new(7, 8), Tile::new('T')).is_ok());
///
/// // Occupied cells reject a second tile
/// assert!(board.place(Coord::new(7, 7), Tile::new('B')).is_err());
///
/// let run = board.word_extent(Coord::new(7, 8), Axis::Horizontal);
/// assert_eq!(run.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Option<Tile>; BOARD_SIZE]; BOARD_SIZE],
    layout: PremiumLayout,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board with the standard premium layout.
    #[must_use]
    pub fn new() -> Self {
        Self::with_layout(PremiumLayout::standard())
    }

    /// Create an empty board with a custom premium layout.
    #[must_use]
    pub fn with_layout(layout: PremiumLayout) -> Self {
        Self {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
            layout,
        }
    }

    /// Replace the premium layout (layout import).
    pub fn set_layout(&mut self, layout: PremiumLayout) {
        self.layout = layout;
    }

    /// The premium layout.
    #[must_use]
    pub fn layout(&self) -> &PremiumLayout {
        &self.layout
    }

    /// Premium of a cell.
    #[must_use]
    pub fn premium_at(&self, coord: Coord) -> Premium {
        self.layout.get(coord)
    }

    /// Check whether `(row, col)` lies on the board.
    ///
    /// Signed so that callers may probe one step past an edge.
    #[must_use]
    pub fn is_in_bounds(row: isize, col: isize) -> bool {
        (0..BOARD_SIZE as isize).contains(&row) && (0..BOARD_SIZE as isize).contains(&col)
    }

    /// The tile at a cell, or `None` if empty or out of bounds.
    #[must_use]
    pub fn tile_at(&self, coord: Coord) -> Option<&Tile> {
        if coord.is_in_bounds() {
            self.cells[coord.row][coord.col].as_ref()
        } else {
            None
        }
    }

    /// Whether a cell holds a tile.
    #[must_use]
    pub fn is_occupied(&self, coord: Coord) -> bool {
        self.tile_at(coord).is_some()
    }

    /// Put a tile on an empty in-bounds cell.
    ///
    /// On failure the tile is handed back to the caller untouched.
    pub fn place(&mut self, coord: Coord, tile: Tile) -> Result<(), Tile> {
        if !coord.is_in_bounds() || self.cells[coord.row][coord.col].is_some() {
            return Err(tile);
        }
        self.cells[coord.row][coord.col] = Some(tile);
        Ok(())
    }

    /// Clear a cell, returning whatever it held.
    ///
    /// No-op for empty or out-of-bounds cells.
    pub fn remove(&mut self, coord: Coord) -> Option<Tile> {
        if coord.is_in_bounds() {
            self.cells[coord.row][coord.col].take()
        } else {
            None
        }
    }

    /// Whether any orthogonal neighbour of `coord` is occupied.
    #[must_use]
    pub fn has_occupied_neighbor(&self, coord: Coord) -> bool {
        coord.neighbors().any(|n| self.is_occupied(n))
    }

    /// The full contiguous run of tiles through `start` along `axis`.
    ///
    /// Scans backward to the first occupied cell of the run, then forward to
    /// the last. Empty when `start` itself is empty.
    #[must_use]
    pub fn word_extent(&self, start: Coord, axis: Axis) -> TileRun {
        let mut run = TileRun::new();
        if !self.is_occupied(start) {
            return run;
        }

        let mut first = start;
        while let Some(prev) = first.step(axis, -1).filter(|c| self.is_occupied(*c)) {
            first = prev;
        }

        let mut cursor = Some(first);
        while let Some(coord) = cursor {
            match self.tile_at(coord) {
                Some(tile) => run.push(PlacedTile::new(coord, *tile)),
                None => break,
            }
            cursor = coord.step(axis, 1);
        }
        run
    }

    /// Cheap necessary condition for laying `word` from `anchor` along `axis`.
    ///
    /// The word must fit on the board and agree with every occupied cell it
    /// crosses. A first move must cover the center; any later move must touch
    /// an occupied cell or run next to one. Dictionary membership and the
    /// shape of the actual placed subset are left to the rules engine.
    #[must_use]
    pub fn is_geometrically_placeable(
        &self,
        word: &str,
        anchor: Coord,
        axis: Axis,
        first_move: bool,
    ) -> bool {
        let len = word.chars().count();
        if len == 0 || !anchor.is_in_bounds() || axis.along(anchor) + len > BOARD_SIZE {
            return false;
        }

        let fixed = axis.fixed(anchor);
        let start = axis.along(anchor);
        let mut crosses_center = false;
        let mut connects = false;

        for (i, letter) in word.chars().enumerate() {
            let coord = axis.coord(fixed, start + i);
            if coord == Coord::new(CENTER, CENTER) {
                crosses_center = true;
            }
            match self.tile_at(coord) {
                Some(tile) => {
                    if !tile.reads_as(letter) {
                        return false;
                    }
                    connects = true;
                }
                None => {
                    if !first_move && self.has_occupied_neighbor(coord) {
                        connects = true;
                    }
                }
            }
        }

        if first_move {
            crosses_center
        } else {
            connects
        }
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_some()).count()
    }

    /// Whether no tile has been placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.occupied_count() == 0
    }

    /// How many tiles on the board read as each letter.
    #[must_use]
    pub fn letter_counts(&self) -> FxHashMap<char, usize> {
        let mut counts = FxHashMap::default();
        for tile in self.cells.iter().flatten().flatten() {
            if let Some(letter) = tile.letter() {
                *counts.entry(letter).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Every occupied cell with its tile, in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = PlacedTile> + '_ {
        Coord::all().filter_map(|c| self.tile_at(c).map(|t| PlacedTile::new(c, *t)))
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.cells {
            for cell in row {
                match cell {
                    Some(tile) => write!(f, "{tile} ")?,
                    None => write!(f, "-- ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lay(board: &mut Board, word: &str, anchor: Coord, axis: Axis) {
        for (i, letter) in word.chars().enumerate() {
            let coord = axis.coord(axis.fixed(anchor), axis.along(anchor) + i);
            board.place(coord, Tile::new(letter)).unwrap();
        }
    }

    #[test]
    fn test_is_in_bounds() {
        assert!(Board::is_in_bounds(0, 0));
        assert!(Board::is_in_bounds(14, 14));
        assert!(!Board::is_in_bounds(-1, 0));
        assert!(!Board::is_in_bounds(0, 15));
    }

    #[test]
    fn test_place_and_remove() {
        let mut board = Board::new();
        let c = Coord::new(3, 4);

        assert!(board.place(c, Tile::new('A')).is_ok());
        assert_eq!(board.tile_at(c), Some(&Tile::new('A')));
        assert_eq!(board.place(c, Tile::new('B')), Err(Tile::new('B')));

        assert_eq!(board.remove(c), Some(Tile::new('A')));
        assert_eq!(board.remove(c), None);
        assert!(board.is_empty());
    }

    #[test]
    fn test_place_out_of_bounds() {
        let mut board = Board::new();
        assert!(board.place(Coord::new(15, 0), Tile::new('A')).is_err());
        assert_eq!(board.tile_at(Coord::new(15, 0)), None);
        assert_eq!(board.remove(Coord::new(0, 20)), None);
    }

    #[test]
    fn test_has_occupied_neighbor() {
        let mut board = Board::new();
        board.place(Coord::new(5, 5), Tile::new('A')).unwrap();

        assert!(board.has_occupied_neighbor(Coord::new(4, 5)));
        assert!(board.has_occupied_neighbor(Coord::new(5, 6)));
        assert!(!board.has_occupied_neighbor(Coord::new(4, 4)));
        assert!(!board.has_occupied_neighbor(Coord::new(5, 5)));
    }

    #[test]
    fn test_word_extent_scans_both_ways() {
        let mut board = Board::new();
        lay(&mut board, "HOUSE", Coord::new(2, 3), Axis::Horizontal);

        let run = board.word_extent(Coord::new(2, 5), Axis::Horizontal);
        let letters: String = run.iter().filter_map(|p| p.tile.letter()).collect();
        assert_eq!(letters, "HOUSE");
        assert_eq!(run[0].coord, Coord::new(2, 3));

        let vertical = board.word_extent(Coord::new(2, 5), Axis::Vertical);
        assert_eq!(vertical.len(), 1);

        assert!(board.word_extent(Coord::new(9, 9), Axis::Vertical).is_empty());
    }

    #[test]
    fn test_word_extent_at_edges() {
        let mut board = Board::new();
        lay(&mut board, "AXE", Coord::new(12, 14), Axis::Vertical);
        let run = board.word_extent(Coord::new(14, 14), Axis::Vertical);
        assert_eq!(run.len(), 3);
        assert_eq!(run[2].coord, Coord::new(14, 14));
    }

    #[test]
    fn test_placeable_first_move_needs_center() {
        let board = Board::new();
        assert!(board.is_geometrically_placeable("CAT", Coord::new(7, 5), Axis::Horizontal, true));
        assert!(board.is_geometrically_placeable("CAT", Coord::new(7, 7), Axis::Vertical, true));
        assert!(!board.is_geometrically_placeable("CAT", Coord::new(7, 8), Axis::Horizontal, true));
        assert!(!board.is_geometrically_placeable("CAT", Coord::new(6, 7), Axis::Horizontal, true));
    }

    #[test]
    fn test_placeable_bounds() {
        let board = Board::new();
        assert!(!board.is_geometrically_placeable("CAT", Coord::new(0, 13), Axis::Horizontal, false));
        assert!(!board.is_geometrically_placeable("", Coord::new(7, 7), Axis::Horizontal, true));
    }

    #[test]
    fn test_placeable_later_move_must_connect() {
        let mut board = Board::new();
        lay(&mut board, "CAT", Coord::new(7, 7), Axis::Horizontal);

        // Reuses the existing A
        assert!(board.is_geometrically_placeable("BAD", Coord::new(6, 8), Axis::Vertical, false));
        // Conflicts with the existing A
        assert!(!board.is_geometrically_placeable("BED", Coord::new(6, 8), Axis::Vertical, false));
        // Runs alongside
        assert!(board.is_geometrically_placeable("ODE", Coord::new(8, 6), Axis::Horizontal, false));
        // Floating
        assert!(!board.is_geometrically_placeable("ODE", Coord::new(0, 0), Axis::Horizontal, false));
    }

    #[test]
    fn test_letter_counts() {
        let mut board = Board::new();
        lay(&mut board, "ABBA", Coord::new(0, 0), Axis::Horizontal);
        let counts = board.letter_counts();
        assert_eq!(counts.get(&'A'), Some(&2));
        assert_eq!(counts.get(&'B'), Some(&2));
        assert_eq!(board.occupied_count(), 4);
        assert_eq!(board.tiles().count(), 4);
    }

    #[test]
    fn test_display() {
        let mut board = Board::new();
        board.place(Coord::new(0, 0), Tile::new('Q')).unwrap();
        let text = board.to_string();
        let first_line = text.lines().next().unwrap();
        assert!(first_line.starts_with("Q10 -- "));
        assert_eq!(text.lines().count(), BOARD_SIZE);
    }
}
