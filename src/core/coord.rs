//! Board coordinates and placement axes.
//!
//! ## Layout
//!
//! The grid is `BOARD_SIZE` × `BOARD_SIZE`. Rows grow downward and columns
//! grow to the right, both 0-based. The center cell is `(CENTER, CENTER)`.
//!
//! ```
//! use rust_wordgrid::core::{Axis, Coord, CENTER};
//!
//! let center = Coord::center();
//! assert_eq!(center, Coord::new(CENTER, CENTER));
//!
//! // Step along an axis; leaving the board yields None
//! assert_eq!(center.step(Axis::Horizontal, 1), Some(Coord::new(7, 8)));
//! assert_eq!(Coord::new(0, 0).step(Axis::Vertical, -1), None);
//! ```

use serde::{Deserialize, Serialize};

/// Width and height of the board.
pub const BOARD_SIZE: usize = 15;

/// Row and column index of the center cell.
pub const CENTER: usize = BOARD_SIZE / 2;

/// A cell coordinate on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    /// Create a coordinate. No bounds check is performed.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The center cell.
    #[must_use]
    pub const fn center() -> Self {
        Self::new(CENTER, CENTER)
    }

    /// Check whether this coordinate lies on the board.
    #[must_use]
    pub const fn is_in_bounds(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// Move `delta` cells along `axis`.
    ///
    /// Returns `None` if the result would leave the board.
    #[must_use]
    pub fn step(self, axis: Axis, delta: isize) -> Option<Self> {
        let (row, col) = match axis {
            Axis::Horizontal => (Some(self.row), self.col.checked_add_signed(delta)),
            Axis::Vertical => (self.row.checked_add_signed(delta), Some(self.col)),
        };
        let next = Self::new(row?, col?);
        next.is_in_bounds().then_some(next)
    }

    /// The four orthogonal neighbours that lie on the board.
    pub fn neighbors(self) -> impl Iterator<Item = Coord> {
        [
            self.step(Axis::Vertical, -1),
            self.step(Axis::Vertical, 1),
            self.step(Axis::Horizontal, -1),
            self.step(Axis::Horizontal, 1),
        ]
        .into_iter()
        .flatten()
    }

    /// Iterate over every cell of the board in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Coord::new(row, col)))
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Direction a word runs in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Left to right along a row.
    Horizontal,
    /// Top to bottom along a column.
    Vertical,
}

impl Axis {
    /// Both axes, horizontal first.
    pub const ALL: [Axis; 2] = [Axis::Horizontal, Axis::Vertical];

    /// The other axis.
    #[must_use]
    pub const fn perpendicular(self) -> Self {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }

    /// The component of `coord` that varies along this axis.
    #[must_use]
    pub const fn along(self, coord: Coord) -> usize {
        match self {
            Axis::Horizontal => coord.col,
            Axis::Vertical => coord.row,
        }
    }

    /// The component of `coord` that stays fixed along this axis.
    #[must_use]
    pub const fn fixed(self, coord: Coord) -> usize {
        match self {
            Axis::Horizontal => coord.row,
            Axis::Vertical => coord.col,
        }
    }

    /// Build a coordinate from a fixed line index and a position along it.
    #[must_use]
    pub const fn coord(self, fixed: usize, along: usize) -> Coord {
        match self {
            Axis::Horizontal => Coord::new(fixed, along),
            Axis::Vertical => Coord::new(along, fixed),
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Horizontal => write!(f, "horizontal"),
            Axis::Vertical => write!(f, "vertical"),
        }
    }
}
