//! Premium-cell layout.
//!
//! Every cell carries a fixed `Premium`. The standard layout is hard-coded;
//! a custom layout can be imported as a 15×15 grid of integer codes:
//!
//! | Code  | Premium        |
//! |-------|----------------|
//! | 1     | `DoubleLetter` |
//! | 2     | `TripleLetter` |
//! | 3     | `DoubleWord`   |
//! | 4     | `TripleWord`   |
//! | other | `Normal`       |
//!
//! Only the shape of an imported grid is validated.
//!
//! ```
//! use rust_wordgrid::board::{Premium, PremiumLayout};
//! use rust_wordgrid::core::Coord;
//!
//! let layout = PremiumLayout::standard();
//! assert_eq!(layout.get(Coord::new(0, 0)), Premium::TripleWord);
//! assert_eq!(layout.get(Coord::center()), Premium::DoubleWord);
//! ```

use std::str::FromStr;

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::core::{Coord, BOARD_SIZE};

/// Score multiplier attached to a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Premium {
    #[default]
    Normal,
    DoubleLetter,
    TripleLetter,
    DoubleWord,
    TripleWord,
}

impl Premium {
    /// Multiplier applied to the letter placed on this cell only.
    #[must_use]
    pub const fn letter_multiplier(self) -> u32 {
        match self {
            Premium::DoubleLetter => 2,
            Premium::TripleLetter => 3,
            _ => 1,
        }
    }

    /// Multiplier applied to every word through this cell.
    #[must_use]
    pub const fn word_multiplier(self) -> u32 {
        match self {
            Premium::DoubleWord => 2,
            Premium::TripleWord => 3,
            _ => 1,
        }
    }

    /// Whether this is a word premium.
    #[must_use]
    pub const fn is_word_premium(self) -> bool {
        matches!(self, Premium::DoubleWord | Premium::TripleWord)
    }

    /// Decode an import code.
    #[must_use]
    pub const fn from_code(code: i64) -> Self {
        match code {
            1 => Premium::DoubleLetter,
            2 => Premium::TripleLetter,
            3 => Premium::DoubleWord,
            4 => Premium::TripleWord,
            _ => Premium::Normal,
        }
    }

    /// Encode as an import code.
    #[must_use]
    pub const fn code(self) -> i64 {
        match self {
            Premium::Normal => 0,
            Premium::DoubleLetter => 1,
            Premium::TripleLetter => 2,
            Premium::DoubleWord => 3,
            Premium::TripleWord => 4,
        }
    }
}

/// Error importing a premium layout.
#[derive(Clone, Debug, PartialEq, Eq, Display)]
pub enum LayoutError {
    /// The grid does not have `BOARD_SIZE` rows.
    #[display("expected 15 rows, found {_0}")]
    RowCount(usize),

    /// A row does not have `BOARD_SIZE` entries.
    #[display("row {row}: expected 15 columns, found {found}")]
    ColumnCount { row: usize, found: usize },

    /// A token could not be read as an integer code.
    #[display("row {row}, column {col}: invalid code {token:?}")]
    InvalidCode { row: usize, col: usize, token: String },
}

impl std::error::Error for LayoutError {}

const N: Premium = Premium::Normal;
const DL: Premium = Premium::DoubleLetter;
const TL: Premium = Premium::TripleLetter;
const DW: Premium = Premium::DoubleWord;
const TW: Premium = Premium::TripleWord;

const STANDARD: [[Premium; BOARD_SIZE]; BOARD_SIZE] = [
    [TW, N, N, DL, N, N, N, TW, N, N, N, DL, N, N, TW],
    [N, DW, N, N, N, TL, N, N, N, TL, N, N, N, DW, N],
    [N, N, DW, N, N, N, DL, N, DL, N, N, N, DW, N, N],
    [DL, N, N, DW, N, N, N, DL, N, N, N, DW, N, N, DL],
    [N, N, N, N, DW, N, N, N, N, N, DW, N, N, N, N],
    [N, TL, N, N, N, TL, N, N, N, TL, N, N, N, TL, N],
    [N, N, DL, N, N, N, DL, N, DL, N, N, N, DL, N, N],
    [TW, N, N, DL, N, N, N, DW, N, N, N, DL, N, N, TW],
    [N, N, DL, N, N, N, DL, N, DL, N, N, N, DL, N, N],
    [N, TL, N, N, N, TL, N, N, N, TL, N, N, N, TL, N],
    [N, N, N, N, DW, N, N, N, N, N, DW, N, N, N, N],
    [DL, N, N, DW, N, N, N, DL, N, N, N, DW, N, N, DL],
    [N, N, DW, N, N, N, DL, N, DL, N, N, N, DW, N, N],
    [N, DW, N, N, N, TL, N, N, N, TL, N, N, N, DW, N],
    [TW, N, N, DL, N, N, N, TW, N, N, N, DL, N, N, TW],
];

/// A full board of premiums.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PremiumLayout {
    cells: [[Premium; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for PremiumLayout {
    fn default() -> Self {
        Self::standard()
    }
}

impl PremiumLayout {
    /// The standard layout.
    #[must_use]
    pub const fn standard() -> Self {
        Self { cells: STANDARD }
    }

    /// A layout with no premiums at all.
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            cells: [[Premium::Normal; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Build a layout from rows of import codes.
    ///
    /// Only the grid shape is checked; unknown codes read as `Normal`.
    pub fn from_codes<R, C>(rows: R) -> Result<Self, LayoutError>
    where
        R: IntoIterator<Item = C>,
        C: AsRef<[i64]>,
    {
        let rows: Vec<C> = rows.into_iter().collect();
        if rows.len() != BOARD_SIZE {
            return Err(LayoutError::RowCount(rows.len()));
        }

        let mut layout = Self::plain();
        for (r, row) in rows.iter().enumerate() {
            let codes = row.as_ref();
            if codes.len() != BOARD_SIZE {
                return Err(LayoutError::ColumnCount {
                    row: r,
                    found: codes.len(),
                });
            }
            for (c, &code) in codes.iter().enumerate() {
                layout.cells[r][c] = Premium::from_code(code);
            }
        }
        Ok(layout)
    }

    /// Premium at a cell. Out-of-bounds cells read as `Normal`.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Premium {
        if coord.is_in_bounds() {
            self.cells[coord.row][coord.col]
        } else {
            Premium::Normal
        }
    }

    /// Override a single cell. Out-of-bounds coordinates are ignored.
    pub fn set(&mut self, coord: Coord, premium: Premium) {
        if coord.is_in_bounds() {
            self.cells[coord.row][coord.col] = premium;
        }
    }

    /// The layout as rows of import codes.
    #[must_use]
    pub fn to_codes(&self) -> Vec<Vec<i64>> {
        self.cells
            .iter()
            .map(|row| row.iter().map(|p| p.code()).collect())
            .collect()
    }
}

impl FromStr for PremiumLayout {
    type Err = LayoutError;

    /// Parse one line per row of whitespace-separated integer codes.
    ///
    /// Blank lines are skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows = Vec::with_capacity(BOARD_SIZE);
        for (r, line) in s.lines().filter(|l| !l.trim().is_empty()).enumerate() {
            let row = line
                .split_whitespace()
                .enumerate()
                .map(|(c, token)| {
                    token.parse::<i64>().map_err(|_| LayoutError::InvalidCode {
                        row: r,
                        col: c,
                        token: token.to_string(),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(row);
        }
        Self::from_codes(rows)
    }
}
