//! Letter tiles and their base values.
//!
//! A `Tile` is a letter/score pair. Blank tiles score 0 and carry no letter
//! until one is assigned at placement time; once assigned, the blank reads as
//! that letter for word formation but still scores 0.
//!
//! ```
//! use rust_wordgrid::core::{letter_value, Tile};
//!
//! let q = Tile::new('q');
//! assert_eq!(q.letter(), Some('Q'));
//! assert_eq!(q.score(), 10);
//!
//! let mut blank = Tile::blank();
//! assert_eq!(blank.letter(), None);
//! blank.assign('e');
//! assert_eq!(blank.letter(), Some('E'));
//! assert_eq!(blank.score(), 0);
//! assert_eq!(letter_value('E'), Some(1));
//! ```

use serde::{Deserialize, Serialize};

use super::coord::Coord;

/// Base value of each letter `A..=Z` in the standard distribution.
const LETTER_VALUES: [u32; 26] = [
    1, 3, 3, 2, 1, 4, 2, 4, 1, 8, 5, 1, 3, // A-M
    1, 1, 3, 10, 1, 1, 1, 1, 4, 4, 8, 4, 10, // N-Z
];

/// Base value of a letter, case-insensitive.
///
/// Returns `None` for anything outside `A..=Z`.
#[must_use]
pub fn letter_value(letter: char) -> Option<u32> {
    let upper = letter.to_ascii_uppercase();
    upper
        .is_ascii_uppercase()
        .then(|| LETTER_VALUES[(upper as u8 - b'A') as usize])
}

/// A letter tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    letter: Option<char>,
    score: u32,
    blank: bool,
}

impl Tile {
    /// Create a lettered tile carrying the letter's standard value.
    ///
    /// Characters outside `A..=Z` get a value of 0.
    #[must_use]
    pub fn new(letter: char) -> Self {
        Self::with_score(letter, letter_value(letter).unwrap_or(0))
    }

    /// Create a lettered tile with an explicit value.
    #[must_use]
    pub fn with_score(letter: char, score: u32) -> Self {
        Self {
            letter: Some(letter.to_ascii_uppercase()),
            score,
            blank: false,
        }
    }

    /// Create an unassigned blank tile.
    #[must_use]
    pub const fn blank() -> Self {
        Self {
            letter: None,
            score: 0,
            blank: true,
        }
    }

    /// The letter this tile reads as, if any.
    #[must_use]
    pub const fn letter(&self) -> Option<char> {
        self.letter
    }

    /// The tile's base score.
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Whether this is a blank tile (assigned or not).
    #[must_use]
    pub const fn is_blank(&self) -> bool {
        self.blank
    }

    /// Assign the letter a blank impersonates.
    ///
    /// Has no effect on lettered tiles.
    pub fn assign(&mut self, letter: char) {
        if self.blank {
            self.letter = Some(letter.to_ascii_uppercase());
        }
    }

    /// Return a blank to its unassigned state.
    pub fn unassign(&mut self) {
        if self.blank {
            self.letter = None;
        }
    }

    /// Check whether the tile reads as `letter` (case-insensitive).
    #[must_use]
    pub fn reads_as(&self, letter: char) -> bool {
        self.letter == Some(letter.to_ascii_uppercase())
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.letter.unwrap_or('_'), self.score)
    }
}

/// A tile together with the cell it occupies.
///
/// Used for the tiles placed during the current turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlacedTile {
    pub coord: Coord,
    pub tile: Tile,
}

impl PlacedTile {
    #[must_use]
    pub const fn new(coord: Coord, tile: Tile) -> Self {
        Self { coord, tile }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_values() {
        assert_eq!(letter_value('A'), Some(1));
        assert_eq!(letter_value('c'), Some(3));
        assert_eq!(letter_value('K'), Some(5));
        assert_eq!(letter_value('X'), Some(8));
        assert_eq!(letter_value('Z'), Some(10));
        assert_eq!(letter_value(' '), None);
        assert_eq!(letter_value('1'), None);
    }

    #[test]
    fn test_new_uppercases() {
        let tile = Tile::new('x');
        assert_eq!(tile.letter(), Some('X'));
        assert_eq!(tile.score(), 8);
        assert!(!tile.is_blank());
        assert!(tile.reads_as('x'));
    }

    #[test]
    fn test_assign_only_affects_blanks() {
        let mut lettered = Tile::new('A');
        lettered.assign('Z');
        assert_eq!(lettered.letter(), Some('A'));

        let mut blank = Tile::blank();
        blank.assign('z');
        assert_eq!(blank.letter(), Some('Z'));
        assert_eq!(blank.score(), 0);
        blank.unassign();
        assert_eq!(blank.letter(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Tile::new('A').to_string(), "A1");
        assert_eq!(Tile::blank().to_string(), "_0");
    }
}
