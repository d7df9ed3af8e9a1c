//! A player's rack of tiles.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::tile::Tile;

/// Standard number of tiles a player holds.
pub const HAND_SIZE: usize = 7;

/// Ordered collection of tiles held by a player.
///
/// `SmallVec` keeps a full rack inline without heap allocation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    tiles: SmallVec<[Tile; HAND_SIZE]>,
}

impl Hand {
    /// Create an empty hand.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a hand of lettered tiles from a string, `?` standing for a blank.
    ///
    /// ```
    /// use rust_wordgrid::core::Hand;
    ///
    /// let hand = Hand::from_letters("cat?");
    /// assert_eq!(hand.len(), 4);
    /// assert_eq!(hand.blank_count(), 1);
    /// ```
    #[must_use]
    pub fn from_letters(letters: &str) -> Self {
        letters
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| if c == '?' { Tile::blank() } else { Tile::new(c) })
            .collect()
    }

    /// Number of tiles held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// The tiles, in hand order.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Get a tile by index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    /// Add a tile at the end.
    pub fn push(&mut self, tile: Tile) {
        self.tiles.push(tile);
    }

    /// Insert a tile at `index`, clamped to the end.
    pub fn insert(&mut self, index: usize, tile: Tile) {
        let index = index.min(self.tiles.len());
        self.tiles.insert(index, tile);
    }

    /// Remove and return the tile at `index`.
    pub fn remove(&mut self, index: usize) -> Option<Tile> {
        (index < self.tiles.len()).then(|| self.tiles.remove(index))
    }

    /// Index of the first non-blank tile reading as `letter`.
    #[must_use]
    pub fn position_of(&self, letter: char) -> Option<usize> {
        self.tiles
            .iter()
            .position(|t| !t.is_blank() && t.reads_as(letter))
    }

    /// Index of the first blank tile.
    #[must_use]
    pub fn position_of_blank(&self) -> Option<usize> {
        self.tiles.iter().position(Tile::is_blank)
    }

    /// Number of blank tiles held.
    #[must_use]
    pub fn blank_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_blank()).count()
    }

    /// Remove every tile, returning them in hand order.
    pub fn drain(&mut self) -> Vec<Tile> {
        self.tiles.drain(..).collect()
    }

    /// Sum of the base scores held.
    #[must_use]
    pub fn total_score(&self) -> u32 {
        self.tiles.iter().map(Tile::score).sum()
    }
}

impl FromIterator<Tile> for Hand {
    fn from_iter<I: IntoIterator<Item = Tile>>(iter: I) -> Self {
        Self {
            tiles: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self.tiles.iter().map(Tile::to_string).collect();
        write!(f, "[{}]", parts.join(" "))
    }
}
