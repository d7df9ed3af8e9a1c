//! The shuffled supply of undrawn tiles.

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, GameRngState, Tile};

/// Letter counts of the standard set, `A..=Z`.
const LETTER_COUNTS: [usize; 26] = [
    9, 2, 2, 4, 12, 2, 3, 2, 9, 1, 1, 4, 2, // A-M
    6, 8, 2, 1, 6, 4, 6, 4, 2, 2, 1, 2, 1, // N-Z
];

/// Blanks in the standard set.
const BLANK_COUNT: usize = 2;

/// Shuffled bag of tiles.
///
/// Draws come off the end of the shuffled order. Returned tiles go back in
/// and the whole bag is reshuffled.
///
/// ```
/// use rust_wordgrid::game::TileBag;
///
/// let mut bag = TileBag::standard(42);
/// assert_eq!(bag.len(), 100);
///
/// let rack = bag.draw_up_to(7);
/// assert_eq!(rack.len(), 7);
/// assert_eq!(bag.len(), 93);
///
/// bag.return_tiles(rack);
/// assert_eq!(bag.len(), 100);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(from = "TileBagState", into = "TileBagState")]
pub struct TileBag {
    tiles: Vec<Tile>,
    rng: GameRng,
}

impl TileBag {
    /// The standard 100-tile set, shuffled with `seed`.
    #[must_use]
    pub fn standard(seed: u64) -> Self {
        let letters = (b'A'..=b'Z')
            .zip(LETTER_COUNTS)
            .flat_map(|(letter, n)| std::iter::repeat(Tile::new(letter as char)).take(n));
        let blanks = std::iter::repeat(Tile::blank()).take(BLANK_COUNT);
        Self::from_tiles(letters.chain(blanks).collect(), seed)
    }

    /// A bag of the given tiles, shuffled with `seed`.
    #[must_use]
    pub fn from_tiles(mut tiles: Vec<Tile>, seed: u64) -> Self {
        let mut rng = GameRng::new(seed);
        rng.shuffle(&mut tiles);
        Self { tiles, rng }
    }

    /// A bag that deals `tiles` front to back. `seed` only drives the
    /// reshuffles after tiles are returned.
    #[must_use]
    pub fn stacked(mut tiles: Vec<Tile>, seed: u64) -> Self {
        tiles.reverse();
        Self {
            tiles,
            rng: GameRng::new(seed),
        }
    }

    /// Number of tiles left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the bag is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Take one tile.
    pub fn draw(&mut self) -> Option<Tile> {
        self.tiles.pop()
    }

    /// Take up to `n` tiles; fewer if the bag runs out.
    pub fn draw_up_to(&mut self, n: usize) -> Vec<Tile> {
        let keep = self.tiles.len().saturating_sub(n);
        let mut drawn = self.tiles.split_off(keep);
        drawn.reverse();
        drawn
    }

    /// Put tiles back and reshuffle. Blanks lose their assigned letter.
    pub fn return_tiles<I: IntoIterator<Item = Tile>>(&mut self, tiles: I) {
        self.tiles.extend(tiles.into_iter().map(|mut tile| {
            tile.unassign();
            tile
        }));
        self.rng.shuffle(&mut self.tiles);
    }

    /// Undrawn tiles, next draw last.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }
}

/// Serialized form of a `TileBag`.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct TileBagState {
    tiles: Vec<Tile>,
    rng: GameRngState,
}

impl From<TileBagState> for TileBag {
    fn from(state: TileBagState) -> Self {
        Self {
            tiles: state.tiles,
            rng: GameRng::from_state(&state.rng),
        }
    }
}

impl From<TileBag> for TileBagState {
    fn from(bag: TileBag) -> Self {
        Self {
            rng: bag.rng.state(),
            tiles: bag.tiles,
        }
    }
}
