//! Players and their running totals.

use serde::{Deserialize, Serialize};

use super::bag::TileBag;
use crate::core::Hand;
use crate::rules::MoveResult;

/// A seat at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Display name.
    pub name: String,
    /// Tiles currently held.
    pub hand: Hand,
    /// Points scored so far.
    pub score: u32,
    /// Turns taken, including exchanges and passes.
    pub turns: u32,
    /// Every committed move, in order.
    pub moves: Vec<MoveResult>,
    /// Whether the move search plays this seat.
    pub automated: bool,
}

impl Player {
    /// Create a player with an empty hand.
    pub fn new(name: impl Into<String>, automated: bool) -> Self {
        Self {
            name: name.into(),
            hand: Hand::new(),
            score: 0,
            turns: 0,
            moves: Vec::new(),
            automated,
        }
    }

    /// Draw until the hand holds `hand_size` tiles or the bag runs out.
    ///
    /// Returns the number of tiles drawn.
    pub fn refill(&mut self, bag: &mut TileBag, hand_size: usize) -> usize {
        let wanted = hand_size.saturating_sub(self.hand.len());
        let drawn = bag.draw_up_to(wanted);
        let count = drawn.len();
        for tile in drawn {
            self.hand.push(tile);
        }
        count
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} pts)", self.name, self.score)
    }
}
