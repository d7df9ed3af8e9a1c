//! Reasons a placement is rejected.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::core::Coord;

/// Why the rules engine refused a placement.
///
/// Every variant is a distinct, user-displayable reason.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Rejection {
    /// Nothing was placed this turn.
    #[display("no tiles placed")]
    NoTilesPlaced,

    /// The placed tiles do not share a row or a column.
    #[display("all tiles must be placed on the same row or column")]
    NotColinear,

    /// An empty cell lies between the first and last placed tile.
    #[display("placed tiles must form one unbroken line")]
    GapInPlacement,

    /// The first move left the center cell empty.
    #[display("the first word must cover the center square")]
    FirstMoveMissesCenter,

    /// A placed tile belongs to no formed word.
    ///
    /// `RulesEngine::evaluate` reports `NoWordFormed` first, so it never
    /// returns this; only `FormedWords::uncovered` detects the condition.
    #[display("tiles must connect to form valid words")]
    DisconnectedTile,

    /// No run of two or more tiles was formed.
    #[display("no word formed")]
    NoWordFormed,

    /// Every tile of every formed word was placed this turn.
    #[display("move must connect to an existing tile")]
    NotConnectedToExisting,

    /// A formed word is not accepted by the dictionary.
    #[display("{_0} is not a valid word")]
    WordNotInDictionary(String),

    /// A tile reported as placed is not on the board at its coordinate.
    #[display("no placed tile on the board at {_0}")]
    PlacementMismatch(Coord),
}

impl std::error::Error for Rejection {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(Rejection::NoTilesPlaced.to_string(), "no tiles placed");
        assert_eq!(
            Rejection::WordNotInDictionary("QZX".to_string()).to_string(),
            "QZX is not a valid word"
        );
        assert_eq!(
            Rejection::PlacementMismatch(Coord::new(3, 4)).to_string(),
            "no placed tile on the board at (3, 4)"
        );
    }
}
