//! Turn errors.

use derive_more::{Display, From};

use crate::core::Coord;
use crate::rules::Rejection;

/// Why a turn could not be taken.
#[derive(Clone, Debug, PartialEq, Eq, Display, From)]
pub enum TurnError {
    /// The game has already ended.
    #[display("the game is over")]
    GameOver,

    /// A placement refers to a hand slot that does not exist.
    #[display("no tile at hand position {_0}")]
    NoSuchTile(usize),

    /// Two placements use the same hand slot.
    #[display("hand position {_0} used more than once")]
    DuplicateTile(usize),

    /// A blank was placed without choosing its letter.
    #[display("a blank tile needs a letter")]
    BlankNeedsLetter,

    /// A placement targets an occupied or off-board cell.
    #[display("cell {_0} is not free")]
    CellUnavailable(Coord),

    /// The hand holds neither the letter nor a blank for it.
    #[display("no tile in hand for {_0}")]
    MissingLetter(char),

    /// The rules engine refused the placement.
    #[display("{_0}")]
    #[from]
    Rejected(Rejection),
}

impl std::error::Error for TurnError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TurnError::Rejected(reason) => Some(reason),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_rejection_converts() {
        let err: TurnError = Rejection::NoWordFormed.into();
        assert_eq!(err, TurnError::Rejected(Rejection::NoWordFormed));
        assert_eq!(err.to_string(), "no word formed");
        assert!(err.source().is_some());
        assert!(TurnError::GameOver.source().is_none());
    }
}
