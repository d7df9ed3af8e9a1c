//! The move search result.

use serde::{Deserialize, Serialize};

use crate::core::{Axis, Coord};

/// A legal placement found by the move search.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveCandidate {
    /// Dictionary word laid along `axis`.
    pub word: String,
    /// Cell of the word's first letter.
    pub anchor: Coord,
    /// Direction the word runs.
    pub axis: Axis,
    /// Score the rules engine gave the placement.
    pub score: u32,
    /// Main word as the engine read it; may extend past `word`.
    pub main_word: String,
    /// Tiles the hand had to supply.
    pub tiles_placed: usize,
}

impl MoveCandidate {
    /// Each cell the word covers with the letter it holds there.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, char)> + '_ {
        let fixed = self.axis.fixed(self.anchor);
        let start = self.axis.along(self.anchor);
        self.word
            .chars()
            .enumerate()
            .map(move |(i, letter)| (self.axis.coord(fixed, start + i), letter))
    }
}

impl std::fmt::Display for MoveCandidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at {} {} ({} pts)",
            self.word, self.anchor, self.axis, self.score
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells() {
        let candidate = MoveCandidate {
            word: "AXE".to_string(),
            anchor: Coord::new(5, 7),
            axis: Axis::Vertical,
            score: 20,
            main_word: "AXE".to_string(),
            tiles_placed: 3,
        };
        let cells: Vec<_> = candidate.cells().collect();
        assert_eq!(
            cells,
            vec![
                (Coord::new(5, 7), 'A'),
                (Coord::new(6, 7), 'X'),
                (Coord::new(7, 7), 'E'),
            ]
        );
    }
}
