//! Letter tallies of a hand.

use rustc_hash::FxHashMap;

use crate::core::Hand;

/// Multiset view of a hand: lettered tiles counted per letter, blanks
/// counted separately.
///
/// ```
/// use rust_wordgrid::core::Hand;
/// use rust_wordgrid::search::HandInventory;
///
/// let inventory = HandInventory::from_hand(&Hand::from_letters("CAT?"));
/// assert_eq!(inventory.count('A'), 1);
/// assert_eq!(inventory.blanks(), 1);
///
/// // One T missing, covered by the blank
/// assert!(inventory.can_supply("TAT".chars()));
/// assert!(!inventory.can_supply("TATT".chars()));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HandInventory {
    letters: FxHashMap<char, usize>,
    blanks: usize,
}

impl HandInventory {
    /// Tally a hand.
    #[must_use]
    pub fn from_hand(hand: &Hand) -> Self {
        let mut inventory = Self::default();
        for tile in hand.tiles() {
            match tile.letter() {
                Some(letter) if !tile.is_blank() => {
                    *inventory.letters.entry(letter).or_insert(0) += 1;
                }
                _ => inventory.blanks += 1,
            }
        }
        inventory
    }

    /// Lettered tiles held for `letter`.
    #[must_use]
    pub fn count(&self, letter: char) -> usize {
        self.letters
            .get(&letter.to_ascii_uppercase())
            .copied()
            .unwrap_or(0)
    }

    /// Blank tiles held.
    #[must_use]
    pub fn blanks(&self) -> usize {
        self.blanks
    }

    /// Letters of `needed` the lettered tiles cannot cover.
    #[must_use]
    pub fn shortfall<I: IntoIterator<Item = char>>(&self, needed: I) -> usize {
        let mut wanted: FxHashMap<char, usize> = FxHashMap::default();
        for letter in needed {
            *wanted.entry(letter.to_ascii_uppercase()).or_insert(0) += 1;
        }
        wanted
            .into_iter()
            .map(|(letter, n)| n.saturating_sub(self.count(letter)))
            .sum()
    }

    /// Whether the hand, blanks included, can supply every letter of `needed`.
    #[must_use]
    pub fn can_supply<I: IntoIterator<Item = char>>(&self, needed: I) -> bool {
        self.shortfall(needed) <= self.blanks
    }

    /// Whether `word` could be laid at all, given every board letter could
    /// be reused.
    ///
    /// A `false` here means no placement of `word` is feasible anywhere.
    #[must_use]
    pub fn could_form(&self, word: &str, board_letters: &FxHashMap<char, usize>) -> bool {
        let mut wanted: FxHashMap<char, usize> = FxHashMap::default();
        for letter in word.chars() {
            *wanted.entry(letter.to_ascii_uppercase()).or_insert(0) += 1;
        }
        let deficit: usize = wanted
            .into_iter()
            .map(|(letter, n)| {
                let on_board = board_letters.get(&letter).copied().unwrap_or(0);
                n.saturating_sub(self.count(letter) + on_board)
            })
            .sum();
        deficit <= self.blanks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally() {
        let inventory = HandInventory::from_hand(&Hand::from_letters("AAB??"));
        assert_eq!(inventory.count('A'), 2);
        assert_eq!(inventory.count('b'), 1);
        assert_eq!(inventory.count('Z'), 0);
        assert_eq!(inventory.blanks(), 2);
    }

    #[test]
    fn test_shortfall() {
        let inventory = HandInventory::from_hand(&Hand::from_letters("CAT"));
        assert_eq!(inventory.shortfall("CAT".chars()), 0);
        assert_eq!(inventory.shortfall("CATS".chars()), 1);
        assert_eq!(inventory.shortfall("AAA".chars()), 2);
        assert!(!inventory.can_supply("CATS".chars()));
    }

    #[test]
    fn test_could_form_uses_board_letters() {
        let inventory = HandInventory::from_hand(&Hand::from_letters("CT"));
        let mut board = FxHashMap::default();
        assert!(!inventory.could_form("CAT", &board));

        board.insert('A', 1);
        assert!(inventory.could_form("CAT", &board));
        assert!(!inventory.could_form("CAAT", &board));
    }
}
