//! Word lists.
//!
//! The rules engine only needs a membership oracle; the move search also
//! needs to enumerate candidate words. Both go through the `Dictionary`
//! trait so that any word source can be plugged in.
//!
//! ## Example
//!
//! ```
//! use rust_wordgrid::dictionary::{Dictionary, WordSet};
//!
//! let words = WordSet::from_text("cat\n  Axe \n\nCAT\n");
//! assert_eq!(words.len(), 2);
//! assert!(words.contains("Cat"));
//! assert!(!words.contains("dog"));
//! assert_eq!(words.words().collect::<Vec<_>>(), vec!["CAT", "AXE"]);
//! ```

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// A set of accepted words.
pub trait Dictionary {
    /// Case-insensitive membership test.
    fn contains(&self, word: &str) -> bool;

    /// Enumerate every word, uppercase.
    fn words(&self) -> impl Iterator<Item = &str> + '_;

    /// Number of distinct words.
    fn len(&self) -> usize {
        self.words().count()
    }

    /// Whether the dictionary has no words.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory word set.
///
/// Words are stored uppercase. Enumeration follows insertion order, which
/// keeps search tie-breaking reproducible.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct WordSet {
    order: Vec<String>,
    index: FxHashSet<String>,
}

impl WordSet {
    /// Create an empty word set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load one word per line. Surrounding whitespace is trimmed and empty
    /// lines are ignored.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        text.lines().collect()
    }

    /// Add a word. Returns `false` if it was already present or empty.
    pub fn insert(&mut self, word: &str) -> bool {
        let word = word.trim().to_uppercase();
        if word.is_empty() || self.index.contains(&word) {
            return false;
        }
        self.index.insert(word.clone());
        self.order.push(word);
        true
    }
}

impl Dictionary for WordSet {
    fn contains(&self, word: &str) -> bool {
        self.index.contains(&word.to_uppercase())
    }

    fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.order.iter().map(String::as_str)
    }

    fn len(&self) -> usize {
        self.order.len()
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for word in iter {
            set.insert(word.as_ref());
        }
        set
    }
}

impl From<Vec<String>> for WordSet {
    fn from(words: Vec<String>) -> Self {
        words.into_iter().collect()
    }
}

impl From<WordSet> for Vec<String> {
    fn from(set: WordSet) -> Self {
        set.order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive() {
        let words: WordSet = ["Quiz"].into_iter().collect();
        assert!(words.contains("QUIZ"));
        assert!(words.contains("quiz"));
        assert!(words.contains("qUiZ"));
        assert!(!words.contains("quizz"));
    }

    #[test]
    fn test_insert_dedups() {
        let mut words = WordSet::new();
        assert!(words.insert("cat"));
        assert!(!words.insert("CAT"));
        assert!(!words.insert("   "));
        assert_eq!(words.len(), 1);
        assert!(!words.is_empty());
    }

    #[test]
    fn test_insertion_order() {
        let words: WordSet = ["zoo", "ant", "moo"].into_iter().collect();
        let listed: Vec<&str> = words.words().collect();
        assert_eq!(listed, vec!["ZOO", "ANT", "MOO"]);
    }

    #[test]
    fn test_serde_as_word_list() {
        let words: WordSet = ["cat", "axe"].into_iter().collect();
        let json = serde_json::to_string(&words).unwrap();
        assert_eq!(json, r#"["CAT","AXE"]"#);

        let restored: WordSet = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, words);
        assert!(restored.contains("axe"));
    }
}
