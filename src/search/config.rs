//! Move search configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::rules::RulesConfig;

/// Order in which dictionary words are tried.
///
/// The first candidate reaching the best score wins, so this pins the
/// tie-break between equal-scoring words.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WordOrder {
    /// The dictionary's own enumeration order.
    #[default]
    Insertion,
    /// Alphabetical.
    Lexicographic,
}

/// Value given to letters the hand can only supply through a blank.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlankScoring {
    /// Simulated tiles carry the face value of the letter they stand for.
    #[default]
    FaceValue,
    /// Simulated blanks score 0, matching what a committed play scores.
    Zero,
}

/// Move search configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Rules used to judge each candidate.
    pub rules: RulesConfig,

    /// Word iteration order.
    pub word_order: WordOrder,

    /// Skip words the hand cannot form even with every board letter and
    /// every blank. Never changes the result.
    pub prefilter: bool,

    /// How simulated blanks are valued.
    pub blank_scoring: BlankScoring,

    /// Stop trying new words after this long and return the best so far.
    pub time_limit: Option<Duration>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            rules: RulesConfig::default(),
            word_order: WordOrder::Insertion,
            prefilter: true,
            blank_scoring: BlankScoring::FaceValue,
            time_limit: None,
        }
    }
}

impl SearchConfig {
    /// Create a new config with custom rules.
    pub fn with_rules(mut self, rules: RulesConfig) -> Self {
        self.rules = rules;
        self
    }

    /// Create a new config with a custom word order.
    pub fn with_word_order(mut self, order: WordOrder) -> Self {
        self.word_order = order;
        self
    }

    /// Create a new config with the prefilter switched on or off.
    pub fn with_prefilter(mut self, prefilter: bool) -> Self {
        self.prefilter = prefilter;
        self
    }

    /// Create a new config with a custom blank valuation.
    pub fn with_blank_scoring(mut self, blank_scoring: BlankScoring) -> Self {
        self.blank_scoring = blank_scoring;
        self
    }

    /// Create a new config with a time limit.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }
}
