//! Move search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one search.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Words actually tried against the board.
    pub words: u32,

    /// Words skipped by the hand prefilter.
    pub prefiltered: u32,

    /// Placements considered (word × cell × axis).
    pub trials: u64,

    /// Placements failing the cheap geometric check.
    pub geometric_rejects: u64,

    /// Placements the hand cannot supply.
    pub infeasible: u64,

    /// Placements handed to the rules engine.
    pub evaluations: u64,

    /// Placements the rules engine accepted.
    pub accepted: u64,

    /// Total time spent searching (microseconds).
    pub time_us: u64,

    /// Whether the time limit cut the search short.
    pub timed_out: bool,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Placements tried per second.
    #[must_use]
    pub fn trials_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.trials as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }

    /// Fraction of evaluated placements the engine accepted.
    #[must_use]
    pub fn acceptance_rate(&self) -> f64 {
        if self.evaluations == 0 {
            0.0
        } else {
            self.accepted as f64 / self.evaluations as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_default() {
        let stats = SearchStats::new();
        assert_eq!(stats.trials, 0);
        assert_eq!(stats.evaluations, 0);
        assert!(!stats.timed_out);
    }

    #[test]
    fn test_stats_rates() {
        let mut stats = SearchStats::new();
        stats.trials = 1000;
        stats.time_us = 1_000_000; // 1 second
        stats.evaluations = 8;
        stats.accepted = 2;

        assert_eq!(stats.trials_per_second(), 1000.0);
        assert_eq!(stats.acceptance_rate(), 0.25);
    }

    #[test]
    fn test_stats_reset() {
        let mut stats = SearchStats::new();
        stats.trials = 100;
        stats.timed_out = true;

        stats.reset();

        assert_eq!(stats, SearchStats::default());
    }
}
