//! Rules configuration.

use serde::{Deserialize, Serialize};

use super::scoring::ScoringRule;

/// Rules engine configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// How word premiums combine when scoring.
    pub scoring: ScoringRule,
}

impl RulesConfig {
    /// Create a new config with a custom scoring rule.
    pub fn with_scoring(mut self, scoring: ScoringRule) -> Self {
        self.scoring = scoring;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RulesConfig::default();
        assert_eq!(config.scoring, ScoringRule::WordMultiplier);
    }

    #[test]
    fn test_serialization() {
        let config = RulesConfig::default().with_scoring(ScoringRule::AdditiveStacking);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: RulesConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
