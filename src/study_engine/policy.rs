use serde::{Deserialize, Serialize};

use crate::study_engine::errors::PolicyError;

/// How missed words are fed back into the deck.
///
/// With the defaults, each dismissal has a 40% chance to pull the oldest
/// waiting word back in 2, 3 or 4 cards ahead of the new front card.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewPolicy {
    /// Chance per dismissal that a waiting word is re-inserted.
    pub reinsert_probability: f64,
    /// Smallest insertion index into the remaining deck.
    pub min_offset: usize,
    /// Number of distinct offsets above `min_offset`, drawn uniformly.
    pub offset_spread: usize,
}

impl Default for ReviewPolicy {
    fn default() -> Self {
        ReviewPolicy {
            reinsert_probability: 0.4,
            min_offset: 2,
            offset_spread: 3,
        }
    }
}

impl ReviewPolicy {
    /// Parse and validate a policy; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, PolicyError> {
        let policy: ReviewPolicy = serde_json::from_str(json)?;
        policy.validate()?;
        Ok(policy)
    }

    pub fn validate(&self) -> Result<(), PolicyError> {
        if !(0.0..=1.0).contains(&self.reinsert_probability) {
            return Err(PolicyError::Invalid("reinsert_probability must lie in [0, 1]"));
        }
        // An offset of zero would re-show the word immediately.
        if self.min_offset == 0 {
            return Err(PolicyError::Invalid("min_offset must be at least 1"));
        }
        if self.offset_spread == 0 {
            return Err(PolicyError::Invalid("offset_spread must be at least 1"));
        }
        Ok(())
    }

    /// Same offsets, re-insertion on every eligible dismissal.
    pub fn always() -> Self {
        ReviewPolicy { reinsert_probability: 1.0, ..Self::default() }
    }

    /// Same offsets, missed words only come back once the deck runs dry.
    pub fn never() -> Self {
        ReviewPolicy { reinsert_probability: 0.0, ..Self::default() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_two_to_four_cards_ahead() {
        let p = ReviewPolicy::default();
        assert_eq!(p.reinsert_probability, 0.4);
        assert_eq!(p.min_offset, 2);
        assert_eq!(p.min_offset + p.offset_spread - 1, 4);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let p = ReviewPolicy::from_json(r#"{"reinsert_probability": 0.25}"#).unwrap();
        assert_eq!(p.reinsert_probability, 0.25);
        assert_eq!(p.min_offset, 2);
        assert_eq!(p.offset_spread, 3);
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert!(matches!(
            ReviewPolicy::from_json(r#"{"reinsert_probability": 1.5}"#),
            Err(PolicyError::Invalid(_))
        ));
        assert!(matches!(
            ReviewPolicy::from_json(r#"{"min_offset": 0}"#),
            Err(PolicyError::Invalid(_))
        ));
        assert!(matches!(
            ReviewPolicy::from_json(r#"{"offset_spread": 0}"#),
            Err(PolicyError::Invalid(_))
        ));
        assert!(matches!(
            ReviewPolicy::from_json("not json"),
            Err(PolicyError::Parse(_))
        ));
    }
}
