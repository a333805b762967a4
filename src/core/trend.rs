//! Trend direction for dashboard stat cards
//!
//! Stat cards carry a preformatted change string ("+12", "-3", "0") whose
//! leading sign picks the up/down indicator. Whether a direction is good
//! news depends on the metric: resolved-bug counts going up is favorable,
//! mean resolution time going up is not, so each metric states
//! `good_when_down` explicitly instead of special-casing statuses.

use serde::{Deserialize, Serialize};

/// The direction a metric moved, from its change-string prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl Trend {
    /// Derive the trend from a preformatted change string.
    ///
    /// A leading '+' is up, a leading '-' is down, anything else is flat.
    pub fn from_change(change: &str) -> Self {
        let change = change.trim();
        if change.starts_with('+') {
            Trend::Up
        } else if change.starts_with('-') {
            Trend::Down
        } else {
            Trend::Flat
        }
    }
}

/// Whether a trend is good or bad news for its metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentiment {
    Favorable,
    Unfavorable,
    Neutral,
}

impl Sentiment {
    /// Evaluate a trend against the metric's polarity
    pub fn evaluate(trend: Trend, good_when_down: bool) -> Self {
        match trend {
            Trend::Flat => Sentiment::Neutral,
            Trend::Up => {
                if good_when_down {
                    Sentiment::Unfavorable
                } else {
                    Sentiment::Favorable
                }
            }
            Trend::Down => {
                if good_when_down {
                    Sentiment::Favorable
                } else {
                    Sentiment::Unfavorable
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_from_change_prefix() {
        assert_eq!(Trend::from_change("+12"), Trend::Up);
        assert_eq!(Trend::from_change("-3"), Trend::Down);
        assert_eq!(Trend::from_change("0"), Trend::Flat);
        assert_eq!(Trend::from_change(""), Trend::Flat);
        assert_eq!(Trend::from_change(" +2.4% "), Trend::Up);
    }

    #[test]
    fn test_sentiment_default_polarity() {
        assert_eq!(Sentiment::evaluate(Trend::Up, false), Sentiment::Favorable);
        assert_eq!(
            Sentiment::evaluate(Trend::Down, false),
            Sentiment::Unfavorable
        );
        assert_eq!(Sentiment::evaluate(Trend::Flat, false), Sentiment::Neutral);
    }

    #[test]
    fn test_sentiment_inverted_polarity() {
        // e.g. mean resolution time: lower is better
        assert_eq!(
            Sentiment::evaluate(Trend::Down, true),
            Sentiment::Favorable
        );
        assert_eq!(
            Sentiment::evaluate(Trend::Up, true),
            Sentiment::Unfavorable
        );
    }
}
