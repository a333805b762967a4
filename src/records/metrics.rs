//! Dashboard stat card records

use crate::core::trend::{Sentiment, Trend};
use serde::{Deserialize, Serialize};

/// A dashboard stat card with a preformatted value and change string
///
/// Metrics are display records, not filterable collections: they carry the
/// headline number and its change since the previous period, and resolve
/// their own trend indicator and sentiment color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricCard {
    /// Stable identifier, e.g. "open_bugs"
    pub id: String,

    /// Display label, e.g. "Open Bugs"
    pub label: String,

    /// Preformatted headline value
    pub value: String,

    /// Preformatted change since the previous period, e.g. "+12" or "-3"
    pub change: String,

    /// Whether a downward trend is good news for this metric
    /// (e.g. mean resolution time)
    #[serde(default)]
    pub good_when_down: bool,
}

impl MetricCard {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        value: impl Into<String>,
        change: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            value: value.into(),
            change: change.into(),
            good_when_down: false,
        }
    }

    /// Mark this metric as one where lower is better
    pub fn good_when_down(mut self) -> Self {
        self.good_when_down = true;
        self
    }

    /// The up/down indicator derived from the change prefix
    pub fn trend(&self) -> Trend {
        Trend::from_change(&self.change)
    }

    /// Whether the trend is good or bad news for this metric
    pub fn sentiment(&self) -> Sentiment {
        Sentiment::evaluate(self.trend(), self.good_when_down)
    }
}

/// The stat card row of a bug tracker dashboard
pub fn sample_metrics() -> Vec<MetricCard> {
    vec![
        MetricCard::new("total_bugs", "Total Bugs", "147", "+12"),
        MetricCard::new("open_bugs", "Open Bugs", "42", "+5").good_when_down(),
        MetricCard::new("resolved", "Resolved", "89", "+18"),
        MetricCard::new("avg_resolution", "Avg Resolution Time", "2.4d", "-0.3d").good_when_down(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_follows_change_prefix() {
        let metrics = sample_metrics();
        assert_eq!(metrics[0].trend(), Trend::Up);
        assert_eq!(metrics[3].trend(), Trend::Down);
    }

    #[test]
    fn test_sentiment_respects_polarity() {
        let metrics = sample_metrics();

        // More resolved bugs: up and favorable
        assert_eq!(metrics[2].sentiment(), Sentiment::Favorable);
        // More open bugs: up but unfavorable
        assert_eq!(metrics[1].sentiment(), Sentiment::Unfavorable);
        // Resolution time dropped: down and favorable
        assert_eq!(metrics[3].sentiment(), Sentiment::Favorable);
    }

    #[test]
    fn test_flat_change_is_neutral() {
        let metric = MetricCard::new("sessions", "Sessions", "1024", "0");
        assert_eq!(metric.trend(), Trend::Flat);
        assert_eq!(metric.sentiment(), Sentiment::Neutral);
    }

    #[test]
    fn test_serde_defaults_good_when_down() {
        let json = r#"{"id":"x","label":"X","value":"1","change":"+1"}"#;
        let metric: MetricCard = serde_json::from_str(json).expect("valid metric json");
        assert!(!metric.good_when_down);
    }
}
