//! Keyword-based sentiment for headlines and summaries.
//!
//! Matching is case-insensitive substring search, so "up" also matches
//! "update".

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::recommendation::Action;

const POSITIVE_WORDS: &[&str] = &[
    "up",
    "bull",
    "gain",
    "rise",
    "surge",
    "record",
    "all-time high",
    "adopt",
    "win",
    "partnership",
    "growth",
];

const NEGATIVE_WORDS: &[&str] = &[
    "down", "bear", "loss", "drop", "crash", "hack", "scam", "lawsuit", "ban", "decline",
];

const DECLINE_WORDS: &[&str] = &["fall", "drop", "correction", "down"];
const ADVANCE_WORDS: &[&str] = &["rise", "bullish", "increase", "uptrend"];
const FLAT_WORDS: &[&str] = &["flat", "sideways", "stable"];

/// Headline sentiment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

fn contains_any(text: &str, words: &[&str]) -> bool {
    words.iter().any(|w| text.contains(w))
}

impl Sentiment {
    /// Classify a piece of text. Positive keywords are checked first.
    pub fn classify(text: &str) -> Self {
        let lower = text.to_lowercase();
        if contains_any(&lower, POSITIVE_WORDS) {
            Sentiment::Positive
        } else if contains_any(&lower, NEGATIVE_WORDS) {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    /// Majority sentiment across several headlines; ties are neutral.
    pub fn overall<S: AsRef<str>>(headlines: &[S]) -> Self {
        let (mut positive, mut negative) = (0usize, 0usize);
        for headline in headlines {
            match Sentiment::classify(headline.as_ref()) {
                Sentiment::Positive => positive += 1,
                Sentiment::Negative => negative += 1,
                Sentiment::Neutral => {}
            }
        }
        match positive.cmp(&negative) {
            std::cmp::Ordering::Greater => Sentiment::Positive,
            std::cmp::Ordering::Less => Sentiment::Negative,
            std::cmp::Ordering::Equal => Sentiment::Neutral,
        }
    }
}

impl From<Sentiment> for Action {
    fn from(sentiment: Sentiment) -> Self {
        match sentiment {
            Sentiment::Positive => Action::Buy,
            Sentiment::Negative => Action::Sell,
            Sentiment::Neutral => Action::Hold,
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "positive"),
            Sentiment::Negative => write!(f, "negative"),
            Sentiment::Neutral => write!(f, "neutral"),
        }
    }
}

/// Read an action out of a free-text trend summary.
///
/// Decline words win over advance words, which win over flat words.
/// Returns `None` when the text names no trend.
pub fn summary_action(text: &str) -> Option<Action> {
    let lower = text.to_lowercase();
    if contains_any(&lower, DECLINE_WORDS) {
        Some(Action::Sell)
    } else if contains_any(&lower, ADVANCE_WORDS) {
        Some(Action::Buy)
    } else if contains_any(&lower, FLAT_WORDS) {
        Some(Action::Hold)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(
            Sentiment::classify("Bitcoin hits ALL-TIME HIGH"),
            Sentiment::Positive
        );
        assert_eq!(
            Sentiment::classify("Exchange suffers major hack"),
            Sentiment::Negative
        );
        assert_eq!(
            Sentiment::classify("Ethereum developers meet in Lisbon"),
            Sentiment::Neutral
        );
    }

    #[test]
    fn test_positive_checked_first() {
        // Contains both "surge" and "crash"
        assert_eq!(
            Sentiment::classify("Surge follows last week's crash"),
            Sentiment::Positive
        );
    }

    #[test]
    fn test_substring_matching() {
        // "update" contains "up"
        assert_eq!(Sentiment::classify("Protocol update"), Sentiment::Positive);
    }

    #[test]
    fn test_overall() {
        let headlines = ["Price surge", "Regulator ban", "Rally gains steam"];
        assert_eq!(Sentiment::overall(&headlines), Sentiment::Positive);

        let tied = ["Price surge", "Regulator ban"];
        assert_eq!(Sentiment::overall(&tied), Sentiment::Neutral);

        let none: [&str; 0] = [];
        assert_eq!(Sentiment::overall(&none), Sentiment::Neutral);
    }

    #[test]
    fn test_sentiment_to_action() {
        assert_eq!(Action::from(Sentiment::Positive), Action::Buy);
        assert_eq!(Action::from(Sentiment::Negative), Action::Sell);
        assert_eq!(Action::from(Sentiment::Neutral), Action::Hold);
    }

    #[test]
    fn test_summary_action() {
        assert_eq!(summary_action("Expect a correction"), Some(Action::Sell));
        assert_eq!(summary_action("A clear uptrend"), Some(Action::Buy));
        assert_eq!(summary_action("Trading sideways"), Some(Action::Hold));
        assert_eq!(summary_action("No opinion"), None);
    }
}
