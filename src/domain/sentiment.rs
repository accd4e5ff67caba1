//! Keyword-based sentiment classifier
//!
//! Pure and total: any input string maps to a label and a fixed confidence
//! score. Matching is case-insensitive substring containment, checked tier
//! by tier. Tier order is significant: a text containing both a positive
//! and a negative keyword resolves to positive.

use std::fmt;

use serde::Serialize;

/// Sentiment label assigned to a piece of text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Positive => write!(f, "positive"),
            Self::Negative => write!(f, "negative"),
            Self::Neutral => write!(f, "neutral"),
        }
    }
}

/// Result of classifying one input string
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub sentiment: Sentiment,
    pub confidence: f64,
}

const POSITIVE_KEYWORDS: &[&str] = &[
    "love", "like", "good", "great", "excellent", "awesome", "best",
];

const NEGATIVE_KEYWORDS: &[&str] = &[
    "hate", "bad", "terrible", "awful", "worst", "horrible",
];

const NEUTRAL_KEYWORDS: &[&str] = &["okay", "fine", "average", "decent"];

/// Classify a piece of text by keyword matching
///
/// Positive keywords are checked first, then negative, then neutral;
/// anything else falls back to neutral with lower confidence.
pub fn classify(text: &str) -> Classification {
    let text = text.to_lowercase();
    let contains_any = |keywords: &[&str]| keywords.iter().any(|k| text.contains(k));

    if contains_any(POSITIVE_KEYWORDS) {
        Classification {
            sentiment: Sentiment::Positive,
            confidence: 0.9,
        }
    } else if contains_any(NEGATIVE_KEYWORDS) {
        Classification {
            sentiment: Sentiment::Negative,
            confidence: 0.9,
        }
    } else if contains_any(NEUTRAL_KEYWORDS) {
        Classification {
            sentiment: Sentiment::Neutral,
            confidence: 0.7,
        }
    } else {
        Classification {
            sentiment: Sentiment::Neutral,
            confidence: 0.6,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_keyword() {
        for text in ["I love this", "this is great", "the best thing ever"] {
            let result = classify(text);
            assert_eq!(result.sentiment, Sentiment::Positive, "{text}");
            assert_eq!(result.confidence, 0.9);
        }
    }

    #[test]
    fn test_negative_keyword() {
        for text in ["I hate this", "terrible service", "the worst"] {
            let result = classify(text);
            assert_eq!(result.sentiment, Sentiment::Negative, "{text}");
            assert_eq!(result.confidence, 0.9);
        }
    }

    #[test]
    fn test_neutral_keyword() {
        for text in ["it was okay", "fine I guess", "a decent effort"] {
            let result = classify(text);
            assert_eq!(result.sentiment, Sentiment::Neutral, "{text}");
            assert_eq!(result.confidence, 0.7);
        }
    }

    #[test]
    fn test_fallback_neutral() {
        let result = classify("the sky is blue");
        assert_eq!(result.sentiment, Sentiment::Neutral);
        assert_eq!(result.confidence, 0.6);
    }

    #[test]
    fn test_positive_wins_over_negative() {
        // Positive tier is checked first
        let result = classify("I love it but the packaging is terrible");
        assert_eq!(result.sentiment, Sentiment::Positive);
        assert_eq!(result.confidence, 0.9);
    }

    #[test]
    fn test_negative_wins_over_neutral() {
        let result = classify("an awful but okay-ish day");
        assert_eq!(result.sentiment, Sentiment::Negative);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(classify("LOVE this"), classify("love this"));
        assert_eq!(classify("ThIs Is AwFuL").sentiment, Sentiment::Negative);
    }

    #[test]
    fn test_substring_containment() {
        // Matching is substring based, so "dislike" contains "like"
        let result = classify("I dislike mornings");
        assert_eq!(result.sentiment, Sentiment::Positive);
    }

    #[test]
    fn test_empty_input_is_total() {
        let result = classify("");
        assert_eq!(result.sentiment, Sentiment::Neutral);
        assert_eq!(result.confidence, 0.6);
    }

    #[test]
    fn test_sentiment_serialization() {
        assert_eq!(
            serde_json::to_string(&Sentiment::Positive).unwrap(),
            "\"positive\""
        );
        assert_eq!(
            serde_json::to_string(&Sentiment::Negative).unwrap(),
            "\"negative\""
        );
        assert_eq!(
            serde_json::to_string(&Sentiment::Neutral).unwrap(),
            "\"neutral\""
        );
    }

    #[test]
    fn test_display_matches_serialization() {
        for sentiment in [Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral] {
            let json = serde_json::to_string(&sentiment).unwrap();
            assert_eq!(json, format!("\"{sentiment}\""));
        }
    }
}
