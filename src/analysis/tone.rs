//! Rule-based tone classification.
//!
//! The classifier walks a fixed priority list of keyword sets and returns
//! the label of the first set with any keyword present in the lowercased
//! text. Matching is substring-based, so derived forms ("motivated",
//! "inspiring") also hit. When nothing matches, the label is
//! [`ToneLabel::Informative`].
//!
//! A sentiment polarity score is computed alongside classification as an
//! auxiliary signal; the rule chain does not consult it. The classifier
//! never errors: any input, including empty text, maps to a label.

use crate::models::ToneLabel;
use std::collections::HashSet;
use tracing::debug;

const INSPIRATIONAL: &[&str] = &["inspire", "motivate", "encourage", "dream", "vision"];
const AUTHORITATIVE: &[&str] = &["expert", "authority", "certified", "proven", "research"];
const PERSUASIVE: &[&str] = &["convince", "persuade", "should", "must"];
const HUMOROUS: &[&str] = &["funny", "humor", "joke", "hilarious", "amusing"];
const EMPATHETIC: &[&str] = &["understand", "empathy", "feel", "care", "support"];

const POSITIVE_WORDS: &[&str] = &[
    "good", "great", "excellent", "love", "best", "happy", "success", "win",
    "growth", "improve", "easy", "powerful", "beautiful", "amazing",
    "helpful", "strong", "benefit", "gain", "positive", "perfect",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bad", "worst", "hate", "fail", "failure", "problem", "difficult",
    "hard", "loss", "lose", "wrong", "broken", "risk", "poor", "negative",
    "slow", "painful", "costly", "weak", "error",
];

/// Keyword-rule tone classifier.
///
/// Holds the ordered rule table and the polarity lexica; constructed once
/// per run and carried in the run context.
pub struct ToneClassifier {
    rules: Vec<(ToneLabel, &'static [&'static str])>,
    positive: HashSet<&'static str>,
    negative: HashSet<&'static str>,
}

impl ToneClassifier {
    pub fn new() -> Self {
        ToneClassifier {
            rules: vec![
                (ToneLabel::Inspirational, INSPIRATIONAL),
                (ToneLabel::Authoritative, AUTHORITATIVE),
                (ToneLabel::Persuasive, PERSUASIVE),
                (ToneLabel::Humorous, HUMOROUS),
                (ToneLabel::Empathetic, EMPATHETIC),
            ],
            positive: POSITIVE_WORDS.iter().copied().collect(),
            negative: NEGATIVE_WORDS.iter().copied().collect(),
        }
    }

    /// Classify the tone of a body text.
    ///
    /// The first rule in priority order with any keyword present wins;
    /// no match means `Informative`.
    pub fn classify(&self, text: &str) -> ToneLabel {
        let lowered = text.to_lowercase();

        // Auxiliary signal only; the rule chain below does not read it.
        let polarity = self.sentiment_polarity(&lowered);
        debug!(polarity, "Sentiment polarity (advisory)");

        for (label, keywords) in &self.rules {
            if keywords.iter().any(|keyword| lowered.contains(keyword)) {
                return *label;
            }
        }
        ToneLabel::Informative
    }

    /// Lexicon-based polarity in `[-1, 1]`: positive minus negative word
    /// occurrences over total alphabetic tokens.
    pub fn sentiment_polarity(&self, lowered: &str) -> f64 {
        let mut total = 0usize;
        let mut positive = 0usize;
        let mut negative = 0usize;

        for token in lowered
            .split(|c: char| !c.is_alphabetic())
            .filter(|t| !t.is_empty())
        {
            total += 1;
            if self.positive.contains(token) {
                positive += 1;
            } else if self.negative.contains(token) {
                negative += 1;
            }
        }

        if total == 0 {
            return 0.0;
        }
        (positive as f64 - negative as f64) / total as f64
    }
}

impl Default for ToneClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_inspirational_beats_authoritative() {
        let classifier = ToneClassifier::new();
        let tone =
            classifier.classify("Experts agree this proven research will inspire you");
        assert_eq!(tone, ToneLabel::Inspirational);
    }

    #[test]
    fn test_each_rule_matches_its_keywords() {
        let classifier = ToneClassifier::new();
        assert_eq!(
            classifier.classify("A dream worth chasing"),
            ToneLabel::Inspirational
        );
        assert_eq!(
            classifier.classify("Certified by independent labs"),
            ToneLabel::Authoritative
        );
        assert_eq!(
            classifier.classify("You must act today"),
            ToneLabel::Persuasive
        );
        assert_eq!(
            classifier.classify("A hilarious take on standups"),
            ToneLabel::Humorous
        );
        assert_eq!(
            classifier.classify("We care about your team"),
            ToneLabel::Empathetic
        );
    }

    #[test]
    fn test_default_is_informative() {
        let classifier = ToneClassifier::new();
        assert_eq!(
            classifier.classify("Quarterly revenue figures were published today"),
            ToneLabel::Informative
        );
    }

    #[test]
    fn test_empty_text_is_informative() {
        let classifier = ToneClassifier::new();
        assert_eq!(classifier.classify(""), ToneLabel::Informative);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let classifier = ToneClassifier::new();
        assert_eq!(
            classifier.classify("INSPIRE GREATNESS"),
            ToneLabel::Inspirational
        );
    }

    #[test]
    fn test_matching_is_substring_based() {
        // "motivated" contains "motivate"; the indicator lists match
        // substrings, not whole words.
        let classifier = ToneClassifier::new();
        assert_eq!(
            classifier.classify("A highly motivated team"),
            ToneLabel::Inspirational
        );
    }

    #[test]
    fn test_determinism() {
        let classifier = ToneClassifier::new();
        let text = "This proven approach should convince anyone";
        assert_eq!(classifier.classify(text), classifier.classify(text));
    }

    #[test]
    fn test_polarity_sign() {
        let classifier = ToneClassifier::new();
        assert!(classifier.sentiment_polarity("a great excellent win") > 0.0);
        assert!(classifier.sentiment_polarity("a bad broken failure") < 0.0);
        assert_eq!(classifier.sentiment_polarity(""), 0.0);
    }

    #[test]
    fn test_polarity_does_not_change_label() {
        // Heavily negative vocabulary plus one inspirational keyword still
        // classifies by the keyword rule.
        let classifier = ToneClassifier::new();
        let tone = classifier.classify("bad worst failure broken wrong inspire");
        assert_eq!(tone, ToneLabel::Inspirational);
    }
}
