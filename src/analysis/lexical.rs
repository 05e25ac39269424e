//! Lexical statistics and readability scoring.
//!
//! All metrics derive from the body text alone:
//!
//! - word count over whitespace-delimited tokens
//! - sentence segmentation on terminal punctuation; a text with no boundary
//!   counts as one sentence, so the average is always defined
//! - reading time at a fixed 200 words per minute, floored at one minute
//! - Flesch reading ease with a vowel-group syllable heuristic
//! - top frequent words after stop-word filtering, ties resolved by
//!   first-seen order
//!
//! Input that yields no tokens produces the neutral report instead of an
//! error; a degenerate article must never abort its siblings.

use crate::models::ComplexityLabel;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::collections::HashSet;

/// Fixed reading speed for the reading-time estimate.
pub const WORDS_PER_MINUTE: f64 = 200.0;

/// Number of entries kept in the frequent-word list.
pub const TOP_WORD_LIMIT: usize = 10;

/// English stop words excluded from the frequency table.
const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of",
    "with", "by", "i", "me", "my", "we", "our", "ours", "you", "your", "yours",
    "he", "him", "his", "she", "her", "hers", "it", "its", "they", "them",
    "their", "theirs", "what", "which", "who", "whom", "this", "that", "these",
    "those", "am", "is", "are", "was", "were", "be", "been", "being", "have",
    "has", "had", "having", "do", "does", "did", "doing", "will", "would",
    "can", "could", "not", "no", "nor", "as", "if", "then", "so", "than",
    "too", "very", "from", "up", "down", "out", "off", "over", "under",
    "again", "further", "there", "here", "when", "where", "why", "how", "all",
    "any", "both", "each", "few", "more", "most", "other", "some", "such",
    "only", "own", "same", "just", "about", "into", "through", "between",
    "because", "while", "during", "before", "after",
];

/// Sentence boundary: terminal punctuation, optional closing quote or
/// bracket, then whitespace or end of text.
static SENTENCE_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[.!?]["')\]]*(?:\s|$)"#).unwrap());

/// Lexical metrics for one body text; everything except the tone label.
#[derive(Debug, Clone, PartialEq)]
pub struct LexicalReport {
    pub word_count: usize,
    pub avg_sentence_length: f64,
    pub avg_reading_time: u32,
    pub readability_score: f64,
    pub complexity: Option<ComplexityLabel>,
    pub top_words: Vec<String>,
}

impl LexicalReport {
    /// Neutral report for input with no analyzable tokens.
    pub fn neutral() -> Self {
        LexicalReport {
            word_count: 0,
            avg_sentence_length: 0.0,
            avg_reading_time: 0,
            readability_score: 0.0,
            complexity: None,
            top_words: Vec::new(),
        }
    }
}

/// Analyzer holding the stop-word table.
///
/// Constructed once per run and carried in the run context; analysis itself
/// is a pure function of the input text.
pub struct LexicalAnalyzer {
    stop_words: HashSet<&'static str>,
}

impl LexicalAnalyzer {
    pub fn new() -> Self {
        LexicalAnalyzer {
            stop_words: STOP_WORDS.iter().copied().collect(),
        }
    }

    /// Compute the full lexical report for a body text.
    pub fn analyze(&self, text: &str) -> LexicalReport {
        let word_count = text.split_whitespace().count();
        if word_count == 0 {
            return LexicalReport::neutral();
        }

        let sentence_count = count_sentences(text);
        let avg_sentence_length = word_count as f64 / sentence_count as f64;
        let avg_reading_time = ((word_count as f64 / WORDS_PER_MINUTE).round() as u32).max(1);
        let readability_score = flesch_reading_ease(text);
        let complexity = Some(ComplexityLabel::from_score(readability_score));
        let top_words = self.top_frequent_words(text);

        LexicalReport {
            word_count,
            avg_sentence_length,
            avg_reading_time,
            readability_score,
            complexity,
            top_words,
        }
    }

    /// Top frequent alphabetic tokens, stop words removed.
    ///
    /// Tokens are lowercased and split on non-alphabetic boundaries.
    /// Ranking is count-descending with a stable sort, so equal counts keep
    /// their first-seen order.
    fn top_frequent_words(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let mut counts: HashMap<&str, usize> = HashMap::new();
        let mut discovery_order: Vec<&str> = Vec::new();

        for token in lowered
            .split(|c: char| !c.is_alphabetic())
            .filter(|t| !t.is_empty())
        {
            if self.stop_words.contains(token) {
                continue;
            }
            let count = counts.entry(token).or_insert(0);
            if *count == 0 {
                discovery_order.push(token);
            }
            *count += 1;
        }

        let mut ranked: Vec<(&str, usize)> = discovery_order
            .iter()
            .map(|word| (*word, counts[word]))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
            .into_iter()
            .take(TOP_WORD_LIMIT)
            .map(|(word, _)| word.to_string())
            .collect()
    }
}

impl Default for LexicalAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Number of sentences in the text, at least 1.
fn count_sentences(text: &str) -> usize {
    let boundaries = SENTENCE_BOUNDARY
        .split(text)
        .filter(|segment| !segment.trim().is_empty())
        .count();
    boundaries.max(1)
}

/// Flesch reading ease: higher scores mean easier text.
///
/// `206.835 - 1.015 * (words / sentences) - 84.6 * (syllables / words)`
pub fn flesch_reading_ease(text: &str) -> f64 {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return 0.0;
    }
    let sentences = count_sentences(text) as f64;
    let syllables: usize = words.iter().map(|word| count_syllables(word)).sum();
    206.835 - 1.015 * (words.len() as f64 / sentences) - 84.6 * (syllables as f64 / words.len() as f64)
}

/// Vowel-group syllable heuristic.
///
/// Counts maximal vowel runs (y included), dropping one for a trailing
/// silent `e` unless the word ends in consonant + `le` ("table",
/// "syllable"). Alphabetic words always count at least one syllable;
/// punctuation-only tokens count zero.
fn count_syllables(word: &str) -> usize {
    let cleaned: String = word
        .chars()
        .filter(|c| c.is_alphabetic())
        .collect::<String>()
        .to_lowercase();
    if cleaned.is_empty() {
        return 0;
    }

    let mut count = 0;
    let mut previous_was_vowel = false;
    for c in cleaned.chars() {
        let is_vowel = matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
        if is_vowel && !previous_was_vowel {
            count += 1;
        }
        previous_was_vowel = is_vowel;
    }
    if count > 1 && cleaned.ends_with('e') && !ends_in_consonant_le(&cleaned) {
        count -= 1;
    }
    count.max(1)
}

/// True for words like "table" where the trailing `e` is voiced.
fn ends_in_consonant_le(word: &str) -> bool {
    let chars: Vec<char> = word.chars().collect();
    let n = chars.len();
    n >= 3
        && chars[n - 1] == 'e'
        && chars[n - 2] == 'l'
        && !matches!(chars[n - 3], 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}
