//! Data models for companies, extracted articles, and their analysis results.
//!
//! This module defines the core data structures used throughout the application:
//! - [`Company`]: A company record loaded from tabular input, owning a blog URL
//! - [`ExtractedArticle`]: Normalized article content produced by the extractor
//! - [`AnalysisResult`]: Deterministic metrics derived from an article body
//! - [`PerformanceRecord`]: Externally supplied engagement metrics per text
//! - Label enums: [`ComplexityLabel`], [`ToneLabel`]
//!
//! `Company` and `PerformanceRecord` derive `serde::Deserialize` so they can be
//! read directly from CSV rows; the serde rename attributes match the input
//! file headers.

use chrono::NaiveDate;
use serde::Deserialize;

/// A company whose blog listing page will be scraped.
///
/// Identifiers are caller-assigned: the tabular input owns the id space and
/// rows are upserted by `company_id`.
#[derive(Debug, Clone, Deserialize)]
pub struct Company {
    /// Caller-assigned identifier, primary key in storage.
    pub company_id: i64,
    /// Display name of the company.
    pub company_name: String,
    /// The company's blog listing page URL.
    pub company_url: String,
}

/// Engagement metrics for a persisted text, supplied by an external source.
///
/// Loaded after the scraping pipeline has run so that the `text_id` references
/// resolve against existing rows.
#[derive(Debug, Clone, Deserialize)]
pub struct PerformanceRecord {
    /// Caller-assigned identifier, primary key in storage.
    pub metrics_id: i64,
    /// The text row these metrics describe.
    pub text_id: i64,
    /// Total page views.
    pub views: i64,
    /// Click-through rate.
    #[serde(rename = "CTR")]
    pub click_through_rate: f64,
    /// Conversion rate.
    #[serde(rename = "CR")]
    pub conversion_rate: f64,
    /// Number of reshares.
    pub reshares: i64,
}

/// A normalized article record produced by the content extractor.
///
/// Construction implies validity: the extractor only builds this once the body
/// text has passed the minimum-length gate, so `body_text` is always at least
/// 50 characters and whitespace-normalized.
#[derive(Debug, Clone)]
pub struct ExtractedArticle {
    /// Article title; possibly empty when no title/h1/h2 was found.
    pub title: String,
    /// Publication date; the run's current date when none was found in markup.
    pub publication_date: NaiveDate,
    /// Category text, or the `"General"` sentinel when undetected.
    pub category: String,
    /// Always empty; no tag-extraction heuristic is defined. Known limitation.
    pub tags: String,
    /// Whitespace-normalized visible body text, length >= 50 characters.
    pub body_text: String,
}

/// Reading-complexity verdict derived from the readability score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComplexityLabel {
    /// Score above 60: easier than the optimal band.
    TooBasic,
    /// Score in the inclusive 30..=60 band.
    Optimal,
    /// Score below 30.
    TooComplex,
}

impl ComplexityLabel {
    /// Partition a Flesch reading-ease score into a complexity band.
    ///
    /// Boundaries are inclusive on the `Optimal` side: a score of exactly 30
    /// or exactly 60 is `Optimal`.
    pub fn from_score(score: f64) -> Self {
        if score > 60.0 {
            ComplexityLabel::TooBasic
        } else if score >= 30.0 {
            ComplexityLabel::Optimal
        } else {
            ComplexityLabel::TooComplex
        }
    }

    /// Storage representation of the label.
    pub fn as_str(&self) -> &'static str {
        match self {
            ComplexityLabel::TooBasic => "Too Basic",
            ComplexityLabel::Optimal => "Optimal",
            ComplexityLabel::TooComplex => "Too Complex",
        }
    }
}

/// Tone category assigned by the keyword-rule classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToneLabel {
    Inspirational,
    Authoritative,
    Persuasive,
    Humorous,
    Empathetic,
    /// Default when no keyword rule matches.
    Informative,
}

impl ToneLabel {
    /// Storage representation of the label.
    pub fn as_str(&self) -> &'static str {
        match self {
            ToneLabel::Inspirational => "Inspirational",
            ToneLabel::Authoritative => "Authoritative",
            ToneLabel::Persuasive => "Persuasive",
            ToneLabel::Humorous => "Humorous",
            ToneLabel::Empathetic => "Empathetic",
            ToneLabel::Informative => "Informative",
        }
    }
}

/// Deterministic metrics derived solely from an article's body text.
///
/// Re-running analysis on identical text yields an identical result; nothing
/// here depends on I/O or ambient state.
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    /// Whitespace-delimited token count.
    pub word_count: usize,
    /// word_count / sentence_count.
    pub avg_sentence_length: f64,
    /// Estimated reading time in minutes, floored at 1 for analyzable text.
    pub avg_reading_time: u32,
    /// Flesch reading ease; higher means easier.
    pub readability_score: f64,
    /// Complexity band, or `None` for the neutral (unanalyzable) sentinel.
    pub complexity: Option<ComplexityLabel>,
    /// Tone category from the keyword-rule classifier.
    pub tone: ToneLabel,
    /// Up to 10 non-stop-word tokens, most frequent first.
    pub top_words: Vec<String>,
}

impl AnalysisResult {
    /// Neutral result for input that produced no analyzable tokens.
    ///
    /// Substituted instead of propagating an error so that one degenerate
    /// article never aborts processing of its siblings.
    pub fn neutral() -> Self {
        AnalysisResult {
            word_count: 0,
            avg_sentence_length: 0.0,
            avg_reading_time: 0,
            readability_score: 0.0,
            complexity: None,
            tone: ToneLabel::Informative,
            top_words: Vec::new(),
        }
    }

    /// Storage representation of the complexity label.
    ///
    /// The neutral sentinel is persisted as `"Informative"`, the value
    /// downstream analytics expect for unanalyzable rows.
    pub fn complexity_str(&self) -> &'static str {
        match self.complexity {
            Some(label) => label.as_str(),
            None => "Informative",
        }
    }

    /// Display list of the most frequent words, comma-joined.
    pub fn top_words_joined(&self) -> String {
        self.top_words.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complexity_partition_boundaries() {
        assert_eq!(ComplexityLabel::from_score(60.1), ComplexityLabel::TooBasic);
        assert_eq!(ComplexityLabel::from_score(60.0), ComplexityLabel::Optimal);
        assert_eq!(ComplexityLabel::from_score(45.0), ComplexityLabel::Optimal);
        assert_eq!(ComplexityLabel::from_score(30.0), ComplexityLabel::Optimal);
        assert_eq!(
            ComplexityLabel::from_score(29.9),
            ComplexityLabel::TooComplex
        );
    }

    #[test]
    fn test_complexity_as_str() {
        assert_eq!(ComplexityLabel::TooBasic.as_str(), "Too Basic");
        assert_eq!(ComplexityLabel::Optimal.as_str(), "Optimal");
        assert_eq!(ComplexityLabel::TooComplex.as_str(), "Too Complex");
    }

    #[test]
    fn test_tone_as_str() {
        assert_eq!(ToneLabel::Inspirational.as_str(), "Inspirational");
        assert_eq!(ToneLabel::Informative.as_str(), "Informative");
    }

    #[test]
    fn test_neutral_result() {
        let neutral = AnalysisResult::neutral();
        assert_eq!(neutral.word_count, 0);
        assert_eq!(neutral.avg_reading_time, 0);
        assert_eq!(neutral.complexity, None);
        assert_eq!(neutral.complexity_str(), "Informative");
        assert_eq!(neutral.tone, ToneLabel::Informative);
        assert!(neutral.top_words.is_empty());
    }

    #[test]
    fn test_top_words_joined() {
        let mut result = AnalysisResult::neutral();
        result.top_words = vec!["data".to_string(), "pipeline".to_string()];
        assert_eq!(result.top_words_joined(), "data, pipeline");
    }

    #[test]
    fn test_company_from_csv_row() {
        let rows = "company_id,company_name,company_url\n\
                    7,Acme,https://acme.example/blog\n";
        let mut reader = csv::Reader::from_reader(rows.as_bytes());
        let company: Company = reader.deserialize().next().unwrap().unwrap();
        assert_eq!(company.company_id, 7);
        assert_eq!(company.company_name, "Acme");
        assert_eq!(company.company_url, "https://acme.example/blog");
    }

    #[test]
    fn test_performance_record_from_csv_row() {
        let rows = "metrics_id,text_id,views,CTR,CR,reshares\n\
                    1,42,1000,0.12,0.03,9\n";
        let mut reader = csv::Reader::from_reader(rows.as_bytes());
        let record: PerformanceRecord = reader.deserialize().next().unwrap().unwrap();
        assert_eq!(record.metrics_id, 1);
        assert_eq!(record.text_id, 42);
        assert_eq!(record.views, 1000);
        assert!((record.click_through_rate - 0.12).abs() < f64::EPSILON);
        assert!((record.conversion_rate - 0.03).abs() < f64::EPSILON);
        assert_eq!(record.reshares, 9);
    }
}
