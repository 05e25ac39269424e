//! Deterministic text analytics over extracted article bodies.
//!
//! Two leaf analyzers, both pure functions of their input text:
//!
//! 1. **Lexical** ([`lexical`]): token/sentence counts, reading time,
//!    Flesch reading ease, complexity band, top frequent words
//! 2. **Tone** ([`tone`]): one categorical label via ordered
//!    keyword-presence rules
//!
//! The orchestrator runs both and combines their outputs into a single
//! [`AnalysisResult`]. Determinism is a contract: identical body text must
//! produce an identical result on every run, which is why the analyzers
//! hold only immutable word tables and never touch I/O.

pub mod lexical;
pub mod tone;

use crate::models::{AnalysisResult, ToneLabel};
use lexical::LexicalReport;

/// Combine the lexical report and tone label into one analysis result.
pub fn combine(report: LexicalReport, tone: ToneLabel) -> AnalysisResult {
    AnalysisResult {
        word_count: report.word_count,
        avg_sentence_length: report.avg_sentence_length,
        avg_reading_time: report.avg_reading_time,
        readability_score: report.readability_score,
        complexity: report.complexity,
        tone,
        top_words: report.top_words,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ComplexityLabel;

    #[test]
    fn test_combine_preserves_report_fields() {
        let report = LexicalReport {
            word_count: 400,
            avg_sentence_length: 20.0,
            avg_reading_time: 2,
            readability_score: 52.5,
            complexity: Some(ComplexityLabel::Optimal),
            top_words: vec!["pipeline".to_string()],
        };
        let result = combine(report.clone(), ToneLabel::Authoritative);
        assert_eq!(result.word_count, 400);
        assert_eq!(result.avg_reading_time, 2);
        assert_eq!(result.complexity, Some(ComplexityLabel::Optimal));
        assert_eq!(result.tone, ToneLabel::Authoritative);
        assert_eq!(result.top_words, report.top_words);
    }

    #[test]
    fn test_combine_neutral_report() {
        let result = combine(LexicalReport::neutral(), ToneLabel::Informative);
        assert_eq!(result.word_count, 0);
        assert_eq!(result.complexity_str(), "Informative");
    }
}
