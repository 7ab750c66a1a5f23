//! Information quality index.
//!
//! Rewards evidence vocabulary and varied sentence structure, and penalizes
//! intensifiers and repetition. Rhetoric and redundancy terms are inverted
//! so lower values raise the index.

use crate::lexicon::Lexicons;
use crate::stats::{population_variance, ratio, redundancy_ratio, round_to};
use crate::text::{Tokenizer, alphabetic_only};

use super::Analyzer;
use super::reports::{InformationQualityDetails, InformationQualityReport};

const EVIDENCE_CAP: f64 = 0.05;
const RHETORIC_CAP: f64 = 0.05;
const VARIANCE_CAP: f64 = 40.0;

const EVIDENCE_WEIGHT: f64 = 0.35;
const RHETORIC_WEIGHT: f64 = 0.25;
const REDUNDANCY_WEIGHT: f64 = 0.25;
const VARIANCE_WEIGHT: f64 = 0.15;

/// Threshold shared by the evidence and rhetoric interpretations.
const NOTABLE_DENSITY: f64 = 0.02;
const HIGH_REDUNDANCY: f64 = 0.5;

/// Information quality analyzer.
#[derive(Debug, Clone, Copy)]
pub struct InformationQualityAnalyzer<'a> {
    tokenizer: &'a Tokenizer,
    lexicons: &'a Lexicons,
}

impl<'a> InformationQualityAnalyzer<'a> {
    /// Borrow the shared tokenizer and lexicons.
    pub const fn new(tokenizer: &'a Tokenizer, lexicons: &'a Lexicons) -> Self {
        Self {
            tokenizer,
            lexicons,
        }
    }
}

/// Quality index on a 0–100 scale, rounded to 2 decimals.
pub fn quality_index(evidence: f64, rhetoric: f64, redundancy: f64, variance: f64) -> f64 {
    let raw = EVIDENCE_WEIGHT * (evidence / EVIDENCE_CAP).min(1.0)
        + RHETORIC_WEIGHT * (1.0 - (rhetoric / RHETORIC_CAP).min(1.0))
        + REDUNDANCY_WEIGHT * (1.0 - redundancy)
        + VARIANCE_WEIGHT * (variance / VARIANCE_CAP).min(1.0);
    round_to(raw * 100.0, 2)
}

fn interpret(evidence: f64, rhetoric: f64, redundancy: f64) -> String {
    let evidence = if evidence > NOTABLE_DENSITY {
        "Evidence-backed language detected."
    } else {
        "Limited explicit evidence detected."
    };
    let rhetoric = if rhetoric > NOTABLE_DENSITY {
        "Rhetorical emphasis is relatively high."
    } else {
        "Rhetorical emphasis is minimal."
    };
    let redundancy = if redundancy > HIGH_REDUNDANCY {
        "High redundancy suggests filler content."
    } else {
        "Low redundancy suggests informational density."
    };
    [evidence, rhetoric, redundancy].join(" ")
}

impl Analyzer for InformationQualityAnalyzer<'_> {
    const NAME: &'static str = "information_quality";
    type Report = InformationQualityReport;

    #[tracing::instrument(skip_all, fields(text_len = text.len()))]
    fn analyze(&self, text: &str) -> InformationQualityReport {
        let sentences = self.tokenizer.sentences(text);
        let words = alphabetic_only(self.tokenizer.words(text));
        if sentences.is_empty() || words.is_empty() {
            return InformationQualityReport {
                quality: 0.0,
                analysis: "Text too short to assess information quality.".to_string(),
                details: None,
            };
        }

        let total = words.len();
        let evidence = ratio(self.lexicons.evidence.count_in(&words), total);
        let rhetoric = ratio(self.lexicons.rhetorical.count_in(&words), total);
        let redundancy = redundancy_ratio(&words);

        // Sentence lengths count every token, punctuation included
        let lengths: Vec<usize> = sentences
            .iter()
            .map(|s| self.tokenizer.words(s).len())
            .collect();
        let variance = population_variance(&lengths);

        let quality = quality_index(evidence, rhetoric, redundancy, variance);

        tracing::debug!(quality, evidence, rhetoric, redundancy, "information quality analyzed");

        InformationQualityReport {
            quality,
            analysis: interpret(evidence, rhetoric, redundancy),
            details: Some(InformationQualityDetails {
                evidence_density: round_to(evidence, 4),
                rhetoric_density: round_to(rhetoric, 4),
                redundancy_ratio: round_to(redundancy, 4),
                sentence_variance: round_to(variance, 2),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(text: &str) -> InformationQualityReport {
        let tokenizer = Tokenizer::new().unwrap();
        InformationQualityAnalyzer::new(&tokenizer, Lexicons::builtin()).analyze(text)
    }

    #[test]
    fn empty_text() {
        let report = analyze("");
        assert_eq!(report.quality, 0.0);
        assert_eq!(report.analysis, "Text too short to assess information quality.");
        assert!(report.details.is_none());
    }

    #[test]
    fn no_words_is_degenerate() {
        let report = analyze("123 456.");
        assert_eq!(report.quality, 0.0);
        assert!(report.details.is_none());
    }

    #[test]
    fn fox_has_no_evidence() {
        let report = analyze("The quick brown fox jumps. The fox runs fast.");
        let details = report.details.unwrap();
        assert_eq!(details.evidence_density, 0.0);
        assert_eq!(details.rhetoric_density, 0.0);
        // 9 words, 7 distinct
        assert_eq!(details.redundancy_ratio, 0.2222);
        assert_eq!(details.sentence_variance, 0.25);
        assert_eq!(
            report.analysis,
            "Limited explicit evidence detected. Rhetorical emphasis is minimal. \
             Low redundancy suggests informational density."
        );
    }

    #[test]
    fn evidence_raises_quality() {
        let plain = analyze("The team shipped the new release to customers last week.");
        let backed = analyze("The survey data and study results support the release.");
        assert!(backed.quality > plain.quality);
        assert!(backed.analysis.starts_with("Evidence-backed language detected."));
    }

    #[test]
    fn rhetoric_and_repetition_lower_quality() {
        let report = analyze("Very very very very very clearly clearly obviously true.");
        let details = report.details.unwrap();
        assert!(details.redundancy_ratio > 0.5);
        assert!(report.analysis.contains("Rhetorical emphasis is relatively high."));
        assert!(report.analysis.contains("High redundancy suggests filler content."));
        assert!(report.quality < 25.0);
    }

    #[test]
    fn index_bounds() {
        assert_eq!(quality_index(1.0, 0.0, 0.0, 100.0), 100.0);
        assert_eq!(quality_index(0.0, 1.0, 1.0, 0.0), 0.0);
    }
}
