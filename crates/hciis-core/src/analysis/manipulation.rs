//! Manipulation and persuasion detection.
//!
//! Fear, certainty, and emotionally loaded words are counted against the
//! alphabetic word sequence and normalized by word count. Authority phrases
//! are matched against the whole lower-cased text and normalized by
//! sentence count, since they occur far more sparsely.

use crate::lexicon::Lexicons;
use crate::stats::{ratio, round_to};
use crate::text::{Tokenizer, alphabetic_only};

use super::Analyzer;
use super::reports::{ManipulationBreakdown, ManipulationReport};

const FEAR_WEIGHT: f64 = 30.0;
const CERTAINTY_WEIGHT: f64 = 25.0;
const EMOTIONAL_WEIGHT: f64 = 25.0;
const AUTHORITY_WEIGHT: f64 = 20.0;

/// Manipulation and persuasion analyzer.
#[derive(Debug, Clone, Copy)]
pub struct ManipulationAnalyzer<'a> {
    tokenizer: &'a Tokenizer,
    lexicons: &'a Lexicons,
}

impl<'a> ManipulationAnalyzer<'a> {
    /// Borrow the shared tokenizer and lexicons.
    pub const fn new(tokenizer: &'a Tokenizer, lexicons: &'a Lexicons) -> Self {
        Self {
            tokenizer,
            lexicons,
        }
    }
}

fn explain(b: &ManipulationBreakdown) -> String {
    let mut parts = Vec::new();
    if b.fear_terms > 0 {
        parts.push(format!(
            "Fear framing detected ({} fear-related terms).",
            b.fear_terms
        ));
    }
    if b.authority_phrases > 0 {
        parts.push(format!(
            "Authority masking present ({} authoritative phrases without evidence).",
            b.authority_phrases
        ));
    }
    if b.certainty_terms > 0 {
        parts.push(format!(
            "High certainty language used ({} absolute terms).",
            b.certainty_terms
        ));
    }
    if b.emotional_terms > 0 {
        parts.push(format!(
            "Emotionally loaded language detected ({} terms).",
            b.emotional_terms
        ));
    }

    if parts.is_empty() {
        "Minimal manipulative or persuasive language detected. \
         The text appears largely informational."
            .to_string()
    } else {
        parts.join(" ")
    }
}

impl Analyzer for ManipulationAnalyzer<'_> {
    const NAME: &'static str = "manipulation";
    type Report = ManipulationReport;

    #[tracing::instrument(skip_all, fields(text_len = text.len()))]
    fn analyze(&self, text: &str) -> ManipulationReport {
        let words = alphabetic_only(self.tokenizer.words(text));
        if words.is_empty() {
            return ManipulationReport {
                score: 0.0,
                details: "Text too short to analyze manipulation.".to_string(),
                breakdown: None,
            };
        }

        let lex = self.lexicons;
        let breakdown = ManipulationBreakdown {
            fear_terms: lex.fear.count_in(&words),
            authority_phrases: lex.authority.count_present(&text.to_lowercase()),
            certainty_terms: lex.certainty.count_in(&words),
            emotional_terms: lex.emotional.count_in(&words),
        };

        let total = words.len();
        let sentence_factor = self.tokenizer.sentences(text).len().max(1);
        let raw = FEAR_WEIGHT * ratio(breakdown.fear_terms, total)
            + CERTAINTY_WEIGHT * ratio(breakdown.certainty_terms, total)
            + EMOTIONAL_WEIGHT * ratio(breakdown.emotional_terms, total)
            + AUTHORITY_WEIGHT * ratio(breakdown.authority_phrases, sentence_factor);
        let score = round_to((raw * 100.0).min(100.0), 2);

        tracing::debug!(score, ?breakdown, "manipulation analyzed");

        ManipulationReport {
            score,
            details: explain(&breakdown),
            breakdown: Some(breakdown),
        }
    }
}
