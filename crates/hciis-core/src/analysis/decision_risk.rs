//! Decision risk and ambiguity analysis.
//!
//! Works sentence by sentence. A sentence is a decision sentence when any
//! of its alphabetic words is a decision verb. Risk terms, ambiguity
//! markers, and vague phrases are substring-matched against the lower-cased
//! sentence, and every distinct entry found adds one hit, so a single
//! sentence can contribute several.

use std::collections::HashSet;

use crate::lexicon::Lexicons;
use crate::stats::{display_decimal, ratio, round_to};
use crate::text::{Tokenizer, alphabetic_only};

use super::Analyzer;
use super::reports::{DecisionRiskDetails, DecisionRiskReport};

/// Decision density above which decisions are "frequent".
const FREQUENT_DECISIONS: f64 = 0.3;
/// Ambiguity above which it is "high".
const HIGH_AMBIGUITY: f64 = 0.4;

/// Decision risk and ambiguity analyzer.
#[derive(Debug, Clone, Copy)]
pub struct DecisionRiskAnalyzer<'a> {
    tokenizer: &'a Tokenizer,
    lexicons: &'a Lexicons,
}

impl<'a> DecisionRiskAnalyzer<'a> {
    /// Borrow the shared tokenizer and lexicons.
    pub const fn new(tokenizer: &'a Tokenizer, lexicons: &'a Lexicons) -> Self {
        Self {
            tokenizer,
            lexicons,
        }
    }

    fn tally(&self, sentences: &[String]) -> DecisionRiskDetails {
        let lex = self.lexicons;
        let mut details = DecisionRiskDetails {
            decision_sentences: 0,
            risk_mentions: 0,
            ambiguity_markers: 0,
            vague_phrases: 0,
        };

        for sentence in sentences {
            let words: HashSet<String> = alphabetic_only(self.tokenizer.words(sentence))
                .into_iter()
                .collect();
            if words.iter().any(|w| lex.decision_verbs.contains(w)) {
                details.decision_sentences += 1;
            }

            let lowered = sentence.to_lowercase();
            details.risk_mentions += lex.risk.count_present(&lowered);
            details.ambiguity_markers += lex.ambiguity.count_present(&lowered);
            details.vague_phrases += lex.vague.count_present(&lowered);
        }

        details
    }
}

fn notes(density: f64, ambiguity: f64, details: &DecisionRiskDetails) -> String {
    let mut notes = Vec::with_capacity(3);

    notes.push(if density > FREQUENT_DECISIONS {
        "The text contains frequent decision-related statements."
    } else if density > 0.0 {
        "The text contains some decision-related content."
    } else {
        "Few explicit decisions are presented in the text."
    });

    notes.push(if ambiguity > HIGH_AMBIGUITY {
        "High ambiguity detected: commitments and outcomes are unclear."
    } else if ambiguity > 0.0 {
        "Moderate ambiguity detected in commitments or conditions."
    } else {
        "Decisions and commitments appear relatively clear."
    });

    if details.decision_sentences > 0 && details.risk_mentions == 0 {
        notes.push("Decisions are presented without clearly stated risks.");
    }

    notes.join(" ")
}

impl Analyzer for DecisionRiskAnalyzer<'_> {
    const NAME: &'static str = "decision_risk";
    type Report = DecisionRiskReport;

    #[tracing::instrument(skip_all, fields(text_len = text.len()))]
    fn analyze(&self, text: &str) -> DecisionRiskReport {
        let sentences = self.tokenizer.sentences(text);
        if sentences.is_empty() {
            return DecisionRiskReport {
                density: 0.0,
                ambiguity: 0.0,
                notes: "Text too short to analyze decision risk.".to_string(),
                details: None,
            };
        }

        let details = self.tally(&sentences);
        let total = sentences.len();
        let density = round_to(ratio(details.decision_sentences, total), 3);
        let ambiguity = round_to(
            ratio(details.ambiguity_markers + details.vague_phrases, total).min(1.0),
            3,
        );

        tracing::debug!(
            density = %display_decimal(density),
            ambiguity = %display_decimal(ambiguity),
            ?details,
            "decision risk analyzed"
        );

        DecisionRiskReport {
            density,
            ambiguity,
            notes: notes(density, ambiguity, &details),
            details: Some(details),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(text: &str) -> DecisionRiskReport {
        let tokenizer = Tokenizer::new().unwrap();
        DecisionRiskAnalyzer::new(&tokenizer, Lexicons::builtin()).analyze(text)
    }

    #[test]
    fn empty_text() {
        let report = analyze("");
        assert_eq!(report.density, 0.0);
        assert_eq!(report.ambiguity, 0.0);
        assert_eq!(report.notes, "Text too short to analyze decision risk.");
        assert!(report.details.is_none());
    }

    #[test]
    fn no_decisions_no_ambiguity() {
        let report = analyze("The quick brown fox jumps. The fox runs fast.");
        assert_eq!(report.density, 0.0);
        assert_eq!(report.ambiguity, 0.0);
        assert_eq!(
            report.notes,
            "Few explicit decisions are presented in the text. \
             Decisions and commitments appear relatively clear."
        );
    }

    #[test]
    fn decisions_without_risk() {
        let report = analyze("We decide today. The board will approve it. Lunch is served.");
        let details = report.details.clone().unwrap();
        assert_eq!(details.decision_sentences, 2);
        assert_eq!(details.risk_mentions, 0);
        assert_eq!(report.density, 0.667);
        assert!(report.notes.starts_with("The text contains frequent"));
        assert!(
            report
                .notes
                .ends_with("Decisions are presented without clearly stated risks.")
        );
    }

    #[test]
    fn one_sentence_contributes_many_hits() {
        let report = analyze("We may approve it, subject to change, though it could cause losses.");
        let details = report.details.unwrap();
        assert_eq!(details.decision_sentences, 1);
        // may, could, subject to
        assert_eq!(details.ambiguity_markers, 3);
        // subject to change
        assert_eq!(details.vague_phrases, 1);
        // loss, losses
        assert_eq!(details.risk_mentions, 2);
        // (3 + 1) / 1 is capped at 1
        assert_eq!(report.ambiguity, 1.0);
        assert!(report.notes.contains("High ambiguity detected"));
        assert!(!report.notes.contains("without clearly stated risks"));
    }

    #[test]
    fn moderate_ambiguity() {
        let report = analyze("Results may vary. The team met. Work ended. Everyone left.");
        assert_eq!(report.ambiguity, 0.25);
        assert!(
            report
                .notes
                .contains("Moderate ambiguity detected in commitments or conditions.")
        );
    }
}
