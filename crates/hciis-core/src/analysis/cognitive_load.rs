//! Cognitive load estimation.
//!
//! Combines average sentence length, sentence length variance, and lexical
//! density. Each term is capped before weighting so no single measurement
//! can push the score past its share.

use crate::lexicon::Lexicons;
use crate::stats::{display_decimal, lexical_density, mean, population_variance, round_to};
use crate::text::Tokenizer;

use super::Analyzer;
use super::reports::{AttentionDrop, CognitiveLoadBreakdown, CognitiveLoadReport};

/// Average sentence length (tokens) at which the length term saturates.
const LENGTH_CAP: f64 = 25.0;
/// Sentence length variance at which the variation term saturates.
const VARIANCE_CAP: f64 = 50.0;
/// Lexical density at which the density term saturates.
const DENSITY_CAP: f64 = 0.7;

const LENGTH_WEIGHT: f64 = 40.0;
const VARIANCE_WEIGHT: f64 = 30.0;
const DENSITY_WEIGHT: f64 = 30.0;

/// Cognitive load analyzer.
#[derive(Debug, Clone, Copy)]
pub struct CognitiveLoadAnalyzer<'a> {
    tokenizer: &'a Tokenizer,
    lexicons: &'a Lexicons,
}

impl<'a> CognitiveLoadAnalyzer<'a> {
    /// Borrow the shared tokenizer and lexicons.
    pub const fn new(tokenizer: &'a Tokenizer, lexicons: &'a Lexicons) -> Self {
        Self {
            tokenizer,
            lexicons,
        }
    }
}

/// Weighted load score from the three raw measurements, rounded to 2 decimals.
pub fn load_score(avg_sentence_length: f64, sentence_variance: f64, density: f64) -> f64 {
    let raw = LENGTH_WEIGHT * (avg_sentence_length / LENGTH_CAP).min(1.0)
        + VARIANCE_WEIGHT * (sentence_variance / VARIANCE_CAP).min(1.0)
        + DENSITY_WEIGHT * (density / DENSITY_CAP).min(1.0);
    round_to(raw, 2)
}

impl Analyzer for CognitiveLoadAnalyzer<'_> {
    const NAME: &'static str = "cognitive_load";
    type Report = CognitiveLoadReport;

    #[tracing::instrument(skip_all, fields(text_len = text.len()))]
    fn analyze(&self, text: &str) -> CognitiveLoadReport {
        let sentences = self.tokenizer.sentences(text);
        if sentences.is_empty() {
            return CognitiveLoadReport {
                load: 0.0,
                attention_drop: AttentionDrop::Low,
                explanation: "Text too short to analyze cognitive load.".to_string(),
                breakdown: None,
            };
        }

        // Punctuation tokens count toward length and density denominators
        let lengths: Vec<usize> = sentences
            .iter()
            .map(|s| self.tokenizer.words(s).len())
            .collect();
        let words = self.tokenizer.words(text);

        let avg = mean(&lengths);
        let variance = population_variance(&lengths);
        let density = lexical_density(&words, &self.lexicons.stop_words);

        let load = load_score(avg, variance, density);
        let attention_drop = AttentionDrop::from_load(load);

        let explanation = format!(
            "The cognitive load is influenced by an average sentence length of {} words, \
             sentence structure variation, and a lexical density of {}. \
             Higher values indicate greater mental effort required to process the text.",
            display_decimal(round_to(avg, 1)),
            display_decimal(density)
        );

        tracing::debug!(load, %attention_drop, sentences = sentences.len(), "cognitive load analyzed");

        CognitiveLoadReport {
            load,
            attention_drop,
            explanation,
            breakdown: Some(CognitiveLoadBreakdown {
                avg_sentence_length: round_to(avg, 2),
                sentence_variance: round_to(variance, 2),
                lexical_density: density,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(text: &str) -> CognitiveLoadReport {
        let tokenizer = Tokenizer::new().unwrap();
        CognitiveLoadAnalyzer::new(&tokenizer, Lexicons::builtin()).analyze(text)
    }

    #[test]
    fn empty_text_is_low() {
        let report = analyze("");
        assert_eq!(report.load, 0.0);
        assert_eq!(report.attention_drop, AttentionDrop::Low);
        assert_eq!(report.explanation, "Text too short to analyze cognitive load.");
        assert!(report.breakdown.is_none());
    }

    #[test]
    fn short_sentences() {
        let report = analyze("The quick brown fox jumps. The fox runs fast.");
        let breakdown = report.breakdown.unwrap();
        // 6 and 5 tokens including the periods
        assert_eq!(breakdown.avg_sentence_length, 5.5);
        assert_eq!(breakdown.sentence_variance, 0.25);
        assert_eq!(breakdown.lexical_density, 0.636);
        assert_eq!(report.load, 36.21);
        assert_eq!(report.attention_drop, AttentionDrop::Low);
        assert!(report.explanation.contains("average sentence length of 5.5 words"));
        assert!(report.explanation.contains("lexical density of 0.636."));
    }

    #[test]
    fn density_term_saturates() {
        let words = [
            "granite", "harbor", "lantern", "meadow", "quartz", "saffron", "timber", "velvet",
            "walnut", "zephyr", "amber", "bramble", "cobalt", "dune", "ember", "fjord", "glacier",
            "heron", "ivory", "juniper", "kelp", "lichen", "marble", "nectar", "orchid", "pebble",
            "quill", "rapids", "sparrow", "thistle", "umber", "violet", "willow", "yarrow",
            "zinnia", "acorn", "basalt", "cedar", "delta", "egret",
        ];
        let text = format!("{}.", words.join(" "));
        let report = analyze(&text);
        let breakdown = report.breakdown.unwrap();
        // 40 content words over 41 tokens
        assert!(breakdown.lexical_density >= 0.97);
        // length term saturates at 40, variance is 0, density term at 30
        assert_eq!(report.load, 70.0);
        assert_eq!(report.attention_drop, AttentionDrop::Medium);
    }

    #[test]
    fn load_is_capped() {
        assert_eq!(load_score(1000.0, 1000.0, 1.0), 100.0);
        assert_eq!(load_score(0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn high_variance_raises_load() {
        let uniform = analyze("One two three. Four five six. Seven eight nine.");
        let varied = analyze(
            "Go. The committee reviewed every single outstanding proposal \
             submitted during the long autumn session before reaching any conclusion. Stop.",
        );
        assert!(varied.load > uniform.load);
    }
}
