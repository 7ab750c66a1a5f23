//! Emotion and tone analysis.
//!
//! Counts category words, picks a dominant emotion, measures how often
//! sentences mix positive and negative polarity, and flags affect that the
//! category lexicons miss.

use std::collections::HashSet;

use crate::lexicon::{Lexicon, Lexicons};
use crate::stats::{display_decimal, ratio, round_to};
use crate::text::{Tokenizer, alphabetic_only};

use super::Analyzer;
use super::reports::{DominantEmotion, EmotionCounts, EmotionReport};

/// An emotion category. Declaration order is the tie-break priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Emotion {
    /// Happiness, hope, relief.
    Joy,
    /// Loss, grief, regret.
    Sadness,
    /// Hostility and frustration.
    Anger,
    /// Threat and anxiety.
    Fear,
    /// The unexpected.
    Surprise,
}

impl Emotion {
    /// Every category in priority order.
    pub const ALL: [Self; 5] = [
        Self::Joy,
        Self::Sadness,
        Self::Anger,
        Self::Fear,
        Self::Surprise,
    ];
}

impl From<Emotion> for DominantEmotion {
    fn from(emotion: Emotion) -> Self {
        match emotion {
            Emotion::Joy => Self::Joy,
            Emotion::Sadness => Self::Sadness,
            Emotion::Anger => Self::Anger,
            Emotion::Fear => Self::Fear,
            Emotion::Surprise => Self::Surprise,
        }
    }
}

/// Emotion and tone analyzer.
#[derive(Debug, Clone, Copy)]
pub struct EmotionAnalyzer<'a> {
    tokenizer: &'a Tokenizer,
    lexicons: &'a Lexicons,
}

impl<'a> EmotionAnalyzer<'a> {
    /// Borrow the shared tokenizer and lexicons.
    pub const fn new(tokenizer: &'a Tokenizer, lexicons: &'a Lexicons) -> Self {
        Self {
            tokenizer,
            lexicons,
        }
    }

    /// First category holding the highest count, or `Neutral` if every
    /// count is zero.
    pub fn dominant(counts: &EmotionCounts) -> DominantEmotion {
        let mut best: Option<(Emotion, usize)> = None;
        for emotion in Emotion::ALL {
            let count = category_count(counts, emotion);
            if count > best.map_or(0, |(_, c)| c) {
                best = Some((emotion, count));
            }
        }
        best.map_or(DominantEmotion::Neutral, |(emotion, _)| emotion.into())
    }

    fn sentence_is_volatile(&self, sentence: &str) -> bool {
        let words: HashSet<String> = alphabetic_only(self.tokenizer.words(sentence))
            .into_iter()
            .collect();
        let has = |lexicon: &Lexicon| words.iter().any(|w| lexicon.contains(w));
        has(&self.lexicons.positive) && has(&self.lexicons.negative)
    }
}

fn category_count(counts: &EmotionCounts, emotion: Emotion) -> usize {
    match emotion {
        Emotion::Joy => counts.joy,
        Emotion::Sadness => counts.sadness,
        Emotion::Anger => counts.anger,
        Emotion::Fear => counts.fear,
        Emotion::Surprise => counts.surprise,
    }
}

impl Analyzer for EmotionAnalyzer<'_> {
    const NAME: &'static str = "emotion";
    type Report = EmotionReport;

    #[tracing::instrument(skip_all, fields(text_len = text.len()))]
    fn analyze(&self, text: &str) -> EmotionReport {
        let words = alphabetic_only(self.tokenizer.words(text));
        if words.is_empty() {
            return EmotionReport {
                dominant: DominantEmotion::Neutral,
                volatility: 0.0,
                suppressed: false,
                summary: "Text too short for emotion analysis.".to_string(),
                counts: None,
            };
        }

        let categories = &self.lexicons.emotions;
        let counts = EmotionCounts {
            joy: categories.get(Emotion::Joy).count_in(&words),
            sadness: categories.get(Emotion::Sadness).count_in(&words),
            anger: categories.get(Emotion::Anger).count_in(&words),
            fear: categories.get(Emotion::Fear).count_in(&words),
            surprise: categories.get(Emotion::Surprise).count_in(&words),
        };
        let dominant = Self::dominant(&counts);

        let polarity =
            self.lexicons.positive.count_in(&words) + self.lexicons.negative.count_in(&words);

        let sentences = self.tokenizer.sentences(text);
        let mixed = sentences
            .iter()
            .filter(|s| self.sentence_is_volatile(s))
            .count();
        let volatility = round_to(ratio(mixed, sentences.len().max(1)), 3);

        let suppressed = dominant == DominantEmotion::Neutral && polarity > 0;
        let note = if suppressed {
            "Emotion appears suppressed or indirectly expressed."
        } else {
            "Emotional tone appears explicit."
        };
        let summary = format!(
            "The dominant emotional tone is {dominant}. Emotional volatility is {}. {note}",
            display_decimal(volatility)
        );

        tracing::debug!(%dominant, volatility, suppressed, "emotion analyzed");

        EmotionReport {
            dominant,
            volatility,
            suppressed,
            summary,
            counts: Some(counts),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(text: &str) -> EmotionReport {
        let tokenizer = Tokenizer::new().unwrap();
        EmotionAnalyzer::new(&tokenizer, Lexicons::builtin()).analyze(text)
    }

    #[test]
    fn empty_text_is_neutral() {
        let report = analyze("");
        assert_eq!(report.dominant, DominantEmotion::Neutral);
        assert_eq!(report.volatility, 0.0);
        assert!(report.counts.is_none());
        assert_eq!(report.summary, "Text too short for emotion analysis.");
    }

    #[test]
    fn punctuation_only_is_degenerate() {
        let report = analyze("... !!! 42");
        assert!(report.counts.is_none());
    }

    #[test]
    fn dominant_category() {
        let report = analyze("I am happy and hopeful. Still happy, but a little sad.");
        assert_eq!(report.dominant, DominantEmotion::Joy);
        let counts = report.counts.unwrap();
        assert_eq!(counts.joy, 2);
        assert_eq!(counts.sadness, 1);
    }

    #[test]
    fn tie_breaks_by_declaration_order() {
        // one fear word, one joy word: joy is declared first
        let report = analyze("They were afraid, then happy.");
        assert_eq!(report.dominant, DominantEmotion::Joy);
        let report = analyze("They were angry and sad.");
        assert_eq!(report.dominant, DominantEmotion::Sadness);
    }

    #[test]
    fn categories_counted_independently() {
        let report = analyze("Fear of loss.");
        let counts = report.counts.unwrap();
        assert_eq!(counts.fear, 1);
        assert_eq!(counts.sadness, 1);
    }

    #[test]
    fn volatility_counts_mixed_sentences() {
        let report = analyze("The results were good but costly. The team met. It ended.");
        assert_eq!(report.volatility, 0.333);
        assert!(report.summary.contains("Emotional volatility is 0.333."));
    }

    #[test]
    fn suppressed_when_only_polarity_present() {
        let report = analyze("The plan was good and effective.");
        assert_eq!(report.dominant, DominantEmotion::Neutral);
        assert!(report.suppressed);
        assert_eq!(
            report.summary,
            "The dominant emotional tone is Neutral. Emotional volatility is 0.0. \
             Emotion appears suppressed or indirectly expressed."
        );
    }

    #[test]
    fn explicit_when_category_present() {
        let report = analyze("We are happy with the good result.");
        assert!(!report.suppressed);
        assert!(report.summary.ends_with("Emotional tone appears explicit."));
    }

    #[test]
    fn dominant_of_zero_counts_is_neutral() {
        assert_eq!(
            EmotionAnalyzer::dominant(&EmotionCounts::default()),
            DominantEmotion::Neutral
        );
    }
}
