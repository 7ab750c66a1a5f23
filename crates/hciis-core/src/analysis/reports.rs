//! Result records produced by the five analyzers.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for
//! use in both CLI JSON output and MCP tool responses. Records are built
//! once per analysis call and never mutated afterwards; presentation code
//! renders them as-is.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::stats::display_decimal;

use super::MetricReport;

/// Every selected metric for one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DocumentReport {
    /// Cognitive load estimate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cognitive_load: Option<CognitiveLoadReport>,
    /// Manipulative and persuasive framing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manipulation: Option<ManipulationReport>,
    /// Emotional tone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emotion: Option<EmotionReport>,
    /// Decision risk and ambiguity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decision_risk: Option<DecisionRiskReport>,
    /// Information quality index.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub information_quality: Option<InformationQualityReport>,
}

impl DocumentReport {
    /// The present sections in canonical metric order.
    pub fn sections(&self) -> Vec<&dyn MetricReport> {
        let mut sections: Vec<&dyn MetricReport> = Vec::with_capacity(5);
        if let Some(r) = &self.cognitive_load {
            sections.push(r);
        }
        if let Some(r) = &self.manipulation {
            sections.push(r);
        }
        if let Some(r) = &self.emotion {
            sections.push(r);
        }
        if let Some(r) = &self.decision_risk {
            sections.push(r);
        }
        if let Some(r) = &self.information_quality {
            sections.push(r);
        }
        sections
    }
}

// -- Cognitive Load ---------------------------------------------------------

/// Likelihood that a reader's attention drops off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum AttentionDrop {
    /// Load of 40 or below.
    Low,
    /// Load above 40, up to 70.
    Medium,
    /// Load above 70.
    High,
}

impl AttentionDrop {
    /// Classify a load score.
    pub fn from_load(load: f64) -> Self {
        if load > 70.0 {
            Self::High
        } else if load > 40.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

impl fmt::Display for AttentionDrop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        };
        f.write_str(s)
    }
}

/// Cognitive load estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CognitiveLoadReport {
    /// Load score, 0–100.
    pub load: f64,
    /// Attention drop risk tier.
    pub attention_drop: AttentionDrop,
    /// Templated explanation embedding the raw measurements.
    pub explanation: String,
    /// Raw measurements; absent for degenerate input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<CognitiveLoadBreakdown>,
}

/// Raw measurements behind a cognitive load score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CognitiveLoadBreakdown {
    /// Mean sentence length in tokens.
    pub avg_sentence_length: f64,
    /// Population variance of sentence lengths.
    pub sentence_variance: f64,
    /// Content-word share of all tokens, 0–1.
    pub lexical_density: f64,
}

impl MetricReport for CognitiveLoadReport {
    fn title(&self) -> &'static str {
        "Cognitive Load"
    }

    fn headline(&self) -> String {
        format!(
            "Load: {} / 100 (attention drop risk: {})",
            display_decimal(self.load),
            self.attention_drop
        )
    }

    fn explanation(&self) -> &str {
        &self.explanation
    }

    fn breakdown(&self) -> Vec<(&'static str, f64)> {
        self.breakdown.as_ref().map_or_else(Vec::new, |b| {
            vec![
                ("avg_sentence_length", b.avg_sentence_length),
                ("sentence_variance", b.sentence_variance),
                ("lexical_density", b.lexical_density),
            ]
        })
    }
}

// -- Manipulation -----------------------------------------------------------

/// Manipulative and persuasive framing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ManipulationReport {
    /// Composite score, 0–100.
    pub score: f64,
    /// One clause per detected category.
    pub details: String,
    /// Raw counts; absent for degenerate input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<ManipulationBreakdown>,
}

/// Raw counts behind a manipulation score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ManipulationBreakdown {
    /// Fear framing words.
    pub fear_terms: usize,
    /// Distinct appeals to unnamed authority.
    pub authority_phrases: usize,
    /// Absolute terms.
    pub certainty_terms: usize,
    /// Emotionally loaded words.
    pub emotional_terms: usize,
}

impl MetricReport for ManipulationReport {
    fn title(&self) -> &'static str {
        "Manipulation & Persuasion"
    }

    fn headline(&self) -> String {
        format!("Score: {} / 100", display_decimal(self.score))
    }

    fn explanation(&self) -> &str {
        &self.details
    }

    fn breakdown(&self) -> Vec<(&'static str, f64)> {
        self.breakdown.as_ref().map_or_else(Vec::new, |b| {
            vec![
                ("fear_terms", b.fear_terms as f64),
                ("authority_phrases", b.authority_phrases as f64),
                ("certainty_terms", b.certainty_terms as f64),
                ("emotional_terms", b.emotional_terms as f64),
            ]
        })
    }
}

// -- Emotion ----------------------------------------------------------------

/// The strongest emotion category, or `Neutral` when none registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum DominantEmotion {
    /// Joy words dominate.
    Joy,
    /// Sadness words dominate.
    Sadness,
    /// Anger words dominate.
    Anger,
    /// Fear words dominate.
    Fear,
    /// Surprise words dominate.
    Surprise,
    /// No category word occurred.
    Neutral,
}

impl fmt::Display for DominantEmotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Joy => "Joy",
            Self::Sadness => "Sadness",
            Self::Anger => "Anger",
            Self::Fear => "Fear",
            Self::Surprise => "Surprise",
            Self::Neutral => "Neutral",
        };
        f.write_str(s)
    }
}

/// Emotional tone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EmotionReport {
    /// Dominant category.
    pub dominant: DominantEmotion,
    /// Share of sentences mixing positive and negative polarity, 0–1.
    pub volatility: f64,
    /// Polarity present while no category registered.
    pub suppressed: bool,
    /// Narrative summary.
    pub summary: String,
    /// Per-category word counts; absent for degenerate input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counts: Option<EmotionCounts>,
}

/// Per-category word counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct EmotionCounts {
    /// Joy words.
    pub joy: usize,
    /// Sadness words.
    pub sadness: usize,
    /// Anger words.
    pub anger: usize,
    /// Fear words.
    pub fear: usize,
    /// Surprise words.
    pub surprise: usize,
}

impl MetricReport for EmotionReport {
    fn title(&self) -> &'static str {
        "Emotion & Tone"
    }

    fn headline(&self) -> String {
        format!(
            "Dominant: {} (volatility {})",
            self.dominant,
            display_decimal(self.volatility)
        )
    }

    fn explanation(&self) -> &str {
        &self.summary
    }

    fn breakdown(&self) -> Vec<(&'static str, f64)> {
        self.counts.as_ref().map_or_else(Vec::new, |c| {
            vec![
                ("joy", c.joy as f64),
                ("sadness", c.sadness as f64),
                ("anger", c.anger as f64),
                ("fear", c.fear as f64),
                ("surprise", c.surprise as f64),
            ]
        })
    }
}

// -- Decision Risk ----------------------------------------------------------

/// Decision risk and ambiguity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DecisionRiskReport {
    /// Share of sentences containing a decision verb, 0–1.
    pub density: f64,
    /// Hedges and vague commitments per sentence, capped at 1.
    pub ambiguity: f64,
    /// Narrative notes.
    pub notes: String,
    /// Raw counts; absent for degenerate input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<DecisionRiskDetails>,
}

/// Raw counts behind decision density and ambiguity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DecisionRiskDetails {
    /// Sentences containing at least one decision verb.
    pub decision_sentences: usize,
    /// Risk term hits summed over sentences.
    pub risk_mentions: usize,
    /// Ambiguity marker hits summed over sentences.
    pub ambiguity_markers: usize,
    /// Vague commitment hits summed over sentences.
    pub vague_phrases: usize,
}

impl MetricReport for DecisionRiskReport {
    fn title(&self) -> &'static str {
        "Decision Risk & Ambiguity"
    }

    fn headline(&self) -> String {
        format!(
            "Decision density: {}, ambiguity: {}",
            display_decimal(self.density),
            display_decimal(self.ambiguity)
        )
    }

    fn explanation(&self) -> &str {
        &self.notes
    }

    fn breakdown(&self) -> Vec<(&'static str, f64)> {
        self.details.as_ref().map_or_else(Vec::new, |d| {
            vec![
                ("decision_sentences", d.decision_sentences as f64),
                ("risk_mentions", d.risk_mentions as f64),
                ("ambiguity_markers", d.ambiguity_markers as f64),
                ("vague_phrases", d.vague_phrases as f64),
            ]
        })
    }
}

// -- Information Quality ----------------------------------------------------

/// Information quality index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct InformationQualityReport {
    /// Quality index, 0–100.
    pub quality: f64,
    /// Interpretive sentences.
    pub analysis: String,
    /// Raw measurements; absent for degenerate input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<InformationQualityDetails>,
}

/// Raw measurements behind the quality index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct InformationQualityDetails {
    /// Evidence words per word, 4 decimals.
    pub evidence_density: f64,
    /// Intensifiers per word, 4 decimals.
    pub rhetoric_density: f64,
    /// `1 - distinct/total`, 4 decimals.
    pub redundancy_ratio: f64,
    /// Population variance of sentence lengths, 2 decimals.
    pub sentence_variance: f64,
}

impl MetricReport for InformationQualityReport {
    fn title(&self) -> &'static str {
        "Information Quality"
    }

    fn headline(&self) -> String {
        format!("Quality: {} / 100", display_decimal(self.quality))
    }

    fn explanation(&self) -> &str {
        &self.analysis
    }

    fn breakdown(&self) -> Vec<(&'static str, f64)> {
        self.details.as_ref().map_or_else(Vec::new, |d| {
            vec![
                ("evidence_density", d.evidence_density),
                ("rhetoric_density", d.rhetoric_density),
                ("redundancy_ratio", d.redundancy_ratio),
                ("sentence_variance", d.sentence_variance),
            ]
        })
    }
}
