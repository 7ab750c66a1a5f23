//! Explainable text analysis.
//!
//! Decomposes a document assessment into five independent metrics, each
//! implemented by an [`Analyzer`] in its own module and orchestrated by
//! [`Engine::analyze_document`].
//!
//! Analyzers are total: empty or degenerate text yields a "too short to
//! analyze" report, never an error. Callers can also invoke analyzers
//! individually through the [`Engine`] accessors.

pub mod cognitive_load;
pub mod decision_risk;
pub mod emotion;
pub mod information_quality;
pub mod manipulation;
pub mod reports;

#[cfg(test)]
mod properties;

use std::collections::HashSet;

pub use cognitive_load::CognitiveLoadAnalyzer;
pub use decision_risk::DecisionRiskAnalyzer;
pub use emotion::{Emotion, EmotionAnalyzer};
pub use information_quality::InformationQualityAnalyzer;
pub use manipulation::ManipulationAnalyzer;
pub use reports::{
    AttentionDrop, CognitiveLoadBreakdown, CognitiveLoadReport, DecisionRiskDetails,
    DecisionRiskReport, DocumentReport, DominantEmotion, EmotionCounts, EmotionReport,
    InformationQualityDetails, InformationQualityReport, ManipulationBreakdown,
    ManipulationReport,
};

use crate::error::{AnalysisError, AnalysisResult};
use crate::lexicon::Lexicons;
use crate::text::{self, Tokenizer};

/// All available check names, in report order.
pub const ALL_CHECKS: &[&str] = &[
    CognitiveLoadAnalyzer::NAME,
    ManipulationAnalyzer::NAME,
    EmotionAnalyzer::NAME,
    DecisionRiskAnalyzer::NAME,
    InformationQualityAnalyzer::NAME,
];

/// The stable field contract presentation code relies on.
pub trait MetricReport: Send + Sync {
    /// Section title.
    fn title(&self) -> &'static str;
    /// Primary score(s) as display text.
    fn headline(&self) -> String;
    /// Generated explanation.
    fn explanation(&self) -> &str;
    /// Named intermediate counts in a fixed order; empty for degenerate input.
    fn breakdown(&self) -> Vec<(&'static str, f64)>;
}

/// One scoring dimension.
///
/// Implementations differ only in the lexicons they consult and their
/// scoring formula. `analyze` expects normalized text and never fails.
pub trait Analyzer {
    /// Stable metric name used for selection.
    const NAME: &'static str;
    /// The result record.
    type Report: MetricReport;

    /// Score `text`.
    fn analyze(&self, text: &str) -> Self::Report;
}

/// Shared tokenizer and lexicons, handed by reference to each analyzer.
#[derive(Debug, Clone)]
pub struct Engine {
    tokenizer: Tokenizer,
    lexicons: &'static Lexicons,
}

impl Engine {
    /// Initialize the tokenizer against the built-in lexicons.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::TokenizerUnavailable`] if the tokenizer
    /// cannot be initialized.
    pub fn new() -> AnalysisResult<Self> {
        Self::with_lexicons(Lexicons::builtin())
    }

    /// Initialize against a caller-supplied lexicon set.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::TokenizerUnavailable`] if the tokenizer
    /// cannot be initialized.
    pub fn with_lexicons(lexicons: &'static Lexicons) -> AnalysisResult<Self> {
        Ok(Self {
            tokenizer: Tokenizer::new()?,
            lexicons,
        })
    }

    /// The shared tokenizer.
    pub const fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// The shared lexicons.
    pub const fn lexicons(&self) -> &'static Lexicons {
        self.lexicons
    }

    /// Cognitive load analyzer.
    pub const fn cognitive_load(&self) -> CognitiveLoadAnalyzer<'_> {
        CognitiveLoadAnalyzer::new(&self.tokenizer, self.lexicons)
    }

    /// Manipulation analyzer.
    pub const fn manipulation(&self) -> ManipulationAnalyzer<'_> {
        ManipulationAnalyzer::new(&self.tokenizer, self.lexicons)
    }

    /// Emotion analyzer.
    pub const fn emotion(&self) -> EmotionAnalyzer<'_> {
        EmotionAnalyzer::new(&self.tokenizer, self.lexicons)
    }

    /// Decision risk analyzer.
    pub const fn decision_risk(&self) -> DecisionRiskAnalyzer<'_> {
        DecisionRiskAnalyzer::new(&self.tokenizer, self.lexicons)
    }

    /// Information quality analyzer.
    pub const fn information_quality(&self) -> InformationQualityAnalyzer<'_> {
        InformationQualityAnalyzer::new(&self.tokenizer, self.lexicons)
    }

    /// Normalize `input` and run the selected analyzers in order.
    ///
    /// # Arguments
    ///
    /// * `input` - The raw document text.
    /// * `checks` - Optional list of metric names to run. If `None`, runs all.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::UnknownCheck`] for an unrecognized metric name
    /// and [`AnalysisError::EmptyInput`] for blank input.
    #[tracing::instrument(skip(self, input), fields(text_len = input.len()))]
    pub fn analyze_document(
        &self,
        input: &str,
        checks: Option<&[String]>,
    ) -> AnalysisResult<DocumentReport> {
        let (prose, enabled) = prepare(input, checks)?;
        let on = |name: &str| enabled.contains(name);

        Ok(DocumentReport {
            cognitive_load: on(CognitiveLoadAnalyzer::NAME)
                .then(|| self.cognitive_load().analyze(&prose)),
            manipulation: on(ManipulationAnalyzer::NAME)
                .then(|| self.manipulation().analyze(&prose)),
            emotion: on(EmotionAnalyzer::NAME).then(|| self.emotion().analyze(&prose)),
            decision_risk: on(DecisionRiskAnalyzer::NAME)
                .then(|| self.decision_risk().analyze(&prose)),
            information_quality: on(InformationQualityAnalyzer::NAME)
                .then(|| self.information_quality().analyze(&prose)),
        })
    }

    /// Same as [`analyze_document`](Self::analyze_document), with the
    /// analyzers running concurrently on the rayon pool.
    ///
    /// # Errors
    ///
    /// Same as [`analyze_document`](Self::analyze_document).
    #[tracing::instrument(skip(self, input), fields(text_len = input.len()))]
    pub fn analyze_document_parallel(
        &self,
        input: &str,
        checks: Option<&[String]>,
    ) -> AnalysisResult<DocumentReport> {
        let (prose, enabled) = prepare(input, checks)?;
        let on = |name: &str| enabled.contains(name);
        let prose = prose.as_str();

        let ((cognitive_load, manipulation), (emotion, (decision_risk, information_quality))) =
            rayon::join(
                || {
                    rayon::join(
                        || {
                            on(CognitiveLoadAnalyzer::NAME)
                                .then(|| self.cognitive_load().analyze(prose))
                        },
                        || {
                            on(ManipulationAnalyzer::NAME)
                                .then(|| self.manipulation().analyze(prose))
                        },
                    )
                },
                || {
                    rayon::join(
                        || on(EmotionAnalyzer::NAME).then(|| self.emotion().analyze(prose)),
                        || {
                            rayon::join(
                                || {
                                    on(DecisionRiskAnalyzer::NAME)
                                        .then(|| self.decision_risk().analyze(prose))
                                },
                                || {
                                    on(InformationQualityAnalyzer::NAME)
                                        .then(|| self.information_quality().analyze(prose))
                                },
                            )
                        },
                    )
                },
            );

        Ok(DocumentReport {
            cognitive_load,
            manipulation,
            emotion,
            decision_risk,
            information_quality,
        })
    }
}

/// Validate the selection and normalize the input.
fn prepare<'a>(
    input: &str,
    checks: Option<&'a [String]>,
) -> AnalysisResult<(String, HashSet<&'a str>)> {
    let enabled = resolve_checks(checks)?;
    let prose = text::normalize(input);
    if prose.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }
    Ok((prose, enabled))
}

/// Resolve a metric selection, rejecting unknown names.
///
/// # Errors
///
/// Returns [`AnalysisError::UnknownCheck`] naming the first unrecognized entry.
pub fn resolve_checks(checks: Option<&[String]>) -> AnalysisResult<HashSet<&str>> {
    let Some(list) = checks else {
        return Ok(ALL_CHECKS.iter().copied().collect());
    };
    list.iter()
        .map(|name| {
            if ALL_CHECKS.contains(&name.as_str()) {
                Ok(name.as_str())
            } else {
                Err(AnalysisError::UnknownCheck {
                    name: name.clone(),
                    available: ALL_CHECKS.join(", "),
                })
            }
        })
        .collect()
}
