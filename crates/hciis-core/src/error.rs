//! Error types for hciis-core.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur when setting up or orchestrating analysis.
///
/// Individual analyzers never fail: degenerate input yields a designated
/// "too short to analyze" result instead.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The sentence/word tokenizer could not be initialized.
    #[error("tokenizer resources unavailable: {0}")]
    TokenizerUnavailable(String),

    /// The input text is empty or whitespace only.
    #[error("no scorable text in input")]
    EmptyInput,

    /// An unknown metric name was selected.
    #[error("unknown check: {name}. Use: {available}")]
    UnknownCheck {
        /// The check name that was requested.
        name: String,
        /// Comma-separated list of available check names.
        available: String,
    },
}

/// Result type alias using [`AnalysisError`].
pub type AnalysisResult<T> = Result<T, AnalysisError>;
