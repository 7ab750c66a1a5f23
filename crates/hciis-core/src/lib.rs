//! Core library for hciis.
//!
//! This crate provides the explainable text-scoring engine used by the
//! `hciis` CLI and any downstream consumers: tokenization, lexicons,
//! statistics helpers, the five analyzers, and configuration loading.
//!
//! # Modules
//!
//! - [`analysis`] - The five analyzers and the document orchestrator
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//! - [`lexicon`] - Built-in English lexicons
//! - [`markdown`] - Markdown-to-prose reduction
//! - [`stats`] - Ratio, variance, and density helpers
//! - [`text`] - Normalization and tokenization
//!
//! # Quick Start
//!
//! ```no_run
//! use hciis_core::analysis::Engine;
//!
//! let engine = Engine::new().expect("tokenizer initializes");
//! let report = engine
//!     .analyze_document("Experts say the crisis is absolutely shocking.", None)
//!     .expect("non-empty input");
//!
//! if let Some(m) = report.manipulation {
//!     println!("Manipulation: {} ({})", m.score, m.details);
//! }
//! ```
#![deny(unsafe_code)]

pub mod analysis;
pub mod config;
pub mod dictionaries;
pub mod error;
pub mod lexicon;
pub mod markdown;
pub mod stats;
pub mod text;

pub use analysis::{ALL_CHECKS, Analyzer, DocumentReport, Engine, MetricReport};
pub use config::{Config, ConfigLoader, LogLevel, ReportLayout};

pub use error::{AnalysisError, AnalysisResult, ConfigError, ConfigResult};
