//! Dictionaries for text analysis.
//!
//! Provides the abbreviation and title sets used by sentence splitting and
//! word tokenization.

pub mod abbreviations;
