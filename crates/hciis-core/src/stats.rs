//! Statistics helpers shared by the analyzers.
//!
//! Every helper is total: empty input yields 0 instead of a division fault.

use crate::lexicon::Lexicon;
use crate::text::is_alphabetic;

/// Arithmetic mean, 0 for an empty slice.
pub fn mean(values: &[usize]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<usize>() as f64 / values.len() as f64
}

/// Population variance, 0 for an empty slice.
pub fn population_variance(values: &[usize]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let avg = mean(values);
    values
        .iter()
        .map(|&v| (v as f64 - avg).powi(2))
        .sum::<f64>()
        / values.len() as f64
}

/// `numerator / denominator`, or 0 when the denominator is 0.
pub fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// Share of tokens that are alphabetic content words (not stop words),
/// rounded to 3 decimals.
///
/// The denominator is every token, punctuation included.
pub fn lexical_density<S: AsRef<str>>(tokens: &[S], stop_words: &Lexicon) -> f64 {
    let content = tokens
        .iter()
        .map(AsRef::as_ref)
        .filter(|t| is_alphabetic(t) && !stop_words.contains(t))
        .count();
    round_to(ratio(content, tokens.len()), 3)
}

/// `1 - distinct/total`: 0 when every word is distinct, approaching 1 as
/// repetition grows. 0 for empty input.
pub fn redundancy_ratio<S: AsRef<str>>(words: &[S]) -> f64 {
    if words.is_empty() {
        return 0.0;
    }
    let distinct: std::collections::HashSet<&str> = words.iter().map(AsRef::as_ref).collect();
    1.0 - ratio(distinct.len(), words.len())
}

/// Round half away from zero to `places` decimals.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Render a rounded measurement for explanation text.
///
/// Whole numbers keep one decimal place (`5.0`); anything else uses the
/// shortest exact form (`0.333`).
pub fn display_decimal(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}
