// File: src/fuzzy/text.rs
//! Case-insensitive matchers built on [`micro_fuzzy`] plus small string helpers.

use super::micro::{micro_fuzzy, FuzzyResult};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

pub fn lower_fuzzy(value: &str, query: &str) -> FuzzyResult {
    micro_fuzzy(&value.to_lowercase(), &query.to_lowercase())
}

/// Fuzzy match that must at least agree on the first character.
pub fn lower_fuzzy_starts_with(value: &str, query: &str) -> FuzzyResult {
    let (Some(v), Some(q)) = (value.chars().next(), query.chars().next()) else {
        return FuzzyResult::NoMatch;
    };
    if !v.to_lowercase().eq(q.to_lowercase()) {
        return FuzzyResult::NoMatch;
    }
    lower_fuzzy(value, query)
}

pub fn lower_starts_with(value: &str, query: &str) -> bool {
    value.to_lowercase().starts_with(&query.to_lowercase())
}

pub fn lower_includes(value: &str, query: &str) -> bool {
    value.to_lowercase().contains(&query.to_lowercase())
}

/// Concrete prefix check expressed as a [`FuzzyResult`] so judging code can
/// treat both matcher kinds the same way.
pub fn concrete_starts_with(value: &str, query: &str) -> FuzzyResult {
    if lower_starts_with(value, query) {
        FuzzyResult::Concrete
    } else {
        FuzzyResult::NoMatch
    }
}

pub fn starts_with_upper(s: &str) -> bool {
    s.chars().next().is_some_and(char::is_uppercase)
}

pub fn capitalize_first_letter(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// "café" -> "cafe". Returns `None` when nothing was stripped.
pub fn strip_diacritics(s: &str) -> Option<String> {
    let stripped: String = s.nfd().filter(|c| !is_combining_mark(*c)).nfc().collect();
    (stripped != s).then_some(stripped)
}
