// File: src/config.rs
use crate::core::index::IndexOptions;
use crate::core::types::WordType;
use crate::error::{CompletionError, Result};
use crate::learning::RetentionPolicy;
use crate::tokenizer::{TokenizeStrategy, TokenizerOptions};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Prefix: candidates must start with the query. Partial: containing it is
/// enough.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum MatchMode {
    #[default]
    Prefix,
    Partial,
}

impl MatchMode {
    pub fn name(self) -> &'static str {
        match self {
            MatchMode::Prefix => "prefix",
            MatchMode::Partial => "partial",
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MatchMode {
    type Err = CompletionError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "prefix" => Ok(MatchMode::Prefix),
            "partial" => Ok(MatchMode::Partial),
            other => Err(CompletionError::UnknownMatchMode(other.to_string())),
        }
    }
}

impl TryFrom<String> for MatchMode {
    type Error = CompletionError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<MatchMode> for String {
    fn from(value: MatchMode) -> Self {
        value.name().to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuzzyOptions {
    /// Fuzzy matches must score strictly above this.
    pub min_match_score: f64,
}

/// Minimum query length before a source takes part in a query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SourceGates {
    pub current_file: usize,
    pub current_vault: usize,
    pub custom_dictionary: usize,
    pub internal_link: usize,
    pub front_matter: usize,
    pub tag: usize,
}

impl SourceGates {
    pub fn min_chars(&self, source: WordType) -> usize {
        match source {
            WordType::CurrentFile => self.current_file,
            WordType::CurrentVault => self.current_vault,
            WordType::CustomDictionary => self.custom_dictionary,
            WordType::InternalLink => self.internal_link,
            WordType::FrontMatter => self.front_matter,
            WordType::Tag => self.tag,
        }
    }

    pub fn admits(&self, source: WordType, query: &str) -> bool {
        query.chars().count() >= self.min_chars(source)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TokenizerConfig {
    pub strategy: TokenizeStrategy,
    pub treat_underscore_as_part_of_word: bool,
}

impl TokenizerConfig {
    pub fn options(&self) -> TokenizerOptions {
        TokenizerOptions { treat_underscore_as_part_of_word: self.treat_underscore_as_part_of_word }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MatchingConfig {
    pub mode: MatchMode,
    /// `None` disables fuzzy matching.
    pub fuzzy: Option<FuzzyOptions>,
    pub max_number_of_suggestions: usize,
    pub min_number_of_words_triggered_phrase: usize,
    /// Overrides the strategy's trigger threshold when set.
    pub min_number_of_characters_triggered: Option<usize>,
    pub min_chars: SourceGates,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            mode: MatchMode::Prefix,
            fuzzy: None,
            max_number_of_suggestions: 5,
            min_number_of_words_triggered_phrase: 1,
            min_number_of_characters_triggered: None,
            min_chars: SourceGates::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IndexConfig {
    pub ignore_diacritics: bool,
    /// Overrides the strategy's indexing threshold when set.
    pub min_number_of_characters_indexed: Option<usize>,
}

impl IndexConfig {
    pub fn options(&self) -> IndexOptions {
        IndexOptions { ignore_diacritics: self.ignore_diacritics }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SelectionHistoryConfig {
    pub enabled: bool,
    #[serde(flatten)]
    pub retention: RetentionPolicy,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    pub tokenizer: TokenizerConfig,
    pub matching: MatchingConfig,
    pub index: IndexConfig,
    pub selection_history: SelectionHistoryConfig,
}

impl EngineConfig {
    pub fn from_json_str(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn trigger_threshold(&self) -> usize {
        self.matching
            .min_number_of_characters_triggered
            .unwrap_or_else(|| self.tokenizer.strategy.trigger_threshold())
    }

    pub fn indexing_threshold(&self) -> usize {
        self.index
            .min_number_of_characters_indexed
            .unwrap_or_else(|| self.tokenizer.strategy.indexing_threshold())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.tokenizer.strategy, TokenizeStrategy::Default);
        assert_eq!(config.matching.mode, MatchMode::Prefix);
        assert_eq!(config.matching.max_number_of_suggestions, 5);
        assert!(config.matching.fuzzy.is_none());
        assert!(!config.selection_history.enabled);
        assert_eq!(config.selection_history.retention.max_days_to_keep_history, 28);
        assert_eq!(config.trigger_threshold(), 3);
        assert_eq!(config.indexing_threshold(), 5);
    }

    #[test]
    fn test_partial_json() {
        let config = EngineConfig::from_json_str(
            r#"{
                "tokenizer": { "strategy": "japanese" },
                "matching": {
                    "mode": "partial",
                    "fuzzy": { "minMatchScore": 0.5 },
                    "minChars": { "currentVault": 3 }
                },
                "selectionHistory": { "enabled": true, "maxDaysToKeepHistory": 7 }
            }"#,
        )
        .unwrap();
        assert_eq!(config.tokenizer.strategy, TokenizeStrategy::Japanese);
        assert_eq!(config.matching.mode, MatchMode::Partial);
        assert_eq!(config.matching.fuzzy, Some(FuzzyOptions { min_match_score: 0.5 }));
        assert_eq!(config.matching.min_chars.min_chars(WordType::CurrentVault), 3);
        assert_eq!(config.matching.max_number_of_suggestions, 5);
        assert!(config.selection_history.enabled);
        assert_eq!(config.selection_history.retention.max_days_to_keep_history, 7);
        assert_eq!(config.trigger_threshold(), 2);
    }

    #[test]
    fn test_unknown_names_fail_fast() {
        let err = EngineConfig::from_json_str(r#"{"tokenizer":{"strategy":"klingon"}}"#).unwrap_err();
        assert!(err.to_string().contains("klingon"));
        assert!(EngineConfig::from_json_str(r#"{"matching":{"mode":"suffix"}}"#).is_err());
    }

    #[test]
    fn test_gates() {
        let gates = SourceGates { current_vault: 3, ..SourceGates::default() };
        assert!(!gates.admits(WordType::CurrentVault, "ab"));
        assert!(gates.admits(WordType::CurrentVault, "abc"));
        assert!(gates.admits(WordType::CurrentFile, ""));
    }
}
