// File: src/tokenizer/strategy.rs
use crate::error::{CompletionError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Writing-system rules used to cut text into words.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TokenizeStrategy {
    #[default]
    Default,
    EnglishOnly,
    Japanese,
    Arabic,
    Korean,
    Chinese,
}

impl TokenizeStrategy {
    pub const ALL: [TokenizeStrategy; 6] = [
        TokenizeStrategy::Default,
        TokenizeStrategy::EnglishOnly,
        TokenizeStrategy::Japanese,
        TokenizeStrategy::Arabic,
        TokenizeStrategy::Korean,
        TokenizeStrategy::Chinese,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TokenizeStrategy::Default => "default",
            TokenizeStrategy::EnglishOnly => "english-only",
            TokenizeStrategy::Japanese => "japanese",
            TokenizeStrategy::Arabic => "arabic",
            TokenizeStrategy::Korean => "korean",
            TokenizeStrategy::Chinese => "chinese",
        }
    }

    pub fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.name() == name)
            .ok_or_else(|| CompletionError::UnknownStrategy(name.to_string()))
    }

    /// Minimum characters typed before suggestions are offered.
    pub fn trigger_threshold(self) -> usize {
        match self {
            TokenizeStrategy::Default | TokenizeStrategy::EnglishOnly => 3,
            TokenizeStrategy::Japanese => 2,
            TokenizeStrategy::Arabic => 3,
            TokenizeStrategy::Korean | TokenizeStrategy::Chinese => 1,
        }
    }

    /// Minimum characters for a token to be worth indexing.
    pub fn indexing_threshold(self) -> usize {
        match self {
            TokenizeStrategy::Default | TokenizeStrategy::EnglishOnly => 5,
            TokenizeStrategy::Japanese => 2,
            TokenizeStrategy::Arabic => 3,
            TokenizeStrategy::Korean | TokenizeStrategy::Chinese => 2,
        }
    }
}

impl fmt::Display for TokenizeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TokenizeStrategy {
    type Err = CompletionError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

impl TryFrom<String> for TokenizeStrategy {
    type Error = CompletionError;

    fn try_from(value: String) -> Result<Self> {
        Self::from_name(&value)
    }
}

impl From<TokenizeStrategy> for String {
    fn from(value: TokenizeStrategy) -> Self {
        value.name().to_string()
    }
}

/// Which delimiter class to use: live input (phrase detection) or indexing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrimTarget {
    Input,
    Indexing,
}

impl FromStr for TrimTarget {
    type Err = CompletionError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "input" => Ok(TrimTarget::Input),
            "indexing" => Ok(TrimTarget::Indexing),
            other => Err(CompletionError::UnknownTrimTarget(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_name() {
        for strategy in TokenizeStrategy::ALL {
            assert_eq!(TokenizeStrategy::from_name(strategy.name()).unwrap(), strategy);
        }
        assert!(matches!(
            TokenizeStrategy::from_name("esperanto"),
            Err(CompletionError::UnknownStrategy(name)) if name == "esperanto"
        ));
    }

    #[test]
    fn test_thresholds() {
        assert_eq!(TokenizeStrategy::Default.trigger_threshold(), 3);
        assert_eq!(TokenizeStrategy::Default.indexing_threshold(), 5);
        assert_eq!(TokenizeStrategy::Japanese.trigger_threshold(), 2);
        assert_eq!(TokenizeStrategy::Chinese.trigger_threshold(), 1);
        assert_eq!(TokenizeStrategy::Korean.indexing_threshold(), 2);
    }

    #[test]
    fn test_serde_by_name() {
        let parsed: TokenizeStrategy = serde_json::from_str("\"english-only\"").unwrap();
        assert_eq!(parsed, TokenizeStrategy::EnglishOnly);
        assert!(serde_json::from_str::<TokenizeStrategy>("\"nope\"").is_err());
        assert_eq!(serde_json::to_string(&TokenizeStrategy::Korean).unwrap(), "\"korean\"");
    }

    #[test]
    fn test_trim_target_parse() {
        assert_eq!("input".parse::<TrimTarget>().unwrap(), TrimTarget::Input);
        assert_eq!("indexing".parse::<TrimTarget>().unwrap(), TrimTarget::Indexing);
        assert!("output".parse::<TrimTarget>().is_err());
    }
}
