// src/lib.rs

pub mod config;
pub mod core;
pub mod error;
pub mod fuzzy;
pub mod learning;
pub mod persistence;
pub mod tokenizer;

pub use crate::config::{EngineConfig, FuzzyOptions, MatchMode, SourceGates};
pub use crate::core::engine::CompletionEngine;
pub use crate::core::index::{IndexOptions, WordIndex};
pub use crate::core::sources::IndexedWords;
pub use crate::core::suggester::{
    judge, judge_by_partial_match, suggest, suggest_words, suggest_words_by_partial_match,
    SuggestOptions,
};
pub use crate::core::types::{Suggestion, Word, WordType};
pub use crate::error::{CompletionError, Result};
pub use crate::learning::{RetentionPolicy, SelectionHistoryStore, SelectionHistoryTree};
pub use crate::tokenizer::{create_tokenizer, Segmenter, TokenizeStrategy, Tokenizer};
