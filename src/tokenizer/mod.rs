// File: src/tokenizer/mod.rs
//! Writing-system specific tokenizers.
//!
//! Every tokenizer is a pure function of its input plus static delimiter
//! classes. The Japanese and Chinese ones additionally hold an injected
//! [`Segmenter`].

pub mod arabic;
pub mod chinese;
pub mod default;
pub mod delimiters;
pub mod english_only;
pub mod japanese;
pub mod korean;
pub mod segmenter;
pub mod strategy;

pub use arabic::ArabicTokenizer;
pub use chinese::ChineseTokenizer;
pub use default::DefaultTokenizer;
pub use delimiters::CharClass;
pub use english_only::EnglishOnlyTokenizer;
pub use japanese::JapaneseTokenizer;
pub use korean::KoreanTokenizer;
pub use segmenter::{CharTypeSegmenter, MaxMatchSegmenter, Segmenter};
pub use strategy::{TokenizeStrategy, TrimTarget};

use crate::error::{CompletionError, Result};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenizerOptions {
    pub treat_underscore_as_part_of_word: bool,
}

/// A place where a phrase could begin: the rest of the line from `offset`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseStart {
    pub word: String,
    /// Byte offset into the tokenized content.
    pub offset: usize,
}

impl PhraseStart {
    pub fn new(word: impl Into<String>, offset: usize) -> Self {
        Self { word: word.into(), offset }
    }
}

pub trait Tokenizer: Send + Sync {
    fn strategy(&self) -> TokenizeStrategy;

    /// Split `content` into indexable words. With `raw`, delimiters are kept
    /// as single-character tokens and the tokens concatenate back to
    /// `content`.
    fn tokenize(&self, content: &str, raw: bool) -> Vec<String>;

    /// Every phrase start in `content`, the whole string first, by
    /// increasing offset.
    fn recursive_tokenize(&self, content: &str) -> Vec<PhraseStart>;

    fn trim_class(&self, target: TrimTarget) -> &CharClass;

    /// True when `s` is likely still being composed by an input method and
    /// should not trigger suggestions yet.
    fn should_ignore_on_current(&self, _s: &str) -> bool {
        false
    }
}

/// Build the tokenizer for `strategy`.
///
/// Japanese falls back to [`CharTypeSegmenter`] when no segmenter is given;
/// Chinese needs a dictionary segmenter and fails without one.
pub fn create_tokenizer(
    strategy: TokenizeStrategy,
    options: TokenizerOptions,
    segmenter: Option<Arc<dyn Segmenter>>,
) -> Result<Box<dyn Tokenizer>> {
    let tokenizer: Box<dyn Tokenizer> = match strategy {
        TokenizeStrategy::Default => Box::new(DefaultTokenizer::new(options)),
        TokenizeStrategy::EnglishOnly => Box::new(EnglishOnlyTokenizer::new(options)),
        TokenizeStrategy::Arabic => Box::new(ArabicTokenizer::new(options)),
        TokenizeStrategy::Korean => Box::new(KoreanTokenizer::new(options)),
        TokenizeStrategy::Japanese => {
            let segmenter = segmenter.unwrap_or_else(|| Arc::new(CharTypeSegmenter));
            Box::new(JapaneseTokenizer::new(options, segmenter))
        }
        TokenizeStrategy::Chinese => {
            let segmenter = segmenter.ok_or(CompletionError::MissingSegmenter {
                strategy: TokenizeStrategy::Chinese.name(),
            })?;
            Box::new(ChineseTokenizer::new(options, segmenter))
        }
    };
    Ok(tokenizer)
}

/// Non-empty pieces between delimiters.
pub(crate) fn split_pieces<'a>(
    content: &'a str,
    class: &'a CharClass,
) -> impl Iterator<Item = &'a str> + 'a {
    content.split(move |c: char| class.contains(c)).filter(|s| !s.is_empty())
}

/// Like [`split_pieces`] but every delimiter becomes its own token.
pub(crate) fn split_raw<'a>(content: &'a str, class: &CharClass) -> Vec<&'a str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    for (i, c) in content.char_indices() {
        if class.contains(c) {
            if start < i {
                tokens.push(&content[start..i]);
            }
            let end = i + c.len_utf8();
            tokens.push(&content[i..end]);
            start = end;
        }
    }
    if start < content.len() {
        tokens.push(&content[start..]);
    }
    tokens
}

/// "word.." -> "word", "0.1.2" stays as is.
pub(crate) fn strip_trailing_periods(token: &str) -> &str {
    token.trim_end_matches('.')
}

/// Phrase starts one past every delimiter of `class`.
pub(crate) fn delimiter_boundaries(content: &str, class: &CharClass) -> Vec<PhraseStart> {
    let mut starts = vec![PhraseStart::new(content, 0)];
    for (i, c) in content.char_indices() {
        if class.contains(c) {
            let offset = i + c.len_utf8();
            starts.push(PhraseStart::new(&content[offset..], offset));
        }
    }
    starts
}

pub(crate) fn is_lone_delimiter(s: &str, class: &CharClass) -> bool {
    let mut chars = s.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if class.contains(c))
}

/// Phrase starts at segment boundaries, skipping one-character segments
/// that are themselves delimiters (the first segment always counts).
pub(crate) fn segment_boundaries(
    content: &str,
    segments: Vec<String>,
    class: &CharClass,
) -> Vec<PhraseStart> {
    let segments: Vec<String> = segments.into_iter().filter(|s| !s.is_empty()).collect();
    if segments.is_empty() {
        return vec![PhraseStart::new(content, 0)];
    }

    let joined = segments.concat();
    let mut starts = Vec::with_capacity(segments.len());
    let mut offset = 0;
    for (i, segment) in segments.iter().enumerate() {
        if i == 0 || !is_lone_delimiter(segment, class) {
            starts.push(PhraseStart::new(&joined[offset..], offset));
        }
        offset += segment.len();
    }
    starts
}

/// Character classes seen by the run scanners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CharKind {
    Delimiter,
    English,
    Korean,
    Hanja,
    Other,
}

impl CharKind {
    pub(crate) fn is_word(self) -> bool {
        matches!(self, CharKind::English | CharKind::Korean | CharKind::Hanja)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Run<'a> {
    pub text: &'a str,
    pub offset: usize,
    pub kind: CharKind,
}

pub(crate) fn is_english_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '\\')
}

/// Group `content` into runs of one kind. Each delimiter is a run of its own.
pub(crate) fn scan_runs(content: &str, classify: impl Fn(char) -> CharKind) -> Vec<Run<'_>> {
    let mut runs = Vec::new();
    let mut start = 0;
    let mut current: Option<CharKind> = None;

    for (i, c) in content.char_indices() {
        let kind = classify(c);
        if let Some(prev) = current {
            if prev != kind || kind == CharKind::Delimiter {
                runs.push(Run { text: &content[start..i], offset: start, kind: prev });
                start = i;
            }
        }
        current = Some(kind);
    }
    if let Some(kind) = current {
        runs.push(Run { text: &content[start..], offset: start, kind });
    }
    runs
}

/// Phrase starts at every non-delimiter run, always led by the whole string.
pub(crate) fn run_boundaries(content: &str, runs: &[Run<'_>]) -> Vec<PhraseStart> {
    let mut starts = vec![PhraseStart::new(content, 0)];
    starts.extend(
        runs.iter()
            .filter(|r| r.kind != CharKind::Delimiter && r.offset > 0)
            .map(|r| PhraseStart::new(&content[r.offset..], r.offset)),
    );
    starts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spaces() -> CharClass {
        CharClass::new([' ', ','])
    }

    #[test]
    fn test_split_raw_concatenates_back() {
        let tokens = split_raw("aa, bb  cc", &spaces());
        assert_eq!(tokens, vec!["aa", ",", " ", "bb", " ", " ", "cc"]);
        assert_eq!(tokens.concat(), "aa, bb  cc");
    }

    #[test]
    fn test_delimiter_boundaries() {
        let starts = delimiter_boundaries("aa bb", &spaces());
        assert_eq!(starts, vec![PhraseStart::new("aa bb", 0), PhraseStart::new("bb", 3)]);
    }

    #[test]
    fn test_segment_boundaries_skip_lone_delimiters() {
        let segments = vec!["今日".to_string(), " ".to_string(), "は".to_string()];
        let starts = segment_boundaries("今日 は", segments, &spaces());
        assert_eq!(starts.len(), 2);
        assert_eq!(starts[1], PhraseStart::new("は", "今日 ".len()));
    }

    #[test]
    fn test_segment_boundaries_empty_content() {
        assert_eq!(segment_boundaries("", vec![], &spaces()), vec![PhraseStart::new("", 0)]);
    }

    #[test]
    fn test_scan_runs() {
        let runs = scan_runs("ab  日本", |c| {
            if c == ' ' {
                CharKind::Delimiter
            } else if is_english_word_char(c) {
                CharKind::English
            } else {
                CharKind::Other
            }
        });
        let kinds: Vec<_> = runs.iter().map(|r| (r.text, r.kind)).collect();
        assert_eq!(
            kinds,
            vec![
                ("ab", CharKind::English),
                (" ", CharKind::Delimiter),
                (" ", CharKind::Delimiter),
                ("日本", CharKind::Other),
            ]
        );
    }

    #[test]
    fn test_chinese_requires_segmenter() {
        let err = create_tokenizer(TokenizeStrategy::Chinese, TokenizerOptions::default(), None)
            .err()
            .unwrap();
        assert!(matches!(err, CompletionError::MissingSegmenter { strategy: "chinese" }));
    }

    #[test]
    fn test_factory_reports_strategy() {
        for strategy in [
            TokenizeStrategy::Default,
            TokenizeStrategy::EnglishOnly,
            TokenizeStrategy::Arabic,
            TokenizeStrategy::Korean,
            TokenizeStrategy::Japanese,
        ] {
            let tokenizer = create_tokenizer(strategy, TokenizerOptions::default(), None).unwrap();
            assert_eq!(tokenizer.strategy(), strategy);
        }
    }
}
