// File: src/tokenizer/japanese.rs
use super::delimiters::{classes_for, pick, CharClass};
use super::{
    is_lone_delimiter, segment_boundaries, split_pieces, split_raw, strip_trailing_periods,
    PhraseStart, Segmenter, TokenizeStrategy, Tokenizer, TokenizerOptions, TrimTarget,
};
use std::sync::Arc;

const NUMBER_SYMBOLS: &[char] = &['.', ',', ':', '-', '/', '%', '．', '，', '：', '－', '／', '％'];

fn is_digit(c: char) -> bool {
    c.is_ascii_digit() || ('０'..='９').contains(&c)
}

fn is_numeric_token(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| is_digit(c) || NUMBER_SYMBOLS.contains(&c))
}

/// Morphological segmenters cut "2023-10-19" into digits and symbols;
/// glue such neighbours back into one token.
pub(crate) fn join_number_with_symbol(tokens: Vec<String>) -> Vec<String> {
    let mut joined: Vec<String> = Vec::with_capacity(tokens.len());
    for token in tokens {
        if let Some(last) = joined.last_mut() {
            if is_numeric_token(last)
                && is_numeric_token(&token)
                && (last.chars().any(is_digit) || token.chars().any(is_digit))
            {
                last.push_str(&token);
                continue;
            }
        }
        joined.push(token);
    }
    joined
}

/// Segments could contain spaces; split them so every space is a
/// one-character segment of its own.
fn isolate_spaces(segments: Vec<String>) -> Vec<String> {
    let mut out = Vec::with_capacity(segments.len());
    for segment in segments {
        if segment == " " || !segment.contains(' ') {
            out.push(segment);
            continue;
        }
        let mut current = String::new();
        for c in segment.chars() {
            if c == ' ' {
                if !current.is_empty() {
                    out.push(std::mem::take(&mut current));
                }
                out.push(" ".to_string());
            } else {
                current.push(c);
            }
        }
        if !current.is_empty() {
            out.push(current);
        }
    }
    out
}

pub struct JapaneseTokenizer {
    input: CharClass,
    indexing: CharClass,
    segmenter: Arc<dyn Segmenter>,
}

impl JapaneseTokenizer {
    pub fn new(options: TokenizerOptions, segmenter: Arc<dyn Segmenter>) -> Self {
        let (input, indexing) = classes_for(TokenizeStrategy::Japanese, &options);
        Self { input, indexing, segmenter }
    }
}

impl Tokenizer for JapaneseTokenizer {
    fn strategy(&self) -> TokenizeStrategy {
        TokenizeStrategy::Japanese
    }

    fn tokenize(&self, content: &str, raw: bool) -> Vec<String> {
        if raw {
            return split_raw(content, &self.indexing)
                .into_iter()
                .flat_map(|piece| {
                    if is_lone_delimiter(piece, &self.indexing) {
                        vec![piece.to_string()]
                    } else {
                        self.segmenter.segment(piece)
                    }
                })
                .collect();
        }

        let segments: Vec<String> = split_pieces(content, &self.indexing)
            .flat_map(|piece| self.segmenter.segment(piece))
            .collect();
        join_number_with_symbol(segments)
            .into_iter()
            .filter_map(|t| {
                let t = strip_trailing_periods(t.trim());
                (!t.is_empty()).then(|| t.to_string())
            })
            .collect()
    }

    fn recursive_tokenize(&self, content: &str) -> Vec<PhraseStart> {
        let segments = isolate_spaces(self.segmenter.segment(content));
        segment_boundaries(content, segments, &self.input)
    }

    fn trim_class(&self, target: TrimTarget) -> &CharClass {
        pick(target, &self.input, &self.indexing)
    }

    /// Hiragana, fullwidth Latin and a few marks are what an IME shows while
    /// a word is still being composed.
    fn should_ignore_on_current(&self, s: &str) -> bool {
        s.chars().all(|c| {
            matches!(c,
                'ぁ'..='ん' | 'ａ'..='ｚ' | 'Ａ'..='Ｚ' | '。' | '、' | 'ー' | '\u{3000}')
        })
    }
}
