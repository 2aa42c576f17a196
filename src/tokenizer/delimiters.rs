// File: src/tokenizer/delimiters.rs
use super::strategy::{TokenizeStrategy, TrimTarget};
use super::TokenizerOptions;

/// Latin punctuation, whitespace and smart quotes.
const LATIN: &[char] = &[
    '\r', '\n', '\t', '[', ']', '$', '/', ':', '?', '!', '=', '(', ')', '<', '>', '"', '\'', '.',
    ',', '|', ';', '*', '~', ' ', '`', '_', '“', '„', '«', '»', '‹', '›', '‚', '‘', '’', '”',
];

const JAPANESE_EXTRA: &[char] = &[
    '「', '」', '『', '』', '【', '】', '〔', '〕', '（', '）', '［', '］', '《', '》', '〈', '〉',
    '・', '、', '。', '！', '？', '：', '；', '\u{3000}',
];

const KOREAN_EXTRA: &[char] = &[
    '·', '、', '。', '，', '．', '！', '？', '：', '；', '（', '）', '［', '］', '｛', '｝', '〈',
    '〉', '《', '》', '「', '」', '『', '』', '【', '】', '〔', '〕', '\u{3000}',
];

const CHINESE_EXTRA: &[char] = &[
    '，', '。', '！', '？', '：', '；', '、', '（', '）', '《', '》', '【', '】', '「', '」', '『',
    '』', '…', '\u{3000}',
];

const ARABIC_EXTRA: &[char] = &['،', '؛', '؟'];
const ARABIC_DROPPED: &[char] = &['$', '~'];

/// A set of delimiter characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharClass {
    chars: Vec<char>,
}

impl CharClass {
    pub fn new(chars: impl IntoIterator<Item = char>) -> Self {
        let mut chars: Vec<char> = chars.into_iter().collect();
        chars.sort_unstable();
        chars.dedup();
        Self { chars }
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.binary_search(&c).is_ok()
    }

    pub fn with(self, extra: &[char]) -> Self {
        Self::new(self.chars.into_iter().chain(extra.iter().copied()))
    }

    pub fn without(mut self, removed: &[char]) -> Self {
        self.chars.retain(|c| !removed.contains(c));
        self
    }
}

/// Input and indexing classes for a strategy.
///
/// The indexing class never contains `.` so dotted numbers survive;
/// trailing periods are stripped from tokens instead.
pub(crate) fn classes_for(
    strategy: TokenizeStrategy,
    options: &TokenizerOptions,
) -> (CharClass, CharClass) {
    let latin = CharClass::new(LATIN.iter().copied());
    let mut input = match strategy {
        TokenizeStrategy::Default | TokenizeStrategy::EnglishOnly => latin,
        TokenizeStrategy::Japanese => latin.with(JAPANESE_EXTRA),
        TokenizeStrategy::Korean => latin.with(KOREAN_EXTRA),
        TokenizeStrategy::Chinese => latin.with(CHINESE_EXTRA),
        TokenizeStrategy::Arabic => latin.with(ARABIC_EXTRA).without(ARABIC_DROPPED),
    };
    if options.treat_underscore_as_part_of_word {
        input = input.without(&['_']);
    }
    let indexing = input.clone().without(&['.']);
    (input, indexing)
}

pub(crate) fn pick<'a>(
    target: TrimTarget,
    input: &'a CharClass,
    indexing: &'a CharClass,
) -> &'a CharClass {
    match target {
        TrimTarget::Input => input,
        TrimTarget::Indexing => indexing,
    }
}
