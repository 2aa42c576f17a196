// File: src/tokenizer/default.rs
use super::delimiters::{classes_for, pick, CharClass};
use super::{
    delimiter_boundaries, split_pieces, split_raw, strip_trailing_periods, PhraseStart,
    TokenizeStrategy, Tokenizer, TokenizerOptions, TrimTarget,
};

/// Splits on Latin punctuation and whitespace.
#[derive(Debug, Clone)]
pub struct DefaultTokenizer {
    input: CharClass,
    indexing: CharClass,
}

impl DefaultTokenizer {
    pub fn new(options: TokenizerOptions) -> Self {
        let (input, indexing) = classes_for(TokenizeStrategy::Default, &options);
        Self { input, indexing }
    }

    pub(crate) fn with_classes(input: CharClass, indexing: CharClass) -> Self {
        Self { input, indexing }
    }
}

impl Tokenizer for DefaultTokenizer {
    fn strategy(&self) -> TokenizeStrategy {
        TokenizeStrategy::Default
    }

    fn tokenize(&self, content: &str, raw: bool) -> Vec<String> {
        if raw {
            return split_raw(content, &self.indexing)
                .into_iter()
                .map(str::to_string)
                .collect();
        }
        split_pieces(content, &self.indexing)
            .map(strip_trailing_periods)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    }

    fn recursive_tokenize(&self, content: &str) -> Vec<PhraseStart> {
        delimiter_boundaries(content, &self.input)
    }

    fn trim_class(&self, target: TrimTarget) -> &CharClass {
        pick(target, &self.input, &self.indexing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenizer() -> DefaultTokenizer {
        DefaultTokenizer::new(TokenizerOptions::default())
    }

    #[test]
    fn test_splits_on_spaces() {
        assert_eq!(tokenizer().tokenize("aa bb cc", false), vec!["aa", "bb", "cc"]);
    }

    #[test]
    fn test_trailing_periods_stripped() {
        assert_eq!(tokenizer().tokenize("word..", false), vec!["word"]);
        assert_eq!(tokenizer().tokenize("end. next", false), vec!["end", "next"]);
        assert!(tokenizer().tokenize("...", false).is_empty());
    }

    #[test]
    fn test_embedded_periods_kept() {
        assert_eq!(tokenizer().tokenize("0.1.2", false), vec!["0.1.2"]);
        assert_eq!(tokenizer().tokenize("v1.2-beta done", false), vec!["v1.2-beta", "done"]);
    }

    #[test]
    fn test_punctuation_and_smart_quotes() {
        assert_eq!(
            tokenizer().tokenize("[[link]] (paren) “quoted” «fr»", false),
            vec!["link", "paren", "quoted", "fr"]
        );
    }

    #[test]
    fn test_underscore() {
        assert_eq!(tokenizer().tokenize("snake_case", false), vec!["snake", "case"]);
        let keep = DefaultTokenizer::new(TokenizerOptions { treat_underscore_as_part_of_word: true });
        assert_eq!(keep.tokenize("snake_case", false), vec!["snake_case"]);
    }

    #[test]
    fn test_raw_keeps_delimiters() {
        let tokens = tokenizer().tokenize("aa, bb.", true);
        assert_eq!(tokens, vec!["aa", ",", " ", "bb."]);
        assert_eq!(tokens.concat(), "aa, bb.");
    }

    #[test]
    fn test_recursive_tokenize() {
        let starts = tokenizer().recursive_tokenize("aa bb.cc");
        assert_eq!(
            starts,
            vec![
                PhraseStart::new("aa bb.cc", 0),
                PhraseStart::new("bb.cc", 3),
                PhraseStart::new("cc", 6),
            ]
        );
    }

    #[test]
    fn test_recursive_tokenize_multibyte_offsets() {
        let starts = tokenizer().recursive_tokenize("café au");
        assert_eq!(starts[1], PhraseStart::new("au", "café ".len()));
    }

    #[test]
    fn test_trim_class() {
        let t = tokenizer();
        assert!(t.trim_class(TrimTarget::Input).contains('.'));
        assert!(!t.trim_class(TrimTarget::Indexing).contains('.'));
        assert!(!t.should_ignore_on_current("anything"));
    }
}
