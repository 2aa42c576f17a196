// File: src/tokenizer/arabic.rs
use super::delimiters::{classes_for, CharClass};
use super::{DefaultTokenizer, PhraseStart, TokenizeStrategy, Tokenizer, TokenizerOptions, TrimTarget};

/// Default splitting with the Arabic comma, semicolon and question mark.
#[derive(Debug, Clone)]
pub struct ArabicTokenizer {
    inner: DefaultTokenizer,
}

impl ArabicTokenizer {
    pub fn new(options: TokenizerOptions) -> Self {
        let (input, indexing) = classes_for(TokenizeStrategy::Arabic, &options);
        Self { inner: DefaultTokenizer::with_classes(input, indexing) }
    }
}

impl Tokenizer for ArabicTokenizer {
    fn strategy(&self) -> TokenizeStrategy {
        TokenizeStrategy::Arabic
    }

    fn tokenize(&self, content: &str, raw: bool) -> Vec<String> {
        self.inner.tokenize(content, raw)
    }

    fn recursive_tokenize(&self, content: &str) -> Vec<PhraseStart> {
        self.inner.recursive_tokenize(content)
    }

    fn trim_class(&self, target: TrimTarget) -> &CharClass {
        self.inner.trim_class(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arabic_punctuation() {
        let t = ArabicTokenizer::new(TokenizerOptions::default());
        assert_eq!(t.tokenize("مرحبا،عالم؛ سلام", false), vec!["مرحبا", "عالم", "سلام"]);
    }

    #[test]
    fn test_dollar_is_not_a_delimiter() {
        let t = ArabicTokenizer::new(TokenizerOptions::default());
        assert_eq!(t.tokenize("$var x", false), vec!["$var", "x"]);
    }

    #[test]
    fn test_recursive_after_arabic_comma() {
        let t = ArabicTokenizer::new(TokenizerOptions::default());
        let starts = t.recursive_tokenize("أ،ب");
        assert_eq!(starts.len(), 2);
        assert_eq!(starts[1].word, "ب");
        assert_eq!(starts[1].offset, "أ،".len());
    }
}
