// File: src/tokenizer/chinese.rs
use super::delimiters::{classes_for, pick, CharClass};
use super::{
    is_lone_delimiter, segment_boundaries, split_pieces, split_raw, strip_trailing_periods,
    PhraseStart, Segmenter, TokenizeStrategy, Tokenizer, TokenizerOptions, TrimTarget,
};
use std::sync::Arc;

/// Word boundaries come from a dictionary segmenter.
pub struct ChineseTokenizer {
    input: CharClass,
    indexing: CharClass,
    segmenter: Arc<dyn Segmenter>,
}

impl ChineseTokenizer {
    pub fn new(options: TokenizerOptions, segmenter: Arc<dyn Segmenter>) -> Self {
        let (input, indexing) = classes_for(TokenizeStrategy::Chinese, &options);
        Self { input, indexing, segmenter }
    }
}

impl Tokenizer for ChineseTokenizer {
    fn strategy(&self) -> TokenizeStrategy {
        TokenizeStrategy::Chinese
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

        split_pieces(content, &self.indexing)
            .flat_map(|piece| self.segmenter.segment(piece))
            .filter_map(|t| {
                let t = strip_trailing_periods(t.trim());
                (!t.is_empty()).then(|| t.to_string())
            })
            .collect()
    }

    fn recursive_tokenize(&self, content: &str) -> Vec<PhraseStart> {
        segment_boundaries(content, self.segmenter.segment(content), &self.input)
    }

    fn trim_class(&self, target: TrimTarget) -> &CharClass {
        pick(target, &self.input, &self.indexing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::MaxMatchSegmenter;

    fn tokenizer() -> ChineseTokenizer {
        let dictionary = MaxMatchSegmenter::new(["我们", "喜欢", "编程", "语言", "今天"]);
        ChineseTokenizer::new(TokenizerOptions::default(), Arc::new(dictionary))
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(
            tokenizer().tokenize("我们喜欢编程，今天。", false),
            vec!["我们", "喜欢", "编程", "今天"]
        );
    }

    #[test]
    fn test_recursive_tokenize() {
        let starts = tokenizer().recursive_tokenize("我们喜欢，编程");
        let words: Vec<&str> = starts.iter().map(|s| s.word.as_str()).collect();
        assert_eq!(words, vec!["我们喜欢，编程", "喜欢，编程", "编程"]);
        assert_eq!(starts[2].offset, "我们喜欢，".len());
    }

    #[test]
    fn test_raw_concatenates_back() {
        let text = "我们 喜欢，Rust";
        assert_eq!(tokenizer().tokenize(text, true).concat(), text);
    }
}
