// File: src/tokenizer/english_only.rs
use super::delimiters::{classes_for, pick, CharClass};
use super::{
    is_english_word_char, run_boundaries, scan_runs, CharKind, PhraseStart, TokenizeStrategy,
    Tokenizer, TokenizerOptions, TrimTarget,
};

/// Indexes only the ASCII-word runs of mixed-script text.
///
/// Phrase detection still reports runs of other scripts so the cursor
/// position is found correctly even where nothing gets indexed.
#[derive(Debug, Clone)]
pub struct EnglishOnlyTokenizer {
    input: CharClass,
    indexing: CharClass,
}

impl EnglishOnlyTokenizer {
    pub fn new(options: TokenizerOptions) -> Self {
        let (input, indexing) = classes_for(TokenizeStrategy::EnglishOnly, &options);
        Self { input, indexing }
    }

    fn classify(class: &CharClass, c: char) -> CharKind {
        if class.contains(c) {
            CharKind::Delimiter
        } else if is_english_word_char(c) {
            CharKind::English
        } else {
            CharKind::Other
        }
    }
}

impl Tokenizer for EnglishOnlyTokenizer {
    fn strategy(&self) -> TokenizeStrategy {
        TokenizeStrategy::EnglishOnly
    }

    fn tokenize(&self, content: &str, raw: bool) -> Vec<String> {
        let runs = scan_runs(content, |c| Self::classify(&self.indexing, c));
        runs.into_iter()
            .filter(|r| raw || r.kind == CharKind::English)
            .map(|r| r.text.to_string())
            .collect()
    }

    fn recursive_tokenize(&self, content: &str) -> Vec<PhraseStart> {
        let runs = scan_runs(content, |c| Self::classify(&self.input, c));
        run_boundaries(content, &runs)
    }

    fn trim_class(&self, target: TrimTarget) -> &CharClass {
        pick(target, &self.input, &self.indexing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenizer() -> EnglishOnlyTokenizer {
        EnglishOnlyTokenizer::new(TokenizerOptions::default())
    }

    #[test]
    fn test_drops_other_scripts() {
        assert_eq!(
            tokenizer().tokenize("aaa いきますbbb ccc", false),
            vec!["aaa", "bbb", "ccc"]
        );
    }

    #[test]
    fn test_keeps_hyphen_and_backslash() {
        assert_eq!(tokenizer().tokenize("well-known a\\b", false), vec!["well-known", "a\\b"]);
    }

    #[test]
    fn test_raw_returns_every_run() {
        let tokens = tokenizer().tokenize("abc日本 x", true);
        assert_eq!(tokens, vec!["abc", "日本", " ", "x"]);
    }

    #[test]
    fn test_recursive_includes_other_script_runs() {
        let starts = tokenizer().recursive_tokenize("aa日本 bb");
        let offsets: Vec<usize> = starts.iter().map(|s| s.offset).collect();
        assert_eq!(offsets, vec![0, 2, "aa日本 ".len()]);
        assert_eq!(starts[1].word, "日本 bb");
    }

    #[test]
    fn test_recursive_leading_delimiter() {
        let starts = tokenizer().recursive_tokenize(" aa");
        assert_eq!(starts, vec![PhraseStart::new(" aa", 0), PhraseStart::new("aa", 1)]);
    }
}
