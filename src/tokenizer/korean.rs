// File: src/tokenizer/korean.rs
use super::delimiters::{classes_for, pick, CharClass};
use super::{
    is_english_word_char, run_boundaries, scan_runs, CharKind, PhraseStart, TokenizeStrategy,
    Tokenizer, TokenizerOptions, TrimTarget,
};

fn is_hangul(c: char) -> bool {
    matches!(c, '\u{AC00}'..='\u{D7AF}' | '\u{1100}'..='\u{11FF}' | '\u{3130}'..='\u{318F}')
}

fn is_hanja(c: char) -> bool {
    matches!(c, '\u{4E00}'..='\u{9FFF}')
}

/// Cuts text into runs of Latin, Hangul or Hanja characters.
#[derive(Debug, Clone)]
pub struct KoreanTokenizer {
    input: CharClass,
    indexing: CharClass,
}

impl KoreanTokenizer {
    pub fn new(options: TokenizerOptions) -> Self {
        let (input, indexing) = classes_for(TokenizeStrategy::Korean, &options);
        Self { input, indexing }
    }

    fn classify(class: &CharClass, c: char) -> CharKind {
        if class.contains(c) {
            CharKind::Delimiter
        } else if is_english_word_char(c) {
            CharKind::English
        } else if is_hangul(c) {
            CharKind::Korean
        } else if is_hanja(c) {
            CharKind::Hanja
        } else {
            CharKind::Other
        }
    }
}

impl Tokenizer for KoreanTokenizer {
    fn strategy(&self) -> TokenizeStrategy {
        TokenizeStrategy::Korean
    }

    fn tokenize(&self, content: &str, raw: bool) -> Vec<String> {
        let runs = scan_runs(content, |c| Self::classify(&self.indexing, c));
        runs.into_iter()
            .filter(|r| raw || r.kind.is_word())
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

    fn tokenizer() -> KoreanTokenizer {
        KoreanTokenizer::new(TokenizerOptions::default())
    }

    #[test]
    fn test_splits_scripts_into_runs() {
        assert_eq!(
            tokenizer().tokenize("안녕하세요 Rust언어 韓國語", false),
            vec!["안녕하세요", "Rust", "언어", "韓國語"]
        );
    }

    #[test]
    fn test_cjk_punctuation() {
        assert_eq!(tokenizer().tokenize("하나·둘「셋」", false), vec!["하나", "둘", "셋"]);
    }

    #[test]
    fn test_jamo_are_korean() {
        assert_eq!(tokenizer().tokenize("ㅎㅎ", false), vec!["ㅎㅎ"]);
    }

    #[test]
    fn test_recursive() {
        let starts = tokenizer().recursive_tokenize("한국 abc");
        assert_eq!(starts.len(), 2);
        assert_eq!(starts[1], PhraseStart::new("abc", "한국 ".len()));
    }
}
