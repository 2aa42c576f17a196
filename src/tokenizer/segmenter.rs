// File: src/tokenizer/segmenter.rs
use std::collections::HashSet;

/// Word-boundary oracle for scripts written without spaces.
///
/// Implementations should return segments that concatenate back to the
/// input; phrase offsets are computed from their lengths.
pub trait Segmenter: Send + Sync {
    fn segment(&self, text: &str) -> Vec<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Script {
    Kanji,
    Hiragana,
    Katakana,
    Latin,
    Digit,
    Space,
    Other,
}

fn script_of(c: char) -> Script {
    match c {
        '々' | '〆' | '\u{3400}'..='\u{4DBF}' | '\u{4E00}'..='\u{9FFF}' => Script::Kanji,
        '\u{3041}'..='\u{309F}' => Script::Hiragana,
        '\u{30A0}'..='\u{30FF}' | '\u{FF66}'..='\u{FF9F}' => Script::Katakana,
        '0'..='9' | '\u{FF10}'..='\u{FF19}' => Script::Digit,
        'a'..='z' | 'A'..='Z' | '\u{FF21}'..='\u{FF3A}' | '\u{FF41}'..='\u{FF5A}' => Script::Latin,
        c if c.is_whitespace() => Script::Space,
        _ => Script::Other,
    }
}

/// Splits where the character type changes (kanji, hiragana, katakana,
/// Latin, digits). Spaces and other symbols stand alone.
///
/// A dictionary-free approximation of Japanese morphology, good enough for
/// harvesting completion candidates.
#[derive(Debug, Clone, Copy, Default)]
pub struct CharTypeSegmenter;

impl Segmenter for CharTypeSegmenter {
    fn segment(&self, text: &str) -> Vec<String> {
        let mut segments = Vec::new();
        let mut current = String::new();
        let mut current_script: Option<Script> = None;

        for c in text.chars() {
            let script = script_of(c);
            let joins = current_script == Some(script)
                && !matches!(script, Script::Space | Script::Other);
            if !joins && !current.is_empty() {
                segments.push(std::mem::take(&mut current));
            }
            current.push(c);
            current_script = Some(script);
        }
        if !current.is_empty() {
            segments.push(current);
        }
        segments
    }
}

/// Forward maximum matching over a word list.
///
/// At every position the longest dictionary word wins; unknown characters
/// become single-character segments, ASCII alphanumeric runs stay whole.
#[derive(Debug, Clone, Default)]
pub struct MaxMatchSegmenter {
    words: HashSet<String>,
    max_len: usize,
}

impl MaxMatchSegmenter {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut segmenter = Self::default();
        for word in words {
            segmenter.add_word(word.into());
        }
        segmenter
    }

    pub fn add_word(&mut self, word: String) {
        let len = word.chars().count();
        if len == 0 {
            return;
        }
        self.max_len = self.max_len.max(len);
        self.words.insert(word);
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Segmenter for MaxMatchSegmenter {
    fn segment(&self, text: &str) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        let mut segments = Vec::new();
        let mut i = 0;

        while i < chars.len() {
            if chars[i].is_ascii_alphanumeric() {
                let end = chars[i..]
                    .iter()
                    .position(|c| !c.is_ascii_alphanumeric())
                    .map_or(chars.len(), |p| i + p);
                segments.push(chars[i..end].iter().collect());
                i = end;
                continue;
            }

            let longest = self.max_len.min(chars.len() - i);
            let mut taken = 1;
            for len in (2..=longest).rev() {
                let candidate: String = chars[i..i + len].iter().collect();
                if self.words.contains(&candidate) {
                    taken = len;
                    break;
                }
            }
            segments.push(chars[i..i + taken].iter().collect());
            i += taken;
        }
        segments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_type_segments() {
        let segments = CharTypeSegmenter.segment("私はRustが好きです");
        assert_eq!(segments, vec!["私", "は", "Rust", "が", "好", "きです"]);
    }

    #[test]
    fn test_char_type_keeps_katakana_and_digits() {
        let segments = CharTypeSegmenter.segment("コーヒー2杯");
        assert_eq!(segments, vec!["コーヒー", "2", "杯"]);
    }

    #[test]
    fn test_char_type_spaces_stand_alone() {
        let segments = CharTypeSegmenter.segment("a  b");
        assert_eq!(segments, vec!["a", " ", " ", "b"]);
        assert_eq!(segments.concat(), "a  b");
    }

    #[test]
    fn test_max_match() {
        let segmenter = MaxMatchSegmenter::new(["我们", "喜欢", "编程", "编程语言", "语言"]);
        assert_eq!(segmenter.segment("我们喜欢编程语言"), vec!["我们", "喜欢", "编程语言"]);
        assert_eq!(segmenter.segment("我爱Rust语言"), vec!["我", "爱", "Rust", "语言"]);
        assert_eq!(segmenter.len(), 5);
    }

    #[test]
    fn test_max_match_empty() {
        let segmenter = MaxMatchSegmenter::new(Vec::<String>::new());
        assert!(segmenter.is_empty());
        assert!(segmenter.segment("").is_empty());
        assert_eq!(segmenter.segment("中文"), vec!["中", "文"]);
    }
}
