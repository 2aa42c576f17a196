// File: src/core/index.rs
use crate::core::types::{Word, WordId};
use crate::fuzzy::strip_diacritics;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexOptions {
    /// Also index "cafe" for "café".
    pub ignore_diacritics: bool,
}

/// Words grouped by first character (case-sensitive).
///
/// Words live once in an arena; buckets hold handles. A word with aliases is
/// reachable from the bucket of its value's first letter and from one bucket
/// per distinct alias first letter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WordIndex {
    words: Vec<Word>,
    buckets: HashMap<char, Vec<WordId>>,
}

impl WordIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build(words: impl IntoIterator<Item = Word>) -> Self {
        Self::build_with(words, &IndexOptions::default())
    }

    pub fn build_with(words: impl IntoIterator<Item = Word>, options: &IndexOptions) -> Self {
        let mut index = Self::new();
        let mut skipped = 0usize;
        for mut word in words {
            if word.value.is_empty() {
                skipped += 1;
                continue;
            }
            if options.ignore_diacritics {
                add_diacritic_free_aliases(&mut word);
            }
            index.insert(word);
        }
        if skipped > 0 {
            warn!(skipped, "skipped words with an empty value");
        }
        debug!(
            words = index.words.len(),
            buckets = index.buckets.len(),
            "built word index"
        );
        index
    }

    /// Appends `id` to the bucket for `first`, creating the bucket if absent.
    pub fn push(&mut self, first: char, id: WordId) {
        self.buckets.entry(first).or_default().push(id);
    }

    /// Stores `word` in the arena and files it under every first letter it
    /// qualifies for.
    pub fn insert(&mut self, word: Word) -> WordId {
        let id = self.words.len();
        let mut firsts: Vec<char> = Vec::with_capacity(1 + word.aliases.len());
        let leading = std::iter::once(&word.value).chain(word.aliases.iter());
        for first in leading.filter_map(|s| s.chars().next()) {
            if !firsts.contains(&first) {
                firsts.push(first);
            }
        }
        self.words.push(word);
        for first in firsts {
            self.push(first, id);
        }
        id
    }

    pub fn get(&self, id: WordId) -> Option<&Word> {
        self.words.get(id)
    }

    /// Words filed under `first`, in insertion order.
    pub fn bucket(&self, first: char) -> impl Iterator<Item = (WordId, &Word)> + '_ {
        self.buckets
            .get(&first)
            .into_iter()
            .flatten()
            .map(move |&id| (id, &self.words[id]))
    }

    pub fn bucket_len(&self, first: char) -> usize {
        self.buckets.get(&first).map_or(0, Vec::len)
    }

    /// Every word once, in insertion order.
    pub fn words(&self) -> impl Iterator<Item = (WordId, &Word)> + '_ {
        self.words.iter().enumerate()
    }

    pub fn first_letters(&self) -> impl Iterator<Item = char> + '_ {
        self.buckets.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl FromIterator<Word> for WordIndex {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Self::build(iter)
    }
}

fn add_diacritic_free_aliases(word: &mut Word) {
    let extra: Vec<String> = std::iter::once(&word.value)
        .chain(word.aliases.iter())
        .filter_map(|s| strip_diacritics(s))
        .collect();
    for alias in extra {
        word.add_alias(alias);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::WordType;

    fn values<'a>(it: impl Iterator<Item = (WordId, &'a Word)>) -> Vec<&'a str> {
        it.map(|(_, w)| w.value.as_str()).collect()
    }

    #[test]
    fn test_buckets_by_first_letter() {
        let index = WordIndex::build([
            Word::new("apple", WordType::CurrentFile),
            Word::new("Avocado", WordType::CurrentFile),
            Word::new("ant", WordType::CurrentFile),
        ]);
        assert_eq!(values(index.bucket('a')), vec!["apple", "ant"]);
        assert_eq!(values(index.bucket('A')), vec!["Avocado"]);
        assert_eq!(index.bucket('z').count(), 0);
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn test_alias_buckets_share_one_arena_entry() {
        let index = WordIndex::build([Word::new("JavaScript", WordType::CustomDictionary)
            .with_aliases(["js", "ecmascript", "jscript"])]);
        assert_eq!(index.len(), 1);
        assert_eq!(index.bucket_len('J'), 1);
        assert_eq!(index.bucket_len('j'), 1);
        assert_eq!(index.bucket_len('e'), 1);
        let (id_upper, _) = index.bucket('J').next().unwrap();
        let (id_lower, _) = index.bucket('j').next().unwrap();
        assert_eq!(id_upper, id_lower);
    }

    #[test]
    fn test_push_creates_bucket() {
        let mut index = WordIndex::new();
        let id = index.insert(Word::new("x", WordType::Tag));
        index.push('y', id);
        assert_eq!(values(index.bucket('y')), vec!["x"]);
        let mut letters: Vec<char> = index.first_letters().collect();
        letters.sort_unstable();
        assert_eq!(letters, vec!['x', 'y']);
    }

    #[test]
    fn test_empty_values_are_skipped() {
        let index = WordIndex::build([
            Word::new("", WordType::CurrentFile),
            Word::new("ok", WordType::CurrentFile),
        ]);
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_ignore_diacritics_adds_alias() {
        let options = IndexOptions { ignore_diacritics: true };
        let index = WordIndex::build_with([Word::new("éclair", WordType::CustomDictionary)], &options);
        assert_eq!(values(index.bucket('e')), vec!["éclair"]);
        assert_eq!(index.get(0).unwrap().aliases, vec!["eclair"]);
    }
}
