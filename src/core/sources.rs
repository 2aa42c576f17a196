// File: src/core/sources.rs
use crate::core::index::WordIndex;
use crate::core::types::WordType;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Word indexes for every source, each behind an `Arc` so a rebuild can be
/// swapped in whole while readers keep their snapshot.
#[derive(Debug, Clone, Default)]
pub struct IndexedWords {
    pub current_file: Arc<WordIndex>,
    pub current_vault: Arc<WordIndex>,
    pub custom_dictionary: Arc<WordIndex>,
    pub internal_link: Arc<WordIndex>,
    pub tag: Arc<WordIndex>,
    /// One index per front-matter key.
    pub front_matter: HashMap<String, Arc<WordIndex>>,
}

impl IndexedWords {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sources scanned for ordinary queries, in gathering order.
    pub fn sources(&self) -> [(WordType, &WordIndex); 5] {
        [
            (WordType::CurrentFile, &*self.current_file),
            (WordType::CustomDictionary, &*self.custom_dictionary),
            (WordType::InternalLink, &*self.internal_link),
            (WordType::CurrentVault, &*self.current_vault),
            (WordType::Tag, &*self.tag),
        ]
    }

    fn slot(&mut self, source: WordType) -> Option<&mut Arc<WordIndex>> {
        match source {
            WordType::CurrentFile => Some(&mut self.current_file),
            WordType::CurrentVault => Some(&mut self.current_vault),
            WordType::CustomDictionary => Some(&mut self.custom_dictionary),
            WordType::InternalLink => Some(&mut self.internal_link),
            WordType::Tag => Some(&mut self.tag),
            WordType::FrontMatter => None,
        }
    }

    /// Swap in a rebuilt index for `source`, returning the old one.
    ///
    /// Front matter is keyed; use [`replace_front_matter`](Self::replace_front_matter).
    pub fn replace(&mut self, source: WordType, index: WordIndex) -> Option<Arc<WordIndex>> {
        let words = index.len();
        let slot = self.slot(source)?;
        let old = std::mem::replace(slot, Arc::new(index));
        debug!(%source, words, "replaced word index");
        Some(old)
    }

    /// Swap in all front-matter indexes at once.
    pub fn replace_front_matter(
        &mut self,
        indexes: HashMap<String, WordIndex>,
    ) -> HashMap<String, Arc<WordIndex>> {
        let keys = indexes.len();
        let fresh = indexes.into_iter().map(|(k, v)| (k, Arc::new(v))).collect();
        let old = std::mem::replace(&mut self.front_matter, fresh);
        debug!(keys, "replaced front matter indexes");
        old
    }

    pub fn front_matter_index(&self, key: &str) -> Option<&WordIndex> {
        self.front_matter.get(key).map(|i| &**i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Word;

    #[test]
    fn test_replace_keeps_old_snapshot_alive() {
        let mut indexed = IndexedWords::new();
        indexed.replace(
            WordType::CurrentFile,
            WordIndex::build([Word::new("old", WordType::CurrentFile)]),
        );
        let snapshot = indexed.clone();

        let old = indexed
            .replace(WordType::CurrentFile, WordIndex::build([Word::new("new", WordType::CurrentFile)]))
            .unwrap();

        assert_eq!(old.get(0).unwrap().value, "old");
        assert_eq!(snapshot.current_file.get(0).unwrap().value, "old");
        assert_eq!(indexed.current_file.get(0).unwrap().value, "new");
    }

    #[test]
    fn test_front_matter_is_keyed() {
        let mut indexed = IndexedWords::new();
        assert!(indexed.replace(WordType::FrontMatter, WordIndex::new()).is_none());

        let mut keyed = HashMap::new();
        keyed.insert(
            "tags".to_string(),
            WordIndex::build([Word::new("rust", WordType::FrontMatter).with_key("tags")]),
        );
        indexed.replace_front_matter(keyed);
        assert_eq!(indexed.front_matter_index("tags").unwrap().len(), 1);
        assert!(indexed.front_matter_index("title").is_none());
    }
}
