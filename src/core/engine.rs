// File: src/core/engine.rs
use crate::config::EngineConfig;
use crate::core::index::WordIndex;
use crate::core::sources::IndexedWords;
use crate::core::suggester::{self, SuggestOptions};
use crate::core::types::{Suggestion, Word, WordType};
use crate::error::Result;
use crate::learning::{SelectionHistoryStore, SelectionHistoryTree};
use crate::persistence::{load_history, save_history};
use crate::tokenizer::{create_tokenizer, PhraseStart, Segmenter, Tokenizer};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// The completion engine: one tokenizer, one set of word indexes and an
/// optional selection history, all driven by an [`EngineConfig`].
pub struct CompletionEngine {
    config: EngineConfig,
    tokenizer: Box<dyn Tokenizer>,
    indexed: IndexedWords,
    history: Option<SelectionHistoryStore>,
    history_path: Option<PathBuf>,
}

impl CompletionEngine {
    pub fn new(config: EngineConfig, segmenter: Option<Arc<dyn Segmenter>>) -> Result<Self> {
        let tokenizer = create_tokenizer(config.tokenizer.strategy, config.tokenizer.options(), segmenter)?;
        let history = config.selection_history.enabled.then(|| {
            SelectionHistoryStore::new(SelectionHistoryTree::new(), config.selection_history.retention)
        });
        info!(
            strategy = %config.tokenizer.strategy,
            mode = %config.matching.mode,
            history = history.is_some(),
            "completion engine ready"
        );
        Ok(Self { config, tokenizer, indexed: IndexedWords::new(), history, history_path: None })
    }

    /// Like [`new`](Self::new) with selection history loaded from `path`.
    ///
    /// A missing or unreadable file starts an empty history; the file is
    /// rewritten on the next [`save_history`](Self::save_history).
    pub fn from_history_file_or_new(
        config: EngineConfig,
        segmenter: Option<Arc<dyn Segmenter>>,
        path: impl Into<PathBuf>,
    ) -> Result<Self> {
        let path = path.into();
        let mut engine = Self::new(config, segmenter)?;
        let tree = if path.exists() {
            load_history(&path).unwrap_or_else(|e| {
                warn!(path = %path.display(), error = %e, "could not read selection history, starting empty");
                SelectionHistoryTree::new()
            })
        } else {
            SelectionHistoryTree::new()
        };
        let mut store = SelectionHistoryStore::new(tree, engine.config.selection_history.retention);
        store.purge();
        engine.history = Some(store);
        engine.history_path = Some(path);
        Ok(engine)
    }

    /// Replace the history store, e.g. one driven by a custom clock.
    pub fn with_history(mut self, store: SelectionHistoryStore) -> Self {
        self.history = Some(store);
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn tokenizer(&self) -> &dyn Tokenizer {
        self.tokenizer.as_ref()
    }

    pub fn history(&self) -> Option<&SelectionHistoryStore> {
        self.history.as_ref()
    }

    pub fn history_path(&self) -> Option<&Path> {
        self.history_path.as_deref()
    }

    pub fn tokenize(&self, content: &str, raw: bool) -> Vec<String> {
        self.tokenizer.tokenize(content, raw)
    }

    pub fn recursive_tokenize(&self, content: &str) -> Vec<PhraseStart> {
        self.tokenizer.recursive_tokenize(content)
    }

    /// Indexable words of `text`: long enough, not purely numeric, first
    /// occurrence only.
    pub fn words_from_text(&self, text: &str, word_type: WordType, created_path: &str) -> Vec<Word> {
        let min_chars = self.config.indexing_threshold();
        let mut seen = HashSet::new();
        self.tokenize(text, false)
            .into_iter()
            .filter(|t| t.chars().count() >= min_chars)
            .filter(|t| !t.chars().all(|c| c.is_numeric()))
            .filter(|t| seen.insert(t.clone()))
            .map(|t| Word::new(t, word_type).with_created_path(created_path))
            .collect()
    }

    /// Rebuild the index for `source` from `words`.
    ///
    /// Front-matter words are grouped by their `key`; words without one are
    /// dropped.
    pub fn build_index(&mut self, source: WordType, words: Vec<Word>) {
        let options = self.config.index.options();
        if source != WordType::FrontMatter {
            self.indexed.replace(source, WordIndex::build_with(words, &options));
            return;
        }

        let mut by_key: HashMap<String, Vec<Word>> = HashMap::new();
        let mut unkeyed = 0usize;
        for word in words {
            match word.key.clone() {
                Some(key) => by_key.entry(key).or_default().push(word),
                None => unkeyed += 1,
            }
        }
        if unkeyed > 0 {
            warn!(unkeyed, "dropped front matter words without a key");
        }
        let indexes = by_key
            .into_iter()
            .map(|(key, words)| (key, WordIndex::build_with(words, &options)))
            .collect();
        self.indexed.replace_front_matter(indexes);
    }

    /// Swap in a prebuilt index. Returns the previous one; `None` for front
    /// matter, which is keyed.
    pub fn replace_index(&mut self, source: WordType, index: WordIndex) -> Option<Arc<WordIndex>> {
        self.indexed.replace(source, index)
    }

    pub fn replace_front_matter(&mut self, indexes: HashMap<String, WordIndex>) {
        self.indexed.replace_front_matter(indexes);
    }

    /// Cheap copy of the current indexes.
    pub fn snapshot(&self) -> IndexedWords {
        self.indexed.clone()
    }

    fn options<'a>(&'a self, front_matter: Option<&'a str>) -> SuggestOptions<'a> {
        SuggestOptions {
            fuzzy: self.config.matching.fuzzy,
            front_matter,
            gates: self.config.matching.min_chars,
            history: self.history.as_ref(),
        }
    }

    pub fn suggest(&self, query: &str) -> Vec<Suggestion> {
        let matching = &self.config.matching;
        suggester::suggest(
            &self.indexed,
            query,
            matching.max_number_of_suggestions,
            matching.mode,
            &self.options(None),
        )
    }

    pub fn suggest_front_matter(&self, key: &str, query: &str) -> Vec<Suggestion> {
        let matching = &self.config.matching;
        suggester::suggest(
            &self.indexed,
            query,
            matching.max_number_of_suggestions,
            matching.mode,
            &self.options(Some(key)),
        )
    }

    /// Phrase starts of `line` that are worth querying.
    fn phrase_queries(&self, line: &str) -> Vec<PhraseStart> {
        let min_words = self.config.matching.min_number_of_words_triggered_phrase;
        let min_chars = self.config.trigger_threshold();
        let starts = self.tokenizer.recursive_tokenize(line);
        let total = starts.len();
        starts
            .into_iter()
            .enumerate()
            .filter(|(i, _)| min_words + i < total + 1)
            .map(|(_, start)| start)
            .filter(|start| start.word.chars().count() >= min_chars)
            .filter(|start| !start.word.ends_with(' '))
            .filter(|start| !self.tokenizer.should_ignore_on_current(&start.word))
            .collect()
    }

    /// Suggestions for the text just before the cursor, trying every phrase
    /// start from the longest down. Each result carries the byte offset of
    /// the phrase it completes.
    pub fn suggest_at_cursor(&self, line: &str) -> Vec<Suggestion> {
        let queries = self.phrase_queries(line);
        debug!(queries = queries.len(), "phrase queries");

        let mut seen: HashSet<(String, WordType)> = HashSet::new();
        let mut results = Vec::new();
        for query in queries {
            for mut suggestion in self.suggest(&query.word) {
                if seen.insert((suggestion.word.value.clone(), suggestion.word_type())) {
                    suggestion.offset = Some(query.offset);
                    results.push(suggestion);
                }
            }
        }
        results.truncate(self.config.matching.max_number_of_suggestions);
        results
    }

    /// Record an accepted suggestion. No-op without history.
    pub fn record_selection(&mut self, suggestion: &Suggestion) {
        if let Some(history) = self.history.as_mut() {
            history.increment(suggestion);
        }
    }

    pub fn purge_history(&mut self) {
        if let Some(history) = self.history.as_mut() {
            history.purge();
        }
    }

    /// Write the history file if anything changed since the last write.
    /// Returns whether a write happened.
    pub fn save_history(&mut self) -> Result<bool> {
        let (Some(history), Some(path)) = (self.history.as_mut(), self.history_path.as_deref()) else {
            return Ok(false);
        };
        if !history.should_persist() {
            return Ok(false);
        }
        save_history(history.tree(), path)?;
        history.sync_persist_version();
        Ok(true)
    }
}
