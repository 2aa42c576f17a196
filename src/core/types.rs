// src/core/types.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// A handle into a [`WordIndex`](crate::core::index::WordIndex) arena.
pub type WordId = usize;

/// Where a candidate word came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WordType {
    CurrentFile,
    CurrentVault,
    CustomDictionary,
    InternalLink,
    FrontMatter,
    Tag,
}

/// Dedup group of a word type. Words of different types in the same group
/// collapse into one suggestion when their values are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordGroup {
    Suggestion,
    InternalLink,
    FrontMatter,
    Tag,
}

/// Tie-break priority and dedup group per word type. Higher priority ranks
/// first. Kept as literal data.
const WORD_TYPE_TABLE: [(WordType, u32, WordGroup); 6] = [
    (WordType::FrontMatter, 100, WordGroup::FrontMatter),
    (WordType::InternalLink, 90, WordGroup::InternalLink),
    (WordType::CustomDictionary, 80, WordGroup::Suggestion),
    (WordType::CurrentFile, 70, WordGroup::Suggestion),
    (WordType::CurrentVault, 60, WordGroup::Suggestion),
    (WordType::Tag, 50, WordGroup::Tag),
];

impl WordType {
    fn meta(self) -> (u32, WordGroup) {
        WORD_TYPE_TABLE
            .iter()
            .find(|(t, _, _)| *t == self)
            .map(|&(_, priority, group)| (priority, group))
            .unwrap_or((0, WordGroup::Suggestion))
    }

    pub fn priority(self) -> u32 {
        self.meta().0
    }

    pub fn group(self) -> WordGroup {
        self.meta().1
    }

    /// Internal links and front-matter values show existing text verbatim,
    /// so a capitalized query must not rewrite them.
    pub fn allows_capitalization(self) -> bool {
        !matches!(self, WordType::InternalLink | WordType::FrontMatter)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WordType::CurrentFile => "currentFile",
            WordType::CurrentVault => "currentVault",
            WordType::CustomDictionary => "customDictionary",
            WordType::InternalLink => "internalLink",
            WordType::FrontMatter => "frontMatter",
            WordType::Tag => "tag",
        }
    }
}

impl fmt::Display for WordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasMeta {
    pub origin: String,
}

/// A candidate suggestion as produced by a word source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Word {
    pub value: String,
    #[serde(rename = "type")]
    pub word_type: WordType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Alternate spellings, in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub created_path: String,
    /// Front-matter key this word was found under.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default)]
    pub phantom: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias_meta: Option<AliasMeta>,
}

impl Word {
    pub fn new(value: impl Into<String>, word_type: WordType) -> Self {
        Self {
            value: value.into(),
            word_type,
            description: None,
            aliases: Vec::new(),
            created_path: String::new(),
            key: None,
            phantom: false,
            alias_meta: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set aliases, dropping blanks, repeats and copies of `value`.
    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases.clear();
        for alias in aliases {
            self.add_alias(alias.into());
        }
        self
    }

    pub fn with_created_path(mut self, path: impl Into<String>) -> Self {
        self.created_path = path.into();
        self
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn with_alias_meta(mut self, origin: impl Into<String>) -> Self {
        self.alias_meta = Some(AliasMeta { origin: origin.into() });
        self
    }

    pub fn phantom(mut self) -> Self {
        self.phantom = true;
        self
    }

    /// Appends an alias unless it is empty, equal to `value` or already present.
    pub fn add_alias(&mut self, alias: String) -> bool {
        if alias.is_empty() || alias == self.value || self.aliases.contains(&alias) {
            return false;
        }
        self.aliases.push(alias);
        true
    }
}

/// A judged, annotated copy of a [`Word`] handed back to the caller.
///
/// `word.value` may differ from the indexed original (first letter
/// capitalized for a capitalized query); the indexed word is never touched.
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub word: Word,
    /// The text that actually matched: the value or one of the aliases.
    pub hit: String,
    pub query: String,
    pub fuzzy: bool,
    pub matched_via_alias: bool,
    /// Byte offset of the phrase start inside the line the query came from.
    pub offset: Option<usize>,
}

impl Suggestion {
    pub fn value(&self) -> &str {
        &self.word.value
    }

    pub fn word_type(&self) -> WordType {
        self.word.word_type
    }

    pub(crate) fn hit_len(&self) -> usize {
        self.hit.chars().count()
    }
}

/// Result of judging one word against one query; `None` means no match.
pub type Judgement = Option<Suggestion>;
