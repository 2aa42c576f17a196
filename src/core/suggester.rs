// File: src/core/suggester.rs
use crate::config::{FuzzyOptions, MatchMode, SourceGates};
use crate::core::index::WordIndex;
use crate::core::sources::IndexedWords;
use crate::core::types::{Judgement, Suggestion, Word, WordId, WordType};
use crate::fuzzy::{
    capitalize_first_letter, concrete_starts_with, lower_fuzzy, lower_fuzzy_starts_with,
    lower_includes, lower_starts_with, starts_with_upper, FuzzyResult,
};
use crate::learning::SelectionHistoryStore;
use std::cmp::Ordering;
use std::collections::HashSet;
use tracing::trace;

/// Front-matter keys that already have dedicated handling upstream.
const RESERVED_FRONT_MATTER_KEYS: [&str; 2] = ["alias", "aliases"];

#[derive(Clone, Copy, Default)]
pub struct SuggestOptions<'a> {
    pub fuzzy: Option<FuzzyOptions>,
    /// Scope the query to one front-matter key instead of the regular sources.
    pub front_matter: Option<&'a str>,
    pub gates: SourceGates,
    pub history: Option<&'a SelectionHistoryStore>,
}

type Matcher = fn(&str, &str) -> FuzzyResult;

fn matcher_for(mode: MatchMode, fuzzy: bool) -> Matcher {
    match (mode, fuzzy) {
        (MatchMode::Prefix, true) => lower_fuzzy_starts_with,
        (MatchMode::Partial, true) => lower_fuzzy,
        (_, false) => concrete_starts_with,
    }
}

fn annotate(word: &Word, hit: &str, query: &str, fuzzy: bool, matched_via_alias: bool) -> Suggestion {
    Suggestion {
        word: word.clone(),
        hit: hit.to_string(),
        query: query.to_string(),
        fuzzy,
        matched_via_alias,
        offset: None,
    }
}

fn judge_with(
    word: &Word,
    query: &str,
    query_starts_with_upper: bool,
    fuzzy: Option<FuzzyOptions>,
    mode: MatchMode,
) -> Judgement {
    if query.is_empty() {
        return Some(annotate(word, &word.value, query, false, false));
    }

    let min_match_score = fuzzy.map_or(0.0, |f| f.min_match_score);
    let matcher = matcher_for(mode, fuzzy.is_some());

    // 1. The value itself
    let result = matcher(&word.value, query);
    if result.accepted(min_match_score) {
        let mut suggestion = annotate(word, &word.value, query, result.is_fuzzy(), false);
        // Only a leading match may rewrite the first letter.
        if query_starts_with_upper
            && word.word_type.allows_capitalization()
            && lower_starts_with(&word.value, query)
        {
            suggestion.word.value = capitalize_first_letter(&word.value);
            suggestion.hit = suggestion.word.value.clone();
        }
        return Some(suggestion);
    }

    // 2. Aliases, concrete ones first, declaration order otherwise
    let mut alias_hits: Vec<(&String, FuzzyResult)> = word
        .aliases
        .iter()
        .map(|alias| (alias, matcher(alias, query)))
        .filter(|(_, r)| r.accepted(min_match_score))
        .collect();
    alias_hits.sort_by_key(|(_, r)| !r.is_concrete());
    if let Some((alias, r)) = alias_hits.first() {
        return Some(annotate(word, alias, query, r.is_fuzzy(), true));
    }

    // 3. Partial mode also accepts containment
    if mode == MatchMode::Partial {
        if lower_includes(&word.value, query) {
            return Some(annotate(word, &word.value, query, false, false));
        }
        if let Some(alias) = word.aliases.iter().find(|a| lower_includes(a, query)) {
            return Some(annotate(word, alias, query, false, true));
        }
    }

    None
}

/// Judge one word in prefix mode.
pub fn judge(
    word: &Word,
    query: &str,
    query_starts_with_upper: bool,
    fuzzy: Option<FuzzyOptions>,
) -> Judgement {
    judge_with(word, query, query_starts_with_upper, fuzzy, MatchMode::Prefix)
}

/// Judge one word in partial mode.
pub fn judge_by_partial_match(
    word: &Word,
    query: &str,
    query_starts_with_upper: bool,
    fuzzy: Option<FuzzyOptions>,
) -> Judgement {
    judge_with(word, query, query_starts_with_upper, fuzzy, MatchMode::Partial)
}

fn opposite_case(c: char) -> Option<char> {
    let mut flipped: Vec<char> = if c.is_uppercase() {
        c.to_lowercase().collect()
    } else {
        c.to_uppercase().collect()
    };
    match (flipped.pop(), flipped.is_empty()) {
        (Some(f), true) if f != c => Some(f),
        _ => None,
    }
}

/// Candidate words for `query`, each at most once per source.
fn gather<'w>(
    indexed: &'w IndexedWords,
    query: &str,
    mode: MatchMode,
    options: &SuggestOptions<'_>,
) -> Vec<&'w Word> {
    if let Some(key) = options.front_matter {
        if RESERVED_FRONT_MATTER_KEYS.contains(&key)
            || !options.gates.admits(WordType::FrontMatter, query)
        {
            return Vec::new();
        }
        return indexed
            .front_matter_index(key)
            .map(|index| index.words().map(|(_, w)| w).collect())
            .unwrap_or_default();
    }

    let first = query.chars().next();
    let mut candidates = Vec::new();
    for (source, index) in indexed.sources() {
        if !options.gates.admits(source, query) {
            trace!(%source, "source gated by query length");
            continue;
        }
        match (mode, first) {
            (MatchMode::Prefix, Some(first)) => collect_buckets(index, first, &mut candidates),
            _ => candidates.extend(index.words().map(|(_, w)| w)),
        }
    }
    candidates
}

fn collect_buckets<'w>(index: &'w WordIndex, first: char, out: &mut Vec<&'w Word>) {
    let mut seen: HashSet<WordId> = HashSet::new();
    let letters = std::iter::once(first).chain(opposite_case(first));
    for letter in letters {
        for (id, word) in index.bucket(letter) {
            if seen.insert(id) {
                out.push(word);
            }
        }
    }
}

fn compare(
    a: &Suggestion,
    b: &Suggestion,
    mode: MatchMode,
    history: Option<&SelectionHistoryStore>,
) -> Ordering {
    a.fuzzy
        .cmp(&b.fuzzy)
        .then_with(|| match mode {
            MatchMode::Partial => {
                let starts = |s: &Suggestion| !lower_starts_with(&s.hit, &s.query);
                starts(a).cmp(&starts(b))
            }
            MatchMode::Prefix => Ordering::Equal,
        })
        .then_with(|| history.map_or(Ordering::Equal, |h| h.compare(a, b)))
        .then_with(|| a.hit_len().cmp(&b.hit_len()))
        .then_with(|| b.word_type().priority().cmp(&a.word_type().priority()))
        .then_with(|| a.matched_via_alias.cmp(&b.matched_via_alias))
}

/// Same value in the same group; internal links must also share a target
/// unless either one is a phantom.
pub fn is_same_suggestion(a: &Suggestion, b: &Suggestion) -> bool {
    a.word.value == b.word.value
        && a.word_type().group() == b.word_type().group()
        && (a.word_type() != WordType::InternalLink
            || a.word.phantom
            || b.word.phantom
            || a.word.created_path == b.word.created_path)
}

pub(crate) fn dedup_suggestions(suggestions: Vec<Suggestion>) -> Vec<Suggestion> {
    let mut kept: Vec<Suggestion> = Vec::with_capacity(suggestions.len());
    for suggestion in suggestions {
        if !kept.iter().any(|k| is_same_suggestion(k, &suggestion)) {
            kept.push(suggestion);
        }
    }
    kept
}

/// Judge, rank, truncate to `max`, then drop duplicates.
pub fn suggest(
    indexed: &IndexedWords,
    query: &str,
    max: usize,
    mode: MatchMode,
    options: &SuggestOptions<'_>,
) -> Vec<Suggestion> {
    let upper = starts_with_upper(query);
    let candidates = gather(indexed, query, mode, options);
    let gathered = candidates.len();

    let mut judged: Vec<Suggestion> = candidates
        .into_iter()
        .filter_map(|word| judge_with(word, query, upper, options.fuzzy, mode))
        .collect();
    judged.sort_by(|a, b| compare(a, b, mode, options.history));
    judged.truncate(max);

    let suggestions = dedup_suggestions(judged);
    trace!(query, %mode, gathered, returned = suggestions.len(), "suggested");
    suggestions
}

pub fn suggest_words(
    indexed: &IndexedWords,
    query: &str,
    max: usize,
    options: &SuggestOptions<'_>,
) -> Vec<Suggestion> {
    suggest(indexed, query, max, MatchMode::Prefix, options)
}

pub fn suggest_words_by_partial_match(
    indexed: &IndexedWords,
    query: &str,
    max: usize,
    options: &SuggestOptions<'_>,
) -> Vec<Suggestion> {
    suggest(indexed, query, max, MatchMode::Partial, options)
}
