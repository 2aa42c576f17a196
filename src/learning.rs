// File: src/learning.rs
use crate::core::types::{Suggestion, WordType};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;

const SECOND: u64 = 1000;
const MINUTE: u64 = 60 * SECOND;
const HOUR: u64 = 60 * MINUTE;
pub(crate) const DAY: u64 = 24 * HOUR;
const WEEK: u64 = 7 * DAY;

/// How often and how recently one (hit, value, type) was accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionHistory {
    pub count: u32,
    /// Milliseconds since the Unix epoch.
    pub last_updated: u64,
}

/// hit -> value -> word type -> history
pub type SelectionHistoryTree =
    BTreeMap<String, BTreeMap<String, BTreeMap<WordType, SelectionHistory>>>;

pub trait Clock: Send + Sync {
    fn now_millis(&self) -> u64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RetentionPolicy {
    pub max_days_to_keep_history: u64,
    /// 0 keeps everything.
    pub max_number_of_history_to_keep: usize,
}

impl Default for RetentionPolicy {
    fn default() -> Self {
        Self { max_days_to_keep_history: 28, max_number_of_history_to_keep: 0 }
    }
}

/// Recency/frequency ledger of accepted suggestions.
///
/// `version` moves on every change; the host compares it with the last
/// persisted version to debounce writes.
pub struct SelectionHistoryStore {
    data: SelectionHistoryTree,
    policy: RetentionPolicy,
    clock: Arc<dyn Clock>,
    version: u64,
    persisted_version: u64,
}

impl SelectionHistoryStore {
    pub fn new(data: SelectionHistoryTree, policy: RetentionPolicy) -> Self {
        Self::with_clock(data, policy, Arc::new(SystemClock))
    }

    pub fn with_clock(data: SelectionHistoryTree, policy: RetentionPolicy, clock: Arc<dyn Clock>) -> Self {
        Self { data, policy, clock, version: 0, persisted_version: 0 }
    }

    pub fn tree(&self) -> &SelectionHistoryTree {
        &self.data
    }

    pub fn policy(&self) -> RetentionPolicy {
        self.policy
    }

    pub fn get(&self, hit: &str, value: &str, word_type: WordType) -> Option<&SelectionHistory> {
        self.data.get(hit)?.get(value)?.get(&word_type)
    }

    fn history_of(&self, s: &Suggestion) -> Option<&SelectionHistory> {
        self.get(&s.hit, &s.word.value, s.word.word_type)
    }

    /// Record that `suggestion` was accepted.
    pub fn increment(&mut self, suggestion: &Suggestion) {
        let now = self.clock.now_millis();
        let entry = self
            .data
            .entry(suggestion.hit.clone())
            .or_default()
            .entry(suggestion.word.value.clone())
            .or_default()
            .entry(suggestion.word.word_type)
            .and_modify(|h| {
                h.count = h.count.saturating_add(1);
                h.last_updated = now;
            })
            .or_insert(SelectionHistory { count: 1, last_updated: now });
        debug!(hit = %suggestion.hit, count = entry.count, "selection recorded");
        self.version += 1;
    }

    fn score(&self, history: Option<&SelectionHistory>) -> f64 {
        let Some(history) = history else {
            return 0.0;
        };
        let behind = self.clock.now_millis().saturating_sub(history.last_updated);
        let weight = if behind < MINUTE {
            8.0
        } else if behind < HOUR {
            4.0
        } else if behind < DAY {
            2.0
        } else if behind < WEEK {
            0.5
        } else {
            0.25
        };
        weight * f64::from(history.count)
    }

    /// Higher decayed score sorts first.
    pub fn compare(&self, a: &Suggestion, b: &Suggestion) -> Ordering {
        let score_a = self.score(self.history_of(a));
        let score_b = self.score(self.history_of(b));
        score_b.partial_cmp(&score_a).unwrap_or(Ordering::Equal)
    }

    /// Drop expired leaves, then empty parents, then the oldest leaves beyond
    /// the size cap.
    pub fn purge(&mut self) {
        let now = self.clock.now_millis();
        let max_age = self.policy.max_days_to_keep_history.saturating_mul(DAY);
        let before = self.leaf_count();

        for values in self.data.values_mut() {
            for kinds in values.values_mut() {
                kinds.retain(|_, h| now.saturating_sub(h.last_updated) <= max_age);
            }
            values.retain(|_, kinds| !kinds.is_empty());
        }
        self.data.retain(|_, values| !values.is_empty());

        let cap = self.policy.max_number_of_history_to_keep;
        if cap > 0 && self.leaf_count() > cap {
            self.keep_most_recent(cap);
        }

        let after = self.leaf_count();
        if after != before {
            debug!(before, after, "purged selection history");
            self.version += 1;
        }
    }

    fn keep_most_recent(&mut self, cap: usize) {
        let mut stamps: Vec<u64> = self
            .data
            .values()
            .flat_map(|v| v.values())
            .flat_map(|k| k.values())
            .map(|h| h.last_updated)
            .collect();
        stamps.sort_unstable_by(|a, b| b.cmp(a));
        let threshold = stamps[cap - 1];
        let newer = stamps.iter().take_while(|&&t| t > threshold).count();
        // Ties at the threshold only get the slots newer leaves did not take.
        let mut tied_room = cap - newer;

        for values in self.data.values_mut() {
            for kinds in values.values_mut() {
                kinds.retain(|_, h| {
                    if h.last_updated > threshold {
                        return true;
                    }
                    if h.last_updated == threshold && tied_room > 0 {
                        tied_room -= 1;
                        return true;
                    }
                    false
                });
            }
            values.retain(|_, kinds| !kinds.is_empty());
        }
        self.data.retain(|_, values| !values.is_empty());
    }

    pub fn leaf_count(&self) -> usize {
        self.data.values().flat_map(|v| v.values()).map(|k| k.len()).sum()
    }

    pub fn should_persist(&self) -> bool {
        self.version > self.persisted_version
    }

    pub fn sync_persist_version(&mut self) {
        self.persisted_version = self.version;
    }
}
