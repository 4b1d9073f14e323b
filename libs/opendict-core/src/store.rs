//! Durable, size-bounded cache of dictionary lookups.
//!
//! The store owns three documents in a [`KeyValueStorage`]: cached entries
//! keyed by normalized word, the recent search list, and play statistics.
//! Every operation is one synchronous read-modify-write of its document.
//! A single writer per storage scope is assumed; concurrent writers from
//! separate processes can lose updates.

use crate::events::EventBus;
use crate::storage::{KeyValueStorage, NullStorage, KEY_ENTRIES, KEY_PLAY, KEY_RECENTS};
use crate::types::{DictEntry, Entry, PlayStats, RecentSearch};
use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;

/// Limits applied by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    /// Maximum cached entries; the least recently written are evicted.
    pub entry_limit: usize,
    /// Maximum recent searches kept.
    pub recent_limit: usize,
    /// Playable entries required before the quiz unlocks.
    pub quiz_unlock_threshold: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            entry_limit: 50,
            recent_limit: 10,
            quiz_unlock_threshold: 10,
        }
    }
}

/// Normalize a word into its lookup key.
pub fn normalize_word(word: &str) -> String {
    word.trim().to_lowercase()
}

/// Current time in Unix milliseconds, strictly after `newest` when given.
fn next_timestamp(newest: Option<i64>) -> i64 {
    let now = Utc::now().timestamp_millis();
    match newest {
        Some(newest) if newest >= now => newest + 1,
        _ => now,
    }
}

fn sort_by_recency(entries: &mut [Entry]) {
    entries.sort_by(|a, b| b.at.cmp(&a.at).then_with(|| a.word.cmp(&b.word)));
}

/// Entry, recent search and play statistics store.
pub struct EntryStore {
    storage: Box<dyn KeyValueStorage>,
    available: bool,
    config: StoreConfig,
    events: EventBus,
    streak: u32,
}

impl EntryStore {
    /// Create a store over `storage`.
    ///
    /// If the backend reports itself unavailable the store operates as an
    /// always-empty no-op store.
    pub fn new<S: KeyValueStorage + 'static>(storage: S, config: StoreConfig) -> Self {
        let available = storage.is_available();
        let storage: Box<dyn KeyValueStorage> = if available {
            Box::new(storage)
        } else {
            tracing::warn!("persistent storage unavailable, entry store will not persist");
            Box::new(NullStorage)
        };

        Self {
            storage,
            available,
            config,
            events: EventBus::new(),
            streak: 0,
        }
    }

    /// Store with no persistence at all.
    pub fn detached() -> Self {
        Self::new(NullStorage, StoreConfig::default())
    }

    pub fn is_persistent(&self) -> bool {
        self.available
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    fn read<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        match self.storage.get_item(key) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!("malformed document {}: {}, using empty state", key, e);
                T::default()
            }),
            Ok(None) => T::default(),
            Err(e) => {
                tracing::warn!("failed to read {}: {}", key, e);
                T::default()
            }
        }
    }

    fn write<T: Serialize>(&self, key: &str, value: &T) -> bool {
        let json = match serde_json::to_string(value) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!("failed to serialize {}: {}", key, e);
                return false;
            }
        };
        match self.storage.set_item(key, &json) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("failed to write {}: {}", key, e);
                false
            }
        }
    }

    /// Read the entries document, skipping individual entries that fail to parse.
    fn read_entries(&self) -> Vec<Entry> {
        let raw: BTreeMap<String, serde_json::Value> = self.read(KEY_ENTRIES);
        raw.into_iter()
            .filter_map(|(key, value)| match serde_json::from_value::<Entry>(value) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::warn!("dropping malformed cached entry {}: {}", key, e);
                    None
                }
            })
            .collect()
    }

    /// Cache `data` under the normalized `word` with the configured limit.
    pub fn upsert_entry(&self, word: &str, data: DictEntry) -> bool {
        self.upsert_entry_with_limit(word, data, self.config.entry_limit)
    }

    /// Cache `data` under the normalized `word`, keeping the `limit` most recent entries.
    ///
    /// Returns `false` when nothing was persisted: blank words and a zero
    /// limit are rejected and a detached store never persists.
    pub fn upsert_entry_with_limit(&self, word: &str, data: DictEntry, limit: usize) -> bool {
        let key = normalize_word(word);
        if key.is_empty() {
            tracing::debug!("ignoring cache write for blank word");
            return false;
        }
        if !self.available {
            return false;
        }
        if limit == 0 {
            tracing::debug!("entry limit is zero, not caching {}", key);
            return false;
        }

        let mut entries: Vec<Entry> = self
            .read_entries()
            .into_iter()
            .filter(|e| e.word != key)
            .collect();
        let at = next_timestamp(entries.iter().map(|e| e.at).max());
        entries.push(Entry {
            word: key.clone(),
            at,
            data,
        });
        sort_by_recency(&mut entries);
        entries.truncate(limit);

        let next: BTreeMap<String, Entry> = entries
            .into_iter()
            .map(|e| (e.word.clone(), e))
            .collect();

        if !self.write(KEY_ENTRIES, &next) {
            return false;
        }
        self.events.entries_changed(&key);
        true
    }

    /// Look up a cached entry by word, case- and whitespace-insensitively.
    pub fn get_entry(&self, word: &str) -> Option<Entry> {
        let key = normalize_word(word);
        self.read_entries().into_iter().find(|e| e.word == key)
    }

    /// All cached entries, most recently written first.
    pub fn list_entries(&self) -> Vec<Entry> {
        let mut entries = self.read_entries();
        sort_by_recency(&mut entries);
        entries
    }

    /// Cached entries with at least one playable sense, most recent first.
    pub fn playable_entries(&self) -> Vec<Entry> {
        self.list_entries()
            .into_iter()
            .filter(|e| e.data.has_playable_sense())
            .collect()
    }

    pub fn playable_count(&self) -> usize {
        self.playable_entries().len()
    }

    /// Whether enough playable entries exist to unlock the quiz.
    pub fn is_quiz_eligible(&self) -> bool {
        self.playable_count() >= self.config.quiz_unlock_threshold
    }

    /// Record a submitted search with the configured limit.
    pub fn add_recent_search(&self, q: &str) {
        self.add_recent_search_with_limit(q, self.config.recent_limit);
    }

    /// Record a submitted search, collapsing case-insensitive duplicates.
    pub fn add_recent_search_with_limit(&self, q: &str, limit: usize) {
        let trimmed = q.trim();
        if trimmed.is_empty() {
            return;
        }

        let lowered = trimmed.to_lowercase();
        let current: Vec<RecentSearch> = self.read(KEY_RECENTS);
        let at = next_timestamp(current.iter().map(|r| r.at).max());

        let mut next = Vec::with_capacity(current.len() + 1);
        next.push(RecentSearch {
            q: trimmed.to_string(),
            at,
        });
        next.extend(current.into_iter().filter(|r| r.q.to_lowercase() != lowered));
        next.truncate(limit);

        self.write(KEY_RECENTS, &next);
    }

    /// Up to `limit` recent searches, newest first.
    pub fn get_recent_searches(&self, limit: usize) -> Vec<RecentSearch> {
        let mut recents: Vec<RecentSearch> = self.read(KEY_RECENTS);
        recents.truncate(limit);
        recents
    }

    pub fn recent_searches(&self) -> Vec<RecentSearch> {
        self.get_recent_searches(self.config.recent_limit)
    }

    pub fn get_play_stats(&self) -> PlayStats {
        self.read(KEY_PLAY)
    }

    /// Streak of consecutive correct answers in this session.
    pub fn current_streak(&self) -> u32 {
        self.streak
    }

    /// Count an answer and update the session streak and best streak.
    pub fn record_answer(&mut self, correct: bool) -> PlayStats {
        let mut stats = self.get_play_stats();
        stats.answered += 1;

        if correct {
            self.streak += 1;
            if self.streak > stats.best_streak {
                stats.best_streak = self.streak;
            }
        } else {
            self.streak = 0;
        }

        self.write(KEY_PLAY, &stats);
        stats
    }

    /// Clear transient session state and broadcast the reset signal.
    pub fn reset(&mut self) {
        self.streak = 0;
        self.events.reset();
    }
}
