//! Core dictionary library shared by the backend and the client.
//!
//! Provides:
//! - Reduction of upstream RAE responses to a compact cached payload
//! - A bounded, persistent entry store with recent searches and play stats
//! - A multiple-choice quiz generator over cached entries
//! - Shared types (Entry, Sense, Question, etc.)

pub mod error;
pub mod events;
pub mod quiz;
pub mod rae;
pub mod storage;
pub mod store;
pub mod types;

pub use error::{Result, StorageError};
pub use events::{EventBus, StoreEvent};
pub use quiz::{build_question, DEFAULT_OPTION_COUNT, MAX_DRAW_ATTEMPTS};
pub use rae::{simplify, RaeWordResponse};
pub use storage::{KeyValueStorage, MemoryStorage, NullStorage};
pub use store::{normalize_word, EntryStore, StoreConfig};
pub use types::{
    ordered_persons, Conjugations, DictEntry, Entry, NonPersonalForms, Person, PersonTable,
    PlayStats, Question, QuizOption, RecentSearch, Sense, Tenses,
};
