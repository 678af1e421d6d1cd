//! String-keyed blob storage backing the card store.
//!
//! The store persists whole collections as JSON documents under fixed keys,
//! mirroring the key-value layout the shipped app used.

mod fs;
mod memory;

pub use fs::{default_data_dir, FileStorage};
pub use memory::MemoryStorage;

use thiserror::Error;

/// Key holding the serialized flashcard collection.
pub const FLASHCARDS_KEY: &str = "flashcards";
/// Key holding the serialized study-session collection.
pub const SESSIONS_KEY: &str = "studySessions";
/// Key holding the UI-state snapshot.
pub const STUDY_STATE_KEY: &str = "studyState";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage backend error: {0}")]
    Backend(String),
}

/// A string-keyed blob store.
///
/// `get` of an absent key is `Ok(None)` and `remove` of an absent key is
/// `Ok(())`; only real backend failures surface as errors.
pub trait BlobStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn put(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
