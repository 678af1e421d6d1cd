//! Test fixtures and factory functions for store tests.
#![allow(dead_code)]

use cpp_flashcards_mobile::storage::{
    BlobStore, MemoryStorage, StorageError, FLASHCARDS_KEY,
};
use std::sync::Arc;
use study_core::types::{Difficulty, Flashcard};

/// A card with clean progress in the given category.
pub fn card(id: &str, category: &str) -> Flashcard {
    Flashcard::new(
        id.to_string(),
        format!("question {id}"),
        format!("answer {id}"),
        category.to_string(),
        Difficulty::Medium,
    )
}

/// Memory storage pre-populated with a flashcard collection.
pub fn storage_with_cards(cards: &[Flashcard]) -> Arc<MemoryStorage> {
    let storage = MemoryStorage::new();
    let payload = serde_json::to_string(cards).expect("encode fixture cards");
    storage
        .put(FLASHCARDS_KEY, &payload)
        .expect("seed fixture storage");
    Arc::new(storage)
}

/// The three-card collection from the chapter-scoping scenario: two
/// Investigations cards and one Physical Security card.
pub fn scenario_cards() -> Vec<Flashcard> {
    vec![
        card("a1", "Investigations"),
        card("a2", "Investigations"),
        card("b1", "Physical Security"),
    ]
}

/// A storage backend where every operation fails.
pub struct FailingStorage;

impl BlobStore for FailingStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Backend(format!("get {key}")))
    }

    fn put(&self, key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Backend(format!("put {key}")))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        Err(StorageError::Backend(format!("remove {key}")))
    }
}
