//! Parser for the bundled seed dataset.
//!
//! The seed is a JSON document with a top-level `flashcards` array carrying
//! card content only. Any progress fields present in the document are
//! ignored; every parsed card starts with a clean review history.

use crate::error::{Result, SeedError};
use crate::types::{Difficulty, Flashcard};
use serde::Deserialize;
use std::collections::HashSet;

#[derive(Debug, Deserialize)]
struct SeedDocument {
    flashcards: Vec<SeedCard>,
}

#[derive(Debug, Deserialize)]
struct SeedCard {
    id: String,
    question: String,
    answer: String,
    category: String,
    difficulty: Difficulty,
}

/// Parse the seed document into freshly-initialized cards.
pub fn parse(json: &str) -> Result<Vec<Flashcard>> {
    let document: SeedDocument = serde_json::from_str(json)?;

    if document.flashcards.is_empty() {
        return Err(SeedError::EmptySeed);
    }

    let mut seen = HashSet::new();
    for card in &document.flashcards {
        if !seen.insert(card.id.as_str()) {
            return Err(SeedError::DuplicateId {
                id: card.id.clone(),
            });
        }
    }

    Ok(document
        .flashcards
        .into_iter()
        .map(|card| {
            Flashcard::new(
                card.id,
                card.question,
                card.answer,
                card.category,
                card.difficulty,
            )
        })
        .collect())
}
