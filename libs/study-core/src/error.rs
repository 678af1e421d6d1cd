//! Error types for study-core.

use thiserror::Error;

/// Result type alias using SeedError.
pub type Result<T> = std::result::Result<T, SeedError>;

/// Errors that can occur while reading the bundled seed dataset.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("seed document is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("seed document contains no flashcards")]
    EmptySeed,

    #[error("duplicate card id {id} in seed document")]
    DuplicateId { id: String },
}
