//! Error types for the application layer.

use crate::storage::StorageError;
use study_core::SeedError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("seed error: {0}")]
    Seed(#[from] SeedError),

    #[error("serialization error: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("card not found: {0}")]
    CardNotFound(String),
}
