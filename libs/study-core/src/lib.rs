//! Core progress model shared by the flashcard application layer.
//!
//! Provides:
//! - Record types (Flashcard, StudySession) with their persisted JSON shape
//! - The static chapter index for the CPP exam domains
//! - Study-set selection (mode + due-date filtering)
//! - Mastery updates for the two review outcomes
//! - Per-day session tallying
//! - Seed dataset parsing

pub mod chapters;
pub mod error;
pub mod schedule;
pub mod seed;
pub mod select;
pub mod session;
pub mod types;

pub use chapters::{cards_for_chapter, Chapter, CHAPTERS};
pub use error::{Result, SeedError};
pub use schedule::{mark_known, mark_unknown, next_review_date, REVIEW_INTERVALS};
pub use select::{matches_mode, select_study_cards};
pub use session::record_review;
pub use types::{Difficulty, Flashcard, StudyMode, StudySession, MASTERY_THRESHOLD};
