//! Persisted snapshot of where the user is in the UI.

use serde::{Deserialize, Serialize};
use study_core::StudyMode;

/// Restored at startup before the first render; written after every change
/// to any of its fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StudyState {
    pub selected_chapter: Option<String>,
    pub study_mode: StudyMode,
    pub show_chapter_details: bool,
    pub current_card_index: usize,
}

impl Default for StudyState {
    fn default() -> Self {
        Self {
            selected_chapter: None,
            study_mode: StudyMode::All,
            show_chapter_details: false,
            current_card_index: 0,
        }
    }
}
