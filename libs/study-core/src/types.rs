//! Core types for the flashcard progress model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Mastery level at which a card counts as mastered.
pub const MASTERY_THRESHOLD: u8 = 3;

/// Content difficulty assigned when a card is authored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Which slice of a chapter a study session draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StudyMode {
    All,
    Bookmarked,
    Difficult,
}

impl Default for StudyMode {
    fn default() -> Self {
        Self::All
    }
}

/// A single flashcard together with its review progress.
///
/// Persisted as camelCase JSON, compatible with the collections the shipped
/// app wrote. Progress fields default when absent so that documents written
/// by older versions deserialize to fully-populated records; the two optional
/// timestamps are the only fields whose absence carries meaning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flashcard {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub category: String,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub is_bookmarked: bool,
    #[serde(default)]
    pub review_count: u32,
    /// 0 = never successfully reviewed or reset, up to 5.
    #[serde(default)]
    pub mastery_level: u8,
    #[serde(default)]
    pub is_mastered: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_reviewed: Option<DateTime<Utc>>,
    /// Absent means not scheduled, which non-`all` modes treat as due now.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_review_date: Option<DateTime<Utc>>,
}

impl Flashcard {
    /// Create a card with all progress fields at their initial values.
    pub fn new(
        id: String,
        question: String,
        answer: String,
        category: String,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            id,
            question,
            answer,
            category,
            difficulty,
            is_bookmarked: false,
            review_count: 0,
            mastery_level: 0,
            is_mastered: false,
            last_reviewed: None,
            next_review_date: None,
        }
    }

    /// A card is due when it has no scheduled review or the schedule has passed.
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        match self.next_review_date {
            Some(due) => due <= now,
            None => true,
        }
    }
}

/// Aggregate of all review actions on one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudySession {
    pub id: String,
    pub date: NaiveDate,
    pub cards_reviewed: u32,
    pub correct_answers: u32,
    /// Reserved; nothing populates it yet.
    #[serde(default)]
    pub time_spent: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use pretty_assertions::assert_eq;

    fn card() -> Flashcard {
        Flashcard::new(
            "1".to_string(),
            "Q".to_string(),
            "A".to_string(),
            "Investigations".to_string(),
            Difficulty::Medium,
        )
    }

    #[test]
    fn new_card_has_initial_progress() {
        let card = card();
        assert_eq!(card.review_count, 0);
        assert_eq!(card.mastery_level, 0);
        assert!(!card.is_mastered);
        assert!(!card.is_bookmarked);
        assert_eq!(card.last_reviewed, None);
        assert_eq!(card.next_review_date, None);
    }

    #[test]
    fn unscheduled_card_is_due() {
        let card = card();
        assert!(card.is_due(Utc::now()));
    }

    #[test]
    fn scheduled_card_is_due_once_date_passes() {
        let now = Utc::now();
        let mut card = card();
        card.next_review_date = Some(now + Duration::days(1));
        assert!(!card.is_due(now));
        assert!(card.is_due(now + Duration::days(1)));
        assert!(card.is_due(now + Duration::days(2)));
    }

    #[test]
    fn progress_fields_default_when_absent() {
        // A record written before progress tracking existed.
        let json = r#"{
            "id": "42",
            "question": "What is the primary goal of CPTED?",
            "answer": "Reduce crime opportunity through environmental design.",
            "category": "Physical Security",
            "difficulty": "easy",
            "isFavorite": true
        }"#;
        let card: Flashcard = serde_json::from_str(json).unwrap();
        assert_eq!(card.review_count, 0);
        assert_eq!(card.mastery_level, 0);
        assert!(!card.is_mastered);
        assert!(!card.is_bookmarked);
        assert_eq!(card.next_review_date, None);
    }

    #[test]
    fn camel_case_round_trip_preserves_dates() {
        let now = Utc::now();
        let mut card = card();
        card.is_bookmarked = true;
        card.review_count = 2;
        card.last_reviewed = Some(now);
        card.next_review_date = Some(now);

        let json = serde_json::to_string(&card).unwrap();
        assert!(json.contains("\"isBookmarked\":true"));
        assert!(json.contains("\"nextReviewDate\""));

        let back: Flashcard = serde_json::from_str(&json).unwrap();
        assert_eq!(back, card);
    }

    #[test]
    fn absent_dates_are_not_serialized() {
        let json = serde_json::to_string(&card()).unwrap();
        assert!(!json.contains("nextReviewDate"));
        assert!(!json.contains("lastReviewed"));
    }
}
