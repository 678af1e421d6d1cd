//! Dashboard aggregates over the live collections.

use serde::Serialize;
use study_core::chapters::CHAPTERS;
use study_core::select::matches_mode;
use study_core::types::{Flashcard, StudyMode, StudySession};

/// Overall progress figures for the dashboard header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    pub total_cards: usize,
    pub mastered: usize,
    pub bookmarked: usize,
    pub needs_review: usize,
}

impl DashboardSummary {
    pub fn compute(cards: &[Flashcard]) -> Self {
        Self {
            total_cards: cards.len(),
            mastered: cards.iter().filter(|c| c.is_mastered).count(),
            bookmarked: cards.iter().filter(|c| c.is_bookmarked).count(),
            needs_review: cards
                .iter()
                .filter(|c| matches_mode(c, StudyMode::Difficult))
                .count(),
        }
    }
}

/// Per-chapter progress row.
#[derive(Debug, Clone, Serialize)]
pub struct ChapterProgress {
    pub chapter_id: &'static str,
    pub title: &'static str,
    pub total_cards: usize,
    pub mastered: usize,
    pub bookmarked: usize,
    pub needs_review: usize,
    pub mastery_percent: f64,
}

impl ChapterProgress {
    /// One row per chapter, in chapter order.
    pub fn compute_all(cards: &[Flashcard]) -> Vec<Self> {
        CHAPTERS
            .iter()
            .map(|chapter| {
                let chapter_cards: Vec<&Flashcard> = cards
                    .iter()
                    .filter(|card| chapter.categories.contains(&card.category.as_str()))
                    .collect();
                let total = chapter_cards.len();
                let mastered = chapter_cards.iter().filter(|c| c.is_mastered).count();
                Self {
                    chapter_id: chapter.id,
                    title: chapter.title,
                    total_cards: total,
                    mastered,
                    bookmarked: chapter_cards.iter().filter(|c| c.is_bookmarked).count(),
                    needs_review: chapter_cards
                        .iter()
                        .filter(|c| matches_mode(c, StudyMode::Difficult))
                        .count(),
                    mastery_percent: if total == 0 {
                        0.0
                    } else {
                        mastered as f64 / total as f64 * 100.0
                    },
                }
            })
            .collect()
    }
}

/// Totals for the session-history panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSummary {
    pub total_reviewed: u32,
    pub total_correct: u32,
    pub accuracy: f64,
}

impl SessionSummary {
    pub fn compute(sessions: &[StudySession]) -> Self {
        let total_reviewed: u32 = sessions.iter().map(|s| s.cards_reviewed).sum();
        let total_correct: u32 = sessions.iter().map(|s| s.correct_answers).sum();
        Self {
            total_reviewed,
            total_correct,
            accuracy: if total_reviewed == 0 {
                0.0
            } else {
                total_correct as f64 / total_reviewed as f64
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pretty_assertions::assert_eq;
    use study_core::schedule::{mark_known, mark_unknown};
    use study_core::types::Difficulty;

    fn card(id: &str, category: &str) -> Flashcard {
        Flashcard::new(
            id.to_string(),
            format!("question {id}"),
            format!("answer {id}"),
            category.to_string(),
            Difficulty::Medium,
        )
    }

    #[test]
    fn summary_counts_each_bucket() {
        let now = Utc::now();
        let mut cards = vec![
            card("1", "Investigations"),
            card("2", "Investigations"),
            card("3", "Physical Security"),
        ];
        mark_known(&mut cards[0], now);
        mark_unknown(&mut cards[1], now);
        cards[2].is_bookmarked = true;

        let summary = DashboardSummary::compute(&cards);
        assert_eq!(
            summary,
            DashboardSummary {
                total_cards: 3,
                mastered: 1,
                bookmarked: 1,
                needs_review: 1,
            }
        );
    }

    #[test]
    fn chapter_progress_covers_every_chapter() {
        let now = Utc::now();
        let mut cards = vec![card("1", "Investigations"), card("2", "Investigations")];
        mark_known(&mut cards[0], now);

        let rows = ChapterProgress::compute_all(&cards);
        assert_eq!(rows.len(), CHAPTERS.len());

        let investigations = rows
            .iter()
            .find(|row| row.chapter_id == "investigations")
            .unwrap();
        assert_eq!(investigations.total_cards, 2);
        assert_eq!(investigations.mastered, 1);
        assert_eq!(investigations.mastery_percent, 50.0);

        let empty = rows
            .iter()
            .find(|row| row.chapter_id == "crisis-management")
            .unwrap();
        assert_eq!(empty.total_cards, 0);
        assert_eq!(empty.mastery_percent, 0.0);
    }

    #[test]
    fn session_summary_derives_accuracy() {
        let now = Utc::now();
        let mut sessions = Vec::new();
        study_core::session::record_review(&mut sessions, now, true);
        study_core::session::record_review(&mut sessions, now, true);
        study_core::session::record_review(&mut sessions, now, false);

        let summary = SessionSummary::compute(&sessions);
        assert_eq!(summary.total_reviewed, 3);
        assert_eq!(summary.total_correct, 2);
        assert!((summary.accuracy - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn empty_collections_produce_zeroes() {
        assert_eq!(SessionSummary::compute(&[]).accuracy, 0.0);
        assert_eq!(DashboardSummary::compute(&[]).total_cards, 0);
    }
}
