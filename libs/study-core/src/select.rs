//! Selection of the working set for a study session.

use crate::chapters;
use crate::types::{Flashcard, StudyMode};
use chrono::{DateTime, Utc};

/// Whether a card qualifies for a study mode, ignoring due dates.
pub fn matches_mode(card: &Flashcard, mode: StudyMode) -> bool {
    match mode {
        StudyMode::All => !card.is_mastered,
        StudyMode::Bookmarked => card.is_bookmarked && !card.is_mastered,
        StudyMode::Difficult => {
            card.review_count > 0 && card.mastery_level == 0 && !card.is_mastered
        }
    }
}

/// Cards eligible for a session, in store order.
///
/// The base set is the whole store, or one chapter when `scope` names one.
/// `all` mode takes every non-mastered card regardless of schedule; the other
/// modes restrict to due cards but fall back to the undated qualifying set so
/// a session is never empty merely because nothing is due yet.
pub fn select_study_cards<'a>(
    cards: &'a [Flashcard],
    scope: Option<&str>,
    mode: StudyMode,
    now: DateTime<Utc>,
) -> Vec<&'a Flashcard> {
    let base: Vec<&Flashcard> = match scope {
        Some(chapter_id) => chapters::cards_for_chapter(cards, chapter_id),
        None => cards.iter().collect(),
    };

    let eligible: Vec<&Flashcard> = base
        .into_iter()
        .filter(|card| matches_mode(card, mode))
        .collect();

    if mode == StudyMode::All {
        return eligible;
    }

    let due: Vec<&Flashcard> = eligible
        .iter()
        .copied()
        .filter(|card| card.is_due(now))
        .collect();

    if due.is_empty() {
        eligible
    } else {
        due
    }
}
