//! Per-day tally of review activity.

use crate::types::StudySession;
use chrono::{DateTime, Utc};

/// Record one review outcome against the session for `now`'s calendar day.
///
/// Sessions are keyed by UTC day; at most one record exists per day, and a
/// review on an existing day increments that record in place. New records
/// take the millisecond timestamp of `now` as their id, the same id scheme
/// the shipped collections use.
pub fn record_review(sessions: &mut Vec<StudySession>, now: DateTime<Utc>, was_correct: bool) {
    let today = now.date_naive();

    if let Some(session) = sessions.iter_mut().find(|s| s.date == today) {
        session.cards_reviewed += 1;
        if was_correct {
            session.correct_answers += 1;
        }
        return;
    }

    sessions.push(StudySession {
        id: now.timestamp_millis().to_string(),
        date: today,
        cards_reviewed: 1,
        correct_answers: if was_correct { 1 } else { 0 },
        time_spent: 0,
    });
}
