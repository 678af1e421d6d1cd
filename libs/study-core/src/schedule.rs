//! Mastery updates applied by the two review outcomes.
//!
//! The shipped behavior is binary: a known card jumps straight to mastered
//! and leaves the schedule, an unknown card resets to level 0 and becomes due
//! immediately. The graduated interval table is the scheduling hook for
//! per-level due dates; [`next_review_date`] computes against it.

use crate::types::{Flashcard, MASTERY_THRESHOLD};
use chrono::{DateTime, Duration, Utc};

/// Days until the next review, indexed by mastery level.
pub const REVIEW_INTERVALS: [i64; 6] = [1, 3, 7, 14, 30, 90];

/// Due date for a card at the given mastery level, reviewed at `now`.
///
/// Levels beyond the table clamp to its last entry.
pub fn next_review_date(mastery_level: u8, now: DateTime<Utc>) -> DateTime<Utc> {
    let index = (mastery_level as usize).min(REVIEW_INTERVALS.len() - 1);
    now + Duration::days(REVIEW_INTERVALS[index])
}

/// Apply a "knew it" outcome: the card is mastered and drops off the schedule.
pub fn mark_known(card: &mut Flashcard, now: DateTime<Utc>) {
    card.mastery_level = MASTERY_THRESHOLD;
    card.is_mastered = true;
    card.next_review_date = None;
    card.last_reviewed = Some(now);
    card.review_count += 1;
}

/// Apply a "didn't know it" outcome: progress resets and the card is due now.
pub fn mark_unknown(card: &mut Flashcard, now: DateTime<Utc>) {
    card.mastery_level = 0;
    card.is_mastered = false;
    card.next_review_date = Some(now);
    card.last_reviewed = Some(now);
    card.review_count += 1;
}
