//! The card store: single owner of the live collections and their persistence.
//!
//! Every mutation runs to completion on the caller's thread of control,
//! replaces in-memory state first, and then issues one fire-and-forget write
//! of the affected collection. Writes are last-write-wins; a failed write is
//! logged and dropped, and the in-memory state stays authoritative for the
//! running session.

use crate::error::{Result, StoreError};
use crate::state::StudyState;
use crate::storage::{BlobStore, FLASHCARDS_KEY, SESSIONS_KEY, STUDY_STATE_KEY};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use study_core::types::{Flashcard, StudyMode, StudySession};
use study_core::{chapters, schedule, seed, select, session};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Bundled seed dataset, consumed on first load and on reset.
const SEED_JSON: &str = include_str!("../assets/flashcards.json");

pub struct CardStore {
    storage: Arc<dyn BlobStore>,
    cards: Vec<Flashcard>,
    sessions: Vec<StudySession>,
    state: StudyState,
    pending_writes: Vec<JoinHandle<()>>,
}

impl CardStore {
    /// Load all persisted collections, seeding the card set on first run.
    ///
    /// An unreadable flashcards document falls back to the seed; unreadable
    /// sessions or UI state fall back to empty/default. Only a broken seed
    /// dataset is a hard error.
    pub fn load(storage: Arc<dyn BlobStore>) -> Result<Self> {
        let cards = match storage.get(FLASHCARDS_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Flashcard>>(&raw) {
                Ok(cards) => cards,
                Err(err) => {
                    warn!(%err, "stored flashcards unreadable, falling back to seed");
                    seed::parse(SEED_JSON)?
                }
            },
            Ok(None) => {
                debug!("no stored flashcards, seeding from bundled dataset");
                let cards = seed::parse(SEED_JSON)?;
                if let Err(err) = write_json(&*storage, FLASHCARDS_KEY, &cards) {
                    warn!(%err, "failed to persist seeded flashcards");
                }
                cards
            }
            Err(err) => {
                warn!(%err, "failed to read flashcards from storage, falling back to seed");
                seed::parse(SEED_JSON)?
            }
        };

        let sessions = load_or_default(&*storage, SESSIONS_KEY);
        let state = load_or_default(&*storage, STUDY_STATE_KEY);

        Ok(Self {
            storage,
            cards,
            sessions,
            state,
            pending_writes: Vec::new(),
        })
    }

    pub fn cards(&self) -> &[Flashcard] {
        &self.cards
    }

    pub fn sessions(&self) -> &[StudySession] {
        &self.sessions
    }

    pub fn card(&self, card_id: &str) -> Option<&Flashcard> {
        self.cards.iter().find(|card| card.id == card_id)
    }

    /// Cards belonging to one chapter, in store order.
    pub fn chapter_cards(&self, chapter_id: &str) -> Vec<&Flashcard> {
        chapters::cards_for_chapter(&self.cards, chapter_id)
    }

    /// The cloned working set for a study session.
    pub fn study_cards(
        &self,
        scope: Option<&str>,
        mode: StudyMode,
        now: DateTime<Utc>,
    ) -> Vec<Flashcard> {
        select::select_study_cards(&self.cards, scope, mode, now)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Apply a "knew it" outcome to one card and tally it for today.
    pub async fn mark_known(&mut self, card_id: &str, now: DateTime<Utc>) -> Result<()> {
        let card = self.card_mut(card_id)?;
        schedule::mark_known(card, now);
        session::record_review(&mut self.sessions, now, true);
        self.persist_cards();
        self.persist_sessions();
        Ok(())
    }

    /// Apply a "didn't know it" outcome to one card and tally it for today.
    pub async fn mark_unknown(&mut self, card_id: &str, now: DateTime<Utc>) -> Result<()> {
        let card = self.card_mut(card_id)?;
        schedule::mark_unknown(card, now);
        session::record_review(&mut self.sessions, now, false);
        self.persist_cards();
        self.persist_sessions();
        Ok(())
    }

    /// Toggle a card's bookmark; returns the new flag.
    pub async fn toggle_bookmark(&mut self, card_id: &str) -> Result<bool> {
        let card = self.card_mut(card_id)?;
        card.is_bookmarked = !card.is_bookmarked;
        let bookmarked = card.is_bookmarked;
        self.persist_cards();
        Ok(bookmarked)
    }

    pub fn study_state(&self) -> &StudyState {
        &self.state
    }

    /// Replace the UI-state snapshot, persisting it when it changed.
    pub async fn set_study_state(&mut self, state: StudyState) {
        if self.state == state {
            return;
        }
        self.state = state;
        self.persist_state();
    }

    /// Wipe all persisted data and reinitialize from the seed dataset.
    ///
    /// In-memory state is only swapped after every key is cleared and the
    /// seed has parsed; a failure before that point leaves the previous
    /// collections untouched and is returned to the caller.
    pub async fn reset_all(&mut self) -> Result<()> {
        for key in [FLASHCARDS_KEY, SESSIONS_KEY, STUDY_STATE_KEY] {
            self.storage.remove(key)?;
        }
        let cards = seed::parse(SEED_JSON)?;

        self.cards = cards;
        self.sessions.clear();
        self.state = StudyState::default();

        if let Err(err) = write_json(&*self.storage, FLASHCARDS_KEY, &self.cards) {
            warn!(%err, "failed to persist reseeded flashcards");
        }
        Ok(())
    }

    /// Await outstanding fire-and-forget writes (shutdown/test hook).
    pub async fn flush(&mut self) {
        for handle in self.pending_writes.drain(..) {
            let _ = handle.await;
        }
    }

    fn card_mut(&mut self, card_id: &str) -> Result<&mut Flashcard> {
        self.cards
            .iter_mut()
            .find(|card| card.id == card_id)
            .ok_or_else(|| StoreError::CardNotFound(card_id.to_string()))
    }

    fn persist_cards(&mut self) {
        self.spawn_write(FLASHCARDS_KEY, serde_json::to_string(&self.cards));
    }

    fn persist_sessions(&mut self) {
        self.spawn_write(SESSIONS_KEY, serde_json::to_string(&self.sessions));
    }

    fn persist_state(&mut self) {
        self.spawn_write(STUDY_STATE_KEY, serde_json::to_string(&self.state));
    }

    /// Issue one unordered background write of a serialized collection.
    fn spawn_write(&mut self, key: &'static str, payload: serde_json::Result<String>) {
        let payload = match payload {
            Ok(payload) => payload,
            Err(err) => {
                warn!(key, %err, "failed to encode collection, skipping write");
                return;
            }
        };
        let storage = Arc::clone(&self.storage);
        let handle = tokio::task::spawn_blocking(move || {
            if let Err(err) = storage.put(key, &payload) {
                warn!(key, %err, "write failed, in-memory state stays authoritative");
            }
        });
        self.pending_writes.retain(|h| !h.is_finished());
        self.pending_writes.push(handle);
    }
}

fn load_or_default<T: DeserializeOwned + Default>(storage: &dyn BlobStore, key: &str) -> T {
    match storage.get(key) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                warn!(key, %err, "stored document unreadable, using defaults");
                T::default()
            }
        },
        Ok(None) => T::default(),
        Err(err) => {
            warn!(key, %err, "failed to read from storage, using defaults");
            T::default()
        }
    }
}

fn write_json<T: Serialize>(storage: &dyn BlobStore, key: &str, value: &T) -> Result<()> {
    let payload = serde_json::to_string(value)?;
    storage.put(key, &payload)?;
    Ok(())
}
