//! Persisted progress aggregation

use super::models::UserProgress;
use crate::clock::Clock;
use crate::phrases::Phrase;
use crate::storage::keys;
use crate::storage::{KeyValueStore, KeyValueStoreExt};

/// Reads and updates the `userProgress` record
pub struct ProgressTracker<'a> {
    store: &'a dyn KeyValueStore,
    clock: &'a dyn Clock,
}

impl<'a> ProgressTracker<'a> {
    pub fn new(store: &'a dyn KeyValueStore, clock: &'a dyn Clock) -> Self {
        Self { store, clock }
    }

    /// Current progress; a missing or corrupt record reads as a fresh start
    pub fn progress(&self) -> UserProgress {
        self.store.get(keys::USER_PROGRESS).unwrap_or_default()
    }

    fn save(&self, progress: &UserProgress) {
        self.store.set(keys::USER_PROGRESS, progress);
    }

    /// Count a completion and recompute the streak for today
    pub fn record_completion(&self, phrase: &Phrase) -> UserProgress {
        let mut progress = self.progress();
        progress.mark_phrase_completed(phrase);
        progress.update_streak(self.clock.today());
        self.save(&progress);

        log::debug!(
            "Recorded {}: {} learned, streak {}",
            phrase.id,
            progress.total_phrases_learned,
            progress.current_streak
        );
        progress
    }

    /// Recompute the streak for today without recording a completion
    pub fn refresh_streak(&self) -> UserProgress {
        let mut progress = self.progress();
        progress.update_streak(self.clock.today());
        self.save(&progress);
        progress
    }
}
