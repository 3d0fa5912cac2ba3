//! Daily state tracking
//!
//! Persisted keys:
//! - `todayDate` / `todayPhraseIDs`: the active day and its ordered ids
//! - `shownPhraseIDs`: every id ever selected since the last pool reset
//! - `completedPhraseIDs` / `savedPhraseIDs`: global completion and bookmark sets
//! - `phraseHistory`: archived days, oldest first, at most [`HISTORY_LIMIT`]

use std::collections::BTreeSet;

use chrono::NaiveDate;
use rand::Rng;

use super::models::DailyPhraseSet;
use super::selection::{select_daily, SelectionConfig};
use crate::clock::{day_key, Clock};
use crate::phrases::{Phrase, PhraseCatalog};
use crate::storage::keys;
use crate::storage::{KeyValueStore, KeyValueStoreExt};

/// Number of archived days kept
pub const HISTORY_LIMIT: usize = 365;

/// Answers "today's phrases" and records completions and bookmarks
pub struct DailyPhraseTracker<'a> {
    store: &'a dyn KeyValueStore,
    catalog: &'a PhraseCatalog,
    clock: &'a dyn Clock,
    config: SelectionConfig,
}

impl<'a> DailyPhraseTracker<'a> {
    pub fn new(
        store: &'a dyn KeyValueStore,
        catalog: &'a PhraseCatalog,
        clock: &'a dyn Clock,
        config: SelectionConfig,
    ) -> Self {
        Self {
            store,
            catalog,
            clock,
            config,
        }
    }

    // ==================== Today ====================

    /// Ids of today's phrases, selecting a new set on the first call of a day
    pub fn today_phrase_ids(&self) -> Vec<String> {
        self.today_phrase_ids_with(&mut rand::thread_rng())
    }

    /// Same as [`Self::today_phrase_ids`] with an explicit random source
    pub fn today_phrase_ids_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<String> {
        let today = day_key(self.clock.today());

        // Plain string comparison: any other stored key, including an
        // earlier or later day, starts a new day.
        if self.store.get_string(keys::TODAY_DATE).as_deref() == Some(today.as_str()) {
            let ids = self.store.get_string_list(keys::TODAY_PHRASE_IDS);
            if !ids.is_empty() {
                return ids;
            }
        }

        let mut shown = self.store.get_string_set(keys::SHOWN_PHRASE_IDS);
        let selection = select_daily(self.catalog.all(), &shown, &self.config, rng);

        if selection.pool_reset {
            shown.clear();
        }
        shown.extend(selection.phrase_ids.iter().cloned());

        self.store.set_string(keys::TODAY_DATE, &today);
        self.store.set_string_list(keys::TODAY_PHRASE_IDS, &selection.phrase_ids);
        self.store.set_string_set(keys::SHOWN_PHRASE_IDS, &shown);

        log::info!(
            "Selected {} phrases for {} ({} shown so far)",
            selection.phrase_ids.len(),
            today,
            shown.len()
        );

        selection.phrase_ids
    }

    /// Today's phrases resolved against the catalog
    pub fn today_phrases(&self) -> Vec<&'a Phrase> {
        let ids = self.today_phrase_ids();
        self.catalog.resolve(&ids)
    }

    /// The persisted day as a set, without triggering a selection
    pub fn today_set(&self) -> Option<DailyPhraseSet> {
        let key = self.store.get_string(keys::TODAY_DATE)?;
        let date = NaiveDate::parse_from_str(&key, "%Y-%m-%d").ok()?;
        let ids = self.store.get_string_list(keys::TODAY_PHRASE_IDS);
        Some(DailyPhraseSet::new(key, date, ids, &self.completed_ids()))
    }

    pub fn today_completed_count(&self) -> usize {
        self.today_set().map_or(0, |set| set.completed_count())
    }

    // ==================== Completion ====================

    /// Record a completion. Returns false if the id was already completed.
    ///
    /// Ids outside today's set are accepted (e.g. from browsing a category).
    pub fn mark_completed(&self, phrase_id: &str) -> bool {
        let mut completed = self.completed_ids();
        if !completed.insert(phrase_id.to_string()) {
            return false;
        }
        self.store.set_string_set(keys::COMPLETED_PHRASE_IDS, &completed);
        true
    }

    pub fn is_completed(&self, phrase_id: &str) -> bool {
        self.completed_ids().contains(phrase_id)
    }

    pub fn completed_ids(&self) -> BTreeSet<String> {
        self.store.get_string_set(keys::COMPLETED_PHRASE_IDS)
    }

    // ==================== Saved ====================

    /// Flip bookmark membership. Returns whether the phrase is now saved.
    pub fn toggle_saved(&self, phrase_id: &str) -> bool {
        let mut saved = self.saved_ids();
        let now_saved = if saved.remove(phrase_id) {
            false
        } else {
            saved.insert(phrase_id.to_string());
            true
        };
        self.store.set_string_set(keys::SAVED_PHRASE_IDS, &saved);
        now_saved
    }

    pub fn is_saved(&self, phrase_id: &str) -> bool {
        self.saved_ids().contains(phrase_id)
    }

    pub fn saved_ids(&self) -> BTreeSet<String> {
        self.store.get_string_set(keys::SAVED_PHRASE_IDS)
    }

    pub fn saved_phrases(&self) -> Vec<&'a Phrase> {
        let ids: Vec<String> = self.saved_ids().into_iter().collect();
        self.catalog.resolve(&ids)
    }

    // ==================== History ====================

    /// Archived days, oldest first
    pub fn history(&self) -> Vec<DailyPhraseSet> {
        self.store.get(keys::PHRASE_HISTORY).unwrap_or_default()
    }

    pub fn history_entry(&self, key: &str) -> Option<DailyPhraseSet> {
        self.history().into_iter().find(|set| set.id == key)
    }

    /// Snapshot the active day into history, replacing any entry for the same day
    pub fn archive_today(&self) {
        let Some(snapshot) = self.today_set() else {
            log::debug!("No active day to archive");
            return;
        };
        if snapshot.phrase_ids.is_empty() {
            return;
        }

        let mut history = self.history();
        history.retain(|set| set.id != snapshot.id);
        history.push(snapshot);
        history.sort_by(|a, b| a.id.cmp(&b.id));

        if history.len() > HISTORY_LIMIT {
            let excess = history.len() - HISTORY_LIMIT;
            history.drain(..excess);
            log::debug!("Dropped {} oldest history entries", excess);
        }

        self.store.set(keys::PHRASE_HISTORY, &history);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use chrono::Duration;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::clock::FixedClock;
    use crate::phrases::catalog::fixtures::{balanced_catalog, phrase};
    use crate::phrases::{PhraseCategory, PhraseDifficulty};
    use crate::storage::MemoryStore;

    fn start_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn exact_quota_catalog() -> PhraseCatalog {
        use PhraseCategory::*;
        use PhraseDifficulty::*;
        PhraseCatalog::from_phrases(vec![
            phrase("e1", Easy, Standup),
            phrase("e2", Easy, CodeReview),
            phrase("e3", Easy, Slack),
            phrase("e4", Easy, Email),
            phrase("m1", Medium, Meetings),
            phrase("m2", Medium, Technical),
            phrase("m3", Medium, PullRequests),
            phrase("m4", Medium, BugReports),
            phrase("h1", Hard, PairProgramming),
            phrase("h2", Hard, Interviews),
        ])
    }

    #[test]
    fn test_same_day_is_idempotent() {
        let store = MemoryStore::new();
        let catalog = balanced_catalog(3);
        let clock = FixedClock::new(start_date());
        let tracker = DailyPhraseTracker::new(&store, &catalog, &clock, SelectionConfig::default());

        let first = tracker.today_phrase_ids();
        let second = tracker.today_phrase_ids();
        assert_eq!(first.len(), 10);
        assert_eq!(first, second);

        // A fresh tracker over the same store behaves like a restart
        let restarted = DailyPhraseTracker::new(&store, &catalog, &clock, SelectionConfig::default());
        assert_eq!(restarted.today_phrase_ids(), first);
    }

    #[test]
    fn test_new_day_selects_unseen_phrases() {
        let store = MemoryStore::new();
        let catalog = balanced_catalog(3);
        let clock = FixedClock::new(start_date());
        let tracker = DailyPhraseTracker::new(&store, &catalog, &clock, SelectionConfig::default());
        let mut rng = StdRng::seed_from_u64(11);

        let day_one: HashSet<String> = tracker.today_phrase_ids_with(&mut rng).into_iter().collect();
        clock.advance_days(1);
        let day_two: HashSet<String> = tracker.today_phrase_ids_with(&mut rng).into_iter().collect();

        assert!(day_one.is_disjoint(&day_two));
        assert_eq!(store.get_string_set(keys::SHOWN_PHRASE_IDS).len(), 20);
        assert_eq!(store.get_string(keys::TODAY_DATE).as_deref(), Some("2024-06-02"));
    }

    #[test]
    fn test_exhausted_pool_resets_and_repopulates() {
        let store = MemoryStore::new();
        let catalog = exact_quota_catalog();
        let clock = FixedClock::new(start_date());
        let tracker = DailyPhraseTracker::new(&store, &catalog, &clock, SelectionConfig::default());
        let all: BTreeSet<String> = catalog.all().iter().map(|p| p.id.clone()).collect();

        let first: BTreeSet<String> = tracker.today_phrase_ids().into_iter().collect();
        assert_eq!(first, all);
        assert_eq!(store.get_string_set(keys::SHOWN_PHRASE_IDS), all);

        clock.advance_days(1);
        let second: BTreeSet<String> = tracker.today_phrase_ids().into_iter().collect();
        assert_eq!(second, all);
        assert_eq!(store.get_string_set(keys::SHOWN_PHRASE_IDS), all);
    }

    #[test]
    fn test_clock_rollback_starts_a_new_day() {
        let store = MemoryStore::new();
        let catalog = balanced_catalog(3);
        let clock = FixedClock::new(start_date());
        let tracker = DailyPhraseTracker::new(&store, &catalog, &clock, SelectionConfig::default());

        let today = tracker.today_phrase_ids();
        clock.advance_days(-1);
        let rolled_back = tracker.today_phrase_ids();

        assert_ne!(today, rolled_back);
        assert_eq!(store.get_string(keys::TODAY_DATE).as_deref(), Some("2024-05-31"));
    }

    #[test]
    fn test_corrupt_today_list_triggers_reselection() {
        let store = MemoryStore::new();
        let catalog = balanced_catalog(1);
        let clock = FixedClock::new(start_date());
        store.set_string(keys::TODAY_DATE, "2024-06-01");
        store.set_int(keys::TODAY_PHRASE_IDS, 5);

        let tracker = DailyPhraseTracker::new(&store, &catalog, &clock, SelectionConfig::default());
        assert_eq!(tracker.today_phrase_ids().len(), 10);
    }

    #[test]
    fn test_completions_stay_within_today() {
        let store = MemoryStore::new();
        let catalog = balanced_catalog(2);
        let clock = FixedClock::new(start_date());
        let tracker = DailyPhraseTracker::new(&store, &catalog, &clock, SelectionConfig::default());

        let ids = tracker.today_phrase_ids();
        assert!(tracker.mark_completed(&ids[0]));
        assert!(!tracker.mark_completed(&ids[0]));
        assert!(tracker.mark_completed(&ids[3]));
        // Completion from outside the daily set is still recorded
        assert!(tracker.mark_completed("browsed_elsewhere"));

        assert!(tracker.is_completed(&ids[0]));
        assert!(tracker.is_completed("browsed_elsewhere"));
        assert!(!tracker.is_completed(&ids[1]));

        let set = tracker.today_set().unwrap();
        assert_eq!(set.completed_count(), 2);
        assert!(set.completed_ids.iter().all(|id| set.phrase_ids.contains(id)));
        assert_eq!(tracker.today_completed_count(), 2);
    }

    #[test]
    fn test_toggle_saved() {
        let store = MemoryStore::new();
        let catalog = balanced_catalog(1);
        let clock = FixedClock::new(start_date());
        let tracker = DailyPhraseTracker::new(&store, &catalog, &clock, SelectionConfig::default());
        let id = catalog.all()[0].id.clone();

        assert!(tracker.toggle_saved(&id));
        assert!(tracker.is_saved(&id));
        assert_eq!(tracker.saved_phrases().len(), 1);

        assert!(!tracker.toggle_saved(&id));
        assert!(!tracker.is_saved(&id));
        assert!(tracker.saved_phrases().is_empty());
    }

    #[test]
    fn test_archive_replaces_same_day() {
        let store = MemoryStore::new();
        let catalog = balanced_catalog(1);
        let clock = FixedClock::new(start_date());
        let tracker = DailyPhraseTracker::new(&store, &catalog, &clock, SelectionConfig::default());

        let ids = tracker.today_phrase_ids();
        tracker.archive_today();
        tracker.mark_completed(&ids[0]);
        tracker.archive_today();

        let history = tracker.history();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].id, "2024-06-01");
        assert_eq!(history[0].completed_count(), 1);
        assert_eq!(tracker.history_entry("2024-06-01").unwrap().phrase_ids, ids);
    }

    #[test]
    fn test_archive_without_active_day_is_a_no_op() {
        let store = MemoryStore::new();
        let catalog = balanced_catalog(1);
        let clock = FixedClock::new(start_date());
        let tracker = DailyPhraseTracker::new(&store, &catalog, &clock, SelectionConfig::default());

        tracker.archive_today();
        assert!(tracker.history().is_empty());
    }

    #[test]
    fn test_history_keeps_most_recent_365_days() {
        let store = MemoryStore::new();
        let catalog = exact_quota_catalog();
        let clock = FixedClock::new(start_date());
        let tracker = DailyPhraseTracker::new(&store, &catalog, &clock, SelectionConfig::default());

        for _ in 0..400 {
            tracker.today_phrase_ids();
            tracker.archive_today();
            clock.advance_days(1);
        }

        let history = tracker.history();
        assert_eq!(history.len(), HISTORY_LIMIT);

        let last_day = start_date() + Duration::days(399);
        let first_kept = start_date() + Duration::days(35);
        assert_eq!(history.last().unwrap().id, day_key(last_day));
        assert_eq!(history.first().unwrap().id, day_key(first_kept));
    }
}
