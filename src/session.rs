//! Wiring of catalog, store, clock and settings
//!
//! A [`Session`] owns everything the engine needs for one process and hands
//! out short-lived trackers that borrow from it.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::clock::{Clock, SystemClock};
use crate::daily::DailyPhraseTracker;
use crate::phrases::{CatalogError, Phrase, PhraseCatalog, UserLanguage};
use crate::progress::{ProgressTracker, UserProgress};
use crate::settings::{AppSettings, SettingsError};
use crate::storage::{JsonFileStore, KeyValueStore, StorageError};
use crate::widget::WidgetFeed;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),
}

pub type Result<T> = std::result::Result<T, SessionError>;

/// Result of completing a phrase
#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    /// First completion; progress after counting it
    Recorded(UserProgress),
    AlreadyCompleted,
    UnknownPhrase,
}

pub struct Session {
    store: Box<dyn KeyValueStore>,
    catalog: PhraseCatalog,
    clock: Box<dyn Clock>,
    settings: AppSettings,
    /// Where settings are persisted; `None` keeps them in memory
    data_dir: Option<PathBuf>,
}

impl Session {
    /// Open the on-disk session rooted at `data_dir`
    ///
    /// Layout:
    /// ```text
    /// {data_dir}/settings.json
    /// {data_dir}/shared/defaults.json
    /// {phrases_dir}/phrases_<category>.json
    /// ```
    pub fn open(data_dir: &Path, phrases_dir: &Path) -> Result<Self> {
        let store = JsonFileStore::new(data_dir.join("shared"));
        store.init()?;
        let catalog = PhraseCatalog::load(phrases_dir)?;
        let settings = AppSettings::load(data_dir);

        log::info!(
            "Opened session at {:?} with {} phrases",
            data_dir,
            catalog.len()
        );

        Ok(Self {
            store: Box::new(store),
            catalog,
            clock: Box::new(SystemClock),
            settings,
            data_dir: Some(data_dir.to_path_buf()),
        })
    }

    /// Assemble a session from parts; settings are not persisted
    pub fn new(
        store: Box<dyn KeyValueStore>,
        catalog: PhraseCatalog,
        clock: Box<dyn Clock>,
        settings: AppSettings,
    ) -> Self {
        Self {
            store,
            catalog,
            clock,
            settings,
            data_dir: None,
        }
    }

    pub fn catalog(&self) -> &PhraseCatalog {
        &self.catalog
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    pub fn daily(&self) -> DailyPhraseTracker<'_> {
        DailyPhraseTracker::new(
            self.store.as_ref(),
            &self.catalog,
            self.clock.as_ref(),
            self.settings.selection,
        )
    }

    pub fn progress(&self) -> ProgressTracker<'_> {
        ProgressTracker::new(self.store.as_ref(), self.clock.as_ref())
    }

    pub fn widget(&self) -> WidgetFeed<'_> {
        WidgetFeed::new(self.store.as_ref())
    }

    /// Today's phrases, with the open-day bookkeeping applied:
    /// streak refreshed, day archived and the widget feed republished.
    pub fn open_today(&self) -> Vec<&Phrase> {
        let daily = self.daily();
        let phrases = daily.today_phrases();

        self.progress().refresh_streak();
        daily.archive_today();
        self.widget().publish(&phrases, self.settings.language);

        phrases
    }

    /// Mark a phrase completed and count it in progress once
    pub fn complete(&self, phrase_id: &str) -> Completion {
        let Some(phrase) = self.catalog.get(phrase_id) else {
            log::warn!("Ignoring completion of unknown phrase '{}'", phrase_id);
            return Completion::UnknownPhrase;
        };

        let daily = self.daily();
        if !daily.mark_completed(phrase_id) {
            return Completion::AlreadyCompleted;
        }

        let progress = self.progress().record_completion(phrase);
        daily.archive_today();
        Completion::Recorded(progress)
    }

    /// Flip the bookmark for a phrase; `None` if the id is unknown
    pub fn toggle_saved(&self, phrase_id: &str) -> Option<bool> {
        if !self.catalog.contains(phrase_id) {
            return None;
        }
        Some(self.daily().toggle_saved(phrase_id))
    }

    /// Change the translation language and republish the widget feed
    pub fn set_language(&mut self, language: UserLanguage) -> Result<()> {
        self.settings.language = language;
        self.persist_settings()?;

        let daily = self.daily();
        if daily.today_set().is_some() {
            let phrases = daily.today_phrases();
            self.widget().publish(&phrases, language);
        }
        Ok(())
    }

    pub fn set_show_translations(&mut self, show: bool) -> Result<()> {
        self.settings.show_translations = show;
        self.persist_settings()
    }

    fn persist_settings(&self) -> Result<()> {
        if let Some(dir) = &self.data_dir {
            self.settings.save(dir)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use chrono::NaiveDate;
    use tempfile::TempDir;

    use super::*;
    use crate::clock::FixedClock;
    use crate::phrases::catalog::fixtures::balanced_catalog;
    use crate::phrases::PhraseCategory;
    use crate::storage::MemoryStore;

    fn create_test_session() -> Session {
        let clock = FixedClock::new(NaiveDate::from_ymd_opt(2024, 9, 2).unwrap());
        Session::new(
            Box::new(MemoryStore::new()),
            balanced_catalog(2),
            Box::new(clock),
            AppSettings::default(),
        )
    }

    #[test]
    fn test_open_today_applies_bookkeeping() {
        let session = create_test_session();
        let phrases = session.open_today();
        assert_eq!(phrases.len(), 10);

        let progress = session.progress().progress();
        assert_eq!(progress.current_streak, 1);
        assert_eq!(progress.total_phrases_learned, 0);

        assert_eq!(session.daily().history().len(), 1);
        assert_eq!(session.widget().entries().len(), 10);
        assert_eq!(session.widget().entries()[0].english, phrases[0].english);
    }

    #[test]
    fn test_complete_counts_once() {
        let session = create_test_session();
        let id = session.open_today()[0].id.clone();

        match session.complete(&id) {
            Completion::Recorded(progress) => assert_eq!(progress.total_phrases_learned, 1),
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(session.complete(&id), Completion::AlreadyCompleted);
        assert_eq!(session.complete("no_such_phrase"), Completion::UnknownPhrase);

        assert_eq!(session.progress().progress().total_phrases_learned, 1);
        assert_eq!(session.daily().history()[0].completed_count(), 1);
        assert!(!session.daily().is_completed("no_such_phrase"));
    }

    #[test]
    fn test_toggle_saved_unknown_phrase() {
        let session = create_test_session();
        let id = session.catalog().by_category(PhraseCategory::Email)[0].id.clone();

        assert_eq!(session.toggle_saved(&id), Some(true));
        assert_eq!(session.toggle_saved("nope"), None);
        assert_eq!(session.daily().saved_phrases().len(), 1);
    }

    #[test]
    fn test_set_language_republishes_widget() {
        let mut session = create_test_session();
        session.open_today();
        let before = session.widget().entries();
        assert!(before[0].translation.ends_with("(pt)"));

        session.set_language(UserLanguage::Fr).unwrap();
        let after = session.widget().entries();
        // Fixture phrases only carry pt-BR; French falls back to English
        assert_eq!(after[0].translation, after[0].english);
        assert_eq!(session.settings().language, UserLanguage::Fr);
    }

    #[test]
    fn test_open_persists_settings_and_state() {
        let temp = TempDir::new().unwrap();
        let phrases_dir = temp.path().join("phrases");
        fs::create_dir_all(&phrases_dir).unwrap();
        let catalog = balanced_catalog(1);
        for category in PhraseCategory::ALL {
            let phrases = catalog.by_category(category);
            fs::write(
                phrases_dir.join(category.file_name()),
                serde_json::to_string_pretty(&phrases).unwrap(),
            )
            .unwrap();
        }
        let data_dir = temp.path().join("data");

        let today = {
            let mut session = Session::open(&data_dir, &phrases_dir).unwrap();
            assert_eq!(session.catalog().len(), 36);
            session.set_show_translations(false).unwrap();
            session
                .open_today()
                .iter()
                .map(|p| p.id.clone())
                .collect::<Vec<_>>()
        };

        let reopened = Session::open(&data_dir, &phrases_dir).unwrap();
        assert!(!reopened.settings().show_translations);
        assert!(data_dir.join("shared").join("defaults.json").exists());
        let ids = reopened.daily().today_set().unwrap().phrase_ids;
        assert_eq!(ids, today);
    }
}
