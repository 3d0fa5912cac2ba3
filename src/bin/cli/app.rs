use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use devlingo_lib::phrases::{Phrase, PhraseCategory, UserLanguage};
use devlingo_lib::storage::JsonFileStore;
use devlingo_lib::Session;

/// Shared application state for CLI commands
pub struct App {
    pub session: Session,
    pub data_dir: PathBuf,
}

impl App {
    /// Open the session, falling back to the default data directory
    pub fn new(data_dir: Option<PathBuf>, phrases_dir: Option<PathBuf>) -> Result<Self> {
        let data_dir = match data_dir {
            Some(dir) => dir,
            None => JsonFileStore::default_data_dir().context("Failed to get data directory")?,
        };
        let phrases_dir = phrases_dir.unwrap_or_else(|| data_dir.join("phrases"));

        let session = Session::open(&data_dir, &phrases_dir).with_context(|| {
            format!("Failed to open phrases at {}", phrases_dir.display())
        })?;

        Ok(Self { session, data_dir })
    }

    pub fn language(&self) -> UserLanguage {
        self.session.settings().language
    }

    pub fn show_translations(&self) -> bool {
        self.session.settings().show_translations
    }

    /// Find a phrase by exact id
    pub fn find_phrase(&self, id: &str) -> Result<&Phrase> {
        match self.session.catalog().get(id) {
            Some(phrase) => Ok(phrase),
            None => bail!("No phrase with id '{}'", id),
        }
    }

    /// Parse a category by wire name or label
    pub fn find_category(&self, name: &str) -> Result<PhraseCategory> {
        name.parse::<PhraseCategory>().map_err(|_| {
            anyhow::anyhow!(
                "Unknown category '{}'. Available categories:\n{}",
                name,
                PhraseCategory::ALL
                    .iter()
                    .map(|c| format!("  - {} ({})", c.as_str(), c.label()))
                    .collect::<Vec<_>>()
                    .join("\n")
            )
        })
    }

    /// Parse a language code
    pub fn find_language(&self, code: &str) -> Result<UserLanguage> {
        code.parse::<UserLanguage>().map_err(|_| {
            anyhow::anyhow!(
                "Unknown language '{}'. Available languages:\n{}",
                code,
                UserLanguage::ALL
                    .iter()
                    .map(|l| format!("  - {} ({})", l.code(), l.english_name()))
                    .collect::<Vec<_>>()
                    .join("\n")
            )
        })
    }

    /// JSON shape shared by every command that prints phrases
    pub fn phrase_json(&self, phrase: &Phrase) -> serde_json::Value {
        let daily = self.session.daily();
        serde_json::json!({
            "id": phrase.id,
            "english": phrase.english,
            "context": phrase.context,
            "translation": phrase.translation(self.language()),
            "category": phrase.category.as_str(),
            "difficulty": phrase.difficulty.as_str(),
            "completed": daily.is_completed(&phrase.id),
            "saved": daily.is_saved(&phrase.id),
        })
    }
}
