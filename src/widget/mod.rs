//! Display-surface feed
//!
//! Today's phrases are projected into a flat, display-ready shape and
//! written to the shared store under `widgetPhrases`. A home-screen widget
//! reads that list on its own schedule and rotates through it by hour;
//! nothing flows back into the core.

use serde::{Deserialize, Serialize};

use crate::phrases::{Phrase, UserLanguage};
use crate::storage::keys;
use crate::storage::{KeyValueStore, KeyValueStoreExt};

/// What the widget needs to render one phrase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetPhraseData {
    pub english: String,
    pub context: String,
    pub translation: String,
    pub category: String,
    pub category_icon: String,
    pub difficulty: String,
}

impl WidgetPhraseData {
    pub fn from_phrase(phrase: &Phrase, language: UserLanguage) -> Self {
        Self {
            english: phrase.english.clone(),
            context: phrase.context.clone(),
            translation: phrase.translation(language).to_string(),
            category: phrase.category.label().to_string(),
            category_icon: phrase.category.icon().to_string(),
            difficulty: phrase.difficulty.as_str().to_string(),
        }
    }
}

pub struct WidgetFeed<'a> {
    store: &'a dyn KeyValueStore,
}

impl<'a> WidgetFeed<'a> {
    pub fn new(store: &'a dyn KeyValueStore) -> Self {
        Self { store }
    }

    pub fn publish(&self, phrases: &[&Phrase], language: UserLanguage) {
        let entries: Vec<WidgetPhraseData> = phrases
            .iter()
            .map(|p| WidgetPhraseData::from_phrase(p, language))
            .collect();
        self.store.set(keys::WIDGET_PHRASES, &entries);
        log::debug!("Published {} phrases to widget feed", entries.len());
    }

    pub fn entries(&self) -> Vec<WidgetPhraseData> {
        self.store.get(keys::WIDGET_PHRASES).unwrap_or_default()
    }
}

/// The entry a widget shows during `hour` (0-23)
pub fn entry_at(entries: &[WidgetPhraseData], hour: u32) -> Option<&WidgetPhraseData> {
    if entries.is_empty() {
        return None;
    }
    entries.get(hour as usize % entries.len())
}
