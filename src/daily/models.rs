//! Data models for daily phrase sets

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One calendar day's phrases and which of them were completed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyPhraseSet {
    /// Day key ("yyyy-MM-dd")
    pub id: String,
    pub date: NaiveDate,
    /// Phrase ids in display order
    pub phrase_ids: Vec<String>,
    /// Always a subset of `phrase_ids`
    #[serde(default)]
    pub completed_ids: BTreeSet<String>,
}

impl DailyPhraseSet {
    /// Build a set, keeping only completions that belong to the day
    pub fn new(id: String, date: NaiveDate, phrase_ids: Vec<String>, completed: &BTreeSet<String>) -> Self {
        let completed_ids = phrase_ids
            .iter()
            .filter(|id| completed.contains(*id))
            .cloned()
            .collect();
        Self {
            id,
            date,
            phrase_ids,
            completed_ids,
        }
    }

    /// Fraction of the day's phrases completed
    pub fn progress(&self) -> f64 {
        if self.phrase_ids.is_empty() {
            return 0.0;
        }
        self.completed_ids.len() as f64 / self.phrase_ids.len() as f64
    }

    pub fn is_complete(&self) -> bool {
        self.completed_ids.len() >= self.phrase_ids.len()
    }

    pub fn completed_count(&self) -> usize {
        self.completed_ids.len()
    }

    pub fn total_count(&self) -> usize {
        self.phrase_ids.len()
    }
}
