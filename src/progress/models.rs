//! Data models for learning progress

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::phrases::{Phrase, PhraseCategory, PhraseDifficulty};

/// Phrases needed per level
pub const PHRASES_PER_LEVEL: u64 = 50;

/// Lifetime counters and streaks
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProgress {
    pub total_phrases_learned: u64,
    /// Consecutive days with activity, ending at `last_active_date`
    pub current_streak: u32,
    /// Never below `current_streak`
    pub longest_streak: u32,
    pub last_active_date: Option<NaiveDate>,
    pub phrases_by_category: BTreeMap<PhraseCategory, u64>,
    pub phrases_by_difficulty: BTreeMap<PhraseDifficulty, u64>,
}

impl UserProgress {
    /// Count a completed phrase in the lifetime counters
    pub fn mark_phrase_completed(&mut self, phrase: &Phrase) {
        self.total_phrases_learned += 1;
        *self.phrases_by_category.entry(phrase.category).or_insert(0) += 1;
        *self.phrases_by_difficulty.entry(phrase.difficulty).or_insert(0) += 1;
    }

    /// Recompute the streak for activity on `today`.
    ///
    /// Same day: unchanged. Next day: +1. Any other gap, including a clock
    /// that moved backwards: reset to 1.
    pub fn update_streak(&mut self, today: NaiveDate) {
        let Some(last) = self.last_active_date else {
            self.current_streak = 1;
            self.longest_streak = self.longest_streak.max(1);
            self.last_active_date = Some(today);
            return;
        };

        match (today - last).num_days() {
            0 => return,
            1 => self.current_streak += 1,
            _ => self.current_streak = 1,
        }

        self.longest_streak = self.longest_streak.max(self.current_streak);
        self.last_active_date = Some(today);
    }

    pub fn level(&self) -> u64 {
        self.total_phrases_learned / PHRASES_PER_LEVEL + 1
    }

    /// Fraction of the way through the current level, in [0, 1)
    pub fn level_progress(&self) -> f64 {
        let base = (self.level() - 1) * PHRASES_PER_LEVEL;
        (self.total_phrases_learned - base) as f64 / PHRASES_PER_LEVEL as f64
    }

    pub fn phrases_to_next_level(&self) -> u64 {
        self.level() * PHRASES_PER_LEVEL - self.total_phrases_learned
    }

    pub fn level_title(&self) -> LevelTitle {
        LevelTitle::for_level(self.level())
    }

    pub fn category_count(&self, category: PhraseCategory) -> u64 {
        self.phrases_by_category.get(&category).copied().unwrap_or(0)
    }

    pub fn difficulty_count(&self, difficulty: PhraseDifficulty) -> u64 {
        self.phrases_by_difficulty.get(&difficulty).copied().unwrap_or(0)
    }
}

/// Named bands of levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LevelTitle {
    Beginner,
    Elementary,
    Intermediate,
    Advanced,
    Fluent,
}

impl LevelTitle {
    pub fn for_level(level: u64) -> Self {
        match level {
            0..=2 => Self::Beginner,
            3..=5 => Self::Elementary,
            6..=10 => Self::Intermediate,
            11..=20 => Self::Advanced,
            _ => Self::Fluent,
        }
    }
}

impl fmt::Display for LevelTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Beginner => "Beginner",
            Self::Elementary => "Elementary",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::Fluent => "Fluent",
        };
        f.write_str(label)
    }
}
