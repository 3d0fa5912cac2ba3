//! Daily phrase sets for DevLingo
//!
//! This module provides:
//! - Balanced daily selection (difficulty quotas, category cap, no repeats)
//! - Per-day state: today's ids, completions, bookmarks
//! - A bounded history of archived days

pub mod models;
pub mod selection;
pub mod tracker;

pub use models::DailyPhraseSet;
pub use selection::{select_daily, DifficultyQuotas, Selection, SelectionConfig};
pub use tracker::{DailyPhraseTracker, HISTORY_LIMIT};
