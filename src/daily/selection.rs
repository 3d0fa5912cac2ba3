//! Daily phrase selection
//!
//! Picks a balanced set of phrases for one day:
//! 1. Drop phrases already shown; if fewer than a day's worth remain, the
//!    shown pool is reset and the whole catalog is eligible again.
//! 2. Sample each difficulty tier up to its quota. A short tier stays short.
//! 3. Trim categories above the cap (latest occurrences first) and backfill
//!    from categories with no representation at all.
//! 4. Top up with any unused eligible phrase until the day is full.
//! 5. Shuffle into display order.
//!
//! Selection never fails; a small or lopsided catalog yields a smaller set.

use std::collections::{BTreeMap, BTreeSet};

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::phrases::{Phrase, PhraseCategory, PhraseDifficulty};

/// Target number of phrases per difficulty tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DifficultyQuotas {
    pub easy: usize,
    pub medium: usize,
    pub hard: usize,
}

impl Default for DifficultyQuotas {
    fn default() -> Self {
        Self {
            easy: 4,
            medium: 4,
            hard: 2,
        }
    }
}

impl DifficultyQuotas {
    pub fn for_difficulty(&self, difficulty: PhraseDifficulty) -> usize {
        match difficulty {
            PhraseDifficulty::Easy => self.easy,
            PhraseDifficulty::Medium => self.medium,
            PhraseDifficulty::Hard => self.hard,
        }
    }
}

/// Tuning for the daily selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SelectionConfig {
    pub phrases_per_day: usize,
    pub quotas: DifficultyQuotas,
    /// Maximum phrases from one category in a day
    pub category_cap: usize,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            phrases_per_day: 10,
            quotas: DifficultyQuotas::default(),
            category_cap: 2,
        }
    }
}

/// Result of one selection run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Chosen ids in display order
    pub phrase_ids: Vec<String>,
    /// The unseen pool ran dry and the shown pool must be cleared
    pub pool_reset: bool,
}

/// Select a day's phrases from `phrases`, avoiding ids in `shown`.
///
/// The shown pool is not modified here. When `pool_reset` is set the
/// caller clears it before merging in the new ids.
pub fn select_daily<R: Rng + ?Sized>(
    phrases: &[Phrase],
    shown: &BTreeSet<String>,
    config: &SelectionConfig,
    rng: &mut R,
) -> Selection {
    let target = config.phrases_per_day;

    let mut available: Vec<&Phrase> = phrases.iter().filter(|p| !shown.contains(&p.id)).collect();
    let pool_reset = available.len() < target;
    if pool_reset {
        log::info!(
            "Only {} unseen phrases left (need {}), resetting shown pool",
            available.len(),
            target
        );
        available = phrases.iter().collect();
    }

    let mut selected: Vec<&Phrase> = Vec::with_capacity(target);
    for difficulty in PhraseDifficulty::ALL {
        let tier: Vec<&Phrase> = available
            .iter()
            .copied()
            .filter(|p| p.difficulty == difficulty)
            .collect();
        let quota = config.quotas.for_difficulty(difficulty);
        if tier.len() < quota {
            log::debug!("{} tier short: {} of {}", difficulty, tier.len(), quota);
        }
        selected.extend(tier.choose_multiple(rng, quota).copied());
    }

    balance_categories(&mut selected, &available, config.category_cap);
    top_up(&mut selected, &available, target);

    selected.truncate(target);
    selected.shuffle(rng);

    Selection {
        phrase_ids: selected.into_iter().map(|p| p.id.clone()).collect(),
        pool_reset,
    }
}

fn category_counts(phrases: &[&Phrase]) -> BTreeMap<PhraseCategory, usize> {
    let mut counts = BTreeMap::new();
    for phrase in phrases {
        *counts.entry(phrase.category).or_insert(0) += 1;
    }
    counts
}

/// Enforce the per-category cap.
///
/// Only categories with zero representation are used as backfill; a
/// category sitting below the cap is never topped up here.
fn balance_categories<'a>(selected: &mut Vec<&'a Phrase>, available: &[&'a Phrase], cap: usize) {
    let initial = category_counts(selected);

    for (category, count) in initial {
        if count <= cap {
            continue;
        }
        let excess = count - cap;

        let mut remaining = excess;
        let mut i = selected.len();
        while remaining > 0 && i > 0 {
            i -= 1;
            if selected[i].category == category {
                selected.remove(i);
                remaining -= 1;
            }
        }

        // Only the first `excess` empty categories are candidates; one with
        // nothing unused to offer leaves its slot empty.
        let current = category_counts(selected);
        let candidates: Vec<PhraseCategory> = PhraseCategory::ALL
            .into_iter()
            .filter(|c| !current.contains_key(c))
            .take(excess)
            .collect();

        let mut filled = 0;
        for empty in candidates {
            let replacement = available
                .iter()
                .copied()
                .find(|p| p.category == empty && !selected.iter().any(|s| s.id == p.id));
            if let Some(phrase) = replacement {
                selected.push(phrase);
                filled += 1;
            }
        }

        log::debug!(
            "{} over cap by {}: backfilled {} from empty categories",
            category,
            excess,
            filled
        );
    }
}

/// Append unused eligible phrases, in catalog order, until `target` is reached
fn top_up<'a>(selected: &mut Vec<&'a Phrase>, available: &[&'a Phrase], target: usize) {
    for &phrase in available {
        if selected.len() >= target {
            break;
        }
        if !selected.iter().any(|s| s.id == phrase.id) {
            selected.push(phrase);
        }
    }
}
