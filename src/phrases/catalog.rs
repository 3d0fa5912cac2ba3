//! In-memory phrase catalog
//!
//! Phrases ship as one JSON array per category:
//! ```text
//! phrases/
//! ├── phrases_standup.json
//! ├── phrases_codeReview.json
//! └── ...
//! ```
//! The catalog is loaded once at startup and never mutated afterwards.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::models::{Phrase, PhraseCategory, PhraseDifficulty};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Phrase directory not found: {0}")]
    DirectoryNotFound(PathBuf),
}

pub type Result<T> = std::result::Result<T, CatalogError>;

/// Immutable collection of all phrases, grouped by category
#[derive(Debug, Default)]
pub struct PhraseCatalog {
    phrases: Vec<Phrase>,
    by_category: BTreeMap<PhraseCategory, Vec<usize>>,
    by_id: HashMap<String, usize>,
}

impl PhraseCatalog {
    /// Load every category file from a directory.
    ///
    /// A category whose file is missing or unreadable contributes no
    /// phrases; only a missing directory is an error.
    pub fn load(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            return Err(CatalogError::DirectoryNotFound(dir.to_path_buf()));
        }

        let mut phrases = Vec::new();
        for category in PhraseCategory::ALL {
            match Self::load_category(dir, category) {
                Ok(loaded) => {
                    log::debug!("Loaded {} phrases for {}", loaded.len(), category);
                    phrases.extend(loaded);
                }
                Err(e) => {
                    log::warn!("Failed to load phrases for {}: {}", category, e);
                }
            }
        }

        let catalog = Self::from_phrases(phrases);
        log::info!("Phrase catalog loaded: {} phrases", catalog.len());
        Ok(catalog)
    }

    fn load_category(dir: &Path, category: PhraseCategory) -> Result<Vec<Phrase>> {
        let path = dir.join(category.file_name());
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&path)?;
        let phrases: Vec<Phrase> = serde_json::from_str(&content)?;
        Ok(phrases)
    }

    /// Build a catalog from phrases already in memory.
    ///
    /// Later duplicates of an id are dropped so ids stay unique.
    pub fn from_phrases(phrases: Vec<Phrase>) -> Self {
        let mut catalog = Self::default();

        for phrase in phrases {
            if catalog.by_id.contains_key(&phrase.id) {
                log::warn!("Duplicate phrase id {}, keeping first", phrase.id);
                continue;
            }
            let index = catalog.phrases.len();
            catalog.by_id.insert(phrase.id.clone(), index);
            catalog.by_category.entry(phrase.category).or_default().push(index);
            catalog.phrases.push(phrase);
        }

        catalog
    }

    pub fn all(&self) -> &[Phrase] {
        &self.phrases
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Phrase> {
        self.by_id.get(id).map(|&i| &self.phrases[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Phrases of one category, in catalog order
    pub fn by_category(&self, category: PhraseCategory) -> Vec<&Phrase> {
        self.by_category
            .get(&category)
            .map(|indices| indices.iter().map(|&i| &self.phrases[i]).collect())
            .unwrap_or_default()
    }

    pub fn by_difficulty(&self, difficulty: PhraseDifficulty) -> Vec<&Phrase> {
        self.phrases
            .iter()
            .filter(|p| p.difficulty == difficulty)
            .collect()
    }

    /// Resolve ids to phrases, keeping the order of `ids` and skipping unknown ones
    pub fn resolve<S: AsRef<str>>(&self, ids: &[S]) -> Vec<&Phrase> {
        ids.iter().filter_map(|id| self.get(id.as_ref())).collect()
    }

    /// Case-insensitive substring search over English text and context
    pub fn search(&self, query: &str) -> Vec<&Phrase> {
        let query = query.to_lowercase();
        self.phrases
            .iter()
            .filter(|p| {
                p.english.to_lowercase().contains(&query) || p.context.to_lowercase().contains(&query)
            })
            .collect()
    }

    /// Number of phrases in every category, including empty ones
    pub fn category_counts(&self) -> Vec<(PhraseCategory, usize)> {
        PhraseCategory::ALL
            .into_iter()
            .map(|c| (c, self.by_category.get(&c).map_or(0, Vec::len)))
            .collect()
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use std::collections::HashMap;

    use super::*;

    /// Build a phrase with a single pt-BR translation
    pub fn phrase(id: &str, difficulty: PhraseDifficulty, category: PhraseCategory) -> Phrase {
        let mut translations = HashMap::new();
        translations.insert("pt-BR".to_string(), format!("{} (pt)", id));
        Phrase {
            id: id.to_string(),
            english: format!("English text for {}", id),
            context: format!("Context for {}", id),
            translations,
            difficulty,
            category,
        }
    }

    /// A catalog with `per_cell` phrases for every (category, difficulty) pair
    pub fn balanced_catalog(per_cell: usize) -> PhraseCatalog {
        let mut phrases = Vec::new();
        for category in PhraseCategory::ALL {
            for difficulty in PhraseDifficulty::ALL {
                for n in 0..per_cell {
                    let id = format!("{}_{}_{:03}", category, difficulty, n);
                    phrases.push(phrase(&id, difficulty, category));
                }
            }
        }
        PhraseCatalog::from_phrases(phrases)
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::phrase;
    use super::*;
    use tempfile::TempDir;

    fn write_category(dir: &Path, category: PhraseCategory, phrases: &[Phrase]) {
        let path = dir.join(category.file_name());
        fs::write(path, serde_json::to_string_pretty(phrases).unwrap()).unwrap();
    }

    #[test]
    fn test_load_from_category_files() {
        let temp = TempDir::new().unwrap();
        write_category(
            temp.path(),
            PhraseCategory::Standup,
            &[
                phrase("standup_001", PhraseDifficulty::Easy, PhraseCategory::Standup),
                phrase("standup_002", PhraseDifficulty::Hard, PhraseCategory::Standup),
            ],
        );
        write_category(
            temp.path(),
            PhraseCategory::Email,
            &[phrase("email_001", PhraseDifficulty::Medium, PhraseCategory::Email)],
        );

        let catalog = PhraseCatalog::load(temp.path()).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.by_category(PhraseCategory::Standup).len(), 2);
        assert_eq!(catalog.by_category(PhraseCategory::Slack).len(), 0);
        assert_eq!(catalog.get("email_001").unwrap().difficulty, PhraseDifficulty::Medium);
    }

    #[test]
    fn test_corrupt_category_yields_empty_list() {
        let temp = TempDir::new().unwrap();
        write_category(
            temp.path(),
            PhraseCategory::Casual,
            &[phrase("casual_001", PhraseDifficulty::Easy, PhraseCategory::Casual)],
        );
        fs::write(temp.path().join(PhraseCategory::Slack.file_name()), "{ not json").unwrap();

        let catalog = PhraseCatalog::load(temp.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.by_category(PhraseCategory::Slack).is_empty());
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let temp = TempDir::new().unwrap();
        let result = PhraseCatalog::load(&temp.path().join("nope"));
        assert!(matches!(result, Err(CatalogError::DirectoryNotFound(_))));
    }

    #[test]
    fn test_resolve_keeps_requested_order() {
        let catalog = PhraseCatalog::from_phrases(vec![
            phrase("a", PhraseDifficulty::Easy, PhraseCategory::Slack),
            phrase("b", PhraseDifficulty::Easy, PhraseCategory::Slack),
            phrase("c", PhraseDifficulty::Easy, PhraseCategory::Slack),
        ]);

        let resolved: Vec<&str> = catalog
            .resolve(&["c", "missing", "a"])
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(resolved, vec!["c", "a"]);
    }

    #[test]
    fn test_duplicate_ids_keep_first() {
        let mut dup = phrase("a", PhraseDifficulty::Hard, PhraseCategory::Email);
        dup.english = "second".to_string();
        let catalog = PhraseCatalog::from_phrases(vec![
            phrase("a", PhraseDifficulty::Easy, PhraseCategory::Slack),
            dup,
        ]);

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("a").unwrap().category, PhraseCategory::Slack);
    }

    #[test]
    fn test_search_matches_text_and_context() {
        let mut p = phrase("x", PhraseDifficulty::Easy, PhraseCategory::Slack);
        p.english = "Sounds good, thanks!".to_string();
        p.context = "Acknowledging a teammate".to_string();
        let catalog = PhraseCatalog::from_phrases(vec![
            p,
            phrase("y", PhraseDifficulty::Easy, PhraseCategory::Email),
        ]);

        assert_eq!(catalog.search("SOUNDS").len(), 1);
        assert_eq!(catalog.search("teammate").len(), 1);
        // Only the untouched fixture keeps its generated context
        assert_eq!(catalog.search("context for").len(), 1);
        assert_eq!(catalog.search("context for")[0].id, "y");
        assert!(catalog.search("kubernetes").is_empty());
    }

    #[test]
    fn test_by_difficulty_keeps_catalog_order() {
        let catalog = PhraseCatalog::from_phrases(vec![
            phrase("h1", PhraseDifficulty::Hard, PhraseCategory::Slack),
            phrase("e1", PhraseDifficulty::Easy, PhraseCategory::Email),
            phrase("h2", PhraseDifficulty::Hard, PhraseCategory::Casual),
        ]);

        let hard: Vec<&str> = catalog
            .by_difficulty(PhraseDifficulty::Hard)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(hard, vec!["h1", "h2"]);
        assert_eq!(catalog.by_difficulty(PhraseDifficulty::Easy).len(), 1);
        assert!(catalog.by_difficulty(PhraseDifficulty::Medium).is_empty());
    }

    #[test]
    fn test_category_counts_cover_all_categories() {
        let catalog = super::fixtures::balanced_catalog(2);
        let counts = catalog.category_counts();
        assert_eq!(counts.len(), 12);
        assert!(counts.iter().all(|(_, n)| *n == 6));
    }
}
