//! Data models for the phrase catalog

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A single English phrase for developers to learn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phrase {
    /// Stable identifier, unique within the catalog (e.g. "standup_001")
    pub id: String,
    /// The English phrase to learn
    pub english: String,
    /// When and where the phrase is used
    pub context: String,
    /// Translations keyed by language code (e.g. "pt-BR")
    #[serde(default)]
    pub translations: HashMap<String, String>,
    pub difficulty: PhraseDifficulty,
    pub category: PhraseCategory,
}

impl Phrase {
    /// Translation for a language, falling back to the English text
    pub fn translation(&self, language: UserLanguage) -> &str {
        self.translations
            .get(language.code())
            .map(String::as_str)
            .unwrap_or(&self.english)
    }
}

/// Difficulty tiers, ordered easy < medium < hard
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PhraseDifficulty {
    Easy,
    Medium,
    Hard,
}

impl PhraseDifficulty {
    pub const ALL: [PhraseDifficulty; 3] = [Self::Easy, Self::Medium, Self::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

impl fmt::Display for PhraseDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The twelve fixed phrase categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PhraseCategory {
    Standup,
    CodeReview,
    Slack,
    Email,
    Meetings,
    Technical,
    PullRequests,
    BugReports,
    PairProgramming,
    Interviews,
    Casual,
    Documentation,
}

impl PhraseCategory {
    pub const ALL: [PhraseCategory; 12] = [
        Self::Standup,
        Self::CodeReview,
        Self::Slack,
        Self::Email,
        Self::Meetings,
        Self::Technical,
        Self::PullRequests,
        Self::BugReports,
        Self::PairProgramming,
        Self::Interviews,
        Self::Casual,
        Self::Documentation,
    ];

    /// Wire name, as used in phrase files and persisted counters
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standup => "standup",
            Self::CodeReview => "codeReview",
            Self::Slack => "slack",
            Self::Email => "email",
            Self::Meetings => "meetings",
            Self::Technical => "technical",
            Self::PullRequests => "pullRequests",
            Self::BugReports => "bugReports",
            Self::PairProgramming => "pairProgramming",
            Self::Interviews => "interviews",
            Self::Casual => "casual",
            Self::Documentation => "documentation",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Standup => "Standup",
            Self::CodeReview => "Code Review",
            Self::Slack => "Slack",
            Self::Email => "Email",
            Self::Meetings => "Meetings",
            Self::Technical => "Technical",
            Self::PullRequests => "Pull Requests",
            Self::BugReports => "Bug Reports",
            Self::PairProgramming => "Pair Programming",
            Self::Interviews => "Interviews",
            Self::Casual => "Casual",
            Self::Documentation => "Documentation",
        }
    }

    /// Symbol name shown next to the category on display surfaces
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Standup => "person.3.fill",
            Self::CodeReview => "eye.fill",
            Self::Slack => "bubble.left.and.bubble.right.fill",
            Self::Email => "envelope.fill",
            Self::Meetings => "video.fill",
            Self::Technical => "wrench.and.screwdriver.fill",
            Self::PullRequests => "arrow.triangle.merge",
            Self::BugReports => "ladybug.fill",
            Self::PairProgramming => "person.2.fill",
            Self::Interviews => "briefcase.fill",
            Self::Casual => "cup.and.saucer.fill",
            Self::Documentation => "doc.text.fill",
        }
    }

    /// Name of the bundled JSON file holding this category's phrases
    pub fn file_name(&self) -> String {
        format!("phrases_{}.json", self.as_str())
    }
}

impl fmt::Display for PhraseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PhraseCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().to_lowercase() == needle || c.label().to_lowercase() == needle)
            .ok_or_else(|| format!("Unknown category: {}", s))
    }
}

/// Supported user languages (all learning English)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum UserLanguage {
    #[default]
    #[serde(rename = "pt-BR")]
    PtBr,
    #[serde(rename = "es")]
    Es,
    #[serde(rename = "fr")]
    Fr,
    #[serde(rename = "de")]
    De,
    #[serde(rename = "it")]
    It,
    #[serde(rename = "ja")]
    Ja,
    #[serde(rename = "ko")]
    Ko,
    #[serde(rename = "zh-Hans")]
    ZhHans,
    #[serde(rename = "hi")]
    Hi,
    #[serde(rename = "tr")]
    Tr,
}

impl UserLanguage {
    pub const ALL: [UserLanguage; 10] = [
        Self::PtBr,
        Self::Es,
        Self::Fr,
        Self::De,
        Self::It,
        Self::Ja,
        Self::Ko,
        Self::ZhHans,
        Self::Hi,
        Self::Tr,
    ];

    /// BCP 47 code used as the translation key
    pub fn code(&self) -> &'static str {
        match self {
            Self::PtBr => "pt-BR",
            Self::Es => "es",
            Self::Fr => "fr",
            Self::De => "de",
            Self::It => "it",
            Self::Ja => "ja",
            Self::Ko => "ko",
            Self::ZhHans => "zh-Hans",
            Self::Hi => "hi",
            Self::Tr => "tr",
        }
    }

    pub fn native_name(&self) -> &'static str {
        match self {
            Self::PtBr => "Português (Brasil)",
            Self::Es => "Español",
            Self::Fr => "Français",
            Self::De => "Deutsch",
            Self::It => "Italiano",
            Self::Ja => "日本語",
            Self::Ko => "한국어",
            Self::ZhHans => "简体中文",
            Self::Hi => "हिन्दी",
            Self::Tr => "Türkçe",
        }
    }

    pub fn english_name(&self) -> &'static str {
        match self {
            Self::PtBr => "Portuguese (Brazil)",
            Self::Es => "Spanish",
            Self::Fr => "French",
            Self::De => "German",
            Self::It => "Italian",
            Self::Ja => "Japanese",
            Self::Ko => "Korean",
            Self::ZhHans => "Chinese (Simplified)",
            Self::Hi => "Hindi",
            Self::Tr => "Turkish",
        }
    }
}

impl FromStr for UserLanguage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|l| l.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unsupported language: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phrase_deserializes_from_bundle_format() {
        let json = r#"{
            "id": "slack_002",
            "english": "Can you take a look at my PR?",
            "context": "Asking a teammate to review your pull request",
            "translations": { "pt-BR": "Você pode dar uma olhada no meu PR?" },
            "difficulty": "easy",
            "category": "pullRequests"
        }"#;

        let phrase: Phrase = serde_json::from_str(json).unwrap();
        assert_eq!(phrase.id, "slack_002");
        assert_eq!(phrase.difficulty, PhraseDifficulty::Easy);
        assert_eq!(phrase.category, PhraseCategory::PullRequests);
        assert_eq!(phrase.translation(UserLanguage::PtBr), "Você pode dar uma olhada no meu PR?");
        // Missing translation falls back to English
        assert_eq!(phrase.translation(UserLanguage::Ja), "Can you take a look at my PR?");
    }

    #[test]
    fn test_difficulty_ordering() {
        assert!(PhraseDifficulty::Easy < PhraseDifficulty::Medium);
        assert!(PhraseDifficulty::Medium < PhraseDifficulty::Hard);
    }

    #[test]
    fn test_category_parsing() {
        assert_eq!("codeReview".parse::<PhraseCategory>(), Ok(PhraseCategory::CodeReview));
        assert_eq!("Bug Reports".parse::<PhraseCategory>(), Ok(PhraseCategory::BugReports));
        assert!("gossip".parse::<PhraseCategory>().is_err());
        assert_eq!(PhraseCategory::PairProgramming.file_name(), "phrases_pairProgramming.json");
    }

    #[test]
    fn test_language_codes_parse() {
        for language in UserLanguage::ALL {
            assert_eq!(language.code().parse::<UserLanguage>(), Ok(language));
        }
        assert_eq!(
            serde_json::to_string(&UserLanguage::ZhHans).unwrap(),
            "\"zh-Hans\""
        );
    }
}
