//! Keys used in the shared key-value store

// Daily phrases
pub const TODAY_DATE: &str = "todayDate";
pub const TODAY_PHRASE_IDS: &str = "todayPhraseIDs";
pub const COMPLETED_PHRASE_IDS: &str = "completedPhraseIDs";
pub const SAVED_PHRASE_IDS: &str = "savedPhraseIDs";
pub const SHOWN_PHRASE_IDS: &str = "shownPhraseIDs";
pub const PHRASE_HISTORY: &str = "phraseHistory";

// Progress
pub const USER_PROGRESS: &str = "userProgress";

// Display surface
pub const WIDGET_PHRASES: &str = "widgetPhrases";
