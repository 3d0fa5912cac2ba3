//! Learning progress: lifetime counters, streaks and levels

pub mod models;
pub mod tracker;

pub use models::{LevelTitle, UserProgress, PHRASES_PER_LEVEL};
pub use tracker::ProgressTracker;
