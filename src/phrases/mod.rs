//! Phrase catalog for DevLingo
//!
//! This module provides:
//! - Phrase, category, difficulty and language models
//! - Loading the bundled per-category phrase files
//! - Catalog queries (by id, category, difficulty, free-text search)

pub mod catalog;
pub mod models;

pub use catalog::{CatalogError, PhraseCatalog};
pub use models::*;
