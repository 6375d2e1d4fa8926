use serde::{Deserialize, Serialize};

use baeum_types::{Level, WordId};

/// Read-only curriculum snapshot loaded once per engine run
pub trait Catalog: Send + Sync {
    /// Alphabet entries in curriculum order
    fn letters(&self) -> &[LetterEntry];

    /// Category boundaries over the letter sequence
    fn categories(&self) -> &[LetterCategory];

    /// Exact-match letter lookup by glyph
    fn letter_by_glyph(&self, glyph: &str) -> Option<&LetterEntry>;

    /// Words at one level, ordered by importance rank then id
    fn words_at_level(&self, level: Level) -> Vec<&WordEntry>;

    /// Word by stable id
    fn word(&self, id: &WordId) -> Option<&WordEntry>;
}

/// One alphabet entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LetterEntry {
    pub id: String,
    pub glyph: String,
    pub sound: String,
    pub example_word: String,
    pub transliteration: String,
    pub translation: String,
    pub notes: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// One vocabulary entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordEntry {
    pub id: WordId,
    pub text: String,
    pub translation: String,
    pub level: Level,
    pub rank: u32,
    #[serde(default)]
    pub romanization: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub examples: Vec<String>,
}

/// A section of the letter sequence with a one-time introduction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LetterCategory {
    pub title: String,
    pub intro: Vec<String>,
    /// Index of the first letter in this category
    pub start: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("snapshot not found: {0}")]
    NotFound(String),

    #[error("invalid snapshot: {0}")]
    Invalid(String),

    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
