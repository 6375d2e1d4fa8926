use std::path::Path;

use baeum_core::catalog::CatalogError;

use crate::curriculum::{AlphabetSnapshot, KoreanCurriculum, VocabularySnapshot};

pub struct CurriculumLoader;

impl CurriculumLoader {
    /// Load the curriculum shipped with the crate
    pub fn load_embedded() -> Result<KoreanCurriculum, CatalogError> {
        tracing::info!("Loading embedded Korean curriculum...");
        let curriculum = Self::from_json(
            include_str!("../data/alphabet.json"),
            include_str!("../data/vocabulary.json"),
        )?;
        tracing::info!(
            "Loaded {} letters and {} words",
            curriculum.letter_count(),
            curriculum.word_count()
        );
        Ok(curriculum)
    }

    /// Load a curriculum from snapshot files
    pub fn load_from_files(
        alphabet: &Path,
        vocabulary: &Path,
    ) -> Result<KoreanCurriculum, CatalogError> {
        tracing::info!(
            "Loading Korean curriculum from {} and {}",
            alphabet.display(),
            vocabulary.display()
        );
        let alphabet_json = std::fs::read_to_string(alphabet)?;
        let vocabulary_json = std::fs::read_to_string(vocabulary)?;
        Self::from_json(&alphabet_json, &vocabulary_json)
    }

    pub fn from_json(
        alphabet_json: &str,
        vocabulary_json: &str,
    ) -> Result<KoreanCurriculum, CatalogError> {
        let alphabet: AlphabetSnapshot = serde_json::from_str(alphabet_json)?;
        let vocabulary: VocabularySnapshot = serde_json::from_str(vocabulary_json)?;
        KoreanCurriculum::build(alphabet, vocabulary)
    }
}
