use std::collections::HashMap;

use serde::Deserialize;
use unicode_normalization::UnicodeNormalization;

use baeum_core::catalog::{Catalog, CatalogError, LetterCategory, LetterEntry, WordEntry};
use baeum_types::{Level, WordId};

#[derive(Deserialize)]
pub(crate) struct AlphabetSnapshot {
    pub categories: Vec<LetterCategory>,
    pub letters: Vec<LetterEntry>,
}

#[derive(Deserialize)]
pub(crate) struct VocabularySnapshot {
    pub words: Vec<WordEntry>,
}

/// Immutable Korean curriculum snapshot
pub struct KoreanCurriculum {
    letters: Vec<LetterEntry>,
    categories: Vec<LetterCategory>,
    words: Vec<WordEntry>,
    by_glyph: HashMap<String, usize>,
    by_id: HashMap<WordId, usize>,
}

fn nfc(text: &str) -> String {
    text.nfc().collect()
}

impl KoreanCurriculum {
    pub(crate) fn build(
        alphabet: AlphabetSnapshot,
        vocabulary: VocabularySnapshot,
    ) -> Result<Self, CatalogError> {
        let AlphabetSnapshot {
            categories,
            letters,
        } = alphabet;

        if letters.is_empty() {
            return Err(CatalogError::Invalid("alphabet snapshot is empty".into()));
        }

        let mut last_start = None;
        for category in &categories {
            if category.start >= letters.len() {
                return Err(CatalogError::Invalid(format!(
                    "category '{}' starts at {} but there are only {} letters",
                    category.title,
                    category.start,
                    letters.len()
                )));
            }
            if last_start.is_some_and(|prev| category.start <= prev) {
                return Err(CatalogError::Invalid(format!(
                    "category '{}' is out of order",
                    category.title
                )));
            }
            last_start = Some(category.start);
        }

        let mut by_glyph = HashMap::new();
        for (index, letter) in letters.iter().enumerate() {
            if by_glyph.insert(nfc(&letter.glyph), index).is_some() {
                return Err(CatalogError::Invalid(format!(
                    "duplicate glyph: {}",
                    letter.glyph
                )));
            }
        }

        let mut words = vocabulary.words;
        words.sort_by(|a, b| {
            (a.level, a.rank, &a.id).cmp(&(b.level, b.rank, &b.id))
        });

        let mut by_id = HashMap::new();
        for (index, word) in words.iter().enumerate() {
            if by_id.insert(word.id.clone(), index).is_some() {
                return Err(CatalogError::Invalid(format!(
                    "duplicate word id: {}",
                    word.id
                )));
            }
        }

        Ok(Self {
            letters,
            categories,
            words,
            by_glyph,
            by_id,
        })
    }

    pub fn letter_count(&self) -> usize {
        self.letters.len()
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }
}

impl Catalog for KoreanCurriculum {
    fn letters(&self) -> &[LetterEntry] {
        &self.letters
    }

    fn categories(&self) -> &[LetterCategory] {
        &self.categories
    }

    fn letter_by_glyph(&self, glyph: &str) -> Option<&LetterEntry> {
        self.by_glyph
            .get(&nfc(glyph))
            .map(|&index| &self.letters[index])
    }

    fn words_at_level(&self, level: Level) -> Vec<&WordEntry> {
        // words are sorted by (level, rank, id) at build time
        self.words.iter().filter(|w| w.level == level).collect()
    }

    fn word(&self, id: &WordId) -> Option<&WordEntry> {
        self.by_id.get(id).map(|&index| &self.words[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::CurriculumLoader;

    #[test]
    fn embedded_curriculum_loads_and_validates() {
        let curriculum = CurriculumLoader::load_embedded().unwrap();
        assert_eq!(curriculum.letter_count(), 39);
        assert!(curriculum.word_count() > 0);
    }

    #[test]
    fn category_boundaries_match_the_reference_curriculum() {
        let curriculum = CurriculumLoader::load_embedded().unwrap();
        let starts: Vec<usize> = curriculum.categories().iter().map(|c| c.start).collect();
        assert_eq!(starts, vec![0, 10, 20, 25, 35]);
    }

    #[test]
    fn glyph_lookup_is_exact_and_nfc_normalized() {
        let curriculum = CurriculumLoader::load_embedded().unwrap();
        let letter = curriculum.letter_by_glyph("ㄱ").unwrap();
        assert_eq!(letter.glyph, "ㄱ");
        assert!(curriculum.letter_by_glyph("x").is_none());
        // partial input is not a match
        assert!(curriculum.letter_by_glyph("ㄱㄴ").is_none());
    }

    #[test]
    fn words_at_level_come_back_rank_ordered() {
        let curriculum = CurriculumLoader::load_embedded().unwrap();
        let words = curriculum.words_at_level(Level::L1);
        assert!(!words.is_empty());
        for pair in words.windows(2) {
            assert!(pair[0].rank <= pair[1].rank);
        }
        assert!(words.iter().all(|w| w.level == Level::L1));
    }

    #[test]
    fn word_lookup_by_id() {
        let curriculum = CurriculumLoader::load_embedded().unwrap();
        let first = curriculum.words_at_level(Level::L1)[0];
        let found = curriculum.word(&first.id).unwrap();
        assert_eq!(found.text, first.text);
        assert!(curriculum.word(&WordId::new("missing")).is_none());
    }
}
