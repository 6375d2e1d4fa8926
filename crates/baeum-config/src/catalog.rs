use std::env;

use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Alphabet snapshot path; unset means the embedded curriculum
    pub alphabet_path: Option<String>,
    /// Vocabulary snapshot path; unset means the embedded curriculum
    pub vocabulary_path: Option<String>,
}

impl CatalogConfig {
    pub fn new() -> Self {
        CatalogConfig {
            alphabet_path: env::var("ALPHABET_PATH").ok(),
            vocabulary_path: env::var("VOCABULARY_PATH").ok(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::new()
    }
}
