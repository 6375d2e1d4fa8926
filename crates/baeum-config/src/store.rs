use std::env;

use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Directory holding per-user progress files
    pub data_dir: String,
}

impl StoreConfig {
    pub fn new() -> Self {
        let data_dir = env::var("BAEUM_DATA_DIR").unwrap_or_else(|_| "data".to_string());

        StoreConfig { data_dir }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new()
    }
}
