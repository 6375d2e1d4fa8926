use std::env;

use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize)]
pub struct TransportConfig {
    /// Deliver replies through the bot API; false prints to stdout
    pub enabled: bool,
    pub api_url: String,
    pub token: String,
}

impl TransportConfig {
    pub fn new() -> Self {
        let enabled = env::var("BOT_API_ENABLED")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(false);

        let api_url =
            env::var("BOT_API_URL").unwrap_or_else(|_| "https://api.example.org/bot".to_string());

        let token = env::var("BOT_TOKEN").unwrap_or_default();

        TransportConfig {
            enabled,
            api_url,
            token,
        }
    }
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self::new()
    }
}
