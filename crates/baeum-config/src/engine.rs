use std::env;

use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Correct vocabulary answers between spelling probes
    pub spelling_interval: u32,
    /// How many recently learned words a probe samples from
    pub recent_window: usize,
    /// Fixed RNG seed; unset means seed from entropy
    pub rng_seed: Option<u64>,
}

impl EngineConfig {
    pub fn new() -> Self {
        let spelling_interval = env::var("SPELLING_INTERVAL")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3);

        let recent_window = env::var("RECENT_WINDOW")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(spelling_interval as usize);

        let rng_seed = env::var("RNG_SEED").ok().and_then(|v| v.parse().ok());

        EngineConfig {
            spelling_interval,
            recent_window,
            rng_seed,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}
