use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use baeum_types::{Level, UserId, WordId};

/// Durable per-user record, one row per user
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProgress {
    pub score: i64,
    pub current_letter_index: usize,
    /// Insertion-ordered, duplicate-free; recency order feeds the spelling probe
    #[serde(default)]
    pub learned: Vec<WordId>,
    /// Resume offset into each level's filtered word sequence
    #[serde(default)]
    pub level_cursor: HashMap<Level, usize>,
}

impl UserProgress {
    pub fn has_learned(&self, id: &WordId) -> bool {
        self.learned.contains(id)
    }

    /// The most recently learned ids, newest last
    pub fn recent_learned(&self, window: usize) -> &[WordId] {
        let start = self.learned.len().saturating_sub(window);
        &self.learned[start..]
    }

    /// Ordered insert; a duplicate id is a no-op
    pub fn insert_learned(&mut self, id: WordId) {
        if !self.learned.contains(&id) {
            self.learned.push(id);
        }
    }
}

/// One atomic per-user mutation applied after a graded answer
#[derive(Debug, Clone, Default)]
pub struct ProgressDelta {
    pub score: i64,
    pub learned_insert: Option<WordId>,
    pub letter_index: Option<usize>,
    pub level_cursor: Option<(Level, usize)>,
}

impl ProgressDelta {
    pub fn score(points: i64) -> Self {
        ProgressDelta {
            score: points,
            ..Default::default()
        }
    }

    pub fn apply_to(&self, progress: &mut UserProgress) {
        progress.score += self.score;
        if let Some(id) = &self.learned_insert {
            progress.insert_learned(id.clone());
        }
        if let Some(index) = self.letter_index {
            progress.current_letter_index = index;
        }
        if let Some((level, cursor)) = self.level_cursor {
            progress.level_cursor.insert(level, cursor);
        }
    }
}

/// Durable progress rows plus the broadcast subscriber roster
#[async_trait]
pub trait ProgressStore: Send + Sync {
    async fn get_or_create(&self, user: UserId) -> Result<UserProgress, StoreError>;

    /// Single-row upsert; field groups land together
    async fn apply_delta(&self, user: UserId, delta: ProgressDelta)
    -> Result<UserProgress, StoreError>;

    /// Empties the learned set; everything else survives
    async fn clear_learned(&self, user: UserId) -> Result<(), StoreError>;

    async fn reset_score(&self, user: UserId) -> Result<(), StoreError>;

    async fn add_subscriber(&self, user: UserId) -> Result<(), StoreError>;

    async fn remove_subscriber(&self, user: UserId) -> Result<(), StoreError>;

    async fn subscribers(&self) -> Result<Vec<UserId>, StoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("corrupt progress row: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}
