use std::collections::{BTreeSet, HashMap};

use async_trait::async_trait;
use tokio::sync::RwLock;

use baeum_core::progress::{ProgressDelta, ProgressStore, StoreError, UserProgress};
use baeum_types::UserId;

/// Process-local store; backs tests and single-shot runs
#[derive(Default)]
pub struct MemoryStore {
    rows: RwLock<HashMap<UserId, UserProgress>>,
    subscribers: RwLock<BTreeSet<UserId>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProgressStore for MemoryStore {
    async fn get_or_create(&self, user: UserId) -> Result<UserProgress, StoreError> {
        let mut rows = self.rows.write().await;
        Ok(rows.entry(user).or_default().clone())
    }

    async fn apply_delta(
        &self,
        user: UserId,
        delta: ProgressDelta,
    ) -> Result<UserProgress, StoreError> {
        let mut rows = self.rows.write().await;
        let row = rows.entry(user).or_default();
        delta.apply_to(row);
        Ok(row.clone())
    }

    async fn clear_learned(&self, user: UserId) -> Result<(), StoreError> {
        let mut rows = self.rows.write().await;
        rows.entry(user).or_default().learned.clear();
        Ok(())
    }

    async fn reset_score(&self, user: UserId) -> Result<(), StoreError> {
        let mut rows = self.rows.write().await;
        rows.entry(user).or_default().score = 0;
        Ok(())
    }

    async fn add_subscriber(&self, user: UserId) -> Result<(), StoreError> {
        self.subscribers.write().await.insert(user);
        Ok(())
    }

    async fn remove_subscriber(&self, user: UserId) -> Result<(), StoreError> {
        self.subscribers.write().await.remove(&user);
        Ok(())
    }

    async fn subscribers(&self) -> Result<Vec<UserId>, StoreError> {
        Ok(self.subscribers.read().await.iter().copied().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use baeum_types::{Level, WordId};

    #[tokio::test]
    async fn get_or_create_starts_zeroed() {
        let store = MemoryStore::new();
        let progress = store.get_or_create(UserId(1)).await.unwrap();
        assert_eq!(progress.score, 0);
        assert_eq!(progress.current_letter_index, 0);
        assert!(progress.learned.is_empty());
    }

    #[tokio::test]
    async fn deltas_accumulate_and_score_can_go_negative() {
        let store = MemoryStore::new();
        let user = UserId(7);

        store
            .apply_delta(user, ProgressDelta::score(-5))
            .await
            .unwrap();
        let progress = store
            .apply_delta(
                user,
                ProgressDelta {
                    score: -5,
                    learned_insert: Some(WordId::new("w1")),
                    letter_index: Some(3),
                    level_cursor: Some((Level::L1, 1)),
                },
            )
            .await
            .unwrap();

        assert_eq!(progress.score, -10);
        assert_eq!(progress.current_letter_index, 3);
        assert!(progress.has_learned(&WordId::new("w1")));
        assert_eq!(progress.level_cursor[&Level::L1], 1);
    }

    #[tokio::test]
    async fn clear_learned_keeps_the_rest_of_the_row() {
        let store = MemoryStore::new();
        let user = UserId(2);
        store
            .apply_delta(
                user,
                ProgressDelta {
                    score: 10,
                    learned_insert: Some(WordId::new("w1")),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        store.clear_learned(user).await.unwrap();
        let progress = store.get_or_create(user).await.unwrap();
        assert!(progress.learned.is_empty());
        assert_eq!(progress.score, 10);
    }

    #[tokio::test]
    async fn subscriber_roster_deduplicates() {
        let store = MemoryStore::new();
        store.add_subscriber(UserId(1)).await.unwrap();
        store.add_subscriber(UserId(1)).await.unwrap();
        store.add_subscriber(UserId(2)).await.unwrap();
        assert_eq!(store.subscribers().await.unwrap().len(), 2);

        store.remove_subscriber(UserId(1)).await.unwrap();
        assert_eq!(store.subscribers().await.unwrap(), vec![UserId(2)]);
    }
}
