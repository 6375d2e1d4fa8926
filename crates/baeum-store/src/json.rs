use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;

use baeum_core::progress::{ProgressDelta, ProgressStore, StoreError, UserProgress};
use baeum_types::UserId;

/// One pretty-printed JSON file per user under a data directory, plus a
/// shared roster file. Per-user writes are already serialized by the
/// engine's per-user lock; the roster gets its own.
pub struct JsonStore {
    dir: PathBuf,
    roster_lock: Mutex<()>,
}

impl JsonStore {
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        tracing::info!("Progress store at {}", dir.display());
        Ok(Self {
            dir,
            roster_lock: Mutex::new(()),
        })
    }

    fn user_file(&self, user: UserId) -> PathBuf {
        self.dir.join(format!("user_{}.json", user.0))
    }

    fn roster_file(&self) -> PathBuf {
        self.dir.join("subscribers.json")
    }

    fn read_row(&self, user: UserId) -> Result<UserProgress, StoreError> {
        let path = self.user_file(user);
        if !path.exists() {
            return Ok(UserProgress::default());
        }
        let data = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&data)?)
    }

    fn write_row(&self, user: UserId, row: &UserProgress) -> Result<(), StoreError> {
        fs::write(self.user_file(user), serde_json::to_string_pretty(row)?)?;
        Ok(())
    }

    fn read_roster(path: &Path) -> Result<BTreeSet<UserId>, StoreError> {
        if !path.exists() {
            return Ok(BTreeSet::new());
        }
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }
}

#[async_trait]
impl ProgressStore for JsonStore {
    async fn get_or_create(&self, user: UserId) -> Result<UserProgress, StoreError> {
        let row = self.read_row(user)?;
        if !self.user_file(user).exists() {
            self.write_row(user, &row)?;
            tracing::debug!("Created progress row for {user}");
        }
        Ok(row)
    }

    async fn apply_delta(
        &self,
        user: UserId,
        delta: ProgressDelta,
    ) -> Result<UserProgress, StoreError> {
        let mut row = self.read_row(user)?;
        delta.apply_to(&mut row);
        self.write_row(user, &row)?;
        Ok(row)
    }

    async fn clear_learned(&self, user: UserId) -> Result<(), StoreError> {
        let mut row = self.read_row(user)?;
        row.learned.clear();
        self.write_row(user, &row)
    }

    async fn reset_score(&self, user: UserId) -> Result<(), StoreError> {
        let mut row = self.read_row(user)?;
        row.score = 0;
        self.write_row(user, &row)
    }

    async fn add_subscriber(&self, user: UserId) -> Result<(), StoreError> {
        let _guard = self.roster_lock.lock().await;
        let path = self.roster_file();
        let mut roster = Self::read_roster(&path)?;
        if roster.insert(user) {
            fs::write(&path, serde_json::to_string_pretty(&roster)?)?;
        }
        Ok(())
    }

    async fn remove_subscriber(&self, user: UserId) -> Result<(), StoreError> {
        let _guard = self.roster_lock.lock().await;
        let path = self.roster_file();
        let mut roster = Self::read_roster(&path)?;
        if roster.remove(&user) {
            fs::write(&path, serde_json::to_string_pretty(&roster)?)?;
        }
        Ok(())
    }

    async fn subscribers(&self) -> Result<Vec<UserId>, StoreError> {
        let _guard = self.roster_lock.lock().await;
        Ok(Self::read_roster(&self.roster_file())?.into_iter().collect())
    }
}
