use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tokio::sync::Mutex as SessionLock;

use baeum_config::engine::EngineConfig;
use baeum_core::catalog::Catalog;
use baeum_core::error::EngineError;
use baeum_core::progress::ProgressStore;
use baeum_core::session::Session;
use baeum_types::{Reply, UserId};

mod dispatch;
mod handlers;
mod msg;

#[cfg(test)]
mod tests;

/// The Learning Progression Engine.
///
/// Owns the catalog snapshot, the store handle, and an arena of per-user
/// sessions. Events for one user are serialized by that user's lock;
/// events for different users run in parallel.
pub struct Engine {
    catalog: Arc<dyn Catalog>,
    store: Arc<dyn ProgressStore>,
    config: EngineConfig,
    sessions: Mutex<HashMap<UserId, Arc<SessionLock<Session>>>>,
    rng: Mutex<StdRng>,
}

impl Engine {
    pub fn new(
        catalog: Arc<dyn Catalog>,
        store: Arc<dyn ProgressStore>,
        config: EngineConfig,
    ) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            catalog,
            store,
            config,
            sessions: Mutex::new(HashMap::new()),
            rng: Mutex::new(rng),
        }
    }

    /// The single entry point: one inbound text event for one user.
    ///
    /// Never fails outward; recoverable errors become replies. A store or
    /// catalog read failure leaves the session untouched so the same event
    /// can be retried; a stale session is reset to the menu.
    pub async fn handle_event(&self, user: UserId, text: &str) -> Vec<Reply> {
        let entry = self.session_entry(user);
        let mut session = entry.lock().await;
        let input = text.trim();
        tracing::debug!(user = %user, mode = session.mode.name(), "handling event");

        match dispatch::route(self, user, &mut session, input).await {
            Ok(replies) => replies,
            Err(EngineError::ContentUnavailable(reason)) => {
                tracing::warn!(user = %user, "content unavailable: {reason}");
                vec![Reply::text(msg::RETRY_LATER)]
            }
            Err(EngineError::StaleState(reason)) => {
                tracing::warn!(user = %user, "stale session: {reason}");
                session.reset_to_menu();
                vec![Reply::text_with(msg::STALE_RESET, msg::main_keyboard())]
            }
        }
    }

    /// Drop a user's transient session. Always safe; only soft data is lost.
    pub fn evict(&self, user: UserId) {
        self.sessions_guard().remove(&user);
    }

    fn session_entry(&self, user: UserId) -> Arc<SessionLock<Session>> {
        self.sessions_guard()
            .entry(user)
            .or_insert_with(|| Arc::new(SessionLock::new(Session::new())))
            .clone()
    }

    fn sessions_guard(&self) -> MutexGuard<'_, HashMap<UserId, Arc<SessionLock<Session>>>> {
        self.sessions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn rng(&self) -> MutexGuard<'_, StdRng> {
        self.rng
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub(crate) fn catalog(&self) -> &dyn Catalog {
        self.catalog.as_ref()
    }

    pub(crate) fn store(&self) -> &dyn ProgressStore {
        self.store.as_ref()
    }

    pub(crate) fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub(crate) fn shuffle<T>(&self, items: &mut [T]) {
        items.shuffle(&mut *self.rng());
    }

    pub(crate) fn pick_clone<T: Clone>(&self, items: &[T]) -> Option<T> {
        items.choose(&mut *self.rng()).cloned()
    }

    #[cfg(test)]
    pub(crate) async fn inspect<R>(
        &self,
        user: UserId,
        read: impl FnOnce(&Session) -> R,
    ) -> Option<R> {
        let entry = self.sessions_guard().get(&user).cloned();
        match entry {
            Some(entry) => {
                let session = entry.lock().await;
                Some(read(&session))
            }
            None => None,
        }
    }

    #[cfg(test)]
    pub(crate) async fn put_session(&self, user: UserId, session: Session) {
        let entry = self.session_entry(user);
        *entry.lock().await = session;
    }
}
