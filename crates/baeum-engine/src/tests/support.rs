use std::sync::Arc;

use async_trait::async_trait;

use baeum_config::engine::EngineConfig;
use baeum_core::catalog::{Catalog, LetterCategory, LetterEntry, WordEntry};
use baeum_core::progress::{ProgressDelta, ProgressStore, StoreError, UserProgress};
use baeum_store::MemoryStore;
use baeum_types::{Level, Reply, UserId, WordId};

use crate::Engine;

pub(crate) struct TestCatalog {
    pub letters: Vec<LetterEntry>,
    pub categories: Vec<LetterCategory>,
    pub words: Vec<WordEntry>,
}

impl Catalog for TestCatalog {
    fn letters(&self) -> &[LetterEntry] {
        &self.letters
    }

    fn categories(&self) -> &[LetterCategory] {
        &self.categories
    }

    fn letter_by_glyph(&self, glyph: &str) -> Option<&LetterEntry> {
        self.letters.iter().find(|l| l.glyph == glyph)
    }

    fn words_at_level(&self, level: Level) -> Vec<&WordEntry> {
        let mut words: Vec<&WordEntry> =
            self.words.iter().filter(|w| w.level == level).collect();
        words.sort_by(|a, b| (a.rank, &a.id).cmp(&(b.rank, &b.id)));
        words
    }

    fn word(&self, id: &WordId) -> Option<&WordEntry> {
        self.words.iter().find(|w| &w.id == id)
    }
}

pub(crate) fn letter(index: usize) -> LetterEntry {
    LetterEntry {
        id: format!("l{index}"),
        glyph: format!("g{index}"),
        sound: format!("[s{index}]"),
        example_word: format!("gw{index}"),
        transliteration: format!("tr{index}"),
        translation: format!("meaning{index}"),
        notes: format!("notes about letter {index}"),
        image: None,
    }
}

pub(crate) fn category(title: &str, start: usize) -> LetterCategory {
    LetterCategory {
        title: title.to_string(),
        intro: vec![format!("intro: {title}")],
        start,
    }
}

pub(crate) fn word(id: &str, text: &str, translation: &str, level: Level, rank: u32) -> WordEntry {
    WordEntry {
        id: WordId::new(id),
        text: text.to_string(),
        translation: translation.to_string(),
        level,
        rank,
        romanization: Some(format!("{id}-rom")),
        image: None,
        examples: vec![format!("example with {text}")],
    }
}

pub(crate) fn engine(catalog: TestCatalog) -> (Arc<Engine>, Arc<MemoryStore>) {
    engine_with_interval(catalog, 3)
}

pub(crate) fn engine_with_interval(
    catalog: TestCatalog,
    spelling_interval: u32,
) -> (Arc<Engine>, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let config = EngineConfig {
        spelling_interval,
        recent_window: spelling_interval as usize,
        rng_seed: Some(7),
    };
    let engine = Engine::new(Arc::new(catalog), store.clone(), config);
    (Arc::new(engine), store)
}

/// All reply bodies joined for easy substring assertions
pub(crate) fn bodies(replies: &[Reply]) -> String {
    replies
        .iter()
        .map(Reply::body)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Answer the outstanding multiple-choice question correctly
pub(crate) async fn answer_correctly(engine: &Engine, user: UserId) -> Vec<Reply> {
    let (correct, options) = engine
        .inspect(user, |s| {
            let pending = s.pending().expect("a pending question");
            (pending.correct.clone(), pending.options.clone())
        })
        .await
        .expect("an active session");
    let index = options.iter().position(|o| *o == correct).unwrap() + 1;
    engine.handle_event(user, &index.to_string()).await
}

/// Answer the outstanding multiple-choice question wrongly
pub(crate) async fn answer_wrong(engine: &Engine, user: UserId) -> Vec<Reply> {
    let (correct, options) = engine
        .inspect(user, |s| {
            let pending = s.pending().expect("a pending question");
            (pending.correct.clone(), pending.options.clone())
        })
        .await
        .expect("an active session");
    let index = options.iter().position(|o| *o != correct).expect("a distractor") + 1;
    engine.handle_event(user, &index.to_string()).await
}

/// Mark words as already learned, without touching the score
pub(crate) async fn prelearn(store: &MemoryStore, user: UserId, ids: &[&str]) {
    for id in ids {
        store
            .apply_delta(
                user,
                ProgressDelta {
                    learned_insert: Some(WordId::new(*id)),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
    }
}

pub(crate) async fn score(store: &MemoryStore, user: UserId) -> i64 {
    store.get_or_create(user).await.unwrap().score
}

pub(crate) async fn progress(store: &MemoryStore, user: UserId) -> UserProgress {
    store.get_or_create(user).await.unwrap()
}

/// A store whose every read fails; exercises the retry-later path
pub(crate) struct FailingStore;

#[async_trait]
impl ProgressStore for FailingStore {
    async fn get_or_create(&self, _user: UserId) -> Result<UserProgress, StoreError> {
        Err(StoreError::Unavailable("store is down".into()))
    }

    async fn apply_delta(
        &self,
        _user: UserId,
        _delta: ProgressDelta,
    ) -> Result<UserProgress, StoreError> {
        Err(StoreError::Unavailable("store is down".into()))
    }

    async fn clear_learned(&self, _user: UserId) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("store is down".into()))
    }

    async fn reset_score(&self, _user: UserId) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("store is down".into()))
    }

    async fn add_subscriber(&self, _user: UserId) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("store is down".into()))
    }

    async fn remove_subscriber(&self, _user: UserId) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("store is down".into()))
    }

    async fn subscribers(&self) -> Result<Vec<UserId>, StoreError> {
        Err(StoreError::Unavailable("store is down".into()))
    }
}
