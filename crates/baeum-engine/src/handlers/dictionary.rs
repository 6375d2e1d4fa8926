use baeum_core::error::EngineError;
use baeum_core::session::{LevelPrompt, Mode, Session};
use baeum_types::{Level, Reply, UserId};

use crate::{Engine, msg};

/// List the levels the user has learned words at and ask for one
pub(crate) async fn open(
    engine: &Engine,
    user: UserId,
    session: &mut Session,
) -> Result<Vec<Reply>, EngineError> {
    let progress = engine.store().get_or_create(user).await?;

    let mut levels: Vec<Level> = progress
        .learned
        .iter()
        .filter_map(|id| engine.catalog().word(id))
        .map(|word| word.level)
        .collect();
    levels.sort();
    levels.dedup();

    if levels.is_empty() {
        return Ok(vec![Reply::text(msg::NO_LEARNED_WORDS)]);
    }

    let mut rows: Vec<Vec<String>> = levels
        .iter()
        .map(|level| vec![level.to_string()])
        .collect();
    rows.push(vec![msg::LABEL_EXIT.to_string()]);

    session.mode = Mode::Menu {
        prompt: Some(LevelPrompt::Dictionary),
    };
    Ok(vec![Reply::text_with(
        msg::PICK_DICTIONARY_LEVEL,
        baeum_types::Keyboard(rows),
    )])
}

/// Show the learned words at one level and offer a game round on them
pub(crate) async fn show_level(
    engine: &Engine,
    user: UserId,
    session: &mut Session,
    level: Level,
) -> Result<Vec<Reply>, EngineError> {
    let progress = engine.store().get_or_create(user).await?;

    let words: Vec<_> = progress
        .learned
        .iter()
        .filter_map(|id| engine.catalog().word(id))
        .filter(|word| word.level == level)
        .collect();

    if words.is_empty() {
        return Ok(vec![Reply::text(format!(
            "No learned words at level {level} yet."
        ))]);
    }

    let listing = words
        .iter()
        .map(|word| format!("{} — {}", word.text, word.translation))
        .collect::<Vec<_>>()
        .join("\n");

    session.last_dictionary_level = Some(level);
    Ok(vec![Reply::text_with(
        format!(
            "📚 Level {}\n\n📊 Words learned: {}\n\n🔠 Your words:\n{}\n\nPress 'Play' to start \
             a round!",
            level,
            words.len(),
            listing
        ),
        msg::play_keyboard(),
    )])
}
