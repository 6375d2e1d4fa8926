use baeum_core::error::EngineError;
use baeum_core::session::{LevelPrompt, Mode, Session};
use baeum_types::{Level, Reply, UserId};

use crate::handlers::{dictionary, game, letters, lookup, words};
use crate::{Engine, msg};

/// The absorbing exit transition; valid from every mode
pub(crate) fn exit_to_menu(session: &mut Session) -> Vec<Reply> {
    session.reset_to_menu();
    vec![Reply::text_with(msg::BACK_IN_MENU, msg::main_keyboard())]
}

pub(crate) async fn handle(
    engine: &Engine,
    user: UserId,
    session: &mut Session,
    input: &str,
) -> Result<Vec<Reply>, EngineError> {
    // An outstanding level keyboard captures digits first
    let prompt = match &session.mode {
        Mode::Menu { prompt } => *prompt,
        _ => None,
    };
    if let Some(prompt) = prompt {
        if let Some(level) = Level::from_input(input) {
            session.mode = Mode::Menu { prompt: None };
            return match prompt {
                LevelPrompt::LearnWords => words::begin(engine, user, session, level).await,
                LevelPrompt::Dictionary => {
                    dictionary::show_level(engine, user, session, level).await
                }
            };
        }
    }

    match input.to_lowercase().as_str() {
        "start" | "/start" => {
            engine.store().add_subscriber(user).await?;
            tracing::info!(user = %user, "new subscriber");
            Ok(vec![
                Reply::text(msg::WELCOME_INTRO),
                Reply::text_with(msg::WELCOME_PICK, msg::main_keyboard()),
            ])
        }
        "hangul" => Ok(vec![Reply::text_with(
            msg::HANGUL_INTRO,
            msg::hangul_keyboard(),
        )]),
        "study letters" => letters::begin(engine, user, session).await,
        "what letter?" => Ok(lookup::begin(session)),
        "phrases" => Ok(vec![Reply::text(msg::PHRASES_STUB)]),
        "grammar" => Ok(vec![Reply::text(msg::GRAMMAR_STUB)]),
        "topik prep" => Ok(vec![Reply::text(msg::TOPIK_STUB)]),
        "my dictionary" => dictionary::open(engine, user, session).await,
        "learn new words" => {
            session.mode = Mode::Menu {
                prompt: Some(LevelPrompt::LearnWords),
            };
            Ok(vec![Reply::text_with(
                msg::PICK_LEARN_LEVEL,
                msg::levels_keyboard(),
            )])
        }
        "play" | "play again 🔄" => game::begin(engine, user, session).await,
        "back 🔙" => Ok(vec![Reply::text_with(
            msg::BACK_IN_MENU,
            msg::main_keyboard(),
        )]),
        "reset score" => {
            engine.store().reset_score(user).await?;
            Ok(vec![Reply::text(msg::SCORE_RESET)])
        }
        "clear dictionary" => {
            engine.store().clear_learned(user).await?;
            Ok(vec![Reply::text(msg::DICTIONARY_CLEARED)])
        }
        "unsubscribe" | "/unsubscribe" => {
            engine.store().remove_subscriber(user).await?;
            Ok(vec![Reply::text(msg::UNSUBSCRIBED)])
        }
        _ => Ok(vec![Reply::text(msg::CHOOSE_VALID)]),
    }
}
