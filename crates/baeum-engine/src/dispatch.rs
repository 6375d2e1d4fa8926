use baeum_core::error::EngineError;
use baeum_core::session::{Mode, Session};
use baeum_types::{Reply, UserId};

use crate::handlers::{game, letters, lookup, menu, spelling, words};
use crate::{Engine, msg};

/// Route one inbound event.
///
/// Two overrides run before mode dispatch: the literal exit command wins
/// from any mode, and an in-flight spelling probe consumes whatever the
/// user sends next. After that, dispatch is total over the mode enum.
pub(crate) async fn route(
    engine: &Engine,
    user: UserId,
    session: &mut Session,
    input: &str,
) -> Result<Vec<Reply>, EngineError> {
    if input.eq_ignore_ascii_case(msg::CMD_EXIT) {
        return Ok(menu::exit_to_menu(session));
    }

    match &session.mode {
        Mode::SpellingCheck { .. } => spelling::grade(engine, session, input),
        Mode::Menu { .. } => menu::handle(engine, user, session, input).await,
        Mode::LearnLetters { .. } => letters::handle(engine, user, session, input).await,
        Mode::LetterLookup => lookup::handle(engine, input),
        Mode::LearnWords(_) => words::grade(engine, user, session, input).await,
        Mode::Game(_) => game::grade(engine, session, input),
    }
}
