use baeum_core::error::EngineError;
use baeum_core::session::{Mode, Session};
use baeum_types::Reply;

use crate::{Engine, msg};

/// Open the stateless lookup side channel
pub(crate) fn begin(session: &mut Session) -> Vec<Reply> {
    session.mode = Mode::LetterLookup;
    vec![Reply::text(msg::ASK_FOR_LETTER)]
}

/// Answer one lookup; the mode is kept so the user can keep asking
pub(crate) fn handle(engine: &Engine, input: &str) -> Result<Vec<Reply>, EngineError> {
    match engine.catalog().letter_by_glyph(input) {
        Some(letter) => Ok(vec![Reply::text(format!(
            "Letter: {} {}\nNotes: {}\nExample word: {} ({}) — {}",
            letter.glyph,
            letter.sound,
            letter.notes,
            letter.example_word,
            letter.transliteration,
            letter.translation
        ))]),
        None => Ok(vec![Reply::text(msg::LETTER_NOT_FOUND)]),
    }
}
