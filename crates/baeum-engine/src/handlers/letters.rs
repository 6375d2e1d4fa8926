use baeum_core::error::EngineError;
use baeum_core::progress::ProgressDelta;
use baeum_core::session::{LetterPhase, Mode, Session};
use baeum_types::{Reply, UserId};

use crate::handlers::lookup;
use crate::{Engine, msg};

/// Enter the sequencer at the user's persisted letter index
pub(crate) async fn begin(
    engine: &Engine,
    user: UserId,
    session: &mut Session,
) -> Result<Vec<Reply>, EngineError> {
    let progress = engine.store().get_or_create(user).await?;
    present_from(engine, session, progress.current_letter_index)
}

/// Present the letter at `index`, with its category introduction when the
/// index sits on a boundary. Past the end of the catalog the sequencer
/// completes and falls back to the menu.
fn present_from(
    engine: &Engine,
    session: &mut Session,
    index: usize,
) -> Result<Vec<Reply>, EngineError> {
    let letters = engine.catalog().letters();
    if index >= letters.len() {
        session.reset_to_menu();
        return Ok(vec![Reply::text_with(
            msg::LETTERS_DONE,
            msg::main_keyboard(),
        )]);
    }

    let letter = &letters[index];
    let mut replies = Vec::new();

    if let Some(category) = engine
        .catalog()
        .categories()
        .iter()
        .find(|c| c.start == index)
    {
        tracing::debug!("presenting category '{}' at index {index}", category.title);
        for paragraph in &category.intro {
            replies.push(Reply::text(paragraph.clone()));
        }
    }

    let caption = format!(
        "Study this letter: {} {}\n{}",
        letter.glyph, letter.sound, letter.notes
    );
    match &letter.image {
        Some(url) => replies.push(Reply::image(url.clone(), caption)),
        None => replies.push(Reply::text(caption)),
    }
    replies.push(Reply::text(format!(
        "Example word: {} ({}) — {}",
        letter.example_word, letter.transliteration, letter.translation
    )));
    replies.push(Reply::text(msg::TYPE_THE_LETTER));

    session.mode = Mode::LearnLetters {
        phase: LetterPhase::AwaitingLetter,
    };
    Ok(replies)
}

pub(crate) async fn handle(
    engine: &Engine,
    user: UserId,
    session: &mut Session,
    input: &str,
) -> Result<Vec<Reply>, EngineError> {
    if input.to_lowercase() == "what letter?" {
        return Ok(lookup::begin(session));
    }

    let phase = match &session.mode {
        Mode::LearnLetters { phase } => *phase,
        _ => return Ok(vec![Reply::text(msg::CHOOSE_VALID)]),
    };

    let progress = engine.store().get_or_create(user).await?;
    let index = progress.current_letter_index;
    let Some(letter) = engine.catalog().letters().get(index) else {
        return Err(EngineError::StaleState(format!(
            "letter index {index} is past the catalog"
        )));
    };

    match phase {
        LetterPhase::AwaitingLetter => {
            if input == letter.glyph {
                session.mode = Mode::LearnLetters {
                    phase: LetterPhase::AwaitingWord,
                };
                Ok(vec![
                    Reply::text(msg::LETTER_CORRECT),
                    Reply::text(format!(
                        "➡️ Write the word with {}: {}",
                        letter.glyph, letter.example_word
                    )),
                ])
            } else {
                Ok(vec![Reply::text(msg::LETTER_WRONG)])
            }
        }
        LetterPhase::AwaitingWord => {
            if input == letter.example_word {
                engine
                    .store()
                    .apply_delta(
                        user,
                        ProgressDelta {
                            letter_index: Some(index + 1),
                            ..Default::default()
                        },
                    )
                    .await?;
                let mut replies = vec![Reply::text(msg::WORD_CORRECT)];
                replies.extend(present_from(engine, session, index + 1)?);
                Ok(replies)
            } else {
                Ok(vec![Reply::text(format!(
                    "❌ Not quite. Try again. Write the word: {}",
                    letter.example_word
                ))])
            }
        }
    }
}
