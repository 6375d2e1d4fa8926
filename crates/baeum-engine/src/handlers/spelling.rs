use baeum_core::error::EngineError;
use baeum_core::progress::UserProgress;
use baeum_core::session::{Mode, Session, SpellingProbe};
use baeum_types::Reply;

use crate::handlers::words;
use crate::{Engine, msg};

/// Pick a probe target from the recently learned window.
///
/// Returns `None` when nothing in the window resolves in the catalog
/// anymore; the caller then keeps the vocabulary flow going.
pub(crate) fn start(
    engine: &Engine,
    progress: &UserProgress,
) -> Option<(SpellingProbe, Vec<Reply>)> {
    let window = progress.recent_learned(engine.config().recent_window);
    let candidates: Vec<_> = window
        .iter()
        .filter_map(|id| engine.catalog().word(id))
        .collect();
    let word = engine.pick_clone(&candidates)?;

    let probe = SpellingProbe {
        word_id: word.id.clone(),
        word: word.text.clone(),
        translation: word.translation.clone(),
        image: word.image.clone(),
    };
    let reply = match &probe.image {
        Some(url) => Reply::image(url.clone(), "📝 Write this word in Korean:"),
        None => Reply::text(format!(
            "📝 Word: {}\nWrite it in Korean:",
            probe.translation
        )),
    };
    Some((probe, vec![reply]))
}

/// Compare the answer verbatim, then hand control back to the vocabulary
/// sequencer at the cursor the probe interrupted. The probe never consumes
/// a catalog word.
pub(crate) fn grade(
    engine: &Engine,
    session: &mut Session,
    input: &str,
) -> Result<Vec<Reply>, EngineError> {
    let (probe, resume) = match &session.mode {
        Mode::SpellingCheck { probe, resume } => (probe.clone(), resume.clone()),
        _ => return Ok(vec![Reply::text(msg::CHOOSE_VALID)]),
    };

    let mut replies = if input == probe.word {
        vec![Reply::text(msg::SPELLING_RIGHT)]
    } else {
        vec![Reply::text(format!(
            "❌ Not this time. The right answer: {}",
            probe.word
        ))]
    };

    let mut vocab = resume;
    match words::present_word(engine, &mut vocab)? {
        Some(next) => {
            session.mode = Mode::LearnWords(vocab);
            replies.extend(next);
        }
        None => replies.extend(words::finish_level(session, vocab.level)),
    }
    Ok(replies)
}
