use baeum_core::error::EngineError;
use baeum_core::progress::ProgressDelta;
use baeum_core::session::{Mode, PendingChoice, Session, VocabSession};
use baeum_types::{Level, Reply, UserId, WordId};

use crate::handlers::spelling;
use crate::{Engine, msg};

/// Open the sequencer for one level: filter out learned words, resume from
/// the persisted cursor, and present the first question.
pub(crate) async fn begin(
    engine: &Engine,
    user: UserId,
    session: &mut Session,
    level: Level,
) -> Result<Vec<Reply>, EngineError> {
    let progress = engine.store().get_or_create(user).await?;
    let all = engine.catalog().words_at_level(level);

    if all.is_empty() {
        session.reset_to_menu();
        return Ok(vec![Reply::text_with(
            format!("There are no words at level {level} yet. 😢"),
            msg::main_keyboard(),
        )]);
    }

    let queue: Vec<WordId> = all
        .iter()
        .filter(|word| !progress.has_learned(&word.id))
        .map(|word| word.id.clone())
        .collect();

    if queue.is_empty() {
        session.reset_to_menu();
        return Ok(vec![Reply::text_with(
            format!("You've already learned every word at level {level}! 🎉"),
            msg::main_keyboard(),
        )]);
    }

    let stored = progress.level_cursor.get(&level).copied().unwrap_or(0);
    let cursor = if stored < queue.len() { stored } else { 0 };

    let mut vocab = VocabSession {
        level,
        queue,
        cursor,
        pending: None,
        words_since_check: 0,
    };
    let Some(replies) = present_word(engine, &mut vocab)? else {
        return Ok(finish_level(session, vocab.level));
    };
    session.mode = Mode::LearnWords(vocab);
    Ok(replies)
}

/// Present the word under the cursor and record the pending question.
/// `None` means the queue is exhausted.
pub(crate) fn present_word(
    engine: &Engine,
    vocab: &mut VocabSession,
) -> Result<Option<Vec<Reply>>, EngineError> {
    let Some(id) = vocab.queue.get(vocab.cursor) else {
        return Ok(None);
    };
    let word = engine.catalog().word(id).ok_or_else(|| {
        EngineError::StaleState(format!("word {id} vanished from the catalog"))
    })?;

    // Distractors come from the rest of the queue; a thin level falls back
    // to the full same-level set
    let mut distractors: Vec<String> = Vec::new();
    for other in vocab.queue.iter().filter(|other| *other != id) {
        if let Some(entry) = engine.catalog().word(other) {
            if entry.translation != word.translation
                && !distractors.contains(&entry.translation)
            {
                distractors.push(entry.translation.clone());
            }
        }
    }
    if distractors.len() < 2 {
        for entry in engine.catalog().words_at_level(vocab.level) {
            if entry.translation != word.translation
                && !distractors.contains(&entry.translation)
            {
                distractors.push(entry.translation.clone());
            }
        }
    }
    engine.shuffle(&mut distractors);
    distractors.truncate(2);

    let mut options = vec![word.translation.clone()];
    options.extend(distractors);
    engine.shuffle(&mut options);

    vocab.pending = Some(PendingChoice {
        correct: word.translation.clone(),
        options: options.clone(),
    });

    let mut replies = Vec::new();
    let caption = format!("Study this word: {}", word.text);
    match &word.image {
        Some(url) => replies.push(Reply::image(url.clone(), caption)),
        None => replies.push(Reply::text(caption)),
    }

    let listing = options
        .iter()
        .enumerate()
        .map(|(index, option)| format!("{}. {}", index + 1, option))
        .collect::<Vec<_>>()
        .join("\n");
    replies.push(Reply::text_with(
        format!(
            "Word: {}\n\nOptions:\n{}\n\nPick the right translation (send the number) or send \
             'exit'.\n\nProgress: {} of {} 🚀",
            word.text,
            listing,
            vocab.cursor + 1,
            vocab.queue.len()
        ),
        msg::options_keyboard(options.len()),
    ));
    Ok(Some(replies))
}

/// Grade one multiple-choice answer.
///
/// The session is mutated only after the store has accepted the delta, so
/// a failed write leaves the question retryable.
pub(crate) async fn grade(
    engine: &Engine,
    user: UserId,
    session: &mut Session,
    input: &str,
) -> Result<Vec<Reply>, EngineError> {
    let mut vocab = match &session.mode {
        Mode::LearnWords(vocab) => vocab.clone(),
        _ => return Ok(vec![Reply::text(msg::CHOOSE_VALID)]),
    };

    let Some(pending) = vocab.pending.clone() else {
        // a recreated session can land here without a question; re-present
        return match present_word(engine, &mut vocab)? {
            Some(replies) => {
                session.mode = Mode::LearnWords(vocab);
                Ok(replies)
            }
            None => Ok(finish_level(session, vocab.level)),
        };
    };

    let choice = input
        .parse::<usize>()
        .ok()
        .filter(|n| (1..=pending.options.len()).contains(n));
    let Some(choice) = choice else {
        return Ok(vec![Reply::text(msg::PICK_A_NUMBER)]);
    };

    if pending.options[choice - 1] != pending.correct {
        let hint = pending.correct.chars().next().unwrap_or('?');
        engine
            .store()
            .apply_delta(user, ProgressDelta::score(-5))
            .await?;
        return Ok(vec![Reply::text(format!(
            "❌ Wrong. Hint: the answer starts with '{hint}'.\nTry again:"
        ))]);
    }

    let learned_id = vocab.queue[vocab.cursor].clone();
    let next_cursor = vocab.cursor + 1;
    let progress = engine
        .store()
        .apply_delta(
            user,
            ProgressDelta {
                score: 10,
                learned_insert: Some(learned_id),
                letter_index: None,
                level_cursor: Some((vocab.level, next_cursor)),
            },
        )
        .await?;

    vocab.cursor = next_cursor;
    vocab.pending = None;
    vocab.words_since_check += 1;

    let mut replies = vec![Reply::text(format!(
        "✅ Correct! The word is now in your dictionary.\n💯 Your score: {} points.",
        progress.score
    ))];

    if vocab.words_since_check >= engine.config().spelling_interval {
        vocab.words_since_check = 0;
        if let Some((probe, probe_replies)) = spelling::start(engine, &progress) {
            session.mode = Mode::SpellingCheck {
                probe,
                resume: vocab,
            };
            replies.extend(probe_replies);
            return Ok(replies);
        }
        // nothing in the recent window resolves anymore; carry on
        tracing::debug!(user = %user, "spelling probe skipped, window unresolvable");
    }

    match present_word(engine, &mut vocab)? {
        Some(next) => {
            session.mode = Mode::LearnWords(vocab);
            replies.extend(next);
        }
        None => replies.extend(finish_level(session, vocab.level)),
    }
    Ok(replies)
}

pub(crate) fn finish_level(session: &mut Session, level: Level) -> Vec<Reply> {
    session.reset_to_menu();
    vec![Reply::text_with(
        format!("You've finished every word at level {level}! 🎉"),
        msg::main_keyboard(),
    )]
}
