use std::collections::HashSet;

use baeum_core::error::EngineError;
use baeum_core::session::{GameRound, GameWord, Mode, Session};
use baeum_types::{Reply, UserId};

use crate::{Engine, msg};

/// Build a round from the last dictionary selection, deduplicated by word
/// text against the whole learned history, and shuffle it.
pub(crate) async fn begin(
    engine: &Engine,
    user: UserId,
    session: &mut Session,
) -> Result<Vec<Reply>, EngineError> {
    let Some(level) = session.last_dictionary_level else {
        return Ok(vec![Reply::text(msg::CHOOSE_VALID)]);
    };
    let progress = engine.store().get_or_create(user).await?;

    let selection = progress
        .learned
        .iter()
        .filter_map(|id| engine.catalog().word(id))
        .filter(|word| word.level == level);
    let history = progress
        .learned
        .iter()
        .filter_map(|id| engine.catalog().word(id));

    let mut seen: HashSet<&str> = HashSet::new();
    let mut queue: Vec<GameWord> = Vec::new();
    for word in selection.chain(history) {
        if seen.insert(word.text.as_str()) {
            queue.push(GameWord {
                text: word.text.clone(),
                translation: word.translation.clone(),
                level: word.level,
                romanization: word.romanization.clone(),
                examples: word.examples.clone(),
            });
        }
    }

    if queue.is_empty() {
        return Ok(vec![Reply::text(msg::NO_GAME_WORDS)]);
    }
    engine.shuffle(&mut queue);

    let round = GameRound {
        queue,
        cursor: 0,
        streak: 0,
    };
    let replies = vec![
        Reply::text_with(msg::GAME_INTRO, msg::stop_keyboard()),
        prompt(&round),
    ];
    session.mode = Mode::Game(round);
    Ok(replies)
}

fn prompt(round: &GameRound) -> Reply {
    let word = &round.queue[round.cursor];
    Reply::text(format!(
        "Word: {}\n📝 Level: {}\n\n✏️ Write it in Korean:",
        word.translation, word.level
    ))
}

pub(crate) fn grade(
    engine: &Engine,
    session: &mut Session,
    input: &str,
) -> Result<Vec<Reply>, EngineError> {
    let mut round = match &session.mode {
        Mode::Game(round) => round.clone(),
        _ => return Ok(vec![Reply::text(msg::CHOOSE_VALID)]),
    };

    if input.eq_ignore_ascii_case(msg::CMD_STOP) || input == msg::LABEL_STOP {
        return Ok(finish(session, &round));
    }
    let Some(word) = round.queue.get(round.cursor).cloned() else {
        return Ok(finish(session, &round));
    };

    // digits are answers to the quiz, not to the game
    if !input.is_empty() && input.chars().all(|c| c.is_ascii_digit()) {
        return Ok(vec![Reply::text(msg::GAME_WRITE_IN_KOREAN)]);
    }

    let outcome = if input == word.text {
        round.streak += 1;
        let example = engine
            .pick_clone(&word.examples)
            .unwrap_or_else(|| msg::NO_EXAMPLE.to_string());
        Reply::text(format!(
            "✅ Correct! Your streak: {}\n🇰🇷 Answer: {}\n💡 Example: {}",
            round.streak, word.text, example
        ))
    } else {
        let romanization = word
            .romanization
            .clone()
            .unwrap_or_else(|| msg::NO_ROMANIZATION.to_string());
        Reply::text(format!(
            "❌ Wrong. The right answer: {}\n📌 Remember: {} ({})",
            word.text, word.text, romanization
        ))
    };

    round.cursor += 1;
    let mut replies = vec![outcome];
    if round.cursor >= round.queue.len() {
        replies.extend(finish(session, &round));
    } else {
        replies.push(prompt(&round));
        session.mode = Mode::Game(round);
    }
    Ok(replies)
}

/// Close the round: three result tiers, game state dropped, back to menu
fn finish(session: &mut Session, round: &GameRound) -> Vec<Reply> {
    let total = round.queue.len() as u32;
    let correct = round.streak;

    let (emoji, comment) = if correct == total {
        ("🏆", "A perfect result! You're a real polyglot!")
    } else if correct * 5 >= total * 4 {
        ("🎉", "A great result! Almost perfect!")
    } else {
        ("💪", "A good try! Keep practicing!")
    };

    session.reset_to_menu();
    vec![Reply::text_with(
        format!(
            "{emoji} Game over!\n\n📊 Result: {correct} of {total}\n{comment}\n\nPick what's next:"
        ),
        msg::summary_keyboard(),
    )]
}
