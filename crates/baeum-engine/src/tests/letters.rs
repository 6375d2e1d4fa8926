use baeum_core::session::{LetterPhase, Mode};
use baeum_types::UserId;

use super::support::{self, TestCatalog};

fn catalog() -> TestCatalog {
    TestCatalog {
        letters: (0..3).map(support::letter).collect(),
        categories: vec![
            support::category("First steps", 0),
            support::category("Getting harder", 2),
        ],
        words: vec![],
    }
}

#[tokio::test]
async fn entering_the_sequencer_presents_letter_and_intro() {
    let (engine, _store) = support::engine(catalog());
    let user = UserId(1);

    let replies = engine.handle_event(user, "Study letters").await;
    let text = support::bodies(&replies);
    assert!(text.contains("intro: First steps"));
    assert!(text.contains("Study this letter: g0"));
    assert!(text.contains("Example word: gw0"));

    let mode = engine.inspect(user, |s| s.mode.clone()).await.unwrap();
    assert_eq!(
        mode,
        Mode::LearnLetters {
            phase: LetterPhase::AwaitingLetter
        }
    );
}

#[tokio::test]
async fn wrong_input_never_advances_the_letter_index() {
    let (engine, store) = support::engine(catalog());
    let user = UserId(2);

    engine.handle_event(user, "Study letters").await;
    for _ in 0..3 {
        let replies = engine.handle_event(user, "nope").await;
        assert!(support::bodies(&replies).contains("Not quite"));
    }
    assert_eq!(support::progress(&store, user).await.current_letter_index, 0);

    // the right glyph, then a wrong word: still no advance
    engine.handle_event(user, "g0").await;
    engine.handle_event(user, "wrong word").await;
    assert_eq!(support::progress(&store, user).await.current_letter_index, 0);
}

#[tokio::test]
async fn glyph_then_word_advances_by_exactly_one() {
    let (engine, store) = support::engine(catalog());
    let user = UserId(3);

    engine.handle_event(user, "Study letters").await;
    let replies = engine.handle_event(user, "g0").await;
    assert!(support::bodies(&replies).contains("write the example word"));

    let replies = engine.handle_event(user, "gw0").await;
    let text = support::bodies(&replies);
    assert!(text.contains("✅ Correct! 🎉"));
    // the next letter comes right away, without its own category intro
    assert!(text.contains("Study this letter: g1"));
    assert!(!text.contains("intro:"));
    assert_eq!(support::progress(&store, user).await.current_letter_index, 1);
}

#[tokio::test]
async fn category_intro_shows_again_at_the_next_boundary() {
    let (engine, _store) = support::engine(catalog());
    let user = UserId(4);

    engine.handle_event(user, "Study letters").await;
    engine.handle_event(user, "g0").await;
    engine.handle_event(user, "gw0").await;
    engine.handle_event(user, "g1").await;
    let replies = engine.handle_event(user, "gw1").await;

    let text = support::bodies(&replies);
    assert!(text.contains("intro: Getting harder"));
    assert!(text.contains("Study this letter: g2"));
}

#[tokio::test]
async fn walking_off_the_end_completes_and_returns_to_menu() {
    let (engine, store) = support::engine(catalog());
    let user = UserId(5);

    engine.handle_event(user, "Study letters").await;
    for index in 0..3 {
        engine.handle_event(user, &format!("g{index}")).await;
        engine.handle_event(user, &format!("gw{index}")).await;
    }

    assert_eq!(support::progress(&store, user).await.current_letter_index, 3);
    let mode = engine.inspect(user, |s| s.mode.clone()).await.unwrap();
    assert_eq!(mode, Mode::Menu { prompt: None });

    // re-entering from the menu reports completion again
    let replies = engine.handle_event(user, "Study letters").await;
    assert!(support::bodies(&replies).contains("every letter"));
}

#[tokio::test]
async fn lookup_answers_without_touching_progress() {
    let (engine, store) = support::engine(catalog());
    let user = UserId(6);

    engine.handle_event(user, "Study letters").await;
    let replies = engine.handle_event(user, "What letter?").await;
    assert!(support::bodies(&replies).contains("Send me a letter"));

    let replies = engine.handle_event(user, "g1").await;
    let text = support::bodies(&replies);
    assert!(text.contains("Letter: g1"));
    assert!(text.contains("Example word: gw1"));

    // repeated lookups keep working; unknown glyphs are reported
    let replies = engine.handle_event(user, "zz").await;
    assert!(support::bodies(&replies).contains("don't know that letter"));

    assert_eq!(support::progress(&store, user).await.current_letter_index, 0);
}
