use baeum_types::Keyboard;

// Commands recognized from any mode
pub(crate) const CMD_EXIT: &str = "exit";
pub(crate) const CMD_STOP: &str = "stop";

// Button labels
pub(crate) const LABEL_HANGUL: &str = "Hangul";
pub(crate) const LABEL_TOPIK: &str = "TOPIK prep";
pub(crate) const LABEL_DICTIONARY: &str = "My dictionary";
pub(crate) const LABEL_LEARN_WORDS: &str = "Learn new words";
pub(crate) const LABEL_STUDY_LETTERS: &str = "Study letters";
pub(crate) const LABEL_WHAT_LETTER: &str = "What letter?";
pub(crate) const LABEL_PLAY: &str = "Play";
pub(crate) const LABEL_PLAY_AGAIN: &str = "Play again 🔄";
pub(crate) const LABEL_BACK: &str = "Back 🔙";
pub(crate) const LABEL_STOP: &str = "Stop 🛑";
pub(crate) const LABEL_EXIT: &str = "Exit";

// Fixed replies
pub(crate) const BACK_IN_MENU: &str = "You're back in the main menu. Pick what interests you: 👇";
pub(crate) const CHOOSE_VALID: &str = "Please pick one of the options or send 'exit'.";
pub(crate) const PICK_A_NUMBER: &str = "Please send the number of one of the options.";
pub(crate) const RETRY_LATER: &str =
    "⚠️ Something went wrong while loading the materials. Please try again later.";
pub(crate) const STALE_RESET: &str =
    "That material is no longer available, so I've brought you back to the menu.";

pub(crate) const WELCOME_INTRO: &str = "Hi! 👋\n\nWelcome to baeum, your personal companion for \
learning Korean! 🇰🇷🎉\nHere you can study Hangul from the very first letter, grow your \
vocabulary level by level, and keep every learned word in your own dictionary.";
pub(crate) const WELCOME_PICK: &str =
    "Where shall we start? 👇\nPick a category and we'll begin your journey into Korean!";

pub(crate) const HANGUL_INTRO: &str = "🌟 Welcome to the Hangul section! 🎓\n\nHere you can:\n\n\
1️⃣ Study letters: walk the whole alphabet from the first letter to the last, with \
pronunciation, example words, and quirks.\n2️⃣ What letter?: send any letter and I'll tell you \
everything about it.";

pub(crate) const PHRASES_STUB: &str =
    "Everyday phrases are great! There's nothing here yet, check back soon. 💬";
pub(crate) const GRAMMAR_STUB: &str =
    "Grammar is the foundation! 📘 There's nothing here yet, check back soon.";
pub(crate) const TOPIK_STUB: &str =
    "TOPIK preparation! Good luck with your Korean! 📚💪 There's nothing here yet.";

pub(crate) const LETTERS_DONE: &str =
    "You've studied every letter of the alphabet! 🎉 Back to the main menu.";
pub(crate) const TYPE_THE_LETTER: &str = "➡️ Now type this letter:";
pub(crate) const LETTER_CORRECT: &str = "✅ Correct! Now write the example word.";
pub(crate) const LETTER_WRONG: &str = "❌ Not quite. Try again. Type the letter:";
pub(crate) const WORD_CORRECT: &str = "✅ Correct! 🎉";

pub(crate) const ASK_FOR_LETTER: &str =
    "Send me a letter and I'll show you everything about it:";
pub(crate) const LETTER_NOT_FOUND: &str = "I don't know that letter. Try another one.";

pub(crate) const PICK_LEARN_LEVEL: &str = "Pick a word level or send 'exit':";
pub(crate) const PICK_DICTIONARY_LEVEL: &str = "Pick a level to look through:";
pub(crate) const NO_LEARNED_WORDS: &str = "You haven't learned a single word yet. 😢";

pub(crate) const SPELLING_RIGHT: &str = "✅ Correct! Well done!";

pub(crate) const GAME_INTRO: &str = "🎮 Let's play Translator!\n\n❓ How it works:\n\
1. I show a word in English\n2. You write it in Korean\n3. We check right away!\n\n\
🏆 Try to get as many right as you can!\nSend 'stop' to finish the round.";
pub(crate) const GAME_WRITE_IN_KOREAN: &str = "✏️ Write the word in Korean:";
pub(crate) const NO_GAME_WORDS: &str = "❌ No words to play with. Learn a few first.";
pub(crate) const NO_EXAMPLE: &str = "(no example yet)";
pub(crate) const NO_ROMANIZATION: &str = "no romanization yet";

pub(crate) const SCORE_RESET: &str = "Your score is back to zero! 🎉";
pub(crate) const DICTIONARY_CLEARED: &str = "Your dictionary is empty again. Fresh start! 🌱";
pub(crate) const UNSUBSCRIBED: &str = "You've been unsubscribed from the daily digest. 😢";

pub(crate) fn main_keyboard() -> Keyboard {
    Keyboard::rows(vec![
        vec![LABEL_HANGUL, LABEL_TOPIK],
        vec![LABEL_DICTIONARY, LABEL_LEARN_WORDS],
    ])
}

pub(crate) fn hangul_keyboard() -> Keyboard {
    Keyboard::rows(vec![
        vec![LABEL_STUDY_LETTERS, LABEL_WHAT_LETTER],
        vec![LABEL_EXIT],
    ])
}

pub(crate) fn levels_keyboard() -> Keyboard {
    Keyboard::rows(vec![
        vec!["1", "2", "3"],
        vec!["4", "5", "6"],
        vec![LABEL_EXIT],
    ])
}

pub(crate) fn options_keyboard(count: usize) -> Keyboard {
    Keyboard::rows(vec![
        (1..=count).map(|n| n.to_string()).collect::<Vec<_>>(),
        vec![LABEL_EXIT.to_string()],
    ])
}

pub(crate) fn play_keyboard() -> Keyboard {
    Keyboard::rows(vec![vec![LABEL_PLAY, LABEL_BACK]])
}

pub(crate) fn stop_keyboard() -> Keyboard {
    Keyboard::rows(vec![vec![LABEL_STOP]])
}

pub(crate) fn summary_keyboard() -> Keyboard {
    Keyboard::rows(vec![vec![LABEL_PLAY_AGAIN, LABEL_EXIT]])
}
