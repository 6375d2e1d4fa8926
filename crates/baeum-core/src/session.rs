use baeum_types::{Level, WordId};

/// Two-phase confirmation inside the letter sequencer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterPhase {
    AwaitingLetter,
    AwaitingWord,
}

/// An outstanding multiple-choice question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingChoice {
    pub correct: String,
    pub options: Vec<String>,
}

/// An in-flight spelling probe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpellingProbe {
    pub word_id: WordId,
    pub word: String,
    pub translation: String,
    pub image: Option<String>,
}

/// The vocabulary walk for one level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabSession {
    pub level: Level,
    pub queue: Vec<WordId>,
    pub cursor: usize,
    pub pending: Option<PendingChoice>,
    /// Correct answers since the last spelling probe
    pub words_since_check: u32,
}

/// A word copied out of the catalog for one game round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameWord {
    pub text: String,
    pub translation: String,
    pub level: Level,
    pub romanization: Option<String>,
    pub examples: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRound {
    pub queue: Vec<GameWord>,
    pub cursor: usize,
    pub streak: u32,
}

/// Which level keyboard the menu is waiting on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelPrompt {
    LearnWords,
    Dictionary,
}

/// The per-user state machine. Each variant carries exactly the transient
/// data valid in that mode, so a pending question and a spelling probe can
/// never coexist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Menu { prompt: Option<LevelPrompt> },
    LearnLetters { phase: LetterPhase },
    LetterLookup,
    LearnWords(VocabSession),
    SpellingCheck { probe: SpellingProbe, resume: VocabSession },
    Game(GameRound),
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Menu { prompt: None }
    }
}

impl Mode {
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Menu { .. } => "menu",
            Mode::LearnLetters { .. } => "learn_letters",
            Mode::LetterLookup => "letter_lookup",
            Mode::LearnWords(_) => "learn_words",
            Mode::SpellingCheck { .. } => "spelling_check",
            Mode::Game(_) => "game",
        }
    }
}

/// Transient per-user session; evictable at any time with only soft loss
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub mode: Mode,
    /// Remembered so a game summary's "play again" can rebuild a round
    pub last_dictionary_level: Option<Level>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all queue/pending/spelling state and land in the menu
    pub fn reset_to_menu(&mut self) {
        self.mode = Mode::Menu { prompt: None };
    }

    pub fn pending(&self) -> Option<&PendingChoice> {
        match &self.mode {
            Mode::LearnWords(vocab) => vocab.pending.as_ref(),
            _ => None,
        }
    }

    pub fn spelling(&self) -> Option<&SpellingProbe> {
        match &self.mode {
            Mode::SpellingCheck { probe, .. } => Some(probe),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_and_probe_are_mutually_exclusive_by_construction() {
        let vocab = VocabSession {
            level: Level::L1,
            queue: vec![WordId::new("w1")],
            cursor: 0,
            pending: Some(PendingChoice {
                correct: "hello".into(),
                options: vec!["hello".into(), "water".into()],
            }),
            words_since_check: 0,
        };

        let session = Session {
            mode: Mode::LearnWords(vocab.clone()),
            last_dictionary_level: None,
        };
        assert!(session.pending().is_some());
        assert!(session.spelling().is_none());

        let session = Session {
            mode: Mode::SpellingCheck {
                probe: SpellingProbe {
                    word_id: WordId::new("w1"),
                    word: "안녕".into(),
                    translation: "hello".into(),
                    image: None,
                },
                resume: VocabSession {
                    pending: None,
                    ..vocab
                },
            },
            last_dictionary_level: None,
        };
        assert!(session.pending().is_none());
        assert!(session.spelling().is_some());
    }

    #[test]
    fn reset_lands_in_plain_menu() {
        let mut session = Session {
            mode: Mode::LetterLookup,
            last_dictionary_level: Some(Level::L2),
        };
        session.reset_to_menu();
        assert_eq!(session.mode, Mode::Menu { prompt: None });
        // soft data survives a reset
        assert_eq!(session.last_dictionary_level, Some(Level::L2));
    }
}
