use std::fmt;

use serde::{Deserialize, Serialize};

/// Transport-assigned chat identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stable catalog word identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WordId(pub String);

impl WordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Vocabulary difficulty bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Level {
    L1,
    L2,
    L3,
    L4,
    L5,
    L6,
}

impl Level {
    /// Parse a level from user input ("1".."6")
    pub fn from_input(s: &str) -> Option<Self> {
        s.trim().parse::<u8>().ok().and_then(|n| Self::try_from(n).ok())
    }

    pub fn as_u8(&self) -> u8 {
        match self {
            Level::L1 => 1,
            Level::L2 => 2,
            Level::L3 => 3,
            Level::L4 => 4,
            Level::L5 => 5,
            Level::L6 => 6,
        }
    }

    /// All levels in ascending order
    pub fn all() -> [Level; 6] {
        [
            Level::L1,
            Level::L2,
            Level::L3,
            Level::L4,
            Level::L5,
            Level::L6,
        ]
    }

    pub fn description(&self) -> &'static str {
        match self {
            Level::L1 => "Level 1 (Beginner)",
            Level::L2 => "Level 2 (Elementary)",
            Level::L3 => "Level 3 (Pre-intermediate)",
            Level::L4 => "Level 4 (Intermediate)",
            Level::L5 => "Level 5 (Upper intermediate)",
            Level::L6 => "Level 6 (Advanced)",
        }
    }
}

impl TryFrom<u8> for Level {
    type Error = String;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(Level::L1),
            2 => Ok(Level::L2),
            3 => Ok(Level::L3),
            4 => Ok(Level::L4),
            5 => Ok(Level::L5),
            6 => Ok(Level::L6),
            other => Err(format!("level out of range: {other}")),
        }
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> u8 {
        level.as_u8()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

/// One inbound text event from the transport
#[derive(Debug, Clone)]
pub struct InboundMessage {
    pub user: UserId,
    pub text: String,
}

/// Reply keyboard layout, rows of button labels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyboard(pub Vec<Vec<String>>);

impl Keyboard {
    pub fn rows<R, L>(rows: R) -> Self
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = L>,
        L: Into<String>,
    {
        Self(
            rows.into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        )
    }
}

/// One presentation instruction emitted by the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text {
        body: String,
        keyboard: Option<Keyboard>,
    },
    Image {
        url: String,
        caption: String,
        keyboard: Option<Keyboard>,
    },
}

impl Reply {
    pub fn text(body: impl Into<String>) -> Self {
        Reply::Text {
            body: body.into(),
            keyboard: None,
        }
    }

    pub fn text_with(body: impl Into<String>, keyboard: Keyboard) -> Self {
        Reply::Text {
            body: body.into(),
            keyboard: Some(keyboard),
        }
    }

    pub fn image(url: impl Into<String>, caption: impl Into<String>) -> Self {
        Reply::Image {
            url: url.into(),
            caption: caption.into(),
            keyboard: None,
        }
    }

    /// Message body (caption for images)
    pub fn body(&self) -> &str {
        match self {
            Reply::Text { body, .. } => body,
            Reply::Image { caption, .. } => caption,
        }
    }

    pub fn keyboard(&self) -> Option<&Keyboard> {
        match self {
            Reply::Text { keyboard, .. } | Reply::Image { keyboard, .. } => keyboard.as_ref(),
        }
    }
}
