//! # Rooms, Users and Lines
//!
//! The domain records the views consume. Nothing in `tui` mutates these;
//! all changes go through `update()` in action.rs.

use chrono::NaiveDateTime;

/// Timestamp format used in the message pane.
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// A participant's privilege level in a room. Picks the nick color in the
/// user list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    Moderator,
    Participant,
    Visitor,
    #[default]
    None,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub nick: String,
    pub role: Role,
    /// Index into the palette's nick colors, used for message attribution.
    pub color: usize,
}

impl User {
    pub fn new(nick: impl Into<String>, role: Role, color: usize) -> Self {
        Self {
            nick: nick.into(),
            role,
            color,
        }
    }
}

/// Activity classification shown in the tab bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoomState {
    #[default]
    Normal,
    /// Something was posted while the room was not current.
    NewMessage,
    /// Someone mentioned our nickname while the room was not current.
    Highlight,
}

/// One entry of a room's scroll-back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// Status text with no author: `[HH:MM:SS] body`
    Info { time: NaiveDateTime, body: String },
    /// A message: `[HH:MM:SS] <author> body`
    Message {
        time: NaiveDateTime,
        author: String,
        body: String,
    },
}

impl Line {
    pub fn info(time: NaiveDateTime, body: impl Into<String>) -> Self {
        Line::Info {
            time,
            body: body.into(),
        }
    }

    pub fn message(time: NaiveDateTime, author: impl Into<String>, body: impl Into<String>) -> Self {
        Line::Message {
            time,
            author: author.into(),
            body: body.into(),
        }
    }

    pub fn time(&self) -> NaiveDateTime {
        match self {
            Line::Info { time, .. } | Line::Message { time, .. } => *time,
        }
    }

    /// The `[HH:MM:SS] ` prefix every line starts with.
    pub fn timestamp(&self) -> String {
        format!("[{}] ", self.time().format(TIME_FORMAT))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    /// Room identity. Two rooms are the same room iff their names match.
    pub name: String,
    /// Tab number shown in the tab bar.
    pub nb: usize,
    pub topic: String,
    pub users: Vec<User>,
    pub lines: Vec<Line>,
    pub state: RoomState,
}

impl Room {
    pub fn new(name: impl Into<String>, nb: usize) -> Self {
        Self {
            name: name.into(),
            nb,
            topic: String::new(),
            users: Vec::new(),
            lines: Vec::new(),
            state: RoomState::Normal,
        }
    }

    /// Same room, regardless of contents.
    pub fn is(&self, other: &Room) -> bool {
        self.name == other.name
    }

    pub fn find_user(&self, nick: &str) -> Option<&User> {
        self.users.iter().find(|u| u.nick == nick)
    }
}
