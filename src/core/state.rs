//! # Application State
//!
//! Core chat state for Chatpane. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── rooms: Vec<Room>       // ordered current-first
//! ├── nickname: String       // our own nick
//! └── should_quit: bool      // set by /quit
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use chrono::{Local, NaiveDateTime};
use log::info;

use crate::core::config::ResolvedConfig;
use crate::core::room::{Line, Role, Room, RoomState, User};

/// Name of the status room that always exists and can't be left.
pub const INFO_ROOM: &str = "info";

pub struct App {
    /// Invariant: never empty, `rooms[0]` is the current room.
    pub rooms: Vec<Room>,
    pub nickname: String,
    pub should_quit: bool,
}

pub(crate) fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

impl App {
    pub fn new(nickname: String) -> Self {
        let mut info_room = Room::new(INFO_ROOM, 0);
        info_room.topic = "Chatpane - type /join <room> to start".to_string();
        info_room
            .lines
            .push(Line::info(now(), format!("Welcome to Chatpane, {nickname}!")));
        Self {
            rooms: vec![info_room],
            nickname,
            should_quit: false,
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        let mut app = Self::new(config.nickname.clone());
        for room in &config.rooms {
            app.join(room);
        }
        app
    }

    pub fn current(&self) -> &Room {
        &self.rooms[0]
    }

    pub fn current_mut(&mut self) -> &mut Room {
        &mut self.rooms[0]
    }

    pub fn room_mut(&mut self, name: &str) -> Option<&mut Room> {
        self.rooms.iter_mut().find(|r| r.name == name)
    }

    /// Smallest tab number not used by any open room.
    fn next_free_nb(&self) -> usize {
        (1..)
            .find(|nb| self.rooms.iter().all(|r| r.nb != *nb))
            .unwrap_or(self.rooms.len())
    }

    /// Make `name` the current room, creating it if needed.
    ///
    /// Returns `true` when a new room was created.
    pub fn join(&mut self, name: &str) -> bool {
        if let Some(idx) = self.rooms.iter().position(|r| r.name == name) {
            self.rooms.rotate_left(idx);
            self.current_mut().state = RoomState::Normal;
            return false;
        }

        let mut room = Room::new(name, self.next_free_nb());
        room.users.push(User::new(self.nickname.clone(), Role::Moderator, 0));
        room.lines
            .push(Line::info(now(), format!("You joined {name}")));
        info!("Joined room {} as tab {}", name, room.nb);
        self.rooms.insert(0, room);
        let joined = format!("{} joined {}", self.nickname, name);
        self.push_line(INFO_ROOM, Line::info(now(), joined));
        true
    }

    /// Leave the current room. The info room can't be left.
    ///
    /// Returns the name of the room that was left.
    pub fn part(&mut self) -> Option<String> {
        if self.current().name == INFO_ROOM {
            return None;
        }
        let room = self.rooms.remove(0);
        self.current_mut().state = RoomState::Normal;
        info!("Left room {}", room.name);
        Some(room.name)
    }

    pub fn next_room(&mut self) {
        self.rooms.rotate_left(1);
        self.current_mut().state = RoomState::Normal;
    }

    pub fn prev_room(&mut self) {
        self.rooms.rotate_right(1);
        self.current_mut().state = RoomState::Normal;
    }

    /// Append a line to a room, flagging activity when the room is in the
    /// background.
    pub fn push_line(&mut self, room_name: &str, line: Line) {
        let is_current = self.current().name == room_name;
        let mentions_me = match &line {
            Line::Message { author, body, .. } => {
                *author != self.nickname && body.contains(self.nickname.as_str())
            }
            Line::Info { .. } => false,
        };
        let Some(room) = self.room_mut(room_name) else {
            return;
        };
        room.lines.push(line);
        if is_current {
            return;
        }
        if mentions_me {
            room.state = RoomState::Highlight;
        } else if room.state == RoomState::Normal {
            room.state = RoomState::NewMessage;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{at, test_app};

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.rooms.len(), 1);
        assert_eq!(app.current().name, INFO_ROOM);
        assert_eq!(app.current().nb, 0);
        assert!(!app.should_quit);
    }

    #[test]
    fn join_creates_room_and_makes_it_current() {
        let mut app = test_app();
        assert!(app.join("lobby"));
        assert_eq!(app.current().name, "lobby");
        assert_eq!(app.current().nb, 1);
        assert_eq!(app.current().users[0].nick, "me");
        // the info room heard about it while in the background
        assert_eq!(app.rooms[1].state, RoomState::NewMessage);
    }

    #[test]
    fn join_existing_room_switches_without_duplicating() {
        let mut app = test_app();
        app.join("a");
        app.join("b");
        assert!(!app.join("a"));
        assert_eq!(app.rooms.len(), 3);
        assert_eq!(app.current().name, "a");
    }

    #[test]
    fn tab_numbers_are_reused_after_part() {
        let mut app = test_app();
        app.join("a");
        app.join("b");
        app.join("a");
        assert_eq!(app.part().as_deref(), Some("a"));
        app.join("c");
        assert_eq!(app.current().nb, 1);
    }

    #[test]
    fn info_room_cannot_be_left() {
        let mut app = test_app();
        assert!(app.part().is_none());
        assert_eq!(app.rooms.len(), 1);
    }

    #[test]
    fn switching_rooms_rotates_and_clears_state() {
        let mut app = test_app();
        app.join("a");
        app.join("b");
        // order: b, a, info
        app.next_room();
        assert_eq!(app.current().name, "a");
        app.prev_room();
        app.prev_room();
        assert_eq!(app.current().name, "info");
        assert_eq!(app.current().state, RoomState::Normal);
    }

    #[test]
    fn mention_in_background_room_highlights() {
        let mut app = test_app();
        app.join("a");
        app.join("b");
        app.push_line("a", Line::message(at(1, 2, 3), "alice", "hey me, look"));
        assert_eq!(app.rooms[1].state, RoomState::Highlight);
        // a later plain message doesn't downgrade the highlight
        app.push_line("a", Line::message(at(1, 2, 4), "alice", "anyone?"));
        assert_eq!(app.rooms[1].state, RoomState::Highlight);
    }

    #[test]
    fn lines_in_current_room_leave_state_alone() {
        let mut app = test_app();
        app.join("a");
        app.push_line("a", Line::message(at(1, 2, 3), "alice", "hello me"));
        assert_eq!(app.current().state, RoomState::Normal);
    }
}
