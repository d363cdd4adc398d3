//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use chrono::{NaiveDate, NaiveDateTime};

use crate::core::room::{Line, Role, Room, User};
use crate::core::state::App;

/// A fixed timestamp on an arbitrary day.
pub fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 14)
        .and_then(|d| d.and_hms_opt(h, m, s))
        .expect("valid test timestamp")
}

/// Creates a test App with the default info room and nickname "me".
pub fn test_app() -> App {
    App::new("me".to_string())
}

/// A room with two users and a couple of lines.
pub fn sample_room(name: &str, nb: usize) -> Room {
    let mut room = Room::new(name, nb);
    room.topic = format!("Welcome to {name}");
    room.users.push(User::new("alice", Role::Moderator, 1));
    room.users.push(User::new("bob", Role::Participant, 2));
    room.lines.push(Line::info(at(9, 0, 0), "You joined"));
    room.lines.push(Line::message(at(9, 0, 5), "alice", "hi bob"));
    room
}
