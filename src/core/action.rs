//! # Actions
//!
//! Everything that can happen in Chatpane becomes an `Action`.
//! User presses Enter? That's `Action::Submit(text)`.
//! User presses Ctrl+N? That's `Action::NextRoom`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` telling the adapter what else to do
//! (create a message window, quit, ...). No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::debug;

use crate::core::room::Line;
use crate::core::state::{App, INFO_ROOM, now};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Text committed from the input line (message or `/command`).
    Submit(String),
    NextRoom,
    PrevRoom,
    Quit,
}

/// Side effects the adapter has to carry out after `update()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// A room was created and needs its message window.
    RoomJoined(String),
    /// A room was closed; its message window can go.
    RoomLeft(String),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::Submit(text) => submit(app, &text),
        Action::NextRoom => {
            app.next_room();
            Effect::None
        }
        Action::PrevRoom => {
            app.prev_room();
            Effect::None
        }
        Action::Quit => {
            app.should_quit = true;
            Effect::Quit
        }
    }
}

fn submit(app: &mut App, text: &str) -> Effect {
    if text.trim().is_empty() {
        return Effect::None;
    }

    let Some(command_line) = text.strip_prefix('/') else {
        let current = app.current().name.clone();
        let nick = app.nickname.clone();
        app.push_line(&current, Line::message(now(), nick, text));
        return Effect::None;
    };

    let (command, arg) = match command_line.split_once(' ') {
        Some((c, a)) => (c, a.trim()),
        None => (command_line, ""),
    };

    match command {
        "join" if !arg.is_empty() => {
            if app.join(arg) {
                Effect::RoomJoined(arg.to_string())
            } else {
                Effect::None
            }
        }
        "part" => match app.part() {
            Some(name) => Effect::RoomLeft(name),
            None => {
                app.push_line(INFO_ROOM, Line::info(now(), "The info room can't be left"));
                Effect::None
            }
        },
        "topic" => {
            app.current_mut().topic = arg.to_string();
            let current = app.current().name.clone();
            let body = format!("Topic set to: {arg}");
            app.push_line(&current, Line::info(now(), body));
            Effect::None
        }
        "quit" => update(app, Action::Quit),
        _ => {
            let current = app.current().name.clone();
            let body = format!("Unknown command: /{command_line}");
            app.push_line(&current, Line::info(now(), body));
            Effect::None
        }
    }
}
