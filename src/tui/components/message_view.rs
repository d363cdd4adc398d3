//! # MessageView Component
//!
//! The message pane. Each room gets its own `MessageWindow` so its
//! scroll-back position survives switching rooms.
//!
//! ## Architecture
//!
//! `MessageView` owns a map from room name to `MessageWindow`. Windows are
//! created explicitly with [`MessageView::ensure_room`] when a room is
//! first seen, and all of them are rebound on resize. Rendering a room that
//! was never registered draws nothing.
//!
//! Every render replays the room's whole line list: lines are wrapped at the
//! pane width and the last `height` rows are shown, so the newest line is
//! always at the bottom once the pane is full. `scroll_back` lifts that
//! bottom edge by a number of rows.
//!
//! ## Line format
//!
//! ```text
//! [12:00:01] status text            (Line::Info, body in the info color)
//! [12:00:02] <alice> hello          (Line::Message, nick in the user's color)
//! ```

use std::collections::HashMap;

use log::{debug, warn};
use ratatui::buffer::Buffer;
use ratatui::style::Style;
use unicode_width::UnicodeWidthChar;

use crate::core::room::{Line, Room};
use crate::tui::component::View;
use crate::tui::palette::Palette;
use crate::tui::window::{ScrollWindow, skip_failed};

/// One screen row: styled pieces laid out left to right.
type Row = Vec<(String, Style)>;

/// Region and scroll state of one room's pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageWindow {
    pub window: ScrollWindow,
    /// Rows between the bottom of the pane and the newest row. 0 = pinned.
    pub scroll_back: usize,
}

pub struct MessageView {
    /// Geometry every room window is bound to
    window: ScrollWindow,
    rooms: HashMap<String, MessageWindow>,
}

impl MessageView {
    pub fn new(window: ScrollWindow) -> Self {
        Self {
            window,
            rooms: HashMap::new(),
        }
    }

    /// Create the window for `room` if it doesn't have one yet.
    ///
    /// Returns `true` if a window was created.
    pub fn ensure_room(&mut self, room: &str) -> bool {
        if self.rooms.contains_key(room) {
            return false;
        }
        debug!("Creating message window for {}", room);
        self.rooms.insert(
            room.to_string(),
            MessageWindow {
                window: self.window,
                scroll_back: 0,
            },
        );
        true
    }

    pub fn remove_room(&mut self, room: &str) {
        self.rooms.remove(room);
    }

    pub fn room_window(&self, room: &str) -> Option<&MessageWindow> {
        self.rooms.get(room)
    }

    /// Scroll a room's pane toward older lines.
    pub fn scroll_up(&mut self, room: &str, rows: usize) {
        if let Some(win) = self.rooms.get_mut(room) {
            win.scroll_back = win.scroll_back.saturating_add(rows);
        }
    }

    /// Scroll a room's pane toward the newest line.
    pub fn scroll_down(&mut self, room: &str, rows: usize) {
        if let Some(win) = self.rooms.get_mut(room) {
            win.scroll_back = win.scroll_back.saturating_sub(rows);
        }
    }

    pub fn render(&mut self, buf: &mut Buffer, room: &Room, palette: &Palette) {
        if !self.window.visible {
            return;
        }
        let Some(win) = self.rooms.get_mut(&room.name) else {
            warn!("No message window for room {}, skipping", room.name);
            return;
        };
        skip_failed(win.window.clear(buf), "message pane clear");

        let width = usize::from(win.window.width);
        let height = usize::from(win.window.height);
        if width == 0 || height == 0 {
            return;
        }

        let rows: Vec<Row> = room
            .lines
            .iter()
            .flat_map(|line| wrap(line_pieces(line, room, palette), width))
            .collect();

        // Clamp here: the row count is only known once the lines are wrapped
        win.scroll_back = win.scroll_back.min(rows.len().saturating_sub(height));
        let end = rows.len() - win.scroll_back;
        let start = end.saturating_sub(height);

        for (r, row) in (0u16..).zip(&rows[start..end]) {
            let mut col = 0;
            for (text, style) in row {
                col = skip_failed(win.window.put_str(buf, r, col, text, *style), "message row")
                    .unwrap_or(col);
            }
        }
    }
}

impl View for MessageView {
    fn resize(&mut self, window: ScrollWindow) {
        self.window = window;
        for win in self.rooms.values_mut() {
            win.window = window;
        }
    }

    fn window(&self) -> &ScrollWindow {
        &self.window
    }
}

/// Styled pieces of one line, before wrapping.
fn line_pieces(line: &Line, room: &Room, palette: &Palette) -> Vec<(String, Style)> {
    let timestamp = line.timestamp();
    match line {
        Line::Info { body, .. } => vec![
            (timestamp, Style::default()),
            (body.clone(), palette.info),
        ],
        Line::Message { author, body, .. } => {
            let author_style = room
                .find_user(author)
                .map(|u| palette.nick(u.color))
                .unwrap_or_default();
            vec![
                (format!("{timestamp}<"), Style::default()),
                (author.clone(), author_style),
                ("> ".to_string(), Style::default()),
                (body.clone(), Style::default()),
            ]
        }
    }
}

/// Break pieces into rows of at most `width` columns, splitting anywhere.
fn wrap(pieces: Vec<(String, Style)>, width: usize) -> Vec<Row> {
    let mut rows = Vec::new();
    let mut row = Row::new();
    let mut used = 0;
    for (text, style) in pieces {
        let mut chunk = String::new();
        for ch in text.chars() {
            let w = ch.width().unwrap_or(0);
            if used + w > width && used > 0 {
                if !chunk.is_empty() {
                    row.push((std::mem::take(&mut chunk), style));
                }
                rows.push(std::mem::take(&mut row));
                used = 0;
            }
            chunk.push(ch);
            used += w;
        }
        if !chunk.is_empty() {
            row.push((chunk, style));
        }
    }
    rows.push(row);
    rows
}
