//! # InputEditor Component
//!
//! The single-line input editor at the bottom of the screen.
//!
//! ## Responsibilities
//!
//! - Capture text input, rejecting input that isn't a single printable char
//! - Handle editing (backspace, delete, cursor movement, home/end)
//! - Scroll horizontally when the text is wider than the line
//! - Recall previously committed lines (Up/Down)
//! - Hand the finished line to the caller on Enter
//!
//! ## State Management
//!
//! The text is the full logical input and is never truncated to the
//! screen. Cursor position and the visible window are encapsulated in
//! `CursorState`; committed lines live in `History`. The visible window is
//! re-derived after every edit and every resize.
//!
//! Browsing history replaces the text with the recalled entry. Editing a
//! recalled entry doesn't leave browsing mode; only committing or stepping
//! past the newest entry does.

mod cursor;
mod history;

use log::debug;
use ratatui::buffer::Buffer;
use ratatui::layout::Position;
use ratatui::style::Style;

use crate::tui::component::{EventHandler, View};
use crate::tui::event::TuiEvent;
use crate::tui::window::{ScrollWindow, skip_failed};

use cursor::CursorState;
use history::{History, Recall};

/// High-level events emitted by the InputEditor
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// User committed the line (Enter pressed). May be empty.
    Submit(String),
    /// Text, cursor or visible window changed
    ContentChanged,
}

pub struct InputEditor {
    text: String,
    cursor: CursorState,
    history: History,
    window: ScrollWindow,
}

impl Default for InputEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl InputEditor {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            cursor: CursorState::new(),
            history: History::new(),
            window: ScrollWindow::hidden(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position, in chars.
    pub fn cursor(&self) -> usize {
        self.cursor.pos
    }

    pub fn history(&self) -> &[String] {
        self.history.entries()
    }

    pub fn is_browsing(&self) -> bool {
        self.history.browsing().is_some()
    }

    /// Length of the text in chars.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Byte offset of the char at `idx` (or the end of the text).
    fn byte_index(&self, idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(idx)
            .map(|(b, _)| b)
            .unwrap_or(self.text.len())
    }

    fn replace_text(&mut self, text: String) {
        self.text = text;
        let len = self.len();
        self.cursor.snap_end(len);
    }

    /// Insert `ch` before the cursor.
    ///
    /// Control chars are not text for a single-line editor and are
    /// rejected without touching the state.
    pub fn insert(&mut self, ch: char) -> bool {
        if ch.is_control() {
            debug!("Rejected control char {:?}", ch);
            return false;
        }
        let at = self.byte_index(self.cursor.pos);
        self.text.insert(at, ch);
        self.cursor.pos += 1;
        let len = self.len();
        self.cursor.follow(len);
        true
    }

    /// Insert an undecoded keystroke.
    ///
    /// The bytes must decode to exactly one printable char; anything else
    /// is dropped with no state change.
    pub fn insert_raw(&mut self, bytes: &[u8]) -> bool {
        let Ok(decoded) = std::str::from_utf8(bytes) else {
            debug!("Dropped undecodable input {:?}", bytes);
            return false;
        };
        let mut chars = decoded.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => self.insert(ch),
            _ => {
                debug!("Dropped input that isn't a single char: {:?}", decoded);
                false
            }
        }
    }

    /// Delete the char under the cursor.
    pub fn delete_forward(&mut self) -> bool {
        if self.cursor.pos >= self.len() {
            return false;
        }
        let at = self.byte_index(self.cursor.pos);
        self.text.remove(at);
        let len = self.len();
        self.cursor.follow(len);
        true
    }

    /// Delete the char before the cursor.
    pub fn delete_backward(&mut self) -> bool {
        if self.cursor.pos == 0 || self.text.is_empty() {
            return false;
        }
        let at = self.byte_index(self.cursor.pos - 1);
        self.text.remove(at);
        self.cursor.pos -= 1;
        let len = self.len();
        self.cursor.follow(len);
        true
    }

    pub fn move_left(&mut self) -> bool {
        if self.cursor.pos == 0 {
            return false;
        }
        self.cursor.pos -= 1;
        let len = self.len();
        self.cursor.follow(len);
        true
    }

    pub fn move_right(&mut self) -> bool {
        let len = self.len();
        if self.cursor.pos >= len {
            return false;
        }
        self.cursor.pos += 1;
        self.cursor.follow(len);
        true
    }

    pub fn move_home(&mut self) -> bool {
        self.cursor.snap_home();
        true
    }

    pub fn move_end(&mut self) -> bool {
        let len = self.len();
        self.cursor.snap_end(len);
        true
    }

    /// Recall the previous (older) history entry.
    pub fn history_prev(&mut self) -> bool {
        let Some(entry) = self.history.prev() else {
            return false;
        };
        let entry = entry.to_string();
        self.replace_text(entry);
        true
    }

    /// Recall the next (newer) history entry, or clear the line when
    /// stepping past the newest one. Outside browsing this clears the line.
    pub fn history_next(&mut self) -> bool {
        let recalled = match self.history.next() {
            None => return false,
            Some(Recall::Entry(entry)) => entry.to_string(),
            Some(Recall::Live) => String::new(),
        };
        self.replace_text(recalled);
        true
    }

    /// Take the current line, record it in history and reset the editor.
    ///
    /// Empty lines are recorded too.
    pub fn commit(&mut self) -> String {
        let text = std::mem::take(&mut self.text);
        self.cursor.reset();
        self.history.push(text.clone());
        text
    }

    /// The part of the text currently on screen.
    pub fn visible_text(&self) -> &str {
        let range = self.cursor.visible_range(self.len());
        let start = self.byte_index(range.start);
        let end = self.byte_index(range.end);
        &self.text[start..end]
    }

    /// Cursor column inside the input line.
    pub fn cursor_column(&self) -> u16 {
        self.cursor.column()
    }

    /// Draw the visible slice. Returns where the terminal cursor belongs.
    pub fn render(&self, buf: &mut Buffer) -> Option<Position> {
        if !self.window.visible {
            return None;
        }
        skip_failed(self.window.clear(buf), "input line clear");
        skip_failed(
            self.window.put_str(buf, 0, 0, self.visible_text(), Style::default()),
            "input line text",
        );
        Some(self.window.screen_pos(0, self.cursor_column()))
    }
}

impl View for InputEditor {
    fn resize(&mut self, window: ScrollWindow) {
        self.window = window;
        if window.visible {
            let len = self.len();
            self.cursor.refit(len, window.width);
        }
    }

    fn window(&self) -> &ScrollWindow {
        &self.window
    }
}

impl EventHandler for InputEditor {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        let changed = match event {
            TuiEvent::InputChar(c) => self.insert(*c),
            TuiEvent::Backspace => self.delete_backward(),
            TuiEvent::Delete => self.delete_forward(),
            TuiEvent::CursorLeft => self.move_left(),
            TuiEvent::CursorRight => self.move_right(),
            TuiEvent::CursorHome => self.move_home(),
            TuiEvent::CursorEnd => self.move_end(),
            TuiEvent::HistoryPrev => self.history_prev(),
            TuiEvent::HistoryNext => self.history_next(),
            TuiEvent::Submit => return Some(InputEvent::Submit(self.commit())),
            _ => false,
        };
        changed.then_some(InputEvent::ContentChanged)
    }
}
