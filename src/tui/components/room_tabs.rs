//! # RoomTabsView Component
//!
//! Status bar above the input line: the current room's name followed by
//! the tab numbers of every open room, ordered by number.
//!
//! ```text
//! lobby [0,1,2]
//! ```
//!
//! The current room's number uses the palette's current-tab color, the
//! others their activity color (normal / new message / highlight). The bar
//! never wraps: when the list is too long it is cut and the closing `]` is
//! drawn in the last column.

use ratatui::buffer::Buffer;
use ratatui::style::Style;
use unicode_width::UnicodeWidthStr;

use crate::core::room::Room;
use crate::tui::component::View;
use crate::tui::palette::Palette;
use crate::tui::window::{ScrollWindow, skip_failed};

pub struct RoomTabsView {
    window: ScrollWindow,
}

impl RoomTabsView {
    pub fn new(window: ScrollWindow) -> Self {
        Self { window }
    }

    fn segments(current: &Room, rooms: &[Room], palette: &Palette) -> Vec<(String, Style)> {
        let mut sorted: Vec<&Room> = rooms.iter().collect();
        sorted.sort_by_key(|r| r.nb);

        let mut segments = vec![(format!("{} [", current.name), palette.bar)];
        for (i, room) in sorted.into_iter().enumerate() {
            if i > 0 {
                segments.push((",".to_string(), palette.bar));
            }
            let color = if room.is(current) {
                palette.current_tab
            } else {
                palette.room_state(room.state)
            };
            segments.push((room.nb.to_string(), palette.bar.patch(color)));
        }
        segments
    }

    pub fn render(&self, buf: &mut Buffer, current: &Room, rooms: &[Room], palette: &Palette) {
        if !self.window.visible || self.window.width == 0 {
            return;
        }
        skip_failed(self.window.clear(buf), "tab bar clear");

        let segments = Self::segments(current, rooms, palette);
        let content_width: usize = segments.iter().map(|(text, _)| text.width()).sum();
        let overflows = content_width + 1 > usize::from(self.window.width);

        // Leave the last column for `]` when the list has to be cut
        let bar = if overflows {
            ScrollWindow {
                width: self.window.width - 1,
                ..self.window
            }
        } else {
            self.window
        };

        let mut col = 0;
        for (text, style) in &segments {
            if col >= bar.width {
                break;
            }
            col = skip_failed(bar.put_str(buf, 0, col, text, *style), "tab bar segment")
                .unwrap_or(col);
        }

        let close_at = if overflows { self.window.width - 1 } else { col };
        skip_failed(
            self.window.put_str(buf, 0, close_at, "]", palette.bar),
            "tab bar bracket",
        );
        skip_failed(
            self.window.fill_row(buf, 0, close_at + 1, palette.bar),
            "tab bar padding",
        );
    }
}

impl View for RoomTabsView {
    fn resize(&mut self, window: ScrollWindow) {
        self.window = window;
    }

    fn window(&self) -> &ScrollWindow {
        &self.window
    }
}
