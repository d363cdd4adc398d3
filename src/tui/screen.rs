//! # Screen
//!
//! Owns one instance of every view plus the input editor, lays them out on
//! the terminal and drives a full redraw per frame.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ topic                                        │  row 0
//! ├──────────────────────────────────────────┬───┤
//! │ messages (9/10 of the width)             │ u │
//! │                                          │ s │
//! │                                          │ e │
//! │                                          │ r │
//! │                                          │ s │
//! ├──────────────────────────────────────────┴───┤
//! │ room tabs                                    │  row h-2
//! │ input                                        │  row h-1
//! └──────────────────────────────────────────────┘
//! ```
//!
//! Below 60x10 the layout would be unusable, so every view is marked
//! hidden and the frame stays blank until the terminal grows again.

use log::debug;
use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Position;

use crate::core::room::Room;
use crate::tui::component::{EventHandler, View};
use crate::tui::components::{
    InputEditor, InputEvent, MessageView, RoomTabsView, TopicView, UserListView,
};
use crate::tui::event::TuiEvent;
use crate::tui::palette::Palette;
use crate::tui::window::{ScrollWindow, skip_failed};

pub const MIN_HEIGHT: u16 = 10;
pub const MIN_WIDTH: u16 = 60;

/// Regions for every part of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub topic: ScrollWindow,
    pub messages: ScrollWindow,
    pub separator: ScrollWindow,
    pub users: ScrollWindow,
    pub tabs: ScrollWindow,
    pub input: ScrollWindow,
}

impl ScreenLayout {
    pub fn compute(height: u16, width: u16) -> Self {
        let visible = height >= MIN_HEIGHT && width >= MIN_WIDTH;
        let tenth = width / 10;
        let body_height = height.saturating_sub(3);

        Self {
            topic: ScrollWindow::new(1, width, 0, 0, visible),
            messages: ScrollWindow::new(body_height, tenth * 9, 1, 0, visible),
            separator: ScrollWindow::new(body_height, 1, 1, tenth * 9, visible),
            users: ScrollWindow::new(
                body_height,
                tenth.saturating_sub(1),
                1,
                tenth * 9 + 1,
                visible,
            ),
            tabs: ScrollWindow::new(1, width, height.saturating_sub(2), 0, visible),
            input: ScrollWindow::new(1, width, height.saturating_sub(1), 0, visible),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.topic.visible
    }
}

pub struct Screen {
    pub topic: TopicView,
    pub messages: MessageView,
    pub users: UserListView,
    pub tabs: RoomTabsView,
    pub input: InputEditor,
    separator: ScrollWindow,
    palette: Palette,
}

impl Screen {
    pub fn new(palette: Palette, height: u16, width: u16) -> Self {
        let layout = ScreenLayout::compute(height, width);
        let mut input = InputEditor::new();
        input.resize(layout.input);
        Self {
            topic: TopicView::new(layout.topic),
            messages: MessageView::new(layout.messages),
            users: UserListView::new(layout.users),
            tabs: RoomTabsView::new(layout.tabs),
            input,
            separator: layout.separator,
            palette,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.topic.is_visible()
    }

    /// Recompute the layout and rebind every view.
    pub fn resize(&mut self, height: u16, width: u16) {
        let layout = ScreenLayout::compute(height, width);
        debug!(
            "Screen resized to {}x{} (visible: {})",
            width,
            height,
            layout.is_visible()
        );
        self.topic.resize(layout.topic);
        self.messages.resize(layout.messages);
        self.users.resize(layout.users);
        self.tabs.resize(layout.tabs);
        self.input.resize(layout.input);
        self.separator = layout.separator;
    }

    /// Register a room so the message pane can draw it.
    pub fn add_room(&mut self, room: &str) {
        self.messages.ensure_room(room);
    }

    pub fn remove_room(&mut self, room: &str) {
        self.messages.remove_room(room);
    }

    /// Half the message pane, the PageUp/PageDown step.
    fn page(&self) -> usize {
        usize::from(self.messages.window().height / 2).max(1)
    }

    pub fn scroll_up(&mut self, room: &str) {
        let page = self.page();
        self.messages.scroll_up(room, page);
    }

    pub fn scroll_down(&mut self, room: &str) {
        let page = self.page();
        self.messages.scroll_down(room, page);
    }

    /// Route an editing key to the input line.
    pub fn handle_key(&mut self, event: &TuiEvent) -> Option<InputEvent> {
        self.input.handle_event(event)
    }

    fn render_separator(&self, buf: &mut Buffer) {
        if !self.separator.visible {
            return;
        }
        for row in 0..self.separator.height {
            skip_failed(
                self.separator
                    .put_str(buf, row, 0, "│", self.palette.separator),
                "separator",
            );
        }
    }

    /// Draw everything for one frame. `rooms` is ordered current-first.
    ///
    /// Returns where the terminal cursor belongs, or `None` if nothing was
    /// drawn.
    pub fn render(&mut self, buf: &mut Buffer, rooms: &[Room]) -> Option<Position> {
        let current = rooms.first()?;
        self.messages.render(buf, current, &self.palette);
        self.render_separator(buf);
        self.users.render(buf, &current.users, &self.palette);
        self.topic.render(buf, &current.topic, &self.palette);
        self.tabs.render(buf, current, rooms, &self.palette);
        self.input.render(buf)
    }

    /// Draw into a ratatui frame; the terminal flushes it in one go.
    pub fn draw(&mut self, frame: &mut Frame, rooms: &[Room]) {
        if let Some(cursor) = self.render(frame.buffer_mut(), rooms) {
            frame.set_cursor_position(cursor);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_room;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn blank(buf: &Buffer) -> bool {
        buf.content().iter().all(|c| c.symbol() == " ")
    }

    #[test]
    fn layout_splits_ninety_ten() {
        let l = ScreenLayout::compute(24, 80);
        assert!(l.is_visible());
        assert_eq!(l.topic, ScrollWindow::new(1, 80, 0, 0, true));
        assert_eq!(l.messages, ScrollWindow::new(21, 72, 1, 0, true));
        assert_eq!(l.separator, ScrollWindow::new(21, 1, 1, 72, true));
        assert_eq!(l.users, ScrollWindow::new(21, 7, 1, 73, true));
        assert_eq!(l.tabs, ScrollWindow::new(1, 80, 22, 0, true));
        assert_eq!(l.input, ScrollWindow::new(1, 80, 23, 0, true));
    }

    #[test]
    fn layout_below_minimum_is_hidden() {
        assert!(!ScreenLayout::compute(5, 40).is_visible());
        assert!(!ScreenLayout::compute(9, 200).is_visible());
        assert!(!ScreenLayout::compute(50, 59).is_visible());
        assert!(ScreenLayout::compute(10, 60).is_visible());
    }

    #[test]
    fn tiny_layout_does_not_underflow() {
        let l = ScreenLayout::compute(1, 3);
        assert_eq!(l.messages.height, 0);
        assert_eq!(l.users.width, 0);
        assert_eq!(l.input.y, 0);
    }

    #[test]
    fn full_frame_draws_every_view() {
        let mut terminal = Terminal::new(TestBackend::new(60, 10)).unwrap();
        let mut screen = Screen::new(Palette::default(), 10, 60);
        let room = sample_room("lobby", 1);
        screen.add_room("lobby");
        for c in "hello".chars() {
            screen.handle_key(&TuiEvent::InputChar(c));
        }

        terminal
            .draw(|f| screen.draw(f, std::slice::from_ref(&room)))
            .unwrap();

        let buf = terminal.backend().buffer();
        let row = |y: u16| -> String { (0..60u16).map(|x| buf[(x, y)].symbol()).collect() };
        assert!(row(0).starts_with("Welcome to lobby"));
        assert!(row(1).starts_with("[09:00:00] You joined"));
        assert!(row(2).starts_with("[09:00:05] <alice> hi bob"));
        assert_eq!(buf[(54, 1)].symbol(), "│");
        assert_eq!(&row(1)[..], format!("{:<54}│{:<5}", "[09:00:00] You joined", "alice"));
        assert!(row(8).starts_with("lobby [1]"));
        assert!(row(9).starts_with("hello"));
    }

    #[test]
    fn cursor_follows_input() {
        let mut terminal = Terminal::new(TestBackend::new(60, 10)).unwrap();
        let mut screen = Screen::new(Palette::default(), 10, 60);
        let room = sample_room("lobby", 1);
        screen.add_room("lobby");
        screen.handle_key(&TuiEvent::InputChar('x'));
        let mut cursor = None;
        terminal
            .draw(|f| cursor = screen.render(f.buffer_mut(), std::slice::from_ref(&room)))
            .unwrap();
        assert_eq!(cursor, Some(Position::new(1, 9)));
    }

    #[test]
    fn undersized_screen_draws_nothing() {
        let mut terminal = Terminal::new(TestBackend::new(40, 5)).unwrap();
        let mut screen = Screen::new(Palette::default(), 24, 80);
        let room = sample_room("lobby", 1);
        screen.add_room("lobby");
        screen.resize(5, 40);
        assert!(!screen.is_visible());

        let mut cursor = Some(Position::new(0, 0));
        terminal
            .draw(|f| cursor = screen.render(f.buffer_mut(), std::slice::from_ref(&room)))
            .unwrap();
        assert!(blank(terminal.backend().buffer()));
        assert_eq!(cursor, None);
    }

    #[test]
    fn stale_layout_larger_than_buffer_is_skipped() {
        // the terminal shrank but the resize event hasn't arrived yet
        let mut terminal = Terminal::new(TestBackend::new(60, 10)).unwrap();
        let mut screen = Screen::new(Palette::default(), 24, 80);
        let room = sample_room("lobby", 1);
        screen.add_room("lobby");
        terminal
            .draw(|f| {
                screen.render(f.buffer_mut(), std::slice::from_ref(&room));
            })
            .unwrap();
        // topic row (1x80) doesn't fit a 60-wide buffer, so nothing of it lands
        assert!(blank(terminal.backend().buffer()));
    }

    #[test]
    fn resize_back_to_usable_size_draws_again() {
        let mut terminal = Terminal::new(TestBackend::new(60, 10)).unwrap();
        let mut screen = Screen::new(Palette::default(), 5, 40);
        let room = sample_room("lobby", 1);
        screen.add_room("lobby");
        screen.resize(10, 60);
        terminal
            .draw(|f| screen.draw(f, std::slice::from_ref(&room)))
            .unwrap();
        assert!(!blank(terminal.backend().buffer()));
    }

    #[test]
    fn page_scroll_moves_current_room() {
        let mut screen = Screen::new(Palette::default(), 24, 80);
        screen.add_room("lobby");
        screen.scroll_up("lobby");
        assert_eq!(
            screen.messages.room_window("lobby").map(|w| w.scroll_back),
            Some(10)
        );
        screen.scroll_down("lobby");
        assert_eq!(
            screen.messages.room_window("lobby").map(|w| w.scroll_back),
            Some(0)
        );
    }

    #[test]
    fn no_rooms_no_frame() {
        let mut screen = Screen::new(Palette::default(), 24, 80);
        let mut buf = Buffer::empty(ratatui::layout::Rect::new(0, 0, 80, 24));
        assert_eq!(screen.render(&mut buf, &[]), None);
        assert!(blank(&buf));
    }
}
