//! # TopicView Component
//!
//! Single-row bar at the top of the screen showing the current room's topic,
//! left-aligned and padded with spaces across the full width in the bar
//! style. Long topics are cut at the right edge.

use ratatui::buffer::Buffer;

use crate::tui::component::View;
use crate::tui::palette::Palette;
use crate::tui::window::{ScrollWindow, skip_failed};

pub struct TopicView {
    window: ScrollWindow,
}

impl TopicView {
    pub fn new(window: ScrollWindow) -> Self {
        Self { window }
    }

    pub fn render(&self, buf: &mut Buffer, topic: &str, palette: &Palette) {
        if !self.window.visible {
            return;
        }
        skip_failed(self.window.clear(buf), "topic clear");
        let end = skip_failed(self.window.put_str(buf, 0, 0, topic, palette.bar), "topic text")
            .unwrap_or(0);
        skip_failed(self.window.fill_row(buf, 0, end, palette.bar), "topic padding");
    }
}

impl View for TopicView {
    fn resize(&mut self, window: ScrollWindow) {
        self.window = window;
    }

    fn window(&self) -> &ScrollWindow {
        &self.window
    }
}
