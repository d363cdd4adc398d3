//! # UserListView Component
//!
//! The sidebar listing the current room's occupants, one nick per row,
//! colored by role. There is no scrolling: users that don't fit below the
//! last row are simply not shown.

use ratatui::buffer::Buffer;

use crate::core::room::User;
use crate::tui::component::View;
use crate::tui::palette::Palette;
use crate::tui::window::{ScrollWindow, skip_failed};

pub struct UserListView {
    window: ScrollWindow,
}

impl UserListView {
    pub fn new(window: ScrollWindow) -> Self {
        Self { window }
    }

    pub fn render(&self, buf: &mut Buffer, users: &[User], palette: &Palette) {
        if !self.window.visible {
            return;
        }
        skip_failed(self.window.clear(buf), "user list clear");
        for (row, user) in (0..self.window.height).zip(users) {
            skip_failed(
                self.window
                    .put_str(buf, row, 0, &user.nick, palette.role(user.role)),
                "user list nick",
            );
        }
    }
}

impl View for UserListView {
    fn resize(&mut self, window: ScrollWindow) {
        self.window = window;
    }

    fn window(&self) -> &ScrollWindow {
        &self.window
    }
}
