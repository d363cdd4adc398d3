//! # Palette
//!
//! The fixed color table handed to the `Screen` at construction. Views ask
//! it for styles by meaning (role, room state, nick color index) and never
//! pick colors themselves.

use std::str::FromStr;

use log::warn;
use ratatui::style::{Color, Style};

use crate::core::config::ThemeConfig;
use crate::core::room::{Role, RoomState};

#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    /// Topic bar and tab bar background text.
    pub bar: Style,
    /// Vertical line between messages and the user list.
    pub separator: Style,
    /// Body of info lines in the message pane.
    pub info: Style,
    /// The current room's number in the tab bar.
    pub current_tab: Style,
    pub moderator: Style,
    pub participant: Style,
    pub visitor: Style,
    pub room_normal: Style,
    pub room_new_message: Style,
    pub room_highlight: Style,
    /// Indexed by `User::color`, wrapping around.
    pub nick_colors: Vec<Color>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            bar: Style::default().fg(Color::White).bg(Color::Blue),
            separator: Style::default().fg(Color::Blue),
            info: Style::default().fg(Color::Yellow),
            current_tab: Style::default().fg(Color::Cyan),
            moderator: Style::default().fg(Color::Red),
            participant: Style::default().fg(Color::Blue),
            visitor: Style::default().fg(Color::Green),
            room_normal: Style::default().fg(Color::White),
            room_new_message: Style::default().fg(Color::LightBlue),
            room_highlight: Style::default().fg(Color::LightRed),
            nick_colors: vec![
                Color::Cyan,
                Color::Green,
                Color::Magenta,
                Color::Yellow,
                Color::LightRed,
                Color::LightBlue,
            ],
        }
    }
}

/// Parse a configured color, keeping `fallback` when absent or invalid.
fn color_or(value: Option<&String>, fallback: Color, key: &str) -> Color {
    match value {
        None => fallback,
        Some(name) => Color::from_str(name).unwrap_or_else(|_| {
            warn!("Invalid color {:?} for theme.{}, using default", name, key);
            fallback
        }),
    }
}

fn fg_or(value: Option<&String>, fallback: Style, key: &str) -> Style {
    let color = color_or(value, fallback.fg.unwrap_or(Color::Reset), key);
    fallback.fg(color)
}

impl Palette {
    pub fn from_theme(theme: &ThemeConfig) -> Self {
        let d = Palette::default();

        let bar_fg = color_or(theme.bar_fg.as_ref(), d.bar.fg.unwrap_or(Color::Reset), "bar_fg");
        let bar_bg = color_or(theme.bar_bg.as_ref(), d.bar.bg.unwrap_or(Color::Reset), "bar_bg");

        let nick_colors = match &theme.nick_colors {
            Some(names) => {
                let parsed: Vec<Color> = names
                    .iter()
                    .filter_map(|name| match Color::from_str(name) {
                        Ok(c) => Some(c),
                        Err(_) => {
                            warn!("Invalid nick color {:?}, skipping", name);
                            None
                        }
                    })
                    .collect();
                if parsed.is_empty() { d.nick_colors.clone() } else { parsed }
            }
            None => d.nick_colors.clone(),
        };

        Self {
            bar: Style::default().fg(bar_fg).bg(bar_bg),
            separator: fg_or(theme.separator.as_ref(), d.separator, "separator"),
            info: fg_or(theme.info.as_ref(), d.info, "info"),
            current_tab: fg_or(theme.current_tab.as_ref(), d.current_tab, "current_tab"),
            moderator: fg_or(theme.moderator.as_ref(), d.moderator, "moderator"),
            participant: fg_or(theme.participant.as_ref(), d.participant, "participant"),
            visitor: fg_or(theme.visitor.as_ref(), d.visitor, "visitor"),
            room_normal: fg_or(theme.room_normal.as_ref(), d.room_normal, "room_normal"),
            room_new_message: fg_or(
                theme.room_new_message.as_ref(),
                d.room_new_message,
                "room_new_message",
            ),
            room_highlight: fg_or(theme.room_highlight.as_ref(), d.room_highlight, "room_highlight"),
            nick_colors,
        }
    }

    /// User list color for a role; `Role::None` gets the terminal default.
    pub fn role(&self, role: Role) -> Style {
        match role {
            Role::Moderator => self.moderator,
            Role::Participant => self.participant,
            Role::Visitor => self.visitor,
            Role::None => Style::default(),
        }
    }

    pub fn room_state(&self, state: RoomState) -> Style {
        match state {
            RoomState::Normal => self.room_normal,
            RoomState::NewMessage => self.room_new_message,
            RoomState::Highlight => self.room_highlight,
        }
    }

    pub fn nick(&self, color: usize) -> Style {
        if self.nick_colors.is_empty() {
            return Style::default();
        }
        Style::default().fg(self.nick_colors[color % self.nick_colors.len()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_theme_is_default_palette() {
        assert_eq!(Palette::from_theme(&ThemeConfig::default()), Palette::default());
    }

    #[test]
    fn theme_overrides_and_invalid_values_fall_back() {
        let theme = ThemeConfig {
            moderator: Some("magenta".to_string()),
            visitor: Some("not-a-color".to_string()),
            nick_colors: Some(vec!["red".to_string(), "bogus".to_string()]),
            ..Default::default()
        };
        let palette = Palette::from_theme(&theme);
        assert_eq!(palette.moderator.fg, Some(Color::Magenta));
        assert_eq!(palette.visitor, Palette::default().visitor);
        assert_eq!(palette.nick_colors, vec![Color::Red]);
    }

    #[test]
    fn role_mapping() {
        let p = Palette::default();
        assert_eq!(p.role(Role::Moderator), p.moderator);
        assert_eq!(p.role(Role::Participant), p.participant);
        assert_eq!(p.role(Role::Visitor), p.visitor);
        assert_eq!(p.role(Role::None), Style::default());
    }

    #[test]
    fn nick_colors_wrap_around() {
        let p = Palette::default();
        let n = p.nick_colors.len();
        assert_eq!(p.nick(1), p.nick(n + 1));
    }
}
