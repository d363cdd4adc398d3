//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the screen,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The loop is single-threaded: it waits for one terminal event, then
//! drains everything already queued, applies it all, and redraws once.
//! Nothing is drawn while idle. Every frame is a full redraw from the
//! `App` state, written to ratatui's back buffer and flushed to the
//! terminal in a single `draw()` call, so a half-drawn frame is never
//! visible.

mod component;
pub mod components;
pub mod event;
pub mod palette;
pub mod screen;
pub mod window;

pub use component::{EventHandler, View};

use log::{debug, info};
use std::io::stdout;
use std::time::Duration;

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::components::InputEvent;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::palette::Palette;
use crate::tui::screen::Screen;

/// How long to wait for input before checking the quit flag again.
const IDLE_POLL: Duration = Duration::from_millis(500);

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            Show,                        // Show cursor for input editing
            SetCursorStyle::SteadyBlock, // Non-blinking: draw() resets the blink timer
        )?;
        info!("Terminal modes enabled (steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), SetCursorStyle::DefaultUserShape);
    }
}

/// Carry out an action and whatever the screen has to do about its effect.
fn apply(app: &mut App, screen: &mut Screen, action: Action) {
    match update(app, action) {
        Effect::RoomJoined(name) => screen.add_room(&name),
        Effect::RoomLeft(name) => screen.remove_room(&name),
        Effect::Quit => info!("Quit requested"),
        Effect::None => {}
    }
}

/// Route one terminal event to the screen or the core.
pub fn dispatch(app: &mut App, screen: &mut Screen, event: TuiEvent) {
    match event {
        TuiEvent::Resize(cols, rows) => screen.resize(rows, cols),
        TuiEvent::Quit => apply(app, screen, Action::Quit),
        TuiEvent::NextRoom => apply(app, screen, Action::NextRoom),
        TuiEvent::PrevRoom => apply(app, screen, Action::PrevRoom),
        TuiEvent::ScrollPageUp => {
            let current = app.current().name.clone();
            screen.scroll_up(&current);
        }
        TuiEvent::ScrollPageDown => {
            let current = app.current().name.clone();
            screen.scroll_down(&current);
        }
        editing => {
            if let Some(InputEvent::Submit(text)) = screen.handle_key(&editing) {
                apply(app, screen, Action::Submit(text));
            }
        }
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    let palette = Palette::from_theme(&config.theme);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let size = terminal.size()?;
    let mut screen = Screen::new(palette, size.height, size.width);
    for room in &app.rooms {
        screen.add_room(&room.name);
    }

    let result = event_loop(&mut terminal, &mut app, &mut screen);

    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
    screen: &mut Screen,
) -> std::io::Result<()> {
    let mut needs_redraw = true; // Force first frame

    while !app.should_quit {
        if needs_redraw {
            terminal.draw(|f| screen.draw(f, &app.rooms))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(IDLE_POLL)?;
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(|| poll_event_immediate().ok().flatten()))
        {
            debug!("Dispatching {:?}", event);
            dispatch(app, screen, event);
        }
    }

    info!("Chatpane shutting down");
    Ok(())
}
