use crate::tui::window::ScrollWindow;

/// A view bound to one region of the screen.
///
/// Every view is resized by the `Screen` with a fresh `ScrollWindow` and
/// renders its own props through an inherent `render` method, since each
/// view consumes different domain data (users, a topic, the room list...).
///
/// # Visibility
///
/// The window carries a visibility flag. A view whose window is not
/// visible must not draw anything: the terminal is below the minimum
/// usable size and a degraded layout would just corrupt the screen.
pub trait View {
    /// Rebind the view to a new region. Replaces the old region entirely.
    fn resize(&mut self, window: ScrollWindow);

    /// The region the view currently draws into.
    fn window(&self) -> &ScrollWindow;

    fn is_visible(&self) -> bool {
        self.window().visible
    }
}

/// A component that handles terminal events.
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    /// Handle a low-level `TuiEvent` and optionally return a high-level event.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
