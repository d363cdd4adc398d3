//! Cursor position and horizontal scrolling for the InputEditor.
//!
//! `CursorState` owns the cursor index, the first visible char, and the
//! viewport width. Positions count `char`s, not bytes. All methods take the
//! text length explicitly; the text itself is owned by `InputEditor`.
//!
//! ## Sliding window
//!
//! `viewport_width - 1` chars are shown; the last column stays free so the
//! cursor can sit after the final char without touching the edge. The
//! cursor is kept inside `[window_start, window_start + span]`; when it
//! leaves that range the window slides by the smallest amount that brings
//! it back, so stepping past an edge scrolls one char at a time instead of
//! jumping.

pub(super) struct CursorState {
    /// Cursor position as char index (0..=len)
    pub pos: usize,
    /// Index of the first char shown in the viewport
    pub window_start: usize,
    /// Width of the bound region, in columns
    pub viewport_width: u16,
}

impl CursorState {
    const DEFAULT_WIDTH: u16 = 80;

    pub fn new() -> Self {
        Self {
            pos: 0,
            window_start: 0,
            viewport_width: Self::DEFAULT_WIDTH,
        }
    }

    /// Reset cursor to start (used after commit clears the text).
    pub fn reset(&mut self) {
        self.pos = 0;
        self.window_start = 0;
    }

    /// Number of chars visible at once.
    pub fn span(&self) -> usize {
        usize::from(self.viewport_width).saturating_sub(1)
    }

    /// Slide the window just enough to keep the cursor on screen.
    pub fn follow(&mut self, len: usize) {
        let span = self.span();
        if len <= span {
            self.window_start = 0;
        } else if self.pos < self.window_start {
            self.window_start = self.pos;
        } else if self.pos > self.window_start + span {
            self.window_start = self.pos - span;
        }
    }

    /// Re-derive the window for a new viewport width, pulling text back in
    /// from the left if the wider viewport would show blank columns.
    pub fn refit(&mut self, len: usize, viewport_width: u16) {
        self.viewport_width = viewport_width;
        self.window_start = self.window_start.min(len.saturating_sub(self.span()));
        self.follow(len);
    }

    pub fn snap_home(&mut self) {
        self.pos = 0;
        self.window_start = 0;
    }

    pub fn snap_end(&mut self, len: usize) {
        self.pos = len;
        self.window_start = len.saturating_sub(self.span());
    }

    /// Char range of the text that is on screen.
    pub fn visible_range(&self, len: usize) -> std::ops::Range<usize> {
        let start = self.window_start.min(len);
        start..(start + self.span()).min(len)
    }

    /// Column of the cursor inside the viewport.
    pub fn column(&self) -> u16 {
        u16::try_from(self.pos - self.window_start).unwrap_or(u16::MAX)
    }
}
