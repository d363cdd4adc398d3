//! # ScrollWindow
//!
//! A rectangular region of the frame buffer bound to one view.
//!
//! Every write goes through the window and is checked against both the
//! region and the buffer it lands in. During a live resize the layout and
//! the buffer can briefly disagree, so a write may fail with `DrawError`;
//! callers drop that single write via [`skip_failed`] and carry on with the
//! rest of the frame. The next full redraw repairs the screen.

use std::fmt;

use log::trace;
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::Style;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawError {
    /// A (row, col) outside the window.
    OutOfBounds { row: u16, col: u16, window: Rect },
    /// The window itself doesn't fit in the buffer being drawn.
    RegionOutsideBuffer { window: Rect, buffer: Rect },
}

impl fmt::Display for DrawError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawError::OutOfBounds { row, col, window } => {
                write!(f, "({row}, {col}) is outside window {window}")
            }
            DrawError::RegionOutsideBuffer { window, buffer } => {
                write!(f, "window {window} does not fit buffer {buffer}")
            }
        }
    }
}

impl std::error::Error for DrawError {}

/// Drop a failed draw call so the remaining draws of the frame proceed.
pub(crate) fn skip_failed<T>(result: Result<T, DrawError>, what: &str) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            trace!("skipped draw ({what}): {e}");
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollWindow {
    pub height: u16,
    pub width: u16,
    /// Origin row
    pub y: u16,
    /// Origin column
    pub x: u16,
    pub visible: bool,
}

impl ScrollWindow {
    pub fn new(height: u16, width: u16, y: u16, x: u16, visible: bool) -> Self {
        Self {
            height,
            width,
            y,
            x,
            visible,
        }
    }

    /// An empty, invisible region.
    pub fn hidden() -> Self {
        Self::default()
    }

    pub fn area(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    fn fits(&self, buf: &Buffer) -> Result<(), DrawError> {
        let window = self.area();
        let buffer = buf.area;
        let inside = window.x >= buffer.x
            && window.y >= buffer.y
            && window.right() <= buffer.right()
            && window.bottom() <= buffer.bottom();
        if inside {
            Ok(())
        } else {
            Err(DrawError::RegionOutsideBuffer { window, buffer })
        }
    }

    fn locate(&self, buf: &Buffer, row: u16, col: u16) -> Result<(u16, u16), DrawError> {
        if row >= self.height || col >= self.width {
            return Err(DrawError::OutOfBounds {
                row,
                col,
                window: self.area(),
            });
        }
        self.fits(buf)?;
        Ok((self.x + col, self.y + row))
    }

    /// Write `text` at (row, col), clipped at the right edge of the window.
    ///
    /// Returns the window column right after the last cell written.
    pub fn put_str(
        &self,
        buf: &mut Buffer,
        row: u16,
        col: u16,
        text: &str,
        style: Style,
    ) -> Result<u16, DrawError> {
        let (x, y) = self.locate(buf, row, col)?;
        let max_width = usize::from(self.width - col);
        let (end_x, _) = buf.set_stringn(x, y, text, max_width, style);
        Ok(end_x - self.x)
    }

    /// Fill (row, col..width) with spaces in `style`.
    pub fn fill_row(
        &self,
        buf: &mut Buffer,
        row: u16,
        col: u16,
        style: Style,
    ) -> Result<(), DrawError> {
        if col >= self.width {
            return Ok(());
        }
        let blank = " ".repeat(usize::from(self.width - col));
        self.put_str(buf, row, col, &blank, style).map(|_| ())
    }

    /// Reset every cell of the region.
    pub fn clear(&self, buf: &mut Buffer) -> Result<(), DrawError> {
        self.fits(buf)?;
        for y in self.y..self.y + self.height {
            for x in self.x..self.x + self.width {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.reset();
                }
            }
        }
        Ok(())
    }

    /// Absolute terminal position of (row, col), clamped into the region.
    pub fn screen_pos(&self, row: u16, col: u16) -> Position {
        Position::new(
            self.x + col.min(self.width.saturating_sub(1)),
            self.y + row.min(self.height.saturating_sub(1)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (buf.area.x..buf.area.right())
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn put_str_clips_at_window_edge() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 2));
        let win = ScrollWindow::new(1, 4, 1, 2, true);
        let end = win.put_str(&mut buf, 0, 0, "abcdefgh", Style::default()).unwrap();
        assert_eq!(end, 4);
        assert_eq!(row_text(&buf, 1), "  abcd    ");
    }

    #[test]
    fn put_str_outside_window_is_an_error() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 2));
        let win = ScrollWindow::new(1, 4, 0, 0, true);
        let err = win.put_str(&mut buf, 1, 0, "x", Style::default()).unwrap_err();
        assert!(matches!(err, DrawError::OutOfBounds { row: 1, col: 0, .. }));
        assert_eq!(buf, Buffer::empty(Rect::new(0, 0, 10, 2)));
    }

    #[test]
    fn window_larger_than_buffer_refuses_to_draw() {
        // stale layout from before the terminal shrank
        let mut buf = Buffer::empty(Rect::new(0, 0, 5, 5));
        let win = ScrollWindow::new(1, 20, 0, 0, true);
        assert!(matches!(
            win.put_str(&mut buf, 0, 0, "x", Style::default()),
            Err(DrawError::RegionOutsideBuffer { .. })
        ));
        assert!(win.clear(&mut buf).is_err());
        assert!(skip_failed(win.clear(&mut buf), "test").is_none());
    }

    #[test]
    fn clear_only_touches_region() {
        let mut buf = Buffer::with_lines(["xxxxx", "xxxxx"]);
        let win = ScrollWindow::new(1, 3, 1, 1, true);
        win.clear(&mut buf).unwrap();
        assert_eq!(row_text(&buf, 0), "xxxxx");
        assert_eq!(row_text(&buf, 1), "x   x");
    }

    #[test]
    fn fill_row_pads_to_width() {
        let mut buf = Buffer::with_lines(["xxxxx"]);
        let win = ScrollWindow::new(1, 5, 0, 0, true);
        win.fill_row(&mut buf, 0, 2, Style::default()).unwrap();
        assert_eq!(row_text(&buf, 0), "xx   ");
    }

    #[test]
    fn screen_pos_is_clamped() {
        let win = ScrollWindow::new(1, 10, 5, 3, true);
        assert_eq!(win.screen_pos(0, 4), Position::new(7, 5));
        assert_eq!(win.screen_pos(3, 40), Position::new(12, 5));
    }
}
