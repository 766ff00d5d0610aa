//! Cursor position and horizontal scroll for the single-line InputBox.
//!
//! `CursorState` owns the cursor byte offset and the scroll column. All
//! methods accept `buffer: &str` explicitly; the text is owned by `InputBox`.

use super::text::{CONTENT_OFFSET, inner_width, snap_to_char_start, width_before};
use ratatui::layout::Rect;

pub(super) struct CursorState {
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    pub pos: usize,
    /// Columns scrolled off the left edge (0 when the text fits)
    pub scroll_col: u16,
}

impl CursorState {
    pub fn new() -> Self {
        Self {
            pos: 0,
            scroll_col: 0,
        }
    }

    /// Reset cursor to start (used when the buffer is cleared).
    pub fn reset(&mut self) {
        self.pos = 0;
        self.scroll_col = 0;
    }

    /// Update the scroll column so the cursor stays inside the field.
    ///
    /// One column is kept free at the right edge for the cursor itself. The
    /// scroll column always sits where a character starts, matching what
    /// `visible_slice` draws.
    pub fn update_scroll(&mut self, buffer: &str, field_width: u16) {
        let width = inner_width(field_width);
        if width == 0 {
            self.scroll_col = 0;
            return;
        }

        let cursor_col = width_before(buffer, self.pos);
        if cursor_col < self.scroll_col {
            self.scroll_col = cursor_col;
        } else if cursor_col >= self.scroll_col.saturating_add(width) {
            let scroll = cursor_col.saturating_add(1).saturating_sub(width);
            self.scroll_col = snap_to_char_start(buffer, scroll);
        }
    }

    /// Screen position of the cursor for a field drawn in `area`.
    pub fn screen_pos(&self, buffer: &str, area: Rect) -> (u16, u16) {
        let col = width_before(buffer, self.pos).saturating_sub(self.scroll_col);
        let max_col = inner_width(area.width).saturating_sub(1);
        (
            area.x
                .saturating_add(CONTENT_OFFSET)
                .saturating_add(col.min(max_col)),
            area.y.saturating_add(1),
        )
    }
}
