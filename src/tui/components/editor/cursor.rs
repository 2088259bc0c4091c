//! Cursor position tracking and navigation for the Editor.
//!
//! `CursorState` owns the cursor byte offset, scroll offsets, and the cached
//! viewport size. All navigation methods take `buffer: &str` explicitly; the
//! text itself is owned by `Editor`.

use super::text_layout::{
    BORDER_OFFSET, line_end, line_start, offset_at_column, row_col, saturating_u16,
};
use ratatui::layout::Rect;
use unicode_width::UnicodeWidthStr;

/// Cursor and scroll state, separated from the text buffer.
pub(super) struct CursorState {
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    pub pos: usize,
    /// First visible line
    pub row_offset: u16,
    /// First visible display column
    pub col_offset: u16,
    /// Inner (width, height) from the last render, or from the anchor before that
    pub viewport: (u16, u16),
}

impl CursorState {
    pub fn new(viewport: (u16, u16)) -> Self {
        Self {
            pos: 0,
            row_offset: 0,
            col_offset: 0,
            viewport,
        }
    }

    /// Move the cursor one line up (`direction < 0`) or down, keeping the
    /// display column where the target line is long enough.
    ///
    /// Returns `true` if the cursor moved, `false` if already at the first/last line.
    pub fn move_vertically(&mut self, buffer: &str, direction: i16) -> bool {
        let start = line_start(buffer, self.pos);
        let column = buffer[start..self.pos].width();

        let target_start = if direction < 0 {
            if start == 0 {
                return false;
            }
            line_start(buffer, start - 1)
        } else {
            let end = line_end(buffer, self.pos);
            if end == buffer.len() {
                return false;
            }
            end + 1
        };

        let target_end = line_end(buffer, target_start);
        self.pos = target_start + offset_at_column(&buffer[target_start..target_end], column);
        true
    }

    /// Adjust scroll offsets so the cursor cell is inside the viewport.
    pub fn update_scroll(&mut self, buffer: &str) {
        let (row, col) = row_col(buffer, self.pos);
        let (row, col) = (saturating_u16(row), saturating_u16(col));
        let (width, height) = self.viewport;

        if height > 0 {
            if row < self.row_offset {
                self.row_offset = row;
            } else if row >= self.row_offset.saturating_add(height) {
                self.row_offset = row - height + 1;
            }
        }

        if width > 0 {
            if col < self.col_offset {
                self.col_offset = col;
            } else if col >= self.col_offset.saturating_add(width) {
                self.col_offset = col - width + 1;
            }
        }
    }

    /// Screen position of the cursor for a render into `area`.
    /// Returns (column, row) in screen coordinates.
    pub fn screen_pos(&self, buffer: &str, area: Rect) -> (u16, u16) {
        let (row, col) = row_col(buffer, self.pos);
        let visible_row = saturating_u16(row).saturating_sub(self.row_offset);
        let visible_col = saturating_u16(col).saturating_sub(self.col_offset);
        (
            area.x + BORDER_OFFSET + visible_col,
            area.y + BORDER_OFFSET + visible_row,
        )
    }
}
