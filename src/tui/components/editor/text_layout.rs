//! Pure text layout utilities and dimensional constants for the Editor.
//!
//! These are stateless helpers with no dependency on Editor or CursorState.
//! Positions are byte offsets into the buffer; columns are display cells.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Left + right borders consumed horizontally by the bordered block
pub(super) const HORIZONTAL_OVERHEAD: u16 = 2;
/// Top + bottom borders consumed vertically
pub(super) const VERTICAL_OVERHEAD: u16 = 2;
/// Offset from area edge to content (border width)
pub(super) const BORDER_OFFSET: u16 = 1;

/// Content width after subtracting the borders. 0 if the area is too narrow.
pub(super) fn inner_width(area_width: u16) -> u16 {
    area_width.saturating_sub(HORIZONTAL_OVERHEAD)
}

/// Content height after subtracting the borders. 0 if the area is too short.
pub(super) fn inner_height(area_height: u16) -> u16 {
    area_height.saturating_sub(VERTICAL_OVERHEAD)
}

pub(super) fn saturating_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

/// Number of logical lines. A trailing newline opens an empty last line.
pub(super) fn line_count(text: &str) -> usize {
    text.split('\n').count()
}

/// Byte offset where the line containing `pos` starts.
pub(super) fn line_start(text: &str, pos: usize) -> usize {
    text[..pos].rfind('\n').map(|i| i + 1).unwrap_or(0)
}

/// Byte offset of the newline ending the line containing `pos`, or the end of text.
pub(super) fn line_end(text: &str, pos: usize) -> usize {
    text[pos..]
        .find('\n')
        .map(|i| pos + i)
        .unwrap_or(text.len())
}

/// (row, display column) of byte offset `pos`.
pub(super) fn row_col(text: &str, pos: usize) -> (usize, usize) {
    let row = text[..pos].matches('\n').count();
    let col = text[line_start(text, pos)..pos].width();
    (row, col)
}

/// Byte offset within `line` of the character covering display `column`,
/// clamped to the line end.
pub(super) fn offset_at_column(line: &str, column: usize) -> usize {
    let mut width = 0;
    for (i, c) in line.char_indices() {
        let w = c.width().unwrap_or(0);
        if width + w > column {
            return i;
        }
        width += w;
    }
    line.len()
}

/// Find the byte offset of the previous character boundary before `pos` in `text`.
pub(super) fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Find the byte offset of the next character boundary after `pos` in `text`.
pub(super) fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}
