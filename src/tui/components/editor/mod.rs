//! # Editor Component
//!
//! The editable source surface of the playground.
//!
//! ## Responsibilities
//!
//! - Capture text input, including bracketed paste
//! - Handle editing (backspace, delete, newline, tab)
//! - Handle cursor movement (arrows, home/end) and keep the cursor visible
//! - Render the buffer verbatim, without wrapping
//!
//! ## State Management
//!
//! The buffer is internal state and nobody is told about individual edits.
//! The controller only sees the text when it asks for it at run time.
//! Cursor position and scroll state are encapsulated in `CursorState`.

mod cursor;
mod text_layout;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Text;
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

use cursor::CursorState;
use text_layout::{
    inner_height, inner_width, line_count, line_end, line_start, next_char_boundary,
    prev_char_boundary, row_col,
};

/// High-level events emitted by the Editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorEvent {
    ContentChanged,
    CursorMoved,
}

/// Multi-line text editor.
///
/// # Props
///
/// - `tab_width`: Tab stop distance used by the Tab key and pasted tabs
///
/// # State
///
/// - `buffer`: Current program text
/// - `cursor`: Cursor position, scroll offsets, and cached viewport (see `CursorState`)
pub struct Editor {
    buffer: String,
    tab_width: u16,
    cursor: CursorState,
}

impl Editor {
    /// Create an editor pre-populated with `initial_text`, sized for `anchor`.
    /// The cursor starts at the beginning of the text.
    pub fn new(initial_text: &str, anchor: Rect, tab_width: u16) -> Self {
        Self {
            buffer: initial_text.to_string(),
            tab_width: tab_width.max(1),
            cursor: CursorState::new((inner_width(anchor.width), inner_height(anchor.height))),
        }
    }

    /// The whole buffer, lines separated by `\n`.
    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Cursor byte offset into the buffer.
    #[cfg(test)]
    pub fn cursor_pos(&self) -> usize {
        self.cursor.pos
    }

    /// 1-based (line, column) of the cursor, as shown in the title.
    pub fn cursor_line_col(&self) -> (usize, usize) {
        let (row, col) = row_col(&self.buffer, self.cursor.pos);
        (row + 1, col + 1)
    }

    fn insert_str(&mut self, text: &str) {
        self.buffer.insert_str(self.cursor.pos, text);
        self.cursor.pos += text.len();
    }

    /// Spaces from the cursor column to the next tab stop.
    fn tab_fill(&self) -> String {
        let (_, col) = row_col(&self.buffer, self.cursor.pos);
        let width = usize::from(self.tab_width);
        " ".repeat(width - col % width)
    }

    fn expand_tabs(&self, text: &str) -> String {
        text.replace('\t', &" ".repeat(usize::from(self.tab_width)))
    }

    /// Render scrollbar when content exceeds the visible area
    fn render_scrollbar(&self, frame: &mut Frame, area: Rect) {
        use ratatui::widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState};

        let visible = usize::from(self.cursor.viewport.1);
        let total_lines = line_count(&self.buffer);
        if visible == 0 || total_lines <= visible {
            return;
        }

        // ScrollbarState content_length is max scrollable position, not total items
        let max_scroll = total_lines - visible;

        let mut scrollbar_state = ScrollbarState::default()
            .content_length(max_scroll)
            .position(usize::from(self.cursor.row_offset));

        let scrollbar_area = Rect {
            x: area.x + area.width.saturating_sub(1),
            y: area.y + 1,
            width: 1,
            height: area.height.saturating_sub(2),
        };

        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            scrollbar_area,
            &mut scrollbar_state,
        );
    }
}

impl Component for Editor {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.cursor.viewport = (inner_width(area.width), inner_height(area.height));
        self.cursor.update_scroll(&self.buffer);

        let (line, col) = self.cursor_line_col();
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title(format!("Source (Ln {line}, Col {col})"));

        let paragraph = Paragraph::new(Text::raw(self.buffer.as_str()))
            .block(block)
            .scroll((self.cursor.row_offset, self.cursor.col_offset))
            .style(Style::default().fg(Color::Green));

        frame.render_widget(paragraph, area);
        self.render_scrollbar(frame, area);

        let (cursor_x, cursor_y) = self.cursor.screen_pos(&self.buffer, area);
        frame.set_cursor_position((cursor_x, cursor_y));
    }
}

impl EventHandler for Editor {
    type Event = EditorEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                let mut encoded = [0u8; 4];
                self.insert_str(c.encode_utf8(&mut encoded));
                Some(EditorEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                if text.is_empty() {
                    return None;
                }
                let text = self.expand_tabs(text);
                self.insert_str(&text);
                Some(EditorEvent::ContentChanged)
            }
            TuiEvent::Tab => {
                let fill = self.tab_fill();
                self.insert_str(&fill);
                Some(EditorEvent::ContentChanged)
            }
            TuiEvent::Backspace => {
                if self.cursor.pos > 0 {
                    let prev = prev_char_boundary(&self.buffer, self.cursor.pos);
                    self.buffer.drain(prev..self.cursor.pos);
                    self.cursor.pos = prev;
                    Some(EditorEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::Delete => {
                if self.cursor.pos < self.buffer.len() {
                    let next = next_char_boundary(&self.buffer, self.cursor.pos);
                    self.buffer.drain(self.cursor.pos..next);
                    Some(EditorEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorLeft => (self.cursor.pos > 0).then(|| {
                self.cursor.pos = prev_char_boundary(&self.buffer, self.cursor.pos);
                EditorEvent::CursorMoved
            }),
            TuiEvent::CursorRight => (self.cursor.pos < self.buffer.len()).then(|| {
                self.cursor.pos = next_char_boundary(&self.buffer, self.cursor.pos);
                EditorEvent::CursorMoved
            }),
            TuiEvent::CursorHome => {
                let target = line_start(&self.buffer, self.cursor.pos);
                (self.cursor.pos != target).then(|| {
                    self.cursor.pos = target;
                    EditorEvent::CursorMoved
                })
            }
            TuiEvent::CursorEnd => {
                let target = line_end(&self.buffer, self.cursor.pos);
                (self.cursor.pos != target).then(|| {
                    self.cursor.pos = target;
                    EditorEvent::CursorMoved
                })
            }
            TuiEvent::CursorUp => self
                .cursor
                .move_vertically(&self.buffer, -1)
                .then_some(EditorEvent::CursorMoved),
            TuiEvent::CursorDown => self
                .cursor
                .move_vertically(&self.buffer, 1)
                .then_some(EditorEvent::CursorMoved),
            _ => None,
        }
    }
}
