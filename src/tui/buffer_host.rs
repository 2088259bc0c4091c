//! # Text Buffer Host
//!
//! Owns the editing surface and its two-phase lifecycle:
//!
//! ```text
//! Uninitialized ──initialize(text, anchor)──▶ Ready(Editor)
//! ```
//!
//! The anchor is the editor's layout rectangle, which only exists after the
//! first layout pass, so initialization happens inside the first draw.
//! Initializing twice would throw away the user's edits and is refused.

use log::{info, warn};
use ratatui::layout::Rect;

use crate::core::buffer::{BufferError, SourceText, TextBuffer};
use crate::tui::components::Editor;

enum Surface {
    Uninitialized,
    Ready(Editor),
}

pub struct BufferHost {
    tab_width: u16,
    surface: Surface,
}

impl BufferHost {
    pub fn new(tab_width: u16) -> Self {
        Self {
            tab_width,
            surface: Surface::Uninitialized,
        }
    }

    /// Attach the editing surface to `anchor`, pre-populated with `initial_text`.
    pub fn initialize(&mut self, initial_text: &str, anchor: Rect) -> Result<(), BufferError> {
        if self.is_ready() {
            warn!("Refusing to re-initialize the text buffer");
            return Err(BufferError::AlreadyInitialized);
        }
        info!(
            "Text buffer attached at {}x{}+{}+{} ({} bytes)",
            anchor.width,
            anchor.height,
            anchor.x,
            anchor.y,
            initial_text.len()
        );
        self.surface = Surface::Ready(Editor::new(initial_text, anchor, self.tab_width));
        Ok(())
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.surface, Surface::Ready(_))
    }

    /// The editor, once the host is ready.
    pub fn editor_mut(&mut self) -> Option<&mut Editor> {
        match &mut self.surface {
            Surface::Ready(editor) => Some(editor),
            Surface::Uninitialized => None,
        }
    }
}

impl TextBuffer for BufferHost {
    fn read_all(&self) -> Result<SourceText, BufferError> {
        match &self.surface {
            Surface::Ready(editor) => Ok(SourceText::from(editor.text())),
            Surface::Uninitialized => Err(BufferError::Uninitialized),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::DEFAULT_PROGRAM;
    use crate::tui::component::EventHandler;
    use crate::tui::event::TuiEvent;

    fn anchor() -> Rect {
        Rect::new(0, 1, 40, 20)
    }

    #[test]
    fn test_read_before_initialize_fails_fast() {
        let host = BufferHost::new(4);
        assert!(!host.is_ready());
        assert_eq!(host.read_all(), Err(BufferError::Uninitialized));
    }

    #[test]
    fn test_initialize_seeds_exact_text() {
        let mut host = BufferHost::new(4);
        host.initialize(DEFAULT_PROGRAM, anchor()).unwrap();

        assert!(host.is_ready());
        assert_eq!(host.read_all().unwrap().as_str(), DEFAULT_PROGRAM);
    }

    #[test]
    fn test_read_all_is_idempotent() {
        let mut host = BufferHost::new(4);
        host.initialize("let x = 5;\nx", anchor()).unwrap();

        let first = host.read_all().unwrap();
        let second = host.read_all().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_read_all_ignores_cursor_position() {
        let mut host = BufferHost::new(4);
        host.initialize("ab\ncd", anchor()).unwrap();
        let editor = host.editor_mut().unwrap();
        editor.handle_event(&TuiEvent::CursorDown);
        editor.handle_event(&TuiEvent::CursorRight);

        assert_eq!(host.read_all().unwrap().as_str(), "ab\ncd");
    }

    #[test]
    fn test_second_initialize_keeps_edits() {
        let mut host = BufferHost::new(4);
        host.initialize("seed", anchor()).unwrap();
        host.editor_mut()
            .unwrap()
            .handle_event(&TuiEvent::InputChar('!'));

        let result = host.initialize("other", anchor());
        assert_eq!(result, Err(BufferError::AlreadyInitialized));
        assert_eq!(host.read_all().unwrap().as_str(), "!seed");
    }

    #[test]
    fn test_empty_buffer_reads_as_empty_string() {
        let mut host = BufferHost::new(4);
        host.initialize("", anchor()).unwrap();
        assert_eq!(host.read_all().unwrap().as_str(), "");
    }
}
