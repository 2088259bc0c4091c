//! # OutputPane Component
//!
//! Read-only view of the last published output. Text is shown verbatim:
//! whitespace and line breaks are kept, nothing is wrapped or interpreted
//! as markup. Long output scrolls inside a `ScrollView`.

use ratatui::Frame;
use ratatui::layout::{Rect, Size};
use ratatui::style::{Color, Style};
use ratatui::text::Text;
use ratatui::widgets::{Block, BorderType, Paragraph};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Scroll state for the output pane.
/// Must be persisted in the parent TuiState.
#[derive(Default)]
pub struct OutputPaneState {
    pub scroll_state: ScrollViewState,
    /// Run count of the output currently shown; a new run resets scrolling.
    shown_run: Option<u64>,
}

impl OutputPaneState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Jump back to the top when a different run's output is about to be shown.
    pub fn sync_run(&mut self, run_count: u64) {
        if self.shown_run != Some(run_count) {
            self.scroll_state.scroll_to_top();
            self.shown_run = Some(run_count);
        }
    }
}

impl EventHandler for OutputPaneState {
    type Event = (); // Scrolling is handled internally

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => self.scroll_state.scroll_up(),
            TuiEvent::ScrollDown => self.scroll_state.scroll_down(),
            TuiEvent::ScrollPageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::ScrollPageDown => self.scroll_state.scroll_page_down(),
            _ => {}
        }
        None
    }
}

/// Props: the output text. State: borrowed from `TuiState`.
pub struct OutputPane<'a> {
    pub output: &'a str,
    pub state: &'a mut OutputPaneState,
}

impl<'a> OutputPane<'a> {
    pub fn new(output: &'a str, state: &'a mut OutputPaneState) -> Self {
        Self { output, state }
    }
}

impl Component for OutputPane<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title("Output");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let text = Text::raw(self.output);
        let content_width = u16::try_from(text.width())
            .unwrap_or(u16::MAX)
            .max(inner.width);
        let content_height = u16::try_from(text.height()).unwrap_or(u16::MAX);

        let mut scroll_view = ScrollView::new(Size::new(content_width, content_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Automatic);

        scroll_view.render_widget(
            Paragraph::new(text).style(Style::default().fg(Color::White)),
            Rect::new(0, 0, content_width, content_height),
        );

        frame.render_stateful_widget(scroll_view, inner, &mut self.state.scroll_state);
    }
}
