//! # TitleBar Component
//!
//! Top status bar: which evaluator is loaded, how many runs happened, and
//! the controller's status message.
//!
//! ## Conditional Formatting
//!
//! 1. **Status message**: `"Playground (evaluator: reference) | runs: 2 | Run #2"`
//! 2. **Default**: `"Playground (evaluator: reference) | runs: 0"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

/// Top status bar. All fields are props from the parent.
pub struct TitleBar {
    pub evaluator_name: String,
    pub status_message: String,
    pub run_count: u64,
}

impl TitleBar {
    pub fn new(evaluator_name: String, status_message: String, run_count: u64) -> Self {
        Self {
            evaluator_name,
            status_message,
            run_count,
        }
    }

    fn title_text(&self) -> String {
        let base = format!(
            "Playground (evaluator: {}) | runs: {}",
            self.evaluator_name, self.run_count
        );
        if self.status_message.is_empty() {
            base
        } else {
            format!("{base} | {}", self.status_message)
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Span::raw(self.title_text()), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                title_bar.render(f, f.area());
            })
            .unwrap();

        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_title_bar_with_status_message() {
        let mut title_bar = TitleBar::new("reference".to_string(), "Run #3".to_string(), 3);
        let text = rendered(&mut title_bar);

        assert!(text.contains("Playground (evaluator: reference)"));
        assert!(text.contains("runs: 3"));
        assert!(text.contains("| Run #3"));
    }

    #[test]
    fn test_title_bar_default_no_status() {
        let mut title_bar = TitleBar::new("reference".to_string(), String::new(), 0);
        let text = rendered(&mut title_bar);

        assert!(text.contains("runs: 0"));
        assert_eq!(text.matches('|').count(), 1);
    }
}
