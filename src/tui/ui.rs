use log::warn;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{OutputPane, TitleBar};

const KEY_HINTS: &str = "Ctrl+R/F5 run · PgUp/PgDn scroll output · Ctrl+Q quit";

/// Split the frame into (title, editor, output, hints).
pub fn layout_areas(area: Rect) -> (Rect, Rect, Rect, Rect) {
    use Constraint::{Length, Min, Percentage};
    let [title_area, body_area, hint_area] =
        Layout::vertical([Length(1), Min(0), Length(1)]).areas(area);
    let [editor_area, output_area] =
        Layout::horizontal([Percentage(50), Percentage(50)]).areas(body_area);
    (title_area, editor_area, output_area, hint_area)
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let (title_area, editor_area, output_area, hint_area) = layout_areas(frame.area());

    // The editor's rectangle only exists once layout has run, so the
    // pending seed is attached here on the first frame after startup.
    if let Some(seed) = tui.pending_seed.take()
        && let Err(e) = tui.buffer_host.initialize(seed.as_str(), editor_area)
    {
        warn!("Could not seed text buffer: {}", e);
    }

    TitleBar::new(
        app.evaluator_name().to_string(),
        app.status_message.clone(),
        app.run_count,
    )
    .render(frame, title_area);

    match tui.buffer_host.editor_mut() {
        Some(editor) => editor.render(frame, editor_area),
        None => draw_placeholder(frame, editor_area),
    }

    tui.output_pane.sync_run(app.run_count);
    OutputPane::new(app.output().unwrap_or(""), &mut tui.output_pane).render(frame, output_area);

    frame.render_widget(
        Span::styled(
            KEY_HINTS,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM),
        ),
        hint_area,
    );
}

fn draw_placeholder(frame: &mut Frame, area: Rect) {
    let placeholder = Paragraph::new("Loading...")
        .style(Style::default().fg(Color::DarkGray))
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .title("Source"),
        );
    frame.render_widget(placeholder, area);
}
