//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Startup
//!
//! `Action::Start` evaluates the default program before the first frame.
//! Its `Effect::SeedBuffer` is parked in `TuiState::pending_seed` and
//! attached to the editor's rectangle by the first `draw()`.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps up to 500ms and only redraws after
//! an event or a terminal resize.
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor because
//! ratatui's `set_cursor_position` resets the terminal's blink timer on every
//! `draw()` call.

mod buffer_host;
mod component;
mod components;
mod event;
mod ui;

use log::{info, warn};
use std::io::stdout;
use std::sync::Arc;
use std::time::Duration;

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;

use crate::core::action::{Action, Effect, trigger_run, update};
use crate::core::buffer::SourceText;
use crate::core::config::ResolvedConfig;
use crate::core::evaluator::Evaluator;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::OutputPaneState;
use crate::tui::event::{poll_event_immediate, poll_event_timeout};

pub use crate::tui::buffer_host::BufferHost;
pub use crate::tui::event::TuiEvent;

const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub buffer_host: BufferHost,
    pub output_pane: OutputPaneState,
    /// Startup text waiting for the first layout pass.
    pub pending_seed: Option<SourceText>,
}

impl TuiState {
    pub fn new(tab_width: u16) -> Self {
        Self {
            buffer_host: BufferHost::new(tab_width),
            output_pane: OutputPaneState::new(),
            pending_seed: None,
        }
    }

    /// Carry out an effect returned by `update()`.
    pub fn apply(&mut self, effect: Effect) -> bool {
        match effect {
            Effect::SeedBuffer(text) => {
                self.pending_seed = Some(text);
                false
            }
            Effect::Quit => true,
            Effect::None => false,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // The protocol is ignored by terminals that don't support it
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!(
            "Terminal modes enabled (mouse, bracketed paste, steady block cursor, keyboard enhancement)"
        );
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableMouseCapture,
            DisableBracketedPaste,
            Hide
        );
    }
}

/// Route one input event. Returns the effect the loop must act on.
pub fn handle_event(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    match event {
        TuiEvent::ForceQuit => update(app, Action::Quit),
        TuiEvent::Run => match trigger_run(app, &tui.buffer_host) {
            Ok(effect) => {
                tui.output_pane.sync_run(app.run_count);
                effect
            }
            Err(e) => {
                warn!("Run ignored: {}", e);
                app.status_message = format!("Not ready: {e}");
                Effect::None
            }
        },
        TuiEvent::ScrollUp
        | TuiEvent::ScrollDown
        | TuiEvent::ScrollPageUp
        | TuiEvent::ScrollPageDown => {
            tui.output_pane.handle_event(&event);
            Effect::None
        }
        TuiEvent::Resize => Effect::None,
        _ => {
            // Edits stay inside the editor until the next run reads them.
            if let Some(editor) = tui.buffer_host.editor_mut() {
                editor.handle_event(&event);
            }
            Effect::None
        }
    }
}

pub fn run(config: ResolvedConfig, evaluator: Arc<dyn Evaluator>) -> std::io::Result<()> {
    let mut app = App::new(evaluator);
    let mut tui = TuiState::new(config.tab_width);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new()?;

    let effect = update(&mut app, Action::Start);
    tui.apply(effect);

    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(IDLE_POLL);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain all pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let effect = handle_event(&mut app, &mut tui, event);
            if tui.apply(effect) {
                should_quit = true;
                break;
            }
        }

        if should_quit {
            break;
        }
    }

    info!("Exiting after {} runs", app.run_count);
    ratatui::restore();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::buffer::TextBuffer;
    use crate::core::state::DEFAULT_PROGRAM;
    use crate::test_support::{RecordingEvaluator, test_app};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    /// Start the app and run the first frame, like `run()` does.
    fn started() -> (App, TuiState, Arc<RecordingEvaluator>) {
        let (mut app, evaluator) = test_app();
        let mut tui = TuiState::new(4);
        let effect = update(&mut app, Action::Start);
        tui.apply(effect);

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| ui::draw_ui(f, &app, &mut tui)).unwrap();
        (app, tui, evaluator)
    }

    fn type_text(app: &mut App, tui: &mut TuiState, text: &str) {
        for c in text.chars() {
            handle_event(app, tui, TuiEvent::InputChar(c));
        }
    }

    #[test]
    fn test_startup_seeds_and_publishes_default_output() {
        let (app, tui, evaluator) = started();

        assert_eq!(tui.buffer_host.read_all().unwrap().as_str(), DEFAULT_PROGRAM);
        let expected_input = format!("{{{DEFAULT_PROGRAM}}}");
        assert_eq!(evaluator.calls(), vec![expected_input.clone()]);
        assert_eq!(
            app.output(),
            Some(RecordingEvaluator::reply_for(&expected_input).as_str())
        );
    }

    #[test]
    fn test_edits_do_not_evaluate() {
        let (mut app, mut tui, evaluator) = started();
        type_text(&mut app, &mut tui, "x");
        handle_event(&mut app, &mut tui, TuiEvent::Backspace);
        handle_event(&mut app, &mut tui, TuiEvent::CursorDown);

        assert_eq!(evaluator.calls().len(), 1);
        assert_eq!(app.run_count, 0);
    }

    #[test]
    fn test_run_evaluates_current_buffer() {
        let (mut app, mut tui, evaluator) = started();
        type_text(&mut app, &mut tui, "// ");

        let effect = handle_event(&mut app, &mut tui, TuiEvent::Run);

        assert_eq!(effect, Effect::None);
        let expected_input = format!("{{// {DEFAULT_PROGRAM}}}");
        assert_eq!(evaluator.calls().last(), Some(&expected_input));
        assert_eq!(
            app.output(),
            Some(RecordingEvaluator::reply_for(&expected_input).as_str())
        );
        assert_eq!(app.run_count, 1);
    }

    #[test]
    fn test_last_run_wins() {
        let (mut app, mut tui, evaluator) = started();

        type_text(&mut app, &mut tui, "1");
        handle_event(&mut app, &mut tui, TuiEvent::Run);
        type_text(&mut app, &mut tui, "2");
        handle_event(&mut app, &mut tui, TuiEvent::Run);

        let calls = evaluator.calls();
        assert_eq!(calls.len(), 3);
        assert_eq!(calls[1], format!("{{1{DEFAULT_PROGRAM}}}"));
        assert_eq!(calls[2], format!("{{21{DEFAULT_PROGRAM}}}"));
        assert_eq!(
            app.output(),
            Some(RecordingEvaluator::reply_for(&calls[2]).as_str())
        );
    }

    #[test]
    fn test_run_before_first_frame_is_ignored() {
        let (mut app, evaluator) = test_app();
        let mut tui = TuiState::new(4);
        let effect = update(&mut app, Action::Start);
        tui.apply(effect);

        let effect = handle_event(&mut app, &mut tui, TuiEvent::Run);

        assert_eq!(effect, Effect::None);
        assert_eq!(evaluator.calls().len(), 1);
        assert_eq!(app.run_count, 0);
        assert!(app.status_message.starts_with("Not ready"));
    }

    #[test]
    fn test_run_on_empty_buffer_sends_empty_block() {
        let (mut app, mut tui, evaluator) = started();
        handle_event(&mut app, &mut tui, TuiEvent::CursorEnd);
        for _ in 0..DEFAULT_PROGRAM.len() {
            handle_event(&mut app, &mut tui, TuiEvent::CursorDown);
            handle_event(&mut app, &mut tui, TuiEvent::CursorEnd);
        }
        for _ in 0..DEFAULT_PROGRAM.len() {
            handle_event(&mut app, &mut tui, TuiEvent::Backspace);
        }
        assert_eq!(tui.buffer_host.read_all().unwrap().as_str(), "");

        handle_event(&mut app, &mut tui, TuiEvent::Run);
        assert_eq!(evaluator.calls().last().map(String::as_str), Some("{}"));
    }

    #[test]
    fn test_force_quit_returns_quit() {
        let (mut app, mut tui, _) = started();
        let effect = handle_event(&mut app, &mut tui, TuiEvent::ForceQuit);
        assert!(tui.apply(effect));
    }

    #[test]
    fn test_scroll_events_do_not_touch_buffer() {
        let (mut app, mut tui, _) = started();
        handle_event(&mut app, &mut tui, TuiEvent::ScrollDown);
        handle_event(&mut app, &mut tui, TuiEvent::ScrollPageUp);
        assert_eq!(tui.buffer_host.read_all().unwrap().as_str(), DEFAULT_PROGRAM);
    }
}
