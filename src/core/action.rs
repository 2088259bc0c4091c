//! # Actions
//!
//! Everything that can happen to the playground becomes an `Action`.
//! The app mounts? That's `Action::Start`. User hits Ctrl+R? That's
//! `Action::Run(snapshot)`.
//!
//! `update()` applies an action to the state and returns an `Effect` the
//! adapter has to carry out (seeding the editor, quitting).
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Every action is handled to completion before the next one is looked at,
//! so outputs are published in trigger order and the last run always wins.

use log::{debug, error, info, warn};

use crate::core::bridge;
use crate::core::buffer::{BufferError, SourceText, TextBuffer};
use crate::core::state::{App, DEFAULT_PROGRAM, Phase};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Mount: evaluate the default program and seed the editor.
    Start,
    /// User-triggered run with a snapshot taken at trigger time.
    Run(SourceText),
    Quit,
}

/// Work the adapter must do after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Initialize the text buffer host with this text.
    SeedBuffer(SourceText),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Start => {
            if app.is_started() {
                warn!("Start received after startup, ignoring");
                return Effect::None;
            }
            app.evaluator.setup();
            let seed = SourceText::from(DEFAULT_PROGRAM);
            let output = bridge::run(app.evaluator.as_ref(), &seed);
            info!(
                "Playground started with evaluator '{}' ({} bytes of output)",
                app.evaluator.name(),
                output.len()
            );
            app.phase = Phase::Idle { output };
            app.status_message = String::from("Ready");
            Effect::SeedBuffer(seed)
        }
        Action::Run(snapshot) => {
            if !app.is_started() {
                error!("Run received before startup, ignoring");
                return Effect::None;
            }
            if snapshot.is_empty() {
                debug!("Run #{}: empty buffer", app.run_count + 1);
            } else {
                debug!("Run #{}: {} bytes of source", app.run_count + 1, snapshot.as_str().len());
            }
            let output = bridge::run(app.evaluator.as_ref(), &snapshot);
            app.phase = Phase::Idle { output };
            app.run_count += 1;
            app.status_message = format!("Run #{}", app.run_count);
            Effect::None
        }
        Action::Quit => {
            info!("Quit requested");
            Effect::Quit
        }
    }
}

/// Handles the run trigger: reads the buffer fresh and dispatches
/// `Action::Run` with the snapshot.
pub fn trigger_run(app: &mut App, buffer: &dyn TextBuffer) -> Result<Effect, BufferError> {
    let snapshot = buffer.read_all()?;
    Ok(update(app, Action::Run(snapshot)))
}
