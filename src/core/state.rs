//! # Application State
//!
//! The playground controller's state. No terminal types live here;
//! presentation state belongs to the `tui` module.
//!
//! ```text
//! App
//! ├── evaluator: Arc<dyn Evaluator>   // injected interpreter
//! ├── phase: Phase                    // Uninitialized → Idle { output }
//! ├── status_message: String          // title bar text
//! └── run_count: u64                  // completed user runs
//! ```
//!
//! State changes only happen through `update(app, action)` in action.rs.

use std::sync::Arc;

use crate::core::evaluator::Evaluator;

/// Seeds the editor and the first output on startup.
pub const DEFAULT_PROGRAM: &str = "let a = 1;\nlet mut b;\nb = &a;\nlet c = *b;";

/// Controller lifecycle. There is no terminal state and no "running" state:
/// evaluation completes inside the handler that triggered it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Uninitialized,
    Idle { output: String },
}

pub struct App {
    pub evaluator: Arc<dyn Evaluator>,
    pub phase: Phase,
    pub status_message: String,
    pub run_count: u64,
}

impl App {
    pub fn new(evaluator: Arc<dyn Evaluator>) -> Self {
        Self {
            evaluator,
            phase: Phase::Uninitialized,
            status_message: String::from("Starting..."),
            run_count: 0,
        }
    }

    /// The currently displayed output, if the controller has started.
    pub fn output(&self) -> Option<&str> {
        match &self.phase {
            Phase::Idle { output } => Some(output),
            Phase::Uninitialized => None,
        }
    }

    pub fn is_started(&self) -> bool {
        matches!(self.phase, Phase::Idle { .. })
    }

    pub fn evaluator_name(&self) -> &str {
        self.evaluator.name()
    }
}
